mod commentary;
mod config;
mod game_loop;
mod pacing;
mod player_name;
mod render;

use clap::{Parser, ValueEnum};
use game_loop::{Console, PlayOptions};
use pacing::PacingConfig;
use tictactoe_engine::tictactoe::{FirstPlayerMode, GameSession};
use tictactoe_engine::{SessionRng, log, logger};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FirstArg {
    Random,
    Human,
    Opponent,
}

impl From<FirstArg> for FirstPlayerMode {
    fn from(value: FirstArg) -> Self {
        match value {
            FirstArg::Random => FirstPlayerMode::Random,
            FirstArg::Human => FirstPlayerMode::Human,
            FirstArg::Opponent => FirstPlayerMode::Opponent,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe_console")]
struct Args {
    /// Path to the YAML config; defaults to tictactoe_console.yaml next to the binary.
    #[arg(long)]
    config: Option<String>,

    #[arg(long)]
    seed: Option<u64>,

    /// Who places the first mark.
    #[arg(long, value_enum)]
    first: Option<FirstArg>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Print engine log lines alongside the game.
    #[arg(long)]
    verbose: bool,

    /// Skip the opponent's thinking pauses.
    #[arg(long)]
    no_delay: bool,
}

// Keeps commentary draws apart from the opponent's draws under a fixed seed.
const PRESENTATION_SEED_SALT: u64 = 0x5eed_c0de;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.verbose {
        let prefix = if args.use_log_prefix {
            Some("Console".to_string())
        } else {
            None
        };
        logger::init_logger(prefix);
    }

    let mut config = config::get_config_manager(args.config.as_deref()).get_config()?;
    if let Some(seed) = args.seed {
        config.session.seed = Some(seed);
    }
    if let Some(first) = args.first {
        config.session.first_player = first.into();
    }
    if args.no_delay {
        config.pacing = PacingConfig::disabled();
    }
    log!(
        "Starting console: first player {}, seed {:?}",
        config.session.first_player,
        config.session.seed
    );

    let session = GameSession::new(config.session);
    let mut rng = match config.session.seed {
        Some(seed) => SessionRng::new(seed ^ PRESENTATION_SEED_SALT),
        None => SessionRng::from_random(),
    };
    let options = PlayOptions {
        pacing: config.pacing,
        ask_name: config.ask_name,
    };

    let mut console = Console::new(
        tokio::io::BufReader::new(tokio::io::stdin()),
        std::io::stdout(),
    );
    game_loop::run(&session, &options, &mut rng, &mut console).await?;

    log!("Console shut down");
    Ok(())
}
