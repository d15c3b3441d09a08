use std::error::Error;
use std::fmt::Display;
use std::io::{self, Write};

use tictactoe_engine::tictactoe::{Advice, GameSession, SessionState};
use tictactoe_engine::{SessionRng, log};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

use crate::commentary;
use crate::pacing::PacingConfig;
use crate::player_name::PlayerName;
use crate::render::render_board;

pub struct PlayOptions {
    pub pacing: PacingConfig,
    pub ask_name: bool,
}

pub struct Console<R, W> {
    lines: Lines<R>,
    output: W,
}

impl<R: AsyncBufRead + Unpin, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            lines: input.lines(),
            output,
        }
    }

    pub fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    /// `None` once the input is closed.
    pub async fn prompt(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;
        let line = self.lines.next_line().await?;
        Ok(line.map(|line| line.trim().to_string()))
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GameEnd {
    Finished,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RematchAnswer {
    Rematch,
    Pause,
    Quit,
    Unknown,
}

fn parse_rematch(answer: &str) -> RematchAnswer {
    match answer.to_ascii_lowercase().as_str() {
        "rematch" | "r" | "yes" | "y" => RematchAnswer::Rematch,
        "pause" | "p" => RematchAnswer::Pause,
        "quit" | "q" | "no" | "n" => RematchAnswer::Quit,
        _ => RematchAnswer::Unknown,
    }
}

fn parse_cell(input: &str) -> Option<usize> {
    input.parse().ok()
}

fn describe_advice(advice: &Advice) -> String {
    let cells = advice
        .moves
        .iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("Best cells ({}): {}", advice.urgency, cells)
}

pub async fn run<R, W>(
    session: &GameSession,
    options: &PlayOptions,
    rng: &mut SessionRng,
    console: &mut Console<R, W>,
) -> Result<(), Box<dyn Error>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    console.say("Hello! I'm here to play Tic-Tac-Toe with you.")?;

    let Some(answer) = console.prompt("Do you want to play a game? (yes/no): ").await? else {
        return Ok(());
    };
    if !matches!(answer.to_ascii_lowercase().as_str(), "yes" | "y") {
        console.say("Alright! Come back when you want to play!")?;
        return Ok(());
    }
    console.say("Great! Let's play!")?;

    if options.ask_name {
        let Some(name) = ask_name(console).await? else {
            return Ok(());
        };
        console.say(format!("Nice to meet you, {}!", name.as_str()))?;
    }

    loop {
        if play_game(session, options, rng, console).await? == GameEnd::Quit {
            break;
        }

        let rematch = loop {
            let Some(answer) = console
                .prompt("Type rematch to play again, pause to take a break, or quit: ")
                .await?
            else {
                break false;
            };
            match parse_rematch(&answer) {
                RematchAnswer::Rematch => {
                    console.say("Great! It's a rematch")?;
                    break true;
                }
                RematchAnswer::Pause => {
                    console.say(
                        "Ok! I'll be here if you want to play again soon. If not just type quit",
                    )?;
                }
                RematchAnswer::Quit => break false,
                RematchAnswer::Unknown => console.say("Please type rematch, pause or quit.")?,
            }
        };
        if !rematch {
            break;
        }
    }

    console.say("Alright! See you next time")?;
    Ok(())
}

async fn ask_name<R, W>(console: &mut Console<R, W>) -> io::Result<Option<PlayerName>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    loop {
        let Some(input) = console.prompt("What's your name? ").await? else {
            return Ok(None);
        };
        match PlayerName::parse(&input) {
            Ok(name) => return Ok(Some(name)),
            Err(e) => console.say(e)?,
        }
    }
}

async fn play_game<R, W>(
    session: &GameSession,
    options: &PlayOptions,
    rng: &mut SessionRng,
    console: &mut Console<R, W>,
) -> Result<GameEnd, Box<dyn Error>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let start = session.start();
    console.say(commentary::first_mover_announcement(start.first_mover))?;

    loop {
        let snapshot = session.snapshot();
        if let Some(player) = snapshot.state.to_move() {
            console.say(commentary::turn_announcement(player))?;
        }
        match snapshot.state {
            SessionState::HumanTurn => {
                console.say(render_board(&snapshot.board, snapshot.last_move))?;

                let Some(input) = console.prompt("Your move (0-8, hint, quit): ").await? else {
                    return Ok(GameEnd::Quit);
                };
                match input.to_ascii_lowercase().as_str() {
                    "quit" => return Ok(GameEnd::Quit),
                    "hint" => {
                        match session.advise() {
                            Ok(advice) => console.say(describe_advice(&advice))?,
                            Err(e) => console.say(e)?,
                        }
                        continue;
                    }
                    _ => {}
                }

                let Some(index) = parse_cell(&input) else {
                    console.say("Please type a cell number from 0 to 8.")?;
                    continue;
                };
                match session.apply_human_move(index) {
                    Ok(outcome) => {
                        console.say(commentary::optimality_comment(outcome.optimal, rng))?;
                        if !outcome.optimal
                            && let Some(hint) = commentary::missed_opportunity(outcome.urgency)
                        {
                            console.say(hint)?;
                        }
                    }
                    Err(e) => console.say(e)?,
                }
            }
            SessionState::OpponentTurn => {
                // Paced outside the session so the lock is never held idle.
                let candidates = snapshot.board.available_moves().len();
                if let Some(delay) = options.pacing.thinking_delay(candidates, rng) {
                    tokio::time::sleep(delay).await;
                }

                match session.apply_opponent_move() {
                    Ok(outcome) => console.say(format!("I'll take cell {}.", outcome.index))?,
                    Err(e) => log!("Opponent move failed: {}", e),
                }
            }
            SessionState::Finished(status) => {
                console.say(render_board(&snapshot.board, snapshot.last_move))?;
                if let Some(announcement) = commentary::result_announcement(status) {
                    console.say(announcement)?;
                }
                return Ok(GameEnd::Finished);
            }
            SessionState::NotStarted => return Ok(GameEnd::Quit),
        }
    }
}
