mod board;
mod bot_controller;
mod optimality;
mod session;
mod settings;
mod types;
mod win_detector;

pub use board::{Board, BoardParseError};
pub use bot_controller::{MoveChoice, SHARP_PROBABILITY, Strategy, calculate_move};
pub use optimality::{Advice, Urgency, advise, optimal_moves};
pub use session::{
    GameSession, HumanMoveOutcome, OpponentMoveOutcome, SessionSnapshot, SessionState,
    StartOutcome,
};
pub use settings::SessionSettings;
pub use types::{BOARD_SIDE, CELL_COUNT, Cell, FirstPlayerMode, GameStatus, Player, WinningLine};
pub use win_detector::{WIN_LINES, check_win_with_line, evaluate};
