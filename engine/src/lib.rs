//! Game engine for a human-versus-opponent tic-tac-toe coach.
//!
//! [`tictactoe::GameSession`] owns the only live board. It decides the
//! opponent's replies and rates each human move against the best cells that
//! were open at the time.

pub mod config;
pub mod error;
pub mod logger;
pub mod session_rng;
pub mod tictactoe;

pub use error::{EngineError, Operation};
pub use session_rng::{RandomSource, SessionRng};
