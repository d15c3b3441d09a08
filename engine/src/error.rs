use crate::tictactoe::SessionState;

#[derive(Clone, Copy, Debug, PartialEq, Eq, derive_more::Display)]
pub enum Operation {
    #[display("human move")]
    HumanMove,
    #[display("opponent move")]
    OpponentMove,
    #[display("move advice")]
    Advice,
}

/// Every way an engine call can be refused. None of them change the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    #[display("Cell index {} is outside the board (0..9)", _0)]
    OutOfRange(usize),

    #[display("Cell {} is already marked", _0)]
    CellOccupied(usize),

    #[display("A {} is not allowed while the game is {}", operation, state)]
    IllegalState {
        operation: Operation,
        state: SessionState,
    },

    #[display("There are no empty cells left to play")]
    NoMovesAvailable,
}

impl std::error::Error for EngineError {}
