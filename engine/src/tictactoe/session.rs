use std::sync::{Mutex, MutexGuard, PoisonError};

use super::board::Board;
use super::bot_controller::{Strategy, calculate_move};
use super::optimality::{Advice, Urgency, advise};
use super::settings::SessionSettings;
use super::types::{FirstPlayerMode, GameStatus, Player};
use super::win_detector::evaluate;
use crate::error::Operation;
use crate::{EngineError, RandomSource, SessionRng, log};

#[derive(Clone, Copy, Debug, PartialEq, Eq, derive_more::Display)]
pub enum SessionState {
    #[display("not started")]
    NotStarted,
    #[display("waiting for the human")]
    HumanTurn,
    #[display("waiting for the opponent")]
    OpponentTurn,
    #[display("finished ({})", _0)]
    Finished(GameStatus),
}

impl SessionState {
    pub fn is_finished(&self) -> bool {
        matches!(self, SessionState::Finished(_))
    }

    pub fn to_move(&self) -> Option<Player> {
        match self {
            SessionState::HumanTurn => Some(Player::Human),
            SessionState::OpponentTurn => Some(Player::Opponent),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StartOutcome {
    pub board: Board,
    pub first_mover: Player,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HumanMoveOutcome {
    pub board: Board,
    pub status: GameStatus,
    pub index: usize,
    /// Whether `index` was among the best cells on the board before the move.
    pub optimal: bool,
    pub urgency: Urgency,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OpponentMoveOutcome {
    pub board: Board,
    pub status: GameStatus,
    pub index: usize,
    pub candidates: Vec<usize>,
    pub strategy: Strategy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub state: SessionState,
    pub board: Board,
    pub last_move: Option<usize>,
}

/// Board plus turn marker of the game in play. The status is never stored;
/// it is re-derived from the board on every read.
#[derive(Clone, Copy, Debug)]
struct Table {
    board: Board,
    turn: Player,
    last_move: Option<usize>,
}

impl Table {
    fn new(first_mover: Player) -> Self {
        Self {
            board: Board::new(),
            turn: first_mover,
            last_move: None,
        }
    }

    fn state(&self) -> SessionState {
        match evaluate(&self.board) {
            GameStatus::InProgress => match self.turn {
                Player::Human => SessionState::HumanTurn,
                Player::Opponent => SessionState::OpponentTurn,
            },
            status => SessionState::Finished(status),
        }
    }

    fn place(&mut self, index: usize, player: Player) -> Result<GameStatus, EngineError> {
        self.board.place(index, player)?;
        self.last_move = Some(index);
        self.turn = player.opponent();
        Ok(evaluate(&self.board))
    }
}

struct SessionInner<R> {
    table: Option<Table>,
    rng: R,
}

/// The single live game.
///
/// Every operation takes the session mutex for its whole
/// read-validate-write sequence, so concurrent callers are serialized and a
/// refused call leaves the game exactly as it was. Nothing inside the lock
/// waits on I/O.
pub struct GameSession<R = SessionRng> {
    settings: SessionSettings,
    inner: Mutex<SessionInner<R>>,
}

impl GameSession<SessionRng> {
    pub fn new(settings: SessionSettings) -> Self {
        let rng = settings.create_rng();
        log!("Session created with seed {}", rng.seed());
        Self::with_rng(settings, rng)
    }
}

impl<R: RandomSource> GameSession<R> {
    pub fn with_rng(settings: SessionSettings, rng: R) -> Self {
        Self {
            settings,
            inner: Mutex::new(SessionInner { table: None, rng }),
        }
    }

    /// Discards any game in play and deals a fresh board.
    pub fn start(&self) -> StartOutcome {
        let mut inner = self.lock();

        let first_mover = match self.settings.first_player {
            FirstPlayerMode::Random => {
                if inner.rng.random_bool() {
                    Player::Human
                } else {
                    Player::Opponent
                }
            }
            FirstPlayerMode::Human => Player::Human,
            FirstPlayerMode::Opponent => Player::Opponent,
        };

        let table = Table::new(first_mover);
        inner.table = Some(table);
        log!("Game started, {} moves first", first_mover);

        StartOutcome {
            board: table.board,
            first_mover,
        }
    }

    pub fn apply_human_move(&self, index: usize) -> Result<HumanMoveOutcome, EngineError> {
        let mut inner = self.lock();

        let table = table_for(&mut inner.table, Operation::HumanMove, SessionState::HumanTurn)?;
        table
            .board
            .validate_move(index)
            .inspect_err(|e| log!("Human move at {} rejected: {}", index, e))?;

        // Judged on the board as it stood before this mark.
        let advice = advise(&table.board);
        let optimal = advice.contains(index);

        let status = table.place(index, Player::Human)?;
        log!(
            "Human played {} ({}, {}), board {}, {}",
            index,
            if optimal { "optimal" } else { "not optimal" },
            advice.urgency,
            table.board,
            status
        );

        Ok(HumanMoveOutcome {
            board: table.board,
            status,
            index,
            optimal,
            urgency: advice.urgency,
        })
    }

    pub fn apply_opponent_move(&self) -> Result<OpponentMoveOutcome, EngineError> {
        let mut guard = self.lock();
        let inner = &mut *guard;

        let table = table_for(
            &mut inner.table,
            Operation::OpponentMove,
            SessionState::OpponentTurn,
        )?;
        let choice = calculate_move(&table.board, &mut inner.rng)
            .inspect_err(|e| log!("Opponent could not move: {}", e))?;

        let status = table.place(choice.index, Player::Opponent)?;
        log!(
            "Opponent played {} by {} out of {} candidates, board {}, {}",
            choice.index,
            choice.strategy,
            choice.candidates.len(),
            table.board,
            status
        );

        Ok(OpponentMoveOutcome {
            board: table.board,
            status,
            index: choice.index,
            candidates: choice.candidates,
            strategy: choice.strategy,
        })
    }

    /// Best cells for the human right now. Read-only.
    pub fn advise(&self) -> Result<Advice, EngineError> {
        let mut inner = self.lock();
        let table = table_for(&mut inner.table, Operation::Advice, SessionState::HumanTurn)?;
        Ok(advise(&table.board))
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let inner = self.lock();
        match inner.table {
            Some(table) => SessionSnapshot {
                state: table.state(),
                board: table.board,
                last_move: table.last_move,
            },
            None => SessionSnapshot {
                state: SessionState::NotStarted,
                board: Board::new(),
                last_move: None,
            },
        }
    }

    pub fn state(&self) -> SessionState {
        self.snapshot().state
    }

    // Each critical section validates everything before its single write, so
    // the data behind a poisoned lock is still consistent.
    fn lock(&self) -> MutexGuard<'_, SessionInner<R>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[cfg(test)]
    fn resume(&self, board: Board, turn: Player) {
        self.lock().table = Some(Table {
            board,
            turn,
            last_move: None,
        });
    }
}

fn table_for(
    table: &mut Option<Table>,
    operation: Operation,
    expected: SessionState,
) -> Result<&mut Table, EngineError> {
    let state = table.as_ref().map_or(SessionState::NotStarted, Table::state);
    match table {
        Some(table) if state == expected => Ok(table),
        _ => {
            log!("{} refused while {}", operation, state);
            Err(EngineError::IllegalState { operation, state })
        }
    }
}
