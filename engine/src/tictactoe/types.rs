use derive_more::Display;
use serde::{Deserialize, Serialize};

pub const CELL_COUNT: usize = 9;
pub const BOARD_SIDE: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Player {
    #[display("human")]
    Human,
    #[display("opponent")]
    Opponent,
}

impl Player {
    pub fn symbol(&self) -> char {
        match self {
            Player::Human => 'X',
            Player::Opponent => 'O',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Player> {
        match symbol.to_ascii_uppercase() {
            'X' => Some(Player::Human),
            'O' => Some(Player::Opponent),
            _ => None,
        }
    }

    pub fn opponent(&self) -> Player {
        match self {
            Player::Human => Player::Opponent,
            Player::Opponent => Player::Human,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Marked(Player),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn symbol(&self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Marked(player) => player.symbol(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum GameStatus {
    #[display("in progress")]
    InProgress,
    #[display("{} won", _0)]
    Won(Player),
    #[display("draw")]
    Draw,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(*player),
            _ => None,
        }
    }
}

/// How `start()` picks the first mover.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirstPlayerMode {
    #[default]
    #[display("random")]
    Random,
    #[display("human")]
    Human,
    #[display("opponent")]
    Opponent,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WinningLine {
    pub player: Player,
    pub cells: [usize; 3],
}

impl WinningLine {
    pub fn new(player: Player, cells: [usize; 3]) -> Self {
        Self { player, cells }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(&index)
    }
}
