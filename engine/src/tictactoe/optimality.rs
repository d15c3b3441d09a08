use std::collections::BTreeSet;

use super::board::Board;
use super::types::Player;
use super::win_detector::completes_line;

/// Why the cells in an [`Advice`] are the best ones for the human.
#[derive(Clone, Copy, Debug, PartialEq, Eq, derive_more::Display)]
pub enum Urgency {
    /// The human can win right now.
    #[display("win")]
    Win,
    /// The opponent would win next turn unless one of these cells is taken.
    #[display("block")]
    Block,
    /// Nothing is at stake; every empty cell is as good as any other.
    #[display("open")]
    Open,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Advice {
    pub urgency: Urgency,
    pub moves: BTreeSet<usize>,
}

impl Advice {
    pub fn contains(&self, index: usize) -> bool {
        self.moves.contains(&index)
    }
}

/// Best cells for the human on `board`, assuming the human moves next.
///
/// Strict priority without partial credit: winning cells if any exist,
/// otherwise cells that deny the opponent an immediate win, otherwise
/// every empty cell. A full board yields an empty `Open` set.
pub fn advise(board: &Board) -> Advice {
    let candidates = board.available_moves();

    let wins = cells_completing_line(board, &candidates, Player::Human);
    if !wins.is_empty() {
        return Advice {
            urgency: Urgency::Win,
            moves: wins,
        };
    }

    let blocks = cells_completing_line(board, &candidates, Player::Opponent);
    if !blocks.is_empty() {
        return Advice {
            urgency: Urgency::Block,
            moves: blocks,
        };
    }

    Advice {
        urgency: Urgency::Open,
        moves: candidates.into_iter().collect(),
    }
}

pub fn optimal_moves(board: &Board) -> BTreeSet<usize> {
    advise(board).moves
}

fn cells_completing_line(board: &Board, candidates: &[usize], player: Player) -> BTreeSet<usize> {
    candidates
        .iter()
        .copied()
        .filter(|&index| completes_line(board, index, player))
        .collect()
}
