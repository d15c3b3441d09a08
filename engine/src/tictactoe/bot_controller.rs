use super::board::Board;
use super::types::Player;
use super::win_detector::completes_line;
use crate::{EngineError, RandomSource};

/// Chance that the opponent looks for a winning or blocking move at all.
pub const SHARP_PROBABILITY: f64 = 0.8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, derive_more::Display)]
pub enum Strategy {
    #[display("win")]
    Win,
    #[display("block")]
    Block,
    #[display("random")]
    Random,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveChoice {
    pub index: usize,
    /// Empty cells at decision time, ascending.
    pub candidates: Vec<usize>,
    pub strategy: Strategy,
}

/// Picks the opponent's next cell.
///
/// One uniform draw decides whether this turn is sharp. A sharp turn takes
/// the first immediate win, else the first cell that stops the human from
/// winning next. Everything else is a uniform pick among the empty cells.
pub fn calculate_move(
    board: &Board,
    rng: &mut impl RandomSource,
) -> Result<MoveChoice, EngineError> {
    let candidates = board.available_moves();
    if candidates.is_empty() {
        return Err(EngineError::NoMovesAvailable);
    }

    if rng.random_unit() < SHARP_PROBABILITY
        && let Some((index, strategy)) = find_sharp_move(board, &candidates)
    {
        return Ok(MoveChoice {
            index,
            candidates,
            strategy,
        });
    }

    let index = candidates[rng.random_index(candidates.len())];
    Ok(MoveChoice {
        index,
        candidates,
        strategy: Strategy::Random,
    })
}

fn find_sharp_move(board: &Board, candidates: &[usize]) -> Option<(usize, Strategy)> {
    if let Some(index) = find_winning_move(board, Player::Opponent, candidates) {
        return Some((index, Strategy::Win));
    }

    find_winning_move(board, Player::Human, candidates).map(|index| (index, Strategy::Block))
}

fn find_winning_move(board: &Board, player: Player, candidates: &[usize]) -> Option<usize> {
    candidates
        .iter()
        .copied()
        .find(|&index| completes_line(board, index, player))
}
