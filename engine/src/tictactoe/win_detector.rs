use super::board::Board;
use super::types::{Cell, GameStatus, Player, WinningLine};

/// Rows, then columns, then diagonals.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(line) = check_win_with_line(board) {
        return GameStatus::Won(line.player);
    }

    if board.is_full() {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

/// First completed line in [`WIN_LINES`] order.
pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    let cells = board.cells();
    WIN_LINES.iter().find_map(|&[a, b, c]| match cells[a] {
        Cell::Marked(player) if cells[b] == cells[a] && cells[c] == cells[a] => {
            Some(WinningLine::new(player, [a, b, c]))
        }
        _ => None,
    })
}

/// Whether marking `index` for `player` wins the game for them. Cells that
/// cannot be marked never complete a line.
pub(crate) fn completes_line(board: &Board, index: usize, player: Player) -> bool {
    board.validate_move(index).is_ok()
        && evaluate(&board.with_mark(index, player)) == GameStatus::Won(player)
}
