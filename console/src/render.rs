use tictactoe_engine::tictactoe::{BOARD_SIDE, Board, Cell, check_win_with_line};

const ROW_SEPARATOR: &str = "---+---+---";

/// Marks show as `X`/`O`; open cells show their index so the player knows
/// what to type. A winning line is bracketed as `[X]` and the most recent
/// mark otherwise as `(X)`.
pub fn render_board(board: &Board, last_move: Option<usize>) -> String {
    let winning_line = check_win_with_line(board);

    board
        .rows()
        .enumerate()
        .map(|(row_index, row)| {
            row.iter()
                .enumerate()
                .map(|(column, cell)| {
                    let index = row_index * BOARD_SIDE + column;
                    match cell {
                        Cell::Empty => format!(" {} ", index),
                        Cell::Marked(player) => {
                            if winning_line.is_some_and(|line| line.contains(index)) {
                                format!("[{}]", player.symbol())
                            } else if last_move == Some(index) {
                                format!("({})", player.symbol())
                            } else {
                                format!(" {} ", player.symbol())
                            }
                        }
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect::<Vec<_>>()
        .join(&format!("\n{}\n", ROW_SEPARATOR))
}
