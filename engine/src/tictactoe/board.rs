use std::fmt;
use std::str::FromStr;

use super::types::{BOARD_SIDE, CELL_COUNT, Cell, Player};
use crate::EngineError;

/// The 3x3 grid, indices 0..9 row-major.
///
/// A live board only changes through [`Board::place`], which refuses to
/// overwrite a mark. Hypothetical positions are built on copies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(BOARD_SIDE)
    }

    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    pub fn validate_move(&self, index: usize) -> Result<(), EngineError> {
        match self.get(index) {
            None => Err(EngineError::OutOfRange(index)),
            Some(Cell::Marked(_)) => Err(EngineError::CellOccupied(index)),
            Some(Cell::Empty) => Ok(()),
        }
    }

    pub(crate) fn place(&mut self, index: usize, player: Player) -> Result<(), EngineError> {
        self.validate_move(index)?;
        self.cells[index] = Cell::Marked(player);
        Ok(())
    }

    /// Copy of this board with `player` on `index`, which must be empty.
    pub(crate) fn with_mark(&self, index: usize, player: Player) -> Board {
        debug_assert!(self.cells[index].is_empty());
        let mut scratch = *self;
        scratch.cells[index] = Cell::Marked(player);
        scratch
    }
}

/// Compact form: one symbol per cell, rows separated by `|`, e.g. `XO.|.X.|..O`.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.rows().enumerate() {
            if row_index > 0 {
                write!(f, "|")?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    #[display("Unknown cell symbol '{}'", _0)]
    UnknownSymbol(char),
    #[display("Expected 9 cells, got {}", _0)]
    WrongLength(usize),
}

impl std::error::Error for BoardParseError {}

/// Accepts `X`, `O` and `.`/`-`/`_` for empty; `|` and whitespace are ignored.
impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Cell::Empty; CELL_COUNT];
        let mut count = 0;

        for symbol in s.chars().filter(|c| *c != '|' && !c.is_whitespace()) {
            let cell = match symbol {
                '.' | '-' | '_' => Cell::Empty,
                other => Player::from_symbol(other)
                    .map(Cell::Marked)
                    .ok_or(BoardParseError::UnknownSymbol(other))?,
            };
            if count < CELL_COUNT {
                cells[count] = cell;
            }
            count += 1;
        }

        if count != CELL_COUNT {
            return Err(BoardParseError::WrongLength(count));
        }
        Ok(Self { cells })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_all_empty() {
        let board = Board::new();

        assert_eq!(board.available_moves(), (0..9).collect::<Vec<_>>());
        assert_eq!(board.mark_count(), 0);
        assert!(!board.is_full());
    }

    #[test]
    fn test_place_marks_cell() {
        let mut board = Board::new();

        board.place(4, Player::Human).unwrap();

        assert_eq!(board.get(4), Some(Cell::Marked(Player::Human)));
        assert_eq!(board.mark_count(), 1);
        assert!(!board.available_moves().contains(&4));
    }

    #[test]
    fn test_place_refuses_to_overwrite() {
        let mut board = Board::new();
        board.place(0, Player::Human).unwrap();

        let result = board.place(0, Player::Opponent);

        assert_eq!(result, Err(EngineError::CellOccupied(0)));
        assert_eq!(board.get(0), Some(Cell::Marked(Player::Human)));
    }

    #[test]
    fn test_place_out_of_range() {
        let mut board = Board::new();

        assert_eq!(board.place(9, Player::Human), Err(EngineError::OutOfRange(9)));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let board: Board = "X........".parse().unwrap();

        let scratch = board.with_mark(8, Player::Opponent);

        assert_eq!(board.get(8), Some(Cell::Empty));
        assert_eq!(scratch.get(8), Some(Cell::Marked(Player::Opponent)));
    }

    #[test]
    fn test_parse_and_display() {
        let board: Board = "XO. | .X. | ..O".parse().unwrap();

        assert_eq!(board.to_string(), "XO.|.X.|..O");
        assert_eq!(board.available_moves(), vec![2, 3, 5, 6, 7]);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!("XO".parse::<Board>(), Err(BoardParseError::WrongLength(2)));
        assert_eq!(
            "XO........".parse::<Board>(),
            Err(BoardParseError::WrongLength(10))
        );
        assert_eq!(
            "XOZ......".parse::<Board>(),
            Err(BoardParseError::UnknownSymbol('Z'))
        );
    }
}
