use std::fmt;

use super::error::{EngineError, InvalidMoveReason};
use super::types::{BOARD_SIZE, CELL_COUNT, Mark};

/// The 3x3 grid, row-major: `index = row * 3 + col`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    /// Indices of empty cells in ascending order.
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Mark::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), EngineError> {
        if mark == Mark::Empty {
            return Err(EngineError::InvalidMove {
                index,
                reason: InvalidMoveReason::EmptyMark,
            });
        }

        match self.cells.get(index) {
            None => Err(EngineError::InvalidMove {
                index,
                reason: InvalidMoveReason::OutOfRange,
            }),
            Some(&Mark::Empty) => {
                self.cells[index] = mark;
                Ok(())
            }
            Some(&occupant) => Err(EngineError::InvalidMove {
                index,
                reason: InvalidMoveReason::Occupied(occupant),
            }),
        }
    }

    /// Empties a cell again. Out-of-range indices are ignored.
    pub fn clear(&mut self, index: usize) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = Mark::Empty;
        }
    }

    /// Runs `f` with `mark` placed at the empty cell `index`, then empties the
    /// cell before returning `f`'s result.
    pub fn with_move<T>(&mut self, index: usize, mark: Mark, f: impl FnOnce(&mut Board) -> T) -> T {
        debug_assert_eq!(self.cells[index], Mark::Empty);
        self.cells[index] = mark;
        let result = f(self);
        self.cells[index] = Mark::Empty;
        result
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn reset(&mut self) {
        self.cells = [Mark::Empty; CELL_COUNT];
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.chunks(BOARD_SIZE).enumerate() {
            if row > 0 {
                writeln!(f, "---+---+---")?;
            }
            writeln!(
                f,
                " {} | {} | {}",
                cells[0].symbol(),
                cells[1].symbol(),
                cells[2].symbol()
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const E: Mark = Mark::Empty;
    const O: Mark = Mark::Naught;
    const X: Mark = Mark::Cross;

    #[test]
    fn test_empty_cells_ascending() {
        let board = Board::from_cells([X, E, O, E, X, E, E, O, E]);
        assert_eq!(board.empty_cells(), vec![1, 3, 5, 6, 8]);
        assert_eq!(Board::new().empty_cells(), (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_place_sets_cell() {
        let mut board = Board::new();
        board.place(4, X).unwrap();
        assert_eq!(board.get(4), Some(X));
        assert_eq!(board.count(X), 1);
    }

    #[test]
    fn test_place_out_of_range_fails() {
        let mut board = Board::new();
        assert_eq!(
            board.place(9, X),
            Err(EngineError::InvalidMove {
                index: 9,
                reason: InvalidMoveReason::OutOfRange
            })
        );
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_place_on_occupied_cell_fails() {
        let mut board = Board::new();
        board.place(0, O).unwrap();
        assert_eq!(
            board.place(0, X),
            Err(EngineError::InvalidMove {
                index: 0,
                reason: InvalidMoveReason::Occupied(O)
            })
        );
        assert_eq!(board.get(0), Some(O));
    }

    #[test]
    fn test_place_empty_mark_fails() {
        let mut board = Board::new();
        assert!(board.place(3, E).is_err());
    }

    #[test]
    fn test_place_then_clear_restores_snapshot() {
        let original = Board::from_cells([X, E, O, E, X, E, E, O, E]);
        let mut board = original;
        board.place(5, O).unwrap();
        assert_ne!(board, original);
        board.clear(5);
        assert_eq!(board, original);
    }

    #[test]
    fn test_with_move_undoes_placement() {
        let original = Board::from_cells([X, O, E, E, E, E, E, E, E]);
        let mut board = original;
        let seen = board.with_move(2, X, |inner| inner.get(2));
        assert_eq!(seen, Some(X));
        assert_eq!(board, original);
    }

    #[test]
    fn test_is_full_and_reset() {
        let mut board = Board::from_cells([X, O, X, X, O, O, O, X, X]);
        assert!(board.is_full());
        board.reset();
        assert_eq!(board.empty_cells().len(), 9);
    }

    #[test]
    fn test_display_renders_grid() {
        let board = Board::from_cells([X, E, E, E, O, E, E, E, X]);
        let rendered = board.to_string();
        assert_eq!(rendered.lines().count(), 5);
        assert_eq!(rendered.lines().next(), Some(" X |   |  "));
        assert_eq!(rendered.lines().nth(2), Some("   | O |  "));
    }
}
