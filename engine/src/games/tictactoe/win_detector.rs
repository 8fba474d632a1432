use super::board::Board;
use super::types::{Mark, WINNING_LINES, WinningLine};

/// First line in enumeration order fully occupied by `mark`.
pub fn winning_line(board: &Board, mark: Mark) -> Option<WinningLine> {
    if mark == Mark::Empty {
        return None;
    }

    WINNING_LINES
        .iter()
        .find(|line| line.cells.iter().all(|&index| board.get(index) == Some(mark)))
        .copied()
}

pub fn check_win(board: &Board) -> Option<(Mark, WinningLine)> {
    [Mark::Cross, Mark::Naught]
        .into_iter()
        .find_map(|mark| winning_line(board, mark).map(|line| (mark, line)))
}

/// A full board is only a draw when nobody completed a line.
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && check_win(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::CELL_COUNT;

    const E: Mark = Mark::Empty;
    const O: Mark = Mark::Naught;
    const X: Mark = Mark::Cross;

    #[test]
    fn test_every_line_is_detected() {
        for line in WINNING_LINES {
            let mut cells = [E; CELL_COUNT];
            for index in line.cells {
                cells[index] = O;
            }
            let board = Board::from_cells(cells);
            assert_eq!(winning_line(&board, O), Some(line));
            assert_eq!(winning_line(&board, X), None);
        }
    }

    #[test]
    fn test_earliest_line_wins_tie_break() {
        // Top row and left column both complete.
        let board = Board::from_cells([X, X, X, X, O, O, X, O, O]);
        assert_eq!(winning_line(&board, X), Some(WINNING_LINES[0]));

        // Middle column and anti-diagonal both complete.
        let board = Board::from_cells([O, X, X, E, X, E, X, X, O]);
        assert_eq!(winning_line(&board, X), Some(WINNING_LINES[4]));
    }

    #[test]
    fn test_two_in_line_is_not_a_win() {
        let board = Board::from_cells([X, X, E, O, O, E, E, E, E]);
        assert_eq!(winning_line(&board, X), None);
        assert_eq!(winning_line(&board, O), None);
        assert_eq!(winning_line(&board, E), None);
    }

    #[test]
    fn test_check_win_reports_mark_and_line() {
        let board = Board::from_cells([O, X, X, E, O, X, E, E, O]);
        assert_eq!(check_win(&board), Some((O, WINNING_LINES[6])));
        assert_eq!(check_win(&Board::new()), None);
    }

    #[test]
    fn test_full_board_without_winner_is_draw() {
        let board = Board::from_cells([X, O, X, X, O, O, O, X, X]);
        assert!(is_draw(&board));
    }

    #[test]
    fn test_full_board_with_winner_is_not_draw() {
        let board = Board::from_cells([X, X, X, O, O, X, X, O, O]);
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_board_with_empty_cells_is_not_draw() {
        let board = Board::from_cells([X, O, X, X, O, O, O, X, E]);
        assert!(!is_draw(&board));
        let won = Board::from_cells([X, X, X, O, O, E, E, E, E]);
        assert!(!is_draw(&won));
    }

    #[test]
    fn test_winning_line_matches_brute_force_for_all_boards() {
        let mut cells = [E; CELL_COUNT];
        for code in 0..3usize.pow(CELL_COUNT as u32) {
            let mut rest = code;
            for cell in cells.iter_mut() {
                *cell = [E, O, X][rest % 3];
                rest /= 3;
            }
            let board = Board::from_cells(cells);

            for mark in [O, X] {
                let expected = WINNING_LINES
                    .iter()
                    .position(|line| line.cells.iter().all(|&i| cells[i] == mark));
                let found = winning_line(&board, mark)
                    .map(|line| WINNING_LINES.iter().position(|l| *l == line).unwrap());
                assert_eq!(found, expected);
            }

            if check_win(&board).is_some() {
                assert!(!is_draw(&board));
            } else {
                assert_eq!(is_draw(&board), board.is_full());
            }
        }
    }
}
