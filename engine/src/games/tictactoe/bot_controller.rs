use super::board::Board;
use super::error::{EngineError, InvalidStateReason};
use super::types::{Mark, MoveResult, PlayerRoles, Strategy, WINNING_LINES};
use super::validate::validate_position;
use super::win_detector::winning_line;

const WIN_SCORE: i32 = 100;
const LOSS_SCORE: i32 = -100;
const DRAW_SCORE: i32 = 0;

// Out of reach of any real score.
const MAXIMIZING_FLOOR: i32 = -1000;
const MINIMIZING_CEILING: i32 = 1000;

/// Picks the automated player's next cell.
///
/// `Ok(None)` is only possible with [`Strategy::Heuristic`] and means there is
/// no win to take and no line to block; the caller decides what to play.
pub fn select_move(
    strategy: Strategy,
    board: &Board,
    roles: &PlayerRoles,
) -> Result<Option<usize>, EngineError> {
    validate_position(board, roles)?;

    match strategy {
        Strategy::Heuristic => Ok(next_move_heuristic(board, roles)),
        Strategy::Optimal => calculate_minimax_move(board, roles)
            .index
            .map(Some)
            .ok_or(EngineError::InvalidState(InvalidStateReason::NoEmptyCells)),
    }
}

/// One-ply lookahead: complete an own line if possible, otherwise block one
/// of the opponent's.
pub fn next_move_heuristic(board: &Board, roles: &PlayerRoles) -> Option<usize> {
    find_forced_move(board, roles.automated).or_else(|| find_forced_move(board, roles.opponent))
}

/// Empty cell of the first line holding two `mark`s and one empty cell.
pub fn find_forced_move(board: &Board, mark: Mark) -> Option<usize> {
    if mark == Mark::Empty {
        return None;
    }

    for line in WINNING_LINES {
        let [a, b, c] = line.cells.map(|index| board.get(index));
        let mine = Some(mark);
        let empty = Some(Mark::Empty);

        if a == mine && b == mine && c == empty {
            return Some(line.cells[2]);
        }
        if a == mine && c == mine && b == empty {
            return Some(line.cells[1]);
        }
        if b == mine && c == mine && a == empty {
            return Some(line.cells[0]);
        }
    }

    None
}

/// Runs the full search for the automated player from `board`.
pub fn calculate_minimax_move(board: &Board, roles: &PlayerRoles) -> MoveResult {
    let mut board = *board;
    minimax(&mut board, roles.automated, 0, roles)
}

/// Exhaustive search with `mover` to play at `depth` plies below the root.
///
/// Terminal boards score -100 (opponent won), +100 (automated player won) or
/// 0 (full board). Every decisive child score loses `depth` points on its way
/// up, so quicker wins outrank slower ones; drawn lines stay at 0. Ties keep
/// the lowest index. `board` is identical before and after the call.
pub fn minimax(board: &mut Board, mover: Mark, depth: usize, roles: &PlayerRoles) -> MoveResult {
    if winning_line(board, roles.opponent).is_some() {
        return MoveResult {
            index: None,
            score: LOSS_SCORE,
        };
    }
    if winning_line(board, roles.automated).is_some() {
        return MoveResult {
            index: None,
            score: WIN_SCORE,
        };
    }

    let available_moves = board.empty_cells();
    if available_moves.is_empty() {
        return MoveResult {
            index: None,
            score: DRAW_SCORE,
        };
    }

    let is_maximizing = mover == roles.automated;
    let next_mover = if is_maximizing {
        roles.opponent
    } else {
        roles.automated
    };

    let mut best = MoveResult {
        index: None,
        score: if is_maximizing {
            MAXIMIZING_FLOOR
        } else {
            MINIMIZING_CEILING
        },
    };

    for index in available_moves {
        let child = board.with_move(index, mover, |board| {
            minimax(board, next_mover, depth + 1, roles)
        });
        let score = depth_adjusted(child.score, depth);

        let improves = if is_maximizing {
            score > best.score
        } else {
            score < best.score
        };
        if improves {
            best = MoveResult {
                index: Some(index),
                score,
            };
        }
    }

    best
}

fn depth_adjusted(score: i32, depth: usize) -> i32 {
    if score == DRAW_SCORE {
        DRAW_SCORE
    } else {
        score - depth as i32
    }
}
