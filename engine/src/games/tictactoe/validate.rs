use super::board::Board;
use super::error::{EngineError, InvalidStateReason};
use super::types::{Mark, PlayerRoles};
use super::win_detector::winning_line;

/// Rejects positions the move selector must not be asked about: finished
/// games and boards where one side is more than a move ahead.
pub fn validate_position(board: &Board, roles: &PlayerRoles) -> Result<(), EngineError> {
    if roles.automated == Mark::Empty || roles.opponent == Mark::Empty {
        return Err(EngineError::InvalidState(InvalidStateReason::EmptyRole));
    }

    let naughts = board.count(Mark::Naught);
    let crosses = board.count(Mark::Cross);
    if naughts.abs_diff(crosses) > 1 {
        return Err(EngineError::InvalidState(
            InvalidStateReason::UnbalancedMarks { naughts, crosses },
        ));
    }

    for mark in [roles.automated, roles.opponent] {
        if winning_line(board, mark).is_some() {
            return Err(EngineError::InvalidState(InvalidStateReason::AlreadyWon(mark)));
        }
    }

    if board.is_full() {
        return Err(EngineError::InvalidState(InvalidStateReason::NoEmptyCells));
    }

    Ok(())
}
