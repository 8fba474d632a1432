use super::types::Mark;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMoveReason {
    OutOfRange,
    Occupied(Mark),
    EmptyMark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidStateReason {
    NoEmptyCells,
    AlreadyWon(Mark),
    UnbalancedMarks { naughts: usize, crosses: usize },
    EmptyRole,
    GameOver,
    NotHumanTurn,
    NotAutomatedTurn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    InvalidMove {
        index: usize,
        reason: InvalidMoveReason,
    },
    InvalidState(InvalidStateReason),
}

impl std::fmt::Display for InvalidMoveReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidMoveReason::OutOfRange => write!(f, "position out of bounds"),
            InvalidMoveReason::Occupied(mark) => write!(f, "cell is already marked {}", mark.symbol()),
            InvalidMoveReason::EmptyMark => write!(f, "cannot place an empty mark"),
        }
    }
}

impl std::fmt::Display for InvalidStateReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidStateReason::NoEmptyCells => write!(f, "board has no empty cells"),
            InvalidStateReason::AlreadyWon(mark) => write!(f, "{} has already won", mark.symbol()),
            InvalidStateReason::UnbalancedMarks { naughts, crosses } => write!(
                f,
                "mark counts are unbalanced ({} naughts, {} crosses)",
                naughts, crosses
            ),
            InvalidStateReason::EmptyRole => write!(f, "a player cannot play the empty mark"),
            InvalidStateReason::GameOver => write!(f, "game is already over"),
            InvalidStateReason::NotHumanTurn => write!(f, "not the human player's turn"),
            InvalidStateReason::NotAutomatedTurn => write!(f, "not the automated player's turn"),
        }
    }
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::InvalidMove { index, reason } => {
                write!(f, "Invalid move at cell {}: {}", index, reason)
            }
            EngineError::InvalidState(reason) => write!(f, "Invalid state: {}", reason),
        }
    }
}

impl std::error::Error for EngineError {}
