use serde::{Deserialize, Serialize};

use super::error::{EngineError, InvalidStateReason};

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Rows, then columns, then the two diagonals. Detection and search both rely
/// on this order for tie-breaking.
pub const WINNING_LINES: [WinningLine; 8] = [
    WinningLine::new([0, 1, 2]),
    WinningLine::new([3, 4, 5]),
    WinningLine::new([6, 7, 8]),
    WinningLine::new([0, 3, 6]),
    WinningLine::new([1, 4, 7]),
    WinningLine::new([2, 5, 8]),
    WinningLine::new([0, 4, 8]),
    WinningLine::new([2, 4, 6]),
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    #[default]
    Empty,
    Naught,
    Cross,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::Naught => Some(Mark::Cross),
            Mark::Cross => Some(Mark::Naught),
            Mark::Empty => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::Empty => ' ',
            Mark::Naught => 'O',
            Mark::Cross => 'X',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WinningLine {
    pub cells: [usize; 3],
}

impl WinningLine {
    const fn new(cells: [usize; 3]) -> Self {
        Self { cells }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(&index)
    }
}

/// Which mark the engine plays and which mark it plays against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerRoles {
    pub automated: Mark,
    pub opponent: Mark,
}

impl PlayerRoles {
    pub fn new(automated: Mark) -> Result<Self, EngineError> {
        let opponent = automated
            .opponent()
            .ok_or(EngineError::InvalidState(InvalidStateReason::EmptyRole))?;
        Ok(Self { automated, opponent })
    }
}

impl Default for PlayerRoles {
    fn default() -> Self {
        Self {
            automated: Mark::Cross,
            opponent: Mark::Naught,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Heuristic,
    #[default]
    Optimal,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirstPlayerMode {
    #[default]
    Human,
    Automated,
    Random,
}

/// One scored candidate inside the search. `index` is `None` at terminal nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveResult {
    pub index: Option<usize>,
    pub score: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won { mark: Mark, line: WinningLine },
    Draw,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}
