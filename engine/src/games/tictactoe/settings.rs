use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::types::{FirstPlayerMode, Mark, Strategy};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    pub strategy: Strategy,
    pub automated_mark: Mark,
    pub first_player: FirstPlayerMode,
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), String> {
        if self.automated_mark == Mark::Empty {
            return Err("automated_mark must be Naught or Cross".to_string());
        }
        Ok(())
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            strategy: Strategy::Optimal,
            automated_mark: Mark::Cross,
            first_player: FirstPlayerMode::Human,
        }
    }
}
