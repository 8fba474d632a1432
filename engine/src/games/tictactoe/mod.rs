mod board;
mod bot_controller;
mod error;
mod game_state;
mod settings;
mod types;
mod validate;
mod win_detector;

pub use board::Board;
pub use bot_controller::{
    calculate_minimax_move, find_forced_move, minimax, next_move_heuristic, select_move,
};
pub use error::{EngineError, InvalidMoveReason, InvalidStateReason};
pub use game_state::{Scoreboard, TicTacToeGameState};
pub use settings::GameSettings;
pub use types::{
    BOARD_SIZE, CELL_COUNT, FirstPlayerMode, GameStatus, Mark, MoveResult, PlayerRoles, Strategy,
    WINNING_LINES, WinningLine,
};
pub use validate::validate_position;
pub use win_detector::{check_win, is_draw, winning_line};
