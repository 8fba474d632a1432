use crate::games::SessionRng;
use crate::log;
use super::board::Board;
use super::bot_controller::select_move;
use super::error::{EngineError, InvalidStateReason};
use super::settings::GameSettings;
use super::types::{FirstPlayerMode, GameStatus, Mark, PlayerRoles, Strategy};
use super::win_detector::{check_win, is_draw};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub naught_wins: u32,
    pub cross_wins: u32,
    pub draws: u32,
}

impl Scoreboard {
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::Naught => self.naught_wins,
            Mark::Cross => self.cross_wins,
            Mark::Empty => 0,
        }
    }

    fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won { mark: Mark::Naught, .. } => self.naught_wins += 1,
            GameStatus::Won { mark: Mark::Cross, .. } => self.cross_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::Won { mark: Mark::Empty, .. } | GameStatus::InProgress => {}
        }
    }
}

/// A human-versus-engine session: the live board, whose turn it is, and the
/// running score across games.
pub struct TicTacToeGameState {
    board: Board,
    roles: PlayerRoles,
    strategy: Strategy,
    current_mark: Mark,
    starter: Mark,
    status: GameStatus,
    last_move: Option<usize>,
    scoreboard: Scoreboard,
    rng: SessionRng,
}

impl TicTacToeGameState {
    pub fn new(settings: &GameSettings, mut rng: SessionRng) -> Result<Self, EngineError> {
        let roles = PlayerRoles::new(settings.automated_mark)?;

        let starter = match settings.first_player {
            FirstPlayerMode::Human => roles.opponent,
            FirstPlayerMode::Automated => roles.automated,
            FirstPlayerMode::Random => {
                if rng.random_bool() {
                    roles.automated
                } else {
                    roles.opponent
                }
            }
        };

        Ok(Self {
            board: Board::new(),
            roles,
            strategy: settings.strategy,
            current_mark: starter,
            starter,
            status: GameStatus::InProgress,
            last_move: None,
            scoreboard: Scoreboard::default(),
            rng,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn roles(&self) -> PlayerRoles {
        self.roles
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn scoreboard(&self) -> Scoreboard {
        self.scoreboard
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn is_human_turn(&self) -> bool {
        self.status == GameStatus::InProgress && self.current_mark == self.roles.opponent
    }

    pub fn is_automated_turn(&self) -> bool {
        self.status == GameStatus::InProgress && self.current_mark == self.roles.automated
    }

    pub fn place_human(&mut self, index: usize) -> Result<GameStatus, EngineError> {
        self.ensure_in_progress()?;
        if self.current_mark != self.roles.opponent {
            return Err(EngineError::InvalidState(InvalidStateReason::NotHumanTurn));
        }

        self.apply(index, self.roles.opponent)?;
        Ok(self.status)
    }

    /// Asks the move selector for the automated move and applies it. When the
    /// heuristic has nothing forced, a random empty cell is played instead.
    pub fn play_automated(&mut self) -> Result<usize, EngineError> {
        self.ensure_in_progress()?;
        if self.current_mark != self.roles.automated {
            return Err(EngineError::InvalidState(InvalidStateReason::NotAutomatedTurn));
        }

        let index = match select_move(self.strategy, &self.board, &self.roles)? {
            Some(index) => index,
            None => self.random_empty_cell()?,
        };
        log!(
            "{:?} plays {} at cell {}",
            self.strategy,
            self.roles.automated.symbol(),
            index
        );

        self.apply(index, self.roles.automated)?;
        Ok(index)
    }

    /// Clears the board for the next game. After a finished game the other
    /// side starts; an unfinished game restarts with the same starter.
    pub fn new_game(&mut self) {
        if self.status.is_over()
            && let Some(next) = self.starter.opponent()
        {
            self.starter = next;
        }

        self.board.reset();
        self.current_mark = self.starter;
        self.status = GameStatus::InProgress;
        self.last_move = None;
    }

    /// Switches difficulty and restarts the current game; scores are kept.
    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.strategy = strategy;
        self.new_game();
    }

    fn ensure_in_progress(&self) -> Result<(), EngineError> {
        if self.status.is_over() {
            return Err(EngineError::InvalidState(InvalidStateReason::GameOver));
        }
        Ok(())
    }

    fn apply(&mut self, index: usize, mark: Mark) -> Result<(), EngineError> {
        self.board.place(index, mark)?;
        self.last_move = Some(index);

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }
        Ok(())
    }

    fn switch_turn(&mut self) {
        if let Some(next) = self.current_mark.opponent() {
            self.current_mark = next;
        }
    }

    fn check_game_over(&mut self) {
        if let Some((mark, line)) = check_win(&self.board) {
            self.status = GameStatus::Won { mark, line };
        } else if is_draw(&self.board) {
            self.status = GameStatus::Draw;
        } else {
            return;
        }

        self.scoreboard.record(self.status);
        log!(
            "Game over: {:?} (naughts {}, crosses {}, draws {})",
            self.status,
            self.scoreboard.naught_wins,
            self.scoreboard.cross_wins,
            self.scoreboard.draws
        );
    }

    fn random_empty_cell(&mut self) -> Result<usize, EngineError> {
        let available_moves = self.board.empty_cells();
        if available_moves.is_empty() {
            return Err(EngineError::InvalidState(InvalidStateReason::NoEmptyCells));
        }
        let idx = self.rng.random_range(0..available_moves.len());
        Ok(available_moves[idx])
    }
}
