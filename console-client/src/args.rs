use clap::{Parser, ValueEnum};
use noughts_engine::games::tictactoe::{FirstPlayerMode, GameSettings, Mark, Strategy};

#[derive(Parser, Debug)]
#[command(name = "noughts_console", about = "Play noughts and crosses against the engine")]
pub struct Args {
    /// How the engine picks its moves
    #[arg(long, value_enum)]
    pub strategy: Option<StrategyArg>,

    /// Mark played by the engine; you play the other one
    #[arg(long, value_enum)]
    pub mark: Option<MarkArg>,

    /// Who opens the first game
    #[arg(long, value_enum)]
    pub first_player: Option<FirstPlayerArg>,

    /// Seed for the random starter and the heuristic's random fallback
    #[arg(long)]
    pub seed: Option<u64>,

    /// Config file to use instead of the one next to the executable
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long)]
    pub use_log_prefix: bool,

    /// Write the effective settings back to the config file
    #[arg(long)]
    pub save_config: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    Heuristic,
    Optimal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum MarkArg {
    Naught,
    Cross,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FirstPlayerArg {
    Human,
    Engine,
    Random,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Heuristic => Strategy::Heuristic,
            StrategyArg::Optimal => Strategy::Optimal,
        }
    }
}

impl From<MarkArg> for Mark {
    fn from(arg: MarkArg) -> Self {
        match arg {
            MarkArg::Naught => Mark::Naught,
            MarkArg::Cross => Mark::Cross,
        }
    }
}

impl From<FirstPlayerArg> for FirstPlayerMode {
    fn from(arg: FirstPlayerArg) -> Self {
        match arg {
            FirstPlayerArg::Human => FirstPlayerMode::Human,
            FirstPlayerArg::Engine => FirstPlayerMode::Automated,
            FirstPlayerArg::Random => FirstPlayerMode::Random,
        }
    }
}

impl Args {
    /// Command-line flags win over whatever the config file says.
    pub fn apply_to(&self, settings: &mut GameSettings) {
        if let Some(strategy) = self.strategy {
            settings.strategy = strategy.into();
        }
        if let Some(mark) = self.mark {
            settings.automated_mark = mark.into();
        }
        if let Some(first_player) = self.first_player {
            settings.first_player = first_player.into();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_keep_settings() {
        let args = Args::try_parse_from(["noughts_console"]).unwrap();
        let mut settings = GameSettings::default();
        args.apply_to(&mut settings);
        assert_eq!(settings, GameSettings::default());
        assert!(!args.save_config);
    }

    #[test]
    fn test_flags_override_settings() {
        let args = Args::try_parse_from([
            "noughts_console",
            "--strategy",
            "heuristic",
            "--mark",
            "naught",
            "--first-player",
            "engine",
            "--seed",
            "12",
        ])
        .unwrap();
        let mut settings = GameSettings::default();
        args.apply_to(&mut settings);

        assert_eq!(settings.strategy, Strategy::Heuristic);
        assert_eq!(settings.automated_mark, Mark::Naught);
        assert_eq!(settings.first_player, FirstPlayerMode::Automated);
        assert_eq!(args.seed, Some(12));
    }

    #[test]
    fn test_unknown_strategy_is_rejected() {
        assert!(Args::try_parse_from(["noughts_console", "--strategy", "perfect"]).is_err());
    }
}
