mod args;
mod config;
mod runner;

use clap::Parser;
use noughts_engine::games::SessionRng;
use noughts_engine::games::tictactoe::TicTacToeGameState;
use noughts_engine::{log, logger};

use args::Args;
use config::get_config_manager;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = get_config_manager(args.config.as_deref());
    let mut config = config_manager.get_config()?;
    args.apply_to(&mut config.game);
    config.use_log_prefix |= args.use_log_prefix;

    let prefix = if config.use_log_prefix {
        Some("Console".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Saved settings: {:?}", config.game);
    }

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    let mut state = TicTacToeGameState::new(&config.game, rng)?;
    log!(
        "Starting session: {:?}, engine plays {}, seed {}",
        state.strategy(),
        state.roles().automated.symbol(),
        state.seed()
    );

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    runner::run_session(&mut state, stdin.lock(), &mut stdout)?;

    Ok(())
}
