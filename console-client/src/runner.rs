use std::io::{self, BufRead, Write};

use noughts_engine::games::tictactoe::{
    BOARD_SIZE, Board, GameStatus, Mark, Scoreboard, Strategy, TicTacToeGameState,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place(usize),
    NewGame,
    SetStrategy(Strategy),
    Quit,
}

pub fn parse_command(line: &str) -> Result<Command, String> {
    let input = line.trim().to_lowercase();
    match input.as_str() {
        "q" | "quit" => Ok(Command::Quit),
        "n" | "new" => Ok(Command::NewGame),
        "easy" => Ok(Command::SetStrategy(Strategy::Heuristic)),
        "hard" => Ok(Command::SetStrategy(Strategy::Optimal)),
        _ => match input.parse::<usize>() {
            Ok(cell @ 1..=9) => Ok(Command::Place(cell - 1)),
            _ => Err(format!("Unrecognised command '{}'", line.trim())),
        },
    }
}

/// Text grid with the 1-9 key of every empty cell.
pub fn render_board(board: &Board) -> String {
    let mut rendered = String::new();
    for row in 0..BOARD_SIZE {
        if row > 0 {
            rendered.push_str("---+---+---\n");
        }
        let cells: Vec<String> = (0..BOARD_SIZE)
            .map(|col| {
                let index = row * BOARD_SIZE + col;
                match board.get(index) {
                    Some(Mark::Empty) | None => (index + 1).to_string(),
                    Some(mark) => mark.symbol().to_string(),
                }
            })
            .collect();
        rendered.push_str(&format!(" {} \n", cells.join(" | ")));
    }
    rendered
}

fn mark_name(mark: Mark) -> &'static str {
    match mark {
        Mark::Naught => "Naughts",
        Mark::Cross => "Crosses",
        Mark::Empty => "Nobody",
    }
}

fn describe_result(status: GameStatus) -> String {
    match status {
        GameStatus::Won { mark, line } => format!(
            "{} win on cells {}, {}, {}",
            mark_name(mark),
            line.cells[0] + 1,
            line.cells[1] + 1,
            line.cells[2] + 1
        ),
        GameStatus::Draw => "Draw".to_string(),
        GameStatus::InProgress => "Game in progress".to_string(),
    }
}

fn describe_score(scoreboard: Scoreboard) -> String {
    format!(
        "Score: naughts {} - crosses {} - draws {}",
        scoreboard.naught_wins, scoreboard.cross_wins, scoreboard.draws
    )
}

fn read_command_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Plays games on `input`/`output` until the player quits or input ends.
pub fn run_session<R: BufRead, W: Write>(
    state: &mut TicTacToeGameState,
    mut input: R,
    output: &mut W,
) -> io::Result<()> {
    let human = state.roles().opponent;
    writeln!(
        output,
        "You play {}. Enter 1-9 to place a mark, 'easy'/'hard' to change difficulty, 'n' for a new game, 'q' to quit.",
        human.symbol()
    )?;

    loop {
        if state.is_automated_turn() {
            let index = state.play_automated().map_err(io::Error::other)?;
            writeln!(output, "Engine plays {}", index + 1)?;
            continue;
        }

        if state.status().is_over() {
            write!(output, "{}", render_board(state.board()))?;
            writeln!(output, "{}", describe_result(state.status()))?;
            writeln!(output, "{}", describe_score(state.scoreboard()))?;
            write!(output, "Play again? [y/n] ")?;
            output.flush()?;

            match read_command_line(&mut input)? {
                Some(answer) if matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") => {
                    state.new_game();
                    continue;
                }
                _ => break,
            }
        }

        write!(output, "{}", render_board(state.board()))?;
        write!(output, "Your move ({}): ", human.symbol())?;
        output.flush()?;

        let Some(line) = read_command_line(&mut input)? else {
            break;
        };

        match parse_command(&line) {
            Ok(Command::Place(index)) => {
                if let Err(e) = state.place_human(index) {
                    writeln!(output, "{}", e)?;
                }
            }
            Ok(Command::NewGame) => state.new_game(),
            Ok(Command::SetStrategy(strategy)) => {
                state.set_strategy(strategy);
                writeln!(output, "Difficulty set to {:?}, starting over", strategy)?;
            }
            Ok(Command::Quit) => break,
            Err(message) => writeln!(output, "{}", message)?,
        }
    }

    writeln!(output)?;
    writeln!(output, "{}", describe_score(state.scoreboard()))?;
    writeln!(output, "Thanks for playing")?;
    Ok(())
}
