//! 端末で動作する最小 UI。

use othello_core::engine;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// 列の表記。
const FILES: &str = "abcdefgh";

const USAGE: &str = "usage: othello_tty [--permissive] [--json-log]";

const HELP: &str = "commands: <x> <y> | <a-h><1-8> | new | help | quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Options {
    json_log: bool,
    policy: engine::PlacementPolicy,
}

impl Options {
    fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Self, String> {
        let mut options = Self {
            json_log: false,
            policy: engine::PlacementPolicy::Strict,
        };

        for arg in args {
            match arg.as_str() {
                "--permissive" => options.policy = engine::PlacementPolicy::Permissive,
                "--json-log" => options.json_log = true,
                other => return Err(format!("unknown argument `{other}`\n{USAGE}")),
            }
        }

        Ok(options)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Help,
    NewGame,
    Place(engine::Coordinate),
    Quit,
}

#[derive(Debug)]
struct App {
    board: engine::Board,
    policy: engine::PlacementPolicy,
}

impl App {
    fn new(policy: engine::PlacementPolicy) -> Self {
        Self {
            board: engine::Board::with_policy(policy),
            policy,
        }
    }

    /// 手番側に合法手が無ければ終局とみなす。
    fn is_game_over(&self) -> bool {
        self.board.legal_moves().is_empty()
    }

    fn new_game(&mut self) {
        info!(policy = %self.policy, "starting new game");
        self.board = engine::Board::with_policy(self.policy);
    }

    fn render(&self) -> String {
        let legal_moves = self.board.legal_moves();
        let mut text = String::from("  ");
        text.push_str(FILES);
        text.push('\n');

        for (y, rank) in (0_i8..8).zip('1'..='8') {
            text.push(rank);
            text.push(' ');
            for x in 0_i8..8 {
                let coordinate = engine::Coordinate::new(x, y);
                let symbol = match self.board.disc_at(coordinate) {
                    Ok(Some(disc)) => disc.color().symbol(),
                    Ok(None) if legal_moves.contains(&coordinate) => '*',
                    Ok(None) | Err(_) => '.',
                };
                text.push(symbol);
            }
            text.push('\n');
        }

        text.push_str(&self.status_text());
        text
    }

    fn status_text(&self) -> String {
        let (black, white) = self.board.disc_count();

        if self.is_game_over() {
            let result = if black > white {
                "Black wins"
            } else if black < white {
                "White wins"
            } else {
                "Draw"
            };
            return format!("GAME OVER: {result} | B={black} W={white}");
        }

        format!("{} to move | B={black} W={white}", self.board.turn())
    }

    fn try_place(&mut self, coordinate: engine::Coordinate) -> String {
        if self.is_game_over() {
            return String::from("the game is over; type `new` to start again");
        }

        match self.board.place_disc(coordinate) {
            Ok(placement) => {
                debug!(flipped = placement.flipped().len(), "move applied");
                format!(
                    "{} played {} and flipped {}",
                    placement.color(),
                    notation(placement.coordinate()),
                    placement.flipped().len()
                )
            }
            Err(err) => format!("rejected: {err}"),
        }
    }
}

/// `a1` 形式の表記を返す（盤外は `(x, y)`）。
fn notation(coordinate: engine::Coordinate) -> String {
    let file = usize::try_from(coordinate.x())
        .ok()
        .and_then(|index| FILES.chars().nth(index));

    match (file, coordinate.is_on_board()) {
        (Some(file), true) => format!("{file}{}", coordinate.y().saturating_add(1)),
        _ => coordinate.to_string(),
    }
}

fn parse_command(line: &str) -> Result<Command, String> {
    let input = line.trim().to_ascii_lowercase();
    let words: Vec<&str> = input.split_whitespace().collect();

    match words.as_slice() {
        ["quit" | "exit" | "q"] => Ok(Command::Quit),
        ["new"] => Ok(Command::NewGame),
        ["help" | "?"] => Ok(Command::Help),
        [x, y] => match (x.parse::<i8>(), y.parse::<i8>()) {
            (Ok(x), Ok(y)) => Ok(Command::Place(engine::Coordinate::new(x, y))),
            _ => Err(format!("cannot read `{}` as a coordinate", line.trim())),
        },
        [square] => parse_square(square),
        _ => Err(format!("unknown command `{}`", line.trim())),
    }
}

/// `c4` のような表記を座標へ変換する。
fn parse_square(square: &str) -> Result<Command, String> {
    let mut chars = square.chars();
    let file = chars.next().and_then(|ch| FILES.find(ch));
    let rank = chars.as_str().parse::<i8>().ok();

    match (file.and_then(|index| i8::try_from(index).ok()), rank) {
        (Some(x), Some(rank)) => Ok(Command::Place(engine::Coordinate::new(
            x,
            rank.saturating_sub(1),
        ))),
        _ => Err(format!("cannot read `{square}` as a square")),
    }
}

fn init_tracing(json_log: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    let result = if json_log {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if let Err(err) = result {
        eprintln!("failed to initialise logging: {err}");
    }
}

fn run<R: BufRead, W: Write>(app: &mut App, input: R, output: &mut W) -> io::Result<()> {
    writeln!(output, "{}", app.render())?;
    writeln!(output, "{HELP}")?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => writeln!(output, "{HELP}")?,
            Ok(Command::NewGame) => {
                app.new_game();
                writeln!(output, "{}", app.render())?;
            }
            Ok(Command::Place(coordinate)) => {
                let message = app.try_place(coordinate);
                writeln!(output, "{message}")?;
                writeln!(output, "{}", app.render())?;
            }
            Err(message) => writeln!(output, "{message}")?,
        }
    }

    Ok(())
}

fn main() -> Result<(), String> {
    let options = Options::parse(std::env::args().skip(1))?;
    init_tracing(options.json_log);
    info!(policy = %options.policy, "othello_tty started");

    let mut app = App::new(options.policy);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    run(&mut app, stdin.lock(), &mut stdout).map_err(|err| err.to_string())
}
