use std::{error::Error, fmt};

use purple_mines_common::{models::RoundParams, protocol::Command};

/// One line typed at the terminal.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Command(Command),
    Help,
    Passcode,
    Quit,
}

#[derive(Debug)]
pub enum InputError {
    Unknown(String),
    BadNumber(String),
    Json(serde_json::Error),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(word) => write!(f, "Unknown command '{}'. Type 'help'.", word),
            Self::BadNumber(word) => write!(f, "'{}' is not a number.", word),
            Self::Json(e) => write!(f, "Invalid JSON command: {}", e),
        }
    }
}

impl Error for InputError {}

impl From<serde_json::Error> for InputError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Parse a line of word syntax or a JSON [`Command`].
///
/// `start` without arguments reuses `defaults`, the last wager and bomb count.
pub fn parse_line(line: &str, defaults: RoundParams) -> Result<Input, InputError> {
    let line = line.trim();
    if line.starts_with('{') {
        return Ok(Input::Command(serde_json::from_str(line)?));
    }

    let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();
    let mut args = rest.split_whitespace();

    let command = match word.to_lowercase().as_str() {
        "" | "ok" => Command::Acknowledge,
        "start" | "s" => {
            let wager = match args.next() {
                Some(arg) => parse_number(arg.trim_start_matches('$'))?,
                None => defaults.wager,
            };
            let bombs = match args.next() {
                Some(arg) => parse_number(arg)?,
                None => defaults.bombs,
            };
            Command::Start {
                params: RoundParams { wager, bombs },
            }
        }
        "reveal" | "r" => match args.next() {
            Some(arg) => Command::Reveal {
                tile: parse_number(arg)?,
            },
            None => return Err(InputError::Unknown(line.to_string())),
        },
        "cashout" | "cash" | "c" => Command::Cashout,
        "code" => Command::Code {
            text: rest.to_string(),
        },
        "dismiss" => Command::DismissIntro {
            remember: rest.eq_ignore_ascii_case("forever"),
        },
        "help" | "?" => return Ok(Input::Help),
        "passcode" => return Ok(Input::Passcode),
        "quit" | "exit" | "q" => return Ok(Input::Quit),
        other => match other.parse::<usize>() {
            Ok(tile) => Command::Reveal { tile },
            Err(_) => return Err(InputError::Unknown(word.to_string())),
        },
    };

    Ok(Input::Command(command))
}

fn parse_number<T: std::str::FromStr>(word: &str) -> Result<T, InputError> {
    word.parse()
        .map_err(|_| InputError::BadNumber(word.to_string()))
}

pub const HELP: &str = "\
Commands:
  start [wager] [bombs]   place a wager (defaults to your last one)
  reveal <tile> | <tile>  uncover a tile by its number
  cashout                 collect your winnings
  code <text>             redeem a creator code
  ok                      dismiss the current message (or just press enter)
  dismiss [forever]       hide the intro
  passcode                play the passcode timer
  quit                    leave
JSON commands such as {\"action\":\"reveal\",\"tile\":4} are accepted too.";
