use std::{env, path::PathBuf, str::FromStr, time::Duration};

use tracing::warn;

use crate::{
    data::Grid,
    passcode::{CODE_LENGTH, DEFAULT_PASSCODE, DEFAULT_TIME_LIMIT},
};

/// Runtime settings, read from `PURPLE_MINES_*` environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub grid: Grid,
    pub store_path: PathBuf,
    pub json_output: bool,
    pub passcode: String,
    pub passcode_time_limit: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid: Grid::DEFAULT,
            store_path: PathBuf::from("purplemines.json"),
            json_output: false,
            passcode: DEFAULT_PASSCODE.to_string(),
            passcode_time_limit: DEFAULT_TIME_LIMIT,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any variable source. Unset or invalid values keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let rows = parse_or(&lookup, "PURPLE_MINES_ROWS", defaults.grid.rows);
        let cols = parse_or(&lookup, "PURPLE_MINES_COLS", defaults.grid.cols);
        let grid = Grid::new(rows, cols).unwrap_or_else(|| {
            warn!(
                "Unusable {}x{} board, using {}x{}",
                rows, cols, defaults.grid.rows, defaults.grid.cols
            );
            defaults.grid
        });

        let json_output = lookup("PURPLE_MINES_JSON")
            .map(|value| matches!(value.trim(), "1" | "true" | "yes"))
            .unwrap_or(defaults.json_output);

        Self {
            grid,
            store_path: lookup("PURPLE_MINES_STORE")
                .map(PathBuf::from)
                .unwrap_or(defaults.store_path),
            json_output,
            passcode: lookup("PURPLE_MINES_PASSCODE")
                .map(|code| code.trim().to_string())
                .filter(|code| {
                    let usable = code.chars().count() == CODE_LENGTH;
                    if !usable {
                        warn!("Passcode must be {} characters, using the default", CODE_LENGTH);
                    }
                    usable
                })
                .unwrap_or(defaults.passcode),
            passcode_time_limit: Duration::from_secs(parse_or(
                &lookup,
                "PURPLE_MINES_PASSCODE_SECONDS",
                defaults.passcode_time_limit.as_secs(),
            )),
        }
    }
}

fn parse_or<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    lookup(key)
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}
