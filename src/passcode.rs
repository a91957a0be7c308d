//! The passcode timer: guess a four-digit code before time runs out.
//!
//! Independent of the mines game; it only shares the binary.

use std::{error::Error, fmt, time::Duration};

use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt},
    time::{Instant, timeout_at},
};
use tracing::{debug, info, warn};

pub const DEFAULT_PASSCODE: &str = "3325";
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(20);
pub const CODE_LENGTH: usize = 4;

pub const RETRY_MESSAGE: &str = "Passcode incorrect. Try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Waiting,
    /// Wrong code; ask again.
    Retry,
    /// Show the victory image.
    Won,
    /// Time's up; play the explosion video.
    Lost,
}

impl GateState {
    pub fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasscodeError {
    WrongLength,
    AlreadyFinished,
}

impl fmt::Display for PasscodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength => write!(f, "Passcode must be {} digits", CODE_LENGTH),
            Self::AlreadyFinished => write!(f, "This round is already over."),
        }
    }
}

impl Error for PasscodeError {}

#[derive(Debug, Clone)]
pub struct PasscodeGate {
    code: String,
    state: GateState,
}

impl PasscodeGate {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            state: GateState::Waiting,
        }
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn submit(&mut self, raw: &str) -> Result<GateState, PasscodeError> {
        if self.state.is_finished() {
            return Err(PasscodeError::AlreadyFinished);
        }
        let guess = raw.trim();
        if guess.chars().count() != CODE_LENGTH {
            return Err(PasscodeError::WrongLength);
        }

        self.state = if guess == self.code {
            GateState::Won
        } else {
            GateState::Retry
        };
        debug!("Passcode guess checked: {:?}", self.state);
        Ok(self.state)
    }

    /// The timer ran out or the video ended. A win stays a win.
    pub fn expire(&mut self) -> GateState {
        if self.state != GateState::Won {
            self.state = GateState::Lost;
        }
        self.state
    }
}

/// Read guesses line by line until the code is found, the input closes or
/// `limit` elapses. Messages for the player go to `report`.
pub async fn run<R, F>(
    gate: &mut PasscodeGate,
    input: R,
    limit: Duration,
    mut report: F,
) -> GateState
where
    R: AsyncBufRead + Unpin,
    F: FnMut(&str),
{
    let deadline = Instant::now() + limit;
    let mut lines = input.lines();

    info!("Passcode round started: {}s on the clock", limit.as_secs());

    while !gate.state().is_finished() {
        let line = match timeout_at(deadline, lines.next_line()).await {
            Err(_) => {
                info!("Passcode timer ran out");
                return gate.expire();
            }
            Ok(Ok(Some(line))) => line,
            Ok(Ok(None)) => break,
            Ok(Err(e)) => {
                warn!("Failed to read passcode input: {}", e);
                break;
            }
        };

        match gate.submit(&line) {
            Ok(GateState::Retry) => report(RETRY_MESSAGE),
            Ok(_) => {}
            Err(e) => report(&e.to_string()),
        }
    }

    gate.state()
}
