use std::{error::Error, fmt};

use purple_mines_common::models::Cents;

/// Why a player action was refused. Refusals never change game state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    InvalidWager,
    InvalidBombCount { max: usize },
    InsufficientBalance { balance: Cents, wager: Cents },
    EmptyCode,
    InvalidCode,
    RoundInProgress,
    NoActiveRound,
    TileOutOfRange { tile: usize, tiles: usize },
    TileAlreadyRevealed { tile: usize },
    AwaitingAcknowledgement,
}

impl GameError {
    /// Whether the player should be told about this refusal. The rest are
    /// clicks a front end would not have offered in the first place.
    pub fn is_reported(&self) -> bool {
        matches!(
            self,
            Self::InvalidWager
                | Self::InvalidBombCount { .. }
                | Self::InsufficientBalance { .. }
                | Self::EmptyCode
                | Self::InvalidCode
        )
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWager => write!(f, "Enter a valid wager greater than 0."),
            Self::InvalidBombCount { .. } => write!(f, "Choose a valid bomb count."),
            Self::InsufficientBalance { .. } => write!(f, "Insufficient balance for that wager."),
            Self::EmptyCode => write!(f, "Enter a code."),
            Self::InvalidCode => write!(f, "Invalid creator code."),
            Self::RoundInProgress => write!(f, "A round is already in progress."),
            Self::NoActiveRound => write!(f, "No round in progress."),
            Self::TileOutOfRange { tile, tiles } => {
                write!(f, "Tile {} is outside the board (0..{}).", tile, tiles)
            }
            Self::TileAlreadyRevealed { tile } => write!(f, "Tile {} is already revealed.", tile),
            Self::AwaitingAcknowledgement => write!(f, "Dismiss the current message first."),
        }
    }
}

impl Error for GameError {}
