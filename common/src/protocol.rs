use serde::{Deserialize, Serialize};

use crate::models::{RoundParams, Tile};

/// A player action sent by a front end.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "action")]
pub enum Command {
    #[serde(rename = "start")]
    Start { params: RoundParams },
    #[serde(rename = "reveal")]
    Reveal { tile: usize },
    #[serde(rename = "cashout")]
    Cashout,
    #[serde(rename = "code")]
    Code { text: String },
    #[serde(rename = "acknowledge")]
    Acknowledge,
    #[serde(rename = "dismiss_intro")]
    DismissIntro { remember: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    Info,
    Error,
    Win,
    Loss,
}

/// A message the player has to acknowledge before playing on.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

/// Everything a front end needs to draw the game.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Snapshot {
    pub rows: usize,
    pub cols: usize,
    pub tiles: Vec<Tile>,
    pub tiles_enabled: bool,
    pub wager: String,
    pub multiplier: String,
    pub potential: String,
    pub balance: String,
    pub start_enabled: bool,
    pub cashout_enabled: bool,
    pub intro_visible: bool,
    pub notice: Option<Notice>,
}
