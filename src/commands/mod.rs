//! Route front-end commands onto a [`Session`].

use purple_mines_common::protocol::{Command, Notice, NoticeKind, Snapshot};
use rand::Rng;
use tracing::debug;

use crate::{
    logic::{AfterAck, Session},
    store::Store,
};

pub mod input;
pub mod render;

/// Apply `command` and return what the front end should draw next.
///
/// Refusals the player should hear about become an error notice; the rest
/// are dropped.
pub fn dispatch<S: Store, R: Rng>(session: &mut Session<S, R>, command: Command) -> Snapshot {
    let result = match command {
        Command::Start { params } => session
            .start_round(params.wager, params.bombs)
            .map(|_| ()),
        Command::Reveal { tile } => session.reveal_tile(tile).map(|_| ()),
        Command::Cashout => session.cash_out().map(|_| ()),
        Command::Code { text } => session.redeem_code(&text).map(|_| ()),
        Command::Acknowledge => {
            session.acknowledge();
            Ok(())
        }
        Command::DismissIntro { remember } => {
            session.dismiss_intro(remember);
            Ok(())
        }
    };

    if let Err(e) = result {
        if e.is_reported() {
            session.post(
                Notice {
                    kind: NoticeKind::Error,
                    message: e.to_string(),
                },
                AfterAck::Nothing,
            );
        } else {
            debug!("Ignored command: {}", e);
        }
    }

    session.snapshot()
}
