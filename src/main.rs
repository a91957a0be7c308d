use std::io::{Stderr, Stdout};

use purple_mines::{
    Session,
    commands::{
        dispatch,
        input::{HELP, Input, parse_line},
        render::Console,
    },
    config::Config,
    passcode::{self, GateState, PasscodeGate},
    store::FileStore,
};
use purple_mines_common::models::RoundParams;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

async fn play_passcode<R: AsyncBufRead + Unpin>(
    config: &Config,
    console: &mut Console<Stdout, Stderr>,
    input: R,
) -> Result<()> {
    let mut gate = PasscodeGate::new(config.passcode.clone());
    console.say(&format!(
        "Enter the {}-digit passcode. You have {} seconds.",
        passcode::CODE_LENGTH,
        config.passcode_time_limit.as_secs()
    ))?;

    let state = passcode::run(&mut gate, input, config.passcode_time_limit, |message| {
        let _ = console.say(message);
    })
    .await;

    console.say(match state {
        GateState::Won => "🏆 Victory!",
        GateState::Lost => "💥 Time's Up",
        GateState::Waiting | GateState::Retry => "Passcode round abandoned.",
    })?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env();
    info!("🚀 Starting Purple Mines with {:?}", config);

    let store = FileStore::open(&config.store_path);
    info!("📦 Using store at {}", store.path().display());
    let mut session = Session::new(config.grid, store);
    let mut console = Console::new(std::io::stdout(), std::io::stderr(), config.json_output);

    let mut input = BufReader::new(tokio::io::stdin());
    let mut line = String::new();

    console.emit(&session.snapshot())?;

    loop {
        line.clear();
        if input.read_line(&mut line).await? == 0 {
            break;
        }

        let defaults = RoundParams {
            wager: session.last_wager().as_amount(),
            bombs: session.last_bombs(),
        };
        match parse_line(&line, defaults) {
            Ok(Input::Command(command)) => {
                let snapshot = dispatch(&mut session, command);
                console.emit(&snapshot)?;
            }
            Ok(Input::Help) => console.say(HELP)?,
            Ok(Input::Passcode) => play_passcode(&config, &mut console, &mut input).await?,
            Ok(Input::Quit) => break,
            Err(e) => console.say(&e.to_string())?,
        }
    }

    info!("👋 Balance at exit: ${}", session.balance());
    Ok(())
}
