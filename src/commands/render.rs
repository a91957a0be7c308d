use std::{
    error::Error,
    fmt::Write as _,
    io::{self, Write},
};

use purple_mines_common::{models::Tile, protocol::Snapshot};

pub const INTRO: &str = "\
Welcome to Purple Mines!
Place a wager, pick how many bombs hide on the board, then uncover tiles.
Every safe tile raises your multiplier. Cash out before you hit a bomb.
Type 'dismiss' to close this, or 'dismiss forever' to never see it again.";

/// Draw a snapshot as plain text.
pub fn render(snapshot: &Snapshot) -> String {
    let mut out = String::new();

    if snapshot.intro_visible {
        let _ = writeln!(out, "{}\n", INTRO);
    }

    let _ = writeln!(
        out,
        "Balance {}  |  Wager {}  |  Multiplier {}  |  Potential {}",
        snapshot.balance, snapshot.wager, snapshot.multiplier, snapshot.potential
    );

    let width = snapshot.tiles.len().saturating_sub(1).to_string().len().max(2);
    for (r, tiles) in snapshot.tiles.chunks(snapshot.cols.max(1)).enumerate() {
        let cells: Vec<String> = tiles
            .iter()
            .enumerate()
            .map(|(c, tile)| {
                let label = match tile {
                    Tile::Hidden if snapshot.tiles_enabled => (r * snapshot.cols + c).to_string(),
                    Tile::Hidden => "·".to_string(),
                    Tile::Safe => "✔".to_string(),
                    Tile::Bomb => "💣".to_string(),
                };
                format!("{:>width$}", label, width = width)
            })
            .collect();
        let _ = writeln!(out, " {}", cells.join(" "));
    }

    let mut controls = Vec::new();
    if snapshot.start_enabled {
        controls.push("start");
    }
    if snapshot.cashout_enabled {
        controls.push("cashout");
    }
    if !controls.is_empty() {
        let _ = writeln!(out, "[{}]", controls.join("] ["));
    }

    if let Some(notice) = &snapshot.notice {
        let _ = writeln!(out, "\n{}\n(press enter)", notice.message);
    }

    out
}

/// Where a terminal front end writes. Snapshots go to `out`, either drawn
/// or as one JSON object per line; in JSON mode all other text goes to `err`
/// so `out` stays machine readable.
pub struct Console<O: Write, E: Write> {
    out: O,
    err: E,
    json: bool,
}

impl<O: Write, E: Write> Console<O, E> {
    pub fn new(out: O, err: E, json: bool) -> Self {
        Self { out, err, json }
    }

    pub fn emit(&mut self, snapshot: &Snapshot) -> Result<(), Box<dyn Error + Send + Sync>> {
        if self.json {
            writeln!(self.out, "{}", serde_json::to_string(snapshot)?)?;
        } else {
            write!(self.out, "{}", render(snapshot))?;
        }
        self.out.flush()?;
        Ok(())
    }

    pub fn say(&mut self, text: &str) -> io::Result<()> {
        let target: &mut dyn Write = if self.json {
            &mut self.err
        } else {
            &mut self.out
        };
        writeln!(target, "{}", text)?;
        target.flush()
    }
}
