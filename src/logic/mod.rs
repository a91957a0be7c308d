use purple_mines_common::{
    models::{Cents, Multiplier, Tile},
    protocol::{Notice, NoticeKind, Snapshot},
};
use rand::{Rng, rngs::ThreadRng};
use tracing::{debug, info, instrument, warn};

use crate::{
    data::{Grid, Phase, Round},
    error::GameError,
    store::{Store, keys},
};

pub mod ledger;
pub mod odds;

use ledger::{CreatorCode, Ledger, PRIZE_MESSAGE, crosses_prize_threshold};

pub const DEFAULT_WAGER: Cents = Cents(100);
pub const DEFAULT_BOMBS: usize = 3;

pub const LOSS_MESSAGE: &str = "You hit a bomb! You Suck!";

/// What happens once the player dismisses a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AfterAck {
    Nothing,
    ResetRound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pending {
    pub notice: Notice,
    pub after: AfterAck,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reveal {
    Safe { tile: usize, multiplier: Multiplier },
    Bomb { tile: usize, bombs: Vec<usize> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Started {
    pub wager: Cents,
    pub bombs: usize,
    /// Balance after the wager was taken.
    pub balance: Cents,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cashout {
    pub winnings: Cents,
    pub balance: Cents,
    pub prize_unlocked: bool,
}

/// One player's game: the balance, the live round and the pending notice.
///
/// All mutation goes through `&mut self`; whoever runs the event loop owns it.
pub struct Session<S: Store, R: Rng = ThreadRng> {
    grid: Grid,
    store: S,
    rng: R,
    ledger: Ledger,
    phase: Phase,
    pending: Option<Pending>,
    wager: Cents,
    last_bombs: usize,
    intro_visible: bool,
}

impl<S: Store> Session<S> {
    pub fn new(grid: Grid, store: S) -> Self {
        Self::with_rng(grid, store, rand::rng())
    }
}

impl<S: Store, R: Rng> Session<S, R> {
    pub fn with_rng(grid: Grid, store: S, rng: R) -> Self {
        let ledger = Ledger::load(&store);

        let wager = store
            .get(keys::LAST_WAGER)
            .and_then(|text| Cents::parse(&text))
            .filter(|wager| *wager > Cents::ZERO)
            .unwrap_or(DEFAULT_WAGER);
        let last_bombs = store
            .get(keys::LAST_BOMBS)
            .and_then(|text| text.trim().parse::<usize>().ok())
            .filter(|bombs| (1..=grid.max_bombs()).contains(bombs))
            .unwrap_or(DEFAULT_BOMBS.min(grid.max_bombs()));
        let intro_visible = store.get(keys::INTRO_DISMISSED).is_none();

        info!(
            "Session loaded: {}x{} board, balance ${}",
            grid.rows,
            grid.cols,
            ledger.balance()
        );

        Self {
            grid,
            store,
            rng,
            ledger,
            phase: Phase::Idle,
            pending: None,
            wager,
            last_bombs,
            intro_visible,
        }
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn balance(&self) -> Cents {
        self.ledger.balance()
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn round(&self) -> Option<&Round> {
        self.phase.round()
    }

    pub fn pending(&self) -> Option<&Pending> {
        self.pending.as_ref()
    }

    /// The wager shown when idle: the last one placed or the saved default.
    pub fn last_wager(&self) -> Cents {
        self.wager
    }

    pub fn last_bombs(&self) -> usize {
        self.last_bombs
    }

    pub fn intro_visible(&self) -> bool {
        self.intro_visible
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Place a wager and open a fresh board.
    #[instrument(level = "trace", skip(self))]
    pub fn start_round(&mut self, wager: f64, bombs: usize) -> Result<Started, GameError> {
        if self.pending.is_some() {
            return Err(GameError::AwaitingAcknowledgement);
        }
        if !matches!(self.phase, Phase::Idle) {
            return Err(GameError::RoundInProgress);
        }
        if !wager.is_finite() || wager <= 0.0 {
            return Err(GameError::InvalidWager);
        }
        let max = self.grid.max_bombs();
        if !(1..=max).contains(&bombs) {
            return Err(GameError::InvalidBombCount { max });
        }
        let entered = wager;
        let wager = Cents::from_amount(entered)
            .ok_or(GameError::InvalidWager)?
            .max(Cents(1));
        // Compare against what was typed, not the rounded amount.
        if self.ledger.balance().as_amount() < entered || !self.ledger.can_afford(wager) {
            return Err(GameError::InsufficientBalance {
                balance: self.ledger.balance(),
                wager,
            });
        }

        let balance = self.ledger.debit(wager, &mut self.store)?;
        self.store.set(keys::LAST_WAGER, &wager.to_string());
        self.store.set(keys::LAST_BOMBS, &bombs.to_string());
        self.wager = wager;
        self.last_bombs = bombs;

        let bomb_positions = odds::place_bombs(self.grid.tiles(), bombs, &mut self.rng);
        debug!("Bombs placed: {:?}", bomb_positions);

        info!("Round started: wager ${} with {} bombs", wager, bombs);
        self.phase = Phase::Active(Round::new(wager, bomb_positions));

        Ok(Started {
            wager,
            bombs,
            balance,
        })
    }

    /// Uncover one tile of the live round.
    #[instrument(level = "trace", skip(self))]
    pub fn reveal_tile(&mut self, tile: usize) -> Result<Reveal, GameError> {
        if self.pending.is_some() {
            return Err(GameError::AwaitingAcknowledgement);
        }
        let tiles = self.grid.tiles();
        let Phase::Active(round) = &mut self.phase else {
            return Err(GameError::NoActiveRound);
        };
        if tile >= tiles {
            return Err(GameError::TileOutOfRange { tile, tiles });
        }
        if round.revealed.contains(&tile) {
            return Err(GameError::TileAlreadyRevealed { tile });
        }

        if round.bomb_positions.contains(tile) {
            round.reveal_bombs();
            round.multiplier = Multiplier::ONE;
            let bombs: Vec<usize> = round.bomb_positions.iter().collect();

            info!("Bomb hit at tile {}, wager ${} lost", tile, round.wager);
            self.end_round(Phase::BombHit);
            self.post(
                Notice {
                    kind: NoticeKind::Loss,
                    message: LOSS_MESSAGE.to_string(),
                },
                AfterAck::ResetRound,
            );

            return Ok(Reveal::Bomb { tile, bombs });
        }

        round.revealed.insert(tile);
        round.safe_count += 1;
        round.multiplier = odds::calc_multiplier(round.safe_count, round.bombs, tiles);
        debug!(
            "Safe tile {} ({} safe), multiplier {}x",
            tile, round.safe_count, round.multiplier
        );

        Ok(Reveal::Safe {
            tile,
            multiplier: round.multiplier,
        })
    }

    /// Collect `wager × multiplier` and end the live round.
    #[instrument(level = "trace", skip(self))]
    pub fn cash_out(&mut self) -> Result<Cashout, GameError> {
        if self.pending.is_some() {
            return Err(GameError::AwaitingAcknowledgement);
        }
        let Phase::Active(round) = &self.phase else {
            return Err(GameError::NoActiveRound);
        };

        let winnings = round.potential();
        let before = self.ledger.balance();
        let balance = self.ledger.credit(winnings, &mut self.store);
        let prize_unlocked = crosses_prize_threshold(before, balance);

        info!(
            "Cashed out ${} at {}x after {} safe tiles",
            winnings, round.multiplier, round.safe_count
        );
        self.end_round(Phase::CashedOut);

        let mut message = format!("Cashed out: ${}", winnings);
        if prize_unlocked {
            message.push_str("\n\n");
            message.push_str(PRIZE_MESSAGE);
        }
        self.post(
            Notice {
                kind: NoticeKind::Win,
                message,
            },
            AfterAck::ResetRound,
        );

        Ok(Cashout {
            winnings,
            balance,
            prize_unlocked,
        })
    }

    /// Apply a creator code typed by the player.
    #[instrument(level = "trace", skip(self))]
    pub fn redeem_code(&mut self, raw: &str) -> Result<CreatorCode, GameError> {
        if self.pending.is_some() {
            return Err(GameError::AwaitingAcknowledgement);
        }
        let code = CreatorCode::parse(raw)?;

        let kind = match code {
            CreatorCode::Present => NoticeKind::Win,
            CreatorCode::Broke => {
                self.ledger.credit(ledger::BROKE_BONUS, &mut self.store);
                NoticeKind::Info
            }
        };
        info!("Creator code redeemed: {:?}", code);
        self.post(
            Notice {
                kind,
                message: code.message(),
            },
            AfterAck::Nothing,
        );

        Ok(code)
    }

    /// Show `notice` until acknowledged. There is a single slot.
    pub fn post(&mut self, notice: Notice, after: AfterAck) {
        if let Some(previous) = self.pending.take() {
            warn!(
                "Notice {:?} replaced before it was acknowledged",
                previous.notice.message
            );
        }
        self.pending = Some(Pending { notice, after });
    }

    /// Dismiss the pending notice and run whatever it was holding back.
    #[instrument(level = "trace", skip(self))]
    pub fn acknowledge(&mut self) -> Option<Notice> {
        let Pending { notice, after } = self.pending.take()?;
        if after == AfterAck::ResetRound {
            self.reset_after_round();
        }
        Some(notice)
    }

    pub fn dismiss_intro(&mut self, remember: bool) {
        if remember {
            self.store.set(keys::INTRO_DISMISSED, "1");
        }
        self.intro_visible = false;
    }

    pub fn snapshot(&self) -> Snapshot {
        let round = self.phase.round();
        let tiles = (0..self.grid.tiles())
            .map(|index| round.map_or(Tile::Hidden, |round| round.tile(index)))
            .collect();
        let (wager, multiplier) =
            round.map_or((self.wager, Multiplier::ONE), |r| (r.wager, r.multiplier));
        let potential = wager.scale(multiplier);
        let idle = self.pending.is_none();

        Snapshot {
            rows: self.grid.rows,
            cols: self.grid.cols,
            tiles,
            tiles_enabled: idle && self.phase.is_active(),
            wager: format!("${}", wager),
            multiplier: format!("{}x", multiplier),
            potential: if potential > Cents::ZERO {
                format!("${}", potential)
            } else {
                "—".to_string()
            },
            balance: format!("${}", self.ledger.balance()),
            start_enabled: idle && matches!(self.phase, Phase::Idle),
            cashout_enabled: idle && self.phase.is_active(),
            intro_visible: self.intro_visible,
            notice: self.pending.as_ref().map(|pending| pending.notice.clone()),
        }
    }

    fn end_round(&mut self, terminal: fn(Round) -> Phase) {
        self.phase = match std::mem::take(&mut self.phase) {
            Phase::Active(round) => terminal(round),
            other => other,
        };
    }

    fn reset_after_round(&mut self) {
        debug!("Clearing {} round", self.phase.name());
        self.phase = Phase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::store::MemoryStore;

    fn session_with_balance(balance: &str) -> Session<MemoryStore, StdRng> {
        let store = MemoryStore::new().with(keys::BALANCE, balance);
        Session::with_rng(Grid::DEFAULT, store, StdRng::seed_from_u64(42))
    }

    fn safe_tiles(session: &Session<MemoryStore, StdRng>) -> Vec<usize> {
        let round = session.round().unwrap();
        (0..session.grid().tiles())
            .filter(|tile| !round.bomb_positions.contains(*tile))
            .collect()
    }

    fn first_bomb(session: &Session<MemoryStore, StdRng>) -> usize {
        session.round().unwrap().bomb_positions.iter().next().unwrap()
    }

    #[test]
    fn fresh_session_uses_defaults() {
        let session = Session::with_rng(
            Grid::DEFAULT,
            MemoryStore::new(),
            StdRng::seed_from_u64(1),
        );
        assert_eq!(session.balance(), Cents(300));
        assert_eq!(session.last_wager(), Cents(100));
        assert_eq!(session.last_bombs(), 3);
        assert!(session.intro_visible());
        assert!(matches!(session.phase(), Phase::Idle));
    }

    #[test]
    fn saved_preferences_are_restored() {
        let store = MemoryStore::new()
            .with(keys::LAST_WAGER, "2.50")
            .with(keys::LAST_BOMBS, "7")
            .with(keys::INTRO_DISMISSED, "1");
        let session = Session::with_rng(Grid::DEFAULT, store, StdRng::seed_from_u64(1));
        assert_eq!(session.last_wager(), Cents(250));
        assert_eq!(session.last_bombs(), 7);
        assert!(!session.intro_visible());
    }

    #[test]
    fn out_of_range_saved_bombs_fall_back() {
        let store = MemoryStore::new().with(keys::LAST_BOMBS, "25");
        let session = Session::with_rng(Grid::DEFAULT, store, StdRng::seed_from_u64(1));
        assert_eq!(session.last_bombs(), 3);
    }

    #[test]
    fn unusable_saved_wager_falls_back() {
        for saved in ["abc", "0", "-2", "", "NaN"] {
            let store = MemoryStore::new().with(keys::LAST_WAGER, saved);
            let session = Session::with_rng(Grid::DEFAULT, store, StdRng::seed_from_u64(1));
            assert_eq!(session.last_wager(), DEFAULT_WAGER, "saved {:?}", saved);
        }
    }

    #[test]
    fn unusable_saved_bombs_fall_back() {
        for saved in ["three", "0", "-1", "2.5", ""] {
            let store = MemoryStore::new().with(keys::LAST_BOMBS, saved);
            let session = Session::with_rng(Grid::DEFAULT, store, StdRng::seed_from_u64(1));
            assert_eq!(session.last_bombs(), DEFAULT_BOMBS, "saved {:?}", saved);
        }
    }

    #[test]
    fn start_debits_and_persists() {
        let mut session = session_with_balance("10.00");
        let started = session.start_round(5.0, 3).unwrap();
        assert_eq!(
            started,
            Started {
                wager: Cents(500),
                bombs: 3,
                balance: Cents(500)
            }
        );

        let round = session.round().unwrap();
        assert_eq!(round.wager, Cents(500));
        assert_eq!(round.bomb_positions.len(), 3);
        assert!(round.revealed.is_empty());
        assert_eq!(round.multiplier, Multiplier::ONE);
        assert!(session.phase().is_active());
        assert_eq!(session.balance(), Cents(500));
        assert_eq!(session.store().get(keys::BALANCE).as_deref(), Some("5.00"));
        assert_eq!(session.store().get(keys::LAST_WAGER).as_deref(), Some("5.00"));
        assert_eq!(session.store().get(keys::LAST_BOMBS).as_deref(), Some("3"));
    }

    #[test]
    fn tiny_wagers_round_up_to_a_cent() {
        let mut session = session_with_balance("1.00");
        let started = session.start_round(0.001, 1).unwrap();
        assert_eq!(started.wager, Cents(1));
        assert_eq!(session.balance(), Cents(99));
    }

    #[test]
    fn affordability_uses_the_entered_wager() {
        let mut session = session_with_balance("3.00");
        assert_eq!(
            session.start_round(3.004, 3).unwrap_err(),
            GameError::InsufficientBalance {
                balance: Cents(300),
                wager: Cents(300)
            }
        );
        assert_eq!(session.balance(), Cents(300));
        assert!(matches!(session.phase(), Phase::Idle));

        assert_eq!(session.start_round(2.996, 3).unwrap().wager, Cents(300));
        assert_eq!(session.balance(), Cents::ZERO);
    }

    #[test]
    fn cent_wager_needs_a_cent() {
        let mut session = session_with_balance("0.00");
        assert!(matches!(
            session.start_round(0.001, 1).unwrap_err(),
            GameError::InsufficientBalance { .. }
        ));
    }

    #[test]
    fn invalid_starts_change_nothing() {
        let mut session = session_with_balance("3.00");

        assert_eq!(session.start_round(0.0, 3).unwrap_err(), GameError::InvalidWager);
        assert_eq!(session.start_round(-2.0, 3).unwrap_err(), GameError::InvalidWager);
        assert_eq!(
            session.start_round(f64::NAN, 3).unwrap_err(),
            GameError::InvalidWager
        );
        assert_eq!(
            session.start_round(1.0, 0).unwrap_err(),
            GameError::InvalidBombCount { max: 24 }
        );
        assert_eq!(
            session.start_round(1.0, 25).unwrap_err(),
            GameError::InvalidBombCount { max: 24 }
        );
        assert_eq!(
            session.start_round(3.01, 3).unwrap_err(),
            GameError::InsufficientBalance {
                balance: Cents(300),
                wager: Cents(301)
            }
        );

        assert_eq!(session.balance(), Cents(300));
        assert!(matches!(session.phase(), Phase::Idle));
        assert!(session.pending().is_none());
        assert_eq!(session.store().get(keys::LAST_WAGER), None);
    }

    #[test]
    fn second_start_is_refused_mid_round() {
        let mut session = session_with_balance("10.00");
        session.start_round(1.0, 3).unwrap();
        assert_eq!(
            session.start_round(1.0, 3).unwrap_err(),
            GameError::RoundInProgress
        );
        assert_eq!(session.balance(), Cents(900));
    }

    #[test]
    fn safe_reveal_raises_multiplier() {
        let mut session = session_with_balance("10.00");
        session.start_round(5.0, 3).unwrap();
        let tile = safe_tiles(&session)[0];

        let reveal = session.reveal_tile(tile).unwrap();
        assert_eq!(
            reveal,
            Reveal::Safe {
                tile,
                multiplier: Multiplier(115)
            }
        );
        let round = session.round().unwrap();
        assert_eq!(round.safe_count, 1);
        assert_eq!(round.tile(tile), Tile::Safe);
        assert_eq!(round.potential(), Cents(575));
    }

    #[test]
    fn repeat_and_stray_reveals_are_ignored() {
        let mut session = session_with_balance("10.00");
        assert_eq!(session.reveal_tile(0).unwrap_err(), GameError::NoActiveRound);

        session.start_round(1.0, 3).unwrap();
        let tile = safe_tiles(&session)[0];
        session.reveal_tile(tile).unwrap();

        assert_eq!(
            session.reveal_tile(tile).unwrap_err(),
            GameError::TileAlreadyRevealed { tile }
        );
        assert_eq!(
            session.reveal_tile(25).unwrap_err(),
            GameError::TileOutOfRange {
                tile: 25,
                tiles: 25
            }
        );
        assert_eq!(session.round().unwrap().safe_count, 1);
    }

    #[test]
    fn bomb_reveals_every_bomb_and_waits_for_ack() {
        let mut session = session_with_balance("10.00");
        session.start_round(2.0, 5).unwrap();
        let safe = safe_tiles(&session)[0];
        session.reveal_tile(safe).unwrap();
        let bomb = first_bomb(&session);

        let Reveal::Bomb { tile, bombs } = session.reveal_tile(bomb).unwrap() else {
            panic!("expected a bomb");
        };
        assert_eq!(tile, bomb);
        assert_eq!(bombs.len(), 5);

        assert!(matches!(session.phase(), Phase::BombHit(_)));
        let round = session.round().unwrap();
        assert_eq!(round.multiplier, Multiplier::ONE);
        for bomb in bombs {
            assert_eq!(round.tile(bomb), Tile::Bomb);
        }
        assert_eq!(session.balance(), Cents(800));

        let pending = session.pending().unwrap();
        assert_eq!(pending.notice.kind, NoticeKind::Loss);
        assert_eq!(pending.after, AfterAck::ResetRound);
        assert_eq!(
            session.start_round(1.0, 3).unwrap_err(),
            GameError::AwaitingAcknowledgement
        );

        let notice = session.acknowledge().unwrap();
        assert_eq!(notice.message, LOSS_MESSAGE);
        assert!(matches!(session.phase(), Phase::Idle));
        assert_eq!(session.balance(), Cents(800));
    }

    #[test]
    fn cash_out_credits_winnings() {
        let mut session = session_with_balance("10.00");
        session.start_round(5.0, 3).unwrap();
        let tile = safe_tiles(&session)[0];
        session.reveal_tile(tile).unwrap();

        let cashout = session.cash_out().unwrap();
        assert_eq!(cashout.winnings, Cents(575));
        assert_eq!(cashout.balance, Cents(1075));
        assert!(cashout.prize_unlocked);
        assert_eq!(session.store().get(keys::BALANCE).as_deref(), Some("10.75"));
        assert!(matches!(session.phase(), Phase::CashedOut(_)));

        let notice = session.acknowledge().unwrap();
        assert_eq!(
            notice.message,
            format!("Cashed out: $5.75\n\n{}", PRIZE_MESSAGE)
        );
        assert!(matches!(session.phase(), Phase::Idle));
        assert_eq!(session.cash_out().unwrap_err(), GameError::NoActiveRound);
    }

    #[test]
    fn cash_out_without_reveals_returns_the_wager() {
        let mut session = session_with_balance("3.00");
        session.start_round(1.0, 3).unwrap();
        let cashout = session.cash_out().unwrap();
        assert_eq!(cashout.winnings, Cents(100));
        assert_eq!(cashout.balance, Cents(300));
        assert!(!cashout.prize_unlocked);
        assert_eq!(session.acknowledge().unwrap().message, "Cashed out: $1.00");
    }

    #[test]
    fn prize_message_needs_a_fresh_crossing() {
        let mut session = session_with_balance("20.00");
        session.start_round(1.0, 3).unwrap();
        let cashout = session.cash_out().unwrap();
        assert!(!cashout.prize_unlocked);
        assert!(!session.acknowledge().unwrap().message.contains(PRIZE_MESSAGE));
    }

    #[test]
    fn creator_codes_adjust_balance_or_congratulate() {
        let mut session = session_with_balance("1.00");

        assert_eq!(session.redeem_code("ILOVEJACK"), Ok(CreatorCode::Present));
        assert_eq!(session.balance(), Cents(100));
        assert_eq!(
            session.redeem_code("imbroke").unwrap_err(),
            GameError::AwaitingAcknowledgement
        );
        session.acknowledge().unwrap();

        assert_eq!(session.redeem_code(" imbroke "), Ok(CreatorCode::Broke));
        assert_eq!(session.balance(), Cents(400));
        assert_eq!(session.store().get(keys::BALANCE).as_deref(), Some("4.00"));
        session.acknowledge().unwrap();

        assert_eq!(session.redeem_code("nope").unwrap_err(), GameError::InvalidCode);
        assert_eq!(session.redeem_code("").unwrap_err(), GameError::EmptyCode);
        assert_eq!(session.balance(), Cents(400));
    }

    #[test]
    fn posting_over_a_pending_notice_replaces_it() {
        let mut session = session_with_balance("1.00");
        let notice = |message: &str| Notice {
            kind: NoticeKind::Info,
            message: message.to_string(),
        };
        session.post(notice("first"), AfterAck::Nothing);
        session.post(notice("second"), AfterAck::Nothing);

        assert_eq!(session.acknowledge().unwrap().message, "second");
        assert!(session.acknowledge().is_none());
    }

    #[test]
    fn snapshot_reflects_controls() {
        let mut session = session_with_balance("10.00");
        let idle = session.snapshot();
        assert!(idle.start_enabled);
        assert!(!idle.cashout_enabled);
        assert!(!idle.tiles_enabled);
        assert_eq!(idle.balance, "$10.00");
        assert_eq!(idle.multiplier, "1.00x");
        assert_eq!(idle.tiles.len(), 25);

        session.start_round(5.0, 3).unwrap();
        let tile = safe_tiles(&session)[0];
        session.reveal_tile(tile).unwrap();
        let active = session.snapshot();
        assert!(!active.start_enabled);
        assert!(active.cashout_enabled);
        assert!(active.tiles_enabled);
        assert_eq!(active.wager, "$5.00");
        assert_eq!(active.multiplier, "1.15x");
        assert_eq!(active.potential, "$5.75");
        assert_eq!(active.balance, "$5.00");
        assert_eq!(active.tiles[tile], Tile::Safe);

        session.cash_out().unwrap();
        let over = session.snapshot();
        assert!(!over.start_enabled);
        assert!(!over.cashout_enabled);
        assert!(!over.tiles_enabled);
        assert_eq!(over.notice.map(|n| n.kind), Some(NoticeKind::Win));
    }

    #[test]
    fn dismissing_intro_can_be_remembered() {
        let mut session = session_with_balance("1.00");
        session.dismiss_intro(false);
        assert!(!session.intro_visible());
        assert_eq!(session.store().get(keys::INTRO_DISMISSED), None);

        session.dismiss_intro(true);
        assert_eq!(
            session.store().get(keys::INTRO_DISMISSED).as_deref(),
            Some("1")
        );
    }
}
