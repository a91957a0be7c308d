//! The persisted balance and the creator codes that adjust it.

use purple_mines_common::models::Cents;
use tracing::{debug, info};

use crate::{
    error::GameError,
    store::{Store, keys},
};

pub const STARTING_BALANCE: Cents = Cents(300);

/// Balance at which the present unlocks.
pub const PRIZE_THRESHOLD: Cents = Cents(1000);

pub const BROKE_BONUS: Cents = Cents(300);

pub const PRIZE_MESSAGE: &str = "Congratulations! You can now open your present!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    balance: Cents,
}

impl Ledger {
    /// Read the balance from `store`, seeding it when absent or unparseable.
    pub fn load<S: Store>(store: &S) -> Self {
        let balance = store
            .get(keys::BALANCE)
            .and_then(|text| Cents::parse(&text))
            .unwrap_or_else(|| {
                debug!("No usable saved balance, seeding ${}", STARTING_BALANCE);
                STARTING_BALANCE
            });

        Self { balance }
    }

    pub fn balance(&self) -> Cents {
        self.balance
    }

    pub fn can_afford(&self, amount: Cents) -> bool {
        self.balance >= amount
    }

    pub fn debit<S: Store>(&mut self, amount: Cents, store: &mut S) -> Result<Cents, GameError> {
        let balance =
            self.balance
                .checked_sub(amount)
                .ok_or(GameError::InsufficientBalance {
                    balance: self.balance,
                    wager: amount,
                })?;
        self.set(balance, store);
        Ok(balance)
    }

    pub fn credit<S: Store>(&mut self, amount: Cents, store: &mut S) -> Cents {
        let balance = self.balance.saturating_add(amount);
        self.set(balance, store);
        balance
    }

    fn set<S: Store>(&mut self, balance: Cents, store: &mut S) {
        info!("Balance ${} -> ${}", self.balance, balance);
        self.balance = balance;
        store.set(keys::BALANCE, &balance.to_string());
    }
}

/// Whether moving from `before` to `after` unlocks the present.
pub fn crosses_prize_threshold(before: Cents, after: Cents) -> bool {
    before < PRIZE_THRESHOLD && after >= PRIZE_THRESHOLD
}

/// Text commands that bypass the round loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreatorCode {
    /// Shows the win message. No balance effect.
    Present,
    /// Tops the balance up by [`BROKE_BONUS`].
    Broke,
}

impl CreatorCode {
    /// Match raw input, ignoring surrounding whitespace and case.
    pub fn parse(raw: &str) -> Result<Self, GameError> {
        match raw.trim().to_lowercase().as_str() {
            "" => Err(GameError::EmptyCode),
            "ilovejack" => Ok(Self::Present),
            "imbroke" => Ok(Self::Broke),
            _ => Err(GameError::InvalidCode),
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::Present => format!("You win! {}", PRIZE_MESSAGE),
            Self::Broke => format!(
                "Damn you broke as hell. Added ${} to your total balance.",
                BROKE_BONUS.0 / 100
            ),
        }
    }
}
