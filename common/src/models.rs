use std::fmt;

use serde::{Deserialize, Serialize};

/// A non-negative currency amount held as whole cents.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Cents(pub u64);

impl Cents {
    pub const ZERO: Cents = Cents(0);

    /// Convert a decimal amount, rounding to the nearest cent.
    ///
    /// Returns `None` for non-finite, negative or unrepresentable amounts.
    pub fn from_amount(amount: f64) -> Option<Self> {
        if !amount.is_finite() || amount < 0.0 {
            return None;
        }
        let cents = (amount * 100.0).round();
        if cents > u64::MAX as f64 {
            return None;
        }
        Some(Self(cents as u64))
    }

    /// Parse a decimal string such as `"5"`, `"1.00"` or `" 2.5 "`.
    pub fn parse(text: &str) -> Option<Self> {
        text.trim().parse::<f64>().ok().and_then(Self::from_amount)
    }

    pub fn as_amount(self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub fn checked_sub(self, other: Cents) -> Option<Cents> {
        self.0.checked_sub(other.0).map(Cents)
    }

    pub fn saturating_add(self, other: Cents) -> Cents {
        Cents(self.0.saturating_add(other.0))
    }

    /// `self × multiplier`, rounded half up to the cent.
    pub fn scale(self, multiplier: Multiplier) -> Cents {
        let product = self.0 as u128 * multiplier.0 as u128;
        let rounded = (product + 50) / 100;
        Cents(u64::try_from(rounded).unwrap_or(u64::MAX))
    }
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// A payout multiplier held in hundredths (`100` is 1.00x).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Multiplier(pub u32);

impl Multiplier {
    pub const ONE: Multiplier = Multiplier(100);

    /// Round a factor to two decimals. Factors below 1.00 are clamped to 1.00.
    pub fn from_factor(factor: f64) -> Self {
        if factor.is_nan() || factor <= 1.0 {
            return Self::ONE;
        }
        let hundredths = (factor * 100.0).round();
        if hundredths >= u32::MAX as f64 {
            return Self(u32::MAX);
        }
        Self(hundredths as u32)
    }
}

impl Default for Multiplier {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// What a front end shows for one tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state")]
pub enum Tile {
    #[serde(rename = "hidden")]
    Hidden,
    #[serde(rename = "safe")]
    Safe,
    #[serde(rename = "bomb")]
    Bomb,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RoundParams {
    pub wager: f64,
    pub bombs: usize,
}

impl Default for RoundParams {
    fn default() -> Self {
        Self {
            wager: 1.00,
            bombs: 3,
        }
    }
}
