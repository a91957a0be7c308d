//! Bomb placement and payout odds.

use purple_mines_common::models::Multiplier;
use rand::Rng;

use crate::data::BombSet;

/// Premium paid over fair odds.
pub const PAYOUT_PREMIUM: f64 = 1.01;

/// House edge that would be applied on top of [`PAYOUT_PREMIUM`]. Not applied.
pub const HOUSE_EDGE: f64 = 0.98;

/// Pick `bombs` distinct tiles out of `tiles`, every subset equally likely.
///
/// Shuffles the identity permutation with Fisher-Yates and keeps the prefix.
pub fn place_bombs<R: Rng>(tiles: usize, bombs: usize, rng: &mut R) -> BombSet {
    let mut indices: Vec<usize> = (0..tiles).collect();

    for i in (1..tiles).rev() {
        let j = rng.random_range(0..=i);
        indices.swap(i, j);
    }

    indices.truncate(bombs.min(tiles));
    BombSet::from_indices(indices)
}

/// Probability of revealing `safe_count` tiles in a row without hitting one
/// of `bombs` bombs, drawing without replacement.
pub fn survival_probability(safe_count: usize, bombs: usize, tiles: usize) -> f64 {
    let mut probability = 1.0;

    for i in 0..safe_count {
        let safe_left = tiles as i64 - bombs as i64 - i as i64;
        let total_left = tiles as i64 - i as i64;
        if safe_left <= 0 {
            return 0.0;
        }
        probability *= safe_left as f64 / total_left as f64;
    }

    probability
}

/// Payout multiplier after `safe_count` safe reveals on a board of `tiles`
/// with `bombs` bombs, rounded to two decimals.
///
/// Claiming more safe reveals than there are safe tiles saturates at `tiles`.
pub fn calc_multiplier(safe_count: usize, bombs: usize, tiles: usize) -> Multiplier {
    if safe_count == 0 {
        return Multiplier::ONE;
    }

    let bombs = bombs.min(tiles.saturating_sub(1));
    let probability = survival_probability(safe_count, bombs, tiles);
    if probability <= 0.0 {
        return Multiplier::from_factor(tiles as f64);
    }

    let fair = 1.0 / probability;
    Multiplier::from_factor((fair * PAYOUT_PREMIUM).max(1.0))
}
