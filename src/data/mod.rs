use std::collections::BTreeSet;

use purple_mines_common::models::{Cents, Multiplier, Tile};

/// Board dimensions. Fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub rows: usize,
    pub cols: usize,
}

impl Grid {
    pub const DEFAULT: Grid = Grid { rows: 5, cols: 5 };

    pub const MAX_SIDE: usize = 32;

    /// A grid needs room for at least one bomb and one safe tile, and no side
    /// longer than [`Grid::MAX_SIDE`].
    pub fn new(rows: usize, cols: usize) -> Option<Self> {
        if rows > Self::MAX_SIDE || cols > Self::MAX_SIDE || rows * cols < 2 {
            return None;
        }
        Some(Self { rows, cols })
    }

    pub fn tiles(&self) -> usize {
        self.rows * self.cols
    }

    pub fn max_bombs(&self) -> usize {
        self.tiles() - 1
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Distinct bomb indices for one round. Read-only once placed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BombSet(BTreeSet<usize>);

impl BombSet {
    pub(crate) fn from_indices(indices: impl IntoIterator<Item = usize>) -> Self {
        Self(indices.into_iter().collect())
    }

    pub fn contains(&self, tile: usize) -> bool {
        self.0.contains(&tile)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }
}

#[derive(Debug, Clone)]
pub struct Round {
    pub wager: Cents,
    pub bombs: usize,
    pub bomb_positions: BombSet,
    pub revealed: BTreeSet<usize>,
    pub safe_count: usize,
    pub multiplier: Multiplier,
}

impl Round {
    pub fn new(wager: Cents, bomb_positions: BombSet) -> Self {
        Self {
            wager,
            bombs: bomb_positions.len(),
            bomb_positions,
            revealed: BTreeSet::new(),
            safe_count: 0,
            multiplier: Multiplier::ONE,
        }
    }

    /// What the player would collect by cashing out now.
    pub fn potential(&self) -> Cents {
        self.wager.scale(self.multiplier)
    }

    pub fn tile(&self, index: usize) -> Tile {
        match (
            self.revealed.contains(&index),
            self.bomb_positions.contains(index),
        ) {
            (false, _) => Tile::Hidden,
            (true, true) => Tile::Bomb,
            (true, false) => Tile::Safe,
        }
    }

    pub(crate) fn reveal_bombs(&mut self) {
        self.revealed.extend(self.bomb_positions.iter());
    }
}

/// Where the session is in the round lifecycle.
#[derive(Debug, Clone, Default)]
pub enum Phase {
    #[default]
    Idle,
    Active(Round),
    CashedOut(Round),
    BombHit(Round),
}

impl Phase {
    pub fn round(&self) -> Option<&Round> {
        match self {
            Phase::Idle => None,
            Phase::Active(round) | Phase::CashedOut(round) | Phase::BombHit(round) => Some(round),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Phase::Active(_))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Active(_) => "active",
            Phase::CashedOut(_) => "cashed_out",
            Phase::BombHit(_) => "bomb_hit",
        }
    }
}
