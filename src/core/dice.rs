//! Dice for initiative, behavior tables and attack rolls
//!
//! Every roll is zero-based: a d20 yields `0..20`. Behavior tables are
//! written against that range ("0-2 of 20 loots").

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;

/// Deterministic dice source owned by the world
#[derive(Debug, Clone)]
pub struct Dice {
    rng: ChaCha8Rng,
    /// Rolls to hand out before touching the generator (replays and tests)
    scripted: VecDeque<u32>,
}

impl Dice {
    /// Dice driven by a seeded ChaCha generator
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            scripted: VecDeque::new(),
        }
    }

    /// Dice that return the given rolls first, then fall back to seed 0
    ///
    /// Scripted values are reduced modulo the die size so that a replay
    /// can never produce an out-of-range face.
    pub fn scripted(rolls: impl IntoIterator<Item = u32>) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(0),
            scripted: rolls.into_iter().collect(),
        }
    }

    /// Queue more scripted rolls ahead of the generator
    pub fn push_rolls(&mut self, rolls: impl IntoIterator<Item = u32>) {
        self.scripted.extend(rolls);
    }

    /// Roll a die with `sides` faces, yielding `0..sides`
    pub fn roll(&mut self, sides: u32) -> u32 {
        let sides = sides.max(1);
        match self.scripted.pop_front() {
            Some(value) => value % sides,
            None => self.rng.gen_range(0..sides),
        }
    }

    pub fn d20(&mut self) -> u32 {
        self.roll(20)
    }

    pub fn d6(&mut self) -> u32 {
        self.roll(6)
    }

    /// Uniformly pick an index into a collection of `len` elements
    pub fn pick(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let sides = u32::try_from(len).unwrap_or(u32::MAX);
        Some(self.roll(sides) as usize)
    }
}

impl Default for Dice {
    fn default() -> Self {
        Self::seeded(0)
    }
}
