//! RNG module - variant selection
//!
//! Each new piece is drawn uniformly from the seven variants. Seeding is
//! explicit: a fixed seed replays the same sequence, entropy gives real play.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::Variant;

/// Uniform variant generator
#[derive(Debug, Clone)]
pub struct VariantPicker {
    rng: StdRng,
    seed: Option<u64>,
}

impl VariantPicker {
    /// Deterministic picker for the given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Picker seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            seed: None,
        }
    }

    /// Draw the next variant.
    pub fn next_variant(&mut self) -> Variant {
        Variant::ALL[self.rng.gen_range(0..Variant::ALL.len())]
    }

    /// Seed this picker started from, if it was seeded explicitly.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// A fresh picker for a restarted game.
    ///
    /// Seeded pickers replay from their seed; entropy pickers draw new entropy.
    pub fn restarted(&self) -> Self {
        match self.seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl Default for VariantPicker {
    fn default() -> Self {
        Self::seeded(1)
    }
}
