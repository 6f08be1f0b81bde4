//! Training blocks, gains and the cooldown gate.
//!
//! Each team carries four trainable counters capped at 20. A training action
//! rolls a seeded `1..=3` gain for one block, then locks the team out for 60
//! seconds. The gate is a single next-eligible-at timestamp compared against
//! a caller-supplied clock; nothing else is time-dependent in the engine.

use chrono::{DateTime, Duration, Utc};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Lockout between training sessions for one team.
pub const TRAINING_COOLDOWN_SECS: i64 = 60;

/// Per-block cap.
pub const TRAINING_BLOCK_MAX: u8 = 20;

/// The four trainable muscle groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrainingBlock {
    Legs,
    Core,
    Cardio,
    Power,
}

impl TrainingBlock {
    pub fn display_name(&self) -> &'static str {
        match self {
            TrainingBlock::Legs => "Legs",
            TrainingBlock::Core => "Core",
            TrainingBlock::Cardio => "Cardio",
            TrainingBlock::Power => "Power",
        }
    }
}

/// Accumulated training of one team, each block in `0..=20`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TrainingState {
    #[serde(default)]
    pub legs: u8,
    #[serde(default)]
    pub core: u8,
    #[serde(default)]
    pub cardio: u8,
    #[serde(default)]
    pub power: u8,
}

impl TrainingState {
    pub fn total(&self) -> u16 {
        self.legs as u16 + self.core as u16 + self.cardio as u16 + self.power as u16
    }

    pub fn block(&self, block: TrainingBlock) -> u8 {
        match block {
            TrainingBlock::Legs => self.legs,
            TrainingBlock::Core => self.core,
            TrainingBlock::Cardio => self.cardio,
            TrainingBlock::Power => self.power,
        }
    }

    /// Add `gain` to one block, clamped at the cap. Returns the applied
    /// delta, which can be smaller than `gain` near the cap.
    pub fn apply_gain(&mut self, block: TrainingBlock, gain: u8) -> u8 {
        let slot = match block {
            TrainingBlock::Legs => &mut self.legs,
            TrainingBlock::Core => &mut self.core,
            TrainingBlock::Cardio => &mut self.cardio,
            TrainingBlock::Power => &mut self.power,
        };
        let before = *slot;
        *slot = (*slot + gain).min(TRAINING_BLOCK_MAX);
        *slot - before
    }
}

/// Roll the gain for one training action: an integer in `1..=3`, seeded so a
/// recorded seed reproduces the session exactly.
pub fn roll_gain(seed: u64) -> u8 {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.gen_range(1..=3)
}

/// Whether a team may train at `now` given its stored gate timestamp.
pub fn is_ready(cooldown_until: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    match cooldown_until {
        Some(until) => now >= until,
        None => true,
    }
}

/// Gate timestamp after a successful training action.
pub fn next_eligible_at(now: DateTime<Utc>) -> DateTime<Utc> {
    now + Duration::seconds(TRAINING_COOLDOWN_SECS)
}
