use serde::{Deserialize, Serialize};

use crate::models::match_result::MatchOutcome;
use crate::naming::TeamBaseline;
use crate::training::TrainingState;

/// Accumulated record of a user-managed team.
///
/// Strength, leadership and rating are deliberately methods, not fields:
/// they are recomputed on every read from the record and training state, so
/// no caching layer can drift out of sync with the counters.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TeamRecord {
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(default)]
    pub draws: u32,
    #[serde(default)]
    pub goals_scored: u32,
    #[serde(default)]
    pub goals_conceded: u32,
    pub attack: u8,
    pub defense: u8,
    pub form: u8,
}

impl TeamRecord {
    /// Fresh record for a newly added team: baseline attributes from the
    /// name, zeroed counters.
    pub fn new(name: &str) -> Self {
        let baseline = TeamBaseline::from_name(name);
        Self {
            attack: baseline.attack,
            defense: baseline.defense,
            form: baseline.form,
            ..Default::default()
        }
    }

    /// Ranking scalar: three points per win, one per draw.
    pub fn rating(&self) -> u32 {
        self.wins * 3 + self.draws
    }

    /// Leadership in `1..=10`, grown by wins and carried form.
    pub fn leadership(&self) -> u8 {
        (1 + self.wins / 3 + self.form as u32).clamp(1, 10) as u8
    }

    /// Strength in `10..=100` combining baseline attributes and training.
    pub fn strength(&self, training: &TrainingState) -> u8 {
        let base = (self.attack as u32 + self.defense as u32 + self.form as u32) * 6;
        let trained = training.total() as u32 * 2;
        (base + trained).clamp(10, 100) as u8
    }

    /// Fold one match result into the record, from this team's perspective.
    pub fn apply_result(&mut self, outcome: MatchOutcome, goals_for: u8, goals_against: u8) {
        match outcome {
            MatchOutcome::Win => self.wins += 1,
            MatchOutcome::Loss => self.losses += 1,
            MatchOutcome::Draw => self.draws += 1,
        }
        self.goals_scored += goals_for as u32;
        self.goals_conceded += goals_against as u32;
    }
}

/// Simulator input for one side of a fixture.
///
/// Every field is defaultable so the simulator stays total: a missing
/// strength falls back to the neutral 50, missing attributes to zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct SideStats {
    #[serde(default)]
    pub attack: u8,
    #[serde(default)]
    pub defense: u8,
    #[serde(default)]
    pub form: u8,
    #[serde(default)]
    pub strength: Option<u8>,
}

impl SideStats {
    /// Live stats for an owned team: baseline attributes from the record,
    /// strength derived from record plus training.
    pub fn for_team(record: &TeamRecord, training: &TrainingState) -> Self {
        Self {
            attack: record.attack,
            defense: record.defense,
            form: record.form,
            strength: Some(record.strength(training)),
        }
    }
}

impl From<&crate::naming::OpponentProfile> for SideStats {
    fn from(profile: &crate::naming::OpponentProfile) -> Self {
        Self {
            attack: profile.baseline.attack,
            defense: profile.baseline.defense,
            form: profile.baseline.form,
            strength: Some(profile.strength),
        }
    }
}
