use serde::{Deserialize, Serialize};

/// Result of a simulated match, from the home side's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchOutcome {
    Win,
    Loss,
    Draw,
}

impl MatchOutcome {
    pub fn from_score(home: u8, away: u8) -> Self {
        match home.cmp(&away) {
            std::cmp::Ordering::Greater => MatchOutcome::Win,
            std::cmp::Ordering::Less => MatchOutcome::Loss,
            std::cmp::Ordering::Equal => MatchOutcome::Draw,
        }
    }

    /// The same result seen from the other bench.
    pub fn inverted(self) -> Self {
        match self {
            MatchOutcome::Win => MatchOutcome::Loss,
            MatchOutcome::Loss => MatchOutcome::Win,
            MatchOutcome::Draw => MatchOutcome::Draw,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchOutcome::Win => "win",
            MatchOutcome::Loss => "loss",
            MatchOutcome::Draw => "draw",
        }
    }
}

/// One statistic split between the two sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SideSplit {
    pub home: u16,
    pub away: u16,
}

impl SideSplit {
    pub fn new(home: u16, away: u16) -> Self {
        Self { home, away }
    }

    pub fn swapped(self) -> Self {
        Self { home: self.away, away: self.home }
    }
}

/// Secondary statistics accompanying a simulated score.
///
/// Invariants kept by the simulator: possession halves sum to exactly 100,
/// shots are never fewer than shots on target, every count is a non-negative
/// integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BoxScore {
    pub shots: SideSplit,
    pub shots_on_target: SideSplit,
    pub possession: SideSplit,
    pub corners: SideSplit,
    pub fouls: SideSplit,
    pub cards: SideSplit,
}

impl BoxScore {
    /// The same box score with home and away exchanged.
    pub fn swapped(self) -> Self {
        Self {
            shots: self.shots.swapped(),
            shots_on_target: self.shots_on_target.swapped(),
            possession: self.possession.swapped(),
            corners: self.corners.swapped(),
            fouls: self.fouls.swapped(),
            cards: self.cards.swapped(),
        }
    }
}

/// Full outcome of a simulated match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub home_score: u8,
    pub away_score: u8,
    pub outcome: MatchOutcome,
    pub box_score: BoxScore,
}

impl MatchResult {
    /// The match as seen by the away side. When both participants are
    /// user-owned the caller records the result twice, passing this swapped
    /// view for the second call.
    pub fn swapped(self) -> Self {
        Self {
            home_score: self.away_score,
            away_score: self.home_score,
            outcome: self.outcome.inverted(),
            box_score: self.box_score.swapped(),
        }
    }
}
