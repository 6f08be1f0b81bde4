use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, Result};
use crate::models::market::MarketKey;

/// A user's pick: one outcome within one market of one match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub match_id: String,
    pub market: MarketKey,
    pub pick: String,
    pub odd: f64,
    /// "Home vs Away" caption for slip rows.
    pub match_label: String,
}

/// Add `selection` to the list under the mutual-exclusion rule: picks for the
/// same `(match_id, market)` replace each other, and re-adding the identical
/// pick removes it (toggle off).
pub fn toggle_selection(selections: &mut Vec<Selection>, selection: Selection) {
    if let Some(pos) = selections
        .iter()
        .position(|s| s.match_id == selection.match_id && s.market == selection.market)
    {
        if selections[pos].pick == selection.pick {
            selections.remove(pos);
        } else {
            selections[pos] = selection;
        }
    } else {
        selections.push(selection);
    }
}

/// Lifecycle of a placed slip. Settlement is one-shot: a slip leaves
/// `Pending` exactly once and never returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlipStatus {
    Pending,
    Won,
    Lost,
}

/// An accumulator slip staked with fictional points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BetSlip {
    pub id: String,
    pub selections: Vec<Selection>,
    pub stake: i64,
    pub status: SlipStatus,
    pub placed_at: DateTime<Utc>,
}

impl BetSlip {
    pub fn new(selections: Vec<Selection>, stake: i64, placed_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            selections,
            stake,
            status: SlipStatus::Pending,
            placed_at,
        }
    }

    /// Place a slip after validating it the way the betslip screen does:
    /// at least one pick, a positive stake, and enough points to cover it.
    pub fn place(
        selections: Vec<Selection>,
        stake: i64,
        balance: i64,
        placed_at: DateTime<Utc>,
    ) -> Result<Self> {
        if selections.is_empty() {
            return Err(CoreError::EmptySlip);
        }
        if stake <= 0 {
            return Err(CoreError::InvalidStake { stake });
        }
        if stake > balance {
            return Err(CoreError::InsufficientBalance { stake, balance });
        }
        Ok(Self::new(selections, stake, placed_at))
    }

    /// Product of all leg odds.
    pub fn total_odds(&self) -> f64 {
        self.selections.iter().map(|s| s.odd).product()
    }

    /// Points returned if every leg wins.
    pub fn potential_return(&self) -> i64 {
        (self.stake as f64 * self.total_odds()).round() as i64
    }
}

/// A stakeless prediction slip, optionally coached by one of the user's
/// teams for a per-leg bonus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionSlip {
    pub id: String,
    pub selections: Vec<Selection>,
    #[serde(default)]
    pub coach_team: Option<String>,
    pub status: SlipStatus,
    pub submitted_at: DateTime<Utc>,
}

impl PredictionSlip {
    pub fn new(
        selections: Vec<Selection>,
        coach_team: Option<String>,
        submitted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            selections,
            coach_team,
            status: SlipStatus::Pending,
            submitted_at,
        }
    }
}
