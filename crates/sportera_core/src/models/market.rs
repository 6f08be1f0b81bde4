use serde::{Deserialize, Serialize};

/// Bet/prediction market categories offered for every generated match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarketKey {
    #[serde(rename = "1X2")]
    OneXTwo,
    #[serde(rename = "O/U")]
    OverUnder,
    #[serde(rename = "BTTS")]
    BothTeamsToScore,
    #[serde(rename = "CS")]
    CorrectScore,
}

impl MarketKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarketKey::OneXTwo => "1X2",
            MarketKey::OverUnder => "O/U",
            MarketKey::BothTeamsToScore => "BTTS",
            MarketKey::CorrectScore => "CS",
        }
    }
}

/// One selectable outcome within a market: display label, decimal odd, and
/// the normalized probability percentage shown next to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketPick {
    pub label: String,
    pub odd: f64,
    pub percent: u8,
}

/// Probability tables for all markets of one match. Each market's
/// percentages sum to exactly 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MarketTable {
    #[serde(rename = "1X2")]
    pub one_x_two: Vec<MarketPick>,
    #[serde(rename = "O/U")]
    pub over_under: Vec<MarketPick>,
    #[serde(rename = "BTTS")]
    pub both_teams_to_score: Vec<MarketPick>,
    #[serde(rename = "CS")]
    pub correct_score: Vec<MarketPick>,
}

impl MarketTable {
    pub fn picks(&self, key: MarketKey) -> &[MarketPick] {
        match key {
            MarketKey::OneXTwo => &self.one_x_two,
            MarketKey::OverUnder => &self.over_under,
            MarketKey::BothTeamsToScore => &self.both_teams_to_score,
            MarketKey::CorrectScore => &self.correct_score,
        }
    }
}

/// Which half a live match is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "1st Half")]
    FirstHalf,
    #[serde(rename = "2nd Half")]
    SecondHalf,
}

impl Period {
    pub fn for_minute(minute: u8) -> Self {
        if minute <= 45 {
            Period::FirstHalf
        } else {
            Period::SecondHalf
        }
    }
}

/// A procedurally generated fixture with its odds markets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedMatch {
    pub id: String,
    pub home_name: String,
    pub away_name: String,
    pub league: String,
    /// `None` for upcoming fixtures, `1..=90` while live.
    pub minute: Option<u8>,
    pub period: Option<Period>,
    pub home_score: u8,
    pub away_score: u8,
    /// Home-side dominance percentage for display, `10..=90`.
    pub momentum: u8,
    /// "Live 34'" while live, a kickoff label otherwise.
    pub time_label: String,
    pub crest_home: u8,
    pub crest_away: u8,
    pub markets: MarketTable,
}

impl GeneratedMatch {
    pub fn is_live(&self) -> bool {
        self.minute.is_some()
    }
}
