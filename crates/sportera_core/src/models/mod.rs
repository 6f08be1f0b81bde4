pub mod market;
pub mod match_result;
pub mod slip;
pub mod team;

pub use market::{GeneratedMatch, MarketKey, MarketPick, MarketTable, Period};
pub use match_result::{BoxScore, MatchOutcome, MatchResult, SideSplit};
pub use slip::{toggle_selection, BetSlip, PredictionSlip, Selection, SlipStatus};
pub use team::{SideStats, TeamRecord};
