//! # sportera_core - Procedural Outcome & Settlement Engine
//!
//! This library is the shared core of the Sportera companion apps: the team
//! manager variant (simulate and record matches, train teams, rank them) and
//! the prediction/betting variant (browse generated fixtures and odds
//! markets, place accumulator-style picks, settle them).
//!
//! ## Features
//! - Fully seeded generation: same seed = same fixtures, markets and results
//! - Name-derived team baselines that need no stored state
//! - Match simulation with an internally consistent box score
//! - One-shot settlement of single and accumulator selections
//! - JSON API for easy integration with any frontend layer

#![allow(clippy::too_many_arguments)]

pub mod api;
pub mod engine;
pub mod error;
pub mod models;
pub mod naming;
pub mod rng;
pub mod state;
pub mod training;

// Re-export main API functions
pub use api::{
    generate_matches_json, settle_bet_slip_json, settle_prediction_slip_json,
    simulate_match_json,
};
pub use engine::{
    generate_match, generate_match_for_home_team, generate_matches, random_outcome,
    settle_bet_slip, settle_prediction_slip, settle_selection, simulate, to_percents,
    BetSettlement, LegSettlement, PredictionSettlement, SettlementResult,
};
pub use error::{CoreError, Result};

// Re-export model types
pub use models::{
    toggle_selection, BetSlip, BoxScore, GeneratedMatch, MarketKey, MarketPick, MarketTable,
    MatchOutcome, MatchResult, Period, PredictionSlip, Selection, SideSplit, SideStats,
    SlipStatus, TeamRecord,
};

// Re-export generation and state management
pub use naming::{generate_opponents, opponent_profile, OpponentProfile, TeamBaseline};
pub use state::{FixtureTeam, MatchRecord, SessionState};
pub use training::{TrainingBlock, TrainingState};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_basic_simulation() {
        let request = json!({
            "schema_version": 1,
            "seed": 42,
            "home": {"attack": 4, "defense": 3, "form": 2, "strength": 80},
            "away": {"attack": 2, "defense": 2, "form": 1, "strength": 45},
        });

        let result = simulate_match_json(&request.to_string());
        assert!(result.is_ok(), "simulation should succeed");

        let parsed: serde_json::Value = serde_json::from_str(&result.unwrap()).unwrap();
        assert_eq!(parsed["schema_version"], 1);
        assert!(parsed["result"]["home_score"].is_number());
        assert!(parsed["result"]["away_score"].is_number());
    }

    #[test]
    fn test_manager_flow_end_to_end() {
        let mut session = SessionState::new();
        session.add_team("Atlas City").unwrap();
        let (home, away) = session.pick_fixture(7).unwrap();
        let result = simulate(&home.stats, &away.stats, 7);
        session
            .record_match(
                "Atlas City",
                &away.name,
                result.home_score,
                result.away_score,
                result.outcome,
                Some(result.box_score),
                chrono::Utc::now(),
            )
            .unwrap();
        assert_eq!(session.match_history().len(), 1);
        assert!(!session.leaderboard().is_empty());
    }

    #[test]
    fn test_betting_flow_end_to_end() {
        let matches = generate_matches(3, 1234);
        let mut selections = Vec::new();
        for m in &matches {
            let pick = &m.markets.over_under[0];
            toggle_selection(
                &mut selections,
                Selection {
                    match_id: m.id.clone(),
                    market: MarketKey::OverUnder,
                    pick: pick.label.clone(),
                    odd: pick.odd,
                    match_label: format!("{} vs {}", m.home_name, m.away_name),
                },
            );
        }
        let mut slip = BetSlip::new(selections, 25, chrono::Utc::now());
        let settlement = settle_bet_slip(&mut slip, 99).unwrap();
        assert_eq!(settlement.legs.len(), 3);
        assert_ne!(slip.status, SlipStatus::Pending);
    }
}
