//! JSON facade for UI layers.
//!
//! The companion apps talk to this crate through strings of JSON so the
//! frontend technology stays interchangeable. Requests carry a
//! `schema_version`; responses echo it. Errors come back as
//! `"CODE: message"` strings, never as panics.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error_codes;
use crate::engine::settlement::{
    settle_bet_slip, settle_prediction_slip, BetSettlement, PredictionSettlement,
};
use crate::engine::{generate_matches, simulate};
use crate::models::{BetSlip, GeneratedMatch, MatchResult, PredictionSlip, Selection, SideStats};
use crate::SCHEMA_VERSION;

fn err_code(code: &str, message: impl std::fmt::Display) -> String {
    format!("{code}: {message}")
}

fn check_schema(found: u8) -> Result<(), String> {
    if found == SCHEMA_VERSION {
        Ok(())
    } else {
        Err(err_code(
            error_codes::SCHEMA_VERSION,
            format!("expected {SCHEMA_VERSION}, got {found}"),
        ))
    }
}

fn parse<'a, T: Deserialize<'a>>(request: &'a str) -> Result<T, String> {
    serde_json::from_str(request).map_err(|e| err_code(error_codes::INVALID_REQUEST, e))
}

fn respond<T: Serialize>(response: &T) -> Result<String, String> {
    serde_json::to_string(response).map_err(|e| err_code(error_codes::INVALID_REQUEST, e))
}

#[derive(Debug, Deserialize)]
pub struct SimulateMatchRequest {
    pub schema_version: u8,
    pub seed: i64,
    pub home: SideStats,
    pub away: SideStats,
}

#[derive(Debug, Serialize)]
struct SimulateMatchResponse {
    schema_version: u8,
    result: MatchResult,
}

/// Simulate one match from side stats.
pub fn simulate_match_json(request: &str) -> Result<String, String> {
    let req: SimulateMatchRequest = parse(request)?;
    check_schema(req.schema_version)?;
    debug!(seed = req.seed, "simulate_match_json");
    let result = simulate(&req.home, &req.away, req.seed);
    respond(&SimulateMatchResponse { schema_version: SCHEMA_VERSION, result })
}

#[derive(Debug, Deserialize)]
pub struct GenerateMatchesRequest {
    pub schema_version: u8,
    pub base_seed: i64,
    pub count: u32,
}

#[derive(Debug, Serialize)]
struct GenerateMatchesResponse {
    schema_version: u8,
    matches: Vec<GeneratedMatch>,
}

/// Generate a batch of fixtures with odds markets.
pub fn generate_matches_json(request: &str) -> Result<String, String> {
    let req: GenerateMatchesRequest = parse(request)?;
    check_schema(req.schema_version)?;
    debug!(base_seed = req.base_seed, count = req.count, "generate_matches_json");
    let matches = generate_matches(req.count, req.base_seed);
    respond(&GenerateMatchesResponse { schema_version: SCHEMA_VERSION, matches })
}

#[derive(Debug, Deserialize)]
pub struct SettleBetSlipRequest {
    pub schema_version: u8,
    pub seed: i64,
    pub stake: i64,
    pub selections: Vec<Selection>,
    pub placed_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Serialize)]
struct SettleBetSlipResponse {
    schema_version: u8,
    slip_id: String,
    total_odds: f64,
    #[serde(flatten)]
    settlement: BetSettlement,
}

/// Place and immediately settle an accumulator slip.
pub fn settle_bet_slip_json(request: &str) -> Result<String, String> {
    let req: SettleBetSlipRequest = parse(request)?;
    check_schema(req.schema_version)?;
    debug!(stake = req.stake, legs = req.selections.len(), "settle_bet_slip_json");
    let mut slip = BetSlip::new(req.selections, req.stake, req.placed_at);
    let total_odds = slip.total_odds();
    let settlement =
        settle_bet_slip(&mut slip, req.seed).map_err(|e| err_code(error_codes::SETTLEMENT, e))?;
    respond(&SettleBetSlipResponse {
        schema_version: SCHEMA_VERSION,
        slip_id: slip.id,
        total_odds,
        settlement,
    })
}

#[derive(Debug, Deserialize)]
pub struct SettlePredictionSlipRequest {
    pub schema_version: u8,
    pub seed: i64,
    pub selections: Vec<Selection>,
    #[serde(default)]
    pub coach_team: Option<String>,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Serialize)]
struct SettlePredictionSlipResponse {
    schema_version: u8,
    slip_id: String,
    #[serde(flatten)]
    settlement: PredictionSettlement,
}

/// Submit and immediately settle a prediction slip.
pub fn settle_prediction_slip_json(request: &str) -> Result<String, String> {
    let req: SettlePredictionSlipRequest = parse(request)?;
    check_schema(req.schema_version)?;
    debug!(legs = req.selections.len(), coached = req.coach_team.is_some(), "settle_prediction_slip_json");
    let mut slip = PredictionSlip::new(req.selections, req.coach_team, req.submitted_at);
    let settlement = settle_prediction_slip(&mut slip, req.seed)
        .map_err(|e| err_code(error_codes::SETTLEMENT, e))?;
    respond(&SettlePredictionSlipResponse {
        schema_version: SCHEMA_VERSION,
        slip_id: slip.id,
        settlement,
    })
}
