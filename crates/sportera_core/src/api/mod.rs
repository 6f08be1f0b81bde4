pub mod json_api;

pub use json_api::{
    generate_matches_json, settle_bet_slip_json, settle_prediction_slip_json,
    simulate_match_json, GenerateMatchesRequest, SettleBetSlipRequest,
    SettlePredictionSlipRequest, SimulateMatchRequest,
};

/// Stable error codes returned at the JSON boundary.
pub mod error_codes {
    pub const INVALID_REQUEST: &str = "E_INVALID_REQUEST";
    pub const SCHEMA_VERSION: &str = "E_SCHEMA_VERSION";
    pub const SETTLEMENT: &str = "E_SETTLEMENT";
}
