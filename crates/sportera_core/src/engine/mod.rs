pub mod markets;
pub mod settlement;
pub mod simulator;

pub use markets::{
    generate_match, generate_match_for_home_team, generate_matches, to_percents,
};
pub use settlement::{
    random_outcome, settle_bet_slip, settle_prediction_slip, settle_selection, BetSettlement,
    LegSettlement, PredictionSettlement, SettlementResult, COACH_BONUS_PER_LEG,
    POINTS_PER_CORRECT_PICK,
};
pub use simulator::simulate;
