use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Team name is blank")]
    BlankTeamName,

    #[error("Team already exists: {name}")]
    DuplicateTeam { name: String },

    #[error("Unknown team: {name}")]
    UnknownTeam { name: String },

    #[error("Training on cooldown until {ready_at}")]
    TrainingCooldown { ready_at: DateTime<Utc> },

    #[error("Stake must be positive, got {stake}")]
    InvalidStake { stake: i64 },

    #[error("Stake {stake} exceeds balance {balance}")]
    InsufficientBalance { stake: i64, balance: i64 },

    #[error("Empty selection slip")]
    EmptySlip,

    #[error("Slip {id} is already settled")]
    AlreadySettled { id: String },

    #[error("Schema version mismatch: found {found}, expected {expected}")]
    SchemaVersionMismatch { found: u8, expected: u8 },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CoreError {
    /// Rejections that leave state untouched and can simply be shown to the
    /// user, as opposed to programming errors at the integration boundary.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            CoreError::BlankTeamName
                | CoreError::DuplicateTeam { .. }
                | CoreError::TrainingCooldown { .. }
                | CoreError::InvalidStake { .. }
                | CoreError::InsufficientBalance { .. }
                | CoreError::EmptySlip
                | CoreError::AlreadySettled { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
