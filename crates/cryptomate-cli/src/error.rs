use thiserror::Error;

use cryptomate_core::{ApiError, ValidationError};

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("command error: {0}")]
    Command(String),

    #[error("unknown symbol '{name}'")]
    UnknownSymbol { name: String },

    #[error("unknown model {id}")]
    UnknownModel { id: i64 },

    #[error("model {id} is already training")]
    TrainingInFlight { id: i64 },

    #[error("model {id} has no finished training run to predict with")]
    ModelNotTrained { id: i64 },

    #[error("bars for '{symbol}' are already current; nothing to fetch")]
    BarsUpToDate { symbol: String },

    #[error("no bars loaded for '{symbol}'")]
    NoBars { symbol: String },

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::Command(_) => 2,
            Self::UnknownSymbol { .. } => 3,
            Self::UnknownModel { .. } => 3,
            Self::TrainingInFlight { .. } => 4,
            Self::ModelNotTrained { .. } => 4,
            Self::BarsUpToDate { .. } => 4,
            Self::NoBars { .. } => 4,
            Self::Api(_) => 5,
            Self::Serialization(_) => 6,
            Self::Io(_) => 10,
        }
    }
}
