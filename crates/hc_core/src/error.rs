use thiserror::Error;

use crate::models::Phase;

/// Stable machine-readable reason codes for API consumers.
pub mod error_codes {
    pub const INVALID_ACTION: &str = "E_INVALID_ACTION";
    pub const INVALID_INPUT: &str = "E_INVALID_INPUT";
    pub const BAD_REQUEST: &str = "E_BAD_REQUEST";
}

/// Validation failures at the engine boundary.
///
/// Every variant is a local rejection: the engine state is untouched and the
/// same action may be resubmitted after correcting the problem. The only
/// recovery action beyond that is `MatchEngine::reset`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("action '{action}' is not valid in phase '{phase}'")]
    InvalidAction { phase: Phase, action: &'static str },

    #[error("range upper bound must be at least 1, got {max}")]
    InvalidRange { max: u8 },

    #[error("number {number} is outside the allowed range 0..={max}")]
    NumberOutOfRange { number: u8, max: u8 },
}

impl EngineError {
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::InvalidAction { .. } => error_codes::INVALID_ACTION,
            EngineError::InvalidRange { .. } | EngineError::NumberOutOfRange { .. } => {
                error_codes::INVALID_INPUT
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
