use serde::Serialize;
use thiserror::Error;

use crate::errors::{ErrorCode, GameError};

/// Wire-friendly error body callers can serialize directly into a response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub detail: String,
}

/// Application-level error returned by coordinator entry points.
///
/// Domain rule violations arrive via `From<GameError>`; everything else here
/// is about resolving the session itself.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Game(#[from] GameError),
    #[error("Game not found: {detail}")]
    GameNotFound { detail: String },
}

impl AppError {
    /// Stable code for this error, suitable for transport responses.
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Game(err) => ErrorCode::from(err),
            AppError::GameNotFound { .. } => ErrorCode::GameNotFound,
        }
    }

    /// Human-readable detail message.
    pub fn detail(&self) -> String {
        self.to_string()
    }

    pub fn game_not_found(detail: impl Into<String>) -> Self {
        Self::GameNotFound {
            detail: detail.into(),
        }
    }

    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            code: self.code().as_str(),
            detail: self.detail(),
        }
    }
}
