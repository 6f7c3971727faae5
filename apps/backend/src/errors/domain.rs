//! Domain-level error type for game rule violations.
//!
//! This error type is transport-agnostic. Coordinator entry points return
//! `Result<T, crate::error::AppError>` and convert from `GameError` using the
//! provided `From<GameError> for AppError` implementation.
//!
//! Every variant is caller-recoverable: a rejected action leaves the session
//! exactly as it was.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::domain::Category;

#[derive(Debug, Clone, PartialEq)]
pub enum GameError {
    /// Join attempted by a username already in the roster.
    DuplicateMember(String),
    /// Start attempted by someone other than the host.
    NotHost,
    /// Start attempted with fewer than the minimum player count.
    InsufficientPlayers,
    /// Join or start attempted after the game already started.
    AlreadyStarted,
    /// Roll/hold/score attempted before the game started.
    NotStarted,
    /// Action by a username that is not the current player.
    OutOfTurn,
    /// Roll attempted with no rolls remaining this turn.
    NoRollsLeft,
    /// Hold payload with indexes outside the dice, or malformed input.
    InvalidSelection(String),
    /// Empty, malformed, or unrecognized category name.
    InvalidCategory(String),
    /// Category already recorded for the acting player.
    AlreadyScored(Category),
    /// Roll/hold/score attempted after every scorecard was filled.
    GameOver,
    /// Request named an action kind the protocol does not know.
    UnknownAction(String),
}

impl Display for GameError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            GameError::DuplicateMember(name) => write!(f, "{name} is already in the game"),
            GameError::NotHost => write!(f, "only the host can start the game"),
            GameError::InsufficientPlayers => {
                write!(f, "at least 2 players are required to start the game")
            }
            GameError::AlreadyStarted => write!(f, "game has already started"),
            GameError::NotStarted => write!(f, "game has not started yet"),
            GameError::OutOfTurn => write!(f, "not your turn"),
            GameError::NoRollsLeft => write!(f, "no rolls left"),
            GameError::InvalidSelection(detail) => write!(f, "invalid dice selection: {detail}"),
            GameError::InvalidCategory(name) => write!(f, "invalid category: {name:?}"),
            GameError::AlreadyScored(category) => {
                write!(f, "category {category} already scored")
            }
            GameError::GameOver => write!(f, "game is over"),
            GameError::UnknownAction(kind) => write!(f, "unknown action: {kind:?}"),
        }
    }
}

impl Error for GameError {}

impl GameError {
    pub fn invalid_selection(detail: impl Into<String>) -> Self {
        Self::InvalidSelection(detail.into())
    }

    pub fn invalid_category(name: impl Into<String>) -> Self {
        Self::InvalidCategory(name.into())
    }
}
