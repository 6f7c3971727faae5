//! Error codes for the Yahtzee backend API.
//!
//! This module defines all error codes used throughout the application.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that
//! appear in transport responses.

use core::fmt;

use crate::errors::GameError;

/// Centralized error codes for the Yahtzee backend API.
///
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string so callers can
/// branch on a stable code instead of parsing human-readable messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Lobby
    /// Username already present in the roster
    DuplicateMember,
    /// Start attempted by a non-host
    NotHost,
    /// Start attempted with fewer than 2 players
    InsufficientPlayers,
    /// Start or join attempted after the one-shot start transition
    AlreadyStarted,

    // Turn/dice state machine
    /// Roll/hold/score before the game started
    NotStarted,
    /// Action by a player who is not the current player
    OutOfTurn,
    /// Roll with zero rolls remaining
    NoRollsLeft,
    /// Hold indexes outside the dice or malformed
    InvalidSelection,
    /// Unrecognized scoring category
    InvalidCategory,
    /// Category already recorded for the acting player
    AlreadyScored,
    /// Action against a finished game
    GameOver,

    // Request validation
    /// Unrecognized action kind
    UnknownAction,

    // Resource lookup
    /// Game session not found
    GameNotFound,
}

impl ErrorCode {
    /// Get the canonical string representation of this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::DuplicateMember => "DUPLICATE_MEMBER",
            ErrorCode::NotHost => "NOT_HOST",
            ErrorCode::InsufficientPlayers => "INSUFFICIENT_PLAYERS",
            ErrorCode::AlreadyStarted => "ALREADY_STARTED",
            ErrorCode::NotStarted => "NOT_STARTED",
            ErrorCode::OutOfTurn => "OUT_OF_TURN",
            ErrorCode::NoRollsLeft => "NO_ROLLS_LEFT",
            ErrorCode::InvalidSelection => "INVALID_SELECTION",
            ErrorCode::InvalidCategory => "INVALID_CATEGORY",
            ErrorCode::AlreadyScored => "ALREADY_SCORED",
            ErrorCode::GameOver => "GAME_OVER",
            ErrorCode::UnknownAction => "UNKNOWN_ACTION",
            ErrorCode::GameNotFound => "GAME_NOT_FOUND",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&GameError> for ErrorCode {
    fn from(err: &GameError) -> Self {
        match err {
            GameError::DuplicateMember(_) => ErrorCode::DuplicateMember,
            GameError::NotHost => ErrorCode::NotHost,
            GameError::InsufficientPlayers => ErrorCode::InsufficientPlayers,
            GameError::AlreadyStarted => ErrorCode::AlreadyStarted,
            GameError::NotStarted => ErrorCode::NotStarted,
            GameError::OutOfTurn => ErrorCode::OutOfTurn,
            GameError::NoRollsLeft => ErrorCode::NoRollsLeft,
            GameError::InvalidSelection(_) => ErrorCode::InvalidSelection,
            GameError::InvalidCategory(_) => ErrorCode::InvalidCategory,
            GameError::AlreadyScored(_) => ErrorCode::AlreadyScored,
            GameError::GameOver => ErrorCode::GameOver,
            GameError::UnknownAction(_) => ErrorCode::UnknownAction,
        }
    }
}
