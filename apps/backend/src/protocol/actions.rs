//! Typed player actions, validated once at the boundary.
//!
//! Transport handlers hand us an action kind plus a loose JSON payload; we
//! return a `GameAction` whose contents are already valid domain values. The
//! state machine never re-checks an index or a category name.

use serde_json::Value;

use crate::domain::{Category, DieIndex};
use crate::errors::GameError;

/// Validated list of die positions for a hold action. May be empty; toggling
/// nothing is a legal no-op.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HoldSelection {
    indexes: Vec<DieIndex>,
}

impl HoldSelection {
    pub fn new(indexes: Vec<DieIndex>) -> Self {
        Self { indexes }
    }

    /// Parse the `diceIndexes` payload: an array of integers in 0..=4.
    /// Floats, strings, and out-of-range values are all rejected.
    pub fn from_value(value: &Value) -> Result<Self, GameError> {
        let items = value.as_array().ok_or_else(|| {
            GameError::invalid_selection("diceIndexes must be an array of die positions")
        })?;
        let indexes = items
            .iter()
            .map(|item| {
                let raw = item.as_i64().ok_or_else(|| {
                    GameError::invalid_selection(format!("{item} is not a die position"))
                })?;
                DieIndex::new(raw)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { indexes })
    }

    pub fn indexes(&self) -> &[DieIndex] {
        &self.indexes
    }
}

/// One validated player action against a session.
#[derive(Debug, Clone, PartialEq)]
pub enum GameAction {
    Join,
    Start,
    Roll,
    Hold(HoldSelection),
    Score(Category),
}

impl GameAction {
    /// Build an action from a request kind and its JSON payload.
    ///
    /// `hold` reads `diceIndexes`, `score` reads `category`; the other kinds
    /// carry no payload and ignore whatever was sent.
    pub fn from_request(kind: &str, payload: &Value) -> Result<Self, GameError> {
        match kind {
            "join" => Ok(GameAction::Join),
            "start" => Ok(GameAction::Start),
            "roll" => Ok(GameAction::Roll),
            "hold" => {
                let raw = payload
                    .get("diceIndexes")
                    .ok_or_else(|| GameError::invalid_selection("diceIndexes is required"))?;
                Ok(GameAction::Hold(HoldSelection::from_value(raw)?))
            }
            "score" => {
                let raw = payload
                    .get("category")
                    .and_then(Value::as_str)
                    .ok_or_else(|| {
                        GameError::invalid_category("category is required and must be a string")
                    })?;
                Ok(GameAction::Score(raw.parse()?))
            }
            other => Err(GameError::UnknownAction(other.to_string())),
        }
    }
}
