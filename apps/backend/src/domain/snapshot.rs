//! Public snapshot API for observing session state without exposing internals.
//!
//! Snapshots are what the coordinator returns to callers and hands to the
//! broadcast sink after every accepted mutation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::rules::DICE;
use crate::domain::state::GameSession;

/// Per-player score map keyed by category wire name, plus a synthetic
/// `"total"` entry equal to the sum of the recorded categories.
pub type ScoreMap = BTreeMap<String, u32>;

/// Top-level snapshot of one session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub id: String,
    pub host: String,
    pub players: Vec<String>,
    pub ready: bool,
    pub started: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round: Option<RoundSnapshot>,
}

/// Round state as clients see it. Dice value 0 means "not yet rolled".
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub dice: [u8; DICE],
    pub held: [bool; DICE],
    pub rolls_left: u8,
    pub current_player: String,
    pub scores: BTreeMap<String, ScoreMap>,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn of(session: &GameSession) -> Self {
        let round = session.round.as_ref().map(|round| {
            let mut scores = BTreeMap::new();
            for (seat, card) in round.scorecards.iter().enumerate() {
                let mut map: ScoreMap = card
                    .iter()
                    .map(|(category, points)| (category.as_str().to_string(), points))
                    .collect();
                map.insert("total".to_string(), card.total());
                scores.insert(session.players[seat].clone(), map);
            }
            RoundSnapshot {
                dice: round.dice,
                held: round.held,
                rolls_left: round.rolls_left,
                current_player: session.players[round.turn].clone(),
                scores,
                game_over: round.game_over,
            }
        });

        Self {
            id: session.id.to_string(),
            host: session.host.clone(),
            players: session.players.clone(),
            ready: session.ready(),
            started: session.started,
            round,
        }
    }
}
