//! Domain layer: pure game rules, no transport or storage concerns.

pub mod categories;
pub mod rules;
pub mod scoring;
pub mod snapshot;
pub mod state;
pub mod turn;

#[cfg(test)]
mod test_state_helpers;

#[cfg(test)]
mod tests_turn;

// Re-exports for ergonomics
pub use categories::Category;
pub use scoring::score;
pub use snapshot::{GameSnapshot, RoundSnapshot};
pub use state::{DieIndex, GameId, GameSession, RoundState, ScoreCard, Seat};
pub use turn::ScoreOutcome;
