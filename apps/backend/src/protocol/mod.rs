//! Boundary between loose transport payloads and typed domain values.

pub mod actions;

pub use actions::{GameAction, HoldSelection};
