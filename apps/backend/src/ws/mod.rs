//! Realtime broadcast collaborator.
//!
//! The coordinator talks to a [`Notifier`]; the concrete hub keeps subscriber
//! channels per game plus a global audience. Delivery is best-effort and
//! fire-and-forget: a dead subscriber never fails, let alone rolls back, the
//! mutation that triggered the event.

pub mod hub;

pub use hub::{EventEnvelope, WsHub};

use crate::domain::GameId;

/// Broadcast sink the coordinator notifies after every accepted mutation.
pub trait Notifier: Send + Sync {
    /// Deliver to subscribers of one session.
    fn notify_game(&self, game_id: GameId, envelope: &EventEnvelope);

    /// Deliver to the global audience (lobby discovery).
    fn notify_all(&self, envelope: &EventEnvelope);
}
