#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod domain;
pub mod error;
pub mod errors;
pub mod protocol;
pub mod services;
pub mod state;
pub mod telemetry;
pub mod ws;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use domain::{Category, GameId, GameSession, GameSnapshot};
pub use error::AppError;
pub use errors::{ErrorCode, GameError};
pub use protocol::{GameAction, HoldSelection};
pub use services::GameService;
pub use state::{InMemorySessionStore, SessionStore};
pub use ws::{EventEnvelope, Notifier, WsHub};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
