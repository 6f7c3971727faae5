//! Shared application state: the session store.

pub mod session_store;

pub use session_store::{InMemorySessionStore, SessionStore};
