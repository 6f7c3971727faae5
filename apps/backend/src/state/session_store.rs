//! Session store collaborator.
//!
//! The coordinator never reaches for an ambient global; it is handed a store
//! at construction. `with_session` is the per-session serialization point:
//! the closure holds exclusive mutation rights for the duration of one
//! action, while actions on different sessions proceed in parallel.

use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex;

use crate::domain::{GameId, GameSession};

pub trait SessionStore: Send + Sync {
    /// Insert a freshly created session.
    fn insert(&self, session: GameSession);

    /// Run `f` with exclusive access to the session, serialized against any
    /// other action on the same id. Returns `None` for an unknown id.
    fn with_session<R, F>(&self, id: GameId, f: F) -> Option<R>
    where
        F: FnOnce(&mut GameSession) -> R;

    fn contains(&self, id: GameId) -> bool;
}

/// Process-local store: one mutex per session keyed off a concurrent map.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: DashMap<GameId, Arc<Mutex<GameSession>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl SessionStore for InMemorySessionStore {
    fn insert(&self, session: GameSession) {
        self.sessions
            .insert(session.id, Arc::new(Mutex::new(session)));
    }

    fn with_session<R, F>(&self, id: GameId, f: F) -> Option<R>
    where
        F: FnOnce(&mut GameSession) -> R,
    {
        // Clone the Arc and release the map shard before locking, so a long
        // action on one session cannot stall lookups of others.
        let slot = self.sessions.get(&id)?.value().clone();
        let mut session = slot.lock();
        Some(f(&mut session))
    }

    fn contains(&self, id: GameId) -> bool {
        self.sessions.contains_key(&id)
    }
}
