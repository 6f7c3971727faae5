//! Game session coordinator.
//!
//! One entry point per player action. Each call resolves the session through
//! the injected store, validates and mutates under the per-session lock, then
//! notifies the broadcast sink with the updated snapshot. Notification happens
//! after the lock is released; its delivery is best-effort and never affects
//! the already-applied mutation.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::turn::{roll_dice, score_category, toggle_holds};
use crate::domain::{Category, GameId, GameSession, GameSnapshot};
use crate::error::AppError;
use crate::errors::GameError;
use crate::protocol::{GameAction, HoldSelection};
use crate::state::SessionStore;
use crate::ws::{EventEnvelope, Notifier};

pub struct GameService<S, N> {
    store: Arc<S>,
    notifier: Arc<N>,
}

impl<S: SessionStore, N: Notifier> GameService<S, N> {
    pub fn new(store: Arc<S>, notifier: Arc<N>) -> Self {
        Self { store, notifier }
    }

    /// Create a lobby with `host` as its first member.
    ///
    /// The seed fixes the session's dice RNG; pass a random one in production
    /// and a constant in tests for reproducible rolls.
    pub fn create_game(&self, host: &str, seed: u64) -> (GameId, GameSnapshot) {
        let session = GameSession::new(host, seed);
        let game_id = session.id;
        let snapshot = GameSnapshot::of(&session);
        info!(game_id = %game_id, host, "game created");
        self.store.insert(session);

        let envelope = EventEnvelope::GameUpdate {
            game: snapshot.clone(),
        };
        self.notifier.notify_all(&envelope);
        (game_id, snapshot)
    }

    /// Dispatch one validated action for `username` against `game_id`.
    pub fn apply(
        &self,
        game_id: GameId,
        username: &str,
        action: GameAction,
    ) -> Result<GameSnapshot, AppError> {
        match action {
            GameAction::Join => self.join(game_id, username),
            GameAction::Start => self.start(game_id, username),
            GameAction::Roll => self.roll(game_id, username),
            GameAction::Hold(selection) => self.hold(game_id, username, &selection),
            GameAction::Score(category) => self.score(game_id, username, category),
        }
    }

    pub fn join(&self, game_id: GameId, username: &str) -> Result<GameSnapshot, AppError> {
        let snapshot = self.mutate(game_id, |session| {
            session.join(username)?;
            Ok(GameSnapshot::of(session))
        })?;
        info!(game_id = %game_id, player = username, ready = snapshot.ready, "player joined");

        // Members get the update; so does the global audience, because new
        // lobbies must be discoverable before the roster stabilizes.
        let envelope = EventEnvelope::GameUpdate {
            game: snapshot.clone(),
        };
        self.notifier.notify_game(game_id, &envelope);
        self.notifier.notify_all(&envelope);
        Ok(snapshot)
    }

    pub fn start(&self, game_id: GameId, username: &str) -> Result<GameSnapshot, AppError> {
        let snapshot = self.mutate(game_id, |session| {
            session.start(username)?;
            Ok(GameSnapshot::of(session))
        })?;
        info!(
            game_id = %game_id,
            players = snapshot.players.len(),
            "game started"
        );
        self.notify_room(game_id, &snapshot);
        Ok(snapshot)
    }

    pub fn roll(&self, game_id: GameId, username: &str) -> Result<GameSnapshot, AppError> {
        let snapshot = self.mutate(game_id, |session| {
            roll_dice(session, username)?;
            Ok(GameSnapshot::of(session))
        })?;
        debug!(game_id = %game_id, player = username, "dice rolled");
        self.notify_room(game_id, &snapshot);
        Ok(snapshot)
    }

    pub fn hold(
        &self,
        game_id: GameId,
        username: &str,
        selection: &HoldSelection,
    ) -> Result<GameSnapshot, AppError> {
        let snapshot = self.mutate(game_id, |session| {
            toggle_holds(session, username, selection.indexes())?;
            Ok(GameSnapshot::of(session))
        })?;
        debug!(game_id = %game_id, player = username, "holds toggled");
        self.notify_room(game_id, &snapshot);
        Ok(snapshot)
    }

    pub fn score(
        &self,
        game_id: GameId,
        username: &str,
        category: Category,
    ) -> Result<GameSnapshot, AppError> {
        let (outcome, snapshot) = self.mutate(game_id, |session| {
            let outcome = score_category(session, username, category)?;
            Ok((outcome, GameSnapshot::of(session)))
        })?;
        info!(
            game_id = %game_id,
            player = username,
            category = %category,
            points = outcome.points,
            game_over = outcome.game_over,
            "category scored"
        );
        self.notify_room(game_id, &snapshot);
        Ok(snapshot)
    }

    /// Run one action under the session lock; unknown ids become `GameNotFound`.
    fn mutate<R>(
        &self,
        game_id: GameId,
        action: impl FnOnce(&mut GameSession) -> Result<R, GameError>,
    ) -> Result<R, AppError> {
        self.store
            .with_session(game_id, action)
            .ok_or_else(|| AppError::game_not_found(format!("no game with id {game_id}")))?
            .map_err(AppError::from)
    }

    fn notify_room(&self, game_id: GameId, snapshot: &GameSnapshot) {
        let envelope = EventEnvelope::GameUpdate {
            game: snapshot.clone(),
        };
        self.notifier.notify_game(game_id, &envelope);
    }
}
