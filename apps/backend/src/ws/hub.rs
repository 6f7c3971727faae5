use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tracing::trace;
use uuid::Uuid;

use crate::domain::{GameId, GameSnapshot};
use crate::ws::Notifier;

/// Events delivered to realtime subscribers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventEnvelope {
    GameUpdate { game: GameSnapshot },
}

type Subscribers = DashMap<Uuid, UnboundedSender<EventEnvelope>>;

/// In-process hub: per-game rooms plus a global audience.
///
/// Senders that have hung up are pruned on the next delivery attempt.
#[derive(Debug, Default)]
pub struct WsHub {
    rooms: DashMap<GameId, Subscribers>,
    global: Subscribers,
}

impl WsHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to one game's events. The token unsubscribes.
    pub fn subscribe_game(&self, game_id: GameId) -> (Uuid, UnboundedReceiver<EventEnvelope>) {
        let (tx, rx) = unbounded_channel();
        let token = Uuid::new_v4();
        self.rooms.entry(game_id).or_default().insert(token, tx);
        (token, rx)
    }

    /// Subscribe to the global audience (every lobby-visible event).
    pub fn subscribe_all(&self) -> (Uuid, UnboundedReceiver<EventEnvelope>) {
        let (tx, rx) = unbounded_channel();
        let token = Uuid::new_v4();
        self.global.insert(token, tx);
        (token, rx)
    }

    pub fn unsubscribe_game(&self, game_id: GameId, token: Uuid) {
        if let Some(room) = self.rooms.get(&game_id) {
            room.remove(&token);
            if room.is_empty() {
                drop(room);
                self.rooms.remove(&game_id);
            }
        }
    }

    pub fn unsubscribe_all(&self, token: Uuid) {
        self.global.remove(&token);
    }

    fn deliver(subscribers: &Subscribers, envelope: &EventEnvelope) {
        subscribers.retain(|_, tx| tx.send(envelope.clone()).is_ok());
    }
}

impl Notifier for WsHub {
    fn notify_game(&self, game_id: GameId, envelope: &EventEnvelope) {
        if let Some(room) = self.rooms.get(&game_id) {
            trace!(game_id = %game_id, subscribers = room.len(), "room broadcast");
            Self::deliver(&room, envelope);
        }
    }

    fn notify_all(&self, envelope: &EventEnvelope) {
        Self::deliver(&self.global, envelope);
    }
}
