use std::collections::BTreeMap;
use std::fmt;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::categories::Category;
use crate::domain::rules::{DICE, MIN_PLAYERS, ROLLS_PER_TURN};
use crate::errors::GameError;

/// Index into the roster; turn order is join order.
pub type Seat = usize;

/// Unique session identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameId(Uuid);

impl GameId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for GameId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A validated die position. Constructing one is the only way to name a die,
/// so the state machine never sees an out-of-range index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DieIndex(usize);

impl DieIndex {
    pub fn new(raw: i64) -> Result<Self, GameError> {
        let max = DICE as i64 - 1;
        if (0..=max).contains(&raw) {
            Ok(Self(raw as usize))
        } else {
            Err(GameError::invalid_selection(format!(
                "die index {raw} is outside 0..={max}"
            )))
        }
    }

    pub const fn get(&self) -> usize {
        self.0
    }
}

/// One player's write-once category scores.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreCard {
    recorded: BTreeMap<Category, u32>,
}

impl ScoreCard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, category: Category) -> Option<u32> {
        self.recorded.get(&category).copied()
    }

    /// Record `points` for `category`. A category, once scored, is immutable.
    pub fn record(&mut self, category: Category, points: u32) -> Result<(), GameError> {
        if self.recorded.contains_key(&category) {
            return Err(GameError::AlreadyScored(category));
        }
        self.recorded.insert(category, points);
        Ok(())
    }

    /// Sum of every recorded category. Always derived, never stale.
    pub fn total(&self) -> u32 {
        self.recorded.values().sum()
    }

    pub fn is_complete(&self) -> bool {
        self.recorded.len() == Category::ALL.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, u32)> + '_ {
        self.recorded.iter().map(|(&c, &v)| (c, v))
    }
}

/// Mutable per-round state, created once at game start and reused for every
/// turn until the last scorecard fills.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundState {
    /// Face values; 0 means "not yet rolled this turn".
    pub dice: [u8; DICE],
    /// Parallel to `dice`; true excludes the position from re-rolls.
    pub held: [bool; DICE],
    /// Rolls remaining this turn; resets at every turn boundary.
    pub rolls_left: u8,
    /// Seat whose turn it is.
    pub turn: Seat,
    /// One scorecard per roster seat.
    pub scorecards: Vec<ScoreCard>,
    /// Set once every scorecard is complete; never unset.
    pub game_over: bool,
}

impl RoundState {
    pub fn new(player_count: usize) -> Self {
        Self {
            dice: [0; DICE],
            held: [false; DICE],
            rolls_left: ROLLS_PER_TURN,
            turn: 0,
            scorecards: vec![ScoreCard::new(); player_count],
            game_over: false,
        }
    }

    /// Clear dice and holds for the next player's turn.
    pub fn reset_for_next_turn(&mut self) {
        self.dice = [0; DICE];
        self.held = [false; DICE];
        self.rolls_left = ROLLS_PER_TURN;
    }
}

/// One game session: roster, lifecycle flags, and (once started) round state.
///
/// The RNG lives on the session so dice rolls are reproducible from the seed
/// the session was created with.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub id: GameId,
    pub host: String,
    /// Join order; doubles as turn order. Never shrinks, no duplicates.
    pub players: Vec<String>,
    pub started: bool,
    pub round: Option<RoundState>,
    pub(crate) rng: ChaCha8Rng,
}

impl GameSession {
    pub fn new(host: impl Into<String>, seed: u64) -> Self {
        let host = host.into();
        Self {
            id: GameId::new(),
            host: host.clone(),
            players: vec![host],
            started: false,
            round: None,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// True once enough players have joined to start.
    pub fn ready(&self) -> bool {
        self.players.len() >= MIN_PLAYERS
    }

    pub fn seat_of(&self, username: &str) -> Option<Seat> {
        self.players.iter().position(|p| p == username)
    }

    /// Username of the player whose turn it is, if the game is running.
    pub fn current_player(&self) -> Option<&str> {
        let round = self.round.as_ref()?;
        self.players.get(round.turn).map(String::as_str)
    }

    /// Append `username` to the roster.
    pub fn join(&mut self, username: &str) -> Result<(), GameError> {
        if self.started {
            return Err(GameError::AlreadyStarted);
        }
        if self.players.iter().any(|p| p == username) {
            return Err(GameError::DuplicateMember(username.to_string()));
        }
        self.players.push(username.to_string());
        Ok(())
    }

    /// One-shot transition into the playing state. Host-only.
    pub fn start(&mut self, username: &str) -> Result<(), GameError> {
        if self.host != username {
            return Err(GameError::NotHost);
        }
        if self.players.len() < MIN_PLAYERS {
            return Err(GameError::InsufficientPlayers);
        }
        if self.started {
            return Err(GameError::AlreadyStarted);
        }
        self.started = true;
        self.round = Some(RoundState::new(self.players.len()));
        Ok(())
    }
}
