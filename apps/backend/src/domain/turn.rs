//! Turn/dice state machine operations.
//!
//! Every operation validates first and mutates only on its single success
//! path, so a rejected action leaves the session untouched. All three require
//! a started, unfinished game and that the actor holds the turn.

use rand::Rng;

use crate::domain::categories::Category;
use crate::domain::rules::{next_seat, FACES};
use crate::domain::scoring::score;
use crate::domain::state::{DieIndex, GameSession, RoundState, Seat};
use crate::errors::GameError;

/// Result of a score action, describing what state changes occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreOutcome {
    /// Points recorded for the chosen category.
    pub points: u32,
    /// Seat holding the turn after the round-robin advance.
    pub next_turn: Seat,
    /// Whether this score filled the last open category of the last card.
    pub game_over: bool,
}

/// Re-roll every unheld die; held positions keep their prior faces.
pub fn roll_dice(session: &mut GameSession, who: &str) -> Result<(), GameError> {
    let seat = require_actor(session, who)?;
    // Split borrow: round and rng are separate session fields.
    let GameSession { round, rng, .. } = session;
    let round = round.as_mut().ok_or(GameError::NotStarted)?;
    debug_assert_eq!(round.turn, seat);

    if round.rolls_left == 0 {
        return Err(GameError::NoRollsLeft);
    }

    for (die, &held) in round.dice.iter_mut().zip(round.held.iter()) {
        if !held {
            *die = rng.random_range(1..=FACES);
        }
    }
    round.rolls_left -= 1;
    Ok(())
}

/// Toggle the held flag at each named position, in the order given.
///
/// Legal with zero rolls left; holds only matter for a subsequent roll.
pub fn toggle_holds(
    session: &mut GameSession,
    who: &str,
    indexes: &[DieIndex],
) -> Result<(), GameError> {
    let seat = require_actor(session, who)?;
    let round = active_round_mut(session)?;
    debug_assert_eq!(round.turn, seat);

    for index in indexes {
        round.held[index.get()] = !round.held[index.get()];
    }
    Ok(())
}

/// Record the current dice against `category`, then hand the turn on.
///
/// Scoring uses the full current face values, not a held-filtered subset.
/// On success the dice and holds reset, `rolls_left` returns to 3, and the
/// turn advances round-robin. Once every player has every category recorded
/// the game is over and no further actions are accepted.
pub fn score_category(
    session: &mut GameSession,
    who: &str,
    category: Category,
) -> Result<ScoreOutcome, GameError> {
    let seat = require_actor(session, who)?;
    let player_count = session.players.len();
    let round = active_round_mut(session)?;
    debug_assert_eq!(round.turn, seat);

    let points = score(category, &round.dice);
    round.scorecards[seat].record(category, points)?;

    round.reset_for_next_turn();
    round.turn = next_seat(seat, player_count);

    if round.scorecards.iter().all(|card| card.is_complete()) {
        round.game_over = true;
    }

    Ok(ScoreOutcome {
        points,
        next_turn: round.turn,
        game_over: round.game_over,
    })
}

/// Check phase, terminal state, and turn; resolve the actor's seat.
fn require_actor(session: &GameSession, who: &str) -> Result<Seat, GameError> {
    let round = session.round.as_ref().ok_or(GameError::NotStarted)?;
    if !session.started {
        return Err(GameError::NotStarted);
    }
    if round.game_over {
        return Err(GameError::GameOver);
    }
    match session.seat_of(who) {
        Some(seat) if seat == round.turn => Ok(seat),
        _ => Err(GameError::OutOfTurn),
    }
}

fn active_round_mut(session: &mut GameSession) -> Result<&mut RoundState, GameError> {
    session.round.as_mut().ok_or(GameError::NotStarted)
}
