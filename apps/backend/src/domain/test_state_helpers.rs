//! Builders for sessions in known states, shared by the domain tests.

use crate::domain::state::GameSession;

/// A started session with the given roster, first joiner to act, and a fixed
/// RNG seed so rolls are reproducible.
pub fn started_session(players: &[&str], seed: u64) -> GameSession {
    assert!(players.len() >= 2, "a started session needs 2+ players");
    let mut session = GameSession::new(players[0], seed);
    for player in &players[1..] {
        session.join(player).expect("roster build");
    }
    session.start(players[0]).expect("host starts");
    session
}

/// Force the table dice to a known configuration.
pub fn set_dice(session: &mut GameSession, dice: [u8; 5]) {
    session.round.as_mut().expect("round exists").dice = dice;
}
