//! Fixed rule constants and seat rotation math.

pub const DICE: usize = 5;
pub const FACES: u8 = 6;
pub const ROLLS_PER_TURN: u8 = 3;
pub const MIN_PLAYERS: usize = 2;

// Canonical Yahtzee bonus table. The straights and the full house pay a
// fixed bonus regardless of pip count.
pub const FULL_HOUSE_SCORE: u32 = 25;
pub const SMALL_STRAIGHT_SCORE: u32 = 30;
pub const LARGE_STRAIGHT_SCORE: u32 = 40;
pub const YAHTZEE_SCORE: u32 = 50;

/// Seat math lives in `domain` so every layer (services, views, tests)
/// shares a single source of truth for "who acts next".
///
/// Turn order is roster order; the seat after the last wraps to the first.
#[inline]
pub fn next_seat(seat: usize, player_count: usize) -> usize {
    debug_assert!(player_count > 0, "rotation requires a non-empty roster");
    (seat + 1) % player_count
}
