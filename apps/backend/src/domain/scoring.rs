//! Pure category scoring.
//!
//! `score` is deterministic over the five current face values. Held flags do
//! not enter into scoring; only the faces on the table count.

use crate::domain::categories::Category;
use crate::domain::rules::{
    DICE, FACES, FULL_HOUSE_SCORE, LARGE_STRAIGHT_SCORE, SMALL_STRAIGHT_SCORE, YAHTZEE_SCORE,
};

/// Score `dice` against `category`.
///
/// Unrolled dice (face 0) simply contribute nothing; the state machine allows
/// scoring at any point in a turn, including before the first roll.
pub fn score(category: Category, dice: &[u8; DICE]) -> u32 {
    if let Some(face) = category.target_face() {
        return dice
            .iter()
            .filter(|&&d| d == face)
            .map(|&d| u32::from(d))
            .sum();
    }

    let counts = face_counts(dice);
    match category {
        Category::ThreeOfAKind if counts.iter().any(|&n| n >= 3) => pip_sum(dice),
        Category::FourOfAKind if counts.iter().any(|&n| n >= 4) => pip_sum(dice),
        Category::FullHouse if is_full_house(&counts) => FULL_HOUSE_SCORE,
        Category::SmallStraight if longest_run(&counts) >= 4 => SMALL_STRAIGHT_SCORE,
        Category::LargeStraight if longest_run(&counts) >= 5 => LARGE_STRAIGHT_SCORE,
        Category::Chance => pip_sum(dice),
        Category::Yahtzee if counts.iter().any(|&n| n == DICE as u8) => YAHTZEE_SCORE,
        _ => 0,
    }
}

/// Occurrences of each face; index 0 holds face 1.
fn face_counts(dice: &[u8; DICE]) -> [u8; FACES as usize] {
    let mut counts = [0u8; FACES as usize];
    for &die in dice {
        if (1..=FACES).contains(&die) {
            counts[usize::from(die) - 1] += 1;
        }
    }
    counts
}

fn pip_sum(dice: &[u8; DICE]) -> u32 {
    dice.iter().map(|&d| u32::from(d)).sum()
}

/// A triple plus a pair of a different face. Five of a kind is not a full
/// house; the pair must be distinct.
fn is_full_house(counts: &[u8; FACES as usize]) -> bool {
    counts.contains(&3) && counts.contains(&2)
}

/// Length of the longest run of consecutive faces present.
fn longest_run(counts: &[u8; FACES as usize]) -> u8 {
    let mut best = 0u8;
    let mut current = 0u8;
    for &n in counts {
        if n > 0 {
            current += 1;
            best = best.max(current);
        } else {
            current = 0;
        }
    }
    best
}
