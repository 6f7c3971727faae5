use crate::domain::categories::Category;
use crate::domain::rules::ROLLS_PER_TURN;
use crate::domain::state::{DieIndex, GameSession};
use crate::domain::test_state_helpers::{set_dice, started_session};
use crate::domain::turn::{roll_dice, score_category, toggle_holds};
use crate::errors::GameError;

fn die(i: i64) -> DieIndex {
    DieIndex::new(i).expect("index in range")
}

#[test]
fn join_rejects_duplicates_and_leaves_roster_unchanged() {
    let mut session = GameSession::new("ada", 1);
    session.join("grace").unwrap();
    let err = session.join("grace").unwrap_err();
    assert_eq!(err, GameError::DuplicateMember("grace".to_string()));
    assert_eq!(session.players, vec!["ada", "grace"]);
}

#[test]
fn ready_flips_at_two_players() {
    let mut session = GameSession::new("ada", 1);
    assert!(!session.ready());
    session.join("grace").unwrap();
    assert!(session.ready());
    session.join("alan").unwrap();
    assert!(session.ready());
}

#[test]
fn join_after_start_is_rejected() {
    let mut session = started_session(&["ada", "grace"], 1);
    assert_eq!(session.join("alan").unwrap_err(), GameError::AlreadyStarted);
}

#[test]
fn only_host_starts() {
    let mut session = GameSession::new("ada", 1);
    session.join("grace").unwrap();
    assert_eq!(session.start("grace").unwrap_err(), GameError::NotHost);
    assert!(!session.started);
}

#[test]
fn start_needs_two_players_and_happens_once() {
    let mut session = GameSession::new("ada", 1);
    assert_eq!(
        session.start("ada").unwrap_err(),
        GameError::InsufficientPlayers
    );

    session.join("grace").unwrap();
    session.start("ada").unwrap();
    assert_eq!(session.start("ada").unwrap_err(), GameError::AlreadyStarted);
}

#[test]
fn start_seats_first_joiner_with_three_rolls() {
    let session = started_session(&["ada", "grace"], 1);
    let round = session.round.as_ref().unwrap();
    assert_eq!(session.current_player(), Some("ada"));
    assert_eq!(round.rolls_left, ROLLS_PER_TURN);
    assert_eq!(round.dice, [0; 5]);
    assert_eq!(round.held, [false; 5]);
    assert!(!round.game_over);
}

#[test]
fn actions_before_start_are_rejected() {
    let mut session = GameSession::new("ada", 1);
    session.join("grace").unwrap();
    assert_eq!(
        roll_dice(&mut session, "ada").unwrap_err(),
        GameError::NotStarted
    );
    assert_eq!(
        toggle_holds(&mut session, "ada", &[die(0)]).unwrap_err(),
        GameError::NotStarted
    );
    assert_eq!(
        score_category(&mut session, "ada", Category::Chance).unwrap_err(),
        GameError::NotStarted
    );
}

#[test]
fn roll_fills_every_die_and_burns_a_roll() {
    let mut session = started_session(&["ada", "grace"], 42);
    roll_dice(&mut session, "ada").unwrap();
    let round = session.round.as_ref().unwrap();
    assert!(round.dice.iter().all(|&d| (1..=6).contains(&d)));
    assert_eq!(round.rolls_left, ROLLS_PER_TURN - 1);
    assert_eq!(session.current_player(), Some("ada"));
}

#[test]
fn roll_preserves_held_positions() {
    let mut session = started_session(&["ada", "grace"], 42);
    roll_dice(&mut session, "ada").unwrap();
    let before = session.round.as_ref().unwrap().dice;

    toggle_holds(&mut session, "ada", &[die(0), die(3)]).unwrap();
    roll_dice(&mut session, "ada").unwrap();

    let after = session.round.as_ref().unwrap().dice;
    assert_eq!(after[0], before[0]);
    assert_eq!(after[3], before[3]);
}

#[test]
fn fourth_roll_fails_without_mutating() {
    let mut session = started_session(&["ada", "grace"], 42);
    for _ in 0..3 {
        roll_dice(&mut session, "ada").unwrap();
    }
    let dice_before = session.round.as_ref().unwrap().dice;

    assert_eq!(
        roll_dice(&mut session, "ada").unwrap_err(),
        GameError::NoRollsLeft
    );
    let round = session.round.as_ref().unwrap();
    assert_eq!(round.dice, dice_before);
    assert_eq!(round.rolls_left, 0);
}

#[test]
fn out_of_turn_actions_are_rejected() {
    let mut session = started_session(&["ada", "grace"], 42);
    assert_eq!(
        roll_dice(&mut session, "grace").unwrap_err(),
        GameError::OutOfTurn
    );
    // A stranger is treated the same as a member out of turn.
    assert_eq!(
        roll_dice(&mut session, "mallory").unwrap_err(),
        GameError::OutOfTurn
    );
}

#[test]
fn holds_toggle_independently_and_survive_zero_rolls() {
    let mut session = started_session(&["ada", "grace"], 42);
    for _ in 0..3 {
        roll_dice(&mut session, "ada").unwrap();
    }
    // Legal even with rolls_left == 0.
    toggle_holds(&mut session, "ada", &[die(1), die(4)]).unwrap();
    assert_eq!(
        session.round.as_ref().unwrap().held,
        [false, true, false, false, true]
    );

    // Toggling again flips back; rolls_left is untouched throughout.
    toggle_holds(&mut session, "ada", &[die(1)]).unwrap();
    let round = session.round.as_ref().unwrap();
    assert_eq!(round.held, [false, false, false, false, true]);
    assert_eq!(round.rolls_left, 0);
}

#[test]
fn score_records_points_and_rotates_the_turn() {
    let mut session = started_session(&["ada", "grace", "alan"], 42);
    set_dice(&mut session, [3, 3, 3, 5, 6]);

    let outcome = score_category(&mut session, "ada", Category::Threes).unwrap();
    assert_eq!(outcome.points, 9);
    assert_eq!(outcome.next_turn, 1);
    assert!(!outcome.game_over);

    let round = session.round.as_ref().unwrap();
    assert_eq!(round.scorecards[0].get(Category::Threes), Some(9));
    assert_eq!(round.scorecards[0].total(), 9);
    assert_eq!(session.current_player(), Some("grace"));
    // Fresh turn for the next player.
    assert_eq!(round.dice, [0; 5]);
    assert_eq!(round.held, [false; 5]);
    assert_eq!(round.rolls_left, ROLLS_PER_TURN);
}

#[test]
fn turn_wraps_from_last_seat_to_first() {
    let mut session = started_session(&["ada", "grace"], 42);
    score_category(&mut session, "ada", Category::Chance).unwrap();
    let outcome = score_category(&mut session, "grace", Category::Chance).unwrap();
    assert_eq!(outcome.next_turn, 0);
    assert_eq!(session.current_player(), Some("ada"));
}

#[test]
fn scoring_a_category_twice_is_rejected_and_value_kept() {
    let mut session = started_session(&["ada", "grace"], 42);
    set_dice(&mut session, [2, 2, 2, 2, 2]);
    score_category(&mut session, "ada", Category::Twos).unwrap();
    score_category(&mut session, "grace", Category::Chance).unwrap();

    // Back to ada, who tries twos again with different dice.
    set_dice(&mut session, [2, 2, 1, 1, 1]);
    let err = score_category(&mut session, "ada", Category::Twos).unwrap_err();
    assert_eq!(err, GameError::AlreadyScored(Category::Twos));

    let round = session.round.as_ref().unwrap();
    assert_eq!(round.scorecards[0].get(Category::Twos), Some(10));
    // The rejected attempt must not have rotated the turn or reset anything.
    assert_eq!(session.current_player(), Some("ada"));
    assert_eq!(session.round.as_ref().unwrap().dice, [2, 2, 1, 1, 1]);
}

#[test]
fn filling_every_card_ends_the_game() {
    let mut session = started_session(&["ada", "grace"], 42);
    let last = *Category::ALL.last().unwrap();
    for category in Category::ALL {
        for player in ["ada", "grace"] {
            let outcome = score_category(&mut session, player, category).unwrap();
            let expect_over = category == last && player == "grace";
            assert_eq!(outcome.game_over, expect_over);
        }
    }

    let round = session.round.as_ref().unwrap();
    assert!(round.game_over);

    // Terminal: no further roll/hold/score is accepted.
    assert_eq!(
        roll_dice(&mut session, "ada").unwrap_err(),
        GameError::GameOver
    );
    assert_eq!(
        toggle_holds(&mut session, "ada", &[die(0)]).unwrap_err(),
        GameError::GameOver
    );
    assert_eq!(
        score_category(&mut session, "ada", Category::Chance).unwrap_err(),
        GameError::GameOver
    );
}
