//! Behavioural properties of the game session, driven through the public API.

use tui_simon::core::{click_by_id, GameSession};
use tui_simon::types::{
    Intent, Phase, SimonError, Status, Symbol, ADVANCE_DELAY_MS, REVEAL_DELAY_MS,
};

fn begin(seed: u32) -> GameSession {
    let mut s = GameSession::new(seed);
    s.begin();
    s.tick(REVEAL_DELAY_MS);
    s
}

fn wrong_for(symbol: Symbol) -> Symbol {
    Symbol::ALL.into_iter().find(|s| *s != symbol).unwrap()
}

fn play_level(s: &mut GameSession) {
    for symbol in s.pattern().to_vec() {
        s.submit_input(symbol);
    }
    s.tick(ADVANCE_DELAY_MS);
}

#[test]
fn score_counts_cleared_levels_across_seeds() {
    for seed in [1u32, 2, 3, 500, 65_535] {
        let mut s = begin(seed);
        for _ in 0..6 {
            play_level(&mut s);
        }
        assert_eq!(s.score(), 6, "seed {}", seed);
        assert_eq!(s.level(), 7, "seed {}", seed);
        assert_eq!(s.pattern().len(), 7);
    }
}

#[test]
fn first_level_then_second_symbol_is_appended() {
    let mut s = begin(2468);
    assert_eq!(s.level(), 1);
    let a = s.pattern()[0];

    s.submit_input(a);
    s.tick(ADVANCE_DELAY_MS);

    assert_eq!(s.score(), 1);
    assert_eq!(s.level(), 2);
    assert_eq!(s.pattern()[0], a);
    assert_eq!(s.pattern().len(), 2);
}

#[test]
fn wrong_second_press_shows_score_one() {
    let mut s = begin(1357);
    play_level(&mut s);
    s.take_intents();

    let a = s.pattern()[0];
    let b = s.pattern()[1];
    s.submit_input(a);
    s.submit_input(wrong_for(b));

    assert!(s
        .take_intents()
        .contains(&Intent::ShowStatus(Status::GameOver { score: 1 })));
    assert_eq!(s.score(), 0);
    assert_eq!(s.phase(), Phase::Idle);
    assert!(s.pattern().is_empty());
    assert!(s.user_input().is_empty());
}

#[test]
fn fresh_session_immediate_failure_keeps_best_at_zero() {
    let mut s = begin(9);
    let first = s.pattern()[0];
    s.submit_input(wrong_for(first));
    assert_eq!(s.highest_score(), 0);
}

#[test]
fn begin_while_playing_changes_nothing() {
    let mut s = begin(10);
    play_level(&mut s);
    let pattern = s.pattern().to_vec();
    let snap = s.snapshot();
    s.take_intents();

    s.begin();
    s.begin();

    assert_eq!(s.snapshot(), snap);
    assert_eq!(s.pattern(), pattern.as_slice());
    assert!(s.intents().is_empty());
}

#[test]
fn highest_score_is_monotonic_over_many_rounds() {
    let mut s = GameSession::new(2718);
    let mut last_best = 0;
    for round in 0..10u32 {
        s.begin();
        s.tick(REVEAL_DELAY_MS);
        for _ in 0..(round * 7 % 5) {
            play_level(&mut s);
        }
        let next = s.pattern()[s.user_input().len()];
        s.submit_input(wrong_for(next));

        assert!(s.highest_score() >= last_best);
        last_best = s.highest_score();
    }
    assert_eq!(last_best, 4);
}

#[test]
fn invalid_button_id_is_reported() {
    let mut s = begin(4);
    let err = click_by_id(&mut s, "orange").unwrap_err();
    assert_eq!(err, SimonError::InvalidSymbol("orange".into()));
    assert_eq!(s.phase(), Phase::Playing);
    assert!(s.user_input().is_empty());
}
