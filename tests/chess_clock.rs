//! Host tests for the chess clock state machine.

use lab_kit::{ChessClock, ClockEvent, MatchState, Player, TimeOption};

#[test]
fn dial_thirds_pick_the_time_control() {
    assert_eq!(TimeOption::from_level(0), TimeOption::FiveMinutes);
    assert_eq!(TimeOption::from_level(341), TimeOption::FiveMinutes);
    assert_eq!(TimeOption::from_level(342), TimeOption::ThreeMinutes);
    assert_eq!(TimeOption::from_level(682), TimeOption::ThreeMinutes);
    assert_eq!(TimeOption::from_level(683), TimeOption::OneMinute);
    assert_eq!(TimeOption::from_level(1023), TimeOption::OneMinute);
}

#[test]
fn selection_follows_the_dial_until_locked() {
    let mut clock = ChessClock::new();
    assert_eq!(clock.state(), MatchState::SelectTime);

    assert!(clock.select_time(1000));
    assert_eq!(clock.option(), TimeOption::OneMinute);
    assert_eq!(clock.remaining_seconds(Player::One), 60);
    assert_eq!(clock.remaining_seconds(Player::Two), 60);

    // Same third of the dial: no repaint.
    assert!(!clock.select_time(1001));

    assert!(clock.handle(ClockEvent::StartPause));
    assert_eq!(clock.state(), MatchState::Ready);

    // Locked in: the dial no longer changes anything.
    assert!(!clock.select_time(0));
    assert_eq!(clock.option(), TimeOption::OneMinute);
}

#[test]
fn exactly_one_clock_runs_at_a_time() {
    let mut clock = ChessClock::new(); // three minutes a side
    clock.handle(ClockEvent::StartPause);
    clock.handle(ClockEvent::StartPause);
    assert_eq!(clock.state(), MatchState::Running(Player::One));

    for _ in 0..5 {
        assert!(clock.tick_second());
    }
    assert_eq!(clock.remaining_seconds(Player::One), 175);
    assert_eq!(clock.remaining_seconds(Player::Two), 180);

    // Out-of-turn presses are ignored.
    assert!(!clock.handle(ClockEvent::PlayerTwo));
    assert_eq!(clock.state(), MatchState::Running(Player::One));

    assert!(clock.handle(ClockEvent::PlayerOne));
    assert_eq!(clock.state(), MatchState::Running(Player::Two));
    for _ in 0..3 {
        clock.tick_second();
    }
    assert_eq!(clock.remaining_seconds(Player::One), 175);
    assert_eq!(clock.remaining_seconds(Player::Two), 177);
}

#[test]
fn pause_remembers_whose_move_it_was() {
    let mut clock = ChessClock::new();
    clock.handle(ClockEvent::StartPause);
    clock.handle(ClockEvent::StartPause);
    clock.handle(ClockEvent::PlayerOne);
    assert_eq!(clock.state(), MatchState::Running(Player::Two));

    assert!(clock.handle(ClockEvent::StartPause));
    assert_eq!(clock.state(), MatchState::Paused { active: Player::Two });

    // Time stands still while paused.
    assert!(!clock.tick_second());
    assert_eq!(clock.remaining_seconds(Player::Two), 180);

    assert!(clock.handle(ClockEvent::StartPause));
    assert_eq!(clock.state(), MatchState::Running(Player::Two));
}

#[test]
fn flag_fall_ends_the_game_until_reset() {
    let mut clock = ChessClock::new();
    clock.select_time(1000); // one minute a side
    clock.handle(ClockEvent::StartPause);
    clock.handle(ClockEvent::StartPause);

    for _ in 0..59 {
        clock.tick_second();
        assert!(matches!(clock.state(), MatchState::Running(_)));
    }
    assert!(clock.tick_second());
    assert_eq!(clock.state(), MatchState::Over { winner: Player::Two });
    assert_eq!(clock.remaining_seconds(Player::One), 0);

    // Terminal until reset.
    assert!(!clock.handle(ClockEvent::StartPause));
    assert!(!clock.handle(ClockEvent::PlayerOne));
    assert!(!clock.tick_second());

    assert!(clock.handle(ClockEvent::Reset));
    assert_eq!(clock.state(), MatchState::SelectTime);
    assert_eq!(clock.remaining_seconds(Player::One), 60);
    assert_eq!(clock.remaining_seconds(Player::Two), 60);
}

#[test]
fn every_screen_fits_the_panel() {
    let mut clock = ChessClock::new();
    assert_eq!(clock.render().unwrap().line1.as_str(), "Select time:");
    assert_eq!(clock.render().unwrap().line2.as_str(), "-> 3 min <-");

    clock.handle(ClockEvent::StartPause);
    assert_eq!(clock.render().unwrap().line1.as_str(), "Ready to start");
    assert_eq!(clock.render().unwrap().line2.as_str(), "Time: 3 min");

    clock.handle(ClockEvent::StartPause);
    let frame = clock.render().unwrap();
    assert_eq!(frame.line1.as_str(), "Player 1 to move");
    assert_eq!(frame.line2.as_str(), "03:00      03:00");

    clock.handle(ClockEvent::StartPause);
    assert_eq!(clock.render().unwrap().line1.as_str(), "Paused");
    clock.handle(ClockEvent::StartPause);

    // Run player one out of time.
    for _ in 0..180 {
        clock.tick_second();
    }
    let frame = clock.render().unwrap();
    assert_eq!(frame.line1.as_str(), "Game over");
    assert_eq!(frame.line2.as_str(), "Player 2 wins");
}
