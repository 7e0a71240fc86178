//! Host tests for the kitchen timer state machine.

use lab_kit::{KitchenTimer, TimerEvent, TimerState, DONE_SCREEN_SECONDS, MAX_SECONDS};

#[test]
fn add_buttons_clamp_at_99_59() {
    let mut timer = KitchenTimer::new();
    for _ in 0..120 {
        assert!(timer.handle(TimerEvent::AddMinute));
    }
    assert_eq!(timer.remaining_seconds(), MAX_SECONDS);
    timer.handle(TimerEvent::AddTenSeconds);
    assert_eq!(timer.remaining_seconds(), MAX_SECONDS);
}

#[test]
fn start_without_time_is_ignored() {
    let mut timer = KitchenTimer::new();
    assert!(!timer.handle(TimerEvent::StartStop));
    assert_eq!(timer.state(), TimerState::Idle);
}

#[test]
fn counts_down_to_done_and_auto_resets() {
    let mut timer = KitchenTimer::new();
    timer.handle(TimerEvent::AddTenSeconds);
    timer.handle(TimerEvent::StartStop);
    assert_eq!(timer.state(), TimerState::Running);

    for second in 1..10u16 {
        assert!(timer.tick_second());
        assert_eq!(timer.remaining_seconds(), 10 - second);
        assert_eq!(timer.state(), TimerState::Running);
    }
    assert!(timer.tick_second());
    assert_eq!(timer.state(), TimerState::Idle);
    assert!(timer.is_finished());

    let frame = timer.render(true).unwrap();
    assert_eq!(frame.line1.as_str(), "Done");
    assert_eq!(frame.line2.as_str(), "Enjoy!");

    // The done screen dismisses itself after a few seconds.
    for _ in 1..DONE_SCREEN_SECONDS {
        assert!(!timer.tick_second());
        assert!(timer.is_finished());
    }
    assert!(timer.tick_second());
    assert!(!timer.is_finished());
    let frame = timer.render(true).unwrap();
    assert_eq!(frame.line1.as_str(), "Ready in:");
    assert_eq!(frame.line2.as_str(), "Time: 00:00");
}

#[test]
fn paused_colon_blinks_and_countdown_holds() {
    let mut timer = KitchenTimer::new();
    timer.handle(TimerEvent::AddMinute);
    timer.handle(TimerEvent::AddTenSeconds);
    timer.handle(TimerEvent::StartStop);
    timer.handle(TimerEvent::StartStop);
    assert_eq!(timer.state(), TimerState::Paused);

    assert_eq!(timer.render(true).unwrap().line1.as_str(), "Paused");
    assert_eq!(timer.render(true).unwrap().line2.as_str(), "Time: 01:10");
    assert_eq!(timer.render(false).unwrap().line2.as_str(), "Time: 01 10");

    assert!(!timer.tick_second());
    assert_eq!(timer.remaining_seconds(), 70);

    timer.handle(TimerEvent::StartStop);
    assert!(timer.tick_second());
    assert_eq!(timer.remaining_seconds(), 69);
}

#[test]
fn adding_time_while_cooking_extends_the_countdown() {
    let mut timer = KitchenTimer::new();
    timer.handle(TimerEvent::AddTenSeconds);
    timer.handle(TimerEvent::StartStop);
    for _ in 0..5 {
        timer.tick_second();
    }
    assert_eq!(timer.remaining_seconds(), 5);

    assert!(timer.handle(TimerEvent::AddMinute));
    assert_eq!(timer.remaining_seconds(), 65);
    assert_eq!(timer.state(), TimerState::Running);

    // The colon does not blink while cooking.
    assert_eq!(timer.render(false).unwrap().line2.as_str(), "Time: 01:05");
    assert_eq!(timer.render(false).unwrap().line1.as_str(), "Cooking");
}
