//! Host tests for the threshold alarm state machine.

use lab_kit::{AlarmState, ThresholdAlarm, BLINK_TOGGLE_TICKS, DEFAULT_SETPOINT, ESCALATE_TICKS};

const HIGH: u16 = DEFAULT_SETPOINT + 100;
const LOW: u16 = DEFAULT_SETPOINT - 100;

#[test]
fn stays_off_at_or_below_the_setpoint() {
    let mut alarm = ThresholdAlarm::new(DEFAULT_SETPOINT);
    for _ in 0..1000 {
        assert_eq!(alarm.tick(LOW), 0);
        assert_eq!(alarm.tick(DEFAULT_SETPOINT), 0);
        assert_eq!(alarm.state(), AlarmState::Off);
    }
}

#[test]
fn blinks_at_the_toggle_cadence() {
    let mut alarm = ThresholdAlarm::new(DEFAULT_SETPOINT);

    // The arming tick itself shows a dark bar.
    assert_eq!(alarm.tick(HIGH), 0);
    assert_eq!(alarm.state(), AlarmState::Blinking);

    // Dark until the first toggle...
    for tick in 1..BLINK_TOGGLE_TICKS {
        assert_eq!(alarm.tick(HIGH), 0, "tick {tick}");
    }
    assert_eq!(alarm.tick(HIGH), 0b0000_0001);

    // ...lit until the second.
    for tick in 1..BLINK_TOGGLE_TICKS {
        assert_eq!(alarm.tick(HIGH), 0b0000_0001, "tick {tick}");
    }
    assert_eq!(alarm.tick(HIGH), 0);
}

#[test]
fn escalates_to_the_full_bar_after_the_blink_phase() {
    let mut alarm = ThresholdAlarm::new(DEFAULT_SETPOINT);
    alarm.tick(HIGH); // arm

    let mut blinking_ticks = 0u32;
    loop {
        blinking_ticks += 1;
        let frame = alarm.tick(HIGH);
        if frame == 0b1111_1111 {
            break;
        }
        assert!(blinking_ticks < ESCALATE_TICKS, "never escalated");
    }
    assert_eq!(blinking_ticks, ESCALATE_TICKS);
    assert_eq!(alarm.state(), AlarmState::FullOn);

    // Latched while the level stays high, clear when it drops.
    assert_eq!(alarm.tick(HIGH), 0b1111_1111);
    assert_eq!(alarm.tick(LOW), 0);
    assert_eq!(alarm.state(), AlarmState::Off);
}

#[test]
fn drops_back_to_off_mid_blink() {
    let mut alarm = ThresholdAlarm::new(DEFAULT_SETPOINT);
    alarm.tick(HIGH);
    for _ in 0..10 {
        alarm.tick(HIGH);
    }
    assert_eq!(alarm.state(), AlarmState::Blinking);
    assert_eq!(alarm.tick(LOW), 0);
    assert_eq!(alarm.state(), AlarmState::Off);
}

#[test]
fn silence_rearms_while_the_level_stays_high() {
    let mut alarm = ThresholdAlarm::new(DEFAULT_SETPOINT);
    alarm.tick(HIGH);
    assert_eq!(alarm.state(), AlarmState::Blinking);

    alarm.silence();
    assert_eq!(alarm.state(), AlarmState::Off);

    // Still above the setpoint: the next tick starts a fresh blink phase.
    assert_eq!(alarm.tick(HIGH), 0);
    assert_eq!(alarm.state(), AlarmState::Blinking);
}
