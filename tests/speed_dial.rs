//! Host tests for the dial speed tiers.

use lab_kit::SpeedTier;

#[test]
fn tier_thresholds_match_the_dial_split() {
    assert_eq!(SpeedTier::from_level(0), SpeedTier::Slowest);
    assert_eq!(SpeedTier::from_level(204), SpeedTier::Slowest);
    assert_eq!(SpeedTier::from_level(205), SpeedTier::Slow);
    assert_eq!(SpeedTier::from_level(409), SpeedTier::Slow);
    assert_eq!(SpeedTier::from_level(410), SpeedTier::Medium);
    assert_eq!(SpeedTier::from_level(614), SpeedTier::Medium);
    assert_eq!(SpeedTier::from_level(615), SpeedTier::Fast);
    assert_eq!(SpeedTier::from_level(819), SpeedTier::Fast);
    assert_eq!(SpeedTier::from_level(820), SpeedTier::Fastest);
    assert_eq!(SpeedTier::from_level(1023), SpeedTier::Fastest);
}

#[test]
fn turning_the_dial_up_never_slows_the_pattern() {
    let factors: Vec<u32> = (0..=1023u16)
        .map(|level| SpeedTier::from_level(level).factor())
        .collect();
    assert_eq!(factors.first(), Some(&5));
    assert_eq!(factors.last(), Some(&1));
    assert!(factors.windows(2).all(|pair| pair[0] >= pair[1]));
}
