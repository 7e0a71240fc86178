//! Dial position to display speed.

/// Five speed tiers over the 10-bit dial range, slowest first.
///
/// The thresholds split 0..=1023 the way the classic exercise did: the lowest
/// fifth of the dial runs the pattern at a fifth of full speed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpeedTier {
    Slowest,
    Slow,
    Medium,
    Fast,
    Fastest,
}

impl SpeedTier {
    /// Tier for a 10-bit dial level.
    #[must_use]
    pub const fn from_level(level: u16) -> Self {
        match level {
            0..=204 => Self::Slowest,
            205..=409 => Self::Slow,
            410..=614 => Self::Medium,
            615..=819 => Self::Fast,
            _ => Self::Fastest,
        }
    }

    /// Multiplier applied to the base step: 5 at the slowest tier down to 1.
    #[must_use]
    pub const fn factor(self) -> u32 {
        match self {
            Self::Slowest => 5,
            Self::Slow => 4,
            Self::Medium => 3,
            Self::Fast => 2,
            Self::Fastest => 1,
        }
    }
}
