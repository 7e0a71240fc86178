//! Two-player chess clock.

use crate::lcd_frame::{write_clock, LcdFrame, LcdLine};
use crate::Result;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Player {
    One,
    Two,
}

impl Player {
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::One => "Player 1",
            Self::Two => "Player 2",
        }
    }
}

/// The time controls the dial selects between.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeOption {
    FiveMinutes,
    ThreeMinutes,
    OneMinute,
}

impl TimeOption {
    #[must_use]
    pub const fn seconds(self) -> u16 {
        match self {
            Self::FiveMinutes => 300,
            Self::ThreeMinutes => 180,
            Self::OneMinute => 60,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FiveMinutes => "5 min",
            Self::ThreeMinutes => "3 min",
            Self::OneMinute => "1 min",
        }
    }

    /// Option for a 10-bit dial level: the dial range splits in thirds.
    #[must_use]
    pub const fn from_level(level: u16) -> Self {
        match (level as u32) * 3 / 1024 {
            0 => Self::FiveMinutes,
            1 => Self::ThreeMinutes,
            _ => Self::OneMinute,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MatchState {
    /// The dial picks the time control.
    SelectTime,
    /// Time control locked in, waiting for the first move.
    Ready,
    /// The named player's clock is counting down.
    Running(Player),
    Paused {
        active: Player,
    },
    /// A flag fell; terminal until reset.
    Over {
        winner: Player,
    },
}

/// Button events of the clock.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockEvent {
    PlayerOne,
    PlayerTwo,
    StartPause,
    Reset,
}

/// The chess-clock state machine. Exactly one clock counts down at a time;
/// callers feed it button events, dial levels while selecting, and one
/// `tick_second` per second. `true` return values ask for a repaint.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChessClock {
    state: MatchState,
    option: TimeOption,
    remaining: [u16; 2],
}

impl ChessClock {
    #[must_use]
    pub const fn new() -> Self {
        let option = TimeOption::ThreeMinutes;
        Self {
            state: MatchState::SelectTime,
            option,
            remaining: [option.seconds(); 2],
        }
    }

    #[must_use]
    pub const fn state(&self) -> MatchState {
        self.state
    }

    #[must_use]
    pub const fn option(&self) -> TimeOption {
        self.option
    }

    #[must_use]
    pub const fn remaining_seconds(&self, player: Player) -> u16 {
        self.remaining[player.index()]
    }

    /// Follows the dial while the selection screen is up; ignored otherwise.
    /// Returns `true` when the selection changed.
    pub fn select_time(&mut self, level: u16) -> bool {
        if self.state != MatchState::SelectTime {
            return false;
        }
        let option = TimeOption::from_level(level);
        if option == self.option {
            return false;
        }
        self.option = option;
        self.remaining = [option.seconds(); 2];
        true
    }

    /// Applies a button event; returns `true` when the display changed.
    pub fn handle(&mut self, event: ClockEvent) -> bool {
        match event {
            // A player's button only acts on that player's move.
            ClockEvent::PlayerOne => self.end_move(Player::One),
            ClockEvent::PlayerTwo => self.end_move(Player::Two),
            ClockEvent::StartPause => match self.state {
                MatchState::SelectTime => {
                    self.remaining = [self.option.seconds(); 2];
                    self.state = MatchState::Ready;
                    true
                }
                MatchState::Ready => {
                    self.state = MatchState::Running(Player::One);
                    true
                }
                MatchState::Running(player) => {
                    self.state = MatchState::Paused { active: player };
                    true
                }
                MatchState::Paused { active } => {
                    self.state = MatchState::Running(active);
                    true
                }
                MatchState::Over { .. } => false,
            },
            ClockEvent::Reset => {
                self.state = MatchState::SelectTime;
                self.remaining = [self.option.seconds(); 2];
                true
            }
        }
    }

    /// Advances one second of wall time; returns `true` when the display
    /// changed.
    pub fn tick_second(&mut self) -> bool {
        let MatchState::Running(player) = self.state else {
            return false;
        };
        let remaining = &mut self.remaining[player.index()];
        if *remaining > 0 {
            *remaining -= 1;
        }
        if *remaining == 0 {
            self.state = MatchState::Over {
                winner: player.opponent(),
            };
        }
        true
    }

    /// Renders the two LCD lines; every state fits the 16-column panel.
    ///
    /// # Errors
    ///
    /// Fails only if a line overflows the panel, which the fixed texts here
    /// never do.
    pub fn render(&self) -> Result<LcdFrame> {
        match self.state {
            MatchState::SelectTime => {
                let mut frame = LcdFrame::new("Select time:", "-> ")?;
                frame.line2.push_str(self.option.label())?;
                frame.line2.push_str(" <-")?;
                Ok(frame)
            }
            MatchState::Ready => {
                let mut frame = LcdFrame::new("Ready to start", "Time: ")?;
                frame.line2.push_str(self.option.label())?;
                Ok(frame)
            }
            MatchState::Running(player) => {
                let mut frame = LcdFrame::default();
                frame.line1.push_str(player.label())?;
                frame.line1.push_str(" to move")?;
                self.write_both_clocks(&mut frame.line2)?;
                Ok(frame)
            }
            MatchState::Paused { .. } => {
                let mut frame = LcdFrame::new("Paused", "")?;
                self.write_both_clocks(&mut frame.line2)?;
                Ok(frame)
            }
            MatchState::Over { winner } => {
                let mut frame = LcdFrame::new("Game over", "")?;
                frame.line2.push_str(winner.label())?;
                frame.line2.push_str(" wins")?;
                Ok(frame)
            }
        }
    }

    fn end_move(&mut self, player: Player) -> bool {
        if self.state == MatchState::Running(player) {
            self.state = MatchState::Running(player.opponent());
            true
        } else {
            false
        }
    }

    // Player one's clock left, player two's right: "05:00      05:00"
    fn write_both_clocks(&self, line: &mut LcdLine) -> Result<()> {
        let [one, two] = self.remaining;
        write_clock(line, one / 60, one % 60, ':')?;
        line.push_str("      ")?;
        write_clock(line, two / 60, two % 60, ':')?;
        Ok(())
    }
}

impl Default for ChessClock {
    fn default() -> Self {
        Self::new()
    }
}
