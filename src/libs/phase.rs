//! Timer phases and their display metadata.
//!
//! A session always sits in exactly one [`Phase`]. Each phase carries its own
//! duration bound, label and one-line hint, which the view and the duration
//! editor read from here rather than hard-coding.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the three blocks a Pomodoro cycle is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Focus,
    ShortBreak,
    LongBreak,
}

impl Phase {
    /// Upper bound in minutes accepted for this phase's duration.
    ///
    /// The lower bound is always one minute.
    pub fn max_minutes(&self) -> u32 {
        match self {
            Phase::Focus => 180,
            Phase::ShortBreak => 60,
            Phase::LongBreak => 90,
        }
    }

    /// Clamps a minute value into `[1, max_minutes()]`.
    pub fn clamp_minutes(&self, minutes: u32) -> u32 {
        minutes.clamp(1, self.max_minutes())
    }

    pub fn label(&self) -> &'static str {
        match self {
            Phase::Focus => "Focus",
            Phase::ShortBreak => "Short Break",
            Phase::LongBreak => "Long Break",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Phase::Focus => "Stay on one task. No notifications, no distractions.",
            Phase::ShortBreak => "Look away from the screen, grab some water, stretch.",
            Phase::LongBreak => "You finished a full cycle. Take a deeper break.",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Phase {
    type Err = String;

    /// Accepts the short names used on the command line and in a session:
    /// `focus`, `short`, `long`, plus the snake_case serde names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "focus" | "f" => Ok(Phase::Focus),
            "short" | "short_break" | "shortbreak" => Ok(Phase::ShortBreak),
            "long" | "long_break" | "longbreak" => Ok(Phase::LongBreak),
            other => Err(format!("unknown phase '{}', expected focus, short or long", other)),
        }
    }
}
