//! Phase durations and the built-in preset catalog.
//!
//! [`Durations`] is the mutable minute table the engine reads whenever a
//! countdown is (re)started. A [`Preset`] is an immutable bundle of those
//! three values plus the cycle length; applying one overwrites all four at
//! once.
//!
//! ## Catalog
//!
//! | Label          | Focus | Short | Long | Cycles |
//! |----------------|-------|-------|------|--------|
//! | `25 / 5 / 15`  | 25    | 5     | 15   | 4      |
//! | `45 / 15 / 30` | 45    | 15    | 30   | 3      |
//! | `50 / 10 / 30` | 50    | 10    | 30   | 3      |

use super::phase::Phase;
use serde::{Deserialize, Serialize};

pub const DEFAULT_FOCUS_MINUTES: u32 = 25;
pub const DEFAULT_SHORT_BREAK_MINUTES: u32 = 5;
pub const DEFAULT_LONG_BREAK_MINUTES: u32 = 15;
pub const DEFAULT_CYCLES_BEFORE_LONG_BREAK: u32 = 4;

/// Configured length of each phase, in whole minutes.
///
/// Values are kept inside each phase's bound by [`Durations::set`]; the
/// struct is only built directly from trusted sources (defaults, presets,
/// already-clamped configuration).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Durations {
    pub focus: u32,
    pub short_break: u32,
    pub long_break: u32,
}

impl Default for Durations {
    fn default() -> Self {
        Durations {
            focus: DEFAULT_FOCUS_MINUTES,
            short_break: DEFAULT_SHORT_BREAK_MINUTES,
            long_break: DEFAULT_LONG_BREAK_MINUTES,
        }
    }
}

impl Durations {
    /// Builds a table with every value clamped to its phase bound.
    pub fn clamped(focus: u32, short_break: u32, long_break: u32) -> Self {
        Durations {
            focus: Phase::Focus.clamp_minutes(focus),
            short_break: Phase::ShortBreak.clamp_minutes(short_break),
            long_break: Phase::LongBreak.clamp_minutes(long_break),
        }
    }

    pub fn minutes(&self, phase: Phase) -> u32 {
        match phase {
            Phase::Focus => self.focus,
            Phase::ShortBreak => self.short_break,
            Phase::LongBreak => self.long_break,
        }
    }

    pub fn seconds(&self, phase: Phase) -> u32 {
        self.minutes(phase) * 60
    }

    /// Stores `minutes` for `phase` after clamping, returning the stored value.
    pub fn set(&mut self, phase: Phase, minutes: u32) -> u32 {
        let minutes = phase.clamp_minutes(minutes);
        match phase {
            Phase::Focus => self.focus = minutes,
            Phase::ShortBreak => self.short_break = minutes,
            Phase::LongBreak => self.long_break = minutes,
        }
        minutes
    }
}

/// A named, immutable timing bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Preset {
    pub label: &'static str,
    pub focus: u32,
    pub short_break: u32,
    pub long_break: u32,
    pub cycles_before_long_break: u32,
}

impl Preset {
    pub fn durations(&self) -> Durations {
        Durations {
            focus: self.focus,
            short_break: self.short_break,
            long_break: self.long_break,
        }
    }
}

pub const PRESETS: [Preset; 3] = [
    Preset {
        label: "25 / 5 / 15",
        focus: 25,
        short_break: 5,
        long_break: 15,
        cycles_before_long_break: 4,
    },
    Preset {
        label: "45 / 15 / 30",
        focus: 45,
        short_break: 15,
        long_break: 30,
        cycles_before_long_break: 3,
    },
    Preset {
        label: "50 / 10 / 30",
        focus: 50,
        short_break: 10,
        long_break: 30,
        cycles_before_long_break: 3,
    },
];

/// Looks a preset up by 1-based catalog position or by label.
///
/// Labels match with or without the spaces around the slashes, so
/// `45/15/30` and `45 / 15 / 30` both find the second preset.
pub fn find_preset(key: &str) -> Option<Preset> {
    let key = key.trim();
    if let Ok(index) = key.parse::<usize>() {
        return index.checked_sub(1).and_then(|i| PRESETS.get(i)).copied();
    }

    let wanted: String = key.chars().filter(|c| !c.is_whitespace()).collect();
    PRESETS
        .iter()
        .find(|preset| preset.label.chars().filter(|c| !c.is_whitespace()).collect::<String>() == wanted)
        .copied()
}
