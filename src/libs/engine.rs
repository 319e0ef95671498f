//! The Pomodoro state machine.
//!
//! [`TimerEngine`] owns the whole timer state and is mutated through exactly
//! one entry point, [`TimerEngine::apply`], which takes an [`Event`] and
//! reports what happened as an [`Outcome`]. The tick source and the renderer
//! both talk to the engine only through events, so every transition is
//! serialized and observable as a single step.
//!
//! ## State Machine
//!
//! ```text
//!            expiry / skip (n % cycles != 0)
//!   ┌───────┐ ─────────────────────────────▶ ┌─────────────┐
//!   │ Focus │                                │ Short Break │
//!   └───────┘ ◀───────────────────────────── └─────────────┘
//!     │  ▲            expiry / skip
//!     │  │
//!     │  │ expiry / skip         ┌────────────┐
//!     │  └────────────────────── │ Long Break │
//!     └────────────────────────▶ └────────────┘
//!        expiry / skip (n % cycles == 0)
//! ```
//!
//! Each phase can additionally be running or paused. The countdown reaching
//! zero while running is not a resting state: the decrement that produces it
//! performs the phase transition in the same call, so a snapshot never shows
//! a running timer stuck at `00:00`.
//!
//! ## Usage
//!
//! ```rust
//! use pomo::libs::engine::{Event, TimerEngine};
//! use pomo::libs::phase::Phase;
//!
//! let mut engine = TimerEngine::new();
//! engine.apply(Event::StartPause);
//! engine.apply(Event::Tick);
//! assert_eq!(engine.state().seconds_remaining, 25 * 60 - 1);
//!
//! engine.apply(Event::Skip);
//! assert_eq!(engine.state().phase, Phase::ShortBreak);
//! assert_eq!(engine.state().completed_focus_sessions, 1);
//! ```

use super::phase::Phase;
use super::preset::{Durations, Preset, DEFAULT_CYCLES_BEFORE_LONG_BREAK};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, trace};

/// Reasons an edit buffer cannot become a duration.
///
/// These never reach the user: a failed commit silently closes the editor
/// and keeps the previous duration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DurationInputError {
    #[error("duration input is empty")]
    Empty,
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("'{0}' is not a positive number of minutes")]
    NotPositive(String),
}

/// Parses edit buffer text into whole minutes for `phase`.
///
/// Accepts any decimal number. Values above zero are clamped into the
/// phase's `[1, max]` range and then truncated to whole minutes, so `0.5`
/// becomes `1` and `500` on a focus block becomes `180`.
pub fn parse_minutes(raw: &str, phase: Phase) -> Result<u32, DurationInputError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(DurationInputError::Empty);
    }

    let value: f64 = text.parse().map_err(|_| DurationInputError::NotANumber(text.to_string()))?;
    if value.is_nan() {
        return Err(DurationInputError::NotANumber(text.to_string()));
    }
    if value <= 0.0 {
        return Err(DurationInputError::NotPositive(text.to_string()));
    }

    let clamped = value.clamp(1.0, f64::from(phase.max_minutes()));
    Ok(clamped.floor() as u32)
}

/// Everything that can happen to the timer.
///
/// `Tick` comes from the tick source; all other variants are user intents
/// sent by the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Tick,
    StartPause,
    Reset,
    Skip,
    SwitchMode(Phase),
    ApplyPreset(Preset),
    ResetFocusCount,
    OpenEdit,
    UpdateEditBuffer(String),
    CommitEdit,
    CancelEdit,
}

/// Result of applying one [`Event`].
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The event had no effect on the state.
    Ignored,
    /// The state changed without a phase transition.
    Updated,
    /// The countdown expired or was skipped and a new phase began.
    PhaseChanged { from: Phase, to: Phase },
    /// An edit commit stored a new duration for `phase`.
    DurationSet { phase: Phase, minutes: u32 },
    /// An edit commit was rejected; the editor closed with nothing stored.
    EditDiscarded(DurationInputError),
}

/// Transient duration editor buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PendingEdit {
    pub phase: Phase,
    pub raw_text: String,
}

/// The mutable core of the timer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimerState {
    pub phase: Phase,
    pub seconds_remaining: u32,
    pub is_running: bool,
    pub completed_focus_sessions: u32,
    pub cycles_before_long_break: u32,
    pub pending_edit: Option<PendingEdit>,
}

/// Read-only view of the engine handed to renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    #[serde(flatten)]
    pub state: TimerState,
    pub durations: Durations,
    /// Number of filled cycle dots: completed focus blocks in the current cycle.
    pub filled_dots: u32,
}

#[derive(Debug, Clone)]
pub struct TimerEngine {
    durations: Durations,
    state: TimerState,
}

impl Default for TimerEngine {
    fn default() -> Self {
        Self::with_settings(Durations::default(), DEFAULT_CYCLES_BEFORE_LONG_BREAK)
    }
}

impl TimerEngine {
    /// Creates an engine with the 25 / 5 / 15 × 4 defaults, paused on Focus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a paused engine on Focus with the given timing.
    ///
    /// A cycle length of zero is raised to one.
    pub fn with_settings(durations: Durations, cycles_before_long_break: u32) -> Self {
        let state = TimerState {
            phase: Phase::Focus,
            seconds_remaining: durations.seconds(Phase::Focus),
            is_running: false,
            completed_focus_sessions: 0,
            cycles_before_long_break: cycles_before_long_break.max(1),
            pending_edit: None,
        };
        TimerEngine { durations, state }
    }

    pub fn state(&self) -> &TimerState {
        &self.state
    }

    pub fn durations(&self) -> &Durations {
        &self.durations
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state.clone(),
            durations: self.durations,
            filled_dots: self.filled_dots(),
        }
    }

    /// Whether the tick source should currently be armed.
    pub fn should_tick(&self) -> bool {
        self.state.is_running && self.state.seconds_remaining > 0
    }

    pub fn is_editing(&self) -> bool {
        self.state.pending_edit.is_some()
    }

    /// Completed focus blocks in the current cycle.
    ///
    /// Drops back to zero right after the block that completes a cycle.
    pub fn filled_dots(&self) -> u32 {
        self.state.completed_focus_sessions % self.state.cycles_before_long_break
    }

    /// Applies one event and reports what changed.
    pub fn apply(&mut self, event: Event) -> Outcome {
        if !matches!(event, Event::Tick) {
            debug!(?event, phase = ?self.state.phase, "applying event");
        }

        match event {
            Event::Tick => self.tick(),
            Event::StartPause => {
                self.state.is_running = !self.state.is_running;
                Outcome::Updated
            }
            Event::Reset => {
                self.state.is_running = false;
                self.state.seconds_remaining = self.durations.seconds(self.state.phase);
                Outcome::Updated
            }
            Event::Skip => {
                let outcome = self.advance();
                self.state.is_running = true;
                outcome
            }
            Event::SwitchMode(phase) => {
                self.state.phase = phase;
                self.state.is_running = false;
                self.state.seconds_remaining = self.durations.seconds(phase);
                self.state.pending_edit = None;
                Outcome::Updated
            }
            Event::ApplyPreset(preset) => self.apply_preset(&preset),
            Event::ResetFocusCount => {
                if self.state.completed_focus_sessions == 0 {
                    return Outcome::Ignored;
                }
                self.state.completed_focus_sessions = 0;
                Outcome::Updated
            }
            Event::OpenEdit => {
                if self.state.pending_edit.is_some() {
                    return Outcome::Ignored;
                }
                self.state.is_running = false;
                self.state.pending_edit = Some(PendingEdit {
                    phase: self.state.phase,
                    raw_text: self.durations.minutes(self.state.phase).to_string(),
                });
                Outcome::Updated
            }
            Event::UpdateEditBuffer(text) => match self.state.pending_edit.as_mut() {
                Some(edit) => {
                    edit.raw_text = text;
                    Outcome::Updated
                }
                None => Outcome::Ignored,
            },
            Event::CommitEdit => self.commit_edit(),
            Event::CancelEdit => match self.state.pending_edit.take() {
                Some(_) => Outcome::Updated,
                None => Outcome::Ignored,
            },
        }
    }

    fn tick(&mut self) -> Outcome {
        if !self.should_tick() {
            return Outcome::Ignored;
        }

        self.state.seconds_remaining -= 1;
        trace!(remaining = self.state.seconds_remaining, "tick");
        if self.state.seconds_remaining == 0 {
            return self.advance();
        }
        Outcome::Updated
    }

    /// Moves to the phase that follows the current one and loads its full
    /// countdown. Leaving Focus counts as a completed block.
    fn advance(&mut self) -> Outcome {
        let from = self.state.phase;
        let to = match from {
            Phase::Focus => {
                self.state.completed_focus_sessions = self.state.completed_focus_sessions.saturating_add(1);
                if self.state.completed_focus_sessions % self.state.cycles_before_long_break == 0 {
                    Phase::LongBreak
                } else {
                    Phase::ShortBreak
                }
            }
            Phase::ShortBreak | Phase::LongBreak => Phase::Focus,
        };

        self.state.phase = to;
        self.state.seconds_remaining = self.durations.seconds(to);
        self.state.pending_edit = None;

        info!(
            from = %from,
            to = %to,
            completed = self.state.completed_focus_sessions,
            "phase changed"
        );
        Outcome::PhaseChanged { from, to }
    }

    fn apply_preset(&mut self, preset: &Preset) -> Outcome {
        self.durations = preset.durations();
        self.state.cycles_before_long_break = preset.cycles_before_long_break.max(1);

        // A running countdown keeps its length until the next phase change.
        if !self.state.is_running {
            self.state.seconds_remaining = self.durations.seconds(self.state.phase);
        }
        Outcome::Updated
    }

    fn commit_edit(&mut self) -> Outcome {
        let Some(edit) = self.state.pending_edit.take() else {
            return Outcome::Ignored;
        };

        match parse_minutes(&edit.raw_text, edit.phase) {
            Ok(minutes) => {
                let minutes = self.durations.set(edit.phase, minutes);
                self.state.seconds_remaining = minutes * 60;
                Outcome::DurationSet { phase: edit.phase, minutes }
            }
            Err(e) => {
                debug!(error = %e, "discarding duration edit");
                Outcome::EditDiscarded(e)
            }
        }
    }
}
