//! Display implementation for pomo application messages.
//!
//! All user-facing wording is defined here in one match so the rest of the
//! code only deals with typed [`Message`] variants.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === SESSION MESSAGES ===
            Message::SessionStarted => "Pomodoro session started. Type 'help' for commands.".to_string(),
            Message::SessionSummary(completed) => format!("Session ended. Focus blocks completed: {}", completed),
            Message::SessionInputClosed => "Input closed, ending session.".to_string(),
            Message::SessionInterrupted => "Interrupted, ending session.".to_string(),
            Message::SessionHelp => [
                "Commands:",
                "  start | pause | s | <enter>   start or pause the countdown",
                "  reset | r                     restart the current block, paused",
                "  skip | n                      jump to the next block and keep running",
                "  focus | short | long          switch block, paused",
                "  preset <1-3 | label>          apply a preset",
                "  clear                         reset the completed focus count",
                "  edit [minutes]                edit this block's length",
                "  set <minutes>                 change the value being edited",
                "  save | cancel                 finish editing",
                "  presets                       list presets",
                "  quit | q                      end the session",
            ]
            .join("\n"),
            Message::PhaseFinished { from, to } => format!("{} finished. Time for {}.", from, to),
            Message::PresetApplied(label) => format!("Preset {} applied.", label),
            Message::DurationSet { phase, minutes } => format!("{} set to {} minutes.", phase, minutes),
            Message::FocusCountReset => "Focus block count reset.".to_string(),

            // === INPUT MESSAGES ===
            Message::InvalidInput(error) => format!("{}. Type 'help' for commands.", error),
            Message::UnknownPreset(key) => format!("Unknown preset '{}'. Run 'pomo presets' to list them.", key),

            // === PRESET MESSAGES ===
            Message::PresetsHeader => "Presets (focus / short break / long break)".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully.".to_string(),
            Message::ConfigDeleted => "Configuration deleted.".to_string(),
            Message::ConfigNotFound => "No configuration file found.".to_string(),
            Message::ConfigModuleTimer => "Timer defaults".to_string(),
            Message::ConfigLoaded(path) => format!("Configuration loaded from {}", path),

            // === PROMPTS ===
            Message::PromptFocusMinutes => "Focus minutes".to_string(),
            Message::PromptShortBreakMinutes => "Short break minutes".to_string(),
            Message::PromptLongBreakMinutes => "Long break minutes".to_string(),
            Message::PromptCyclesBeforeLongBreak => "Focus blocks before a long break".to_string(),
            Message::MinutesOutOfRange { min, max } => format!("Enter a value between {} and {}", min, max),
            Message::CyclesOutOfRange => "Enter at least 1".to_string(),
        };
        write!(f, "{}", text)
    }
}
