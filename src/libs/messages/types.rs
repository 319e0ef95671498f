use crate::libs::phase::Phase;

/// Every user-facing text the application prints.
///
/// Variants only carry the data to interpolate; the wording lives in the
/// `Display` implementation in `display.rs`.
#[derive(Debug, Clone)]
pub enum Message {
    // === SESSION MESSAGES ===
    SessionStarted,
    SessionSummary(u32),
    SessionInputClosed,
    SessionInterrupted,
    SessionHelp,
    PhaseFinished { from: Phase, to: Phase },
    PresetApplied(String),
    DurationSet { phase: Phase, minutes: u32 },
    FocusCountReset,

    // === INPUT MESSAGES ===
    InvalidInput(String),
    UnknownPreset(String),

    // === PRESET MESSAGES ===
    PresetsHeader,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigNotFound,
    ConfigModuleTimer,
    ConfigLoaded(String),

    // === PROMPTS ===
    PromptFocusMinutes,
    PromptShortBreakMinutes,
    PromptLongBreakMinutes,
    PromptCyclesBeforeLongBreak,
    MinutesOutOfRange { min: u32, max: u32 },
    CyclesOutOfRange,
}
