//! Configuration management for pomo.
//!
//! The configuration only holds the timer defaults a session starts with:
//! the three phase durations and the cycle length. Timer state itself is
//! never written to disk.
//!
//! ## Storage
//!
//! Stored as pretty-printed JSON in `config.json` inside the application
//! data directory resolved by [`DataStorage`]. A missing file is not an
//! error and yields the built-in 25 / 5 / 15 × 4 defaults.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pomo::libs::config::Config;
//!
//! let config = Config::read()?;
//! let engine = config.timer.unwrap_or_default().engine();
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::engine::TimerEngine;
use super::phase::Phase;
use super::preset::{
    Durations, DEFAULT_CYCLES_BEFORE_LONG_BREAK, DEFAULT_FOCUS_MINUTES, DEFAULT_LONG_BREAK_MINUTES,
    DEFAULT_SHORT_BREAK_MINUTES,
};
use crate::libs::messages::Message;
use crate::{msg_debug, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Timer defaults applied when a session starts.
///
/// Values read from disk may be out of range; [`TimerConfig::durations`]
/// and [`TimerConfig::cycles`] clamp them before the engine sees them.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TimerConfig {
    pub focus_minutes: u32,
    pub short_break_minutes: u32,
    pub long_break_minutes: u32,
    pub cycles_before_long_break: u32,
}

impl Default for TimerConfig {
    fn default() -> Self {
        TimerConfig {
            focus_minutes: DEFAULT_FOCUS_MINUTES,
            short_break_minutes: DEFAULT_SHORT_BREAK_MINUTES,
            long_break_minutes: DEFAULT_LONG_BREAK_MINUTES,
            cycles_before_long_break: DEFAULT_CYCLES_BEFORE_LONG_BREAK,
        }
    }
}

impl TimerConfig {
    pub fn durations(&self) -> Durations {
        Durations::clamped(self.focus_minutes, self.short_break_minutes, self.long_break_minutes)
    }

    pub fn cycles(&self) -> u32 {
        self.cycles_before_long_break.max(1)
    }

    /// Builds a paused engine on Focus with these defaults.
    pub fn engine(&self) -> TimerEngine {
        TimerEngine::with_settings(self.durations(), self.cycles())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timer: Option<TimerConfig>,
}

impl Config {
    /// Reads the configuration, falling back to defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(&config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        msg_debug!(Message::ConfigLoaded(config_file_path.display().to_string()));
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. Returns `false` if there was none.
    pub fn delete() -> Result<bool> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    /// Interactive wizard for the timer defaults.
    ///
    /// Existing values are offered as defaults; each answer is validated
    /// against its phase bound before it is accepted.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();
        let default = config.timer.clone().unwrap_or_default();

        msg_print!(Message::ConfigModuleTimer);
        config.timer = Some(TimerConfig {
            focus_minutes: prompt_minutes(Phase::Focus, Message::PromptFocusMinutes, default.focus_minutes)?,
            short_break_minutes: prompt_minutes(
                Phase::ShortBreak,
                Message::PromptShortBreakMinutes,
                default.short_break_minutes,
            )?,
            long_break_minutes: prompt_minutes(
                Phase::LongBreak,
                Message::PromptLongBreakMinutes,
                default.long_break_minutes,
            )?,
            cycles_before_long_break: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptCyclesBeforeLongBreak.to_string())
                .default(default.cycles())
                .validate_with(|cycles: &u32| -> Result<(), String> {
                    if *cycles >= 1 {
                        Ok(())
                    } else {
                        Err(Message::CyclesOutOfRange.to_string())
                    }
                })
                .interact_text()?,
        });

        Ok(config)
    }
}

fn prompt_minutes(phase: Phase, prompt: Message, default: u32) -> Result<u32> {
    let max = phase.max_minutes();
    let minutes = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .default(phase.clamp_minutes(default))
        .validate_with(move |minutes: &u32| -> Result<(), String> {
            if (1..=max).contains(minutes) {
                Ok(())
            } else {
                Err(Message::MinutesOutOfRange { min: 1, max }.to_string())
            }
        })
        .interact_text()?;
    Ok(minutes)
}
