//! Line grammar for the interactive session.
//!
//! Each line typed during `pomo run` becomes one [`Command`]. Most commands
//! map onto one or more engine [`Event`]s; a few (`help`, `presets`, `quit`)
//! are handled by the session itself.
//!
//! Keywords are case-insensitive. An empty line toggles start/pause so the
//! timer can be driven with the enter key alone.

use super::engine::Event;
use super::phase::Phase;
use super::preset::find_preset;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Events to apply in order.
    Apply(Vec<Event>),
    ShowPresets,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Unknown command '{0}'")]
    Unknown(String),
    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),
    #[error("Unknown preset '{0}'")]
    UnknownPreset(String),
    #[error("Unknown phase '{0}', expected focus, short or long")]
    UnknownPhase(String),
}

pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let line = line.trim();
    let (keyword, rest) = match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (line, ""),
    };
    let argument = if rest.is_empty() { None } else { Some(rest) };

    let single = |event: Event| Ok(Command::Apply(vec![event]));

    match keyword.to_lowercase().as_str() {
        "" | "s" | "start" | "pause" | "toggle" => single(Event::StartPause),
        "r" | "reset" => single(Event::Reset),
        "n" | "skip" | "next" => single(Event::Skip),
        "focus" => single(Event::SwitchMode(Phase::Focus)),
        "short" => single(Event::SwitchMode(Phase::ShortBreak)),
        "long" => single(Event::SwitchMode(Phase::LongBreak)),
        "mode" => {
            let name = argument.ok_or(InputError::MissingArgument("mode"))?;
            let phase = name.parse::<Phase>().map_err(|_| InputError::UnknownPhase(name.to_string()))?;
            single(Event::SwitchMode(phase))
        }
        "preset" | "p" => {
            let key = argument.ok_or(InputError::MissingArgument("preset"))?;
            let preset = find_preset(key).ok_or_else(|| InputError::UnknownPreset(key.to_string()))?;
            single(Event::ApplyPreset(preset))
        }
        "clear" => single(Event::ResetFocusCount),
        "edit" | "e" => match argument {
            Some(minutes) => Ok(Command::Apply(vec![
                Event::OpenEdit,
                Event::UpdateEditBuffer(minutes.to_string()),
                Event::CommitEdit,
            ])),
            None => single(Event::OpenEdit),
        },
        "set" => {
            let text = argument.ok_or(InputError::MissingArgument("set"))?;
            single(Event::UpdateEditBuffer(text.to_string()))
        }
        "save" => single(Event::CommitEdit),
        "cancel" => single(Event::CancelEdit),
        "presets" => Ok(Command::ShowPresets),
        "help" | "h" | "?" => Ok(Command::Help),
        "quit" | "q" | "exit" => Ok(Command::Quit),
        _ => Err(InputError::Unknown(line.to_string())),
    }
}
