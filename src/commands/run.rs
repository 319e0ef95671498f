//! Interactive timer session command.
//!
//! Loads the timer defaults from the configuration, optionally applies a
//! preset and a starting phase from the command line, then hands the engine
//! to a [`Session`] reading commands from stdin.

use crate::{
    libs::{
        config::Config,
        engine::Event,
        messages::Message,
        phase::Phase,
        preset::find_preset,
        session::{stdin_lines, Session},
    },
    msg_bail_anyhow, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Preset to start with, by position (1-3) or label such as "45/15/30"
    #[arg(short, long)]
    preset: Option<String>,

    /// Phase to start in: focus, short or long
    #[arg(long)]
    phase: Option<Phase>,
}

pub async fn cmd(args: RunArgs) -> Result<()> {
    let mut engine = Config::read()?.timer.unwrap_or_default().engine();

    if let Some(key) = args.preset.as_deref() {
        let Some(preset) = find_preset(key) else {
            msg_bail_anyhow!(Message::UnknownPreset(key.to_string()));
        };
        engine.apply(Event::ApplyPreset(preset));
    }
    if let Some(phase) = args.phase {
        engine.apply(Event::SwitchMode(phase));
    }

    let snapshot = Session::new(engine).run(stdin_lines()).await?;

    msg_success!(Message::SessionSummary(snapshot.state.completed_focus_sessions), true);
    Ok(())
}
