use crate::{
    libs::{messages::Message, view::View},
    msg_print,
};
use anyhow::Result;

/// Prints the built-in preset catalog.
pub fn cmd() -> Result<()> {
    msg_print!(Message::PresetsHeader);
    View::presets().printstd();
    Ok(())
}
