//! Core library modules for pomo.
//!
//! - **Timer Core**: phases, durations and presets, the engine state machine
//! - **Session**: tick source, input grammar, interactive loop
//! - **Presentation**: clock formatting, terminal view, messages
//! - **Infrastructure**: configuration, data storage, logging

pub mod config;
pub mod data_storage;
pub mod engine;
pub mod formatter;
pub mod input;
pub mod logging;
pub mod messages;
pub mod phase;
pub mod preset;
pub mod session;
pub mod ticker;
pub mod view;
