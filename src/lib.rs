//! # Pomo - a terminal Pomodoro timer
//!
//! Cycles through Focus, Short Break and Long Break blocks, counts completed
//! focus blocks and lets the user retune durations on the fly.
//!
//! ## Features
//!
//! - **State Machine**: one transition function drives every timer change
//! - **Presets**: 25/5/15, 45/15/30 and 50/10/30 timing bundles
//! - **Duration Editing**: per-phase minutes with clamped bounds
//! - **Interactive Session**: line commands plus a once-per-second ticker
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pomo::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod libs;
