//! Interactive session driving one [`TimerEngine`].
//!
//! The session is the single owner of the engine. It multiplexes three
//! sources in one `tokio::select!` loop (the [`Ticker`], input lines from a
//! [`LineReceiver`] and Ctrl-C) and applies whatever arrives first, one
//! event at a time. After every event the ticker is re-synced with the
//! engine so ticks only flow while the countdown is running.

use super::engine::{Event, Outcome, Snapshot, TimerEngine};
use super::input::{parse_command, Command, InputError};
use super::messages::Message;
use super::ticker::Ticker;
use super::view::View;
use crate::{msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use std::future::Future;
use std::io::{self, BufRead, Write};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use tracing::debug;

const LINE_BUFFER: usize = 16;

/// Lines of user input as they arrive; closed when the input ends.
pub type LineReceiver = mpsc::Receiver<io::Result<String>>;

/// Reads stdin on its own thread and forwards each line.
///
/// The blocking read stays off the runtime, so an interrupted session can
/// return while a read is still pending and the thread does not keep the
/// process alive.
pub fn stdin_lines() -> LineReceiver {
    let (tx, rx) = mpsc::channel(LINE_BUFFER);
    std::thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let failed = line.is_err();
            if tx.blocking_send(line).is_err() || failed {
                break;
            }
        }
    });
    rx
}

/// Forwards lines from an async reader such as a pipe or an in-memory buffer.
pub fn reader_lines<R>(reader: R) -> LineReceiver
where
    R: AsyncBufRead + Unpin + Send + 'static,
{
    let (tx, rx) = mpsc::channel(LINE_BUFFER);
    tokio::spawn(async move {
        let mut lines = reader.lines();
        while let Some(line) = lines.next_line().await.transpose() {
            let failed = line.is_err();
            if tx.send(line).await.is_err() || failed {
                break;
            }
        }
    });
    rx
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

pub struct Session {
    engine: TimerEngine,
    ticker: Ticker,
}

impl Session {
    pub fn new(engine: TimerEngine) -> Self {
        Self::with_ticker(engine, Ticker::default())
    }

    pub fn with_ticker(engine: TimerEngine, mut ticker: Ticker) -> Self {
        ticker.sync(engine.should_tick());
        Session { engine, ticker }
    }

    pub fn engine(&self) -> &TimerEngine {
        &self.engine
    }

    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    /// Applies one event and re-arms or disarms the ticker to match.
    pub fn dispatch(&mut self, event: Event) -> Outcome {
        let outcome = self.engine.apply(event);
        self.ticker.sync(self.engine.should_tick());
        outcome
    }

    /// Parses and applies one line of user input.
    pub fn handle_line(&mut self, line: &str) -> Result<Control, InputError> {
        match parse_command(line)? {
            Command::Apply(events) => {
                for event in events {
                    let preset = match &event {
                        Event::ApplyPreset(preset) => Some(preset.label),
                        _ => None,
                    };
                    let reset_count = event == Event::ResetFocusCount;

                    let outcome = self.dispatch(event);
                    match (&outcome, preset) {
                        (Outcome::Updated, Some(label)) => msg_success!(Message::PresetApplied(label.to_string())),
                        (Outcome::Updated, None) if reset_count => msg_success!(Message::FocusCountReset),
                        _ => self.announce(&outcome),
                    }
                }
                msg_print!(View::render(&self.engine.snapshot()), true);
            }
            Command::ShowPresets => {
                msg_print!(Message::PresetsHeader);
                View::presets().printstd();
            }
            Command::Help => msg_print!(Message::SessionHelp),
            Command::Quit => return Ok(Control::Quit),
        }
        Ok(Control::Continue)
    }

    /// Runs until the input closes, the user quits or Ctrl-C.
    ///
    /// Returns the final snapshot.
    pub async fn run(self, lines: LineReceiver) -> Result<Snapshot> {
        self.run_until(lines, tokio::signal::ctrl_c()).await
    }

    /// Same as [`run`](Self::run), ending when `interrupt` resolves instead
    /// of on Ctrl-C. An interrupt source that fails is ignored.
    pub async fn run_until<F>(mut self, mut lines: LineReceiver, interrupt: F) -> Result<Snapshot>
    where
        F: Future<Output = io::Result<()>>,
    {
        let interrupt = async {
            if let Err(e) = interrupt.await {
                debug!("interrupt source unavailable: {}", e);
                std::future::pending::<()>().await;
            }
        };
        tokio::pin!(interrupt);

        msg_info!(Message::SessionStarted);
        msg_print!(View::render(&self.engine.snapshot()), true);

        loop {
            tokio::select! {
                _ = self.ticker.tick() => self.on_tick()?,
                line = lines.recv() => match line.transpose()? {
                    Some(line) => match self.handle_line(&line) {
                        Ok(Control::Continue) => {}
                        Ok(Control::Quit) => break,
                        Err(e) => msg_error!(Message::InvalidInput(e.to_string())),
                    },
                    None => {
                        msg_info!(Message::SessionInputClosed);
                        break;
                    }
                },
                () = &mut interrupt => {
                    msg_info!(Message::SessionInterrupted, true);
                    break;
                }
            }
        }

        Ok(self.engine.snapshot())
    }

    fn on_tick(&mut self) -> Result<()> {
        let outcome = self.dispatch(Event::Tick);
        match outcome {
            Outcome::PhaseChanged { .. } => {
                println!();
                self.announce(&outcome);
                msg_print!(View::render(&self.engine.snapshot()), true);
            }
            Outcome::Updated => {
                let mut stdout = std::io::stdout();
                write!(stdout, "\r{}   ", View::status_line(&self.engine.snapshot()))?;
                stdout.flush()?;
            }
            _ => {}
        }
        Ok(())
    }

    fn announce(&self, outcome: &Outcome) {
        match outcome {
            Outcome::PhaseChanged { from, to } => msg_info!(Message::PhaseFinished { from: *from, to: *to }),
            Outcome::DurationSet { phase, minutes } => msg_success!(Message::DurationSet {
                phase: *phase,
                minutes: *minutes
            }),
            // Rejected edits close silently.
            Outcome::EditDiscarded(_) | Outcome::Updated | Outcome::Ignored => {}
        }
    }
}
