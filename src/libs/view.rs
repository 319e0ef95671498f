use super::engine::Snapshot;
use super::formatter::{format_clock, format_cycle_dots, format_minutes};
use super::preset::PRESETS;
use prettytable::{row, Table};

/// Terminal renderer for engine snapshots.
///
/// The view never mutates anything: it only turns a [`Snapshot`] into text.
pub struct View {}

impl View {
    /// Full status block shown after every intent and phase change.
    pub fn render(snapshot: &Snapshot) -> String {
        let state = &snapshot.state;
        let mut lines = vec![
            format!(
                "🍅 {}  {}",
                state.phase,
                format_cycle_dots(snapshot.filled_dots, state.cycles_before_long_break)
            ),
            state.phase.description().to_string(),
        ];

        match &state.pending_edit {
            Some(edit) => lines.push(format!(
                "  ✏️  Set minutes for this block (1-{}): {}   [save] [cancel]",
                edit.phase.max_minutes(),
                edit.raw_text
            )),
            None => lines.push(format!("  {}  {}", format_clock(state.seconds_remaining), Self::run_marker(snapshot))),
        }

        lines.push(format!("Focus blocks completed: {}", state.completed_focus_sessions));
        lines.push(Self::controls(snapshot));
        lines.join("\n")
    }

    /// One-line status, redrawn in place on every tick.
    pub fn status_line(snapshot: &Snapshot) -> String {
        let state = &snapshot.state;
        format!(
            "{} {} {} {}",
            state.phase,
            format_clock(state.seconds_remaining),
            Self::run_marker(snapshot),
            format_cycle_dots(snapshot.filled_dots, state.cycles_before_long_break)
        )
    }

    /// The actions currently on offer, as button captions.
    pub fn controls(snapshot: &Snapshot) -> String {
        let state = &snapshot.state;
        let mut buttons = vec![if state.is_running { "[Pause]" } else { "[Start]" }];
        if state.seconds_remaining > 0 {
            buttons.push("[Reset]");
        }
        buttons.push("[Skip]");
        if state.completed_focus_sessions > 0 {
            buttons.push("[Reset count]");
        }
        buttons.join(" ")
    }

    pub fn presets() -> Table {
        let mut table = Table::new();

        table.add_row(row!["#", "PRESET", "FOCUS", "SHORT BREAK", "LONG BREAK", "CYCLES"]);
        for (index, preset) in PRESETS.iter().enumerate() {
            table.add_row(row![
                index + 1,
                preset.label,
                format_minutes(preset.focus),
                format_minutes(preset.short_break),
                format_minutes(preset.long_break),
                preset.cycles_before_long_break
            ]);
        }

        table
    }

    fn run_marker(snapshot: &Snapshot) -> &'static str {
        if snapshot.state.is_running {
            "▶ running"
        } else {
            "⏸ paused"
        }
    }
}
