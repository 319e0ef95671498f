#[cfg(test)]
mod tests {
    use pomo::libs::engine::Event;
    use pomo::libs::input::{parse_command, Command, InputError};
    use pomo::libs::phase::Phase;
    use pomo::libs::preset::{find_preset, PRESETS};

    fn events(line: &str) -> Vec<Event> {
        match parse_command(line) {
            Ok(Command::Apply(events)) => events,
            other => panic!("expected events for {:?}, got {:?}", line, other),
        }
    }

    #[test]
    fn test_start_pause_aliases() {
        for line in ["", "   ", "s", "start", "pause", "START"] {
            assert_eq!(events(line), vec![Event::StartPause], "line {:?}", line);
        }
    }

    #[test]
    fn test_simple_intents() {
        assert_eq!(events("reset"), vec![Event::Reset]);
        assert_eq!(events("r"), vec![Event::Reset]);
        assert_eq!(events("skip"), vec![Event::Skip]);
        assert_eq!(events("n"), vec![Event::Skip]);
        assert_eq!(events("clear"), vec![Event::ResetFocusCount]);
        assert_eq!(events("save"), vec![Event::CommitEdit]);
        assert_eq!(events("cancel"), vec![Event::CancelEdit]);
    }

    #[test]
    fn test_switch_mode() {
        assert_eq!(events("focus"), vec![Event::SwitchMode(Phase::Focus)]);
        assert_eq!(events("short"), vec![Event::SwitchMode(Phase::ShortBreak)]);
        assert_eq!(events("Long"), vec![Event::SwitchMode(Phase::LongBreak)]);
        assert_eq!(events("mode long"), vec![Event::SwitchMode(Phase::LongBreak)]);
        assert_eq!(
            parse_command("mode lunch"),
            Err(InputError::UnknownPhase("lunch".to_string()))
        );
        assert_eq!(parse_command("mode"), Err(InputError::MissingArgument("mode")));
    }

    #[test]
    fn test_preset_by_index_and_label() {
        assert_eq!(events("preset 2"), vec![Event::ApplyPreset(PRESETS[1])]);
        assert_eq!(events("preset 50 / 10 / 30"), vec![Event::ApplyPreset(PRESETS[2])]);
        assert_eq!(events("preset 25/5/15"), vec![Event::ApplyPreset(PRESETS[0])]);
        assert_eq!(
            parse_command("preset 4"),
            Err(InputError::UnknownPreset("4".to_string()))
        );
        assert_eq!(parse_command("preset"), Err(InputError::MissingArgument("preset")));
    }

    #[test]
    fn test_find_preset() {
        assert_eq!(find_preset("1"), Some(PRESETS[0]));
        assert_eq!(find_preset("0"), None);
        assert_eq!(find_preset("45/15/30"), Some(PRESETS[1]));
        assert_eq!(find_preset("60/10/30"), None);
    }

    #[test]
    fn test_edit_commands() {
        assert_eq!(events("edit"), vec![Event::OpenEdit]);
        assert_eq!(
            events("edit 40"),
            vec![
                Event::OpenEdit,
                Event::UpdateEditBuffer("40".to_string()),
                Event::CommitEdit
            ]
        );
        assert_eq!(events("set  abc "), vec![Event::UpdateEditBuffer("abc".to_string())]);
        assert_eq!(parse_command("set"), Err(InputError::MissingArgument("set")));
    }

    #[test]
    fn test_session_commands() {
        assert_eq!(parse_command("help"), Ok(Command::Help));
        assert_eq!(parse_command("?"), Ok(Command::Help));
        assert_eq!(parse_command("presets"), Ok(Command::ShowPresets));
        assert_eq!(parse_command("q"), Ok(Command::Quit));
        assert_eq!(parse_command("quit"), Ok(Command::Quit));
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            parse_command("dance now"),
            Err(InputError::Unknown("dance now".to_string()))
        );
    }
}
