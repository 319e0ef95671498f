#[cfg(test)]
mod tests {
    use pomo::libs::config::{Config, TimerConfig, CONFIG_FILE_NAME};
    use pomo::libs::data_storage::DataStorage;
    use pomo::libs::phase::Phase;
    use pomo::libs::preset::Durations;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Points the application data directory at a fresh temporary directory.
    struct ConfigTestContext {
        _temp_dir: TempDir,
        timer: TimerConfig,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext {
                _temp_dir: temp_dir,
                timer: TimerConfig {
                    focus_minutes: 50,
                    short_break_minutes: 10,
                    long_break_minutes: 30,
                    cycles_before_long_break: 3,
                },
            }
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.timer.is_none());

        let timer = TimerConfig::default();
        assert_eq!(timer.focus_minutes, 25);
        assert_eq!(timer.short_break_minutes, 5);
        assert_eq!(timer.long_break_minutes, 15);
        assert_eq!(timer.cycles_before_long_break, 4);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_read_and_delete_config(ctx: &mut ConfigTestContext) {
        // No file yet: defaults, and nothing to delete.
        assert_eq!(Config::read().unwrap(), Config::default());
        assert!(!Config::delete().unwrap());

        let config = Config {
            timer: Some(ctx.timer.clone()),
        };
        config.save().unwrap();
        assert!(DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap().exists());

        let read_config = Config::read().unwrap();
        assert_eq!(read_config.timer, Some(ctx.timer.clone()));

        assert!(Config::delete().unwrap());
        assert_eq!(Config::read().unwrap().timer, None);
    }

    #[test]
    fn test_timer_config_clamps_out_of_range_values() {
        let timer = TimerConfig {
            focus_minutes: 999,
            short_break_minutes: 0,
            long_break_minutes: 91,
            cycles_before_long_break: 0,
        };

        assert_eq!(
            timer.durations(),
            Durations {
                focus: 180,
                short_break: 1,
                long_break: 90,
            }
        );
        assert_eq!(timer.cycles(), 1);
    }

    #[test]
    fn test_timer_config_builds_paused_focus_engine() {
        let timer = TimerConfig {
            focus_minutes: 45,
            short_break_minutes: 15,
            long_break_minutes: 30,
            cycles_before_long_break: 3,
        };
        let engine = timer.engine();

        assert_eq!(engine.state().phase, Phase::Focus);
        assert_eq!(engine.state().seconds_remaining, 2700);
        assert!(!engine.state().is_running);
        assert_eq!(engine.state().cycles_before_long_break, 3);
        assert_eq!(engine.durations().short_break, 15);
    }

    #[test]
    fn test_config_json_shape() {
        let config = Config {
            timer: Some(TimerConfig::default()),
        };
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["timer"]["focus_minutes"], 25);
        assert_eq!(json["timer"]["cycles_before_long_break"], 4);

        let empty = serde_json::to_string(&Config::default()).unwrap();
        assert_eq!(empty, "{}");
    }
}
