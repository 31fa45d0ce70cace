#[cfg(test)]
mod tests {
    use amon::libs::config::{Config, MonitorConfig};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Test context to ensure a clean environment for each config test.
    /// It sets up a temporary directory to act as the user's home/appdata directory.
    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    #[test]
    fn test_monitor_defaults_match_recorder_calibration() {
        let monitor = MonitorConfig::default();
        assert_eq!(monitor.move_threshold, 100);
        assert_eq!(monitor.log_interval, 2);
        assert_eq!(monitor.click_debounce, 1);
        assert_eq!(monitor.scroll_threshold, 1);
        assert_eq!(monitor.idle_threshold, 60);
        assert_eq!(monitor.poll_interval, 500);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_config_read_save_roundtrip(_ctx: &mut ConfigTestContext) {
        // When no config file exists, read() returns the default config.
        let config = Config::read().unwrap();
        assert!(config.monitor.is_none());

        let config = Config {
            monitor: Some(MonitorConfig {
                move_threshold: 50,
                log_interval: 5,
                click_debounce: 2,
                scroll_threshold: 3,
                idle_threshold: 120,
                poll_interval: 1000,
            }),
        };
        config.save().unwrap();

        let loaded = Config::read().unwrap();
        assert_eq!(loaded.monitor, config.monitor);
    }
}
