#[cfg(test)]
mod tests {
    use taskdeck::libs::config::{Config, ServerConfig};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Test context to ensure a clean environment for each config test.
    /// It sets up a temporary directory to act as the user's home/appdata
    /// directory.
    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            // Mock the home/appdata directory for cross-platform compatibility.
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    #[test]
    fn test_default_server_config() {
        let server = Config::default().server();
        assert_eq!(server.host, "127.0.0.1");
        assert_eq!(server.port, 5000);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_config_lifecycle(_ctx: &mut ConfigTestContext) {
        // No file yet: read() falls back to defaults.
        let config = Config::read().unwrap();
        assert!(config.server.is_none());

        // Save an explicit server section and read it back.
        let config = Config {
            server: Some(ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
            }),
        };
        config.save().unwrap();

        let reloaded = Config::read().unwrap();
        assert_eq!(reloaded.server(), ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
        });

        // Delete resets to defaults; a second delete is not an error.
        Config::delete().unwrap();
        assert!(Config::read().unwrap().server.is_none());
        Config::delete().unwrap();
    }
}
