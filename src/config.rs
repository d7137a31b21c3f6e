//! Configuration for the assistant.
//!
//! Everything is optional. Values come from the environment, with a `.env`
//! file in the working directory loaded first if present.

use crate::error::{ConfigError, ConfigResult};
use std::env;

pub const DEFAULT_PROMPT: &str = "Enter a command: ";
pub const DEFAULT_LOG_LEVEL: &str = "error";

/// Configuration for the assistant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Prompt printed before each command (default: "Enter a command: ")
    pub prompt: String,

    /// Log filter used when `RUST_LOG` is not set (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ASSISTANT_PROMPT`: prompt text, must not be empty
    /// - `LOG_LEVEL`: logging level
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let prompt = match env::var("ASSISTANT_PROMPT") {
            Ok(val) if val.is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "ASSISTANT_PROMPT".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(val) => val,
            Err(_) => DEFAULT_PROMPT.to_string(),
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());

        Ok(Config { prompt, log_level })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prompt: DEFAULT_PROMPT.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Removes the variables it set when dropped.
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.prompt, "Enter a command: ");
        assert_eq!(config.log_level, "error");
    }

    #[test]
    #[serial]
    fn test_config_from_env_overrides() {
        let mut guard = EnvGuard::new();
        guard.set("ASSISTANT_PROMPT", ">> ");
        guard.set("LOG_LEVEL", "debug");

        let config = Config::from_env().unwrap();
        assert_eq!(config.prompt, ">> ");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_config_empty_prompt_rejected() {
        let mut guard = EnvGuard::new();
        guard.set("ASSISTANT_PROMPT", "");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "ASSISTANT_PROMPT"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }
}
