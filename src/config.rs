use std::path::PathBuf;

use thiserror::Error;

use crate::excerpt::DEFAULT_EXCERPT_LENGTH;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {message}")]
    InvalidValue { name: String, message: String },
    #[error("failed to parse {name} as integer: {source}")]
    ParseInt {
        name: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // Database
    pub database_path: PathBuf,

    // Web Server
    pub web_host: String,
    pub web_port: u16,

    // Presentation
    pub site_title: String,
    pub excerpt_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from("./data/blog.sqlite"),
            web_host: "0.0.0.0".to_string(),
            web_port: 8000,
            site_title: "My Blog".to_string(),
            excerpt_length: DEFAULT_EXCERPT_LENGTH,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Unset or empty variables fall back to [`Config::default`].
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            database_path: optional_env("DATABASE_PATH")
                .map_or(defaults.database_path, PathBuf::from),

            web_host: optional_env("WEB_HOST").unwrap_or(defaults.web_host),
            web_port: parse_env_u16("WEB_PORT", defaults.web_port)?,

            site_title: optional_env("SITE_TITLE").unwrap_or(defaults.site_title),
            excerpt_length: parse_env_usize("EXCERPT_LENGTH", defaults.excerpt_length)?,
        })
    }

    /// Validate that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.excerpt_length == 0 {
            return Err(ConfigError::InvalidValue {
                name: "EXCERPT_LENGTH".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.site_title.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                name: "SITE_TITLE".to_string(),
                message: "cannot be empty".to_string(),
            });
        }
        Ok(())
    }
}

fn optional_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

fn parse_env_u16(name: &str, default: u16) -> Result<u16, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}

fn parse_env_usize(name: &str, default: usize) -> Result<usize, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for name in [
            "DATABASE_PATH",
            "WEB_HOST",
            "WEB_PORT",
            "SITE_TITLE",
            "EXCERPT_LENGTH",
        ] {
            std::env::remove_var(name);
        }
    }

    #[test]
    #[serial]
    fn test_defaults_when_unset() {
        clear_env();
        let config = Config::from_env().unwrap();
        assert_eq!(config.database_path, PathBuf::from("./data/blog.sqlite"));
        assert_eq!(config.web_port, 8000);
        assert_eq!(config.site_title, "My Blog");
        assert_eq!(config.excerpt_length, 200);
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_reads_env_overrides() {
        clear_env();
        std::env::set_var("WEB_PORT", "9090");
        std::env::set_var("EXCERPT_LENGTH", "120");
        std::env::set_var("SITE_TITLE", "Field Notes");
        let config = Config::from_env().unwrap();
        clear_env();

        assert_eq!(config.web_port, 9090);
        assert_eq!(config.excerpt_length, 120);
        assert_eq!(config.site_title, "Field Notes");
    }

    #[test]
    #[serial]
    fn test_bad_port_is_parse_error() {
        clear_env();
        std::env::set_var("WEB_PORT", "not-a-port");
        let result = Config::from_env();
        clear_env();

        assert!(matches!(result, Err(ConfigError::ParseInt { .. })));
    }

    #[test]
    fn test_validate_rejects_zero_excerpt() {
        let config = Config {
            excerpt_length: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_blank_title() {
        let config = Config {
            site_title: "  ".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
