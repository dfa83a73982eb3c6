//! Configuration loader and defaults for the olaweb server.
//!
//! Exposes a lazily-initialized `CONFIG` which reads values from environment
//! variables (with sensible defaults). Fields cover the listening port
//! (`port`) and the development flags (`debug`, `get_only`). With no
//! environment set the service runs exactly like a zero-config invocation.
//!
use std::env;

use once_cell::sync::Lazy;

/// Default listening port for the development server
const DEFAULT_PORT: u16 = 5000;

/// Application configuration read once at process start
pub struct Config {
    /// HTTP listening port
    pub port: u16,
    /// Debug mode: send panic details to callers and log startup verbosely
    pub debug: bool,
    /// Restrict the greeting route to GET instead of accepting any method
    pub get_only: bool,
}

impl Config {
    /// Build a configuration from environment variables, falling back to
    /// the defaults when a variable is unset or unparsable.
    pub fn from_env() -> Self {
        Config {
            port: env::var("OLAWEB_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            debug: env::var("OLAWEB_DEBUG")
                .map(|s| parse_flag(&s))
                .unwrap_or(false),
            get_only: env::var("OLAWEB_GET_ONLY")
                .map(|s| parse_flag(&s))
                .unwrap_or(false),
        }
    }
}

/// Interpret a boolean environment value
fn parse_flag(val: &str) -> bool {
    matches!(
        val.to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Global application configuration instance, lazily initialized
pub static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);

#[cfg(test)]
mod tests {
    use super::*;

    /// Test compiled-in defaults with no overrides in the environment
    #[test]
    fn defaults_without_env() {
        let config = Config::from_env();
        assert_eq!(config.port, DEFAULT_PORT);
        assert!(!config.debug);
        assert!(!config.get_only);
    }

    /// Test accepted and rejected boolean flag spellings
    #[test]
    fn flag_parsing_works() {
        assert!(parse_flag("1"));
        assert!(parse_flag("true"));
        assert!(parse_flag("YES"));
        assert!(parse_flag("On"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(""));
        assert!(!parse_flag("si"));
    }
}
