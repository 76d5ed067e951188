//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (`STACKGEN_BASE_PORT`, `STACKGEN_POSTGRES_PORT`,
//!    `STACKGEN_FRONTEND_PORT`), including values loaded from `.env`
//! 3. Built-in defaults (always present)

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// First backend service port; the rest follow sequentially.
    pub base_port: u16,
    /// Frontend dev server port.
    pub frontend_port: u16,
    /// Host port mapped to the postgres container.
    pub postgres_port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_port: 4001,
            frontend_port: 3000,
            postgres_port: 5432,
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults and applying environment
    /// overrides. A set-but-unparseable variable is a configuration error
    /// (exit 4), not a silent fallback.
    pub fn load() -> anyhow::Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            base_port: env_port("STACKGEN_BASE_PORT", defaults.base_port)?,
            frontend_port: env_port("STACKGEN_FRONTEND_PORT", defaults.frontend_port)?,
            postgres_port: env_port("STACKGEN_POSTGRES_PORT", defaults.postgres_port)?,
        })
    }
}

/// Read a port from the environment, falling back to `default` when unset.
fn env_port(var: &str, default: u16) -> anyhow::Result<u16> {
    match std::env::var(var) {
        Ok(value) => parse_port(var, &value),
        Err(_) => Ok(default),
    }
}

/// Parse a port value, naming the variable it came from in the error.
fn parse_port(var: &str, value: &str) -> anyhow::Result<u16> {
    value
        .trim()
        .parse::<u16>()
        .with_context(|| format!("{var} must be a port number (1-65535), got '{value}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ports() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.base_port, 4001);
        assert_eq!(cfg.frontend_port, 3000);
        assert_eq!(cfg.postgres_port, 5432);
    }

    #[test]
    fn env_port_falls_back_when_unset() {
        assert_eq!(env_port("STACKGEN_TEST_UNSET_PORT", 4001).unwrap(), 4001);
    }

    #[test]
    fn parse_port_accepts_valid_values() {
        assert_eq!(parse_port("X", "5001").unwrap(), 5001);
        assert_eq!(parse_port("X", " 8080 ").unwrap(), 8080);
    }

    #[test]
    fn parse_port_rejects_garbage() {
        let err = parse_port("STACKGEN_BASE_PORT", "not-a-port").unwrap_err();
        assert!(err.to_string().contains("STACKGEN_BASE_PORT"));
        assert!(parse_port("X", "70000").is_err());
        assert!(parse_port("X", "").is_err());
    }
}
