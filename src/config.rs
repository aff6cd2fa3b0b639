use anyhow::{Context, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// ============================================================================
// Logging Configuration
// ============================================================================
//
// Structured logging via tracing-subscriber with environment-based filtering.
// RUST_LOG overrides the default filter, e.g. RUST_LOG=debug.
//
// ============================================================================

pub const DEFAULT_LOG_FILTER: &str = "info,food_ordering_domain=debug";
pub const THREAD_IDS_ENV: &str = "FOOD_ORDERING_LOG_THREAD_IDS";

#[derive(Clone, Debug, PartialEq)]
pub struct LoggingConfig {
    /// EnvFilter directives
    pub filter: String,
    /// Include the event target (module path) in each line
    pub with_target: bool,
    /// Include the emitting thread id in each line
    pub with_thread_ids: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
            with_target: true,
            with_thread_ids: true,
        }
    }
}

impl LoggingConfig {
    /// Everything down to trace level
    pub fn verbose() -> Self {
        Self {
            filter: "trace".to_string(),
            ..Self::default()
        }
    }

    /// Warnings and errors only, compact lines
    pub fn quiet() -> Self {
        Self {
            filter: "warn".to_string(),
            with_target: false,
            with_thread_ids: false,
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(filter) = lookup(EnvFilter::DEFAULT_ENV).filter(|value| !value.trim().is_empty()) {
            config.filter = filter;
        }

        match lookup(THREAD_IDS_ENV).as_deref().map(parse_flag) {
            Some(Some(flag)) => config.with_thread_ids = flag,
            Some(None) => tracing::warn!(variable = THREAD_IDS_ENV, "Ignoring invalid boolean value"),
            None => {}
        }

        config
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

/// Installs the global tracing subscriber. Fails if the filter does not
/// parse or a subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_new(&config.filter)
        .with_context(|| format!("Invalid log filter: {}", config.filter))?;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(config.with_target)
                .with_thread_ids(config.with_thread_ids),
        )
        .with(filter)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.filter, DEFAULT_LOG_FILTER);
        assert!(config.with_target);
        assert!(config.with_thread_ids);
    }

    #[test]
    fn test_presets() {
        assert_eq!(LoggingConfig::verbose().filter, "trace");
        let quiet = LoggingConfig::quiet();
        assert_eq!(quiet.filter, "warn");
        assert!(!quiet.with_thread_ids);
    }

    #[test]
    fn test_from_lookup_without_variables_is_default() {
        let config = LoggingConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, LoggingConfig::default());
    }

    #[test]
    fn test_rust_log_overrides_filter() {
        let config = LoggingConfig::from_lookup(lookup_from(&[("RUST_LOG", "debug")]));
        assert_eq!(config.filter, "debug");
    }

    #[test]
    fn test_blank_rust_log_is_ignored() {
        let config = LoggingConfig::from_lookup(lookup_from(&[("RUST_LOG", "  ")]));
        assert_eq!(config.filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_thread_ids_flag() {
        let config = LoggingConfig::from_lookup(lookup_from(&[(THREAD_IDS_ENV, "false")]));
        assert!(!config.with_thread_ids);

        let config = LoggingConfig::from_lookup(lookup_from(&[(THREAD_IDS_ENV, "maybe")]));
        assert!(config.with_thread_ids);
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" 0 "), Some(false));
        assert_eq!(parse_flag(""), None);
    }

    #[test]
    fn test_invalid_filter_rejected() {
        let config = LoggingConfig {
            filter: "food_ordering_domain=notalevel".to_string(),
            ..LoggingConfig::default()
        };
        assert!(init_tracing(&config).is_err());
    }
}
