//! Runtime configuration from `ARCADE_*` environment variables.
//!
//! Missing or malformed values fall back to defaults; configuration never
//! stops a game from starting.

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::core::OverflowPolicy;
use crate::types::TICK_MS;

pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// RNG seed; set it to replay a game
    pub seed: u32,
    /// Fixed tick length in milliseconds
    pub tick_ms: u32,
    pub overflow: OverflowPolicy,
    /// Log file; logging is off without one
    pub log_path: Option<String>,
    /// `EnvFilter` directive
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: time_seed(),
            tick_ms: TICK_MS,
            overflow: OverflowPolicy::default(),
            log_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup (the process environment in [`AppConfig::from_env`])
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("ARCADE_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(time_seed);

        let tick_ms = lookup("ARCADE_TICK_MS")
            .and_then(|s| s.trim().parse().ok())
            .filter(|&ms: &u32| ms > 0)
            .unwrap_or(TICK_MS);

        let overflow = lookup("ARCADE_OVERFLOW")
            .and_then(|s| OverflowPolicy::from_str(&s))
            .unwrap_or_default();

        let log_path = lookup("ARCADE_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let log_filter = lookup("ARCADE_LOG")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Self {
            seed,
            tick_ms,
            overflow,
            log_path,
            log_filter,
        }
    }
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
