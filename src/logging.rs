//! File logging for the binaries.
//!
//! The terminal is in raw mode while a game runs, so log output only ever
//! goes to `ARCADE_LOG_PATH`.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, DEFAULT_LOG_FILTER};

/// Install the global subscriber; returns false when no log path is configured.
pub fn init(config: &AppConfig) -> Result<bool> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {path}"))?;

    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("installing log subscriber: {e}"))?;
    Ok(true)
}

/// Log a snapshot as one JSON line under `game`.
pub fn log_final_state<T: Serialize>(game: &str, state: &T) {
    match serde_json::to_string(state) {
        Ok(json) => info!(game, state = %json, "final state"),
        Err(err) => warn!(game, %err, "final state not serializable"),
    }
}
