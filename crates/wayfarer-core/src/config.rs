//! Store configuration loaded from the environment.
//!
//! Configuration covers the storage file location and the retention knobs
//! consumed by the store: the event retention window, the refresh-token
//! retention window, and the per-user refresh-token cap. Values come from
//! environment variables with defensive parsing; anything unparseable falls
//! back to its default rather than failing startup.

use std::env;
use std::path::PathBuf;

use crate::error::{Result, StoreError};

/// Default number of days usage events are retained.
pub const DEFAULT_EVENT_RETENTION_DAYS: i64 = 90;

/// Default number of days refresh-token records are retained.
pub const DEFAULT_TOKEN_RETENTION_DAYS: i64 = 60;

/// Default maximum number of refresh-token records kept per user.
pub const DEFAULT_MAX_TOKENS_PER_USER: usize = 10;

/// Runtime configuration for a [`crate::Store`].
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Path of the persisted JSON document.
    pub data_path: PathBuf,

    /// Events older than this many days are pruned. A non-positive value
    /// disables event pruning.
    pub event_retention_days: i64,

    /// Refresh-token records older than this many days are pruned. A
    /// non-positive value disables age-based pruning.
    pub token_retention_days: i64,

    /// At most this many refresh-token records are kept per user, newest
    /// first. Zero disables the cap.
    pub max_tokens_per_user: usize,
}

impl StoreConfig {
    /// Builds a configuration from the process environment.
    ///
    /// Reads `WAYFARER_DATA_PATH`, `EVENT_RETENTION_DAYS`,
    /// `REFRESH_TOKEN_RETENTION_DAYS` and `MAX_REFRESH_TOKENS_PER_USER`.
    /// Unset or unparseable values fall back to defaults; only a missing
    /// default data directory is an error.
    pub fn from_env() -> Result<Self> {
        let data_path = match env::var_os("WAYFARER_DATA_PATH") {
            Some(path) => PathBuf::from(path),
            None => Self::default_data_path()?,
        };

        Ok(Self {
            data_path,
            event_retention_days: env_i64("EVENT_RETENTION_DAYS", DEFAULT_EVENT_RETENTION_DAYS),
            token_retention_days: env_i64(
                "REFRESH_TOKEN_RETENTION_DAYS",
                DEFAULT_TOKEN_RETENTION_DAYS,
            ),
            max_tokens_per_user: env_usize(
                "MAX_REFRESH_TOKENS_PER_USER",
                DEFAULT_MAX_TOKENS_PER_USER,
            ),
        })
    }

    /// Returns the default store path following the XDG Base Directory
    /// specification: `$XDG_DATA_HOME/wayfarer/store.json` or
    /// `~/.local/share/wayfarer/store.json`.
    pub fn default_data_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("wayfarer")
            .place_data_file("store.json")
            .map_err(|e| StoreError::XdgDirectory(e.to_string()))
    }
}

fn env_i64(name: &str, fallback: i64) -> i64 {
    env::var(name)
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(fallback)
}

fn env_usize(name: &str, fallback: usize) -> usize {
    env::var(name)
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_numbers_fall_back_on_garbage() {
        // Unset variables use the documented defaults.
        assert_eq!(
            env_i64("WAYFARER_TEST_UNSET_VAR", DEFAULT_EVENT_RETENTION_DAYS),
            DEFAULT_EVENT_RETENTION_DAYS
        );
        assert_eq!(env_usize("WAYFARER_TEST_UNSET_VAR", 10), 10);
    }
}
