//! Load, recovery and write-coalescing persistence for the store.
//!
//! Writes are staged to a `.tmp` sibling and atomically renamed over the
//! canonical path, so a crash mid-write leaves either the previous complete
//! document or the new one, never a mixture. Mutations arm a short idle
//! timer instead of writing synchronously; bursts coalesce into a single
//! flush. An explicit [`Store::flush`] cancels the timer and writes
//! immediately, which the shutdown sequence must do before exiting.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use log::{info, warn};

use super::state::{PersistedState, StoreState};
use super::util::now_ms;
use super::{Store, StoreInner};
use crate::config::StoreConfig;
use crate::error::{Result, StoreError};

/// Idle window during which further mutations piggyback on the armed write.
pub(crate) const SAVE_DEBOUNCE: Duration = Duration::from_millis(200);

/// Loads the document at the configured path, or seeds a fresh one.
///
/// An unreadable or unparseable file is renamed to a timestamped
/// `.corrupt.` backup and replaced with a freshly seeded document; corruption
/// is logged but never fails startup.
pub(crate) fn load_or_seed(config: &StoreConfig) -> Result<StoreState> {
    let path = &config.data_path;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| StoreError::file_system(parent, e))?;
    }

    if !path.exists() {
        let state = StoreState::seeded();
        write_state(path, &state)?;
        info!("initialized new store at {}", path.display());
        return Ok(state);
    }

    let parsed = fs::read(path).map_err(|e| e.to_string()).and_then(|bytes| {
        serde_json::from_slice::<PersistedState>(&bytes).map_err(|e| e.to_string())
    });

    match parsed {
        Ok(raw) => {
            let now = now_ms();
            let mut state = StoreState::normalize(raw, now);
            state.prune_refresh_tokens(
                config.token_retention_days,
                config.max_tokens_per_user,
                now,
            );
            state.prune_events(config.event_retention_days, now);
            if state.merge_seeds() {
                write_state(path, &state)?;
                info!("backfilled missing seed records into {}", path.display());
            }
            Ok(state)
        }
        Err(reason) => {
            let backup = sibling(path, &format!(".corrupt.{}", now_ms()));
            warn!(
                "store file {} is unreadable ({reason}); quarantining to {}",
                path.display(),
                backup.display()
            );
            // Best effort: recovery proceeds even if the rename fails.
            let _ = fs::rename(path, &backup);
            let state = StoreState::seeded();
            write_state(path, &state)?;
            Ok(state)
        }
    }
}

/// Serializes and writes a state document via the staged-rename protocol.
pub(crate) fn write_state(path: &Path, state: &StoreState) -> Result<()> {
    let json = serde_json::to_vec_pretty(state)?;
    write_bytes(path, &json)
}

fn write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    let tmp = sibling(path, ".tmp");
    fs::write(&tmp, bytes).map_err(|e| StoreError::file_system(&tmp, e))?;
    fs::rename(&tmp, path).map_err(|e| StoreError::file_system(path, e))
}

fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!("{name}{suffix}"))
}

impl StoreInner {
    /// Serializes the current state and writes it through the staged-rename
    /// protocol.
    ///
    /// The write lock is held across both steps so concurrent writers (the
    /// timer task and [`Store::flush`]) never stage the same `.tmp` file at
    /// once, and the writer that finishes last always carries the newest
    /// snapshot. The state lock is only held for serialization; no blocking
    /// I/O happens mid-mutation.
    pub(crate) fn write_now(&self) -> Result<()> {
        let _write_guard = self.write_lock();
        let json = {
            let state = self.state();
            serde_json::to_vec_pretty(&*state)?
        };
        write_bytes(&self.config.data_path, &json)
    }
}

impl Store {
    /// Arms the coalescing write timer if it is not already armed.
    ///
    /// Called by every mutating accessor. When no async runtime is running
    /// (sync callers, teardown paths) the write happens immediately instead;
    /// coalescing is an optimization, not a durability requirement.
    pub(crate) fn schedule_save(&self) {
        let mut pending = self.inner.save_task();
        if pending.is_some() {
            return;
        }

        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            drop(pending);
            if let Err(err) = self.inner.write_now() {
                warn!("immediate store write failed: {err}");
            }
            return;
        };

        let inner = Arc::clone(&self.inner);
        *pending = Some(handle.spawn(async move {
            tokio::time::sleep(SAVE_DEBOUNCE).await;
            // The slot must clear before the write starts: a mutation
            // committed mid-write then arms a fresh timer instead of
            // piggybacking on a snapshot that predates it.
            inner.save_task().take();
            if let Err(err) = inner.write_now() {
                warn!("coalesced store write failed: {err}");
            }
        }));
    }

    /// Cancels any pending coalesced write and persists synchronously.
    ///
    /// Guarantees that no committed in-memory mutation is lost on a clean
    /// exit; the shutdown sequence must call this before releasing the store.
    pub fn flush(&self) -> Result<()> {
        if let Some(task) = self.inner.save_task().take() {
            task.abort();
        }
        self.inner.write_now()
    }
}
