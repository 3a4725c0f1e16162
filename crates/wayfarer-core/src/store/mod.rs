//! Embedded, file-backed document store.
//!
//! The store owns the canonical in-memory state graph (users, tokens,
//! places, offers, locations, events) and its on-disk JSON representation.
//! It is the single source of truth: committed state survives process
//! restarts, partially written files never corrupt the canonical document,
//! and unreadable documents are quarantined and reseeded at startup.
//!
//! # Concurrency model
//!
//! All mutations are synchronous and complete atomically under one lock; no
//! mutation performs blocking I/O mid-update. Reads hand out independent
//! copies, so callers iterating a snapshot are unaffected by concurrent
//! mutation. Persistence is the only asynchronous element: a debounced
//! timer coalesces bursts of mutations into one disk write, and
//! [`Store::flush`] forces a synchronous write before shutdown. A single
//! writer process is assumed throughout.
//!
//! # Usage
//!
//! ```rust,no_run
//! use wayfarer_core::StoreBuilder;
//!
//! # async fn example() -> wayfarer_core::Result<()> {
//! let store = StoreBuilder::new()
//!     .with_data_path(Some("travel/store.json"))
//!     .build()
//!     .await?;
//!
//! for place in store.list_places() {
//!     println!("{} ({})", place.name, place.city);
//! }
//!
//! store.flush()?;
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::task::{self, JoinHandle};

mod events;
mod locations;
mod offers;
mod persist;
mod places;
mod state;
mod tokens;
mod users;
mod util;

pub use util::{normalize_email, normalize_key};

use state::StoreState;

use crate::config::StoreConfig;
use crate::error::Result;

pub(crate) struct StoreInner {
    config: StoreConfig,
    state: Mutex<StoreState>,
    save_task: Mutex<Option<JoinHandle<()>>>,
    write_lock: Mutex<()>,
}

impl StoreInner {
    /// Acquires the state lock, recovering from poisoning: state mutations
    /// never leave the graph half-updated, so a panicked holder is safe to
    /// succeed.
    pub(crate) fn state(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn save_task(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.save_task.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Serializes file writers: the timer task and `flush` may run
    /// concurrently, but only one at a time may stage and rename the
    /// document.
    pub(crate) fn write_lock(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Handle to the document store. Cheap to clone; all clones share the same
/// state and write scheduler.
#[derive(Clone)]
pub struct Store {
    pub(crate) inner: Arc<StoreInner>,
}

impl Store {
    /// The active configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.inner.config
    }

    pub(crate) fn state(&self) -> MutexGuard<'_, StoreState> {
        self.inner.state()
    }
}

/// Builder for creating and configuring [`Store`] instances.
#[derive(Debug, Clone, Default)]
pub struct StoreBuilder {
    data_path: Option<PathBuf>,
    config: Option<StoreConfig>,
}

impl StoreBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom data file path.
    ///
    /// If not specified, the path comes from `WAYFARER_DATA_PATH` or the XDG
    /// default `$XDG_DATA_HOME/wayfarer/store.json`.
    pub fn with_data_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.data_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Supplies a complete configuration, bypassing the environment.
    pub fn with_config(mut self, config: StoreConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the store: resolves configuration, then loads the document or
    /// seeds a fresh one.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::FileSystem` when the storage directory cannot be
    /// created or the initial document cannot be written. Corruption of an
    /// existing document is not an error; it is quarantined and reseeded.
    pub async fn build(self) -> Result<Store> {
        let mut config = match self.config {
            Some(config) => config,
            None => StoreConfig::from_env()?,
        };
        if let Some(path) = self.data_path {
            config.data_path = path;
        }

        let load_config = config.clone();
        let state = task::spawn_blocking(move || persist::load_or_seed(&load_config))
            .await
            .map_err(|e| crate::error::StoreError::configuration(format!("Task join error: {e}")))??;

        Ok(Store {
            inner: Arc::new(StoreInner {
                config,
                state: Mutex::new(state),
                save_task: Mutex::new(None),
                write_lock: Mutex::new(()),
            }),
        })
    }
}
