use std::path::Path;

use tempfile::TempDir;
use wayfarer_core::{Store, StoreBuilder, StoreConfig};

/// Helper function to build a test configuration rooted in a temp directory
pub fn test_config(dir: &Path) -> StoreConfig {
    StoreConfig {
        data_path: dir.join("store.json"),
        event_retention_days: 90,
        token_retention_days: 60,
        max_tokens_per_user: 10,
    }
}

/// Helper function to open a store with an explicit configuration
pub async fn open_store(config: StoreConfig) -> Store {
    StoreBuilder::new()
        .with_config(config)
        .build()
        .await
        .expect("Failed to create store")
}

/// Helper function to create a test store backed by a temp directory
pub async fn create_test_store() -> (TempDir, Store) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = open_store(test_config(temp_dir.path())).await;
    (temp_dir, store)
}
