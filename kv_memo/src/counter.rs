//! Atomic view counters backed by the store's increment primitive.

use std::sync::Arc;

use crate::storage::{KvStore, StorageError};

/// Named counters that only ever go up by one.
///
/// All state lives in the store; this type only holds the shared handle.
#[derive(Clone)]
pub struct ViewCounter {
    store: Arc<dyn KvStore>,
}

impl ViewCounter {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    /// Increment `name` by one in a single store operation and return the new value.
    pub async fn increment(&self, name: &str) -> Result<i64, StorageError> {
        if name.is_empty() {
            return Err(StorageError::InvalidInput(
                "Counter name must not be empty".to_string(),
            ));
        }

        let views = self.store.incr(name).await.inspect_err(|e| {
            tracing::error!("Failed to increment counter {}: {}", name, e);
        })?;

        tracing::debug!("Counter {} is now {}", name, views);
        Ok(views)
    }
}
