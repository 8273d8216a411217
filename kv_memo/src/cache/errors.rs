use thiserror::Error;

use crate::storage::StorageError;

/// Failure of a cache-aside call, keeping "the cache is down" apart from
/// "the expensive operation failed".
#[derive(Debug, Error)]
pub enum CacheError<E> {
    #[error("Cache store error: {0}")]
    Store(#[from] StorageError),

    #[error("Producer error: {0}")]
    Producer(#[source] E),
}

impl<E> CacheError<E> {
    pub fn is_store_unavailable(&self) -> bool {
        matches!(self, Self::Store(e) if e.is_unavailable())
    }

    /// The producer's own error, if that is what failed.
    pub fn into_producer_error(self) -> Option<E> {
        match self {
            Self::Producer(e) => Some(e),
            Self::Store(_) => None,
        }
    }
}
