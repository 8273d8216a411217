use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// The store could not be reached, dropped the connection, or timed out.
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// The store answered but rejected the command.
    #[error("Store command error: {0}")]
    Command(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl StorageError {
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}

impl From<redis::RedisError> for StorageError {
    fn from(err: redis::RedisError) -> Self {
        if err.is_io_error()
            || err.is_connection_refusal()
            || err.is_connection_dropped()
            || err.is_timeout()
        {
            Self::Unavailable(err.to_string())
        } else {
            Self::Command(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_display() {
        // Given a StorageError with an Unavailable variant
        let error = StorageError::Unavailable("Connection failed".to_string());

        // When converting to a string
        let error_string = error.to_string();

        // Then it should format correctly
        assert_eq!(error_string, "Store unavailable: Connection failed");
    }

    #[test]
    fn test_command_error_display() {
        let error = StorageError::Command("value is not an integer".to_string());
        assert_eq!(error.to_string(), "Store command error: value is not an integer");
    }

    #[test]
    fn test_from_redis_io_error_is_unavailable() {
        // Given a RedisError caused by I/O
        let redis_error =
            redis::RedisError::from((redis::ErrorKind::IoError, "Connection refused"));

        // When converting to StorageError
        let storage_error = StorageError::from(redis_error);

        // Then it should be classified as unavailable
        match storage_error {
            StorageError::Unavailable(msg) => {
                assert!(msg.contains("Connection refused"));
            }
            other => panic!("Expected Unavailable variant, got {other:?}"),
        }
    }

    #[test]
    fn test_from_redis_type_error_is_command() {
        // Given a RedisError reported by the server about a bad value
        let redis_error = redis::RedisError::from((
            redis::ErrorKind::TypeError,
            "value is not an integer or out of range",
        ));

        // When converting to StorageError
        let storage_error = StorageError::from(redis_error);

        // Then it should not be mistaken for an outage
        assert!(!storage_error.is_unavailable());
        assert!(matches!(storage_error, StorageError::Command(_)));
    }

    #[test]
    fn test_error_is_sync_and_send() {
        fn assert_sync_send<T: Sync + Send>() {}
        assert_sync_send::<StorageError>();
    }
}
