use http::StatusCode;
use kv_memo::{CacheError, StorageError};

/// Helper trait for converting errors to a standard response error format
pub trait IntoResponseError<T> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)>;
}

fn storage_status(e: &StorageError) -> StatusCode {
    match e {
        StorageError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        StorageError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Store failures keep their own status; a failed producer is a plain server error.
impl<T, E> IntoResponseError<T> for Result<T, CacheError<E>>
where
    E: std::error::Error,
{
    fn into_response_error(self) -> Result<T, (StatusCode, String)> {
        self.map_err(|e| {
            let status = match &e {
                CacheError::Store(inner) => storage_status(inner),
                CacheError::Producer(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
            (status, e.to_string())
        })
    }
}

impl<T> IntoResponseError<T> for Result<T, StorageError> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)> {
        self.map_err(|e| (storage_status(&e), e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_store_unavailable_is_503() {
        // Create a Result with a store outage
        let result: Result<(), StorageError> =
            Err(StorageError::Unavailable("Connection refused".to_string()));

        // Convert to response
        let response_error = result.into_response_error();

        // Verify status code is SERVICE_UNAVAILABLE (503)
        if let Err((status, body)) = response_error {
            assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
            assert!(body.contains("Connection refused"));
        } else {
            panic!("Expected an error");
        }
    }

    #[test]
    fn test_store_command_error_is_500() {
        let result: Result<(), StorageError> = Err(StorageError::Command("WRONGTYPE".to_string()));

        let (status, _) = result.into_response_error().unwrap_err();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_cache_store_error_keeps_status() {
        let result: Result<String, CacheError<io::Error>> = Err(CacheError::Store(
            StorageError::Unavailable("timed out".to_string()),
        ));

        let (status, body) = result.into_response_error().unwrap_err();

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body, "Cache store error: Store unavailable: timed out");
    }

    #[test]
    fn test_producer_error_is_500() {
        let result: Result<String, CacheError<io::Error>> =
            Err(CacheError::Producer(io::Error::other("query failed")));

        let (status, body) = result.into_response_error().unwrap_err();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "Producer error: query failed");
    }

    #[test]
    fn test_success_case() {
        let result: Result<i64, StorageError> = Ok(7);

        assert_eq!(result.into_response_error().unwrap(), 7);
    }
}
