//! Cache errors

use super::AurError;

/// Creates a cache operation failed error
pub fn operation_failed(message: impl Into<String>) -> AurError {
    AurError::CacheOperationFailed {
        message: message.into(),
    }
}
