//! AUR RPC errors

use super::AurError;

/// Creates a transport error for a registry request
pub fn request_failed(url: impl Into<String>, reason: impl std::fmt::Display) -> AurError {
    AurError::RegistryRequest {
        url: url.into(),
        reason: reason.to_string(),
    }
}

/// Creates a decode error for a registry response
pub fn decode_failed(url: impl Into<String>, reason: impl std::fmt::Display) -> AurError {
    AurError::RegistryDecode {
        url: url.into(),
        reason: reason.to_string(),
    }
}

/// Creates an error for the error envelope the RPC interface returns
pub fn api_error(message: impl Into<String>) -> AurError {
    AurError::RegistryApi {
        message: message.into(),
    }
}
