//! Git mirror errors

use std::path::Path;

use super::AurError;

/// Creates a clone failed error
pub fn clone_failed(url: impl Into<String>, reason: impl Into<String>) -> AurError {
    AurError::GitCloneFailed {
        url: url.into(),
        reason: reason.into(),
    }
}

/// Creates a fetch failed error
pub fn fetch_failed(path: &Path, reason: impl Into<String>) -> AurError {
    AurError::GitFetchFailed {
        path: path.display().to_string(),
        reason: reason.into(),
    }
}

/// Creates a merge failed error
pub fn merge_failed(path: &Path, reason: impl Into<String>) -> AurError {
    AurError::GitMergeFailed {
        path: path.display().to_string(),
        reason: reason.into(),
    }
}

/// Creates an open failed error
pub fn open_failed(path: &Path, reason: impl Into<String>) -> AurError {
    AurError::GitOpenFailed {
        path: path.display().to_string(),
        reason: reason.into(),
    }
}
