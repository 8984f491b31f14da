//! Error type for storage URI construction.

use thiserror::Error;

/// A URI string could not be turned into a storage URI handle.
///
/// This is the only failure the construction routine reports. Callers that
/// build URIs through [`crate::uri_builder::StorageUriBuilder`] receive it
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct InvalidUriError {
    message: String,
}

impl InvalidUriError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Result type for storage URI construction.
pub type UriResult<T> = Result<T, InvalidUriError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_message() {
        let err = InvalidUriError::new("Unrecognized scheme \"ftp\"");
        assert_eq!(err.to_string(), "Unrecognized scheme \"ftp\"");
        assert_eq!(err.message(), "Unrecognized scheme \"ftp\"");
    }

    #[test]
    fn converts_into_anyhow() {
        let err: anyhow::Error = InvalidUriError::new("empty URI").into();
        assert!(err.downcast_ref::<InvalidUriError>().is_some());
    }
}
