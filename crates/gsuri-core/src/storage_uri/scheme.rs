//! Supported URI schemes.

use std::fmt;

use super::error::{InvalidUriError, UriResult};

/// Scheme of a storage URI. Only local files and the two cloud providers are
/// recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    File,
    Gs,
    S3,
}

impl Scheme {
    /// Parse a scheme name, ignoring ASCII case.
    pub fn parse(name: &str) -> UriResult<Self> {
        match name.to_ascii_lowercase().as_str() {
            "file" => Ok(Scheme::File),
            "gs" => Ok(Scheme::Gs),
            "s3" => Ok(Scheme::S3),
            other => Err(InvalidUriError::new(format!(
                "Unrecognized scheme \"{other}\""
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::File => "file",
            Scheme::Gs => "gs",
            Scheme::S3 => "s3",
        }
    }

    pub fn is_cloud(&self) -> bool {
        !matches!(self, Scheme::File)
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
