//! Storage URI construction.
//!
//! Turns strings such as `gs://bucket/object#123`, `s3://bucket/key` or
//! `/local/path` into typed handles. Cloud handles are always created through
//! an injected [`BucketUriClass`], so callers decide what a cloud handle is
//! made of (endpoint hosts, or a recording double in tests).

mod bucket;
mod bucket_name;
mod error;
mod file;
mod parse;
mod scheme;

use std::fmt;

pub use bucket::{
    BucketStorageUri, BucketUriClass, BucketUriParts, DefaultBucketUriClass, DEFAULT_GS_HOST,
    DEFAULT_S3_HOST,
};
pub use bucket_name::is_valid_bucket_name;
pub use error::{InvalidUriError, UriResult};
pub use file::{FileStorageUri, STREAM_NAME};
pub use scheme::Scheme;

/// Flags controlling [`storage_uri`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageUriOptions {
    /// Scheme assumed when the string has no `scheme://` prefix.
    pub default_scheme: String,
    /// Debug level carried by the handle (0..=3).
    pub debug: u8,
    /// Check bucket names before building a cloud handle.
    pub validate: bool,
    /// Collapse runs of `/` in object names when forming requests.
    pub suppress_consec_slashes: bool,
    /// Treat a versioned object reference as the current version.
    pub is_latest: bool,
}

impl Default for StorageUriOptions {
    fn default() -> Self {
        Self {
            default_scheme: Scheme::File.as_str().to_string(),
            debug: 0,
            validate: true,
            suppress_consec_slashes: true,
            is_latest: false,
        }
    }
}

/// A parsed storage URI: either a cloud provider/bucket/object or a local file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageUri {
    Bucket(BucketStorageUri),
    File(FileStorageUri),
}

impl StorageUri {
    pub fn scheme(&self) -> Scheme {
        match self {
            StorageUri::Bucket(b) => b.scheme(),
            StorageUri::File(_) => Scheme::File,
        }
    }

    pub fn uri(&self) -> String {
        match self {
            StorageUri::Bucket(b) => b.uri(),
            StorageUri::File(f) => f.uri(),
        }
    }

    /// Empty for file URIs and provider-only cloud URIs.
    pub fn bucket_name(&self) -> &str {
        match self {
            StorageUri::Bucket(b) => b.bucket_name(),
            StorageUri::File(_) => "",
        }
    }

    pub fn object_name(&self) -> &str {
        match self {
            StorageUri::Bucket(b) => b.object_name(),
            StorageUri::File(f) => f.object_name(),
        }
    }

    pub fn debug(&self) -> u8 {
        match self {
            StorageUri::Bucket(b) => b.debug(),
            StorageUri::File(f) => f.debug(),
        }
    }

    pub fn is_cloud_uri(&self) -> bool {
        matches!(self, StorageUri::Bucket(_))
    }

    pub fn is_file_uri(&self) -> bool {
        matches!(self, StorageUri::File(_))
    }

    pub fn is_stream(&self) -> bool {
        matches!(self, StorageUri::File(f) if f.is_stream())
    }

    /// File URIs never carry a version, so they are never "latest".
    pub fn is_latest(&self) -> bool {
        matches!(self, StorageUri::Bucket(b) if b.is_latest())
    }

    pub fn names_provider(&self) -> bool {
        matches!(self, StorageUri::Bucket(b) if b.names_provider())
    }

    pub fn names_bucket(&self) -> bool {
        matches!(self, StorageUri::Bucket(b) if b.names_bucket())
    }

    pub fn names_object(&self) -> bool {
        match self {
            StorageUri::Bucket(b) => b.names_object(),
            StorageUri::File(f) => f.names_file(),
        }
    }

    pub fn names_version(&self) -> bool {
        matches!(self, StorageUri::Bucket(b) if b.names_version())
    }

    pub fn names_container(&self) -> bool {
        match self {
            StorageUri::Bucket(b) => b.names_container(),
            StorageUri::File(f) => f.names_container(),
        }
    }

    pub fn names_directory(&self) -> bool {
        matches!(self, StorageUri::File(f) if f.names_directory())
    }

    pub fn names_file(&self) -> bool {
        matches!(self, StorageUri::File(f) if f.names_file())
    }

    /// Handle for `new_name` in the same container.
    pub fn clone_replace_name(&self, new_name: &str) -> UriResult<StorageUri> {
        match self {
            StorageUri::Bucket(b) => b.clone_replace_name(new_name).map(StorageUri::Bucket),
            StorageUri::File(f) => Ok(StorageUri::File(f.clone_replace_name(new_name))),
        }
    }

    pub fn as_bucket(&self) -> Option<&BucketStorageUri> {
        match self {
            StorageUri::Bucket(b) => Some(b),
            StorageUri::File(_) => None,
        }
    }

    pub fn as_file(&self) -> Option<&FileStorageUri> {
        match self {
            StorageUri::File(f) => Some(f),
            StorageUri::Bucket(_) => None,
        }
    }
}

impl fmt::Display for StorageUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uri())
    }
}

/// Build a storage URI handle from `uri_str`.
///
/// Cloud handles are produced by `bucket_class`; file handles are built
/// directly. Fails with [`InvalidUriError`] for an empty string, an
/// unrecognized scheme, an unparseable generation, or (when
/// `options.validate` is set) an invalid bucket name.
pub fn storage_uri<C>(
    uri_str: &str,
    options: &StorageUriOptions,
    bucket_class: &C,
) -> UriResult<StorageUri>
where
    C: BucketUriClass + ?Sized,
{
    if uri_str.is_empty() {
        return Err(InvalidUriError::new("empty URI"));
    }

    let (scheme_name, path) = parse::split_scheme(uri_str, &options.default_scheme);
    let scheme = Scheme::parse(scheme_name)?;

    let (versionless, version_id, generation) = match scheme {
        Scheme::File => {
            return Ok(StorageUri::File(FileStorageUri::new(path, options.debug)));
        }
        Scheme::Gs => {
            let (versionless, generation) = parse::strip_generation(path)?;
            (versionless, None, generation)
        }
        Scheme::S3 => {
            let (versionless, version_id) = parse::strip_version_id(path);
            (versionless, version_id.map(str::to_string), None)
        }
    };
    let (bucket_name, object_name) = parse::split_bucket_object(versionless);

    if options.validate && !bucket_name.is_empty() && !is_valid_bucket_name(bucket_name) {
        return Err(InvalidUriError::new(format!(
            "Invalid bucket name in URI \"{uri_str}\""
        )));
    }

    Ok(StorageUri::Bucket(bucket_class.new_bucket_uri(BucketUriParts {
        scheme,
        bucket_name: bucket_name.to_string(),
        object_name: object_name.to_string(),
        debug: options.debug,
        suppress_consec_slashes: options.suppress_consec_slashes,
        version_id,
        generation,
        is_latest: options.is_latest,
    })))
}
