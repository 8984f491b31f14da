//! Storage URI builder bound to the tool's fixed construction settings.
//!
//! Every call site in the CLI builds URIs with the same debug level, the same
//! cloud handle implementation and the same flag values; the builder holds
//! those so callers pass only the URI string.

use crate::storage_uri::{
    self, BucketUriClass, DefaultBucketUriClass, Scheme, StorageUri, StorageUriOptions, UriResult,
};

/// Builds [`StorageUri`] handles with a fixed debug level and cloud handle
/// implementation.
///
/// URIs are built with `file` as the default scheme, without bucket name
/// validation and without suppressing consecutive slashes. Parse failures are
/// returned as-is.
#[derive(Debug, Clone)]
pub struct StorageUriBuilder<C = DefaultBucketUriClass> {
    debug: u8,
    bucket_class: C,
}

impl<C: BucketUriClass> StorageUriBuilder<C> {
    /// `debug` is the connection debug level (0..=3); it is not checked here.
    pub fn new(debug: u8, bucket_class: C) -> Self {
        Self {
            debug,
            bucket_class,
        }
    }

    pub fn debug(&self) -> u8 {
        self.debug
    }

    pub fn bucket_class(&self) -> &C {
        &self.bucket_class
    }

    /// Build a handle for `uri_str`, not marked as the latest version.
    pub fn build(&self, uri_str: &str) -> UriResult<StorageUri> {
        self.build_with_latest(uri_str, false)
    }

    /// Build a handle for `uri_str`; `is_latest` marks a versioned object
    /// reference as the current version.
    pub fn build_with_latest(&self, uri_str: &str, is_latest: bool) -> UriResult<StorageUri> {
        let options = StorageUriOptions {
            default_scheme: Scheme::File.as_str().to_string(),
            debug: self.debug,
            validate: false,
            suppress_consec_slashes: false,
            is_latest,
        };
        tracing::trace!(uri = uri_str, is_latest, debug_level = self.debug, "building storage uri");
        storage_uri::storage_uri(uri_str, &options, &self.bucket_class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage_uri::{BucketStorageUri, BucketUriParts};
    use std::sync::Mutex;

    /// Records every set of parts it is asked to build.
    #[derive(Default)]
    struct RecordingClass {
        calls: Mutex<Vec<BucketUriParts>>,
    }

    impl BucketUriClass for RecordingClass {
        fn new_bucket_uri(&self, parts: BucketUriParts) -> BucketStorageUri {
            self.calls.lock().unwrap().push(parts.clone());
            BucketStorageUri::from_parts(parts, "mock.invalid")
        }
    }

    #[test]
    fn builds_object_through_injected_class() {
        let builder = StorageUriBuilder::new(0, RecordingClass::default());
        let uri = builder.build("gs://mybucket/myobject").unwrap();

        assert_eq!(uri.bucket_name(), "mybucket");
        assert_eq!(uri.object_name(), "myobject");
        assert!(!uri.is_latest());
        assert_eq!(uri.as_bucket().unwrap().endpoint_host(), "mock.invalid");

        let calls = builder.bucket_class().calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].scheme, Scheme::Gs);
        assert_eq!(calls[0].bucket_name, "mybucket");
        assert_eq!(calls[0].object_name, "myobject");
    }

    #[test]
    fn passes_fixed_flags() {
        let builder = StorageUriBuilder::new(2, RecordingClass::default());
        builder.build("s3://b/a//b").unwrap();

        let calls = builder.bucket_class().calls.lock().unwrap();
        assert_eq!(calls[0].debug, 2);
        assert!(!calls[0].suppress_consec_slashes);
        assert!(!calls[0].is_latest);
    }

    #[test]
    fn skips_bucket_validation() {
        let builder = StorageUriBuilder::new(0, DefaultBucketUriClass::default());
        let uri = builder.build("gs://x/o").unwrap();
        assert_eq!(uri.bucket_name(), "x");
    }

    #[test]
    fn keeps_consecutive_slashes() {
        let builder = StorageUriBuilder::new(0, DefaultBucketUriClass::default());
        let uri = builder.build("gs://b/a//c").unwrap();
        assert_eq!(uri.as_bucket().unwrap().request_path(), "/b/a//c");
    }

    #[test]
    fn latest_flag() {
        let builder = StorageUriBuilder::new(0, DefaultBucketUriClass::default());
        assert!(builder.build_with_latest("gs://b/o#5", true).unwrap().is_latest());
        assert!(!builder.build("gs://b/o#5").unwrap().is_latest());
    }

    #[test]
    fn local_path_uses_file_scheme() {
        let builder = StorageUriBuilder::new(1, RecordingClass::default());
        let uri = builder.build("some/local/path").unwrap();
        assert_eq!(uri.scheme(), Scheme::File);
        assert_eq!(uri.debug(), 1);
        assert!(builder.bucket_class().calls.lock().unwrap().is_empty());
    }

    #[test]
    fn invalid_uri_passes_through() {
        let builder = StorageUriBuilder::new(0, DefaultBucketUriClass::default());
        let err = builder.build("ftp://host/file").unwrap_err();
        assert_eq!(err.to_string(), "Unrecognized scheme \"ftp\"");
    }
}
