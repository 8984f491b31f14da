//! Cloud (bucket-backed) URI handles and the injectable constructor for them.

use std::fmt;
use std::sync::Arc;

use url::Url;

use super::error::{InvalidUriError, UriResult};
use super::scheme::Scheme;

pub const DEFAULT_GS_HOST: &str = "storage.googleapis.com";
pub const DEFAULT_S3_HOST: &str = "s3.amazonaws.com";

/// Components of a cloud URI after parsing, handed to a [`BucketUriClass`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketUriParts {
    pub scheme: Scheme,
    /// Empty when the URI names only the provider (`gs://`).
    pub bucket_name: String,
    /// Empty when the URI names a bucket.
    pub object_name: String,
    pub debug: u8,
    pub suppress_consec_slashes: bool,
    /// S3 object version.
    pub version_id: Option<String>,
    /// GCS object generation.
    pub generation: Option<u64>,
    pub is_latest: bool,
}

/// Constructs cloud URI handles from parsed parts.
///
/// The construction routine never builds a [`BucketStorageUri`] itself; it
/// always goes through the implementation it was given, so tests can
/// substitute a recording or otherwise customized one.
pub trait BucketUriClass {
    fn new_bucket_uri(&self, parts: BucketUriParts) -> BucketStorageUri;
}

impl<T: BucketUriClass + ?Sized> BucketUriClass for &T {
    fn new_bucket_uri(&self, parts: BucketUriParts) -> BucketStorageUri {
        (**self).new_bucket_uri(parts)
    }
}

impl<T: BucketUriClass + ?Sized> BucketUriClass for Arc<T> {
    fn new_bucket_uri(&self, parts: BucketUriParts) -> BucketStorageUri {
        (**self).new_bucket_uri(parts)
    }
}

/// Standard implementation: plain handles pointing at the configured
/// provider endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultBucketUriClass {
    gs_host: String,
    s3_host: String,
}

impl DefaultBucketUriClass {
    pub fn new(gs_host: impl Into<String>, s3_host: impl Into<String>) -> Self {
        Self {
            gs_host: gs_host.into(),
            s3_host: s3_host.into(),
        }
    }

    fn host_for(&self, scheme: Scheme) -> &str {
        match scheme {
            Scheme::S3 => &self.s3_host,
            Scheme::Gs | Scheme::File => &self.gs_host,
        }
    }
}

impl Default for DefaultBucketUriClass {
    fn default() -> Self {
        Self::new(DEFAULT_GS_HOST, DEFAULT_S3_HOST)
    }
}

impl BucketUriClass for DefaultBucketUriClass {
    fn new_bucket_uri(&self, parts: BucketUriParts) -> BucketStorageUri {
        let host = self.host_for(parts.scheme).to_string();
        BucketStorageUri::from_parts(parts, host)
    }
}

/// Handle for `gs://` and `s3://` URIs naming a provider, bucket, or object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketStorageUri {
    parts: BucketUriParts,
    endpoint_host: String,
}

impl BucketStorageUri {
    pub fn from_parts(parts: BucketUriParts, endpoint_host: impl Into<String>) -> Self {
        Self {
            parts,
            endpoint_host: endpoint_host.into(),
        }
    }

    pub fn scheme(&self) -> Scheme {
        self.parts.scheme
    }

    pub fn bucket_name(&self) -> &str {
        &self.parts.bucket_name
    }

    pub fn object_name(&self) -> &str {
        &self.parts.object_name
    }

    pub fn debug(&self) -> u8 {
        self.parts.debug
    }

    pub fn suppress_consec_slashes(&self) -> bool {
        self.parts.suppress_consec_slashes
    }

    pub fn version_id(&self) -> Option<&str> {
        self.parts.version_id.as_deref()
    }

    pub fn generation(&self) -> Option<u64> {
        self.parts.generation
    }

    pub fn is_latest(&self) -> bool {
        self.parts.is_latest
    }

    pub fn endpoint_host(&self) -> &str {
        &self.endpoint_host
    }

    pub fn names_provider(&self) -> bool {
        self.parts.bucket_name.is_empty()
    }

    pub fn names_bucket(&self) -> bool {
        !self.parts.bucket_name.is_empty() && self.parts.object_name.is_empty()
    }

    pub fn names_object(&self) -> bool {
        !self.parts.object_name.is_empty()
    }

    /// A provider or a bucket can contain objects.
    pub fn names_container(&self) -> bool {
        self.parts.object_name.is_empty()
    }

    pub fn names_version(&self) -> bool {
        self.parts.version_id.is_some() || self.parts.generation.is_some()
    }

    /// `scheme://bucket/object` without any version suffix.
    pub fn versionless_uri(&self) -> String {
        let scheme = self.parts.scheme;
        match (self.parts.bucket_name.as_str(), self.parts.object_name.as_str()) {
            ("", _) => format!("{scheme}://"),
            (bucket, "") => format!("{scheme}://{bucket}/"),
            (bucket, object) => format!("{scheme}://{bucket}/{object}"),
        }
    }

    /// The URI including `#generation` or `#version_id`, if the handle names
    /// a specific version.
    pub fn version_specific_uri(&self) -> Option<String> {
        if !self.names_object() {
            return None;
        }
        let versionless = self.versionless_uri();
        if let Some(generation) = self.parts.generation {
            Some(format!("{versionless}#{generation}"))
        } else {
            self.parts
                .version_id
                .as_ref()
                .map(|version_id| format!("{versionless}#{version_id}"))
        }
    }

    /// Canonical string form. A handle marked latest drops its version suffix.
    pub fn uri(&self) -> String {
        if self.parts.is_latest {
            return self.versionless_uri();
        }
        self.version_specific_uri()
            .unwrap_or_else(|| self.versionless_uri())
    }

    /// Handle for `new_name` in the same bucket, without version information.
    pub fn clone_replace_name(&self, new_name: &str) -> UriResult<Self> {
        if self.parts.bucket_name.is_empty() {
            return Err(InvalidUriError::new(format!(
                "clone_replace_name() on bucket-less URI {}",
                self.uri()
            )));
        }
        let parts = BucketUriParts {
            object_name: new_name.to_string(),
            version_id: None,
            generation: None,
            is_latest: false,
            ..self.parts.clone()
        };
        Ok(Self::from_parts(parts, self.endpoint_host.clone()))
    }

    /// Object name as sent in requests; runs of `/` collapse to one when
    /// consecutive slashes are suppressed.
    pub fn request_object_name(&self) -> String {
        if !self.parts.suppress_consec_slashes {
            return self.parts.object_name.clone();
        }
        let mut out = String::with_capacity(self.parts.object_name.len());
        let mut prev_slash = false;
        for c in self.parts.object_name.chars() {
            if c == '/' {
                if !prev_slash {
                    out.push(c);
                }
                prev_slash = true;
            } else {
                out.push(c);
                prev_slash = false;
            }
        }
        out
    }

    /// Path-style request path: `/`, `/bucket/` or `/bucket/object`.
    pub fn request_path(&self) -> String {
        if self.parts.bucket_name.is_empty() {
            return "/".to_string();
        }
        format!("/{}/{}", self.parts.bucket_name, self.request_object_name())
    }

    /// HTTPS endpoint URL for this handle, with path segments percent-encoded
    /// and the version selected by query parameter. No request is made.
    pub fn endpoint_url(&self) -> UriResult<Url> {
        let host = &self.endpoint_host;
        let mut url = Url::parse(&format!("https://{host}/")).map_err(|e| {
            InvalidUriError::new(format!("Invalid endpoint host \"{host}\": {e}"))
        })?;
        if !self.parts.bucket_name.is_empty() {
            let object = self.request_object_name();
            if is_dot_segment(&self.parts.bucket_name) || is_dot_segment(&object) {
                return Err(InvalidUriError::new(format!(
                    "{} cannot be addressed by an endpoint URL",
                    self.uri()
                )));
            }
            let mut segments = url.path_segments_mut().map_err(|_| {
                InvalidUriError::new(format!("Endpoint host \"{host}\" cannot carry a path"))
            })?;
            segments.clear();
            segments.push(&self.parts.bucket_name);
            // URL paths resolve `.` and `..` segments, so such names go out
            // as a single segment with `/` encoded.
            if object.split('/').any(is_dot_segment) {
                segments.push(&object);
            } else {
                segments.extend(object.split('/'));
            }
        }
        if !self.parts.is_latest {
            match (self.parts.scheme, self.parts.generation, &self.parts.version_id) {
                (Scheme::Gs, Some(generation), _) => {
                    url.query_pairs_mut()
                        .append_pair("generation", &generation.to_string());
                }
                (Scheme::S3, _, Some(version_id)) => {
                    url.query_pairs_mut().append_pair("versionId", version_id);
                }
                _ => {}
            }
        }
        Ok(url)
    }
}

fn is_dot_segment(segment: &str) -> bool {
    matches!(segment, "." | "..")
}

impl fmt::Display for BucketStorageUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uri())
    }
}
