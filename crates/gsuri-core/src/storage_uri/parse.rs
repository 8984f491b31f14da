//! Manual splitting of storage URI strings.
//!
//! These identifiers do not follow RFC 3986 (there is no authority part, and
//! object names may contain anything), so they are split by hand rather than
//! with `url::Url`.

use super::error::{InvalidUriError, UriResult};

const SCHEME_SEPARATOR: &str = "://";

/// Splits `uri_str` into `(scheme, path)`. Without a `://` separator the
/// whole string is the path and `default_scheme` applies.
pub fn split_scheme<'a>(uri_str: &'a str, default_scheme: &'a str) -> (&'a str, &'a str) {
    match uri_str.find(SCHEME_SEPARATOR) {
        Some(idx) => (&uri_str[..idx], &uri_str[idx + SCHEME_SEPARATOR.len()..]),
        None => (default_scheme, uri_str),
    }
}

/// Splits a cloud path into bucket and object name at the first `/`.
pub fn split_bucket_object(path: &str) -> (&str, &str) {
    match path.split_once('/') {
        Some((bucket, object)) => (bucket, object),
        None => (path, ""),
    }
}

/// Splits `path` at its last `#`. Requires at least one character on each
/// side.
fn split_last_hash(path: &str) -> Option<(&str, &str)> {
    let idx = path.rfind('#')?;
    let (head, suffix) = (&path[..idx], &path[idx + 1..]);
    if head.is_empty() || suffix.is_empty() {
        return None;
    }
    Some((head, suffix))
}

/// Strips a GCS generation (`#<digits>`) from the end of `path`.
///
/// A suffix that is not all digits is left in place as part of the object
/// name. A digit run too large for a generation number is rejected.
pub fn strip_generation(path: &str) -> UriResult<(&str, Option<u64>)> {
    let Some((head, suffix)) = split_last_hash(path) else {
        return Ok((path, None));
    };
    if !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return Ok((path, None));
    }
    let generation = suffix
        .parse::<u64>()
        .map_err(|_| InvalidUriError::new(format!("Invalid generation \"{suffix}\"")))?;
    Ok((head, Some(generation)))
}

/// Strips an S3 version id (`#<anything>`) from the end of `path`.
///
/// Uses the last `#` that has text on both sides, so a version id may itself
/// end in `#` (`o#a#` is object `o`, version `a#`).
pub fn strip_version_id(path: &str) -> (&str, Option<&str>) {
    let split = path
        .match_indices('#')
        .rev()
        .map(|(idx, _)| (&path[..idx], &path[idx + 1..]))
        .find(|(head, version_id)| !head.is_empty() && !version_id.is_empty());
    match split {
        Some((head, version_id)) => (head, Some(version_id)),
        None => (path, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_present() {
        assert_eq!(split_scheme("gs://b/o", "file"), ("gs", "b/o"));
        assert_eq!(split_scheme("file:///tmp/x", "file"), ("file", "/tmp/x"));
    }

    #[test]
    fn scheme_absent_uses_default() {
        assert_eq!(split_scheme("/tmp/x", "file"), ("file", "/tmp/x"));
        assert_eq!(split_scheme("rel/path", "gs"), ("gs", "rel/path"));
    }

    #[test]
    fn first_separator_wins() {
        assert_eq!(split_scheme("gs://b/a://c", "file"), ("gs", "b/a://c"));
    }

    #[test]
    fn bucket_object_split() {
        assert_eq!(split_bucket_object("b/o/p"), ("b", "o/p"));
        assert_eq!(split_bucket_object("b/"), ("b", ""));
        assert_eq!(split_bucket_object("b"), ("b", ""));
        assert_eq!(split_bucket_object(""), ("", ""));
    }

    #[test]
    fn generation_suffix() {
        assert_eq!(strip_generation("b/o#123").unwrap(), ("b/o", Some(123)));
        assert_eq!(strip_generation("b/o#abc").unwrap(), ("b/o#abc", None));
        assert_eq!(strip_generation("b/o#").unwrap(), ("b/o#", None));
        assert_eq!(strip_generation("#12").unwrap(), ("#12", None));
        assert_eq!(strip_generation("b/o#1#2").unwrap(), ("b/o#1", Some(2)));
    }

    #[test]
    fn generation_overflow_is_invalid() {
        let err = strip_generation("b/o#99999999999999999999999").unwrap_err();
        assert!(err.to_string().contains("Invalid generation"));
    }

    #[test]
    fn version_id_suffix() {
        assert_eq!(strip_version_id("b/o#v1.x"), ("b/o", Some("v1.x")));
        assert_eq!(strip_version_id("b/o"), ("b/o", None));
        assert_eq!(strip_version_id("b/o#"), ("b/o#", None));
    }

    #[test]
    fn version_id_may_end_with_hash() {
        assert_eq!(strip_version_id("b/o#a#"), ("b/o", Some("a#")));
        assert_eq!(strip_version_id("b/o##"), ("b/o", Some("#")));
        assert_eq!(strip_version_id("#"), ("#", None));
        assert_eq!(strip_version_id("##"), ("##", None));
    }
}
