//! Bucket name checks applied when validation is requested.

const MIN_LEN: usize = 3;
const MAX_LEN: usize = 255;
/// DNS labels are limited to 63 characters.
const MAX_DNS_LABEL: usize = 63;

/// Returns true if `name` is acceptable as a bucket name.
///
/// - 3 to 255 characters from `[A-Za-z0-9._-]`
/// - starts and ends with an ASCII alphanumeric
/// - no run of more than 63 `[-_a-z0-9]` characters (an over-long DNS label)
pub fn is_valid_bucket_name(name: &str) -> bool {
    let bytes = name.as_bytes();
    if bytes.len() < MIN_LEN || bytes.len() > MAX_LEN {
        return false;
    }
    let first = bytes[0];
    let last = bytes[bytes.len() - 1];
    if !first.is_ascii_alphanumeric() || !last.is_ascii_alphanumeric() {
        return false;
    }
    if !bytes
        .iter()
        .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'.' | b'_' | b'-'))
    {
        return false;
    }
    longest_label_run(bytes) <= MAX_DNS_LABEL
}

fn longest_label_run(bytes: &[u8]) -> usize {
    let mut longest = 0;
    let mut run = 0;
    for &b in bytes {
        if b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-' || b == b'_' {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }
    longest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_names() {
        assert!(is_valid_bucket_name("mybucket"));
        assert!(is_valid_bucket_name("my.bucket-01"));
        assert!(is_valid_bucket_name("abc"));
        assert!(is_valid_bucket_name("My_Bucket"));
    }

    #[test]
    fn rejects_bad_length() {
        assert!(!is_valid_bucket_name("ab"));
        assert!(!is_valid_bucket_name(""));
        let long = format!("a{}", ".a".repeat(128));
        assert!(long.len() > MAX_LEN);
        assert!(!is_valid_bucket_name(&long));
    }

    #[test]
    fn rejects_bad_edges_and_chars() {
        assert!(!is_valid_bucket_name("-bucket"));
        assert!(!is_valid_bucket_name("bucket."));
        assert!(!is_valid_bucket_name("host:8080"));
        assert!(!is_valid_bucket_name("buck et"));
    }

    #[test]
    fn rejects_long_dns_label() {
        let label = "a".repeat(64);
        assert!(!is_valid_bucket_name(&label));
        let ok = format!("{}.{}", "a".repeat(63), "b".repeat(63));
        assert!(is_valid_bucket_name(&ok));
    }
}
