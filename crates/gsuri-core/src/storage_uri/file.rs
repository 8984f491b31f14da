//! Local filesystem URI handles.

use std::fmt;
use std::path::Path;

/// Object name that stands for stdin/stdout instead of a file.
pub const STREAM_NAME: &str = "-";

/// Handle for a `file://` URI (or a bare path).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStorageUri {
    object_name: String,
    debug: u8,
    is_stream: bool,
}

impl FileStorageUri {
    pub fn new(object_name: impl Into<String>, debug: u8) -> Self {
        let object_name = object_name.into();
        let is_stream = object_name == STREAM_NAME;
        Self {
            object_name,
            debug,
            is_stream,
        }
    }

    pub fn object_name(&self) -> &str {
        &self.object_name
    }

    pub fn path(&self) -> &Path {
        Path::new(&self.object_name)
    }

    pub fn debug(&self) -> u8 {
        self.debug
    }

    pub fn is_stream(&self) -> bool {
        self.is_stream
    }

    pub fn uri(&self) -> String {
        format!("file://{}", self.object_name)
    }

    /// True when the path is an existing directory. Touches the filesystem.
    pub fn names_directory(&self) -> bool {
        !self.is_stream && self.path().is_dir()
    }

    pub fn names_container(&self) -> bool {
        self.names_directory()
    }

    pub fn names_file(&self) -> bool {
        !self.is_stream && !self.names_directory()
    }

    pub fn clone_replace_name(&self, new_name: &str) -> Self {
        Self::new(new_name, self.debug)
    }
}

impl fmt::Display for FileStorageUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uri())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uri_form() {
        let uri = FileStorageUri::new("/tmp/a.txt", 1);
        assert_eq!(uri.uri(), "file:///tmp/a.txt");
        assert_eq!(uri.to_string(), "file:///tmp/a.txt");
        assert_eq!(uri.debug(), 1);
        assert!(!uri.is_stream());
    }

    #[test]
    fn dash_is_stream() {
        let uri = FileStorageUri::new(STREAM_NAME, 0);
        assert!(uri.is_stream());
        assert!(!uri.names_file());
        assert!(!uri.names_container());
    }

    #[test]
    fn directory_and_file_detection() {
        let dir = tempfile::tempdir().unwrap();
        let dir_uri = FileStorageUri::new(dir.path().to_string_lossy(), 0);
        assert!(dir_uri.names_directory());
        assert!(dir_uri.names_container());
        assert!(!dir_uri.names_file());

        let file_path = dir.path().join("data.bin");
        std::fs::write(&file_path, b"x").unwrap();
        let file_uri = dir_uri.clone_replace_name(&file_path.to_string_lossy());
        assert!(file_uri.names_file());
        assert!(!file_uri.names_container());
    }

    #[test]
    fn missing_path_names_file() {
        let uri = FileStorageUri::new("/definitely/not/here/x", 0);
        assert!(uri.names_file());
    }
}
