//! Bundle access
//!
//! The built frontend bundle is read from disk on every page load. Nothing
//! is cached, parsed, or validated beyond UTF-8 decoding.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File name of the bundle entry point inside the dist directory.
pub const BUNDLE_FILE: &str = "index.html";

/// Path of the bundle entry point under `dist_dir`.
pub fn bundle_path(dist_dir: &Path) -> PathBuf {
    dist_dir.join(BUNDLE_FILE)
}

/// Read the bundle as UTF-8 text.
///
/// Returns `Ok(None)` when the bundle does not exist; the file is not
/// opened in that case. Any other I/O or decoding failure propagates to
/// the caller.
pub fn load(dist_dir: &Path) -> io::Result<Option<String>> {
    let path = bundle_path(dist_dir);
    if !path.exists() {
        return Ok(None);
    }
    fs::read_to_string(path).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn reads_bundle_contents_verbatim() {
        let dir = TempDir::new().unwrap();
        let html = "<!doctype html><html><body><div id=\"root\">🌎</div><script>let x = 1;</script></body></html>";
        fs::write(dir.path().join(BUNDLE_FILE), html).unwrap();

        let loaded = load(dir.path()).unwrap();
        assert_eq!(loaded.as_deref(), Some(html));
    }

    #[test]
    fn missing_bundle_is_not_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(load(dir.path()).unwrap().is_none());
    }

    #[test]
    fn invalid_utf8_propagates_as_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(BUNDLE_FILE), [0xff, 0xfe, 0x9f]).unwrap();

        let err = load(dir.path()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
