//! Normalized configuration paths

use std::path::{Path, PathBuf};

/// A path normalized to use forward slashes internally.
///
/// Configuration file paths double as cache keys, so two spellings of the
/// same root (`C:\conf` and `C:/conf`) must produce the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedPath {
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    ///
    /// Backslashes become forward slashes and trailing slashes are dropped
    /// (except for the filesystem root itself).
    pub fn new(path: impl AsRef<Path>) -> Self {
        let normalized = path.as_ref().to_string_lossy().replace('\\', "/");
        let trimmed = normalized.trim_end_matches('/');
        let inner = if trimmed.is_empty() && normalized.starts_with('/') {
            "/".to_string()
        } else {
            trimmed.to_string()
        };
        Self { inner }
    }

    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Join this path with a segment.
    pub fn join(&self, segment: &str) -> Self {
        let segment_normalized = segment.replace('\\', "/");
        let joined = if self.inner.ends_with('/') {
            format!("{}{}", self.inner, segment_normalized)
        } else {
            format!("{}/{}", self.inner, segment_normalized)
        };
        Self { inner: joined }
    }

    /// The path of `<self>/<name>.conf`.
    pub fn config_file(&self, name: &str) -> Self {
        self.join(&format!("{name}.conf"))
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NormalizedPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}
