//! Normalized path handling for cross-platform compatibility

use std::path::{Path, PathBuf};

/// A path normalized to use forward slashes internally.
///
/// Project-relative lookups (`composer.json`, `buildplan.toml`) are joined
/// onto a root in this form and only converted to a native `PathBuf` when
/// the filesystem is actually touched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPath {
    /// Internal representation always uses forward slashes
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path_str = path.as_ref().to_string_lossy();
        Self {
            inner: path_str.replace('\\', "/"),
        }
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Join this path with a project-relative segment.
    pub fn join(&self, segment: &str) -> Self {
        let segment = relative_key(segment);
        if self.inner.is_empty() {
            return Self { inner: segment };
        }
        let joined = if self.inner.ends_with('/') {
            format!("{}{}", self.inner, segment)
        } else {
            format!("{}/{}", self.inner, segment)
        };
        Self { inner: joined }
    }

    /// Get the file name component.
    pub fn file_name(&self) -> Option<&str> {
        let trimmed = self.inner.trim_end_matches('/');
        trimmed.rsplit('/').next().filter(|name| !name.is_empty())
    }

    /// Get the extension if present.
    pub fn extension(&self) -> Option<&str> {
        self.file_name().and_then(|name| {
            let idx = name.rfind('.')?;
            if idx == 0 { None } else { Some(&name[idx + 1..]) }
        })
    }

    /// Check if this is a file.
    pub fn is_file(&self) -> bool {
        self.to_native().is_file()
    }
}

/// Reduce a project-relative path to its canonical lookup key.
///
/// Backslashes become forward slashes, and leading `./` or `/` segments and
/// empty components are dropped, so `./composer.json`, `/composer.json` and
/// `composer.json` all address the same file.
pub fn relative_key(path: &str) -> String {
    path.replace('\\', "/")
        .split('/')
        .filter(|part| !part.is_empty() && *part != ".")
        .collect::<Vec<_>>()
        .join("/")
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backslashes_normalized() {
        let path = NormalizedPath::new("C:\\projects\\shop");
        assert_eq!(path.as_str(), "C:/projects/shop");
    }

    #[test]
    fn test_join_strips_dot_prefix() {
        let root = NormalizedPath::new("/srv/app");
        assert_eq!(root.join("./composer.json").as_str(), "/srv/app/composer.json");
        assert_eq!(root.join("/composer.json").as_str(), "/srv/app/composer.json");
    }

    #[test]
    fn test_join_on_trailing_slash() {
        let root = NormalizedPath::new("/srv/app/");
        assert_eq!(root.join("composer.json").as_str(), "/srv/app/composer.json");
    }

    #[test]
    fn test_extension() {
        assert_eq!(NormalizedPath::new("a/buildplan.toml").extension(), Some("toml"));
        assert_eq!(NormalizedPath::new("a/.env").extension(), None);
        assert_eq!(NormalizedPath::new("a/Makefile").extension(), None);
    }

    #[test]
    fn test_relative_key() {
        assert_eq!(relative_key("./composer.json"), "composer.json");
        assert_eq!(relative_key("config//app.php"), "config/app.php");
        assert_eq!(relative_key("public\\index.php"), "public/index.php");
    }
}
