use super::DomainError;
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// A project-relative file path.
///
/// Invariant: never absolute and never escapes the project root (no `..`
/// components). Enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// Fallible constructor.
    pub fn try_new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        if path.is_absolute() || path.has_root() {
            return Err(DomainError::AbsolutePathNotAllowed {
                path: path.display().to_string(),
            });
        }
        if path
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)))
        {
            return Err(DomainError::PathEscapesRoot {
                path: path.display().to_string(),
            });
        }
        if path.as_os_str().is_empty() {
            return Err(DomainError::PathEscapesRoot {
                path: String::new(),
            });
        }
        Ok(Self(path))
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        self.0.to_str().unwrap_or("")
    }

    /// First path component, e.g. `src` for `src/index.js`.
    pub fn top_level(&self) -> &str {
        self.0
            .components()
            .next()
            .and_then(|c| c.as_os_str().to_str())
            .unwrap_or("")
    }

    /// Final path component.
    pub fn file_name(&self) -> &str {
        self.0.file_name().and_then(|n| n.to_str()).unwrap_or("")
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl TryFrom<&str> for RelativePath {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_new(s)
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// Capability-based permissions model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Permissions {
    executable: bool,
}

impl Permissions {
    pub const fn read_write() -> Self {
        Self { executable: false }
    }

    pub const fn executable() -> Self {
        Self { executable: true }
    }

    pub const fn executable_flag(&self) -> bool {
        self.executable
    }
}

impl Default for Permissions {
    fn default() -> Self {
        Self::read_write()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_nested_relative_paths() {
        let p = RelativePath::try_new("src/app/page.tsx").unwrap();
        assert_eq!(p.top_level(), "src");
        assert_eq!(p.file_name(), "page.tsx");
    }

    #[test]
    fn rejects_absolute_paths() {
        assert!(matches!(
            RelativePath::try_new("/etc/passwd"),
            Err(DomainError::AbsolutePathNotAllowed { .. })
        ));
    }

    #[test]
    fn rejects_parent_segments() {
        assert!(matches!(
            RelativePath::try_new("src/../../outside"),
            Err(DomainError::PathEscapesRoot { .. })
        ));
    }

    #[test]
    fn rejects_empty_path() {
        assert!(RelativePath::try_new("").is_err());
    }

    #[test]
    fn orders_lexicographically() {
        let mut paths = vec![
            RelativePath::try_new("src/index.js").unwrap(),
            RelativePath::try_new(".eslintrc.json").unwrap(),
            RelativePath::try_new("package.json").unwrap(),
        ];
        paths.sort();
        let names: Vec<_> = paths.iter().map(|p| p.as_str()).collect();
        assert_eq!(names, vec![".eslintrc.json", "package.json", "src/index.js"]);
    }
}
