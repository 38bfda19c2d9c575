//! Turning user-typed paths into the absolute roots the domain requires.

use std::path::{Path, PathBuf};

use crate::domain::DomainError;

/// Resolves relative input against a base directory.
///
/// The base is the process working directory unless fixed, which is what
/// tests and embedding callers use.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathResolver {
    base: Option<PathBuf>,
}

impl PathResolver {
    /// Resolve against the working directory at call time.
    pub fn current() -> Self {
        Self { base: None }
    }

    pub fn fixed(base: impl Into<PathBuf>) -> Self {
        Self {
            base: Some(base.into()),
        }
    }

    /// The directory relative paths are joined to.
    pub fn base(&self) -> Result<PathBuf, DomainError> {
        match &self.base {
            Some(base) => Ok(base.clone()),
            None => std::env::current_dir().map_err(|e| DomainError::CurrentDirUnavailable {
                reason: e.to_string(),
            }),
        }
    }

    /// Resolve `input` to an absolute path.
    ///
    /// - blank input → `default` resolved against the base, or the base
    ///   itself when there is no default
    /// - absolute input → unchanged
    /// - relative input → joined to the base
    pub fn resolve(&self, input: &str, default: Option<&str>) -> Result<PathBuf, DomainError> {
        let input = input.trim();
        let chosen = match (input.is_empty(), default) {
            (false, _) => input,
            (true, Some(d)) if !d.trim().is_empty() => d.trim(),
            (true, _) => return self.base(),
        };

        let path = Path::new(chosen);
        if path.is_absolute() {
            Ok(path.to_path_buf())
        } else {
            Ok(self.base()?.join(path))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> PathBuf {
        std::env::temp_dir().join("argo-helper-base")
    }

    #[test]
    fn blank_input_is_the_base() {
        let resolver = PathResolver::fixed(base());
        assert_eq!(resolver.resolve("   ", None).unwrap(), base());
    }

    #[test]
    fn blank_input_uses_default() {
        let resolver = PathResolver::fixed(base());
        assert_eq!(
            resolver.resolve("", Some("templates/apps")).unwrap(),
            base().join("templates/apps")
        );
    }

    #[test]
    fn relative_input_is_joined() {
        let resolver = PathResolver::fixed(base());
        assert_eq!(
            resolver.resolve(" gitops ", Some("ignored")).unwrap(),
            base().join("gitops")
        );
    }

    #[test]
    fn absolute_input_is_kept() {
        let elsewhere = std::env::temp_dir().join("elsewhere");
        let resolver = PathResolver::fixed(base());
        assert_eq!(
            resolver.resolve(&elsewhere.display().to_string(), None).unwrap(),
            elsewhere
        );
    }

    #[test]
    fn current_resolver_yields_absolute_paths() {
        let path = PathResolver::current().resolve("repo", None).unwrap();
        assert!(path.is_absolute());
    }
}
