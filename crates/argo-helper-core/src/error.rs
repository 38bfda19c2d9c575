//! Unified error handling for Argo Helper Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ArgoError {
    /// Errors from the domain layer (invalid parameters, plan invariants).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (filesystem, rendering, store).
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl ArgoError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check your setup and try again".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in argo-helper".into(),
                "Please report this issue at: https://github.com/rebelopsio/argo-helper/issues"
                    .into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// `true` when the user can fix the problem by editing their input and
    /// resubmitting (as opposed to fixing the environment).
    pub fn is_validation(&self) -> bool {
        self.category() == ErrorCategory::Validation
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type ArgoResult<T> = Result<T, ArgoError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn domain_message_is_transparent() {
        let err: ArgoError = DomainError::MissingRequiredField {
            field: "resource name",
        }
        .into();
        assert_eq!(err.to_string(), "resource name is required");
        assert!(err.is_validation());
    }

    #[test]
    fn filesystem_error_is_internal() {
        let err: ArgoError = ApplicationError::FilesystemError {
            path: PathBuf::from("/srv/repo/values"),
            reason: "permission denied".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Internal);
        assert!(err.to_string().contains("/srv/repo/values"));
        assert!(err.to_string().contains("permission denied"));
    }

    #[test]
    fn internal_suggests_reporting() {
        let err = ArgoError::Internal {
            message: "boom".into(),
        };
        assert!(err.suggestions().iter().any(|s| s.contains("issues")));
    }
}
