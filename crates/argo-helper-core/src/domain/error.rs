// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::domain::value_objects::ResourceType;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (forms keep the last one around for redisplay)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("{field} is required")]
    MissingRequiredField { field: &'static str },

    #[error("unsupported resource type: {value} (supported: {supported})")]
    UnsupportedResourceType { value: String, supported: String },

    #[error("path must be absolute: {path}")]
    RelativePathNotAllowed { path: String },

    #[error("failed to get current directory: {reason}")]
    CurrentDirUnavailable { reason: String },

    #[error("invalid {field} '{value}': {reason}")]
    InvalidName {
        field: &'static str,
        value: String,
        reason: &'static str,
    },

    // ========================================================================
    // Plan / Template Invariants
    // ========================================================================
    #[error("Absolute paths not allowed in a manifest plan: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Duplicate path in manifest plan: {path}")]
    DuplicatePath { path: String },

    #[error("Directory '{path}' is planned after a file")]
    DirectoryAfterFile { path: String },

    #[error("File '{path}' is planned without its parent directory")]
    MissingParentDirectory { path: String },

    #[error("Manifest plan is empty")]
    EmptyPlan,

    #[error("Invalid template '{template}': {reason}")]
    InvalidTemplate { template: String, reason: String },

    #[error("Template '{template}' needs a value for {{{{{placeholder}}}}}")]
    MissingVariable {
        template: String,
        placeholder: &'static str,
    },
}

impl DomainError {
    /// Build an [`DomainError::UnsupportedResourceType`] listing every
    /// supported variant.
    pub fn unsupported_resource_type(value: impl Into<String>) -> Self {
        Self::UnsupportedResourceType {
            value: value.into(),
            supported: ResourceType::ALL
                .iter()
                .map(|t| t.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingRequiredField { field } => vec![format!("Provide a value for {field}")],
            Self::UnsupportedResourceType { supported, .. } => vec![
                format!("Supported resource types: {supported}"),
                "Example: argo-helper new applicationset my-apps".into(),
            ],
            Self::RelativePathNotAllowed { path } => vec![
                format!("Resolve '{path}' against a base directory first"),
            ],
            Self::CurrentDirUnavailable { .. } => vec![
                "The working directory may have been removed".into(),
                "Enter an absolute path instead".into(),
            ],
            Self::InvalidName { field, .. } => vec![
                format!("Use a plain name for {field}, e.g. my-apps"),
                "Put the file in a subdirectory with --output instead".into(),
            ],
            _ => vec!["This is a bug in the built-in templates, please report it".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingRequiredField { .. }
            | Self::UnsupportedResourceType { .. }
            | Self::RelativePathNotAllowed { .. }
            | Self::CurrentDirUnavailable { .. }
            | Self::InvalidName { .. } => ErrorCategory::Validation,
            _ => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
