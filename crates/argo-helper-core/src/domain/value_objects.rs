//! Domain value objects: ResourceType, Workflow.
//!
//! # Adding New Resource Types
//!
//! 1. Add the enum variant to [`ResourceType`] and extend `ALL`
//! 2. Add the `as_str`, `kind` and `template` arms
//! 3. Add the manifest text to the built-in catalog
//! 4. Done: forms and the CLI pick the new variant up automatically

use crate::domain::{entities::template::TemplateName, error::DomainError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── ResourceType ─────────────────────────────────────────────────────────────

/// An ArgoCD resource the new-resource workflow can generate.
///
/// Closed set: anything that does not parse into a variant is rejected
/// before a plan is ever computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    #[default]
    ApplicationSet,
}

impl ResourceType {
    pub const ALL: [ResourceType; 1] = [ResourceType::ApplicationSet];

    /// Identifier used on the command line and in generated file names.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ApplicationSet => "applicationset",
        }
    }

    /// Kubernetes `kind` of the generated manifest.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::ApplicationSet => "ApplicationSet",
        }
    }

    /// Catalog entry rendered for this resource type.
    pub const fn template(&self) -> TemplateName {
        match self {
            Self::ApplicationSet => TemplateName::ApplicationSet,
        }
    }

    /// `<type>-<name>.yaml`
    pub fn file_name(&self, resource_name: &str) -> String {
        format!("{}-{}.yaml", self.as_str(), resource_name)
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::unsupported_resource_type(wanted))
    }
}

// ── Workflow ─────────────────────────────────────────────────────────────────

/// The two guided workflows the tool offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Workflow {
    /// Bootstrap a whole repository layout.
    Init,
    /// Emit a single resource manifest.
    NewResource,
}

impl Workflow {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::NewResource => "new-resource",
        }
    }
}

impl fmt::Display for Workflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
