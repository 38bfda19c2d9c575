//! Resolved parameters: the validated, default-applied input handed from a
//! form (or the command line) to the scaffold generator.
//!
//! Every constructor validates. A value of these types therefore always
//! has non-empty names and an absolute root path.

use std::path::{Path, PathBuf};

use crate::domain::{
    error::DomainError,
    value_objects::{ResourceType, Workflow},
};

/// Parameters of the repository-init workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitParameters {
    project_name: String,
    repository_path: PathBuf,
    include_examples: bool,
}

impl InitParameters {
    pub fn new(
        project_name: impl Into<String>,
        repository_path: impl Into<PathBuf>,
        include_examples: bool,
    ) -> Result<Self, DomainError> {
        let project_name = required(project_name.into(), "project name")?;
        let repository_path = absolute(repository_path.into())?;

        Ok(Self {
            project_name,
            repository_path,
            include_examples,
        })
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn repository_path(&self) -> &Path {
        &self.repository_path
    }

    pub fn include_examples(&self) -> bool {
        self.include_examples
    }
}

/// Parameters of the new-resource workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceParameters {
    resource_type: ResourceType,
    resource_name: String,
    output_path: PathBuf,
}

impl ResourceParameters {
    pub fn new(
        resource_type: ResourceType,
        resource_name: impl Into<String>,
        output_path: impl Into<PathBuf>,
    ) -> Result<Self, DomainError> {
        let resource_name = file_stem(required(resource_name.into(), "resource name")?, "resource name")?;
        let output_path = absolute(output_path.into())?;

        Ok(Self {
            resource_type,
            resource_name,
            output_path,
        })
    }

    pub fn resource_type(&self) -> ResourceType {
        self.resource_type
    }

    pub fn resource_name(&self) -> &str {
        &self.resource_name
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// `<type>-<name>.yaml`, relative to [`Self::output_path`].
    pub fn file_name(&self) -> String {
        self.resource_type.file_name(&self.resource_name)
    }
}

/// One submission's worth of parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedParameters {
    Init(InitParameters),
    NewResource(ResourceParameters),
}

impl ResolvedParameters {
    pub fn workflow(&self) -> Workflow {
        match self {
            Self::Init(_) => Workflow::Init,
            Self::NewResource(_) => Workflow::NewResource,
        }
    }

    /// Directory every planned path is relative to.
    pub fn root(&self) -> &Path {
        match self {
            Self::Init(p) => p.repository_path(),
            Self::NewResource(p) => p.output_path(),
        }
    }

    /// Re-check the construction invariants.
    ///
    /// Fields are private, so this only fails if a value was built by
    /// something other than the constructors above.
    pub fn validate(&self) -> Result<(), DomainError> {
        match self {
            Self::Init(p) => {
                required(p.project_name.clone(), "project name")?;
            }
            Self::NewResource(p) => {
                file_stem(required(p.resource_name.clone(), "resource name")?, "resource name")?;
            }
        }
        absolute(self.root().to_path_buf()).map(|_| ())
    }
}

impl From<InitParameters> for ResolvedParameters {
    fn from(p: InitParameters) -> Self {
        Self::Init(p)
    }
}

impl From<ResourceParameters> for ResolvedParameters {
    fn from(p: ResourceParameters) -> Self {
        Self::NewResource(p)
    }
}

fn required(value: String, field: &'static str) -> Result<String, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::MissingRequiredField { field });
    }
    Ok(trimmed.to_string())
}

/// The value becomes part of a file name, so it must not name a directory.
fn file_stem(value: String, field: &'static str) -> Result<String, DomainError> {
    if value.contains(['/', '\\']) || value.contains("..") {
        return Err(DomainError::InvalidName {
            field,
            value,
            reason: "must not contain '/', '\\' or '..'",
        });
    }
    Ok(value)
}

fn absolute(path: PathBuf) -> Result<PathBuf, DomainError> {
    if path.is_absolute() {
        Ok(path)
    } else {
        Err(DomainError::RelativePathNotAllowed {
            path: path.display().to_string(),
        })
    }
}
