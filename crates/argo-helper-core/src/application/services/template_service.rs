//! Template Service - template catalog operations.
//!
//! Handles catalog queries and integrity checks.
//! Separated from ScaffoldService for single responsibility.

use serde::Serialize;
use tracing::instrument;

use crate::{
    application::ports::TemplateStore,
    domain::{DomainValidator as validator, Template, TemplateName, repository_blueprint},
    error::ArgoResult,
};

/// Information about a template for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateInfo {
    pub name: String,
    pub version: String,
    pub description: String,
    pub placeholders: Vec<String>,
}

impl From<&Template> for TemplateInfo {
    fn from(t: &Template) -> Self {
        Self {
            name: t.name.to_string(),
            version: t.version.to_string(),
            description: t.description.to_string(),
            placeholders: t.placeholders.iter().map(|p| p.key().to_string()).collect(),
        }
    }
}

/// Service for template operations.
pub struct TemplateService {
    store: Box<dyn TemplateStore>,
}

impl TemplateService {
    /// Create a new template service.
    pub fn new(store: Box<dyn TemplateStore>) -> Self {
        Self { store }
    }

    /// Get a template by name.
    pub fn get(&self, name: TemplateName) -> ArgoResult<Template> {
        self.store.get(name)
    }

    /// Add or replace a template after validating it.
    pub fn save(&self, template: Template) -> ArgoResult<()> {
        validator::validate_template(&template)?;
        self.store.insert(template)
    }

    /// List all templates.
    pub fn list(&self) -> ArgoResult<Vec<TemplateInfo>> {
        Ok(self.store.list()?.iter().map(TemplateInfo::from).collect())
    }

    /// Check that every template either workflow can ask for is present and
    /// well-formed.
    #[instrument(skip_all)]
    pub fn verify_catalog(&self) -> ArgoResult<()> {
        let needed = repository_blueprint(true)
            .templates()
            .chain(crate::domain::ResourceType::ALL.iter().map(|t| t.template()))
            .collect::<Vec<_>>();

        for name in needed {
            validator::validate_template(&self.store.get(name)?)?;
        }
        Ok(())
    }
}
