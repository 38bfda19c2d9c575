//! Simple variable substitution renderer.

use argo_helper_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::{DomainError, DomainValidator as validator, RenderContext, Template},
    error::{ArgoError, ArgoResult},
};
use tracing::instrument;

/// Simple renderer using exact `{{KEY}}` substitution.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRenderer;

impl SimpleRenderer {
    /// Create a new simple renderer.
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for SimpleRenderer {
    #[instrument(skip_all, fields(template = %template.name))]
    fn render(&self, template: &Template, context: &RenderContext) -> ArgoResult<String> {
        // Validate template first
        validator::validate_template(template)?;

        context.render(template).map_err(|e| match e {
            DomainError::MissingVariable { .. } => {
                ArgoError::from(ApplicationError::RenderingFailed {
                    template: template.name,
                    reason: e.to_string(),
                })
            }
            other => ArgoError::from(other),
        })
    }
}
