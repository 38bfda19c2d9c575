use crate::domain::{
    entities::{ManifestPlan, ResolvedParameters, Template},
    error::DomainError,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across services.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_parameters(params: &ResolvedParameters) -> Result<(), DomainError> {
        params.validate()
    }

    pub fn validate_template(template: &Template) -> Result<(), DomainError> {
        template.validate()
    }

    pub fn validate_plan(plan: &ManifestPlan) -> Result<(), DomainError> {
        plan.validate()
    }
}
