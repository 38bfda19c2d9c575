// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Argo Helper.
//!
//! This module contains pure business logic. All I/O and rendering concerns
//! are handled via ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No I/O**: No filesystem, clock, or terminal access
//! - **Immutable values**: All domain objects are Clone + PartialEq
//! - **Validated construction**: parameters cannot exist in an invalid state
//!
pub mod blueprint;
pub mod entities;
pub mod error;
pub mod value_objects;

mod validation;

// Re-exports for convenience
pub use blueprint::{Blueprint, BlueprintFile, blueprint_for, repository_blueprint};
pub use entities::{
    manifest_plan::{ManifestPlan, PlanEntry, PlannedDirectory, PlannedFile, PreviewListing},
    parameters::{InitParameters, ResolvedParameters, ResourceParameters},
    template::{Placeholder, RenderContext, Template, TemplateName, TemplateSource},
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{ResourceType, Workflow};

pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use chrono::NaiveDate;

    use super::*;

    fn root() -> PathBuf {
        std::env::temp_dir().join("argo-helper-domain")
    }

    // ========================================================================
    // Parameters -> Blueprint
    // ========================================================================

    #[test]
    fn resource_blueprint_is_root_plus_one_file() {
        let params: ResolvedParameters =
            ResourceParameters::new(ResourceType::ApplicationSet, "my-apps", root())
                .unwrap()
                .into();

        let bp = blueprint_for(&params);
        assert_eq!(bp.directories, vec![PathBuf::new()]);
        assert_eq!(bp.files.len(), 1);
        assert_eq!(
            bp.files[0].path,
            PathBuf::from("applicationset-my-apps.yaml")
        );
        assert_eq!(bp.files[0].template, TemplateName::ApplicationSet);
    }

    #[test]
    fn init_blueprint_follows_example_flag() {
        let params: ResolvedParameters = InitParameters::new("payments", root(), true)
            .unwrap()
            .into();
        assert_eq!(blueprint_for(&params), repository_blueprint(true));
    }

    // ========================================================================
    // Render Context
    // ========================================================================

    #[test]
    fn context_for_init_carries_project_name_and_date() {
        let params: ResolvedParameters = InitParameters::new("payments", root(), false)
            .unwrap()
            .into();
        let date = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();

        let ctx = RenderContext::for_parameters(&params, date);
        assert_eq!(ctx.get(Placeholder::ProjectName), Some("payments"));
        assert_eq!(ctx.get(Placeholder::CreatedDate), Some("2026-01-02"));
        assert_eq!(ctx.get(Placeholder::ResourceName), None);
    }

    #[test]
    fn context_for_resource_carries_resource_name() {
        let params: ResolvedParameters =
            ResourceParameters::new(ResourceType::ApplicationSet, "my-apps", root())
                .unwrap()
                .into();
        let date = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();

        let ctx = RenderContext::for_parameters(&params, date);
        assert_eq!(ctx.get(Placeholder::ResourceName), Some("my-apps"));
        assert_eq!(ctx.get(Placeholder::ProjectName), None);
    }

    // ========================================================================
    // Validator
    // ========================================================================

    #[test]
    fn validator_delegates_to_plan() {
        let plan = ManifestPlan::new(Workflow::Init, root());
        assert_eq!(
            DomainValidator::validate_plan(&plan),
            Err(DomainError::EmptyPlan)
        );
    }

    #[test]
    fn validator_accepts_wellformed_plan() {
        let plan = ManifestPlan::new(Workflow::Init, root())
            .with_directory("values")
            .with_file("Chart.yaml", TemplateName::Chart, "name: x\n".into());
        assert!(DomainValidator::validate_plan(&plan).is_ok());
    }
}
