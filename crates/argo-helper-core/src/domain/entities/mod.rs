pub mod manifest_plan;
pub mod parameters;
pub mod template;

pub use crate::domain::DomainError;
pub use manifest_plan::{ManifestPlan, PlanEntry, PlannedDirectory, PlannedFile};
pub use parameters::{InitParameters, ResolvedParameters, ResourceParameters};
pub use template::{Placeholder, RenderContext, Template, TemplateName, TemplateSource};
