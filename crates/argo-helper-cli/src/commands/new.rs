//! Implementation of the `argo-helper new` command.
//!
//! Responsibility: translate CLI arguments into [`ResourceParameters`], run
//! the scaffold use case, and display results. No business logic lives here.

use tracing::{debug, info, instrument};

use argo_helper_core::{
    application::{
        GenerationReport, PathResolver, ProgressReporter, ScaffoldOutcome, ScaffoldUseCase,
        SilentReporter,
    },
    domain::{DomainError, ResolvedParameters, ResourceParameters, ResourceType},
    error::ArgoError,
};

use crate::{
    cli::{GlobalArgs, NewArgs, path_input},
    config::AppConfig,
    error::CliResult,
    output::{OutputManager, OutputReporter},
};

/// Execute the `argo-helper new` command.
///
/// The resource type is checked before the name, so `new invalid-type`
/// reports the unsupported type rather than the missing name.
#[instrument(skip_all, fields(resource_type = %args.resource_type))]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let resource = build_parameters(&args, &config, &PathResolver::current())?;
    debug!(
        resource_type = %resource.resource_type(),
        name = resource.resource_name(),
        output = %resource.output_path().display(),
        "Resource resolved"
    );

    let json = super::wants_json(&output);
    let reporter: Box<dyn ProgressReporter> = if json {
        Box::new(SilentReporter)
    } else {
        Box::new(OutputReporter::new(output.clone()))
    };
    let service = super::scaffold_service(super::execution_mode(&global, &config), reporter)?;

    info!(file = %resource.file_name(), "Creating resource");
    let outcome = service.run(&ResolvedParameters::from(resource.clone()))?;

    if json {
        return super::print_json(&output, &super::outcome_json(&outcome));
    }

    match outcome {
        ScaffoldOutcome::Previewed(plan) => {
            output.data(plan.preview_listing().to_string().trim_end())?;
            output.print("")?;
            output.info("To create this resource, run again without the --dry-run flag")?;
            Ok(())
        }
        ScaffoldOutcome::Generated(report) => print_next_steps(&resource, &report, &output),
    }
}

/// Validate the type, then the name, then resolve the output path.
fn build_parameters(
    args: &NewArgs,
    config: &AppConfig,
    resolver: &PathResolver,
) -> CliResult<ResourceParameters> {
    let resource_type: ResourceType = args.resource_type.parse().map_err(ArgoError::from)?;
    let name = args.name.as_deref().unwrap_or_default();
    if name.trim().is_empty() {
        // Same message the domain would give, without resolving paths first.
        return Err(ArgoError::from(DomainError::MissingRequiredField {
            field: "resource name",
        })
        .into());
    }

    let output_path = resolver
        .resolve(
            path_input(args.output.as_deref()),
            Some(config.defaults.output_path.as_str()),
        )
        .map_err(ArgoError::from)?;

    Ok(ResourceParameters::new(resource_type, name, output_path).map_err(ArgoError::from)?)
}

fn print_next_steps(
    resource: &ResourceParameters,
    report: &GenerationReport,
    output: &OutputManager,
) -> CliResult<()> {
    let path = report
        .written
        .first()
        .cloned()
        .unwrap_or_else(|| resource.output_path().join(resource.file_name()));

    output.print("")?;
    output.success(&format!(
        "{} '{}' successfully created at {}",
        resource.resource_type().kind(),
        resource.resource_name(),
        path.display()
    ))?;
    output.print("")?;
    output.header("Next steps:")?;
    output.print("1. Review and customize the generated resource")?;
    output.print("2. Apply to your ArgoCD instance or commit to your repository")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn base() -> PathBuf {
        std::env::temp_dir().join("argo-helper-new")
    }

    fn args(resource_type: &str, name: Option<&str>, output: Option<&str>) -> NewArgs {
        NewArgs {
            resource_type: resource_type.into(),
            name: name.map(str::to_string),
            output: output.map(str::to_string),
        }
    }

    fn build(args: &NewArgs) -> CliResult<ResourceParameters> {
        build_parameters(args, &AppConfig::default(), &PathResolver::fixed(base()))
    }

    #[test]
    fn default_output_path_is_templates_apps() {
        let params = build(&args("applicationset", Some("my-apps"), None)).unwrap();
        assert_eq!(params.output_path(), base().join("templates/apps"));
        assert_eq!(params.file_name(), "applicationset-my-apps.yaml");
    }

    #[test]
    fn config_changes_the_default_output_path() {
        let mut config = AppConfig::default();
        config.defaults.output_path = "deploy/apps".into();
        let params = build_parameters(
            &args("applicationset", Some("my-apps"), None),
            &config,
            &PathResolver::fixed(base()),
        )
        .unwrap();
        assert_eq!(params.output_path(), base().join("deploy/apps"));
    }

    #[test]
    fn explicit_output_wins() {
        let params = build(&args("applicationset", Some("my-apps"), Some("/srv/apps"))).unwrap();
        assert_eq!(params.output_path(), PathBuf::from("/srv/apps"));
    }

    #[test]
    fn type_is_case_insensitive() {
        assert!(build(&args("ApplicationSet", Some("my-apps"), None)).is_ok());
    }

    #[test]
    fn invalid_type_is_reported_before_missing_name() {
        let err = build(&args("invalid-type", None, None)).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("invalid-type"));
    }

    #[test]
    fn missing_name_is_a_user_error() {
        for name in [None, Some(""), Some("  ")] {
            let err = build(&args("applicationset", name, None)).unwrap_err();
            assert_eq!(err.exit_code(), 2);
            assert_eq!(err.to_string(), "resource name is required");
        }
    }
}
