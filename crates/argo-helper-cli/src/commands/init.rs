//! Implementation of the `argo-helper init` command.
//!
//! Responsibility: translate CLI arguments into [`InitParameters`], run the
//! scaffold use case, and display results.

use tracing::{info, instrument};

use argo_helper_core::{
    application::{
        GenerationReport, PathResolver, ProgressReporter, ScaffoldOutcome, ScaffoldUseCase,
        SilentReporter,
    },
    domain::{InitParameters, ManifestPlan, ResolvedParameters},
    error::ArgoError,
};

use crate::{
    cli::{GlobalArgs, InitArgs, path_input},
    config::AppConfig,
    error::CliResult,
    output::{OutputManager, OutputReporter},
};

/// Execute the `argo-helper init` command.
///
/// 1. Resolve the repository path (blank → current directory)
/// 2. Build and validate the parameters
/// 3. Generate, or preview under `--dry-run`
/// 4. Print next-steps guidance
#[instrument(skip_all, fields(project = %args.project))]
pub fn execute(
    args: InitArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let params = build_parameters(&args, &config, &PathResolver::current())?;
    let include_examples = args.examples || config.defaults.include_examples;

    let json = super::wants_json(&output);
    let reporter: Box<dyn ProgressReporter> = if json {
        Box::new(SilentReporter)
    } else {
        Box::new(OutputReporter::new(output.clone()))
    };
    let service = super::scaffold_service(super::execution_mode(&global, &config), reporter)?;

    info!(root = %params.root().display(), "Initialising repository");
    let outcome = service.run(&params)?;

    if json {
        return super::print_json(&output, &super::outcome_json(&outcome));
    }

    match outcome {
        ScaffoldOutcome::Previewed(plan) => print_preview(&plan, include_examples, &output),
        ScaffoldOutcome::Generated(report) => print_next_steps(&report, include_examples, &output),
    }
}

/// Resolve paths and defaults into validated parameters.
fn build_parameters(
    args: &InitArgs,
    config: &AppConfig,
    resolver: &PathResolver,
) -> CliResult<ResolvedParameters> {
    let root = resolver
        .resolve(path_input(args.path.as_deref()), None)
        .map_err(ArgoError::from)?;
    let include_examples = args.examples || config.defaults.include_examples;

    let params = InitParameters::new(args.project.trim(), root, include_examples)
        .map_err(ArgoError::from)?;
    Ok(params.into())
}

fn print_preview(plan: &ManifestPlan, include_examples: bool, output: &OutputManager) -> CliResult<()> {
    output.data(plan.preview_listing().to_string().trim_end())?;
    output.print("")?;
    output.info("To create this structure, run again without the --dry-run flag")?;
    if !include_examples {
        output.info("Add --examples or -e flag to include example applications and values")?;
    }
    Ok(())
}

fn print_next_steps(
    report: &GenerationReport,
    include_examples: bool,
    output: &OutputManager,
) -> CliResult<()> {
    output.print("")?;
    output.success(&format!(
        "ArgoCD repository structure successfully created at {}",
        report.root().display()
    ))?;
    output.print("")?;
    output.header("Next steps:")?;
    output.print("1. Update the values.yaml file with your repository URL and other settings")?;
    output.print("2. Create your application templates in templates/apps/")?;
    output.print("3. Add environment-specific values in values/")?;

    if include_examples {
        output.print("")?;
        output.print("Example files have been created to help you get started:")?;
        output.print("- templates/apps/example-app.yaml - Example application template")?;
        output.print("- examples/applicationset.yaml - Example ApplicationSet")?;
        output.print(
            "- values/dev/values.yaml and values/prod/values.yaml - Environment-specific values",
        )?;
    }
    Ok(())
}
