//! Command handlers.
//!
//! Each handler translates parsed arguments into core calls and prints the
//! result. No business logic lives here.

pub mod completions;
pub mod config;
pub mod init;
pub mod interactive;
pub mod list;
pub mod new;

use serde_json::{Value, json};

use argo_helper_adapters::{InMemoryStore, LocalFilesystem, SimpleRenderer, SystemClock};
use argo_helper_core::application::{
    ExecutionMode, ProgressReporter, ScaffoldOutcome, ScaffoldService,
};

use crate::{
    cli::{GlobalArgs, OutputFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Wire the production adapters into a [`ScaffoldService`].
pub fn scaffold_service(
    mode: ExecutionMode,
    reporter: Box<dyn ProgressReporter>,
) -> CliResult<ScaffoldService> {
    let store = InMemoryStore::with_builtin()?;
    Ok(ScaffoldService::new(
        Box::new(store),
        Box::new(SimpleRenderer::new()),
        Box::new(LocalFilesystem::new()),
        Box::new(SystemClock),
    )
    .with_mode(mode)
    .with_reporter(reporter))
}

/// `--dry-run` or `dry_run = true` in the config.
pub fn execution_mode(global: &GlobalArgs, config: &AppConfig) -> ExecutionMode {
    ExecutionMode::from_dry_run(global.dry_run || config.dry_run)
}

/// `true` when stdout must stay machine-readable.
pub fn wants_json(output: &OutputManager) -> bool {
    output.format() == OutputFormat::Json
}

/// JSON rendering of a run, for `--output-format json`.
pub fn outcome_json(outcome: &ScaffoldOutcome) -> Value {
    match outcome {
        ScaffoldOutcome::Generated(report) => json!({
            "dry_run": false,
            "root": report.root,
            "directories": report.directories,
            "files": report.files,
            "written": report.written,
        }),
        ScaffoldOutcome::Previewed(plan) => {
            let entries: Vec<Value> = plan
                .entries()
                .iter()
                .map(|entry| {
                    json!({
                        "path": plan.absolute(entry.path()),
                        "kind": if entry.is_directory() { "directory" } else { "file" },
                        "content": entry.content(),
                    })
                })
                .collect();
            json!({
                "dry_run": true,
                "workflow": plan.workflow().as_str(),
                "root": plan.root(),
                "entries": entries,
            })
        }
    }
}

/// Print `value` as pretty JSON on stdout.
pub fn print_json(output: &OutputManager, value: &Value) -> CliResult<()> {
    let text = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
    output.data(&text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use argo_helper_core::application::GenerationReport;
    use argo_helper_core::domain::{ManifestPlan, TemplateName, Workflow};

    use super::*;

    #[test]
    fn dry_run_from_flag_or_config() {
        let mut global = GlobalArgs::default();
        let mut config = AppConfig::default();
        assert_eq!(execution_mode(&global, &config), ExecutionMode::Write);

        global.dry_run = true;
        assert_eq!(execution_mode(&global, &config), ExecutionMode::DryRun);

        global.dry_run = false;
        config.dry_run = true;
        assert_eq!(execution_mode(&global, &config), ExecutionMode::DryRun);
    }

    #[test]
    fn generated_json_lists_written_files() {
        let outcome = ScaffoldOutcome::Generated(GenerationReport {
            root: PathBuf::from("/srv/gitops"),
            directories: 1,
            files: 1,
            written: vec![PathBuf::from("/srv/gitops/Chart.yaml")],
        });
        let value = outcome_json(&outcome);
        assert_eq!(value["dry_run"], false);
        assert_eq!(value["written"][0], "/srv/gitops/Chart.yaml");
    }

    #[test]
    fn previewed_json_carries_content_for_files_only() {
        let plan = ManifestPlan::new(Workflow::NewResource, "/srv/gitops/templates/apps")
            .with_directory("")
            .with_file(
                "applicationset-my-apps.yaml",
                TemplateName::ApplicationSet,
                "kind: ApplicationSet\n".into(),
            );
        let value = outcome_json(&ScaffoldOutcome::Previewed(plan));

        assert_eq!(value["dry_run"], true);
        assert_eq!(value["workflow"], "new-resource");
        assert_eq!(value["entries"][0]["kind"], "directory");
        assert!(value["entries"][0]["content"].is_null());
        assert_eq!(
            value["entries"][1]["path"],
            "/srv/gitops/templates/apps/applicationset-my-apps.yaml"
        );
        assert_eq!(value["entries"][1]["content"], "kind: ApplicationSet\n");
    }
}
