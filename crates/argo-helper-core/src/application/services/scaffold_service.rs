//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire scaffolding workflow:
//! 1. Re-validate the resolved parameters
//! 2. Plan: lay out the blueprint and render every file
//! 3. Write the plan to the filesystem (or hand it back as a preview)
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::path::Path;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{
            Clock, ExecutionMode, Filesystem, GenerationReport, ProgressEvent, ProgressReporter,
            ScaffoldOutcome, ScaffoldUseCase, SilentReporter, TemplateRenderer, TemplateStore,
        },
    },
    domain::{
        DomainValidator as validator, ManifestPlan, RenderContext, ResolvedParameters,
        blueprint_for,
    },
    error::{ArgoError, ArgoResult},
};

/// Main scaffolding service.
///
/// Orchestrates the planning, rendering, and writing workflow.
pub struct ScaffoldService {
    store: Box<dyn TemplateStore>,
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
    clock: Box<dyn Clock>,
    reporter: Box<dyn ProgressReporter>,
    mode: ExecutionMode,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use argo_helper_core::application::{ExecutionMode, ScaffoldService};
    ///
    /// let service = ScaffoldService::new(
    ///     store,      // impl TemplateStore
    ///     renderer,   // impl TemplateRenderer
    ///     filesystem, // impl Filesystem
    ///     clock,      // impl Clock
    /// )
    /// .with_mode(ExecutionMode::DryRun);
    /// ```
    pub fn new(
        store: Box<dyn TemplateStore>,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            store,
            renderer,
            filesystem,
            clock,
            reporter: Box::new(SilentReporter),
            mode: ExecutionMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: ExecutionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_reporter(mut self, reporter: Box<dyn ProgressReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    pub fn mode(&self) -> ExecutionMode {
        self.mode
    }

    /// Build the manifest plan for a set of parameters. Touches no files.
    #[instrument(
        skip_all,
        fields(workflow = %params.workflow(), root = %params.root().display())
    )]
    pub fn plan(&self, params: &ResolvedParameters) -> ArgoResult<ManifestPlan> {
        validator::validate_parameters(params)?;

        let blueprint = blueprint_for(params);
        let context = RenderContext::for_parameters(params, self.clock.today());

        let mut plan = ManifestPlan::new(params.workflow(), params.root());
        for dir in blueprint.directories {
            plan.add_directory(dir);
        }
        for file in blueprint.files {
            let template = self.store.get(file.template)?;
            let content = self.renderer.render(&template, &context)?;
            plan.add_file(file.path, file.template, content);
        }

        validator::validate_plan(&plan)?;
        debug!(entries = plan.entry_count(), "Plan built");
        Ok(plan)
    }

    /// The plan a real run would execute, for dry-run display.
    pub fn preview(&self, params: &ResolvedParameters) -> ArgoResult<ManifestPlan> {
        let plan = self.plan(params)?;
        info!(entries = plan.entry_count(), "Dry run, nothing written");
        Ok(plan)
    }

    /// Plan and write.
    ///
    /// Directories are created first, then files. Existing directories are
    /// reused and existing files overwritten. The first failure aborts the
    /// run; whatever was written before it stays on disk.
    pub fn generate(&self, params: &ResolvedParameters) -> ArgoResult<GenerationReport> {
        let plan = self.plan(params)?;
        let report = self.write_plan(&plan)?;
        info!(
            directories = report.directories,
            files = report.files,
            "Scaffold completed successfully"
        );
        Ok(report)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn write_plan(&self, plan: &ManifestPlan) -> ArgoResult<GenerationReport> {
        let mut report = GenerationReport {
            root: plan.root().to_path_buf(),
            directories: 0,
            files: 0,
            written: Vec::new(),
        };

        for dir in plan.directories() {
            let path = plan.absolute(&dir.path);
            self.filesystem
                .create_dir_all(&path)
                .map_err(|e| failed_at(&path, e))?;
            debug!(path = %path.display(), "Created directory");
            self.reporter
                .report(&ProgressEvent::DirectoryCreated(path));
            report.directories += 1;
        }

        for file in plan.files() {
            let path = plan.absolute(&file.path);
            self.filesystem
                .write_file(&path, &file.content)
                .map_err(|e| failed_at(&path, e))?;
            debug!(path = %path.display(), bytes = file.size(), "Wrote file");
            self.reporter
                .report(&ProgressEvent::FileWritten(path.clone()));
            report.files += 1;
            report.written.push(path);
        }

        Ok(report)
    }
}

impl ScaffoldUseCase for ScaffoldService {
    fn run(&self, params: &ResolvedParameters) -> ArgoResult<ScaffoldOutcome> {
        match self.mode {
            ExecutionMode::Write => self.generate(params).map(ScaffoldOutcome::Generated),
            ExecutionMode::DryRun => self.preview(params).map(ScaffoldOutcome::Previewed),
        }
    }
}

/// Normalize any port failure into a filesystem error naming `path`.
fn failed_at(path: &Path, err: ArgoError) -> ArgoError {
    warn!(path = %path.display(), error = %err, "Write failed, aborting");
    match err {
        ArgoError::Application(ApplicationError::FilesystemError { .. }) => err,
        other => ApplicationError::filesystem(path, other).into(),
    }
}
