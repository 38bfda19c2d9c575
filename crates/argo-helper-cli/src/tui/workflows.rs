//! The two guided forms and what happens when they are submitted.

use argo_helper_core::{
    application::{PathResolver, ScaffoldOutcome, ScaffoldUseCase},
    domain::{DomainError, InitParameters, ResolvedParameters, ResourceParameters, ResourceType},
};
use tracing::{info, warn};

use super::field::FieldSpec;
use super::form::Form;
use crate::config::Defaults;

const NAME_LIMIT: usize = 30;
const PATH_LIMIT: usize = 100;

/// A form that knows how to turn its values into scaffold parameters.
pub trait FormWorkflow {
    fn form(&self) -> &Form;
    fn form_mut(&mut self) -> &mut Form;
    fn parameters(&self, resolver: &PathResolver) -> Result<ResolvedParameters, DomainError>;
}

/// Validate, then run the use case.
///
/// Returns the notice to show on the menu, or `None` after recording the
/// failure on the form so the user can correct it.
pub fn submit<W: FormWorkflow + ?Sized>(
    workflow: &mut W,
    resolver: &PathResolver,
    use_case: &dyn ScaffoldUseCase,
) -> Option<String> {
    let params = match workflow.parameters(resolver) {
        Ok(params) => params,
        Err(err) => {
            workflow.form_mut().set_error(err.to_string());
            return None;
        }
    };

    info!(workflow = %params.workflow(), root = %params.root().display(), "Form submitted");
    match use_case.run(&params) {
        Ok(outcome) => Some(notice(&outcome)),
        Err(err) => {
            warn!(error = %err, "Generation failed");
            workflow.form_mut().set_error(err.to_string());
            None
        }
    }
}

/// One-paragraph summary of a run for the menu screen.
pub fn notice(outcome: &ScaffoldOutcome) -> String {
    match outcome {
        ScaffoldOutcome::Previewed(plan) => plan.preview_listing().to_string(),
        ScaffoldOutcome::Generated(report) => match report.written.as_slice() {
            [single] if report.directories <= 1 => format!("Created {}", single.display()),
            _ => format!(
                "Created {} directories and {} files in {}",
                report.directories,
                report.files,
                report.root.display()
            ),
        },
    }
}

// ── Initialize Repository ────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct InitForm {
    form: Form,
}

impl InitForm {
    pub const TITLE: &'static str = "Initialize ArgoCD Repository";
    const HELP: &'static str =
        "Tab/Shift+Tab: Navigate • Space: Toggle checkbox • Enter: Submit • Esc: Cancel";

    /// `cwd_hint` is shown as the path placeholder.
    pub fn new(defaults: &Defaults, cwd_hint: &str) -> Self {
        let specs = vec![
            FieldSpec::text("project_name", "Project Name", "project name", NAME_LIMIT)
                .required()
                .placeholder("Enter project name"),
            FieldSpec::text("repository_path", "Repository Path", "repository path", PATH_LIMIT)
                .placeholder(cwd_hint),
            FieldSpec::toggle("include_examples", "Include examples", defaults.include_examples),
        ];
        Self {
            form: Form::new(Self::TITLE, Self::HELP, specs),
        }
    }
}

impl FormWorkflow for InitForm {
    fn form(&self) -> &Form {
        &self.form
    }

    fn form_mut(&mut self) -> &mut Form {
        &mut self.form
    }

    fn parameters(&self, resolver: &PathResolver) -> Result<ResolvedParameters, DomainError> {
        if let Some(spec) = self.form.first_missing() {
            return Err(DomainError::MissingRequiredField { field: spec.name });
        }
        let root = resolver.resolve(self.form.text("repository_path"), None)?;
        let params = InitParameters::new(
            self.form.text("project_name").trim(),
            root,
            self.form.checked("include_examples"),
        )?;
        Ok(params.into())
    }
}

// ── New Resource ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct NewResourceForm {
    form: Form,
    default_output: String,
}

impl NewResourceForm {
    pub const TITLE: &'static str = "Create New ArgoCD Resource";
    const HELP: &'static str = "Tab/Shift+Tab: Navigate • Enter: Submit • Esc: Cancel";

    pub fn new(defaults: &Defaults) -> Self {
        let default_type = ResourceType::default();
        let specs = vec![
            FieldSpec::text("resource_type", "Resource Type", "resource type", NAME_LIMIT)
                .placeholder(default_type.as_str())
                .initial(default_type.as_str()),
            FieldSpec::text("resource_name", "Resource Name", "resource name", NAME_LIMIT)
                .required()
                .placeholder("Enter resource name"),
            FieldSpec::text("output_path", "Output Path", "output path", PATH_LIMIT)
                .placeholder(defaults.output_path.clone()),
        ];
        Self {
            form: Form::new(Self::TITLE, Self::HELP, specs),
            default_output: defaults.output_path.clone(),
        }
    }

    fn resource_type(&self) -> Result<ResourceType, DomainError> {
        let raw = self.form.text("resource_type");
        if raw.trim().is_empty() {
            Ok(ResourceType::default())
        } else {
            raw.parse()
        }
    }
}

impl FormWorkflow for NewResourceForm {
    fn form(&self) -> &Form {
        &self.form
    }

    fn form_mut(&mut self) -> &mut Form {
        &mut self.form
    }

    /// The type is checked before the name.
    fn parameters(&self, resolver: &PathResolver) -> Result<ResolvedParameters, DomainError> {
        let resource_type = self.resource_type()?;
        if let Some(spec) = self.form.first_missing() {
            return Err(DomainError::MissingRequiredField { field: spec.name });
        }
        let output = resolver.resolve(
            self.form.text("output_path"),
            Some(self.default_output.as_str()),
        )?;
        let params =
            ResourceParameters::new(resource_type, self.form.text("resource_name").trim(), output)?;
        Ok(params.into())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::path::PathBuf;

    use argo_helper_core::{
        application::GenerationReport,
        error::{ArgoError, ArgoResult},
    };
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::*;

    /// Records parameters and answers with a canned result.
    #[derive(Default)]
    struct Recorder {
        calls: RefCell<Vec<ResolvedParameters>>,
        fail: bool,
    }

    impl ScaffoldUseCase for Recorder {
        fn run(&self, params: &ResolvedParameters) -> ArgoResult<ScaffoldOutcome> {
            self.calls.borrow_mut().push(params.clone());
            if self.fail {
                return Err(ArgoError::Internal {
                    message: "disk full".into(),
                });
            }
            Ok(ScaffoldOutcome::Generated(GenerationReport {
                root: params.root().to_path_buf(),
                directories: 5,
                files: 4,
                written: Vec::new(),
            }))
        }
    }

    fn base() -> PathBuf {
        std::env::temp_dir().join("argo-helper-forms")
    }

    fn resolver() -> PathResolver {
        PathResolver::fixed(base())
    }

    fn type_text(form: &mut Form, text: &str) {
        for c in text.chars() {
            form.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::empty()));
        }
    }

    fn tab(form: &mut Form) {
        form.handle_key(KeyEvent::new(KeyCode::Tab, KeyModifiers::empty()));
    }

    #[test]
    fn init_requires_a_project_name() {
        let mut init = InitForm::new(&Defaults::default(), "/tmp");
        let recorder = Recorder::default();

        assert_eq!(submit(&mut init, &resolver(), &recorder), None);
        assert_eq!(init.form().last_error(), Some("project name is required"));
        assert!(recorder.calls.borrow().is_empty());
    }

    #[test]
    fn init_blank_path_is_the_base_and_toggle_is_carried() {
        let mut init = InitForm::new(&Defaults::default(), "/tmp");
        type_text(init.form_mut(), "payments");
        tab(init.form_mut());
        tab(init.form_mut());
        type_text(init.form_mut(), " ");

        let recorder = Recorder::default();
        let notice = submit(&mut init, &resolver(), &recorder).unwrap();
        assert!(notice.contains("5 directories and 4 files"));

        let calls = recorder.calls.borrow();
        match &calls[0] {
            ResolvedParameters::Init(p) => {
                assert_eq!(p.project_name(), "payments");
                assert_eq!(p.repository_path(), base());
                assert!(p.include_examples());
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn init_examples_default_comes_from_config() {
        let defaults = Defaults {
            include_examples: true,
            ..Defaults::default()
        };
        let init = InitForm::new(&defaults, "/tmp");
        assert!(init.form().checked("include_examples"));
    }

    #[test]
    fn new_resource_defaults_type_and_output() {
        let mut form = NewResourceForm::new(&Defaults::default());
        assert_eq!(form.form().text("resource_type"), "applicationset");
        tab(form.form_mut());
        type_text(form.form_mut(), "my-apps");

        match form.parameters(&resolver()).unwrap() {
            ResolvedParameters::NewResource(p) => {
                assert_eq!(p.resource_type(), ResourceType::ApplicationSet);
                assert_eq!(p.output_path(), base().join("templates/apps"));
                assert_eq!(p.file_name(), "applicationset-my-apps.yaml");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn blank_type_means_applicationset() {
        let mut form = NewResourceForm::new(&Defaults::default());
        for _ in 0.."applicationset".len() {
            form.form_mut()
                .handle_key(KeyEvent::new(KeyCode::Backspace, KeyModifiers::empty()));
        }
        tab(form.form_mut());
        type_text(form.form_mut(), "web");
        assert!(form.parameters(&resolver()).is_ok());
    }

    #[test]
    fn unsupported_type_is_reported_before_missing_name() {
        let mut form = NewResourceForm::new(&Defaults::default());
        type_text(form.form_mut(), "x");
        let recorder = Recorder::default();

        assert_eq!(submit(&mut form, &resolver(), &recorder), None);
        let error = form.form().last_error().unwrap_or_default();
        assert!(error.contains("applicationsetx"), "{error}");
        assert!(recorder.calls.borrow().is_empty());
    }

    #[test]
    fn missing_resource_name() {
        let mut form = NewResourceForm::new(&Defaults::default());
        let recorder = Recorder::default();
        assert_eq!(submit(&mut form, &resolver(), &recorder), None);
        assert_eq!(form.form().last_error(), Some("resource name is required"));
    }

    #[test]
    fn generation_failure_stays_on_the_form() {
        let mut form = NewResourceForm::new(&Defaults::default());
        tab(form.form_mut());
        type_text(form.form_mut(), "my-apps");
        let recorder = Recorder {
            fail: true,
            ..Recorder::default()
        };

        assert_eq!(submit(&mut form, &resolver(), &recorder), None);
        assert!(form.form().last_error().unwrap_or_default().contains("disk full"));
        assert_eq!(recorder.calls.borrow().len(), 1);
    }

    #[test]
    fn single_file_notice_names_the_file() {
        let outcome = ScaffoldOutcome::Generated(GenerationReport {
            root: PathBuf::from("/srv/apps"),
            directories: 1,
            files: 1,
            written: vec![PathBuf::from("/srv/apps/applicationset-web.yaml")],
        });
        assert_eq!(notice(&outcome), "Created /srv/apps/applicationset-web.yaml");
    }
}
