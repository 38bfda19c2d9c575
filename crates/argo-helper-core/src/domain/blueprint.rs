//! Fixed layouts of what each workflow creates, before any rendering.

use std::path::PathBuf;

use crate::domain::{entities::parameters::ResolvedParameters, entities::template::TemplateName};

/// A file to produce from a catalog template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlueprintFile {
    pub path: PathBuf,
    pub template: TemplateName,
}

/// Directories and template-backed files for one workflow, in creation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blueprint {
    pub directories: Vec<PathBuf>,
    pub files: Vec<BlueprintFile>,
}

impl Blueprint {
    fn dir(mut self, path: &str) -> Self {
        self.directories.push(PathBuf::from(path));
        self
    }

    fn file(mut self, path: impl Into<PathBuf>, template: TemplateName) -> Self {
        self.files.push(BlueprintFile {
            path: path.into(),
            template,
        });
        self
    }

    /// Every template this blueprint needs.
    pub fn templates(&self) -> impl Iterator<Item = TemplateName> + '_ {
        self.files.iter().map(|f| f.template)
    }
}

/// Layout of a freshly initialized ArgoCD repository.
pub fn repository_blueprint(include_examples: bool) -> Blueprint {
    let mut blueprint = Blueprint::default()
        .dir("custom-resources")
        .dir("values")
        .dir("templates/apps")
        .dir("templates/projects");

    if include_examples {
        blueprint = blueprint
            .dir("examples")
            .dir("values/dev")
            .dir("values/prod");
    }

    blueprint = blueprint
        .file(".helmignore", TemplateName::Helmignore)
        .file("Chart.yaml", TemplateName::Chart)
        .file("values.yaml", TemplateName::Values)
        .file("templates/_helpers.tpl", TemplateName::Helpers)
        .file("templates/projects/project.yaml", TemplateName::Project)
        .file("README.md", TemplateName::Readme);

    if include_examples {
        blueprint = blueprint
            .file("templates/apps/example-app.yaml", TemplateName::ExampleApp)
            .file(
                "examples/applicationset.yaml",
                TemplateName::ExampleApplicationSet,
            )
            .file("values/dev/values.yaml", TemplateName::DevValues)
            .file("values/prod/values.yaml", TemplateName::ProdValues);
    }

    blueprint
}

/// Blueprint for whichever workflow the parameters describe.
///
/// The resource workflow creates its output directory (the empty path) and
/// a single manifest inside it.
pub fn blueprint_for(params: &ResolvedParameters) -> Blueprint {
    match params {
        ResolvedParameters::Init(p) => repository_blueprint(p.include_examples()),
        ResolvedParameters::NewResource(p) => Blueprint::default()
            .dir("")
            .file(p.file_name(), p.resource_type().template()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_repository_layout() {
        let bp = repository_blueprint(false);
        assert_eq!(bp.directories.len(), 4);
        assert_eq!(bp.files.len(), 6);
        assert!(!bp.templates().any(|t| t == TemplateName::ExampleApp));
    }

    #[test]
    fn examples_add_directories_and_files() {
        let bp = repository_blueprint(true);
        assert_eq!(bp.directories.len(), 7);
        assert_eq!(bp.files.len(), 10);
        assert!(bp.directories.contains(&PathBuf::from("values/prod")));
        assert!(
            bp.files
                .iter()
                .any(|f| f.path == PathBuf::from("values/dev/values.yaml"))
        );
    }

    #[test]
    fn minimal_is_a_prefix_subset_of_examples() {
        let minimal = repository_blueprint(false);
        let full = repository_blueprint(true);
        for dir in &minimal.directories {
            assert!(full.directories.contains(dir));
        }
        for file in &minimal.files {
            assert!(full.files.contains(file));
        }
    }
}
