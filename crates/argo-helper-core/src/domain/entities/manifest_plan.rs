use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::{
    entities::template::TemplateName, error::DomainError, value_objects::Workflow,
};

/// Ordered list of filesystem entries a scaffold will create.
///
/// This is the output of planning: paths relative to `root`, each file
/// already rendered. It contains no I/O and no business logic, only data.
/// An empty relative path denotes `root` itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestPlan {
    pub(crate) workflow: Workflow,
    pub(crate) root: PathBuf,
    pub(crate) entries: Vec<PlanEntry>,
}

impl ManifestPlan {
    pub fn new(workflow: Workflow, root: impl Into<PathBuf>) -> Self {
        Self {
            workflow,
            root: root.into(),
            entries: Vec::new(),
        }
    }

    pub fn add_directory(&mut self, path: impl Into<PathBuf>) {
        self.entries.push(PlanEntry::Directory(PlannedDirectory {
            path: path.into(),
        }));
    }

    pub fn add_file(&mut self, path: impl Into<PathBuf>, template: TemplateName, content: String) {
        self.entries.push(PlanEntry::File(PlannedFile {
            path: path.into(),
            template,
            content,
        }));
    }

    pub fn with_directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.add_directory(path);
        self
    }

    pub fn with_file(
        mut self,
        path: impl Into<PathBuf>,
        template: TemplateName,
        content: String,
    ) -> Self {
        self.add_file(path, template, content);
        self
    }

    /// Check the plan's structural invariants: non-empty, absolute root,
    /// relative and unique entry paths, every directory before any file,
    /// and every file inside the root or a planned directory (directories
    /// are created with their ancestors).
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.entries.is_empty() {
            return Err(DomainError::EmptyPlan);
        }

        if !self.root.is_absolute() {
            return Err(DomainError::RelativePathNotAllowed {
                path: self.root.display().to_string(),
            });
        }

        let mut seen = HashSet::new();
        let mut saw_file = false;
        for entry in &self.entries {
            let path = entry.path();

            if !seen.insert(path.to_path_buf()) {
                return Err(DomainError::DuplicatePath {
                    path: path.display().to_string(),
                });
            }

            if path.is_absolute() {
                return Err(DomainError::AbsolutePathNotAllowed {
                    path: path.display().to_string(),
                });
            }

            match entry {
                PlanEntry::File(f) => {
                    saw_file = true;
                    if !self.has_parent_of(&f.path) {
                        return Err(DomainError::MissingParentDirectory {
                            path: f.path.display().to_string(),
                        });
                    }
                }
                PlanEntry::Directory(d) if saw_file => {
                    return Err(DomainError::DirectoryAfterFile {
                        path: d.path.display().to_string(),
                    });
                }
                PlanEntry::Directory(_) => {}
            }
        }

        Ok(())
    }

    fn has_parent_of(&self, file: &Path) -> bool {
        match file.parent() {
            None => true,
            Some(parent) if parent.as_os_str().is_empty() => true,
            Some(parent) => self.directories().any(|d| d.path.starts_with(parent)),
        }
    }

    pub fn workflow(&self) -> Workflow {
        self.workflow
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn entries(&self) -> &[PlanEntry] {
        &self.entries
    }

    pub fn files(&self) -> impl Iterator<Item = &PlannedFile> {
        self.entries.iter().filter_map(|e| match e {
            PlanEntry::File(f) => Some(f),
            _ => None,
        })
    }

    pub fn directories(&self) -> impl Iterator<Item = &PlannedDirectory> {
        self.entries.iter().filter_map(|e| match e {
            PlanEntry::Directory(d) => Some(d),
            _ => None,
        })
    }

    /// Relative paths of every entry, in plan order.
    pub fn paths(&self) -> Vec<&Path> {
        self.entries.iter().map(PlanEntry::path).collect()
    }

    /// Absolute location of a relative plan path.
    pub fn absolute(&self, relative: &Path) -> PathBuf {
        if relative.as_os_str().is_empty() {
            self.root.clone()
        } else {
            self.root.join(relative)
        }
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Human-readable dry-run listing.
    ///
    /// The repository workflow lists paths only. The single-file resource
    /// workflow also prints the rendered manifest.
    pub fn preview_listing(&self) -> PreviewListing<'_> {
        PreviewListing { plan: self }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanEntry {
    Directory(PlannedDirectory),
    File(PlannedFile),
}

impl PlanEntry {
    pub fn path(&self) -> &Path {
        match self {
            Self::Directory(d) => &d.path,
            Self::File(f) => &f.path,
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, Self::Directory(_))
    }

    pub fn content(&self) -> Option<&str> {
        match self {
            Self::Directory(_) => None,
            Self::File(f) => Some(&f.content),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    pub path: PathBuf,
    pub template: TemplateName,
    pub content: String,
}

impl PlannedFile {
    pub fn size(&self) -> usize {
        self.content.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedDirectory {
    pub path: PathBuf,
}

/// [`fmt::Display`] adapter returned by [`ManifestPlan::preview_listing`].
pub struct PreviewListing<'a> {
    plan: &'a ManifestPlan,
}

impl fmt::Display for PreviewListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = self.plan;
        match plan.workflow {
            Workflow::Init => {
                writeln!(f, "Dry run: the following structure would be created:")?;
                writeln!(f)?;
                writeln!(f, "Root directory: {}", plan.root.display())?;
                writeln!(f)?;
                for entry in &plan.entries {
                    match entry {
                        PlanEntry::Directory(d) => writeln!(f, "  {}/", d.path.display())?,
                        PlanEntry::File(file) => writeln!(f, "  {}", file.path.display())?,
                    }
                }
            }
            Workflow::NewResource => {
                writeln!(f, "Dry run: the following resource would be created:")?;
                writeln!(f)?;
                writeln!(f, "Output Path: {}", plan.root.display())?;
                for file in plan.files() {
                    writeln!(f)?;
                    writeln!(f, "File: {}", plan.absolute(&file.path).display())?;
                    writeln!(f)?;
                    writeln!(f, "Template content:")?;
                    writeln!(f, "---")?;
                    f.write_str(&file.content)?;
                    if !file.content.ends_with('\n') {
                        writeln!(f)?;
                    }
                    writeln!(f, "---")?;
                }
            }
        }
        Ok(())
    }
}
