//! Driving (input) ports - called by the CLI and the interactive forms,
//! implemented by application services.

use std::path::{Path, PathBuf};

use crate::domain::{ManifestPlan, ResolvedParameters};
use crate::error::ArgoResult;

/// Whether a run touches the filesystem.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExecutionMode {
    #[default]
    Write,
    DryRun,
}

impl ExecutionMode {
    pub fn from_dry_run(dry_run: bool) -> Self {
        if dry_run { Self::DryRun } else { Self::Write }
    }

    pub fn is_dry_run(&self) -> bool {
        matches!(self, Self::DryRun)
    }
}

/// Summary of a completed generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub root: PathBuf,
    pub directories: usize,
    pub files: usize,
    /// Absolute paths of written files, in write order.
    pub written: Vec<PathBuf>,
}

impl GenerationReport {
    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// What a [`ScaffoldUseCase::run`] produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldOutcome {
    Generated(GenerationReport),
    Previewed(ManifestPlan),
}

impl ScaffoldOutcome {
    pub fn is_preview(&self) -> bool {
        matches!(self, Self::Previewed(_))
    }
}

/// Generate (or preview) the scaffold described by a set of parameters.
pub trait ScaffoldUseCase {
    fn run(&self, params: &ResolvedParameters) -> ArgoResult<ScaffoldOutcome>;
}
