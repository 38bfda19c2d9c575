//! `argo-helper` with no subcommand: the interactive menu.

use crate::{cli::GlobalArgs, config::AppConfig, error::CliResult};

#[cfg(feature = "interactive")]
pub fn execute(global: &GlobalArgs, config: &AppConfig) -> CliResult<()> {
    crate::tui::run(global, config)
}

#[cfg(not(feature = "interactive"))]
pub fn execute(_global: &GlobalArgs, _config: &AppConfig) -> CliResult<()> {
    Err(crate::error::CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}
