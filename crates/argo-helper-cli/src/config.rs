//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `ARGO_HELPER_DRY_RUN`,
//!    `ARGO_HELPER_DEFAULTS__OUTPUT_PATH`, ...
//! 3. Config file: `--config FILE`, otherwise `config.{toml,yaml,json}` in
//!    the platform config directory, then `~/.argo-helper.{yaml,toml,json}`
//! 4. Built-in defaults (always present)

use std::path::PathBuf;

use anyhow::Context;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

const ENV_PREFIX: &str = "ARGO_HELPER";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Process-wide dry-run, OR-ed with `--dry-run`.
    pub dry_run: bool,
    /// Default values for the forms and subcommands.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Where `new` writes when no output path is given.
    pub output_path: String,
    /// Pre-set the examples toggle / `--examples`.
    pub include_examples: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output_path: "templates/apps".into(),
            include_examples: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "human".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then files, then the environment.
    ///
    /// `config_file` is the path the user passed via `--config`; it must
    /// exist.  Without it the default locations are optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let mut builder = Config::builder()
            .add_source(Config::try_from(&Self::default()).context("invalid built-in defaults")?);

        match config_file {
            Some(path) => {
                builder = builder.add_source(File::from(path.as_path()).required(true));
            }
            None => {
                if let Some(home) = Self::home_file_stem() {
                    builder = builder.add_source(File::from(home).required(false));
                }
                builder = builder.add_source(File::from(Self::file_stem()).required(false));
            }
        }

        builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(Config::try_deserialize)
            .with_context(|| match config_file {
                Some(path) => format!("failed to load configuration from {}", path.display()),
                None => "failed to load configuration".to_string(),
            })
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.argo-helper.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        Self::file_stem().with_extension("toml")
    }

    /// Directory for the interactive session's log files.
    pub fn log_dir() -> PathBuf {
        directories::ProjectDirs::from("io", "rebelops", "argo-helper")
            .map(|d| d.data_local_dir().join("logs"))
            .unwrap_or_else(|| std::env::temp_dir().join("argo-helper-logs"))
    }

    /// Serialise as the TOML `config init` writes.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Look up a dotted key, e.g. `defaults.output_path`.
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "dry_run" => self.dry_run.to_string(),
            "defaults.output_path" => self.defaults.output_path.clone(),
            "defaults.include_examples" => self.defaults.include_examples.to_string(),
            "output.no_color" => self.output.no_color.to_string(),
            "output.format" => self.output.format.clone(),
            _ => return None,
        };
        Some(value)
    }

    /// Every key [`Self::get`] understands.
    pub const KEYS: [&'static str; 5] = [
        "dry_run",
        "defaults.output_path",
        "defaults.include_examples",
        "output.no_color",
        "output.format",
    ];

    /// `<config dir>/config`, extension resolved by the `config` crate.
    fn file_stem() -> PathBuf {
        directories::ProjectDirs::from("io", "rebelops", "argo-helper")
            .map(|d| d.config_dir().join("config"))
            .unwrap_or_else(|| PathBuf::from(".argo-helper"))
    }

    fn home_file_stem() -> Option<PathBuf> {
        directories::BaseDirs::new().map(|d| d.home_dir().join(".argo-helper"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_path_is_templates_apps() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.output_path, "templates/apps");
        assert!(!cfg.dry_run);
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("argo.toml");
        std::fs::write(
            &path,
            "dry_run = true\n\n[defaults]\noutput_path = \"deploy/apps\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert!(cfg.dry_run);
        assert_eq!(cfg.defaults.output_path, "deploy/apps");
        // Untouched keys keep their defaults.
        assert!(!cfg.defaults.include_examples);
        assert_eq!(cfg.output.format, "human");
    }

    #[test]
    fn yaml_files_are_understood() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("argo.yaml");
        std::fs::write(&path, "defaults:\n  include_examples: true\n").unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert!(cfg.defaults.include_examples);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn get_known_and_unknown_keys() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.get("defaults.output_path").as_deref(), Some("templates/apps"));
        assert_eq!(cfg.get("output.no_color").as_deref(), Some("false"));
        assert_eq!(cfg.get("does.not.exist"), None);
        for key in AppConfig::KEYS {
            assert!(cfg.get(key).is_some(), "{key}");
        }
    }

    #[test]
    fn toml_round_trips_through_the_loader() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut cfg = AppConfig::default();
        cfg.defaults.output_path = "apps".into();
        std::fs::write(&path, cfg.to_toml().unwrap()).unwrap();

        assert_eq!(AppConfig::load(Some(&path)).unwrap(), cfg);
    }

    #[test]
    fn config_path_has_toml_extension() {
        let p = AppConfig::config_path();
        assert_eq!(p.extension().and_then(|e| e.to_str()), Some("toml"));
    }
}
