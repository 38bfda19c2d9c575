//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
///
/// Without a subcommand the interactive menu is started.
#[derive(Debug, Parser)]
#[command(
    name     = "argo-helper",
    bin_name = "argo-helper",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "A CLI tool to help bootstrap and manage ArgoCD repositories",
    long_about = "argo-helper creates opinionated ArgoCD repository structures \
                  with best practices baked in. Run it without a subcommand for \
                  the interactive menu.",
    after_help = "EXAMPLES:\n\
        \x20 argo-helper\n\
        \x20 argo-helper init ./gitops --project payments --examples\n\
        \x20 argo-helper new applicationset my-apps\n\
        \x20 argo-helper --dry-run init --project payments\n\
        \x20 argo-helper completions bash > /usr/share/bash-completion/completions/argo-helper",
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute. `None` launches the interactive menu.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Initialize a new ArgoCD repository structure.
    #[command(
        visible_alias = "i",
        about = "Initialize a new ArgoCD repository structure",
        long_about = "Initialize a new ArgoCD repository with an opinionated structure: \
                      a custom-resources directory for CRDs, a values directory for \
                      environment-specific values, templates for ArgoCD applications \
                      and projects, and helper templates for common functions.",
        after_help = "EXAMPLES:\n\
            \x20 argo-helper init --project payments\n\
            \x20 argo-helper init ./gitops -p payments --examples\n\
            \x20 argo-helper --dry-run init -p payments"
    )]
    Init(InitArgs),

    /// Create a new ArgoCD resource.
    #[command(
        visible_alias = "n",
        about = "Create a new ArgoCD resource",
        long_about = "Create a new ArgoCD resource from an opinionated template.\n\
                      Currently supported resource types:\n\
                      - applicationset: a new ApplicationSet manifest\n\n\
                      Resources are created in templates/apps/ by default.",
        after_help = "EXAMPLES:\n\
            \x20 argo-helper new applicationset my-apps\n\
            \x20 argo-helper new applicationset my-apps --output deploy/apps"
    )]
    New(NewArgs),

    /// List the built-in template catalog.
    #[command(
        visible_alias = "ls",
        about = "List built-in templates",
        after_help = "EXAMPLES:\n\
            \x20 argo-helper list\n\
            \x20 argo-helper list --format json"
    )]
    List(ListArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 argo-helper completions bash > ~/.local/share/bash-completion/completions/argo-helper\n\
            \x20 argo-helper completions zsh  > ~/.zfunc/_argo-helper\n\
            \x20 argo-helper completions fish > ~/.config/fish/completions/argo-helper.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the argo-helper configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 argo-helper config get defaults.output_path\n\
            \x20 argo-helper config list\n\
            \x20 argo-helper config init"
    )]
    Config(ConfigCommands),
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `argo-helper init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Repository root. Defaults to the current directory; relative paths
    /// are resolved against it.
    #[arg(value_name = "PATH", help = "Repository path (default: current directory)")]
    pub path: Option<String>,

    /// Name of the ArgoCD project.
    #[arg(
        short = 'p',
        long = "project",
        value_name = "NAME",
        required = true,
        help = "Name of the ArgoCD project"
    )]
    pub project: String,

    /// Also write example applications, an ApplicationSet and per-environment
    /// values.
    #[arg(
        short = 'e',
        long = "examples",
        help = "Include example applications and ApplicationSet"
    )]
    pub examples: bool,
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `argo-helper new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Resource type. Kept as a string so that unsupported values are
    /// reported with the list of supported ones.
    #[arg(value_name = "RESOURCE_TYPE", help = "Resource type (e.g. applicationset)")]
    pub resource_type: String,

    /// Resource name, used as `metadata.name` and in the file name.
    #[arg(value_name = "NAME", help = "Resource name")]
    pub name: Option<String>,

    /// Output directory.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Output path (default: templates/apps)"
    )]
    pub output: Option<String>,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `argo-helper list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `argo-helper completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `argo-helper config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.output_path`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
    /// Write the default configuration file.
    Init {
        /// Overwrite an existing config file.
        #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
        force: bool,
    },
}

/// Path helper shared by `init` and `new`: `None` and `""` both mean "use
/// the default".
pub fn path_input(value: Option<&str>) -> &str {
    value.unwrap_or_default()
}

// ── tests ─────────────────────────────────────────────────────────────────────
