//! CLI argument definitions
//!
//! All Clap derive structs for `central-site` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

// ============================================================================
// Root CLI
// ============================================================================

/// Static application portal with build-time user manuals.
#[derive(Parser, Debug)]
#[command(name = "central-site", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "CENTRAL_SITE_COLOR")]
    pub color: ColorChoice,

    /// Log line format on stderr.
    #[arg(long, default_value = "human", global = true)]
    pub log_format: OutputFormat,
}

// ============================================================================
// Top-Level Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the portal page and copy public assets into an output directory.
    Build(BuildArgs),

    /// Render the portal once and serve it locally for preview.
    Serve(ServeArgs),

    /// List the loaded manuals and which applications they resolve for.
    Manuals(ManualsArgs),

    /// Generate shell completion scripts.
    Completions(CompletionsArgs),

    /// Display version and build information.
    Version(VersionArgs),
}

// ============================================================================
// Shared Inputs
// ============================================================================

/// Inputs every portal-rendering command reads.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Directory scanned for `*.md` user manuals.
    #[arg(long, default_value = "./manuals", env = "CENTRAL_SITE_MANUALS")]
    pub manuals: PathBuf,

    /// Portal YAML file replacing the built-in application list.
    #[arg(short, long, env = "CENTRAL_SITE_CONFIG")]
    pub config: Option<PathBuf>,
}

// ============================================================================
// Build / Serve / Manuals
// ============================================================================

/// Arguments for `build`.
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Manuals directory and portal file.
    #[command(flatten)]
    pub source: SourceArgs,

    /// Static assets copied next to the page (e.g. downloadable APKs).
    #[arg(long, default_value = "./public", env = "CENTRAL_SITE_PUBLIC")]
    pub public: PathBuf,

    /// Output directory for `index.html` and the copied assets.
    #[arg(short, long, default_value = "./dist")]
    pub out: PathBuf,
}

/// Arguments for `serve`.
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Manuals directory and portal file.
    #[command(flatten)]
    pub source: SourceArgs,

    /// Static assets served by path (e.g. downloadable APKs).
    #[arg(long, default_value = "./public", env = "CENTRAL_SITE_PUBLIC")]
    pub public: PathBuf,

    /// Bind address as `[host:]port`.
    #[arg(long, default_value = "127.0.0.1:5173", env = "CENTRAL_SITE_BIND")]
    pub bind: String,
}

/// Arguments for `manuals`.
#[derive(Args, Debug)]
pub struct ManualsArgs {
    /// Manuals directory and portal file.
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// Completions / Version
// ============================================================================

/// Arguments for shell completion generation.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell for completion script.
    pub shell: Shell,
}

/// Arguments for version display.
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Output format for structured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell.
    Bash,
    /// Zsh shell.
    Zsh,
    /// Fish shell.
    Fish,
    /// `PowerShell`.
    #[value(name = "powershell")]
    PowerShell,
    /// Elvish shell.
    Elvish,
}

// ============================================================================
// Tests
// ============================================================================
