//! Command-line interface definition.
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Environment variable that supplies `--marketplace`.
pub const MARKETPLACE_ENV: &str = "SWAP_PROFILE_MARKETPLACE";

/// Exit status for success, including `--help` and `--version`.
pub const EXIT_SUCCESS: u8 = 0;

/// Exit status for usage errors and command failures.
pub const EXIT_FAILURE: u8 = 1;

const EXAMPLES: &str = "\
Examples:
  swap-profile list
  swap-profile swap default /path/to/project
  swap-profile swap example-full
  swap-profile --marketplace ~/src/claude-profiles list";

/// Top-level CLI entry point.
#[derive(Parser, Debug)]
#[command(
    name = "swap-profile",
    about = "Swap Claude Code settings profiles into a project's .claude/ directory",
    version = option_env!("SWAP_PROFILE_VERSION").unwrap_or(env!("CARGO_PKG_VERSION")),
    after_help = EXAMPLES
)]
pub struct Cli {
    /// Subcommand to run (defaults to `list`).
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Options shared across all subcommands.
    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Options shared across all subcommands.
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOpts {
    /// Marketplace directory containing profiles/ (overrides auto-detection)
    #[arg(long, global = true, env = MARKETPLACE_ENV)]
    pub marketplace: Option<PathBuf>,

    /// Configuration file to read instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Preview changes without applying
    #[arg(short = 'd', long, global = true)]
    pub dry_run: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List available profiles
    List,
    /// Apply a profile to a target directory
    Swap(SwapOpts),
    /// Generate a shell completion script
    Completions(CompletionsOpts),
    /// Print version information
    Version,
}

impl Command {
    /// Stem of the log file this command appends to, if any.
    ///
    /// Only `swap` changes anything on disk, so only `swap` keeps a log.
    #[must_use]
    pub const fn log_stem(&self) -> Option<&'static str> {
        match self {
            Self::Swap(_) => Some("swap"),
            Self::List | Self::Completions(_) | Self::Version => None,
        }
    }
}

/// Exit status for a command line clap refused to parse.
///
/// `--help`, `help`, and `--version` are reported by clap as errors that
/// print to stdout; those exit with [`EXIT_SUCCESS`]. Real usage errors exit
/// with [`EXIT_FAILURE`].
#[must_use]
pub fn usage_status(err: &clap::Error) -> u8 {
    if err.use_stderr() {
        EXIT_FAILURE
    } else {
        EXIT_SUCCESS
    }
}

/// Options for the `swap` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct SwapOpts {
    /// Profile name (subdirectory under profiles/)
    pub name: String,

    /// Target project directory (defaults to current directory)
    pub target: Option<PathBuf>,
}

/// Options for the `completions` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct CompletionsOpts {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
