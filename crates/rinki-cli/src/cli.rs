//! Command-line interface definition for rinki.
//!
//! - `rinki print` - print the resolved bundler configuration as JSON
//! - `rinki rule <PATH>` - show which module rule handles a file

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use rinki_config::Mode;

/// rinki - resolve the front-end bundler configuration for a project
#[derive(Parser, Debug)]
#[command(
    name = "rinki",
    version,
    about = "Resolve the front-end bundler configuration for a project",
    long_about = "Resolves the bundler configuration from NODE_ENV and the project root.\n\
                  Anything other than NODE_ENV=development resolves to a production build."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the resolved configuration as JSON
    Print(PrintArgs),

    /// Show the module rule that handles a file
    Rule(RuleArgs),
}

/// Options shared by every command that resolves a configuration.
#[derive(Args, Debug, Clone)]
pub struct ProjectArgs {
    /// Project root; aliases and output paths are derived from it
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Override the mode instead of reading NODE_ENV
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,
}

#[derive(Args, Debug, Clone)]
pub struct PrintArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Print on a single line
    #[arg(long)]
    pub compact: bool,
}

#[derive(Args, Debug, Clone)]
pub struct RuleArgs {
    /// File path to look up, e.g. src/App.tsx
    pub path: PathBuf,

    #[command(flatten)]
    pub project: ProjectArgs,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum ModeArg {
    #[value(name = "development")]
    Development,
    #[value(name = "production")]
    Production,
}

impl From<ModeArg> for Mode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Development => Mode::Development,
            ModeArg::Production => Mode::Production,
        }
    }
}
