use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub mod global;

pub use global::{GlobalFlags, OutputFormat};

/// Top-level CLI parser for the `sweepi` binary.
#[derive(Debug, Parser)]
#[command(
    name = "sweepi",
    version,
    about = "Sweepi - structural linting for React/TSX projects",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub run: RunArgs,

    /// Output format: stylish, json
    #[arg(long, global = true, default_value = "stylish")]
    pub format: OutputFormat,

    /// Quiet mode (suppress status lines)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
        }
    }
}

#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Provision the Sweepi toolchain.
    Init(InitArgs),
}

#[derive(Clone, Debug, Args)]
pub struct InitArgs {
    /// Remove an existing toolchain first
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments of the default (lint) command.
#[derive(Clone, Debug, Default, Args)]
pub struct RunArgs {
    /// Project directory to lint
    #[arg(value_name = "PROJECT_DIR", default_value = ".")]
    pub project_dir: PathBuf,

    /// Lint every matching file instead of changed files
    #[arg(long, conflicts_with = "file")]
    pub all: bool,

    /// Lint only this file (repeatable)
    #[arg(long, value_name = "PATH")]
    pub file: Vec<PathBuf>,
}

impl RunArgs {
    #[must_use]
    pub fn selection(&self) -> Selection {
        if self.all {
            Selection::All
        } else if self.file.is_empty() {
            Selection::Changed
        } else {
            Selection::Files(self.file.clone())
        }
    }
}

/// Which files a run lints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    All,
    Files(Vec<PathBuf>),
    Changed,
}
