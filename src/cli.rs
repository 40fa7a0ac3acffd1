//! Command line interface definition using clap.
//!
//! This module defines the [`Cli`] structure and its subcommands.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Resolve module and target descriptors into deterministic build plans.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the module manifest file to use.
    #[arg(short, long, value_name = "FILE", default_value = "modplan.yml")]
    pub file: PathBuf,

    /// Change to this directory before doing anything.
    #[arg(short = 'C', long, value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Enable verbose logging output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Optional subcommand to execute; defaults to `targets` when omitted.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Parse command-line arguments, providing `targets` as the default
    /// command.
    #[must_use]
    pub fn parse_with_default() -> Self {
        Self::parse().with_default_command()
    }

    /// Parse the provided arguments, applying the default command when needed.
    ///
    /// # Panics
    ///
    /// Panics if argument parsing fails.
    #[must_use]
    pub fn parse_from_with_default<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(args)
            .unwrap_or_else(|e| panic!("CLI parsing failed: {e}"))
            .with_default_command()
    }

    /// Apply the default command if none was specified.
    #[must_use]
    fn with_default_command(mut self) -> Self {
        if self.command.is_none() {
            self.command = Some(Commands::Targets);
        }
        self
    }
}

/// Arguments accepted by the `plan` command.
#[derive(Debug, Args, PartialEq, Eq, Clone)]
pub struct PlanArgs {
    /// Name of the target to resolve.
    pub target: String,

    /// Write the rendered plan to this path instead of standard output.
    #[arg(long, value_name = "FILE")]
    pub emit: Option<PathBuf>,
}

/// Available top-level commands for modplan.
#[derive(Debug, Subcommand, PartialEq, Eq, Clone)]
pub enum Commands {
    /// Resolve a target into an ordered compile plan.
    Plan(PlanArgs),

    /// Display the module dependency graph in DOT format for visualization.
    Graph,

    /// List the targets declared in the manifest `default`.
    Targets,
}
