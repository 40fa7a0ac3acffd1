//! Tests for CLI argument parsing and the default command.

use modplan::cli::{Cli, Commands, PlanArgs};
use rstest::rstest;
use std::path::PathBuf;

#[rstest]
fn defaults_to_targets_command() {
    let cli = Cli::parse_from_with_default(["modplan"]);
    assert_eq!(cli.command, Some(Commands::Targets));
    assert_eq!(cli.file, PathBuf::from("modplan.yml"));
    assert!(!cli.verbose);
}

#[rstest]
fn plan_takes_target_and_emit() {
    let cli = Cli::parse_from_with_default(["modplan", "plan", "Winter2025", "--emit", "out.plan"]);
    assert_eq!(
        cli.command,
        Some(Commands::Plan(PlanArgs {
            target: "Winter2025".into(),
            emit: Some(PathBuf::from("out.plan")),
        }))
    );
}

#[rstest]
fn graph_subcommand_parses() {
    let cli = Cli::parse_from_with_default(["modplan", "graph"]);
    assert_eq!(cli.command, Some(Commands::Graph));
}

#[rstest]
fn file_and_directory_flags_are_honoured() {
    let cli = Cli::parse_from_with_default(["modplan", "-C", "project", "-f", "plan.yml", "-v"]);
    assert_eq!(cli.directory, Some(PathBuf::from("project")));
    assert_eq!(cli.file, PathBuf::from("plan.yml"));
    assert!(cli.verbose);
}
