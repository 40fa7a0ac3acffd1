//! CLI execution and command dispatch logic.
//!
//! This module keeps the binary entry point minimal by providing a single
//! function that
//! loads the manifest, registers the descriptors, and runs the requested
//! command against the resulting graph.

use crate::cli::{Cli, Commands, PlanArgs};
use crate::graph::ModuleGraph;
use crate::{manifest, plan_gen};
use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info};

/// Execute the parsed [`Cli`] commands.
///
/// # Errors
///
/// Returns an error if the manifest cannot be loaded, a descriptor is
/// rejected at registration, or resolution of the requested target fails.
pub fn run(cli: &Cli) -> Result<()> {
    let graph = load_graph(cli)?;
    match cli.command.as_ref() {
        Some(Commands::Plan(args)) => plan_target(&graph, args),
        Some(Commands::Graph) => {
            print!("{}", plan_gen::graph_dot(&graph));
            Ok(())
        }
        // `Cli::parse_with_default` fills in `Targets`; `None` only occurs
        // for a hand-built `Cli` and gets the same listing.
        Some(Commands::Targets) | None => {
            for target in graph.targets() {
                println!("{} ({})", target.name, target.kind.as_str());
            }
            Ok(())
        }
    }
}

/// Load the manifest referenced by `cli` and register its descriptors.
///
/// # Errors
///
/// Returns an error if the manifest cannot be read or a descriptor conflicts
/// with an earlier one.
fn load_graph(cli: &Cli) -> Result<ModuleGraph> {
    let manifest_path = cli
        .directory
        .as_ref()
        .map_or_else(|| cli.file.clone(), |dir| dir.join(&cli.file));
    let manifest = manifest::from_path(&manifest_path)
        .with_context(|| format!("loading manifest at {}", manifest_path.display()))?;
    debug!(
        modules = manifest.modules.len(),
        targets = manifest.targets.len(),
        "manifest loaded"
    );
    let graph = ModuleGraph::from_manifest(&manifest).context("registering descriptors")?;
    Ok(graph)
}

/// Resolve one target and emit the rendered plan.
fn plan_target(graph: &ModuleGraph, args: &PlanArgs) -> Result<()> {
    let plan = graph
        .build_plan(&args.target)
        .with_context(|| format!("resolving target '{}'", args.target))?;
    let rendered = plan_gen::generate(&plan);
    if let Some(path) = &args.emit {
        write_and_log(path, &rendered)?;
    } else {
        print!("{rendered}");
    }
    Ok(())
}

/// Write `content` to `path` and log the file's location.
///
/// # Errors
///
/// Returns an [`io::Error`] if the file cannot be written.
fn write_and_log(path: &Path, content: &str) -> io::Result<()> {
    fs::write(path, content)?;
    info!("wrote build plan to {}", path.display());
    Ok(())
}
