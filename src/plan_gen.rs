//! Build-plan renderers.
//!
//! This module converts a [`crate::graph::BuildPlan`] into the textual form
//! consumed by an external compiler driver, and a [`crate::graph::ModuleGraph`]
//! into Graphviz DOT for inspection. Both renderers sort their input so the
//! output is byte-identical across runs.

use std::fmt::{self, Display, Formatter};

use itertools::Itertools;

use crate::graph::{BuildPlan, ModuleGraph, PlannedModule};

/// Render a build plan as text, one stanza per module in compile order.
///
/// Each stanza carries everything the driver needs to invoke a compiler for
/// the module: its name, its PCH policy, and its resolved include set.
#[must_use]
pub fn generate(plan: &BuildPlan) -> String {
    DisplayPlan(plan).to_string()
}

/// Render the full module graph in DOT format.
///
/// Public dependency edges are solid, private ones dashed. Modules and edges
/// are emitted in lexical order.
#[must_use]
pub fn graph_dot(graph: &ModuleGraph) -> String {
    let mut out = String::from("digraph modules {\n");
    let modules = graph
        .modules()
        .sorted_by(|a, b| a.name.cmp(&b.name));
    for module in modules {
        out.push_str(&format!("  \"{}\";\n", module.name));
        for dep in &module.public_deps {
            out.push_str(&format!("  \"{}\" -> \"{dep}\";\n", module.name));
        }
        for dep in &module.private_deps {
            out.push_str(&format!(
                "  \"{}\" -> \"{dep}\" [style=dashed];\n",
                module.name
            ));
        }
    }
    out.push_str("}\n");
    out
}

/// Wrapper struct to display a whole plan.
struct DisplayPlan<'a>(&'a BuildPlan);

impl Display for DisplayPlan<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "target {}", self.0.target)?;
        writeln!(f, "  kind = {}", self.0.kind.as_str())?;
        writeln!(f)?;
        for module in &self.0.modules {
            write!(f, "{}", DisplayModule(module))?;
        }
        Ok(())
    }
}

/// Wrapper struct to display one planned module stanza.
struct DisplayModule<'a>(&'a PlannedModule);

impl Display for DisplayModule<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "module {}", self.0.name)?;
        writeln!(f, "  pch = {}", self.0.pch.as_str())?;
        for include in &self.0.includes {
            writeln!(f, "  include = {include}")?;
        }
        writeln!(f)
    }
}
