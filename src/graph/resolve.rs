//! Target resolution: closure, ordering, and include visibility.
//!
//! [`ModuleGraph::build_plan`] turns a registered target into a
//! [`BuildPlan`]: the transitive module closure in dependency-first order
//! with the include paths each module may see. Resolution is pure; the same
//! graph always yields a byte-identical plan.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use camino::Utf8PathBuf;
use thiserror::Error;

use crate::ast::{PchPolicy, TargetKind};

use super::cycle::ClosureWalker;
use super::model::{Module, ModuleGraph};

/// Errors raised while resolving a target into a plan.
///
/// Resolution failures are always fatal to the target: there is no partial
/// or best-effort plan.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolutionError {
    /// The requested target is not registered.
    #[error("target '{name}' is not registered")]
    UnknownTarget {
        /// Name of the missing target.
        name: String,
    },
    /// A dependency list references a module that is not registered.
    #[error("module '{module}' required by '{requested_by}' is not registered")]
    UnknownModule {
        /// Name of the missing module.
        module: String,
        /// Module or target whose dependency list references it.
        requested_by: String,
    },
    /// The dependency graph contains a cycle, so no compile order exists.
    #[error("dependency cycle detected: {}", cycle.join(" -> "))]
    CyclicDependency {
        /// The full cycle path, rotated so the lexically smallest module
        /// starts and ends it.
        cycle: Vec<String>,
    },
}

/// One module of a build plan, ready for a compiler driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedModule {
    /// Module name.
    pub name: String,
    /// Every include path visible while compiling this module: its own
    /// declared paths plus the exported paths of its dependencies.
    pub includes: BTreeSet<Utf8PathBuf>,
    /// Precompiled-header policy, carried through from the descriptor.
    pub pch: PchPolicy,
}

/// A validated, deterministic compile plan for one target.
///
/// Plans are derived fresh per invocation and hold no state of their own;
/// discard them after use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildPlan {
    /// Name of the resolved target.
    pub target: String,
    /// Build flavour of the resolved target.
    pub kind: TargetKind,
    /// Modules in dependency-first order: every dependency of a module
    /// appears strictly before it.
    pub modules: Vec<PlannedModule>,
}

impl BuildPlan {
    /// Module names in plan order.
    #[must_use]
    pub fn module_names(&self) -> Vec<&str> {
        self.modules.iter().map(|m| m.name.as_str()).collect()
    }

    /// The resolved include set for `module`, if it is part of the plan.
    #[must_use]
    pub fn include_visibility(&self, module: &str) -> Option<&BTreeSet<Utf8PathBuf>> {
        self.modules
            .iter()
            .find(|m| m.name == module)
            .map(|m| &m.includes)
    }
}

impl ModuleGraph {
    /// Resolve `target_name` into a [`BuildPlan`].
    ///
    /// The closure follows both public and private edges; include visibility
    /// propagates only along public ones. A target with no modules yields an
    /// empty plan. Ordering ties are broken by lexical module name, so
    /// re-running on an unchanged graph reproduces the plan exactly.
    ///
    /// # Errors
    ///
    /// Returns [`ResolutionError::UnknownTarget`] for an unregistered
    /// target, [`ResolutionError::UnknownModule`] when a dependency list
    /// names a module that was never registered, and
    /// [`ResolutionError::CyclicDependency`] when no compile order exists.
    pub fn build_plan(&self, target_name: &str) -> Result<BuildPlan, ResolutionError> {
        let target = self
            .target(target_name)
            .ok_or_else(|| ResolutionError::UnknownTarget {
                name: target_name.to_owned(),
            })?;

        let mut walker = ClosureWalker::new(self);
        for root in &target.modules {
            walker.walk(root, target_name)?;
        }
        let closure = walker.into_closure();
        tracing::debug!(
            target = %target.name,
            modules = closure.len(),
            "resolved module closure"
        );

        let ordered = topological_order(self, &closure);
        let exports = public_exports(self, &ordered);

        let mut modules = Vec::with_capacity(ordered.len());
        for name in ordered {
            // The closure only ever contains registered modules.
            let Some(module) = self.module(&name) else {
                continue;
            };
            let includes = visible_includes(module, &exports);
            modules.push(PlannedModule {
                name,
                includes,
                pch: module.pch,
            });
        }

        Ok(BuildPlan {
            target: target.name.clone(),
            kind: target.kind,
            modules,
        })
    }
}

/// Order the closure dependency-first.
///
/// Kahn's algorithm over the acyclic closure, with a lexically ordered ready
/// set: whenever several modules are eligible, the smallest name is emitted
/// first. The closure is cycle-free by the time this runs.
fn topological_order(graph: &ModuleGraph, closure: &BTreeSet<String>) -> Vec<String> {
    let mut pending: HashMap<&str, usize> = HashMap::with_capacity(closure.len());
    let mut dependents: HashMap<&str, Vec<&str>> = HashMap::new();
    let mut ready: BTreeSet<&str> = BTreeSet::new();

    for name in closure {
        let Some(module) = graph.module(name) else {
            continue;
        };
        let deps: Vec<&str> = module.dependencies().collect();
        pending.insert(name.as_str(), deps.len());
        if deps.is_empty() {
            ready.insert(name.as_str());
        }
        for dep in deps {
            dependents.entry(dep).or_default().push(name.as_str());
        }
    }

    let mut order = Vec::with_capacity(closure.len());
    while let Some(name) = ready.pop_first() {
        order.push(name.to_owned());
        let Some(consumers) = dependents.get(name) else {
            continue;
        };
        for &consumer in consumers {
            if let Some(count) = pending.get_mut(consumer) {
                *count -= 1;
                if *count == 0 {
                    ready.insert(consumer);
                }
            }
        }
    }
    order
}

/// Compute each module's exported include surface.
///
/// A module exports its own public include paths plus everything exported by
/// its public dependencies. Private edges do not extend the chain. The input
/// order is dependency-first, so every dependency's export is available when
/// its consumers are processed.
fn public_exports(
    graph: &ModuleGraph,
    ordered: &[String],
) -> BTreeMap<String, BTreeSet<Utf8PathBuf>> {
    let mut exports: BTreeMap<String, BTreeSet<Utf8PathBuf>> = BTreeMap::new();
    for name in ordered {
        let Some(module) = graph.module(name) else {
            continue;
        };
        let mut surface: BTreeSet<Utf8PathBuf> = module.public_includes.iter().cloned().collect();
        for dep in &module.public_deps {
            if let Some(dep_surface) = exports.get(dep) {
                surface.extend(dep_surface.iter().cloned());
            }
        }
        exports.insert(name.clone(), surface);
    }
    exports
}

/// Everything `module` may include: its own public and private paths plus
/// the exported surface of each direct dependency. Consumers of `module`
/// never see what a private edge contributed here.
fn visible_includes(
    module: &Module,
    exports: &BTreeMap<String, BTreeSet<Utf8PathBuf>>,
) -> BTreeSet<Utf8PathBuf> {
    let mut includes: BTreeSet<Utf8PathBuf> = module
        .public_includes
        .iter()
        .chain(&module.private_includes)
        .cloned()
        .collect();
    for dep in module.dependencies() {
        if let Some(surface) = exports.get(dep) {
            includes.extend(surface.iter().cloned());
        }
    }
    includes
}
