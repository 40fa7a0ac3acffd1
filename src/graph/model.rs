//! Core graph records and the module registry.

use std::collections::BTreeSet;

use camino::Utf8PathBuf;
use indexmap::IndexMap;
use thiserror::Error;

use crate::ast::{PchPolicy, TargetKind};

/// Errors raised while registering module and target descriptors.
///
/// Registration errors surface at configuration-load time, before any plan
/// is attempted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The module name is already registered with a conflicting descriptor.
    #[error("module '{name}' is already registered with a different descriptor")]
    DuplicateModule {
        /// Name of the conflicting module.
        name: String,
    },
    /// The target name is already registered with a conflicting descriptor.
    #[error("target '{name}' is already registered with a different descriptor")]
    DuplicateTarget {
        /// Name of the conflicting target.
        name: String,
    },
    /// A module lists itself as a dependency.
    #[error("module '{name}' lists itself as a dependency")]
    SelfDependency {
        /// Name of the offending module.
        name: String,
    },
}

/// A compilable unit declaring its dependencies and exposed headers.
///
/// Dependency lists are sets: declaration order carries no meaning and
/// duplicates collapse. Include paths stay ordered as declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    /// Unique module name.
    pub name: String,
    /// Dependencies whose interface propagates to consumers of this module.
    pub public_deps: BTreeSet<String>,
    /// Dependencies used internally, invisible to further consumers.
    pub private_deps: BTreeSet<String>,
    /// Header directories exposed to consumers.
    pub public_includes: Vec<Utf8PathBuf>,
    /// Header directories visible only while compiling this module.
    pub private_includes: Vec<Utf8PathBuf>,
    /// Precompiled-header policy, carried through unmodified.
    pub pch: PchPolicy,
}

impl Module {
    /// Iterate over all dependency names, public and private, in lexical
    /// order without duplicates.
    pub fn dependencies(&self) -> impl Iterator<Item = &str> {
        let merged: BTreeSet<&str> = self
            .public_deps
            .iter()
            .chain(&self.private_deps)
            .map(String::as_str)
            .collect();
        merged.into_iter()
    }
}

/// An executable build composed from one or more modules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Unique target name.
    pub name: String,
    /// Build flavour.
    pub kind: TargetKind,
    /// Extra modules rooted directly at the target, in declaration order.
    pub modules: Vec<String>,
}

/// The module registry and dependency graph.
///
/// A graph is constructed explicitly and passed to callers; there is no
/// ambient process-wide registry. Registration mutates the graph and must
/// happen before plans are built; [`build_plan`](Self::build_plan) is a
/// read-only traversal and may run concurrently once loading is done.
///
/// # Examples
///
/// ```rust
/// use modplan::graph::{Module, ModuleGraph, Target};
/// use modplan::ast::{PchPolicy, TargetKind};
///
/// let mut graph = ModuleGraph::default();
/// graph
///     .register_module(Module {
///         name: "Core".into(),
///         public_deps: Default::default(),
///         private_deps: Default::default(),
///         public_includes: vec!["Core/Public".into()],
///         private_includes: Vec::new(),
///         pch: PchPolicy::None,
///     })
///     .expect("register");
/// graph
///     .register_target(Target {
///         name: "Game".into(),
///         kind: TargetKind::Game,
///         modules: vec!["Core".into()],
///     })
///     .expect("register");
/// let plan = graph.build_plan("Game").expect("plan");
/// assert_eq!(plan.modules.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct ModuleGraph {
    modules: IndexMap<String, Module>,
    targets: IndexMap<String, Target>,
}

impl ModuleGraph {
    /// Insert a module descriptor.
    ///
    /// Registering the same descriptor twice is idempotent; registering a
    /// conflicting descriptor under an existing name is rejected rather than
    /// silently overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::SelfDependency`] when the module depends on
    /// itself and [`ConfigError::DuplicateModule`] on a conflicting
    /// redeclaration.
    pub fn register_module(&mut self, module: Module) -> Result<(), ConfigError> {
        if module.public_deps.contains(module.name.as_str())
            || module.private_deps.contains(module.name.as_str())
        {
            return Err(ConfigError::SelfDependency { name: module.name });
        }
        if let Some(existing) = self.modules.get(&module.name) {
            if *existing == module {
                tracing::debug!(module = %module.name, "ignoring identical redeclaration");
                return Ok(());
            }
            return Err(ConfigError::DuplicateModule { name: module.name });
        }
        self.modules.insert(module.name.clone(), module);
        Ok(())
    }

    /// Insert a target descriptor.
    ///
    /// Module references are resolved lazily: the extra-module list is only
    /// validated when a plan is built, so descriptors may arrive in any
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DuplicateTarget`] on a conflicting
    /// redeclaration. Identical redeclarations are idempotent.
    pub fn register_target(&mut self, target: Target) -> Result<(), ConfigError> {
        if let Some(existing) = self.targets.get(&target.name) {
            if *existing == target {
                tracing::debug!(target = %target.name, "ignoring identical redeclaration");
                return Ok(());
            }
            return Err(ConfigError::DuplicateTarget { name: target.name });
        }
        self.targets.insert(target.name.clone(), target);
        Ok(())
    }

    /// Look up a registered module by name.
    #[must_use]
    pub fn module(&self, name: &str) -> Option<&Module> {
        self.modules.get(name)
    }

    /// Look up a registered target by name.
    #[must_use]
    pub fn target(&self, name: &str) -> Option<&Target> {
        self.targets.get(name)
    }

    /// Iterate over registered modules in registration order.
    pub fn modules(&self) -> impl Iterator<Item = &Module> {
        self.modules.values()
    }

    /// Iterate over registered targets in registration order.
    pub fn targets(&self) -> impl Iterator<Item = &Target> {
        self.targets.values()
    }
}
