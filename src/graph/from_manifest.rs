//! Manifest-to-graph conversion helpers.

use crate::ast::{Manifest, ModuleDecl, TargetDecl};

use super::model::{ConfigError, Module, ModuleGraph, Target};

impl ModuleGraph {
    /// Build a registry from a parsed [`Manifest`].
    ///
    /// Declarations register in manifest order. Repeated identical
    /// declarations are tolerated; conflicting ones abort loading so a
    /// configuration mistake never turns into a silent last-write-wins.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] raised while registering.
    pub fn from_manifest(manifest: &Manifest) -> Result<Self, ConfigError> {
        let mut graph = Self::default();
        for decl in &manifest.modules {
            graph.register_module(Module::from(decl))?;
        }
        for decl in &manifest.targets {
            graph.register_target(Target::from(decl))?;
        }
        Ok(graph)
    }
}

impl From<&ModuleDecl> for Module {
    fn from(decl: &ModuleDecl) -> Self {
        Self {
            name: decl.name.clone(),
            public_deps: decl.public_deps.iter().map(ToOwned::to_owned).collect(),
            private_deps: decl.private_deps.iter().map(ToOwned::to_owned).collect(),
            public_includes: decl.public_includes.clone(),
            private_includes: decl.private_includes.clone(),
            pch: decl.pch,
        }
    }
}

impl From<&TargetDecl> for Target {
    fn from(decl: &TargetDecl) -> Self {
        Self {
            name: decl.name.clone(),
            kind: decl.kind,
            modules: decl.modules.iter().map(ToOwned::to_owned).collect(),
        }
    }
}
