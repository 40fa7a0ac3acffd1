//! Module Graph Resolver.
//!
//! This module owns the dependency graph built from module and target
//! descriptors and resolves targets into deterministic build plans: a
//! topologically ordered compile set with per-module include visibility.
//! Engine subsystem names appearing in dependency lists are opaque
//! identities here; the resolver only cares that they are nodes.
//!
//! # Examples
//!
//! ```
//! use modplan::ast::Manifest;
//! use modplan::graph::ModuleGraph;
//!
//! let yaml = r#"
//! modplan_version: "1.0.0"
//! modules:
//!   - name: Engine
//!     public_includes: [Engine/Public]
//!   - name: World
//!     public_deps: [Engine]
//! targets:
//!   - name: Game
//!     kind: game
//!     modules: [World]
//! "#;
//! let manifest: Manifest = serde_yml::from_str(yaml).expect("parse");
//! let graph = ModuleGraph::from_manifest(&manifest).expect("register");
//! let plan = graph.build_plan("Game").expect("plan");
//! assert_eq!(plan.module_names(), ["Engine", "World"]);
//! ```

mod cycle;
mod from_manifest;
mod model;
mod resolve;

pub use model::{ConfigError, Module, ModuleGraph, Target};
pub use resolve::{BuildPlan, PlannedModule, ResolutionError};
