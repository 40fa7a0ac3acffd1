//! Modplan core library.
//!
//! This library parses module and target descriptors from a `modplan.yml`
//! manifest, builds a dependency graph, and resolves targets into
//! deterministic, topologically ordered build plans with per-module include
//! visibility.

pub mod ast;
pub mod cli;
pub mod graph;
pub mod manifest;
pub mod plan_gen;
pub mod runner;
