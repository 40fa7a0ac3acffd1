//! Tests for building a `ModuleGraph` from a manifest.

use modplan::{
    graph::{ConfigError, ModuleGraph},
    manifest,
};
use rstest::rstest;

#[rstest]
fn minimal_manifest_registers_descriptors() {
    let manifest = manifest::from_path("tests/data/minimal.yml").expect("load");
    let graph = ModuleGraph::from_manifest(&manifest).expect("graph");
    assert_eq!(graph.modules().count(), 1);
    assert_eq!(graph.targets().count(), 1);
}

#[rstest]
fn identical_duplicate_declarations_are_merged() {
    let manifest =
        manifest::from_path("tests/data/duplicate_module_identical.yml").expect("load");
    let graph = ModuleGraph::from_manifest(&manifest).expect("graph");
    assert_eq!(graph.modules().count(), 1);
}

#[rstest]
fn conflicting_duplicate_declarations_are_rejected() {
    let manifest = manifest::from_path("tests/data/duplicate_module.yml").expect("load");
    let err = ModuleGraph::from_manifest(&manifest).expect_err("conflict");
    assert_eq!(
        err,
        ConfigError::DuplicateModule {
            name: "Enemy".into()
        }
    );
}

#[rstest]
fn self_dependency_is_rejected_at_load_time() {
    let yaml = concat!(
        "modplan_version: \"1.0.0\"\n",
        "modules:\n",
        "  - name: Ouroboros\n",
        "    private_deps: [Ouroboros]\n",
    );
    let manifest = manifest::from_str(yaml).expect("parse");
    let err = ModuleGraph::from_manifest(&manifest).expect_err("self loop");
    assert_eq!(
        err,
        ConfigError::SelfDependency {
            name: "Ouroboros".into()
        }
    );
}

#[rstest]
fn duplicate_dependency_entries_collapse() {
    let yaml = concat!(
        "modplan_version: \"1.0.0\"\n",
        "modules:\n",
        "  - name: Engine\n",
        "  - name: World\n",
        "    public_deps: [Engine, Engine]\n",
    );
    let manifest = manifest::from_str(yaml).expect("parse");
    let graph = ModuleGraph::from_manifest(&manifest).expect("graph");
    let world = graph.module("World").expect("module");
    assert_eq!(world.public_deps.len(), 1);
}

#[rstest]
fn targets_may_reference_modules_declared_later() {
    // Deferred resolution: registration order does not matter.
    let yaml = concat!(
        "modplan_version: \"1.0.0\"\n",
        "targets:\n",
        "  - name: Game\n",
        "    kind: game\n",
        "    modules: [World]\n",
        "modules:\n",
        "  - name: World\n",
    );
    let manifest = manifest::from_str(yaml).expect("parse");
    let graph = ModuleGraph::from_manifest(&manifest).expect("graph");
    assert!(graph.build_plan("Game").is_ok());
}
