//! Tests for manifest AST deserialisation.

use modplan::ast::{Manifest, PchPolicy, StringOrList, TargetKind};
use rstest::rstest;

#[rstest]
fn parses_minimal_manifest() {
    let yaml = "modplan_version: \"1.0.0\"\nmodules:\n  - name: Core\n";
    let manifest: Manifest = serde_yml::from_str(yaml).expect("parse");
    assert_eq!(manifest.modules.len(), 1);
    assert_eq!(manifest.modules[0].name, "Core");
    assert_eq!(manifest.modules[0].pch, PchPolicy::None);
    assert!(manifest.targets.is_empty());
}

#[rstest]
fn deps_accept_scalar_or_sequence() {
    let yaml = concat!(
        "modplan_version: \"1.0.0\"\n",
        "modules:\n",
        "  - name: World\n",
        "    public_deps: Engine\n",
        "  - name: Enemy\n",
        "    public_deps: [AIModule, Engine]\n",
    );
    let manifest: Manifest = serde_yml::from_str(yaml).expect("parse");
    assert_eq!(
        manifest.modules[0].public_deps,
        StringOrList::String("Engine".into())
    );
    assert_eq!(
        manifest.modules[1].public_deps,
        StringOrList::List(vec!["AIModule".into(), "Engine".into()])
    );
}

#[rstest]
#[case("none", PchPolicy::None)]
#[case("explicit-or-shared", PchPolicy::ExplicitOrShared)]
#[case("use-shared", PchPolicy::UseShared)]
fn pch_policy_uses_kebab_case(#[case] spelling: &str, #[case] expected: PchPolicy) {
    let yaml = format!(
        "modplan_version: \"1.0.0\"\nmodules:\n  - name: M\n    pch: {spelling}\n"
    );
    let manifest: Manifest = serde_yml::from_str(&yaml).expect("parse");
    assert_eq!(manifest.modules[0].pch, expected);
    assert_eq!(expected.as_str(), spelling);
}

#[rstest]
#[case("game", TargetKind::Game)]
#[case("editor", TargetKind::Editor)]
#[case("server", TargetKind::Server)]
#[case("client", TargetKind::Client)]
fn target_kind_parses_lowercase(#[case] spelling: &str, #[case] expected: TargetKind) {
    let yaml = format!(
        "modplan_version: \"1.0.0\"\ntargets:\n  - name: T\n    kind: {spelling}\n"
    );
    let manifest: Manifest = serde_yml::from_str(&yaml).expect("parse");
    assert_eq!(manifest.targets[0].kind, expected);
}

#[rstest]
fn string_or_list_iterates_each_form() {
    assert_eq!(StringOrList::Empty.iter().count(), 0);

    let scalar = StringOrList::String("Core".into());
    assert_eq!(scalar.iter().collect::<Vec<_>>(), ["Core"]);

    let list = StringOrList::List(vec!["Core".into(), "Engine".into()]);
    assert_eq!(list.iter().collect::<Vec<_>>(), ["Core", "Engine"]);
}

#[rstest]
fn unknown_fields_are_rejected() {
    let yaml = concat!(
        "modplan_version: \"1.0.0\"\n",
        "modules:\n",
        "  - name: Core\n",
        "    publik_deps: [Engine]\n",
    );
    serde_yml::from_str::<Manifest>(yaml).expect_err("unknown field");
}

#[rstest]
fn missing_version_is_rejected() {
    let yaml = "modules:\n  - name: Core\n";
    serde_yml::from_str::<Manifest>(yaml).expect_err("missing version");
}
