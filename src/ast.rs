//! Manifest Abstract Syntax Tree structures.
//!
//! This module defines the data structures used to represent a parsed
//! `modplan.yml`. They mirror the YAML schema of the module/target
//! descriptor format and are deserialised with `serde_yml`.
//!
//! The following example shows how to parse a minimal manifest string:
//!
//! ```rust
//! use modplan::ast::Manifest;
//!
//! let yaml = "modplan_version: \"1.0.0\"\nmodules:\n  - name: Core\ntargets: []";
//! let manifest: Manifest = serde_yml::from_str(yaml).expect("parse");
//! assert_eq!(manifest.modules[0].name, "Core");
//! ```

use camino::Utf8PathBuf;
use semver::Version;
use serde::{Deserialize, Serialize};

/// Top-level manifest structure parsed from a `modplan.yml`.
///
/// Each field mirrors a key in the YAML manifest. Optional collections default
/// to empty to simplify deserialisation.
///
/// ```yaml
/// modplan_version: "1.0.0"
/// modules:
///   - name: Core
/// targets:
///   - name: Game
///     kind: game
///     modules: [Core]
/// ```
#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Semantic version of the manifest format.
    pub modplan_version: Version,

    /// Module descriptors, one per compilable unit.
    #[serde(default)]
    pub modules: Vec<ModuleDecl>,

    /// Target descriptors composing modules into builds.
    #[serde(default)]
    pub targets: Vec<TargetDecl>,
}

/// A single module descriptor.
///
/// Modules declare the dependencies they consume and the header directories
/// they expose. Public dependencies and includes propagate to consumers;
/// private ones stay internal to the declaring module.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ModuleDecl {
    /// Unique identifier used by targets and other modules to reference
    /// this module.
    pub name: String,

    /// Dependencies whose interface propagates to consumers of this module.
    #[serde(default)]
    pub public_deps: StringOrList,

    /// Dependencies used internally; not visible to further consumers.
    #[serde(default)]
    pub private_deps: StringOrList,

    /// Header directories exposed to consumers.
    #[serde(default)]
    pub public_includes: Vec<Utf8PathBuf>,

    /// Header directories visible only while compiling this module.
    #[serde(default)]
    pub private_includes: Vec<Utf8PathBuf>,

    /// Precompiled-header policy, carried through to the build plan
    /// unmodified.
    #[serde(default)]
    pub pch: PchPolicy,
}

/// A single target descriptor.
///
/// Targets name the modules they pull in at the top level; everything those
/// modules depend on joins the build transitively.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TargetDecl {
    /// Unique identifier for the target.
    pub name: String,

    /// The flavour of build this target produces.
    pub kind: TargetKind,

    /// Extra modules rooted directly at the target.
    #[serde(default)]
    pub modules: StringOrList,
}

/// Build flavour of a target.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    /// Shipping game executable.
    Game,
    /// Editor build with tooling modules loaded.
    Editor,
    /// Dedicated server build.
    Server,
    /// Network client build.
    Client,
}

impl TargetKind {
    /// Stable lowercase name used in rendered plans.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Game => "game",
            Self::Editor => "editor",
            Self::Server => "server",
            Self::Client => "client",
        }
    }
}

/// Precompiled-header eligibility for a module.
///
/// The resolver carries the policy through to the plan without interpreting
/// it; the compiler driver decides what to do with it.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum PchPolicy {
    /// No precompiled headers.
    #[default]
    None,
    /// An explicit per-module PCH, or a shared one when none is declared.
    ExplicitOrShared,
    /// Always use the shared PCHs.
    UseShared,
}

impl PchPolicy {
    /// Stable kebab-case name matching the manifest spelling.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::ExplicitOrShared => "explicit-or-shared",
            Self::UseShared => "use-shared",
        }
    }
}

/// A helper for fields that accept either a single string or a list of
/// strings.
///
/// It mirrors YAML syntax where a scalar or sequence is allowed. Empty values
/// deserialize to `StringOrList::Empty`.
///
/// ```yaml
/// # Scalar
/// public_deps: Core
/// # Sequence
/// public_deps:
///   - Core
///   - Engine
/// ```
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq)]
#[serde(untagged)]
pub enum StringOrList {
    /// No value provided.
    #[default]
    Empty,
    /// A single string item.
    String(String),
    /// A list of string items.
    List(Vec<String>),
}

impl StringOrList {
    /// Iterate over the contained strings, if any.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let items: &[String] = match self {
            Self::Empty => &[],
            Self::String(s) => std::slice::from_ref(s),
            Self::List(v) => v,
        };
        items.iter().map(String::as_str)
    }
}
