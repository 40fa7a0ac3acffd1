//! Closure computation and cycle detection for the module graph.

use std::collections::{BTreeSet, HashMap};

use super::model::ModuleGraph;
use super::resolve::ResolutionError;

/// Tracks the visitation state of a node during traversal.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum VisitState {
    Visiting,
    Visited,
}

/// Depth-first walker collecting the set of modules reachable from a
/// target's extra modules.
///
/// Both public and private edges are followed: both contribute to the
/// compile set. A back-edge to a module still on the stack is a cycle and
/// aborts the walk; a reference to an unregistered module does the same.
pub(crate) struct ClosureWalker<'a> {
    graph: &'a ModuleGraph,
    stack: Vec<String>,
    states: HashMap<String, VisitState>,
    closure: BTreeSet<String>,
}

impl<'a> ClosureWalker<'a> {
    pub(crate) fn new(graph: &'a ModuleGraph) -> Self {
        Self {
            graph,
            stack: Vec::new(),
            states: HashMap::new(),
            closure: BTreeSet::new(),
        }
    }

    /// Visit `name` and everything reachable from it.
    ///
    /// `requested_by` names the module or target whose dependency list led
    /// here, so unknown references can be attributed.
    pub(crate) fn walk(&mut self, name: &str, requested_by: &str) -> Result<(), ResolutionError> {
        match self.states.get(name) {
            Some(VisitState::Visited) => return Ok(()),
            Some(VisitState::Visiting) => {
                let idx = self
                    .stack
                    .iter()
                    .position(|n| n == name)
                    .unwrap_or_else(|| {
                        debug_assert!(false, "visiting node must be on the stack");
                        0
                    });
                let mut cycle: Vec<String> = self.stack.iter().skip(idx).cloned().collect();
                cycle.push(name.to_owned());
                return Err(ResolutionError::CyclicDependency {
                    cycle: canonicalize_cycle(cycle),
                });
            }
            None => {
                self.states.insert(name.to_owned(), VisitState::Visiting);
            }
        }

        let graph = self.graph;
        let Some(module) = graph.module(name) else {
            return Err(ResolutionError::UnknownModule {
                module: name.to_owned(),
                requested_by: requested_by.to_owned(),
            });
        };

        self.stack.push(name.to_owned());
        for dep in module.dependencies() {
            self.walk(dep, name)?;
        }
        self.stack.pop();

        self.states.insert(name.to_owned(), VisitState::Visited);
        self.closure.insert(name.to_owned());
        Ok(())
    }

    pub(crate) fn into_closure(self) -> BTreeSet<String> {
        self.closure
    }
}

/// Rotate a cycle so the lexically smallest module starts it.
///
/// The walker discovers the same loop at different entry points depending on
/// traversal order; canonicalising keeps the reported path stable.
fn canonicalize_cycle(mut cycle: Vec<String>) -> Vec<String> {
    if cycle.len() < 2 {
        return cycle;
    }
    let len = cycle.len() - 1;
    let start = cycle
        .iter()
        .take(len)
        .enumerate()
        .min_by(|(_, a), (_, b)| a.cmp(b))
        .map_or(0, |(idx, _)| idx);
    let (prefix, suffix) = cycle.split_at_mut(len);
    prefix.rotate_left(start);
    if let (Some(first), Some(slot)) = (prefix.first().cloned(), suffix.first_mut()) {
        slot.clone_from(&first);
    }
    cycle
}
