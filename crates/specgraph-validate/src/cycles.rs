//! # Cycle Detection
//!
//! Rejects circular dependencies in the app graph (`depends.apps` edges)
//! and, independently, in the lib graph (`depends.libs` edges).
//! Conditional links never form edges.
//!
//! ## Search
//!
//! A depth-first search is started from every name of the kind, with the
//! start name as the initial upstream chain. Following an edge into a name
//! already on the upstream chain is a cycle. The chain is per branch:
//! sibling branches never see each other's nodes, so a diamond is not a
//! cycle and the reported chain is the exact path that closed the loop.
//!
//! The walk uses an explicit frame stack, so its depth is not bounded by
//! the thread stack. Nodes whose reachable subgraph was fully explored
//! without a cycle are remembered for the rest of the pass and not entered
//! again; a cycle reachable from such a node would already have failed the
//! pass, so this never changes which error is reported.

use std::collections::HashSet;

use specgraph_core::{CycleError, SpecGraph, SpecKind};

/// Kinds whose `depends` edges form a graph, in check order.
const GRAPH_KINDS: [SpecKind; 2] = [SpecKind::App, SpecKind::Lib];

/// Check the app graph, then the lib graph.
pub fn check_cycle_free(graph: &SpecGraph) -> Result<(), CycleError> {
    for kind in GRAPH_KINDS {
        check_kind(graph, kind)?;
    }
    Ok(())
}

/// Check one kind's dependency graph for cycles, starting a search from
/// every name in sorted order.
pub fn check_kind(graph: &SpecGraph, kind: SpecKind) -> Result<(), CycleError> {
    let mut acyclic: HashSet<&str> = HashSet::new();
    let names = graph.names(kind);
    for entry in names.iter().copied() {
        search(graph, kind, entry, &mut acyclic)?;
    }
    tracing::debug!(kind = %kind, nodes = names.len(), "dependency graph is acyclic");
    Ok(())
}

struct Frame<'g> {
    name: &'g str,
    edges: &'g [String],
    next: usize,
}

impl<'g> Frame<'g> {
    fn new(graph: &'g SpecGraph, kind: SpecKind, name: &'g str) -> Self {
        Self {
            name,
            // Undefined names are leaves; reference checks reject them first.
            edges: graph.depends_edges(kind, name).unwrap_or(&[]),
            next: 0,
        }
    }
}

fn search<'g>(
    graph: &'g SpecGraph,
    kind: SpecKind,
    entry: &'g str,
    acyclic: &mut HashSet<&'g str>,
) -> Result<(), CycleError> {
    if acyclic.contains(entry) {
        return Ok(());
    }

    let mut upstream: Vec<&'g str> = vec![entry];
    let mut on_path: HashSet<&'g str> = HashSet::from([entry]);
    let mut stack = vec![Frame::new(graph, kind, entry)];

    while let Some(frame) = stack.last_mut() {
        let edges = frame.edges;
        let index = frame.next;
        frame.next += 1;

        let Some(dependent) = edges.get(index) else {
            if let Some(done) = stack.pop() {
                upstream.pop();
                on_path.remove(done.name);
                acyclic.insert(done.name);
            }
            continue;
        };
        let dependent = dependent.as_str();

        if on_path.contains(dependent) {
            let mut chain: Vec<String> = upstream.iter().map(|s| s.to_string()).collect();
            chain.push(dependent.to_string());
            return Err(CycleError {
                kind,
                entry: entry.to_string(),
                chain,
            });
        }
        if acyclic.contains(dependent) {
            continue;
        }

        upstream.push(dependent);
        on_path.insert(dependent);
        stack.push(Frame::new(graph, kind, dependent));
    }
    Ok(())
}
