//! # Reference Integrity
//!
//! Every name an app, bundle or lib points at must be defined in the kind
//! it points into. This is a one-hop existence check; reachability and
//! cycles are the cycle detector's concern.
//!
//! - apps: `depends` and `conditional_links`, for `apps`, `libs` and
//!   `services`.
//! - bundles: the app list.
//! - libs: `depends.libs`.
//!
//! Failures are returned as [`ReferenceError`] values naming the
//! referrer, the relation and the missing name.

use specgraph_core::{App, Bundle, Lib, ReferenceError, SpecGraph, SpecKind};

/// Kinds an app may reference, in check order.
const APP_RELATIONS: [SpecKind; 3] = [SpecKind::App, SpecKind::Lib, SpecKind::Service];

/// Check every reference in the graph, stopping at the first dangling one.
pub fn check_references(graph: &SpecGraph) -> Result<(), ReferenceError> {
    for app in graph.apps.values() {
        check_app(graph, app)?;
    }
    for bundle in graph.bundles.values() {
        check_bundle(graph, bundle)?;
    }
    for lib in graph.libs.values() {
        check_lib(graph, lib)?;
    }
    tracing::debug!("all spec references resolve");
    Ok(())
}

fn check_app(graph: &SpecGraph, app: &App) -> Result<(), ReferenceError> {
    for relation in APP_RELATIONS {
        let referenced = app
            .depends
            .names(relation)
            .iter()
            .chain(app.conditional_links.names(relation));
        for name in referenced {
            resolve(graph, SpecKind::App, &app.name, relation, name)?;
        }
    }
    Ok(())
}

fn check_bundle(graph: &SpecGraph, bundle: &Bundle) -> Result<(), ReferenceError> {
    for name in &bundle.apps {
        resolve(graph, SpecKind::Bundle, &bundle.name, SpecKind::App, name)?;
    }
    Ok(())
}

fn check_lib(graph: &SpecGraph, lib: &Lib) -> Result<(), ReferenceError> {
    for name in &lib.depends {
        resolve(graph, SpecKind::Lib, &lib.name, SpecKind::Lib, name)?;
    }
    Ok(())
}

fn resolve(
    graph: &SpecGraph,
    referrer_kind: SpecKind,
    referrer: &str,
    relation: SpecKind,
    name: &str,
) -> Result<(), ReferenceError> {
    if graph.contains(relation, name) {
        return Ok(());
    }
    Err(ReferenceError {
        referrer_kind,
        referrer: referrer.to_string(),
        relation,
        missing: name.to_string(),
    })
}
