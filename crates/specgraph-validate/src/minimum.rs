//! Minimum-content check: a collection without bundles has nothing to deploy.

use specgraph_core::{SpecCollection, SpecKind, StructuralError};

/// Fail unless at least one bundle is defined.
pub fn check_bare_minimum(specs: &SpecCollection) -> Result<(), StructuralError> {
    if specs.specs(SpecKind::Bundle).is_empty() {
        return Err(StructuralError::NoBundles);
    }
    Ok(())
}
