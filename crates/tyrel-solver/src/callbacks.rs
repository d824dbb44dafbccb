//! Leaf-decision callbacks for the relation engine.
//!
//! The recursive procedure never decides a leaf comparison itself: equality
//! of nested argument types, constructor identity, nested subtyping,
//! capture admission, and the no-ancestor fallback all route through this
//! trait. Default methods delegate straight back into the engine, so a
//! policy overrides only the axioms it changes: a constraint-solving
//! caller, for instance, records constraints instead of deciding
//! immediately.

use crate::relate::RelationChecker;
use tyrel_types::{Ty, TypeConstructor, TypeProjection};

/// Axiom set customizing the engine's leaf decisions.
pub trait TypeCheckingCallbacks: Send + Sync {
    /// Decide equality of two nested types. Default: the engine's own
    /// structural equality.
    fn assert_equal_types(&self, a: &Ty, b: &Ty, relation: &mut RelationChecker<'_>) -> bool {
        relation.equal_types(a, b)
    }

    /// Decide whether two constructors count as the same nominal identity.
    /// Default: structural identity.
    fn assert_equal_constructors(&self, c1: &TypeConstructor, c2: &TypeConstructor) -> bool {
        c1 == c2
    }

    /// Decide a nested subtype relation. Default: the engine's own
    /// procedure.
    fn assert_subtype(
        &self,
        subtype: &Ty,
        supertype: &Ty,
        relation: &mut RelationChecker<'_>,
    ) -> bool {
        relation.is_subtype_of(subtype, supertype)
    }

    /// Decide whether an invariant slot of type `captured` may capture the
    /// projected argument `projection`. Default: accept; override to reject
    /// or to record capture bindings.
    fn capture(&self, captured: &Ty, projection: &TypeProjection) -> bool {
        let _ = (captured, projection);
        true
    }

    /// Verdict when the subtype's graph has no ancestor with the target's
    /// constructor. Default: the types are unrelated.
    fn no_corresponding_supertype(&self, subtype: &Ty, supertype: &Ty) -> bool {
        let _ = (subtype, supertype);
        false
    }
}

/// All-default axioms.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultCallbacks;

impl TypeCheckingCallbacks for DefaultCallbacks {}

/// Axioms under which any comparison involving an error type is trivially
/// equal, keeping one unresolved symbol from cascading into unrelated
/// diagnostics.
#[derive(Debug, Default, Clone, Copy)]
pub struct ErrorTypesEqualToAnything;

impl TypeCheckingCallbacks for ErrorTypesEqualToAnything {
    fn assert_equal_types(&self, a: &Ty, b: &Ty, relation: &mut RelationChecker<'_>) -> bool {
        a.is_error() || b.is_error() || relation.equal_types(a, b)
    }
}
