//! Checker façade and named preset configurations.
//!
//! A [`TypeChecker`] pairs a callback axiom set with the flexible-bridging
//! policy. It is immutable and freely shareable across threads: every query
//! configures a fresh single-query [`RelationChecker`], so concurrent calls
//! never contend.

use crate::callbacks::{DefaultCallbacks, ErrorTypesEqualToAnything, TypeCheckingCallbacks};
use crate::relate::RelationChecker;
use once_cell::sync::Lazy;
use std::sync::Arc;
use tracing::trace;
use tyrel_types::Ty;

/// Outcome of one relation query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelationVerdict {
    /// Whether the relation holds.
    pub related: bool,
    /// Whether the query tripped the recursion guard; a tripped query
    /// answers "not related" without being a real verdict.
    pub depth_exceeded: bool,
}

impl RelationVerdict {
    #[inline]
    pub fn is_related(self) -> bool {
        self.related
    }
}

/// Immutable checker configuration.
pub struct TypeChecker {
    callbacks: Arc<dyn TypeCheckingCallbacks>,
    flexible_bridging: bool,
}

impl TypeChecker {
    pub fn new(callbacks: Arc<dyn TypeCheckingCallbacks>) -> Self {
        Self {
            callbacks,
            flexible_bridging: true,
        }
    }

    /// Disable or enable bridging equivalence between flexible and rigid
    /// types (enabled by default).
    pub fn with_flexible_bridging(mut self, enabled: bool) -> Self {
        self.flexible_bridging = enabled;
        self
    }

    /// Whether `subtype` is a subtype of `supertype`.
    pub fn is_subtype_of(&self, subtype: &Ty, supertype: &Ty) -> bool {
        self.check_subtype(subtype, supertype).related
    }

    /// Whether the two types are structurally equal.
    pub fn equal_types(&self, a: &Ty, b: &Ty) -> bool {
        self.check_equal(a, b).related
    }

    /// Subtype query with the full verdict.
    pub fn check_subtype(&self, subtype: &Ty, supertype: &Ty) -> RelationVerdict {
        let mut relation = self.relation();
        let related = relation.is_subtype_of(subtype, supertype);
        trace!(%subtype, %supertype, related, "check_subtype");
        RelationVerdict {
            related,
            depth_exceeded: relation.depth_exceeded(),
        }
    }

    /// Equality query with the full verdict.
    ///
    /// The top-level comparison goes through the callbacks like every nested
    /// one, so axiom sets such as [`ErrorTypesEqualToAnything`] apply at the
    /// outermost level too.
    pub fn check_equal(&self, a: &Ty, b: &Ty) -> RelationVerdict {
        let mut relation = self.relation();
        let related = self.callbacks.assert_equal_types(a, b, &mut relation);
        trace!(type1 = %a, type2 = %b, related, "check_equal");
        RelationVerdict {
            related,
            depth_exceeded: relation.depth_exceeded(),
        }
    }

    fn relation(&self) -> RelationChecker<'_> {
        RelationChecker::new(self.callbacks.as_ref())
            .with_flexible_bridging(self.flexible_bridging)
    }
}

/// Default configuration: structural axioms, flexible bridging enabled,
/// error types tolerated on the subtype path only.
pub static DEFAULT: Lazy<TypeChecker> = Lazy::new(|| TypeChecker::new(Arc::new(DefaultCallbacks)));

/// Any comparison involving an error type is trivially equal.
pub static ERROR_TYPES_EQUAL_TO_ANYTHING: Lazy<TypeChecker> =
    Lazy::new(|| TypeChecker::new(Arc::new(ErrorTypesEqualToAnything)));

/// Platform ambiguity is never silently treated as safe: a flexible type is
/// unequal to every rigid type.
pub static FLEXIBLE_UNEQUAL_TO_INFLEXIBLE: Lazy<TypeChecker> = Lazy::new(|| {
    TypeChecker::new(Arc::new(DefaultCallbacks)).with_flexible_bridging(false)
});

#[cfg(test)]
#[path = "../tests/checker_tests.rs"]
mod tests;
