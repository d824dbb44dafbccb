//! Corresponding-supertype location.
//!
//! Given a subtype and a target, walk the subtype's declared-supertype graph
//! (substituting type arguments along every inheritance edge) until a
//! supertype with the target's constructor is found. The walk explores all
//! paths: diamond inheritance can reach the same ancestor constructor more
//! than once, and a well-formed program must instantiate it identically on
//! every path; divergent instantiations are reported rather than silently
//! resolved by traversal order.

use crate::callbacks::{DefaultCallbacks, TypeCheckingCallbacks};
use crate::substitute::TypeSubstitution;
use smallvec::SmallVec;
use tracing::trace;
use tyrel_types::{Ty, TypeConstructor};

/// Find the supertype of `subtype` sharing `supertype`'s constructor, with
/// the default constructor-identity axiom.
pub fn find_corresponding_supertype(subtype: &Ty, supertype: &Ty) -> Option<Ty> {
    find_corresponding_supertype_with_callbacks(subtype, supertype, &DefaultCallbacks)
}

/// Find the supertype of `subtype` sharing `supertype`'s constructor.
///
/// Constructor identity goes through `callbacks.assert_equal_constructors`,
/// so axiom sets may bridge distinct constructors. Returns `None` when the
/// subtype's graph has no such ancestor. Flexible inputs are normalized to
/// their relation representatives (lower bound below, upper bound above).
pub fn find_corresponding_supertype_with_callbacks(
    subtype: &Ty,
    supertype: &Ty,
    callbacks: &dyn TypeCheckingCallbacks,
) -> Option<Ty> {
    let start = subtype.subtype_representative();
    let target = supertype.supertype_representative();
    let target_constructor = target.expect_rigid().constructor().clone();

    let mut found: SmallVec<[Ty; 2]> = SmallVec::new();
    collect_corresponding_supertypes(&start, &target_constructor, callbacks, &mut found);

    if found.len() > 1 {
        let divergent = found.iter().any(|candidate| *candidate != found[0]);
        debug_assert!(
            !divergent,
            "diverging supertype instantiations of {} for {}: {} vs {}",
            target_constructor.name(),
            start,
            found[0],
            found
                .iter()
                .find(|candidate| **candidate != found[0])
                .unwrap_or(&found[0]),
        );
    }

    trace!(
        subtype = %start,
        target = %target_constructor.name(),
        matches = found.len(),
        "find_corresponding_supertype"
    );
    found.into_iter().next()
}

/// Depth-first walk over the declared-supertype graph. Every match is
/// recorded; branches above a match are not explored further. Nullability
/// of an intermediate type propagates onto the results found above it.
fn collect_corresponding_supertypes(
    current: &Ty,
    target: &TypeConstructor,
    callbacks: &dyn TypeCheckingCallbacks,
    found: &mut SmallVec<[Ty; 2]>,
) {
    let current = current.subtype_representative();
    let rigid = current.expect_rigid();

    if callbacks.assert_equal_constructors(rigid.constructor(), target) {
        found.push(current.clone());
        return;
    }

    let substitution = TypeSubstitution::for_type(rigid);
    for declared in rigid.constructor().declared_supertypes() {
        let instantiated = substitution.substitute(declared);
        let before = found.len();
        collect_corresponding_supertypes(&instantiated, target, callbacks, found);
        if rigid.is_nullable() {
            for result in found.iter_mut().skip(before) {
                *result = result.make_nullable();
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/supertype_tests.rs"]
mod tests;
