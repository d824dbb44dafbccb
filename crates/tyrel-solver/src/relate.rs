//! The type-relation engine: structural equality and subtyping.
//!
//! A [`RelationChecker`] is a single-query engine: it holds the immutable
//! callback axioms, the flexible-bridging policy, and a recursion guard, and
//! nothing else; all remaining state is the call stack. Construction is
//! cheap; the façade builds a fresh one per query.
//!
//! The two entry points, [`equal_types`](RelationChecker::equal_types) and
//! [`is_subtype_of`](RelationChecker::is_subtype_of), are mutually recursive
//! through the callback layer: leaf decisions route through the callbacks,
//! whose defaults delegate back into the engine.

use crate::callbacks::TypeCheckingCallbacks;
use crate::projection::effective_projection_kind;
use crate::recursion::{RecursionGuard, RecursionProfile, RecursionResult};
use crate::supertypes::find_corresponding_supertype_with_callbacks;
use tyrel_common::limits::{STACK_GROWTH, STACK_RED_ZONE};
use tyrel_types::{Ty, TypeParameter, TypeProjection, Variance};

/// Single-query relation engine.
pub struct RelationChecker<'a> {
    callbacks: &'a dyn TypeCheckingCallbacks,
    flexible_bridging: bool,
    guard: RecursionGuard,
}

impl<'a> RelationChecker<'a> {
    pub fn new(callbacks: &'a dyn TypeCheckingCallbacks) -> Self {
        Self {
            callbacks,
            flexible_bridging: true,
            guard: RecursionGuard::new(RecursionProfile::Relation),
        }
    }

    /// Disable or enable bridging equivalence between flexible and rigid
    /// types (enabled by default).
    pub fn with_flexible_bridging(mut self, enabled: bool) -> Self {
        self.flexible_bridging = enabled;
        self
    }

    /// Override the recursion limits (for tests and adversarial callers).
    pub fn with_recursion_profile(mut self, profile: RecursionProfile) -> Self {
        self.guard = RecursionGuard::new(profile);
        self
    }

    /// Whether the last query tripped the depth or iteration limit; a
    /// tripped query answered `false` ("too complex"), not a real verdict.
    pub fn depth_exceeded(&self) -> bool {
        self.guard.is_exceeded()
    }

    /// Structural type equality.
    pub fn equal_types(&mut self, type1: &Ty, type2: &Ty) -> bool {
        if type1.ptr_eq(type2) {
            return true;
        }
        if let RecursionResult::LimitExceeded = self.guard.enter() {
            return false;
        }
        let result = stacker::maybe_grow(STACK_RED_ZONE, STACK_GROWTH, || {
            self.equal_types_inner(type1, type2)
        });
        self.guard.leave();
        result
    }

    fn equal_types_inner(&mut self, type1: &Ty, type2: &Ty) -> bool {
        if type1.is_flexible() {
            if type2.is_flexible() {
                // Two ranges are equal when each lies within the other;
                // error bounds poison the comparison.
                return !type1.is_error()
                    && !type2.is_error()
                    && self.is_subtype_of(type1, type2)
                    && self.is_subtype_of(type2, type1);
            }
            return self.heterogeneous_equivalence(type2, type1);
        }
        if type2.is_flexible() {
            return self.heterogeneous_equivalence(type1, type2);
        }

        if type1.is_nullable() != type2.is_nullable() {
            return false;
        }
        if type1.is_nullable() {
            // Peel nullability once; it is not re-checked below this level.
            let callbacks = self.callbacks;
            return callbacks.assert_equal_types(
                &type1.make_not_nullable(),
                &type2.make_not_nullable(),
                self,
            );
        }

        let rigid1 = type1.expect_rigid();
        let rigid2 = type2.expect_rigid();
        if !self
            .callbacks
            .assert_equal_constructors(rigid1.constructor(), rigid2.constructor())
        {
            return false;
        }

        let arguments1 = rigid1.arguments();
        let arguments2 = rigid2.arguments();
        if arguments1.len() != arguments2.len() {
            return false;
        }

        for (i, (argument1, argument2)) in arguments1.iter().zip(arguments2).enumerate() {
            if argument1.is_star() && argument2.is_star() {
                continue;
            }

            let parameter = &rigid1.constructor().parameters()[i];
            if self.capture_for_equality(argument1, argument2, parameter) {
                continue;
            }

            if effective_projection_kind(parameter, argument1)
                != effective_projection_kind(parameter, argument2)
            {
                return false;
            }
            if let (Some(ty1), Some(ty2)) = (argument1.ty(), argument2.ty()) {
                let callbacks = self.callbacks;
                if !callbacks.assert_equal_types(ty1, ty2, self) {
                    return false;
                }
            }
            // One side is an unbounded star whose effective kind matched the
            // other's collapsed kind: nothing further to compare.
        }
        true
    }

    /// Subtype relation.
    pub fn is_subtype_of(&mut self, subtype: &Ty, supertype: &Ty) -> bool {
        if let RecursionResult::LimitExceeded = self.guard.enter() {
            return false;
        }
        let result = stacker::maybe_grow(STACK_RED_ZONE, STACK_GROWTH, || {
            self.is_subtype_of_inner(subtype, supertype)
        });
        self.guard.leave();
        result
    }

    fn is_subtype_of_inner(&mut self, subtype: &Ty, supertype: &Ty) -> bool {
        // Fast path: identical up to nullability, where the relation really
        // is just the nullability rule.
        if let (Some(sub), Some(sup)) = (subtype.as_rigid(), supertype.as_rigid()) {
            if sub.constructor() == sup.constructor() && sub.arguments() == sup.arguments() {
                return !sub.is_nullable() || sup.is_nullable();
            }
        }

        // Flexible types relate through their representatives: the lower
        // bound below, the upper bound above.
        let sub_representative = subtype.subtype_representative();
        let super_representative = supertype.supertype_representative();
        if !sub_representative.ptr_eq(subtype) || !super_representative.ptr_eq(supertype) {
            return self.is_subtype_of(&sub_representative, &super_representative);
        }

        self.is_subtype_for_representatives(subtype, supertype)
    }

    fn is_subtype_for_representatives(&mut self, subtype: &Ty, supertype: &Ty) -> bool {
        if subtype.is_error() || supertype.is_error() {
            // Unresolved types must not cascade extra diagnostics.
            return true;
        }
        if !supertype.is_nullable() && subtype.is_nullable() {
            return false;
        }

        let subtype = subtype.make_not_nullable();
        let supertype = supertype.make_not_nullable();

        if subtype.is_bottom_type() {
            return true;
        }

        let callbacks = self.callbacks;
        let Some(closest) =
            find_corresponding_supertype_with_callbacks(&subtype, &supertype, callbacks)
        else {
            return callbacks.no_corresponding_supertype(&subtype, &supertype);
        };
        if closest.is_nullable() && !supertype.is_nullable() {
            return false;
        }

        self.check_subtype_for_same_constructor(&closest, &supertype)
    }

    /// Per-argument check once both sides share a constructor.
    fn check_subtype_for_same_constructor(&mut self, subtype: &Ty, supertype: &Ty) -> bool {
        let sub = subtype.expect_rigid();
        let sup = supertype.expect_rigid();

        let sub_arguments = sub.arguments();
        let super_arguments = sup.arguments();
        if sub_arguments.len() != super_arguments.len() {
            return false;
        }

        for (i, parameter) in sub.constructor().parameters().iter().enumerate() {
            let sub_argument = &sub_arguments[i];
            let super_argument = &super_arguments[i];

            if super_argument.is_star() {
                continue;
            }
            if self.capture_for_subtyping(sub_argument, super_argument, parameter) {
                continue;
            }

            let argument_is_error = sub_argument.ty().is_some_and(Ty::is_error)
                || super_argument.ty().is_some_and(Ty::is_error);
            if !argument_is_error
                && parameter.variance() == Variance::Invariant
                && sub_argument.variance() == Some(Variance::Invariant)
                && super_argument.variance() == Some(Variance::Invariant)
            {
                // Invariant slot used invariantly on both sides: full
                // equality, not mere subtyping.
                let (Some(sub_ty), Some(super_ty)) = (sub_argument.ty(), super_argument.ty())
                else {
                    unreachable!("invariant use sites carry types");
                };
                let callbacks = self.callbacks;
                if !callbacks.assert_equal_types(sub_ty, super_ty, self) {
                    return false;
                }
                continue;
            }

            let sub_out = out_component(parameter, sub_argument);
            let super_out = out_component(parameter, super_argument);
            let callbacks = self.callbacks;
            if !callbacks.assert_subtype(&sub_out, &super_out, self) {
                return false;
            }

            if super_argument.variance() == Some(Variance::Out) {
                debug_assert!(
                    in_component(parameter, super_argument).is_bottom_type(),
                    "in-component of out-projected {super_argument} must be bottom",
                );
            } else {
                // Contravariant direction: the supertype's in-component must
                // flow into the subtype's.
                let super_in = in_component(parameter, super_argument);
                let sub_in = in_component(parameter, sub_argument);
                let callbacks = self.callbacks;
                if !callbacks.assert_subtype(&super_in, &sub_in, self) {
                    return false;
                }
            }
        }
        true
    }

    /// Capture on the equality path: the second argument's invariant slot
    /// captures the first argument's projection.
    fn capture_for_equality(
        &self,
        argument1: &TypeProjection,
        argument2: &TypeProjection,
        parameter: &TypeParameter,
    ) -> bool {
        if parameter.variance() != Variance::Invariant {
            return false;
        }
        if !argument1.is_projected() || argument2.is_projected() {
            return false;
        }
        let Some(captured) = argument2.ty() else {
            return false;
        };
        self.callbacks.capture(captured, argument1)
    }

    /// Capture on the subtyping path: the supertype's invariant slot
    /// captures the subtype's projection.
    fn capture_for_subtyping(
        &self,
        sub_argument: &TypeProjection,
        super_argument: &TypeProjection,
        parameter: &TypeParameter,
    ) -> bool {
        if parameter.variance() != Variance::Invariant {
            return false;
        }
        if !sub_argument.is_projected() || super_argument.is_projected() {
            return false;
        }
        let Some(captured) = super_argument.ty() else {
            return false;
        };
        self.callbacks.capture(captured, sub_argument)
    }

    /// Equivalence of a rigid type with a flexible one: the rigid type must
    /// lie between the flexible type's bounds.
    fn heterogeneous_equivalence(&mut self, rigid: &Ty, flexible: &Ty) -> bool {
        debug_assert!(
            !rigid.is_flexible(),
            "heterogeneous equivalence expects a rigid type, got {rigid}"
        );
        if !self.flexible_bridging {
            return false;
        }
        let lower = flexible.lower_bound();
        let upper = flexible.upper_bound();
        self.is_subtype_of(&lower, rigid) && self.is_subtype_of(rigid, &upper)
    }
}

/// Upper ("out") component of an argument slot: the argument type, unless
/// the slot is in-projected by declaration or use site; an in-projected
/// slot gives no upper information, so the component is the nullable top.
/// An unbounded star behaves the same way.
fn out_component(parameter: &TypeParameter, argument: &TypeProjection) -> Ty {
    let in_projected =
        parameter.variance() == Variance::In || argument.variance() == Some(Variance::In);
    match argument.ty() {
        Some(ty) if !in_projected => ty.clone(),
        _ => Ty::nullable_top(),
    }
}

/// Lower ("in") component of an argument slot: the argument type, unless the
/// slot is out-projected by declaration or use site; then the component is
/// the bottom type.
fn in_component(parameter: &TypeParameter, argument: &TypeProjection) -> Ty {
    let out_projected =
        parameter.variance() == Variance::Out || argument.variance() == Some(Variance::Out);
    match argument.ty() {
        Some(ty) if !out_projected => ty.clone(),
        _ => Ty::bottom(),
    }
}
