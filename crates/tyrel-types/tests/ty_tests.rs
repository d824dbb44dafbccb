use super::*;
use crate::{TypeConstructor, Variance};

fn animal() -> TypeConstructor {
    TypeConstructor::class("Animal").build()
}

fn cell() -> TypeConstructor {
    let mut builder = TypeConstructor::class("Cell");
    builder.parameter("T", Variance::Invariant);
    builder.build()
}

#[test]
fn test_identity_and_structural_equality() {
    let animal = animal();
    let a = Ty::class(&animal, []);
    let b = a.clone();
    let c = Ty::class(&animal, []);

    assert!(a.ptr_eq(&b));
    assert!(!a.ptr_eq(&c));
    assert_eq!(a, c);
}

#[test]
fn test_nullability_round_trip() {
    let a = Ty::class(&animal(), []);
    assert!(!a.is_nullable());

    let nullable = a.make_nullable();
    assert!(nullable.is_nullable());
    assert_ne!(a, nullable);
    assert_eq!(nullable.make_not_nullable(), a);

    // No-op nullability change keeps the same allocation.
    assert!(a.make_not_nullable().ptr_eq(&a));
}

#[test]
fn test_flexible_bounds_and_representatives() {
    let animal = animal();
    let lower = Ty::class(&animal, []);
    let upper = lower.make_nullable();
    let flexible = Ty::flexible(lower.clone(), upper.clone());

    assert!(flexible.is_flexible());
    assert_eq!(flexible.lower_bound(), lower);
    assert_eq!(flexible.upper_bound(), upper);
    assert_eq!(flexible.subtype_representative(), lower);
    assert_eq!(flexible.supertype_representative(), upper);
    // Nullability of a flexible type is its lower bound's.
    assert!(!flexible.is_nullable());
}

#[test]
#[should_panic(expected = "must be rigid")]
fn test_flexible_bound_must_be_rigid() {
    let a = Ty::class(&animal(), []);
    let inner = Ty::flexible(a.clone(), a.make_nullable());
    let _ = Ty::flexible(inner, a.make_nullable());
}

#[test]
#[should_panic(expected = "expects 1 type argument")]
fn test_arity_mismatch_panics() {
    let _ = Ty::class(&cell(), []);
}

#[test]
#[should_panic(expected = "expected a rigid type")]
fn test_expect_rigid_on_flexible_panics() {
    let a = Ty::class(&animal(), []);
    let flexible = Ty::flexible(a.clone(), a.make_nullable());
    let _ = flexible.expect_rigid();
}

#[test]
fn test_builtins_are_shared() {
    assert!(Ty::top().ptr_eq(&Ty::top()));
    assert!(Ty::bottom().is_bottom_type());
    assert!(Ty::nullable_bottom().is_bottom_type());
    assert!(Ty::nullable_top().is_nullable());
    assert_eq!(Ty::top().make_nullable(), Ty::nullable_top());
}

#[test]
fn test_error_types_are_distinct() {
    let a = Ty::error("unresolved: A");
    let b = Ty::error("unresolved: A");
    assert!(a.is_error());
    // Each error type gets a fresh constructor.
    assert_ne!(a, b);
}

#[test]
fn test_projection_accessors() {
    let dog = Ty::class(&animal(), []);
    let star = TypeProjection::Star;
    let out_dog = TypeProjection::new(Variance::Out, dog.clone());
    let plain = TypeProjection::invariant(dog.clone());

    assert!(star.is_star() && star.is_projected());
    assert_eq!(star.ty(), None);
    assert!(out_dog.is_projected());
    assert_eq!(out_dog.variance(), Some(Variance::Out));
    assert!(!plain.is_projected());
    assert_eq!(plain.ty(), Some(&dog));
}
