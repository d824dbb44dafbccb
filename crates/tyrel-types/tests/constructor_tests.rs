use super::*;
use crate::{Ty, TypeProjection, Variance};

#[test]
fn test_constructor_identity() {
    let a = TypeConstructor::class("Animal").build();
    let b = TypeConstructor::class("Animal").build();
    assert_eq!(a, a.clone());
    // Two declarations with the same name are distinct constructors.
    assert_ne!(a, b);
}

#[test]
fn test_default_supertype_is_top() {
    let animal = TypeConstructor::class("Animal").build();
    assert_eq!(animal.declared_supertypes().len(), 1);
    let top = animal.declared_supertypes()[0].expect_rigid();
    assert!(top.constructor().is_top());
}

#[test]
fn test_parameters_are_ordered() {
    let mut builder = TypeConstructor::class("Pair");
    let first = builder.parameter("A", Variance::Out);
    let second = builder.parameter("B", Variance::In);
    let pair = builder.build();

    assert_eq!(pair.arity(), 2);
    assert_eq!(first.index(), 0);
    assert_eq!(second.index(), 1);
    assert_eq!(pair.parameters()[0].variance(), Variance::Out);
    assert_eq!(pair.parameters()[1].variance(), Variance::In);
}

#[test]
fn test_parameter_type_constructor_is_stable() {
    let mut builder = TypeConstructor::class("Cell");
    let t = builder.parameter("T", Variance::Invariant);
    let _cell = builder.build();

    assert_eq!(t.type_constructor(), t.type_constructor());
    assert_eq!(t.type_constructor().as_parameter().map(|p| p.id()), Some(t.id()));
}

#[test]
fn test_declared_supertype_references_own_parameter() {
    let mut base = TypeConstructor::class("Base");
    let t = base.parameter("T", Variance::Invariant);
    let base = base.build();

    let mut derived = TypeConstructor::class("Derived");
    let e = derived.parameter("E", Variance::Invariant);
    derived.supertype(Ty::class(&base, [TypeProjection::invariant(Ty::parameter(&e))]));
    let derived = derived.build();

    let supertype = derived.declared_supertypes()[0].expect_rigid();
    assert_eq!(supertype.constructor(), &base);
    let argument = supertype.arguments()[0].ty().unwrap().expect_rigid();
    assert_eq!(argument.constructor().as_parameter().map(|p| p.id()), Some(e.id()));
    assert_ne!(t.id(), e.id());
}

#[test]
fn test_error_constructor() {
    let error = TypeConstructor::error("unresolved reference: Foo");
    assert!(error.is_error());
    assert!(error.declared_supertypes().is_empty());
}
