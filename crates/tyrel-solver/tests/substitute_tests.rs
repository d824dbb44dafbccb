use super::*;
use crate::fixtures::{Menagerie, in_, inv, out, star};
use tyrel_types::{TypeConstructor, TypeParameter, Variance};
use std::sync::Arc;

/// A lone parameter, plus a substitution mapping it to `replacement`.
fn parameter_and_substitution(
    variance_at_use: TypeProjection,
) -> (Arc<TypeParameter>, TypeSubstitution) {
    let mut builder = TypeConstructor::class("Wrap");
    let parameter = builder.parameter("P", Variance::Invariant);
    let wrap = builder.build();
    let applied = Ty::class(&wrap, [variance_at_use]).expect_rigid().clone();
    (parameter, TypeSubstitution::for_type(&applied))
}

#[test]
fn test_for_type_zips_parameters_with_arguments() {
    let zoo = Menagerie::new();
    let applied = zoo.cell_of(inv(zoo.dog())).expect_rigid().clone();
    let substitution = TypeSubstitution::for_type(&applied);
    assert!(!substitution.is_empty());

    let parameter = &zoo.cell.parameters()[0];
    let substituted = substitution.substitute(&Ty::parameter(parameter));
    assert_eq!(substituted, zoo.dog());
}

#[test]
fn test_bare_parameter_keeps_use_site_nullability() {
    let zoo = Menagerie::new();
    let (parameter, substitution) = parameter_and_substitution(inv(zoo.dog()));
    let substituted = substitution.substitute(&Ty::parameter(&parameter).make_nullable());
    assert_eq!(substituted, zoo.dog().make_nullable());
}

#[test]
fn test_nullable_replacement_stays_nullable() {
    let zoo = Menagerie::new();
    let (parameter, substitution) = parameter_and_substitution(inv(zoo.dog().make_nullable()));
    let substituted = substitution.substitute(&Ty::parameter(&parameter));
    assert_eq!(substituted, zoo.dog().make_nullable());
}

#[test]
fn test_untouched_types_are_unchanged() {
    let zoo = Menagerie::new();
    let (_, substitution) = parameter_and_substitution(inv(zoo.dog()));
    let unrelated = zoo.cell_of(inv(zoo.animal()));
    assert_eq!(substitution.substitute(&unrelated), unrelated);
}

#[test]
fn test_projection_variances_compose() {
    let zoo = Menagerie::new();

    // Invariant use site takes the replacement's projection.
    let (parameter, substitution) = parameter_and_substitution(out(zoo.dog()));
    let nested = zoo.cell_of(inv(Ty::parameter(&parameter)));
    assert_eq!(substitution.substitute(&nested), zoo.cell_of(out(zoo.dog())));

    // Projected use site absorbs an invariant replacement.
    let (parameter, substitution) = parameter_and_substitution(inv(zoo.dog()));
    let nested = zoo.cell_of(out(Ty::parameter(&parameter)));
    assert_eq!(substitution.substitute(&nested), zoo.cell_of(out(zoo.dog())));

    // Equal projections stay as they are.
    let (parameter, substitution) = parameter_and_substitution(in_(zoo.dog()));
    let nested = zoo.cell_of(in_(Ty::parameter(&parameter)));
    assert_eq!(substitution.substitute(&nested), zoo.cell_of(in_(zoo.dog())));
}

#[test]
fn test_conflicting_projections_degrade_to_error() {
    let zoo = Menagerie::new();
    let (parameter, substitution) = parameter_and_substitution(in_(zoo.dog()));
    let nested = zoo.cell_of(out(Ty::parameter(&parameter)));

    let substituted = substitution.substitute(&nested);
    let argument = substituted.expect_rigid().arguments()[0].clone();
    assert!(argument.ty().is_some_and(Ty::is_error));
}

#[test]
fn test_star_argument_substitutes_to_star() {
    let zoo = Menagerie::new();
    let (parameter, substitution) = parameter_and_substitution(star());
    let nested = zoo.cell_of(inv(Ty::parameter(&parameter)));
    assert_eq!(substitution.substitute(&nested), zoo.cell_of(star()));
}

#[test]
fn test_bare_parameter_against_star_approximates_to_top() {
    let (parameter, substitution) = parameter_and_substitution(star());
    let substituted = substitution.substitute(&Ty::parameter(&parameter));
    assert_eq!(substituted, Ty::nullable_top());
}

#[test]
fn test_empty_substitution_is_identity() {
    let zoo = Menagerie::new();
    let substitution = TypeSubstitution::empty();
    let ty = zoo.cell_of(out(zoo.dog()));
    assert!(substitution.substitute(&ty).ptr_eq(&ty));
}
