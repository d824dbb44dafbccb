//! Type-parameter substitution.
//!
//! Walking an inheritance edge instantiates the declared supertype over the
//! subtype's actual arguments: for `class SubCell<E> : Cell<E>`, relating
//! `SubCell<Dog>` to `Cell`-anything requires rewriting `Cell<E>` with
//! `E := Dog`. A [`TypeSubstitution`] is that parameter-to-argument map.

use rustc_hash::FxHashMap;
use tyrel_types::{ParamId, ProjectionList, RigidTy, Ty, TyKind, TypeProjection, Variance};

/// Immutable map from type parameters to the arguments replacing them.
#[derive(Debug, Default)]
pub struct TypeSubstitution {
    map: FxHashMap<ParamId, TypeProjection>,
}

impl TypeSubstitution {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The substitution implied by an application: the constructor's formal
    /// parameters map to the application's actual arguments.
    pub fn for_type(ty: &RigidTy) -> Self {
        let mut map = FxHashMap::default();
        for (parameter, argument) in ty.constructor().parameters().iter().zip(ty.arguments()) {
            map.insert(parameter.id(), argument.clone());
        }
        Self { map }
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Rewrite `ty`, replacing every parameter reference in the map.
    pub fn substitute(&self, ty: &Ty) -> Ty {
        if self.map.is_empty() {
            return ty.clone();
        }
        match ty.kind() {
            TyKind::Rigid(rigid) => self.substitute_rigid(rigid),
            TyKind::Flexible { lower, upper } => {
                // A parameter inside a bound may itself map to a flexible
                // argument; keep the bounds rigid by taking the matching
                // bound of the replacement.
                let lower = self.substitute_rigid(lower).lower_bound();
                let upper = self.substitute_rigid(upper).upper_bound();
                Ty::flexible(lower, upper)
            }
        }
    }

    fn substitute_rigid(&self, rigid: &RigidTy) -> Ty {
        if let Some(parameter) = rigid.constructor().as_parameter() {
            if let Some(replacement) = self.map.get(&parameter.id()) {
                return match replacement.ty() {
                    // A nullable use site stays nullable after substitution.
                    Some(ty) if rigid.is_nullable() => ty.make_nullable(),
                    Some(ty) => ty.clone(),
                    // A bare parameter position substituted with a star
                    // approximates to the unbounded upper bound.
                    None => Ty::nullable_top(),
                };
            }
            return Ty::from(rigid.clone());
        }

        let arguments: ProjectionList = rigid
            .arguments()
            .iter()
            .map(|argument| self.substitute_projection(argument))
            .collect();
        Ty::from(RigidTy::new(
            rigid.constructor().clone(),
            arguments,
            rigid.is_nullable(),
        ))
    }

    fn substitute_projection(&self, argument: &TypeProjection) -> TypeProjection {
        let TypeProjection::Argument { variance, ty } = argument else {
            return TypeProjection::Star;
        };

        let parameter = ty
            .as_rigid()
            .and_then(|rigid| rigid.constructor().as_parameter());
        if let Some(parameter) = parameter {
            if let Some(replacement) = self.map.get(&parameter.id()) {
                let TypeProjection::Argument {
                    variance: replacement_variance,
                    ty: replacement_ty,
                } = replacement
                else {
                    // A star argument stays a star under any use site.
                    return TypeProjection::Star;
                };
                let Some(combined) = combine_variance(*variance, *replacement_variance) else {
                    // Opposing projections compose to nothing usable; the
                    // slot degrades to an error-typed argument.
                    return TypeProjection::invariant(Ty::error(
                        "conflicting projection in substitution",
                    ));
                };
                let nullable = ty.is_nullable() || replacement_ty.is_nullable();
                return TypeProjection::new(combined, replacement_ty.with_nullability(nullable));
            }
        }

        TypeProjection::new(*variance, self.substitute(ty))
    }
}

/// Compose a use-site variance with the variance of the argument replacing
/// the parameter at that site. `None` marks an opposing-projection conflict.
fn combine_variance(use_site: Variance, replacement: Variance) -> Option<Variance> {
    match (use_site, replacement) {
        (Variance::Invariant, other) => Some(other),
        (other, Variance::Invariant) => Some(other),
        (a, b) if a == b => Some(a),
        _ => None,
    }
}

#[cfg(test)]
#[path = "../tests/substitute_tests.rs"]
mod tests;
