//! Effective projection of a type-argument slot.
//!
//! Declaration-site variance and use-site variance combine into a single
//! effective kind per slot. For a class `C<out T>`, `C<T>` and `C<out T>`
//! mean the same thing; opposing variances cancel to an unbounded slot.

use tyrel_types::{TypeParameter, TypeProjection, Variance};

/// The effective kind of one argument slot after combining declaration-site
/// and use-site variance.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EffectiveProjectionKind {
    In,
    Out,
    Invariant,
    /// Unconstrained: a star argument, or opposing variances that cancel.
    Star,
}

impl EffectiveProjectionKind {
    const fn from_variance(variance: Variance) -> Self {
        match variance {
            Variance::Invariant => Self::Invariant,
            Variance::In => Self::In,
            Variance::Out => Self::Out,
        }
    }
}

/// Combine declared and use-site variance of one argument slot.
///
/// ```text
/// out * out = out    in * out = *     inv * out = out
/// out * in  = *      in * in  = in    inv * in  = in
/// out * inv = out    in * inv = in    inv * inv = inv
/// ```
pub fn effective_projection_kind(
    parameter: &TypeParameter,
    argument: &TypeProjection,
) -> EffectiveProjectionKind {
    let Some(use_site) = argument.variance() else {
        return EffectiveProjectionKind::Star;
    };

    let mut declared = parameter.variance();
    let mut use_site = use_site;

    // Invariant absorbs into the other: after the swap, `use_site` is the
    // structurally significant variance (or invariant if both were).
    if use_site == Variance::Invariant {
        std::mem::swap(&mut declared, &mut use_site);
    }

    match (declared, use_site) {
        // C<in out X> and C<out in X> carry no information: C<*>
        (Variance::In, Variance::Out) | (Variance::Out, Variance::In) => {
            EffectiveProjectionKind::Star
        }
        // declared == use_site, or declared was invariant
        _ => EffectiveProjectionKind::from_variance(use_site),
    }
}

#[cfg(test)]
#[path = "../tests/projection_tests.rs"]
mod tests;
