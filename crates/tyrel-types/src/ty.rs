//! Fully-elaborated types and type arguments.
//!
//! [`Ty`] is a shared, immutable handle over [`TyKind`]: either a rigid type
//! (constructor + arguments + nullability) or a flexible type, a range
//! between two rigid bounds modeling platform-interop ambiguity. The sum
//! type keeps a flexible type from carrying meaningful constructor or
//! argument fields of its own, and the bounds are rigid by construction.

use crate::builtins;
use crate::constructor::{TypeConstructor, TypeParameter};
use crate::variance::Variance;
use smallvec::SmallVec;
use std::sync::Arc;
use tyrel_common::limits::ARGUMENT_LIST_INLINE;

/// Type-argument list; inline up to [`ARGUMENT_LIST_INLINE`] entries.
pub type ProjectionList = SmallVec<[TypeProjection; ARGUMENT_LIST_INLINE]>;

/// A type argument: a star (unbounded wildcard) or a type with use-site
/// variance.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum TypeProjection {
    Star,
    Argument { variance: Variance, ty: Ty },
}

impl TypeProjection {
    pub fn new(variance: Variance, ty: Ty) -> Self {
        Self::Argument { variance, ty }
    }

    /// Invariant use-site argument.
    pub fn invariant(ty: Ty) -> Self {
        Self::Argument {
            variance: Variance::Invariant,
            ty,
        }
    }

    pub fn is_star(&self) -> bool {
        matches!(self, Self::Star)
    }

    /// Use-site variance; `None` for a star.
    pub fn variance(&self) -> Option<Variance> {
        match self {
            Self::Star => None,
            Self::Argument { variance, .. } => Some(*variance),
        }
    }

    /// Projected type; `None` for a star.
    pub fn ty(&self) -> Option<&Ty> {
        match self {
            Self::Star => None,
            Self::Argument { ty, .. } => Some(ty),
        }
    }

    /// Whether this argument constrains the slot directionally: a star or a
    /// non-invariant use site.
    pub fn is_projected(&self) -> bool {
        match self {
            Self::Star => true,
            Self::Argument { variance, .. } => variance.is_projection(),
        }
    }
}

/// A rigid (non-flexible) type.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct RigidTy {
    constructor: TypeConstructor,
    arguments: ProjectionList,
    nullable: bool,
}

impl RigidTy {
    /// Builds an application of `constructor`.
    ///
    /// Panics if the argument count does not match the constructor's arity;
    /// a mismatch is an upstream elaboration bug, and reporting it here
    /// beats a spurious "not a subtype" verdict far from the cause.
    pub fn new(
        constructor: TypeConstructor,
        arguments: impl IntoIterator<Item = TypeProjection>,
        nullable: bool,
    ) -> Self {
        let arguments: ProjectionList = arguments.into_iter().collect();
        assert!(
            constructor.is_error() || arguments.len() == constructor.arity(),
            "constructor {} expects {} type argument(s), got {}",
            constructor.name(),
            constructor.arity(),
            arguments.len(),
        );
        Self {
            constructor,
            arguments,
            nullable,
        }
    }

    pub fn constructor(&self) -> &TypeConstructor {
        &self.constructor
    }

    pub fn arguments(&self) -> &[TypeProjection] {
        &self.arguments
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    pub fn is_error(&self) -> bool {
        self.constructor.is_error()
    }

    pub fn with_nullability(&self, nullable: bool) -> Self {
        Self {
            constructor: self.constructor.clone(),
            arguments: self.arguments.clone(),
            nullable,
        }
    }
}

/// The two shapes a type can take.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum TyKind {
    Rigid(RigidTy),
    /// Range between two rigid bounds, `lower..upper`.
    Flexible { lower: RigidTy, upper: RigidTy },
}

/// Shared immutable handle to a type.
///
/// Cloning is an `Arc` clone; [`Ty::ptr_eq`] is the identity fast path and
/// `PartialEq` is structural.
#[derive(Clone)]
pub struct Ty(Arc<TyKind>);

impl Ty {
    /// Non-nullable application of a class-like constructor.
    pub fn class(
        constructor: &TypeConstructor,
        arguments: impl IntoIterator<Item = TypeProjection>,
    ) -> Self {
        Self::from(RigidTy::new(constructor.clone(), arguments, false))
    }

    /// A type parameter used as a type.
    pub fn parameter(parameter: &Arc<TypeParameter>) -> Self {
        Self::from(RigidTy::new(parameter.type_constructor(), [], false))
    }

    /// A flexible type ranging between `lower` and `upper`.
    ///
    /// Panics if either bound is itself flexible; nested flexibility is an
    /// upstream invariant violation.
    pub fn flexible(lower: Ty, upper: Ty) -> Self {
        let take_rigid = |bound: &Ty, role: &str| match bound.kind() {
            TyKind::Rigid(rigid) => rigid.clone(),
            TyKind::Flexible { .. } => {
                panic!("{role} bound of a flexible type must be rigid, got {bound}")
            }
        };
        Self(Arc::new(TyKind::Flexible {
            lower: take_rigid(&lower, "lower"),
            upper: take_rigid(&upper, "upper"),
        }))
    }

    /// Fresh error type carrying a human-readable reason.
    pub fn error(reason: &str) -> Self {
        Self::from(RigidTy::new(TypeConstructor::error(reason), [], false))
    }

    /// The top type (implicit supertype of every class), non-nullable.
    pub fn top() -> Self {
        builtins::top()
    }

    /// The nullable top type, supertype of all types.
    pub fn nullable_top() -> Self {
        builtins::nullable_top()
    }

    /// The bottom type, subtype of every non-nullable type.
    pub fn bottom() -> Self {
        builtins::bottom()
    }

    /// The nullable bottom type (the type of a bare null value).
    pub fn nullable_bottom() -> Self {
        builtins::nullable_bottom()
    }

    pub fn kind(&self) -> &TyKind {
        &self.0
    }

    /// Identity comparison: same heap object.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub fn is_flexible(&self) -> bool {
        matches!(self.kind(), TyKind::Flexible { .. })
    }

    pub fn as_rigid(&self) -> Option<&RigidTy> {
        match self.kind() {
            TyKind::Rigid(rigid) => Some(rigid),
            TyKind::Flexible { .. } => None,
        }
    }

    /// The rigid view of this type; panics on a flexible type, whose own
    /// constructor and arguments are not meaningful.
    pub fn expect_rigid(&self) -> &RigidTy {
        self.as_rigid()
            .unwrap_or_else(|| panic!("expected a rigid type, got flexible {self}"))
    }

    /// Marked-nullable flag. A flexible type reports its lower bound's
    /// nullability.
    pub fn is_nullable(&self) -> bool {
        match self.kind() {
            TyKind::Rigid(rigid) => rigid.is_nullable(),
            TyKind::Flexible { lower, .. } => lower.is_nullable(),
        }
    }

    /// Unresolved-type marker. A flexible type is an error type if either
    /// bound is.
    pub fn is_error(&self) -> bool {
        match self.kind() {
            TyKind::Rigid(rigid) => rigid.is_error(),
            TyKind::Flexible { lower, upper } => lower.is_error() || upper.is_error(),
        }
    }

    /// Whether this is the bottom type (any nullability).
    pub fn is_bottom_type(&self) -> bool {
        matches!(self.kind(), TyKind::Rigid(rigid) if rigid.constructor().is_bottom())
    }

    /// Copy of this type with the given nullability. For a flexible type
    /// both bounds take the flag.
    pub fn with_nullability(&self, nullable: bool) -> Self {
        match self.kind() {
            TyKind::Rigid(rigid) => {
                if rigid.is_nullable() == nullable {
                    self.clone()
                } else {
                    Self::from(rigid.with_nullability(nullable))
                }
            }
            TyKind::Flexible { lower, upper } => {
                if lower.is_nullable() == nullable && upper.is_nullable() == nullable {
                    self.clone()
                } else {
                    Self(Arc::new(TyKind::Flexible {
                        lower: lower.with_nullability(nullable),
                        upper: upper.with_nullability(nullable),
                    }))
                }
            }
        }
    }

    pub fn make_nullable(&self) -> Self {
        self.with_nullability(true)
    }

    pub fn make_not_nullable(&self) -> Self {
        self.with_nullability(false)
    }

    /// Lower bound for a flexible type, the type itself otherwise.
    pub fn lower_bound(&self) -> Self {
        match self.kind() {
            TyKind::Rigid(_) => self.clone(),
            TyKind::Flexible { lower, .. } => Self::from(lower.clone()),
        }
    }

    /// Upper bound for a flexible type, the type itself otherwise.
    pub fn upper_bound(&self) -> Self {
        match self.kind() {
            TyKind::Rigid(_) => self.clone(),
            TyKind::Flexible { upper, .. } => Self::from(upper.clone()),
        }
    }

    /// The representative standing in for this type on the subtype side of a
    /// relation: a flexible type relates through its lower bound.
    pub fn subtype_representative(&self) -> Self {
        self.lower_bound()
    }

    /// The representative standing in for this type on the supertype side:
    /// a flexible type relates through its upper bound.
    pub fn supertype_representative(&self) -> Self {
        self.upper_bound()
    }
}

impl From<RigidTy> for Ty {
    fn from(rigid: RigidTy) -> Self {
        Self(Arc::new(TyKind::Rigid(rigid)))
    }
}

impl PartialEq for Ty {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.0 == other.0
    }
}

impl Eq for Ty {}

impl std::hash::Hash for Ty {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

#[cfg(test)]
#[path = "../tests/ty_tests.rs"]
mod tests;
