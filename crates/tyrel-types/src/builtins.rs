//! Built-in types: top and bottom.
//!
//! Shared, lazily-constructed singletons. The top type is the implicit
//! supertype every class chain ends at; the bottom type is the subtype of
//! everything (inhabited only through exceptional control flow). Their
//! nullable counterparts are kept as singletons too since the engine
//! reaches for them on every projected argument component.

use crate::constructor::{ConstructorKind, TypeConstructor};
use crate::ty::{RigidTy, Ty};
use once_cell::sync::Lazy;

static TOP_CONSTRUCTOR: Lazy<TypeConstructor> =
    Lazy::new(|| TypeConstructor::builtin(ConstructorKind::Top, "Top"));

static BOTTOM_CONSTRUCTOR: Lazy<TypeConstructor> =
    Lazy::new(|| TypeConstructor::builtin(ConstructorKind::Bottom, "Bottom"));

static TOP: Lazy<Ty> = Lazy::new(|| Ty::from(RigidTy::new(TOP_CONSTRUCTOR.clone(), [], false)));
static NULLABLE_TOP: Lazy<Ty> =
    Lazy::new(|| Ty::from(RigidTy::new(TOP_CONSTRUCTOR.clone(), [], true)));
static BOTTOM: Lazy<Ty> =
    Lazy::new(|| Ty::from(RigidTy::new(BOTTOM_CONSTRUCTOR.clone(), [], false)));
static NULLABLE_BOTTOM: Lazy<Ty> =
    Lazy::new(|| Ty::from(RigidTy::new(BOTTOM_CONSTRUCTOR.clone(), [], true)));

pub(crate) fn top() -> Ty {
    TOP.clone()
}

pub(crate) fn nullable_top() -> Ty {
    NULLABLE_TOP.clone()
}

pub(crate) fn bottom() -> Ty {
    BOTTOM.clone()
}

pub(crate) fn nullable_bottom() -> Ty {
    NULLABLE_BOTTOM.clone()
}
