//! Type model for the tyrel type-relation engine.
//!
//! This crate owns the immutable representation the relation engine
//! traverses:
//!
//! - [`TypeConstructor`]: nominal identity of a class-like declaration,
//!   carrying its formal [`TypeParameter`]s and declared supertypes
//! - [`TypeProjection`]: a type argument with use-site variance, or a star
//! - [`Ty`]: a fully-elaborated type: rigid (constructor + arguments +
//!   nullability) or flexible (a range between two rigid bounds)
//!
//! Everything here is produced by an upstream elaboration phase and treated
//! as read-only afterwards; all handles are cheap `Arc` clones and safe to
//! share across threads.

mod builtins;
mod constructor;
mod format;
mod ty;
mod variance;

pub use constructor::{
    ClassBuilder, ConstructorId, ConstructorKind, ParamId, TypeConstructor, TypeParameter,
};
pub use ty::{ProjectionList, RigidTy, Ty, TyKind, TypeProjection};
pub use variance::Variance;
