//! Subtyping and type-equality decision procedure.
//!
//! Given two fully-elaborated [`tyrel_types::Ty`] values, this crate decides
//! their subtype/equality relationship, handling declaration-site and
//! use-site variance, star projections, type-argument capture, nullability,
//! and flexible (platform) type bounds.
//!
//! The engine is purely functional over the immutable type model: no locks,
//! no caches, safe for unlimited concurrent use. Leaf decisions route
//! through a pluggable [`TypeCheckingCallbacks`] axiom set; three named
//! preset checkers cover the common configurations:
//!
//! - [`checker::DEFAULT`]
//! - [`checker::ERROR_TYPES_EQUAL_TO_ANYTHING`]
//! - [`checker::FLEXIBLE_UNEQUAL_TO_INFLEXIBLE`]

pub mod callbacks;
pub mod checker;
pub mod projection;
pub mod recursion;
mod relate;
mod substitute;
mod supertypes;

pub use callbacks::{DefaultCallbacks, ErrorTypesEqualToAnything, TypeCheckingCallbacks};
pub use checker::{RelationVerdict, TypeChecker};
pub use projection::{EffectiveProjectionKind, effective_projection_kind};
pub use recursion::{RecursionGuard, RecursionProfile, RecursionResult};
pub use relate::RelationChecker;
pub use substitute::TypeSubstitution;
pub use supertypes::{find_corresponding_supertype, find_corresponding_supertype_with_callbacks};

// Shared test fixtures (class hierarchies the relation tests run against).
#[cfg(test)]
#[path = "../tests/fixtures.rs"]
pub(crate) mod fixtures;

// Test modules: most are loaded by their source files via
// #[path = "../tests/..."] declarations. Only modules that exercise the
// engine across source-file boundaries are included here.
#[cfg(test)]
#[path = "../tests/subtype_tests.rs"]
mod subtype_tests;
#[cfg(test)]
#[path = "../tests/equality_tests.rs"]
mod equality_tests;
#[cfg(test)]
#[path = "../tests/flexible_tests.rs"]
mod flexible_tests;
#[cfg(test)]
#[path = "../tests/capture_tests.rs"]
mod capture_tests;
#[cfg(test)]
#[path = "../tests/concurrency_tests.rs"]
mod concurrency_tests;
