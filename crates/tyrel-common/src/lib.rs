//! Common types and utilities for the tyrel type-relation engine.
//!
//! This crate provides foundational pieces used across the tyrel crates:
//! - String interning (`Atom`, `Interner`)
//! - Centralized limits and thresholds

// String interning for name deduplication
pub mod interner;
pub use interner::{Atom, Interner, intern, resolve};

// Centralized limits and thresholds
pub mod limits;
