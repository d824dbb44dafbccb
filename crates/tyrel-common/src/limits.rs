//! Centralized limits and thresholds for the relation engine.
//!
//! Keeping these in one place prevents duplicate definitions with
//! inconsistent values and documents the rationale for each limit.

/// Maximum recursion depth for a single relation query.
///
/// Subtype and equality checks recurse through type-argument nesting and the
/// supertype graph. Both are small (tens of levels) for real programs; a
/// query that reaches this depth is either adversarial or malformed, and the
/// engine answers "not related" with a `depth_exceeded` marker instead of
/// overflowing the stack.
pub const MAX_RELATION_DEPTH: u32 = 100;

/// Maximum total recursive steps for a single relation query.
///
/// Bounds overall work on pathological inputs (e.g. a wide diamond lattice
/// crossed with deep generic nesting) where no single branch trips the depth
/// limit.
pub const MAX_RELATION_ITERATIONS: u32 = 100_000;

/// Inline capacity for type-argument lists.
///
/// Argument lists are backed by `SmallVec` with this many inline slots; most
/// constructors in real code take fewer type parameters, so the common case
/// never heap-allocates.
pub const ARGUMENT_LIST_INLINE: usize = 4;

/// Red-zone/stack-growth parameters for the recursive engine.
///
/// When less than `STACK_RED_ZONE` bytes of stack remain, the engine grows
/// the stack by `STACK_GROWTH` before recursing further.
pub const STACK_RED_ZONE: usize = 64 * 1024;
pub const STACK_GROWTH: usize = 2 * 1024 * 1024;
