//! Integer addition primitives
//!
//! A single pure operation over machine integers. Overflow wraps, matching
//! the two's complement semantics of the underlying type.

/// Returns the arithmetic sum of `a` and `b`.
///
/// Wraps around at the boundary of `i64` instead of panicking, so the
/// operation is total over the integer domain. Deterministic and free of
/// side effects.
#[must_use]
pub const fn add(a: i64, b: i64) -> i64 {
    a.wrapping_add(b)
}
