/// Numeric canonicalization helpers.
///
/// This module provides the rounding and integer-coercion routine applied
/// to every intermediate and final result, plus the safe-integer bound it
/// relies on. Keeping this in one place guarantees that step snapshots and
/// final values always agree on how a number is written.
pub mod num;
