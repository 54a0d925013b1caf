/// Character classification used by the scanner.
///
/// Pure predicates over a single character. They never fail and have no side
/// effects; the scanner's transition table is written in terms of them.
pub mod classify;
/// Numeric conversion helpers.
///
/// This module provides safe functions for turning digit runs into `f64`
/// values without risking silent data loss or rounding errors.
///
/// All functions return a `Result`, which is `Ok` if the conversion is lossless
/// and valid, or an error if the value is out of range.
pub mod num;
