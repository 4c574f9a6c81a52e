//! Validation and the two predicates the decision table is built on.
//!
//! Thresholds are inclusive: a package reaching a limit exactly counts as
//! over it.

use crate::error::{ClassifyError, Result};

/// Any single dimension at or above this (cm) makes a package bulky.
pub const MAX_DIMENSION_CM: u64 = 150;

/// Volume at or above this (cm^3) makes a package bulky.
pub const MAX_VOLUME_CM3: u64 = 1_000_000;

/// Mass at or above this (kg) makes a package heavy.
pub const MAX_MASS_KG: u64 = 20;

/// Check that a named measurement is non-negative.
///
/// Zero is accepted despite the message wording.
///
/// # Errors
///
/// Returns [`ClassifyError::InvalidArgument`] carrying `argument` when
/// `value` is negative.
pub fn validate(argument: &'static str, value: i64) -> Result<u64> {
    u64::try_from(value).map_err(|_| {
        tracing::debug!(argument, value, "rejecting negative measurement");
        ClassifyError::InvalidArgument { argument }
    })
}

/// Volume in cubic centimeters, saturating at `u64::MAX`.
pub fn volume_cm3(width: u64, height: u64, length: u64) -> u64 {
    width.saturating_mul(height).saturating_mul(length)
}

/// Whether a package is bulky by dimension or by volume.
pub fn is_bulky(width: u64, height: u64, length: u64) -> bool {
    width >= MAX_DIMENSION_CM
        || height >= MAX_DIMENSION_CM
        || length >= MAX_DIMENSION_CM
        || volume_cm3(width, height, length) >= MAX_VOLUME_CM3
}

/// Whether a package is heavy.
pub fn is_heavy(mass: u64) -> bool {
    mass >= MAX_MASS_KG
}
