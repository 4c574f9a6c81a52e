//! Package handling classification.
//!
//! Sorts a package into [`Category::Standard`], [`Category::Special`] or
//! [`Category::Rejected`] from its dimensions (cm) and mass (kg). The rules
//! are pure and stateless; every public function is safe to call from any
//! thread.
//!
//! ```
//! use arm_classifier::{Category, classify};
//!
//! assert_eq!(classify(10, 10, 10, 10)?, Category::Standard);
//! assert_eq!(classify(150, 10, 10, 10)?, Category::Special);
//! assert_eq!(classify(150, 150, 150, 20)?, Category::Rejected);
//! # Ok::<(), arm_classifier::ClassifyError>(())
//! ```

#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod error;
pub mod rules;
pub mod types;

pub use error::{ClassifyError, Result};
pub use rules::{
    MAX_DIMENSION_CM, MAX_MASS_KG, MAX_VOLUME_CM3, is_bulky, is_heavy, validate, volume_cm3,
};
pub use types::{Category, ClassificationReport, Measurements, Package, PackageDimensions};

/// Classify a package from raw integer measurements.
///
/// Arguments are validated in order (width, height, length, mass) and the
/// first negative one is reported.
///
/// # Errors
///
/// Returns [`ClassifyError::InvalidArgument`] naming the first negative
/// argument.
pub fn classify(width: i64, height: i64, length: i64, mass: i64) -> Result<Category> {
    Package::new(width, height, length, mass).map(|package| package.category())
}

/// Same as [`classify`], returning the category label (`"STANDARD"`,
/// `"SPECIAL"` or `"REJECTED"`).
pub fn sort(width: i64, height: i64, length: i64, mass: i64) -> Result<&'static str> {
    classify(width, height, length, mass).map(Category::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn classify_matches_decision_table() {
        assert_eq!(classify(10, 10, 10, 10).ok(), Some(Category::Standard));
        assert_eq!(classify(10, 10, 10, 20).ok(), Some(Category::Special));
        assert_eq!(classify(150, 10, 10, 10).ok(), Some(Category::Special));
        assert_eq!(classify(150, 150, 150, 20).ok(), Some(Category::Rejected));
    }

    #[test]
    fn sort_returns_label() {
        assert_eq!(sort(10, 10, 10, 10).ok(), Some("STANDARD"));
        assert_eq!(sort(10, 150, 10, 10).ok(), Some("SPECIAL"));
        assert_eq!(sort(150, 150, 150, 20).ok(), Some("REJECTED"));
    }

    #[test]
    fn first_negative_argument_is_reported() {
        let err = classify(-1, -1, 10, -3).unwrap_err();
        assert_eq!(err.argument(), "width");

        let err = sort(10, 10, -5, -3).unwrap_err();
        assert_eq!(err.to_string(), "length must be greater than 0");
    }
}
