//! Package measurements, handling categories, and classification reports.

use serde::{Deserialize, Serialize};

use crate::error::{ClassifyError, Result};
use crate::rules::{is_bulky, is_heavy, validate, volume_cm3};

/// Handling category assigned to a package.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    /// Neither bulky nor heavy; handled normally.
    Standard,
    /// Bulky or heavy, but not both; needs special handling.
    Special,
    /// Both bulky and heavy; cannot be handled.
    Rejected,
}

impl Category {
    /// Decision table over the two predicates.
    pub fn from_flags(bulky: bool, heavy: bool) -> Self {
        match (bulky, heavy) {
            (true, true) => Self::Rejected,
            (true, false) | (false, true) => Self::Special,
            (false, false) => Self::Standard,
        }
    }

    /// Upper-case label used on the wire and in output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "STANDARD",
            Self::Special => "SPECIAL",
            Self::Rejected => "REJECTED",
        }
    }

    /// All categories, from least to most restrictive.
    pub fn all() -> [Self; 3] {
        [Self::Standard, Self::Special, Self::Rejected]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unvalidated measurements as a caller supplies them.
///
/// Deserializes from `{"width": .., "height": .., "length": .., "mass": ..}`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Measurements {
    pub width: i64,
    pub height: i64,
    pub length: i64,
    pub mass: i64,
}

/// Validated dimensions in centimeters.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
pub struct PackageDimensions {
    pub width: u64,
    pub height: u64,
    pub length: u64,
}

impl PackageDimensions {
    /// Volume in cubic centimeters, saturating on overflow.
    pub fn volume_cm3(&self) -> u64 {
        volume_cm3(self.width, self.height, self.length)
    }

    /// Whether any dimension or the volume reaches its limit.
    pub fn is_bulky(&self) -> bool {
        is_bulky(self.width, self.height, self.length)
    }
}

/// A package whose measurements have passed validation.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
pub struct Package {
    dimensions: PackageDimensions,
    mass: u64,
}

impl Package {
    /// Validate raw measurements in the order width, height, length, mass.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifyError::InvalidArgument`] for the first negative value.
    pub fn new(width: i64, height: i64, length: i64, mass: i64) -> Result<Self> {
        let dimensions = PackageDimensions {
            width: validate("width", width)?,
            height: validate("height", height)?,
            length: validate("length", length)?,
        };
        let mass = validate("mass", mass)?;
        Ok(Self { dimensions, mass })
    }

    /// Validated width, height and length.
    pub fn dimensions(&self) -> PackageDimensions {
        self.dimensions
    }

    /// Mass in kilograms.
    pub fn mass(&self) -> u64 {
        self.mass
    }

    /// Whether the mass reaches the heavy limit.
    pub fn is_heavy(&self) -> bool {
        is_heavy(self.mass)
    }

    /// Handling category for this package.
    pub fn category(&self) -> Category {
        self.report().category
    }

    /// Category together with the signals that produced it.
    pub fn report(&self) -> ClassificationReport {
        let bulky = self.dimensions.is_bulky();
        let heavy = self.is_heavy();
        let category = Category::from_flags(bulky, heavy);
        tracing::trace!(
            width = self.dimensions.width,
            height = self.dimensions.height,
            length = self.dimensions.length,
            mass = self.mass,
            bulky,
            heavy,
            %category,
            "classified package"
        );
        ClassificationReport {
            category,
            bulky,
            heavy,
            volume_cm3: self.dimensions.volume_cm3(),
        }
    }
}

impl TryFrom<Measurements> for Package {
    type Error = ClassifyError;

    fn try_from(m: Measurements) -> Result<Self> {
        Self::new(m.width, m.height, m.length, m.mass)
    }
}

/// Outcome of classifying one package.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ClassificationReport {
    pub category: Category,
    pub bulky: bool,
    pub heavy: bool,
    pub volume_cm3: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn decision_table() {
        assert_eq!(Category::from_flags(true, true), Category::Rejected);
        assert_eq!(Category::from_flags(true, false), Category::Special);
        assert_eq!(Category::from_flags(false, true), Category::Special);
        assert_eq!(Category::from_flags(false, false), Category::Standard);
    }

    #[test]
    fn category_labels() {
        let labels: Vec<String> = Category::all().iter().map(ToString::to_string).collect();
        assert_eq!(labels, vec!["STANDARD", "SPECIAL", "REJECTED"]);
    }

    #[test]
    fn category_serializes_as_label() {
        let json = serde_json::to_string(&Category::Rejected).unwrap();
        assert_eq!(json, "\"REJECTED\"");
        let parsed: Category = serde_json::from_str("\"SPECIAL\"").unwrap();
        assert_eq!(parsed, Category::Special);
    }

    #[test]
    fn report_for_volume_bulky_package() {
        let package = Package::new(100, 100, 100, 10).unwrap();
        assert_eq!(
            package.report(),
            ClassificationReport {
                category: Category::Special,
                bulky: true,
                heavy: false,
                volume_cm3: 1_000_000,
            }
        );
    }

    #[test]
    fn package_from_measurements() {
        let measurements: Measurements =
            serde_json::from_str(r#"{"width":10,"height":10,"length":10,"mass":20}"#).unwrap();
        let package = Package::try_from(measurements).unwrap();
        assert_eq!(package.mass(), 20);
        assert!(package.is_heavy());
        assert_eq!(package.category(), Category::Special);

        let bad = Measurements {
            mass: -1,
            ..measurements
        };
        assert_eq!(
            Package::try_from(bad),
            Err(ClassifyError::InvalidArgument { argument: "mass" })
        );
    }
}
