//! Core data model: grading scales and extracted course records.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Placeholder credit-unit count used when no credit-unit pattern matched.
pub const DEFAULT_CREDIT_UNITS: u32 = 3;

/// Error returned when a grading-scale value cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid grading scale {0:?}: expected 4 or 5")]
pub struct ScaleParseError(pub String);

/// The grading scale in effect for one extraction or conversion call.
///
/// Selects which letter-to-point table applies and bounds the valid
/// numeric grade range. There is no default: the caller decides which
/// scale is active and must pass the same value throughout a single
/// extraction call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GradingScale {
    /// 4-point scale (A = 4.0).
    FourPoint,
    /// 5-point scale (A = 5.0).
    FivePoint,
}

impl GradingScale {
    /// The maximum achievable grade point on this scale.
    pub fn max_points(self) -> f64 {
        match self {
            GradingScale::FourPoint => 4.0,
            GradingScale::FivePoint => 5.0,
        }
    }
}

impl TryFrom<u8> for GradingScale {
    type Error = ScaleParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            4 => Ok(GradingScale::FourPoint),
            5 => Ok(GradingScale::FivePoint),
            other => Err(ScaleParseError(other.to_string())),
        }
    }
}

impl FromStr for GradingScale {
    type Err = ScaleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "4" => Ok(GradingScale::FourPoint),
            "5" => Ok(GradingScale::FivePoint),
            other => Err(ScaleParseError(other.to_string())),
        }
    }
}

impl fmt::Display for GradingScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GradingScale::FourPoint => f.write_str("4"),
            GradingScale::FivePoint => f.write_str("5"),
        }
    }
}

/// One course record recovered from transcript text.
///
/// Records are created fresh per extraction call and carry no identity
/// beyond it. The `*_found` flags distinguish values recovered from the
/// text from safe placeholder defaults; a `false` flag means the value
/// needs human confirmation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtractedCourse {
    /// Canonical course code, e.g. `"COMP 202"`.
    pub name: String,
    /// Credit-unit count in `[1, 12]`; defaults to [`DEFAULT_CREDIT_UNITS`]
    /// when no pattern matched.
    pub credit_units: u32,
    /// Grade point in `[0, scale.max_points()]`; defaults to `0.0` when no
    /// pattern matched or grade recovery was suppressed.
    pub grade_point: f64,
    /// Whether `credit_units` was recovered from the text.
    pub credit_unit_found: bool,
    /// Whether `grade_point` was recovered from the text.
    pub grade_found: bool,
}
