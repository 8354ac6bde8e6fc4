//! Letter-grade to grade-point conversion.

use crate::course::GradingScale;

/// Convert a letter grade to its grade-point value on the given scale.
///
/// Pure and stateless; usable standalone (the surrounding system calls it
/// directly when a user hand-edits a grade). The `+` variant of a letter
/// maps to the same value as the plain letter. `E` is only defined on the
/// 5-point scale; unknown tokens map to `0.0` on either scale.
pub fn letter_to_points(letter: &str, scale: GradingScale) -> f64 {
    let token = letter.trim().to_uppercase();
    match scale {
        GradingScale::FivePoint => match token.as_str() {
            "A" | "A+" => 5.0,
            "B" | "B+" => 4.0,
            "C" | "C+" => 3.0,
            "D" | "D+" => 2.0,
            "E" | "E+" => 1.0,
            _ => 0.0,
        },
        GradingScale::FourPoint => match token.as_str() {
            "A" | "A+" => 4.0,
            "B" | "B+" => 3.0,
            "C" | "C+" => 2.0,
            "D" | "D+" => 1.0,
            _ => 0.0,
        },
    }
}
