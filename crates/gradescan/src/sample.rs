//! Placeholder course data offered when extraction finds nothing.

use crate::course::ExtractedCourse;

/// Example courses a caller can fall back to when extraction yields an
/// empty list. All grades are zero and every found flag is false: the user
/// is expected to fill the values in.
pub fn sample_courses() -> Vec<ExtractedCourse> {
    [("MATH 101", 3), ("COMP 202", 4), ("PHYS 105", 3), ("ENGL 211", 3)]
        .into_iter()
        .map(|(name, credit_units)| ExtractedCourse {
            name: name.to_string(),
            credit_units,
            grade_point: 0.0,
            credit_unit_found: false,
            grade_found: false,
        })
        .collect()
}
