//! Credit-weighted GPA and cumulative GPA arithmetic.

use crate::course::ExtractedCourse;

/// One completed semester, summarized for cumulative GPA calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Semester {
    /// The semester's GPA.
    pub gpa: f64,
    /// Total credit units taken that semester.
    pub credit_units: u32,
}

/// Credit-weighted mean of the grade points in a course list.
///
/// Returns `0.0` when the total credit count is zero.
pub fn semester_gpa(courses: &[ExtractedCourse]) -> f64 {
    let total_units: u32 = courses.iter().map(|c| c.credit_units).sum();
    if total_units == 0 {
        return 0.0;
    }
    let weighted: f64 = courses
        .iter()
        .map(|c| c.credit_units as f64 * c.grade_point)
        .sum();
    weighted / f64::from(total_units)
}

/// Combine a previous cumulative GPA with one or more new semesters.
///
/// `(previous_gpa * previous_credits + sum(gpa * credits)) / total_credits`,
/// or `0.0` when the total credit count is zero.
pub fn cumulative_gpa(previous_gpa: f64, previous_credits: u32, semesters: &[Semester]) -> f64 {
    let new_credits: u32 = semesters.iter().map(|s| s.credit_units).sum();
    let total_credits = previous_credits + new_credits;
    if total_credits == 0 {
        return 0.0;
    }
    let weighted: f64 = previous_gpa * f64::from(previous_credits)
        + semesters
            .iter()
            .map(|s| s.gpa * f64::from(s.credit_units))
            .sum::<f64>();
    weighted / f64::from(total_credits)
}
