//! gradescan: heuristic extraction of course records from transcript text.
//!
//! Given raw text pulled from a transcript PDF's text layer, the engine
//! locates course codes, carves a bounded context window around each, and
//! runs ranked pattern cascades to recover credit units and a grade, with a
//! per-field found/not-found flag. It is deliberately best-effort: a human
//! is expected to review and correct the output.
//!
//! The crate also provides the standalone letter-grade conversion table and
//! credit-weighted GPA/CGPA arithmetic used around the engine.
//!
//! # Example
//!
//! ```
//! use gradescan::{ExtractOptions, GradingScale, extract_courses};
//!
//! let text = "MATH 101 3 UNITS GRADE: A";
//! let courses = extract_courses(text, GradingScale::FivePoint, &ExtractOptions::default());
//!
//! assert_eq!(courses.len(), 1);
//! assert_eq!(courses[0].name, "MATH 101");
//! assert_eq!(courses[0].credit_units, 3);
//! assert_eq!(courses[0].grade_point, 5.0);
//! assert!(courses[0].credit_unit_found && courses[0].grade_found);
//! ```

pub mod course;
pub mod extract;
pub mod gpa;
pub mod grade;
pub mod normalize;
pub mod sample;

pub use course::{DEFAULT_CREDIT_UNITS, ExtractedCourse, GradingScale, ScaleParseError};
pub use extract::{ExtractOptions, extract_courses};
pub use gpa::{Semester, cumulative_gpa, semester_gpa};
pub use grade::letter_to_points;
pub use normalize::normalize;
pub use sample::sample_courses;
