use std::path::Path;

use gradescan::{ExtractOptions, ExtractedCourse, GradingScale, extract_courses};

use crate::cli::OutputFormat;
use crate::shared::read_input;

pub fn run(
    file: &Path,
    scale: GradingScale,
    ignore_grades: bool,
    format: OutputFormat,
    context_before: usize,
    context_after: usize,
) -> Result<(), i32> {
    let text = read_input(file)?;

    let options = ExtractOptions {
        context_before,
        context_after,
        ignore_grades,
        ..Default::default()
    };
    let courses = extract_courses(&text, scale, &options);

    if courses.is_empty() {
        // A valid terminal outcome, not a failure: the caller may fall back
        // to manual entry or example data.
        eprintln!("no course codes found");
        return Ok(());
    }

    match format {
        OutputFormat::Text => {
            for course in &courses {
                println!("{}", format_course(course));
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&courses).unwrap());
        }
    }

    Ok(())
}

/// One line per record; `?` marks a defaulted field needing confirmation.
fn format_course(course: &ExtractedCourse) -> String {
    format!(
        "{}  units={}{}  grade={}{}",
        course.name,
        course.credit_units,
        if course.credit_unit_found { "" } else { "?" },
        course.grade_point,
        if course.grade_found { "" } else { "?" },
    )
}
