use std::path::Path;

use gradescan::{ExtractedCourse, semester_gpa};

use crate::shared::read_input;

pub fn run(file: &Path) -> Result<(), i32> {
    let input = read_input(file)?;

    let courses: Vec<ExtractedCourse> = serde_json::from_str(&input).map_err(|e| {
        eprintln!("Error parsing course list: {e}");
        1
    })?;

    println!("{:.2}", semester_gpa(&courses));
    Ok(())
}
