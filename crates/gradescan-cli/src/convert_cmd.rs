use gradescan::{GradingScale, letter_to_points};

pub fn run(grade: &str, scale: GradingScale) -> Result<(), i32> {
    println!("{}", letter_to_points(grade, scale));
    Ok(())
}
