use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use gradescan::GradingScale;

/// Extract course records from transcript text, convert grades, and
/// compute GPA.
#[derive(Debug, Parser)]
#[command(name = "gradescan", about, version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract course records from a plain-text transcript dump
    Extract {
        /// Path to the text file ('-' reads stdin)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Grading scale in effect
        #[arg(long, value_enum)]
        scale: ScaleArg,

        /// Skip grade recovery; every record gets grade 0
        #[arg(long)]
        ignore_grades: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Context window bytes before each course-code match
        #[arg(long, default_value_t = 150)]
        context_before: usize,

        /// Context window bytes after each course-code match
        #[arg(long, default_value_t = 250)]
        context_after: usize,
    },

    /// Convert a letter grade to its grade-point value
    Convert {
        /// Letter grade (A, B+, F, ...)
        #[arg(value_name = "GRADE")]
        grade: String,

        /// Grading scale in effect
        #[arg(long, value_enum)]
        scale: ScaleArg,
    },

    /// Compute the credit-weighted GPA of a JSON course list
    Gpa {
        /// Path to a JSON array of course records ('-' reads stdin)
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

/// Grading scale as a command-line argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScaleArg {
    /// 4-point scale (A = 4.0)
    #[value(name = "4")]
    Four,
    /// 5-point scale (A = 5.0)
    #[value(name = "5")]
    Five,
}

impl From<ScaleArg> for GradingScale {
    fn from(arg: ScaleArg) -> Self {
        match arg {
            ScaleArg::Four => GradingScale::FourPoint,
            ScaleArg::Five => GradingScale::FivePoint,
        }
    }
}

/// Output format for extraction results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines
    Text,
    /// JSON array of course records
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_extract_with_scale() {
        let cli = Cli::parse_from(["gradescan", "extract", "transcript.txt", "--scale", "5"]);
        match cli.command {
            Commands::Extract {
                ref file,
                scale,
                ignore_grades,
                format,
                context_before,
                context_after,
            } => {
                assert_eq!(file, &PathBuf::from("transcript.txt"));
                assert_eq!(scale, ScaleArg::Five);
                assert!(!ignore_grades);
                assert_eq!(format, OutputFormat::Text);
                assert_eq!(context_before, 150);
                assert_eq!(context_after, 250);
            }
            _ => panic!("expected Extract subcommand"),
        }
    }

    #[test]
    fn parse_extract_with_all_flags() {
        let cli = Cli::parse_from([
            "gradescan",
            "extract",
            "-",
            "--scale",
            "4",
            "--ignore-grades",
            "--format",
            "json",
            "--context-before",
            "50",
            "--context-after",
            "120",
        ]);
        match cli.command {
            Commands::Extract {
                scale,
                ignore_grades,
                format,
                context_before,
                context_after,
                ..
            } => {
                assert_eq!(scale, ScaleArg::Four);
                assert!(ignore_grades);
                assert_eq!(format, OutputFormat::Json);
                assert_eq!(context_before, 50);
                assert_eq!(context_after, 120);
            }
            _ => panic!("expected Extract subcommand"),
        }
    }

    #[test]
    fn parse_convert() {
        let cli = Cli::parse_from(["gradescan", "convert", "B+", "--scale", "4"]);
        match cli.command {
            Commands::Convert { ref grade, scale } => {
                assert_eq!(grade, "B+");
                assert_eq!(scale, ScaleArg::Four);
            }
            _ => panic!("expected Convert subcommand"),
        }
    }

    #[test]
    fn scale_arg_maps_to_grading_scale() {
        assert_eq!(GradingScale::from(ScaleArg::Four), GradingScale::FourPoint);
        assert_eq!(GradingScale::from(ScaleArg::Five), GradingScale::FivePoint);
    }
}
