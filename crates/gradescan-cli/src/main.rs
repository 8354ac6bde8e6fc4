mod cli;
mod convert_cmd;
mod extract_cmd;
mod gpa_cmd;
mod shared;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        cli::Commands::Extract {
            ref file,
            scale,
            ignore_grades,
            format,
            context_before,
            context_after,
        } => extract_cmd::run(
            file,
            scale.into(),
            ignore_grades,
            format,
            context_before,
            context_after,
        ),
        cli::Commands::Convert { ref grade, scale } => convert_cmd::run(grade, scale.into()),
        cli::Commands::Gpa { ref file } => gpa_cmd::run(file),
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}
