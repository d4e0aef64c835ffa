//! Code to parse the command line using `clap`, and definitions of the parsed
//! result

use clap::Parser;
use std::path::PathBuf;

/// The input files read when none are named on the command line
pub const DEFAULT_FILES: [&str; 3] = ["input01.txt", "input02.txt", "input03.txt"];
/// Where the report goes unless `--output` says otherwise
pub const DEFAULT_OUTPUT: &str = "output_demo.txt";

/// Returns the parsed command line: the `Args` return value's `files` field
/// holds the files to sum, and `output` says where the report goes.
#[must_use]
pub fn parsed() -> Args {
    Args::from_cli(CliArgs::parse())
}

/// The parsed command line
#[derive(Debug, PartialEq, Eq)]
pub struct Args {
    /// `files` is the list of files to sum, in report order
    pub files: Vec<PathBuf>,
    /// `output` is the report's destination
    pub output: Output,
}

/// Where the report is written
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Output {
    /// Standard output, requested with `--output -`
    Stdout,
    /// A file, created or truncated
    File(PathBuf),
}

impl Args {
    fn from_cli(parsed: CliArgs) -> Self {
        let files = if parsed.files.is_empty() {
            DEFAULT_FILES.iter().map(PathBuf::from).collect()
        } else {
            parsed.files
        };
        let output = if parsed.output.as_os_str() == "-" {
            Output::Stdout
        } else {
            Output::File(parsed.output)
        };
        Args { files, output }
    }
}

#[derive(Debug, Parser)]
#[command(name = "ratsum", version, about)]
/// Sums the fractions and integers in each input file, exactly
struct CliArgs {
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    /// Write the report to PATH (`-` for standard output)
    output: PathBuf,
    #[arg(name = "Input files")]
    /// Files of whitespace-separated integers and `n/d` fractions
    /// [default: input01.txt input02.txt input03.txt]
    files: Vec<PathBuf>,
}
