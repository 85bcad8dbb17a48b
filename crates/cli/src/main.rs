// tiercheck - reconcile a membership roster against upgrade transactions

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;

use tiercheck_cli::exit_codes::EXIT_SUCCESS;
use tiercheck_cli::{check, CliError};

/// Reconcile `members.csv` against `filtered_by_fee.csv` in the working
/// directory, writing `members_update.csv` and `wrong_levels.csv`.
#[derive(Parser)]
#[command(name = "tiercheck")]
#[command(version)]
#[command(about = "Check and correct membership tier levels from upgrade transactions")]
struct Cli {}

fn main() -> ExitCode {
    let _cli = Cli::parse();

    match check::run_in_dir(Path::new(".")) {
        Ok(report) => {
            check::print_report(&report);
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(CliError { code, message, hint }) => {
            eprintln!("error: {message}");
            if let Some(hint) = hint {
                eprintln!("hint: {hint}");
            }
            ExitCode::from(code)
        }
    }
}
