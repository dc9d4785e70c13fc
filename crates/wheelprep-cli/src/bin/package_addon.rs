//! `package-addon` entry point.

use std::process::ExitCode;

use clap::Parser;
use wheelprep_cli::{PackageCli, handlers, init_tracing};

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = PackageCli::parse();
    init_tracing(cli.verbose);

    match handlers::package::execute(&cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            u8::try_from(err.exit_code()).map_or(ExitCode::FAILURE, ExitCode::from)
        }
    }
}
