//! `download-wheels` entry point.

use std::process::ExitCode;

use clap::Parser;
use wheelprep_cli::{DownloadCli, handlers, init_tracing};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Load environment variables before clap reads PYTHON_BIN / PIP_ARGS
    dotenvy::dotenv().ok();

    let cli = DownloadCli::parse();
    init_tracing(cli.verbose);

    match handlers::download::execute(&cli).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            if !err.reported_by_tool() {
                eprintln!("Error: {err}");
            }
            exit_code(err.exit_code())
        }
    }
}

fn exit_code(code: i32) -> ExitCode {
    u8::try_from(code).map_or(ExitCode::FAILURE, ExitCode::from)
}
