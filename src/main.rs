//! compress: build an archive from a configuration file.

use std::process::ExitCode;

use compress::cli::{self, CliAction};
use compress::lifecycle::startup;
use compress::observability::logging;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match cli::parse_args(std::env::args_os()) {
        CliAction::Run(cli) => cli,
        CliAction::Exit(text) => {
            println!("{}", text.trim_end());
            return ExitCode::SUCCESS;
        }
    };

    logging::init();
    tracing::info!("compress v{} starting", env!("CARGO_PKG_VERSION"));

    let code = match startup::run(cli).await {
        Ok(report) => {
            tracing::info!(
                passes = report.passes,
                entries = report.entries,
                size_bytes = report.size_bytes,
                "Build succeeded"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Build failed");
            ExitCode::FAILURE
        }
    };

    tracing::info!("compress finished");
    code
}
