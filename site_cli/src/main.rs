use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use redes_cr::cli::Cli;

fn init_logging(level: &str) {
    // Logs go to stderr; stdout carries command output (`cards --json` etc.)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| level.parse().unwrap_or_default()),
        )
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.log_level);
    debug!("redes-cr v{}", env!("CARGO_PKG_VERSION"));

    let mut stdout = std::io::stdout().lock();
    match redes_cr::run(cli, &mut stdout) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("[redes-cr] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
