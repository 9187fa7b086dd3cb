use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use dpv_mergesort::driver::{self, DriverConfig, DriverError};

fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init();

    let config = DriverConfig::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = driver::run(&config, &mut out);
    let flushed = out.flush().map_err(DriverError::from);

    match result.and_then(|summary| flushed.map(|()| summary)) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
