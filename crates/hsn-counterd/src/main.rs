//! hsncounterd - HSN Port Counter Collector Daemon
//!
//! Entry point for the hsncounterd daemon.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use fabric_mgmt::OpamgtClient;
use hsn_counterd::{Args, Collector};

/// Initializes tracing/logging subsystem
///
/// Diagnostics go to stderr; stdout carries only counter records.
fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // clap routes usage errors to stderr and --help/--version to stdout
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_logging();

    info!("--- Starting hsncounterd (Rust) ---");
    info!(interval_secs = args.interval_secs, "Using sleep interval");

    let client = match OpamgtClient::open(args.hfi, args.port) {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "Failed to open port or initialize PA connection");
            return ExitCode::FAILURE;
        }
    };

    let mut collector = Collector::new(client, io::stdout());
    match collector.run(args.interval()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "hsncounterd failed");
            ExitCode::FAILURE
        }
    }
}
