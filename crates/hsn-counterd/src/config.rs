//! Command line configuration for hsncounterd

use std::time::Duration;

use clap::Parser;

/// Default idle/retry sleep interval in seconds
const DEFAULT_INTERVAL_SECS: u64 = 1;

/// HSN port counter collector
///
/// Polls the fabric performance manager and writes one semicolon-delimited
/// counter record per observed port to standard output.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "hsncounterd", version)]
pub struct Args {
    /// Idle/retry sleep interval in seconds
    #[arg(value_name = "SECONDS", default_value_t = DEFAULT_INTERVAL_SECS)]
    pub interval_secs: u64,

    /// HFI device number for the management session (1-based)
    #[arg(long, default_value_t = 1)]
    pub hfi: u8,

    /// HFI port number for the management session (1-based)
    #[arg(long, default_value_t = 1)]
    pub port: u8,
}

impl Args {
    /// Returns the polling interval as a Duration.
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}
