//! # hsncounterd - HSN Port Counter Collector
//!
//! This crate implements the port-counter collector daemon for an
//! InfiniBand/Omni-Path style high-speed network. It polls the fabric
//! management service for topology and per-port performance counters and
//! emits one semicolon-delimited record per observed port on standard
//! output.
//!
//! ## Responsibilities
//! - Poll the performance manager for the latest counter sweep
//! - Skip sweeps that have already been processed
//! - Emit host-side and switch-side counter lines for every host node
//! - Resolve each host's attached switch port from the SA link table
//!
//! ## Data flow
//! - SA node/link tables and PA sweep metadata are fetched fresh each cycle
//! - Data lines go to stdout; all diagnostics go to stderr
//! - One piece of state survives across cycles: the last processed sweep id

mod collector;
mod config;
mod error;
mod format;
mod resolve;

#[cfg(test)]
mod testutil;

pub use collector::{Collector, CycleOutcome};
pub use config::Args;
pub use error::{CollectorError, Result};
pub use format::{counter_line, CSV_HEADER, FLITS_PER_MB};
pub use resolve::{find_link, resolve_link};
