//! Counter record formatting.
//!
//! One sweep produces a header line followed by data lines, all
//! semicolon-delimited. Field order and header text are part of the
//! external contract and consumed by downstream tooling.

use chrono::{Local, TimeZone};

use fabric_mgmt::{ImageInfo, PortCounters, PortNum};

/// Flow-control digits (flits) per megabyte at 8 bits per byte.
pub const FLITS_PER_MB: u64 = 1_000_000 / 8;

/// Header naming the eleven record fields, printed once per sweep.
pub const CSV_HEADER: &str = "Node;Port;Image_Start;Image_Duration;Image_ID;numNoRespPorts;XmitDataMB;RcvDataMB;XmitWait;CongDiscards;XmitDiscards";

/// Renders the sweep start time in ctime style, local time, no trailing
/// newline ("Thu Aug 28 12:34:56 2026").
fn sweep_start_text(epoch_secs: i64) -> String {
    match Local.timestamp_opt(epoch_secs, 0).single() {
        Some(ts) => ts.format("%a %b %e %H:%M:%S %Y").to_string(),
        // A sweep timestamp outside chrono's range is garbage from the PM;
        // keep the raw value visible rather than dropping the line.
        None => epoch_secs.to_string(),
    }
}

/// Formats one counter record.
///
/// Data volumes are converted from flits to whole megabytes (floor); the
/// sweep duration is reported as `seconds.milliseconds` from the PM's
/// microsecond value; the image id is rendered in hexadecimal.
pub fn counter_line(
    description: &str,
    port: PortNum,
    image: &ImageInfo,
    counters: &PortCounters,
) -> String {
    format!(
        "{};{};{};{}.{:03};{};{};{};{};{};{};{}",
        description,
        port,
        sweep_start_text(image.sweep_start),
        image.sweep_duration_usec / 1_000_000,
        (image.sweep_duration_usec % 1_000_000) / 1_000,
        image.image_id,
        image.num_no_resp_ports,
        counters.xmit_data_flits / FLITS_PER_MB,
        counters.rcv_data_flits / FLITS_PER_MB,
        counters.xmit_wait,
        counters.congestion_discards,
        counters.xmit_discards,
    )
}
