//! Collector - the polling cycle over topology and counter sweeps.

use std::io::Write;
use std::time::Duration;

use tracing::{debug, info, warn};

use fabric_mgmt::{FabricClient, ImageId, PortNum};

use crate::error::Result;
use crate::format::{counter_line, CSV_HEADER};
use crate::resolve::resolve_link;

/// Host-side port queried on every non-switch node. Hosts carry a single
/// fabric link, always on port 1.
const HOST_PORT: PortNum = 1;

/// Description emitted when a resolved switch LID has no node record.
const MISSING_SWITCH_DESC: &str = "not found";

/// What one polling cycle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// A fresh sweep was processed; `lines` counts emitted data lines.
    Emitted { lines: usize },
    /// The PM has not produced a new sweep since the last cycle.
    DuplicateImage(ImageId),
    /// The SA returned an empty node table.
    NoNodes,
}

/// Polls the fabric and writes counter records to the sink.
///
/// Topology and sweep metadata are refetched from scratch every cycle. The
/// only state carried across cycles is the id of the last processed sweep,
/// used to suppress re-emission when the PM has not swept again yet.
pub struct Collector<C, W> {
    client: C,
    sink: W,
    host_port: PortNum,
    last_image: Option<ImageId>,
}

impl<C: FabricClient, W: Write> Collector<C, W> {
    /// Creates a collector over an open fabric session and an output sink.
    pub fn new(client: C, sink: W) -> Self {
        Self {
            client,
            sink,
            host_port: HOST_PORT,
            last_image: None,
        }
    }

    /// Returns the id of the last fully processed sweep, if any.
    pub fn last_image(&self) -> Option<ImageId> {
        self.last_image
    }

    /// Runs one polling cycle.
    ///
    /// Per-node counter failures are logged and skipped; a link that
    /// resolves nowhere abandons the remaining node iteration for this
    /// cycle rather than risk pairing a host with the wrong switch port.
    /// Transport faults propagate as errors.
    pub async fn run_cycle(&mut self) -> Result<CycleOutcome> {
        let nodes = self.client.list_nodes().await?;
        if nodes.is_empty() {
            warn!("No node records found");
            return Ok(CycleOutcome::NoNodes);
        }
        let links = self.client.list_links().await?;

        let image = self.client.current_image().await?;
        if self.last_image == Some(image.image_id) {
            info!(image_id = %image.image_id, "Duplicate image, skipping");
            return Ok(CycleOutcome::DuplicateImage(image.image_id));
        }

        writeln!(self.sink, "{}", CSV_HEADER)?;
        let mut lines = 0;

        for node in nodes.iter().filter(|n| !n.node_type.is_switch()) {
            // Host side of the link
            match self
                .client
                .port_counters(image.image_id, node.lid, self.host_port)
                .await
            {
                Ok(counters) => {
                    let line = counter_line(&node.description, self.host_port, &image, &counters);
                    writeln!(self.sink, "{}", line)?;
                    lines += 1;
                }
                Err(e) if e.is_fatal() => return Err(e.into()),
                Err(e) => {
                    warn!(node = %node.description, error = %e, "Failed to get port counters");
                }
            }

            // Switch side of the link
            let link = match resolve_link(&self.client, &links, node.lid).await {
                Ok(Some(link)) => link,
                Ok(None) => {
                    warn!(lid = %node.lid, "Link not found, abandoning remaining nodes this cycle");
                    break;
                }
                Err(e) if e.is_fatal() => return Err(e.into()),
                Err(e) => {
                    warn!(lid = %node.lid, error = %e, "Link query failed, abandoning remaining nodes this cycle");
                    break;
                }
            };

            let switch_desc = nodes
                .iter()
                .find(|n| n.lid == link.to_lid)
                .map(|n| n.description.as_str())
                .unwrap_or(MISSING_SWITCH_DESC);

            match self
                .client
                .port_counters(image.image_id, link.to_lid, link.to_port)
                .await
            {
                Ok(counters) => {
                    let line = counter_line(switch_desc, link.to_port, &image, &counters);
                    writeln!(self.sink, "{}", line)?;
                    lines += 1;
                }
                Err(e) if e.is_fatal() => return Err(e.into()),
                Err(e) => {
                    warn!(switch = switch_desc, error = %e, "Failed to get port counters");
                }
            }
        }

        // Only now does the sweep count as processed; cycles that abort
        // before the iteration leave the duplicate check untouched.
        self.last_image = Some(image.image_id);
        self.sink.flush()?;
        Ok(CycleOutcome::Emitted { lines })
    }

    /// Polls forever, pacing every path by the configured interval.
    ///
    /// Query failures abort the cycle and the loop continues; only fatal
    /// faults (a crashed management transport, a dead sink) return.
    pub async fn run(&mut self, interval: Duration) -> Result<()> {
        loop {
            match self.run_cycle().await {
                Ok(CycleOutcome::Emitted { lines }) => {
                    debug!(lines, "Cycle complete");
                }
                Ok(CycleOutcome::DuplicateImage(_)) | Ok(CycleOutcome::NoNodes) => {}
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => warn!(error = %e, "Cycle aborted"),
            }
            tokio::time::sleep(interval).await;
        }
    }
}
