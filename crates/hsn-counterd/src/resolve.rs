//! Link resolution: mapping a host LID to its attached switch port.

use tracing::debug;

use fabric_mgmt::{FabricClient, FabricResult, Lid, LinkRecord};

/// Finds the first link whose from-LID matches, by linear scan of the bulk
/// link table.
///
/// Hosts carry a single fabric link, so the first match is the only match.
/// The scan is O(n) per host and fine up to roughly 1500 nodes; a bigger
/// fabric would want an indexed table instead.
pub fn find_link(links: &[LinkRecord], lid: Lid) -> Option<&LinkRecord> {
    links.iter().find(|l| l.from_lid == lid)
}

/// Resolves a host's link, falling back to a single-record SA query when
/// the bulk table has no match.
///
/// The fallback is issued at most once per call. `Ok(None)` means neither
/// the bulk table nor the SA knows a link for this LID.
pub async fn resolve_link<C: FabricClient + ?Sized>(
    client: &C,
    links: &[LinkRecord],
    lid: Lid,
) -> FabricResult<Option<LinkRecord>> {
    if let Some(link) = find_link(links, lid) {
        return Ok(Some(*link));
    }

    debug!(%lid, "LID not in bulk link table, querying SA directly");
    client.link_for_lid(lid).await
}
