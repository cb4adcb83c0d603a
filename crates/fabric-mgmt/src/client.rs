//! The consumed fabric-management interface.
//!
//! [`FabricClient`] is the seam between the collector and the vendor
//! library: topology comes from the subnet-administration surface, counters
//! and sweep metadata from the performance-administration surface. All
//! calls are request/response against the local management endpoint; the
//! transport's timeout policy is owned by the vendor library and opaque
//! here.

use async_trait::async_trait;

use crate::error::{FabricError, FabricResult};
use crate::types::{ImageId, ImageInfo, Lid, LinkRecord, NodeRecord, PortCounters, PortNum};

/// Capabilities the collector consumes from the fabric management service.
///
/// Each method maps to one SA or PA query. Failure of one query does not
/// invalidate the session; only [`FabricError::Transport`] does.
#[async_trait]
pub trait FabricClient: Send + Sync {
    /// Fetches every node record on the fabric (SA bulk query).
    async fn list_nodes(&self) -> FabricResult<Vec<NodeRecord>>;

    /// Fetches every link record on the fabric (SA bulk query).
    async fn list_links(&self) -> FabricResult<Vec<LinkRecord>>;

    /// Fetches the link record for a single LID (SA filtered query).
    ///
    /// Used as the fallback when the bulk link table yields no match.
    /// Returns `Ok(None)` when the SA has no link for the LID.
    async fn link_for_lid(&self, lid: Lid) -> FabricResult<Option<LinkRecord>>;

    /// Fetches metadata for the most recent performance-manager sweep.
    async fn current_image(&self) -> FabricResult<ImageInfo>;

    /// Fetches one port's counters from the given sweep.
    async fn port_counters(
        &self,
        image: ImageId,
        lid: Lid,
        port: PortNum,
    ) -> FabricResult<PortCounters>;
}

/// Fabric client bound to the vendor opamgt library.
///
/// This struct will hold the raw `omgt_port` session handle and the HFI
/// device/port numbers when FFI is enabled. For now, it provides the
/// interface definition.
pub struct OpamgtClient {
    // When FFI is enabled:
    // session: *mut omgt_port,
}

impl OpamgtClient {
    /// Opens a management session on the given HFI device and port.
    ///
    /// # Errors
    ///
    /// Returns [`FabricError::ConnectFailed`] when the session cannot be
    /// established; callers treat that as fatal.
    pub fn open(hfi: u8, port: u8) -> FabricResult<Self> {
        if hfi == 0 || port == 0 {
            return Err(FabricError::connect_failed(format!(
                "HFI and port numbers are 1-based (got hfi={}, port={})",
                hfi, port
            )));
        }

        // TODO: When FFI is enabled, call omgt_open_port_by_num() and keep
        // the session handle. For now the bindings are not linked.
        Err(FabricError::connect_failed(
            "opamgt FFI bindings not enabled",
        ))
    }
}

#[async_trait]
impl FabricClient for OpamgtClient {
    async fn list_nodes(&self) -> FabricResult<Vec<NodeRecord>> {
        // TODO: When FFI is enabled, call omgt_sa_get_node_records() with
        // an unfiltered selector.
        Err(FabricError::not_supported("opamgt FFI not enabled"))
    }

    async fn list_links(&self) -> FabricResult<Vec<LinkRecord>> {
        // TODO: When FFI is enabled, call omgt_sa_get_link_records() with
        // an unfiltered selector.
        Err(FabricError::not_supported("opamgt FFI not enabled"))
    }

    async fn link_for_lid(&self, lid: Lid) -> FabricResult<Option<LinkRecord>> {
        // TODO: When FFI is enabled, call omgt_sa_get_link_records() with
        // a LID-filtered selector.
        let _ = lid;
        Err(FabricError::not_supported("opamgt FFI not enabled"))
    }

    async fn current_image(&self) -> FabricResult<ImageInfo> {
        // TODO: When FFI is enabled, call omgt_pa_get_image_info() with the
        // cleared image id requesting the current sweep.
        Err(FabricError::not_supported("opamgt FFI not enabled"))
    }

    async fn port_counters(
        &self,
        image: ImageId,
        lid: Lid,
        port: PortNum,
    ) -> FabricResult<PortCounters> {
        // TODO: When FFI is enabled, call omgt_pa_get_port_stats2() with
        // running counters requested.
        let _ = (image, lid, port);
        Err(FabricError::not_supported("opamgt FFI not enabled"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_rejects_zero_device_numbers() {
        assert!(matches!(
            OpamgtClient::open(0, 1),
            Err(FabricError::ConnectFailed { .. })
        ));
        assert!(matches!(
            OpamgtClient::open(1, 0),
            Err(FabricError::ConnectFailed { .. })
        ));
    }

    #[test]
    fn test_open_without_ffi_fails() {
        // The vendor bindings are not linked in this build.
        assert!(OpamgtClient::open(1, 1).is_err());
    }
}
