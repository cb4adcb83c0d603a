//! In-memory fabric client for tests.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use fabric_mgmt::{
    FabricClient, FabricError, FabricResult, ImageId, ImageInfo, Lid, LinkRecord, MgmtStatus,
    NodeRecord, NodeType, PortCounters, PortNum,
};

/// Fabric client backed by in-memory tables, with failure injection.
///
/// Successive `current_image` calls walk the pushed image list and repeat
/// the last entry, so a test can script "new sweep, then no new sweep".
pub struct MockFabric {
    nodes: Vec<NodeRecord>,
    links: Vec<LinkRecord>,
    images: Vec<ImageInfo>,
    image_cursor: Mutex<usize>,
    direct_links: HashMap<u32, LinkRecord>,
    direct_queries: AtomicUsize,
    counters: PortCounters,
    fail_counter_ports: HashSet<(u32, PortNum)>,
    fail_node_query: bool,
    transport_down: bool,
}

impl MockFabric {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            links: Vec::new(),
            images: Vec::new(),
            image_cursor: Mutex::new(0),
            direct_links: HashMap::new(),
            direct_queries: AtomicUsize::new(0),
            counters: PortCounters {
                xmit_data_flits: 1_000_000,
                rcv_data_flits: 500_000,
                xmit_wait: 11,
                congestion_discards: 2,
                xmit_discards: 1,
            },
            fail_counter_ports: HashSet::new(),
            fail_node_query: false,
            transport_down: false,
        }
    }

    pub fn add_node(&mut self, lid: u32, node_type: NodeType, description: &str) {
        self.nodes.push(NodeRecord {
            lid: Lid::from_raw(lid),
            node_type,
            description: description.to_string(),
        });
    }

    pub fn add_link(&mut self, from: u32, from_port: PortNum, to: u32, to_port: PortNum) {
        self.links.push(LinkRecord {
            from_lid: Lid::from_raw(from),
            from_port,
            to_lid: Lid::from_raw(to),
            to_port,
        });
    }

    pub fn clear_links(&mut self) {
        self.links.clear();
    }

    /// Registers a link returned only by the single-record fallback query.
    pub fn add_direct_link(&mut self, link: LinkRecord) {
        self.direct_links.insert(link.from_lid.as_u32(), link);
    }

    pub fn push_image(&mut self, image_number: u64) {
        self.images.push(ImageInfo {
            image_id: ImageId::from_raw(image_number),
            sweep_start: 1_700_000_000,
            sweep_duration_usec: 1_500_000,
            num_no_resp_ports: 0,
        });
    }

    /// Makes the per-port counter query fail for one (lid, port) pair.
    pub fn fail_counters_for(&mut self, lid: u32, port: PortNum) {
        self.fail_counter_ports.insert((lid, port));
    }

    pub fn fail_node_query(&mut self) {
        self.fail_node_query = true;
    }

    /// Simulates a crashed management transport.
    pub fn take_transport_down(&mut self) {
        self.transport_down = true;
    }

    /// Number of single-record fallback queries issued so far.
    pub fn direct_link_queries(&self) -> usize {
        self.direct_queries.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl FabricClient for MockFabric {
    async fn list_nodes(&self) -> FabricResult<Vec<NodeRecord>> {
        if self.transport_down {
            return Err(FabricError::transport("mad channel down"));
        }
        if self.fail_node_query {
            return Err(FabricError::query("node record", MgmtStatus::Timeout));
        }
        Ok(self.nodes.clone())
    }

    async fn list_links(&self) -> FabricResult<Vec<LinkRecord>> {
        Ok(self.links.clone())
    }

    async fn link_for_lid(&self, lid: Lid) -> FabricResult<Option<LinkRecord>> {
        self.direct_queries.fetch_add(1, Ordering::Relaxed);
        Ok(self.direct_links.get(&lid.as_u32()).copied())
    }

    async fn current_image(&self) -> FabricResult<ImageInfo> {
        let mut cursor = self.image_cursor.lock().unwrap();
        match self.images.get(*cursor) {
            Some(image) => {
                if *cursor + 1 < self.images.len() {
                    *cursor += 1;
                }
                Ok(*image)
            }
            None => Err(FabricError::query("image info", MgmtStatus::Unavailable)),
        }
    }

    async fn port_counters(
        &self,
        _image: ImageId,
        lid: Lid,
        port: PortNum,
    ) -> FabricResult<PortCounters> {
        if self.transport_down {
            return Err(FabricError::transport("mad channel down"));
        }
        if self.fail_counter_ports.contains(&(lid.as_u32(), port)) {
            return Err(FabricError::query("port counters", MgmtStatus::Timeout));
        }
        Ok(self.counters)
    }
}
