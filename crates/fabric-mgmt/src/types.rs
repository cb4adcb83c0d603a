//! Core fabric types: identifiers, topology records, counter snapshots.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Port number on a node (1-based, as reported by the subnet manager).
pub type PortNum = u8;

/// Local identifier, the fabric-assigned address of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Lid(u32);

impl Lid {
    /// Creates a LID from the raw wire value.
    pub const fn from_raw(lid: u32) -> Self {
        Lid(lid)
    }

    /// Returns the raw LID value.
    pub const fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Lid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Node type codes as reported in STL node records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeType {
    /// Host channel adapter (compute or service node)
    HostChannelAdapter,
    /// Switch ASIC
    Switch,
    /// Router
    Router,
    /// Unrecognized type code
    Other,
}

impl NodeType {
    /// Creates a node type from the raw STL code.
    pub fn from_raw(code: u8) -> Self {
        match code {
            1 => NodeType::HostChannelAdapter,
            2 => NodeType::Switch,
            3 => NodeType::Router,
            _ => NodeType::Other,
        }
    }

    /// Returns true for switch nodes.
    ///
    /// The collector iterates every node that is *not* a switch, so an
    /// unknown type code is treated as a host rather than silently dropped.
    pub fn is_switch(&self) -> bool {
        *self == NodeType::Switch
    }
}

/// One subnet-administration node record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    /// Fabric-assigned address
    pub lid: Lid,
    /// Node type (switch vs. host)
    pub node_type: NodeType,
    /// Human-readable node description string
    pub description: String,
}

/// One physical link endpoint pair from the subnet-administration link table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRecord {
    pub from_lid: Lid,
    pub from_port: PortNum,
    pub to_lid: Lid,
    pub to_port: PortNum,
}

/// Opaque identifier of one performance-manager sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageId(u64);

impl ImageId {
    /// Creates an image id from the raw wire value.
    pub const fn from_raw(id: u64) -> Self {
        ImageId(id)
    }

    /// Returns the raw image number.
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.0)
    }
}

/// Metadata about one performance-manager sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageInfo {
    /// Sweep identifier
    pub image_id: ImageId,
    /// Sweep start time, seconds since the Unix epoch
    pub sweep_start: i64,
    /// Sweep duration in microseconds
    pub sweep_duration_usec: u32,
    /// Ports that did not respond during the sweep
    pub num_no_resp_ports: u32,
}

/// Per-port traffic and discard counters from one sweep.
///
/// Data volumes are in flow-control digits (flits); conversion to bytes is
/// left to the consumer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortCounters {
    pub xmit_data_flits: u64,
    pub rcv_data_flits: u64,
    pub xmit_wait: u64,
    pub congestion_discards: u64,
    pub xmit_discards: u64,
}
