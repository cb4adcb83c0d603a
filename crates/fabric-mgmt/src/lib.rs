//! Safe Rust boundary for the opamgt fabric management API.
//!
//! This crate isolates the vendor management-datagram transport behind a
//! typed interface. The subnet-administration (topology) and
//! performance-administration (counter) query surfaces are exposed as a
//! single [`FabricClient`] trait; everything below that trait — MAD
//! encoding, image/sweep semantics, transport timeouts — belongs to the
//! closed vendor library and is never reimplemented here.
//!
//! # Architecture
//!
//! - [`types`]: LIDs, node/link records, image metadata, port counters
//! - [`error`]: raw management status codes and the crate error type
//! - [`client`]: the consumed [`FabricClient`] interface and the concrete
//!   [`OpamgtClient`] bound to the vendor library

pub mod client;
pub mod error;
pub mod types;

pub use client::{FabricClient, OpamgtClient};
pub use error::{FabricError, FabricResult, MgmtStatus};
pub use types::{ImageId, ImageInfo, Lid, LinkRecord, NodeRecord, NodeType, PortCounters, PortNum};
