//! Management transport status codes and error handling.
//!
//! Raw status values returned by the vendor library are converted into
//! Rust's Result type at the crate boundary; nothing above this crate sees
//! a bare status code.

use std::fmt;

use thiserror::Error;

/// Status codes returned by the opamgt management transport.
///
/// These values correspond to the `FSTATUS`/`OMGT_STATUS_T` codes in the
/// vendor headers.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MgmtStatus {
    Success = 0,
    Error = 1,
    InvalidParameter = 5,
    InsufficientMemory = 7,
    Timeout = 11,
    Reject = 13,
    NotFound = 16,
    Unavailable = 17,
    Busy = 18,
    Disconnect = 19,
}

impl MgmtStatus {
    /// Creates a MgmtStatus from a raw status value.
    pub fn from_raw(status: u32) -> Self {
        match status {
            0 => MgmtStatus::Success,
            5 => MgmtStatus::InvalidParameter,
            7 => MgmtStatus::InsufficientMemory,
            11 => MgmtStatus::Timeout,
            13 => MgmtStatus::Reject,
            16 => MgmtStatus::NotFound,
            17 => MgmtStatus::Unavailable,
            18 => MgmtStatus::Busy,
            19 => MgmtStatus::Disconnect,
            _ => MgmtStatus::Error,
        }
    }

    /// Returns true if the status indicates success.
    pub fn is_success(&self) -> bool {
        *self == MgmtStatus::Success
    }
}

impl fmt::Display for MgmtStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MgmtStatus::Success => "STATUS_SUCCESS",
            MgmtStatus::Error => "STATUS_ERROR",
            MgmtStatus::InvalidParameter => "STATUS_INVALID_PARAMETER",
            MgmtStatus::InsufficientMemory => "STATUS_INSUFFICIENT_MEMORY",
            MgmtStatus::Timeout => "STATUS_TIMEOUT",
            MgmtStatus::Reject => "STATUS_REJECT",
            MgmtStatus::NotFound => "STATUS_NOT_FOUND",
            MgmtStatus::Unavailable => "STATUS_UNAVAILABLE",
            MgmtStatus::Busy => "STATUS_BUSY",
            MgmtStatus::Disconnect => "STATUS_DISCONNECT",
        };
        write!(f, "{}", s)
    }
}

/// Error type for fabric management operations.
#[derive(Debug, Clone, Error)]
pub enum FabricError {
    /// Opening the management session failed. Fatal at startup.
    #[error("failed to open management session: {message}")]
    ConnectFailed { message: String },

    /// A single SA/PA query failed. The session remains usable.
    #[error("{what} query failed: {status}")]
    Query { what: String, status: MgmtStatus },

    /// The management transport itself crashed or is unrecoverable.
    ///
    /// A corrupted in-flight management transaction is not safely
    /// resumable; callers must treat this as fatal and terminate.
    #[error("fabric transport fault: {message}")]
    Transport { message: String },

    /// The requested capability is not available in this build.
    #[error("not supported: {feature}")]
    NotSupported { feature: String },
}

impl FabricError {
    /// Creates a session-open error.
    pub fn connect_failed(message: impl Into<String>) -> Self {
        FabricError::ConnectFailed {
            message: message.into(),
        }
    }

    /// Creates a per-query error.
    pub fn query(what: impl Into<String>, status: MgmtStatus) -> Self {
        FabricError::Query {
            what: what.into(),
            status,
        }
    }

    /// Creates a fatal transport fault.
    pub fn transport(message: impl Into<String>) -> Self {
        FabricError::Transport {
            message: message.into(),
        }
    }

    /// Creates a not supported error.
    pub fn not_supported(feature: impl Into<String>) -> Self {
        FabricError::NotSupported {
            feature: feature.into(),
        }
    }

    /// Returns true if the error must terminate the process.
    ///
    /// Only transport faults qualify; query failures skip a unit of work
    /// and the loop continues.
    pub fn is_fatal(&self) -> bool {
        matches!(self, FabricError::Transport { .. })
    }
}

/// Result type for fabric management operations.
pub type FabricResult<T> = Result<T, FabricError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_raw() {
        assert_eq!(MgmtStatus::from_raw(0), MgmtStatus::Success);
        assert_eq!(MgmtStatus::from_raw(11), MgmtStatus::Timeout);
        assert_eq!(MgmtStatus::from_raw(16), MgmtStatus::NotFound);
        assert_eq!(MgmtStatus::from_raw(999), MgmtStatus::Error);
    }

    #[test]
    fn test_status_success() {
        assert!(MgmtStatus::Success.is_success());
        assert!(!MgmtStatus::Timeout.is_success());
    }

    #[test]
    fn test_error_display() {
        let err = FabricError::query("link record", MgmtStatus::Timeout);
        assert_eq!(err.to_string(), "link record query failed: STATUS_TIMEOUT");

        let err = FabricError::connect_failed("no HFI device");
        assert_eq!(
            err.to_string(),
            "failed to open management session: no HFI device"
        );
    }

    #[test]
    fn test_only_transport_is_fatal() {
        assert!(FabricError::transport("lost mad channel").is_fatal());
        assert!(!FabricError::query("node record", MgmtStatus::Error).is_fatal());
        assert!(!FabricError::connect_failed("refused").is_fatal());
        assert!(!FabricError::not_supported("ffi").is_fatal());
    }
}
