//! Error types for hsncounterd

use thiserror::Error;

use fabric_mgmt::FabricError;

/// Counter collector daemon errors
#[derive(Error, Debug)]
pub enum CollectorError {
    /// Fabric management error
    #[error("Fabric error: {0}")]
    Fabric(#[from] FabricError),

    /// Output sink error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CollectorError {
    /// Returns true if the error must terminate the daemon.
    pub fn is_fatal(&self) -> bool {
        match self {
            CollectorError::Fabric(e) => e.is_fatal(),
            // Losing stdout means nobody is consuming the data
            CollectorError::Io(_) => true,
        }
    }
}

/// Result type for collector operations
pub type Result<T> = std::result::Result<T, CollectorError>;
