use thiserror::Error;

use super::Vendor;

/// partprice error types
#[derive(Error, Debug)]
pub enum PartPriceError {
    /// Vendor request failed (DNS, connect, timeout, non-2xx)
    #[error("network error ({vendor}): {message}")]
    Network { vendor: Vendor, message: String },

    /// Invalid CSS selector in a vendor table
    #[error("selector error: {0}")]
    Selector(String),

    /// Configuration error
    #[error("config error: {0}")]
    Config(String),

    /// File I/O error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Report encoding failed
    #[error("serialize error: {0}")]
    Serialize(String),
}

/// Result type alias for partprice
pub type Result<T> = std::result::Result<T, PartPriceError>;
