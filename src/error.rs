//! Error types.
//!
//! Structural problems with a configuration abort the parse and surface as
//! [`DeviceError`]. A bad address on a single interface is an [`IpParseError`],
//! which the parser absorbs and never returns to the caller.

use thiserror::Error;

/// Errors raised while building or parsing a [`crate::Device`].
#[derive(Debug, Error)]
pub enum DeviceError {
    #[error("platform unknown: {0:?}")]
    PlatformUnknown(String),

    #[error("duplicate interface in device: {0}")]
    DuplicateInterface(String),

    #[error("parsing failed: got 0 interfaces")]
    ParsingFailed,

    #[error("configuration source already consumed")]
    SourceConsumed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure to turn an address line into a canonical prefix.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IpParseError {
    #[error("invalid address {0:?}")]
    Address(String),

    #[error("invalid mask {0:?}")]
    Mask(String),

    #[error("invalid prefix length {0:?}")]
    PrefixLength(String),

    #[error("missing token in {0:?}")]
    MissingToken(String),
}

/// Errors raised while writing a device out.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("output format not supported: {0:?}")]
    UnsupportedFormat(String),

    #[error("can't serialize: {0}")]
    Device(#[from] DeviceError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for device operations
pub type DeviceResult<T> = Result<T, DeviceError>;
