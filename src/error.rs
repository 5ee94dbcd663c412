//! # Error Types
//!
//! Error handling for the compatibility engine and the channel pipeline.
//!
//! ## Error Categories
//! - **Table Errors**: malformed compatibility or material tables (fatal at startup)
//! - **Version Errors**: unresolvable version names, out-of-order tool tables
//! - **Wire Errors**: VarInt/string decode and encode failures, oversized frames
//! - **Configuration Errors**: invalid or unreadable configuration
//!
//! ## Example Usage
//! ```rust
//! use version_bridge::error::{BridgeError, Result};
//!
//! fn parse_table(raw: &str) -> Result<serde_json::Value> {
//!     Ok(serde_json::from_str(raw)?)
//! }
//!
//! assert!(matches!(parse_table("{"), Err(BridgeError::Json(_))));
//! ```

use std::io;
use thiserror::Error;

/// Error message constants to reduce allocations in error paths.
pub mod constants {
    /// Wire decoding errors
    pub const ERR_VARINT_TOO_BIG: &str = "VarInt is too big";
    pub const ERR_BUFFER_UNDERFLOW: &str = "Not enough bytes in buffer";
    pub const ERR_NEGATIVE_LENGTH: &str = "Encoded string length is negative";
    pub const ERR_INVALID_UTF8: &str = "String is not valid UTF-8";

    /// Table errors
    pub const ERR_TABLE_NOT_OBJECT: &str = "Compatibility table root must be an object";
    pub const ERR_MATERIALS_NOT_OBJECT: &str = "Material table root must be an object";
}

/// Primary error type for the crate
#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed table: {0}")]
    TableError(String),

    #[error("Unresolved protocol version: {0}")]
    UnresolvedVersion(String),

    #[error("Tool table is not in ascending version order: {previous} is followed by {next}")]
    UnorderedToolTable { previous: String, next: String },

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Encode error: {0}")]
    Encode(String),

    #[error("Frame too large: {0} bytes")]
    OversizedFrame(usize),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Custom error: {0}")]
    Custom(String),
}

/// Type alias for Results using BridgeError
pub type Result<T> = std::result::Result<T, BridgeError>;
