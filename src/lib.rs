//! binsize - A byte-count value type with human-readable parsing and formatting
//!
//! This crate provides [`Size`], a signed count of bytes that can be parsed
//! from strings such as `"10MB"` or `"1.5 GB"` and rendered back in the most
//! appropriate binary (1024-based) unit.
//!
//! # Features
//!
//! - **Parsing**: decimal numbers with an optional `B`, `K[B]`, `M[B]`, `G[B]`,
//!   `T[B]` or `P[B]` suffix, case-insensitive, optional whitespace
//! - **Formatting**: `Display` picks the largest unit the magnitude reaches and
//!   prints two decimal places
//! - **Conversions**: kilobytes through petabytes as `f64`
//! - **serde** (default feature): serialize as a byte count, deserialize from
//!   either a byte count or a size string
//!
//! # Examples
//!
//! ```rust
//! use binsize::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let limit: Size = "1.5 GB".parse()?;
//!     assert_eq!(limit.bytes(), 1_610_612_736);
//!     assert_eq!(limit.to_string(), "1.50 GB");
//!
//!     let used = Size::new(-2048);
//!     assert_eq!(used.to_string(), "-2.00 KB");
//!     assert_eq!(used.abs().kilobytes(), 2.0);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Error Handling
//!
//! Parsing fails with one of two errors:
//!
//! ```rust
//! use binsize::{parse_size, Error};
//!
//! assert_eq!(parse_size("invalid"), Err(Error::InvalidSize("invalid".to_string())));
//! assert_eq!(parse_size("1XB"), Err(Error::InvalidSizeSuffix("XB".to_string())));
//! ```
//!
//! # Logging
//!
//! Rejected inputs are reported as `tracing` debug events. The crate never
//! installs a subscriber.

#![doc(html_root_url = "https://docs.rs/binsize/0.1.0")]

pub mod error;
pub mod size;

pub use error::{Error, Result};
pub use size::{
    parse_size, Size, Unit, BYTES_SUFFIX, GIGABYTES_SUFFIX, GIGABYTE, KILOBYTES_SUFFIX, KILOBYTE,
    MEGABYTES_SUFFIX, MEGABYTE, PETABYTES_SUFFIX, PETABYTE, TERABYTES_SUFFIX, TERABYTE,
};

/// Re-export common types for convenience
pub mod prelude {
    pub use crate::size::{parse_size, Size, Unit};
    pub use crate::Error;
    pub use crate::Result;
}
