//! # Size Module
//!
//! A signed byte count with binary (1024-based) unit conversions, parsing
//! from strings such as `"10MB"` or `"1.5 GB"` and human-readable rendering.
//!
//! ## Example
//!
//! ```rust
//! use binsize::size::{Size, MEGABYTE};
//!
//! let size: Size = "1.5 MB".parse().unwrap();
//! assert_eq!(size.bytes(), 1_572_864);
//! assert_eq!(size.to_string(), "1.50 MB");
//! assert!(size > MEGABYTE);
//! ```

pub mod constants;
mod parse;
mod unit;

#[cfg(feature = "serde")]
mod serde_impl;


pub use constants::*;
pub use parse::parse_size;
pub use unit::Unit;

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use crate::{Error, Result};

/// Represents a size in bytes
///
/// The count is signed so that differences between sizes can be expressed
/// directly. Arithmetic follows plain `i64` semantics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Size(pub i64);

impl Size {
    /// Creates a new Size from the given number of bytes
    pub const fn new(bytes: i64) -> Self {
        Self(bytes)
    }

    /// Parses a size string, see [`parse_size`] for the accepted forms
    pub fn parse(input: &str) -> Result<Self> {
        parse_size(input).map(Self)
    }

    /// Returns the size in bytes
    pub const fn bytes(&self) -> i64 {
        self.0
    }

    /// Returns the size expressed in `unit`, preserving sign
    pub fn in_unit(&self, unit: Unit) -> f64 {
        self.0 as f64 / unit.multiplier().0 as f64
    }

    /// Returns the size in kilobytes
    pub fn kilobytes(&self) -> f64 {
        self.in_unit(Unit::Kilobytes)
    }

    /// Returns the size in megabytes
    pub fn megabytes(&self) -> f64 {
        self.in_unit(Unit::Megabytes)
    }

    /// Returns the size in gigabytes
    pub fn gigabytes(&self) -> f64 {
        self.in_unit(Unit::Gigabytes)
    }

    /// Returns the size in terabytes
    pub fn terabytes(&self) -> f64 {
        self.in_unit(Unit::Terabytes)
    }

    /// Returns the size in petabytes
    pub fn petabytes(&self) -> f64 {
        self.in_unit(Unit::Petabytes)
    }

    /// Returns the absolute value of the size.
    ///
    /// `i64::MIN` has no positive counterpart and is returned unchanged.
    pub const fn abs(&self) -> Self {
        Self(self.0.wrapping_abs())
    }
}

/// Renders the size in the largest unit its magnitude reaches, with two
/// decimal places. Plain bytes are shown without decimals.
impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match Unit::for_size(*self) {
            Unit::Bytes => write!(f, "{} {}", self.0, BYTES_SUFFIX),
            unit => write!(f, "{:.2} {}", self.in_unit(unit), unit.suffix()),
        }
    }
}

impl FromStr for Size {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<i64> for Size {
    fn from(bytes: i64) -> Self {
        Self(bytes)
    }
}

impl From<Size> for i64 {
    fn from(size: Size) -> Self {
        size.bytes()
    }
}

impl Add for Size {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Size {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Neg for Size {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Mul<i64> for Size {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl Sum for Size {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Size(0), Add::add)
    }
}
