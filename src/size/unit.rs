use super::constants::*;
use super::Size;

/// The display units a [`Size`] can be expressed in
///
/// Every unit above `Bytes` is a binary multiple (1024-based). The
/// two-letter suffixes are the conventional short forms rather than the
/// IEC `KiB`/`MiB` spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Unit {
    Bytes,
    Kilobytes,
    Megabytes,
    Gigabytes,
    Terabytes,
    Petabytes,
}

impl Unit {
    /// All units, smallest first
    pub const ALL: [Unit; 6] = [
        Unit::Bytes,
        Unit::Kilobytes,
        Unit::Megabytes,
        Unit::Gigabytes,
        Unit::Terabytes,
        Unit::Petabytes,
    ];

    /// Returns the canonical suffix for this unit (`"B"`, `"KB"`, ...)
    pub fn suffix(&self) -> &'static str {
        match self {
            Unit::Bytes => BYTES_SUFFIX,
            Unit::Kilobytes => KILOBYTES_SUFFIX,
            Unit::Megabytes => MEGABYTES_SUFFIX,
            Unit::Gigabytes => GIGABYTES_SUFFIX,
            Unit::Terabytes => TERABYTES_SUFFIX,
            Unit::Petabytes => PETABYTES_SUFFIX,
        }
    }

    /// Returns the number of bytes in one of this unit
    pub fn multiplier(&self) -> Size {
        match self {
            Unit::Bytes => Size(1),
            Unit::Kilobytes => KILOBYTE,
            Unit::Megabytes => MEGABYTE,
            Unit::Gigabytes => GIGABYTE,
            Unit::Terabytes => TERABYTE,
            Unit::Petabytes => PETABYTE,
        }
    }

    /// Recognizes a unit token as written after a number.
    ///
    /// Matching is case-insensitive and the trailing `B` is optional, so
    /// `"k"`, `"K"`, `"kb"` and `"KB"` all map to [`Unit::Kilobytes`]. An
    /// empty token or a bare `"B"` means bytes.
    ///
    /// ```rust
    /// use binsize::Unit;
    ///
    /// assert_eq!(Unit::from_suffix("Mb"), Some(Unit::Megabytes));
    /// assert_eq!(Unit::from_suffix(""), Some(Unit::Bytes));
    /// assert_eq!(Unit::from_suffix("XB"), None);
    /// ```
    pub fn from_suffix(token: &str) -> Option<Self> {
        match token.to_ascii_uppercase().as_str() {
            "" | "B" => Some(Unit::Bytes),
            "K" | "KB" => Some(Unit::Kilobytes),
            "M" | "MB" => Some(Unit::Megabytes),
            "G" | "GB" => Some(Unit::Gigabytes),
            "T" | "TB" => Some(Unit::Terabytes),
            "P" | "PB" => Some(Unit::Petabytes),
            _ => None,
        }
    }

    /// Picks the largest unit whose multiplier does not exceed the
    /// magnitude of `size`.
    pub fn for_size(size: Size) -> Self {
        let magnitude = size.abs();
        Self::ALL
            .iter()
            .rev()
            .copied()
            .find(|unit| magnitude >= unit.multiplier())
            .unwrap_or(Unit::Bytes)
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.suffix())
    }
}
