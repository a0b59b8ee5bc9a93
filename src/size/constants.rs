use super::Size;

/// Suffix used when rendering plain bytes
pub const BYTES_SUFFIX: &str = "B";
pub const KILOBYTES_SUFFIX: &str = "KB";
pub const MEGABYTES_SUFFIX: &str = "MB";
pub const GIGABYTES_SUFFIX: &str = "GB";
pub const TERABYTES_SUFFIX: &str = "TB";
pub const PETABYTES_SUFFIX: &str = "PB";

/// Binary unit multipliers (powers of 1024)
pub const KILOBYTE: Size = Size(1024);
pub const MEGABYTE: Size = Size(1024 * KILOBYTE.0);
pub const GIGABYTE: Size = Size(1024 * MEGABYTE.0);
pub const TERABYTE: Size = Size(1024 * GIGABYTE.0);
pub const PETABYTE: Size = Size(1024 * TERABYTE.0);

/// Whole-input pattern for size strings: a decimal number, optional
/// whitespace, then an optional run of letters taken as the unit suffix
pub(crate) const SIZE_PATTERN: &str = r"^([0-9]+(?:\.[0-9]+)?)[[:space:]]*([A-Za-z]*)$";
