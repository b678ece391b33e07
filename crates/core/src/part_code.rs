//! Internal part code generation.
//!
//! Codes have the shape `MFG-SYS-TYP-SEQUENCE`, where each text segment is
//! the first three upper-cased ASCII alphanumerics of its source field and
//! the sequence is zero-padded to five digits.

/// Manufacturer segment source used when a part has no supplier recorded.
pub const UNKNOWN_MANUFACTURER: &str = "UNK";

/// Maximum number of characters kept from each normalized text segment.
const SEGMENT_LEN: usize = 3;

/// Upper-case `text` and drop everything that is not an ASCII letter or digit.
///
/// Applying this twice yields the same result as applying it once.
pub fn normalize_token(text: &str) -> String {
    text.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

fn segment(text: &str) -> String {
    normalize_token(text).chars().take(SEGMENT_LEN).collect()
}

/// Build an internal part code.
///
/// Never fails: empty or fully non-alphanumeric inputs produce empty
/// segments, and sequences wider than five digits are not truncated.
///
/// ```
/// use catalog_core::part_code::generate_code;
///
/// assert_eq!(generate_code("Toyota", "Powertrain", "Engine", 1), "TOY-POW-ENG-00001");
/// assert_eq!(generate_code("", "", "", 7), "---00007");
/// ```
pub fn generate_code(manufacturer: &str, system: &str, part_type: &str, sequence: u64) -> String {
    format!(
        "{}-{}-{}-{sequence:05}",
        segment(manufacturer),
        segment(system),
        segment(part_type),
    )
}

/// The manufacturer segment source for a new part: its supplier, or
/// [`UNKNOWN_MANUFACTURER`] when none was given.
pub fn manufacturer_token(last_known_supplier: Option<&str>) -> &str {
    last_known_supplier.unwrap_or(UNKNOWN_MANUFACTURER)
}

/// Sequence number for the next part given the current part count.
pub fn next_sequence(existing_parts: i64) -> u64 {
    existing_parts.max(0) as u64 + 1
}
