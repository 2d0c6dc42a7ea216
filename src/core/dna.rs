//! DNA sequence utilities
//!
//! Case handling, checksums and slicing for tile variant sequences and
//! genome variant base strings. Sequences are treated as ASCII bytes.

use crate::core::constants::DELETION_PLACEHOLDER;
use md5::{Digest, Md5};

/// Check that a sequence contains no uppercase characters
///
/// # Examples
/// ```
/// use tile_library::core::dna::is_lowercase;
///
/// assert!(is_lowercase("acgtn"));
/// assert!(is_lowercase(""));
/// assert!(!is_lowercase("acGt"));
/// ```
pub fn is_lowercase(seq: &str) -> bool {
    !seq.chars().any(char::is_uppercase)
}

/// Lowercase hex MD5 digest of a sequence
///
/// # Examples
/// ```
/// use tile_library::core::dna::md5_hex;
///
/// assert_eq!(md5_hex(""), "d41d8cd98f00b204e9800998ecf8427e");
/// ```
pub fn md5_hex(seq: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(seq.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Remove deletion placeholders from both ends of a base string
///
/// # Examples
/// ```
/// use tile_library::core::dna::strip_deletion_placeholders;
///
/// assert_eq!(strip_deletion_placeholders("-"), "");
/// assert_eq!(strip_deletion_placeholders("--ac-"), "ac");
/// ```
pub fn strip_deletion_placeholders(bases: &str) -> &str {
    bases.trim_matches(DELETION_PLACEHOLDER)
}

/// Resolve a signed index into `0..=len`; negative indexes count from the end
#[inline]
fn resolve_index(index: i64, len: usize) -> usize {
    let len = len as i128;
    let index = index as i128;
    let resolved = if index < 0 { index + len } else { index };
    resolved.clamp(0, len) as usize
}

/// Slice `seq[start..end]` with signed bounds
///
/// Negative bounds count back from the end of the sequence, and bounds past
/// either end are clamped. An inverted range yields an empty slice.
///
/// # Examples
/// ```
/// use tile_library::core::dna::slice_signed;
///
/// assert_eq!(slice_signed(b"ACGTACGT", -3, 8), b"CGT");
/// assert_eq!(slice_signed(b"ACGTACGT", 2, -3), b"GTA");
/// ```
#[inline]
pub fn slice_signed(seq: &[u8], start: i64, end: i64) -> &[u8] {
    let start = resolve_index(start, seq.len());
    let end = resolve_index(end, seq.len());
    if start >= end {
        &[]
    } else {
        &seq[start..end]
    }
}

/// Compare a sequence slice against a variant base string
///
/// Case-insensitive; deletion placeholders at either end of `bases` are ignored.
pub fn bases_match(slice: &[u8], bases: &str) -> bool {
    slice.eq_ignore_ascii_case(strip_deletion_placeholders(bases).as_bytes())
}
