//! Genome variant mapping validation
//!
//! A genome variant is reported in the local coordinates of a tile variant's
//! sequence. Its bounds must avoid the tag regions shared with neighbouring
//! tiles, except on a path boundary where there is no tag. Base comparisons
//! ignore case and deletion placeholders at either end of the base string.

use crate::core::constants::TAG_LENGTH;
use crate::core::dna::{bases_match, slice_signed};
use crate::core::error::{Field, FieldErrors, ValidationError, ValidationResult};

/// Check that reference bases are the bases of `reference_seq[start..end]`
///
/// Negative bounds count back from the end of the reference sequence.
///
/// # Examples
/// ```
/// use tile_library::core::genome_variant::validate_reference_bases;
///
/// assert!(validate_reference_bases("ACGTACGT", 2, 5, "gta").is_ok());
/// assert!(validate_reference_bases("ACGTACGT", 2, 5, "GGG").is_err());
/// ```
pub fn validate_reference_bases(
    reference_seq: &str,
    start: i64,
    end: i64,
    reference_bases: &str,
) -> ValidationResult<()> {
    let slice = slice_signed(reference_seq.as_bytes(), start, end);
    if !bases_match(slice, reference_bases) {
        return Err(ValidationError::field(
            Field::ReferenceBases,
            format!(
                "Reference bases ({}) do not match bases in reference tile variant ({})",
                reference_bases,
                String::from_utf8_lossy(slice)
            ),
        ));
    }
    Ok(())
}

/// A variant whose alternate equals its reference changes nothing
pub fn validate_reference_versus_alternate_bases(
    ref_bases: &str,
    alt_bases: &str,
) -> ValidationResult<()> {
    if ref_bases.eq_ignore_ascii_case(alt_bases) {
        return Err(ValidationError::field(
            Field::ReferenceAlternateBases,
            format!(
                "Reference bases ({}) are the same as alternate bases ({})",
                ref_bases, alt_bases
            ),
        ));
    }
    Ok(())
}

/// Window of a tile variant in which genome variant bounds may fall
///
/// `TAG_LENGTH` is trimmed from each end that is not a path boundary. The
/// ends are adjusted independently, so a single-tile path (both flags set)
/// accepts its whole span. Bounds are widened to `i128` so trimming never
/// overflows at the extremes of `i64`.
pub fn acceptable_window(
    tile_var_start_int: i64,
    tile_var_end_int: i64,
    tile_var_is_at_start: bool,
    tile_var_is_at_end: bool,
) -> (i128, i128) {
    let tag = TAG_LENGTH as i128;
    let start = if tile_var_is_at_start {
        tile_var_start_int as i128
    } else {
        tile_var_start_int as i128 + tag
    };
    let end = if tile_var_is_at_end {
        tile_var_end_int as i128
    } else {
        tile_var_end_int as i128 - tag
    };
    (start, end)
}

/// Check that a genome variant's bounds lie inside a tile variant
///
/// Each bound is checked against both ends of the window, so an inverted
/// window can yield two findings for the same bound.
pub fn validate_tile_variant_loci_encompass_genome_variant_loci(
    genome_var_start_int: i64,
    genome_var_end_int: i64,
    tile_var_start_int: i64,
    tile_var_end_int: i64,
    tile_var_is_at_start: bool,
    tile_var_is_at_end: bool,
) -> ValidationResult<()> {
    let (window_start, window_end) = acceptable_window(
        tile_var_start_int,
        tile_var_end_int,
        tile_var_is_at_start,
        tile_var_is_at_end,
    );
    let before = if tile_var_is_at_start {
        "is before the locus"
    } else {
        "is in the start tag or before the locus"
    };
    let after = if tile_var_is_at_end {
        "is after the locus"
    } else {
        "is in the end tag or after the locus"
    };

    let mut errors = FieldErrors::new();
    for (field, name, value) in [
        (Field::GenomeVariantStartInt, "start_int", genome_var_start_int),
        (Field::GenomeVariantEndInt, "end_int", genome_var_end_int),
    ] {
        let value = value as i128;
        if value < window_start {
            errors.push(field, format!("{} {}", name, before));
        }
        if value > window_end {
            errors.push(field, format!("{} {}", name, after));
        }
    }
    errors.into_result()
}

/// Check that alternate bases are the bases of `tile_var_seq[through_start..through_end]`
///
/// Bounds must lie in `0..=len` with `through_start <= through_end`. The slice
/// is still compared when a bound is bad, with negative bounds counted from
/// the end of the sequence.
pub fn validate_alternate_bases(
    tile_var_seq: &str,
    alternate_bases: &str,
    through_start: i64,
    through_end: i64,
) -> ValidationResult<()> {
    let len = tile_var_seq.len() as i64;
    let mut errors = FieldErrors::new();

    if through_start < 0 {
        errors.push(Field::Start, "start is less than 0");
    }
    if through_start > len {
        errors.push(Field::Start, "start is larger than the length of the tile_variant_sequence");
    }
    if through_end < 0 {
        errors.push(Field::End, "end is less than 0");
    }
    if through_end > len {
        errors.push(Field::End, "end is larger than the length of the tile_variant_sequence");
    }
    if through_end < through_start {
        errors.push(Field::StartEnd, "end is smaller than start");
    }

    let slice = slice_signed(tile_var_seq.as_bytes(), through_start, through_end);
    if !bases_match(slice, alternate_bases) {
        errors.push(
            Field::GenomeVariantAlternateBases,
            format!(
                "Alternate bases ({}) do not match bases in tile variant ({})",
                alternate_bases,
                String::from_utf8_lossy(slice)
            ),
        );
    }
    errors.into_result()
}
