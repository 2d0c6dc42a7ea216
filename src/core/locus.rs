//! Locus and chromosome validation
//!
//! A locus places a tile on the linear reference: `begin_int..end_int` must
//! span exactly the tile's sequence, and the tile's path must belong to the
//! chromosome the locus names.

use crate::core::chromosome::ChromosomePathTable;
use crate::core::codec::decode_position;
use crate::core::error::{Field, FieldErrors, Result, ValidationResult};
use log::debug;

/// Validate a tile locus against the assembly's chromosome table
///
/// A codec failure on `tile_position_int` is returned immediately; every
/// other violation is collected.
pub fn validate_locus(
    table: &ChromosomePathTable,
    chromosome_int: i64,
    tile_position_int: i64,
    tag_length: usize,
    tile_sequence_length: i64,
    begin_int: i64,
    end_int: i64,
) -> Result<()> {
    let position = decode_position(tile_position_int)?;
    let path = position.path();
    let mut errors = FieldErrors::new();

    match table.path_range(chromosome_int) {
        Some(paths) if paths.contains(&path) => {}
        Some(_) => errors.push(
            Field::ChromosomeTilePosition,
            format!(
                "Path {} is not in chromosome {}, based on the {} path table",
                path,
                chromosome_int,
                table.assembly()
            ),
        ),
        None => errors.push(
            Field::ChromosomeTilePosition,
            format!(
                "Chromosome {} has no path range in the {} path table",
                chromosome_int,
                table.assembly()
            ),
        ),
    }

    let span = end_int as i128 - begin_int as i128;
    if end_int <= begin_int {
        errors.push(Field::MalformedLocus, "end_int must be strictly larger than begin_int");
    }
    if tile_sequence_length as i128 != span {
        errors.push(
            Field::TileLengthLocusMismatch,
            "Sequence length must be the same length specified by the loci",
        );
    }
    if span < 2 * tag_length as i128 {
        errors.push(
            Field::ShortLocus,
            "the distance between begin_int and end_int must be at least twice the TAG_LENGTH",
        );
    }

    if !errors.is_empty() {
        debug!("locus {}..{} for tile {} failed {} checks", begin_int, end_int, position, errors.len());
    }
    Ok(errors.into_result()?)
}

/// Check that a locus and a genome variant referencing it share a chromosome
///
/// Both the numeric index and the textual name must agree.
pub fn validate_same_chromosome(
    locus_chrom_int: i64,
    variant_chrom_int: i64,
    locus_chrom_name: &str,
    variant_chrom_name: &str,
) -> ValidationResult<()> {
    let mut errors = FieldErrors::new();
    if locus_chrom_int != variant_chrom_int {
        errors.push(
            Field::ChromosomeInt,
            format!("Locus for tile variant is not in chromosome {}", variant_chrom_int),
        );
    }
    if locus_chrom_name != variant_chrom_name {
        errors.push(
            Field::AlternateChromosomeName,
            format!("Locus for tile variant is not in chromosome {}", variant_chrom_name),
        );
    }
    errors.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::codec::encode_position;
    use crate::core::constants::TAG_LENGTH;

    fn fields_of(err: crate::core::error::TileLibraryError) -> FieldErrors {
        err.as_validation().and_then(|v| v.fields()).cloned().unwrap()
    }

    #[test]
    fn test_valid_locus() {
        let table = ChromosomePathTable::hg19();
        let pos = encode_position(0, 70, 3).unwrap() as i64;
        assert!(validate_locus(&table, 2, pos, TAG_LENGTH, 250, 1000, 1250).is_ok());
    }

    #[test]
    fn test_path_outside_chromosome() {
        let table = ChromosomePathTable::hg19();
        let pos = encode_position(0, 63, 3).unwrap() as i64;
        let errors = fields_of(validate_locus(&table, 1, pos, TAG_LENGTH, 250, 1000, 1250).unwrap_err());
        assert_eq!(errors.fields(), vec![Field::ChromosomeTilePosition]);
    }

    #[test]
    fn test_unknown_chromosome() {
        let table = ChromosomePathTable::hg19();
        let pos = encode_position(0, 3, 3).unwrap() as i64;
        let errors = fields_of(validate_locus(&table, 26, pos, TAG_LENGTH, 250, 1000, 1250).unwrap_err());
        assert!(errors.contains(Field::ChromosomeTilePosition));
    }

    #[test]
    fn test_inverted_locus_collects_everything() {
        let table = ChromosomePathTable::hg19();
        let pos = encode_position(0, 3, 3).unwrap() as i64;
        let errors = fields_of(validate_locus(&table, 1, pos, TAG_LENGTH, 10, 1250, 1000).unwrap_err());
        assert_eq!(
            errors.fields(),
            vec![Field::MalformedLocus, Field::TileLengthLocusMismatch, Field::ShortLocus]
        );
    }

    #[test]
    fn test_short_locus() {
        let table = ChromosomePathTable::hg19();
        let pos = encode_position(0, 3, 3).unwrap() as i64;
        let len = 2 * TAG_LENGTH as i64 - 1;
        let errors = fields_of(validate_locus(&table, 1, pos, TAG_LENGTH, len, 0, len).unwrap_err());
        assert_eq!(errors.fields(), vec![Field::ShortLocus]);
        assert!(validate_locus(&table, 1, pos, TAG_LENGTH, len + 1, 0, len + 1).is_ok());
    }

    #[test]
    fn test_extreme_locus_bounds() {
        let table = ChromosomePathTable::hg19();
        let pos = encode_position(0, 3, 3).unwrap() as i64;

        let errors = fields_of(
            validate_locus(&table, 1, pos, TAG_LENGTH, 0, i64::MIN, i64::MAX).unwrap_err(),
        );
        assert_eq!(errors.fields(), vec![Field::TileLengthLocusMismatch]);

        let errors = fields_of(
            validate_locus(&table, 1, pos, TAG_LENGTH, 0, i64::MAX, i64::MIN).unwrap_err(),
        );
        assert_eq!(
            errors.fields(),
            vec![Field::MalformedLocus, Field::TileLengthLocusMismatch, Field::ShortLocus]
        );

        let errors = fields_of(validate_locus(&table, 1, pos, usize::MAX, 100, 0, 100).unwrap_err());
        assert_eq!(errors.fields(), vec![Field::ShortLocus]);
    }

    #[test]
    fn test_same_chromosome() {
        assert!(validate_same_chromosome(1, 1, "chr1", "chr1").is_ok());
        let err = validate_same_chromosome(1, 2, "chr1", "chr2").unwrap_err();
        let errors = err.fields().unwrap();
        assert!(errors.contains(Field::ChromosomeInt));
        assert!(errors.contains(Field::AlternateChromosomeName));

        let err = validate_same_chromosome(1, 1, "chr1", "1").unwrap_err();
        assert_eq!(err.fields().unwrap().fields(), vec![Field::AlternateChromosomeName]);
    }
}
