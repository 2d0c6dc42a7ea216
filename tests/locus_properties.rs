//! Property-based tests for locus validation and chromosome path tables
//!
//! **Property 7: 染色体路径表一致性**

use proptest::prelude::*;
use tile_library::core::chromosome::ChromosomePathTable;
use tile_library::core::codec::{encode_position, MAX_STEP};
use tile_library::core::constants::{CHR_PATH_LENGTHS, TAG_LENGTH};
use tile_library::core::error::{Field, FieldErrors, TileLibraryError};
use tile_library::core::locus::validate_locus;

fn fields_of(err: TileLibraryError) -> FieldErrors {
    err.as_validation().and_then(|v| v.fields()).cloned().unwrap()
}

proptest! {
    /// **Property 7: 染色体路径表一致性**
    ///
    /// Every hg19 path belongs to exactly the chromosome whose range holds it.
    #[test]
    fn prop_path_chromosome_roundtrip(path in 0u32..CHR_PATH_LENGTHS[25]) {
        let table = ChromosomePathTable::hg19();
        let chromosome = table.chromosome_of_path(path).unwrap();
        prop_assert!(table.path_range(chromosome as i64).unwrap().contains(&path));
    }

    /// Property: a locus on the owning chromosome with a matching span passes
    #[test]
    fn prop_valid_locus_passes(
        path in 0u32..CHR_PATH_LENGTHS[25],
        step in 0..=MAX_STEP as i64,
        begin in 0i64..1_000_000_000,
        len in (2 * TAG_LENGTH as i64)..10_000,
    ) {
        let table = ChromosomePathTable::hg19();
        let chromosome = table.chromosome_of_path(path).unwrap() as i64;
        let tile_position_int = encode_position(0, path as i64, step).unwrap() as i64;
        prop_assert!(
            validate_locus(&table, chromosome, tile_position_int, TAG_LENGTH, len, begin, begin + len).is_ok()
        );
    }

    /// Property: a locus on any other chromosome is reported
    #[test]
    fn prop_wrong_chromosome_reported(
        path in 0u32..CHR_PATH_LENGTHS[25],
        chromosome in 1i64..26,
    ) {
        let table = ChromosomePathTable::hg19();
        prop_assume!(table.chromosome_of_path(path) != Some(chromosome as u32));
        let tile_position_int = encode_position(0, path as i64, 1).unwrap() as i64;
        let len = 2 * TAG_LENGTH as i64;
        let errors = fields_of(
            validate_locus(&table, chromosome, tile_position_int, TAG_LENGTH, len, 0, len).unwrap_err(),
        );
        prop_assert_eq!(errors.fields(), vec![Field::ChromosomeTilePosition]);
    }

    /// Property: every position of a chromosome lies in its position range
    #[test]
    fn prop_position_range(path in 0u32..CHR_PATH_LENGTHS[25], step in 0..=MAX_STEP as i64) {
        let table = ChromosomePathTable::hg19();
        let chromosome = table.chromosome_of_path(path).unwrap() as i64;
        let range = table.position_range(0, chromosome).unwrap().unwrap();
        prop_assert!(range.contains(&encode_position(0, path as i64, step).unwrap()));
    }
}

#[test]
fn test_custom_assembly_table() {
    let table = ChromosomePathTable::new("toy", vec![0, 2, 5]);
    assert_eq!(table.num_chromosomes(), 2);
    assert_eq!(table.num_paths(), 5);
    assert_eq!(table.chromosome_of_path(4), Some(2));
    assert_eq!(table.chromosome_of_path(5), None);

    let tile_position_int = encode_position(0, 4, 0).unwrap() as i64;
    let errors = fields_of(
        validate_locus(&table, 1, tile_position_int, 2, 4, 10, 14).unwrap_err(),
    );
    assert_eq!(
        errors.get(Field::ChromosomeTilePosition),
        Some("Path 4 is not in chromosome 1, based on the toy path table")
    );
}
