//! Tile variant record files
//!
//! Tab-separated dumps of tile variants, one per line, validated in bulk:
//!
//! ```text
//! #tile_position_int  tile_variant_int  variant_value  length  md5sum  start_tag  end_tag  is_start_of_path  is_end_of_path  sequence
//! ```
//!
//! Packed ints are decimal. An empty tag is written as `.` or left empty.
//! Lines starting with `#` and blank lines are skipped. Each record is checked
//! with both the position and the tile variant validators; failures are
//! written to the report as `line<TAB>tile_variant_int<TAB>error`.

use crate::core::error::TileLibraryError;
use crate::core::io::{open_reader, LineIterator};
use crate::core::position::validate_tile_position;
use crate::core::sequence::{validate_tile_variant, TileVariantFields};
use log::{debug, info};
use memchr::memchr_iter;
use rayon::prelude::*;
use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::Path;
use thiserror::Error;

/// Number of columns in a tile variant record
pub const TILE_RECORD_COLUMNS: usize = 10;

/// Errors parsing one record line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TileRecordParseError {
    #[error("expected {expected} tab-separated fields, found {found}")]
    WrongFieldCount { expected: usize, found: usize },

    #[error("invalid integer in {0}: '{1}'")]
    InvalidNumber(&'static str, String),

    #[error("invalid boolean in {0}: '{1}'")]
    InvalidBool(&'static str, String),
}

/// Errors reading or writing a record file
#[derive(Debug, Error)]
pub enum TileFileError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to create thread pool: {0}")]
    ThreadPool(String),
}

/// Borrowed view of one record line
#[derive(Debug, Clone, Copy)]
pub struct TileRecordView<'a> {
    pub tile_position_int: i64,
    pub tile_variant_int: i64,
    pub variant_value: i64,
    pub length: i64,
    pub md5sum: &'a str,
    pub start_tag: &'a str,
    pub end_tag: &'a str,
    pub is_start_of_path: bool,
    pub is_end_of_path: bool,
    pub sequence: &'a str,
}

fn parse_int(column: &'static str, value: &str) -> Result<i64, TileRecordParseError> {
    value
        .parse()
        .map_err(|_| TileRecordParseError::InvalidNumber(column, value.to_string()))
}

fn parse_bool(column: &'static str, value: &str) -> Result<bool, TileRecordParseError> {
    match value {
        "1" | "true" | "True" | "TRUE" | "t" => Ok(true),
        "0" | "false" | "False" | "FALSE" | "f" => Ok(false),
        _ => Err(TileRecordParseError::InvalidBool(column, value.to_string())),
    }
}

fn parse_tag(value: &str) -> &str {
    if value == "." {
        ""
    } else {
        value
    }
}

impl<'a> TileRecordView<'a> {
    /// Parse a record line, splitting on tabs
    pub fn parse(line: &'a str) -> Result<Self, TileRecordParseError> {
        let bytes = line.as_bytes();
        let mut fields = Vec::with_capacity(TILE_RECORD_COLUMNS);
        let mut start = 0;
        for tab in memchr_iter(b'\t', bytes) {
            fields.push(&line[start..tab]);
            start = tab + 1;
        }
        fields.push(&line[start..]);

        if fields.len() != TILE_RECORD_COLUMNS {
            return Err(TileRecordParseError::WrongFieldCount {
                expected: TILE_RECORD_COLUMNS,
                found: fields.len(),
            });
        }

        Ok(Self {
            tile_position_int: parse_int("tile_position_int", fields[0])?,
            tile_variant_int: parse_int("tile_variant_int", fields[1])?,
            variant_value: parse_int("variant_value", fields[2])?,
            length: parse_int("length", fields[3])?,
            md5sum: fields[4],
            start_tag: parse_tag(fields[5]),
            end_tag: parse_tag(fields[6]),
            is_start_of_path: parse_bool("is_start_of_path", fields[7])?,
            is_end_of_path: parse_bool("is_end_of_path", fields[8])?,
            sequence: fields[9],
        })
    }

    /// Fields handed to the tile variant validator
    pub fn variant_fields(&self) -> TileVariantFields<'a> {
        TileVariantFields {
            tile_position_int: self.tile_position_int,
            tile_variant_int: self.tile_variant_int,
            variant_value: self.variant_value,
            sequence: self.sequence,
            length: self.length,
            md5sum: self.md5sum,
            start_tag: self.start_tag,
            end_tag: self.end_tag,
            is_start_of_path: self.is_start_of_path,
            is_end_of_path: self.is_end_of_path,
        }
    }

    /// Run the position and tile variant validators, keeping every failure
    pub fn validate(&self) -> Vec<TileLibraryError> {
        let mut failures = Vec::new();
        if let Err(e) = validate_tile_position(
            self.tile_position_int,
            self.is_start_of_path,
            self.is_end_of_path,
            self.start_tag,
            self.end_tag,
        ) {
            failures.push(e);
        }
        if let Err(e) = validate_tile_variant(&self.variant_fields()) {
            failures.push(e);
        }
        failures
    }
}

/// Validation statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationStats {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    pub malformed: usize,
}

enum RecordOutcome {
    Valid,
    Invalid(String),
    Malformed(String),
}

fn check_line(line: &str) -> (RecordOutcome, Option<i64>) {
    match TileRecordView::parse(line) {
        Ok(view) => {
            let failures = view.validate();
            if failures.is_empty() {
                (RecordOutcome::Valid, Some(view.tile_variant_int))
            } else {
                let message = failures
                    .iter()
                    .map(|e| e.to_string())
                    .collect::<Vec<_>>()
                    .join(" | ");
                (RecordOutcome::Invalid(message), Some(view.tile_variant_int))
            }
        }
        Err(e) => (RecordOutcome::Malformed(e.to_string()), None),
    }
}

/// Validate every record from `reader`, writing failures to `report`
pub fn validate_tile_records<R: BufRead, W: Write>(
    reader: R,
    report: &mut W,
    threads: usize,
) -> Result<ValidationStats, TileFileError> {
    let mut lines = Vec::new();
    let mut iter = LineIterator::new(reader);
    let mut line_number = 0usize;
    while let Some(line) = iter.next_line() {
        let line = line?;
        line_number += 1;
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        lines.push((line_number, line.to_string()));
    }
    debug!("Read {} tile records", lines.len());

    let outcomes: Vec<(RecordOutcome, Option<i64>)> = if threads > 1 {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(|e| TileFileError::ThreadPool(e.to_string()))?;
        pool.install(|| lines.par_iter().map(|(_, line)| check_line(line)).collect())
    } else {
        lines.iter().map(|(_, line)| check_line(line)).collect()
    };

    let mut stats = ValidationStats::default();
    for ((line_number, _), (outcome, variant_int)) in lines.iter().zip(outcomes) {
        stats.total += 1;
        let variant = variant_int.map(|v| v.to_string()).unwrap_or_else(|| ".".to_string());
        match outcome {
            RecordOutcome::Valid => stats.valid += 1,
            RecordOutcome::Invalid(message) => {
                stats.invalid += 1;
                writeln!(report, "{}\t{}\t{}", line_number, variant, message)?;
            }
            RecordOutcome::Malformed(message) => {
                stats.malformed += 1;
                writeln!(report, "{}\t{}\tmalformed record: {}", line_number, variant, message)?;
            }
        }
    }
    report.flush()?;
    Ok(stats)
}

/// Validate a (possibly gzipped) record file, writing failures to `output`
pub fn validate_tile_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    threads: usize,
) -> Result<ValidationStats, TileFileError> {
    let reader = open_reader(input.as_ref())?;
    let mut report = BufWriter::with_capacity(64 * 1024, File::create(output.as_ref())?);
    let stats = validate_tile_records(reader, &mut report, threads)?;
    info!(
        "Validated {} records from {:?}: {} valid, {} invalid, {} malformed",
        stats.total,
        input.as_ref(),
        stats.valid,
        stats.invalid,
        stats.malformed
    );
    Ok(stats)
}
