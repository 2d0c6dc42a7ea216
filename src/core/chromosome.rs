//! Chromosome to path tables
//!
//! An assembly's paths are numbered consecutively across chromosomes; the
//! table stores the cumulative path count at each chromosome boundary.

use crate::core::codec::{encode_position, MAX_STEP};
use crate::core::constants::{CHR_M, CHR_OTHER, CHR_PATH_LENGTHS, CHR_X, CHR_Y};
use crate::core::error::CodecResult;
use std::ops::Range;

/// Display name of a chromosome index
///
/// # Examples
/// ```
/// use tile_library::core::chromosome::chromosome_name;
///
/// assert_eq!(chromosome_name(1).as_deref(), Some("chr1"));
/// assert_eq!(chromosome_name(23).as_deref(), Some("chrX"));
/// assert_eq!(chromosome_name(26).as_deref(), Some("Other"));
/// assert_eq!(chromosome_name(0), None);
/// ```
pub fn chromosome_name(chromosome: u32) -> Option<String> {
    match chromosome {
        1..=22 => Some(format!("chr{}", chromosome)),
        CHR_X => Some("chrX".to_string()),
        CHR_Y => Some("chrY".to_string()),
        CHR_M => Some("chrM".to_string()),
        CHR_OTHER => Some("Other".to_string()),
        _ => None,
    }
}

/// Per-assembly table of half-open path ranges per chromosome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChromosomePathTable {
    assembly: String,
    boundaries: Vec<u32>,
}

impl ChromosomePathTable {
    /// Build a table from cumulative path counts
    ///
    /// `boundaries[0]` is the first path of chromosome 1; chromosome `c` owns
    /// `boundaries[c-1]..boundaries[c]`.
    pub fn new(assembly: impl Into<String>, boundaries: Vec<u32>) -> Self {
        Self {
            assembly: assembly.into(),
            boundaries,
        }
    }

    /// The hg19 table the tile library was built against
    pub fn hg19() -> Self {
        Self::new("hg19", CHR_PATH_LENGTHS.to_vec())
    }

    pub fn assembly(&self) -> &str {
        &self.assembly
    }

    /// Number of chromosomes with a registered path range
    pub fn num_chromosomes(&self) -> usize {
        self.boundaries.len().saturating_sub(1)
    }

    /// Total number of paths in the assembly
    pub fn num_paths(&self) -> u32 {
        self.boundaries.last().copied().unwrap_or(0)
    }

    /// Paths registered for a chromosome, `None` if the index is not in the table
    pub fn path_range(&self, chromosome: i64) -> Option<Range<u32>> {
        if chromosome < 1 || chromosome as usize >= self.boundaries.len() {
            return None;
        }
        let c = chromosome as usize;
        Some(self.boundaries[c - 1]..self.boundaries[c])
    }

    /// Chromosome owning a path
    pub fn chromosome_of_path(&self, path: u32) -> Option<u32> {
        self.boundaries
            .windows(2)
            .position(|w| (w[0]..w[1]).contains(&path))
            .map(|i| i as u32 + 1)
    }

    /// Half-open range of tile position ints covering one chromosome
    pub fn position_range(&self, version: i64, chromosome: i64) -> CodecResult<Option<Range<u64>>> {
        let Some(paths) = self.path_range(chromosome) else {
            return Ok(None);
        };
        let first = encode_position(version, paths.start as i64, 0)?;
        if paths.is_empty() {
            return Ok(Some(first..first));
        }
        let last = encode_position(version, paths.end as i64 - 1, MAX_STEP as i64)?;
        Ok(Some(first..last + 1))
    }
}

impl Default for ChromosomePathTable {
    fn default() -> Self {
        Self::hg19()
    }
}
