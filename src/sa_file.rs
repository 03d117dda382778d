// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Raw suffix array files for the command line.
//!
//! A suffix array on disk is just its entries as little-endian unsigned
//! integers of a fixed width, no header. 32-bit entries cover inputs up to
//! 4 GiB; anything larger needs 64-bit entries.

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Entry width of a suffix array file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum IndexWidth {
    #[value(name = "32")]
    W32,
    #[default]
    #[value(name = "64")]
    W64,
}

impl IndexWidth {
    pub fn bytes(self) -> usize {
        match self {
            IndexWidth::W32 => 4,
            IndexWidth::W64 => 8,
        }
    }
}

/// A suffix array read from disk, kept in its stored width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredSuffixArray {
    U32(Vec<u32>),
    U64(Vec<u64>),
}

impl StoredSuffixArray {
    pub fn len(&self) -> usize {
        match self {
            StoredSuffixArray::U32(v) => v.len(),
            StoredSuffixArray::U64(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Decode a suffix array from raw little-endian bytes.
pub fn decode_suffix_array(bytes: &[u8], width: IndexWidth) -> Result<StoredSuffixArray> {
    let w = width.bytes();
    if bytes.len() % w != 0 {
        bail!(
            "suffix array file has {} bytes, not a multiple of the {}-byte entry width",
            bytes.len(),
            w
        );
    }

    Ok(match width {
        IndexWidth::W32 => StoredSuffixArray::U32(
            bytes
                .chunks_exact(4)
                .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
                .collect(),
        ),
        IndexWidth::W64 => StoredSuffixArray::U64(
            bytes
                .chunks_exact(8)
                .map(|c| u64::from_le_bytes([c[0], c[1], c[2], c[3], c[4], c[5], c[6], c[7]]))
                .collect(),
        ),
    })
}

/// Read a suffix array file.
pub fn read_suffix_array(path: &Path, width: IndexWidth) -> Result<StoredSuffixArray> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    decode_suffix_array(&bytes, width).with_context(|| format!("Invalid suffix array {}", path.display()))
}

/// Write `sa` to `path` with the given entry width.
pub fn write_suffix_array(path: &Path, sa: &[usize], width: IndexWidth) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut out = BufWriter::new(file);

    match width {
        IndexWidth::W32 => {
            for (i, &entry) in sa.iter().enumerate() {
                let Ok(entry) = u32::try_from(entry) else {
                    bail!("sa[{}] = {} does not fit in a 32-bit entry; use --width 64", i, entry);
                };
                out.write_all(&entry.to_le_bytes())?;
            }
        }
        IndexWidth::W64 => {
            for &entry in sa {
                out.write_all(&(entry as u64).to_le_bytes())?;
            }
        }
    }

    out.flush()
        .with_context(|| format!("Failed to write {}", path.display()))
}
