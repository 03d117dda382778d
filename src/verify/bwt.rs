// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! BWT derivation from a suffix array.
//!
//! Row 0 of the sorted rotation matrix is the rotation starting at the
//! sentinel, so its last column holds the final buffer byte. Every other row
//! `i + 1` starts at suffix `sa[i]`, and its last column is the byte just
//! before that suffix. The suffix starting at 0 has no predecessor: the
//! rotation wraps to the sentinel, and that row is where the inverse walk
//! starts.
//!
//! ```text
//! buffer: banana      sa: [5, 3, 1, 0, 4, 2]
//!
//! row  rotation    L
//!  0   $banana     a   (buffer[5])
//!  1   a$banan     n   (sa[0] = 5)
//!  2   ana$ban     n   (sa[1] = 3)
//!  3   anana$b     b   (sa[2] = 1)
//!  4   banana$     $   (sa[3] = 0, sentinel row)
//!  5   na$bana     a   (sa[4] = 4)
//!  6   nana$ba     a   (sa[5] = 2)
//! ```

use crate::error::VerifyError;
use crate::types::{SuffixIndex, Symbol};

/// The last column of the sorted rotation matrix, plus the row holding `$`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bwt {
    symbols: Vec<Symbol>,
    sentinel_row: usize,
}

impl Bwt {
    pub fn new() -> Self {
        Self::default()
    }

    /// The BWT string `L`, `n + 1` symbols long.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Row recorded for the sentinel during derivation.
    pub fn sentinel_row(&self) -> usize {
        self.sentinel_row
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Render `L` with `$` for the sentinel and `.` for non-printable bytes.
    pub fn to_display_string(&self) -> String {
        self.symbols
            .iter()
            .map(|s| match s.as_byte() {
                None => '$',
                Some(b) if b.is_ascii_graphic() || b == b' ' => char::from(b),
                Some(_) => '.',
            })
            .collect()
    }
}

/// Derive the BWT of `buffer` under the order claimed by `sa`.
pub fn derive_bwt<I: SuffixIndex>(buffer: &[u8], sa: &[I]) -> Result<Bwt, VerifyError> {
    let mut bwt = Bwt::new();
    derive_bwt_into(buffer, sa, &mut bwt)?;
    Ok(bwt)
}

/// Same as [`derive_bwt`], reusing the allocation in `out`.
///
/// Expects `sa` to have passed the permutation check. Entries that cannot be
/// buffer positions are still reported as `InvalidEntry` rather than
/// indexing out of bounds.
pub fn derive_bwt_into<I: SuffixIndex>(
    buffer: &[u8],
    sa: &[I],
    out: &mut Bwt,
) -> Result<(), VerifyError> {
    let n = buffer.len();
    out.symbols.clear();
    out.symbols.reserve(n + 1);
    out.sentinel_row = 0;

    match buffer.last() {
        Some(&last) => out.symbols.push(Symbol::byte(last)),
        None => {
            out.symbols.push(Symbol::SENTINEL);
            return Ok(());
        }
    }

    for (index, &entry) in sa.iter().enumerate() {
        match entry.to_position() {
            Some(0) => {
                out.sentinel_row = index + 1;
                out.symbols.push(Symbol::SENTINEL);
            }
            Some(pos) if pos < n => out.symbols.push(Symbol::byte(buffer[pos - 1])),
            _ => {
                return Err(VerifyError::InvalidEntry {
                    index,
                    value: entry.to_raw(),
                })
            }
        }
    }

    Ok(())
}
