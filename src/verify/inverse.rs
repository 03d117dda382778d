// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Inverse BWT by LF-mapping, compared against the original buffer.
//!
//! Starting at the sentinel row, each LF step moves to the rotation that
//! begins one symbol earlier in the text, and the last column of that row is
//! the symbol we just stepped over. The walk therefore spells the buffer
//! backwards. If the claimed array really is the suffix order, the walk
//! reproduces the buffer exactly and lands, at every step, on the row the
//! claimed array assigns to the position it just reached.
//!
//! Every LF target is `P[row] + C[L[row]] < C[L[row]] + freq(L[row]) <= n + 1`,
//! so the walk stays in bounds even for garbage input.

use crate::error::{Divergence, VerifyError};
use crate::types::{SuffixIndex, Symbol};
use crate::verify::bwt::Bwt;
use crate::verify::rank::RankTable;

/// Iterator over the symbols recovered by walking LF from the sentinel row.
///
/// Yields exactly `n` symbols, last buffer byte first.
#[derive(Debug, Clone)]
pub struct LfWalk<'a> {
    symbols: &'a [Symbol],
    table: &'a RankTable,
    row: usize,
    remaining: usize,
}

impl<'a> LfWalk<'a> {
    /// Start a walk at the BWT's sentinel row.
    ///
    /// Fails with `LengthMismatch` if `table` was counted over a BWT of a
    /// different length, and with `MissingSentinel` if the start row does not
    /// hold the sentinel.
    pub fn new(bwt: &'a Bwt, table: &'a RankTable) -> Result<Self, VerifyError> {
        let row = bwt.sentinel_row();
        let symbols = bwt.symbols();
        if table.ranks().len() != symbols.len() {
            return Err(VerifyError::LengthMismatch {
                buffer_len: symbols.len().saturating_sub(1),
                array_len: table.ranks().len().saturating_sub(1),
            });
        }
        match symbols.get(row) {
            Some(s) if s.is_sentinel() => Ok(Self {
                symbols,
                table,
                row,
                remaining: symbols.len() - 1,
            }),
            _ => Err(VerifyError::MissingSentinel { row }),
        }
    }

    /// Current row of the walk.
    pub fn row(&self) -> usize {
        self.row
    }
}

impl Iterator for LfWalk<'_> {
    type Item = Symbol;

    #[inline]
    fn next(&mut self) -> Option<Symbol> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let next = self.table.lf(self.row, self.symbols[self.row]);
        // A C array from another BWT of the same length can point past the end
        let Some(&symbol) = self.symbols.get(next) else {
            self.remaining = 0;
            return None;
        };
        self.row = next;
        Some(symbol)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for LfWalk<'_> {}

/// Walk the inverse BWT and compare it with `buffer` and `sa`, from the end.
///
/// After stepping back over `buffer[i]` the walk sits on the rotation that
/// starts at `i + 1`. That row must hold `buffer[i]` in the last column, and
/// the claimed array must put suffix `i + 1` there (row 0 is the lone
/// sentinel rotation, which starts at `n`). The symbol check alone is the
/// textbook inverse BWT; the row check closes the gap where two suffixes
/// preceded by the same byte trade places without changing `L`.
pub fn reconstruct<I: SuffixIndex>(
    buffer: &[u8],
    sa: &[I],
    bwt: &Bwt,
    table: &RankTable,
) -> Result<(), VerifyError> {
    let n = buffer.len();
    if sa.len() != n || bwt.len() != n + 1 {
        return Err(VerifyError::LengthMismatch {
            buffer_len: n,
            array_len: sa.len(),
        });
    }
    let mut walk = LfWalk::new(bwt, table)?;

    for position in (0..n).rev() {
        let Some(actual) = walk.next() else {
            // Only reachable with a rank table that does not match the BWT
            return Err(VerifyError::LengthMismatch {
                buffer_len: n,
                array_len: bwt.len().saturating_sub(1),
            });
        };
        let expected = buffer[position];
        if actual != Symbol::byte(expected) {
            return Err(VerifyError::ReconstructionMismatch {
                position,
                expected,
                actual,
                divergence: Divergence::Symbol,
            });
        }

        let row = walk.row();
        let claimed_start = match row {
            0 => n,
            _ => sa
                .get(row - 1)
                .and_then(|entry| entry.to_position())
                .unwrap_or(usize::MAX),
        };
        if claimed_start != position + 1 {
            return Err(VerifyError::ReconstructionMismatch {
                position,
                expected,
                actual,
                divergence: Divergence::Order { row, claimed_start },
            });
        }
    }

    Ok(())
}

/// Regenerate the full buffer from its BWT.
///
/// Returns `None` if the walk does not start at a sentinel or runs into one
/// before `n` bytes have been recovered.
pub fn invert_bwt(bwt: &Bwt, table: &RankTable) -> Option<Vec<u8>> {
    let walk = LfWalk::new(bwt, table).ok()?;
    let mut out = walk.map(Symbol::as_byte).collect::<Option<Vec<u8>>>()?;
    out.reverse();
    Some(out)
}
