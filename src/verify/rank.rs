// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Occurrence ranks and the C array over a BWT string.
//!
//! Together these give the LF-mapping: the `k`-th occurrence of symbol `c` in
//! the last column is the same text position as the `k`-th occurrence of `c`
//! in the first column, and the first column is just all symbols in sorted
//! order, so that occurrence sits at row `C[c] + k`.

use crate::types::{Symbol, ALPHABET_SIZE};
use crate::verify::bwt::Bwt;

/// Rank array `P` and C array for one BWT string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankTable {
    ranks: Vec<usize>,
    smaller: [usize; ALPHABET_SIZE],
}

impl Default for RankTable {
    fn default() -> Self {
        Self {
            ranks: Vec::new(),
            smaller: [0; ALPHABET_SIZE],
        }
    }
}

impl RankTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// `P[i]`: how many times `L[i]` occurs in `L[0..i)`.
    pub fn ranks(&self) -> &[usize] {
        &self.ranks
    }

    /// `C[symbol]`: number of BWT positions holding a strictly smaller symbol.
    #[inline]
    pub fn smaller_than(&self, symbol: Symbol) -> usize {
        self.smaller[symbol.code()]
    }

    /// The whole C array, indexed by symbol code.
    pub fn counts(&self) -> &[usize; ALPHABET_SIZE] {
        &self.smaller
    }

    /// LF-mapping: the row reached by stepping back one symbol from `row`,
    /// where `symbol` is `L[row]`.
    #[inline]
    pub fn lf(&self, row: usize, symbol: Symbol) -> usize {
        self.ranks[row] + self.smaller[symbol.code()]
    }
}

/// Count ranks and build the C array for `bwt`.
pub fn count_ranks(bwt: &Bwt) -> RankTable {
    let mut table = RankTable::new();
    count_ranks_into(bwt, &mut table);
    table
}

/// Same as [`count_ranks`], reusing the allocation in `out`.
pub fn count_ranks_into(bwt: &Bwt, out: &mut RankTable) {
    let symbols = bwt.symbols();
    out.ranks.clear();
    out.ranks.reserve(symbols.len());

    // Running per-symbol counts; after the scan these are frequencies
    let mut freq = [0usize; ALPHABET_SIZE];
    for &symbol in symbols {
        let count = &mut freq[symbol.code()];
        out.ranks.push(*count);
        *count += 1;
    }

    // Exclusive prefix sum in alphabet order, sentinel first
    let mut sum = 0;
    for (slot, &f) in out.smaller.iter_mut().zip(freq.iter()) {
        *slot = sum;
        sum += f;
    }

    crate::contracts::check_counts_consistent(&out.smaller, &freq, symbols.len());
}
