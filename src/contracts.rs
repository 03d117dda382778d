// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the verifier's intermediate structures.
//!
//! These are debug-mode assertions on invariants that hold by construction.
//! They cost nothing in release builds and catch bugs in the verifier itself
//! while tests run, separately from the verdict on the array under test.
//!
//! | Contract Function            | Invariant                                        |
//! |------------------------------|--------------------------------------------------|
//! | `check_counts_consistent`    | C array is the exclusive prefix sum of frequencies |
//! | `check_single_sentinel`      | a BWT derived from a permutation has one `$`     |
//! | `check_ranks_bounded`        | `P[i] < freq(L[i])`                              |

use crate::types::{Symbol, ALPHABET_SIZE};
use crate::verify::bwt::Bwt;
use crate::verify::rank::RankTable;

// ============================================================================
// COMPILE-TIME ASSERTIONS
// ============================================================================

const _: () = {
    // One code per byte value plus the sentinel
    assert!(ALPHABET_SIZE == u8::MAX as usize + 2);
    assert!(Symbol::SENTINEL.code() == 0);
    assert!(Symbol::byte(u8::MAX).code() == ALPHABET_SIZE - 1);
};

// ============================================================================
// RANK TABLE CONTRACTS
// ============================================================================

/// Check that `smaller` is the exclusive prefix sum of `freq` over `len` symbols.
///
/// # Panics (debug builds only)
/// Panics if the sum is not monotone or does not cover every BWT position.
#[inline]
pub fn check_counts_consistent(
    smaller: &[usize; ALPHABET_SIZE],
    freq: &[usize; ALPHABET_SIZE],
    len: usize,
) {
    debug_assert!(
        smaller.windows(2).all(|w| w[0] <= w[1]),
        "Contract violation: C array is not monotone"
    );
    debug_assert_eq!(
        smaller[ALPHABET_SIZE - 1] + freq[ALPHABET_SIZE - 1],
        len,
        "Contract violation: C array total != BWT length"
    );
}

/// Check that every rank is below its symbol's frequency.
#[inline]
pub fn check_ranks_bounded(bwt: &Bwt, table: &RankTable) {
    if cfg!(debug_assertions) {
        let counts = table.counts();
        for (i, (&symbol, &rank)) in bwt.symbols().iter().zip(table.ranks()).enumerate() {
            let code = symbol.code();
            let upper = counts.get(code + 1).copied().unwrap_or(bwt.len());
            debug_assert!(
                counts[code] + rank < upper,
                "Contract violation: P[{}] = {} overflows bucket of {:?}",
                i,
                rank,
                symbol
            );
        }
    }
}

// ============================================================================
// BWT CONTRACTS
// ============================================================================

/// Check that a BWT derived from a valid permutation holds exactly one sentinel,
/// at the recorded row.
///
/// Only meaningful after the permutation check has passed.
#[inline]
pub fn check_single_sentinel(bwt: &Bwt) {
    if cfg!(debug_assertions) {
        let count = bwt.symbols().iter().filter(|s| s.is_sentinel()).count();
        debug_assert_eq!(
            count, 1,
            "Contract violation: BWT holds {} sentinels",
            count
        );
        debug_assert!(
            bwt.symbols()
                .get(bwt.sentinel_row())
                .is_some_and(|s| s.is_sentinel()),
            "Contract violation: sentinel not at recorded row {}",
            bwt.sentinel_row()
        );
    }
}
