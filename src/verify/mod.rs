// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Linear-time suffix array verification.
//!
//! Comparing neighbouring suffixes directly costs O(n) per comparison and
//! O(n²) overall, which is hopeless on multi-gigabyte corpora. Instead we
//! derive the BWT the claimed array implies and invert it:
//!
//! ```text
//! claimed SA ──▶ permutation ──▶ BWT (L) ──▶ ranks P, C array ──▶ LF walk
//!                  check          + $ row                          == buffer?
//! ```
//!
//! Each stage is O(n) time. Scratch memory is the seen-set (n bools), `L`
//! (n + 1 two-byte symbols) and `P` (n + 1 words), plus a 257-entry C array.
//!
//! The walk checks two things at every step: the symbol it reads must be the
//! buffer byte it is standing on, and the row it lands on must be the row the
//! claimed array assigns to that position. Together these are equivalent to
//! the claimed array being the suffix sort order.

pub mod bwt;
pub mod inverse;
pub mod permutation;
pub mod rank;

use std::time::Instant;

use tracing::debug;

use crate::contracts::{check_ranks_bounded, check_single_sentinel};
use crate::error::VerifyError;
use crate::types::SuffixIndex;

pub use bwt::{derive_bwt, derive_bwt_into, Bwt};
pub use inverse::{invert_bwt, reconstruct, LfWalk};
pub use permutation::check_permutation;
pub use rank::{count_ranks, count_ranks_into, RankTable};

/// Reusable verification scratch space.
///
/// Verifying large corpora back to back spends a noticeable share of time in
/// the allocator. A `Verifier` keeps its buffers between calls; no result
/// depends on a previous call.
#[derive(Debug, Default)]
pub struct Verifier {
    seen: Vec<bool>,
    bwt: Bwt,
    ranks: RankTable,
}

impl Verifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that `sa` is the suffix array of `buffer`.
    ///
    /// The order is the one with an implicit sentinel smaller than every byte
    /// at position `n`, so a suffix sorts before every longer suffix it
    /// prefixes.
    pub fn verify<I: SuffixIndex>(&mut self, buffer: &[u8], sa: &[I]) -> Result<(), VerifyError> {
        let n = buffer.len();

        let started = Instant::now();
        check_permutation(n, sa, &mut self.seen)?;
        debug!(n, elapsed = ?started.elapsed(), "permutation check passed");

        let started = Instant::now();
        derive_bwt_into(buffer, sa, &mut self.bwt)?;
        check_single_sentinel(&self.bwt);
        debug!(n, sentinel_row = self.bwt.sentinel_row(), elapsed = ?started.elapsed(), "bwt derived");

        let started = Instant::now();
        count_ranks_into(&self.bwt, &mut self.ranks);
        check_ranks_bounded(&self.bwt, &self.ranks);
        debug!(n, elapsed = ?started.elapsed(), "ranks counted");

        let started = Instant::now();
        let result = reconstruct(buffer, sa, &self.bwt, &self.ranks);
        debug!(n, ok = result.is_ok(), elapsed = ?started.elapsed(), "inverse walk finished");

        result
    }

    /// Release the scratch buffers.
    pub fn shrink(&mut self) {
        *self = Self::default();
    }
}

/// Check that `sa` is the suffix array of `buffer`, with fresh scratch space.
///
/// ```
/// use savera::{verify_suffix_array, VerifyError};
///
/// assert!(verify_suffix_array(b"banana", &[5u32, 3, 1, 0, 4, 2]).is_ok());
/// assert!(matches!(
///     verify_suffix_array(b"banana", &[5u32, 3, 1, 0, 2, 4]),
///     Err(VerifyError::ReconstructionMismatch { .. })
/// ));
/// ```
pub fn verify_suffix_array<I: SuffixIndex>(buffer: &[u8], sa: &[I]) -> Result<(), VerifyError> {
    Verifier::new().verify(buffer, sa)
}
