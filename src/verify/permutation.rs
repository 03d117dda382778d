// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Permutation check: every entry in `[0, n)`, no entry twice.
//!
//! Everything downstream (BWT derivation, the LF walk) indexes the buffer with
//! the claimed entries, so this has to pass first.

use crate::error::VerifyError;
use crate::types::SuffixIndex;

/// Check that `sa` is a bijection onto `0..n`.
///
/// `seen` is scratch space; it is resized to `n` and cleared, so callers can
/// hand the same vector in on every call.
pub fn check_permutation<I: SuffixIndex>(
    n: usize,
    sa: &[I],
    seen: &mut Vec<bool>,
) -> Result<(), VerifyError> {
    if sa.len() != n {
        return Err(VerifyError::LengthMismatch {
            buffer_len: n,
            array_len: sa.len(),
        });
    }

    seen.clear();
    seen.resize(n, false);

    for (index, &entry) in sa.iter().enumerate() {
        let pos = match entry.to_position() {
            Some(pos) if pos < n => pos,
            _ => {
                return Err(VerifyError::InvalidEntry {
                    index,
                    value: entry.to_raw(),
                })
            }
        };
        if seen[pos] {
            return Err(VerifyError::DuplicateEntry {
                index,
                value: entry.to_raw(),
            });
        }
        seen[pos] = true;
    }

    Ok(())
}
