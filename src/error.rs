// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Failure taxonomy for a single verification call.
//!
//! Every variant means the claimed suffix array is wrong for the buffer it was
//! checked against. The verifier reports the first failure it sees and stops.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

use crate::types::Symbol;

/// Why a claimed suffix array was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VerifyError {
    /// The array does not have one entry per buffer byte.
    #[error("suffix array has {array_len} entries but buffer has {buffer_len} bytes")]
    LengthMismatch { buffer_len: usize, array_len: usize },

    /// `sa[index]` is outside `[0, n)`.
    #[error("invalid suffix array entry: sa[{index}] = {value}")]
    InvalidEntry { index: usize, value: i128 },

    /// `sa[index]` repeats a value seen at an earlier index.
    #[error("duplicate suffix array entry: sa[{index}] = {value} was seen before")]
    DuplicateEntry { index: usize, value: i128 },

    /// The derived BWT has no sentinel at the row the derivation recorded.
    #[error("inverse BWT did not start at the sentinel (row {row})")]
    MissingSentinel { row: usize },

    /// The inverse BWT walk diverged from the buffer at `position`.
    #[error(
        "inverse BWT did not produce original buffer: position {position}: expected {expected}, got {actual}{divergence}"
    )]
    ReconstructionMismatch {
        position: usize,
        expected: u8,
        actual: Symbol,
        divergence: Divergence,
    },
}

/// How the inverse walk diverged.
///
/// Two suffixes preceded by the same byte can trade places without changing
/// the BWT at all, so the walk checks the claimed order of each row it lands
/// on as well as the symbol it reads there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "by", rename_all = "snake_case")]
pub enum Divergence {
    /// The walk read a different symbol than the buffer holds.
    Symbol,
    /// The symbol matched, but the claimed array puts a different suffix at
    /// the row the walk reached; the walk needed suffix `position + 1`.
    Order { row: usize, claimed_start: usize },
}

impl fmt::Display for Divergence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Divergence::Symbol => Ok(()),
            Divergence::Order { row, claimed_start } => {
                write!(f, " (row {} claims suffix {})", row, claimed_start)
            }
        }
    }
}

impl VerifyError {
    /// Short machine-friendly name of the failure kind.
    pub fn kind(&self) -> &'static str {
        match self {
            VerifyError::LengthMismatch { .. } => "length_mismatch",
            VerifyError::InvalidEntry { .. } => "invalid_entry",
            VerifyError::DuplicateEntry { .. } => "duplicate_entry",
            VerifyError::MissingSentinel { .. } => "missing_sentinel",
            VerifyError::ReconstructionMismatch { .. } => "reconstruction_mismatch",
        }
    }
}
