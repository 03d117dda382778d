// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Suffix array builders: the routines under test.
//!
//! The verifier treats construction as a black box: bytes in, permutation
//! out. Anything implementing [`SuffixArrayBuilder`] can be plugged into the
//! corpus harness and benchmarked or checked.

use clap::ValueEnum;
use serde::Serialize;

use crate::sais::sais_into;

/// Contract for a suffix array construction algorithm.
///
/// `build` fills `sa` (already `text.len()` long) with the start positions of
/// the suffixes of `text` in sorted order, where a suffix sorts before every
/// longer suffix it prefixes. Builders take `&mut self` so they can keep
/// working memory between calls.
pub trait SuffixArrayBuilder {
    /// Short name for reports.
    fn name(&self) -> &'static str;

    fn build(&mut self, text: &[u8], sa: &mut [usize]);
}

/// Linear-time induced sorting.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sais;

impl SuffixArrayBuilder for Sais {
    fn name(&self) -> &'static str {
        "sais"
    }

    fn build(&mut self, text: &[u8], sa: &mut [usize]) {
        sais_into(text, sa);
    }
}

/// Sort positions by comparing suffix slices directly.
///
/// O(n² log n) in the worst case. Only useful as an oracle on small inputs.
#[derive(Debug, Default, Clone, Copy)]
pub struct NaiveBuilder;

impl SuffixArrayBuilder for NaiveBuilder {
    fn name(&self) -> &'static str {
        "naive"
    }

    fn build(&mut self, text: &[u8], sa: &mut [usize]) {
        assert_eq!(
            sa.len(),
            text.len(),
            "suffix array buffer must have one slot per input byte"
        );
        for (i, slot) in sa.iter_mut().enumerate() {
            *slot = i;
        }
        sa.sort_unstable_by(|&a, &b| text[a..].cmp(&text[b..]));
    }
}

/// Builders selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BuilderKind {
    #[default]
    Sais,
    Naive,
}

impl BuilderKind {
    /// A fresh builder of this kind.
    pub fn create(self) -> Box<dyn SuffixArrayBuilder + Send> {
        match self {
            BuilderKind::Sais => Box::new(Sais),
            BuilderKind::Naive => Box::new(NaiveBuilder),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BuilderKind::Sais => "sais",
            BuilderKind::Naive => "naive",
        }
    }
}
