// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Running the corpus check across files, in parallel when enabled.
//!
//! Files have no data dependency on each other, so with the `parallel`
//! feature rayon spreads them over a pool. Every worker gets its own builder
//! and `Verifier` through `map_init`, so scratch space is never shared. Peak
//! memory grows with the number of jobs, since each in-flight file holds its
//! bytes, its suffix array and the verifier's scratch; `--jobs 1` keeps
//! gigabyte corpora in bounds.

use anyhow::Result;
use std::path::PathBuf;

#[cfg(feature = "parallel")]
use indicatif::{ProgressBar, ProgressStyle};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::{check_file, FileOutcome, HarnessConfig};
use crate::verify::Verifier;

/// Create a progress style for the check progress bar
#[cfg(feature = "parallel")]
fn create_progress_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.cyan} {prefix:<10} [{bar:40.cyan/dim}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("━━╸")
}

/// Build and verify every file in `paths`, returning outcomes in input order.
///
/// Stops at the first file that cannot be read.
#[cfg(feature = "parallel")]
pub fn check_corpus(paths: &[PathBuf], config: &HarnessConfig) -> Result<Vec<FileOutcome>> {
    let pb = if config.progress {
        let pb = ProgressBar::new(paths.len() as u64);
        pb.set_style(create_progress_style());
        pb.set_prefix("Checking");
        pb
    } else {
        ProgressBar::hidden()
    };

    let run = || {
        paths
            .par_iter()
            .map_init(
                || (config.builder.create(), Verifier::new()),
                |(builder, verifier), path| {
                    pb.set_message(path.display().to_string());
                    let outcome = check_file(path, builder.as_mut(), verifier);
                    pb.inc(1);
                    outcome
                },
            )
            .collect::<Result<Vec<_>>>()
    };

    let outcomes = match config.jobs {
        Some(jobs) => rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build()?
            .install(run),
        None => run(),
    }?;

    pb.finish_with_message(format!("checked {} files", outcomes.len()));
    Ok(outcomes)
}

/// Build and verify every file in `paths`, returning outcomes in input order.
///
/// Stops at the first file that cannot be read.
#[cfg(not(feature = "parallel"))]
pub fn check_corpus(paths: &[PathBuf], config: &HarnessConfig) -> Result<Vec<FileOutcome>> {
    let mut builder = config.builder.create();
    let mut verifier = Verifier::new();
    paths
        .iter()
        .map(|path| check_file(path, builder.as_mut(), &mut verifier))
        .collect()
}
