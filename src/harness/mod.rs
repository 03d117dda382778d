// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Corpus harness: build a suffix array for each file, verify it, report.
//!
//! The verifier judges one input at a time. This layer runs it over a batch,
//! records per-file identity (path, size, CRC32) with timings, and decides the
//! batch verdict: a batch passes only if every file does.

pub mod bench;
pub mod parallel;

use serde::{Serialize, Serializer};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{info, warn};

use crate::builder::{BuilderKind, SuffixArrayBuilder};
use crate::corpus::load_file;
use crate::error::VerifyError;
use crate::verify::Verifier;

pub use bench::{bench_builder, bench_corpus, BenchStats};
pub use parallel::check_corpus;

/// Knobs for a corpus run.
#[derive(Debug, Clone, Default)]
pub struct HarnessConfig {
    /// Builder whose output is checked.
    pub builder: BuilderKind,
    /// Worker threads; `None` lets rayon decide. Ignored without `parallel`.
    pub jobs: Option<usize>,
    /// Show a progress bar on stderr.
    pub progress: bool,
}

/// Result of building and verifying one file.
#[derive(Debug, Clone, Serialize)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub bytes: usize,
    pub crc32: u32,
    pub builder: &'static str,
    #[serde(rename = "build_ms", serialize_with = "as_millis")]
    pub build_time: Duration,
    #[serde(rename = "verify_ms", serialize_with = "as_millis")]
    pub verify_time: Duration,
    /// `None` when the array verified.
    pub error: Option<VerifyError>,
}

impl FileOutcome {
    pub fn passed(&self) -> bool {
        self.error.is_none()
    }
}

/// Pass/fail tally over a batch of outcomes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub bytes: usize,
}

impl BatchSummary {
    pub fn from_outcomes(outcomes: &[FileOutcome]) -> Self {
        let passed = outcomes.iter().filter(|o| o.passed()).count();
        Self {
            total: outcomes.len(),
            passed,
            failed: outcomes.len() - passed,
            bytes: outcomes.iter().map(|o| o.bytes).sum(),
        }
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Load `path`, build its suffix array with `builder`, and verify it.
///
/// I/O failures are errors; a wrong suffix array is a failed outcome.
pub fn check_file(
    path: &Path,
    builder: &mut dyn SuffixArrayBuilder,
    verifier: &mut Verifier,
) -> anyhow::Result<FileOutcome> {
    let bytes = load_file(path)?;
    Ok(check_bytes(path, &bytes, builder, verifier))
}

/// Build and verify already-loaded content.
pub fn check_bytes(
    path: &Path,
    bytes: &[u8],
    builder: &mut dyn SuffixArrayBuilder,
    verifier: &mut Verifier,
) -> FileOutcome {
    let mut sa = vec![0usize; bytes.len()];

    info!(path = %path.display(), builder = builder.name(), bytes = bytes.len(), "building suffix array");
    let started = Instant::now();
    builder.build(bytes, &mut sa);
    let build_time = started.elapsed();

    info!(path = %path.display(), "verifying suffix array");
    let started = Instant::now();
    let result = verifier.verify(bytes, &sa);
    let verify_time = started.elapsed();

    if let Err(err) = &result {
        warn!(path = %path.display(), error = %err, "suffix array check failed");
    }

    FileOutcome {
        path: path.to_path_buf(),
        bytes: bytes.len(),
        crc32: crc32fast::hash(bytes),
        builder: builder.name(),
        build_time,
        verify_time,
        error: result.err(),
    }
}

pub(crate) fn as_millis<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_secs_f64() * 1000.0)
}
