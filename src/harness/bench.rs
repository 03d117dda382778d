// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Builder timing over cached corpus content.
//!
//! Only construction is timed. Verification is skipped and file contents come
//! from a [`CorpusCache`], so neither disk reads nor the check itself leak
//! into the numbers. The output buffer is allocated once, before the clock
//! starts.

use anyhow::Result;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::info;

use super::as_millis;
use crate::builder::{BuilderKind, SuffixArrayBuilder};
use crate::corpus::CorpusCache;

/// Timing summary for repeated builds of one file.
#[derive(Debug, Clone, Serialize)]
pub struct BenchStats {
    pub path: PathBuf,
    pub builder: &'static str,
    pub bytes: usize,
    pub iterations: usize,
    #[serde(rename = "min_ms", serialize_with = "as_millis")]
    pub min: Duration,
    #[serde(rename = "mean_ms", serialize_with = "as_millis")]
    pub mean: Duration,
    #[serde(rename = "max_ms", serialize_with = "as_millis")]
    pub max: Duration,
}

impl BenchStats {
    /// Input throughput at the mean time, in MiB/s.
    pub fn throughput_mib_s(&self) -> f64 {
        let secs = self.mean.as_secs_f64();
        if secs == 0.0 {
            return f64::INFINITY;
        }
        self.bytes as f64 / (1024.0 * 1024.0) / secs
    }
}

/// Run `builder` over `bytes` `iterations` times (at least once).
pub fn bench_builder(
    path: &Path,
    bytes: &[u8],
    builder: &mut dyn SuffixArrayBuilder,
    iterations: usize,
) -> BenchStats {
    let iterations = iterations.max(1);
    let mut sa = vec![0usize; bytes.len()];

    let mut min = Duration::MAX;
    let mut max = Duration::ZERO;
    let mut total = Duration::ZERO;
    for _ in 0..iterations {
        let started = Instant::now();
        builder.build(bytes, &mut sa);
        let elapsed = started.elapsed();
        min = min.min(elapsed);
        max = max.max(elapsed);
        total += elapsed;
    }

    let stats = BenchStats {
        path: path.to_path_buf(),
        builder: builder.name(),
        bytes: bytes.len(),
        iterations,
        min,
        mean: mean_duration(total, iterations),
        max,
    };
    info!(
        path = %path.display(),
        builder = stats.builder,
        mean = ?stats.mean,
        mib_s = stats.throughput_mib_s(),
        "benchmark finished"
    );
    stats
}

/// `total / iterations` for any iteration count, including ones past `u32::MAX`.
fn mean_duration(total: Duration, iterations: usize) -> Duration {
    total.div_f64(iterations.max(1) as f64)
}

/// Benchmark `kind` over every file in `paths`, one file at a time.
///
/// Contents are loaded through `cache`, so repeated suites over the same
/// files read each one from disk only once.
pub fn bench_corpus(
    paths: &[PathBuf],
    cache: &CorpusCache,
    kind: BuilderKind,
    iterations: usize,
) -> Result<Vec<BenchStats>> {
    let mut builder = kind.create();
    paths
        .iter()
        .map(|path| {
            let bytes = cache.get_or_load(path)?;
            Ok(bench_builder(path, &bytes, builder.as_mut(), iterations))
        })
        .collect()
}
