// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

use savera::corpus::load_file;
use savera::harness::bench_corpus;
use savera::sa_file::{read_suffix_array, write_suffix_array, IndexWidth, StoredSuffixArray};
use savera::{
    check_corpus, sais, verify_suffix_array, BatchSummary, BenchStats, BuilderKind, CorpusCache, CorpusManifest,
    FileOutcome, HarnessConfig,
};

mod cli;
use cli::display::{self, BOLD, DIM};
use cli::{Cli, Commands};

/// Outcome of a completed run. Errors that stop the run exit with status 2.
enum Verdict {
    Pass,
    Fail,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli.command) {
        Ok(Verdict::Pass) => ExitCode::SUCCESS,
        Ok(Verdict::Fail) => ExitCode::from(1),
        Err(e) => {
            eprintln!("❌ {:#}", e);
            ExitCode::from(2)
        }
    }
}

/// Logs go to stderr. `SAVERA_LOG` takes a full filter directive; otherwise
/// `-v` picks the level.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_env("SAVERA_LOG").unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .compact()
        .try_init();
}

fn run(command: Commands) -> Result<Verdict> {
    match command {
        Commands::Check {
            files,
            manifest,
            builder,
            jobs,
            json,
        } => run_check(&collect_paths(files, &manifest)?, builder, jobs, json),
        Commands::Verify { text, sa, width } => run_verify(&text, &sa, width),
        Commands::Build { text, output, width } => run_build(&text, &output, width),
        Commands::Bench {
            files,
            manifest,
            builder,
            iterations,
            json,
        } => run_bench(&collect_paths(files, &manifest)?, builder, iterations, json),
    }
}

/// Positional files first, then each manifest's files in manifest order.
fn collect_paths(files: Vec<PathBuf>, manifests: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut paths = files;
    for path in manifests {
        let manifest = CorpusManifest::load(path)?;
        tracing::info!(manifest = %manifest.name, files = manifest.files.len(), "loaded manifest");
        paths.extend(manifest.paths());
    }
    if paths.is_empty() {
        anyhow::bail!("no input files; pass files or --manifest");
    }
    Ok(paths)
}

#[derive(Serialize)]
struct CheckReport<'a> {
    summary: &'a BatchSummary,
    files: &'a [FileOutcome],
}

fn run_check(paths: &[PathBuf], builder: BuilderKind, jobs: Option<usize>, json: bool) -> Result<Verdict> {
    let config = HarnessConfig {
        builder,
        jobs,
        progress: !json && std::io::stderr().is_terminal(),
    };

    let outcomes = check_corpus(paths, &config)?;
    let summary = BatchSummary::from_outcomes(&outcomes);

    if json {
        let report = CheckReport {
            summary: &summary,
            files: &outcomes,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for outcome in &outcomes {
            print_outcome(outcome);
        }
        println!();
        println!(
            "{} {}/{} passed, {} checked with {}",
            if summary.all_passed() {
                display::pass_mark()
            } else {
                display::fail_mark()
            },
            summary.passed,
            summary.total,
            display::format_size(summary.bytes),
            builder.name(),
        );
    }

    Ok(if summary.all_passed() {
        Verdict::Pass
    } else {
        Verdict::Fail
    })
}

fn print_outcome(outcome: &FileOutcome) {
    let path = display::truncate_path(&outcome.path.display().to_string(), 40);
    let timings = display::color(
        DIM,
        &format!(
            "build {} verify {} crc32 {:08x}",
            display::format_duration(outcome.build_time),
            display::format_duration(outcome.verify_time),
            outcome.crc32,
        ),
    );
    match &outcome.error {
        None => println!(
            "{} {:<40} {:>10}  {}",
            display::pass_mark(),
            path,
            display::format_size(outcome.bytes),
            timings
        ),
        Some(err) => {
            println!(
                "{} {:<40} {:>10}  {}",
                display::fail_mark(),
                path,
                display::format_size(outcome.bytes),
                timings
            );
            println!("    {}", err);
        }
    }
}

fn run_verify(text: &Path, sa: &Path, width: IndexWidth) -> Result<Verdict> {
    let buffer = load_file(text)?;
    let stored = read_suffix_array(sa, width)?;

    let started = Instant::now();
    let result = match &stored {
        StoredSuffixArray::U32(entries) => verify_suffix_array(&buffer, entries),
        StoredSuffixArray::U64(entries) => verify_suffix_array(&buffer, entries),
    };
    let elapsed = started.elapsed();

    match result {
        Ok(()) => {
            println!(
                "{} {} is the suffix array of {} ({}, {})",
                display::pass_mark(),
                sa.display(),
                text.display(),
                display::format_size(buffer.len()),
                display::format_duration(elapsed)
            );
            Ok(Verdict::Pass)
        }
        Err(err) => {
            println!("{} {}", display::fail_mark(), display::color(BOLD, &sa.display().to_string()));
            println!("    {}", err);
            Ok(Verdict::Fail)
        }
    }
}

fn run_build(text: &Path, output: &Path, width: IndexWidth) -> Result<Verdict> {
    let buffer = load_file(text)?;

    let started = Instant::now();
    let sa = sais(&buffer);
    let elapsed = started.elapsed();

    write_suffix_array(output, &sa, width)?;
    println!(
        "{} {} ({} entries, {})",
        display::pass_mark(),
        output.display(),
        sa.len(),
        display::format_duration(elapsed)
    );
    Ok(Verdict::Pass)
}

fn run_bench(paths: &[PathBuf], builder: BuilderKind, iterations: usize, json: bool) -> Result<Verdict> {
    let cache = CorpusCache::new();
    let stats = bench_corpus(paths, &cache, builder, iterations)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        for s in &stats {
            print_bench(s);
        }
    }
    Ok(Verdict::Pass)
}

fn print_bench(stats: &BenchStats) {
    println!(
        "{:<40} {:>10}  {:>9} {:>9} {:>9}  {}",
        display::truncate_path(&stats.path.display().to_string(), 40),
        display::format_size(stats.bytes),
        display::format_duration(stats.min),
        display::format_duration(stats.mean),
        display::format_duration(stats.max),
        display::throughput(stats.throughput_mib_s()),
    );
}
