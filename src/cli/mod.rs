// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the savera command-line interface.
//!
//! Four subcommands: `check` builds and verifies suffix arrays for a corpus,
//! `verify` checks a suffix array file produced by some other tool, `build`
//! writes one with SA-IS, and `bench` times construction alone.

pub mod display;

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use savera::sa_file::IndexWidth;
use savera::BuilderKind;

#[derive(Parser)]
#[command(
    name = "savera",
    about = "Linear-time suffix array verification",
    version
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug). SAVERA_LOG overrides.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a suffix array for each file and verify it
    Check {
        /// Corpus files to check
        files: Vec<PathBuf>,

        /// JSON manifest listing corpus files (may be repeated)
        #[arg(short, long)]
        manifest: Vec<PathBuf>,

        /// Construction algorithm under test
        #[arg(short, long, value_enum, default_value_t = BuilderKind::Sais)]
        builder: BuilderKind,

        /// Worker threads (default: one per core). Each file in flight needs
        /// about 28 bytes of memory per input byte; use --jobs 1 for multi-GiB files
        #[arg(short, long)]
        jobs: Option<usize>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Verify a suffix array file against its text
    Verify {
        /// The text the suffix array was built for
        text: PathBuf,

        /// Suffix array as raw little-endian integers
        sa: PathBuf,

        /// Entry width of the suffix array file
        #[arg(short, long, value_enum, default_value_t = IndexWidth::W64)]
        width: IndexWidth,
    },

    /// Build a suffix array with SA-IS and write it to a file
    Build {
        /// Input text
        text: PathBuf,

        /// Output suffix array file
        output: PathBuf,

        /// Entry width of the output file
        #[arg(short, long, value_enum, default_value_t = IndexWidth::W64)]
        width: IndexWidth,
    },

    /// Time suffix array construction only, over cached file contents
    Bench {
        /// Corpus files to benchmark
        files: Vec<PathBuf>,

        /// JSON manifest listing corpus files (may be repeated)
        #[arg(short, long)]
        manifest: Vec<PathBuf>,

        /// Construction algorithm to time
        #[arg(short, long, value_enum, default_value_t = BuilderKind::Sais)]
        builder: BuilderKind,

        /// Builds per file
        #[arg(short = 'n', long, default_value = "5")]
        iterations: usize,

        /// Print the results as JSON
        #[arg(long)]
        json: bool,
    },
}
