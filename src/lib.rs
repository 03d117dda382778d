//! Linear-time verification of suffix arrays.
//!
//! Checking a suffix array by comparing neighbouring suffixes costs O(n²) in
//! the worst case, which rules it out for the multi-gigabyte corpora that
//! suffix array construction algorithms are tested on. This crate checks a
//! claimed array in O(n) instead: it derives the Burrows-Wheeler transform
//! the array implies and inverts it with the LF-mapping, which must land on
//! the right row and regenerate the input exactly.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │ permutation  │──▶│     bwt      │──▶│     rank     │──▶│   inverse    │
//! │ (bijection   │   │ (L, $ row)   │   │ (P, C array) │   │  (LF walk)   │
//! │  onto 0..n)  │   │              │   │              │   │              │
//! └──────────────┘   └──────────────┘   └──────────────┘   └──────────────┘
//!        └──────────────────── verify::Verifier ─────────────────────┘
//!
//! builder (SA-IS, naive) ──▶ harness (corpus check, bench) ──▶ savera CLI
//! ```
//!
//! The verifier core is `verify`, `types` and `error`. Everything else is the
//! machinery for running it over corpora: builders under test, a corpus cache,
//! the batch harness and an on-disk format for the command line.
//!
//! # Usage
//!
//! ```
//! use savera::{sais, verify_suffix_array};
//!
//! let text = b"mississippi";
//! let sa = sais(text);
//! assert!(verify_suffix_array(text, &sa).is_ok());
//! ```

// Module declarations
pub mod builder;
pub mod contracts;
pub mod corpus;
mod error;
pub mod harness;
pub mod sa_file;
mod sais;
mod types;
pub mod verify;

#[doc(hidden)]
pub mod testing;

// Re-exports for public API
pub use builder::{BuilderKind, NaiveBuilder, Sais, SuffixArrayBuilder};
pub use corpus::{CorpusCache, CorpusManifest};
pub use error::{Divergence, VerifyError};
pub use harness::{check_corpus, BatchSummary, BenchStats, FileOutcome, HarnessConfig};
pub use sais::{sais, sais_into};
pub use types::{SuffixIndex, Symbol, ALPHABET_SIZE};
pub use verify::{verify_suffix_array, Bwt, RankTable, Verifier};
