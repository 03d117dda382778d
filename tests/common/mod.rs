//! Shared test utilities and fixtures.

#![allow(dead_code)]

use savera::{verify_suffix_array, SuffixIndex, VerifyError};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

// Re-export canonical test utilities from savera::testing
pub use savera::testing::{fibonacci_word, naive_suffix_array, pseudo_random_text, repeat_to, swapped};

// ============================================================================
// FIXTURES
// ============================================================================

/// Small inputs whose suffix arrays are easy to check by hand.
pub const SMALL_TEXTS: &[&[u8]] = &[
    b"",
    b"a",
    b"ab",
    b"ba",
    b"aa",
    b"abba",
    b"banana",
    b"mississippi",
    b"abracadabra",
    b"abacabacabac",
    b"\0",
    b"\0\0\0",
    b"a\0b\0a\0",
    b"\xff\x00\xff\x00",
];

/// A 64 KiB stress input, generated once per test binary.
pub static FIBONACCI_64K: LazyLock<Vec<u8>> = LazyLock::new(|| {
    let mut k = 1;
    while fibonacci_word(k).len() < 64 * 1024 {
        k += 1;
    }
    let mut word = fibonacci_word(k);
    word.truncate(64 * 1024);
    word
});

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Assert that `sa` verifies against `text`.
pub fn assert_verifies<I: SuffixIndex + std::fmt::Debug>(text: &[u8], sa: &[I]) {
    if let Err(e) = verify_suffix_array(text, sa) {
        panic!(
            "expected {:?} to verify for {:?}, got: {}",
            sa,
            String::from_utf8_lossy(text),
            e
        );
    }
}

/// Assert that `sa` fails with an error of the given kind.
pub fn assert_rejected<I: SuffixIndex>(text: &[u8], sa: &[I], kind: &str) -> VerifyError {
    match verify_suffix_array(text, sa) {
        Ok(()) => panic!(
            "expected {} for {:?}, but the array verified",
            kind,
            String::from_utf8_lossy(text)
        ),
        Err(e) => {
            assert_eq!(e.kind(), kind, "unexpected failure: {}", e);
            e
        }
    }
}

// ============================================================================
// CORPUS FILES
// ============================================================================

/// Write `files` into `dir` and return their paths in order.
pub fn write_corpus(dir: &Path, files: &[(&str, &[u8])]) -> Vec<PathBuf> {
    files
        .iter()
        .map(|(name, content)| {
            let path = dir.join(name);
            fs::write(&path, content).expect("Failed to write corpus file");
            path
        })
        .collect()
}
