// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for decoding suffix array files.
//!
//! Suffix array files come from other tools. Decoding garbage must return
//! Err, and whatever decodes must verify or fail cleanly against any text.

#![no_main]

use libfuzzer_sys::fuzz_target;
use savera::sa_file::{decode_suffix_array, IndexWidth, StoredSuffixArray};
use savera::verify_suffix_array;

fuzz_target!(|data: &[u8]| {
    let (text, raw) = data.split_at(data.len() / 3);

    for width in [IndexWidth::W32, IndexWidth::W64] {
        let Ok(stored) = decode_suffix_array(raw, width) else {
            assert_ne!(raw.len() % width.bytes(), 0, "aligned input must decode");
            continue;
        };
        let _ = match &stored {
            StoredSuffixArray::U32(sa) => verify_suffix_array(text, sa),
            StoredSuffixArray::U64(sa) => verify_suffix_array(text, sa),
        };
    }
});
