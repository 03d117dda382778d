// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the verifier on arbitrary (buffer, array) pairs.
//!
//! Claimed arrays come from untrusted tools, so any input must produce Ok or
//! a VerifyError, never a panic or an out-of-bounds index.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use savera::{sais, verify_suffix_array, VerifyError};

#[derive(Arbitrary, Debug)]
struct Input {
    buffer: Vec<u8>,
    claimed: Vec<i64>,
    /// Swap two entries of the true array instead of using `claimed`
    tamper: Option<(u16, u16)>,
}

fuzz_target!(|input: Input| {
    // Property 1: arbitrary claimed arrays never panic
    let _ = verify_suffix_array(&input.buffer, &input.claimed);

    let sa = sais(&input.buffer);
    let n = sa.len();

    // Property 2: the true array always verifies
    if let Err(e) = verify_suffix_array(&input.buffer, &sa) {
        panic!("true suffix array rejected: {}", e);
    }

    // Property 3: swapping two distinct entries is always caught
    if let Some((i, j)) = input.tamper {
        if n >= 2 {
            let (i, j) = (i as usize % n, j as usize % n);
            if i != j {
                let mut tampered = sa.clone();
                tampered.swap(i, j);
                match verify_suffix_array(&input.buffer, &tampered) {
                    Err(VerifyError::ReconstructionMismatch { .. }) => {}
                    other => panic!("swap of rows {} and {} gave {:?}", i, j, other),
                }
            }
        }
    }
});
