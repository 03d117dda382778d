//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

/// Suffix array by direct suffix comparison. The oracle for small inputs.
pub fn naive_suffix_array(text: &[u8]) -> Vec<usize> {
    let mut sa: Vec<usize> = (0..text.len()).collect();
    sa.sort_by(|&a, &b| text[a..].cmp(&text[b..]));
    sa
}

/// A copy of `sa` with entries `i` and `j` exchanged.
pub fn swapped(sa: &[usize], i: usize, j: usize) -> Vec<usize> {
    let mut out = sa.to_vec();
    out.swap(i, j);
    out
}

/// The Fibonacci word `s_k` over {a, b}: s_1 = "b", s_2 = "a", s_k = s_{k-1} s_{k-2}.
///
/// Highly repetitive, with long repeated prefixes between suffixes; a standard
/// stress input for suffix sorting.
pub fn fibonacci_word(k: usize) -> Vec<u8> {
    let (mut prev, mut cur) = (b"b".to_vec(), b"a".to_vec());
    match k {
        0 => return Vec::new(),
        1 => return prev,
        _ => {}
    }
    for _ in 2..k {
        let next = [cur.as_slice(), prev.as_slice()].concat();
        prev = cur;
        cur = next;
    }
    cur
}

/// `pattern` repeated until `len` bytes.
pub fn repeat_to(pattern: &[u8], len: usize) -> Vec<u8> {
    pattern.iter().copied().cycle().take(len).collect()
}

/// Deterministic pseudo-random bytes drawn from the first `alphabet` byte values.
pub fn pseudo_random_text(len: usize, alphabet: u8, seed: u64) -> Vec<u8> {
    let alphabet = alphabet.max(1) as u64;
    let mut state = seed | 1;
    (0..len)
        .map(|_| {
            // xorshift64
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state % alphabet) as u8
        })
        .collect()
}
