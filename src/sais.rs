// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! SA-IS: Suffix Array by Induced Sorting
//!
//! Linear-time O(n) suffix array construction algorithm. This is the builder
//! the corpus harness feeds into the verifier; the verifier itself never
//! calls it.
//!
//! # Algorithm Overview
//!
//! ```text
//! Input: "banana"   ($ = virtual sentinel at position n, never stored)
//!
//! Step 1: Classify suffixes
//! ┌───┬───┬───┬───┬───┬───┬───┐
//! │ b │ a │ n │ a │ n │ a │ $ │
//! ├───┼───┼───┼───┼───┼───┼───┤
//! │ L │ S │ L │ S │ L │ L │ S │   (S = smaller than next, L = larger)
//! └───┴───┴───┴───┴───┴───┴───┘
//!
//! Step 2: Find LMS (Leftmost S-type) suffixes
//!         LMS = S-type preceded by L-type
//!         Positions: 1, 3 (and the sentinel at 6)
//!
//! Step 3: Induced sorting
//!         - Place LMS suffixes at bucket tails
//!         - Seed the L scan with n - 1 (the suffix right before $)
//!         - Induce L-type positions (left-to-right)
//!         - Induce S-type positions (right-to-left)
//!
//! Step 4: If LMS substrings not unique, recurse on reduced problem
//!
//! Step 5: Use sorted LMS order to induce final suffix array
//!
//! Output: [5, 3, 1, 0, 4, 2]
//! ```
//!
//! The sentinel is virtual rather than an appended byte, so every byte value
//! including 0 is an ordinary symbol and the input is never copied.
//!
//! # Complexity
//!
//! - Time: O(n)
//! - Space: O(n)
//!
//! # References
//!
//! - Nong, Zhang, Chan (2009): "Linear Suffix Array Construction by Almost Pure Induced-Sorting"
//! - <https://doi.org/10.1109/DCC.2009.42>

const EMPTY: usize = usize::MAX;

/// A symbol SA-IS can bucket: bytes at the top level, names when recursing.
trait Char: Copy + Eq + Ord {
    fn bucket(self) -> usize;
}

impl Char for u8 {
    #[inline]
    fn bucket(self) -> usize {
        self as usize
    }
}

impl Char for usize {
    #[inline]
    fn bucket(self) -> usize {
        self
    }
}

/// Build the suffix array of `text` into `sa` in O(n) time.
///
/// `sa[i]` is the start of the `i`-th smallest suffix, with a suffix sorting
/// before every longer suffix it prefixes.
///
/// # Panics
/// Panics if `sa.len() != text.len()`.
pub fn sais_into(text: &[u8], sa: &mut [usize]) {
    assert_eq!(
        sa.len(),
        text.len(),
        "suffix array buffer must have one slot per input byte"
    );
    sais_core(text, 256, sa);
}

/// Build the suffix array of `text` in O(n) time.
pub fn sais(text: &[u8]) -> Vec<usize> {
    let mut sa = vec![0; text.len()];
    sais_into(text, &mut sa);
    sa
}

fn sais_core<C: Char>(text: &[C], alphabet_size: usize, sa: &mut [usize]) {
    let n = text.len();
    match n {
        0 => return,
        1 => {
            sa[0] = 0;
            return;
        }
        _ => {}
    }

    // Step 1: classify suffixes
    let is_s = classify_suffixes(text);
    let is_lms = |i: usize| i > 0 && i < n && is_s[i] && !is_s[i - 1];

    let bucket_sizes = compute_bucket_sizes(text, alphabet_size);

    // Step 2-3: place LMS suffixes in text order, induce
    sa.fill(EMPTY);
    let mut tails = compute_bucket_tails(&bucket_sizes);
    for i in (1..n).filter(|&i| is_lms(i)) {
        let c = text[i].bucket();
        tails[c] -= 1;
        sa[tails[c]] = i;
    }
    induce(text, &is_s, &bucket_sizes, sa);

    // LMS suffixes now appear in sorted order of their LMS substrings
    let sorted_lms: Vec<usize> = sa.iter().copied().filter(|&p| p != EMPTY && is_lms(p)).collect();
    let m = sorted_lms.len();

    // Step 4: name LMS substrings. LMS positions are never adjacent, so p / 2 is unique
    let mut names = vec![EMPTY; n / 2 + 1];
    let mut name = 0usize;
    let mut prev: Option<usize> = None;
    for &pos in &sorted_lms {
        if let Some(prev) = prev {
            if !lms_substrings_equal(text, &is_s, prev, pos) {
                name += 1;
            }
        }
        names[pos / 2] = name;
        prev = Some(pos);
    }
    let name_count = if m == 0 { 0 } else { name + 1 };

    let sorted_lms = if name_count < m {
        let lms_positions: Vec<usize> = (1..n).filter(|&i| is_lms(i)).collect();
        let reduced: Vec<usize> = lms_positions.iter().map(|&p| names[p / 2]).collect();
        drop(names);

        let mut reduced_sa = vec![0usize; m];
        sais_core(&reduced, name_count, &mut reduced_sa);
        reduced_sa.iter().map(|&i| lms_positions[i]).collect()
    } else {
        // All unique: first-pass order is already final
        sorted_lms
    };

    // Step 5: final induced sort from correctly ordered LMS suffixes
    sa.fill(EMPTY);
    let mut tails = compute_bucket_tails(&bucket_sizes);
    for &pos in sorted_lms.iter().rev() {
        let c = text[pos].bucket();
        tails[c] -= 1;
        sa[tails[c]] = pos;
    }
    induce(text, &is_s, &bucket_sizes, sa);
}

/// Induce L-type then S-type positions from the LMS seeds already in `sa`.
fn induce<C: Char>(text: &[C], is_s: &[bool], bucket_sizes: &[usize], sa: &mut [usize]) {
    let n = text.len();

    // Induce L-type, starting with the suffix before the virtual sentinel
    let mut heads = compute_bucket_heads(bucket_sizes);
    let c = text[n - 1].bucket();
    sa[heads[c]] = n - 1;
    heads[c] += 1;
    for i in 0..n {
        let pos = sa[i];
        if pos == EMPTY || pos == 0 {
            continue;
        }
        let j = pos - 1;
        if !is_s[j] {
            let c = text[j].bucket();
            sa[heads[c]] = j;
            heads[c] += 1;
        }
    }

    // Induce S-type
    let mut tails = compute_bucket_tails(bucket_sizes);
    for i in (0..n).rev() {
        let pos = sa[i];
        if pos == EMPTY || pos == 0 {
            continue;
        }
        let j = pos - 1;
        if is_s[j] {
            let c = text[j].bucket();
            tails[c] -= 1;
            sa[tails[c]] = j;
        }
    }
}

/// `true` for S-type positions. The last real position is always L-type since
/// every symbol is larger than the sentinel.
fn classify_suffixes<C: Char>(text: &[C]) -> Vec<bool> {
    let n = text.len();
    let mut is_s = vec![false; n];
    for i in (0..n - 1).rev() {
        is_s[i] = text[i] < text[i + 1] || (text[i] == text[i + 1] && is_s[i + 1]);
    }
    is_s
}

fn compute_bucket_sizes<C: Char>(text: &[C], alphabet_size: usize) -> Vec<usize> {
    let mut sizes = vec![0usize; alphabet_size];
    for &c in text {
        sizes[c.bucket()] += 1;
    }
    sizes
}

fn compute_bucket_heads(sizes: &[usize]) -> Vec<usize> {
    let mut heads = Vec::with_capacity(sizes.len());
    let mut sum = 0;
    for &size in sizes {
        heads.push(sum);
        sum += size;
    }
    heads
}

fn compute_bucket_tails(sizes: &[usize]) -> Vec<usize> {
    let mut tails = Vec::with_capacity(sizes.len());
    let mut sum = 0;
    for &size in sizes {
        sum += size;
        tails.push(sum);
    }
    tails
}

/// Compare the LMS substrings starting at `a` and `b`.
///
/// A substring that runs into the sentinel is unique, so it never equals another.
fn lms_substrings_equal<C: Char>(text: &[C], is_s: &[bool], a: usize, b: usize) -> bool {
    let n = text.len();
    let is_lms = |i: usize| i > 0 && is_s[i] && !is_s[i - 1];

    let mut k = 0;
    loop {
        let (i, j) = (a + k, b + k);
        if i == n || j == n {
            return false;
        }
        if text[i] != text[j] || is_s[i] != is_s[j] {
            return false;
        }
        if k > 0 {
            let (end_a, end_b) = (is_lms(i), is_lms(j));
            if end_a || end_b {
                return end_a && end_b;
            }
        }
        k += 1;
    }
}
