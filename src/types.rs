// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Alphabet and index types shared by the verifier and the builders.
//!
//! The BWT of a byte buffer is a string over 257 symbols: the 256 byte values
//! plus one virtual sentinel that sorts before all of them. We encode every
//! symbol as its offset in that ordering, so the sentinel is code 0 and byte
//! `b` is code `b + 1`. Counting tables are then plain `[usize; 257]` arrays
//! indexed by code, with no hashing on the hot path.
//!
//! ```text
//! code:    0     1     2    ...   256
//! symbol:  $    0x00  0x01  ...  0xFF
//! ```

use serde::Serialize;
use std::fmt;

/// Number of symbols in the extended alphabet (sentinel + 256 bytes).
pub const ALPHABET_SIZE: usize = 257;

/// One symbol of the extended alphabet.
///
/// Ordering on `Symbol` is the alphabet ordering: the sentinel compares
/// smaller than every byte, bytes compare by value.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "Option<u8>")]
pub struct Symbol(u16);

impl Symbol {
    /// The virtual end-of-string marker.
    pub const SENTINEL: Symbol = Symbol(0);

    /// Symbol for a real byte.
    #[inline]
    pub const fn byte(b: u8) -> Self {
        Symbol(b as u16 + 1)
    }

    /// Offset of this symbol in the alphabet, in `0..ALPHABET_SIZE`.
    #[inline]
    pub const fn code(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn is_sentinel(self) -> bool {
        self.0 == 0
    }

    /// The byte this symbol stands for, or `None` for the sentinel.
    #[inline]
    pub const fn as_byte(self) -> Option<u8> {
        if self.0 == 0 {
            None
        } else {
            Some((self.0 - 1) as u8)
        }
    }
}

impl From<u8> for Symbol {
    fn from(b: u8) -> Self {
        Symbol::byte(b)
    }
}

impl From<Symbol> for Option<u8> {
    fn from(s: Symbol) -> Self {
        s.as_byte()
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_byte() {
            None => write!(f, "$"),
            Some(b) if b.is_ascii_graphic() => write!(f, "{:?}", b as char),
            Some(b) => write!(f, "0x{:02x}", b),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_byte() {
            None => write!(f, "sentinel"),
            Some(b) => write!(f, "{}", b),
        }
    }
}

/// An integer type a claimed suffix array may be stored in.
///
/// Builders emit arrays in whatever width suits them: `u32` keeps memory at
/// 4 bytes per entry for inputs under 4 GiB, `u64`/`usize` cover anything
/// larger, and some builders use signed integers. The verifier accepts all of
/// them and works in `usize` internally.
pub trait SuffixIndex: Copy + Send + Sync {
    /// The entry as a buffer position, or `None` if it cannot be one
    /// (negative, or wider than the address space).
    fn to_position(self) -> Option<usize>;

    /// The raw value, losslessly, for error reports.
    fn to_raw(self) -> i128;
}

macro_rules! impl_suffix_index {
    ($($t:ty),*) => {
        $(
            impl SuffixIndex for $t {
                #[inline]
                fn to_position(self) -> Option<usize> {
                    usize::try_from(self).ok()
                }

                #[inline]
                fn to_raw(self) -> i128 {
                    self as i128
                }
            }
        )*
    };
}

impl_suffix_index!(u32, u64, usize, i32, i64);
