//! End-to-end verification scenarios on known inputs.

use super::common::{assert_rejected, assert_verifies, naive_suffix_array, swapped, FIBONACCI_64K, SMALL_TEXTS};
use savera::{sais, verify_suffix_array, Divergence, Symbol, Verifier, VerifyError};

#[test]
fn known_arrays_verify() {
    assert_verifies(b"banana", &[5usize, 3, 1, 0, 4, 2]);
    assert_verifies(b"mississippi", &[10usize, 7, 4, 1, 0, 9, 8, 6, 3, 5, 2]);
    assert_verifies(b"abracadabra", &[10usize, 7, 0, 3, 5, 8, 1, 4, 6, 9, 2]);
    assert_verifies(b"a\0b\0a\0", &[5usize, 3, 1, 4, 0, 2]);
}

#[test]
fn naive_arrays_verify_for_small_texts() {
    for text in SMALL_TEXTS {
        assert_verifies(text, &naive_suffix_array(text));
    }
}

#[test]
fn empty_buffer_verifies_only_empty_array() {
    assert_verifies::<usize>(b"", &[]);
    assert_eq!(
        verify_suffix_array(b"", &[0usize]),
        Err(VerifyError::LengthMismatch {
            buffer_len: 0,
            array_len: 1
        })
    );
}

#[test]
fn single_byte() {
    assert_verifies(b"x", &[0usize]);
    assert_rejected(b"x", &[1usize], "invalid_entry");
}

#[test]
fn prefix_sorts_before_extension() {
    // "a" < "aa" < "aaa" < "aaaa" under the implicit sentinel
    assert_verifies(b"aaaa", &[3usize, 2, 1, 0]);
    let err = assert_rejected(b"aaaa", &[0usize, 1, 2, 3], "reconstruction_mismatch");
    assert!(matches!(
        err,
        VerifyError::ReconstructionMismatch {
            divergence: Divergence::Symbol,
            ..
        }
    ));
}

#[test]
fn zero_bytes_are_ordinary_symbols() {
    assert_verifies(b"\0\0", &[1usize, 0]);
    assert_rejected(b"\0\0", &[0usize, 1], "reconstruction_mismatch");
}

#[test]
fn swap_with_identical_bwt_is_caught() {
    // Both orders give L = "annb$aa"; only the row check tells them apart
    let err = verify_suffix_array(b"banana", &[5usize, 3, 1, 0, 2, 4]).unwrap_err();
    assert_eq!(
        err,
        VerifyError::ReconstructionMismatch {
            position: 3,
            expected: b'a',
            actual: Symbol::byte(b'a'),
            divergence: Divergence::Order {
                row: 5,
                claimed_start: 2
            },
        }
    );
    assert_eq!(
        err.to_string(),
        "inverse BWT did not produce original buffer: position 3: expected 97, got 97 (row 5 claims suffix 2)"
    );
}

#[test]
fn every_swap_of_banana_is_rejected() {
    let sa = [5usize, 3, 1, 0, 4, 2];
    for i in 0..sa.len() {
        for j in i + 1..sa.len() {
            assert_rejected(b"banana", &swapped(&sa, i, j), "reconstruction_mismatch");
        }
    }
}

#[test]
fn out_of_range_and_duplicate_entries() {
    assert_eq!(
        verify_suffix_array(b"banana", &[5usize, 3, 1, 0, 4, 6]),
        Err(VerifyError::InvalidEntry { index: 5, value: 6 })
    );
    assert_eq!(
        verify_suffix_array(b"banana", &[5usize, 3, 1, 0, 4, 4]),
        Err(VerifyError::DuplicateEntry { index: 5, value: 4 })
    );
}

#[test]
fn wrong_length_is_reported_before_entries() {
    assert_eq!(
        verify_suffix_array(b"banana", &[99usize, 0]),
        Err(VerifyError::LengthMismatch {
            buffer_len: 6,
            array_len: 2
        })
    );
}

#[test]
fn sais_output_verifies_on_fibonacci_word() {
    let text = &*FIBONACCI_64K;
    let sa = sais(text);
    assert_verifies(text, &sa);

    let tampered = swapped(&sa, 1000, 1001);
    assert_rejected(text, &tampered, "reconstruction_mismatch");
}

#[test]
fn verifier_reuse_has_no_memory() {
    let mut verifier = Verifier::new();
    assert!(verifier.verify(b"mississippi", &sais(b"mississippi")).is_ok());
    assert!(verifier.verify(b"banana", &[5usize, 3, 1, 0, 2, 4]).is_err());
    assert!(verifier.verify(b"ab", &[0usize, 1]).is_ok());
    assert!(verifier.verify(b"", &[] as &[usize]).is_ok());
    verifier.shrink();
    assert!(verifier.verify(b"banana", &[5usize, 3, 1, 0, 4, 2]).is_ok());
}
