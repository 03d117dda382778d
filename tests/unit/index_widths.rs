//! Suffix arrays stored at different integer widths.

use super::common::assert_rejected;
use savera::{sais, verify_suffix_array, VerifyError};

#[test]
fn all_widths_verify_the_same_array() {
    let text = b"abracadabra";
    let sa = sais(text);

    let as_u32: Vec<u32> = sa.iter().map(|&p| p as u32).collect();
    let as_u64: Vec<u64> = sa.iter().map(|&p| p as u64).collect();
    let as_i32: Vec<i32> = sa.iter().map(|&p| p as i32).collect();
    let as_i64: Vec<i64> = sa.iter().map(|&p| p as i64).collect();

    assert!(verify_suffix_array(text, &sa).is_ok());
    assert!(verify_suffix_array(text, &as_u32).is_ok());
    assert!(verify_suffix_array(text, &as_u64).is_ok());
    assert!(verify_suffix_array(text, &as_i32).is_ok());
    assert!(verify_suffix_array(text, &as_i64).is_ok());
}

#[test]
fn negative_entries_are_invalid() {
    assert_eq!(
        verify_suffix_array(b"banana", &[5i32, 3, 1, -1, 4, 2]),
        Err(VerifyError::InvalidEntry { index: 3, value: -1 })
    );
    assert_rejected(b"ab", &[i64::MIN, 0], "invalid_entry");
}

#[test]
fn huge_unsigned_entries_are_invalid() {
    let err = verify_suffix_array(b"ab", &[0u64, u64::MAX]).unwrap_err();
    assert_eq!(
        err,
        VerifyError::InvalidEntry {
            index: 1,
            value: u64::MAX as i128
        }
    );
}
