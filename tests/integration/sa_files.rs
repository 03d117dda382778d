//! Suffix array files written by one tool and verified by another.

use savera::sa_file::{read_suffix_array, write_suffix_array, IndexWidth, StoredSuffixArray};
use savera::{sais, verify_suffix_array, VerifyError};
use std::fs;

fn verify_stored(text: &[u8], stored: &StoredSuffixArray) -> Result<(), VerifyError> {
    match stored {
        StoredSuffixArray::U32(sa) => verify_suffix_array(text, sa),
        StoredSuffixArray::U64(sa) => verify_suffix_array(text, sa),
    }
}

#[test]
fn built_file_verifies_at_both_widths() {
    let dir = tempfile::tempdir().unwrap();
    let text = b"she sells sea shells by the sea shore";
    let sa = sais(text);

    for (width, name) in [(IndexWidth::W32, "text.sa32"), (IndexWidth::W64, "text.sa64")] {
        let path = dir.path().join(name);
        write_suffix_array(&path, &sa, width).unwrap();
        assert_eq!(fs::metadata(&path).unwrap().len() as usize, sa.len() * width.bytes());

        let stored = read_suffix_array(&path, width).unwrap();
        assert_eq!(verify_stored(text, &stored), Ok(()));
    }
}

#[test]
fn reading_at_the_wrong_width_fails_verification() {
    let dir = tempfile::tempdir().unwrap();
    let text = b"banana";
    let path = dir.path().join("banana.sa");
    write_suffix_array(&path, &sais(text), IndexWidth::W32).unwrap();

    // 24 bytes read as 64-bit entries: three garbage entries for six bytes
    let stored = read_suffix_array(&path, IndexWidth::W64).unwrap();
    assert_eq!(stored.len(), 3);
    assert!(matches!(
        verify_stored(text, &stored),
        Err(VerifyError::LengthMismatch {
            buffer_len: 6,
            array_len: 3
        })
    ));
}

#[test]
fn corrupted_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let text = b"mississippi";
    let path = dir.path().join("mississippi.sa");
    write_suffix_array(&path, &sais(text), IndexWidth::W32).unwrap();

    // Swap the first two entries on disk
    let mut bytes = fs::read(&path).unwrap();
    let (head, tail) = bytes.split_at_mut(4);
    head.swap_with_slice(&mut tail[..4]);
    fs::write(&path, &bytes).unwrap();

    let stored = read_suffix_array(&path, IndexWidth::W32).unwrap();
    let err = verify_stored(text, &stored).unwrap_err();
    assert_eq!(err.kind(), "reconstruction_mismatch");
}
