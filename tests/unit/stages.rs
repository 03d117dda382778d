//! The individual verification stages, driven through the public API.

use savera::verify::{check_permutation, count_ranks, derive_bwt, invert_bwt, reconstruct, LfWalk};
use savera::{Symbol, VerifyError};

const BANANA_SA: [usize; 6] = [5, 3, 1, 0, 4, 2];

#[test]
fn banana_bwt() {
    let bwt = derive_bwt(b"banana", &BANANA_SA).unwrap();
    assert_eq!(bwt.to_display_string(), "annb$aa");
    assert_eq!(bwt.sentinel_row(), 4);
    assert_eq!(bwt.len(), 7);
}

#[test]
fn banana_ranks_and_smaller_counts() {
    let bwt = derive_bwt(b"banana", &BANANA_SA).unwrap();
    let table = count_ranks(&bwt);

    assert_eq!(table.ranks(), &[0, 0, 1, 0, 0, 1, 2]);
    assert_eq!(table.smaller_than(Symbol::SENTINEL), 0);
    assert_eq!(table.smaller_than(Symbol::byte(b'a')), 1);
    assert_eq!(table.smaller_than(Symbol::byte(b'b')), 4);
    assert_eq!(table.smaller_than(Symbol::byte(b'n')), 5);
    // Bytes after the last present symbol all see the full count
    assert_eq!(table.smaller_than(Symbol::byte(0xff)), 7);
}

#[test]
fn walk_yields_buffer_backwards() {
    let bwt = derive_bwt(b"banana", &BANANA_SA).unwrap();
    let table = count_ranks(&bwt);

    let walk = LfWalk::new(&bwt, &table).unwrap();
    assert_eq!(walk.len(), 6);
    let bytes: Vec<u8> = walk.map(|s| s.as_byte().unwrap()).collect();
    assert_eq!(bytes, b"ananab");
    assert_eq!(invert_bwt(&bwt, &table).as_deref(), Some(&b"banana"[..]));
}

#[test]
fn reconstruct_accepts_true_array() {
    let bwt = derive_bwt(b"banana", &BANANA_SA).unwrap();
    let table = count_ranks(&bwt);
    assert_eq!(reconstruct(b"banana", &BANANA_SA, &bwt, &table), Ok(()));
}

#[test]
fn permutation_stage_reuses_scratch() {
    let mut seen = Vec::new();
    assert!(check_permutation(3, &[2usize, 0, 1], &mut seen).is_ok());
    assert_eq!(
        check_permutation(3, &[2usize, 2, 1], &mut seen),
        Err(VerifyError::DuplicateEntry { index: 1, value: 2 })
    );
    assert!(check_permutation(2, &[1usize, 0], &mut seen).is_ok());
}

#[test]
fn empty_buffer_bwt_is_lone_sentinel() {
    let bwt = derive_bwt::<usize>(b"", &[]).unwrap();
    assert_eq!(bwt.symbols(), &[Symbol::SENTINEL]);
    assert_eq!(bwt.sentinel_row(), 0);
    let table = count_ranks(&bwt);
    assert_eq!(invert_bwt(&bwt, &table), Some(Vec::new()));
}
