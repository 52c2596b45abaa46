use unichar::surrogate::MIN_SUPPLEMENTARY_CODE_POINT;
use unichar::traverse::*;
use unichar::Error;

use crate::units;

#[test]
fn single_ascii() {
    let seq = [0x61u16];
    assert_eq!(code_point_at(&seq, 0), Ok(0x61));
    assert_eq!(unichar::surrogate::char_count(0x61), 1);
}

#[test]
fn surrogate_pair() {
    let seq = [0xD800u16, 0xDC00];
    assert_eq!(code_point_at(&seq, 0), Ok(MIN_SUPPLEMENTARY_CODE_POINT));
    assert_eq!(code_point_count(&seq, 0, 2), Ok(1));
    assert_eq!(code_point_at(&seq, 1), Ok(0xDC00));
    assert_eq!(code_point_before(&seq, 2), Ok(0x10000));
}

#[test]
fn lone_low_surrogate() {
    let seq = [0xDC00u16];
    assert_eq!(code_point_at(&seq, 0), Ok(0xDC00));
    assert_eq!(code_point_before(&seq, 1), Ok(0xDC00));
    assert_eq!(code_point_count(&seq, 0, 1), Ok(1));
    assert_eq!(offset_by_code_points(&seq, 0, 1), Ok(1));
}

#[test]
fn trailing_high_surrogate() {
    let seq = [0x61u16, 0xD800];
    assert_eq!(code_point_at(&seq, 1), Ok(0xD800));
    assert_eq!(code_point_count(&seq, 0, 2), Ok(2));
    assert_eq!(offset_by_code_points(&seq, 2, -1), Ok(1));
}

#[test]
fn stepping_agrees_with_counting() {
    let seqs = [
        units("plain ascii"),
        units("a\u{1F600}b\u{10000}\u{10FFFF}"),
        vec![0xDC00, 0xD800, 0xD800, 0xDC00, 0xDC00, 0x62, 0xD800],
        vec![],
    ];

    for seq in &seqs {
        let total = code_point_count(seq, 0, seq.len()).unwrap();

        let mut steps = 0;
        let mut i = 0;
        while i < seq.len() {
            i = offset_by_code_points(seq, i, 1).unwrap();
            steps += 1;
        }
        assert_eq!(i, seq.len());
        assert_eq!(steps, total);

        assert_eq!(offset_by_code_points(seq, 0, total as isize), Ok(seq.len()));
        assert_eq!(offset_by_code_points(seq, seq.len(), -(total as isize)), Ok(0));
        assert_eq!(code_points(seq).count(), total);
    }
}

#[test]
fn forward_and_backward_agree() {
    let seq = units("x\u{1D11E}y\u{20000}");
    let forward: Vec<_> = code_points(&seq).collect();
    let mut backward: Vec<_> = code_points(&seq).rev().collect();
    backward.reverse();
    assert_eq!(forward, [0x78, 0x1D11E, 0x79, 0x20000]);
    assert_eq!(forward, backward);

    let s: String = forward.iter().map(|&cp| char::from_u32(cp).unwrap()).collect();
    assert_eq!(s, "x\u{1D11E}y\u{20000}");
}

#[test]
fn bad_indices() {
    let seq = units("ab");
    assert_eq!(
        code_point_at(&seq, 2),
        Err(Error::IndexOutOfBounds { index: 2, len: 2 })
    );
    assert!(code_point_before(&seq, 0).is_err());
    assert_eq!(
        code_point_count(&seq, 1, 3),
        Err(Error::InvalidRange { begin: 1, end: 3, len: 2 })
    );
    assert_eq!(
        offset_by_code_points(&seq, 1, 2),
        Err(Error::OffsetOutOfBounds { index: 1, offset: 2 })
    );
    assert_eq!(
        offset_by_code_points(&seq, 1, -2),
        Err(Error::OffsetOutOfBounds { index: 1, offset: -2 })
    );
}

#[test]
fn limits_hide_the_other_half() {
    let seq = units("\u{1F600}\u{1F600}");
    assert_eq!(code_point_at_limit(&seq, 0, 1), Ok(0xD83D));
    assert_eq!(code_point_before_start(&seq, 4, 3), Ok(0xDE00));
    assert_eq!(code_point_count_in(&seq, 1, 2), Ok(2));
    assert_eq!(offset_by_code_points_in(&seq, 1, 3, 1, 2), Ok(4));
    assert_eq!(offset_by_code_points_in(&seq, 0, 4, 4, -2), Ok(0));
}
