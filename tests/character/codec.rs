use unichar::surrogate::*;
use unichar::Error;

#[test]
fn bmp_is_one_unit() {
    for cp in [0u32, 0x61, 0xD7FF, 0xD800, 0xDFFF, 0xFFFF] {
        let chars = to_chars(cp).unwrap();
        assert_eq!(chars.as_slice(), &[cp as u16]);
        assert_eq!(char_count(cp), 1);
    }
}

#[test]
fn supplementary_is_a_pair() {
    for cp in [0x10000u32, 0x1F600, 0x10FFFF] {
        let chars = to_chars(cp).unwrap();
        assert_eq!(chars.len(), 2);
        assert_eq!(char_count(cp), 2);
        let [hi, lo] = [chars.as_slice()[0], chars.as_slice()[1]];
        assert!(is_surrogate_pair(hi, lo));
        assert_eq!(to_code_point(hi, lo), cp);
    }
}

#[test]
fn matches_std_encoding() {
    for c in ['a', '\u{E9}', '\u{20AC}', '\u{1F600}', '\u{10FFFF}'] {
        let mut buf = [0u16; 2];
        let expected = c.encode_utf16(&mut buf);
        assert_eq!(to_chars(c as u32).unwrap().as_slice(), expected);
    }
}

#[test]
fn rejects_out_of_range() {
    assert!(is_valid_code_point(MAX_CODE_POINT));
    assert!(!is_valid_code_point(MAX_CODE_POINT + 1));
    assert_eq!(to_chars(0x110000), Err(Error::InvalidCodePoint(0x110000)));
    assert_eq!(to_chars(u32::MAX), Err(Error::InvalidCodePoint(u32::MAX)));
}

#[test]
fn writes_into_buffer() {
    let mut buf = [0u16; 3];
    assert_eq!(to_chars_into(0x41, &mut buf, 0), Ok(1));
    assert_eq!(to_chars_into(0x10437, &mut buf, 1), Ok(2));
    assert_eq!(buf, [0x41, 0xD801, 0xDC37]);

    assert_eq!(
        to_chars_into(0x41, &mut buf, 3),
        Err(Error::IndexOutOfBounds { index: 3, len: 3 })
    );
}

#[test]
fn pair_needs_both_halves() {
    assert!(is_surrogate_pair(0xD800, 0xDC00));
    assert!(!is_surrogate_pair(0xDC00, 0xD800));
    assert!(!is_surrogate_pair(0xD800, 0xD800));
    assert!(!is_surrogate_pair(0x61, 0xDC00));
}
