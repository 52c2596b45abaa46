//! Conversion between code points and UTF-16 code units.

use super::error::Error;
use crate::Codepoint;

pub const MIN_HIGH_SURROGATE: u16 = 0xD800;
pub const MAX_HIGH_SURROGATE: u16 = 0xDBFF;
pub const MIN_LOW_SURROGATE: u16 = 0xDC00;
pub const MAX_LOW_SURROGATE: u16 = 0xDFFF;
pub const MIN_SURROGATE: u16 = MIN_HIGH_SURROGATE;
pub const MAX_SURROGATE: u16 = MAX_LOW_SURROGATE;

pub const MIN_CODE_POINT: Codepoint = 0;
pub const MIN_SUPPLEMENTARY_CODE_POINT: Codepoint = 0x10000;
pub const MAX_CODE_POINT: Codepoint = 0x10FFFF;

/// Smallest radix accepted by [`digit`](crate::character::digit).
pub const MIN_RADIX: u32 = 2;
/// Largest radix accepted by [`digit`](crate::character::digit).
pub const MAX_RADIX: u32 = 36;

// Folds both surrogate biases into one constant so that decoding is a
// shift and two additions.
const SURROGATE_OFFSET: u32 = MIN_SUPPLEMENTARY_CODE_POINT
    .wrapping_sub((MIN_HIGH_SURROGATE as u32) << 10)
    .wrapping_sub(MIN_LOW_SURROGATE as u32);

const HIGH_SURROGATE_BIAS: u32 = MIN_HIGH_SURROGATE as u32 - (MIN_SUPPLEMENTARY_CODE_POINT >> 10);

#[inline]
pub const fn is_valid_code_point(cp: Codepoint) -> bool {
    cp <= MAX_CODE_POINT
}

#[inline]
pub const fn is_bmp_code_point(cp: Codepoint) -> bool {
    cp >> 16 == 0
}

/// Checks for `0x10000..=0x10FFFF`.
#[inline]
pub const fn is_supplementary_code_point(cp: Codepoint) -> bool {
    cp >= MIN_SUPPLEMENTARY_CODE_POINT && cp <= MAX_CODE_POINT
}

#[inline]
pub const fn is_high_surrogate(u: u16) -> bool {
    u >= MIN_HIGH_SURROGATE && u <= MAX_HIGH_SURROGATE
}

#[inline]
pub const fn is_low_surrogate(u: u16) -> bool {
    u >= MIN_LOW_SURROGATE && u <= MAX_LOW_SURROGATE
}

#[inline]
pub const fn is_surrogate(u: u16) -> bool {
    u >= MIN_SURROGATE && u <= MAX_SURROGATE
}

#[inline]
pub const fn is_surrogate_pair(high: u16, low: u16) -> bool {
    is_high_surrogate(high) && is_low_surrogate(low)
}

/// Number of code units needed to encode `cp`: 2 from `0x10000` on, 1 otherwise.
///
/// `cp` is not validated.
#[inline]
pub const fn char_count(cp: Codepoint) -> usize {
    if cp >= MIN_SUPPLEMENTARY_CODE_POINT {
        2
    } else {
        1
    }
}

/// Combines a surrogate pair into a supplementary code point.
///
/// The pair is not validated, check it with [`is_surrogate_pair`] first.
#[inline]
pub const fn to_code_point(high: u16, low: u16) -> Codepoint {
    ((high as u32) << 10)
        .wrapping_add(low as u32)
        .wrapping_add(SURROGATE_OFFSET)
}

/// The leading surrogate of a supplementary code point.
///
/// For anything else the result is unspecified.
#[inline]
pub const fn high_surrogate(cp: Codepoint) -> u16 {
    ((cp >> 10).wrapping_add(HIGH_SURROGATE_BIAS)) as u16
}

/// The trailing surrogate of a supplementary code point.
///
/// For anything else the result is unspecified.
#[inline]
pub const fn low_surrogate(cp: Codepoint) -> u16 {
    ((cp & 0x3FF) + MIN_LOW_SURROGATE as u32) as u16
}

/// Swaps the two bytes of a code unit.
#[inline]
pub const fn reverse_bytes(u: u16) -> u16 {
    ((u & 0xFF00) >> 8) | (u << 8)
}

/// A code point encoded as one or two UTF-16 code units.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Utf16Char {
    units: [u16; 2],
    len: u8,
}

impl Utf16Char {
    #[inline]
    pub fn as_slice(&self) -> &[u16] {
        &self.units[..usize::from(self.len)]
    }

    #[inline]
    pub fn len(&self) -> usize {
        usize::from(self.len)
    }

    /// Never true, a code point takes at least one unit.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn is_surrogate_pair(&self) -> bool {
        self.len == 2
    }
}

impl AsRef<[u16]> for Utf16Char {
    fn as_ref(&self) -> &[u16] {
        self.as_slice()
    }
}

/// Encodes `cp` as UTF-16.
///
/// Returns [`Error::InvalidCodePoint`] for values above `0x10FFFF`.
/// Surrogate code points are encoded as themselves.
pub fn to_chars(cp: Codepoint) -> Result<Utf16Char, Error> {
    if is_bmp_code_point(cp) {
        Ok(Utf16Char {
            units: [cp as u16, 0],
            len: 1,
        })
    } else if is_valid_code_point(cp) {
        Ok(Utf16Char {
            units: [high_surrogate(cp), low_surrogate(cp)],
            len: 2,
        })
    } else {
        Err(Error::InvalidCodePoint(cp))
    }
}

/// Encodes `cp` into `dst` starting at `index` and returns the number of
/// units written.
///
/// Either every unit is written or none is. For a surrogate pair the
/// trailing unit goes in first, so a failed bounds check on it leaves
/// `dst` untouched.
pub fn to_chars_into(cp: Codepoint, dst: &mut [u16], index: usize) -> Result<usize, Error> {
    let len = dst.len();
    if is_bmp_code_point(cp) {
        let slot = dst
            .get_mut(index)
            .ok_or(Error::IndexOutOfBounds { index, len })?;
        *slot = cp as u16;
        Ok(1)
    } else if is_valid_code_point(cp) {
        let next = index.checked_add(1).ok_or(Error::IndexOutOfBounds { index, len })?;
        if next >= len {
            return Err(Error::IndexOutOfBounds { index: next, len });
        }
        dst[next] = low_surrogate(cp);
        dst[index] = high_surrogate(cp);
        Ok(2)
    } else {
        Err(Error::InvalidCodePoint(cp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_constant() {
        assert_eq!(to_code_point(0xD800, 0xDC00), 0x10000);
        assert_eq!(to_code_point(0xDBFF, 0xDFFF), 0x10FFFF);
        assert_eq!(to_code_point(0xD83D, 0xDE00), 0x1F600);
    }

    #[test]
    fn split() {
        assert_eq!(high_surrogate(0x1F600), 0xD83D);
        assert_eq!(low_surrogate(0x1F600), 0xDE00);
        assert_eq!(high_surrogate(0x10FFFF), 0xDBFF);
        assert_eq!(low_surrogate(0x10000), 0xDC00);
    }

    #[test]
    fn every_supplementary_round_trips() {
        for cp in MIN_SUPPLEMENTARY_CODE_POINT..=MAX_CODE_POINT {
            let hi = high_surrogate(cp);
            let lo = low_surrogate(cp);
            assert!(is_surrogate_pair(hi, lo));
            assert_eq!(to_code_point(hi, lo), cp);
        }
    }

    #[test]
    fn unit_classes_are_disjoint() {
        for u in 0..=u16::MAX {
            let classes = [is_high_surrogate(u), is_low_surrogate(u)];
            assert!(!(classes[0] && classes[1]));
            assert_eq!(is_surrogate(u), classes[0] || classes[1]);
        }
    }

    #[test]
    fn supplementary_bounds() {
        assert!(!is_supplementary_code_point(0xFFFF));
        assert!(is_supplementary_code_point(0x10000));
        assert!(is_supplementary_code_point(0x10FFFF));
        assert!(!is_supplementary_code_point(0x110000));
        assert!(is_bmp_code_point(0xFFFF));
        assert!(!is_bmp_code_point(0x10000));
    }

    #[test]
    fn swap_bytes() {
        assert_eq!(reverse_bytes(0x1234), 0x3412);
        assert_eq!(reverse_bytes(0xFF00), 0x00FF);
        assert_eq!(reverse_bytes(reverse_bytes(0xABCD)), 0xABCD);
    }

    #[test]
    fn into_leaves_buffer_untouched_on_overflow() {
        let mut buf = [0x41u16, 0x42];
        assert_eq!(
            to_chars_into(0x1F600, &mut buf, 1),
            Err(Error::IndexOutOfBounds { index: 2, len: 2 })
        );
        assert_eq!(buf, [0x41, 0x42]);

        assert_eq!(to_chars_into(0x1F600, &mut buf, 0), Ok(2));
        assert_eq!(buf, [0xD83D, 0xDE00]);
    }

    #[test]
    fn into_rejects_invalid() {
        let mut buf = [0u16; 4];
        assert_eq!(
            to_chars_into(0x110000, &mut buf, 0),
            Err(Error::InvalidCodePoint(0x110000))
        );
        assert_eq!(buf, [0; 4]);
    }
}
