//! Classification and conversion of single code points.
//!
//! Every function accepts any `u32`. Values outside the Unicode range
//! behave like unassigned code points.

use smallvec::SmallVec;

use super::char_data::{CharData, PropertyDatabase};
use super::props::{Directionality, GeneralCategory, NumericValue};
use super::surrogate::{MAX_RADIX, MIN_RADIX};
use crate::Codepoint;

const LETTER_OR_DIGIT_MASK: u32 =
    GeneralCategory::LETTER_MASK | GeneralCategory::DECIMAL_DIGIT_NUMBER.mask();

const ALPHABETIC_MASK: u32 = GeneralCategory::LETTER_MASK | GeneralCategory::LETTER_NUMBER.mask();

#[inline]
fn category_in(cp: Codepoint, mask: u32) -> bool {
    get_type(cp).is_in(mask)
}

#[inline]
pub fn get_type(cp: Codepoint) -> GeneralCategory {
    PropertyDatabase::of(cp).category(cp)
}

/// `Ll` or `Other_Lowercase`.
pub fn is_lower_case(cp: Codepoint) -> bool {
    let r = PropertyDatabase::of(cp);
    r.category(cp) == GeneralCategory::LOWERCASE_LETTER || r.is_other_lowercase(cp)
}

/// `Lu` or `Other_Uppercase`.
pub fn is_upper_case(cp: Codepoint) -> bool {
    let r = PropertyDatabase::of(cp);
    r.category(cp) == GeneralCategory::UPPERCASE_LETTER || r.is_other_uppercase(cp)
}

pub fn is_title_case(cp: Codepoint) -> bool {
    get_type(cp) == GeneralCategory::TITLECASE_LETTER
}

/// Decimal digits (`Nd`) only. ASCII letters have a digit value but are
/// not digits.
pub fn is_digit(cp: Codepoint) -> bool {
    get_type(cp) == GeneralCategory::DECIMAL_DIGIT_NUMBER
}

pub fn is_defined(cp: Codepoint) -> bool {
    get_type(cp) != GeneralCategory::UNASSIGNED
}

pub fn is_letter(cp: Codepoint) -> bool {
    category_in(cp, GeneralCategory::LETTER_MASK)
}

pub fn is_letter_or_digit(cp: Codepoint) -> bool {
    category_in(cp, LETTER_OR_DIGIT_MASK)
}

/// Letters, letter numbers and `Other_Alphabetic`.
pub fn is_alphabetic(cp: Codepoint) -> bool {
    category_in(cp, ALPHABETIC_MASK) || PropertyDatabase::of(cp).is_other_alphabetic(cp)
}

pub fn is_ideographic(cp: Codepoint) -> bool {
    PropertyDatabase::of(cp).is_ideographic(cp)
}

/// Letters, letter numbers, currency symbols and connector punctuation.
pub fn is_java_identifier_start(cp: Codepoint) -> bool {
    PropertyDatabase::of(cp).is_java_identifier_start(cp)
}

/// Identifier start characters plus digits, combining marks and the
/// ignorable controls.
pub fn is_java_identifier_part(cp: Codepoint) -> bool {
    PropertyDatabase::of(cp).is_java_identifier_part(cp)
}

/// `ID_Start`, plus U+2E2F VERTICAL TILDE.
pub fn is_unicode_identifier_start(cp: Codepoint) -> bool {
    PropertyDatabase::of(cp).is_unicode_identifier_start(cp)
}

/// `ID_Continue`, plus U+2E2F VERTICAL TILDE and the ignorable controls.
pub fn is_unicode_identifier_part(cp: Codepoint) -> bool {
    PropertyDatabase::of(cp).is_unicode_identifier_part(cp)
}

/// Format characters and the C0/C1 controls that are not whitespace.
pub fn is_identifier_ignorable(cp: Codepoint) -> bool {
    PropertyDatabase::of(cp).is_identifier_ignorable(cp)
}

/// Simple lowercase mapping. Code points without one map to themselves.
pub fn to_lower_case(cp: Codepoint) -> Codepoint {
    PropertyDatabase::of(cp).to_lower_case(cp)
}

/// Simple uppercase mapping. Code points without one map to themselves.
///
/// Only the 1:1 part of the mapping is applied, so `ß` stays `ß`. Use
/// [`to_upper_case_multi`] for the full mapping.
pub fn to_upper_case(cp: Codepoint) -> Codepoint {
    PropertyDatabase::of(cp).to_upper_case(cp)
}

/// Simple titlecase mapping, falling back to the uppercase mapping.
pub fn to_title_case(cp: Codepoint) -> Codepoint {
    PropertyDatabase::of(cp).to_title_case(cp)
}

/// The uppercase mapping if it is a single code point, `None` when it
/// expands.
pub fn to_upper_case_ex(cp: Codepoint) -> Option<Codepoint> {
    PropertyDatabase::of(cp).to_upper_case_ex(cp)
}

/// The full uppercase mapping, `U+00DF` becoming `SS` and so on.
///
/// Language and context dependent mappings are not applied.
pub fn to_upper_case_multi(cp: Codepoint) -> SmallVec<[Codepoint; 3]> {
    PropertyDatabase::of(cp).to_upper_case_multi(cp)
}

/// The value of `cp` as a digit in `radix`.
///
/// Decimal digits of any script count, as do the ASCII and fullwidth Latin
/// letters, which stand for 10 to 35. Returns `None` if `cp` is not a digit,
/// its value is not below `radix`, or `radix` is outside `2..=36`.
///
/// # Example
///
/// ```
/// use unichar::character::digit;
///
/// assert_eq!(digit('7' as u32, 10), Some(7));
/// assert_eq!(digit('f' as u32, 16), Some(15));
/// assert_eq!(digit('g' as u32, 16), None);
/// ```
#[inline]
pub fn digit(cp: Codepoint, radix: u32) -> Option<u32> {
    PropertyDatabase::of(cp).digit(cp, radix)
}

/// The numeric value of `cp`: digits, letters (10 to 35), Roman numerals,
/// fractions and so on. Unified CJK ideographs have none.
#[inline]
pub fn numeric_value(cp: Codepoint) -> NumericValue {
    PropertyDatabase::of(cp).numeric_value(cp)
}

/// `Zs`, `Zl` and `Zp`. Unlike [`is_whitespace`], this includes no-break
/// spaces and excludes tabs and line feeds.
pub fn is_space_char(cp: Codepoint) -> bool {
    category_in(cp, GeneralCategory::SEPARATOR_MASK)
}

/// Separators other than the no-break spaces, plus `U+0009..=U+000D` and
/// `U+001C..=U+001F`.
pub fn is_whitespace(cp: Codepoint) -> bool {
    PropertyDatabase::of(cp).is_whitespace(cp)
}

/// The C0 and C1 control ranges, without consulting any table.
#[inline]
pub const fn is_iso_control(cp: Codepoint) -> bool {
    cp <= 0x1F || (cp >= 0x7F && cp <= 0x9F)
}

/// The character representing `digit` in `radix`, lower case for values
/// above 9.
///
/// Returns `None` for a radix outside `2..=36` or a digit not below it.
pub const fn for_digit(digit: u32, radix: u32) -> Option<u16> {
    if digit >= radix || radix < MIN_RADIX || radix > MAX_RADIX {
        return None;
    }
    if digit < 10 {
        Some(b'0' as u16 + digit as u16)
    } else {
        Some(b'a' as u16 - 10 + digit as u16)
    }
}

pub fn directionality(cp: Codepoint) -> Directionality {
    PropertyDatabase::of(cp).directionality(cp)
}

/// Whether the glyph is mirrored in right-to-left text, like `(`.
pub fn is_mirrored(cp: Codepoint) -> bool {
    PropertyDatabase::of(cp).is_mirrored(cp)
}

/// Upper-cases `name` with the full mapping into an ASCII key.
///
/// Returns `None` if the result is not ASCII, since no name table holds such
/// keys.
pub(crate) fn ascii_upper_key(name: &str) -> Option<SmallVec<[u8; 64]>> {
    let mut key = SmallVec::new();
    for c in name.chars() {
        for u in to_upper_case_multi(u32::from(c)) {
            key.push(u8::try_from(u).ok().filter(u8::is_ascii)?);
        }
    }
    Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_control_ranges() {
        assert!(is_iso_control(0x00));
        assert!(is_iso_control(0x1F));
        assert!(!is_iso_control(0x20));
        assert!(!is_iso_control(0x7E));
        assert!(is_iso_control(0x7F));
        assert!(is_iso_control(0x9F));
        assert!(!is_iso_control(0xA0));
    }

    #[test]
    fn for_digit_bounds() {
        assert_eq!(for_digit(0, 10), Some(u16::from(b'0')));
        assert_eq!(for_digit(9, 10), Some(u16::from(b'9')));
        assert_eq!(for_digit(10, 16), Some(u16::from(b'a')));
        assert_eq!(for_digit(35, 36), Some(u16::from(b'z')));
        assert_eq!(for_digit(10, 10), None);
        assert_eq!(for_digit(1, 1), None);
        assert_eq!(for_digit(1, 37), None);
    }

    #[test]
    fn digit_inverts_for_digit() {
        for radix in MIN_RADIX..=MAX_RADIX {
            for d in 0..radix {
                let c = for_digit(d, radix).unwrap();
                assert_eq!(digit(u32::from(c), radix), Some(d));
            }
        }
    }

    #[test]
    fn upper_key() {
        assert_eq!(ascii_upper_key("Basic Latin").unwrap().as_slice(), b"BASIC LATIN");
        assert_eq!(ascii_upper_key("stra\u{DF}e").unwrap().as_slice(), b"STRASSE");
        assert_eq!(ascii_upper_key("\u{0131}").unwrap().as_slice(), b"I");
        assert!(ascii_upper_key("\u{3B1}").is_none());
    }
}
