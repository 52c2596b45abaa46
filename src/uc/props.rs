use core::fmt;

/// A Unicode general category.
///
/// The numbering is fixed and has a hole at 17. Compound tests are written
/// as bit masks over [`mask`](Self::mask).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct GeneralCategory(pub u8);

#[rustfmt::skip]
impl GeneralCategory {
    pub const UNASSIGNED: Self = Self(0);
    pub const UPPERCASE_LETTER: Self = Self(1);
    pub const LOWERCASE_LETTER: Self = Self(2);
    pub const TITLECASE_LETTER: Self = Self(3);
    pub const MODIFIER_LETTER: Self = Self(4);
    pub const OTHER_LETTER: Self = Self(5);
    pub const NON_SPACING_MARK: Self = Self(6);
    pub const ENCLOSING_MARK: Self = Self(7);
    pub const COMBINING_SPACING_MARK: Self = Self(8);
    pub const DECIMAL_DIGIT_NUMBER: Self = Self(9);
    pub const LETTER_NUMBER: Self = Self(10);
    pub const OTHER_NUMBER: Self = Self(11);
    pub const SPACE_SEPARATOR: Self = Self(12);
    pub const LINE_SEPARATOR: Self = Self(13);
    pub const PARAGRAPH_SEPARATOR: Self = Self(14);
    pub const CONTROL: Self = Self(15);
    pub const FORMAT: Self = Self(16);
    pub const PRIVATE_USE: Self = Self(18);
    pub const SURROGATE: Self = Self(19);
    pub const DASH_PUNCTUATION: Self = Self(20);
    pub const START_PUNCTUATION: Self = Self(21);
    pub const END_PUNCTUATION: Self = Self(22);
    pub const CONNECTOR_PUNCTUATION: Self = Self(23);
    pub const OTHER_PUNCTUATION: Self = Self(24);
    pub const MATH_SYMBOL: Self = Self(25);
    pub const CURRENCY_SYMBOL: Self = Self(26);
    pub const MODIFIER_SYMBOL: Self = Self(27);
    pub const OTHER_SYMBOL: Self = Self(28);
    pub const INITIAL_QUOTE_PUNCTUATION: Self = Self(29);
    pub const FINAL_QUOTE_PUNCTUATION: Self = Self(30);
}

impl GeneralCategory {
    pub const LETTER_MASK: u32 = Self::UPPERCASE_LETTER.mask()
        | Self::LOWERCASE_LETTER.mask()
        | Self::TITLECASE_LETTER.mask()
        | Self::MODIFIER_LETTER.mask()
        | Self::OTHER_LETTER.mask();

    pub const MARK_MASK: u32 = Self::NON_SPACING_MARK.mask()
        | Self::ENCLOSING_MARK.mask()
        | Self::COMBINING_SPACING_MARK.mask();

    pub const SEPARATOR_MASK: u32 = Self::SPACE_SEPARATOR.mask()
        | Self::LINE_SEPARATOR.mask()
        | Self::PARAGRAPH_SEPARATOR.mask();

    #[inline]
    pub const fn to_u8(self) -> u8 {
        self.0
    }

    /// The single bit standing for this category in a category mask, or 0
    /// for values no mask can hold.
    #[inline]
    pub const fn mask(self) -> u32 {
        match 1u32.checked_shl(self.0 as u32) {
            Some(bit) => bit,
            None => 0,
        }
    }

    /// Tests membership in a mask built from [`mask`](Self::mask) values.
    #[inline]
    pub const fn is_in(self, mask: u32) -> bool {
        match mask.checked_shr(self.0 as u32) {
            Some(m) => m & 1 != 0,
            None => false,
        }
    }

    pub const fn is_letter(self) -> bool {
        self.is_in(Self::LETTER_MASK)
    }

    pub const fn is_mark(self) -> bool {
        self.is_in(Self::MARK_MASK)
    }

    /// The two letter abbreviation used by the Unicode Character Database.
    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::UPPERCASE_LETTER => "Lu",
            Self::LOWERCASE_LETTER => "Ll",
            Self::TITLECASE_LETTER => "Lt",
            Self::MODIFIER_LETTER => "Lm",
            Self::OTHER_LETTER => "Lo",
            Self::NON_SPACING_MARK => "Mn",
            Self::ENCLOSING_MARK => "Me",
            Self::COMBINING_SPACING_MARK => "Mc",
            Self::DECIMAL_DIGIT_NUMBER => "Nd",
            Self::LETTER_NUMBER => "Nl",
            Self::OTHER_NUMBER => "No",
            Self::SPACE_SEPARATOR => "Zs",
            Self::LINE_SEPARATOR => "Zl",
            Self::PARAGRAPH_SEPARATOR => "Zp",
            Self::CONTROL => "Cc",
            Self::FORMAT => "Cf",
            Self::PRIVATE_USE => "Co",
            Self::SURROGATE => "Cs",
            Self::DASH_PUNCTUATION => "Pd",
            Self::START_PUNCTUATION => "Ps",
            Self::END_PUNCTUATION => "Pe",
            Self::CONNECTOR_PUNCTUATION => "Pc",
            Self::OTHER_PUNCTUATION => "Po",
            Self::MATH_SYMBOL => "Sm",
            Self::CURRENCY_SYMBOL => "Sc",
            Self::MODIFIER_SYMBOL => "Sk",
            Self::OTHER_SYMBOL => "So",
            Self::INITIAL_QUOTE_PUNCTUATION => "Pi",
            Self::FINAL_QUOTE_PUNCTUATION => "Pf",
            _ => "Cn",
        }
    }
}

impl fmt::Display for GeneralCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

/// A bidirectional character type.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Directionality(pub i8);

#[rustfmt::skip]
impl Directionality {
    /// Reported for unassigned code points.
    pub const UNDEFINED: Self = Self(-1);
    pub const LEFT_TO_RIGHT: Self = Self(0);
    pub const RIGHT_TO_LEFT: Self = Self(1);
    pub const RIGHT_TO_LEFT_ARABIC: Self = Self(2);
    pub const EUROPEAN_NUMBER: Self = Self(3);
    pub const EUROPEAN_NUMBER_SEPARATOR: Self = Self(4);
    pub const EUROPEAN_NUMBER_TERMINATOR: Self = Self(5);
    pub const ARABIC_NUMBER: Self = Self(6);
    pub const COMMON_NUMBER_SEPARATOR: Self = Self(7);
    pub const NONSPACING_MARK: Self = Self(8);
    pub const BOUNDARY_NEUTRAL: Self = Self(9);
    pub const PARAGRAPH_SEPARATOR: Self = Self(10);
    pub const SEGMENT_SEPARATOR: Self = Self(11);
    pub const WHITESPACE: Self = Self(12);
    pub const OTHER_NEUTRALS: Self = Self(13);
    pub const LEFT_TO_RIGHT_EMBEDDING: Self = Self(14);
    pub const LEFT_TO_RIGHT_OVERRIDE: Self = Self(15);
    pub const RIGHT_TO_LEFT_EMBEDDING: Self = Self(16);
    pub const RIGHT_TO_LEFT_OVERRIDE: Self = Self(17);
    pub const POP_DIRECTIONAL_FORMAT: Self = Self(18);
    pub const LEFT_TO_RIGHT_ISOLATE: Self = Self(19);
    pub const RIGHT_TO_LEFT_ISOLATE: Self = Self(20);
    pub const FIRST_STRONG_ISOLATE: Self = Self(21);
    pub const POP_DIRECTIONAL_ISOLATE: Self = Self(22);
}

impl Directionality {
    #[inline]
    pub const fn to_i8(self) -> i8 {
        self.0
    }

    /// The `Bidi_Class` short name, or `"??"` for [`UNDEFINED`](Self::UNDEFINED).
    pub fn abbreviation(self) -> &'static str {
        const NAMES: [&str; 23] = [
            "L", "R", "AL", "EN", "ES", "ET", "AN", "CS", "NSM", "BN", "B", "S", "WS", "ON",
            "LRE", "LRO", "RLE", "RLO", "PDF", "LRI", "RLI", "FSI", "PDI",
        ];
        usize::try_from(self.0)
            .ok()
            .and_then(|i| NAMES.get(i))
            .copied()
            .unwrap_or("??")
    }
}

impl fmt::Display for Directionality {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

/// The numeric value of a code point.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum NumericValue {
    /// The code point has no numeric value.
    None,
    /// A non-negative integer that fits into an `i32`.
    Integer(u32),
    /// A fraction, or an integer too large to represent.
    NonInteger,
}

impl NumericValue {
    pub(crate) const fn from_sentinel(value: i32) -> Self {
        match value {
            -1 => Self::None,
            -2 => Self::NonInteger,
            v if v >= 0 => Self::Integer(v as u32),
            _ => Self::None,
        }
    }

    /// The in-band form: the value itself, `-1` for none and `-2` for
    /// non-integer values.
    pub const fn to_sentinel(self) -> i32 {
        match self {
            Self::None => -1,
            Self::Integer(v) => v as i32,
            Self::NonInteger => -2,
        }
    }

    pub const fn integer(self) -> Option<u32> {
        match self {
            Self::Integer(v) => Some(v),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_mask() {
        for cat in 0..=30 {
            let cat = GeneralCategory(cat);
            let expected = matches!(
                cat,
                GeneralCategory::UPPERCASE_LETTER
                    | GeneralCategory::LOWERCASE_LETTER
                    | GeneralCategory::TITLECASE_LETTER
                    | GeneralCategory::MODIFIER_LETTER
                    | GeneralCategory::OTHER_LETTER
            );
            assert_eq!(cat.is_letter(), expected, "{cat:?}");
        }
    }

    #[test]
    fn out_of_range_category() {
        let cat = GeneralCategory(40);
        assert_eq!(cat.mask(), 0);
        assert!(!cat.is_letter());
        assert!(!cat.is_mark());
        assert!(!cat.is_in(u32::MAX));
        assert!(!GeneralCategory(u8::MAX).is_in(u32::MAX));
        assert!(GeneralCategory(31).is_in(1 << 31));
    }

    #[test]
    fn abbreviations() {
        assert_eq!(GeneralCategory::UNASSIGNED.abbreviation(), "Cn");
        assert_eq!(GeneralCategory(17).abbreviation(), "Cn");
        assert_eq!(GeneralCategory::FINAL_QUOTE_PUNCTUATION.abbreviation(), "Pf");
        assert_eq!(Directionality::UNDEFINED.abbreviation(), "??");
        assert_eq!(Directionality::POP_DIRECTIONAL_ISOLATE.abbreviation(), "PDI");
        assert_eq!(Directionality::WHITESPACE.abbreviation(), "WS");
    }

    #[test]
    fn numeric_sentinels() {
        assert_eq!(NumericValue::from_sentinel(-1), NumericValue::None);
        assert_eq!(NumericValue::from_sentinel(-2), NumericValue::NonInteger);
        assert_eq!(NumericValue::from_sentinel(7), NumericValue::Integer(7));
        assert_eq!(NumericValue::Integer(12).to_sentinel(), 12);
        assert_eq!(NumericValue::NonInteger.to_sentinel(), -2);
    }
}
