//! The per code point property database.
//!
//! Every code point maps to one shared [`CharProperties`] record. Which table
//! answers depends on where the code point lives, see [`PropertyDatabase::of`].

use smallvec::SmallVec;

use super::char_data_table::{
    CHUNKS, CHUNK_MASK, CHUNK_SHIFT, LATIN1, PLANE_0, PLANE_1, PLANE_2, PLANE_3, PLANE_E,
    PROPERTIES, UPPERCASE_MULTI,
};
use super::props::{Directionality, GeneralCategory, NumericValue};
use super::surrogate::{MAX_RADIX, MIN_RADIX};
use crate::Codepoint;

bitflags::bitflags! {
    /// Boolean properties packed into a [`CharProperties`] record.
    ///
    /// The bit values are shared with `scripts/gen-ucd-tables.py`.
    #[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
    pub struct PropertyFlags: u16 {
        const MIRRORED                 = 1 << 0;
        const JAVA_IDENTIFIER_START    = 1 << 1;
        const JAVA_IDENTIFIER_PART     = 1 << 2;
        const UNICODE_IDENTIFIER_START = 1 << 3;
        const UNICODE_IDENTIFIER_PART  = 1 << 4;
        const IDENTIFIER_IGNORABLE     = 1 << 5;
        const WHITESPACE               = 1 << 6;
        const OTHER_LOWERCASE          = 1 << 7;
        const OTHER_UPPERCASE          = 1 << 8;
        const OTHER_ALPHABETIC         = 1 << 9;
        const IDEOGRAPHIC              = 1 << 10;
        /// The numeric value doubles as a `digit()` value.
        const DIGIT                    = 1 << 11;
        /// The full uppercase mapping has more than one code point.
        const UPPERCASE_MULTI          = 1 << 12;
    }
}

/// Everything the database knows about one code point.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct CharProperties {
    category: u8,
    directionality: i8,
    flags: u16,
    numeric: i32,
    lower: i32,
    upper: i32,
    title: i32,
}

impl CharProperties {
    pub(crate) const fn new(
        category: u8,
        directionality: i8,
        flags: u16,
        numeric: i32,
        lower: i32,
        upper: i32,
        title: i32,
    ) -> Self {
        Self {
            category,
            directionality,
            flags,
            numeric,
            lower,
            upper,
            title,
        }
    }

    #[inline]
    pub fn category(&self) -> GeneralCategory {
        GeneralCategory(self.category)
    }

    #[inline]
    pub fn directionality(&self) -> Directionality {
        Directionality(self.directionality)
    }

    #[inline]
    pub fn flags(&self) -> PropertyFlags {
        PropertyFlags::from_bits_retain(self.flags)
    }

    #[inline]
    pub fn numeric_value(&self) -> NumericValue {
        NumericValue::from_sentinel(self.numeric)
    }

    /// Offsets from the code point to its simple lower, upper and title
    /// case mappings.
    #[inline]
    pub fn case_deltas(&self) -> (i32, i32, i32) {
        (self.lower, self.upper, self.title)
    }
}

// Record 0 of the generated table is the unassigned record.
#[inline]
fn unassigned() -> &'static CharProperties {
    &PROPERTIES[0]
}

static PRIVATE_USE: CharProperties = CharProperties::new(
    GeneralCategory::PRIVATE_USE.0,
    Directionality::LEFT_TO_RIGHT.0,
    0,
    -1,
    0,
    0,
    0,
);

#[inline]
fn apply_delta(cp: Codepoint, delta: i32) -> Codepoint {
    cp.wrapping_add_signed(delta)
}

/// Property queries answered by a resolver.
///
/// Implementors only provide [`properties`](Self::properties), every query
/// is derived from the record.
pub trait CharData {
    fn properties(&self, cp: Codepoint) -> &'static CharProperties;

    #[inline]
    fn category(&self, cp: Codepoint) -> GeneralCategory {
        self.properties(cp).category()
    }

    #[inline]
    fn flags(&self, cp: Codepoint) -> PropertyFlags {
        self.properties(cp).flags()
    }

    /// The value of `cp` as a digit in `radix`, or `None` when it is not one
    /// or `radix` is outside `2..=36`.
    fn digit(&self, cp: Codepoint, radix: u32) -> Option<u32> {
        if !(MIN_RADIX..=MAX_RADIX).contains(&radix) {
            return None;
        }

        let props = self.properties(cp);
        if !props.flags().contains(PropertyFlags::DIGIT) {
            return None;
        }

        props.numeric_value().integer().filter(|&v| v < radix)
    }

    #[inline]
    fn numeric_value(&self, cp: Codepoint) -> NumericValue {
        self.properties(cp).numeric_value()
    }

    #[inline]
    fn is_java_identifier_start(&self, cp: Codepoint) -> bool {
        self.flags(cp).contains(PropertyFlags::JAVA_IDENTIFIER_START)
    }

    #[inline]
    fn is_java_identifier_part(&self, cp: Codepoint) -> bool {
        self.flags(cp).contains(PropertyFlags::JAVA_IDENTIFIER_PART)
    }

    #[inline]
    fn is_unicode_identifier_start(&self, cp: Codepoint) -> bool {
        self.flags(cp).contains(PropertyFlags::UNICODE_IDENTIFIER_START)
    }

    #[inline]
    fn is_unicode_identifier_part(&self, cp: Codepoint) -> bool {
        self.flags(cp).contains(PropertyFlags::UNICODE_IDENTIFIER_PART)
    }

    #[inline]
    fn is_identifier_ignorable(&self, cp: Codepoint) -> bool {
        self.flags(cp).contains(PropertyFlags::IDENTIFIER_IGNORABLE)
    }

    #[inline]
    fn is_whitespace(&self, cp: Codepoint) -> bool {
        self.flags(cp).contains(PropertyFlags::WHITESPACE)
    }

    #[inline]
    fn is_other_lowercase(&self, cp: Codepoint) -> bool {
        self.flags(cp).contains(PropertyFlags::OTHER_LOWERCASE)
    }

    #[inline]
    fn is_other_uppercase(&self, cp: Codepoint) -> bool {
        self.flags(cp).contains(PropertyFlags::OTHER_UPPERCASE)
    }

    #[inline]
    fn is_other_alphabetic(&self, cp: Codepoint) -> bool {
        self.flags(cp).contains(PropertyFlags::OTHER_ALPHABETIC)
    }

    #[inline]
    fn is_ideographic(&self, cp: Codepoint) -> bool {
        self.flags(cp).contains(PropertyFlags::IDEOGRAPHIC)
    }

    #[inline]
    fn is_mirrored(&self, cp: Codepoint) -> bool {
        self.flags(cp).contains(PropertyFlags::MIRRORED)
    }

    #[inline]
    fn directionality(&self, cp: Codepoint) -> Directionality {
        self.properties(cp).directionality()
    }

    fn to_lower_case(&self, cp: Codepoint) -> Codepoint {
        apply_delta(cp, self.properties(cp).lower)
    }

    fn to_upper_case(&self, cp: Codepoint) -> Codepoint {
        apply_delta(cp, self.properties(cp).upper)
    }

    fn to_title_case(&self, cp: Codepoint) -> Codepoint {
        apply_delta(cp, self.properties(cp).title)
    }

    /// Like [`to_upper_case`](Self::to_upper_case), but returns `None` when
    /// the full mapping expands to several code points.
    fn to_upper_case_ex(&self, cp: Codepoint) -> Option<Codepoint> {
        let props = self.properties(cp);
        if props.flags().contains(PropertyFlags::UPPERCASE_MULTI) {
            None
        } else {
            Some(apply_delta(cp, props.upper))
        }
    }

    /// The full, context free uppercase mapping.
    fn to_upper_case_multi(&self, cp: Codepoint) -> SmallVec<[Codepoint; 3]> {
        if self.flags(cp).contains(PropertyFlags::UPPERCASE_MULTI) {
            if let Ok(idx) = UPPERCASE_MULTI.binary_search_by_key(&cp, |&(c, _)| c) {
                return SmallVec::from_slice(UPPERCASE_MULTI[idx].1);
            }
        }

        let mut out = SmallVec::new();
        out.push(self.to_upper_case(cp));
        out
    }
}

/// Flat table for `U+0000..=U+00FF`.
#[derive(Clone, Copy, Debug)]
pub struct Latin1;

impl CharData for Latin1 {
    #[inline]
    fn properties(&self, cp: Codepoint) -> &'static CharProperties {
        match LATIN1.get(cp as usize) {
            Some(&idx) => &PROPERTIES[usize::from(idx)],
            None => unassigned(),
        }
    }
}

/// Two-stage table covering one plane.
#[derive(Clone, Copy, Debug)]
pub struct PlaneTable {
    plane: u8,
    index: &'static [u16; 2048],
}

impl PlaneTable {
    fn for_plane(plane: u8) -> Option<Self> {
        let index = match plane {
            0 => &PLANE_0,
            1 => &PLANE_1,
            2 => &PLANE_2,
            3 => &PLANE_3,
            14 => &PLANE_E,
            _ => return None,
        };
        Some(Self { plane, index })
    }

    pub fn plane(&self) -> u8 {
        self.plane
    }
}

impl CharData for PlaneTable {
    #[inline]
    fn properties(&self, cp: Codepoint) -> &'static CharProperties {
        if cp >> 16 != u32::from(self.plane) {
            return unassigned();
        }

        let offset = cp & 0xFFFF;
        let chunk = usize::from(self.index[(offset >> CHUNK_SHIFT) as usize]);
        let idx = CHUNKS[(chunk << CHUNK_SHIFT) + (offset & CHUNK_MASK) as usize];
        &PROPERTIES[usize::from(idx)]
    }
}

/// Planes 15 and 16: private use, except for the two noncharacters closing
/// each plane.
#[derive(Clone, Copy, Debug)]
pub struct PrivateUse;

impl CharData for PrivateUse {
    #[inline]
    fn properties(&self, cp: Codepoint) -> &'static CharProperties {
        if cp & 0xFFFE == 0xFFFE {
            unassigned()
        } else {
            &PRIVATE_USE
        }
    }
}

/// Answers "unassigned" for everything, including invalid code points.
#[derive(Clone, Copy, Debug)]
pub struct Undefined;

impl CharData for Undefined {
    #[inline]
    fn properties(&self, _: Codepoint) -> &'static CharProperties {
        unassigned()
    }
}

/// The resolver responsible for a code point.
#[derive(Clone, Copy, Debug)]
pub enum Resolver {
    Latin1(Latin1),
    Plane(PlaneTable),
    PrivateUse(PrivateUse),
    Undefined(Undefined),
}

impl CharData for Resolver {
    #[inline]
    fn properties(&self, cp: Codepoint) -> &'static CharProperties {
        match self {
            Self::Latin1(r) => r.properties(cp),
            Self::Plane(r) => r.properties(cp),
            Self::PrivateUse(r) => r.properties(cp),
            Self::Undefined(r) => r.properties(cp),
        }
    }
}

/// Entry point into the property tables.
#[derive(Clone, Copy, Debug)]
pub struct PropertyDatabase;

impl PropertyDatabase {
    /// Picks the resolver for `cp`.
    #[inline]
    pub fn of(cp: Codepoint) -> Resolver {
        if cp >> 8 == 0 {
            return Resolver::Latin1(Latin1);
        }

        match cp >> 16 {
            15 | 16 => Resolver::PrivateUse(PrivateUse),
            plane => match u8::try_from(plane).ok().and_then(PlaneTable::for_plane) {
                Some(table) => Resolver::Plane(table),
                None => Resolver::Undefined(Undefined),
            },
        }
    }

    /// Shorthand for `PropertyDatabase::of(cp).properties(cp)`.
    #[inline]
    pub fn properties(cp: Codepoint) -> &'static CharProperties {
        Self::of(cp).properties(cp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver_kind(cp: Codepoint) -> &'static str {
        match PropertyDatabase::of(cp) {
            Resolver::Latin1(_) => "latin1",
            Resolver::Plane(_) => "plane",
            Resolver::PrivateUse(_) => "private",
            Resolver::Undefined(_) => "undefined",
        }
    }

    #[test]
    fn dispatch() {
        assert_eq!(resolver_kind(0x41), "latin1");
        assert_eq!(resolver_kind(0xFF), "latin1");
        assert_eq!(resolver_kind(0x100), "plane");
        assert_eq!(resolver_kind(0x1F600), "plane");
        assert_eq!(resolver_kind(0x20000), "plane");
        assert_eq!(resolver_kind(0x40000), "undefined");
        assert_eq!(resolver_kind(0xE0001), "plane");
        assert_eq!(resolver_kind(0xF0000), "private");
        assert_eq!(resolver_kind(0x10FFFF), "private");
        assert_eq!(resolver_kind(0x110000), "undefined");
        assert_eq!(resolver_kind(u32::MAX), "undefined");
    }

    #[test]
    fn latin1_agrees_with_plane_0() {
        let plane = PlaneTable::for_plane(0).unwrap();
        for cp in 0..0x100 {
            assert_eq!(Latin1.properties(cp), plane.properties(cp), "U+{cp:04X}");
        }
    }

    #[test]
    fn plane_table_rejects_foreign_code_points() {
        let plane = PlaneTable::for_plane(1).unwrap();
        assert_eq!(plane.properties(0x41).category(), GeneralCategory::UNASSIGNED);
        assert_eq!(plane.plane(), 1);
    }

    #[test]
    fn private_use_noncharacters() {
        assert_eq!(PrivateUse.category(0xF0000), GeneralCategory::PRIVATE_USE);
        assert_eq!(PrivateUse.category(0xFFFFD), GeneralCategory::PRIVATE_USE);
        assert_eq!(PrivateUse.category(0xFFFFE), GeneralCategory::UNASSIGNED);
        assert_eq!(PrivateUse.category(0x10FFFF), GeneralCategory::UNASSIGNED);
        assert_eq!(
            PrivateUse.directionality(0x100000),
            Directionality::LEFT_TO_RIGHT
        );
        assert_eq!(
            PrivateUse.directionality(0x10FFFE),
            Directionality::UNDEFINED
        );
    }

    #[test]
    fn ascii_letters_are_digits() {
        let r = PropertyDatabase::of(0x61);
        assert_eq!(r.digit(0x61, 16), Some(10));
        assert_eq!(r.digit(0x7A, 36), Some(35));
        assert_eq!(r.digit(0x7A, 35), None);
        assert_eq!(r.digit(0x39, 10), Some(9));
        assert_eq!(r.digit(0x39, 1), None);
        assert_eq!(r.digit(0x39, 37), None);
    }

    #[test]
    fn uppercase_multi_flag_matches_table() {
        for &(cp, mapping) in UPPERCASE_MULTI {
            let r = PropertyDatabase::of(cp);
            assert!(r.flags(cp).contains(PropertyFlags::UPPERCASE_MULTI));
            assert_eq!(r.to_upper_case_ex(cp), None);
            assert_eq!(r.to_upper_case_multi(cp).as_slice(), mapping);
        }
    }

    #[test]
    fn unassigned_record() {
        let props = Undefined.properties(0x123456);
        assert_eq!(props.category(), GeneralCategory::UNASSIGNED);
        assert_eq!(props.directionality(), Directionality::UNDEFINED);
        assert_eq!(props.numeric_value(), NumericValue::None);
        assert!(props.flags().is_empty());
        assert_eq!(Undefined.to_lower_case(0x123456), 0x123456);
    }
}
