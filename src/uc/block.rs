use core::fmt;
use core::ops::RangeInclusive;

use super::block_table::{BLOCKS, BLOCK_INFO, BLOCK_NAMES, BLOCK_STARTS};
use super::character::ascii_upper_key;
use super::error::Error;
use super::surrogate::is_valid_code_point;
use crate::Codepoint;

/// A named, contiguous range of code points.
///
/// Every block of the supported Unicode version is an associated constant,
/// e.g. [`UnicodeBlock::BASIC_LATIN`]. A few legacy identifiers are kept:
/// [`GREEK`](Self::GREEK) for "Greek and Coptic",
/// [`CYRILLIC_SUPPLEMENTARY`](Self::CYRILLIC_SUPPLEMENTARY) and
/// [`COMBINING_MARKS_FOR_SYMBOLS`](Self::COMBINING_MARKS_FOR_SYMBOLS).
/// [`SURROGATES_AREA`](Self::SURROGATES_AREA) only exists for name lookup
/// and covers no code points.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnicodeBlock(pub(crate) u16);

#[derive(Debug)]
pub(crate) struct BlockInfo {
    name: &'static str,
    canonical: &'static str,
    range: Option<(Codepoint, Codepoint)>,
}

impl BlockInfo {
    pub(crate) const fn new(
        name: &'static str,
        canonical: &'static str,
        range: Option<(Codepoint, Codepoint)>,
    ) -> Self {
        Self {
            name,
            canonical,
            range,
        }
    }
}

impl UnicodeBlock {
    #[inline]
    fn info(self) -> &'static BlockInfo {
        &BLOCK_INFO[usize::from(self.0)]
    }

    /// The identifier, e.g. `BASIC_LATIN`.
    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// The name used by `Blocks.txt`, e.g. `Basic Latin`.
    pub fn canonical_name(self) -> &'static str {
        self.info().canonical
    }

    pub fn range(self) -> Option<RangeInclusive<Codepoint>> {
        self.info().range.map(|(lo, hi)| lo..=hi)
    }

    /// Returns the block containing `cp`, or `None` if no block does.
    ///
    /// # Example
    ///
    /// ```
    /// use unichar::UnicodeBlock;
    ///
    /// assert_eq!(UnicodeBlock::of(0x0370), Ok(Some(UnicodeBlock::GREEK)));
    /// assert_eq!(UnicodeBlock::of(0x2FE0), Ok(None));
    /// ```
    pub fn of(cp: Codepoint) -> Result<Option<Self>, Error> {
        if !is_valid_code_point(cp) {
            return Err(Error::InvalidCodePoint(cp));
        }

        // BLOCK_STARTS[bottom] <= cp < BLOCK_STARTS[top], where the missing
        // BLOCK_STARTS[len] counts as past the last code point.
        let mut bottom = 0;
        let mut top = BLOCK_STARTS.len();
        let mut current = top / 2;
        while top - bottom > 1 {
            if cp >= BLOCK_STARTS[current] {
                bottom = current;
            } else {
                top = current;
            }
            current = (top + bottom) / 2;
        }
        Ok(BLOCKS[current])
    }

    /// Looks a block up by name.
    ///
    /// Accepts the canonical name (`Basic Latin`), the canonical name without
    /// spaces (`BasicLatin`) and the identifier (`BASIC_LATIN`), ignoring
    /// case.
    pub fn for_name(name: &str) -> Result<Self, Error> {
        let key = ascii_upper_key(name).ok_or(Error::UnknownBlock)?;
        BLOCK_NAMES
            .binary_search_by(|(n, _)| n.as_bytes().cmp(key.as_slice()))
            .map(|idx| BLOCK_NAMES[idx].1)
            .map_err(|_| Error::UnknownBlock)
    }

    /// Every block, name-only ones included, in code point order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..BLOCK_INFO.len() as u16).map(Self)
    }
}

impl fmt::Debug for UnicodeBlock {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "UnicodeBlock({})", self.name())
    }
}

impl fmt::Display for UnicodeBlock {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl core::str::FromStr for UnicodeBlock {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::for_name(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_are_strictly_increasing() {
        assert_eq!(BLOCK_STARTS[0], 0);
        assert_eq!(BLOCK_STARTS.len(), BLOCKS.len());
        for pair in BLOCK_STARTS.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn starts_agree_with_ranges() {
        for (i, &start) in BLOCK_STARTS.iter().enumerate() {
            if let Some(block) = BLOCKS[i] {
                let range = block.range().unwrap();
                assert_eq!(*range.start(), start, "{block}");
                let end = BLOCK_STARTS.get(i + 1).map_or(0x110000, |&s| s);
                assert_eq!(*range.end() + 1, end, "{block}");
            }
        }
    }

    #[test]
    fn names_are_sorted() {
        for pair in BLOCK_NAMES.windows(2) {
            assert!(pair[0].0 < pair[1].0, "{} >= {}", pair[0].0, pair[1].0);
        }
    }

    #[test]
    fn every_block_finds_itself() {
        for block in UnicodeBlock::all() {
            assert_eq!(UnicodeBlock::for_name(block.name()), Ok(block));
            if let Some(range) = block.range() {
                assert_eq!(UnicodeBlock::for_name(block.canonical_name()), Ok(block));
                assert_eq!(UnicodeBlock::of(*range.start()), Ok(Some(block)));
                assert_eq!(UnicodeBlock::of(*range.end()), Ok(Some(block)));
            }
        }
    }

    #[test]
    fn edges() {
        assert_eq!(UnicodeBlock::of(0), Ok(Some(UnicodeBlock::BASIC_LATIN)));
        assert_eq!(
            UnicodeBlock::of(0x10FFFF),
            Ok(Some(UnicodeBlock::SUPPLEMENTARY_PRIVATE_USE_AREA_B))
        );
        assert_eq!(UnicodeBlock::of(0x110000), Err(Error::InvalidCodePoint(0x110000)));
    }
}
