//! Code point aware indexing over UTF-16 code unit sequences.
//!
//! A high surrogate immediately followed by a low surrogate is one code
//! point. Any other surrogate is a code point of its own, one unit long.
//! None of the functions here fail because of unpaired surrogates, only
//! because of bad indices.

use super::error::Error;
use super::surrogate::{is_high_surrogate, is_low_surrogate, to_code_point};
use crate::Codepoint;

/// A read-only, indexable sequence of UTF-16 code units.
pub trait CodeUnits {
    fn len(&self) -> usize;

    /// Returns the unit at `index`, which is always `< len()`.
    fn unit_at(&self, index: usize) -> u16;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CodeUnits for [u16] {
    #[inline]
    fn len(&self) -> usize {
        <[u16]>::len(self)
    }

    #[inline]
    fn unit_at(&self, index: usize) -> u16 {
        self[index]
    }
}

impl<const N: usize> CodeUnits for [u16; N] {
    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn unit_at(&self, index: usize) -> u16 {
        self[index]
    }
}

#[cfg(feature = "std")]
impl CodeUnits for std::vec::Vec<u16> {
    #[inline]
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[inline]
    fn unit_at(&self, index: usize) -> u16 {
        self[index]
    }
}

#[inline]
fn check_index<S: CodeUnits + ?Sized>(seq: &S, index: usize) -> Result<(), Error> {
    let len = seq.len();
    if index < len {
        Ok(())
    } else {
        Err(Error::IndexOutOfBounds { index, len })
    }
}

#[inline]
fn check_range<S: CodeUnits + ?Sized>(seq: &S, begin: usize, end: usize) -> Result<(), Error> {
    let len = seq.len();
    if begin <= end && end <= len {
        Ok(())
    } else {
        Err(Error::InvalidRange { begin, end, len })
    }
}

// Callers guarantee `index < limit <= seq.len()`.
#[inline]
fn decode_forward<S: CodeUnits + ?Sized>(seq: &S, index: usize, limit: usize) -> (Codepoint, usize) {
    let high = seq.unit_at(index);
    if is_high_surrogate(high) && index + 1 < limit {
        let low = seq.unit_at(index + 1);
        if is_low_surrogate(low) {
            return (to_code_point(high, low), 2);
        }
    }
    (Codepoint::from(high), 1)
}

// Callers guarantee `start < index <= seq.len()`.
#[inline]
fn decode_backward<S: CodeUnits + ?Sized>(seq: &S, index: usize, start: usize) -> (Codepoint, usize) {
    let low = seq.unit_at(index - 1);
    if is_low_surrogate(low) && index - 1 > start {
        let high = seq.unit_at(index - 2);
        if is_high_surrogate(high) {
            return (to_code_point(high, low), 2);
        }
    }
    (Codepoint::from(low), 1)
}

/// Returns the code point starting at `index`.
///
/// A high surrogate at `index` followed by a low surrogate yields the
/// supplementary code point, anything else yields the unit itself.
pub fn code_point_at<S: CodeUnits + ?Sized>(seq: &S, index: usize) -> Result<Codepoint, Error> {
    check_index(seq, index)?;
    Ok(decode_forward(seq, index, seq.len()).0)
}

/// Like [`code_point_at`], but never looks at units at or past `limit`.
///
/// Fails when `index >= limit` or `limit > seq.len()`.
pub fn code_point_at_limit<S: CodeUnits + ?Sized>(
    seq: &S,
    index: usize,
    limit: usize,
) -> Result<Codepoint, Error> {
    let len = seq.len();
    if limit > len {
        return Err(Error::IndexOutOfBounds { index: limit, len });
    }
    if index >= limit {
        return Err(Error::IndexOutOfBounds { index, len: limit });
    }
    Ok(decode_forward(seq, index, limit).0)
}

/// Returns the code point that ends right before `index`.
///
/// `index` must be in `1..=seq.len()`.
pub fn code_point_before<S: CodeUnits + ?Sized>(seq: &S, index: usize) -> Result<Codepoint, Error> {
    code_point_before_start(seq, index, 0)
}

/// Like [`code_point_before`], but never looks at units before `start`.
///
/// Fails unless `start < index <= seq.len()`.
pub fn code_point_before_start<S: CodeUnits + ?Sized>(
    seq: &S,
    index: usize,
    start: usize,
) -> Result<Codepoint, Error> {
    let len = seq.len();
    if index > len || index == 0 {
        return Err(Error::IndexOutOfBounds { index, len });
    }
    if start >= index {
        return Err(Error::InvalidRange {
            begin: start,
            end: index,
            len,
        });
    }
    Ok(decode_backward(seq, index, start).0)
}

/// Counts the code points in `begin..end`.
pub fn code_point_count<S: CodeUnits + ?Sized>(
    seq: &S,
    begin: usize,
    end: usize,
) -> Result<usize, Error> {
    check_range(seq, begin, end)?;

    let mut n = end - begin;
    let mut i = begin;
    while i < end {
        let unit = seq.unit_at(i);
        i += 1;
        if is_high_surrogate(unit) && i < end && is_low_surrogate(seq.unit_at(i)) {
            n -= 1;
            i += 1;
        }
    }
    Ok(n)
}

/// Counts the code points in the `count` units starting at `offset`.
pub fn code_point_count_in<S: CodeUnits + ?Sized>(
    seq: &S,
    offset: usize,
    count: usize,
) -> Result<usize, Error> {
    let end = offset.checked_add(count).ok_or(Error::InvalidRange {
        begin: offset,
        end: usize::MAX,
        len: seq.len(),
    })?;
    code_point_count(seq, offset, end)
}

fn offset_within<S: CodeUnits + ?Sized>(
    seq: &S,
    start: usize,
    limit: usize,
    index: usize,
    offset: isize,
) -> Result<usize, Error> {
    let mut x = index;
    let mut remaining = offset.unsigned_abs();
    if offset >= 0 {
        while x < limit && remaining > 0 {
            x += decode_forward(seq, x, limit).1;
            remaining -= 1;
        }
    } else {
        while x > start && remaining > 0 {
            x -= decode_backward(seq, x, start).1;
            remaining -= 1;
        }
    }

    if remaining > 0 {
        return Err(Error::OffsetOutOfBounds { index, offset });
    }
    Ok(x)
}

/// Returns the index `offset` code points away from `index`.
///
/// Positive offsets move forward, negative ones backward. Fails when
/// `index > seq.len()` or the sequence ends before enough code points have
/// been passed.
pub fn offset_by_code_points<S: CodeUnits + ?Sized>(
    seq: &S,
    index: usize,
    offset: isize,
) -> Result<usize, Error> {
    let len = seq.len();
    if index > len {
        return Err(Error::IndexOutOfBounds { index, len });
    }
    offset_within(seq, 0, len, index, offset)
}

/// Like [`offset_by_code_points`], restricted to the `count` units starting
/// at `start`. `index` must lie within that region, its end included.
pub fn offset_by_code_points_in<S: CodeUnits + ?Sized>(
    seq: &S,
    start: usize,
    count: usize,
    index: usize,
    offset: isize,
) -> Result<usize, Error> {
    let len = seq.len();
    let limit = match start.checked_add(count) {
        Some(limit) if limit <= len => limit,
        _ => {
            return Err(Error::InvalidRange {
                begin: start,
                end: start.saturating_add(count),
                len,
            })
        }
    };
    if index < start || index > limit {
        return Err(Error::IndexOutOfBounds { index, len: limit });
    }
    offset_within(seq, start, limit, index, offset)
}

/// Iterates over code points, both ways.
pub fn code_points<S: CodeUnits + ?Sized>(seq: &S) -> CodePoints<'_, S> {
    CodePoints {
        seq,
        front: 0,
        back: seq.len(),
    }
}

/// An iterator over the code points of a [`CodeUnits`] sequence.
///
/// Created by [`code_points`].
#[derive(Debug)]
pub struct CodePoints<'a, S: ?Sized> {
    seq: &'a S,
    front: usize,
    back: usize,
}

impl<S: CodeUnits + ?Sized> CodePoints<'_, S> {
    /// Index of the next code unit [`next`](Iterator::next) will look at.
    pub fn offset(&self) -> usize {
        self.front
    }
}

impl<S: ?Sized> Clone for CodePoints<'_, S> {
    fn clone(&self) -> Self {
        Self {
            seq: self.seq,
            front: self.front,
            back: self.back,
        }
    }
}

impl<S: CodeUnits + ?Sized> Iterator for CodePoints<'_, S> {
    type Item = Codepoint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let (cp, n) = decode_forward(self.seq, self.front, self.back);
        self.front += n;
        Some(cp)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let units = self.back - self.front;
        (units.div_ceil(2), Some(units))
    }
}

impl<S: CodeUnits + ?Sized> DoubleEndedIterator for CodePoints<'_, S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let (cp, n) = decode_backward(self.seq, self.back, self.front);
        self.back -= n;
        Some(cp)
    }
}

impl<S: CodeUnits + ?Sized> core::iter::FusedIterator for CodePoints<'_, S> {}

#[cfg(test)]
mod tests {
    use super::*;

    const MIXED: [u16; 6] = [0x61, 0xD83D, 0xDE00, 0xDC00, 0x62, 0xD800];

    #[test]
    fn forward() {
        assert_eq!(code_point_at(&MIXED, 0), Ok(0x61));
        assert_eq!(code_point_at(&MIXED, 1), Ok(0x1F600));
        assert_eq!(code_point_at(&MIXED, 2), Ok(0xDE00));
        assert_eq!(code_point_at(&MIXED, 3), Ok(0xDC00));
        assert_eq!(code_point_at(&MIXED, 5), Ok(0xD800));
        assert_eq!(
            code_point_at(&MIXED, 6),
            Err(Error::IndexOutOfBounds { index: 6, len: 6 })
        );
    }

    #[test]
    fn forward_with_limit() {
        assert_eq!(code_point_at_limit(&MIXED, 1, 2), Ok(0xD83D));
        assert_eq!(code_point_at_limit(&MIXED, 1, 3), Ok(0x1F600));
        assert!(code_point_at_limit(&MIXED, 2, 2).is_err());
        assert!(code_point_at_limit(&MIXED, 0, 7).is_err());
    }

    #[test]
    fn backward() {
        assert_eq!(code_point_before(&MIXED, 1), Ok(0x61));
        assert_eq!(code_point_before(&MIXED, 3), Ok(0x1F600));
        assert_eq!(code_point_before(&MIXED, 2), Ok(0xD83D));
        assert_eq!(code_point_before(&MIXED, 4), Ok(0xDC00));
        assert_eq!(code_point_before(&MIXED, 6), Ok(0xD800));
        assert!(code_point_before(&MIXED, 0).is_err());
        assert!(code_point_before(&MIXED, 7).is_err());
    }

    #[test]
    fn backward_with_start() {
        assert_eq!(code_point_before_start(&MIXED, 3, 2), Ok(0xDE00));
        assert_eq!(code_point_before_start(&MIXED, 3, 1), Ok(0x1F600));
        assert!(code_point_before_start(&MIXED, 3, 3).is_err());
    }

    #[test]
    fn count() {
        assert_eq!(code_point_count(&MIXED, 0, 6), Ok(5));
        assert_eq!(code_point_count(&MIXED, 0, 2), Ok(2));
        assert_eq!(code_point_count(&MIXED, 2, 6), Ok(4));
        assert_eq!(code_point_count(&MIXED, 3, 3), Ok(0));
        assert!(code_point_count(&MIXED, 4, 3).is_err());
        assert!(code_point_count(&MIXED, 0, 7).is_err());
        assert_eq!(code_point_count_in(&MIXED, 1, 2), Ok(1));
        assert!(code_point_count_in(&MIXED, 5, 2).is_err());
    }

    #[test]
    fn offsets() {
        assert_eq!(offset_by_code_points(&MIXED, 0, 2), Ok(3));
        assert_eq!(offset_by_code_points(&MIXED, 0, 5), Ok(6));
        assert_eq!(offset_by_code_points(&MIXED, 6, -5), Ok(0));
        assert_eq!(offset_by_code_points(&MIXED, 3, -1), Ok(1));
        assert_eq!(offset_by_code_points(&MIXED, 2, 0), Ok(2));
        assert_eq!(
            offset_by_code_points(&MIXED, 0, 6),
            Err(Error::OffsetOutOfBounds { index: 0, offset: 6 })
        );
        assert!(offset_by_code_points(&MIXED, 1, -2).is_err());
        assert!(offset_by_code_points(&MIXED, 7, 0).is_err());
    }

    #[test]
    fn offsets_in_region() {
        // The pair straddles the region start, so only its low half is seen.
        assert_eq!(offset_by_code_points_in(&MIXED, 2, 3, 2, 3), Ok(5));
        assert_eq!(offset_by_code_points_in(&MIXED, 2, 3, 5, -3), Ok(2));
        assert!(offset_by_code_points_in(&MIXED, 2, 3, 5, -4).is_err());
        assert!(offset_by_code_points_in(&MIXED, 2, 3, 1, 0).is_err());
        assert!(offset_by_code_points_in(&MIXED, 4, 3, 4, 0).is_err());
    }

    #[test]
    fn iterator_matches_count() {
        let forward: std::vec::Vec<_> = code_points(&MIXED).collect();
        assert_eq!(forward, [0x61, 0x1F600, 0xDC00, 0x62, 0xD800]);

        let mut backward: std::vec::Vec<_> = code_points(&MIXED).rev().collect();
        backward.reverse();
        assert_eq!(backward, forward);

        assert_eq!(code_points(&MIXED).count(), code_point_count(&MIXED, 0, 6).unwrap());
    }

    #[test]
    fn iterator_meets_in_the_middle() {
        let units = [0xD800u16, 0xDC00];
        let mut it = code_points(&units);
        assert_eq!(it.next_back(), Some(0x10000));
        assert_eq!(it.next(), None);
    }
}
