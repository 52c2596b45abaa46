use crate::Codepoint;

/// Everything that can go wrong in this crate.
///
/// Unpaired surrogates and unassigned code points are not errors, they
/// are ordinary input.
#[derive(Clone, Copy, PartialEq, Eq, Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The value is outside `0..=0x10FFFF`.
    #[error("invalid code point 0x{0:X}")]
    InvalidCodePoint(Codepoint),

    /// A code unit index is outside the sequence.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// A `begin..end` region does not fit into the sequence.
    #[error("range {begin}..{end} out of bounds for length {len}")]
    InvalidRange { begin: usize, end: usize, len: usize },

    /// The sequence ran out before the requested number of code points
    /// could be skipped.
    #[error("cannot move {offset} code points from index {index}")]
    OffsetOutOfBounds { index: usize, offset: isize },

    #[error("unknown Unicode block name")]
    UnknownBlock,

    #[error("unknown Unicode script name")]
    UnknownScript,
}
