/*!
A Unicode code point model and character property lookup engine.

The crate covers four things:

- conversion between UTF-16 code units and code points ([`surrogate`]),
- code point aware indexing over UTF-16 buffers ([`traverse`]),
- per code point properties such as category, case mappings, digit values
  and identifier roles ([`character`], backed by [`char_data`]),
- the Unicode block and script indexes ([`UnicodeBlock`], [`UnicodeScript`]).

Unpaired surrogates are never an error. Traversal treats them as one unit
long pseudo code points and property lookups report them as surrogates.

All tables are generated from the Unicode Character Database by
`scripts/gen-ucd-tables.py` and compiled in, so the crate works in `no_std`.
*/

#![no_std]
#![warn(missing_debug_implementations)]

#[cfg(any(test, feature = "std"))]
extern crate std;

mod uc;

pub use crate::uc::block::UnicodeBlock;
pub use crate::uc::char_data::{self, CharData, CharProperties, PropertyDatabase, PropertyFlags};
pub use crate::uc::character;
pub use crate::uc::error::Error;
pub use crate::uc::props::{Directionality, GeneralCategory, NumericValue};
pub use crate::uc::script::UnicodeScript;
pub use crate::uc::surrogate::{self, Utf16Char};
pub use crate::uc::traverse::{self, CodePoints, CodeUnits};
pub use crate::uc::UNICODE_VERSION;

/// A Unicode code point.
///
/// Values above [`surrogate::MAX_CODE_POINT`] can be represented and are
/// treated as invalid by every function that cares.
pub type Codepoint = u32;
