use core::fmt;

use super::character::ascii_upper_key;
use super::error::Error;
use super::script_table::{SCRIPTS, SCRIPT_ALIASES, SCRIPT_NAMES, SCRIPT_STARTS};
use super::surrogate::is_valid_code_point;
use crate::Codepoint;

/// A Unicode script, as assigned by `Scripts.txt`.
///
/// Code points no range covers belong to [`UNKNOWN`](Self::UNKNOWN).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnicodeScript(pub(crate) u8);

impl UnicodeScript {
    /// The identifier, e.g. `OLD_ITALIC`.
    pub fn name(self) -> &'static str {
        SCRIPT_NAMES[usize::from(self.0)].0
    }

    /// The ISO 15924 code, e.g. `Ital`.
    pub fn short_name(self) -> &'static str {
        SCRIPT_NAMES[usize::from(self.0)].1
    }

    pub fn of(cp: Codepoint) -> Result<Self, Error> {
        if !is_valid_code_point(cp) {
            return Err(Error::InvalidCodePoint(cp));
        }

        let idx = match SCRIPT_STARTS.binary_search(&cp) {
            Ok(idx) => idx,
            // SCRIPT_STARTS[0] is 0, so a miss never lands before it.
            Err(idx) => idx - 1,
        };
        Ok(SCRIPTS[idx])
    }

    /// Looks a script up by identifier (`OLD_ITALIC`), Unicode name
    /// (`Old_Italic`) or ISO 15924 code (`Ital`), ignoring case.
    pub fn for_name(name: &str) -> Result<Self, Error> {
        let key = ascii_upper_key(name).ok_or(Error::UnknownScript)?;
        SCRIPT_ALIASES
            .binary_search_by(|(n, _)| n.as_bytes().cmp(key.as_slice()))
            .map(|idx| SCRIPT_ALIASES[idx].1)
            .map_err(|_| Error::UnknownScript)
    }

    pub fn all() -> impl Iterator<Item = Self> {
        (0..SCRIPT_NAMES.len() as u8).map(Self)
    }
}

impl fmt::Debug for UnicodeScript {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "UnicodeScript({})", self.name())
    }
}

impl fmt::Display for UnicodeScript {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl core::str::FromStr for UnicodeScript {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::for_name(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_shape() {
        assert_eq!(SCRIPT_STARTS[0], 0);
        assert_eq!(SCRIPT_STARTS.len(), SCRIPTS.len());
        for pair in SCRIPT_STARTS.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        for pair in SCRIPT_ALIASES.windows(2) {
            assert!(pair[0].0 < pair[1].0);
        }
    }

    #[test]
    fn lookup() {
        assert_eq!(UnicodeScript::of(0x41), Ok(UnicodeScript::LATIN));
        assert_eq!(UnicodeScript::of(0x20), Ok(UnicodeScript::COMMON));
        assert_eq!(UnicodeScript::of(0x0300), Ok(UnicodeScript::INHERITED));
        assert_eq!(UnicodeScript::of(0x03B1), Ok(UnicodeScript::GREEK));
        assert_eq!(UnicodeScript::of(0x4E00), Ok(UnicodeScript::HAN));
        assert_eq!(UnicodeScript::of(0x10FFFF), Ok(UnicodeScript::UNKNOWN));
        assert!(UnicodeScript::of(0x110000).is_err());
    }

    #[test]
    fn names() {
        for script in UnicodeScript::all() {
            assert_eq!(UnicodeScript::for_name(script.name()), Ok(script));
        }
        assert_eq!(UnicodeScript::for_name("latn"), Ok(UnicodeScript::LATIN));
        assert_eq!(UnicodeScript::for_name("Old_Italic"), Ok(UnicodeScript::OLD_ITALIC));
        assert_eq!(UnicodeScript::LATIN.short_name(), "Latn");
        assert_eq!(UnicodeScript::for_name("Klingon"), Err(Error::UnknownScript));
    }
}
