use unichar::{Error, UnicodeScript};

#[test]
fn lookups() {
    assert_eq!(UnicodeScript::of('a' as u32), Ok(UnicodeScript::LATIN));
    assert_eq!(UnicodeScript::of(0x0416), Ok(UnicodeScript::CYRILLIC));
    assert_eq!(UnicodeScript::of(0x05D0), Ok(UnicodeScript::HEBREW));
    assert_eq!(UnicodeScript::of(0x3042), Ok(UnicodeScript::HIRAGANA));
    assert_eq!(UnicodeScript::of(0x20000), Ok(UnicodeScript::HAN));
    assert_eq!(UnicodeScript::of('1' as u32), Ok(UnicodeScript::COMMON));
    assert_eq!(UnicodeScript::of(0x0378), Ok(UnicodeScript::UNKNOWN));
    assert_eq!(UnicodeScript::of(0xE000), Ok(UnicodeScript::UNKNOWN));
    assert_eq!(UnicodeScript::of(0x110000), Err(Error::InvalidCodePoint(0x110000)));
}

#[test]
fn names_and_aliases() {
    assert_eq!(UnicodeScript::for_name("LATIN"), Ok(UnicodeScript::LATIN));
    assert_eq!(UnicodeScript::for_name("Latn"), Ok(UnicodeScript::LATIN));
    assert_eq!(UnicodeScript::for_name("zyyy"), Ok(UnicodeScript::COMMON));
    assert_eq!(UnicodeScript::for_name("Qaai"), Ok(UnicodeScript::INHERITED));
    assert_eq!(UnicodeScript::for_name("Zinh"), Ok(UnicodeScript::INHERITED));
    assert_eq!(UnicodeScript::for_name("Zzzz"), Ok(UnicodeScript::UNKNOWN));
    assert_eq!(UnicodeScript::for_name("Latin Script"), Err(Error::UnknownScript));
}

#[test]
fn accessors() {
    let s = UnicodeScript::OLD_ITALIC;
    assert_eq!(s.name(), "OLD_ITALIC");
    assert_eq!(s.short_name(), "Ital");
    assert_eq!(s.to_string(), "OLD_ITALIC");
    assert_eq!("ital".parse::<UnicodeScript>(), Ok(s));
}
