use unichar::{Error, UnicodeBlock};

#[test]
fn basic_lookups() {
    assert_eq!(UnicodeBlock::of(0x0041), Ok(Some(UnicodeBlock::BASIC_LATIN)));
    assert_eq!(UnicodeBlock::of(0x0370), Ok(Some(UnicodeBlock::GREEK)));
    assert_eq!(UnicodeBlock::of(0x00E9), Ok(Some(UnicodeBlock::LATIN_1_SUPPLEMENT)));
    assert_eq!(UnicodeBlock::of(0x4E00), Ok(Some(UnicodeBlock::CJK_UNIFIED_IDEOGRAPHS)));
    assert_eq!(UnicodeBlock::of(0x1F600), Ok(Some(UnicodeBlock::EMOTICONS)));
    assert_eq!(UnicodeBlock::of(0xD800), Ok(Some(UnicodeBlock::HIGH_SURROGATES)));
}

#[test]
fn gaps_have_no_block() {
    assert_eq!(UnicodeBlock::of(0x2FE0), Ok(None));
    assert_eq!(UnicodeBlock::of(0x2FEF), Ok(None));
    assert_eq!(UnicodeBlock::of(0x2FF0), Ok(Some(UnicodeBlock::IDEOGRAPHIC_DESCRIPTION_CHARACTERS)));
    assert_eq!(UnicodeBlock::of(0x50000), Ok(None));
}

#[test]
fn invalid_code_point() {
    assert_eq!(UnicodeBlock::of(0x110000), Err(Error::InvalidCodePoint(0x110000)));
}

#[test]
fn lookup_is_stable() {
    let first = UnicodeBlock::of(0x0416).unwrap();
    for _ in 0..3 {
        assert_eq!(UnicodeBlock::of(0x0416).unwrap(), first);
    }
    assert_eq!(first, Some(UnicodeBlock::CYRILLIC));
}

#[test]
fn names() {
    let basic = UnicodeBlock::for_name("BASIC_LATIN").unwrap();
    assert_eq!(basic, UnicodeBlock::BASIC_LATIN);
    assert_eq!(UnicodeBlock::for_name("Basic Latin"), Ok(basic));
    assert_eq!(UnicodeBlock::for_name("BasicLatin"), Ok(basic));
    assert_eq!(UnicodeBlock::for_name("basic_latin"), Ok(basic));

    for name in ["Latin-1 Supplement", "LATIN_1_SUPPLEMENT", "latin-1supplement"] {
        assert_eq!(
            UnicodeBlock::for_name(name),
            Ok(UnicodeBlock::LATIN_1_SUPPLEMENT),
            "{name}"
        );
    }
}

#[test]
fn legacy_names() {
    assert_eq!(UnicodeBlock::for_name("Greek and Coptic"), Ok(UnicodeBlock::GREEK));
    assert_eq!(UnicodeBlock::for_name("GREEK"), Ok(UnicodeBlock::GREEK));
    assert_eq!(
        UnicodeBlock::for_name("Cyrillic Supplement"),
        Ok(UnicodeBlock::CYRILLIC_SUPPLEMENTARY)
    );
    assert_eq!(
        UnicodeBlock::for_name("Cyrillic Supplementary"),
        Ok(UnicodeBlock::CYRILLIC_SUPPLEMENTARY)
    );
    assert_eq!(
        UnicodeBlock::for_name("combining marks for symbols"),
        Ok(UnicodeBlock::COMBINING_MARKS_FOR_SYMBOLS)
    );
    assert_eq!(UnicodeBlock::for_name("SURROGATES_AREA"), Ok(UnicodeBlock::SURROGATES_AREA));
    assert_eq!(UnicodeBlock::SURROGATES_AREA.range(), None);
}

#[test]
fn unknown_names() {
    assert_eq!(UnicodeBlock::for_name("Basic_Latin "), Err(Error::UnknownBlock));
    assert_eq!(UnicodeBlock::for_name(""), Err(Error::UnknownBlock));
    assert_eq!(UnicodeBlock::for_name("\u{3B1}\u{3B2}"), Err(Error::UnknownBlock));
    assert!("Not A Block".parse::<UnicodeBlock>().is_err());
}

#[test]
fn accessors() {
    let b = UnicodeBlock::GREEK;
    assert_eq!(b.name(), "GREEK");
    assert_eq!(b.canonical_name(), "Greek and Coptic");
    assert_eq!(b.range(), Some(0x0370..=0x03FF));
    assert_eq!(b.to_string(), "GREEK");
    assert_eq!(format!("{b:?}"), "UnicodeBlock(GREEK)");
    assert_eq!("greek".parse::<UnicodeBlock>(), Ok(b));
}
