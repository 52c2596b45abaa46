use unichar::character::*;
use unichar::{CharData, Directionality, GeneralCategory, NumericValue, PropertyDatabase};

use crate::summaries;

#[test]
fn latin_letters() {
    assert_eq!(
        summaries("U+0041,U+0061,U+00DF,U+01C5"),
        "Lu L 0061/0041/0041|Ll L 0061/0041/0041|Ll L 00DF/00DF/00DF|Lt L 01C6/01C4/01C5"
    );
}

#[test]
fn dotted_and_dotless_i() {
    assert_eq!(
        summaries("U+0130,U+0131"),
        "Lu L 0069/0130/0130|Ll L 0131/0049/0049"
    );
}

#[test]
fn bidi_classes() {
    assert_eq!(
        summaries("U+05D0,U+0627,U+0660,U+00A0,U+0028,U+200B"),
        "Lo R 05D0/05D0/05D0|Lo AL 0627/0627/0627|Nd AN 0660/0660/0660|\
         Zs CS 00A0/00A0/00A0|Ps ON 0028/0028/0028|Cf BN 200B/200B/200B"
    );
}

#[test]
fn unassigned_and_special_planes() {
    assert_eq!(
        summaries("U+0378,U+D800,U+E000,U+F0000,U+10FFFF,U+50000"),
        "Cn ?? 0378/0378/0378|Cs L D800/D800/D800|Co L E000/E000/E000|\
         Co L F0000/F0000/F0000|Cn ?? 10FFFF/10FFFF/10FFFF|Cn ?? 50000/50000/50000"
    );
}

#[test]
fn invalid_code_points_look_unassigned() {
    for cp in [0x110000, 0x7FFF_FFFF, u32::MAX] {
        assert_eq!(get_type(cp), GeneralCategory::UNASSIGNED);
        assert_eq!(directionality(cp), Directionality::UNDEFINED);
        assert!(!is_defined(cp));
        assert!(!is_letter(cp));
        assert_eq!(to_upper_case(cp), cp);
        assert_eq!(digit(cp, 10), None);
    }
}

#[test]
fn whitespace_is_not_space_char() {
    assert!(!is_whitespace(0x00A0));
    assert!(is_space_char(0x00A0));

    for cp in [0x2007, 0x202F] {
        assert!(is_space_char(cp));
        assert!(!is_whitespace(cp));
    }
    for cp in [0x09, 0x0A, 0x0D, 0x1C, 0x1F] {
        assert!(is_whitespace(cp));
        assert!(!is_space_char(cp));
    }
    for cp in [0x20, 0x2028, 0x2029, 0x3000] {
        assert!(is_whitespace(cp));
        assert!(is_space_char(cp));
    }
    assert!(!is_whitespace(0x85));
}

#[test]
fn digits() {
    assert_eq!(digit('a' as u32, 16), Some(10));
    assert_eq!(digit('g' as u32, 16), None);
    assert_eq!(for_digit(10, 16), Some(u16::from(b'a')));

    assert_eq!(digit('Z' as u32, 36), Some(35));
    assert_eq!(digit(0x0663, 10), Some(3));
    assert_eq!(digit(0x1D7CE, 10), Some(0));
    assert_eq!(digit(0xFF21, 11), Some(10));
    assert_eq!(digit(0xFF41, 36), Some(10));
    // Superscript two has a numeric value but is not a digit.
    assert_eq!(digit(0x00B2, 10), None);
    assert_eq!(digit('5' as u32, 1), None);
    assert_eq!(digit('5' as u32, 37), None);

    assert!(is_digit('0' as u32));
    assert!(is_digit(0x0660));
    assert!(!is_digit('a' as u32));
    assert!(!is_digit(0x2160));
}

#[test]
fn numeric_values() {
    assert_eq!(numeric_value('7' as u32), NumericValue::Integer(7));
    assert_eq!(numeric_value('a' as u32), NumericValue::Integer(10));
    assert_eq!(numeric_value('Z' as u32), NumericValue::Integer(35));
    assert_eq!(numeric_value(0x216B), NumericValue::Integer(12));
    assert_eq!(numeric_value(0x00B2), NumericValue::Integer(2));
    assert_eq!(numeric_value(0x00BD), NumericValue::NonInteger);
    assert_eq!(numeric_value(0x0F33), NumericValue::NonInteger);
    assert_eq!(numeric_value('-' as u32), NumericValue::None);
    assert_eq!(numeric_value(0x00BD).to_sentinel(), -2);
    assert_eq!(numeric_value('-' as u32).to_sentinel(), -1);

    // Unified ideographs carry no value, even when used as numerals.
    assert_eq!(numeric_value(0x4E94), NumericValue::None);
    assert_eq!(numeric_value(0x4E07), NumericValue::None);
    assert_eq!(numeric_value(0x3405), NumericValue::None);
    assert_eq!(numeric_value(0x4E94).to_sentinel(), -1);
    // Compatibility ideographs keep theirs.
    assert_eq!(numeric_value(0xF96B), NumericValue::Integer(3));
    assert_eq!(numeric_value(0x2F890), NumericValue::Integer(9));
}

#[test]
fn case_predicates() {
    assert!(is_upper_case('A' as u32));
    assert!(!is_upper_case('a' as u32));
    assert!(is_lower_case('a' as u32));
    assert!(is_title_case(0x01C5));
    assert!(!is_upper_case(0x01C5));
    assert!(!is_lower_case(0x01C5));

    // Other_Lowercase / Other_Uppercase members.
    assert!(is_lower_case(0x00AA));
    assert!(is_lower_case(0x2170));
    assert!(is_upper_case(0x2160));
    assert!(is_upper_case(0x24B6));
    assert!(!is_upper_case('1' as u32));
}

#[test]
fn case_round_trips_are_not_guaranteed() {
    // No lowercase mapping, and not lowercase itself.
    assert_eq!(to_lower_case('1' as u32), '1' as u32);
    assert!(!is_lower_case(to_lower_case('1' as u32)));
    assert_eq!(to_lower_case(0x4E00), 0x4E00);

    // Kelvin sign lowercases to k, which uppercases to K.
    assert_eq!(to_lower_case(0x212A), 'k' as u32);
    assert_eq!(to_upper_case(to_lower_case(0x212A)), 'K' as u32);
}

#[test]
fn multi_char_uppercase() {
    assert_eq!(to_upper_case(0x00DF), 0x00DF);
    assert_eq!(to_upper_case_ex(0x00DF), None);
    assert_eq!(to_upper_case_multi(0x00DF).as_slice(), &[0x53, 0x53]);
    assert_eq!(to_upper_case_multi(0xFB01).as_slice(), &[0x46, 0x49]);
    assert_eq!(to_upper_case_multi(0x0149).as_slice(), &[0x02BC, 0x4E]);
    assert_eq!(to_upper_case_multi(0x0390).as_slice(), &[0x0399, 0x0308, 0x0301]);

    assert_eq!(to_upper_case_ex('a' as u32), Some('A' as u32));
    assert_eq!(to_upper_case_multi('a' as u32).as_slice(), &['A' as u32]);
    assert_eq!(to_upper_case_ex(0x10428), Some(0x10400));
}

#[test]
fn letters_and_alphabetic() {
    assert!(is_letter('x' as u32));
    assert!(is_letter(0x4E00));
    assert!(!is_letter('1' as u32));
    assert!(is_letter_or_digit('1' as u32));
    assert!(!is_letter_or_digit('_' as u32));

    assert!(!is_letter(0x2160));
    assert!(is_alphabetic(0x2160));
    assert!(is_alphabetic(0x0345));
    assert!(!is_letter(0x0345));
    assert!(!is_alphabetic('1' as u32));

    assert!(is_ideographic(0x4E00));
    assert!(is_ideographic(0x3007));
    assert!(is_ideographic(0x20000));
    assert!(!is_ideographic('a' as u32));
}

#[test]
fn identifiers() {
    assert!(is_java_identifier_start('$' as u32));
    assert!(is_java_identifier_start('_' as u32));
    assert!(is_java_identifier_start(0x2160));
    assert!(!is_java_identifier_start('1' as u32));
    assert!(is_java_identifier_part('1' as u32));
    assert!(is_java_identifier_part(0x0300));
    assert!(is_java_identifier_part(0x00AD));
    assert!(!is_java_identifier_part('-' as u32));

    assert!(!is_unicode_identifier_start('$' as u32));
    assert!(!is_unicode_identifier_start('_' as u32));
    assert!(is_unicode_identifier_part('_' as u32));
    assert!(is_unicode_identifier_start(0x2E2F));
    assert!(is_unicode_identifier_part(0x2E2F));
    assert!(is_unicode_identifier_part(0x200B));

    assert!(is_identifier_ignorable(0x00));
    assert!(is_identifier_ignorable(0x1B));
    assert!(!is_identifier_ignorable(0x09));
    assert!(!is_identifier_ignorable(0x1C));
    assert!(is_identifier_ignorable(0x7F));
    assert!(is_identifier_ignorable(0x200B));
    assert!(is_identifier_ignorable(0xE0001));
}

#[test]
fn mirrored() {
    assert!(is_mirrored('(' as u32));
    assert!(is_mirrored(']' as u32));
    assert!(!is_mirrored('a' as u32));
}

#[test]
fn iso_controls_skip_the_tables() {
    let controls: Vec<u32> = (0..0x110000).filter(|&cp| is_iso_control(cp)).collect();
    assert_eq!(controls.len(), 0x20 + 0x21);
    for cp in controls {
        assert_eq!(get_type(cp), GeneralCategory::CONTROL);
    }
}

#[test]
fn compound_tests_agree_with_categories() {
    for cp in 0..0x30000 {
        let cat = get_type(cp);
        assert_eq!(is_letter(cp), cat.is_letter());
        assert_eq!(
            is_letter_or_digit(cp),
            cat.is_letter() || cat == GeneralCategory::DECIMAL_DIGIT_NUMBER
        );
        assert_eq!(
            is_space_char(cp),
            matches!(
                cat,
                GeneralCategory::SPACE_SEPARATOR
                    | GeneralCategory::LINE_SEPARATOR
                    | GeneralCategory::PARAGRAPH_SEPARATOR
            )
        );
        if is_digit(cp) {
            assert!(digit(cp, 10).is_some(), "U+{cp:04X}");
        }
    }
}

#[test]
fn resolver_matches_free_functions() {
    for cp in [0x41, 0xE9, 0x3B1, 0x1F600, 0x2A700, 0xE0100, 0xFFFFF] {
        let r = PropertyDatabase::of(cp);
        assert_eq!(r.category(cp), get_type(cp));
        assert_eq!(r.to_upper_case(cp), to_upper_case(cp));
        assert_eq!(r.is_whitespace(cp), is_whitespace(cp));
    }
}
