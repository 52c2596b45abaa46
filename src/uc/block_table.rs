// WARNING: this file was generated by scripts/gen-ucd-tables.py from the
// Unicode 14.0.0 character database. Do not edit it by hand.

#![allow(clippy::unreadable_literal)]

use super::block::{BlockInfo, UnicodeBlock};

#[rustfmt::skip]
impl UnicodeBlock {
    pub const BASIC_LATIN: Self = Self(0);
    pub const LATIN_1_SUPPLEMENT: Self = Self(1);
    pub const LATIN_EXTENDED_A: Self = Self(2);
    pub const LATIN_EXTENDED_B: Self = Self(3);
    pub const IPA_EXTENSIONS: Self = Self(4);
    pub const SPACING_MODIFIER_LETTERS: Self = Self(5);
    pub const COMBINING_DIACRITICAL_MARKS: Self = Self(6);
    pub const GREEK: Self = Self(7);
    pub const CYRILLIC: Self = Self(8);
    pub const CYRILLIC_SUPPLEMENTARY: Self = Self(9);
    pub const ARMENIAN: Self = Self(10);
    pub const HEBREW: Self = Self(11);
    pub const ARABIC: Self = Self(12);
    pub const SYRIAC: Self = Self(13);
    pub const ARABIC_SUPPLEMENT: Self = Self(14);
    pub const THAANA: Self = Self(15);
    pub const NKO: Self = Self(16);
    pub const SAMARITAN: Self = Self(17);
    pub const MANDAIC: Self = Self(18);
    pub const SYRIAC_SUPPLEMENT: Self = Self(19);
    pub const ARABIC_EXTENDED_B: Self = Self(20);
    pub const ARABIC_EXTENDED_A: Self = Self(21);
    pub const DEVANAGARI: Self = Self(22);
    pub const BENGALI: Self = Self(23);
    pub const GURMUKHI: Self = Self(24);
    pub const GUJARATI: Self = Self(25);
    pub const ORIYA: Self = Self(26);
    pub const TAMIL: Self = Self(27);
    pub const TELUGU: Self = Self(28);
    pub const KANNADA: Self = Self(29);
    pub const MALAYALAM: Self = Self(30);
    pub const SINHALA: Self = Self(31);
    pub const THAI: Self = Self(32);
    pub const LAO: Self = Self(33);
    pub const TIBETAN: Self = Self(34);
    pub const MYANMAR: Self = Self(35);
    pub const GEORGIAN: Self = Self(36);
    pub const HANGUL_JAMO: Self = Self(37);
    pub const ETHIOPIC: Self = Self(38);
    pub const ETHIOPIC_SUPPLEMENT: Self = Self(39);
    pub const CHEROKEE: Self = Self(40);
    pub const UNIFIED_CANADIAN_ABORIGINAL_SYLLABICS: Self = Self(41);
    pub const OGHAM: Self = Self(42);
    pub const RUNIC: Self = Self(43);
    pub const TAGALOG: Self = Self(44);
    pub const HANUNOO: Self = Self(45);
    pub const BUHID: Self = Self(46);
    pub const TAGBANWA: Self = Self(47);
    pub const KHMER: Self = Self(48);
    pub const MONGOLIAN: Self = Self(49);
    pub const UNIFIED_CANADIAN_ABORIGINAL_SYLLABICS_EXTENDED: Self = Self(50);
    pub const LIMBU: Self = Self(51);
    pub const TAI_LE: Self = Self(52);
    pub const NEW_TAI_LUE: Self = Self(53);
    pub const KHMER_SYMBOLS: Self = Self(54);
    pub const BUGINESE: Self = Self(55);
    pub const TAI_THAM: Self = Self(56);
    pub const COMBINING_DIACRITICAL_MARKS_EXTENDED: Self = Self(57);
    pub const BALINESE: Self = Self(58);
    pub const SUNDANESE: Self = Self(59);
    pub const BATAK: Self = Self(60);
    pub const LEPCHA: Self = Self(61);
    pub const OL_CHIKI: Self = Self(62);
    pub const CYRILLIC_EXTENDED_C: Self = Self(63);
    pub const GEORGIAN_EXTENDED: Self = Self(64);
    pub const SUNDANESE_SUPPLEMENT: Self = Self(65);
    pub const VEDIC_EXTENSIONS: Self = Self(66);
    pub const PHONETIC_EXTENSIONS: Self = Self(67);
    pub const PHONETIC_EXTENSIONS_SUPPLEMENT: Self = Self(68);
    pub const COMBINING_DIACRITICAL_MARKS_SUPPLEMENT: Self = Self(69);
    pub const LATIN_EXTENDED_ADDITIONAL: Self = Self(70);
    pub const GREEK_EXTENDED: Self = Self(71);
    pub const GENERAL_PUNCTUATION: Self = Self(72);
    pub const SUPERSCRIPTS_AND_SUBSCRIPTS: Self = Self(73);
    pub const CURRENCY_SYMBOLS: Self = Self(74);
    pub const COMBINING_MARKS_FOR_SYMBOLS: Self = Self(75);
    pub const LETTERLIKE_SYMBOLS: Self = Self(76);
    pub const NUMBER_FORMS: Self = Self(77);
    pub const ARROWS: Self = Self(78);
    pub const MATHEMATICAL_OPERATORS: Self = Self(79);
    pub const MISCELLANEOUS_TECHNICAL: Self = Self(80);
    pub const CONTROL_PICTURES: Self = Self(81);
    pub const OPTICAL_CHARACTER_RECOGNITION: Self = Self(82);
    pub const ENCLOSED_ALPHANUMERICS: Self = Self(83);
    pub const BOX_DRAWING: Self = Self(84);
    pub const BLOCK_ELEMENTS: Self = Self(85);
    pub const GEOMETRIC_SHAPES: Self = Self(86);
    pub const MISCELLANEOUS_SYMBOLS: Self = Self(87);
    pub const DINGBATS: Self = Self(88);
    pub const MISCELLANEOUS_MATHEMATICAL_SYMBOLS_A: Self = Self(89);
    pub const SUPPLEMENTAL_ARROWS_A: Self = Self(90);
    pub const BRAILLE_PATTERNS: Self = Self(91);
    pub const SUPPLEMENTAL_ARROWS_B: Self = Self(92);
    pub const MISCELLANEOUS_MATHEMATICAL_SYMBOLS_B: Self = Self(93);
    pub const SUPPLEMENTAL_MATHEMATICAL_OPERATORS: Self = Self(94);
    pub const MISCELLANEOUS_SYMBOLS_AND_ARROWS: Self = Self(95);
    pub const GLAGOLITIC: Self = Self(96);
    pub const LATIN_EXTENDED_C: Self = Self(97);
    pub const COPTIC: Self = Self(98);
    pub const GEORGIAN_SUPPLEMENT: Self = Self(99);
    pub const TIFINAGH: Self = Self(100);
    pub const ETHIOPIC_EXTENDED: Self = Self(101);
    pub const CYRILLIC_EXTENDED_A: Self = Self(102);
    pub const SUPPLEMENTAL_PUNCTUATION: Self = Self(103);
    pub const CJK_RADICALS_SUPPLEMENT: Self = Self(104);
    pub const KANGXI_RADICALS: Self = Self(105);
    pub const IDEOGRAPHIC_DESCRIPTION_CHARACTERS: Self = Self(106);
    pub const CJK_SYMBOLS_AND_PUNCTUATION: Self = Self(107);
    pub const HIRAGANA: Self = Self(108);
    pub const KATAKANA: Self = Self(109);
    pub const BOPOMOFO: Self = Self(110);
    pub const HANGUL_COMPATIBILITY_JAMO: Self = Self(111);
    pub const KANBUN: Self = Self(112);
    pub const BOPOMOFO_EXTENDED: Self = Self(113);
    pub const CJK_STROKES: Self = Self(114);
    pub const KATAKANA_PHONETIC_EXTENSIONS: Self = Self(115);
    pub const ENCLOSED_CJK_LETTERS_AND_MONTHS: Self = Self(116);
    pub const CJK_COMPATIBILITY: Self = Self(117);
    pub const CJK_UNIFIED_IDEOGRAPHS_EXTENSION_A: Self = Self(118);
    pub const YIJING_HEXAGRAM_SYMBOLS: Self = Self(119);
    pub const CJK_UNIFIED_IDEOGRAPHS: Self = Self(120);
    pub const YI_SYLLABLES: Self = Self(121);
    pub const YI_RADICALS: Self = Self(122);
    pub const LISU: Self = Self(123);
    pub const VAI: Self = Self(124);
    pub const CYRILLIC_EXTENDED_B: Self = Self(125);
    pub const BAMUM: Self = Self(126);
    pub const MODIFIER_TONE_LETTERS: Self = Self(127);
    pub const LATIN_EXTENDED_D: Self = Self(128);
    pub const SYLOTI_NAGRI: Self = Self(129);
    pub const COMMON_INDIC_NUMBER_FORMS: Self = Self(130);
    pub const PHAGS_PA: Self = Self(131);
    pub const SAURASHTRA: Self = Self(132);
    pub const DEVANAGARI_EXTENDED: Self = Self(133);
    pub const KAYAH_LI: Self = Self(134);
    pub const REJANG: Self = Self(135);
    pub const HANGUL_JAMO_EXTENDED_A: Self = Self(136);
    pub const JAVANESE: Self = Self(137);
    pub const MYANMAR_EXTENDED_B: Self = Self(138);
    pub const CHAM: Self = Self(139);
    pub const MYANMAR_EXTENDED_A: Self = Self(140);
    pub const TAI_VIET: Self = Self(141);
    pub const MEETEI_MAYEK_EXTENSIONS: Self = Self(142);
    pub const ETHIOPIC_EXTENDED_A: Self = Self(143);
    pub const LATIN_EXTENDED_E: Self = Self(144);
    pub const CHEROKEE_SUPPLEMENT: Self = Self(145);
    pub const MEETEI_MAYEK: Self = Self(146);
    pub const HANGUL_SYLLABLES: Self = Self(147);
    pub const HANGUL_JAMO_EXTENDED_B: Self = Self(148);
    pub const HIGH_SURROGATES: Self = Self(149);
    pub const HIGH_PRIVATE_USE_SURROGATES: Self = Self(150);
    pub const LOW_SURROGATES: Self = Self(151);
    pub const PRIVATE_USE_AREA: Self = Self(152);
    pub const CJK_COMPATIBILITY_IDEOGRAPHS: Self = Self(153);
    pub const ALPHABETIC_PRESENTATION_FORMS: Self = Self(154);
    pub const ARABIC_PRESENTATION_FORMS_A: Self = Self(155);
    pub const VARIATION_SELECTORS: Self = Self(156);
    pub const VERTICAL_FORMS: Self = Self(157);
    pub const COMBINING_HALF_MARKS: Self = Self(158);
    pub const CJK_COMPATIBILITY_FORMS: Self = Self(159);
    pub const SMALL_FORM_VARIANTS: Self = Self(160);
    pub const ARABIC_PRESENTATION_FORMS_B: Self = Self(161);
    pub const HALFWIDTH_AND_FULLWIDTH_FORMS: Self = Self(162);
    pub const SPECIALS: Self = Self(163);
    pub const LINEAR_B_SYLLABARY: Self = Self(164);
    pub const LINEAR_B_IDEOGRAMS: Self = Self(165);
    pub const AEGEAN_NUMBERS: Self = Self(166);
    pub const ANCIENT_GREEK_NUMBERS: Self = Self(167);
    pub const ANCIENT_SYMBOLS: Self = Self(168);
    pub const PHAISTOS_DISC: Self = Self(169);
    pub const LYCIAN: Self = Self(170);
    pub const CARIAN: Self = Self(171);
    pub const COPTIC_EPACT_NUMBERS: Self = Self(172);
    pub const OLD_ITALIC: Self = Self(173);
    pub const GOTHIC: Self = Self(174);
    pub const OLD_PERMIC: Self = Self(175);
    pub const UGARITIC: Self = Self(176);
    pub const OLD_PERSIAN: Self = Self(177);
    pub const DESERET: Self = Self(178);
    pub const SHAVIAN: Self = Self(179);
    pub const OSMANYA: Self = Self(180);
    pub const OSAGE: Self = Self(181);
    pub const ELBASAN: Self = Self(182);
    pub const CAUCASIAN_ALBANIAN: Self = Self(183);
    pub const VITHKUQI: Self = Self(184);
    pub const LINEAR_A: Self = Self(185);
    pub const LATIN_EXTENDED_F: Self = Self(186);
    pub const CYPRIOT_SYLLABARY: Self = Self(187);
    pub const IMPERIAL_ARAMAIC: Self = Self(188);
    pub const PALMYRENE: Self = Self(189);
    pub const NABATAEAN: Self = Self(190);
    pub const HATRAN: Self = Self(191);
    pub const PHOENICIAN: Self = Self(192);
    pub const LYDIAN: Self = Self(193);
    pub const MEROITIC_HIEROGLYPHS: Self = Self(194);
    pub const MEROITIC_CURSIVE: Self = Self(195);
    pub const KHAROSHTHI: Self = Self(196);
    pub const OLD_SOUTH_ARABIAN: Self = Self(197);
    pub const OLD_NORTH_ARABIAN: Self = Self(198);
    pub const MANICHAEAN: Self = Self(199);
    pub const AVESTAN: Self = Self(200);
    pub const INSCRIPTIONAL_PARTHIAN: Self = Self(201);
    pub const INSCRIPTIONAL_PAHLAVI: Self = Self(202);
    pub const PSALTER_PAHLAVI: Self = Self(203);
    pub const OLD_TURKIC: Self = Self(204);
    pub const OLD_HUNGARIAN: Self = Self(205);
    pub const HANIFI_ROHINGYA: Self = Self(206);
    pub const RUMI_NUMERAL_SYMBOLS: Self = Self(207);
    pub const YEZIDI: Self = Self(208);
    pub const OLD_SOGDIAN: Self = Self(209);
    pub const SOGDIAN: Self = Self(210);
    pub const OLD_UYGHUR: Self = Self(211);
    pub const CHORASMIAN: Self = Self(212);
    pub const ELYMAIC: Self = Self(213);
    pub const BRAHMI: Self = Self(214);
    pub const KAITHI: Self = Self(215);
    pub const SORA_SOMPENG: Self = Self(216);
    pub const CHAKMA: Self = Self(217);
    pub const MAHAJANI: Self = Self(218);
    pub const SHARADA: Self = Self(219);
    pub const SINHALA_ARCHAIC_NUMBERS: Self = Self(220);
    pub const KHOJKI: Self = Self(221);
    pub const MULTANI: Self = Self(222);
    pub const KHUDAWADI: Self = Self(223);
    pub const GRANTHA: Self = Self(224);
    pub const NEWA: Self = Self(225);
    pub const TIRHUTA: Self = Self(226);
    pub const SIDDHAM: Self = Self(227);
    pub const MODI: Self = Self(228);
    pub const MONGOLIAN_SUPPLEMENT: Self = Self(229);
    pub const TAKRI: Self = Self(230);
    pub const AHOM: Self = Self(231);
    pub const DOGRA: Self = Self(232);
    pub const WARANG_CITI: Self = Self(233);
    pub const DIVES_AKURU: Self = Self(234);
    pub const NANDINAGARI: Self = Self(235);
    pub const ZANABAZAR_SQUARE: Self = Self(236);
    pub const SOYOMBO: Self = Self(237);
    pub const UNIFIED_CANADIAN_ABORIGINAL_SYLLABICS_EXTENDED_A: Self = Self(238);
    pub const PAU_CIN_HAU: Self = Self(239);
    pub const BHAIKSUKI: Self = Self(240);
    pub const MARCHEN: Self = Self(241);
    pub const MASARAM_GONDI: Self = Self(242);
    pub const GUNJALA_GONDI: Self = Self(243);
    pub const MAKASAR: Self = Self(244);
    pub const LISU_SUPPLEMENT: Self = Self(245);
    pub const TAMIL_SUPPLEMENT: Self = Self(246);
    pub const CUNEIFORM: Self = Self(247);
    pub const CUNEIFORM_NUMBERS_AND_PUNCTUATION: Self = Self(248);
    pub const EARLY_DYNASTIC_CUNEIFORM: Self = Self(249);
    pub const CYPRO_MINOAN: Self = Self(250);
    pub const EGYPTIAN_HIEROGLYPHS: Self = Self(251);
    pub const EGYPTIAN_HIEROGLYPH_FORMAT_CONTROLS: Self = Self(252);
    pub const ANATOLIAN_HIEROGLYPHS: Self = Self(253);
    pub const BAMUM_SUPPLEMENT: Self = Self(254);
    pub const MRO: Self = Self(255);
    pub const TANGSA: Self = Self(256);
    pub const BASSA_VAH: Self = Self(257);
    pub const PAHAWH_HMONG: Self = Self(258);
    pub const MEDEFAIDRIN: Self = Self(259);
    pub const MIAO: Self = Self(260);
    pub const IDEOGRAPHIC_SYMBOLS_AND_PUNCTUATION: Self = Self(261);
    pub const TANGUT: Self = Self(262);
    pub const TANGUT_COMPONENTS: Self = Self(263);
    pub const KHITAN_SMALL_SCRIPT: Self = Self(264);
    pub const TANGUT_SUPPLEMENT: Self = Self(265);
    pub const KANA_EXTENDED_B: Self = Self(266);
    pub const KANA_SUPPLEMENT: Self = Self(267);
    pub const KANA_EXTENDED_A: Self = Self(268);
    pub const SMALL_KANA_EXTENSION: Self = Self(269);
    pub const NUSHU: Self = Self(270);
    pub const DUPLOYAN: Self = Self(271);
    pub const SHORTHAND_FORMAT_CONTROLS: Self = Self(272);
    pub const ZNAMENNY_MUSICAL_NOTATION: Self = Self(273);
    pub const BYZANTINE_MUSICAL_SYMBOLS: Self = Self(274);
    pub const MUSICAL_SYMBOLS: Self = Self(275);
    pub const ANCIENT_GREEK_MUSICAL_NOTATION: Self = Self(276);
    pub const MAYAN_NUMERALS: Self = Self(277);
    pub const TAI_XUAN_JING_SYMBOLS: Self = Self(278);
    pub const COUNTING_ROD_NUMERALS: Self = Self(279);
    pub const MATHEMATICAL_ALPHANUMERIC_SYMBOLS: Self = Self(280);
    pub const SUTTON_SIGNWRITING: Self = Self(281);
    pub const LATIN_EXTENDED_G: Self = Self(282);
    pub const GLAGOLITIC_SUPPLEMENT: Self = Self(283);
    pub const NYIAKENG_PUACHUE_HMONG: Self = Self(284);
    pub const TOTO: Self = Self(285);
    pub const WANCHO: Self = Self(286);
    pub const ETHIOPIC_EXTENDED_B: Self = Self(287);
    pub const MENDE_KIKAKUI: Self = Self(288);
    pub const ADLAM: Self = Self(289);
    pub const INDIC_SIYAQ_NUMBERS: Self = Self(290);
    pub const OTTOMAN_SIYAQ_NUMBERS: Self = Self(291);
    pub const ARABIC_MATHEMATICAL_ALPHABETIC_SYMBOLS: Self = Self(292);
    pub const MAHJONG_TILES: Self = Self(293);
    pub const DOMINO_TILES: Self = Self(294);
    pub const PLAYING_CARDS: Self = Self(295);
    pub const ENCLOSED_ALPHANUMERIC_SUPPLEMENT: Self = Self(296);
    pub const ENCLOSED_IDEOGRAPHIC_SUPPLEMENT: Self = Self(297);
    pub const MISCELLANEOUS_SYMBOLS_AND_PICTOGRAPHS: Self = Self(298);
    pub const EMOTICONS: Self = Self(299);
    pub const ORNAMENTAL_DINGBATS: Self = Self(300);
    pub const TRANSPORT_AND_MAP_SYMBOLS: Self = Self(301);
    pub const ALCHEMICAL_SYMBOLS: Self = Self(302);
    pub const GEOMETRIC_SHAPES_EXTENDED: Self = Self(303);
    pub const SUPPLEMENTAL_ARROWS_C: Self = Self(304);
    pub const SUPPLEMENTAL_SYMBOLS_AND_PICTOGRAPHS: Self = Self(305);
    pub const CHESS_SYMBOLS: Self = Self(306);
    pub const SYMBOLS_AND_PICTOGRAPHS_EXTENDED_A: Self = Self(307);
    pub const SYMBOLS_FOR_LEGACY_COMPUTING: Self = Self(308);
    pub const CJK_UNIFIED_IDEOGRAPHS_EXTENSION_B: Self = Self(309);
    pub const CJK_UNIFIED_IDEOGRAPHS_EXTENSION_C: Self = Self(310);
    pub const CJK_UNIFIED_IDEOGRAPHS_EXTENSION_D: Self = Self(311);
    pub const CJK_UNIFIED_IDEOGRAPHS_EXTENSION_E: Self = Self(312);
    pub const CJK_UNIFIED_IDEOGRAPHS_EXTENSION_F: Self = Self(313);
    pub const CJK_COMPATIBILITY_IDEOGRAPHS_SUPPLEMENT: Self = Self(314);
    pub const CJK_UNIFIED_IDEOGRAPHS_EXTENSION_G: Self = Self(315);
    pub const TAGS: Self = Self(316);
    pub const VARIATION_SELECTORS_SUPPLEMENT: Self = Self(317);
    pub const SUPPLEMENTARY_PRIVATE_USE_AREA_A: Self = Self(318);
    pub const SUPPLEMENTARY_PRIVATE_USE_AREA_B: Self = Self(319);
    pub const SURROGATES_AREA: Self = Self(320);
}

#[rustfmt::skip]
pub static BLOCK_INFO: [BlockInfo; 321] = [
    BlockInfo::new("BASIC_LATIN", "Basic Latin", Some((0x0000, 0x007F))),
    BlockInfo::new("LATIN_1_SUPPLEMENT", "Latin-1 Supplement", Some((0x0080, 0x00FF))),
    BlockInfo::new("LATIN_EXTENDED_A", "Latin Extended-A", Some((0x0100, 0x017F))),
    BlockInfo::new("LATIN_EXTENDED_B", "Latin Extended-B", Some((0x0180, 0x024F))),
    BlockInfo::new("IPA_EXTENSIONS", "IPA Extensions", Some((0x0250, 0x02AF))),
    BlockInfo::new("SPACING_MODIFIER_LETTERS", "Spacing Modifier Letters", Some((0x02B0, 0x02FF))),
    BlockInfo::new("COMBINING_DIACRITICAL_MARKS", "Combining Diacritical Marks", Some((0x0300, 0x036F))),
    BlockInfo::new("GREEK", "Greek and Coptic", Some((0x0370, 0x03FF))),
    BlockInfo::new("CYRILLIC", "Cyrillic", Some((0x0400, 0x04FF))),
    BlockInfo::new("CYRILLIC_SUPPLEMENTARY", "Cyrillic Supplement", Some((0x0500, 0x052F))),
    BlockInfo::new("ARMENIAN", "Armenian", Some((0x0530, 0x058F))),
    BlockInfo::new("HEBREW", "Hebrew", Some((0x0590, 0x05FF))),
    BlockInfo::new("ARABIC", "Arabic", Some((0x0600, 0x06FF))),
    BlockInfo::new("SYRIAC", "Syriac", Some((0x0700, 0x074F))),
    BlockInfo::new("ARABIC_SUPPLEMENT", "Arabic Supplement", Some((0x0750, 0x077F))),
    BlockInfo::new("THAANA", "Thaana", Some((0x0780, 0x07BF))),
    BlockInfo::new("NKO", "NKo", Some((0x07C0, 0x07FF))),
    BlockInfo::new("SAMARITAN", "Samaritan", Some((0x0800, 0x083F))),
    BlockInfo::new("MANDAIC", "Mandaic", Some((0x0840, 0x085F))),
    BlockInfo::new("SYRIAC_SUPPLEMENT", "Syriac Supplement", Some((0x0860, 0x086F))),
    BlockInfo::new("ARABIC_EXTENDED_B", "Arabic Extended-B", Some((0x0870, 0x089F))),
    BlockInfo::new("ARABIC_EXTENDED_A", "Arabic Extended-A", Some((0x08A0, 0x08FF))),
    BlockInfo::new("DEVANAGARI", "Devanagari", Some((0x0900, 0x097F))),
    BlockInfo::new("BENGALI", "Bengali", Some((0x0980, 0x09FF))),
    BlockInfo::new("GURMUKHI", "Gurmukhi", Some((0x0A00, 0x0A7F))),
    BlockInfo::new("GUJARATI", "Gujarati", Some((0x0A80, 0x0AFF))),
    BlockInfo::new("ORIYA", "Oriya", Some((0x0B00, 0x0B7F))),
    BlockInfo::new("TAMIL", "Tamil", Some((0x0B80, 0x0BFF))),
    BlockInfo::new("TELUGU", "Telugu", Some((0x0C00, 0x0C7F))),
    BlockInfo::new("KANNADA", "Kannada", Some((0x0C80, 0x0CFF))),
    BlockInfo::new("MALAYALAM", "Malayalam", Some((0x0D00, 0x0D7F))),
    BlockInfo::new("SINHALA", "Sinhala", Some((0x0D80, 0x0DFF))),
    BlockInfo::new("THAI", "Thai", Some((0x0E00, 0x0E7F))),
    BlockInfo::new("LAO", "Lao", Some((0x0E80, 0x0EFF))),
    BlockInfo::new("TIBETAN", "Tibetan", Some((0x0F00, 0x0FFF))),
    BlockInfo::new("MYANMAR", "Myanmar", Some((0x1000, 0x109F))),
    BlockInfo::new("GEORGIAN", "Georgian", Some((0x10A0, 0x10FF))),
    BlockInfo::new("HANGUL_JAMO", "Hangul Jamo", Some((0x1100, 0x11FF))),
    BlockInfo::new("ETHIOPIC", "Ethiopic", Some((0x1200, 0x137F))),
    BlockInfo::new("ETHIOPIC_SUPPLEMENT", "Ethiopic Supplement", Some((0x1380, 0x139F))),
    BlockInfo::new("CHEROKEE", "Cherokee", Some((0x13A0, 0x13FF))),
    BlockInfo::new("UNIFIED_CANADIAN_ABORIGINAL_SYLLABICS", "Unified Canadian Aboriginal Syllabics", Some((0x1400, 0x167F))),
    BlockInfo::new("OGHAM", "Ogham", Some((0x1680, 0x169F))),
    BlockInfo::new("RUNIC", "Runic", Some((0x16A0, 0x16FF))),
    BlockInfo::new("TAGALOG", "Tagalog", Some((0x1700, 0x171F))),
    BlockInfo::new("HANUNOO", "Hanunoo", Some((0x1720, 0x173F))),
    BlockInfo::new("BUHID", "Buhid", Some((0x1740, 0x175F))),
    BlockInfo::new("TAGBANWA", "Tagbanwa", Some((0x1760, 0x177F))),
    BlockInfo::new("KHMER", "Khmer", Some((0x1780, 0x17FF))),
    BlockInfo::new("MONGOLIAN", "Mongolian", Some((0x1800, 0x18AF))),
    BlockInfo::new("UNIFIED_CANADIAN_ABORIGINAL_SYLLABICS_EXTENDED", "Unified Canadian Aboriginal Syllabics Extended", Some((0x18B0, 0x18FF))),
    BlockInfo::new("LIMBU", "Limbu", Some((0x1900, 0x194F))),
    BlockInfo::new("TAI_LE", "Tai Le", Some((0x1950, 0x197F))),
    BlockInfo::new("NEW_TAI_LUE", "New Tai Lue", Some((0x1980, 0x19DF))),
    BlockInfo::new("KHMER_SYMBOLS", "Khmer Symbols", Some((0x19E0, 0x19FF))),
    BlockInfo::new("BUGINESE", "Buginese", Some((0x1A00, 0x1A1F))),
    BlockInfo::new("TAI_THAM", "Tai Tham", Some((0x1A20, 0x1AAF))),
    BlockInfo::new("COMBINING_DIACRITICAL_MARKS_EXTENDED", "Combining Diacritical Marks Extended", Some((0x1AB0, 0x1AFF))),
    BlockInfo::new("BALINESE", "Balinese", Some((0x1B00, 0x1B7F))),
    BlockInfo::new("SUNDANESE", "Sundanese", Some((0x1B80, 0x1BBF))),
    BlockInfo::new("BATAK", "Batak", Some((0x1BC0, 0x1BFF))),
    BlockInfo::new("LEPCHA", "Lepcha", Some((0x1C00, 0x1C4F))),
    BlockInfo::new("OL_CHIKI", "Ol Chiki", Some((0x1C50, 0x1C7F))),
    BlockInfo::new("CYRILLIC_EXTENDED_C", "Cyrillic Extended-C", Some((0x1C80, 0x1C8F))),
    BlockInfo::new("GEORGIAN_EXTENDED", "Georgian Extended", Some((0x1C90, 0x1CBF))),
    BlockInfo::new("SUNDANESE_SUPPLEMENT", "Sundanese Supplement", Some((0x1CC0, 0x1CCF))),
    BlockInfo::new("VEDIC_EXTENSIONS", "Vedic Extensions", Some((0x1CD0, 0x1CFF))),
    BlockInfo::new("PHONETIC_EXTENSIONS", "Phonetic Extensions", Some((0x1D00, 0x1D7F))),
    BlockInfo::new("PHONETIC_EXTENSIONS_SUPPLEMENT", "Phonetic Extensions Supplement", Some((0x1D80, 0x1DBF))),
    BlockInfo::new("COMBINING_DIACRITICAL_MARKS_SUPPLEMENT", "Combining Diacritical Marks Supplement", Some((0x1DC0, 0x1DFF))),
    BlockInfo::new("LATIN_EXTENDED_ADDITIONAL", "Latin Extended Additional", Some((0x1E00, 0x1EFF))),
    BlockInfo::new("GREEK_EXTENDED", "Greek Extended", Some((0x1F00, 0x1FFF))),
    BlockInfo::new("GENERAL_PUNCTUATION", "General Punctuation", Some((0x2000, 0x206F))),
    BlockInfo::new("SUPERSCRIPTS_AND_SUBSCRIPTS", "Superscripts and Subscripts", Some((0x2070, 0x209F))),
    BlockInfo::new("CURRENCY_SYMBOLS", "Currency Symbols", Some((0x20A0, 0x20CF))),
    BlockInfo::new("COMBINING_MARKS_FOR_SYMBOLS", "Combining Diacritical Marks for Symbols", Some((0x20D0, 0x20FF))),
    BlockInfo::new("LETTERLIKE_SYMBOLS", "Letterlike Symbols", Some((0x2100, 0x214F))),
    BlockInfo::new("NUMBER_FORMS", "Number Forms", Some((0x2150, 0x218F))),
    BlockInfo::new("ARROWS", "Arrows", Some((0x2190, 0x21FF))),
    BlockInfo::new("MATHEMATICAL_OPERATORS", "Mathematical Operators", Some((0x2200, 0x22FF))),
    BlockInfo::new("MISCELLANEOUS_TECHNICAL", "Miscellaneous Technical", Some((0x2300, 0x23FF))),
    BlockInfo::new("CONTROL_PICTURES", "Control Pictures", Some((0x2400, 0x243F))),
    BlockInfo::new("OPTICAL_CHARACTER_RECOGNITION", "Optical Character Recognition", Some((0x2440, 0x245F))),
    BlockInfo::new("ENCLOSED_ALPHANUMERICS", "Enclosed Alphanumerics", Some((0x2460, 0x24FF))),
    BlockInfo::new("BOX_DRAWING", "Box Drawing", Some((0x2500, 0x257F))),
    BlockInfo::new("BLOCK_ELEMENTS", "Block Elements", Some((0x2580, 0x259F))),
    BlockInfo::new("GEOMETRIC_SHAPES", "Geometric Shapes", Some((0x25A0, 0x25FF))),
    BlockInfo::new("MISCELLANEOUS_SYMBOLS", "Miscellaneous Symbols", Some((0x2600, 0x26FF))),
    BlockInfo::new("DINGBATS", "Dingbats", Some((0x2700, 0x27BF))),
    BlockInfo::new("MISCELLANEOUS_MATHEMATICAL_SYMBOLS_A", "Miscellaneous Mathematical Symbols-A", Some((0x27C0, 0x27EF))),
    BlockInfo::new("SUPPLEMENTAL_ARROWS_A", "Supplemental Arrows-A", Some((0x27F0, 0x27FF))),
    BlockInfo::new("BRAILLE_PATTERNS", "Braille Patterns", Some((0x2800, 0x28FF))),
    BlockInfo::new("SUPPLEMENTAL_ARROWS_B", "Supplemental Arrows-B", Some((0x2900, 0x297F))),
    BlockInfo::new("MISCELLANEOUS_MATHEMATICAL_SYMBOLS_B", "Miscellaneous Mathematical Symbols-B", Some((0x2980, 0x29FF))),
    BlockInfo::new("SUPPLEMENTAL_MATHEMATICAL_OPERATORS", "Supplemental Mathematical Operators", Some((0x2A00, 0x2AFF))),
    BlockInfo::new("MISCELLANEOUS_SYMBOLS_AND_ARROWS", "Miscellaneous Symbols and Arrows", Some((0x2B00, 0x2BFF))),
    BlockInfo::new("GLAGOLITIC", "Glagolitic", Some((0x2C00, 0x2C5F))),
    BlockInfo::new("LATIN_EXTENDED_C", "Latin Extended-C", Some((0x2C60, 0x2C7F))),
    BlockInfo::new("COPTIC", "Coptic", Some((0x2C80, 0x2CFF))),
    BlockInfo::new("GEORGIAN_SUPPLEMENT", "Georgian Supplement", Some((0x2D00, 0x2D2F))),
    BlockInfo::new("TIFINAGH", "Tifinagh", Some((0x2D30, 0x2D7F))),
    BlockInfo::new("ETHIOPIC_EXTENDED", "Ethiopic Extended", Some((0x2D80, 0x2DDF))),
    BlockInfo::new("CYRILLIC_EXTENDED_A", "Cyrillic Extended-A", Some((0x2DE0, 0x2DFF))),
    BlockInfo::new("SUPPLEMENTAL_PUNCTUATION", "Supplemental Punctuation", Some((0x2E00, 0x2E7F))),
    BlockInfo::new("CJK_RADICALS_SUPPLEMENT", "CJK Radicals Supplement", Some((0x2E80, 0x2EFF))),
    BlockInfo::new("KANGXI_RADICALS", "Kangxi Radicals", Some((0x2F00, 0x2FDF))),
    BlockInfo::new("IDEOGRAPHIC_DESCRIPTION_CHARACTERS", "Ideographic Description Characters", Some((0x2FF0, 0x2FFF))),
    BlockInfo::new("CJK_SYMBOLS_AND_PUNCTUATION", "CJK Symbols and Punctuation", Some((0x3000, 0x303F))),
    BlockInfo::new("HIRAGANA", "Hiragana", Some((0x3040, 0x309F))),
    BlockInfo::new("KATAKANA", "Katakana", Some((0x30A0, 0x30FF))),
    BlockInfo::new("BOPOMOFO", "Bopomofo", Some((0x3100, 0x312F))),
    BlockInfo::new("HANGUL_COMPATIBILITY_JAMO", "Hangul Compatibility Jamo", Some((0x3130, 0x318F))),
    BlockInfo::new("KANBUN", "Kanbun", Some((0x3190, 0x319F))),
    BlockInfo::new("BOPOMOFO_EXTENDED", "Bopomofo Extended", Some((0x31A0, 0x31BF))),
    BlockInfo::new("CJK_STROKES", "CJK Strokes", Some((0x31C0, 0x31EF))),
    BlockInfo::new("KATAKANA_PHONETIC_EXTENSIONS", "Katakana Phonetic Extensions", Some((0x31F0, 0x31FF))),
    BlockInfo::new("ENCLOSED_CJK_LETTERS_AND_MONTHS", "Enclosed CJK Letters and Months", Some((0x3200, 0x32FF))),
    BlockInfo::new("CJK_COMPATIBILITY", "CJK Compatibility", Some((0x3300, 0x33FF))),
    BlockInfo::new("CJK_UNIFIED_IDEOGRAPHS_EXTENSION_A", "CJK Unified Ideographs Extension A", Some((0x3400, 0x4DBF))),
    BlockInfo::new("YIJING_HEXAGRAM_SYMBOLS", "Yijing Hexagram Symbols", Some((0x4DC0, 0x4DFF))),
    BlockInfo::new("CJK_UNIFIED_IDEOGRAPHS", "CJK Unified Ideographs", Some((0x4E00, 0x9FFF))),
    BlockInfo::new("YI_SYLLABLES", "Yi Syllables", Some((0xA000, 0xA48F))),
    BlockInfo::new("YI_RADICALS", "Yi Radicals", Some((0xA490, 0xA4CF))),
    BlockInfo::new("LISU", "Lisu", Some((0xA4D0, 0xA4FF))),
    BlockInfo::new("VAI", "Vai", Some((0xA500, 0xA63F))),
    BlockInfo::new("CYRILLIC_EXTENDED_B", "Cyrillic Extended-B", Some((0xA640, 0xA69F))),
    BlockInfo::new("BAMUM", "Bamum", Some((0xA6A0, 0xA6FF))),
    BlockInfo::new("MODIFIER_TONE_LETTERS", "Modifier Tone Letters", Some((0xA700, 0xA71F))),
    BlockInfo::new("LATIN_EXTENDED_D", "Latin Extended-D", Some((0xA720, 0xA7FF))),
    BlockInfo::new("SYLOTI_NAGRI", "Syloti Nagri", Some((0xA800, 0xA82F))),
    BlockInfo::new("COMMON_INDIC_NUMBER_FORMS", "Common Indic Number Forms", Some((0xA830, 0xA83F))),
    BlockInfo::new("PHAGS_PA", "Phags-pa", Some((0xA840, 0xA87F))),
    BlockInfo::new("SAURASHTRA", "Saurashtra", Some((0xA880, 0xA8DF))),
    BlockInfo::new("DEVANAGARI_EXTENDED", "Devanagari Extended", Some((0xA8E0, 0xA8FF))),
    BlockInfo::new("KAYAH_LI", "Kayah Li", Some((0xA900, 0xA92F))),
    BlockInfo::new("REJANG", "Rejang", Some((0xA930, 0xA95F))),
    BlockInfo::new("HANGUL_JAMO_EXTENDED_A", "Hangul Jamo Extended-A", Some((0xA960, 0xA97F))),
    BlockInfo::new("JAVANESE", "Javanese", Some((0xA980, 0xA9DF))),
    BlockInfo::new("MYANMAR_EXTENDED_B", "Myanmar Extended-B", Some((0xA9E0, 0xA9FF))),
    BlockInfo::new("CHAM", "Cham", Some((0xAA00, 0xAA5F))),
    BlockInfo::new("MYANMAR_EXTENDED_A", "Myanmar Extended-A", Some((0xAA60, 0xAA7F))),
    BlockInfo::new("TAI_VIET", "Tai Viet", Some((0xAA80, 0xAADF))),
    BlockInfo::new("MEETEI_MAYEK_EXTENSIONS", "Meetei Mayek Extensions", Some((0xAAE0, 0xAAFF))),
    BlockInfo::new("ETHIOPIC_EXTENDED_A", "Ethiopic Extended-A", Some((0xAB00, 0xAB2F))),
    BlockInfo::new("LATIN_EXTENDED_E", "Latin Extended-E", Some((0xAB30, 0xAB6F))),
    BlockInfo::new("CHEROKEE_SUPPLEMENT", "Cherokee Supplement", Some((0xAB70, 0xABBF))),
    BlockInfo::new("MEETEI_MAYEK", "Meetei Mayek", Some((0xABC0, 0xABFF))),
    BlockInfo::new("HANGUL_SYLLABLES", "Hangul Syllables", Some((0xAC00, 0xD7AF))),
    BlockInfo::new("HANGUL_JAMO_EXTENDED_B", "Hangul Jamo Extended-B", Some((0xD7B0, 0xD7FF))),
    BlockInfo::new("HIGH_SURROGATES", "High Surrogates", Some((0xD800, 0xDB7F))),
    BlockInfo::new("HIGH_PRIVATE_USE_SURROGATES", "High Private Use Surrogates", Some((0xDB80, 0xDBFF))),
    BlockInfo::new("LOW_SURROGATES", "Low Surrogates", Some((0xDC00, 0xDFFF))),
    BlockInfo::new("PRIVATE_USE_AREA", "Private Use Area", Some((0xE000, 0xF8FF))),
    BlockInfo::new("CJK_COMPATIBILITY_IDEOGRAPHS", "CJK Compatibility Ideographs", Some((0xF900, 0xFAFF))),
    BlockInfo::new("ALPHABETIC_PRESENTATION_FORMS", "Alphabetic Presentation Forms", Some((0xFB00, 0xFB4F))),
    BlockInfo::new("ARABIC_PRESENTATION_FORMS_A", "Arabic Presentation Forms-A", Some((0xFB50, 0xFDFF))),
    BlockInfo::new("VARIATION_SELECTORS", "Variation Selectors", Some((0xFE00, 0xFE0F))),
    BlockInfo::new("VERTICAL_FORMS", "Vertical Forms", Some((0xFE10, 0xFE1F))),
    BlockInfo::new("COMBINING_HALF_MARKS", "Combining Half Marks", Some((0xFE20, 0xFE2F))),
    BlockInfo::new("CJK_COMPATIBILITY_FORMS", "CJK Compatibility Forms", Some((0xFE30, 0xFE4F))),
    BlockInfo::new("SMALL_FORM_VARIANTS", "Small Form Variants", Some((0xFE50, 0xFE6F))),
    BlockInfo::new("ARABIC_PRESENTATION_FORMS_B", "Arabic Presentation Forms-B", Some((0xFE70, 0xFEFF))),
    BlockInfo::new("HALFWIDTH_AND_FULLWIDTH_FORMS", "Halfwidth and Fullwidth Forms", Some((0xFF00, 0xFFEF))),
    BlockInfo::new("SPECIALS", "Specials", Some((0xFFF0, 0xFFFF))),
    BlockInfo::new("LINEAR_B_SYLLABARY", "Linear B Syllabary", Some((0x10000, 0x1007F))),
    BlockInfo::new("LINEAR_B_IDEOGRAMS", "Linear B Ideograms", Some((0x10080, 0x100FF))),
    BlockInfo::new("AEGEAN_NUMBERS", "Aegean Numbers", Some((0x10100, 0x1013F))),
    BlockInfo::new("ANCIENT_GREEK_NUMBERS", "Ancient Greek Numbers", Some((0x10140, 0x1018F))),
    BlockInfo::new("ANCIENT_SYMBOLS", "Ancient Symbols", Some((0x10190, 0x101CF))),
    BlockInfo::new("PHAISTOS_DISC", "Phaistos Disc", Some((0x101D0, 0x101FF))),
    BlockInfo::new("LYCIAN", "Lycian", Some((0x10280, 0x1029F))),
    BlockInfo::new("CARIAN", "Carian", Some((0x102A0, 0x102DF))),
    BlockInfo::new("COPTIC_EPACT_NUMBERS", "Coptic Epact Numbers", Some((0x102E0, 0x102FF))),
    BlockInfo::new("OLD_ITALIC", "Old Italic", Some((0x10300, 0x1032F))),
    BlockInfo::new("GOTHIC", "Gothic", Some((0x10330, 0x1034F))),
    BlockInfo::new("OLD_PERMIC", "Old Permic", Some((0x10350, 0x1037F))),
    BlockInfo::new("UGARITIC", "Ugaritic", Some((0x10380, 0x1039F))),
    BlockInfo::new("OLD_PERSIAN", "Old Persian", Some((0x103A0, 0x103DF))),
    BlockInfo::new("DESERET", "Deseret", Some((0x10400, 0x1044F))),
    BlockInfo::new("SHAVIAN", "Shavian", Some((0x10450, 0x1047F))),
    BlockInfo::new("OSMANYA", "Osmanya", Some((0x10480, 0x104AF))),
    BlockInfo::new("OSAGE", "Osage", Some((0x104B0, 0x104FF))),
    BlockInfo::new("ELBASAN", "Elbasan", Some((0x10500, 0x1052F))),
    BlockInfo::new("CAUCASIAN_ALBANIAN", "Caucasian Albanian", Some((0x10530, 0x1056F))),
    BlockInfo::new("VITHKUQI", "Vithkuqi", Some((0x10570, 0x105BF))),
    BlockInfo::new("LINEAR_A", "Linear A", Some((0x10600, 0x1077F))),
    BlockInfo::new("LATIN_EXTENDED_F", "Latin Extended-F", Some((0x10780, 0x107BF))),
    BlockInfo::new("CYPRIOT_SYLLABARY", "Cypriot Syllabary", Some((0x10800, 0x1083F))),
    BlockInfo::new("IMPERIAL_ARAMAIC", "Imperial Aramaic", Some((0x10840, 0x1085F))),
    BlockInfo::new("PALMYRENE", "Palmyrene", Some((0x10860, 0x1087F))),
    BlockInfo::new("NABATAEAN", "Nabataean", Some((0x10880, 0x108AF))),
    BlockInfo::new("HATRAN", "Hatran", Some((0x108E0, 0x108FF))),
    BlockInfo::new("PHOENICIAN", "Phoenician", Some((0x10900, 0x1091F))),
    BlockInfo::new("LYDIAN", "Lydian", Some((0x10920, 0x1093F))),
    BlockInfo::new("MEROITIC_HIEROGLYPHS", "Meroitic Hieroglyphs", Some((0x10980, 0x1099F))),
    BlockInfo::new("MEROITIC_CURSIVE", "Meroitic Cursive", Some((0x109A0, 0x109FF))),
    BlockInfo::new("KHAROSHTHI", "Kharoshthi", Some((0x10A00, 0x10A5F))),
    BlockInfo::new("OLD_SOUTH_ARABIAN", "Old South Arabian", Some((0x10A60, 0x10A7F))),
    BlockInfo::new("OLD_NORTH_ARABIAN", "Old North Arabian", Some((0x10A80, 0x10A9F))),
    BlockInfo::new("MANICHAEAN", "Manichaean", Some((0x10AC0, 0x10AFF))),
    BlockInfo::new("AVESTAN", "Avestan", Some((0x10B00, 0x10B3F))),
    BlockInfo::new("INSCRIPTIONAL_PARTHIAN", "Inscriptional Parthian", Some((0x10B40, 0x10B5F))),
    BlockInfo::new("INSCRIPTIONAL_PAHLAVI", "Inscriptional Pahlavi", Some((0x10B60, 0x10B7F))),
    BlockInfo::new("PSALTER_PAHLAVI", "Psalter Pahlavi", Some((0x10B80, 0x10BAF))),
    BlockInfo::new("OLD_TURKIC", "Old Turkic", Some((0x10C00, 0x10C4F))),
    BlockInfo::new("OLD_HUNGARIAN", "Old Hungarian", Some((0x10C80, 0x10CFF))),
    BlockInfo::new("HANIFI_ROHINGYA", "Hanifi Rohingya", Some((0x10D00, 0x10D3F))),
    BlockInfo::new("RUMI_NUMERAL_SYMBOLS", "Rumi Numeral Symbols", Some((0x10E60, 0x10E7F))),
    BlockInfo::new("YEZIDI", "Yezidi", Some((0x10E80, 0x10EBF))),
    BlockInfo::new("OLD_SOGDIAN", "Old Sogdian", Some((0x10F00, 0x10F2F))),
    BlockInfo::new("SOGDIAN", "Sogdian", Some((0x10F30, 0x10F6F))),
    BlockInfo::new("OLD_UYGHUR", "Old Uyghur", Some((0x10F70, 0x10FAF))),
    BlockInfo::new("CHORASMIAN", "Chorasmian", Some((0x10FB0, 0x10FDF))),
    BlockInfo::new("ELYMAIC", "Elymaic", Some((0x10FE0, 0x10FFF))),
    BlockInfo::new("BRAHMI", "Brahmi", Some((0x11000, 0x1107F))),
    BlockInfo::new("KAITHI", "Kaithi", Some((0x11080, 0x110CF))),
    BlockInfo::new("SORA_SOMPENG", "Sora Sompeng", Some((0x110D0, 0x110FF))),
    BlockInfo::new("CHAKMA", "Chakma", Some((0x11100, 0x1114F))),
    BlockInfo::new("MAHAJANI", "Mahajani", Some((0x11150, 0x1117F))),
    BlockInfo::new("SHARADA", "Sharada", Some((0x11180, 0x111DF))),
    BlockInfo::new("SINHALA_ARCHAIC_NUMBERS", "Sinhala Archaic Numbers", Some((0x111E0, 0x111FF))),
    BlockInfo::new("KHOJKI", "Khojki", Some((0x11200, 0x1124F))),
    BlockInfo::new("MULTANI", "Multani", Some((0x11280, 0x112AF))),
    BlockInfo::new("KHUDAWADI", "Khudawadi", Some((0x112B0, 0x112FF))),
    BlockInfo::new("GRANTHA", "Grantha", Some((0x11300, 0x1137F))),
    BlockInfo::new("NEWA", "Newa", Some((0x11400, 0x1147F))),
    BlockInfo::new("TIRHUTA", "Tirhuta", Some((0x11480, 0x114DF))),
    BlockInfo::new("SIDDHAM", "Siddham", Some((0x11580, 0x115FF))),
    BlockInfo::new("MODI", "Modi", Some((0x11600, 0x1165F))),
    BlockInfo::new("MONGOLIAN_SUPPLEMENT", "Mongolian Supplement", Some((0x11660, 0x1167F))),
    BlockInfo::new("TAKRI", "Takri", Some((0x11680, 0x116CF))),
    BlockInfo::new("AHOM", "Ahom", Some((0x11700, 0x1174F))),
    BlockInfo::new("DOGRA", "Dogra", Some((0x11800, 0x1184F))),
    BlockInfo::new("WARANG_CITI", "Warang Citi", Some((0x118A0, 0x118FF))),
    BlockInfo::new("DIVES_AKURU", "Dives Akuru", Some((0x11900, 0x1195F))),
    BlockInfo::new("NANDINAGARI", "Nandinagari", Some((0x119A0, 0x119FF))),
    BlockInfo::new("ZANABAZAR_SQUARE", "Zanabazar Square", Some((0x11A00, 0x11A4F))),
    BlockInfo::new("SOYOMBO", "Soyombo", Some((0x11A50, 0x11AAF))),
    BlockInfo::new("UNIFIED_CANADIAN_ABORIGINAL_SYLLABICS_EXTENDED_A", "Unified Canadian Aboriginal Syllabics Extended-A", Some((0x11AB0, 0x11ABF))),
    BlockInfo::new("PAU_CIN_HAU", "Pau Cin Hau", Some((0x11AC0, 0x11AFF))),
    BlockInfo::new("BHAIKSUKI", "Bhaiksuki", Some((0x11C00, 0x11C6F))),
    BlockInfo::new("MARCHEN", "Marchen", Some((0x11C70, 0x11CBF))),
    BlockInfo::new("MASARAM_GONDI", "Masaram Gondi", Some((0x11D00, 0x11D5F))),
    BlockInfo::new("GUNJALA_GONDI", "Gunjala Gondi", Some((0x11D60, 0x11DAF))),
    BlockInfo::new("MAKASAR", "Makasar", Some((0x11EE0, 0x11EFF))),
    BlockInfo::new("LISU_SUPPLEMENT", "Lisu Supplement", Some((0x11FB0, 0x11FBF))),
    BlockInfo::new("TAMIL_SUPPLEMENT", "Tamil Supplement", Some((0x11FC0, 0x11FFF))),
    BlockInfo::new("CUNEIFORM", "Cuneiform", Some((0x12000, 0x123FF))),
    BlockInfo::new("CUNEIFORM_NUMBERS_AND_PUNCTUATION", "Cuneiform Numbers and Punctuation", Some((0x12400, 0x1247F))),
    BlockInfo::new("EARLY_DYNASTIC_CUNEIFORM", "Early Dynastic Cuneiform", Some((0x12480, 0x1254F))),
    BlockInfo::new("CYPRO_MINOAN", "Cypro-Minoan", Some((0x12F90, 0x12FFF))),
    BlockInfo::new("EGYPTIAN_HIEROGLYPHS", "Egyptian Hieroglyphs", Some((0x13000, 0x1342F))),
    BlockInfo::new("EGYPTIAN_HIEROGLYPH_FORMAT_CONTROLS", "Egyptian Hieroglyph Format Controls", Some((0x13430, 0x1343F))),
    BlockInfo::new("ANATOLIAN_HIEROGLYPHS", "Anatolian Hieroglyphs", Some((0x14400, 0x1467F))),
    BlockInfo::new("BAMUM_SUPPLEMENT", "Bamum Supplement", Some((0x16800, 0x16A3F))),
    BlockInfo::new("MRO", "Mro", Some((0x16A40, 0x16A6F))),
    BlockInfo::new("TANGSA", "Tangsa", Some((0x16A70, 0x16ACF))),
    BlockInfo::new("BASSA_VAH", "Bassa Vah", Some((0x16AD0, 0x16AFF))),
    BlockInfo::new("PAHAWH_HMONG", "Pahawh Hmong", Some((0x16B00, 0x16B8F))),
    BlockInfo::new("MEDEFAIDRIN", "Medefaidrin", Some((0x16E40, 0x16E9F))),
    BlockInfo::new("MIAO", "Miao", Some((0x16F00, 0x16F9F))),
    BlockInfo::new("IDEOGRAPHIC_SYMBOLS_AND_PUNCTUATION", "Ideographic Symbols and Punctuation", Some((0x16FE0, 0x16FFF))),
    BlockInfo::new("TANGUT", "Tangut", Some((0x17000, 0x187FF))),
    BlockInfo::new("TANGUT_COMPONENTS", "Tangut Components", Some((0x18800, 0x18AFF))),
    BlockInfo::new("KHITAN_SMALL_SCRIPT", "Khitan Small Script", Some((0x18B00, 0x18CFF))),
    BlockInfo::new("TANGUT_SUPPLEMENT", "Tangut Supplement", Some((0x18D00, 0x18D7F))),
    BlockInfo::new("KANA_EXTENDED_B", "Kana Extended-B", Some((0x1AFF0, 0x1AFFF))),
    BlockInfo::new("KANA_SUPPLEMENT", "Kana Supplement", Some((0x1B000, 0x1B0FF))),
    BlockInfo::new("KANA_EXTENDED_A", "Kana Extended-A", Some((0x1B100, 0x1B12F))),
    BlockInfo::new("SMALL_KANA_EXTENSION", "Small Kana Extension", Some((0x1B130, 0x1B16F))),
    BlockInfo::new("NUSHU", "Nushu", Some((0x1B170, 0x1B2FF))),
    BlockInfo::new("DUPLOYAN", "Duployan", Some((0x1BC00, 0x1BC9F))),
    BlockInfo::new("SHORTHAND_FORMAT_CONTROLS", "Shorthand Format Controls", Some((0x1BCA0, 0x1BCAF))),
    BlockInfo::new("ZNAMENNY_MUSICAL_NOTATION", "Znamenny Musical Notation", Some((0x1CF00, 0x1CFCF))),
    BlockInfo::new("BYZANTINE_MUSICAL_SYMBOLS", "Byzantine Musical Symbols", Some((0x1D000, 0x1D0FF))),
    BlockInfo::new("MUSICAL_SYMBOLS", "Musical Symbols", Some((0x1D100, 0x1D1FF))),
    BlockInfo::new("ANCIENT_GREEK_MUSICAL_NOTATION", "Ancient Greek Musical Notation", Some((0x1D200, 0x1D24F))),
    BlockInfo::new("MAYAN_NUMERALS", "Mayan Numerals", Some((0x1D2E0, 0x1D2FF))),
    BlockInfo::new("TAI_XUAN_JING_SYMBOLS", "Tai Xuan Jing Symbols", Some((0x1D300, 0x1D35F))),
    BlockInfo::new("COUNTING_ROD_NUMERALS", "Counting Rod Numerals", Some((0x1D360, 0x1D37F))),
    BlockInfo::new("MATHEMATICAL_ALPHANUMERIC_SYMBOLS", "Mathematical Alphanumeric Symbols", Some((0x1D400, 0x1D7FF))),
    BlockInfo::new("SUTTON_SIGNWRITING", "Sutton SignWriting", Some((0x1D800, 0x1DAAF))),
    BlockInfo::new("LATIN_EXTENDED_G", "Latin Extended-G", Some((0x1DF00, 0x1DFFF))),
    BlockInfo::new("GLAGOLITIC_SUPPLEMENT", "Glagolitic Supplement", Some((0x1E000, 0x1E02F))),
    BlockInfo::new("NYIAKENG_PUACHUE_HMONG", "Nyiakeng Puachue Hmong", Some((0x1E100, 0x1E14F))),
    BlockInfo::new("TOTO", "Toto", Some((0x1E290, 0x1E2BF))),
    BlockInfo::new("WANCHO", "Wancho", Some((0x1E2C0, 0x1E2FF))),
    BlockInfo::new("ETHIOPIC_EXTENDED_B", "Ethiopic Extended-B", Some((0x1E7E0, 0x1E7FF))),
    BlockInfo::new("MENDE_KIKAKUI", "Mende Kikakui", Some((0x1E800, 0x1E8DF))),
    BlockInfo::new("ADLAM", "Adlam", Some((0x1E900, 0x1E95F))),
    BlockInfo::new("INDIC_SIYAQ_NUMBERS", "Indic Siyaq Numbers", Some((0x1EC70, 0x1ECBF))),
    BlockInfo::new("OTTOMAN_SIYAQ_NUMBERS", "Ottoman Siyaq Numbers", Some((0x1ED00, 0x1ED4F))),
    BlockInfo::new("ARABIC_MATHEMATICAL_ALPHABETIC_SYMBOLS", "Arabic Mathematical Alphabetic Symbols", Some((0x1EE00, 0x1EEFF))),
    BlockInfo::new("MAHJONG_TILES", "Mahjong Tiles", Some((0x1F000, 0x1F02F))),
    BlockInfo::new("DOMINO_TILES", "Domino Tiles", Some((0x1F030, 0x1F09F))),
    BlockInfo::new("PLAYING_CARDS", "Playing Cards", Some((0x1F0A0, 0x1F0FF))),
    BlockInfo::new("ENCLOSED_ALPHANUMERIC_SUPPLEMENT", "Enclosed Alphanumeric Supplement", Some((0x1F100, 0x1F1FF))),
    BlockInfo::new("ENCLOSED_IDEOGRAPHIC_SUPPLEMENT", "Enclosed Ideographic Supplement", Some((0x1F200, 0x1F2FF))),
    BlockInfo::new("MISCELLANEOUS_SYMBOLS_AND_PICTOGRAPHS", "Miscellaneous Symbols and Pictographs", Some((0x1F300, 0x1F5FF))),
    BlockInfo::new("EMOTICONS", "Emoticons", Some((0x1F600, 0x1F64F))),
    BlockInfo::new("ORNAMENTAL_DINGBATS", "Ornamental Dingbats", Some((0x1F650, 0x1F67F))),
    BlockInfo::new("TRANSPORT_AND_MAP_SYMBOLS", "Transport and Map Symbols", Some((0x1F680, 0x1F6FF))),
    BlockInfo::new("ALCHEMICAL_SYMBOLS", "Alchemical Symbols", Some((0x1F700, 0x1F77F))),
    BlockInfo::new("GEOMETRIC_SHAPES_EXTENDED", "Geometric Shapes Extended", Some((0x1F780, 0x1F7FF))),
    BlockInfo::new("SUPPLEMENTAL_ARROWS_C", "Supplemental Arrows-C", Some((0x1F800, 0x1F8FF))),
    BlockInfo::new("SUPPLEMENTAL_SYMBOLS_AND_PICTOGRAPHS", "Supplemental Symbols and Pictographs", Some((0x1F900, 0x1F9FF))),
    BlockInfo::new("CHESS_SYMBOLS", "Chess Symbols", Some((0x1FA00, 0x1FA6F))),
    BlockInfo::new("SYMBOLS_AND_PICTOGRAPHS_EXTENDED_A", "Symbols and Pictographs Extended-A", Some((0x1FA70, 0x1FAFF))),
    BlockInfo::new("SYMBOLS_FOR_LEGACY_COMPUTING", "Symbols for Legacy Computing", Some((0x1FB00, 0x1FBFF))),
    BlockInfo::new("CJK_UNIFIED_IDEOGRAPHS_EXTENSION_B", "CJK Unified Ideographs Extension B", Some((0x20000, 0x2A6DF))),
    BlockInfo::new("CJK_UNIFIED_IDEOGRAPHS_EXTENSION_C", "CJK Unified Ideographs Extension C", Some((0x2A700, 0x2B73F))),
    BlockInfo::new("CJK_UNIFIED_IDEOGRAPHS_EXTENSION_D", "CJK Unified Ideographs Extension D", Some((0x2B740, 0x2B81F))),
    BlockInfo::new("CJK_UNIFIED_IDEOGRAPHS_EXTENSION_E", "CJK Unified Ideographs Extension E", Some((0x2B820, 0x2CEAF))),
    BlockInfo::new("CJK_UNIFIED_IDEOGRAPHS_EXTENSION_F", "CJK Unified Ideographs Extension F", Some((0x2CEB0, 0x2EBEF))),
    BlockInfo::new("CJK_COMPATIBILITY_IDEOGRAPHS_SUPPLEMENT", "CJK Compatibility Ideographs Supplement", Some((0x2F800, 0x2FA1F))),
    BlockInfo::new("CJK_UNIFIED_IDEOGRAPHS_EXTENSION_G", "CJK Unified Ideographs Extension G", Some((0x30000, 0x3134F))),
    BlockInfo::new("TAGS", "Tags", Some((0xE0000, 0xE007F))),
    BlockInfo::new("VARIATION_SELECTORS_SUPPLEMENT", "Variation Selectors Supplement", Some((0xE0100, 0xE01EF))),
    BlockInfo::new("SUPPLEMENTARY_PRIVATE_USE_AREA_A", "Supplementary Private Use Area-A", Some((0xF0000, 0xFFFFF))),
    BlockInfo::new("SUPPLEMENTARY_PRIVATE_USE_AREA_B", "Supplementary Private Use Area-B", Some((0x100000, 0x10FFFF))),
    BlockInfo::new("SURROGATES_AREA", "Surrogates Area", None),
];

#[rustfmt::skip]
pub static BLOCK_STARTS: [u32; 371] = [
    0x0000, // Basic Latin
    0x0080, // Latin-1 Supplement
    0x0100, // Latin Extended-A
    0x0180, // Latin Extended-B
    0x0250, // IPA Extensions
    0x02B0, // Spacing Modifier Letters
    0x0300, // Combining Diacritical Marks
    0x0370, // Greek and Coptic
    0x0400, // Cyrillic
    0x0500, // Cyrillic Supplement
    0x0530, // Armenian
    0x0590, // Hebrew
    0x0600, // Arabic
    0x0700, // Syriac
    0x0750, // Arabic Supplement
    0x0780, // Thaana
    0x07C0, // NKo
    0x0800, // Samaritan
    0x0840, // Mandaic
    0x0860, // Syriac Supplement
    0x0870, // Arabic Extended-B
    0x08A0, // Arabic Extended-A
    0x0900, // Devanagari
    0x0980, // Bengali
    0x0A00, // Gurmukhi
    0x0A80, // Gujarati
    0x0B00, // Oriya
    0x0B80, // Tamil
    0x0C00, // Telugu
    0x0C80, // Kannada
    0x0D00, // Malayalam
    0x0D80, // Sinhala
    0x0E00, // Thai
    0x0E80, // Lao
    0x0F00, // Tibetan
    0x1000, // Myanmar
    0x10A0, // Georgian
    0x1100, // Hangul Jamo
    0x1200, // Ethiopic
    0x1380, // Ethiopic Supplement
    0x13A0, // Cherokee
    0x1400, // Unified Canadian Aboriginal Syllabics
    0x1680, // Ogham
    0x16A0, // Runic
    0x1700, // Tagalog
    0x1720, // Hanunoo
    0x1740, // Buhid
    0x1760, // Tagbanwa
    0x1780, // Khmer
    0x1800, // Mongolian
    0x18B0, // Unified Canadian Aboriginal Syllabics Extended
    0x1900, // Limbu
    0x1950, // Tai Le
    0x1980, // New Tai Lue
    0x19E0, // Khmer Symbols
    0x1A00, // Buginese
    0x1A20, // Tai Tham
    0x1AB0, // Combining Diacritical Marks Extended
    0x1B00, // Balinese
    0x1B80, // Sundanese
    0x1BC0, // Batak
    0x1C00, // Lepcha
    0x1C50, // Ol Chiki
    0x1C80, // Cyrillic Extended-C
    0x1C90, // Georgian Extended
    0x1CC0, // Sundanese Supplement
    0x1CD0, // Vedic Extensions
    0x1D00, // Phonetic Extensions
    0x1D80, // Phonetic Extensions Supplement
    0x1DC0, // Combining Diacritical Marks Supplement
    0x1E00, // Latin Extended Additional
    0x1F00, // Greek Extended
    0x2000, // General Punctuation
    0x2070, // Superscripts and Subscripts
    0x20A0, // Currency Symbols
    0x20D0, // Combining Diacritical Marks for Symbols
    0x2100, // Letterlike Symbols
    0x2150, // Number Forms
    0x2190, // Arrows
    0x2200, // Mathematical Operators
    0x2300, // Miscellaneous Technical
    0x2400, // Control Pictures
    0x2440, // Optical Character Recognition
    0x2460, // Enclosed Alphanumerics
    0x2500, // Box Drawing
    0x2580, // Block Elements
    0x25A0, // Geometric Shapes
    0x2600, // Miscellaneous Symbols
    0x2700, // Dingbats
    0x27C0, // Miscellaneous Mathematical Symbols-A
    0x27F0, // Supplemental Arrows-A
    0x2800, // Braille Patterns
    0x2900, // Supplemental Arrows-B
    0x2980, // Miscellaneous Mathematical Symbols-B
    0x2A00, // Supplemental Mathematical Operators
    0x2B00, // Miscellaneous Symbols and Arrows
    0x2C00, // Glagolitic
    0x2C60, // Latin Extended-C
    0x2C80, // Coptic
    0x2D00, // Georgian Supplement
    0x2D30, // Tifinagh
    0x2D80, // Ethiopic Extended
    0x2DE0, // Cyrillic Extended-A
    0x2E00, // Supplemental Punctuation
    0x2E80, // CJK Radicals Supplement
    0x2F00, // Kangxi Radicals
    0x2FE0, // unassigned
    0x2FF0, // Ideographic Description Characters
    0x3000, // CJK Symbols and Punctuation
    0x3040, // Hiragana
    0x30A0, // Katakana
    0x3100, // Bopomofo
    0x3130, // Hangul Compatibility Jamo
    0x3190, // Kanbun
    0x31A0, // Bopomofo Extended
    0x31C0, // CJK Strokes
    0x31F0, // Katakana Phonetic Extensions
    0x3200, // Enclosed CJK Letters and Months
    0x3300, // CJK Compatibility
    0x3400, // CJK Unified Ideographs Extension A
    0x4DC0, // Yijing Hexagram Symbols
    0x4E00, // CJK Unified Ideographs
    0xA000, // Yi Syllables
    0xA490, // Yi Radicals
    0xA4D0, // Lisu
    0xA500, // Vai
    0xA640, // Cyrillic Extended-B
    0xA6A0, // Bamum
    0xA700, // Modifier Tone Letters
    0xA720, // Latin Extended-D
    0xA800, // Syloti Nagri
    0xA830, // Common Indic Number Forms
    0xA840, // Phags-pa
    0xA880, // Saurashtra
    0xA8E0, // Devanagari Extended
    0xA900, // Kayah Li
    0xA930, // Rejang
    0xA960, // Hangul Jamo Extended-A
    0xA980, // Javanese
    0xA9E0, // Myanmar Extended-B
    0xAA00, // Cham
    0xAA60, // Myanmar Extended-A
    0xAA80, // Tai Viet
    0xAAE0, // Meetei Mayek Extensions
    0xAB00, // Ethiopic Extended-A
    0xAB30, // Latin Extended-E
    0xAB70, // Cherokee Supplement
    0xABC0, // Meetei Mayek
    0xAC00, // Hangul Syllables
    0xD7B0, // Hangul Jamo Extended-B
    0xD800, // High Surrogates
    0xDB80, // High Private Use Surrogates
    0xDC00, // Low Surrogates
    0xE000, // Private Use Area
    0xF900, // CJK Compatibility Ideographs
    0xFB00, // Alphabetic Presentation Forms
    0xFB50, // Arabic Presentation Forms-A
    0xFE00, // Variation Selectors
    0xFE10, // Vertical Forms
    0xFE20, // Combining Half Marks
    0xFE30, // CJK Compatibility Forms
    0xFE50, // Small Form Variants
    0xFE70, // Arabic Presentation Forms-B
    0xFF00, // Halfwidth and Fullwidth Forms
    0xFFF0, // Specials
    0x10000, // Linear B Syllabary
    0x10080, // Linear B Ideograms
    0x10100, // Aegean Numbers
    0x10140, // Ancient Greek Numbers
    0x10190, // Ancient Symbols
    0x101D0, // Phaistos Disc
    0x10200, // unassigned
    0x10280, // Lycian
    0x102A0, // Carian
    0x102E0, // Coptic Epact Numbers
    0x10300, // Old Italic
    0x10330, // Gothic
    0x10350, // Old Permic
    0x10380, // Ugaritic
    0x103A0, // Old Persian
    0x103E0, // unassigned
    0x10400, // Deseret
    0x10450, // Shavian
    0x10480, // Osmanya
    0x104B0, // Osage
    0x10500, // Elbasan
    0x10530, // Caucasian Albanian
    0x10570, // Vithkuqi
    0x105C0, // unassigned
    0x10600, // Linear A
    0x10780, // Latin Extended-F
    0x107C0, // unassigned
    0x10800, // Cypriot Syllabary
    0x10840, // Imperial Aramaic
    0x10860, // Palmyrene
    0x10880, // Nabataean
    0x108B0, // unassigned
    0x108E0, // Hatran
    0x10900, // Phoenician
    0x10920, // Lydian
    0x10940, // unassigned
    0x10980, // Meroitic Hieroglyphs
    0x109A0, // Meroitic Cursive
    0x10A00, // Kharoshthi
    0x10A60, // Old South Arabian
    0x10A80, // Old North Arabian
    0x10AA0, // unassigned
    0x10AC0, // Manichaean
    0x10B00, // Avestan
    0x10B40, // Inscriptional Parthian
    0x10B60, // Inscriptional Pahlavi
    0x10B80, // Psalter Pahlavi
    0x10BB0, // unassigned
    0x10C00, // Old Turkic
    0x10C50, // unassigned
    0x10C80, // Old Hungarian
    0x10D00, // Hanifi Rohingya
    0x10D40, // unassigned
    0x10E60, // Rumi Numeral Symbols
    0x10E80, // Yezidi
    0x10EC0, // unassigned
    0x10F00, // Old Sogdian
    0x10F30, // Sogdian
    0x10F70, // Old Uyghur
    0x10FB0, // Chorasmian
    0x10FE0, // Elymaic
    0x11000, // Brahmi
    0x11080, // Kaithi
    0x110D0, // Sora Sompeng
    0x11100, // Chakma
    0x11150, // Mahajani
    0x11180, // Sharada
    0x111E0, // Sinhala Archaic Numbers
    0x11200, // Khojki
    0x11250, // unassigned
    0x11280, // Multani
    0x112B0, // Khudawadi
    0x11300, // Grantha
    0x11380, // unassigned
    0x11400, // Newa
    0x11480, // Tirhuta
    0x114E0, // unassigned
    0x11580, // Siddham
    0x11600, // Modi
    0x11660, // Mongolian Supplement
    0x11680, // Takri
    0x116D0, // unassigned
    0x11700, // Ahom
    0x11750, // unassigned
    0x11800, // Dogra
    0x11850, // unassigned
    0x118A0, // Warang Citi
    0x11900, // Dives Akuru
    0x11960, // unassigned
    0x119A0, // Nandinagari
    0x11A00, // Zanabazar Square
    0x11A50, // Soyombo
    0x11AB0, // Unified Canadian Aboriginal Syllabics Extended-A
    0x11AC0, // Pau Cin Hau
    0x11B00, // unassigned
    0x11C00, // Bhaiksuki
    0x11C70, // Marchen
    0x11CC0, // unassigned
    0x11D00, // Masaram Gondi
    0x11D60, // Gunjala Gondi
    0x11DB0, // unassigned
    0x11EE0, // Makasar
    0x11F00, // unassigned
    0x11FB0, // Lisu Supplement
    0x11FC0, // Tamil Supplement
    0x12000, // Cuneiform
    0x12400, // Cuneiform Numbers and Punctuation
    0x12480, // Early Dynastic Cuneiform
    0x12550, // unassigned
    0x12F90, // Cypro-Minoan
    0x13000, // Egyptian Hieroglyphs
    0x13430, // Egyptian Hieroglyph Format Controls
    0x13440, // unassigned
    0x14400, // Anatolian Hieroglyphs
    0x14680, // unassigned
    0x16800, // Bamum Supplement
    0x16A40, // Mro
    0x16A70, // Tangsa
    0x16AD0, // Bassa Vah
    0x16B00, // Pahawh Hmong
    0x16B90, // unassigned
    0x16E40, // Medefaidrin
    0x16EA0, // unassigned
    0x16F00, // Miao
    0x16FA0, // unassigned
    0x16FE0, // Ideographic Symbols and Punctuation
    0x17000, // Tangut
    0x18800, // Tangut Components
    0x18B00, // Khitan Small Script
    0x18D00, // Tangut Supplement
    0x18D80, // unassigned
    0x1AFF0, // Kana Extended-B
    0x1B000, // Kana Supplement
    0x1B100, // Kana Extended-A
    0x1B130, // Small Kana Extension
    0x1B170, // Nushu
    0x1B300, // unassigned
    0x1BC00, // Duployan
    0x1BCA0, // Shorthand Format Controls
    0x1BCB0, // unassigned
    0x1CF00, // Znamenny Musical Notation
    0x1CFD0, // unassigned
    0x1D000, // Byzantine Musical Symbols
    0x1D100, // Musical Symbols
    0x1D200, // Ancient Greek Musical Notation
    0x1D250, // unassigned
    0x1D2E0, // Mayan Numerals
    0x1D300, // Tai Xuan Jing Symbols
    0x1D360, // Counting Rod Numerals
    0x1D380, // unassigned
    0x1D400, // Mathematical Alphanumeric Symbols
    0x1D800, // Sutton SignWriting
    0x1DAB0, // unassigned
    0x1DF00, // Latin Extended-G
    0x1E000, // Glagolitic Supplement
    0x1E030, // unassigned
    0x1E100, // Nyiakeng Puachue Hmong
    0x1E150, // unassigned
    0x1E290, // Toto
    0x1E2C0, // Wancho
    0x1E300, // unassigned
    0x1E7E0, // Ethiopic Extended-B
    0x1E800, // Mende Kikakui
    0x1E8E0, // unassigned
    0x1E900, // Adlam
    0x1E960, // unassigned
    0x1EC70, // Indic Siyaq Numbers
    0x1ECC0, // unassigned
    0x1ED00, // Ottoman Siyaq Numbers
    0x1ED50, // unassigned
    0x1EE00, // Arabic Mathematical Alphabetic Symbols
    0x1EF00, // unassigned
    0x1F000, // Mahjong Tiles
    0x1F030, // Domino Tiles
    0x1F0A0, // Playing Cards
    0x1F100, // Enclosed Alphanumeric Supplement
    0x1F200, // Enclosed Ideographic Supplement
    0x1F300, // Miscellaneous Symbols and Pictographs
    0x1F600, // Emoticons
    0x1F650, // Ornamental Dingbats
    0x1F680, // Transport and Map Symbols
    0x1F700, // Alchemical Symbols
    0x1F780, // Geometric Shapes Extended
    0x1F800, // Supplemental Arrows-C
    0x1F900, // Supplemental Symbols and Pictographs
    0x1FA00, // Chess Symbols
    0x1FA70, // Symbols and Pictographs Extended-A
    0x1FB00, // Symbols for Legacy Computing
    0x1FC00, // unassigned
    0x20000, // CJK Unified Ideographs Extension B
    0x2A6E0, // unassigned
    0x2A700, // CJK Unified Ideographs Extension C
    0x2B740, // CJK Unified Ideographs Extension D
    0x2B820, // CJK Unified Ideographs Extension E
    0x2CEB0, // CJK Unified Ideographs Extension F
    0x2EBF0, // unassigned
    0x2F800, // CJK Compatibility Ideographs Supplement
    0x2FA20, // unassigned
    0x30000, // CJK Unified Ideographs Extension G
    0x31350, // unassigned
    0xE0000, // Tags
    0xE0080, // unassigned
    0xE0100, // Variation Selectors Supplement
    0xE01F0, // unassigned
    0xF0000, // Supplementary Private Use Area-A
    0x100000, // Supplementary Private Use Area-B
];

#[rustfmt::skip]
pub static BLOCKS: [Option<UnicodeBlock>; 371] = [
    Some(UnicodeBlock::BASIC_LATIN),
    Some(UnicodeBlock::LATIN_1_SUPPLEMENT),
    Some(UnicodeBlock::LATIN_EXTENDED_A),
    Some(UnicodeBlock::LATIN_EXTENDED_B),
    Some(UnicodeBlock::IPA_EXTENSIONS),
    Some(UnicodeBlock::SPACING_MODIFIER_LETTERS),
    Some(UnicodeBlock::COMBINING_DIACRITICAL_MARKS),
    Some(UnicodeBlock::GREEK),
    Some(UnicodeBlock::CYRILLIC),
    Some(UnicodeBlock::CYRILLIC_SUPPLEMENTARY),
    Some(UnicodeBlock::ARMENIAN),
    Some(UnicodeBlock::HEBREW),
    Some(UnicodeBlock::ARABIC),
    Some(UnicodeBlock::SYRIAC),
    Some(UnicodeBlock::ARABIC_SUPPLEMENT),
    Some(UnicodeBlock::THAANA),
    Some(UnicodeBlock::NKO),
    Some(UnicodeBlock::SAMARITAN),
    Some(UnicodeBlock::MANDAIC),
    Some(UnicodeBlock::SYRIAC_SUPPLEMENT),
    Some(UnicodeBlock::ARABIC_EXTENDED_B),
    Some(UnicodeBlock::ARABIC_EXTENDED_A),
    Some(UnicodeBlock::DEVANAGARI),
    Some(UnicodeBlock::BENGALI),
    Some(UnicodeBlock::GURMUKHI),
    Some(UnicodeBlock::GUJARATI),
    Some(UnicodeBlock::ORIYA),
    Some(UnicodeBlock::TAMIL),
    Some(UnicodeBlock::TELUGU),
    Some(UnicodeBlock::KANNADA),
    Some(UnicodeBlock::MALAYALAM),
    Some(UnicodeBlock::SINHALA),
    Some(UnicodeBlock::THAI),
    Some(UnicodeBlock::LAO),
    Some(UnicodeBlock::TIBETAN),
    Some(UnicodeBlock::MYANMAR),
    Some(UnicodeBlock::GEORGIAN),
    Some(UnicodeBlock::HANGUL_JAMO),
    Some(UnicodeBlock::ETHIOPIC),
    Some(UnicodeBlock::ETHIOPIC_SUPPLEMENT),
    Some(UnicodeBlock::CHEROKEE),
    Some(UnicodeBlock::UNIFIED_CANADIAN_ABORIGINAL_SYLLABICS),
    Some(UnicodeBlock::OGHAM),
    Some(UnicodeBlock::RUNIC),
    Some(UnicodeBlock::TAGALOG),
    Some(UnicodeBlock::HANUNOO),
    Some(UnicodeBlock::BUHID),
    Some(UnicodeBlock::TAGBANWA),
    Some(UnicodeBlock::KHMER),
    Some(UnicodeBlock::MONGOLIAN),
    Some(UnicodeBlock::UNIFIED_CANADIAN_ABORIGINAL_SYLLABICS_EXTENDED),
    Some(UnicodeBlock::LIMBU),
    Some(UnicodeBlock::TAI_LE),
    Some(UnicodeBlock::NEW_TAI_LUE),
    Some(UnicodeBlock::KHMER_SYMBOLS),
    Some(UnicodeBlock::BUGINESE),
    Some(UnicodeBlock::TAI_THAM),
    Some(UnicodeBlock::COMBINING_DIACRITICAL_MARKS_EXTENDED),
    Some(UnicodeBlock::BALINESE),
    Some(UnicodeBlock::SUNDANESE),
    Some(UnicodeBlock::BATAK),
    Some(UnicodeBlock::LEPCHA),
    Some(UnicodeBlock::OL_CHIKI),
    Some(UnicodeBlock::CYRILLIC_EXTENDED_C),
    Some(UnicodeBlock::GEORGIAN_EXTENDED),
    Some(UnicodeBlock::SUNDANESE_SUPPLEMENT),
    Some(UnicodeBlock::VEDIC_EXTENSIONS),
    Some(UnicodeBlock::PHONETIC_EXTENSIONS),
    Some(UnicodeBlock::PHONETIC_EXTENSIONS_SUPPLEMENT),
    Some(UnicodeBlock::COMBINING_DIACRITICAL_MARKS_SUPPLEMENT),
    Some(UnicodeBlock::LATIN_EXTENDED_ADDITIONAL),
    Some(UnicodeBlock::GREEK_EXTENDED),
    Some(UnicodeBlock::GENERAL_PUNCTUATION),
    Some(UnicodeBlock::SUPERSCRIPTS_AND_SUBSCRIPTS),
    Some(UnicodeBlock::CURRENCY_SYMBOLS),
    Some(UnicodeBlock::COMBINING_MARKS_FOR_SYMBOLS),
    Some(UnicodeBlock::LETTERLIKE_SYMBOLS),
    Some(UnicodeBlock::NUMBER_FORMS),
    Some(UnicodeBlock::ARROWS),
    Some(UnicodeBlock::MATHEMATICAL_OPERATORS),
    Some(UnicodeBlock::MISCELLANEOUS_TECHNICAL),
    Some(UnicodeBlock::CONTROL_PICTURES),
    Some(UnicodeBlock::OPTICAL_CHARACTER_RECOGNITION),
    Some(UnicodeBlock::ENCLOSED_ALPHANUMERICS),
    Some(UnicodeBlock::BOX_DRAWING),
    Some(UnicodeBlock::BLOCK_ELEMENTS),
    Some(UnicodeBlock::GEOMETRIC_SHAPES),
    Some(UnicodeBlock::MISCELLANEOUS_SYMBOLS),
    Some(UnicodeBlock::DINGBATS),
    Some(UnicodeBlock::MISCELLANEOUS_MATHEMATICAL_SYMBOLS_A),
    Some(UnicodeBlock::SUPPLEMENTAL_ARROWS_A),
    Some(UnicodeBlock::BRAILLE_PATTERNS),
    Some(UnicodeBlock::SUPPLEMENTAL_ARROWS_B),
    Some(UnicodeBlock::MISCELLANEOUS_MATHEMATICAL_SYMBOLS_B),
    Some(UnicodeBlock::SUPPLEMENTAL_MATHEMATICAL_OPERATORS),
    Some(UnicodeBlock::MISCELLANEOUS_SYMBOLS_AND_ARROWS),
    Some(UnicodeBlock::GLAGOLITIC),
    Some(UnicodeBlock::LATIN_EXTENDED_C),
    Some(UnicodeBlock::COPTIC),
    Some(UnicodeBlock::GEORGIAN_SUPPLEMENT),
    Some(UnicodeBlock::TIFINAGH),
    Some(UnicodeBlock::ETHIOPIC_EXTENDED),
    Some(UnicodeBlock::CYRILLIC_EXTENDED_A),
    Some(UnicodeBlock::SUPPLEMENTAL_PUNCTUATION),
    Some(UnicodeBlock::CJK_RADICALS_SUPPLEMENT),
    Some(UnicodeBlock::KANGXI_RADICALS),
    None,
    Some(UnicodeBlock::IDEOGRAPHIC_DESCRIPTION_CHARACTERS),
    Some(UnicodeBlock::CJK_SYMBOLS_AND_PUNCTUATION),
    Some(UnicodeBlock::HIRAGANA),
    Some(UnicodeBlock::KATAKANA),
    Some(UnicodeBlock::BOPOMOFO),
    Some(UnicodeBlock::HANGUL_COMPATIBILITY_JAMO),
    Some(UnicodeBlock::KANBUN),
    Some(UnicodeBlock::BOPOMOFO_EXTENDED),
    Some(UnicodeBlock::CJK_STROKES),
    Some(UnicodeBlock::KATAKANA_PHONETIC_EXTENSIONS),
    Some(UnicodeBlock::ENCLOSED_CJK_LETTERS_AND_MONTHS),
    Some(UnicodeBlock::CJK_COMPATIBILITY),
    Some(UnicodeBlock::CJK_UNIFIED_IDEOGRAPHS_EXTENSION_A),
    Some(UnicodeBlock::YIJING_HEXAGRAM_SYMBOLS),
    Some(UnicodeBlock::CJK_UNIFIED_IDEOGRAPHS),
    Some(UnicodeBlock::YI_SYLLABLES),
    Some(UnicodeBlock::YI_RADICALS),
    Some(UnicodeBlock::LISU),
    Some(UnicodeBlock::VAI),
    Some(UnicodeBlock::CYRILLIC_EXTENDED_B),
    Some(UnicodeBlock::BAMUM),
    Some(UnicodeBlock::MODIFIER_TONE_LETTERS),
    Some(UnicodeBlock::LATIN_EXTENDED_D),
    Some(UnicodeBlock::SYLOTI_NAGRI),
    Some(UnicodeBlock::COMMON_INDIC_NUMBER_FORMS),
    Some(UnicodeBlock::PHAGS_PA),
    Some(UnicodeBlock::SAURASHTRA),
    Some(UnicodeBlock::DEVANAGARI_EXTENDED),
    Some(UnicodeBlock::KAYAH_LI),
    Some(UnicodeBlock::REJANG),
    Some(UnicodeBlock::HANGUL_JAMO_EXTENDED_A),
    Some(UnicodeBlock::JAVANESE),
    Some(UnicodeBlock::MYANMAR_EXTENDED_B),
    Some(UnicodeBlock::CHAM),
    Some(UnicodeBlock::MYANMAR_EXTENDED_A),
    Some(UnicodeBlock::TAI_VIET),
    Some(UnicodeBlock::MEETEI_MAYEK_EXTENSIONS),
    Some(UnicodeBlock::ETHIOPIC_EXTENDED_A),
    Some(UnicodeBlock::LATIN_EXTENDED_E),
    Some(UnicodeBlock::CHEROKEE_SUPPLEMENT),
    Some(UnicodeBlock::MEETEI_MAYEK),
    Some(UnicodeBlock::HANGUL_SYLLABLES),
    Some(UnicodeBlock::HANGUL_JAMO_EXTENDED_B),
    Some(UnicodeBlock::HIGH_SURROGATES),
    Some(UnicodeBlock::HIGH_PRIVATE_USE_SURROGATES),
    Some(UnicodeBlock::LOW_SURROGATES),
    Some(UnicodeBlock::PRIVATE_USE_AREA),
    Some(UnicodeBlock::CJK_COMPATIBILITY_IDEOGRAPHS),
    Some(UnicodeBlock::ALPHABETIC_PRESENTATION_FORMS),
    Some(UnicodeBlock::ARABIC_PRESENTATION_FORMS_A),
    Some(UnicodeBlock::VARIATION_SELECTORS),
    Some(UnicodeBlock::VERTICAL_FORMS),
    Some(UnicodeBlock::COMBINING_HALF_MARKS),
    Some(UnicodeBlock::CJK_COMPATIBILITY_FORMS),
    Some(UnicodeBlock::SMALL_FORM_VARIANTS),
    Some(UnicodeBlock::ARABIC_PRESENTATION_FORMS_B),
    Some(UnicodeBlock::HALFWIDTH_AND_FULLWIDTH_FORMS),
    Some(UnicodeBlock::SPECIALS),
    Some(UnicodeBlock::LINEAR_B_SYLLABARY),
    Some(UnicodeBlock::LINEAR_B_IDEOGRAMS),
    Some(UnicodeBlock::AEGEAN_NUMBERS),
    Some(UnicodeBlock::ANCIENT_GREEK_NUMBERS),
    Some(UnicodeBlock::ANCIENT_SYMBOLS),
    Some(UnicodeBlock::PHAISTOS_DISC),
    None,
    Some(UnicodeBlock::LYCIAN),
    Some(UnicodeBlock::CARIAN),
    Some(UnicodeBlock::COPTIC_EPACT_NUMBERS),
    Some(UnicodeBlock::OLD_ITALIC),
    Some(UnicodeBlock::GOTHIC),
    Some(UnicodeBlock::OLD_PERMIC),
    Some(UnicodeBlock::UGARITIC),
    Some(UnicodeBlock::OLD_PERSIAN),
    None,
    Some(UnicodeBlock::DESERET),
    Some(UnicodeBlock::SHAVIAN),
    Some(UnicodeBlock::OSMANYA),
    Some(UnicodeBlock::OSAGE),
    Some(UnicodeBlock::ELBASAN),
    Some(UnicodeBlock::CAUCASIAN_ALBANIAN),
    Some(UnicodeBlock::VITHKUQI),
    None,
    Some(UnicodeBlock::LINEAR_A),
    Some(UnicodeBlock::LATIN_EXTENDED_F),
    None,
    Some(UnicodeBlock::CYPRIOT_SYLLABARY),
    Some(UnicodeBlock::IMPERIAL_ARAMAIC),
    Some(UnicodeBlock::PALMYRENE),
    Some(UnicodeBlock::NABATAEAN),
    None,
    Some(UnicodeBlock::HATRAN),
    Some(UnicodeBlock::PHOENICIAN),
    Some(UnicodeBlock::LYDIAN),
    None,
    Some(UnicodeBlock::MEROITIC_HIEROGLYPHS),
    Some(UnicodeBlock::MEROITIC_CURSIVE),
    Some(UnicodeBlock::KHAROSHTHI),
    Some(UnicodeBlock::OLD_SOUTH_ARABIAN),
    Some(UnicodeBlock::OLD_NORTH_ARABIAN),
    None,
    Some(UnicodeBlock::MANICHAEAN),
    Some(UnicodeBlock::AVESTAN),
    Some(UnicodeBlock::INSCRIPTIONAL_PARTHIAN),
    Some(UnicodeBlock::INSCRIPTIONAL_PAHLAVI),
    Some(UnicodeBlock::PSALTER_PAHLAVI),
    None,
    Some(UnicodeBlock::OLD_TURKIC),
    None,
    Some(UnicodeBlock::OLD_HUNGARIAN),
    Some(UnicodeBlock::HANIFI_ROHINGYA),
    None,
    Some(UnicodeBlock::RUMI_NUMERAL_SYMBOLS),
    Some(UnicodeBlock::YEZIDI),
    None,
    Some(UnicodeBlock::OLD_SOGDIAN),
    Some(UnicodeBlock::SOGDIAN),
    Some(UnicodeBlock::OLD_UYGHUR),
    Some(UnicodeBlock::CHORASMIAN),
    Some(UnicodeBlock::ELYMAIC),
    Some(UnicodeBlock::BRAHMI),
    Some(UnicodeBlock::KAITHI),
    Some(UnicodeBlock::SORA_SOMPENG),
    Some(UnicodeBlock::CHAKMA),
    Some(UnicodeBlock::MAHAJANI),
    Some(UnicodeBlock::SHARADA),
    Some(UnicodeBlock::SINHALA_ARCHAIC_NUMBERS),
    Some(UnicodeBlock::KHOJKI),
    None,
    Some(UnicodeBlock::MULTANI),
    Some(UnicodeBlock::KHUDAWADI),
    Some(UnicodeBlock::GRANTHA),
    None,
    Some(UnicodeBlock::NEWA),
    Some(UnicodeBlock::TIRHUTA),
    None,
    Some(UnicodeBlock::SIDDHAM),
    Some(UnicodeBlock::MODI),
    Some(UnicodeBlock::MONGOLIAN_SUPPLEMENT),
    Some(UnicodeBlock::TAKRI),
    None,
    Some(UnicodeBlock::AHOM),
    None,
    Some(UnicodeBlock::DOGRA),
    None,
    Some(UnicodeBlock::WARANG_CITI),
    Some(UnicodeBlock::DIVES_AKURU),
    None,
    Some(UnicodeBlock::NANDINAGARI),
    Some(UnicodeBlock::ZANABAZAR_SQUARE),
    Some(UnicodeBlock::SOYOMBO),
    Some(UnicodeBlock::UNIFIED_CANADIAN_ABORIGINAL_SYLLABICS_EXTENDED_A),
    Some(UnicodeBlock::PAU_CIN_HAU),
    None,
    Some(UnicodeBlock::BHAIKSUKI),
    Some(UnicodeBlock::MARCHEN),
    None,
    Some(UnicodeBlock::MASARAM_GONDI),
    Some(UnicodeBlock::GUNJALA_GONDI),
    None,
    Some(UnicodeBlock::MAKASAR),
    None,
    Some(UnicodeBlock::LISU_SUPPLEMENT),
    Some(UnicodeBlock::TAMIL_SUPPLEMENT),
    Some(UnicodeBlock::CUNEIFORM),
    Some(UnicodeBlock::CUNEIFORM_NUMBERS_AND_PUNCTUATION),
    Some(UnicodeBlock::EARLY_DYNASTIC_CUNEIFORM),
    None,
    Some(UnicodeBlock::CYPRO_MINOAN),
    Some(UnicodeBlock::EGYPTIAN_HIEROGLYPHS),
    Some(UnicodeBlock::EGYPTIAN_HIEROGLYPH_FORMAT_CONTROLS),
    None,
    Some(UnicodeBlock::ANATOLIAN_HIEROGLYPHS),
    None,
    Some(UnicodeBlock::BAMUM_SUPPLEMENT),
    Some(UnicodeBlock::MRO),
    Some(UnicodeBlock::TANGSA),
    Some(UnicodeBlock::BASSA_VAH),
    Some(UnicodeBlock::PAHAWH_HMONG),
    None,
    Some(UnicodeBlock::MEDEFAIDRIN),
    None,
    Some(UnicodeBlock::MIAO),
    None,
    Some(UnicodeBlock::IDEOGRAPHIC_SYMBOLS_AND_PUNCTUATION),
    Some(UnicodeBlock::TANGUT),
    Some(UnicodeBlock::TANGUT_COMPONENTS),
    Some(UnicodeBlock::KHITAN_SMALL_SCRIPT),
    Some(UnicodeBlock::TANGUT_SUPPLEMENT),
    None,
    Some(UnicodeBlock::KANA_EXTENDED_B),
    Some(UnicodeBlock::KANA_SUPPLEMENT),
    Some(UnicodeBlock::KANA_EXTENDED_A),
    Some(UnicodeBlock::SMALL_KANA_EXTENSION),
    Some(UnicodeBlock::NUSHU),
    None,
    Some(UnicodeBlock::DUPLOYAN),
    Some(UnicodeBlock::SHORTHAND_FORMAT_CONTROLS),
    None,
    Some(UnicodeBlock::ZNAMENNY_MUSICAL_NOTATION),
    None,
    Some(UnicodeBlock::BYZANTINE_MUSICAL_SYMBOLS),
    Some(UnicodeBlock::MUSICAL_SYMBOLS),
    Some(UnicodeBlock::ANCIENT_GREEK_MUSICAL_NOTATION),
    None,
    Some(UnicodeBlock::MAYAN_NUMERALS),
    Some(UnicodeBlock::TAI_XUAN_JING_SYMBOLS),
    Some(UnicodeBlock::COUNTING_ROD_NUMERALS),
    None,
    Some(UnicodeBlock::MATHEMATICAL_ALPHANUMERIC_SYMBOLS),
    Some(UnicodeBlock::SUTTON_SIGNWRITING),
    None,
    Some(UnicodeBlock::LATIN_EXTENDED_G),
    Some(UnicodeBlock::GLAGOLITIC_SUPPLEMENT),
    None,
    Some(UnicodeBlock::NYIAKENG_PUACHUE_HMONG),
    None,
    Some(UnicodeBlock::TOTO),
    Some(UnicodeBlock::WANCHO),
    None,
    Some(UnicodeBlock::ETHIOPIC_EXTENDED_B),
    Some(UnicodeBlock::MENDE_KIKAKUI),
    None,
    Some(UnicodeBlock::ADLAM),
    None,
    Some(UnicodeBlock::INDIC_SIYAQ_NUMBERS),
    None,
    Some(UnicodeBlock::OTTOMAN_SIYAQ_NUMBERS),
    None,
    Some(UnicodeBlock::ARABIC_MATHEMATICAL_ALPHABETIC_SYMBOLS),
    None,
    Some(UnicodeBlock::MAHJONG_TILES),
    Some(UnicodeBlock::DOMINO_TILES),
    Some(UnicodeBlock::PLAYING_CARDS),
    Some(UnicodeBlock::ENCLOSED_ALPHANUMERIC_SUPPLEMENT),
    Some(UnicodeBlock::ENCLOSED_IDEOGRAPHIC_SUPPLEMENT),
    Some(UnicodeBlock::MISCELLANEOUS_SYMBOLS_AND_PICTOGRAPHS),
    Some(UnicodeBlock::EMOTICONS),
    Some(UnicodeBlock::ORNAMENTAL_DINGBATS),
    Some(UnicodeBlock::TRANSPORT_AND_MAP_SYMBOLS),
    Some(UnicodeBlock::ALCHEMICAL_SYMBOLS),
    Some(UnicodeBlock::GEOMETRIC_SHAPES_EXTENDED),
    Some(UnicodeBlock::SUPPLEMENTAL_ARROWS_C),
    Some(UnicodeBlock::SUPPLEMENTAL_SYMBOLS_AND_PICTOGRAPHS),
    Some(UnicodeBlock::CHESS_SYMBOLS),
    Some(UnicodeBlock::SYMBOLS_AND_PICTOGRAPHS_EXTENDED_A),
    Some(UnicodeBlock::SYMBOLS_FOR_LEGACY_COMPUTING),
    None,
    Some(UnicodeBlock::CJK_UNIFIED_IDEOGRAPHS_EXTENSION_B),
    None,
    Some(UnicodeBlock::CJK_UNIFIED_IDEOGRAPHS_EXTENSION_C),
    Some(UnicodeBlock::CJK_UNIFIED_IDEOGRAPHS_EXTENSION_D),
    Some(UnicodeBlock::CJK_UNIFIED_IDEOGRAPHS_EXTENSION_E),
    Some(UnicodeBlock::CJK_UNIFIED_IDEOGRAPHS_EXTENSION_F),
    None,
    Some(UnicodeBlock::CJK_COMPATIBILITY_IDEOGRAPHS_SUPPLEMENT),
    None,
    Some(UnicodeBlock::CJK_UNIFIED_IDEOGRAPHS_EXTENSION_G),
    None,
    Some(UnicodeBlock::TAGS),
    None,
    Some(UnicodeBlock::VARIATION_SELECTORS_SUPPLEMENT),
    None,
    Some(UnicodeBlock::SUPPLEMENTARY_PRIVATE_USE_AREA_A),
    Some(UnicodeBlock::SUPPLEMENTARY_PRIVATE_USE_AREA_B),
];

#[rustfmt::skip]
pub static BLOCK_NAMES: [(&str, UnicodeBlock); 737] = [
    ("ADLAM", UnicodeBlock::ADLAM),
    ("AEGEAN NUMBERS", UnicodeBlock::AEGEAN_NUMBERS),
    ("AEGEANNUMBERS", UnicodeBlock::AEGEAN_NUMBERS),
    ("AEGEAN_NUMBERS", UnicodeBlock::AEGEAN_NUMBERS),
    ("AHOM", UnicodeBlock::AHOM),
    ("ALCHEMICAL SYMBOLS", UnicodeBlock::ALCHEMICAL_SYMBOLS),
    ("ALCHEMICALSYMBOLS", UnicodeBlock::ALCHEMICAL_SYMBOLS),
    ("ALCHEMICAL_SYMBOLS", UnicodeBlock::ALCHEMICAL_SYMBOLS),
    ("ALPHABETIC PRESENTATION FORMS", UnicodeBlock::ALPHABETIC_PRESENTATION_FORMS),
    ("ALPHABETICPRESENTATIONFORMS", UnicodeBlock::ALPHABETIC_PRESENTATION_FORMS),
    ("ALPHABETIC_PRESENTATION_FORMS", UnicodeBlock::ALPHABETIC_PRESENTATION_FORMS),
    ("ANATOLIAN HIEROGLYPHS", UnicodeBlock::ANATOLIAN_HIEROGLYPHS),
    ("ANATOLIANHIEROGLYPHS", UnicodeBlock::ANATOLIAN_HIEROGLYPHS),
    ("ANATOLIAN_HIEROGLYPHS", UnicodeBlock::ANATOLIAN_HIEROGLYPHS),
    ("ANCIENT GREEK MUSICAL NOTATION", UnicodeBlock::ANCIENT_GREEK_MUSICAL_NOTATION),
    ("ANCIENT GREEK NUMBERS", UnicodeBlock::ANCIENT_GREEK_NUMBERS),
    ("ANCIENT SYMBOLS", UnicodeBlock::ANCIENT_SYMBOLS),
    ("ANCIENTGREEKMUSICALNOTATION", UnicodeBlock::ANCIENT_GREEK_MUSICAL_NOTATION),
    ("ANCIENTGREEKNUMBERS", UnicodeBlock::ANCIENT_GREEK_NUMBERS),
    ("ANCIENTSYMBOLS", UnicodeBlock::ANCIENT_SYMBOLS),
    ("ANCIENT_GREEK_MUSICAL_NOTATION", UnicodeBlock::ANCIENT_GREEK_MUSICAL_NOTATION),
    ("ANCIENT_GREEK_NUMBERS", UnicodeBlock::ANCIENT_GREEK_NUMBERS),
    ("ANCIENT_SYMBOLS", UnicodeBlock::ANCIENT_SYMBOLS),
    ("ARABIC", UnicodeBlock::ARABIC),
    ("ARABIC EXTENDED-A", UnicodeBlock::ARABIC_EXTENDED_A),
    ("ARABIC EXTENDED-B", UnicodeBlock::ARABIC_EXTENDED_B),
    ("ARABIC MATHEMATICAL ALPHABETIC SYMBOLS", UnicodeBlock::ARABIC_MATHEMATICAL_ALPHABETIC_SYMBOLS),
    ("ARABIC PRESENTATION FORMS-A", UnicodeBlock::ARABIC_PRESENTATION_FORMS_A),
    ("ARABIC PRESENTATION FORMS-B", UnicodeBlock::ARABIC_PRESENTATION_FORMS_B),
    ("ARABIC SUPPLEMENT", UnicodeBlock::ARABIC_SUPPLEMENT),
    ("ARABICEXTENDED-A", UnicodeBlock::ARABIC_EXTENDED_A),
    ("ARABICEXTENDED-B", UnicodeBlock::ARABIC_EXTENDED_B),
    ("ARABICMATHEMATICALALPHABETICSYMBOLS", UnicodeBlock::ARABIC_MATHEMATICAL_ALPHABETIC_SYMBOLS),
    ("ARABICPRESENTATIONFORMS-A", UnicodeBlock::ARABIC_PRESENTATION_FORMS_A),
    ("ARABICPRESENTATIONFORMS-B", UnicodeBlock::ARABIC_PRESENTATION_FORMS_B),
    ("ARABICSUPPLEMENT", UnicodeBlock::ARABIC_SUPPLEMENT),
    ("ARABIC_EXTENDED_A", UnicodeBlock::ARABIC_EXTENDED_A),
    ("ARABIC_EXTENDED_B", UnicodeBlock::ARABIC_EXTENDED_B),
    ("ARABIC_MATHEMATICAL_ALPHABETIC_SYMBOLS", UnicodeBlock::ARABIC_MATHEMATICAL_ALPHABETIC_SYMBOLS),
    ("ARABIC_PRESENTATION_FORMS_A", UnicodeBlock::ARABIC_PRESENTATION_FORMS_A),
    ("ARABIC_PRESENTATION_FORMS_B", UnicodeBlock::ARABIC_PRESENTATION_FORMS_B),
    ("ARABIC_SUPPLEMENT", UnicodeBlock::ARABIC_SUPPLEMENT),
    ("ARMENIAN", UnicodeBlock::ARMENIAN),
    ("ARROWS", UnicodeBlock::ARROWS),
    ("AVESTAN", UnicodeBlock::AVESTAN),
    ("BALINESE", UnicodeBlock::BALINESE),
    ("BAMUM", UnicodeBlock::BAMUM),
    ("BAMUM SUPPLEMENT", UnicodeBlock::BAMUM_SUPPLEMENT),
    ("BAMUMSUPPLEMENT", UnicodeBlock::BAMUM_SUPPLEMENT),
    ("BAMUM_SUPPLEMENT", UnicodeBlock::BAMUM_SUPPLEMENT),
    ("BASIC LATIN", UnicodeBlock::BASIC_LATIN),
    ("BASICLATIN", UnicodeBlock::BASIC_LATIN),
    ("BASIC_LATIN", UnicodeBlock::BASIC_LATIN),
    ("BASSA VAH", UnicodeBlock::BASSA_VAH),
    ("BASSAVAH", UnicodeBlock::BASSA_VAH),
    ("BASSA_VAH", UnicodeBlock::BASSA_VAH),
    ("BATAK", UnicodeBlock::BATAK),
    ("BENGALI", UnicodeBlock::BENGALI),
    ("BHAIKSUKI", UnicodeBlock::BHAIKSUKI),
    ("BLOCK ELEMENTS", UnicodeBlock::BLOCK_ELEMENTS),
    ("BLOCKELEMENTS", UnicodeBlock::BLOCK_ELEMENTS),
    ("BLOCK_ELEMENTS", UnicodeBlock::BLOCK_ELEMENTS),
    ("BOPOMOFO", UnicodeBlock::BOPOMOFO),
    ("BOPOMOFO EXTENDED", UnicodeBlock::BOPOMOFO_EXTENDED),
    ("BOPOMOFOEXTENDED", UnicodeBlock::BOPOMOFO_EXTENDED),
    ("BOPOMOFO_EXTENDED", UnicodeBlock::BOPOMOFO_EXTENDED),
    ("BOX DRAWING", UnicodeBlock::BOX_DRAWING),
    ("BOXDRAWING", UnicodeBlock::BOX_DRAWING),
    ("BOX_DRAWING", UnicodeBlock::BOX_DRAWING),
    ("BRAHMI", UnicodeBlock::BRAHMI),
    ("BRAILLE PATTERNS", UnicodeBlock::BRAILLE_PATTERNS),
    ("BRAILLEPATTERNS", UnicodeBlock::BRAILLE_PATTERNS),
    ("BRAILLE_PATTERNS", UnicodeBlock::BRAILLE_PATTERNS),
    ("BUGINESE", UnicodeBlock::BUGINESE),
    ("BUHID", UnicodeBlock::BUHID),
    ("BYZANTINE MUSICAL SYMBOLS", UnicodeBlock::BYZANTINE_MUSICAL_SYMBOLS),
    ("BYZANTINEMUSICALSYMBOLS", UnicodeBlock::BYZANTINE_MUSICAL_SYMBOLS),
    ("BYZANTINE_MUSICAL_SYMBOLS", UnicodeBlock::BYZANTINE_MUSICAL_SYMBOLS),
    ("CARIAN", UnicodeBlock::CARIAN),
    ("CAUCASIAN ALBANIAN", UnicodeBlock::CAUCASIAN_ALBANIAN),
    ("CAUCASIANALBANIAN", UnicodeBlock::CAUCASIAN_ALBANIAN),
    ("CAUCASIAN_ALBANIAN", UnicodeBlock::CAUCASIAN_ALBANIAN),
    ("CHAKMA", UnicodeBlock::CHAKMA),
    ("CHAM", UnicodeBlock::CHAM),
    ("CHEROKEE", UnicodeBlock::CHEROKEE),
    ("CHEROKEE SUPPLEMENT", UnicodeBlock::CHEROKEE_SUPPLEMENT),
    ("CHEROKEESUPPLEMENT", UnicodeBlock::CHEROKEE_SUPPLEMENT),
    ("CHEROKEE_SUPPLEMENT", UnicodeBlock::CHEROKEE_SUPPLEMENT),
    ("CHESS SYMBOLS", UnicodeBlock::CHESS_SYMBOLS),
    ("CHESSSYMBOLS", UnicodeBlock::CHESS_SYMBOLS),
    ("CHESS_SYMBOLS", UnicodeBlock::CHESS_SYMBOLS),
    ("CHORASMIAN", UnicodeBlock::CHORASMIAN),
    ("CJK COMPATIBILITY", UnicodeBlock::CJK_COMPATIBILITY),
    ("CJK COMPATIBILITY FORMS", UnicodeBlock::CJK_COMPATIBILITY_FORMS),
    ("CJK COMPATIBILITY IDEOGRAPHS", UnicodeBlock::CJK_COMPATIBILITY_IDEOGRAPHS),
    ("CJK COMPATIBILITY IDEOGRAPHS SUPPLEMENT", UnicodeBlock::CJK_COMPATIBILITY_IDEOGRAPHS_SUPPLEMENT),
    ("CJK RADICALS SUPPLEMENT", UnicodeBlock::CJK_RADICALS_SUPPLEMENT),
    ("CJK STROKES", UnicodeBlock::CJK_STROKES),
    ("CJK SYMBOLS AND PUNCTUATION", UnicodeBlock::CJK_SYMBOLS_AND_PUNCTUATION),
    ("CJK UNIFIED IDEOGRAPHS", UnicodeBlock::CJK_UNIFIED_IDEOGRAPHS),
    ("CJK UNIFIED IDEOGRAPHS EXTENSION A", UnicodeBlock::CJK_UNIFIED_IDEOGRAPHS_EXTENSION_A),
    ("CJK UNIFIED IDEOGRAPHS EXTENSION B", UnicodeBlock::CJK_UNIFIED_IDEOGRAPHS_EXTENSION_B),
    ("CJK UNIFIED IDEOGRAPHS EXTENSION C", UnicodeBlock::CJK_UNIFIED_IDEOGRAPHS_EXTENSION_C),
    ("CJK UNIFIED IDEOGRAPHS EXTENSION D", UnicodeBlock::CJK_UNIFIED_IDEOGRAPHS_EXTENSION_D),
    ("CJK UNIFIED IDEOGRAPHS EXTENSION E", UnicodeBlock::CJK_UNIFIED_IDEOGRAPHS_EXTENSION_E),
    ("CJK UNIFIED IDEOGRAPHS EXTENSION F", UnicodeBlock::CJK_UNIFIED_IDEOGRAPHS_EXTENSION_F),
    ("CJK UNIFIED IDEOGRAPHS EXTENSION G", UnicodeBlock::CJK_UNIFIED_IDEOGRAPHS_EXTENSION_G),
    ("CJKCOMPATIBILITY", UnicodeBlock::CJK_COMPATIBILITY),
    ("CJKCOMPATIBILITYFORMS", UnicodeBlock::CJK_COMPATIBILITY_FORMS),
    ("CJKCOMPATIBILITYIDEOGRAPHS", UnicodeBlock::CJK_COMPATIBILITY_IDEOGRAPHS),
    ("CJKCOMPATIBILITYIDEOGRAPHSSUPPLEMENT", UnicodeBlock::CJK_COMPATIBILITY_IDEOGRAPHS_SUPPLEMENT),
    ("CJKRADICALSSUPPLEMENT", UnicodeBlock::CJK_RADICALS_SUPPLEMENT),
    ("CJKSTROKES", UnicodeBlock::CJK_STROKES),
    ("CJKSYMBOLSANDPUNCTUATION", UnicodeBlock::CJK_SYMBOLS_AND_PUNCTUATION),
    ("CJKUNIFIEDIDEOGRAPHS", UnicodeBlock::CJK_UNIFIED_IDEOGRAPHS),
    ("CJKUNIFIEDIDEOGRAPHSEXTENSIONA", UnicodeBlock::CJK_UNIFIED_IDEOGRAPHS_EXTENSION_A),
    ("CJKUNIFIEDIDEOGRAPHSEXTENSIONB", UnicodeBlock::CJK_UNIFIED_IDEOGRAPHS_EXTENSION_B),
    ("CJKUNIFIEDIDEOGRAPHSEXTENSIONC", UnicodeBlock::CJK_UNIFIED_IDEOGRAPHS_EXTENSION_C),
    ("CJKUNIFIEDIDEOGRAPHSEXTENSIOND", UnicodeBlock::CJK_UNIFIED_IDEOGRAPHS_EXTENSION_D),
    ("CJKUNIFIEDIDEOGRAPHSEXTENSIONE", UnicodeBlock::CJK_UNIFIED_IDEOGRAPHS_EXTENSION_E),
    ("CJKUNIFIEDIDEOGRAPHSEXTENSIONF", UnicodeBlock::CJK_UNIFIED_IDEOGRAPHS_EXTENSION_F),
    ("CJKUNIFIEDIDEOGRAPHSEXTENSIONG", UnicodeBlock::CJK_UNIFIED_IDEOGRAPHS_EXTENSION_G),
    ("CJK_COMPATIBILITY", UnicodeBlock::CJK_COMPATIBILITY),
    ("CJK_COMPATIBILITY_FORMS", UnicodeBlock::CJK_COMPATIBILITY_FORMS),
    ("CJK_COMPATIBILITY_IDEOGRAPHS", UnicodeBlock::CJK_COMPATIBILITY_IDEOGRAPHS),
    ("CJK_COMPATIBILITY_IDEOGRAPHS_SUPPLEMENT", UnicodeBlock::CJK_COMPATIBILITY_IDEOGRAPHS_SUPPLEMENT),
    ("CJK_RADICALS_SUPPLEMENT", UnicodeBlock::CJK_RADICALS_SUPPLEMENT),
    ("CJK_STROKES", UnicodeBlock::CJK_STROKES),
    ("CJK_SYMBOLS_AND_PUNCTUATION", UnicodeBlock::CJK_SYMBOLS_AND_PUNCTUATION),
    ("CJK_UNIFIED_IDEOGRAPHS", UnicodeBlock::CJK_UNIFIED_IDEOGRAPHS),
    ("CJK_UNIFIED_IDEOGRAPHS_EXTENSION_A", UnicodeBlock::CJK_UNIFIED_IDEOGRAPHS_EXTENSION_A),
    ("CJK_UNIFIED_IDEOGRAPHS_EXTENSION_B", UnicodeBlock::CJK_UNIFIED_IDEOGRAPHS_EXTENSION_B),
    ("CJK_UNIFIED_IDEOGRAPHS_EXTENSION_C", UnicodeBlock::CJK_UNIFIED_IDEOGRAPHS_EXTENSION_C),
    ("CJK_UNIFIED_IDEOGRAPHS_EXTENSION_D", UnicodeBlock::CJK_UNIFIED_IDEOGRAPHS_EXTENSION_D),
    ("CJK_UNIFIED_IDEOGRAPHS_EXTENSION_E", UnicodeBlock::CJK_UNIFIED_IDEOGRAPHS_EXTENSION_E),
    ("CJK_UNIFIED_IDEOGRAPHS_EXTENSION_F", UnicodeBlock::CJK_UNIFIED_IDEOGRAPHS_EXTENSION_F),
    ("CJK_UNIFIED_IDEOGRAPHS_EXTENSION_G", UnicodeBlock::CJK_UNIFIED_IDEOGRAPHS_EXTENSION_G),
    ("COMBINING DIACRITICAL MARKS", UnicodeBlock::COMBINING_DIACRITICAL_MARKS),
    ("COMBINING DIACRITICAL MARKS EXTENDED", UnicodeBlock::COMBINING_DIACRITICAL_MARKS_EXTENDED),
    ("COMBINING DIACRITICAL MARKS FOR SYMBOLS", UnicodeBlock::COMBINING_MARKS_FOR_SYMBOLS),
    ("COMBINING DIACRITICAL MARKS SUPPLEMENT", UnicodeBlock::COMBINING_DIACRITICAL_MARKS_SUPPLEMENT),
    ("COMBINING HALF MARKS", UnicodeBlock::COMBINING_HALF_MARKS),
    ("COMBINING MARKS FOR SYMBOLS", UnicodeBlock::COMBINING_MARKS_FOR_SYMBOLS),
    ("COMBININGDIACRITICALMARKS", UnicodeBlock::COMBINING_DIACRITICAL_MARKS),
    ("COMBININGDIACRITICALMARKSEXTENDED", UnicodeBlock::COMBINING_DIACRITICAL_MARKS_EXTENDED),
    ("COMBININGDIACRITICALMARKSFORSYMBOLS", UnicodeBlock::COMBINING_MARKS_FOR_SYMBOLS),
    ("COMBININGDIACRITICALMARKSSUPPLEMENT", UnicodeBlock::COMBINING_DIACRITICAL_MARKS_SUPPLEMENT),
    ("COMBININGHALFMARKS", UnicodeBlock::COMBINING_HALF_MARKS),
    ("COMBININGMARKSFORSYMBOLS", UnicodeBlock::COMBINING_MARKS_FOR_SYMBOLS),
    ("COMBINING_DIACRITICAL_MARKS", UnicodeBlock::COMBINING_DIACRITICAL_MARKS),
    ("COMBINING_DIACRITICAL_MARKS_EXTENDED", UnicodeBlock::COMBINING_DIACRITICAL_MARKS_EXTENDED),
    ("COMBINING_DIACRITICAL_MARKS_SUPPLEMENT", UnicodeBlock::COMBINING_DIACRITICAL_MARKS_SUPPLEMENT),
    ("COMBINING_HALF_MARKS", UnicodeBlock::COMBINING_HALF_MARKS),
    ("COMBINING_MARKS_FOR_SYMBOLS", UnicodeBlock::COMBINING_MARKS_FOR_SYMBOLS),
    ("COMMON INDIC NUMBER FORMS", UnicodeBlock::COMMON_INDIC_NUMBER_FORMS),
    ("COMMONINDICNUMBERFORMS", UnicodeBlock::COMMON_INDIC_NUMBER_FORMS),
    ("COMMON_INDIC_NUMBER_FORMS", UnicodeBlock::COMMON_INDIC_NUMBER_FORMS),
    ("CONTROL PICTURES", UnicodeBlock::CONTROL_PICTURES),
    ("CONTROLPICTURES", UnicodeBlock::CONTROL_PICTURES),
    ("CONTROL_PICTURES", UnicodeBlock::CONTROL_PICTURES),
    ("COPTIC", UnicodeBlock::COPTIC),
    ("COPTIC EPACT NUMBERS", UnicodeBlock::COPTIC_EPACT_NUMBERS),
    ("COPTICEPACTNUMBERS", UnicodeBlock::COPTIC_EPACT_NUMBERS),
    ("COPTIC_EPACT_NUMBERS", UnicodeBlock::COPTIC_EPACT_NUMBERS),
    ("COUNTING ROD NUMERALS", UnicodeBlock::COUNTING_ROD_NUMERALS),
    ("COUNTINGRODNUMERALS", UnicodeBlock::COUNTING_ROD_NUMERALS),
    ("COUNTING_ROD_NUMERALS", UnicodeBlock::COUNTING_ROD_NUMERALS),
    ("CUNEIFORM", UnicodeBlock::CUNEIFORM),
    ("CUNEIFORM NUMBERS AND PUNCTUATION", UnicodeBlock::CUNEIFORM_NUMBERS_AND_PUNCTUATION),
    ("CUNEIFORMNUMBERSANDPUNCTUATION", UnicodeBlock::CUNEIFORM_NUMBERS_AND_PUNCTUATION),
    ("CUNEIFORM_NUMBERS_AND_PUNCTUATION", UnicodeBlock::CUNEIFORM_NUMBERS_AND_PUNCTUATION),
    ("CURRENCY SYMBOLS", UnicodeBlock::CURRENCY_SYMBOLS),
    ("CURRENCYSYMBOLS", UnicodeBlock::CURRENCY_SYMBOLS),
    ("CURRENCY_SYMBOLS", UnicodeBlock::CURRENCY_SYMBOLS),
    ("CYPRIOT SYLLABARY", UnicodeBlock::CYPRIOT_SYLLABARY),
    ("CYPRIOTSYLLABARY", UnicodeBlock::CYPRIOT_SYLLABARY),
    ("CYPRIOT_SYLLABARY", UnicodeBlock::CYPRIOT_SYLLABARY),
    ("CYPRO-MINOAN", UnicodeBlock::CYPRO_MINOAN),
    ("CYPRO_MINOAN", UnicodeBlock::CYPRO_MINOAN),
    ("CYRILLIC", UnicodeBlock::CYRILLIC),
    ("CYRILLIC EXTENDED-A", UnicodeBlock::CYRILLIC_EXTENDED_A),
    ("CYRILLIC EXTENDED-B", UnicodeBlock::CYRILLIC_EXTENDED_B),
    ("CYRILLIC EXTENDED-C", UnicodeBlock::CYRILLIC_EXTENDED_C),
    ("CYRILLIC SUPPLEMENT", UnicodeBlock::CYRILLIC_SUPPLEMENTARY),
    ("CYRILLIC SUPPLEMENTARY", UnicodeBlock::CYRILLIC_SUPPLEMENTARY),
    ("CYRILLICEXTENDED-A", UnicodeBlock::CYRILLIC_EXTENDED_A),
    ("CYRILLICEXTENDED-B", UnicodeBlock::CYRILLIC_EXTENDED_B),
    ("CYRILLICEXTENDED-C", UnicodeBlock::CYRILLIC_EXTENDED_C),
    ("CYRILLICSUPPLEMENT", UnicodeBlock::CYRILLIC_SUPPLEMENTARY),
    ("CYRILLICSUPPLEMENTARY", UnicodeBlock::CYRILLIC_SUPPLEMENTARY),
    ("CYRILLIC_EXTENDED_A", UnicodeBlock::CYRILLIC_EXTENDED_A),
    ("CYRILLIC_EXTENDED_B", UnicodeBlock::CYRILLIC_EXTENDED_B),
    ("CYRILLIC_EXTENDED_C", UnicodeBlock::CYRILLIC_EXTENDED_C),
    ("CYRILLIC_SUPPLEMENTARY", UnicodeBlock::CYRILLIC_SUPPLEMENTARY),
    ("DESERET", UnicodeBlock::DESERET),
    ("DEVANAGARI", UnicodeBlock::DEVANAGARI),
    ("DEVANAGARI EXTENDED", UnicodeBlock::DEVANAGARI_EXTENDED),
    ("DEVANAGARIEXTENDED", UnicodeBlock::DEVANAGARI_EXTENDED),
    ("DEVANAGARI_EXTENDED", UnicodeBlock::DEVANAGARI_EXTENDED),
    ("DINGBATS", UnicodeBlock::DINGBATS),
    ("DIVES AKURU", UnicodeBlock::DIVES_AKURU),
    ("DIVESAKURU", UnicodeBlock::DIVES_AKURU),
    ("DIVES_AKURU", UnicodeBlock::DIVES_AKURU),
    ("DOGRA", UnicodeBlock::DOGRA),
    ("DOMINO TILES", UnicodeBlock::DOMINO_TILES),
    ("DOMINOTILES", UnicodeBlock::DOMINO_TILES),
    ("DOMINO_TILES", UnicodeBlock::DOMINO_TILES),
    ("DUPLOYAN", UnicodeBlock::DUPLOYAN),
    ("EARLY DYNASTIC CUNEIFORM", UnicodeBlock::EARLY_DYNASTIC_CUNEIFORM),
    ("EARLYDYNASTICCUNEIFORM", UnicodeBlock::EARLY_DYNASTIC_CUNEIFORM),
    ("EARLY_DYNASTIC_CUNEIFORM", UnicodeBlock::EARLY_DYNASTIC_CUNEIFORM),
    ("EGYPTIAN HIEROGLYPH FORMAT CONTROLS", UnicodeBlock::EGYPTIAN_HIEROGLYPH_FORMAT_CONTROLS),
    ("EGYPTIAN HIEROGLYPHS", UnicodeBlock::EGYPTIAN_HIEROGLYPHS),
    ("EGYPTIANHIEROGLYPHFORMATCONTROLS", UnicodeBlock::EGYPTIAN_HIEROGLYPH_FORMAT_CONTROLS),
    ("EGYPTIANHIEROGLYPHS", UnicodeBlock::EGYPTIAN_HIEROGLYPHS),
    ("EGYPTIAN_HIEROGLYPHS", UnicodeBlock::EGYPTIAN_HIEROGLYPHS),
    ("EGYPTIAN_HIEROGLYPH_FORMAT_CONTROLS", UnicodeBlock::EGYPTIAN_HIEROGLYPH_FORMAT_CONTROLS),
    ("ELBASAN", UnicodeBlock::ELBASAN),
    ("ELYMAIC", UnicodeBlock::ELYMAIC),
    ("EMOTICONS", UnicodeBlock::EMOTICONS),
    ("ENCLOSED ALPHANUMERIC SUPPLEMENT", UnicodeBlock::ENCLOSED_ALPHANUMERIC_SUPPLEMENT),
    ("ENCLOSED ALPHANUMERICS", UnicodeBlock::ENCLOSED_ALPHANUMERICS),
    ("ENCLOSED CJK LETTERS AND MONTHS", UnicodeBlock::ENCLOSED_CJK_LETTERS_AND_MONTHS),
    ("ENCLOSED IDEOGRAPHIC SUPPLEMENT", UnicodeBlock::ENCLOSED_IDEOGRAPHIC_SUPPLEMENT),
    ("ENCLOSEDALPHANUMERICS", UnicodeBlock::ENCLOSED_ALPHANUMERICS),
    ("ENCLOSEDALPHANUMERICSUPPLEMENT", UnicodeBlock::ENCLOSED_ALPHANUMERIC_SUPPLEMENT),
    ("ENCLOSEDCJKLETTERSANDMONTHS", UnicodeBlock::ENCLOSED_CJK_LETTERS_AND_MONTHS),
    ("ENCLOSEDIDEOGRAPHICSUPPLEMENT", UnicodeBlock::ENCLOSED_IDEOGRAPHIC_SUPPLEMENT),
    ("ENCLOSED_ALPHANUMERICS", UnicodeBlock::ENCLOSED_ALPHANUMERICS),
    ("ENCLOSED_ALPHANUMERIC_SUPPLEMENT", UnicodeBlock::ENCLOSED_ALPHANUMERIC_SUPPLEMENT),
    ("ENCLOSED_CJK_LETTERS_AND_MONTHS", UnicodeBlock::ENCLOSED_CJK_LETTERS_AND_MONTHS),
    ("ENCLOSED_IDEOGRAPHIC_SUPPLEMENT", UnicodeBlock::ENCLOSED_IDEOGRAPHIC_SUPPLEMENT),
    ("ETHIOPIC", UnicodeBlock::ETHIOPIC),
    ("ETHIOPIC EXTENDED", UnicodeBlock::ETHIOPIC_EXTENDED),
    ("ETHIOPIC EXTENDED-A", UnicodeBlock::ETHIOPIC_EXTENDED_A),
    ("ETHIOPIC EXTENDED-B", UnicodeBlock::ETHIOPIC_EXTENDED_B),
    ("ETHIOPIC SUPPLEMENT", UnicodeBlock::ETHIOPIC_SUPPLEMENT),
    ("ETHIOPICEXTENDED", UnicodeBlock::ETHIOPIC_EXTENDED),
    ("ETHIOPICEXTENDED-A", UnicodeBlock::ETHIOPIC_EXTENDED_A),
    ("ETHIOPICEXTENDED-B", UnicodeBlock::ETHIOPIC_EXTENDED_B),
    ("ETHIOPICSUPPLEMENT", UnicodeBlock::ETHIOPIC_SUPPLEMENT),
    ("ETHIOPIC_EXTENDED", UnicodeBlock::ETHIOPIC_EXTENDED),
    ("ETHIOPIC_EXTENDED_A", UnicodeBlock::ETHIOPIC_EXTENDED_A),
    ("ETHIOPIC_EXTENDED_B", UnicodeBlock::ETHIOPIC_EXTENDED_B),
    ("ETHIOPIC_SUPPLEMENT", UnicodeBlock::ETHIOPIC_SUPPLEMENT),
    ("GENERAL PUNCTUATION", UnicodeBlock::GENERAL_PUNCTUATION),
    ("GENERALPUNCTUATION", UnicodeBlock::GENERAL_PUNCTUATION),
    ("GENERAL_PUNCTUATION", UnicodeBlock::GENERAL_PUNCTUATION),
    ("GEOMETRIC SHAPES", UnicodeBlock::GEOMETRIC_SHAPES),
    ("GEOMETRIC SHAPES EXTENDED", UnicodeBlock::GEOMETRIC_SHAPES_EXTENDED),
    ("GEOMETRICSHAPES", UnicodeBlock::GEOMETRIC_SHAPES),
    ("GEOMETRICSHAPESEXTENDED", UnicodeBlock::GEOMETRIC_SHAPES_EXTENDED),
    ("GEOMETRIC_SHAPES", UnicodeBlock::GEOMETRIC_SHAPES),
    ("GEOMETRIC_SHAPES_EXTENDED", UnicodeBlock::GEOMETRIC_SHAPES_EXTENDED),
    ("GEORGIAN", UnicodeBlock::GEORGIAN),
    ("GEORGIAN EXTENDED", UnicodeBlock::GEORGIAN_EXTENDED),
    ("GEORGIAN SUPPLEMENT", UnicodeBlock::GEORGIAN_SUPPLEMENT),
    ("GEORGIANEXTENDED", UnicodeBlock::GEORGIAN_EXTENDED),
    ("GEORGIANSUPPLEMENT", UnicodeBlock::GEORGIAN_SUPPLEMENT),
    ("GEORGIAN_EXTENDED", UnicodeBlock::GEORGIAN_EXTENDED),
    ("GEORGIAN_SUPPLEMENT", UnicodeBlock::GEORGIAN_SUPPLEMENT),
    ("GLAGOLITIC", UnicodeBlock::GLAGOLITIC),
    ("GLAGOLITIC SUPPLEMENT", UnicodeBlock::GLAGOLITIC_SUPPLEMENT),
    ("GLAGOLITICSUPPLEMENT", UnicodeBlock::GLAGOLITIC_SUPPLEMENT),
    ("GLAGOLITIC_SUPPLEMENT", UnicodeBlock::GLAGOLITIC_SUPPLEMENT),
    ("GOTHIC", UnicodeBlock::GOTHIC),
    ("GRANTHA", UnicodeBlock::GRANTHA),
    ("GREEK", UnicodeBlock::GREEK),
    ("GREEK AND COPTIC", UnicodeBlock::GREEK),
    ("GREEK EXTENDED", UnicodeBlock::GREEK_EXTENDED),
    ("GREEKANDCOPTIC", UnicodeBlock::GREEK),
    ("GREEKEXTENDED", UnicodeBlock::GREEK_EXTENDED),
    ("GREEK_EXTENDED", UnicodeBlock::GREEK_EXTENDED),
    ("GUJARATI", UnicodeBlock::GUJARATI),
    ("GUNJALA GONDI", UnicodeBlock::GUNJALA_GONDI),
    ("GUNJALAGONDI", UnicodeBlock::GUNJALA_GONDI),
    ("GUNJALA_GONDI", UnicodeBlock::GUNJALA_GONDI),
    ("GURMUKHI", UnicodeBlock::GURMUKHI),
    ("HALFWIDTH AND FULLWIDTH FORMS", UnicodeBlock::HALFWIDTH_AND_FULLWIDTH_FORMS),
    ("HALFWIDTHANDFULLWIDTHFORMS", UnicodeBlock::HALFWIDTH_AND_FULLWIDTH_FORMS),
    ("HALFWIDTH_AND_FULLWIDTH_FORMS", UnicodeBlock::HALFWIDTH_AND_FULLWIDTH_FORMS),
    ("HANGUL COMPATIBILITY JAMO", UnicodeBlock::HANGUL_COMPATIBILITY_JAMO),
    ("HANGUL JAMO", UnicodeBlock::HANGUL_JAMO),
    ("HANGUL JAMO EXTENDED-A", UnicodeBlock::HANGUL_JAMO_EXTENDED_A),
    ("HANGUL JAMO EXTENDED-B", UnicodeBlock::HANGUL_JAMO_EXTENDED_B),
    ("HANGUL SYLLABLES", UnicodeBlock::HANGUL_SYLLABLES),
    ("HANGULCOMPATIBILITYJAMO", UnicodeBlock::HANGUL_COMPATIBILITY_JAMO),
    ("HANGULJAMO", UnicodeBlock::HANGUL_JAMO),
    ("HANGULJAMOEXTENDED-A", UnicodeBlock::HANGUL_JAMO_EXTENDED_A),
    ("HANGULJAMOEXTENDED-B", UnicodeBlock::HANGUL_JAMO_EXTENDED_B),
    ("HANGULSYLLABLES", UnicodeBlock::HANGUL_SYLLABLES),
    ("HANGUL_COMPATIBILITY_JAMO", UnicodeBlock::HANGUL_COMPATIBILITY_JAMO),
    ("HANGUL_JAMO", UnicodeBlock::HANGUL_JAMO),
    ("HANGUL_JAMO_EXTENDED_A", UnicodeBlock::HANGUL_JAMO_EXTENDED_A),
    ("HANGUL_JAMO_EXTENDED_B", UnicodeBlock::HANGUL_JAMO_EXTENDED_B),
    ("HANGUL_SYLLABLES", UnicodeBlock::HANGUL_SYLLABLES),
    ("HANIFI ROHINGYA", UnicodeBlock::HANIFI_ROHINGYA),
    ("HANIFIROHINGYA", UnicodeBlock::HANIFI_ROHINGYA),
    ("HANIFI_ROHINGYA", UnicodeBlock::HANIFI_ROHINGYA),
    ("HANUNOO", UnicodeBlock::HANUNOO),
    ("HATRAN", UnicodeBlock::HATRAN),
    ("HEBREW", UnicodeBlock::HEBREW),
    ("HIGH PRIVATE USE SURROGATES", UnicodeBlock::HIGH_PRIVATE_USE_SURROGATES),
    ("HIGH SURROGATES", UnicodeBlock::HIGH_SURROGATES),
    ("HIGHPRIVATEUSESURROGATES", UnicodeBlock::HIGH_PRIVATE_USE_SURROGATES),
    ("HIGHSURROGATES", UnicodeBlock::HIGH_SURROGATES),
    ("HIGH_PRIVATE_USE_SURROGATES", UnicodeBlock::HIGH_PRIVATE_USE_SURROGATES),
    ("HIGH_SURROGATES", UnicodeBlock::HIGH_SURROGATES),
    ("HIRAGANA", UnicodeBlock::HIRAGANA),
    ("IDEOGRAPHIC DESCRIPTION CHARACTERS", UnicodeBlock::IDEOGRAPHIC_DESCRIPTION_CHARACTERS),
    ("IDEOGRAPHIC SYMBOLS AND PUNCTUATION", UnicodeBlock::IDEOGRAPHIC_SYMBOLS_AND_PUNCTUATION),
    ("IDEOGRAPHICDESCRIPTIONCHARACTERS", UnicodeBlock::IDEOGRAPHIC_DESCRIPTION_CHARACTERS),
    ("IDEOGRAPHICSYMBOLSANDPUNCTUATION", UnicodeBlock::IDEOGRAPHIC_SYMBOLS_AND_PUNCTUATION),
    ("IDEOGRAPHIC_DESCRIPTION_CHARACTERS", UnicodeBlock::IDEOGRAPHIC_DESCRIPTION_CHARACTERS),
    ("IDEOGRAPHIC_SYMBOLS_AND_PUNCTUATION", UnicodeBlock::IDEOGRAPHIC_SYMBOLS_AND_PUNCTUATION),
    ("IMPERIAL ARAMAIC", UnicodeBlock::IMPERIAL_ARAMAIC),
    ("IMPERIALARAMAIC", UnicodeBlock::IMPERIAL_ARAMAIC),
    ("IMPERIAL_ARAMAIC", UnicodeBlock::IMPERIAL_ARAMAIC),
    ("INDIC SIYAQ NUMBERS", UnicodeBlock::INDIC_SIYAQ_NUMBERS),
    ("INDICSIYAQNUMBERS", UnicodeBlock::INDIC_SIYAQ_NUMBERS),
    ("INDIC_SIYAQ_NUMBERS", UnicodeBlock::INDIC_SIYAQ_NUMBERS),
    ("INSCRIPTIONAL PAHLAVI", UnicodeBlock::INSCRIPTIONAL_PAHLAVI),
    ("INSCRIPTIONAL PARTHIAN", UnicodeBlock::INSCRIPTIONAL_PARTHIAN),
    ("INSCRIPTIONALPAHLAVI", UnicodeBlock::INSCRIPTIONAL_PAHLAVI),
    ("INSCRIPTIONALPARTHIAN", UnicodeBlock::INSCRIPTIONAL_PARTHIAN),
    ("INSCRIPTIONAL_PAHLAVI", UnicodeBlock::INSCRIPTIONAL_PAHLAVI),
    ("INSCRIPTIONAL_PARTHIAN", UnicodeBlock::INSCRIPTIONAL_PARTHIAN),
    ("IPA EXTENSIONS", UnicodeBlock::IPA_EXTENSIONS),
    ("IPAEXTENSIONS", UnicodeBlock::IPA_EXTENSIONS),
    ("IPA_EXTENSIONS", UnicodeBlock::IPA_EXTENSIONS),
    ("JAVANESE", UnicodeBlock::JAVANESE),
    ("KAITHI", UnicodeBlock::KAITHI),
    ("KANA EXTENDED-A", UnicodeBlock::KANA_EXTENDED_A),
    ("KANA EXTENDED-B", UnicodeBlock::KANA_EXTENDED_B),
    ("KANA SUPPLEMENT", UnicodeBlock::KANA_SUPPLEMENT),
    ("KANAEXTENDED-A", UnicodeBlock::KANA_EXTENDED_A),
    ("KANAEXTENDED-B", UnicodeBlock::KANA_EXTENDED_B),
    ("KANASUPPLEMENT", UnicodeBlock::KANA_SUPPLEMENT),
    ("KANA_EXTENDED_A", UnicodeBlock::KANA_EXTENDED_A),
    ("KANA_EXTENDED_B", UnicodeBlock::KANA_EXTENDED_B),
    ("KANA_SUPPLEMENT", UnicodeBlock::KANA_SUPPLEMENT),
    ("KANBUN", UnicodeBlock::KANBUN),
    ("KANGXI RADICALS", UnicodeBlock::KANGXI_RADICALS),
    ("KANGXIRADICALS", UnicodeBlock::KANGXI_RADICALS),
    ("KANGXI_RADICALS", UnicodeBlock::KANGXI_RADICALS),
    ("KANNADA", UnicodeBlock::KANNADA),
    ("KATAKANA", UnicodeBlock::KATAKANA),
    ("KATAKANA PHONETIC EXTENSIONS", UnicodeBlock::KATAKANA_PHONETIC_EXTENSIONS),
    ("KATAKANAPHONETICEXTENSIONS", UnicodeBlock::KATAKANA_PHONETIC_EXTENSIONS),
    ("KATAKANA_PHONETIC_EXTENSIONS", UnicodeBlock::KATAKANA_PHONETIC_EXTENSIONS),
    ("KAYAH LI", UnicodeBlock::KAYAH_LI),
    ("KAYAHLI", UnicodeBlock::KAYAH_LI),
    ("KAYAH_LI", UnicodeBlock::KAYAH_LI),
    ("KHAROSHTHI", UnicodeBlock::KHAROSHTHI),
    ("KHITAN SMALL SCRIPT", UnicodeBlock::KHITAN_SMALL_SCRIPT),
    ("KHITANSMALLSCRIPT", UnicodeBlock::KHITAN_SMALL_SCRIPT),
    ("KHITAN_SMALL_SCRIPT", UnicodeBlock::KHITAN_SMALL_SCRIPT),
    ("KHMER", UnicodeBlock::KHMER),
    ("KHMER SYMBOLS", UnicodeBlock::KHMER_SYMBOLS),
    ("KHMERSYMBOLS", UnicodeBlock::KHMER_SYMBOLS),
    ("KHMER_SYMBOLS", UnicodeBlock::KHMER_SYMBOLS),
    ("KHOJKI", UnicodeBlock::KHOJKI),
    ("KHUDAWADI", UnicodeBlock::KHUDAWADI),
    ("LAO", UnicodeBlock::LAO),
    ("LATIN EXTENDED ADDITIONAL", UnicodeBlock::LATIN_EXTENDED_ADDITIONAL),
    ("LATIN EXTENDED-A", UnicodeBlock::LATIN_EXTENDED_A),
    ("LATIN EXTENDED-B", UnicodeBlock::LATIN_EXTENDED_B),
    ("LATIN EXTENDED-C", UnicodeBlock::LATIN_EXTENDED_C),
    ("LATIN EXTENDED-D", UnicodeBlock::LATIN_EXTENDED_D),
    ("LATIN EXTENDED-E", UnicodeBlock::LATIN_EXTENDED_E),
    ("LATIN EXTENDED-F", UnicodeBlock::LATIN_EXTENDED_F),
    ("LATIN EXTENDED-G", UnicodeBlock::LATIN_EXTENDED_G),
    ("LATIN-1 SUPPLEMENT", UnicodeBlock::LATIN_1_SUPPLEMENT),
    ("LATIN-1SUPPLEMENT", UnicodeBlock::LATIN_1_SUPPLEMENT),
    ("LATINEXTENDED-A", UnicodeBlock::LATIN_EXTENDED_A),
    ("LATINEXTENDED-B", UnicodeBlock::LATIN_EXTENDED_B),
    ("LATINEXTENDED-C", UnicodeBlock::LATIN_EXTENDED_C),
    ("LATINEXTENDED-D", UnicodeBlock::LATIN_EXTENDED_D),
    ("LATINEXTENDED-E", UnicodeBlock::LATIN_EXTENDED_E),
    ("LATINEXTENDED-F", UnicodeBlock::LATIN_EXTENDED_F),
    ("LATINEXTENDED-G", UnicodeBlock::LATIN_EXTENDED_G),
    ("LATINEXTENDEDADDITIONAL", UnicodeBlock::LATIN_EXTENDED_ADDITIONAL),
    ("LATIN_1_SUPPLEMENT", UnicodeBlock::LATIN_1_SUPPLEMENT),
    ("LATIN_EXTENDED_A", UnicodeBlock::LATIN_EXTENDED_A),
    ("LATIN_EXTENDED_ADDITIONAL", UnicodeBlock::LATIN_EXTENDED_ADDITIONAL),
    ("LATIN_EXTENDED_B", UnicodeBlock::LATIN_EXTENDED_B),
    ("LATIN_EXTENDED_C", UnicodeBlock::LATIN_EXTENDED_C),
    ("LATIN_EXTENDED_D", UnicodeBlock::LATIN_EXTENDED_D),
    ("LATIN_EXTENDED_E", UnicodeBlock::LATIN_EXTENDED_E),
    ("LATIN_EXTENDED_F", UnicodeBlock::LATIN_EXTENDED_F),
    ("LATIN_EXTENDED_G", UnicodeBlock::LATIN_EXTENDED_G),
    ("LEPCHA", UnicodeBlock::LEPCHA),
    ("LETTERLIKE SYMBOLS", UnicodeBlock::LETTERLIKE_SYMBOLS),
    ("LETTERLIKESYMBOLS", UnicodeBlock::LETTERLIKE_SYMBOLS),
    ("LETTERLIKE_SYMBOLS", UnicodeBlock::LETTERLIKE_SYMBOLS),
    ("LIMBU", UnicodeBlock::LIMBU),
    ("LINEAR A", UnicodeBlock::LINEAR_A),
    ("LINEAR B IDEOGRAMS", UnicodeBlock::LINEAR_B_IDEOGRAMS),
    ("LINEAR B SYLLABARY", UnicodeBlock::LINEAR_B_SYLLABARY),
    ("LINEARA", UnicodeBlock::LINEAR_A),
    ("LINEARBIDEOGRAMS", UnicodeBlock::LINEAR_B_IDEOGRAMS),
    ("LINEARBSYLLABARY", UnicodeBlock::LINEAR_B_SYLLABARY),
    ("LINEAR_A", UnicodeBlock::LINEAR_A),
    ("LINEAR_B_IDEOGRAMS", UnicodeBlock::LINEAR_B_IDEOGRAMS),
    ("LINEAR_B_SYLLABARY", UnicodeBlock::LINEAR_B_SYLLABARY),
    ("LISU", UnicodeBlock::LISU),
    ("LISU SUPPLEMENT", UnicodeBlock::LISU_SUPPLEMENT),
    ("LISUSUPPLEMENT", UnicodeBlock::LISU_SUPPLEMENT),
    ("LISU_SUPPLEMENT", UnicodeBlock::LISU_SUPPLEMENT),
    ("LOW SURROGATES", UnicodeBlock::LOW_SURROGATES),
    ("LOWSURROGATES", UnicodeBlock::LOW_SURROGATES),
    ("LOW_SURROGATES", UnicodeBlock::LOW_SURROGATES),
    ("LYCIAN", UnicodeBlock::LYCIAN),
    ("LYDIAN", UnicodeBlock::LYDIAN),
    ("MAHAJANI", UnicodeBlock::MAHAJANI),
    ("MAHJONG TILES", UnicodeBlock::MAHJONG_TILES),
    ("MAHJONGTILES", UnicodeBlock::MAHJONG_TILES),
    ("MAHJONG_TILES", UnicodeBlock::MAHJONG_TILES),
    ("MAKASAR", UnicodeBlock::MAKASAR),
    ("MALAYALAM", UnicodeBlock::MALAYALAM),
    ("MANDAIC", UnicodeBlock::MANDAIC),
    ("MANICHAEAN", UnicodeBlock::MANICHAEAN),
    ("MARCHEN", UnicodeBlock::MARCHEN),
    ("MASARAM GONDI", UnicodeBlock::MASARAM_GONDI),
    ("MASARAMGONDI", UnicodeBlock::MASARAM_GONDI),
    ("MASARAM_GONDI", UnicodeBlock::MASARAM_GONDI),
    ("MATHEMATICAL ALPHANUMERIC SYMBOLS", UnicodeBlock::MATHEMATICAL_ALPHANUMERIC_SYMBOLS),
    ("MATHEMATICAL OPERATORS", UnicodeBlock::MATHEMATICAL_OPERATORS),
    ("MATHEMATICALALPHANUMERICSYMBOLS", UnicodeBlock::MATHEMATICAL_ALPHANUMERIC_SYMBOLS),
    ("MATHEMATICALOPERATORS", UnicodeBlock::MATHEMATICAL_OPERATORS),
    ("MATHEMATICAL_ALPHANUMERIC_SYMBOLS", UnicodeBlock::MATHEMATICAL_ALPHANUMERIC_SYMBOLS),
    ("MATHEMATICAL_OPERATORS", UnicodeBlock::MATHEMATICAL_OPERATORS),
    ("MAYAN NUMERALS", UnicodeBlock::MAYAN_NUMERALS),
    ("MAYANNUMERALS", UnicodeBlock::MAYAN_NUMERALS),
    ("MAYAN_NUMERALS", UnicodeBlock::MAYAN_NUMERALS),
    ("MEDEFAIDRIN", UnicodeBlock::MEDEFAIDRIN),
    ("MEETEI MAYEK", UnicodeBlock::MEETEI_MAYEK),
    ("MEETEI MAYEK EXTENSIONS", UnicodeBlock::MEETEI_MAYEK_EXTENSIONS),
    ("MEETEIMAYEK", UnicodeBlock::MEETEI_MAYEK),
    ("MEETEIMAYEKEXTENSIONS", UnicodeBlock::MEETEI_MAYEK_EXTENSIONS),
    ("MEETEI_MAYEK", UnicodeBlock::MEETEI_MAYEK),
    ("MEETEI_MAYEK_EXTENSIONS", UnicodeBlock::MEETEI_MAYEK_EXTENSIONS),
    ("MENDE KIKAKUI", UnicodeBlock::MENDE_KIKAKUI),
    ("MENDEKIKAKUI", UnicodeBlock::MENDE_KIKAKUI),
    ("MENDE_KIKAKUI", UnicodeBlock::MENDE_KIKAKUI),
    ("MEROITIC CURSIVE", UnicodeBlock::MEROITIC_CURSIVE),
    ("MEROITIC HIEROGLYPHS", UnicodeBlock::MEROITIC_HIEROGLYPHS),
    ("MEROITICCURSIVE", UnicodeBlock::MEROITIC_CURSIVE),
    ("MEROITICHIEROGLYPHS", UnicodeBlock::MEROITIC_HIEROGLYPHS),
    ("MEROITIC_CURSIVE", UnicodeBlock::MEROITIC_CURSIVE),
    ("MEROITIC_HIEROGLYPHS", UnicodeBlock::MEROITIC_HIEROGLYPHS),
    ("MIAO", UnicodeBlock::MIAO),
    ("MISCELLANEOUS MATHEMATICAL SYMBOLS-A", UnicodeBlock::MISCELLANEOUS_MATHEMATICAL_SYMBOLS_A),
    ("MISCELLANEOUS MATHEMATICAL SYMBOLS-B", UnicodeBlock::MISCELLANEOUS_MATHEMATICAL_SYMBOLS_B),
    ("MISCELLANEOUS SYMBOLS", UnicodeBlock::MISCELLANEOUS_SYMBOLS),
    ("MISCELLANEOUS SYMBOLS AND ARROWS", UnicodeBlock::MISCELLANEOUS_SYMBOLS_AND_ARROWS),
    ("MISCELLANEOUS SYMBOLS AND PICTOGRAPHS", UnicodeBlock::MISCELLANEOUS_SYMBOLS_AND_PICTOGRAPHS),
    ("MISCELLANEOUS TECHNICAL", UnicodeBlock::MISCELLANEOUS_TECHNICAL),
    ("MISCELLANEOUSMATHEMATICALSYMBOLS-A", UnicodeBlock::MISCELLANEOUS_MATHEMATICAL_SYMBOLS_A),
    ("MISCELLANEOUSMATHEMATICALSYMBOLS-B", UnicodeBlock::MISCELLANEOUS_MATHEMATICAL_SYMBOLS_B),
    ("MISCELLANEOUSSYMBOLS", UnicodeBlock::MISCELLANEOUS_SYMBOLS),
    ("MISCELLANEOUSSYMBOLSANDARROWS", UnicodeBlock::MISCELLANEOUS_SYMBOLS_AND_ARROWS),
    ("MISCELLANEOUSSYMBOLSANDPICTOGRAPHS", UnicodeBlock::MISCELLANEOUS_SYMBOLS_AND_PICTOGRAPHS),
    ("MISCELLANEOUSTECHNICAL", UnicodeBlock::MISCELLANEOUS_TECHNICAL),
    ("MISCELLANEOUS_MATHEMATICAL_SYMBOLS_A", UnicodeBlock::MISCELLANEOUS_MATHEMATICAL_SYMBOLS_A),
    ("MISCELLANEOUS_MATHEMATICAL_SYMBOLS_B", UnicodeBlock::MISCELLANEOUS_MATHEMATICAL_SYMBOLS_B),
    ("MISCELLANEOUS_SYMBOLS", UnicodeBlock::MISCELLANEOUS_SYMBOLS),
    ("MISCELLANEOUS_SYMBOLS_AND_ARROWS", UnicodeBlock::MISCELLANEOUS_SYMBOLS_AND_ARROWS),
    ("MISCELLANEOUS_SYMBOLS_AND_PICTOGRAPHS", UnicodeBlock::MISCELLANEOUS_SYMBOLS_AND_PICTOGRAPHS),
    ("MISCELLANEOUS_TECHNICAL", UnicodeBlock::MISCELLANEOUS_TECHNICAL),
    ("MODI", UnicodeBlock::MODI),
    ("MODIFIER TONE LETTERS", UnicodeBlock::MODIFIER_TONE_LETTERS),
    ("MODIFIERTONELETTERS", UnicodeBlock::MODIFIER_TONE_LETTERS),
    ("MODIFIER_TONE_LETTERS", UnicodeBlock::MODIFIER_TONE_LETTERS),
    ("MONGOLIAN", UnicodeBlock::MONGOLIAN),
    ("MONGOLIAN SUPPLEMENT", UnicodeBlock::MONGOLIAN_SUPPLEMENT),
    ("MONGOLIANSUPPLEMENT", UnicodeBlock::MONGOLIAN_SUPPLEMENT),
    ("MONGOLIAN_SUPPLEMENT", UnicodeBlock::MONGOLIAN_SUPPLEMENT),
    ("MRO", UnicodeBlock::MRO),
    ("MULTANI", UnicodeBlock::MULTANI),
    ("MUSICAL SYMBOLS", UnicodeBlock::MUSICAL_SYMBOLS),
    ("MUSICALSYMBOLS", UnicodeBlock::MUSICAL_SYMBOLS),
    ("MUSICAL_SYMBOLS", UnicodeBlock::MUSICAL_SYMBOLS),
    ("MYANMAR", UnicodeBlock::MYANMAR),
    ("MYANMAR EXTENDED-A", UnicodeBlock::MYANMAR_EXTENDED_A),
    ("MYANMAR EXTENDED-B", UnicodeBlock::MYANMAR_EXTENDED_B),
    ("MYANMAREXTENDED-A", UnicodeBlock::MYANMAR_EXTENDED_A),
    ("MYANMAREXTENDED-B", UnicodeBlock::MYANMAR_EXTENDED_B),
    ("MYANMAR_EXTENDED_A", UnicodeBlock::MYANMAR_EXTENDED_A),
    ("MYANMAR_EXTENDED_B", UnicodeBlock::MYANMAR_EXTENDED_B),
    ("NABATAEAN", UnicodeBlock::NABATAEAN),
    ("NANDINAGARI", UnicodeBlock::NANDINAGARI),
    ("NEW TAI LUE", UnicodeBlock::NEW_TAI_LUE),
    ("NEWA", UnicodeBlock::NEWA),
    ("NEWTAILUE", UnicodeBlock::NEW_TAI_LUE),
    ("NEW_TAI_LUE", UnicodeBlock::NEW_TAI_LUE),
    ("NKO", UnicodeBlock::NKO),
    ("NUMBER FORMS", UnicodeBlock::NUMBER_FORMS),
    ("NUMBERFORMS", UnicodeBlock::NUMBER_FORMS),
    ("NUMBER_FORMS", UnicodeBlock::NUMBER_FORMS),
    ("NUSHU", UnicodeBlock::NUSHU),
    ("NYIAKENG PUACHUE HMONG", UnicodeBlock::NYIAKENG_PUACHUE_HMONG),
    ("NYIAKENGPUACHUEHMONG", UnicodeBlock::NYIAKENG_PUACHUE_HMONG),
    ("NYIAKENG_PUACHUE_HMONG", UnicodeBlock::NYIAKENG_PUACHUE_HMONG),
    ("OGHAM", UnicodeBlock::OGHAM),
    ("OL CHIKI", UnicodeBlock::OL_CHIKI),
    ("OLCHIKI", UnicodeBlock::OL_CHIKI),
    ("OLD HUNGARIAN", UnicodeBlock::OLD_HUNGARIAN),
    ("OLD ITALIC", UnicodeBlock::OLD_ITALIC),
    ("OLD NORTH ARABIAN", UnicodeBlock::OLD_NORTH_ARABIAN),
    ("OLD PERMIC", UnicodeBlock::OLD_PERMIC),
    ("OLD PERSIAN", UnicodeBlock::OLD_PERSIAN),
    ("OLD SOGDIAN", UnicodeBlock::OLD_SOGDIAN),
    ("OLD SOUTH ARABIAN", UnicodeBlock::OLD_SOUTH_ARABIAN),
    ("OLD TURKIC", UnicodeBlock::OLD_TURKIC),
    ("OLD UYGHUR", UnicodeBlock::OLD_UYGHUR),
    ("OLDHUNGARIAN", UnicodeBlock::OLD_HUNGARIAN),
    ("OLDITALIC", UnicodeBlock::OLD_ITALIC),
    ("OLDNORTHARABIAN", UnicodeBlock::OLD_NORTH_ARABIAN),
    ("OLDPERMIC", UnicodeBlock::OLD_PERMIC),
    ("OLDPERSIAN", UnicodeBlock::OLD_PERSIAN),
    ("OLDSOGDIAN", UnicodeBlock::OLD_SOGDIAN),
    ("OLDSOUTHARABIAN", UnicodeBlock::OLD_SOUTH_ARABIAN),
    ("OLDTURKIC", UnicodeBlock::OLD_TURKIC),
    ("OLDUYGHUR", UnicodeBlock::OLD_UYGHUR),
    ("OLD_HUNGARIAN", UnicodeBlock::OLD_HUNGARIAN),
    ("OLD_ITALIC", UnicodeBlock::OLD_ITALIC),
    ("OLD_NORTH_ARABIAN", UnicodeBlock::OLD_NORTH_ARABIAN),
    ("OLD_PERMIC", UnicodeBlock::OLD_PERMIC),
    ("OLD_PERSIAN", UnicodeBlock::OLD_PERSIAN),
    ("OLD_SOGDIAN", UnicodeBlock::OLD_SOGDIAN),
    ("OLD_SOUTH_ARABIAN", UnicodeBlock::OLD_SOUTH_ARABIAN),
    ("OLD_TURKIC", UnicodeBlock::OLD_TURKIC),
    ("OLD_UYGHUR", UnicodeBlock::OLD_UYGHUR),
    ("OL_CHIKI", UnicodeBlock::OL_CHIKI),
    ("OPTICAL CHARACTER RECOGNITION", UnicodeBlock::OPTICAL_CHARACTER_RECOGNITION),
    ("OPTICALCHARACTERRECOGNITION", UnicodeBlock::OPTICAL_CHARACTER_RECOGNITION),
    ("OPTICAL_CHARACTER_RECOGNITION", UnicodeBlock::OPTICAL_CHARACTER_RECOGNITION),
    ("ORIYA", UnicodeBlock::ORIYA),
    ("ORNAMENTAL DINGBATS", UnicodeBlock::ORNAMENTAL_DINGBATS),
    ("ORNAMENTALDINGBATS", UnicodeBlock::ORNAMENTAL_DINGBATS),
    ("ORNAMENTAL_DINGBATS", UnicodeBlock::ORNAMENTAL_DINGBATS),
    ("OSAGE", UnicodeBlock::OSAGE),
    ("OSMANYA", UnicodeBlock::OSMANYA),
    ("OTTOMAN SIYAQ NUMBERS", UnicodeBlock::OTTOMAN_SIYAQ_NUMBERS),
    ("OTTOMANSIYAQNUMBERS", UnicodeBlock::OTTOMAN_SIYAQ_NUMBERS),
    ("OTTOMAN_SIYAQ_NUMBERS", UnicodeBlock::OTTOMAN_SIYAQ_NUMBERS),
    ("PAHAWH HMONG", UnicodeBlock::PAHAWH_HMONG),
    ("PAHAWHHMONG", UnicodeBlock::PAHAWH_HMONG),
    ("PAHAWH_HMONG", UnicodeBlock::PAHAWH_HMONG),
    ("PALMYRENE", UnicodeBlock::PALMYRENE),
    ("PAU CIN HAU", UnicodeBlock::PAU_CIN_HAU),
    ("PAUCINHAU", UnicodeBlock::PAU_CIN_HAU),
    ("PAU_CIN_HAU", UnicodeBlock::PAU_CIN_HAU),
    ("PHAGS-PA", UnicodeBlock::PHAGS_PA),
    ("PHAGS_PA", UnicodeBlock::PHAGS_PA),
    ("PHAISTOS DISC", UnicodeBlock::PHAISTOS_DISC),
    ("PHAISTOSDISC", UnicodeBlock::PHAISTOS_DISC),
    ("PHAISTOS_DISC", UnicodeBlock::PHAISTOS_DISC),
    ("PHOENICIAN", UnicodeBlock::PHOENICIAN),
    ("PHONETIC EXTENSIONS", UnicodeBlock::PHONETIC_EXTENSIONS),
    ("PHONETIC EXTENSIONS SUPPLEMENT", UnicodeBlock::PHONETIC_EXTENSIONS_SUPPLEMENT),
    ("PHONETICEXTENSIONS", UnicodeBlock::PHONETIC_EXTENSIONS),
    ("PHONETICEXTENSIONSSUPPLEMENT", UnicodeBlock::PHONETIC_EXTENSIONS_SUPPLEMENT),
    ("PHONETIC_EXTENSIONS", UnicodeBlock::PHONETIC_EXTENSIONS),
    ("PHONETIC_EXTENSIONS_SUPPLEMENT", UnicodeBlock::PHONETIC_EXTENSIONS_SUPPLEMENT),
    ("PLAYING CARDS", UnicodeBlock::PLAYING_CARDS),
    ("PLAYINGCARDS", UnicodeBlock::PLAYING_CARDS),
    ("PLAYING_CARDS", UnicodeBlock::PLAYING_CARDS),
    ("PRIVATE USE AREA", UnicodeBlock::PRIVATE_USE_AREA),
    ("PRIVATEUSEAREA", UnicodeBlock::PRIVATE_USE_AREA),
    ("PRIVATE_USE_AREA", UnicodeBlock::PRIVATE_USE_AREA),
    ("PSALTER PAHLAVI", UnicodeBlock::PSALTER_PAHLAVI),
    ("PSALTERPAHLAVI", UnicodeBlock::PSALTER_PAHLAVI),
    ("PSALTER_PAHLAVI", UnicodeBlock::PSALTER_PAHLAVI),
    ("REJANG", UnicodeBlock::REJANG),
    ("RUMI NUMERAL SYMBOLS", UnicodeBlock::RUMI_NUMERAL_SYMBOLS),
    ("RUMINUMERALSYMBOLS", UnicodeBlock::RUMI_NUMERAL_SYMBOLS),
    ("RUMI_NUMERAL_SYMBOLS", UnicodeBlock::RUMI_NUMERAL_SYMBOLS),
    ("RUNIC", UnicodeBlock::RUNIC),
    ("SAMARITAN", UnicodeBlock::SAMARITAN),
    ("SAURASHTRA", UnicodeBlock::SAURASHTRA),
    ("SHARADA", UnicodeBlock::SHARADA),
    ("SHAVIAN", UnicodeBlock::SHAVIAN),
    ("SHORTHAND FORMAT CONTROLS", UnicodeBlock::SHORTHAND_FORMAT_CONTROLS),
    ("SHORTHANDFORMATCONTROLS", UnicodeBlock::SHORTHAND_FORMAT_CONTROLS),
    ("SHORTHAND_FORMAT_CONTROLS", UnicodeBlock::SHORTHAND_FORMAT_CONTROLS),
    ("SIDDHAM", UnicodeBlock::SIDDHAM),
    ("SINHALA", UnicodeBlock::SINHALA),
    ("SINHALA ARCHAIC NUMBERS", UnicodeBlock::SINHALA_ARCHAIC_NUMBERS),
    ("SINHALAARCHAICNUMBERS", UnicodeBlock::SINHALA_ARCHAIC_NUMBERS),
    ("SINHALA_ARCHAIC_NUMBERS", UnicodeBlock::SINHALA_ARCHAIC_NUMBERS),
    ("SMALL FORM VARIANTS", UnicodeBlock::SMALL_FORM_VARIANTS),
    ("SMALL KANA EXTENSION", UnicodeBlock::SMALL_KANA_EXTENSION),
    ("SMALLFORMVARIANTS", UnicodeBlock::SMALL_FORM_VARIANTS),
    ("SMALLKANAEXTENSION", UnicodeBlock::SMALL_KANA_EXTENSION),
    ("SMALL_FORM_VARIANTS", UnicodeBlock::SMALL_FORM_VARIANTS),
    ("SMALL_KANA_EXTENSION", UnicodeBlock::SMALL_KANA_EXTENSION),
    ("SOGDIAN", UnicodeBlock::SOGDIAN),
    ("SORA SOMPENG", UnicodeBlock::SORA_SOMPENG),
    ("SORASOMPENG", UnicodeBlock::SORA_SOMPENG),
    ("SORA_SOMPENG", UnicodeBlock::SORA_SOMPENG),
    ("SOYOMBO", UnicodeBlock::SOYOMBO),
    ("SPACING MODIFIER LETTERS", UnicodeBlock::SPACING_MODIFIER_LETTERS),
    ("SPACINGMODIFIERLETTERS", UnicodeBlock::SPACING_MODIFIER_LETTERS),
    ("SPACING_MODIFIER_LETTERS", UnicodeBlock::SPACING_MODIFIER_LETTERS),
    ("SPECIALS", UnicodeBlock::SPECIALS),
    ("SUNDANESE", UnicodeBlock::SUNDANESE),
    ("SUNDANESE SUPPLEMENT", UnicodeBlock::SUNDANESE_SUPPLEMENT),
    ("SUNDANESESUPPLEMENT", UnicodeBlock::SUNDANESE_SUPPLEMENT),
    ("SUNDANESE_SUPPLEMENT", UnicodeBlock::SUNDANESE_SUPPLEMENT),
    ("SUPERSCRIPTS AND SUBSCRIPTS", UnicodeBlock::SUPERSCRIPTS_AND_SUBSCRIPTS),
    ("SUPERSCRIPTSANDSUBSCRIPTS", UnicodeBlock::SUPERSCRIPTS_AND_SUBSCRIPTS),
    ("SUPERSCRIPTS_AND_SUBSCRIPTS", UnicodeBlock::SUPERSCRIPTS_AND_SUBSCRIPTS),
    ("SUPPLEMENTAL ARROWS-A", UnicodeBlock::SUPPLEMENTAL_ARROWS_A),
    ("SUPPLEMENTAL ARROWS-B", UnicodeBlock::SUPPLEMENTAL_ARROWS_B),
    ("SUPPLEMENTAL ARROWS-C", UnicodeBlock::SUPPLEMENTAL_ARROWS_C),
    ("SUPPLEMENTAL MATHEMATICAL OPERATORS", UnicodeBlock::SUPPLEMENTAL_MATHEMATICAL_OPERATORS),
    ("SUPPLEMENTAL PUNCTUATION", UnicodeBlock::SUPPLEMENTAL_PUNCTUATION),
    ("SUPPLEMENTAL SYMBOLS AND PICTOGRAPHS", UnicodeBlock::SUPPLEMENTAL_SYMBOLS_AND_PICTOGRAPHS),
    ("SUPPLEMENTALARROWS-A", UnicodeBlock::SUPPLEMENTAL_ARROWS_A),
    ("SUPPLEMENTALARROWS-B", UnicodeBlock::SUPPLEMENTAL_ARROWS_B),
    ("SUPPLEMENTALARROWS-C", UnicodeBlock::SUPPLEMENTAL_ARROWS_C),
    ("SUPPLEMENTALMATHEMATICALOPERATORS", UnicodeBlock::SUPPLEMENTAL_MATHEMATICAL_OPERATORS),
    ("SUPPLEMENTALPUNCTUATION", UnicodeBlock::SUPPLEMENTAL_PUNCTUATION),
    ("SUPPLEMENTALSYMBOLSANDPICTOGRAPHS", UnicodeBlock::SUPPLEMENTAL_SYMBOLS_AND_PICTOGRAPHS),
    ("SUPPLEMENTAL_ARROWS_A", UnicodeBlock::SUPPLEMENTAL_ARROWS_A),
    ("SUPPLEMENTAL_ARROWS_B", UnicodeBlock::SUPPLEMENTAL_ARROWS_B),
    ("SUPPLEMENTAL_ARROWS_C", UnicodeBlock::SUPPLEMENTAL_ARROWS_C),
    ("SUPPLEMENTAL_MATHEMATICAL_OPERATORS", UnicodeBlock::SUPPLEMENTAL_MATHEMATICAL_OPERATORS),
    ("SUPPLEMENTAL_PUNCTUATION", UnicodeBlock::SUPPLEMENTAL_PUNCTUATION),
    ("SUPPLEMENTAL_SYMBOLS_AND_PICTOGRAPHS", UnicodeBlock::SUPPLEMENTAL_SYMBOLS_AND_PICTOGRAPHS),
    ("SUPPLEMENTARY PRIVATE USE AREA-A", UnicodeBlock::SUPPLEMENTARY_PRIVATE_USE_AREA_A),
    ("SUPPLEMENTARY PRIVATE USE AREA-B", UnicodeBlock::SUPPLEMENTARY_PRIVATE_USE_AREA_B),
    ("SUPPLEMENTARYPRIVATEUSEAREA-A", UnicodeBlock::SUPPLEMENTARY_PRIVATE_USE_AREA_A),
    ("SUPPLEMENTARYPRIVATEUSEAREA-B", UnicodeBlock::SUPPLEMENTARY_PRIVATE_USE_AREA_B),
    ("SUPPLEMENTARY_PRIVATE_USE_AREA_A", UnicodeBlock::SUPPLEMENTARY_PRIVATE_USE_AREA_A),
    ("SUPPLEMENTARY_PRIVATE_USE_AREA_B", UnicodeBlock::SUPPLEMENTARY_PRIVATE_USE_AREA_B),
    ("SURROGATES_AREA", UnicodeBlock::SURROGATES_AREA),
    ("SUTTON SIGNWRITING", UnicodeBlock::SUTTON_SIGNWRITING),
    ("SUTTONSIGNWRITING", UnicodeBlock::SUTTON_SIGNWRITING),
    ("SUTTON_SIGNWRITING", UnicodeBlock::SUTTON_SIGNWRITING),
    ("SYLOTI NAGRI", UnicodeBlock::SYLOTI_NAGRI),
    ("SYLOTINAGRI", UnicodeBlock::SYLOTI_NAGRI),
    ("SYLOTI_NAGRI", UnicodeBlock::SYLOTI_NAGRI),
    ("SYMBOLS AND PICTOGRAPHS EXTENDED-A", UnicodeBlock::SYMBOLS_AND_PICTOGRAPHS_EXTENDED_A),
    ("SYMBOLS FOR LEGACY COMPUTING", UnicodeBlock::SYMBOLS_FOR_LEGACY_COMPUTING),
    ("SYMBOLSANDPICTOGRAPHSEXTENDED-A", UnicodeBlock::SYMBOLS_AND_PICTOGRAPHS_EXTENDED_A),
    ("SYMBOLSFORLEGACYCOMPUTING", UnicodeBlock::SYMBOLS_FOR_LEGACY_COMPUTING),
    ("SYMBOLS_AND_PICTOGRAPHS_EXTENDED_A", UnicodeBlock::SYMBOLS_AND_PICTOGRAPHS_EXTENDED_A),
    ("SYMBOLS_FOR_LEGACY_COMPUTING", UnicodeBlock::SYMBOLS_FOR_LEGACY_COMPUTING),
    ("SYRIAC", UnicodeBlock::SYRIAC),
    ("SYRIAC SUPPLEMENT", UnicodeBlock::SYRIAC_SUPPLEMENT),
    ("SYRIACSUPPLEMENT", UnicodeBlock::SYRIAC_SUPPLEMENT),
    ("SYRIAC_SUPPLEMENT", UnicodeBlock::SYRIAC_SUPPLEMENT),
    ("TAGALOG", UnicodeBlock::TAGALOG),
    ("TAGBANWA", UnicodeBlock::TAGBANWA),
    ("TAGS", UnicodeBlock::TAGS),
    ("TAI LE", UnicodeBlock::TAI_LE),
    ("TAI THAM", UnicodeBlock::TAI_THAM),
    ("TAI VIET", UnicodeBlock::TAI_VIET),
    ("TAI XUAN JING SYMBOLS", UnicodeBlock::TAI_XUAN_JING_SYMBOLS),
    ("TAILE", UnicodeBlock::TAI_LE),
    ("TAITHAM", UnicodeBlock::TAI_THAM),
    ("TAIVIET", UnicodeBlock::TAI_VIET),
    ("TAIXUANJINGSYMBOLS", UnicodeBlock::TAI_XUAN_JING_SYMBOLS),
    ("TAI_LE", UnicodeBlock::TAI_LE),
    ("TAI_THAM", UnicodeBlock::TAI_THAM),
    ("TAI_VIET", UnicodeBlock::TAI_VIET),
    ("TAI_XUAN_JING_SYMBOLS", UnicodeBlock::TAI_XUAN_JING_SYMBOLS),
    ("TAKRI", UnicodeBlock::TAKRI),
    ("TAMIL", UnicodeBlock::TAMIL),
    ("TAMIL SUPPLEMENT", UnicodeBlock::TAMIL_SUPPLEMENT),
    ("TAMILSUPPLEMENT", UnicodeBlock::TAMIL_SUPPLEMENT),
    ("TAMIL_SUPPLEMENT", UnicodeBlock::TAMIL_SUPPLEMENT),
    ("TANGSA", UnicodeBlock::TANGSA),
    ("TANGUT", UnicodeBlock::TANGUT),
    ("TANGUT COMPONENTS", UnicodeBlock::TANGUT_COMPONENTS),
    ("TANGUT SUPPLEMENT", UnicodeBlock::TANGUT_SUPPLEMENT),
    ("TANGUTCOMPONENTS", UnicodeBlock::TANGUT_COMPONENTS),
    ("TANGUTSUPPLEMENT", UnicodeBlock::TANGUT_SUPPLEMENT),
    ("TANGUT_COMPONENTS", UnicodeBlock::TANGUT_COMPONENTS),
    ("TANGUT_SUPPLEMENT", UnicodeBlock::TANGUT_SUPPLEMENT),
    ("TELUGU", UnicodeBlock::TELUGU),
    ("THAANA", UnicodeBlock::THAANA),
    ("THAI", UnicodeBlock::THAI),
    ("TIBETAN", UnicodeBlock::TIBETAN),
    ("TIFINAGH", UnicodeBlock::TIFINAGH),
    ("TIRHUTA", UnicodeBlock::TIRHUTA),
    ("TOTO", UnicodeBlock::TOTO),
    ("TRANSPORT AND MAP SYMBOLS", UnicodeBlock::TRANSPORT_AND_MAP_SYMBOLS),
    ("TRANSPORTANDMAPSYMBOLS", UnicodeBlock::TRANSPORT_AND_MAP_SYMBOLS),
    ("TRANSPORT_AND_MAP_SYMBOLS", UnicodeBlock::TRANSPORT_AND_MAP_SYMBOLS),
    ("UGARITIC", UnicodeBlock::UGARITIC),
    ("UNIFIED CANADIAN ABORIGINAL SYLLABICS", UnicodeBlock::UNIFIED_CANADIAN_ABORIGINAL_SYLLABICS),
    ("UNIFIED CANADIAN ABORIGINAL SYLLABICS EXTENDED", UnicodeBlock::UNIFIED_CANADIAN_ABORIGINAL_SYLLABICS_EXTENDED),
    ("UNIFIED CANADIAN ABORIGINAL SYLLABICS EXTENDED-A", UnicodeBlock::UNIFIED_CANADIAN_ABORIGINAL_SYLLABICS_EXTENDED_A),
    ("UNIFIEDCANADIANABORIGINALSYLLABICS", UnicodeBlock::UNIFIED_CANADIAN_ABORIGINAL_SYLLABICS),
    ("UNIFIEDCANADIANABORIGINALSYLLABICSEXTENDED", UnicodeBlock::UNIFIED_CANADIAN_ABORIGINAL_SYLLABICS_EXTENDED),
    ("UNIFIEDCANADIANABORIGINALSYLLABICSEXTENDED-A", UnicodeBlock::UNIFIED_CANADIAN_ABORIGINAL_SYLLABICS_EXTENDED_A),
    ("UNIFIED_CANADIAN_ABORIGINAL_SYLLABICS", UnicodeBlock::UNIFIED_CANADIAN_ABORIGINAL_SYLLABICS),
    ("UNIFIED_CANADIAN_ABORIGINAL_SYLLABICS_EXTENDED", UnicodeBlock::UNIFIED_CANADIAN_ABORIGINAL_SYLLABICS_EXTENDED),
    ("UNIFIED_CANADIAN_ABORIGINAL_SYLLABICS_EXTENDED_A", UnicodeBlock::UNIFIED_CANADIAN_ABORIGINAL_SYLLABICS_EXTENDED_A),
    ("VAI", UnicodeBlock::VAI),
    ("VARIATION SELECTORS", UnicodeBlock::VARIATION_SELECTORS),
    ("VARIATION SELECTORS SUPPLEMENT", UnicodeBlock::VARIATION_SELECTORS_SUPPLEMENT),
    ("VARIATIONSELECTORS", UnicodeBlock::VARIATION_SELECTORS),
    ("VARIATIONSELECTORSSUPPLEMENT", UnicodeBlock::VARIATION_SELECTORS_SUPPLEMENT),
    ("VARIATION_SELECTORS", UnicodeBlock::VARIATION_SELECTORS),
    ("VARIATION_SELECTORS_SUPPLEMENT", UnicodeBlock::VARIATION_SELECTORS_SUPPLEMENT),
    ("VEDIC EXTENSIONS", UnicodeBlock::VEDIC_EXTENSIONS),
    ("VEDICEXTENSIONS", UnicodeBlock::VEDIC_EXTENSIONS),
    ("VEDIC_EXTENSIONS", UnicodeBlock::VEDIC_EXTENSIONS),
    ("VERTICAL FORMS", UnicodeBlock::VERTICAL_FORMS),
    ("VERTICALFORMS", UnicodeBlock::VERTICAL_FORMS),
    ("VERTICAL_FORMS", UnicodeBlock::VERTICAL_FORMS),
    ("VITHKUQI", UnicodeBlock::VITHKUQI),
    ("WANCHO", UnicodeBlock::WANCHO),
    ("WARANG CITI", UnicodeBlock::WARANG_CITI),
    ("WARANGCITI", UnicodeBlock::WARANG_CITI),
    ("WARANG_CITI", UnicodeBlock::WARANG_CITI),
    ("YEZIDI", UnicodeBlock::YEZIDI),
    ("YI RADICALS", UnicodeBlock::YI_RADICALS),
    ("YI SYLLABLES", UnicodeBlock::YI_SYLLABLES),
    ("YIJING HEXAGRAM SYMBOLS", UnicodeBlock::YIJING_HEXAGRAM_SYMBOLS),
    ("YIJINGHEXAGRAMSYMBOLS", UnicodeBlock::YIJING_HEXAGRAM_SYMBOLS),
    ("YIJING_HEXAGRAM_SYMBOLS", UnicodeBlock::YIJING_HEXAGRAM_SYMBOLS),
    ("YIRADICALS", UnicodeBlock::YI_RADICALS),
    ("YISYLLABLES", UnicodeBlock::YI_SYLLABLES),
    ("YI_RADICALS", UnicodeBlock::YI_RADICALS),
    ("YI_SYLLABLES", UnicodeBlock::YI_SYLLABLES),
    ("ZANABAZAR SQUARE", UnicodeBlock::ZANABAZAR_SQUARE),
    ("ZANABAZARSQUARE", UnicodeBlock::ZANABAZAR_SQUARE),
    ("ZANABAZAR_SQUARE", UnicodeBlock::ZANABAZAR_SQUARE),
    ("ZNAMENNY MUSICAL NOTATION", UnicodeBlock::ZNAMENNY_MUSICAL_NOTATION),
    ("ZNAMENNYMUSICALNOTATION", UnicodeBlock::ZNAMENNY_MUSICAL_NOTATION),
    ("ZNAMENNY_MUSICAL_NOTATION", UnicodeBlock::ZNAMENNY_MUSICAL_NOTATION),
];
