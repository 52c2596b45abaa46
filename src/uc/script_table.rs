// WARNING: this file was generated by scripts/gen-ucd-tables.py from the
// Unicode 14.0.0 character database. Do not edit it by hand.

#![allow(clippy::unreadable_literal)]

use super::script::UnicodeScript;

#[rustfmt::skip]
impl UnicodeScript {
    pub const COMMON: Self = Self(0);
    pub const LATIN: Self = Self(1);
    pub const BOPOMOFO: Self = Self(2);
    pub const INHERITED: Self = Self(3);
    pub const GREEK: Self = Self(4);
    pub const COPTIC: Self = Self(5);
    pub const CYRILLIC: Self = Self(6);
    pub const ARMENIAN: Self = Self(7);
    pub const HEBREW: Self = Self(8);
    pub const ARABIC: Self = Self(9);
    pub const SYRIAC: Self = Self(10);
    pub const THAANA: Self = Self(11);
    pub const NKO: Self = Self(12);
    pub const SAMARITAN: Self = Self(13);
    pub const MANDAIC: Self = Self(14);
    pub const DEVANAGARI: Self = Self(15);
    pub const BENGALI: Self = Self(16);
    pub const GURMUKHI: Self = Self(17);
    pub const GUJARATI: Self = Self(18);
    pub const ORIYA: Self = Self(19);
    pub const TAMIL: Self = Self(20);
    pub const TELUGU: Self = Self(21);
    pub const KANNADA: Self = Self(22);
    pub const MALAYALAM: Self = Self(23);
    pub const SINHALA: Self = Self(24);
    pub const THAI: Self = Self(25);
    pub const LAO: Self = Self(26);
    pub const TIBETAN: Self = Self(27);
    pub const MYANMAR: Self = Self(28);
    pub const GEORGIAN: Self = Self(29);
    pub const HANGUL: Self = Self(30);
    pub const ETHIOPIC: Self = Self(31);
    pub const CHEROKEE: Self = Self(32);
    pub const CANADIAN_ABORIGINAL: Self = Self(33);
    pub const OGHAM: Self = Self(34);
    pub const RUNIC: Self = Self(35);
    pub const TAGALOG: Self = Self(36);
    pub const HANUNOO: Self = Self(37);
    pub const BUHID: Self = Self(38);
    pub const TAGBANWA: Self = Self(39);
    pub const KHMER: Self = Self(40);
    pub const MONGOLIAN: Self = Self(41);
    pub const LIMBU: Self = Self(42);
    pub const TAI_LE: Self = Self(43);
    pub const NEW_TAI_LUE: Self = Self(44);
    pub const BUGINESE: Self = Self(45);
    pub const TAI_THAM: Self = Self(46);
    pub const BALINESE: Self = Self(47);
    pub const SUNDANESE: Self = Self(48);
    pub const BATAK: Self = Self(49);
    pub const LEPCHA: Self = Self(50);
    pub const OL_CHIKI: Self = Self(51);
    pub const BRAILLE: Self = Self(52);
    pub const GLAGOLITIC: Self = Self(53);
    pub const TIFINAGH: Self = Self(54);
    pub const HAN: Self = Self(55);
    pub const HIRAGANA: Self = Self(56);
    pub const KATAKANA: Self = Self(57);
    pub const YI: Self = Self(58);
    pub const LISU: Self = Self(59);
    pub const VAI: Self = Self(60);
    pub const BAMUM: Self = Self(61);
    pub const SYLOTI_NAGRI: Self = Self(62);
    pub const PHAGS_PA: Self = Self(63);
    pub const SAURASHTRA: Self = Self(64);
    pub const KAYAH_LI: Self = Self(65);
    pub const REJANG: Self = Self(66);
    pub const JAVANESE: Self = Self(67);
    pub const CHAM: Self = Self(68);
    pub const TAI_VIET: Self = Self(69);
    pub const MEETEI_MAYEK: Self = Self(70);
    pub const LINEAR_B: Self = Self(71);
    pub const LYCIAN: Self = Self(72);
    pub const CARIAN: Self = Self(73);
    pub const OLD_ITALIC: Self = Self(74);
    pub const GOTHIC: Self = Self(75);
    pub const OLD_PERMIC: Self = Self(76);
    pub const UGARITIC: Self = Self(77);
    pub const OLD_PERSIAN: Self = Self(78);
    pub const DESERET: Self = Self(79);
    pub const SHAVIAN: Self = Self(80);
    pub const OSMANYA: Self = Self(81);
    pub const OSAGE: Self = Self(82);
    pub const ELBASAN: Self = Self(83);
    pub const CAUCASIAN_ALBANIAN: Self = Self(84);
    pub const VITHKUQI: Self = Self(85);
    pub const LINEAR_A: Self = Self(86);
    pub const CYPRIOT: Self = Self(87);
    pub const IMPERIAL_ARAMAIC: Self = Self(88);
    pub const PALMYRENE: Self = Self(89);
    pub const NABATAEAN: Self = Self(90);
    pub const HATRAN: Self = Self(91);
    pub const PHOENICIAN: Self = Self(92);
    pub const LYDIAN: Self = Self(93);
    pub const MEROITIC_HIEROGLYPHS: Self = Self(94);
    pub const MEROITIC_CURSIVE: Self = Self(95);
    pub const KHAROSHTHI: Self = Self(96);
    pub const OLD_SOUTH_ARABIAN: Self = Self(97);
    pub const OLD_NORTH_ARABIAN: Self = Self(98);
    pub const MANICHAEAN: Self = Self(99);
    pub const AVESTAN: Self = Self(100);
    pub const INSCRIPTIONAL_PARTHIAN: Self = Self(101);
    pub const INSCRIPTIONAL_PAHLAVI: Self = Self(102);
    pub const PSALTER_PAHLAVI: Self = Self(103);
    pub const OLD_TURKIC: Self = Self(104);
    pub const OLD_HUNGARIAN: Self = Self(105);
    pub const HANIFI_ROHINGYA: Self = Self(106);
    pub const YEZIDI: Self = Self(107);
    pub const OLD_SOGDIAN: Self = Self(108);
    pub const SOGDIAN: Self = Self(109);
    pub const OLD_UYGHUR: Self = Self(110);
    pub const CHORASMIAN: Self = Self(111);
    pub const ELYMAIC: Self = Self(112);
    pub const BRAHMI: Self = Self(113);
    pub const KAITHI: Self = Self(114);
    pub const SORA_SOMPENG: Self = Self(115);
    pub const CHAKMA: Self = Self(116);
    pub const MAHAJANI: Self = Self(117);
    pub const SHARADA: Self = Self(118);
    pub const KHOJKI: Self = Self(119);
    pub const MULTANI: Self = Self(120);
    pub const KHUDAWADI: Self = Self(121);
    pub const GRANTHA: Self = Self(122);
    pub const NEWA: Self = Self(123);
    pub const TIRHUTA: Self = Self(124);
    pub const SIDDHAM: Self = Self(125);
    pub const MODI: Self = Self(126);
    pub const TAKRI: Self = Self(127);
    pub const AHOM: Self = Self(128);
    pub const DOGRA: Self = Self(129);
    pub const WARANG_CITI: Self = Self(130);
    pub const DIVES_AKURU: Self = Self(131);
    pub const NANDINAGARI: Self = Self(132);
    pub const ZANABAZAR_SQUARE: Self = Self(133);
    pub const SOYOMBO: Self = Self(134);
    pub const PAU_CIN_HAU: Self = Self(135);
    pub const BHAIKSUKI: Self = Self(136);
    pub const MARCHEN: Self = Self(137);
    pub const MASARAM_GONDI: Self = Self(138);
    pub const GUNJALA_GONDI: Self = Self(139);
    pub const MAKASAR: Self = Self(140);
    pub const CUNEIFORM: Self = Self(141);
    pub const CYPRO_MINOAN: Self = Self(142);
    pub const EGYPTIAN_HIEROGLYPHS: Self = Self(143);
    pub const ANATOLIAN_HIEROGLYPHS: Self = Self(144);
    pub const MRO: Self = Self(145);
    pub const TANGSA: Self = Self(146);
    pub const BASSA_VAH: Self = Self(147);
    pub const PAHAWH_HMONG: Self = Self(148);
    pub const MEDEFAIDRIN: Self = Self(149);
    pub const MIAO: Self = Self(150);
    pub const TANGUT: Self = Self(151);
    pub const NUSHU: Self = Self(152);
    pub const KHITAN_SMALL_SCRIPT: Self = Self(153);
    pub const DUPLOYAN: Self = Self(154);
    pub const SIGNWRITING: Self = Self(155);
    pub const NYIAKENG_PUACHUE_HMONG: Self = Self(156);
    pub const TOTO: Self = Self(157);
    pub const WANCHO: Self = Self(158);
    pub const MENDE_KIKAKUI: Self = Self(159);
    pub const ADLAM: Self = Self(160);
    pub const UNKNOWN: Self = Self(161);
}

#[rustfmt::skip]
pub static SCRIPT_NAMES: [(&str, &str); 162] = [
    ("COMMON", "Zyyy"),
    ("LATIN", "Latn"),
    ("BOPOMOFO", "Bopo"),
    ("INHERITED", "Zinh"),
    ("GREEK", "Grek"),
    ("COPTIC", "Copt"),
    ("CYRILLIC", "Cyrl"),
    ("ARMENIAN", "Armn"),
    ("HEBREW", "Hebr"),
    ("ARABIC", "Arab"),
    ("SYRIAC", "Syrc"),
    ("THAANA", "Thaa"),
    ("NKO", "Nkoo"),
    ("SAMARITAN", "Samr"),
    ("MANDAIC", "Mand"),
    ("DEVANAGARI", "Deva"),
    ("BENGALI", "Beng"),
    ("GURMUKHI", "Guru"),
    ("GUJARATI", "Gujr"),
    ("ORIYA", "Orya"),
    ("TAMIL", "Taml"),
    ("TELUGU", "Telu"),
    ("KANNADA", "Knda"),
    ("MALAYALAM", "Mlym"),
    ("SINHALA", "Sinh"),
    ("THAI", "Thai"),
    ("LAO", "Laoo"),
    ("TIBETAN", "Tibt"),
    ("MYANMAR", "Mymr"),
    ("GEORGIAN", "Geor"),
    ("HANGUL", "Hang"),
    ("ETHIOPIC", "Ethi"),
    ("CHEROKEE", "Cher"),
    ("CANADIAN_ABORIGINAL", "Cans"),
    ("OGHAM", "Ogam"),
    ("RUNIC", "Runr"),
    ("TAGALOG", "Tglg"),
    ("HANUNOO", "Hano"),
    ("BUHID", "Buhd"),
    ("TAGBANWA", "Tagb"),
    ("KHMER", "Khmr"),
    ("MONGOLIAN", "Mong"),
    ("LIMBU", "Limb"),
    ("TAI_LE", "Tale"),
    ("NEW_TAI_LUE", "Talu"),
    ("BUGINESE", "Bugi"),
    ("TAI_THAM", "Lana"),
    ("BALINESE", "Bali"),
    ("SUNDANESE", "Sund"),
    ("BATAK", "Batk"),
    ("LEPCHA", "Lepc"),
    ("OL_CHIKI", "Olck"),
    ("BRAILLE", "Brai"),
    ("GLAGOLITIC", "Glag"),
    ("TIFINAGH", "Tfng"),
    ("HAN", "Hani"),
    ("HIRAGANA", "Hira"),
    ("KATAKANA", "Kana"),
    ("YI", "Yiii"),
    ("LISU", "Lisu"),
    ("VAI", "Vaii"),
    ("BAMUM", "Bamu"),
    ("SYLOTI_NAGRI", "Sylo"),
    ("PHAGS_PA", "Phag"),
    ("SAURASHTRA", "Saur"),
    ("KAYAH_LI", "Kali"),
    ("REJANG", "Rjng"),
    ("JAVANESE", "Java"),
    ("CHAM", "Cham"),
    ("TAI_VIET", "Tavt"),
    ("MEETEI_MAYEK", "Mtei"),
    ("LINEAR_B", "Linb"),
    ("LYCIAN", "Lyci"),
    ("CARIAN", "Cari"),
    ("OLD_ITALIC", "Ital"),
    ("GOTHIC", "Goth"),
    ("OLD_PERMIC", "Perm"),
    ("UGARITIC", "Ugar"),
    ("OLD_PERSIAN", "Xpeo"),
    ("DESERET", "Dsrt"),
    ("SHAVIAN", "Shaw"),
    ("OSMANYA", "Osma"),
    ("OSAGE", "Osge"),
    ("ELBASAN", "Elba"),
    ("CAUCASIAN_ALBANIAN", "Aghb"),
    ("VITHKUQI", "Vith"),
    ("LINEAR_A", "Lina"),
    ("CYPRIOT", "Cprt"),
    ("IMPERIAL_ARAMAIC", "Armi"),
    ("PALMYRENE", "Palm"),
    ("NABATAEAN", "Nbat"),
    ("HATRAN", "Hatr"),
    ("PHOENICIAN", "Phnx"),
    ("LYDIAN", "Lydi"),
    ("MEROITIC_HIEROGLYPHS", "Mero"),
    ("MEROITIC_CURSIVE", "Merc"),
    ("KHAROSHTHI", "Khar"),
    ("OLD_SOUTH_ARABIAN", "Sarb"),
    ("OLD_NORTH_ARABIAN", "Narb"),
    ("MANICHAEAN", "Mani"),
    ("AVESTAN", "Avst"),
    ("INSCRIPTIONAL_PARTHIAN", "Prti"),
    ("INSCRIPTIONAL_PAHLAVI", "Phli"),
    ("PSALTER_PAHLAVI", "Phlp"),
    ("OLD_TURKIC", "Orkh"),
    ("OLD_HUNGARIAN", "Hung"),
    ("HANIFI_ROHINGYA", "Rohg"),
    ("YEZIDI", "Yezi"),
    ("OLD_SOGDIAN", "Sogo"),
    ("SOGDIAN", "Sogd"),
    ("OLD_UYGHUR", "Ougr"),
    ("CHORASMIAN", "Chrs"),
    ("ELYMAIC", "Elym"),
    ("BRAHMI", "Brah"),
    ("KAITHI", "Kthi"),
    ("SORA_SOMPENG", "Sora"),
    ("CHAKMA", "Cakm"),
    ("MAHAJANI", "Mahj"),
    ("SHARADA", "Shrd"),
    ("KHOJKI", "Khoj"),
    ("MULTANI", "Mult"),
    ("KHUDAWADI", "Sind"),
    ("GRANTHA", "Gran"),
    ("NEWA", "Newa"),
    ("TIRHUTA", "Tirh"),
    ("SIDDHAM", "Sidd"),
    ("MODI", "Modi"),
    ("TAKRI", "Takr"),
    ("AHOM", "Ahom"),
    ("DOGRA", "Dogr"),
    ("WARANG_CITI", "Wara"),
    ("DIVES_AKURU", "Diak"),
    ("NANDINAGARI", "Nand"),
    ("ZANABAZAR_SQUARE", "Zanb"),
    ("SOYOMBO", "Soyo"),
    ("PAU_CIN_HAU", "Pauc"),
    ("BHAIKSUKI", "Bhks"),
    ("MARCHEN", "Marc"),
    ("MASARAM_GONDI", "Gonm"),
    ("GUNJALA_GONDI", "Gong"),
    ("MAKASAR", "Maka"),
    ("CUNEIFORM", "Xsux"),
    ("CYPRO_MINOAN", "Cpmn"),
    ("EGYPTIAN_HIEROGLYPHS", "Egyp"),
    ("ANATOLIAN_HIEROGLYPHS", "Hluw"),
    ("MRO", "Mroo"),
    ("TANGSA", "Tnsa"),
    ("BASSA_VAH", "Bass"),
    ("PAHAWH_HMONG", "Hmng"),
    ("MEDEFAIDRIN", "Medf"),
    ("MIAO", "Plrd"),
    ("TANGUT", "Tang"),
    ("NUSHU", "Nshu"),
    ("KHITAN_SMALL_SCRIPT", "Kits"),
    ("DUPLOYAN", "Dupl"),
    ("SIGNWRITING", "Sgnw"),
    ("NYIAKENG_PUACHUE_HMONG", "Hmnp"),
    ("TOTO", "Toto"),
    ("WANCHO", "Wcho"),
    ("MENDE_KIKAKUI", "Mend"),
    ("ADLAM", "Adlm"),
    ("UNKNOWN", "Zzzz"),
];

#[rustfmt::skip]
pub static SCRIPT_STARTS: [u32; 1638] = [
    0x0000, // Common
    0x0041, // Latin
    0x005B, // Common
    0x0061, // Latin
    0x007B, // Common
    0x00AA, // Latin
    0x00AB, // Common
    0x00BA, // Latin
    0x00BB, // Common
    0x00C0, // Latin
    0x00D7, // Common
    0x00D8, // Latin
    0x00F7, // Common
    0x00F8, // Latin
    0x02B9, // Common
    0x02E0, // Latin
    0x02E5, // Common
    0x02EA, // Bopomofo
    0x02EC, // Common
    0x0300, // Inherited
    0x0370, // Greek
    0x0374, // Common
    0x0375, // Greek
    0x0378, // Unknown
    0x037A, // Greek
    0x037E, // Common
    0x037F, // Greek
    0x0380, // Unknown
    0x0384, // Greek
    0x0385, // Common
    0x0386, // Greek
    0x0387, // Common
    0x0388, // Greek
    0x038B, // Unknown
    0x038C, // Greek
    0x038D, // Unknown
    0x038E, // Greek
    0x03A2, // Unknown
    0x03A3, // Greek
    0x03E2, // Coptic
    0x03F0, // Greek
    0x0400, // Cyrillic
    0x0485, // Inherited
    0x0487, // Cyrillic
    0x0530, // Unknown
    0x0531, // Armenian
    0x0557, // Unknown
    0x0559, // Armenian
    0x058B, // Unknown
    0x058D, // Armenian
    0x0590, // Unknown
    0x0591, // Hebrew
    0x05C8, // Unknown
    0x05D0, // Hebrew
    0x05EB, // Unknown
    0x05EF, // Hebrew
    0x05F5, // Unknown
    0x0600, // Arabic
    0x0605, // Common
    0x0606, // Arabic
    0x060C, // Common
    0x060D, // Arabic
    0x061B, // Common
    0x061C, // Arabic
    0x061F, // Common
    0x0620, // Arabic
    0x0640, // Common
    0x0641, // Arabic
    0x064B, // Inherited
    0x0656, // Arabic
    0x0670, // Inherited
    0x0671, // Arabic
    0x06DD, // Common
    0x06DE, // Arabic
    0x0700, // Syriac
    0x070E, // Unknown
    0x070F, // Syriac
    0x074B, // Unknown
    0x074D, // Syriac
    0x0750, // Arabic
    0x0780, // Thaana
    0x07B2, // Unknown
    0x07C0, // Nko
    0x07FB, // Unknown
    0x07FD, // Nko
    0x0800, // Samaritan
    0x082E, // Unknown
    0x0830, // Samaritan
    0x083F, // Unknown
    0x0840, // Mandaic
    0x085C, // Unknown
    0x085E, // Mandaic
    0x085F, // Unknown
    0x0860, // Syriac
    0x086B, // Unknown
    0x0870, // Arabic
    0x088F, // Unknown
    0x0890, // Arabic
    0x0892, // Unknown
    0x0898, // Arabic
    0x08E2, // Common
    0x08E3, // Arabic
    0x0900, // Devanagari
    0x0951, // Inherited
    0x0955, // Devanagari
    0x0964, // Common
    0x0966, // Devanagari
    0x0980, // Bengali
    0x0984, // Unknown
    0x0985, // Bengali
    0x098D, // Unknown
    0x098F, // Bengali
    0x0991, // Unknown
    0x0993, // Bengali
    0x09A9, // Unknown
    0x09AA, // Bengali
    0x09B1, // Unknown
    0x09B2, // Bengali
    0x09B3, // Unknown
    0x09B6, // Bengali
    0x09BA, // Unknown
    0x09BC, // Bengali
    0x09C5, // Unknown
    0x09C7, // Bengali
    0x09C9, // Unknown
    0x09CB, // Bengali
    0x09CF, // Unknown
    0x09D7, // Bengali
    0x09D8, // Unknown
    0x09DC, // Bengali
    0x09DE, // Unknown
    0x09DF, // Bengali
    0x09E4, // Unknown
    0x09E6, // Bengali
    0x09FF, // Unknown
    0x0A01, // Gurmukhi
    0x0A04, // Unknown
    0x0A05, // Gurmukhi
    0x0A0B, // Unknown
    0x0A0F, // Gurmukhi
    0x0A11, // Unknown
    0x0A13, // Gurmukhi
    0x0A29, // Unknown
    0x0A2A, // Gurmukhi
    0x0A31, // Unknown
    0x0A32, // Gurmukhi
    0x0A34, // Unknown
    0x0A35, // Gurmukhi
    0x0A37, // Unknown
    0x0A38, // Gurmukhi
    0x0A3A, // Unknown
    0x0A3C, // Gurmukhi
    0x0A3D, // Unknown
    0x0A3E, // Gurmukhi
    0x0A43, // Unknown
    0x0A47, // Gurmukhi
    0x0A49, // Unknown
    0x0A4B, // Gurmukhi
    0x0A4E, // Unknown
    0x0A51, // Gurmukhi
    0x0A52, // Unknown
    0x0A59, // Gurmukhi
    0x0A5D, // Unknown
    0x0A5E, // Gurmukhi
    0x0A5F, // Unknown
    0x0A66, // Gurmukhi
    0x0A77, // Unknown
    0x0A81, // Gujarati
    0x0A84, // Unknown
    0x0A85, // Gujarati
    0x0A8E, // Unknown
    0x0A8F, // Gujarati
    0x0A92, // Unknown
    0x0A93, // Gujarati
    0x0AA9, // Unknown
    0x0AAA, // Gujarati
    0x0AB1, // Unknown
    0x0AB2, // Gujarati
    0x0AB4, // Unknown
    0x0AB5, // Gujarati
    0x0ABA, // Unknown
    0x0ABC, // Gujarati
    0x0AC6, // Unknown
    0x0AC7, // Gujarati
    0x0ACA, // Unknown
    0x0ACB, // Gujarati
    0x0ACE, // Unknown
    0x0AD0, // Gujarati
    0x0AD1, // Unknown
    0x0AE0, // Gujarati
    0x0AE4, // Unknown
    0x0AE6, // Gujarati
    0x0AF2, // Unknown
    0x0AF9, // Gujarati
    0x0B00, // Unknown
    0x0B01, // Oriya
    0x0B04, // Unknown
    0x0B05, // Oriya
    0x0B0D, // Unknown
    0x0B0F, // Oriya
    0x0B11, // Unknown
    0x0B13, // Oriya
    0x0B29, // Unknown
    0x0B2A, // Oriya
    0x0B31, // Unknown
    0x0B32, // Oriya
    0x0B34, // Unknown
    0x0B35, // Oriya
    0x0B3A, // Unknown
    0x0B3C, // Oriya
    0x0B45, // Unknown
    0x0B47, // Oriya
    0x0B49, // Unknown
    0x0B4B, // Oriya
    0x0B4E, // Unknown
    0x0B55, // Oriya
    0x0B58, // Unknown
    0x0B5C, // Oriya
    0x0B5E, // Unknown
    0x0B5F, // Oriya
    0x0B64, // Unknown
    0x0B66, // Oriya
    0x0B78, // Unknown
    0x0B82, // Tamil
    0x0B84, // Unknown
    0x0B85, // Tamil
    0x0B8B, // Unknown
    0x0B8E, // Tamil
    0x0B91, // Unknown
    0x0B92, // Tamil
    0x0B96, // Unknown
    0x0B99, // Tamil
    0x0B9B, // Unknown
    0x0B9C, // Tamil
    0x0B9D, // Unknown
    0x0B9E, // Tamil
    0x0BA0, // Unknown
    0x0BA3, // Tamil
    0x0BA5, // Unknown
    0x0BA8, // Tamil
    0x0BAB, // Unknown
    0x0BAE, // Tamil
    0x0BBA, // Unknown
    0x0BBE, // Tamil
    0x0BC3, // Unknown
    0x0BC6, // Tamil
    0x0BC9, // Unknown
    0x0BCA, // Tamil
    0x0BCE, // Unknown
    0x0BD0, // Tamil
    0x0BD1, // Unknown
    0x0BD7, // Tamil
    0x0BD8, // Unknown
    0x0BE6, // Tamil
    0x0BFB, // Unknown
    0x0C00, // Telugu
    0x0C0D, // Unknown
    0x0C0E, // Telugu
    0x0C11, // Unknown
    0x0C12, // Telugu
    0x0C29, // Unknown
    0x0C2A, // Telugu
    0x0C3A, // Unknown
    0x0C3C, // Telugu
    0x0C45, // Unknown
    0x0C46, // Telugu
    0x0C49, // Unknown
    0x0C4A, // Telugu
    0x0C4E, // Unknown
    0x0C55, // Telugu
    0x0C57, // Unknown
    0x0C58, // Telugu
    0x0C5B, // Unknown
    0x0C5D, // Telugu
    0x0C5E, // Unknown
    0x0C60, // Telugu
    0x0C64, // Unknown
    0x0C66, // Telugu
    0x0C70, // Unknown
    0x0C77, // Telugu
    0x0C80, // Kannada
    0x0C8D, // Unknown
    0x0C8E, // Kannada
    0x0C91, // Unknown
    0x0C92, // Kannada
    0x0CA9, // Unknown
    0x0CAA, // Kannada
    0x0CB4, // Unknown
    0x0CB5, // Kannada
    0x0CBA, // Unknown
    0x0CBC, // Kannada
    0x0CC5, // Unknown
    0x0CC6, // Kannada
    0x0CC9, // Unknown
    0x0CCA, // Kannada
    0x0CCE, // Unknown
    0x0CD5, // Kannada
    0x0CD7, // Unknown
    0x0CDD, // Kannada
    0x0CDF, // Unknown
    0x0CE0, // Kannada
    0x0CE4, // Unknown
    0x0CE6, // Kannada
    0x0CF0, // Unknown
    0x0CF1, // Kannada
    0x0CF3, // Unknown
    0x0D00, // Malayalam
    0x0D0D, // Unknown
    0x0D0E, // Malayalam
    0x0D11, // Unknown
    0x0D12, // Malayalam
    0x0D45, // Unknown
    0x0D46, // Malayalam
    0x0D49, // Unknown
    0x0D4A, // Malayalam
    0x0D50, // Unknown
    0x0D54, // Malayalam
    0x0D64, // Unknown
    0x0D66, // Malayalam
    0x0D80, // Unknown
    0x0D81, // Sinhala
    0x0D84, // Unknown
    0x0D85, // Sinhala
    0x0D97, // Unknown
    0x0D9A, // Sinhala
    0x0DB2, // Unknown
    0x0DB3, // Sinhala
    0x0DBC, // Unknown
    0x0DBD, // Sinhala
    0x0DBE, // Unknown
    0x0DC0, // Sinhala
    0x0DC7, // Unknown
    0x0DCA, // Sinhala
    0x0DCB, // Unknown
    0x0DCF, // Sinhala
    0x0DD5, // Unknown
    0x0DD6, // Sinhala
    0x0DD7, // Unknown
    0x0DD8, // Sinhala
    0x0DE0, // Unknown
    0x0DE6, // Sinhala
    0x0DF0, // Unknown
    0x0DF2, // Sinhala
    0x0DF5, // Unknown
    0x0E01, // Thai
    0x0E3B, // Unknown
    0x0E3F, // Common
    0x0E40, // Thai
    0x0E5C, // Unknown
    0x0E81, // Lao
    0x0E83, // Unknown
    0x0E84, // Lao
    0x0E85, // Unknown
    0x0E86, // Lao
    0x0E8B, // Unknown
    0x0E8C, // Lao
    0x0EA4, // Unknown
    0x0EA5, // Lao
    0x0EA6, // Unknown
    0x0EA7, // Lao
    0x0EBE, // Unknown
    0x0EC0, // Lao
    0x0EC5, // Unknown
    0x0EC6, // Lao
    0x0EC7, // Unknown
    0x0EC8, // Lao
    0x0ECE, // Unknown
    0x0ED0, // Lao
    0x0EDA, // Unknown
    0x0EDC, // Lao
    0x0EE0, // Unknown
    0x0F00, // Tibetan
    0x0F48, // Unknown
    0x0F49, // Tibetan
    0x0F6D, // Unknown
    0x0F71, // Tibetan
    0x0F98, // Unknown
    0x0F99, // Tibetan
    0x0FBD, // Unknown
    0x0FBE, // Tibetan
    0x0FCD, // Unknown
    0x0FCE, // Tibetan
    0x0FD5, // Common
    0x0FD9, // Tibetan
    0x0FDB, // Unknown
    0x1000, // Myanmar
    0x10A0, // Georgian
    0x10C6, // Unknown
    0x10C7, // Georgian
    0x10C8, // Unknown
    0x10CD, // Georgian
    0x10CE, // Unknown
    0x10D0, // Georgian
    0x10FB, // Common
    0x10FC, // Georgian
    0x1100, // Hangul
    0x1200, // Ethiopic
    0x1249, // Unknown
    0x124A, // Ethiopic
    0x124E, // Unknown
    0x1250, // Ethiopic
    0x1257, // Unknown
    0x1258, // Ethiopic
    0x1259, // Unknown
    0x125A, // Ethiopic
    0x125E, // Unknown
    0x1260, // Ethiopic
    0x1289, // Unknown
    0x128A, // Ethiopic
    0x128E, // Unknown
    0x1290, // Ethiopic
    0x12B1, // Unknown
    0x12B2, // Ethiopic
    0x12B6, // Unknown
    0x12B8, // Ethiopic
    0x12BF, // Unknown
    0x12C0, // Ethiopic
    0x12C1, // Unknown
    0x12C2, // Ethiopic
    0x12C6, // Unknown
    0x12C8, // Ethiopic
    0x12D7, // Unknown
    0x12D8, // Ethiopic
    0x1311, // Unknown
    0x1312, // Ethiopic
    0x1316, // Unknown
    0x1318, // Ethiopic
    0x135B, // Unknown
    0x135D, // Ethiopic
    0x137D, // Unknown
    0x1380, // Ethiopic
    0x139A, // Unknown
    0x13A0, // Cherokee
    0x13F6, // Unknown
    0x13F8, // Cherokee
    0x13FE, // Unknown
    0x1400, // Canadian_Aboriginal
    0x1680, // Ogham
    0x169D, // Unknown
    0x16A0, // Runic
    0x16EB, // Common
    0x16EE, // Runic
    0x16F9, // Unknown
    0x1700, // Tagalog
    0x1716, // Unknown
    0x171F, // Tagalog
    0x1720, // Hanunoo
    0x1735, // Common
    0x1737, // Unknown
    0x1740, // Buhid
    0x1754, // Unknown
    0x1760, // Tagbanwa
    0x176D, // Unknown
    0x176E, // Tagbanwa
    0x1771, // Unknown
    0x1772, // Tagbanwa
    0x1774, // Unknown
    0x1780, // Khmer
    0x17DE, // Unknown
    0x17E0, // Khmer
    0x17EA, // Unknown
    0x17F0, // Khmer
    0x17FA, // Unknown
    0x1800, // Mongolian
    0x1802, // Common
    0x1804, // Mongolian
    0x1805, // Common
    0x1806, // Mongolian
    0x181A, // Unknown
    0x1820, // Mongolian
    0x1879, // Unknown
    0x1880, // Mongolian
    0x18AB, // Unknown
    0x18B0, // Canadian_Aboriginal
    0x18F6, // Unknown
    0x1900, // Limbu
    0x191F, // Unknown
    0x1920, // Limbu
    0x192C, // Unknown
    0x1930, // Limbu
    0x193C, // Unknown
    0x1940, // Limbu
    0x1941, // Unknown
    0x1944, // Limbu
    0x1950, // Tai_Le
    0x196E, // Unknown
    0x1970, // Tai_Le
    0x1975, // Unknown
    0x1980, // New_Tai_Lue
    0x19AC, // Unknown
    0x19B0, // New_Tai_Lue
    0x19CA, // Unknown
    0x19D0, // New_Tai_Lue
    0x19DB, // Unknown
    0x19DE, // New_Tai_Lue
    0x19E0, // Khmer
    0x1A00, // Buginese
    0x1A1C, // Unknown
    0x1A1E, // Buginese
    0x1A20, // Tai_Tham
    0x1A5F, // Unknown
    0x1A60, // Tai_Tham
    0x1A7D, // Unknown
    0x1A7F, // Tai_Tham
    0x1A8A, // Unknown
    0x1A90, // Tai_Tham
    0x1A9A, // Unknown
    0x1AA0, // Tai_Tham
    0x1AAE, // Unknown
    0x1AB0, // Inherited
    0x1ACF, // Unknown
    0x1B00, // Balinese
    0x1B4D, // Unknown
    0x1B50, // Balinese
    0x1B7F, // Unknown
    0x1B80, // Sundanese
    0x1BC0, // Batak
    0x1BF4, // Unknown
    0x1BFC, // Batak
    0x1C00, // Lepcha
    0x1C38, // Unknown
    0x1C3B, // Lepcha
    0x1C4A, // Unknown
    0x1C4D, // Lepcha
    0x1C50, // Ol_Chiki
    0x1C80, // Cyrillic
    0x1C89, // Unknown
    0x1C90, // Georgian
    0x1CBB, // Unknown
    0x1CBD, // Georgian
    0x1CC0, // Sundanese
    0x1CC8, // Unknown
    0x1CD0, // Inherited
    0x1CD3, // Common
    0x1CD4, // Inherited
    0x1CE1, // Common
    0x1CE2, // Inherited
    0x1CE9, // Common
    0x1CED, // Inherited
    0x1CEE, // Common
    0x1CF4, // Inherited
    0x1CF5, // Common
    0x1CF8, // Inherited
    0x1CFA, // Common
    0x1CFB, // Unknown
    0x1D00, // Latin
    0x1D26, // Greek
    0x1D2B, // Cyrillic
    0x1D2C, // Latin
    0x1D5D, // Greek
    0x1D62, // Latin
    0x1D66, // Greek
    0x1D6B, // Latin
    0x1D78, // Cyrillic
    0x1D79, // Latin
    0x1DBF, // Greek
    0x1DC0, // Inherited
    0x1E00, // Latin
    0x1F00, // Greek
    0x1F16, // Unknown
    0x1F18, // Greek
    0x1F1E, // Unknown
    0x1F20, // Greek
    0x1F46, // Unknown
    0x1F48, // Greek
    0x1F4E, // Unknown
    0x1F50, // Greek
    0x1F58, // Unknown
    0x1F59, // Greek
    0x1F5A, // Unknown
    0x1F5B, // Greek
    0x1F5C, // Unknown
    0x1F5D, // Greek
    0x1F5E, // Unknown
    0x1F5F, // Greek
    0x1F7E, // Unknown
    0x1F80, // Greek
    0x1FB5, // Unknown
    0x1FB6, // Greek
    0x1FC5, // Unknown
    0x1FC6, // Greek
    0x1FD4, // Unknown
    0x1FD6, // Greek
    0x1FDC, // Unknown
    0x1FDD, // Greek
    0x1FF0, // Unknown
    0x1FF2, // Greek
    0x1FF5, // Unknown
    0x1FF6, // Greek
    0x1FFF, // Unknown
    0x2000, // Common
    0x200C, // Inherited
    0x200E, // Common
    0x2065, // Unknown
    0x2066, // Common
    0x2071, // Latin
    0x2072, // Unknown
    0x2074, // Common
    0x207F, // Latin
    0x2080, // Common
    0x208F, // Unknown
    0x2090, // Latin
    0x209D, // Unknown
    0x20A0, // Common
    0x20C1, // Unknown
    0x20D0, // Inherited
    0x20F1, // Unknown
    0x2100, // Common
    0x2126, // Greek
    0x2127, // Common
    0x212A, // Latin
    0x212C, // Common
    0x2132, // Latin
    0x2133, // Common
    0x214E, // Latin
    0x214F, // Common
    0x2160, // Latin
    0x2189, // Common
    0x218C, // Unknown
    0x2190, // Common
    0x2427, // Unknown
    0x2440, // Common
    0x244B, // Unknown
    0x2460, // Common
    0x2800, // Braille
    0x2900, // Common
    0x2B74, // Unknown
    0x2B76, // Common
    0x2B96, // Unknown
    0x2B97, // Common
    0x2C00, // Glagolitic
    0x2C60, // Latin
    0x2C80, // Coptic
    0x2CF4, // Unknown
    0x2CF9, // Coptic
    0x2D00, // Georgian
    0x2D26, // Unknown
    0x2D27, // Georgian
    0x2D28, // Unknown
    0x2D2D, // Georgian
    0x2D2E, // Unknown
    0x2D30, // Tifinagh
    0x2D68, // Unknown
    0x2D6F, // Tifinagh
    0x2D71, // Unknown
    0x2D7F, // Tifinagh
    0x2D80, // Ethiopic
    0x2D97, // Unknown
    0x2DA0, // Ethiopic
    0x2DA7, // Unknown
    0x2DA8, // Ethiopic
    0x2DAF, // Unknown
    0x2DB0, // Ethiopic
    0x2DB7, // Unknown
    0x2DB8, // Ethiopic
    0x2DBF, // Unknown
    0x2DC0, // Ethiopic
    0x2DC7, // Unknown
    0x2DC8, // Ethiopic
    0x2DCF, // Unknown
    0x2DD0, // Ethiopic
    0x2DD7, // Unknown
    0x2DD8, // Ethiopic
    0x2DDF, // Unknown
    0x2DE0, // Cyrillic
    0x2E00, // Common
    0x2E5E, // Unknown
    0x2E80, // Han
    0x2E9A, // Unknown
    0x2E9B, // Han
    0x2EF4, // Unknown
    0x2F00, // Han
    0x2FD6, // Unknown
    0x2FF0, // Common
    0x2FFC, // Unknown
    0x3000, // Common
    0x3005, // Han
    0x3006, // Common
    0x3007, // Han
    0x3008, // Common
    0x3021, // Han
    0x302A, // Inherited
    0x302E, // Hangul
    0x3030, // Common
    0x3038, // Han
    0x303C, // Common
    0x3040, // Unknown
    0x3041, // Hiragana
    0x3097, // Unknown
    0x3099, // Inherited
    0x309B, // Common
    0x309D, // Hiragana
    0x30A0, // Common
    0x30A1, // Katakana
    0x30FB, // Common
    0x30FD, // Katakana
    0x3100, // Unknown
    0x3105, // Bopomofo
    0x3130, // Unknown
    0x3131, // Hangul
    0x318F, // Unknown
    0x3190, // Common
    0x31A0, // Bopomofo
    0x31C0, // Common
    0x31E4, // Unknown
    0x31F0, // Katakana
    0x3200, // Hangul
    0x321F, // Unknown
    0x3220, // Common
    0x3260, // Hangul
    0x327F, // Common
    0x32D0, // Katakana
    0x32FF, // Common
    0x3300, // Katakana
    0x3358, // Common
    0x3400, // Han
    0x4DC0, // Common
    0x4E00, // Han
    0xA000, // Yi
    0xA48D, // Unknown
    0xA490, // Yi
    0xA4C7, // Unknown
    0xA4D0, // Lisu
    0xA500, // Vai
    0xA62C, // Unknown
    0xA640, // Cyrillic
    0xA6A0, // Bamum
    0xA6F8, // Unknown
    0xA700, // Common
    0xA722, // Latin
    0xA788, // Common
    0xA78B, // Latin
    0xA7CB, // Unknown
    0xA7D0, // Latin
    0xA7D2, // Unknown
    0xA7D3, // Latin
    0xA7D4, // Unknown
    0xA7D5, // Latin
    0xA7DA, // Unknown
    0xA7F2, // Latin
    0xA800, // Syloti_Nagri
    0xA82D, // Unknown
    0xA830, // Common
    0xA83A, // Unknown
    0xA840, // Phags_Pa
    0xA878, // Unknown
    0xA880, // Saurashtra
    0xA8C6, // Unknown
    0xA8CE, // Saurashtra
    0xA8DA, // Unknown
    0xA8E0, // Devanagari
    0xA900, // Kayah_Li
    0xA92E, // Common
    0xA92F, // Kayah_Li
    0xA930, // Rejang
    0xA954, // Unknown
    0xA95F, // Rejang
    0xA960, // Hangul
    0xA97D, // Unknown
    0xA980, // Javanese
    0xA9CE, // Unknown
    0xA9CF, // Common
    0xA9D0, // Javanese
    0xA9DA, // Unknown
    0xA9DE, // Javanese
    0xA9E0, // Myanmar
    0xA9FF, // Unknown
    0xAA00, // Cham
    0xAA37, // Unknown
    0xAA40, // Cham
    0xAA4E, // Unknown
    0xAA50, // Cham
    0xAA5A, // Unknown
    0xAA5C, // Cham
    0xAA60, // Myanmar
    0xAA80, // Tai_Viet
    0xAAC3, // Unknown
    0xAADB, // Tai_Viet
    0xAAE0, // Meetei_Mayek
    0xAAF7, // Unknown
    0xAB01, // Ethiopic
    0xAB07, // Unknown
    0xAB09, // Ethiopic
    0xAB0F, // Unknown
    0xAB11, // Ethiopic
    0xAB17, // Unknown
    0xAB20, // Ethiopic
    0xAB27, // Unknown
    0xAB28, // Ethiopic
    0xAB2F, // Unknown
    0xAB30, // Latin
    0xAB5B, // Common
    0xAB5C, // Latin
    0xAB65, // Greek
    0xAB66, // Latin
    0xAB6A, // Common
    0xAB6C, // Unknown
    0xAB70, // Cherokee
    0xABC0, // Meetei_Mayek
    0xABEE, // Unknown
    0xABF0, // Meetei_Mayek
    0xABFA, // Unknown
    0xAC00, // Hangul
    0xD7A4, // Unknown
    0xD7B0, // Hangul
    0xD7C7, // Unknown
    0xD7CB, // Hangul
    0xD7FC, // Unknown
    0xF900, // Han
    0xFA6E, // Unknown
    0xFA70, // Han
    0xFADA, // Unknown
    0xFB00, // Latin
    0xFB07, // Unknown
    0xFB13, // Armenian
    0xFB18, // Unknown
    0xFB1D, // Hebrew
    0xFB37, // Unknown
    0xFB38, // Hebrew
    0xFB3D, // Unknown
    0xFB3E, // Hebrew
    0xFB3F, // Unknown
    0xFB40, // Hebrew
    0xFB42, // Unknown
    0xFB43, // Hebrew
    0xFB45, // Unknown
    0xFB46, // Hebrew
    0xFB50, // Arabic
    0xFBC3, // Unknown
    0xFBD3, // Arabic
    0xFD3E, // Common
    0xFD40, // Arabic
    0xFD90, // Unknown
    0xFD92, // Arabic
    0xFDC8, // Unknown
    0xFDCF, // Arabic
    0xFDD0, // Unknown
    0xFDF0, // Arabic
    0xFE00, // Inherited
    0xFE10, // Common
    0xFE1A, // Unknown
    0xFE20, // Inherited
    0xFE2E, // Cyrillic
    0xFE30, // Common
    0xFE53, // Unknown
    0xFE54, // Common
    0xFE67, // Unknown
    0xFE68, // Common
    0xFE6C, // Unknown
    0xFE70, // Arabic
    0xFE75, // Unknown
    0xFE76, // Arabic
    0xFEFD, // Unknown
    0xFEFF, // Common
    0xFF00, // Unknown
    0xFF01, // Common
    0xFF21, // Latin
    0xFF3B, // Common
    0xFF41, // Latin
    0xFF5B, // Common
    0xFF66, // Katakana
    0xFF70, // Common
    0xFF71, // Katakana
    0xFF9E, // Common
    0xFFA0, // Hangul
    0xFFBF, // Unknown
    0xFFC2, // Hangul
    0xFFC8, // Unknown
    0xFFCA, // Hangul
    0xFFD0, // Unknown
    0xFFD2, // Hangul
    0xFFD8, // Unknown
    0xFFDA, // Hangul
    0xFFDD, // Unknown
    0xFFE0, // Common
    0xFFE7, // Unknown
    0xFFE8, // Common
    0xFFEF, // Unknown
    0xFFF9, // Common
    0xFFFE, // Unknown
    0x10000, // Linear_B
    0x1000C, // Unknown
    0x1000D, // Linear_B
    0x10027, // Unknown
    0x10028, // Linear_B
    0x1003B, // Unknown
    0x1003C, // Linear_B
    0x1003E, // Unknown
    0x1003F, // Linear_B
    0x1004E, // Unknown
    0x10050, // Linear_B
    0x1005E, // Unknown
    0x10080, // Linear_B
    0x100FB, // Unknown
    0x10100, // Common
    0x10103, // Unknown
    0x10107, // Common
    0x10134, // Unknown
    0x10137, // Common
    0x10140, // Greek
    0x1018F, // Unknown
    0x10190, // Common
    0x1019D, // Unknown
    0x101A0, // Greek
    0x101A1, // Unknown
    0x101D0, // Common
    0x101FD, // Inherited
    0x101FE, // Unknown
    0x10280, // Lycian
    0x1029D, // Unknown
    0x102A0, // Carian
    0x102D1, // Unknown
    0x102E0, // Inherited
    0x102E1, // Common
    0x102FC, // Unknown
    0x10300, // Old_Italic
    0x10324, // Unknown
    0x1032D, // Old_Italic
    0x10330, // Gothic
    0x1034B, // Unknown
    0x10350, // Old_Permic
    0x1037B, // Unknown
    0x10380, // Ugaritic
    0x1039E, // Unknown
    0x1039F, // Ugaritic
    0x103A0, // Old_Persian
    0x103C4, // Unknown
    0x103C8, // Old_Persian
    0x103D6, // Unknown
    0x10400, // Deseret
    0x10450, // Shavian
    0x10480, // Osmanya
    0x1049E, // Unknown
    0x104A0, // Osmanya
    0x104AA, // Unknown
    0x104B0, // Osage
    0x104D4, // Unknown
    0x104D8, // Osage
    0x104FC, // Unknown
    0x10500, // Elbasan
    0x10528, // Unknown
    0x10530, // Caucasian_Albanian
    0x10564, // Unknown
    0x1056F, // Caucasian_Albanian
    0x10570, // Vithkuqi
    0x1057B, // Unknown
    0x1057C, // Vithkuqi
    0x1058B, // Unknown
    0x1058C, // Vithkuqi
    0x10593, // Unknown
    0x10594, // Vithkuqi
    0x10596, // Unknown
    0x10597, // Vithkuqi
    0x105A2, // Unknown
    0x105A3, // Vithkuqi
    0x105B2, // Unknown
    0x105B3, // Vithkuqi
    0x105BA, // Unknown
    0x105BB, // Vithkuqi
    0x105BD, // Unknown
    0x10600, // Linear_A
    0x10737, // Unknown
    0x10740, // Linear_A
    0x10756, // Unknown
    0x10760, // Linear_A
    0x10768, // Unknown
    0x10780, // Latin
    0x10786, // Unknown
    0x10787, // Latin
    0x107B1, // Unknown
    0x107B2, // Latin
    0x107BB, // Unknown
    0x10800, // Cypriot
    0x10806, // Unknown
    0x10808, // Cypriot
    0x10809, // Unknown
    0x1080A, // Cypriot
    0x10836, // Unknown
    0x10837, // Cypriot
    0x10839, // Unknown
    0x1083C, // Cypriot
    0x1083D, // Unknown
    0x1083F, // Cypriot
    0x10840, // Imperial_Aramaic
    0x10856, // Unknown
    0x10857, // Imperial_Aramaic
    0x10860, // Palmyrene
    0x10880, // Nabataean
    0x1089F, // Unknown
    0x108A7, // Nabataean
    0x108B0, // Unknown
    0x108E0, // Hatran
    0x108F3, // Unknown
    0x108F4, // Hatran
    0x108F6, // Unknown
    0x108FB, // Hatran
    0x10900, // Phoenician
    0x1091C, // Unknown
    0x1091F, // Phoenician
    0x10920, // Lydian
    0x1093A, // Unknown
    0x1093F, // Lydian
    0x10940, // Unknown
    0x10980, // Meroitic_Hieroglyphs
    0x109A0, // Meroitic_Cursive
    0x109B8, // Unknown
    0x109BC, // Meroitic_Cursive
    0x109D0, // Unknown
    0x109D2, // Meroitic_Cursive
    0x10A00, // Kharoshthi
    0x10A04, // Unknown
    0x10A05, // Kharoshthi
    0x10A07, // Unknown
    0x10A0C, // Kharoshthi
    0x10A14, // Unknown
    0x10A15, // Kharoshthi
    0x10A18, // Unknown
    0x10A19, // Kharoshthi
    0x10A36, // Unknown
    0x10A38, // Kharoshthi
    0x10A3B, // Unknown
    0x10A3F, // Kharoshthi
    0x10A49, // Unknown
    0x10A50, // Kharoshthi
    0x10A59, // Unknown
    0x10A60, // Old_South_Arabian
    0x10A80, // Old_North_Arabian
    0x10AA0, // Unknown
    0x10AC0, // Manichaean
    0x10AE7, // Unknown
    0x10AEB, // Manichaean
    0x10AF7, // Unknown
    0x10B00, // Avestan
    0x10B36, // Unknown
    0x10B39, // Avestan
    0x10B40, // Inscriptional_Parthian
    0x10B56, // Unknown
    0x10B58, // Inscriptional_Parthian
    0x10B60, // Inscriptional_Pahlavi
    0x10B73, // Unknown
    0x10B78, // Inscriptional_Pahlavi
    0x10B80, // Psalter_Pahlavi
    0x10B92, // Unknown
    0x10B99, // Psalter_Pahlavi
    0x10B9D, // Unknown
    0x10BA9, // Psalter_Pahlavi
    0x10BB0, // Unknown
    0x10C00, // Old_Turkic
    0x10C49, // Unknown
    0x10C80, // Old_Hungarian
    0x10CB3, // Unknown
    0x10CC0, // Old_Hungarian
    0x10CF3, // Unknown
    0x10CFA, // Old_Hungarian
    0x10D00, // Hanifi_Rohingya
    0x10D28, // Unknown
    0x10D30, // Hanifi_Rohingya
    0x10D3A, // Unknown
    0x10E60, // Arabic
    0x10E7F, // Unknown
    0x10E80, // Yezidi
    0x10EAA, // Unknown
    0x10EAB, // Yezidi
    0x10EAE, // Unknown
    0x10EB0, // Yezidi
    0x10EB2, // Unknown
    0x10F00, // Old_Sogdian
    0x10F28, // Unknown
    0x10F30, // Sogdian
    0x10F5A, // Unknown
    0x10F70, // Old_Uyghur
    0x10F8A, // Unknown
    0x10FB0, // Chorasmian
    0x10FCC, // Unknown
    0x10FE0, // Elymaic
    0x10FF7, // Unknown
    0x11000, // Brahmi
    0x1104E, // Unknown
    0x11052, // Brahmi
    0x11076, // Unknown
    0x1107F, // Brahmi
    0x11080, // Kaithi
    0x110C3, // Unknown
    0x110CD, // Kaithi
    0x110CE, // Unknown
    0x110D0, // Sora_Sompeng
    0x110E9, // Unknown
    0x110F0, // Sora_Sompeng
    0x110FA, // Unknown
    0x11100, // Chakma
    0x11135, // Unknown
    0x11136, // Chakma
    0x11148, // Unknown
    0x11150, // Mahajani
    0x11177, // Unknown
    0x11180, // Sharada
    0x111E0, // Unknown
    0x111E1, // Sinhala
    0x111F5, // Unknown
    0x11200, // Khojki
    0x11212, // Unknown
    0x11213, // Khojki
    0x1123F, // Unknown
    0x11280, // Multani
    0x11287, // Unknown
    0x11288, // Multani
    0x11289, // Unknown
    0x1128A, // Multani
    0x1128E, // Unknown
    0x1128F, // Multani
    0x1129E, // Unknown
    0x1129F, // Multani
    0x112AA, // Unknown
    0x112B0, // Khudawadi
    0x112EB, // Unknown
    0x112F0, // Khudawadi
    0x112FA, // Unknown
    0x11300, // Grantha
    0x11304, // Unknown
    0x11305, // Grantha
    0x1130D, // Unknown
    0x1130F, // Grantha
    0x11311, // Unknown
    0x11313, // Grantha
    0x11329, // Unknown
    0x1132A, // Grantha
    0x11331, // Unknown
    0x11332, // Grantha
    0x11334, // Unknown
    0x11335, // Grantha
    0x1133A, // Unknown
    0x1133B, // Inherited
    0x1133C, // Grantha
    0x11345, // Unknown
    0x11347, // Grantha
    0x11349, // Unknown
    0x1134B, // Grantha
    0x1134E, // Unknown
    0x11350, // Grantha
    0x11351, // Unknown
    0x11357, // Grantha
    0x11358, // Unknown
    0x1135D, // Grantha
    0x11364, // Unknown
    0x11366, // Grantha
    0x1136D, // Unknown
    0x11370, // Grantha
    0x11375, // Unknown
    0x11400, // Newa
    0x1145C, // Unknown
    0x1145D, // Newa
    0x11462, // Unknown
    0x11480, // Tirhuta
    0x114C8, // Unknown
    0x114D0, // Tirhuta
    0x114DA, // Unknown
    0x11580, // Siddham
    0x115B6, // Unknown
    0x115B8, // Siddham
    0x115DE, // Unknown
    0x11600, // Modi
    0x11645, // Unknown
    0x11650, // Modi
    0x1165A, // Unknown
    0x11660, // Mongolian
    0x1166D, // Unknown
    0x11680, // Takri
    0x116BA, // Unknown
    0x116C0, // Takri
    0x116CA, // Unknown
    0x11700, // Ahom
    0x1171B, // Unknown
    0x1171D, // Ahom
    0x1172C, // Unknown
    0x11730, // Ahom
    0x11747, // Unknown
    0x11800, // Dogra
    0x1183C, // Unknown
    0x118A0, // Warang_Citi
    0x118F3, // Unknown
    0x118FF, // Warang_Citi
    0x11900, // Dives_Akuru
    0x11907, // Unknown
    0x11909, // Dives_Akuru
    0x1190A, // Unknown
    0x1190C, // Dives_Akuru
    0x11914, // Unknown
    0x11915, // Dives_Akuru
    0x11917, // Unknown
    0x11918, // Dives_Akuru
    0x11936, // Unknown
    0x11937, // Dives_Akuru
    0x11939, // Unknown
    0x1193B, // Dives_Akuru
    0x11947, // Unknown
    0x11950, // Dives_Akuru
    0x1195A, // Unknown
    0x119A0, // Nandinagari
    0x119A8, // Unknown
    0x119AA, // Nandinagari
    0x119D8, // Unknown
    0x119DA, // Nandinagari
    0x119E5, // Unknown
    0x11A00, // Zanabazar_Square
    0x11A48, // Unknown
    0x11A50, // Soyombo
    0x11AA3, // Unknown
    0x11AB0, // Canadian_Aboriginal
    0x11AC0, // Pau_Cin_Hau
    0x11AF9, // Unknown
    0x11C00, // Bhaiksuki
    0x11C09, // Unknown
    0x11C0A, // Bhaiksuki
    0x11C37, // Unknown
    0x11C38, // Bhaiksuki
    0x11C46, // Unknown
    0x11C50, // Bhaiksuki
    0x11C6D, // Unknown
    0x11C70, // Marchen
    0x11C90, // Unknown
    0x11C92, // Marchen
    0x11CA8, // Unknown
    0x11CA9, // Marchen
    0x11CB7, // Unknown
    0x11D00, // Masaram_Gondi
    0x11D07, // Unknown
    0x11D08, // Masaram_Gondi
    0x11D0A, // Unknown
    0x11D0B, // Masaram_Gondi
    0x11D37, // Unknown
    0x11D3A, // Masaram_Gondi
    0x11D3B, // Unknown
    0x11D3C, // Masaram_Gondi
    0x11D3E, // Unknown
    0x11D3F, // Masaram_Gondi
    0x11D48, // Unknown
    0x11D50, // Masaram_Gondi
    0x11D5A, // Unknown
    0x11D60, // Gunjala_Gondi
    0x11D66, // Unknown
    0x11D67, // Gunjala_Gondi
    0x11D69, // Unknown
    0x11D6A, // Gunjala_Gondi
    0x11D8F, // Unknown
    0x11D90, // Gunjala_Gondi
    0x11D92, // Unknown
    0x11D93, // Gunjala_Gondi
    0x11D99, // Unknown
    0x11DA0, // Gunjala_Gondi
    0x11DAA, // Unknown
    0x11EE0, // Makasar
    0x11EF9, // Unknown
    0x11FB0, // Lisu
    0x11FB1, // Unknown
    0x11FC0, // Tamil
    0x11FF2, // Unknown
    0x11FFF, // Tamil
    0x12000, // Cuneiform
    0x1239A, // Unknown
    0x12400, // Cuneiform
    0x1246F, // Unknown
    0x12470, // Cuneiform
    0x12475, // Unknown
    0x12480, // Cuneiform
    0x12544, // Unknown
    0x12F90, // Cypro_Minoan
    0x12FF3, // Unknown
    0x13000, // Egyptian_Hieroglyphs
    0x1342F, // Unknown
    0x13430, // Egyptian_Hieroglyphs
    0x13439, // Unknown
    0x14400, // Anatolian_Hieroglyphs
    0x14647, // Unknown
    0x16800, // Bamum
    0x16A39, // Unknown
    0x16A40, // Mro
    0x16A5F, // Unknown
    0x16A60, // Mro
    0x16A6A, // Unknown
    0x16A6E, // Mro
    0x16A70, // Tangsa
    0x16ABF, // Unknown
    0x16AC0, // Tangsa
    0x16ACA, // Unknown
    0x16AD0, // Bassa_Vah
    0x16AEE, // Unknown
    0x16AF0, // Bassa_Vah
    0x16AF6, // Unknown
    0x16B00, // Pahawh_Hmong
    0x16B46, // Unknown
    0x16B50, // Pahawh_Hmong
    0x16B5A, // Unknown
    0x16B5B, // Pahawh_Hmong
    0x16B62, // Unknown
    0x16B63, // Pahawh_Hmong
    0x16B78, // Unknown
    0x16B7D, // Pahawh_Hmong
    0x16B90, // Unknown
    0x16E40, // Medefaidrin
    0x16E9B, // Unknown
    0x16F00, // Miao
    0x16F4B, // Unknown
    0x16F4F, // Miao
    0x16F88, // Unknown
    0x16F8F, // Miao
    0x16FA0, // Unknown
    0x16FE0, // Tangut
    0x16FE1, // Nushu
    0x16FE2, // Han
    0x16FE4, // Khitan_Small_Script
    0x16FE5, // Unknown
    0x16FF0, // Han
    0x16FF2, // Unknown
    0x17000, // Tangut
    0x187F8, // Unknown
    0x18800, // Tangut
    0x18B00, // Khitan_Small_Script
    0x18CD6, // Unknown
    0x18D00, // Tangut
    0x18D09, // Unknown
    0x1AFF0, // Katakana
    0x1AFF4, // Unknown
    0x1AFF5, // Katakana
    0x1AFFC, // Unknown
    0x1AFFD, // Katakana
    0x1AFFF, // Unknown
    0x1B000, // Katakana
    0x1B001, // Hiragana
    0x1B120, // Katakana
    0x1B123, // Unknown
    0x1B150, // Hiragana
    0x1B153, // Unknown
    0x1B164, // Katakana
    0x1B168, // Unknown
    0x1B170, // Nushu
    0x1B2FC, // Unknown
    0x1BC00, // Duployan
    0x1BC6B, // Unknown
    0x1BC70, // Duployan
    0x1BC7D, // Unknown
    0x1BC80, // Duployan
    0x1BC89, // Unknown
    0x1BC90, // Duployan
    0x1BC9A, // Unknown
    0x1BC9C, // Duployan
    0x1BCA0, // Common
    0x1BCA4, // Unknown
    0x1CF00, // Inherited
    0x1CF2E, // Unknown
    0x1CF30, // Inherited
    0x1CF47, // Unknown
    0x1CF50, // Common
    0x1CFC4, // Unknown
    0x1D000, // Common
    0x1D0F6, // Unknown
    0x1D100, // Common
    0x1D127, // Unknown
    0x1D129, // Common
    0x1D167, // Inherited
    0x1D16A, // Common
    0x1D17B, // Inherited
    0x1D183, // Common
    0x1D185, // Inherited
    0x1D18C, // Common
    0x1D1AA, // Inherited
    0x1D1AE, // Common
    0x1D1EB, // Unknown
    0x1D200, // Greek
    0x1D246, // Unknown
    0x1D2E0, // Common
    0x1D2F4, // Unknown
    0x1D300, // Common
    0x1D357, // Unknown
    0x1D360, // Common
    0x1D379, // Unknown
    0x1D400, // Common
    0x1D455, // Unknown
    0x1D456, // Common
    0x1D49D, // Unknown
    0x1D49E, // Common
    0x1D4A0, // Unknown
    0x1D4A2, // Common
    0x1D4A3, // Unknown
    0x1D4A5, // Common
    0x1D4A7, // Unknown
    0x1D4A9, // Common
    0x1D4AD, // Unknown
    0x1D4AE, // Common
    0x1D4BA, // Unknown
    0x1D4BB, // Common
    0x1D4BC, // Unknown
    0x1D4BD, // Common
    0x1D4C4, // Unknown
    0x1D4C5, // Common
    0x1D506, // Unknown
    0x1D507, // Common
    0x1D50B, // Unknown
    0x1D50D, // Common
    0x1D515, // Unknown
    0x1D516, // Common
    0x1D51D, // Unknown
    0x1D51E, // Common
    0x1D53A, // Unknown
    0x1D53B, // Common
    0x1D53F, // Unknown
    0x1D540, // Common
    0x1D545, // Unknown
    0x1D546, // Common
    0x1D547, // Unknown
    0x1D54A, // Common
    0x1D551, // Unknown
    0x1D552, // Common
    0x1D6A6, // Unknown
    0x1D6A8, // Common
    0x1D7CC, // Unknown
    0x1D7CE, // Common
    0x1D800, // SignWriting
    0x1DA8C, // Unknown
    0x1DA9B, // SignWriting
    0x1DAA0, // Unknown
    0x1DAA1, // SignWriting
    0x1DAB0, // Unknown
    0x1DF00, // Latin
    0x1DF1F, // Unknown
    0x1E000, // Glagolitic
    0x1E007, // Unknown
    0x1E008, // Glagolitic
    0x1E019, // Unknown
    0x1E01B, // Glagolitic
    0x1E022, // Unknown
    0x1E023, // Glagolitic
    0x1E025, // Unknown
    0x1E026, // Glagolitic
    0x1E02B, // Unknown
    0x1E100, // Nyiakeng_Puachue_Hmong
    0x1E12D, // Unknown
    0x1E130, // Nyiakeng_Puachue_Hmong
    0x1E13E, // Unknown
    0x1E140, // Nyiakeng_Puachue_Hmong
    0x1E14A, // Unknown
    0x1E14E, // Nyiakeng_Puachue_Hmong
    0x1E150, // Unknown
    0x1E290, // Toto
    0x1E2AF, // Unknown
    0x1E2C0, // Wancho
    0x1E2FA, // Unknown
    0x1E2FF, // Wancho
    0x1E300, // Unknown
    0x1E7E0, // Ethiopic
    0x1E7E7, // Unknown
    0x1E7E8, // Ethiopic
    0x1E7EC, // Unknown
    0x1E7ED, // Ethiopic
    0x1E7EF, // Unknown
    0x1E7F0, // Ethiopic
    0x1E7FF, // Unknown
    0x1E800, // Mende_Kikakui
    0x1E8C5, // Unknown
    0x1E8C7, // Mende_Kikakui
    0x1E8D7, // Unknown
    0x1E900, // Adlam
    0x1E94C, // Unknown
    0x1E950, // Adlam
    0x1E95A, // Unknown
    0x1E95E, // Adlam
    0x1E960, // Unknown
    0x1EC71, // Common
    0x1ECB5, // Unknown
    0x1ED01, // Common
    0x1ED3E, // Unknown
    0x1EE00, // Arabic
    0x1EE04, // Unknown
    0x1EE05, // Arabic
    0x1EE20, // Unknown
    0x1EE21, // Arabic
    0x1EE23, // Unknown
    0x1EE24, // Arabic
    0x1EE25, // Unknown
    0x1EE27, // Arabic
    0x1EE28, // Unknown
    0x1EE29, // Arabic
    0x1EE33, // Unknown
    0x1EE34, // Arabic
    0x1EE38, // Unknown
    0x1EE39, // Arabic
    0x1EE3A, // Unknown
    0x1EE3B, // Arabic
    0x1EE3C, // Unknown
    0x1EE42, // Arabic
    0x1EE43, // Unknown
    0x1EE47, // Arabic
    0x1EE48, // Unknown
    0x1EE49, // Arabic
    0x1EE4A, // Unknown
    0x1EE4B, // Arabic
    0x1EE4C, // Unknown
    0x1EE4D, // Arabic
    0x1EE50, // Unknown
    0x1EE51, // Arabic
    0x1EE53, // Unknown
    0x1EE54, // Arabic
    0x1EE55, // Unknown
    0x1EE57, // Arabic
    0x1EE58, // Unknown
    0x1EE59, // Arabic
    0x1EE5A, // Unknown
    0x1EE5B, // Arabic
    0x1EE5C, // Unknown
    0x1EE5D, // Arabic
    0x1EE5E, // Unknown
    0x1EE5F, // Arabic
    0x1EE60, // Unknown
    0x1EE61, // Arabic
    0x1EE63, // Unknown
    0x1EE64, // Arabic
    0x1EE65, // Unknown
    0x1EE67, // Arabic
    0x1EE6B, // Unknown
    0x1EE6C, // Arabic
    0x1EE73, // Unknown
    0x1EE74, // Arabic
    0x1EE78, // Unknown
    0x1EE79, // Arabic
    0x1EE7D, // Unknown
    0x1EE7E, // Arabic
    0x1EE7F, // Unknown
    0x1EE80, // Arabic
    0x1EE8A, // Unknown
    0x1EE8B, // Arabic
    0x1EE9C, // Unknown
    0x1EEA1, // Arabic
    0x1EEA4, // Unknown
    0x1EEA5, // Arabic
    0x1EEAA, // Unknown
    0x1EEAB, // Arabic
    0x1EEBC, // Unknown
    0x1EEF0, // Arabic
    0x1EEF2, // Unknown
    0x1F000, // Common
    0x1F02C, // Unknown
    0x1F030, // Common
    0x1F094, // Unknown
    0x1F0A0, // Common
    0x1F0AF, // Unknown
    0x1F0B1, // Common
    0x1F0C0, // Unknown
    0x1F0C1, // Common
    0x1F0D0, // Unknown
    0x1F0D1, // Common
    0x1F0F6, // Unknown
    0x1F100, // Common
    0x1F1AE, // Unknown
    0x1F1E6, // Common
    0x1F200, // Hiragana
    0x1F201, // Common
    0x1F203, // Unknown
    0x1F210, // Common
    0x1F23C, // Unknown
    0x1F240, // Common
    0x1F249, // Unknown
    0x1F250, // Common
    0x1F252, // Unknown
    0x1F260, // Common
    0x1F266, // Unknown
    0x1F300, // Common
    0x1F6D8, // Unknown
    0x1F6DD, // Common
    0x1F6ED, // Unknown
    0x1F6F0, // Common
    0x1F6FD, // Unknown
    0x1F700, // Common
    0x1F774, // Unknown
    0x1F780, // Common
    0x1F7D9, // Unknown
    0x1F7E0, // Common
    0x1F7EC, // Unknown
    0x1F7F0, // Common
    0x1F7F1, // Unknown
    0x1F800, // Common
    0x1F80C, // Unknown
    0x1F810, // Common
    0x1F848, // Unknown
    0x1F850, // Common
    0x1F85A, // Unknown
    0x1F860, // Common
    0x1F888, // Unknown
    0x1F890, // Common
    0x1F8AE, // Unknown
    0x1F8B0, // Common
    0x1F8B2, // Unknown
    0x1F900, // Common
    0x1FA54, // Unknown
    0x1FA60, // Common
    0x1FA6E, // Unknown
    0x1FA70, // Common
    0x1FA75, // Unknown
    0x1FA78, // Common
    0x1FA7D, // Unknown
    0x1FA80, // Common
    0x1FA87, // Unknown
    0x1FA90, // Common
    0x1FAAD, // Unknown
    0x1FAB0, // Common
    0x1FABB, // Unknown
    0x1FAC0, // Common
    0x1FAC6, // Unknown
    0x1FAD0, // Common
    0x1FADA, // Unknown
    0x1FAE0, // Common
    0x1FAE8, // Unknown
    0x1FAF0, // Common
    0x1FAF7, // Unknown
    0x1FB00, // Common
    0x1FB93, // Unknown
    0x1FB94, // Common
    0x1FBCB, // Unknown
    0x1FBF0, // Common
    0x1FBFA, // Unknown
    0x20000, // Han
    0x2A6E0, // Unknown
    0x2A700, // Han
    0x2B739, // Unknown
    0x2B740, // Han
    0x2B81E, // Unknown
    0x2B820, // Han
    0x2CEA2, // Unknown
    0x2CEB0, // Han
    0x2EBE1, // Unknown
    0x2F800, // Han
    0x2FA1E, // Unknown
    0x30000, // Han
    0x3134B, // Unknown
    0xE0001, // Common
    0xE0002, // Unknown
    0xE0020, // Common
    0xE0080, // Unknown
    0xE0100, // Inherited
    0xE01F0, // Unknown
];

#[rustfmt::skip]
pub static SCRIPTS: [UnicodeScript; 1638] = [
    UnicodeScript::COMMON,
    UnicodeScript::LATIN,
    UnicodeScript::COMMON,
    UnicodeScript::LATIN,
    UnicodeScript::COMMON,
    UnicodeScript::LATIN,
    UnicodeScript::COMMON,
    UnicodeScript::LATIN,
    UnicodeScript::COMMON,
    UnicodeScript::LATIN,
    UnicodeScript::COMMON,
    UnicodeScript::LATIN,
    UnicodeScript::COMMON,
    UnicodeScript::LATIN,
    UnicodeScript::COMMON,
    UnicodeScript::LATIN,
    UnicodeScript::COMMON,
    UnicodeScript::BOPOMOFO,
    UnicodeScript::COMMON,
    UnicodeScript::INHERITED,
    UnicodeScript::GREEK,
    UnicodeScript::COMMON,
    UnicodeScript::GREEK,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GREEK,
    UnicodeScript::COMMON,
    UnicodeScript::GREEK,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GREEK,
    UnicodeScript::COMMON,
    UnicodeScript::GREEK,
    UnicodeScript::COMMON,
    UnicodeScript::GREEK,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GREEK,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GREEK,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GREEK,
    UnicodeScript::COPTIC,
    UnicodeScript::GREEK,
    UnicodeScript::CYRILLIC,
    UnicodeScript::INHERITED,
    UnicodeScript::CYRILLIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ARMENIAN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ARMENIAN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ARMENIAN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::HEBREW,
    UnicodeScript::UNKNOWN,
    UnicodeScript::HEBREW,
    UnicodeScript::UNKNOWN,
    UnicodeScript::HEBREW,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ARABIC,
    UnicodeScript::COMMON,
    UnicodeScript::ARABIC,
    UnicodeScript::COMMON,
    UnicodeScript::ARABIC,
    UnicodeScript::COMMON,
    UnicodeScript::ARABIC,
    UnicodeScript::COMMON,
    UnicodeScript::ARABIC,
    UnicodeScript::COMMON,
    UnicodeScript::ARABIC,
    UnicodeScript::INHERITED,
    UnicodeScript::ARABIC,
    UnicodeScript::INHERITED,
    UnicodeScript::ARABIC,
    UnicodeScript::COMMON,
    UnicodeScript::ARABIC,
    UnicodeScript::SYRIAC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::SYRIAC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::SYRIAC,
    UnicodeScript::ARABIC,
    UnicodeScript::THAANA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::NKO,
    UnicodeScript::UNKNOWN,
    UnicodeScript::NKO,
    UnicodeScript::SAMARITAN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::SAMARITAN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::MANDAIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::MANDAIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::SYRIAC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ARABIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ARABIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ARABIC,
    UnicodeScript::COMMON,
    UnicodeScript::ARABIC,
    UnicodeScript::DEVANAGARI,
    UnicodeScript::INHERITED,
    UnicodeScript::DEVANAGARI,
    UnicodeScript::COMMON,
    UnicodeScript::DEVANAGARI,
    UnicodeScript::BENGALI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::BENGALI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::BENGALI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::BENGALI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::BENGALI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::BENGALI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::BENGALI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::BENGALI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::BENGALI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::BENGALI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::BENGALI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::BENGALI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::BENGALI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::BENGALI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GURMUKHI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GURMUKHI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GURMUKHI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GURMUKHI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GURMUKHI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GURMUKHI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GURMUKHI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GURMUKHI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GURMUKHI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GURMUKHI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GURMUKHI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GURMUKHI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GURMUKHI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GURMUKHI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GURMUKHI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GURMUKHI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GUJARATI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GUJARATI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GUJARATI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GUJARATI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GUJARATI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GUJARATI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GUJARATI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GUJARATI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GUJARATI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GUJARATI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GUJARATI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GUJARATI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GUJARATI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GUJARATI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ORIYA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ORIYA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ORIYA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ORIYA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ORIYA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ORIYA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ORIYA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ORIYA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ORIYA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ORIYA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ORIYA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ORIYA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ORIYA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ORIYA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::TAMIL,
    UnicodeScript::UNKNOWN,
    UnicodeScript::TAMIL,
    UnicodeScript::UNKNOWN,
    UnicodeScript::TAMIL,
    UnicodeScript::UNKNOWN,
    UnicodeScript::TAMIL,
    UnicodeScript::UNKNOWN,
    UnicodeScript::TAMIL,
    UnicodeScript::UNKNOWN,
    UnicodeScript::TAMIL,
    UnicodeScript::UNKNOWN,
    UnicodeScript::TAMIL,
    UnicodeScript::UNKNOWN,
    UnicodeScript::TAMIL,
    UnicodeScript::UNKNOWN,
    UnicodeScript::TAMIL,
    UnicodeScript::UNKNOWN,
    UnicodeScript::TAMIL,
    UnicodeScript::UNKNOWN,
    UnicodeScript::TAMIL,
    UnicodeScript::UNKNOWN,
    UnicodeScript::TAMIL,
    UnicodeScript::UNKNOWN,
    UnicodeScript::TAMIL,
    UnicodeScript::UNKNOWN,
    UnicodeScript::TAMIL,
    UnicodeScript::UNKNOWN,
    UnicodeScript::TAMIL,
    UnicodeScript::UNKNOWN,
    UnicodeScript::TAMIL,
    UnicodeScript::UNKNOWN,
    UnicodeScript::TELUGU,
    UnicodeScript::UNKNOWN,
    UnicodeScript::TELUGU,
    UnicodeScript::UNKNOWN,
    UnicodeScript::TELUGU,
    UnicodeScript::UNKNOWN,
    UnicodeScript::TELUGU,
    UnicodeScript::UNKNOWN,
    UnicodeScript::TELUGU,
    UnicodeScript::UNKNOWN,
    UnicodeScript::TELUGU,
    UnicodeScript::UNKNOWN,
    UnicodeScript::TELUGU,
    UnicodeScript::UNKNOWN,
    UnicodeScript::TELUGU,
    UnicodeScript::UNKNOWN,
    UnicodeScript::TELUGU,
    UnicodeScript::UNKNOWN,
    UnicodeScript::TELUGU,
    UnicodeScript::UNKNOWN,
    UnicodeScript::TELUGU,
    UnicodeScript::UNKNOWN,
    UnicodeScript::TELUGU,
    UnicodeScript::UNKNOWN,
    UnicodeScript::TELUGU,
    UnicodeScript::KANNADA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::KANNADA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::KANNADA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::KANNADA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::KANNADA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::KANNADA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::KANNADA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::KANNADA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::KANNADA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::KANNADA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::KANNADA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::KANNADA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::KANNADA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::MALAYALAM,
    UnicodeScript::UNKNOWN,
    UnicodeScript::MALAYALAM,
    UnicodeScript::UNKNOWN,
    UnicodeScript::MALAYALAM,
    UnicodeScript::UNKNOWN,
    UnicodeScript::MALAYALAM,
    UnicodeScript::UNKNOWN,
    UnicodeScript::MALAYALAM,
    UnicodeScript::UNKNOWN,
    UnicodeScript::MALAYALAM,
    UnicodeScript::UNKNOWN,
    UnicodeScript::MALAYALAM,
    UnicodeScript::UNKNOWN,
    UnicodeScript::SINHALA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::SINHALA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::SINHALA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::SINHALA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::SINHALA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::SINHALA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::SINHALA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::SINHALA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::SINHALA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::SINHALA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::SINHALA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::SINHALA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::THAI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::THAI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::LAO,
    UnicodeScript::UNKNOWN,
    UnicodeScript::LAO,
    UnicodeScript::UNKNOWN,
    UnicodeScript::LAO,
    UnicodeScript::UNKNOWN,
    UnicodeScript::LAO,
    UnicodeScript::UNKNOWN,
    UnicodeScript::LAO,
    UnicodeScript::UNKNOWN,
    UnicodeScript::LAO,
    UnicodeScript::UNKNOWN,
    UnicodeScript::LAO,
    UnicodeScript::UNKNOWN,
    UnicodeScript::LAO,
    UnicodeScript::UNKNOWN,
    UnicodeScript::LAO,
    UnicodeScript::UNKNOWN,
    UnicodeScript::LAO,
    UnicodeScript::UNKNOWN,
    UnicodeScript::LAO,
    UnicodeScript::UNKNOWN,
    UnicodeScript::TIBETAN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::TIBETAN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::TIBETAN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::TIBETAN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::TIBETAN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::TIBETAN,
    UnicodeScript::COMMON,
    UnicodeScript::TIBETAN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::MYANMAR,
    UnicodeScript::GEORGIAN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GEORGIAN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GEORGIAN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GEORGIAN,
    UnicodeScript::COMMON,
    UnicodeScript::GEORGIAN,
    UnicodeScript::HANGUL,
    UnicodeScript::ETHIOPIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ETHIOPIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ETHIOPIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ETHIOPIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ETHIOPIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ETHIOPIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ETHIOPIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ETHIOPIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ETHIOPIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ETHIOPIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ETHIOPIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ETHIOPIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ETHIOPIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ETHIOPIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ETHIOPIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ETHIOPIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ETHIOPIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ETHIOPIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::CHEROKEE,
    UnicodeScript::UNKNOWN,
    UnicodeScript::CHEROKEE,
    UnicodeScript::UNKNOWN,
    UnicodeScript::CANADIAN_ABORIGINAL,
    UnicodeScript::OGHAM,
    UnicodeScript::UNKNOWN,
    UnicodeScript::RUNIC,
    UnicodeScript::COMMON,
    UnicodeScript::RUNIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::TAGALOG,
    UnicodeScript::UNKNOWN,
    UnicodeScript::TAGALOG,
    UnicodeScript::HANUNOO,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::BUHID,
    UnicodeScript::UNKNOWN,
    UnicodeScript::TAGBANWA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::TAGBANWA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::TAGBANWA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::KHMER,
    UnicodeScript::UNKNOWN,
    UnicodeScript::KHMER,
    UnicodeScript::UNKNOWN,
    UnicodeScript::KHMER,
    UnicodeScript::UNKNOWN,
    UnicodeScript::MONGOLIAN,
    UnicodeScript::COMMON,
    UnicodeScript::MONGOLIAN,
    UnicodeScript::COMMON,
    UnicodeScript::MONGOLIAN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::MONGOLIAN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::MONGOLIAN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::CANADIAN_ABORIGINAL,
    UnicodeScript::UNKNOWN,
    UnicodeScript::LIMBU,
    UnicodeScript::UNKNOWN,
    UnicodeScript::LIMBU,
    UnicodeScript::UNKNOWN,
    UnicodeScript::LIMBU,
    UnicodeScript::UNKNOWN,
    UnicodeScript::LIMBU,
    UnicodeScript::UNKNOWN,
    UnicodeScript::LIMBU,
    UnicodeScript::TAI_LE,
    UnicodeScript::UNKNOWN,
    UnicodeScript::TAI_LE,
    UnicodeScript::UNKNOWN,
    UnicodeScript::NEW_TAI_LUE,
    UnicodeScript::UNKNOWN,
    UnicodeScript::NEW_TAI_LUE,
    UnicodeScript::UNKNOWN,
    UnicodeScript::NEW_TAI_LUE,
    UnicodeScript::UNKNOWN,
    UnicodeScript::NEW_TAI_LUE,
    UnicodeScript::KHMER,
    UnicodeScript::BUGINESE,
    UnicodeScript::UNKNOWN,
    UnicodeScript::BUGINESE,
    UnicodeScript::TAI_THAM,
    UnicodeScript::UNKNOWN,
    UnicodeScript::TAI_THAM,
    UnicodeScript::UNKNOWN,
    UnicodeScript::TAI_THAM,
    UnicodeScript::UNKNOWN,
    UnicodeScript::TAI_THAM,
    UnicodeScript::UNKNOWN,
    UnicodeScript::TAI_THAM,
    UnicodeScript::UNKNOWN,
    UnicodeScript::INHERITED,
    UnicodeScript::UNKNOWN,
    UnicodeScript::BALINESE,
    UnicodeScript::UNKNOWN,
    UnicodeScript::BALINESE,
    UnicodeScript::UNKNOWN,
    UnicodeScript::SUNDANESE,
    UnicodeScript::BATAK,
    UnicodeScript::UNKNOWN,
    UnicodeScript::BATAK,
    UnicodeScript::LEPCHA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::LEPCHA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::LEPCHA,
    UnicodeScript::OL_CHIKI,
    UnicodeScript::CYRILLIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GEORGIAN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GEORGIAN,
    UnicodeScript::SUNDANESE,
    UnicodeScript::UNKNOWN,
    UnicodeScript::INHERITED,
    UnicodeScript::COMMON,
    UnicodeScript::INHERITED,
    UnicodeScript::COMMON,
    UnicodeScript::INHERITED,
    UnicodeScript::COMMON,
    UnicodeScript::INHERITED,
    UnicodeScript::COMMON,
    UnicodeScript::INHERITED,
    UnicodeScript::COMMON,
    UnicodeScript::INHERITED,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::LATIN,
    UnicodeScript::GREEK,
    UnicodeScript::CYRILLIC,
    UnicodeScript::LATIN,
    UnicodeScript::GREEK,
    UnicodeScript::LATIN,
    UnicodeScript::GREEK,
    UnicodeScript::LATIN,
    UnicodeScript::CYRILLIC,
    UnicodeScript::LATIN,
    UnicodeScript::GREEK,
    UnicodeScript::INHERITED,
    UnicodeScript::LATIN,
    UnicodeScript::GREEK,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GREEK,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GREEK,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GREEK,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GREEK,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GREEK,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GREEK,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GREEK,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GREEK,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GREEK,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GREEK,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GREEK,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GREEK,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GREEK,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GREEK,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GREEK,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::INHERITED,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::LATIN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::LATIN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::LATIN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::INHERITED,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::GREEK,
    UnicodeScript::COMMON,
    UnicodeScript::LATIN,
    UnicodeScript::COMMON,
    UnicodeScript::LATIN,
    UnicodeScript::COMMON,
    UnicodeScript::LATIN,
    UnicodeScript::COMMON,
    UnicodeScript::LATIN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::BRAILLE,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::GLAGOLITIC,
    UnicodeScript::LATIN,
    UnicodeScript::COPTIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COPTIC,
    UnicodeScript::GEORGIAN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GEORGIAN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GEORGIAN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::TIFINAGH,
    UnicodeScript::UNKNOWN,
    UnicodeScript::TIFINAGH,
    UnicodeScript::UNKNOWN,
    UnicodeScript::TIFINAGH,
    UnicodeScript::ETHIOPIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ETHIOPIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ETHIOPIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ETHIOPIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ETHIOPIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ETHIOPIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ETHIOPIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ETHIOPIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ETHIOPIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::CYRILLIC,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::HAN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::HAN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::HAN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::HAN,
    UnicodeScript::COMMON,
    UnicodeScript::HAN,
    UnicodeScript::COMMON,
    UnicodeScript::HAN,
    UnicodeScript::INHERITED,
    UnicodeScript::HANGUL,
    UnicodeScript::COMMON,
    UnicodeScript::HAN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::HIRAGANA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::INHERITED,
    UnicodeScript::COMMON,
    UnicodeScript::HIRAGANA,
    UnicodeScript::COMMON,
    UnicodeScript::KATAKANA,
    UnicodeScript::COMMON,
    UnicodeScript::KATAKANA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::BOPOMOFO,
    UnicodeScript::UNKNOWN,
    UnicodeScript::HANGUL,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::BOPOMOFO,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::KATAKANA,
    UnicodeScript::HANGUL,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::HANGUL,
    UnicodeScript::COMMON,
    UnicodeScript::KATAKANA,
    UnicodeScript::COMMON,
    UnicodeScript::KATAKANA,
    UnicodeScript::COMMON,
    UnicodeScript::HAN,
    UnicodeScript::COMMON,
    UnicodeScript::HAN,
    UnicodeScript::YI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::YI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::LISU,
    UnicodeScript::VAI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::CYRILLIC,
    UnicodeScript::BAMUM,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::LATIN,
    UnicodeScript::COMMON,
    UnicodeScript::LATIN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::LATIN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::LATIN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::LATIN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::LATIN,
    UnicodeScript::SYLOTI_NAGRI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::PHAGS_PA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::SAURASHTRA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::SAURASHTRA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::DEVANAGARI,
    UnicodeScript::KAYAH_LI,
    UnicodeScript::COMMON,
    UnicodeScript::KAYAH_LI,
    UnicodeScript::REJANG,
    UnicodeScript::UNKNOWN,
    UnicodeScript::REJANG,
    UnicodeScript::HANGUL,
    UnicodeScript::UNKNOWN,
    UnicodeScript::JAVANESE,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::JAVANESE,
    UnicodeScript::UNKNOWN,
    UnicodeScript::JAVANESE,
    UnicodeScript::MYANMAR,
    UnicodeScript::UNKNOWN,
    UnicodeScript::CHAM,
    UnicodeScript::UNKNOWN,
    UnicodeScript::CHAM,
    UnicodeScript::UNKNOWN,
    UnicodeScript::CHAM,
    UnicodeScript::UNKNOWN,
    UnicodeScript::CHAM,
    UnicodeScript::MYANMAR,
    UnicodeScript::TAI_VIET,
    UnicodeScript::UNKNOWN,
    UnicodeScript::TAI_VIET,
    UnicodeScript::MEETEI_MAYEK,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ETHIOPIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ETHIOPIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ETHIOPIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ETHIOPIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ETHIOPIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::LATIN,
    UnicodeScript::COMMON,
    UnicodeScript::LATIN,
    UnicodeScript::GREEK,
    UnicodeScript::LATIN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::CHEROKEE,
    UnicodeScript::MEETEI_MAYEK,
    UnicodeScript::UNKNOWN,
    UnicodeScript::MEETEI_MAYEK,
    UnicodeScript::UNKNOWN,
    UnicodeScript::HANGUL,
    UnicodeScript::UNKNOWN,
    UnicodeScript::HANGUL,
    UnicodeScript::UNKNOWN,
    UnicodeScript::HANGUL,
    UnicodeScript::UNKNOWN,
    UnicodeScript::HAN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::HAN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::LATIN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ARMENIAN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::HEBREW,
    UnicodeScript::UNKNOWN,
    UnicodeScript::HEBREW,
    UnicodeScript::UNKNOWN,
    UnicodeScript::HEBREW,
    UnicodeScript::UNKNOWN,
    UnicodeScript::HEBREW,
    UnicodeScript::UNKNOWN,
    UnicodeScript::HEBREW,
    UnicodeScript::UNKNOWN,
    UnicodeScript::HEBREW,
    UnicodeScript::ARABIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ARABIC,
    UnicodeScript::COMMON,
    UnicodeScript::ARABIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ARABIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ARABIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ARABIC,
    UnicodeScript::INHERITED,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::INHERITED,
    UnicodeScript::CYRILLIC,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ARABIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ARABIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::LATIN,
    UnicodeScript::COMMON,
    UnicodeScript::LATIN,
    UnicodeScript::COMMON,
    UnicodeScript::KATAKANA,
    UnicodeScript::COMMON,
    UnicodeScript::KATAKANA,
    UnicodeScript::COMMON,
    UnicodeScript::HANGUL,
    UnicodeScript::UNKNOWN,
    UnicodeScript::HANGUL,
    UnicodeScript::UNKNOWN,
    UnicodeScript::HANGUL,
    UnicodeScript::UNKNOWN,
    UnicodeScript::HANGUL,
    UnicodeScript::UNKNOWN,
    UnicodeScript::HANGUL,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::LINEAR_B,
    UnicodeScript::UNKNOWN,
    UnicodeScript::LINEAR_B,
    UnicodeScript::UNKNOWN,
    UnicodeScript::LINEAR_B,
    UnicodeScript::UNKNOWN,
    UnicodeScript::LINEAR_B,
    UnicodeScript::UNKNOWN,
    UnicodeScript::LINEAR_B,
    UnicodeScript::UNKNOWN,
    UnicodeScript::LINEAR_B,
    UnicodeScript::UNKNOWN,
    UnicodeScript::LINEAR_B,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::GREEK,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GREEK,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::INHERITED,
    UnicodeScript::UNKNOWN,
    UnicodeScript::LYCIAN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::CARIAN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::INHERITED,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::OLD_ITALIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::OLD_ITALIC,
    UnicodeScript::GOTHIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::OLD_PERMIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::UGARITIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::UGARITIC,
    UnicodeScript::OLD_PERSIAN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::OLD_PERSIAN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::DESERET,
    UnicodeScript::SHAVIAN,
    UnicodeScript::OSMANYA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::OSMANYA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::OSAGE,
    UnicodeScript::UNKNOWN,
    UnicodeScript::OSAGE,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ELBASAN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::CAUCASIAN_ALBANIAN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::CAUCASIAN_ALBANIAN,
    UnicodeScript::VITHKUQI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::VITHKUQI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::VITHKUQI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::VITHKUQI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::VITHKUQI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::VITHKUQI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::VITHKUQI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::VITHKUQI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::LINEAR_A,
    UnicodeScript::UNKNOWN,
    UnicodeScript::LINEAR_A,
    UnicodeScript::UNKNOWN,
    UnicodeScript::LINEAR_A,
    UnicodeScript::UNKNOWN,
    UnicodeScript::LATIN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::LATIN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::LATIN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::CYPRIOT,
    UnicodeScript::UNKNOWN,
    UnicodeScript::CYPRIOT,
    UnicodeScript::UNKNOWN,
    UnicodeScript::CYPRIOT,
    UnicodeScript::UNKNOWN,
    UnicodeScript::CYPRIOT,
    UnicodeScript::UNKNOWN,
    UnicodeScript::CYPRIOT,
    UnicodeScript::UNKNOWN,
    UnicodeScript::CYPRIOT,
    UnicodeScript::IMPERIAL_ARAMAIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::IMPERIAL_ARAMAIC,
    UnicodeScript::PALMYRENE,
    UnicodeScript::NABATAEAN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::NABATAEAN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::HATRAN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::HATRAN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::HATRAN,
    UnicodeScript::PHOENICIAN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::PHOENICIAN,
    UnicodeScript::LYDIAN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::LYDIAN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::MEROITIC_HIEROGLYPHS,
    UnicodeScript::MEROITIC_CURSIVE,
    UnicodeScript::UNKNOWN,
    UnicodeScript::MEROITIC_CURSIVE,
    UnicodeScript::UNKNOWN,
    UnicodeScript::MEROITIC_CURSIVE,
    UnicodeScript::KHAROSHTHI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::KHAROSHTHI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::KHAROSHTHI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::KHAROSHTHI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::KHAROSHTHI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::KHAROSHTHI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::KHAROSHTHI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::KHAROSHTHI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::OLD_SOUTH_ARABIAN,
    UnicodeScript::OLD_NORTH_ARABIAN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::MANICHAEAN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::MANICHAEAN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::AVESTAN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::AVESTAN,
    UnicodeScript::INSCRIPTIONAL_PARTHIAN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::INSCRIPTIONAL_PARTHIAN,
    UnicodeScript::INSCRIPTIONAL_PAHLAVI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::INSCRIPTIONAL_PAHLAVI,
    UnicodeScript::PSALTER_PAHLAVI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::PSALTER_PAHLAVI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::PSALTER_PAHLAVI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::OLD_TURKIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::OLD_HUNGARIAN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::OLD_HUNGARIAN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::OLD_HUNGARIAN,
    UnicodeScript::HANIFI_ROHINGYA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::HANIFI_ROHINGYA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ARABIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::YEZIDI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::YEZIDI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::YEZIDI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::OLD_SOGDIAN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::SOGDIAN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::OLD_UYGHUR,
    UnicodeScript::UNKNOWN,
    UnicodeScript::CHORASMIAN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ELYMAIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::BRAHMI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::BRAHMI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::BRAHMI,
    UnicodeScript::KAITHI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::KAITHI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::SORA_SOMPENG,
    UnicodeScript::UNKNOWN,
    UnicodeScript::SORA_SOMPENG,
    UnicodeScript::UNKNOWN,
    UnicodeScript::CHAKMA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::CHAKMA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::MAHAJANI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::SHARADA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::SINHALA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::KHOJKI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::KHOJKI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::MULTANI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::MULTANI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::MULTANI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::MULTANI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::MULTANI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::KHUDAWADI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::KHUDAWADI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GRANTHA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GRANTHA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GRANTHA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GRANTHA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GRANTHA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GRANTHA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GRANTHA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::INHERITED,
    UnicodeScript::GRANTHA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GRANTHA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GRANTHA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GRANTHA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GRANTHA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GRANTHA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GRANTHA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GRANTHA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::NEWA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::NEWA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::TIRHUTA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::TIRHUTA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::SIDDHAM,
    UnicodeScript::UNKNOWN,
    UnicodeScript::SIDDHAM,
    UnicodeScript::UNKNOWN,
    UnicodeScript::MODI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::MODI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::MONGOLIAN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::TAKRI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::TAKRI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::AHOM,
    UnicodeScript::UNKNOWN,
    UnicodeScript::AHOM,
    UnicodeScript::UNKNOWN,
    UnicodeScript::AHOM,
    UnicodeScript::UNKNOWN,
    UnicodeScript::DOGRA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::WARANG_CITI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::WARANG_CITI,
    UnicodeScript::DIVES_AKURU,
    UnicodeScript::UNKNOWN,
    UnicodeScript::DIVES_AKURU,
    UnicodeScript::UNKNOWN,
    UnicodeScript::DIVES_AKURU,
    UnicodeScript::UNKNOWN,
    UnicodeScript::DIVES_AKURU,
    UnicodeScript::UNKNOWN,
    UnicodeScript::DIVES_AKURU,
    UnicodeScript::UNKNOWN,
    UnicodeScript::DIVES_AKURU,
    UnicodeScript::UNKNOWN,
    UnicodeScript::DIVES_AKURU,
    UnicodeScript::UNKNOWN,
    UnicodeScript::DIVES_AKURU,
    UnicodeScript::UNKNOWN,
    UnicodeScript::NANDINAGARI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::NANDINAGARI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::NANDINAGARI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ZANABAZAR_SQUARE,
    UnicodeScript::UNKNOWN,
    UnicodeScript::SOYOMBO,
    UnicodeScript::UNKNOWN,
    UnicodeScript::CANADIAN_ABORIGINAL,
    UnicodeScript::PAU_CIN_HAU,
    UnicodeScript::UNKNOWN,
    UnicodeScript::BHAIKSUKI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::BHAIKSUKI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::BHAIKSUKI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::BHAIKSUKI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::MARCHEN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::MARCHEN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::MARCHEN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::MASARAM_GONDI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::MASARAM_GONDI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::MASARAM_GONDI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::MASARAM_GONDI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::MASARAM_GONDI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::MASARAM_GONDI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::MASARAM_GONDI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GUNJALA_GONDI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GUNJALA_GONDI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GUNJALA_GONDI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GUNJALA_GONDI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GUNJALA_GONDI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GUNJALA_GONDI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::MAKASAR,
    UnicodeScript::UNKNOWN,
    UnicodeScript::LISU,
    UnicodeScript::UNKNOWN,
    UnicodeScript::TAMIL,
    UnicodeScript::UNKNOWN,
    UnicodeScript::TAMIL,
    UnicodeScript::CUNEIFORM,
    UnicodeScript::UNKNOWN,
    UnicodeScript::CUNEIFORM,
    UnicodeScript::UNKNOWN,
    UnicodeScript::CUNEIFORM,
    UnicodeScript::UNKNOWN,
    UnicodeScript::CUNEIFORM,
    UnicodeScript::UNKNOWN,
    UnicodeScript::CYPRO_MINOAN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::EGYPTIAN_HIEROGLYPHS,
    UnicodeScript::UNKNOWN,
    UnicodeScript::EGYPTIAN_HIEROGLYPHS,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ANATOLIAN_HIEROGLYPHS,
    UnicodeScript::UNKNOWN,
    UnicodeScript::BAMUM,
    UnicodeScript::UNKNOWN,
    UnicodeScript::MRO,
    UnicodeScript::UNKNOWN,
    UnicodeScript::MRO,
    UnicodeScript::UNKNOWN,
    UnicodeScript::MRO,
    UnicodeScript::TANGSA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::TANGSA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::BASSA_VAH,
    UnicodeScript::UNKNOWN,
    UnicodeScript::BASSA_VAH,
    UnicodeScript::UNKNOWN,
    UnicodeScript::PAHAWH_HMONG,
    UnicodeScript::UNKNOWN,
    UnicodeScript::PAHAWH_HMONG,
    UnicodeScript::UNKNOWN,
    UnicodeScript::PAHAWH_HMONG,
    UnicodeScript::UNKNOWN,
    UnicodeScript::PAHAWH_HMONG,
    UnicodeScript::UNKNOWN,
    UnicodeScript::PAHAWH_HMONG,
    UnicodeScript::UNKNOWN,
    UnicodeScript::MEDEFAIDRIN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::MIAO,
    UnicodeScript::UNKNOWN,
    UnicodeScript::MIAO,
    UnicodeScript::UNKNOWN,
    UnicodeScript::MIAO,
    UnicodeScript::UNKNOWN,
    UnicodeScript::TANGUT,
    UnicodeScript::NUSHU,
    UnicodeScript::HAN,
    UnicodeScript::KHITAN_SMALL_SCRIPT,
    UnicodeScript::UNKNOWN,
    UnicodeScript::HAN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::TANGUT,
    UnicodeScript::UNKNOWN,
    UnicodeScript::TANGUT,
    UnicodeScript::KHITAN_SMALL_SCRIPT,
    UnicodeScript::UNKNOWN,
    UnicodeScript::TANGUT,
    UnicodeScript::UNKNOWN,
    UnicodeScript::KATAKANA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::KATAKANA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::KATAKANA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::KATAKANA,
    UnicodeScript::HIRAGANA,
    UnicodeScript::KATAKANA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::HIRAGANA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::KATAKANA,
    UnicodeScript::UNKNOWN,
    UnicodeScript::NUSHU,
    UnicodeScript::UNKNOWN,
    UnicodeScript::DUPLOYAN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::DUPLOYAN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::DUPLOYAN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::DUPLOYAN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::DUPLOYAN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::INHERITED,
    UnicodeScript::UNKNOWN,
    UnicodeScript::INHERITED,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::INHERITED,
    UnicodeScript::COMMON,
    UnicodeScript::INHERITED,
    UnicodeScript::COMMON,
    UnicodeScript::INHERITED,
    UnicodeScript::COMMON,
    UnicodeScript::INHERITED,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GREEK,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::SIGNWRITING,
    UnicodeScript::UNKNOWN,
    UnicodeScript::SIGNWRITING,
    UnicodeScript::UNKNOWN,
    UnicodeScript::SIGNWRITING,
    UnicodeScript::UNKNOWN,
    UnicodeScript::LATIN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GLAGOLITIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GLAGOLITIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GLAGOLITIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GLAGOLITIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::GLAGOLITIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::NYIAKENG_PUACHUE_HMONG,
    UnicodeScript::UNKNOWN,
    UnicodeScript::NYIAKENG_PUACHUE_HMONG,
    UnicodeScript::UNKNOWN,
    UnicodeScript::NYIAKENG_PUACHUE_HMONG,
    UnicodeScript::UNKNOWN,
    UnicodeScript::NYIAKENG_PUACHUE_HMONG,
    UnicodeScript::UNKNOWN,
    UnicodeScript::TOTO,
    UnicodeScript::UNKNOWN,
    UnicodeScript::WANCHO,
    UnicodeScript::UNKNOWN,
    UnicodeScript::WANCHO,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ETHIOPIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ETHIOPIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ETHIOPIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ETHIOPIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::MENDE_KIKAKUI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::MENDE_KIKAKUI,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ADLAM,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ADLAM,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ADLAM,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ARABIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ARABIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ARABIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ARABIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ARABIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ARABIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ARABIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ARABIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ARABIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ARABIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ARABIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ARABIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ARABIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ARABIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ARABIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ARABIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ARABIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ARABIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ARABIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ARABIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ARABIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ARABIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ARABIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ARABIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ARABIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ARABIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ARABIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ARABIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ARABIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ARABIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ARABIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ARABIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ARABIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::ARABIC,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::HIRAGANA,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::HAN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::HAN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::HAN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::HAN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::HAN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::HAN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::HAN,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::COMMON,
    UnicodeScript::UNKNOWN,
    UnicodeScript::INHERITED,
    UnicodeScript::UNKNOWN,
];

#[rustfmt::skip]
pub static SCRIPT_ALIASES: [(&str, UnicodeScript); 319] = [
    ("ADLAM", UnicodeScript::ADLAM),
    ("ADLM", UnicodeScript::ADLAM),
    ("AGHB", UnicodeScript::CAUCASIAN_ALBANIAN),
    ("AHOM", UnicodeScript::AHOM),
    ("ANATOLIAN_HIEROGLYPHS", UnicodeScript::ANATOLIAN_HIEROGLYPHS),
    ("ARAB", UnicodeScript::ARABIC),
    ("ARABIC", UnicodeScript::ARABIC),
    ("ARMENIAN", UnicodeScript::ARMENIAN),
    ("ARMI", UnicodeScript::IMPERIAL_ARAMAIC),
    ("ARMN", UnicodeScript::ARMENIAN),
    ("AVESTAN", UnicodeScript::AVESTAN),
    ("AVST", UnicodeScript::AVESTAN),
    ("BALI", UnicodeScript::BALINESE),
    ("BALINESE", UnicodeScript::BALINESE),
    ("BAMU", UnicodeScript::BAMUM),
    ("BAMUM", UnicodeScript::BAMUM),
    ("BASS", UnicodeScript::BASSA_VAH),
    ("BASSA_VAH", UnicodeScript::BASSA_VAH),
    ("BATAK", UnicodeScript::BATAK),
    ("BATK", UnicodeScript::BATAK),
    ("BENG", UnicodeScript::BENGALI),
    ("BENGALI", UnicodeScript::BENGALI),
    ("BHAIKSUKI", UnicodeScript::BHAIKSUKI),
    ("BHKS", UnicodeScript::BHAIKSUKI),
    ("BOPO", UnicodeScript::BOPOMOFO),
    ("BOPOMOFO", UnicodeScript::BOPOMOFO),
    ("BRAH", UnicodeScript::BRAHMI),
    ("BRAHMI", UnicodeScript::BRAHMI),
    ("BRAI", UnicodeScript::BRAILLE),
    ("BRAILLE", UnicodeScript::BRAILLE),
    ("BUGI", UnicodeScript::BUGINESE),
    ("BUGINESE", UnicodeScript::BUGINESE),
    ("BUHD", UnicodeScript::BUHID),
    ("BUHID", UnicodeScript::BUHID),
    ("CAKM", UnicodeScript::CHAKMA),
    ("CANADIAN_ABORIGINAL", UnicodeScript::CANADIAN_ABORIGINAL),
    ("CANS", UnicodeScript::CANADIAN_ABORIGINAL),
    ("CARI", UnicodeScript::CARIAN),
    ("CARIAN", UnicodeScript::CARIAN),
    ("CAUCASIAN_ALBANIAN", UnicodeScript::CAUCASIAN_ALBANIAN),
    ("CHAKMA", UnicodeScript::CHAKMA),
    ("CHAM", UnicodeScript::CHAM),
    ("CHER", UnicodeScript::CHEROKEE),
    ("CHEROKEE", UnicodeScript::CHEROKEE),
    ("CHORASMIAN", UnicodeScript::CHORASMIAN),
    ("CHRS", UnicodeScript::CHORASMIAN),
    ("COMMON", UnicodeScript::COMMON),
    ("COPT", UnicodeScript::COPTIC),
    ("COPTIC", UnicodeScript::COPTIC),
    ("CPMN", UnicodeScript::CYPRO_MINOAN),
    ("CPRT", UnicodeScript::CYPRIOT),
    ("CUNEIFORM", UnicodeScript::CUNEIFORM),
    ("CYPRIOT", UnicodeScript::CYPRIOT),
    ("CYPRO_MINOAN", UnicodeScript::CYPRO_MINOAN),
    ("CYRILLIC", UnicodeScript::CYRILLIC),
    ("CYRL", UnicodeScript::CYRILLIC),
    ("DESERET", UnicodeScript::DESERET),
    ("DEVA", UnicodeScript::DEVANAGARI),
    ("DEVANAGARI", UnicodeScript::DEVANAGARI),
    ("DIAK", UnicodeScript::DIVES_AKURU),
    ("DIVES_AKURU", UnicodeScript::DIVES_AKURU),
    ("DOGR", UnicodeScript::DOGRA),
    ("DOGRA", UnicodeScript::DOGRA),
    ("DSRT", UnicodeScript::DESERET),
    ("DUPL", UnicodeScript::DUPLOYAN),
    ("DUPLOYAN", UnicodeScript::DUPLOYAN),
    ("EGYP", UnicodeScript::EGYPTIAN_HIEROGLYPHS),
    ("EGYPTIAN_HIEROGLYPHS", UnicodeScript::EGYPTIAN_HIEROGLYPHS),
    ("ELBA", UnicodeScript::ELBASAN),
    ("ELBASAN", UnicodeScript::ELBASAN),
    ("ELYM", UnicodeScript::ELYMAIC),
    ("ELYMAIC", UnicodeScript::ELYMAIC),
    ("ETHI", UnicodeScript::ETHIOPIC),
    ("ETHIOPIC", UnicodeScript::ETHIOPIC),
    ("GEOR", UnicodeScript::GEORGIAN),
    ("GEORGIAN", UnicodeScript::GEORGIAN),
    ("GLAG", UnicodeScript::GLAGOLITIC),
    ("GLAGOLITIC", UnicodeScript::GLAGOLITIC),
    ("GONG", UnicodeScript::GUNJALA_GONDI),
    ("GONM", UnicodeScript::MASARAM_GONDI),
    ("GOTH", UnicodeScript::GOTHIC),
    ("GOTHIC", UnicodeScript::GOTHIC),
    ("GRAN", UnicodeScript::GRANTHA),
    ("GRANTHA", UnicodeScript::GRANTHA),
    ("GREEK", UnicodeScript::GREEK),
    ("GREK", UnicodeScript::GREEK),
    ("GUJARATI", UnicodeScript::GUJARATI),
    ("GUJR", UnicodeScript::GUJARATI),
    ("GUNJALA_GONDI", UnicodeScript::GUNJALA_GONDI),
    ("GURMUKHI", UnicodeScript::GURMUKHI),
    ("GURU", UnicodeScript::GURMUKHI),
    ("HAN", UnicodeScript::HAN),
    ("HANG", UnicodeScript::HANGUL),
    ("HANGUL", UnicodeScript::HANGUL),
    ("HANI", UnicodeScript::HAN),
    ("HANIFI_ROHINGYA", UnicodeScript::HANIFI_ROHINGYA),
    ("HANO", UnicodeScript::HANUNOO),
    ("HANUNOO", UnicodeScript::HANUNOO),
    ("HATR", UnicodeScript::HATRAN),
    ("HATRAN", UnicodeScript::HATRAN),
    ("HEBR", UnicodeScript::HEBREW),
    ("HEBREW", UnicodeScript::HEBREW),
    ("HIRA", UnicodeScript::HIRAGANA),
    ("HIRAGANA", UnicodeScript::HIRAGANA),
    ("HLUW", UnicodeScript::ANATOLIAN_HIEROGLYPHS),
    ("HMNG", UnicodeScript::PAHAWH_HMONG),
    ("HMNP", UnicodeScript::NYIAKENG_PUACHUE_HMONG),
    ("HUNG", UnicodeScript::OLD_HUNGARIAN),
    ("IMPERIAL_ARAMAIC", UnicodeScript::IMPERIAL_ARAMAIC),
    ("INHERITED", UnicodeScript::INHERITED),
    ("INSCRIPTIONAL_PAHLAVI", UnicodeScript::INSCRIPTIONAL_PAHLAVI),
    ("INSCRIPTIONAL_PARTHIAN", UnicodeScript::INSCRIPTIONAL_PARTHIAN),
    ("ITAL", UnicodeScript::OLD_ITALIC),
    ("JAVA", UnicodeScript::JAVANESE),
    ("JAVANESE", UnicodeScript::JAVANESE),
    ("KAITHI", UnicodeScript::KAITHI),
    ("KALI", UnicodeScript::KAYAH_LI),
    ("KANA", UnicodeScript::KATAKANA),
    ("KANNADA", UnicodeScript::KANNADA),
    ("KATAKANA", UnicodeScript::KATAKANA),
    ("KAYAH_LI", UnicodeScript::KAYAH_LI),
    ("KHAR", UnicodeScript::KHAROSHTHI),
    ("KHAROSHTHI", UnicodeScript::KHAROSHTHI),
    ("KHITAN_SMALL_SCRIPT", UnicodeScript::KHITAN_SMALL_SCRIPT),
    ("KHMER", UnicodeScript::KHMER),
    ("KHMR", UnicodeScript::KHMER),
    ("KHOJ", UnicodeScript::KHOJKI),
    ("KHOJKI", UnicodeScript::KHOJKI),
    ("KHUDAWADI", UnicodeScript::KHUDAWADI),
    ("KITS", UnicodeScript::KHITAN_SMALL_SCRIPT),
    ("KNDA", UnicodeScript::KANNADA),
    ("KTHI", UnicodeScript::KAITHI),
    ("LANA", UnicodeScript::TAI_THAM),
    ("LAO", UnicodeScript::LAO),
    ("LAOO", UnicodeScript::LAO),
    ("LATIN", UnicodeScript::LATIN),
    ("LATN", UnicodeScript::LATIN),
    ("LEPC", UnicodeScript::LEPCHA),
    ("LEPCHA", UnicodeScript::LEPCHA),
    ("LIMB", UnicodeScript::LIMBU),
    ("LIMBU", UnicodeScript::LIMBU),
    ("LINA", UnicodeScript::LINEAR_A),
    ("LINB", UnicodeScript::LINEAR_B),
    ("LINEAR_A", UnicodeScript::LINEAR_A),
    ("LINEAR_B", UnicodeScript::LINEAR_B),
    ("LISU", UnicodeScript::LISU),
    ("LYCI", UnicodeScript::LYCIAN),
    ("LYCIAN", UnicodeScript::LYCIAN),
    ("LYDI", UnicodeScript::LYDIAN),
    ("LYDIAN", UnicodeScript::LYDIAN),
    ("MAHAJANI", UnicodeScript::MAHAJANI),
    ("MAHJ", UnicodeScript::MAHAJANI),
    ("MAKA", UnicodeScript::MAKASAR),
    ("MAKASAR", UnicodeScript::MAKASAR),
    ("MALAYALAM", UnicodeScript::MALAYALAM),
    ("MAND", UnicodeScript::MANDAIC),
    ("MANDAIC", UnicodeScript::MANDAIC),
    ("MANI", UnicodeScript::MANICHAEAN),
    ("MANICHAEAN", UnicodeScript::MANICHAEAN),
    ("MARC", UnicodeScript::MARCHEN),
    ("MARCHEN", UnicodeScript::MARCHEN),
    ("MASARAM_GONDI", UnicodeScript::MASARAM_GONDI),
    ("MEDEFAIDRIN", UnicodeScript::MEDEFAIDRIN),
    ("MEDF", UnicodeScript::MEDEFAIDRIN),
    ("MEETEI_MAYEK", UnicodeScript::MEETEI_MAYEK),
    ("MEND", UnicodeScript::MENDE_KIKAKUI),
    ("MENDE_KIKAKUI", UnicodeScript::MENDE_KIKAKUI),
    ("MERC", UnicodeScript::MEROITIC_CURSIVE),
    ("MERO", UnicodeScript::MEROITIC_HIEROGLYPHS),
    ("MEROITIC_CURSIVE", UnicodeScript::MEROITIC_CURSIVE),
    ("MEROITIC_HIEROGLYPHS", UnicodeScript::MEROITIC_HIEROGLYPHS),
    ("MIAO", UnicodeScript::MIAO),
    ("MLYM", UnicodeScript::MALAYALAM),
    ("MODI", UnicodeScript::MODI),
    ("MONG", UnicodeScript::MONGOLIAN),
    ("MONGOLIAN", UnicodeScript::MONGOLIAN),
    ("MRO", UnicodeScript::MRO),
    ("MROO", UnicodeScript::MRO),
    ("MTEI", UnicodeScript::MEETEI_MAYEK),
    ("MULT", UnicodeScript::MULTANI),
    ("MULTANI", UnicodeScript::MULTANI),
    ("MYANMAR", UnicodeScript::MYANMAR),
    ("MYMR", UnicodeScript::MYANMAR),
    ("NABATAEAN", UnicodeScript::NABATAEAN),
    ("NAND", UnicodeScript::NANDINAGARI),
    ("NANDINAGARI", UnicodeScript::NANDINAGARI),
    ("NARB", UnicodeScript::OLD_NORTH_ARABIAN),
    ("NBAT", UnicodeScript::NABATAEAN),
    ("NEWA", UnicodeScript::NEWA),
    ("NEW_TAI_LUE", UnicodeScript::NEW_TAI_LUE),
    ("NKO", UnicodeScript::NKO),
    ("NKOO", UnicodeScript::NKO),
    ("NSHU", UnicodeScript::NUSHU),
    ("NUSHU", UnicodeScript::NUSHU),
    ("NYIAKENG_PUACHUE_HMONG", UnicodeScript::NYIAKENG_PUACHUE_HMONG),
    ("OGAM", UnicodeScript::OGHAM),
    ("OGHAM", UnicodeScript::OGHAM),
    ("OLCK", UnicodeScript::OL_CHIKI),
    ("OLD_HUNGARIAN", UnicodeScript::OLD_HUNGARIAN),
    ("OLD_ITALIC", UnicodeScript::OLD_ITALIC),
    ("OLD_NORTH_ARABIAN", UnicodeScript::OLD_NORTH_ARABIAN),
    ("OLD_PERMIC", UnicodeScript::OLD_PERMIC),
    ("OLD_PERSIAN", UnicodeScript::OLD_PERSIAN),
    ("OLD_SOGDIAN", UnicodeScript::OLD_SOGDIAN),
    ("OLD_SOUTH_ARABIAN", UnicodeScript::OLD_SOUTH_ARABIAN),
    ("OLD_TURKIC", UnicodeScript::OLD_TURKIC),
    ("OLD_UYGHUR", UnicodeScript::OLD_UYGHUR),
    ("OL_CHIKI", UnicodeScript::OL_CHIKI),
    ("ORIYA", UnicodeScript::ORIYA),
    ("ORKH", UnicodeScript::OLD_TURKIC),
    ("ORYA", UnicodeScript::ORIYA),
    ("OSAGE", UnicodeScript::OSAGE),
    ("OSGE", UnicodeScript::OSAGE),
    ("OSMA", UnicodeScript::OSMANYA),
    ("OSMANYA", UnicodeScript::OSMANYA),
    ("OUGR", UnicodeScript::OLD_UYGHUR),
    ("PAHAWH_HMONG", UnicodeScript::PAHAWH_HMONG),
    ("PALM", UnicodeScript::PALMYRENE),
    ("PALMYRENE", UnicodeScript::PALMYRENE),
    ("PAUC", UnicodeScript::PAU_CIN_HAU),
    ("PAU_CIN_HAU", UnicodeScript::PAU_CIN_HAU),
    ("PERM", UnicodeScript::OLD_PERMIC),
    ("PHAG", UnicodeScript::PHAGS_PA),
    ("PHAGS_PA", UnicodeScript::PHAGS_PA),
    ("PHLI", UnicodeScript::INSCRIPTIONAL_PAHLAVI),
    ("PHLP", UnicodeScript::PSALTER_PAHLAVI),
    ("PHNX", UnicodeScript::PHOENICIAN),
    ("PHOENICIAN", UnicodeScript::PHOENICIAN),
    ("PLRD", UnicodeScript::MIAO),
    ("PRTI", UnicodeScript::INSCRIPTIONAL_PARTHIAN),
    ("PSALTER_PAHLAVI", UnicodeScript::PSALTER_PAHLAVI),
    ("QAAC", UnicodeScript::COPTIC),
    ("QAAI", UnicodeScript::INHERITED),
    ("REJANG", UnicodeScript::REJANG),
    ("RJNG", UnicodeScript::REJANG),
    ("ROHG", UnicodeScript::HANIFI_ROHINGYA),
    ("RUNIC", UnicodeScript::RUNIC),
    ("RUNR", UnicodeScript::RUNIC),
    ("SAMARITAN", UnicodeScript::SAMARITAN),
    ("SAMR", UnicodeScript::SAMARITAN),
    ("SARB", UnicodeScript::OLD_SOUTH_ARABIAN),
    ("SAUR", UnicodeScript::SAURASHTRA),
    ("SAURASHTRA", UnicodeScript::SAURASHTRA),
    ("SGNW", UnicodeScript::SIGNWRITING),
    ("SHARADA", UnicodeScript::SHARADA),
    ("SHAVIAN", UnicodeScript::SHAVIAN),
    ("SHAW", UnicodeScript::SHAVIAN),
    ("SHRD", UnicodeScript::SHARADA),
    ("SIDD", UnicodeScript::SIDDHAM),
    ("SIDDHAM", UnicodeScript::SIDDHAM),
    ("SIGNWRITING", UnicodeScript::SIGNWRITING),
    ("SIND", UnicodeScript::KHUDAWADI),
    ("SINH", UnicodeScript::SINHALA),
    ("SINHALA", UnicodeScript::SINHALA),
    ("SOGD", UnicodeScript::SOGDIAN),
    ("SOGDIAN", UnicodeScript::SOGDIAN),
    ("SOGO", UnicodeScript::OLD_SOGDIAN),
    ("SORA", UnicodeScript::SORA_SOMPENG),
    ("SORA_SOMPENG", UnicodeScript::SORA_SOMPENG),
    ("SOYO", UnicodeScript::SOYOMBO),
    ("SOYOMBO", UnicodeScript::SOYOMBO),
    ("SUND", UnicodeScript::SUNDANESE),
    ("SUNDANESE", UnicodeScript::SUNDANESE),
    ("SYLO", UnicodeScript::SYLOTI_NAGRI),
    ("SYLOTI_NAGRI", UnicodeScript::SYLOTI_NAGRI),
    ("SYRC", UnicodeScript::SYRIAC),
    ("SYRIAC", UnicodeScript::SYRIAC),
    ("TAGALOG", UnicodeScript::TAGALOG),
    ("TAGB", UnicodeScript::TAGBANWA),
    ("TAGBANWA", UnicodeScript::TAGBANWA),
    ("TAI_LE", UnicodeScript::TAI_LE),
    ("TAI_THAM", UnicodeScript::TAI_THAM),
    ("TAI_VIET", UnicodeScript::TAI_VIET),
    ("TAKR", UnicodeScript::TAKRI),
    ("TAKRI", UnicodeScript::TAKRI),
    ("TALE", UnicodeScript::TAI_LE),
    ("TALU", UnicodeScript::NEW_TAI_LUE),
    ("TAMIL", UnicodeScript::TAMIL),
    ("TAML", UnicodeScript::TAMIL),
    ("TANG", UnicodeScript::TANGUT),
    ("TANGSA", UnicodeScript::TANGSA),
    ("TANGUT", UnicodeScript::TANGUT),
    ("TAVT", UnicodeScript::TAI_VIET),
    ("TELU", UnicodeScript::TELUGU),
    ("TELUGU", UnicodeScript::TELUGU),
    ("TFNG", UnicodeScript::TIFINAGH),
    ("TGLG", UnicodeScript::TAGALOG),
    ("THAA", UnicodeScript::THAANA),
    ("THAANA", UnicodeScript::THAANA),
    ("THAI", UnicodeScript::THAI),
    ("TIBETAN", UnicodeScript::TIBETAN),
    ("TIBT", UnicodeScript::TIBETAN),
    ("TIFINAGH", UnicodeScript::TIFINAGH),
    ("TIRH", UnicodeScript::TIRHUTA),
    ("TIRHUTA", UnicodeScript::TIRHUTA),
    ("TNSA", UnicodeScript::TANGSA),
    ("TOTO", UnicodeScript::TOTO),
    ("UGAR", UnicodeScript::UGARITIC),
    ("UGARITIC", UnicodeScript::UGARITIC),
    ("UNKNOWN", UnicodeScript::UNKNOWN),
    ("VAI", UnicodeScript::VAI),
    ("VAII", UnicodeScript::VAI),
    ("VITH", UnicodeScript::VITHKUQI),
    ("VITHKUQI", UnicodeScript::VITHKUQI),
    ("WANCHO", UnicodeScript::WANCHO),
    ("WARA", UnicodeScript::WARANG_CITI),
    ("WARANG_CITI", UnicodeScript::WARANG_CITI),
    ("WCHO", UnicodeScript::WANCHO),
    ("XPEO", UnicodeScript::OLD_PERSIAN),
    ("XSUX", UnicodeScript::CUNEIFORM),
    ("YEZI", UnicodeScript::YEZIDI),
    ("YEZIDI", UnicodeScript::YEZIDI),
    ("YI", UnicodeScript::YI),
    ("YIII", UnicodeScript::YI),
    ("ZANABAZAR_SQUARE", UnicodeScript::ZANABAZAR_SQUARE),
    ("ZANB", UnicodeScript::ZANABAZAR_SQUARE),
    ("ZINH", UnicodeScript::INHERITED),
    ("ZYYY", UnicodeScript::COMMON),
    ("ZZZZ", UnicodeScript::UNKNOWN),
];
