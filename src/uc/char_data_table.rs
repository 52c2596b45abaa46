// WARNING: this file was generated by scripts/gen-ucd-tables.py from the
// Unicode 14.0.0 character database. Do not edit it by hand.

#![allow(clippy::unreadable_literal)]

use super::char_data::CharProperties;

pub const UNICODE_VERSION: (u8, u8, u8) = (14, 0, 0);

pub const CHUNK_SHIFT: u32 = 5;
pub const CHUNK_MASK: u32 = (1 << CHUNK_SHIFT) - 1;

#[rustfmt::skip]
pub static PROPERTIES: [CharProperties; 707] = [
    CharProperties::new(0, -1, 0x0000, -1, 0, 0, 0),
    CharProperties::new(15, 9, 0x0034, -1, 0, 0, 0),
    CharProperties::new(15, 11, 0x0040, -1, 0, 0, 0),
    CharProperties::new(15, 10, 0x0040, -1, 0, 0, 0),
    CharProperties::new(15, 12, 0x0040, -1, 0, 0, 0),
    CharProperties::new(12, 12, 0x0040, -1, 0, 0, 0),
    CharProperties::new(24, 13, 0x0000, -1, 0, 0, 0),
    CharProperties::new(24, 5, 0x0000, -1, 0, 0, 0),
    CharProperties::new(26, 5, 0x0006, -1, 0, 0, 0),
    CharProperties::new(21, 13, 0x0001, -1, 0, 0, 0),
    CharProperties::new(22, 13, 0x0001, -1, 0, 0, 0),
    CharProperties::new(25, 4, 0x0000, -1, 0, 0, 0),
    CharProperties::new(24, 7, 0x0000, -1, 0, 0, 0),
    CharProperties::new(20, 4, 0x0000, -1, 0, 0, 0),
    CharProperties::new(9, 3, 0x0814, 0, 0, 0, 0),
    CharProperties::new(25, 13, 0x0001, -1, 0, 0, 0),
    CharProperties::new(25, 13, 0x0000, -1, 0, 0, 0),
    CharProperties::new(1, 0, 0x081E, 10, 32, 0, 0),
    CharProperties::new(1, 0, 0x081E, 11, 32, 0, 0),
    CharProperties::new(1, 0, 0x081E, 12, 32, 0, 0),
    CharProperties::new(1, 0, 0x081E, 13, 32, 0, 0),
    CharProperties::new(1, 0, 0x081E, 14, 32, 0, 0),
    CharProperties::new(1, 0, 0x081E, 15, 32, 0, 0),
    CharProperties::new(1, 0, 0x081E, 16, 32, 0, 0),
    CharProperties::new(1, 0, 0x081E, 17, 32, 0, 0),
    CharProperties::new(1, 0, 0x081E, 18, 32, 0, 0),
    CharProperties::new(1, 0, 0x081E, 19, 32, 0, 0),
    CharProperties::new(1, 0, 0x081E, 20, 32, 0, 0),
    CharProperties::new(1, 0, 0x081E, 21, 32, 0, 0),
    CharProperties::new(1, 0, 0x081E, 22, 32, 0, 0),
    CharProperties::new(1, 0, 0x081E, 23, 32, 0, 0),
    CharProperties::new(1, 0, 0x081E, 24, 32, 0, 0),
    CharProperties::new(1, 0, 0x081E, 25, 32, 0, 0),
    CharProperties::new(1, 0, 0x081E, 26, 32, 0, 0),
    CharProperties::new(1, 0, 0x081E, 27, 32, 0, 0),
    CharProperties::new(1, 0, 0x081E, 28, 32, 0, 0),
    CharProperties::new(1, 0, 0x081E, 29, 32, 0, 0),
    CharProperties::new(1, 0, 0x081E, 30, 32, 0, 0),
    CharProperties::new(1, 0, 0x081E, 31, 32, 0, 0),
    CharProperties::new(1, 0, 0x081E, 32, 32, 0, 0),
    CharProperties::new(1, 0, 0x081E, 33, 32, 0, 0),
    CharProperties::new(1, 0, 0x081E, 34, 32, 0, 0),
    CharProperties::new(1, 0, 0x081E, 35, 32, 0, 0),
    CharProperties::new(27, 13, 0x0000, -1, 0, 0, 0),
    CharProperties::new(23, 13, 0x0016, -1, 0, 0, 0),
    CharProperties::new(2, 0, 0x081E, 10, 0, -32, -32),
    CharProperties::new(2, 0, 0x081E, 11, 0, -32, -32),
    CharProperties::new(2, 0, 0x081E, 12, 0, -32, -32),
    CharProperties::new(2, 0, 0x081E, 13, 0, -32, -32),
    CharProperties::new(2, 0, 0x081E, 14, 0, -32, -32),
    CharProperties::new(2, 0, 0x081E, 15, 0, -32, -32),
    CharProperties::new(2, 0, 0x081E, 16, 0, -32, -32),
    CharProperties::new(2, 0, 0x081E, 17, 0, -32, -32),
    CharProperties::new(2, 0, 0x081E, 18, 0, -32, -32),
    CharProperties::new(2, 0, 0x081E, 19, 0, -32, -32),
    CharProperties::new(2, 0, 0x081E, 20, 0, -32, -32),
    CharProperties::new(2, 0, 0x081E, 21, 0, -32, -32),
    CharProperties::new(2, 0, 0x081E, 22, 0, -32, -32),
    CharProperties::new(2, 0, 0x081E, 23, 0, -32, -32),
    CharProperties::new(2, 0, 0x081E, 24, 0, -32, -32),
    CharProperties::new(2, 0, 0x081E, 25, 0, -32, -32),
    CharProperties::new(2, 0, 0x081E, 26, 0, -32, -32),
    CharProperties::new(2, 0, 0x081E, 27, 0, -32, -32),
    CharProperties::new(2, 0, 0x081E, 28, 0, -32, -32),
    CharProperties::new(2, 0, 0x081E, 29, 0, -32, -32),
    CharProperties::new(2, 0, 0x081E, 30, 0, -32, -32),
    CharProperties::new(2, 0, 0x081E, 31, 0, -32, -32),
    CharProperties::new(2, 0, 0x081E, 32, 0, -32, -32),
    CharProperties::new(2, 0, 0x081E, 33, 0, -32, -32),
    CharProperties::new(2, 0, 0x081E, 34, 0, -32, -32),
    CharProperties::new(2, 0, 0x081E, 35, 0, -32, -32),
    CharProperties::new(15, 10, 0x0034, -1, 0, 0, 0),
    CharProperties::new(12, 7, 0x0000, -1, 0, 0, 0),
    CharProperties::new(28, 13, 0x0000, -1, 0, 0, 0),
    CharProperties::new(5, 0, 0x009E, -1, 0, 0, 0),
    CharProperties::new(29, 13, 0x0001, -1, 0, 0, 0),
    CharProperties::new(16, 9, 0x0034, -1, 0, 0, 0),
    CharProperties::new(28, 5, 0x0000, -1, 0, 0, 0),
    CharProperties::new(25, 5, 0x0000, -1, 0, 0, 0),
    CharProperties::new(11, 3, 0x0000, 2, 0, 0, 0),
    CharProperties::new(11, 3, 0x0000, 3, 0, 0, 0),
    CharProperties::new(2, 0, 0x001E, -1, 0, 743, 743),
    CharProperties::new(24, 13, 0x0010, -1, 0, 0, 0),
    CharProperties::new(11, 3, 0x0000, 1, 0, 0, 0),
    CharProperties::new(30, 13, 0x0001, -1, 0, 0, 0),
    CharProperties::new(11, 13, 0x0000, -2, 0, 0, 0),
    CharProperties::new(1, 0, 0x001E, -1, 32, 0, 0),
    CharProperties::new(2, 0, 0x101E, -1, 0, 0, 0),
    CharProperties::new(2, 0, 0x001E, -1, 0, -32, -32),
    CharProperties::new(2, 0, 0x001E, -1, 0, 121, 121),
    CharProperties::new(1, 0, 0x001E, -1, 1, 0, 0),
    CharProperties::new(2, 0, 0x001E, -1, 0, -1, -1),
    CharProperties::new(1, 0, 0x001E, -1, -199, 0, 0),
    CharProperties::new(2, 0, 0x001E, -1, 0, -232, -232),
    CharProperties::new(2, 0, 0x001E, -1, 0, 0, 0),
    CharProperties::new(1, 0, 0x001E, -1, -121, 0, 0),
    CharProperties::new(2, 0, 0x001E, -1, 0, -300, -300),
    CharProperties::new(2, 0, 0x001E, -1, 0, 195, 195),
    CharProperties::new(1, 0, 0x001E, -1, 210, 0, 0),
    CharProperties::new(1, 0, 0x001E, -1, 206, 0, 0),
    CharProperties::new(1, 0, 0x001E, -1, 205, 0, 0),
    CharProperties::new(1, 0, 0x001E, -1, 79, 0, 0),
    CharProperties::new(1, 0, 0x001E, -1, 202, 0, 0),
    CharProperties::new(1, 0, 0x001E, -1, 203, 0, 0),
    CharProperties::new(1, 0, 0x001E, -1, 207, 0, 0),
    CharProperties::new(2, 0, 0x001E, -1, 0, 97, 97),
    CharProperties::new(1, 0, 0x001E, -1, 211, 0, 0),
    CharProperties::new(1, 0, 0x001E, -1, 209, 0, 0),
    CharProperties::new(2, 0, 0x001E, -1, 0, 163, 163),
    CharProperties::new(1, 0, 0x001E, -1, 213, 0, 0),
    CharProperties::new(2, 0, 0x001E, -1, 0, 130, 130),
    CharProperties::new(1, 0, 0x001E, -1, 214, 0, 0),
    CharProperties::new(1, 0, 0x001E, -1, 218, 0, 0),
    CharProperties::new(1, 0, 0x001E, -1, 217, 0, 0),
    CharProperties::new(1, 0, 0x001E, -1, 219, 0, 0),
    CharProperties::new(5, 0, 0x001E, -1, 0, 0, 0),
    CharProperties::new(2, 0, 0x001E, -1, 0, 56, 56),
    CharProperties::new(1, 0, 0x001E, -1, 2, 0, 1),
    CharProperties::new(3, 0, 0x001E, -1, 1, -1, 0),
    CharProperties::new(2, 0, 0x001E, -1, 0, -2, -1),
    CharProperties::new(2, 0, 0x001E, -1, 0, -79, -79),
    CharProperties::new(1, 0, 0x001E, -1, -97, 0, 0),
    CharProperties::new(1, 0, 0x001E, -1, -56, 0, 0),
    CharProperties::new(1, 0, 0x001E, -1, -130, 0, 0),
    CharProperties::new(1, 0, 0x001E, -1, 10795, 0, 0),
    CharProperties::new(1, 0, 0x001E, -1, -163, 0, 0),
    CharProperties::new(1, 0, 0x001E, -1, 10792, 0, 0),
    CharProperties::new(2, 0, 0x001E, -1, 0, 10815, 10815),
    CharProperties::new(1, 0, 0x001E, -1, -195, 0, 0),
    CharProperties::new(1, 0, 0x001E, -1, 69, 0, 0),
    CharProperties::new(1, 0, 0x001E, -1, 71, 0, 0),
    CharProperties::new(2, 0, 0x001E, -1, 0, 10783, 10783),
    CharProperties::new(2, 0, 0x001E, -1, 0, 10780, 10780),
    CharProperties::new(2, 0, 0x001E, -1, 0, 10782, 10782),
    CharProperties::new(2, 0, 0x001E, -1, 0, -210, -210),
    CharProperties::new(2, 0, 0x001E, -1, 0, -206, -206),
    CharProperties::new(2, 0, 0x001E, -1, 0, -205, -205),
    CharProperties::new(2, 0, 0x001E, -1, 0, -202, -202),
    CharProperties::new(2, 0, 0x001E, -1, 0, -203, -203),
    CharProperties::new(2, 0, 0x001E, -1, 0, 42319, 42319),
    CharProperties::new(2, 0, 0x001E, -1, 0, 42315, 42315),
    CharProperties::new(2, 0, 0x001E, -1, 0, -207, -207),
    CharProperties::new(2, 0, 0x001E, -1, 0, 42280, 42280),
    CharProperties::new(2, 0, 0x001E, -1, 0, 42308, 42308),
    CharProperties::new(2, 0, 0x001E, -1, 0, -209, -209),
    CharProperties::new(2, 0, 0x001E, -1, 0, -211, -211),
    CharProperties::new(2, 0, 0x001E, -1, 0, 10743, 10743),
    CharProperties::new(2, 0, 0x001E, -1, 0, 42305, 42305),
    CharProperties::new(2, 0, 0x001E, -1, 0, 10749, 10749),
    CharProperties::new(2, 0, 0x001E, -1, 0, -213, -213),
    CharProperties::new(2, 0, 0x001E, -1, 0, -214, -214),
    CharProperties::new(2, 0, 0x001E, -1, 0, 10727, 10727),
    CharProperties::new(2, 0, 0x001E, -1, 0, -218, -218),
    CharProperties::new(2, 0, 0x001E, -1, 0, 42307, 42307),
    CharProperties::new(2, 0, 0x001E, -1, 0, 42282, 42282),
    CharProperties::new(2, 0, 0x001E, -1, 0, -69, -69),
    CharProperties::new(2, 0, 0x001E, -1, 0, -217, -217),
    CharProperties::new(2, 0, 0x001E, -1, 0, -71, -71),
    CharProperties::new(2, 0, 0x001E, -1, 0, -219, -219),
    CharProperties::new(2, 0, 0x001E, -1, 0, 42261, 42261),
    CharProperties::new(2, 0, 0x001E, -1, 0, 42258, 42258),
    CharProperties::new(4, 0, 0x009E, -1, 0, 0, 0),
    CharProperties::new(4, 13, 0x001E, -1, 0, 0, 0),
    CharProperties::new(4, 0, 0x001E, -1, 0, 0, 0),
    CharProperties::new(6, 8, 0x0014, -1, 0, 0, 0),
    CharProperties::new(6, 8, 0x0294, -1, 0, 84, 84),
    CharProperties::new(1, 0, 0x001E, -1, 116, 0, 0),
    CharProperties::new(1, 0, 0x001E, -1, 38, 0, 0),
    CharProperties::new(1, 0, 0x001E, -1, 37, 0, 0),
    CharProperties::new(1, 0, 0x001E, -1, 64, 0, 0),
    CharProperties::new(1, 0, 0x001E, -1, 63, 0, 0),
    CharProperties::new(2, 0, 0x001E, -1, 0, -38, -38),
    CharProperties::new(2, 0, 0x001E, -1, 0, -37, -37),
    CharProperties::new(2, 0, 0x001E, -1, 0, -31, -31),
    CharProperties::new(2, 0, 0x001E, -1, 0, -64, -64),
    CharProperties::new(2, 0, 0x001E, -1, 0, -63, -63),
    CharProperties::new(1, 0, 0x001E, -1, 8, 0, 0),
    CharProperties::new(2, 0, 0x001E, -1, 0, -62, -62),
    CharProperties::new(2, 0, 0x001E, -1, 0, -57, -57),
    CharProperties::new(1, 0, 0x001E, -1, 0, 0, 0),
    CharProperties::new(2, 0, 0x001E, -1, 0, -47, -47),
    CharProperties::new(2, 0, 0x001E, -1, 0, -54, -54),
    CharProperties::new(2, 0, 0x001E, -1, 0, -8, -8),
    CharProperties::new(2, 0, 0x001E, -1, 0, -86, -86),
    CharProperties::new(2, 0, 0x001E, -1, 0, -80, -80),
    CharProperties::new(2, 0, 0x001E, -1, 0, 7, 7),
    CharProperties::new(2, 0, 0x001E, -1, 0, -116, -116),
    CharProperties::new(1, 0, 0x001E, -1, -60, 0, 0),
    CharProperties::new(2, 0, 0x001E, -1, 0, -96, -96),
    CharProperties::new(1, 0, 0x001E, -1, -7, 0, 0),
    CharProperties::new(1, 0, 0x001E, -1, 80, 0, 0),
    CharProperties::new(28, 0, 0x0000, -1, 0, 0, 0),
    CharProperties::new(7, 8, 0x0000, -1, 0, 0, 0),
    CharProperties::new(1, 0, 0x001E, -1, 15, 0, 0),
    CharProperties::new(2, 0, 0x001E, -1, 0, -15, -15),
    CharProperties::new(1, 0, 0x001E, -1, 48, 0, 0),
    CharProperties::new(24, 0, 0x0000, -1, 0, 0, 0),
    CharProperties::new(2, 0, 0x001E, -1, 0, -48, -48),
    CharProperties::new(20, 13, 0x0000, -1, 0, 0, 0),
    CharProperties::new(6, 8, 0x0214, -1, 0, 0, 0),
    CharProperties::new(20, 1, 0x0000, -1, 0, 0, 0),
    CharProperties::new(24, 1, 0x0000, -1, 0, 0, 0),
    CharProperties::new(5, 1, 0x001E, -1, 0, 0, 0),
    CharProperties::new(16, 6, 0x0034, -1, 0, 0, 0),
    CharProperties::new(25, 2, 0x0000, -1, 0, 0, 0),
    CharProperties::new(26, 2, 0x0006, -1, 0, 0, 0),
    CharProperties::new(24, 2, 0x0000, -1, 0, 0, 0),
    CharProperties::new(16, 2, 0x0034, -1, 0, 0, 0),
    CharProperties::new(5, 2, 0x001E, -1, 0, 0, 0),
    CharProperties::new(4, 2, 0x001E, -1, 0, 0, 0),
    CharProperties::new(9, 6, 0x0814, 0, 0, 0, 0),
    CharProperties::new(24, 6, 0x0000, -1, 0, 0, 0),
    CharProperties::new(28, 2, 0x0000, -1, 0, 0, 0),
    CharProperties::new(9, 1, 0x0814, 0, 0, 0, 0),
    CharProperties::new(4, 1, 0x001E, -1, 0, 0, 0),
    CharProperties::new(26, 1, 0x0006, -1, 0, 0, 0),
    CharProperties::new(27, 2, 0x0000, -1, 0, 0, 0),
    CharProperties::new(8, 0, 0x0214, -1, 0, 0, 0),
    CharProperties::new(9, 0, 0x0814, 0, 0, 0, 0),
    CharProperties::new(11, 0, 0x0000, -2, 0, 0, 0),
    CharProperties::new(11, 0, 0x0000, 16, 0, 0, 0),
    CharProperties::new(11, 0, 0x0000, 0, 0, 0, 0),
    CharProperties::new(11, 0, 0x0000, 100, 0, 0, 0),
    CharProperties::new(11, 0, 0x0000, 1000, 0, 0, 0),
    CharProperties::new(11, 13, 0x0000, 0, 0, 0, 0),
    CharProperties::new(11, 13, 0x0000, 1, 0, 0, 0),
    CharProperties::new(11, 13, 0x0000, 2, 0, 0, 0),
    CharProperties::new(11, 13, 0x0000, 3, 0, 0, 0),
    CharProperties::new(6, 0, 0x0214, -1, 0, 0, 0),
    CharProperties::new(8, 0, 0x0014, -1, 0, 0, 0),
    CharProperties::new(1, 0, 0x001E, -1, 7264, 0, 0),
    CharProperties::new(2, 0, 0x001E, -1, 0, 3008, 0),
    CharProperties::new(11, 0, 0x0010, 1, 0, 0, 0),
    CharProperties::new(11, 0, 0x0010, 2, 0, 0, 0),
    CharProperties::new(11, 0, 0x0010, 3, 0, 0, 0),
    CharProperties::new(11, 0, 0x0010, 4, 0, 0, 0),
    CharProperties::new(11, 0, 0x0010, 5, 0, 0, 0),
    CharProperties::new(11, 0, 0x0010, 6, 0, 0, 0),
    CharProperties::new(11, 0, 0x0010, 7, 0, 0, 0),
    CharProperties::new(11, 0, 0x0010, 8, 0, 0, 0),
    CharProperties::new(11, 0, 0x0010, 9, 0, 0, 0),
    CharProperties::new(11, 0, 0x0000, 10, 0, 0, 0),
    CharProperties::new(11, 0, 0x0000, 20, 0, 0, 0),
    CharProperties::new(11, 0, 0x0000, 30, 0, 0, 0),
    CharProperties::new(11, 0, 0x0000, 40, 0, 0, 0),
    CharProperties::new(11, 0, 0x0000, 50, 0, 0, 0),
    CharProperties::new(11, 0, 0x0000, 60, 0, 0, 0),
    CharProperties::new(11, 0, 0x0000, 70, 0, 0, 0),
    CharProperties::new(11, 0, 0x0000, 80, 0, 0, 0),
    CharProperties::new(11, 0, 0x0000, 90, 0, 0, 0),
    CharProperties::new(11, 0, 0x0000, 10000, 0, 0, 0),
    CharProperties::new(1, 0, 0x001E, -1, 38864, 0, 0),
    CharProperties::new(10, 0, 0x001E, 17, 0, 0, 0),
    CharProperties::new(10, 0, 0x001E, 18, 0, 0, 0),
    CharProperties::new(10, 0, 0x001E, 19, 0, 0, 0),
    CharProperties::new(6, 8, 0x021C, -1, 0, 0, 0),
    CharProperties::new(2, 0, 0x001E, -1, 0, -6254, -6254),
    CharProperties::new(2, 0, 0x001E, -1, 0, -6253, -6253),
    CharProperties::new(2, 0, 0x001E, -1, 0, -6244, -6244),
    CharProperties::new(2, 0, 0x001E, -1, 0, -6242, -6242),
    CharProperties::new(2, 0, 0x001E, -1, 0, -6243, -6243),
    CharProperties::new(2, 0, 0x001E, -1, 0, -6236, -6236),
    CharProperties::new(2, 0, 0x001E, -1, 0, -6181, -6181),
    CharProperties::new(2, 0, 0x001E, -1, 0, 35266, 35266),
    CharProperties::new(1, 0, 0x001E, -1, -3008, 0, 0),
    CharProperties::new(2, 0, 0x001E, -1, 0, 35332, 35332),
    CharProperties::new(2, 0, 0x001E, -1, 0, 3814, 3814),
    CharProperties::new(2, 0, 0x001E, -1, 0, 35384, 35384),
    CharProperties::new(2, 0, 0x001E, -1, 0, -59, -59),
    CharProperties::new(1, 0, 0x001E, -1, -7615, 0, 0),
    CharProperties::new(2, 0, 0x001E, -1, 0, 8, 8),
    CharProperties::new(1, 0, 0x001E, -1, -8, 0, 0),
    CharProperties::new(2, 0, 0x001E, -1, 0, 74, 74),
    CharProperties::new(2, 0, 0x001E, -1, 0, 86, 86),
    CharProperties::new(2, 0, 0x001E, -1, 0, 100, 100),
    CharProperties::new(2, 0, 0x001E, -1, 0, 128, 128),
    CharProperties::new(2, 0, 0x001E, -1, 0, 112, 112),
    CharProperties::new(2, 0, 0x001E, -1, 0, 126, 126),
    CharProperties::new(2, 0, 0x101E, -1, 0, 8, 8),
    CharProperties::new(3, 0, 0x101E, -1, -8, 0, 0),
    CharProperties::new(2, 0, 0x101E, -1, 0, 9, 9),
    CharProperties::new(1, 0, 0x001E, -1, -74, 0, 0),
    CharProperties::new(3, 0, 0x101E, -1, -9, 0, 0),
    CharProperties::new(2, 0, 0x001E, -1, 0, -7205, -7205),
    CharProperties::new(1, 0, 0x001E, -1, -86, 0, 0),
    CharProperties::new(1, 0, 0x001E, -1, -100, 0, 0),
    CharProperties::new(1, 0, 0x001E, -1, -112, 0, 0),
    CharProperties::new(1, 0, 0x001E, -1, -128, 0, 0),
    CharProperties::new(1, 0, 0x001E, -1, -126, 0, 0),
    CharProperties::new(12, 12, 0x0000, -1, 0, 0, 0),
    CharProperties::new(16, 0, 0x0034, -1, 0, 0, 0),
    CharProperties::new(16, 1, 0x0034, -1, 0, 0, 0),
    CharProperties::new(29, 13, 0x0000, -1, 0, 0, 0),
    CharProperties::new(30, 13, 0x0000, -1, 0, 0, 0),
    CharProperties::new(21, 13, 0x0000, -1, 0, 0, 0),
    CharProperties::new(13, 12, 0x0040, -1, 0, 0, 0),
    CharProperties::new(14, 10, 0x0040, -1, 0, 0, 0),
    CharProperties::new(16, 14, 0x0034, -1, 0, 0, 0),
    CharProperties::new(16, 16, 0x0034, -1, 0, 0, 0),
    CharProperties::new(16, 18, 0x0034, -1, 0, 0, 0),
    CharProperties::new(16, 15, 0x0034, -1, 0, 0, 0),
    CharProperties::new(16, 17, 0x0034, -1, 0, 0, 0),
    CharProperties::new(25, 7, 0x0000, -1, 0, 0, 0),
    CharProperties::new(16, 19, 0x0034, -1, 0, 0, 0),
    CharProperties::new(16, 20, 0x0034, -1, 0, 0, 0),
    CharProperties::new(16, 21, 0x0034, -1, 0, 0, 0),
    CharProperties::new(16, 22, 0x0034, -1, 0, 0, 0),
    CharProperties::new(11, 3, 0x0000, 0, 0, 0, 0),
    CharProperties::new(11, 3, 0x0000, 4, 0, 0, 0),
    CharProperties::new(11, 3, 0x0000, 5, 0, 0, 0),
    CharProperties::new(11, 3, 0x0000, 6, 0, 0, 0),
    CharProperties::new(11, 3, 0x0000, 7, 0, 0, 0),
    CharProperties::new(11, 3, 0x0000, 8, 0, 0, 0),
    CharProperties::new(11, 3, 0x0000, 9, 0, 0, 0),
    CharProperties::new(25, 13, 0x0018, -1, 0, 0, 0),
    CharProperties::new(1, 0, 0x001E, -1, -7517, 0, 0),
    CharProperties::new(1, 0, 0x001E, -1, -8383, 0, 0),
    CharProperties::new(1, 0, 0x001E, -1, -8262, 0, 0),
    CharProperties::new(28, 5, 0x0018, -1, 0, 0, 0),
    CharProperties::new(1, 0, 0x001E, -1, 28, 0, 0),
    CharProperties::new(2, 0, 0x001E, -1, 0, -28, -28),
    CharProperties::new(10, 0, 0x011E, 1, 16, 0, 0),
    CharProperties::new(10, 0, 0x011E, 2, 16, 0, 0),
    CharProperties::new(10, 0, 0x011E, 3, 16, 0, 0),
    CharProperties::new(10, 0, 0x011E, 4, 16, 0, 0),
    CharProperties::new(10, 0, 0x011E, 5, 16, 0, 0),
    CharProperties::new(10, 0, 0x011E, 6, 16, 0, 0),
    CharProperties::new(10, 0, 0x011E, 7, 16, 0, 0),
    CharProperties::new(10, 0, 0x011E, 8, 16, 0, 0),
    CharProperties::new(10, 0, 0x011E, 9, 16, 0, 0),
    CharProperties::new(10, 0, 0x011E, 10, 16, 0, 0),
    CharProperties::new(10, 0, 0x011E, 11, 16, 0, 0),
    CharProperties::new(10, 0, 0x011E, 12, 16, 0, 0),
    CharProperties::new(10, 0, 0x011E, 50, 16, 0, 0),
    CharProperties::new(10, 0, 0x011E, 100, 16, 0, 0),
    CharProperties::new(10, 0, 0x011E, 500, 16, 0, 0),
    CharProperties::new(10, 0, 0x011E, 1000, 16, 0, 0),
    CharProperties::new(10, 0, 0x009E, 1, 0, -16, -16),
    CharProperties::new(10, 0, 0x009E, 2, 0, -16, -16),
    CharProperties::new(10, 0, 0x009E, 3, 0, -16, -16),
    CharProperties::new(10, 0, 0x009E, 4, 0, -16, -16),
    CharProperties::new(10, 0, 0x009E, 5, 0, -16, -16),
    CharProperties::new(10, 0, 0x009E, 6, 0, -16, -16),
    CharProperties::new(10, 0, 0x009E, 7, 0, -16, -16),
    CharProperties::new(10, 0, 0x009E, 8, 0, -16, -16),
    CharProperties::new(10, 0, 0x009E, 9, 0, -16, -16),
    CharProperties::new(10, 0, 0x009E, 10, 0, -16, -16),
    CharProperties::new(10, 0, 0x009E, 11, 0, -16, -16),
    CharProperties::new(10, 0, 0x009E, 12, 0, -16, -16),
    CharProperties::new(10, 0, 0x009E, 50, 0, -16, -16),
    CharProperties::new(10, 0, 0x009E, 100, 0, -16, -16),
    CharProperties::new(10, 0, 0x009E, 500, 0, -16, -16),
    CharProperties::new(10, 0, 0x009E, 1000, 0, -16, -16),
    CharProperties::new(10, 0, 0x001E, 1000, 0, 0, 0),
    CharProperties::new(10, 0, 0x001E, 5000, 0, 0, 0),
    CharProperties::new(10, 0, 0x001E, 10000, 0, 0, 0),
    CharProperties::new(10, 0, 0x001E, 6, 0, 0, 0),
    CharProperties::new(10, 0, 0x001E, 50, 0, 0, 0),
    CharProperties::new(10, 0, 0x001E, 50000, 0, 0, 0),
    CharProperties::new(10, 0, 0x001E, 100000, 0, 0, 0),
    CharProperties::new(11, 13, 0x0000, 4, 0, 0, 0),
    CharProperties::new(11, 13, 0x0000, 5, 0, 0, 0),
    CharProperties::new(11, 13, 0x0000, 6, 0, 0, 0),
    CharProperties::new(11, 13, 0x0000, 7, 0, 0, 0),
    CharProperties::new(11, 13, 0x0000, 8, 0, 0, 0),
    CharProperties::new(11, 13, 0x0000, 9, 0, 0, 0),
    CharProperties::new(11, 13, 0x0000, 10, 0, 0, 0),
    CharProperties::new(11, 13, 0x0000, 11, 0, 0, 0),
    CharProperties::new(11, 13, 0x0000, 12, 0, 0, 0),
    CharProperties::new(11, 13, 0x0000, 13, 0, 0, 0),
    CharProperties::new(11, 13, 0x0000, 14, 0, 0, 0),
    CharProperties::new(11, 13, 0x0000, 15, 0, 0, 0),
    CharProperties::new(11, 13, 0x0000, 16, 0, 0, 0),
    CharProperties::new(11, 13, 0x0000, 17, 0, 0, 0),
    CharProperties::new(11, 13, 0x0000, 18, 0, 0, 0),
    CharProperties::new(11, 13, 0x0000, 19, 0, 0, 0),
    CharProperties::new(11, 13, 0x0000, 20, 0, 0, 0),
    CharProperties::new(11, 3, 0x0000, 10, 0, 0, 0),
    CharProperties::new(11, 3, 0x0000, 11, 0, 0, 0),
    CharProperties::new(11, 3, 0x0000, 12, 0, 0, 0),
    CharProperties::new(11, 3, 0x0000, 13, 0, 0, 0),
    CharProperties::new(11, 3, 0x0000, 14, 0, 0, 0),
    CharProperties::new(11, 3, 0x0000, 15, 0, 0, 0),
    CharProperties::new(11, 3, 0x0000, 16, 0, 0, 0),
    CharProperties::new(11, 3, 0x0000, 17, 0, 0, 0),
    CharProperties::new(11, 3, 0x0000, 18, 0, 0, 0),
    CharProperties::new(11, 3, 0x0000, 19, 0, 0, 0),
    CharProperties::new(11, 3, 0x0000, 20, 0, 0, 0),
    CharProperties::new(28, 0, 0x0300, -1, 26, 0, 0),
    CharProperties::new(28, 0, 0x0280, -1, 0, -26, -26),
    CharProperties::new(28, 13, 0x0001, -1, 0, 0, 0),
    CharProperties::new(1, 0, 0x001E, -1, -10743, 0, 0),
    CharProperties::new(1, 0, 0x001E, -1, -3814, 0, 0),
    CharProperties::new(1, 0, 0x001E, -1, -10727, 0, 0),
    CharProperties::new(2, 0, 0x001E, -1, 0, -10795, -10795),
    CharProperties::new(2, 0, 0x001E, -1, 0, -10792, -10792),
    CharProperties::new(1, 0, 0x001E, -1, -10780, 0, 0),
    CharProperties::new(1, 0, 0x001E, -1, -10749, 0, 0),
    CharProperties::new(1, 0, 0x001E, -1, -10783, 0, 0),
    CharProperties::new(1, 0, 0x001E, -1, -10782, 0, 0),
    CharProperties::new(1, 0, 0x001E, -1, -10815, 0, 0),
    CharProperties::new(2, 0, 0x001E, -1, 0, -7264, -7264),
    CharProperties::new(5, 0, 0x041E, -1, 0, 0, 0),
    CharProperties::new(10, 0, 0x041E, 0, 0, 0, 0),
    CharProperties::new(22, 13, 0x0000, -1, 0, 0, 0),
    CharProperties::new(10, 0, 0x041E, 1, 0, 0, 0),
    CharProperties::new(10, 0, 0x041E, 2, 0, 0, 0),
    CharProperties::new(10, 0, 0x041E, 3, 0, 0, 0),
    CharProperties::new(10, 0, 0x041E, 4, 0, 0, 0),
    CharProperties::new(10, 0, 0x041E, 5, 0, 0, 0),
    CharProperties::new(10, 0, 0x041E, 6, 0, 0, 0),
    CharProperties::new(10, 0, 0x041E, 7, 0, 0, 0),
    CharProperties::new(10, 0, 0x041E, 8, 0, 0, 0),
    CharProperties::new(10, 0, 0x041E, 9, 0, 0, 0),
    CharProperties::new(10, 0, 0x041E, 10, 0, 0, 0),
    CharProperties::new(10, 0, 0x041E, 20, 0, 0, 0),
    CharProperties::new(10, 0, 0x041E, 30, 0, 0, 0),
    CharProperties::new(27, 13, 0x0018, -1, 0, 0, 0),
    CharProperties::new(11, 0, 0x0000, 1, 0, 0, 0),
    CharProperties::new(11, 0, 0x0000, 2, 0, 0, 0),
    CharProperties::new(11, 0, 0x0000, 3, 0, 0, 0),
    CharProperties::new(11, 0, 0x0000, 4, 0, 0, 0),
    CharProperties::new(11, 0, 0x0000, 5, 0, 0, 0),
    CharProperties::new(11, 0, 0x0000, 6, 0, 0, 0),
    CharProperties::new(11, 0, 0x0000, 7, 0, 0, 0),
    CharProperties::new(11, 0, 0x0000, 8, 0, 0, 0),
    CharProperties::new(11, 0, 0x0000, 9, 0, 0, 0),
    CharProperties::new(11, 13, 0x0000, 21, 0, 0, 0),
    CharProperties::new(11, 13, 0x0000, 22, 0, 0, 0),
    CharProperties::new(11, 13, 0x0000, 23, 0, 0, 0),
    CharProperties::new(11, 13, 0x0000, 24, 0, 0, 0),
    CharProperties::new(11, 13, 0x0000, 25, 0, 0, 0),
    CharProperties::new(11, 13, 0x0000, 26, 0, 0, 0),
    CharProperties::new(11, 13, 0x0000, 27, 0, 0, 0),
    CharProperties::new(11, 13, 0x0000, 28, 0, 0, 0),
    CharProperties::new(11, 13, 0x0000, 29, 0, 0, 0),
    CharProperties::new(11, 13, 0x0000, 30, 0, 0, 0),
    CharProperties::new(11, 13, 0x0000, 31, 0, 0, 0),
    CharProperties::new(11, 13, 0x0000, 32, 0, 0, 0),
    CharProperties::new(11, 13, 0x0000, 33, 0, 0, 0),
    CharProperties::new(11, 13, 0x0000, 34, 0, 0, 0),
    CharProperties::new(11, 13, 0x0000, 35, 0, 0, 0),
    CharProperties::new(11, 13, 0x0000, 36, 0, 0, 0),
    CharProperties::new(11, 13, 0x0000, 37, 0, 0, 0),
    CharProperties::new(11, 13, 0x0000, 38, 0, 0, 0),
    CharProperties::new(11, 13, 0x0000, 39, 0, 0, 0),
    CharProperties::new(11, 13, 0x0000, 40, 0, 0, 0),
    CharProperties::new(11, 13, 0x0000, 41, 0, 0, 0),
    CharProperties::new(11, 13, 0x0000, 42, 0, 0, 0),
    CharProperties::new(11, 13, 0x0000, 43, 0, 0, 0),
    CharProperties::new(11, 13, 0x0000, 44, 0, 0, 0),
    CharProperties::new(11, 13, 0x0000, 45, 0, 0, 0),
    CharProperties::new(11, 13, 0x0000, 46, 0, 0, 0),
    CharProperties::new(11, 13, 0x0000, 47, 0, 0, 0),
    CharProperties::new(11, 13, 0x0000, 48, 0, 0, 0),
    CharProperties::new(11, 13, 0x0000, 49, 0, 0, 0),
    CharProperties::new(11, 13, 0x0000, 50, 0, 0, 0),
    CharProperties::new(10, 0, 0x001E, 1, 0, 0, 0),
    CharProperties::new(10, 0, 0x001E, 2, 0, 0, 0),
    CharProperties::new(10, 0, 0x001E, 3, 0, 0, 0),
    CharProperties::new(10, 0, 0x001E, 4, 0, 0, 0),
    CharProperties::new(10, 0, 0x001E, 5, 0, 0, 0),
    CharProperties::new(10, 0, 0x001E, 7, 0, 0, 0),
    CharProperties::new(10, 0, 0x001E, 8, 0, 0, 0),
    CharProperties::new(10, 0, 0x001E, 9, 0, 0, 0),
    CharProperties::new(10, 0, 0x001E, 0, 0, 0, 0),
    CharProperties::new(1, 0, 0x001E, -1, -35332, 0, 0),
    CharProperties::new(27, 0, 0x0000, -1, 0, 0, 0),
    CharProperties::new(1, 0, 0x001E, -1, -42280, 0, 0),
    CharProperties::new(2, 0, 0x001E, -1, 0, 48, 48),
    CharProperties::new(1, 0, 0x001E, -1, -42308, 0, 0),
    CharProperties::new(1, 0, 0x001E, -1, -42319, 0, 0),
    CharProperties::new(1, 0, 0x001E, -1, -42315, 0, 0),
    CharProperties::new(1, 0, 0x001E, -1, -42305, 0, 0),
    CharProperties::new(1, 0, 0x001E, -1, -42258, 0, 0),
    CharProperties::new(1, 0, 0x001E, -1, -42282, 0, 0),
    CharProperties::new(1, 0, 0x001E, -1, -42261, 0, 0),
    CharProperties::new(1, 0, 0x001E, -1, 928, 0, 0),
    CharProperties::new(1, 0, 0x001E, -1, -48, 0, 0),
    CharProperties::new(1, 0, 0x001E, -1, -42307, 0, 0),
    CharProperties::new(1, 0, 0x001E, -1, -35384, 0, 0),
    CharProperties::new(2, 0, 0x001E, -1, 0, -928, -928),
    CharProperties::new(2, 0, 0x001E, -1, 0, -38864, -38864),
    CharProperties::new(19, 0, 0x0000, -1, 0, 0, 0),
    CharProperties::new(18, 0, 0x0000, -1, 0, 0, 0),
    CharProperties::new(5, 0, 0x041E, 3, 0, 0, 0),
    CharProperties::new(5, 0, 0x041E, 10, 0, 0, 0),
    CharProperties::new(5, 0, 0x041E, 2, 0, 0, 0),
    CharProperties::new(5, 0, 0x041E, 0, 0, 0, 0),
    CharProperties::new(5, 0, 0x041E, 6, 0, 0, 0),
    CharProperties::new(16, 13, 0x0034, -1, 0, 0, 0),
    CharProperties::new(11, 0, 0x0000, 200, 0, 0, 0),
    CharProperties::new(11, 0, 0x0000, 300, 0, 0, 0),
    CharProperties::new(11, 0, 0x0000, 400, 0, 0, 0),
    CharProperties::new(11, 0, 0x0000, 500, 0, 0, 0),
    CharProperties::new(11, 0, 0x0000, 600, 0, 0, 0),
    CharProperties::new(11, 0, 0x0000, 700, 0, 0, 0),
    CharProperties::new(11, 0, 0x0000, 800, 0, 0, 0),
    CharProperties::new(11, 0, 0x0000, 900, 0, 0, 0),
    CharProperties::new(11, 0, 0x0000, 2000, 0, 0, 0),
    CharProperties::new(11, 0, 0x0000, 3000, 0, 0, 0),
    CharProperties::new(11, 0, 0x0000, 4000, 0, 0, 0),
    CharProperties::new(11, 0, 0x0000, 5000, 0, 0, 0),
    CharProperties::new(11, 0, 0x0000, 6000, 0, 0, 0),
    CharProperties::new(11, 0, 0x0000, 7000, 0, 0, 0),
    CharProperties::new(11, 0, 0x0000, 8000, 0, 0, 0),
    CharProperties::new(11, 0, 0x0000, 9000, 0, 0, 0),
    CharProperties::new(11, 0, 0x0000, 20000, 0, 0, 0),
    CharProperties::new(11, 0, 0x0000, 30000, 0, 0, 0),
    CharProperties::new(11, 0, 0x0000, 40000, 0, 0, 0),
    CharProperties::new(11, 0, 0x0000, 50000, 0, 0, 0),
    CharProperties::new(11, 0, 0x0000, 60000, 0, 0, 0),
    CharProperties::new(11, 0, 0x0000, 70000, 0, 0, 0),
    CharProperties::new(11, 0, 0x0000, 80000, 0, 0, 0),
    CharProperties::new(11, 0, 0x0000, 90000, 0, 0, 0),
    CharProperties::new(10, 13, 0x001E, -2, 0, 0, 0),
    CharProperties::new(10, 13, 0x001E, 1, 0, 0, 0),
    CharProperties::new(10, 13, 0x001E, 5, 0, 0, 0),
    CharProperties::new(10, 13, 0x001E, 50, 0, 0, 0),
    CharProperties::new(10, 13, 0x001E, 500, 0, 0, 0),
    CharProperties::new(10, 13, 0x001E, 5000, 0, 0, 0),
    CharProperties::new(10, 13, 0x001E, 50000, 0, 0, 0),
    CharProperties::new(10, 13, 0x001E, 10, 0, 0, 0),
    CharProperties::new(10, 13, 0x001E, 100, 0, 0, 0),
    CharProperties::new(10, 13, 0x001E, 1000, 0, 0, 0),
    CharProperties::new(10, 13, 0x001E, 10000, 0, 0, 0),
    CharProperties::new(10, 13, 0x001E, 2, 0, 0, 0),
    CharProperties::new(10, 13, 0x001E, 30, 0, 0, 0),
    CharProperties::new(10, 13, 0x001E, 300, 0, 0, 0),
    CharProperties::new(11, 3, 0x0000, 30, 0, 0, 0),
    CharProperties::new(11, 3, 0x0000, 40, 0, 0, 0),
    CharProperties::new(11, 3, 0x0000, 50, 0, 0, 0),
    CharProperties::new(11, 3, 0x0000, 60, 0, 0, 0),
    CharProperties::new(11, 3, 0x0000, 70, 0, 0, 0),
    CharProperties::new(11, 3, 0x0000, 80, 0, 0, 0),
    CharProperties::new(11, 3, 0x0000, 90, 0, 0, 0),
    CharProperties::new(11, 3, 0x0000, 100, 0, 0, 0),
    CharProperties::new(11, 3, 0x0000, 200, 0, 0, 0),
    CharProperties::new(11, 3, 0x0000, 300, 0, 0, 0),
    CharProperties::new(11, 3, 0x0000, 400, 0, 0, 0),
    CharProperties::new(11, 3, 0x0000, 500, 0, 0, 0),
    CharProperties::new(11, 3, 0x0000, 600, 0, 0, 0),
    CharProperties::new(11, 3, 0x0000, 700, 0, 0, 0),
    CharProperties::new(11, 3, 0x0000, 800, 0, 0, 0),
    CharProperties::new(11, 3, 0x0000, 900, 0, 0, 0),
    CharProperties::new(10, 0, 0x001E, 90, 0, 0, 0),
    CharProperties::new(10, 0, 0x001E, 900, 0, 0, 0),
    CharProperties::new(10, 0, 0x001E, 10, 0, 0, 0),
    CharProperties::new(10, 0, 0x001E, 20, 0, 0, 0),
    CharProperties::new(10, 0, 0x001E, 100, 0, 0, 0),
    CharProperties::new(1, 0, 0x001E, -1, 40, 0, 0),
    CharProperties::new(2, 0, 0x001E, -1, 0, -40, -40),
    CharProperties::new(1, 0, 0x001E, -1, 39, 0, 0),
    CharProperties::new(2, 0, 0x001E, -1, 0, -39, -39),
    CharProperties::new(11, 1, 0x0000, 1, 0, 0, 0),
    CharProperties::new(11, 1, 0x0000, 2, 0, 0, 0),
    CharProperties::new(11, 1, 0x0000, 3, 0, 0, 0),
    CharProperties::new(11, 1, 0x0000, 10, 0, 0, 0),
    CharProperties::new(11, 1, 0x0000, 20, 0, 0, 0),
    CharProperties::new(11, 1, 0x0000, 100, 0, 0, 0),
    CharProperties::new(11, 1, 0x0000, 1000, 0, 0, 0),
    CharProperties::new(11, 1, 0x0000, 10000, 0, 0, 0),
    CharProperties::new(28, 1, 0x0000, -1, 0, 0, 0),
    CharProperties::new(11, 1, 0x0000, 4, 0, 0, 0),
    CharProperties::new(11, 1, 0x0000, 5, 0, 0, 0),
    CharProperties::new(11, 1, 0x0000, -2, 0, 0, 0),
    CharProperties::new(11, 1, 0x0000, 6, 0, 0, 0),
    CharProperties::new(11, 1, 0x0000, 7, 0, 0, 0),
    CharProperties::new(11, 1, 0x0000, 8, 0, 0, 0),
    CharProperties::new(11, 1, 0x0000, 9, 0, 0, 0),
    CharProperties::new(11, 1, 0x0000, 30, 0, 0, 0),
    CharProperties::new(11, 1, 0x0000, 40, 0, 0, 0),
    CharProperties::new(11, 1, 0x0000, 50, 0, 0, 0),
    CharProperties::new(11, 1, 0x0000, 60, 0, 0, 0),
    CharProperties::new(11, 1, 0x0000, 70, 0, 0, 0),
    CharProperties::new(11, 1, 0x0000, 200, 0, 0, 0),
    CharProperties::new(11, 1, 0x0000, 300, 0, 0, 0),
    CharProperties::new(11, 1, 0x0000, 400, 0, 0, 0),
    CharProperties::new(11, 1, 0x0000, 500, 0, 0, 0),
    CharProperties::new(11, 1, 0x0000, 600, 0, 0, 0),
    CharProperties::new(11, 1, 0x0000, 700, 0, 0, 0),
    CharProperties::new(11, 1, 0x0000, 800, 0, 0, 0),
    CharProperties::new(11, 1, 0x0000, 900, 0, 0, 0),
    CharProperties::new(11, 1, 0x0000, 2000, 0, 0, 0),
    CharProperties::new(11, 1, 0x0000, 3000, 0, 0, 0),
    CharProperties::new(11, 1, 0x0000, 4000, 0, 0, 0),
    CharProperties::new(11, 1, 0x0000, 5000, 0, 0, 0),
    CharProperties::new(11, 1, 0x0000, 6000, 0, 0, 0),
    CharProperties::new(11, 1, 0x0000, 7000, 0, 0, 0),
    CharProperties::new(11, 1, 0x0000, 8000, 0, 0, 0),
    CharProperties::new(11, 1, 0x0000, 9000, 0, 0, 0),
    CharProperties::new(11, 1, 0x0000, 20000, 0, 0, 0),
    CharProperties::new(11, 1, 0x0000, 30000, 0, 0, 0),
    CharProperties::new(11, 1, 0x0000, 40000, 0, 0, 0),
    CharProperties::new(11, 1, 0x0000, 50000, 0, 0, 0),
    CharProperties::new(11, 1, 0x0000, 60000, 0, 0, 0),
    CharProperties::new(11, 1, 0x0000, 70000, 0, 0, 0),
    CharProperties::new(11, 1, 0x0000, 80000, 0, 0, 0),
    CharProperties::new(11, 1, 0x0000, 90000, 0, 0, 0),
    CharProperties::new(11, 1, 0x0000, 100000, 0, 0, 0),
    CharProperties::new(11, 1, 0x0000, 200000, 0, 0, 0),
    CharProperties::new(11, 1, 0x0000, 300000, 0, 0, 0),
    CharProperties::new(11, 1, 0x0000, 400000, 0, 0, 0),
    CharProperties::new(11, 1, 0x0000, 500000, 0, 0, 0),
    CharProperties::new(11, 1, 0x0000, 600000, 0, 0, 0),
    CharProperties::new(11, 1, 0x0000, 700000, 0, 0, 0),
    CharProperties::new(11, 1, 0x0000, 800000, 0, 0, 0),
    CharProperties::new(11, 1, 0x0000, 900000, 0, 0, 0),
    CharProperties::new(1, 1, 0x001E, -1, 64, 0, 0),
    CharProperties::new(2, 1, 0x001E, -1, 0, -64, -64),
    CharProperties::new(11, 6, 0x0000, 1, 0, 0, 0),
    CharProperties::new(11, 6, 0x0000, 2, 0, 0, 0),
    CharProperties::new(11, 6, 0x0000, 3, 0, 0, 0),
    CharProperties::new(11, 6, 0x0000, 4, 0, 0, 0),
    CharProperties::new(11, 6, 0x0000, 5, 0, 0, 0),
    CharProperties::new(11, 6, 0x0000, 6, 0, 0, 0),
    CharProperties::new(11, 6, 0x0000, 7, 0, 0, 0),
    CharProperties::new(11, 6, 0x0000, 8, 0, 0, 0),
    CharProperties::new(11, 6, 0x0000, 9, 0, 0, 0),
    CharProperties::new(11, 6, 0x0000, 10, 0, 0, 0),
    CharProperties::new(11, 6, 0x0000, 20, 0, 0, 0),
    CharProperties::new(11, 6, 0x0000, 30, 0, 0, 0),
    CharProperties::new(11, 6, 0x0000, 40, 0, 0, 0),
    CharProperties::new(11, 6, 0x0000, 50, 0, 0, 0),
    CharProperties::new(11, 6, 0x0000, 60, 0, 0, 0),
    CharProperties::new(11, 6, 0x0000, 70, 0, 0, 0),
    CharProperties::new(11, 6, 0x0000, 80, 0, 0, 0),
    CharProperties::new(11, 6, 0x0000, 90, 0, 0, 0),
    CharProperties::new(11, 6, 0x0000, 100, 0, 0, 0),
    CharProperties::new(11, 6, 0x0000, 200, 0, 0, 0),
    CharProperties::new(11, 6, 0x0000, 300, 0, 0, 0),
    CharProperties::new(11, 6, 0x0000, 400, 0, 0, 0),
    CharProperties::new(11, 6, 0x0000, 500, 0, 0, 0),
    CharProperties::new(11, 6, 0x0000, 600, 0, 0, 0),
    CharProperties::new(11, 6, 0x0000, 700, 0, 0, 0),
    CharProperties::new(11, 6, 0x0000, 800, 0, 0, 0),
    CharProperties::new(11, 6, 0x0000, 900, 0, 0, 0),
    CharProperties::new(11, 6, 0x0000, -2, 0, 0, 0),
    CharProperties::new(11, 2, 0x0000, 1, 0, 0, 0),
    CharProperties::new(11, 2, 0x0000, 10, 0, 0, 0),
    CharProperties::new(11, 2, 0x0000, 20, 0, 0, 0),
    CharProperties::new(11, 2, 0x0000, 100, 0, 0, 0),
    CharProperties::new(11, 13, 0x0000, 60, 0, 0, 0),
    CharProperties::new(11, 13, 0x0000, 70, 0, 0, 0),
    CharProperties::new(11, 13, 0x0000, 80, 0, 0, 0),
    CharProperties::new(11, 13, 0x0000, 90, 0, 0, 0),
    CharProperties::new(11, 13, 0x0000, 100, 0, 0, 0),
    CharProperties::new(11, 13, 0x0000, 1000, 0, 0, 0),
    CharProperties::new(6, 0, 0x0014, -1, 0, 0, 0),
    CharProperties::new(10, 0, 0x001E, 216000, 0, 0, 0),
    CharProperties::new(10, 0, 0x001E, 432000, 0, 0, 0),
    CharProperties::new(10, 0, 0x001E, -2, 0, 0, 0),
    CharProperties::new(10, 0, 0x001E, 40, 0, 0, 0),
    CharProperties::new(11, 0, 0x0000, 1000000, 0, 0, 0),
    CharProperties::new(11, 0, 0x0000, 100000000, 0, 0, 0),
    CharProperties::new(6, 8, 0x0414, -1, 0, 0, 0),
    CharProperties::new(25, 0, 0x0000, -1, 0, 0, 0),
    CharProperties::new(1, 1, 0x001E, -1, 34, 0, 0),
    CharProperties::new(2, 1, 0x001E, -1, 0, -34, -34),
    CharProperties::new(11, 2, 0x0000, 2, 0, 0, 0),
    CharProperties::new(11, 2, 0x0000, 3, 0, 0, 0),
    CharProperties::new(11, 2, 0x0000, 4, 0, 0, 0),
    CharProperties::new(11, 2, 0x0000, 5, 0, 0, 0),
    CharProperties::new(11, 2, 0x0000, 6, 0, 0, 0),
    CharProperties::new(11, 2, 0x0000, 7, 0, 0, 0),
    CharProperties::new(11, 2, 0x0000, 8, 0, 0, 0),
    CharProperties::new(11, 2, 0x0000, 9, 0, 0, 0),
    CharProperties::new(11, 2, 0x0000, 30, 0, 0, 0),
    CharProperties::new(11, 2, 0x0000, 40, 0, 0, 0),
    CharProperties::new(11, 2, 0x0000, 50, 0, 0, 0),
    CharProperties::new(11, 2, 0x0000, 60, 0, 0, 0),
    CharProperties::new(11, 2, 0x0000, 70, 0, 0, 0),
    CharProperties::new(11, 2, 0x0000, 80, 0, 0, 0),
    CharProperties::new(11, 2, 0x0000, 90, 0, 0, 0),
    CharProperties::new(11, 2, 0x0000, 200, 0, 0, 0),
    CharProperties::new(11, 2, 0x0000, 300, 0, 0, 0),
    CharProperties::new(11, 2, 0x0000, 400, 0, 0, 0),
    CharProperties::new(11, 2, 0x0000, 500, 0, 0, 0),
    CharProperties::new(11, 2, 0x0000, 600, 0, 0, 0),
    CharProperties::new(11, 2, 0x0000, 700, 0, 0, 0),
    CharProperties::new(11, 2, 0x0000, 800, 0, 0, 0),
    CharProperties::new(11, 2, 0x0000, 900, 0, 0, 0),
    CharProperties::new(11, 2, 0x0000, 1000, 0, 0, 0),
    CharProperties::new(11, 2, 0x0000, 2000, 0, 0, 0),
    CharProperties::new(11, 2, 0x0000, 3000, 0, 0, 0),
    CharProperties::new(11, 2, 0x0000, 4000, 0, 0, 0),
    CharProperties::new(11, 2, 0x0000, 5000, 0, 0, 0),
    CharProperties::new(11, 2, 0x0000, 6000, 0, 0, 0),
    CharProperties::new(11, 2, 0x0000, 7000, 0, 0, 0),
    CharProperties::new(11, 2, 0x0000, 8000, 0, 0, 0),
    CharProperties::new(11, 2, 0x0000, 9000, 0, 0, 0),
    CharProperties::new(11, 2, 0x0000, 10000, 0, 0, 0),
    CharProperties::new(11, 2, 0x0000, 20000, 0, 0, 0),
    CharProperties::new(11, 2, 0x0000, 30000, 0, 0, 0),
    CharProperties::new(11, 2, 0x0000, 40000, 0, 0, 0),
    CharProperties::new(11, 2, 0x0000, 50000, 0, 0, 0),
    CharProperties::new(11, 2, 0x0000, 60000, 0, 0, 0),
    CharProperties::new(11, 2, 0x0000, 70000, 0, 0, 0),
    CharProperties::new(11, 2, 0x0000, 80000, 0, 0, 0),
    CharProperties::new(11, 2, 0x0000, 90000, 0, 0, 0),
    CharProperties::new(11, 2, 0x0000, 100000, 0, 0, 0),
    CharProperties::new(11, 2, 0x0000, 200000, 0, 0, 0),
    CharProperties::new(11, 2, 0x0000, 10000000, 0, 0, 0),
    CharProperties::new(11, 2, 0x0000, 20000000, 0, 0, 0),
    CharProperties::new(11, 2, 0x0000, -2, 0, 0, 0),
    CharProperties::new(28, 0, 0x0300, -1, 0, 0, 0),
    CharProperties::new(5, 0, 0x041E, 9, 0, 0, 0),
];

#[rustfmt::skip]
pub static LATIN1: [u16; 256] = [
    1, 1, 1, 1, 1, 1, 1, 1, 1, 2, 3, 2, 4, 3, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 3, 3, 3, 2,
    5, 6, 6, 7, 8, 7, 6, 6, 9, 10, 6, 11, 12, 13, 12, 12,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 12, 6, 15, 16, 15, 6,
    6, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31,
    32, 33, 34, 35, 36, 37, 38, 39, 40, 41, 42, 9, 6, 10, 43, 44,
    43, 45, 46, 47, 48, 49, 50, 51, 52, 53, 54, 55, 56, 57, 58, 59,
    60, 61, 62, 63, 64, 65, 66, 67, 68, 69, 70, 9, 16, 10, 16, 1,
    1, 1, 1, 1, 1, 71, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    72, 6, 8, 8, 8, 8, 73, 6, 43, 73, 74, 75, 16, 76, 73, 43,
    77, 78, 79, 80, 43, 81, 6, 82, 43, 83, 74, 84, 85, 85, 85, 6,
    86, 86, 86, 86, 86, 86, 86, 86, 86, 86, 86, 86, 86, 86, 86, 86,
    86, 86, 86, 86, 86, 86, 86, 16, 86, 86, 86, 86, 86, 86, 86, 87,
    88, 88, 88, 88, 88, 88, 88, 88, 88, 88, 88, 88, 88, 88, 88, 88,
    88, 88, 88, 88, 88, 88, 88, 16, 88, 88, 88, 88, 88, 88, 88, 89,
];

#[rustfmt::skip]
pub static PLANE_0: [u16; 2048] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15,
    8, 16, 17, 18, 19, 20, 21, 22, 23, 23, 24, 25, 26, 27, 28, 29,
    30, 31, 32, 8, 33, 8, 34, 8, 8, 35, 36, 37, 38, 39, 40, 41,
    42, 43, 44, 45, 43, 43, 46, 47, 48, 49, 50, 43, 43, 51, 52, 53,
    54, 55, 56, 57, 58, 43, 59, 60, 61, 62, 63, 64, 65, 66, 67, 68,
    69, 70, 71, 72, 73, 74, 75, 76, 77, 78, 79, 80, 81, 82, 83, 84,
    85, 86, 87, 88, 89, 90, 91, 92, 93, 94, 95, 96, 97, 98, 99, 100,
    101, 102, 103, 104, 105, 106, 107, 104, 108, 109, 110, 111, 112, 113, 114, 104,
    115, 116, 117, 118, 119, 120, 121, 122, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 123, 115, 124, 125, 126, 115, 127, 115, 128, 129, 130, 131, 131, 132,
    133, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 134, 135, 115, 115, 136, 137, 138, 139, 140, 115, 141, 142, 143,
    144, 115, 145, 146, 147, 148, 115, 149, 150, 151, 152, 153, 115, 154, 155, 156,
    157, 115, 158, 159, 160, 161, 162, 104, 163, 164, 165, 166, 167, 168, 115, 169,
    115, 170, 171, 172, 173, 174, 175, 176, 177, 178, 179, 180, 181, 179, 23, 182,
    8, 8, 8, 8, 183, 8, 8, 8, 184, 185, 186, 187, 188, 189, 190, 191,
    192, 193, 194, 195, 196, 197, 198, 199, 200, 201, 202, 203, 204, 205, 206, 207,
    208, 209, 210, 211, 212, 213, 214, 215, 216, 217, 218, 219, 220, 221, 222, 223,
    156, 224, 225, 226, 227, 228, 229, 230, 156, 156, 156, 156, 156, 231, 232, 233,
    156, 156, 156, 234, 156, 235, 156, 156, 156, 156, 156, 236, 237, 156, 238, 239,
    218, 218, 218, 218, 218, 218, 218, 218, 240, 240, 240, 240, 241, 242, 243, 244,
    245, 246, 247, 248, 249, 250, 251, 252, 156, 253, 254, 255, 256, 156, 156, 257,
    258, 259, 260, 261, 8, 8, 8, 262, 263, 264, 115, 265, 266, 267, 267, 268,
    269, 270, 271, 104, 272, 156, 156, 273, 156, 156, 156, 156, 156, 156, 274, 275,
    276, 277, 101, 115, 278, 133, 115, 279, 280, 281, 115, 115, 282, 115, 156, 283,
    284, 285, 286, 287, 285, 288, 289, 218, 218, 218, 218, 290, 218, 218, 291, 292,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 156, 156,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    294, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 295, 156, 296, 172, 115, 115, 115, 115, 115, 115, 115, 115,
    297, 298, 8, 299, 300, 115, 115, 301, 302, 303, 8, 304, 305, 306, 307, 308,
    309, 310, 115, 311, 312, 313, 314, 315, 316, 317, 318, 319, 61, 320, 321, 322,
    115, 323, 324, 325, 115, 326, 327, 328, 329, 330, 331, 332, 333, 333, 115, 334,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 335, 336, 337,
    338, 338, 338, 338, 338, 338, 338, 338, 338, 338, 338, 338, 338, 338, 338, 338,
    338, 338, 338, 338, 338, 338, 338, 338, 338, 338, 338, 338, 338, 338, 338, 338,
    338, 338, 338, 338, 338, 338, 338, 338, 338, 338, 338, 338, 338, 338, 338, 338,
    338, 338, 338, 338, 338, 338, 338, 338, 338, 338, 338, 338, 338, 338, 338, 338,
    339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339,
    339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339,
    339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339,
    339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339,
    339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339,
    339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339,
    339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339,
    339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339,
    339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339,
    339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339,
    339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339,
    339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339, 339,
    339, 339, 339, 339, 339, 339, 339, 339, 293, 293, 293, 340, 293, 341, 342, 343,
    293, 293, 293, 344, 293, 293, 345, 104, 346, 347, 348, 43, 43, 349, 350, 43,
    43, 43, 43, 43, 43, 43, 43, 43, 43, 351, 352, 43, 353, 43, 354, 355,
    356, 357, 358, 359, 43, 43, 43, 360, 361, 2, 362, 363, 364, 150, 365, 366,
];

#[rustfmt::skip]
pub static PLANE_1: [u16; 2048] = [
    367, 368, 369, 104, 115, 115, 115, 370, 371, 372, 373, 374, 375, 376, 377, 378,
    104, 104, 104, 104, 319, 115, 379, 380, 115, 381, 382, 383, 384, 115, 385, 104,
    386, 387, 388, 115, 389, 390, 391, 392, 115, 393, 115, 394, 395, 396, 104, 104,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 266, 149, 397, 398, 399, 104, 104,
    400, 401, 402, 403, 404, 405, 104, 406, 407, 408, 104, 104, 409, 410, 411, 412,
    413, 414, 415, 416, 417, 104, 418, 419, 409, 420, 421, 422, 423, 424, 104, 104,
    409, 409, 425, 104, 426, 427, 428, 429, 43, 430, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 431, 409, 432, 104, 104, 433, 434, 435, 436, 437, 436, 438, 439,
    440, 441, 442, 443, 444, 445, 446, 447, 448, 449, 450, 451, 167, 452, 453, 454,
    455, 456, 104, 104, 457, 458, 459, 460, 461, 462, 463, 464, 104, 104, 104, 104,
    115, 465, 466, 467, 115, 468, 469, 104, 104, 104, 104, 104, 115, 470, 471, 104,
    115, 472, 473, 474, 115, 475, 476, 104, 477, 478, 479, 104, 104, 104, 104, 104,
    115, 480, 104, 104, 104, 481, 482, 483, 484, 485, 486, 104, 104, 487, 488, 489,
    490, 491, 492, 115, 493, 494, 115, 146, 104, 104, 104, 104, 104, 104, 104, 104,
    495, 496, 497, 498, 499, 500, 104, 104, 501, 502, 503, 504, 505, 476, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 506, 104, 104, 104, 104, 104, 507, 508, 509,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 510, 104, 104, 104,
    511, 512, 513, 514, 115, 115, 115, 115, 115, 115, 515, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 516, 115, 115, 517,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 518, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 479, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 146, 150, 519, 115, 150, 520, 521, 115, 522, 523, 524, 525, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 481, 482, 526, 104, 104, 104, 115, 115, 527, 528, 529, 104, 104, 530,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 531,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 532, 104, 533, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 534,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 535, 536, 537, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 538, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    115, 115, 115, 539, 540, 541, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 23, 542, 543, 218, 218, 218, 544, 104,
    218, 218, 218, 218, 218, 218, 218, 545, 218, 546, 218, 547, 548, 549, 218, 550,
    156, 156, 551, 104, 104, 104, 104, 552, 156, 156, 553, 554, 104, 104, 104, 104,
    555, 556, 557, 558, 559, 560, 561, 562, 563, 564, 565, 566, 567, 555, 556, 568,
    558, 569, 570, 571, 562, 572, 573, 574, 575, 576, 577, 578, 579, 580, 581, 582,
    218, 218, 218, 218, 218, 218, 218, 218, 218, 218, 218, 218, 218, 218, 218, 218,
    23, 583, 23, 584, 585, 586, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 587, 104, 104, 104, 104, 104, 104, 104,
    588, 589, 104, 104, 104, 104, 104, 104, 115, 590, 591, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 516, 592, 115, 593, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 594,
    409, 409, 409, 409, 409, 409, 595, 104, 596, 597, 598, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 599, 600, 601, 104, 104, 602, 603, 104, 104, 104, 104, 104, 104,
    604, 605, 606, 607, 608, 609, 104, 610, 104, 104, 104, 104, 104, 104, 104, 104,
    156, 611, 156, 156, 273, 612, 613, 274, 614, 615, 616, 617, 618, 619, 104, 620,
    621, 622, 623, 624, 104, 104, 104, 104, 156, 156, 156, 156, 156, 156, 156, 625,
    156, 156, 156, 156, 156, 156, 156, 156, 156, 156, 156, 156, 156, 156, 156, 156,
    156, 156, 156, 156, 156, 156, 626, 627, 156, 156, 156, 273, 156, 156, 628, 629,
    611, 156, 630, 156, 631, 632, 104, 104, 156, 156, 156, 156, 156, 156, 156, 156,
    156, 156, 273, 633, 634, 635, 636, 637, 156, 156, 156, 156, 638, 156, 225, 639,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
];

#[rustfmt::skip]
pub static PLANE_2: [u16; 2048] = [
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 104, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 640, 293, 293, 293, 293, 293, 293,
    641, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 642, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 643,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    293, 293, 293, 293, 644, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    641, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
];

#[rustfmt::skip]
pub static PLANE_3: [u16; 2048] = [
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 293,
    293, 293, 293, 293, 293, 293, 293, 293, 293, 293, 645, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
];

#[rustfmt::skip]
pub static PLANE_E: [u16; 2048] = [
    646, 647, 647, 647, 104, 104, 104, 104, 23, 23, 23, 23, 23, 23, 23, 648,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
    104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104,
];

#[rustfmt::skip]
pub static CHUNKS: [u16; 20768] = [
    1, 1, 1, 1, 1, 1, 1, 1, 1, 2, 3, 2, 4, 3, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 3, 3, 3, 2,
    5, 6, 6, 7, 8, 7, 6, 6, 9, 10, 6, 11, 12, 13, 12, 12,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 12, 6, 15, 16, 15, 6,
    6, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31,
    32, 33, 34, 35, 36, 37, 38, 39, 40, 41, 42, 9, 6, 10, 43, 44,
    43, 45, 46, 47, 48, 49, 50, 51, 52, 53, 54, 55, 56, 57, 58, 59,
    60, 61, 62, 63, 64, 65, 66, 67, 68, 69, 70, 9, 16, 10, 16, 1,
    1, 1, 1, 1, 1, 71, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    72, 6, 8, 8, 8, 8, 73, 6, 43, 73, 74, 75, 16, 76, 73, 43,
    77, 78, 79, 80, 43, 81, 6, 82, 43, 83, 74, 84, 85, 85, 85, 6,
    86, 86, 86, 86, 86, 86, 86, 86, 86, 86, 86, 86, 86, 86, 86, 86,
    86, 86, 86, 86, 86, 86, 86, 16, 86, 86, 86, 86, 86, 86, 86, 87,
    88, 88, 88, 88, 88, 88, 88, 88, 88, 88, 88, 88, 88, 88, 88, 88,
    88, 88, 88, 88, 88, 88, 88, 16, 88, 88, 88, 88, 88, 88, 88, 89,
    90, 91, 90, 91, 90, 91, 90, 91, 90, 91, 90, 91, 90, 91, 90, 91,
    90, 91, 90, 91, 90, 91, 90, 91, 90, 91, 90, 91, 90, 91, 90, 91,
    90, 91, 90, 91, 90, 91, 90, 91, 90, 91, 90, 91, 90, 91, 90, 91,
    92, 93, 90, 91, 90, 91, 90, 91, 94, 90, 91, 90, 91, 90, 91, 90,
    91, 90, 91, 90, 91, 90, 91, 90, 91, 87, 90, 91, 90, 91, 90, 91,
    90, 91, 90, 91, 90, 91, 90, 91, 90, 91, 90, 91, 90, 91, 90, 91,
    90, 91, 90, 91, 90, 91, 90, 91, 90, 91, 90, 91, 90, 91, 90, 91,
    90, 91, 90, 91, 90, 91, 90, 91, 95, 90, 91, 90, 91, 90, 91, 96,
    97, 98, 90, 91, 90, 91, 99, 90, 91, 100, 100, 90, 91, 94, 101, 102,
    103, 90, 91, 100, 104, 105, 106, 107, 90, 91, 108, 94, 106, 109, 110, 111,
    90, 91, 90, 91, 90, 91, 112, 90, 91, 112, 94, 94, 90, 91, 112, 90,
    91, 113, 113, 90, 91, 90, 91, 114, 90, 91, 94, 115, 90, 91, 94, 116,
    115, 115, 115, 115, 117, 118, 119, 117, 118, 119, 117, 118, 119, 90, 91, 90,
    91, 90, 91, 90, 91, 90, 91, 90, 91, 90, 91, 90, 91, 120, 90, 91,
    90, 91, 90, 91, 90, 91, 90, 91, 90, 91, 90, 91, 90, 91, 90, 91,
    87, 117, 118, 119, 90, 91, 121, 122, 90, 91, 90, 91, 90, 91, 90, 91,
    123, 94, 90, 91, 90, 91, 90, 91, 90, 91, 90, 91, 90, 91, 90, 91,
    90, 91, 90, 91, 94, 94, 94, 94, 94, 94, 124, 90, 91, 125, 126, 127,
    127, 90, 91, 128, 129, 130, 90, 91, 90, 91, 90, 91, 90, 91, 90, 91,
    131, 132, 133, 134, 135, 94, 136, 136, 94, 137, 94, 138, 139, 94, 94, 94,
    136, 140, 94, 141, 94, 142, 143, 94, 144, 145, 143, 146, 147, 94, 94, 145,
    94, 148, 149, 94, 94, 150, 94, 94, 94, 94, 94, 94, 94, 151, 94, 94,
    152, 94, 153, 152, 94, 94, 94, 154, 152, 155, 156, 156, 157, 94, 94, 94,
    94, 94, 158, 94, 115, 94, 94, 94, 94, 94, 94, 94, 94, 159, 160, 94,
    94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94,
    161, 161, 161, 161, 161, 161, 161, 161, 161, 162, 162, 163, 163, 163, 163, 163,
    161, 161, 43, 43, 43, 43, 162, 162, 162, 162, 162, 162, 162, 162, 162, 162,
    163, 163, 43, 43, 43, 43, 43, 43, 43, 43, 43, 43, 43, 43, 43, 43,
    161, 161, 161, 161, 161, 43, 43, 43, 43, 43, 43, 43, 162, 43, 163, 43,
    43, 43, 43, 43, 43, 43, 43, 43, 43, 43, 43, 43, 43, 43, 43, 43,
    164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164,
    164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164,
    164, 164, 164, 164, 164, 165, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164,
    164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164,
    164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164,
    90, 91, 90, 91, 162, 43, 90, 91, 0, 0, 161, 110, 110, 110, 6, 166,
    0, 0, 0, 0, 43, 43, 167, 82, 168, 168, 168, 0, 169, 0, 170, 170,
    87, 86, 86, 86, 86, 86, 86, 86, 86, 86, 86, 86, 86, 86, 86, 86,
    86, 86, 0, 86, 86, 86, 86, 86, 86, 86, 86, 86, 171, 172, 172, 172,
    87, 88, 88, 88, 88, 88, 88, 88, 88, 88, 88, 88, 88, 88, 88, 88,
    88, 88, 173, 88, 88, 88, 88, 88, 88, 88, 88, 88, 174, 175, 175, 176,
    177, 178, 179, 179, 179, 180, 181, 182, 90, 91, 90, 91, 90, 91, 90, 91,
    90, 91, 90, 91, 90, 91, 90, 91, 90, 91, 90, 91, 90, 91, 90, 91,
    183, 184, 185, 186, 187, 188, 16, 90, 91, 189, 90, 91, 94, 123, 123, 123,
    190, 190, 190, 190, 190, 190, 190, 190, 190, 190, 190, 190, 190, 190, 190, 190,
    86, 86, 86, 86, 86, 86, 86, 86, 86, 86, 86, 86, 86, 86, 86, 86,
    86, 86, 86, 86, 86, 86, 86, 86, 86, 86, 86, 86, 86, 86, 86, 86,
    88, 88, 88, 88, 88, 88, 88, 88, 88, 88, 88, 88, 88, 88, 88, 88,
    88, 88, 88, 88, 88, 88, 88, 88, 88, 88, 88, 88, 88, 88, 88, 88,
    184, 184, 184, 184, 184, 184, 184, 184, 184, 184, 184, 184, 184, 184, 184, 184,
    90, 91, 191, 164, 164, 164, 164, 164, 192, 192, 90, 91, 90, 91, 90, 91,
    90, 91, 90, 91, 90, 91, 90, 91, 90, 91, 90, 91, 90, 91, 90, 91,
    193, 90, 91, 90, 91, 90, 91, 90, 91, 90, 91, 90, 91, 90, 91, 194,
    90, 91, 90, 91, 90, 91, 90, 91, 90, 91, 90, 91, 90, 91, 90, 91,
    90, 91, 90, 91, 90, 91, 90, 91, 90, 91, 90, 91, 90, 91, 90, 91,
    0, 195, 195, 195, 195, 195, 195, 195, 195, 195, 195, 195, 195, 195, 195, 195,
    195, 195, 195, 195, 195, 195, 195, 195, 195, 195, 195, 195, 195, 195, 195, 195,
    195, 195, 195, 195, 195, 195, 195, 0, 0, 163, 196, 196, 196, 196, 196, 196,
    94, 197, 197, 197, 197, 197, 197, 197, 197, 197, 197, 197, 197, 197, 197, 197,
    197, 197, 197, 197, 197, 197, 197, 197, 197, 197, 197, 197, 197, 197, 197, 197,
    197, 197, 197, 197, 197, 197, 197, 87, 94, 196, 198, 0, 0, 73, 73, 8,
    0, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164,
    164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164,
    199, 199, 199, 199, 199, 199, 199, 199, 199, 199, 199, 199, 199, 199, 200, 199,
    201, 199, 199, 201, 199, 199, 201, 199, 0, 0, 0, 0, 0, 0, 0, 0,
    202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202,
    202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 0, 0, 0, 0, 202,
    202, 202, 202, 201, 201, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    203, 203, 203, 203, 203, 203, 16, 16, 204, 7, 7, 205, 12, 206, 73, 73,
    199, 199, 199, 199, 199, 199, 199, 199, 199, 199, 199, 206, 207, 206, 206, 206,
    208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208,
    208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208,
    209, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 199, 199, 199, 199, 199,
    199, 199, 199, 199, 199, 199, 199, 199, 164, 199, 199, 199, 199, 199, 199, 199,
    210, 210, 210, 210, 210, 210, 210, 210, 210, 210, 7, 211, 211, 206, 208, 208,
    199, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208,
    208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208,
    208, 208, 208, 208, 206, 208, 199, 199, 199, 199, 199, 199, 199, 203, 73, 164,
    164, 199, 199, 199, 199, 209, 209, 199, 199, 73, 164, 164, 164, 199, 208, 208,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 208, 208, 208, 212, 212, 208,
    206, 206, 206, 206, 206, 206, 206, 206, 206, 206, 206, 206, 206, 206, 0, 207,
    208, 199, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208,
    208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208,
    199, 199, 199, 199, 199, 199, 199, 199, 199, 199, 199, 199, 199, 199, 199, 199,
    164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 0, 0, 208, 208, 208,
    208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208,
    208, 208, 208, 208, 208, 208, 199, 199, 199, 199, 199, 199, 199, 199, 199, 199,
    199, 208, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    213, 213, 213, 213, 213, 213, 213, 213, 213, 213, 202, 202, 202, 202, 202, 202,
    202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202,
    202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 164, 164, 164, 164, 164,
    164, 164, 164, 164, 214, 214, 73, 6, 6, 6, 214, 0, 0, 164, 215, 215,
    202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202,
    202, 202, 202, 202, 202, 202, 199, 199, 164, 164, 214, 199, 199, 199, 199, 199,
    199, 199, 199, 199, 214, 199, 199, 199, 214, 199, 199, 199, 199, 164, 0, 0,
    201, 201, 201, 201, 201, 201, 201, 201, 201, 201, 201, 201, 201, 201, 201, 0,
    202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202,
    202, 202, 202, 202, 202, 202, 202, 202, 202, 164, 164, 164, 0, 0, 201, 0,
    208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 0, 0, 0, 0, 0,
    208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208,
    208, 208, 208, 208, 208, 208, 208, 208, 216, 208, 208, 208, 208, 208, 208, 0,
    203, 203, 0, 0, 0, 0, 0, 0, 164, 164, 164, 164, 164, 164, 164, 164,
    208, 208, 208, 208, 208, 208, 208, 208, 208, 209, 164, 164, 164, 164, 164, 164,
    164, 164, 164, 164, 199, 199, 199, 199, 199, 199, 199, 199, 199, 199, 199, 199,
    164, 164, 203, 199, 199, 199, 199, 199, 199, 199, 164, 164, 164, 164, 164, 164,
    199, 199, 199, 199, 199, 199, 199, 199, 199, 199, 199, 199, 199, 199, 199, 199,
    199, 199, 199, 217, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 199, 217, 164, 115, 217, 217,
    217, 199, 199, 199, 199, 199, 199, 199, 199, 217, 217, 217, 217, 164, 217, 217,
    115, 164, 164, 164, 164, 199, 199, 199, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 199, 199, 196, 196, 218, 218, 218, 218, 218, 218, 218, 218, 218, 218,
    196, 163, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 199, 217, 217, 0, 115, 115, 115, 115, 115, 115, 115, 115, 0, 0, 115,
    115, 0, 0, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 0, 115, 115, 115, 115, 115, 115,
    115, 0, 115, 0, 0, 0, 115, 115, 115, 115, 0, 0, 164, 115, 217, 217,
    217, 199, 199, 199, 199, 0, 0, 217, 217, 0, 0, 217, 217, 164, 115, 0,
    0, 0, 0, 0, 0, 0, 0, 217, 0, 0, 0, 0, 115, 115, 0, 115,
    115, 115, 199, 199, 0, 0, 218, 218, 218, 218, 218, 218, 218, 218, 218, 218,
    115, 115, 8, 8, 219, 219, 219, 219, 219, 220, 191, 8, 115, 196, 164, 0,
    0, 199, 199, 217, 0, 115, 115, 115, 115, 115, 115, 0, 0, 0, 0, 115,
    115, 0, 0, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 0, 115, 115, 115, 115, 115, 115,
    115, 0, 115, 115, 0, 115, 115, 0, 115, 115, 0, 0, 164, 0, 217, 217,
    217, 199, 199, 0, 0, 0, 0, 199, 199, 0, 0, 199, 199, 164, 0, 0,
    0, 199, 0, 0, 0, 0, 0, 0, 0, 115, 115, 115, 115, 0, 115, 0,
    0, 0, 0, 0, 0, 0, 218, 218, 218, 218, 218, 218, 218, 218, 218, 218,
    199, 199, 115, 115, 115, 199, 196, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 199, 199, 217, 0, 115, 115, 115, 115, 115, 115, 115, 115, 115, 0, 115,
    115, 115, 0, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 0, 115, 115, 115, 115, 115, 115,
    115, 0, 115, 115, 0, 115, 115, 115, 115, 115, 0, 0, 164, 115, 217, 217,
    217, 199, 199, 199, 199, 199, 0, 199, 199, 217, 0, 217, 217, 164, 0, 0,
    115, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    115, 115, 199, 199, 0, 0, 218, 218, 218, 218, 218, 218, 218, 218, 218, 218,
    196, 8, 0, 0, 0, 0, 0, 0, 0, 115, 199, 199, 199, 164, 164, 164,
    0, 199, 217, 217, 0, 115, 115, 115, 115, 115, 115, 115, 115, 0, 0, 115,
    115, 0, 0, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 0, 115, 115, 115, 115, 115, 115,
    115, 0, 115, 115, 0, 115, 115, 115, 115, 115, 0, 0, 164, 115, 217, 199,
    217, 199, 199, 199, 199, 0, 0, 217, 217, 0, 0, 217, 217, 164, 0, 0,
    0, 0, 0, 0, 0, 164, 199, 217, 0, 0, 0, 0, 115, 115, 0, 115,
    115, 115, 199, 199, 0, 0, 218, 218, 218, 218, 218, 218, 218, 218, 218, 218,
    191, 115, 219, 219, 219, 219, 219, 219, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 199, 115, 0, 115, 115, 115, 115, 115, 115, 0, 0, 0, 115, 115,
    115, 0, 115, 115, 115, 115, 0, 0, 0, 115, 115, 0, 115, 0, 115, 115,
    0, 0, 0, 115, 115, 0, 0, 0, 115, 115, 115, 0, 0, 0, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 0, 0, 0, 0, 217, 217,
    199, 217, 217, 0, 0, 0, 217, 217, 217, 0, 217, 217, 217, 164, 0, 0,
    115, 0, 0, 0, 0, 0, 0, 217, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 218, 218, 218, 218, 218, 218, 218, 218, 218, 218,
    221, 222, 223, 73, 73, 73, 73, 73, 73, 8, 73, 0, 0, 0, 0, 0,
    199, 217, 217, 217, 164, 115, 115, 115, 115, 115, 115, 115, 115, 0, 115, 115,
    115, 0, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 0, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 0, 0, 164, 115, 199, 199,
    199, 217, 217, 217, 217, 0, 199, 199, 199, 0, 199, 199, 199, 164, 0, 0,
    0, 0, 0, 0, 0, 199, 199, 0, 115, 115, 115, 0, 0, 115, 0, 0,
    115, 115, 199, 199, 0, 0, 218, 218, 218, 218, 218, 218, 218, 218, 218, 218,
    0, 0, 0, 0, 0, 0, 0, 196, 224, 224, 224, 224, 225, 226, 227, 191,
    115, 199, 217, 217, 196, 115, 115, 115, 115, 115, 115, 115, 115, 0, 115, 115,
    115, 0, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 0, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 0, 115, 115, 115, 115, 115, 0, 0, 164, 115, 217, 228,
    217, 217, 217, 217, 217, 0, 228, 217, 217, 0, 217, 217, 199, 164, 0, 0,
    0, 0, 0, 0, 0, 217, 217, 0, 0, 0, 0, 0, 0, 115, 115, 0,
    115, 115, 199, 199, 0, 0, 218, 218, 218, 218, 218, 218, 218, 218, 218, 218,
    0, 115, 115, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    199, 199, 217, 217, 115, 115, 115, 115, 115, 115, 115, 115, 115, 0, 115, 115,
    115, 0, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 164, 164, 115, 217, 217,
    217, 199, 199, 199, 199, 0, 217, 217, 217, 0, 217, 217, 217, 164, 115, 191,
    0, 0, 0, 0, 115, 115, 115, 217, 219, 219, 219, 219, 219, 219, 219, 115,
    115, 115, 199, 199, 0, 0, 218, 218, 218, 218, 218, 218, 218, 218, 218, 218,
    221, 222, 223, 219, 219, 219, 219, 219, 219, 191, 115, 115, 115, 115, 115, 115,
    0, 199, 217, 217, 0, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 0, 0, 0, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 0, 115, 115, 115, 115, 115, 115, 115, 115, 115, 0, 115, 0, 0,
    115, 115, 115, 115, 115, 115, 115, 0, 0, 0, 164, 0, 0, 0, 0, 217,
    217, 217, 199, 199, 199, 0, 199, 0, 217, 217, 217, 217, 217, 217, 217, 217,
    0, 0, 0, 0, 0, 0, 218, 218, 218, 218, 218, 218, 218, 218, 218, 218,
    0, 0, 217, 217, 196, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 199, 115, 115, 199, 199, 199, 199, 199, 199, 199, 0, 0, 0, 0, 8,
    115, 115, 115, 115, 115, 115, 163, 164, 164, 164, 164, 164, 164, 199, 164, 196,
    218, 218, 218, 218, 218, 218, 218, 218, 218, 218, 196, 196, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 115, 115, 0, 115, 0, 115, 115, 115, 115, 115, 0, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 0, 115, 0, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 199, 115, 115, 199, 199, 199, 199, 199, 199, 164, 199, 199, 115, 0, 0,
    115, 115, 115, 115, 115, 0, 163, 0, 164, 164, 164, 164, 164, 199, 0, 0,
    218, 218, 218, 218, 218, 218, 218, 218, 218, 218, 0, 0, 115, 115, 115, 115,
    115, 191, 191, 191, 196, 196, 196, 196, 196, 196, 196, 196, 196, 196, 196, 196,
    196, 196, 196, 191, 196, 191, 191, 191, 164, 164, 191, 191, 191, 191, 191, 191,
    218, 218, 218, 218, 218, 218, 218, 218, 218, 218, 219, 219, 219, 219, 219, 219,
    219, 219, 219, 219, 191, 164, 191, 164, 191, 164, 9, 10, 9, 10, 229, 229,
    115, 115, 115, 115, 115, 115, 115, 115, 0, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 0, 0, 0,
    0, 199, 199, 199, 199, 199, 199, 199, 199, 199, 199, 199, 199, 199, 199, 217,
    199, 199, 164, 164, 164, 196, 164, 164, 115, 115, 115, 115, 115, 199, 199, 199,
    199, 199, 199, 199, 199, 199, 199, 199, 0, 199, 199, 199, 199, 199, 199, 199,
    199, 199, 199, 199, 199, 199, 199, 199, 199, 199, 199, 199, 199, 199, 199, 199,
    199, 199, 199, 199, 199, 199, 199, 199, 199, 199, 199, 199, 199, 0, 191, 191,
    191, 191, 191, 191, 191, 191, 164, 191, 191, 191, 191, 191, 191, 0, 191, 191,
    196, 196, 196, 196, 196, 191, 191, 191, 191, 196, 196, 0, 0, 0, 0, 0,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 217, 217, 199, 199, 199,
    199, 217, 199, 199, 199, 199, 199, 164, 217, 164, 164, 217, 217, 199, 199, 115,
    218, 218, 218, 218, 218, 218, 218, 218, 218, 218, 196, 196, 196, 196, 196, 196,
    115, 115, 115, 115, 115, 115, 217, 217, 199, 199, 115, 115, 115, 115, 199, 199,
    199, 115, 217, 217, 217, 115, 115, 217, 217, 217, 217, 217, 217, 217, 115, 115,
    115, 199, 199, 199, 199, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 199, 217, 217, 199, 199, 217, 217, 217, 217, 217, 217, 199, 115, 217,
    218, 218, 218, 218, 218, 218, 218, 218, 218, 218, 217, 217, 217, 199, 191, 191,
    230, 230, 230, 230, 230, 230, 230, 230, 230, 230, 230, 230, 230, 230, 230, 230,
    230, 230, 230, 230, 230, 230, 230, 230, 230, 230, 230, 230, 230, 230, 230, 230,
    230, 230, 230, 230, 230, 230, 0, 230, 0, 0, 0, 0, 0, 230, 0, 0,
    231, 231, 231, 231, 231, 231, 231, 231, 231, 231, 231, 231, 231, 231, 231, 231,
    231, 231, 231, 231, 231, 231, 231, 231, 231, 231, 231, 231, 231, 231, 231, 231,
    231, 231, 231, 231, 231, 231, 231, 231, 231, 231, 231, 196, 163, 231, 231, 231,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 0, 115, 115, 115, 115, 0, 0,
    115, 115, 115, 115, 115, 115, 115, 0, 115, 0, 115, 115, 115, 115, 0, 0,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 0, 115, 115, 115, 115, 0, 0,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 0, 115, 115, 115, 115, 0, 0, 115, 115, 115, 115, 115, 115, 115, 0,
    115, 0, 115, 115, 115, 115, 0, 0, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 0, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 0, 115, 115, 115, 115, 0, 0, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 0, 0, 164, 164, 164,
    196, 196, 196, 196, 196, 196, 196, 196, 196, 232, 233, 234, 235, 236, 237, 238,
    239, 240, 241, 242, 243, 244, 245, 246, 247, 248, 249, 222, 250, 0, 0, 0,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 0, 0, 0, 0, 0, 0,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    176, 176, 176, 176, 176, 176, 0, 0, 182, 182, 182, 182, 182, 182, 0, 0,
    198, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 191, 196, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    5, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 9, 10, 0, 0, 0,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 196, 196, 196, 252, 253,
    254, 115, 115, 115, 115, 115, 115, 115, 115, 0, 0, 0, 0, 0, 0, 0,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 199, 199, 164, 229, 0, 0, 0, 0, 0, 0, 0, 0, 0, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 199, 199, 229, 196, 196, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 199, 199, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 0, 115, 115,
    115, 0, 199, 199, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 164, 164, 217, 199, 199, 199, 199, 199, 199, 199, 217, 217,
    217, 217, 217, 217, 217, 217, 199, 217, 217, 164, 164, 164, 164, 164, 164, 164,
    164, 164, 164, 164, 196, 196, 196, 163, 196, 196, 196, 8, 115, 164, 0, 0,
    218, 218, 218, 218, 218, 218, 218, 218, 218, 218, 0, 0, 0, 0, 0, 0,
    224, 224, 224, 224, 224, 224, 224, 224, 224, 224, 0, 0, 0, 0, 0, 0,
    6, 6, 6, 6, 6, 6, 198, 6, 6, 6, 6, 164, 164, 164, 76, 164,
    218, 218, 218, 218, 218, 218, 218, 218, 218, 218, 0, 0, 0, 0, 0, 0,
    115, 115, 115, 163, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 0, 0, 0, 0, 0, 0, 0,
    115, 115, 115, 115, 115, 255, 255, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 199, 115, 0, 0, 0, 0, 0,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 0,
    199, 199, 199, 217, 217, 217, 217, 199, 199, 217, 217, 217, 0, 0, 0, 0,
    217, 217, 199, 217, 217, 217, 217, 217, 217, 164, 164, 164, 0, 0, 0, 0,
    73, 0, 0, 0, 6, 6, 218, 218, 218, 218, 218, 218, 218, 218, 218, 218,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 0, 0,
    115, 115, 115, 115, 115, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 0, 0, 0, 0,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 0, 0, 0, 0, 0, 0,
    218, 218, 218, 218, 218, 218, 218, 218, 218, 218, 232, 0, 0, 0, 73, 73,
    73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73,
    73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 199, 199, 217, 217, 199, 0, 0, 196, 196,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 217, 199, 217, 199, 199, 199, 199, 199, 199, 199, 0,
    164, 217, 199, 217, 217, 199, 199, 199, 199, 199, 199, 199, 199, 217, 217, 217,
    217, 217, 217, 199, 199, 164, 164, 164, 164, 164, 164, 164, 164, 0, 0, 164,
    218, 218, 218, 218, 218, 218, 218, 218, 218, 218, 0, 0, 0, 0, 0, 0,
    218, 218, 218, 218, 218, 218, 218, 218, 218, 218, 0, 0, 0, 0, 0, 0,
    196, 196, 196, 196, 196, 196, 196, 163, 196, 196, 196, 196, 196, 196, 0, 0,
    164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 192, 199,
    199, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 199, 199, 199, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    199, 199, 199, 199, 217, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 164, 217, 199, 199, 199, 199, 199, 217, 199, 217, 217, 217,
    217, 217, 199, 217, 229, 115, 115, 115, 115, 115, 115, 115, 115, 0, 0, 0,
    218, 218, 218, 218, 218, 218, 218, 218, 218, 218, 196, 196, 196, 196, 196, 196,
    196, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 164, 164, 164, 164, 164,
    164, 164, 164, 164, 191, 191, 191, 191, 191, 191, 191, 191, 191, 196, 196, 0,
    199, 199, 217, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 217, 199, 199, 199, 199, 217, 217, 199, 199, 229, 164, 199, 199, 115, 115,
    218, 218, 218, 218, 218, 218, 218, 218, 218, 218, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 164, 217, 199, 199, 217, 217, 217, 199, 217, 199,
    199, 199, 229, 229, 0, 0, 0, 0, 0, 0, 0, 0, 196, 196, 196, 196,
    115, 115, 115, 115, 217, 217, 217, 217, 217, 217, 217, 217, 199, 199, 199, 199,
    199, 199, 199, 199, 217, 217, 199, 164, 0, 0, 0, 196, 196, 196, 196, 196,
    218, 218, 218, 218, 218, 218, 218, 218, 218, 218, 0, 0, 0, 115, 115, 115,
    218, 218, 218, 218, 218, 218, 218, 218, 218, 218, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 163, 163, 163, 163, 163, 163, 196, 196,
    256, 257, 258, 259, 259, 260, 261, 262, 263, 0, 0, 0, 0, 0, 0, 0,
    264, 264, 264, 264, 264, 264, 264, 264, 264, 264, 264, 264, 264, 264, 264, 264,
    264, 264, 264, 264, 264, 264, 264, 264, 264, 264, 264, 264, 264, 264, 264, 264,
    264, 264, 264, 264, 264, 264, 264, 264, 264, 264, 264, 0, 0, 264, 264, 264,
    196, 196, 196, 196, 196, 196, 196, 196, 0, 0, 0, 0, 0, 0, 0, 0,
    164, 164, 164, 196, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164,
    164, 229, 164, 164, 164, 164, 164, 164, 164, 115, 115, 115, 115, 164, 115, 115,
    115, 115, 115, 115, 164, 115, 115, 229, 164, 164, 115, 0, 0, 0, 0, 0,
    94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94,
    94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94,
    94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 161, 161, 161, 161,
    161, 161, 161, 161, 161, 161, 161, 161, 161, 161, 161, 161, 161, 161, 161, 161,
    161, 161, 161, 161, 161, 161, 161, 161, 161, 161, 161, 161, 161, 161, 161, 161,
    161, 161, 161, 161, 161, 161, 161, 161, 161, 161, 161, 161, 161, 161, 161, 161,
    161, 161, 161, 161, 161, 161, 161, 161, 161, 161, 161, 94, 94, 94, 94, 94,
    94, 94, 94, 94, 94, 94, 94, 94, 161, 265, 94, 94, 94, 266, 94, 94,
    94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 267, 94,
    94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 161, 161, 161, 161, 161,
    164, 164, 164, 164, 164, 164, 164, 199, 199, 199, 199, 199, 199, 199, 199, 199,
    199, 199, 199, 199, 199, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164,
    90, 91, 90, 91, 90, 91, 90, 91, 90, 91, 90, 91, 90, 91, 90, 91,
    90, 91, 90, 91, 90, 91, 87, 87, 87, 87, 87, 268, 94, 94, 269, 94,
    270, 270, 270, 270, 270, 270, 270, 270, 271, 271, 271, 271, 271, 271, 271, 271,
    270, 270, 270, 270, 270, 270, 0, 0, 271, 271, 271, 271, 271, 271, 0, 0,
    270, 270, 270, 270, 270, 270, 270, 270, 271, 271, 271, 271, 271, 271, 271, 271,
    270, 270, 270, 270, 270, 270, 270, 270, 271, 271, 271, 271, 271, 271, 271, 271,
    270, 270, 270, 270, 270, 270, 0, 0, 271, 271, 271, 271, 271, 271, 0, 0,
    87, 270, 87, 270, 87, 270, 87, 270, 0, 271, 0, 271, 0, 271, 0, 271,
    270, 270, 270, 270, 270, 270, 270, 270, 271, 271, 271, 271, 271, 271, 271, 271,
    272, 272, 273, 273, 273, 273, 274, 274, 275, 275, 276, 276, 277, 277, 0, 0,
    278, 278, 278, 278, 278, 278, 278, 278, 279, 279, 279, 279, 279, 279, 279, 279,
    278, 278, 278, 278, 278, 278, 278, 278, 279, 279, 279, 279, 279, 279, 279, 279,
    278, 278, 278, 278, 278, 278, 278, 278, 279, 279, 279, 279, 279, 279, 279, 279,
    270, 270, 87, 280, 87, 0, 87, 87, 271, 271, 281, 281, 282, 43, 283, 43,
    43, 43, 87, 280, 87, 0, 87, 87, 284, 284, 284, 284, 282, 43, 43, 43,
    270, 270, 87, 87, 0, 0, 87, 87, 271, 271, 285, 285, 0, 43, 43, 43,
    270, 270, 87, 87, 87, 185, 87, 87, 271, 271, 286, 286, 189, 43, 43, 43,
    0, 0, 87, 280, 87, 0, 87, 87, 287, 287, 288, 288, 282, 43, 43, 0,
    5, 5, 5, 5, 5, 5, 5, 289, 5, 5, 5, 76, 76, 76, 290, 291,
    198, 198, 198, 198, 198, 198, 6, 6, 292, 293, 294, 292, 292, 293, 294, 292,
    6, 6, 6, 6, 6, 6, 6, 6, 295, 296, 297, 298, 299, 300, 301, 72,
    7, 7, 7, 7, 7, 6, 6, 6, 6, 75, 84, 6, 6, 6, 6, 44,
    44, 6, 6, 6, 302, 9, 10, 6, 6, 6, 6, 6, 6, 6, 6, 6,
    6, 6, 16, 6, 44, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 5,
    76, 76, 76, 76, 76, 0, 303, 304, 305, 306, 76, 76, 76, 76, 76, 76,
    307, 161, 0, 0, 308, 309, 310, 311, 312, 313, 11, 11, 16, 9, 10, 161,
    307, 307, 307, 307, 307, 307, 307, 307, 307, 307, 11, 11, 16, 9, 10, 0,
    161, 161, 161, 161, 161, 161, 161, 161, 161, 161, 161, 161, 161, 0, 0, 0,
    8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8,
    8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8,
    8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 192, 192, 192,
    192, 164, 192, 192, 192, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164,
    164, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    73, 73, 179, 73, 73, 73, 73, 179, 73, 73, 94, 179, 179, 179, 94, 94,
    179, 179, 179, 94, 73, 179, 73, 73, 314, 179, 179, 179, 179, 179, 73, 73,
    73, 73, 73, 73, 179, 73, 315, 73, 179, 73, 316, 317, 179, 179, 318, 94,
    179, 179, 319, 179, 94, 115, 115, 115, 115, 94, 73, 73, 94, 94, 179, 179,
    15, 16, 16, 16, 16, 179, 94, 94, 94, 94, 73, 16, 73, 73, 320, 191,
    85, 85, 85, 85, 85, 85, 85, 85, 85, 85, 85, 85, 85, 85, 85, 225,
    321, 322, 323, 324, 325, 326, 327, 328, 329, 330, 331, 332, 333, 334, 335, 336,
    337, 338, 339, 340, 341, 342, 343, 344, 345, 346, 347, 348, 349, 350, 351, 352,
    353, 354, 355, 90, 91, 356, 357, 358, 359, 224, 73, 73, 0, 0, 0, 0,
    16, 16, 16, 16, 16, 73, 73, 73, 73, 73, 16, 16, 73, 73, 73, 73,
    16, 73, 73, 16, 73, 73, 16, 73, 73, 73, 73, 73, 73, 73, 16, 73,
    73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73,
    73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 16, 16,
    73, 73, 16, 73, 16, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73,
    73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73,
    73, 73, 73, 73, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16,
    16, 15, 15, 15, 15, 16, 16, 16, 15, 15, 15, 15, 15, 15, 16, 16,
    16, 15, 11, 78, 16, 15, 15, 16, 16, 16, 15, 15, 15, 15, 16, 15,
    15, 15, 15, 16, 15, 16, 15, 16, 16, 16, 16, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 16, 16, 16, 16, 16, 15, 16, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 16, 16, 16,
    16, 16, 15, 15, 15, 15, 16, 16, 16, 16, 16, 16, 16, 16, 16, 15,
    15, 16, 15, 16, 15, 15, 15, 15, 15, 15, 15, 15, 16, 16, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 16, 16, 15,
    15, 15, 15, 16, 16, 16, 16, 16, 15, 16, 16, 16, 16, 16, 16, 16,
    16, 16, 15, 15, 16, 16, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 16, 16, 16, 16, 16, 15, 15,
    16, 16, 16, 16, 16, 16, 16, 16, 16, 15, 15, 15, 15, 15, 16, 16,
    15, 15, 16, 16, 16, 16, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 16, 16,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    73, 73, 73, 73, 73, 73, 73, 73, 9, 10, 9, 10, 73, 73, 73, 73,
    73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73,
    15, 15, 73, 73, 73, 73, 73, 73, 73, 9, 10, 73, 73, 73, 73, 73,
    73, 73, 73, 73, 73, 73, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191,
    191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191,
    191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191,
    191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191,
    191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 73, 16, 73, 73, 73,
    73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73,
    73, 73, 73, 73, 73, 191, 73, 73, 73, 73, 73, 16, 16, 16, 16, 16,
    16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16,
    16, 16, 16, 16, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73,
    73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73,
    73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 16, 16, 16, 16,
    16, 16, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73,
    73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73,
    73, 73, 73, 73, 73, 73, 73, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    225, 226, 227, 360, 361, 362, 363, 364, 365, 366, 367, 368, 369, 370, 371, 372,
    373, 374, 375, 376, 225, 226, 227, 360, 361, 362, 363, 364, 365, 366, 367, 368,
    369, 370, 371, 372, 373, 374, 375, 376, 83, 79, 80, 308, 309, 310, 311, 312,
    313, 377, 378, 379, 380, 381, 382, 383, 384, 385, 386, 387, 191, 191, 191, 191,
    191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191,
    191, 191, 191, 191, 191, 191, 388, 388, 388, 388, 388, 388, 388, 388, 388, 388,
    388, 388, 388, 388, 388, 388, 388, 388, 388, 388, 388, 388, 388, 388, 388, 388,
    389, 389, 389, 389, 389, 389, 389, 389, 389, 389, 389, 389, 389, 389, 389, 389,
    389, 389, 389, 389, 389, 389, 389, 389, 389, 389, 224, 367, 368, 369, 370, 371,
    372, 373, 374, 375, 376, 225, 226, 227, 360, 361, 362, 363, 364, 365, 366, 224,
    73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73,
    73, 73, 73, 73, 73, 73, 73, 16, 73, 73, 73, 73, 73, 73, 73, 73,
    73, 16, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73,
    73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73,
    73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73,
    73, 73, 73, 73, 73, 73, 73, 73, 16, 16, 16, 16, 16, 16, 16, 16,
    73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 16,
    73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73,
    73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 191, 73, 73, 73,
    73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73,
    73, 73, 73, 73, 73, 73, 73, 73, 9, 10, 9, 10, 9, 10, 9, 10,
    9, 10, 9, 10, 9, 10, 225, 226, 227, 360, 361, 362, 363, 364, 365, 366,
    225, 226, 227, 360, 361, 362, 363, 364, 365, 366, 225, 226, 227, 360, 361, 362,
    363, 364, 365, 366, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73,
    15, 16, 16, 15, 15, 9, 10, 16, 15, 15, 16, 15, 15, 15, 16, 16,
    16, 16, 16, 15, 15, 15, 15, 16, 16, 16, 16, 16, 15, 15, 15, 16,
    16, 16, 15, 15, 15, 15, 9, 10, 9, 10, 9, 10, 9, 10, 9, 10,
    16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16,
    16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16,
    16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16,
    16, 16, 16, 9, 10, 9, 10, 9, 10, 9, 10, 9, 10, 9, 10, 9,
    10, 9, 10, 9, 10, 9, 10, 9, 10, 16, 16, 15, 15, 15, 15, 15,
    15, 16, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    16, 16, 16, 16, 16, 16, 16, 16, 15, 16, 16, 16, 16, 16, 16, 16,
    15, 15, 15, 15, 15, 15, 16, 16, 16, 15, 16, 16, 16, 16, 15, 15,
    15, 15, 15, 16, 15, 15, 16, 16, 9, 10, 9, 10, 15, 16, 16, 16,
    16, 15, 16, 15, 15, 15, 16, 16, 15, 15, 16, 16, 16, 16, 16, 16,
    16, 16, 16, 16, 15, 15, 15, 15, 15, 15, 16, 16, 9, 10, 16, 16,
    16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 16, 15, 15,
    15, 15, 16, 16, 15, 16, 15, 16, 16, 15, 16, 15, 15, 15, 15, 16,
    16, 16, 16, 16, 15, 15, 16, 16, 16, 16, 16, 16, 15, 15, 15, 16,
    16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16,
    16, 16, 16, 16, 16, 16, 16, 15, 15, 16, 16, 16, 16, 16, 16, 16,
    16, 16, 16, 16, 15, 15, 16, 16, 16, 16, 15, 15, 15, 15, 16, 15,
    15, 16, 16, 15, 15, 16, 16, 16, 16, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 16, 16, 15, 15, 15, 15, 15, 15, 15, 15, 16, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 16, 16, 16, 16, 16, 15, 16, 15, 16,
    16, 16, 15, 15, 15, 15, 15, 16, 16, 16, 16, 16, 15, 15, 15, 16,
    16, 16, 16, 15, 16, 16, 16, 15, 15, 15, 15, 15, 16, 15, 16, 16,
    73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73,
    16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16,
    16, 16, 16, 16, 16, 73, 73, 16, 16, 16, 16, 16, 16, 73, 73, 73,
    73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73,
    73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73,
    73, 73, 73, 73, 0, 0, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73,
    73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73,
    73, 73, 73, 73, 73, 73, 0, 73, 73, 73, 73, 73, 73, 73, 73, 73,
    73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73,
    73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 390, 73,
    195, 195, 195, 195, 195, 195, 195, 195, 195, 195, 195, 195, 195, 195, 195, 195,
    195, 195, 195, 195, 195, 195, 195, 195, 195, 195, 195, 195, 195, 195, 195, 195,
    195, 195, 195, 195, 195, 195, 195, 195, 195, 195, 195, 195, 195, 195, 195, 195,
    197, 197, 197, 197, 197, 197, 197, 197, 197, 197, 197, 197, 197, 197, 197, 197,
    197, 197, 197, 197, 197, 197, 197, 197, 197, 197, 197, 197, 197, 197, 197, 197,
    197, 197, 197, 197, 197, 197, 197, 197, 197, 197, 197, 197, 197, 197, 197, 197,
    90, 91, 391, 392, 393, 394, 395, 90, 91, 90, 91, 90, 91, 396, 397, 398,
    399, 94, 90, 91, 94, 90, 91, 94, 94, 94, 94, 94, 161, 161, 400, 400,
    90, 91, 90, 91, 94, 73, 73, 73, 73, 73, 73, 90, 91, 90, 91, 164,
    164, 164, 90, 91, 0, 0, 0, 0, 0, 6, 6, 6, 6, 85, 6, 6,
    401, 401, 401, 401, 401, 401, 401, 401, 401, 401, 401, 401, 401, 401, 401, 401,
    401, 401, 401, 401, 401, 401, 401, 401, 401, 401, 401, 401, 401, 401, 401, 401,
    401, 401, 401, 401, 401, 401, 0, 401, 0, 0, 0, 0, 0, 401, 0, 0,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 0, 0, 0, 0, 0, 0, 0, 163,
    196, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 164,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    115, 115, 115, 115, 115, 115, 115, 0, 115, 115, 115, 115, 115, 115, 115, 0,
    115, 115, 115, 115, 115, 115, 115, 0, 115, 115, 115, 115, 115, 115, 115, 0,
    199, 199, 199, 199, 199, 199, 199, 199, 199, 199, 199, 199, 199, 199, 199, 199,
    199, 199, 199, 199, 199, 199, 199, 199, 199, 199, 199, 199, 199, 199, 199, 199,
    6, 6, 75, 84, 75, 84, 6, 6, 6, 75, 84, 6, 75, 84, 6, 6,
    6, 6, 6, 6, 6, 6, 6, 198, 6, 6, 198, 6, 75, 84, 6, 6,
    75, 84, 9, 10, 9, 10, 9, 10, 9, 10, 6, 6, 6, 6, 6, 162,
    6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 198, 198, 6, 6, 6, 6,
    198, 6, 294, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6,
    73, 73, 6, 6, 6, 9, 10, 9, 10, 9, 10, 9, 10, 198, 0, 0,
    73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73,
    73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 0, 73, 73, 73, 73, 73,
    73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73,
    73, 73, 73, 73, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73,
    73, 73, 73, 73, 73, 73, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 0, 0, 0, 0,
    5, 6, 6, 6, 73, 163, 402, 403, 9, 10, 9, 10, 9, 10, 9, 10,
    9, 10, 73, 73, 9, 10, 9, 10, 9, 10, 9, 10, 198, 294, 404, 404,
    73, 405, 406, 407, 408, 409, 410, 411, 412, 413, 164, 164, 164, 164, 229, 229,
    198, 163, 163, 163, 163, 163, 73, 73, 414, 415, 416, 163, 115, 6, 73, 73,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 0, 0, 164, 164, 417, 417, 163, 163, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 6, 163, 163, 163, 115,
    0, 0, 0, 0, 0, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    0, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 0,
    191, 191, 418, 419, 420, 421, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191,
    73, 73, 73, 73, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191,
    191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 73, 73, 0,
    418, 419, 420, 421, 422, 423, 424, 425, 426, 241, 191, 191, 191, 191, 191, 191,
    191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191,
    191, 191, 191, 191, 191, 191, 191, 191, 241, 242, 243, 244, 245, 246, 247, 248,
    73, 427, 428, 429, 430, 431, 432, 433, 434, 435, 436, 437, 438, 439, 440, 441,
    191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191,
    191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 73, 73, 73, 191,
    191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191,
    191, 442, 443, 444, 445, 446, 447, 448, 449, 450, 451, 452, 453, 454, 455, 456,
    191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 73, 73, 73, 73,
    191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191,
    191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191,
    191, 191, 191, 191, 191, 191, 191, 73, 73, 73, 73, 191, 191, 191, 191, 191,
    191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191,
    191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 73, 73,
    191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191,
    191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 73,
    402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402,
    402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 163, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 0, 0, 0,
    73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73,
    73, 73, 73, 73, 73, 73, 73, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 163, 6, 6, 6,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    218, 218, 218, 218, 218, 218, 218, 218, 218, 218, 115, 115, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    90, 91, 90, 91, 90, 91, 90, 91, 90, 91, 90, 91, 90, 91, 115, 164,
    192, 192, 192, 6, 199, 199, 199, 199, 199, 199, 199, 199, 164, 164, 6, 162,
    90, 91, 90, 91, 90, 91, 90, 91, 90, 91, 90, 91, 90, 91, 90, 91,
    90, 91, 90, 91, 90, 91, 90, 91, 90, 91, 90, 91, 161, 161, 199, 199,
    115, 115, 115, 115, 115, 115, 457, 458, 459, 460, 461, 356, 462, 463, 464, 465,
    164, 164, 196, 196, 196, 196, 196, 196, 0, 0, 0, 0, 0, 0, 0, 0,
    43, 43, 43, 43, 43, 43, 43, 43, 43, 43, 43, 43, 43, 43, 43, 43,
    43, 43, 43, 43, 43, 43, 43, 162, 162, 162, 162, 162, 162, 162, 162, 162,
    43, 43, 90, 91, 90, 91, 90, 91, 90, 91, 90, 91, 90, 91, 90, 91,
    94, 94, 90, 91, 90, 91, 90, 91, 90, 91, 90, 91, 90, 91, 90, 91,
    90, 91, 90, 91, 90, 91, 90, 91, 90, 91, 90, 91, 90, 91, 90, 91,
    161, 94, 94, 94, 94, 94, 94, 94, 94, 90, 91, 90, 91, 466, 90, 91,
    90, 91, 90, 91, 90, 91, 90, 91, 162, 467, 467, 90, 91, 468, 94, 115,
    90, 91, 90, 91, 469, 94, 90, 91, 90, 91, 90, 91, 90, 91, 90, 91,
    90, 91, 90, 91, 90, 91, 90, 91, 90, 91, 470, 471, 472, 473, 470, 94,
    474, 475, 476, 477, 90, 91, 90, 91, 90, 91, 90, 91, 90, 91, 90, 91,
    90, 91, 90, 91, 478, 479, 480, 90, 91, 90, 91, 0, 0, 0, 0, 0,
    90, 91, 0, 94, 0, 94, 90, 91, 90, 91, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 163, 163, 163, 90, 91, 115, 161, 161, 94, 115, 115, 115, 115, 115,
    115, 115, 199, 115, 115, 115, 164, 115, 115, 115, 115, 199, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 217, 217, 199, 199, 217, 73, 73, 73, 73, 164, 0, 0, 0,
    219, 219, 219, 219, 219, 219, 191, 191, 8, 77, 0, 0, 0, 0, 0, 0,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 6, 6, 6, 6, 0, 0, 0, 0, 0, 0, 0, 0,
    217, 217, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 217, 217, 217, 217, 217, 217, 217, 217, 217, 217, 217, 217,
    217, 217, 217, 217, 164, 199, 0, 0, 0, 0, 0, 0, 0, 0, 196, 196,
    218, 218, 218, 218, 218, 218, 218, 218, 218, 218, 0, 0, 0, 0, 0, 0,
    164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164,
    164, 164, 115, 115, 115, 115, 115, 115, 196, 196, 196, 115, 196, 115, 115, 199,
    218, 218, 218, 218, 218, 218, 218, 218, 218, 218, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 199, 199, 199, 199, 199, 164, 164, 164, 196, 196,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 199, 199, 199, 199, 199, 199, 199, 199, 199,
    199, 199, 217, 229, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 196,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 0, 0, 0,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 164, 217, 217, 199, 199, 199, 199, 217, 217, 199, 199, 217, 217,
    229, 196, 196, 196, 196, 196, 196, 196, 196, 196, 196, 196, 196, 196, 0, 163,
    218, 218, 218, 218, 218, 218, 218, 218, 218, 218, 0, 0, 0, 0, 196, 196,
    115, 115, 115, 115, 115, 199, 163, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    218, 218, 218, 218, 218, 218, 218, 218, 218, 218, 115, 115, 115, 115, 115, 0,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 199, 199, 199, 199, 199, 199, 217,
    217, 199, 199, 217, 217, 199, 199, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    115, 115, 115, 199, 115, 115, 115, 115, 115, 115, 115, 115, 199, 217, 0, 0,
    218, 218, 218, 218, 218, 218, 218, 218, 218, 218, 0, 0, 196, 196, 196, 196,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    163, 115, 115, 115, 115, 115, 115, 191, 191, 191, 115, 217, 199, 217, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    199, 115, 199, 199, 199, 115, 115, 199, 199, 115, 115, 115, 115, 115, 199, 164,
    115, 164, 115, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 115, 115, 163, 196, 196,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 217, 199, 199, 217, 217,
    196, 196, 115, 163, 163, 217, 164, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 115, 115, 115, 115, 115, 115, 0, 0, 115, 115, 115, 115, 115, 115, 0,
    0, 115, 115, 115, 115, 115, 115, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    115, 115, 115, 115, 115, 115, 115, 0, 115, 115, 115, 115, 115, 115, 115, 0,
    94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94,
    94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94,
    94, 94, 94, 481, 94, 94, 94, 94, 94, 94, 94, 467, 161, 161, 161, 161,
    94, 94, 94, 94, 94, 94, 94, 94, 94, 163, 43, 43, 0, 0, 0, 0,
    482, 482, 482, 482, 482, 482, 482, 482, 482, 482, 482, 482, 482, 482, 482, 482,
    482, 482, 482, 482, 482, 482, 482, 482, 482, 482, 482, 482, 482, 482, 482, 482,
    482, 482, 482, 482, 482, 482, 482, 482, 482, 482, 482, 482, 482, 482, 482, 482,
    115, 115, 115, 217, 217, 199, 217, 217, 199, 217, 217, 196, 229, 164, 0, 0,
    218, 218, 218, 218, 218, 218, 218, 218, 218, 218, 0, 0, 0, 0, 0, 0,
    115, 115, 115, 115, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 0, 0, 0, 0, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 0, 0, 0, 0,
    483, 483, 483, 483, 483, 483, 483, 483, 483, 483, 483, 483, 483, 483, 483, 483,
    483, 483, 483, 483, 483, 483, 483, 483, 483, 483, 483, 483, 483, 483, 483, 483,
    484, 484, 484, 484, 484, 484, 484, 484, 484, 484, 484, 484, 484, 484, 484, 484,
    484, 484, 484, 484, 484, 484, 484, 484, 484, 484, 484, 484, 484, 484, 484, 484,
    402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 485, 402, 402, 402, 402,
    402, 402, 402, 486, 402, 402, 402, 402, 487, 402, 402, 402, 402, 402, 402, 402,
    402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402,
    402, 402, 488, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402,
    402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402,
    402, 489, 402, 489, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402,
    402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402,
    402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 486, 402, 402,
    402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 0, 0,
    402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402,
    402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402,
    402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 0, 0, 0, 0, 0, 0,
    87, 87, 87, 87, 87, 87, 87, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 87, 87, 87, 87, 87, 0, 0, 0, 0, 0, 202, 199, 202,
    202, 202, 202, 202, 202, 202, 202, 202, 202, 11, 202, 202, 202, 202, 202, 202,
    202, 202, 202, 202, 202, 202, 202, 0, 202, 202, 202, 202, 202, 0, 202, 0,
    202, 202, 0, 202, 202, 0, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202,
    208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208,
    208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208,
    208, 208, 216, 216, 216, 216, 216, 216, 216, 216, 216, 216, 216, 216, 216, 216,
    216, 216, 216, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208,
    208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208,
    208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 404, 294,
    73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73,
    208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208,
    208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208,
    0, 0, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208,
    208, 208, 208, 208, 208, 208, 208, 208, 0, 0, 0, 0, 0, 0, 0, 73,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 205, 73, 73, 73,
    164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164,
    6, 6, 6, 6, 6, 6, 6, 294, 404, 6, 0, 0, 0, 0, 0, 0,
    164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164,
    6, 198, 198, 44, 44, 294, 404, 294, 404, 294, 404, 294, 404, 294, 404, 294,
    404, 294, 404, 294, 404, 6, 6, 294, 404, 6, 6, 6, 6, 44, 44, 44,
    12, 6, 12, 0, 6, 12, 6, 6, 198, 9, 10, 9, 10, 9, 10, 7,
    6, 6, 11, 13, 15, 15, 16, 0, 6, 8, 7, 6, 0, 0, 0, 0,
    208, 208, 208, 208, 208, 0, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208,
    208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208,
    208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 0, 0, 76,
    0, 6, 6, 7, 8, 7, 6, 6, 9, 10, 6, 11, 12, 13, 12, 12,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 12, 6, 15, 16, 15, 6,
    43, 45, 46, 47, 48, 49, 50, 51, 52, 53, 54, 55, 56, 57, 58, 59,
    60, 61, 62, 63, 64, 65, 66, 67, 68, 69, 70, 9, 16, 10, 16, 9,
    10, 6, 9, 10, 6, 6, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    163, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 163, 163,
    0, 0, 115, 115, 115, 115, 115, 115, 0, 0, 115, 115, 115, 115, 115, 115,
    0, 0, 115, 115, 115, 115, 115, 115, 0, 0, 115, 115, 115, 0, 0, 0,
    8, 8, 16, 43, 73, 8, 8, 0, 73, 16, 16, 16, 16, 73, 73, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 490, 490, 490, 73, 73, 0, 0,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 0, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 0, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 0, 115, 115, 0, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 0, 0,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 0, 0,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 0, 0, 0, 0, 0,
    196, 6, 196, 0, 0, 0, 0, 418, 419, 420, 421, 422, 423, 424, 425, 426,
    241, 242, 243, 244, 245, 246, 247, 248, 249, 222, 491, 492, 493, 494, 495, 496,
    497, 498, 223, 499, 500, 501, 502, 503, 504, 505, 506, 250, 507, 508, 509, 510,
    511, 512, 513, 514, 0, 0, 0, 191, 191, 191, 191, 191, 191, 191, 191, 191,
    515, 515, 516, 517, 518, 519, 520, 521, 517, 522, 518, 523, 519, 524, 520, 517,
    522, 518, 523, 519, 524, 525, 521, 522, 516, 516, 516, 526, 526, 526, 526, 517,
    522, 522, 522, 522, 522, 527, 518, 518, 518, 518, 523, 528, 519, 519, 519, 519,
    519, 524, 520, 517, 518, 85, 85, 85, 85, 73, 73, 73, 73, 73, 73, 73,
    73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 224, 85, 73, 191, 191, 0,
    73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 0, 0, 0,
    73, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191,
    191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191,
    191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 164, 0, 0,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    164, 83, 79, 80, 308, 309, 310, 311, 312, 313, 377, 387, 529, 530, 531, 532,
    533, 534, 535, 536, 537, 538, 539, 540, 541, 542, 543, 544, 0, 0, 0, 0,
    418, 422, 241, 245, 0, 0, 0, 0, 0, 0, 0, 0, 0, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 545, 115, 115, 115, 115, 115, 115, 115, 115, 546, 0, 0, 0, 0, 0,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 199, 199, 199, 199, 199, 0, 0, 0, 0, 0,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 0, 196,
    115, 115, 115, 115, 0, 0, 0, 0, 115, 115, 115, 115, 115, 115, 115, 115,
    196, 457, 458, 547, 548, 549, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    550, 550, 550, 550, 550, 550, 550, 550, 550, 550, 550, 550, 550, 550, 550, 550,
    550, 550, 550, 550, 550, 550, 550, 550, 550, 550, 550, 550, 550, 550, 550, 550,
    550, 550, 550, 550, 550, 550, 550, 550, 551, 551, 551, 551, 551, 551, 551, 551,
    551, 551, 551, 551, 551, 551, 551, 551, 551, 551, 551, 551, 551, 551, 551, 551,
    551, 551, 551, 551, 551, 551, 551, 551, 551, 551, 551, 551, 551, 551, 551, 551,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 0, 0,
    218, 218, 218, 218, 218, 218, 218, 218, 218, 218, 0, 0, 0, 0, 0, 0,
    550, 550, 550, 550, 550, 550, 550, 550, 550, 550, 550, 550, 550, 550, 550, 550,
    550, 550, 550, 550, 550, 550, 550, 550, 550, 550, 550, 550, 550, 550, 550, 550,
    550, 550, 550, 550, 0, 0, 0, 0, 551, 551, 551, 551, 551, 551, 551, 551,
    551, 551, 551, 551, 551, 551, 551, 551, 551, 551, 551, 551, 551, 551, 551, 551,
    551, 551, 551, 551, 551, 551, 551, 551, 551, 551, 551, 551, 0, 0, 0, 0,
    115, 115, 115, 115, 115, 115, 115, 115, 0, 0, 0, 0, 0, 0, 0, 0,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 196,
    552, 552, 552, 552, 552, 552, 552, 552, 552, 552, 552, 0, 552, 552, 552, 552,
    552, 552, 552, 552, 552, 552, 552, 552, 552, 552, 552, 0, 552, 552, 552, 552,
    552, 552, 552, 0, 552, 552, 0, 553, 553, 553, 553, 553, 553, 553, 553, 553,
    553, 553, 0, 553, 553, 553, 553, 553, 553, 553, 553, 553, 553, 553, 553, 553,
    553, 553, 0, 553, 553, 553, 553, 553, 553, 553, 0, 553, 553, 0, 0, 0,
    115, 115, 115, 115, 115, 115, 115, 115, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    161, 163, 163, 161, 161, 161, 0, 161, 161, 161, 161, 161, 161, 161, 161, 161,
    161, 161, 161, 161, 161, 161, 161, 161, 161, 161, 161, 161, 161, 161, 161, 161,
    161, 161, 161, 161, 161, 161, 161, 161, 161, 161, 161, 161, 161, 161, 161, 161,
    161, 0, 161, 161, 161, 161, 161, 161, 161, 161, 161, 0, 0, 0, 0, 0,
    202, 202, 202, 202, 202, 202, 0, 0, 202, 0, 202, 202, 202, 202, 202, 202,
    202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202,
    202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202,
    202, 202, 202, 202, 202, 202, 0, 202, 202, 0, 0, 0, 202, 0, 0, 202,
    202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202,
    202, 202, 202, 202, 202, 202, 0, 201, 554, 555, 556, 557, 558, 559, 560, 561,
    202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202,
    202, 202, 202, 202, 202, 202, 202, 562, 562, 554, 555, 556, 563, 564, 557, 558,
    202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202,
    202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 0,
    0, 0, 0, 0, 0, 0, 0, 554, 555, 556, 563, 563, 564, 557, 558, 559,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202,
    202, 202, 202, 0, 202, 202, 0, 0, 0, 0, 0, 554, 564, 557, 558, 559,
    202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202,
    202, 202, 202, 202, 202, 202, 554, 557, 558, 559, 555, 556, 0, 0, 0, 6,
    202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202,
    202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 0, 0, 0, 0, 0, 201,
    202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202,
    202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202,
    202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202,
    202, 202, 202, 202, 202, 202, 202, 202, 0, 0, 0, 0, 565, 565, 202, 202,
    554, 555, 556, 563, 564, 566, 567, 568, 569, 557, 558, 570, 571, 572, 573, 574,
    0, 0, 559, 575, 576, 577, 578, 579, 580, 581, 582, 560, 583, 584, 585, 586,
    587, 588, 589, 590, 561, 591, 592, 593, 594, 595, 596, 597, 598, 599, 600, 601,
    602, 603, 604, 605, 606, 607, 565, 565, 565, 565, 565, 565, 565, 565, 565, 565,
    202, 199, 199, 199, 0, 199, 199, 0, 0, 0, 0, 0, 199, 199, 199, 199,
    202, 202, 202, 202, 0, 202, 202, 202, 0, 202, 202, 202, 202, 202, 202, 202,
    202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202,
    202, 202, 202, 202, 202, 202, 0, 0, 164, 164, 164, 0, 0, 0, 0, 164,
    554, 555, 556, 563, 557, 558, 559, 560, 565, 0, 0, 0, 0, 0, 0, 0,
    201, 201, 201, 201, 201, 201, 201, 201, 201, 0, 0, 0, 0, 0, 0, 0,
    202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202,
    202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 554, 572, 201,
    202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202,
    202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 554, 557, 558,
    202, 202, 202, 202, 202, 202, 202, 202, 562, 202, 202, 202, 202, 202, 202, 202,
    202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202,
    202, 202, 202, 202, 202, 164, 164, 0, 0, 0, 0, 554, 564, 557, 558, 559,
    201, 201, 201, 201, 201, 201, 201, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202,
    202, 202, 202, 202, 202, 202, 0, 0, 0, 6, 6, 6, 6, 6, 6, 6,
    202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202,
    202, 202, 202, 202, 202, 202, 0, 0, 554, 555, 556, 563, 557, 558, 559, 560,
    202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202,
    202, 202, 202, 0, 0, 0, 0, 0, 554, 555, 556, 563, 557, 558, 559, 560,
    202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202,
    202, 202, 0, 0, 0, 0, 0, 0, 0, 201, 201, 201, 201, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 554, 555, 556, 563, 557, 558, 559,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    202, 202, 202, 202, 202, 202, 202, 202, 202, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    608, 608, 608, 608, 608, 608, 608, 608, 608, 608, 608, 608, 608, 608, 608, 608,
    608, 608, 608, 608, 608, 608, 608, 608, 608, 608, 608, 608, 608, 608, 608, 608,
    608, 608, 608, 608, 608, 608, 608, 608, 608, 608, 608, 608, 608, 608, 608, 608,
    608, 608, 608, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    609, 609, 609, 609, 609, 609, 609, 609, 609, 609, 609, 609, 609, 609, 609, 609,
    609, 609, 609, 609, 609, 609, 609, 609, 609, 609, 609, 609, 609, 609, 609, 609,
    609, 609, 609, 609, 609, 609, 609, 609, 609, 609, 609, 609, 609, 609, 609, 609,
    609, 609, 609, 0, 0, 0, 0, 0, 0, 0, 554, 564, 557, 572, 559, 560,
    208, 208, 208, 208, 199, 199, 199, 199, 0, 0, 0, 0, 0, 0, 0, 0,
    210, 210, 210, 210, 210, 210, 210, 210, 210, 210, 0, 0, 0, 0, 0, 0,
    610, 611, 612, 613, 614, 615, 616, 617, 618, 619, 620, 621, 622, 623, 624, 625,
    626, 627, 628, 629, 630, 631, 632, 633, 634, 635, 636, 637, 637, 637, 637, 0,
    202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 0, 199, 199, 200, 0, 0,
    202, 202, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202,
    202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 554, 555, 556,
    563, 564, 557, 558, 570, 559, 565, 202, 0, 0, 0, 0, 0, 0, 0, 0,
    208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208,
    208, 208, 208, 208, 208, 208, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164,
    164, 638, 639, 640, 641, 206, 206, 206, 206, 206, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202,
    202, 202, 164, 164, 164, 164, 201, 201, 201, 201, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    202, 202, 202, 202, 202, 554, 555, 556, 563, 557, 558, 559, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202, 202,
    202, 202, 202, 202, 202, 202, 202, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    217, 199, 217, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 199, 199, 199, 199, 199, 199, 199, 199,
    199, 199, 199, 199, 199, 199, 164, 196, 196, 196, 196, 196, 196, 196, 0, 0,
    0, 0, 225, 226, 227, 360, 361, 362, 363, 364, 365, 366, 376, 436, 446, 456,
    642, 643, 644, 645, 646, 647, 218, 218, 218, 218, 218, 218, 218, 218, 218, 218,
    164, 115, 115, 199, 199, 115, 0, 0, 0, 0, 0, 0, 0, 0, 0, 164,
    164, 164, 217, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    217, 217, 217, 199, 199, 199, 199, 217, 217, 164, 164, 196, 196, 290, 196, 196,
    196, 196, 199, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 290, 0, 0,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 0, 0, 0, 0, 0, 0, 0,
    218, 218, 218, 218, 218, 218, 218, 218, 218, 218, 0, 0, 0, 0, 0, 0,
    199, 199, 199, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 199, 199, 199, 199, 199, 217, 199, 199, 199,
    199, 199, 199, 164, 164, 0, 218, 218, 218, 218, 218, 218, 218, 218, 218, 218,
    196, 196, 196, 196, 115, 217, 217, 115, 0, 0, 0, 0, 0, 0, 0, 0,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 164, 196, 196, 115, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 217, 217, 217, 199, 199, 199, 199, 199, 199, 199, 199, 199, 217,
    229, 115, 115, 115, 115, 196, 196, 196, 196, 164, 164, 164, 164, 196, 217, 199,
    218, 218, 218, 218, 218, 218, 218, 218, 218, 218, 115, 196, 115, 196, 196, 196,
    0, 418, 419, 420, 421, 422, 423, 424, 425, 426, 241, 242, 243, 244, 245, 246,
    247, 248, 249, 222, 223, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 0, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 217, 217, 217, 199,
    199, 199, 217, 217, 199, 229, 164, 199, 196, 196, 196, 196, 196, 196, 199, 0,
    115, 115, 115, 115, 115, 115, 115, 0, 115, 0, 115, 115, 115, 115, 0, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 0, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 196, 0, 0, 0, 0, 0, 0,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 199,
    217, 217, 217, 199, 199, 199, 199, 199, 199, 164, 164, 0, 0, 0, 0, 0,
    218, 218, 218, 218, 218, 218, 218, 218, 218, 218, 0, 0, 0, 0, 0, 0,
    199, 199, 217, 217, 0, 115, 115, 115, 115, 115, 115, 115, 115, 0, 0, 115,
    115, 0, 0, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 0, 115, 115, 115, 115, 115, 115,
    115, 0, 115, 115, 0, 115, 115, 115, 115, 115, 0, 164, 164, 115, 217, 217,
    199, 217, 217, 217, 217, 0, 0, 217, 217, 0, 0, 217, 217, 229, 0, 0,
    115, 0, 0, 0, 0, 0, 0, 217, 0, 0, 0, 0, 0, 115, 115, 115,
    115, 115, 217, 217, 0, 0, 164, 164, 164, 164, 164, 164, 164, 0, 0, 0,
    164, 164, 164, 164, 164, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 217, 217, 217, 199, 199, 199, 199, 199, 199, 199, 199,
    217, 217, 164, 199, 199, 217, 164, 115, 115, 115, 115, 196, 196, 196, 196, 196,
    218, 218, 218, 218, 218, 218, 218, 218, 218, 218, 196, 196, 0, 196, 164, 115,
    115, 115, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    217, 217, 217, 199, 199, 199, 199, 199, 199, 217, 199, 217, 217, 217, 217, 199,
    199, 217, 164, 164, 115, 115, 196, 115, 0, 0, 0, 0, 0, 0, 0, 0,
    218, 218, 218, 218, 218, 218, 218, 218, 218, 218, 0, 0, 0, 0, 0, 0,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 217,
    217, 217, 199, 199, 199, 199, 0, 0, 217, 217, 217, 217, 199, 199, 217, 164,
    164, 196, 196, 196, 196, 196, 196, 196, 196, 196, 196, 196, 196, 196, 196, 196,
    196, 196, 196, 196, 196, 196, 196, 196, 115, 115, 115, 115, 199, 199, 0, 0,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    217, 217, 217, 199, 199, 199, 199, 199, 199, 199, 199, 217, 217, 199, 217, 164,
    199, 196, 196, 196, 115, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    218, 218, 218, 218, 218, 218, 218, 218, 218, 218, 0, 0, 0, 0, 0, 0,
    6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 199, 217, 199, 217, 217,
    199, 199, 199, 199, 199, 199, 229, 164, 115, 196, 0, 0, 0, 0, 0, 0,
    218, 218, 218, 218, 218, 218, 218, 218, 218, 218, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 0, 0, 199, 199, 199,
    217, 217, 199, 199, 199, 199, 217, 199, 199, 199, 199, 164, 0, 0, 0, 0,
    218, 218, 218, 218, 218, 218, 218, 218, 218, 218, 221, 242, 196, 196, 196, 191,
    115, 115, 115, 115, 115, 115, 115, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 217, 217, 217, 199,
    199, 199, 199, 199, 199, 199, 199, 199, 217, 164, 164, 196, 0, 0, 0, 0,
    86, 86, 86, 86, 86, 86, 86, 86, 86, 86, 86, 86, 86, 86, 86, 86,
    86, 86, 86, 86, 86, 86, 86, 86, 86, 86, 86, 86, 86, 86, 86, 86,
    88, 88, 88, 88, 88, 88, 88, 88, 88, 88, 88, 88, 88, 88, 88, 88,
    88, 88, 88, 88, 88, 88, 88, 88, 88, 88, 88, 88, 88, 88, 88, 88,
    218, 218, 218, 218, 218, 218, 218, 218, 218, 218, 221, 242, 243, 244, 245, 246,
    247, 248, 249, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 115,
    115, 115, 115, 115, 115, 115, 115, 0, 0, 115, 0, 0, 115, 115, 115, 115,
    115, 115, 115, 115, 0, 115, 115, 0, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    217, 217, 217, 217, 217, 217, 0, 217, 217, 0, 0, 199, 199, 229, 164, 115,
    217, 115, 217, 164, 196, 196, 196, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    218, 218, 218, 218, 218, 218, 218, 218, 218, 218, 0, 0, 0, 0, 0, 0,
    115, 115, 115, 115, 115, 115, 115, 115, 0, 0, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 217, 217, 217, 199, 199, 199, 199, 0, 0, 199, 199, 217, 217, 217, 217,
    164, 115, 196, 115, 217, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    115, 199, 199, 199, 199, 199, 199, 228, 228, 199, 199, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 164, 164, 199, 199, 199, 199, 217, 115, 199, 199, 199, 199, 196,
    196, 196, 196, 196, 196, 196, 196, 164, 0, 0, 0, 0, 0, 0, 0, 0,
    115, 199, 199, 199, 199, 199, 199, 217, 217, 199, 199, 199, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 199, 199, 199, 199, 199, 199,
    199, 199, 199, 199, 199, 199, 199, 217, 164, 164, 196, 196, 196, 115, 196, 196,
    196, 196, 196, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 0, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 217,
    199, 199, 199, 199, 199, 199, 199, 0, 199, 199, 199, 199, 199, 199, 217, 648,
    115, 196, 196, 196, 196, 196, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    218, 218, 218, 218, 218, 218, 218, 218, 218, 218, 418, 419, 420, 421, 422, 423,
    424, 425, 426, 241, 242, 243, 244, 245, 246, 247, 248, 249, 222, 0, 0, 0,
    196, 196, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    0, 0, 199, 199, 199, 199, 199, 199, 199, 199, 199, 199, 199, 199, 199, 199,
    199, 199, 199, 199, 199, 199, 199, 199, 0, 217, 199, 199, 199, 199, 199, 199,
    199, 217, 199, 199, 217, 199, 199, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    115, 115, 115, 115, 115, 115, 115, 0, 115, 115, 0, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 199, 199, 199, 199, 199, 199, 0, 0, 0, 199, 0, 199, 199, 0, 199,
    199, 199, 164, 199, 164, 164, 115, 199, 0, 0, 0, 0, 0, 0, 0, 0,
    218, 218, 218, 218, 218, 218, 218, 218, 218, 218, 0, 0, 0, 0, 0, 0,
    115, 115, 115, 115, 115, 115, 0, 115, 115, 0, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 217, 217, 217, 217, 217, 0,
    199, 199, 0, 217, 217, 199, 217, 164, 115, 0, 0, 0, 0, 0, 0, 0,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 199, 199, 217, 217, 196, 196, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    115, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    219, 219, 219, 219, 219, 219, 219, 219, 219, 219, 219, 219, 219, 219, 219, 219,
    219, 219, 219, 219, 219, 73, 73, 73, 73, 73, 73, 73, 73, 8, 8, 8,
    8, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73,
    73, 73, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 196,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 0, 0, 0, 0, 0, 0,
    458, 459, 460, 461, 356, 462, 463, 464, 459, 460, 461, 356, 462, 463, 464, 460,
    461, 356, 462, 463, 464, 457, 458, 459, 460, 461, 356, 462, 463, 464, 457, 458,
    459, 460, 461, 458, 459, 459, 460, 461, 356, 462, 463, 464, 457, 458, 459, 459,
    460, 461, 649, 650, 457, 458, 459, 459, 460, 461, 459, 459, 460, 460, 460, 460,
    356, 462, 462, 462, 463, 463, 464, 464, 464, 464, 458, 459, 460, 461, 356, 457,
    458, 459, 460, 460, 461, 461, 458, 459, 457, 458, 651, 651, 651, 651, 651, 651,
    651, 651, 651, 651, 651, 651, 651, 652, 357, 460, 461, 356, 462, 463, 464, 0,
    196, 196, 196, 196, 196, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    115, 115, 115, 115, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 196, 196, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 0,
    290, 290, 290, 290, 290, 290, 290, 290, 290, 0, 0, 0, 0, 0, 0, 0,
    218, 218, 218, 218, 218, 218, 218, 218, 218, 218, 0, 0, 0, 0, 196, 196,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    218, 218, 218, 218, 218, 218, 218, 218, 218, 218, 0, 0, 0, 0, 0, 0,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 0, 0,
    164, 164, 164, 164, 164, 196, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    164, 164, 164, 164, 164, 164, 164, 196, 196, 196, 196, 196, 191, 191, 191, 191,
    163, 163, 163, 163, 196, 191, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    218, 218, 218, 218, 218, 218, 218, 218, 218, 218, 0, 241, 222, 250, 653, 654,
    219, 219, 0, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 0, 0, 0, 0, 0, 115, 115, 115,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    221, 221, 221, 221, 221, 221, 221, 221, 221, 221, 221, 221, 221, 221, 221, 221,
    221, 221, 221, 221, 418, 419, 420, 196, 196, 196, 196, 0, 0, 0, 0, 0,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 0, 0, 0, 0, 199,
    115, 217, 217, 217, 217, 217, 217, 217, 217, 217, 217, 217, 217, 217, 217, 217,
    217, 217, 217, 217, 217, 217, 217, 217, 217, 217, 217, 217, 217, 217, 217, 217,
    217, 217, 217, 217, 217, 217, 217, 217, 217, 217, 217, 217, 217, 217, 217, 217,
    217, 217, 217, 217, 217, 217, 217, 217, 0, 0, 0, 0, 0, 0, 0, 199,
    199, 199, 199, 163, 163, 163, 163, 163, 163, 163, 163, 163, 163, 163, 163, 163,
    163, 163, 6, 163, 655, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    217, 217, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402,
    402, 402, 402, 402, 402, 402, 402, 402, 0, 0, 0, 0, 0, 0, 0, 0,
    402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402,
    402, 402, 402, 402, 402, 402, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    402, 402, 402, 402, 402, 402, 402, 402, 402, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    163, 163, 163, 163, 0, 163, 163, 163, 163, 163, 163, 163, 0, 163, 163, 0,
    115, 115, 115, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    115, 115, 115, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 115, 115, 115, 115, 0, 0, 0, 0, 0, 0, 0, 0,
    402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402,
    402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402,
    402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 0, 0, 0, 0,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 0, 0, 0, 0, 0,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 0, 0, 0,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 0, 0, 0, 0, 0, 0, 0,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 0, 0, 191, 164, 199, 196,
    76, 76, 76, 76, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 0, 0,
    164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164,
    164, 164, 164, 164, 164, 164, 164, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191,
    191, 191, 191, 191, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191,
    191, 191, 191, 191, 191, 191, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    191, 191, 191, 191, 191, 191, 191, 0, 0, 191, 191, 191, 191, 191, 191, 191,
    191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191,
    191, 191, 191, 191, 191, 229, 229, 164, 164, 164, 191, 191, 191, 229, 229, 229,
    229, 229, 229, 76, 76, 76, 76, 76, 76, 76, 76, 164, 164, 164, 164, 164,
    164, 164, 164, 191, 191, 164, 164, 164, 164, 164, 164, 164, 191, 191, 191, 191,
    191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191,
    191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 164, 164, 164, 164, 191, 191,
    191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191,
    191, 191, 191, 191, 191, 191, 191, 191, 191, 73, 73, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    73, 73, 164, 164, 164, 73, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    221, 221, 221, 221, 221, 221, 221, 221, 221, 221, 221, 221, 221, 221, 221, 221,
    221, 221, 221, 221, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73,
    73, 73, 73, 73, 73, 73, 73, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    418, 419, 420, 421, 422, 423, 424, 425, 426, 241, 242, 243, 244, 245, 246, 247,
    248, 249, 418, 419, 420, 421, 422, 418, 422, 0, 0, 0, 0, 0, 0, 0,
    179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179,
    179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 94, 94, 94, 94, 94, 94,
    94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94,
    94, 94, 94, 94, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179,
    179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 94, 94,
    94, 94, 94, 94, 94, 0, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94,
    94, 94, 94, 94, 94, 94, 94, 94, 179, 179, 179, 179, 179, 179, 179, 179,
    179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179,
    179, 179, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94,
    94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 179, 0, 179, 179,
    0, 0, 179, 0, 0, 179, 179, 0, 0, 179, 179, 179, 179, 0, 179, 179,
    179, 179, 179, 179, 179, 179, 94, 94, 94, 94, 0, 94, 0, 94, 94, 94,
    94, 94, 94, 94, 0, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94,
    179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179,
    179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 94, 94, 94, 94, 94, 94,
    94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94,
    94, 94, 94, 94, 179, 179, 0, 179, 179, 179, 179, 0, 0, 179, 179, 179,
    179, 179, 179, 179, 179, 0, 179, 179, 179, 179, 179, 179, 179, 0, 94, 94,
    94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94,
    94, 94, 94, 94, 94, 94, 94, 94, 179, 179, 0, 179, 179, 179, 179, 0,
    179, 179, 179, 179, 179, 0, 179, 0, 0, 0, 179, 179, 179, 179, 179, 179,
    179, 0, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94,
    94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 179, 179, 179, 179,
    179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179,
    179, 179, 179, 179, 179, 179, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94,
    94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94,
    179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 94, 94,
    94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94,
    179, 179, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94,
    94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 179, 179, 179, 179,
    179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179,
    179, 179, 179, 179, 179, 179, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94,
    94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94,
    179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179,
    94, 94, 94, 94, 94, 94, 0, 0, 179, 179, 179, 179, 179, 179, 179, 179,
    179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179,
    179, 656, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94,
    94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 15, 94, 94, 94, 94,
    94, 94, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179,
    179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 656, 94, 94, 94, 94,
    94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94,
    94, 94, 94, 94, 94, 15, 94, 94, 94, 94, 94, 94, 179, 179, 179, 179,
    179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179,
    179, 179, 179, 179, 179, 656, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94,
    94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 15,
    94, 94, 94, 94, 94, 94, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179,
    179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 656,
    94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94,
    94, 94, 94, 94, 94, 94, 94, 94, 94, 15, 94, 94, 94, 94, 94, 94,
    179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179, 179,
    179, 179, 179, 179, 179, 179, 179, 179, 179, 656, 94, 94, 94, 94, 94, 94,
    94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94,
    94, 94, 94, 15, 94, 94, 94, 94, 94, 94, 179, 94, 0, 0, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164,
    164, 164, 164, 164, 164, 164, 164, 191, 191, 191, 191, 164, 164, 164, 164, 164,
    164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 191, 191, 191,
    191, 191, 191, 191, 191, 164, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191,
    191, 191, 191, 191, 164, 191, 191, 196, 196, 196, 196, 196, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 164, 164, 164, 164, 164,
    0, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 115, 94, 94, 94, 94, 94,
    94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 0,
    199, 199, 199, 199, 199, 199, 199, 0, 199, 199, 199, 199, 199, 199, 199, 199,
    199, 199, 199, 199, 199, 199, 199, 199, 199, 0, 0, 199, 199, 199, 199, 199,
    199, 199, 0, 199, 199, 0, 199, 199, 199, 199, 199, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 0, 0, 0,
    164, 164, 164, 164, 164, 164, 164, 163, 163, 163, 163, 163, 163, 163, 0, 0,
    218, 218, 218, 218, 218, 218, 218, 218, 218, 218, 0, 0, 0, 0, 115, 191,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 164, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 164, 164, 164, 164,
    218, 218, 218, 218, 218, 218, 218, 218, 218, 218, 0, 0, 0, 0, 0, 8,
    115, 115, 115, 115, 115, 115, 115, 0, 115, 115, 115, 115, 0, 115, 115, 0,
    115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 115, 0,
    202, 202, 202, 202, 202, 0, 0, 554, 555, 556, 563, 564, 566, 567, 568, 569,
    164, 164, 164, 164, 164, 164, 164, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    657, 657, 657, 657, 657, 657, 657, 657, 657, 657, 657, 657, 657, 657, 657, 657,
    657, 657, 657, 657, 657, 657, 657, 657, 657, 657, 657, 657, 657, 657, 657, 657,
    657, 657, 658, 658, 658, 658, 658, 658, 658, 658, 658, 658, 658, 658, 658, 658,
    658, 658, 658, 658, 658, 658, 658, 658, 658, 658, 658, 658, 658, 658, 658, 658,
    658, 658, 658, 658, 164, 164, 164, 199, 164, 164, 164, 214, 0, 0, 0, 0,
    213, 213, 213, 213, 213, 213, 213, 213, 213, 213, 0, 0, 0, 0, 201, 201,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 638, 659, 660, 661, 662, 663, 664, 665, 666, 639, 640, 667, 668, 669, 670,
    671, 672, 673, 641, 674, 675, 676, 677, 678, 679, 680, 681, 682, 683, 684, 685,
    686, 687, 688, 689, 690, 691, 692, 693, 694, 695, 696, 697, 698, 699, 700, 701,
    700, 702, 703, 638, 659, 660, 661, 662, 663, 664, 665, 666, 212, 704, 704, 704,
    205, 638, 659, 691, 700, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 638, 659, 660, 661, 662, 663, 664, 665, 666, 639, 640, 667, 668, 669, 670,
    671, 672, 673, 641, 674, 675, 676, 677, 678, 679, 680, 681, 682, 683, 684, 685,
    686, 687, 688, 689, 690, 691, 692, 693, 694, 695, 696, 697, 698, 699, 212, 659,
    660, 661, 662, 663, 664, 665, 666, 639, 676, 678, 683, 691, 704, 704, 0, 0,
    208, 208, 208, 208, 0, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208,
    208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208,
    0, 208, 208, 0, 208, 0, 0, 208, 0, 208, 208, 208, 208, 208, 208, 208,
    208, 208, 208, 0, 208, 208, 208, 208, 0, 208, 0, 208, 0, 0, 0, 0,
    0, 0, 208, 0, 0, 0, 0, 208, 0, 208, 0, 208, 0, 208, 208, 208,
    0, 208, 208, 0, 208, 0, 0, 208, 0, 208, 0, 208, 0, 208, 0, 208,
    0, 208, 208, 0, 208, 0, 0, 208, 208, 208, 208, 0, 208, 208, 208, 208,
    208, 208, 208, 0, 208, 208, 208, 208, 0, 208, 208, 208, 208, 0, 208, 0,
    208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 0, 208, 208, 208, 208, 208,
    208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 0, 0, 0, 0,
    0, 208, 208, 208, 0, 208, 208, 208, 208, 208, 0, 208, 208, 208, 208, 208,
    208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 208, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    16, 16, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 0, 0, 0, 0,
    73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73,
    73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 0,
    0, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73,
    0, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73,
    0, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73,
    307, 307, 307, 307, 307, 307, 307, 307, 307, 307, 307, 224, 224, 73, 73, 73,
    191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191,
    191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 73,
    705, 705, 705, 705, 705, 705, 705, 705, 705, 705, 705, 705, 705, 705, 705, 705,
    705, 705, 705, 705, 705, 705, 705, 705, 705, 705, 191, 191, 191, 191, 191, 191,
    705, 705, 705, 705, 705, 705, 705, 705, 705, 705, 705, 705, 705, 705, 705, 705,
    705, 705, 705, 705, 705, 705, 705, 705, 705, 705, 73, 73, 73, 73, 73, 73,
    705, 705, 705, 705, 705, 705, 705, 705, 705, 705, 705, 705, 705, 705, 705, 705,
    705, 705, 705, 705, 705, 705, 705, 705, 705, 705, 191, 191, 191, 191, 191, 191,
    191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191,
    191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 73, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191,
    191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191,
    191, 191, 191, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191,
    191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191,
    191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 191, 0, 0, 0, 0,
    191, 191, 191, 191, 191, 191, 191, 191, 191, 0, 0, 0, 0, 0, 0, 0,
    191, 191, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    73, 73, 73, 73, 73, 73, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73,
    73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 43, 43, 43, 43, 43,
    73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73,
    73, 73, 73, 73, 73, 73, 73, 73, 0, 0, 0, 0, 0, 73, 73, 73,
    73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 0, 0, 0,
    73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 0, 0, 0,
    73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73,
    73, 73, 73, 73, 73, 73, 73, 73, 73, 0, 0, 0, 0, 0, 0, 0,
    73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 0, 0, 0, 0,
    73, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    73, 73, 73, 73, 73, 73, 73, 73, 0, 0, 0, 0, 0, 0, 0, 0,
    73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 0, 0, 0, 0, 0, 0,
    73, 73, 73, 73, 73, 73, 73, 73, 0, 0, 0, 0, 0, 0, 0, 0,
    73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73,
    73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 0, 0,
    73, 73, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 0, 0,
    73, 73, 73, 73, 73, 0, 0, 0, 73, 73, 73, 73, 73, 0, 0, 0,
    73, 73, 73, 73, 73, 73, 73, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73,
    73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 0, 0, 0,
    73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 0, 0, 0, 0, 0,
    73, 73, 73, 73, 73, 73, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 0, 0, 0, 0, 0, 0,
    73, 73, 73, 73, 73, 73, 73, 73, 0, 0, 0, 0, 0, 0, 0, 0,
    73, 73, 73, 73, 73, 73, 73, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73,
    73, 73, 73, 0, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73, 73,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 0, 0, 0, 0, 0, 0,
    402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402,
    402, 402, 402, 402, 402, 402, 402, 402, 402, 0, 0, 0, 0, 0, 0, 0,
    402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402,
    402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 0, 0,
    402, 402, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402,
    402, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402,
    706, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402,
    402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 402, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 76, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    76, 76, 76, 76, 76, 76, 76, 76, 76, 76, 76, 76, 76, 76, 76, 76,
    76, 76, 76, 76, 76, 76, 76, 76, 76, 76, 76, 76, 76, 76, 76, 76,
    164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164, 164,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];

#[rustfmt::skip]
pub static UPPERCASE_MULTI: &[(u32, &[u32])] = &[
    (0x00DF, &[0x0053, 0x0053]),
    (0x0149, &[0x02BC, 0x004E]),
    (0x01F0, &[0x004A, 0x030C]),
    (0x0390, &[0x0399, 0x0308, 0x0301]),
    (0x03B0, &[0x03A5, 0x0308, 0x0301]),
    (0x0587, &[0x0535, 0x0552]),
    (0x1E96, &[0x0048, 0x0331]),
    (0x1E97, &[0x0054, 0x0308]),
    (0x1E98, &[0x0057, 0x030A]),
    (0x1E99, &[0x0059, 0x030A]),
    (0x1E9A, &[0x0041, 0x02BE]),
    (0x1F50, &[0x03A5, 0x0313]),
    (0x1F52, &[0x03A5, 0x0313, 0x0300]),
    (0x1F54, &[0x03A5, 0x0313, 0x0301]),
    (0x1F56, &[0x03A5, 0x0313, 0x0342]),
    (0x1F80, &[0x1F08, 0x0399]),
    (0x1F81, &[0x1F09, 0x0399]),
    (0x1F82, &[0x1F0A, 0x0399]),
    (0x1F83, &[0x1F0B, 0x0399]),
    (0x1F84, &[0x1F0C, 0x0399]),
    (0x1F85, &[0x1F0D, 0x0399]),
    (0x1F86, &[0x1F0E, 0x0399]),
    (0x1F87, &[0x1F0F, 0x0399]),
    (0x1F88, &[0x1F08, 0x0399]),
    (0x1F89, &[0x1F09, 0x0399]),
    (0x1F8A, &[0x1F0A, 0x0399]),
    (0x1F8B, &[0x1F0B, 0x0399]),
    (0x1F8C, &[0x1F0C, 0x0399]),
    (0x1F8D, &[0x1F0D, 0x0399]),
    (0x1F8E, &[0x1F0E, 0x0399]),
    (0x1F8F, &[0x1F0F, 0x0399]),
    (0x1F90, &[0x1F28, 0x0399]),
    (0x1F91, &[0x1F29, 0x0399]),
    (0x1F92, &[0x1F2A, 0x0399]),
    (0x1F93, &[0x1F2B, 0x0399]),
    (0x1F94, &[0x1F2C, 0x0399]),
    (0x1F95, &[0x1F2D, 0x0399]),
    (0x1F96, &[0x1F2E, 0x0399]),
    (0x1F97, &[0x1F2F, 0x0399]),
    (0x1F98, &[0x1F28, 0x0399]),
    (0x1F99, &[0x1F29, 0x0399]),
    (0x1F9A, &[0x1F2A, 0x0399]),
    (0x1F9B, &[0x1F2B, 0x0399]),
    (0x1F9C, &[0x1F2C, 0x0399]),
    (0x1F9D, &[0x1F2D, 0x0399]),
    (0x1F9E, &[0x1F2E, 0x0399]),
    (0x1F9F, &[0x1F2F, 0x0399]),
    (0x1FA0, &[0x1F68, 0x0399]),
    (0x1FA1, &[0x1F69, 0x0399]),
    (0x1FA2, &[0x1F6A, 0x0399]),
    (0x1FA3, &[0x1F6B, 0x0399]),
    (0x1FA4, &[0x1F6C, 0x0399]),
    (0x1FA5, &[0x1F6D, 0x0399]),
    (0x1FA6, &[0x1F6E, 0x0399]),
    (0x1FA7, &[0x1F6F, 0x0399]),
    (0x1FA8, &[0x1F68, 0x0399]),
    (0x1FA9, &[0x1F69, 0x0399]),
    (0x1FAA, &[0x1F6A, 0x0399]),
    (0x1FAB, &[0x1F6B, 0x0399]),
    (0x1FAC, &[0x1F6C, 0x0399]),
    (0x1FAD, &[0x1F6D, 0x0399]),
    (0x1FAE, &[0x1F6E, 0x0399]),
    (0x1FAF, &[0x1F6F, 0x0399]),
    (0x1FB2, &[0x1FBA, 0x0399]),
    (0x1FB3, &[0x0391, 0x0399]),
    (0x1FB4, &[0x0386, 0x0399]),
    (0x1FB6, &[0x0391, 0x0342]),
    (0x1FB7, &[0x0391, 0x0342, 0x0399]),
    (0x1FBC, &[0x0391, 0x0399]),
    (0x1FC2, &[0x1FCA, 0x0399]),
    (0x1FC3, &[0x0397, 0x0399]),
    (0x1FC4, &[0x0389, 0x0399]),
    (0x1FC6, &[0x0397, 0x0342]),
    (0x1FC7, &[0x0397, 0x0342, 0x0399]),
    (0x1FCC, &[0x0397, 0x0399]),
    (0x1FD2, &[0x0399, 0x0308, 0x0300]),
    (0x1FD3, &[0x0399, 0x0308, 0x0301]),
    (0x1FD6, &[0x0399, 0x0342]),
    (0x1FD7, &[0x0399, 0x0308, 0x0342]),
    (0x1FE2, &[0x03A5, 0x0308, 0x0300]),
    (0x1FE3, &[0x03A5, 0x0308, 0x0301]),
    (0x1FE4, &[0x03A1, 0x0313]),
    (0x1FE6, &[0x03A5, 0x0342]),
    (0x1FE7, &[0x03A5, 0x0308, 0x0342]),
    (0x1FF2, &[0x1FFA, 0x0399]),
    (0x1FF3, &[0x03A9, 0x0399]),
    (0x1FF4, &[0x038F, 0x0399]),
    (0x1FF6, &[0x03A9, 0x0342]),
    (0x1FF7, &[0x03A9, 0x0342, 0x0399]),
    (0x1FFC, &[0x03A9, 0x0399]),
    (0xFB00, &[0x0046, 0x0046]),
    (0xFB01, &[0x0046, 0x0049]),
    (0xFB02, &[0x0046, 0x004C]),
    (0xFB03, &[0x0046, 0x0046, 0x0049]),
    (0xFB04, &[0x0046, 0x0046, 0x004C]),
    (0xFB05, &[0x0053, 0x0054]),
    (0xFB06, &[0x0053, 0x0054]),
    (0xFB13, &[0x0544, 0x0546]),
    (0xFB14, &[0x0544, 0x0535]),
    (0xFB15, &[0x0544, 0x053B]),
    (0xFB16, &[0x054E, 0x0546]),
    (0xFB17, &[0x0544, 0x053D]),
];
