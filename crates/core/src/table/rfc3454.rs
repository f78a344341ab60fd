//! RFC 3454 stringprep tables (Unicode 3.2).
//!
//! Generated by `scripts/gen_rfc3454_tables.py`. Do not edit by hand.

use super::mapping::{MappingEntry, MappingTable};
use super::range::{CodepointRange, RangeTable};

const fn r(start: u32, end: u32) -> CodepointRange {
    CodepointRange::new(start, end)
}

const fn m(codepoint: u32, replacement: &'static [u32]) -> MappingEntry {
    MappingEntry::new(codepoint, replacement)
}

/// Table A.1: Unassigned code points in Unicode 3.2.
pub static A_1: RangeTable = RangeTable::from_static(&[
    r(0x0221, 0x0221),
    r(0x0234, 0x024F),
    r(0x02AE, 0x02AF),
    r(0x02EF, 0x02FF),
    r(0x0350, 0x035F),
    r(0x0370, 0x0373),
    r(0x0376, 0x0379),
    r(0x037B, 0x037D),
    r(0x037F, 0x0383),
    r(0x038B, 0x038B),
    r(0x038D, 0x038D),
    r(0x03A2, 0x03A2),
    r(0x03CF, 0x03CF),
    r(0x03F7, 0x03FF),
    r(0x0487, 0x0487),
    r(0x04CF, 0x04CF),
    r(0x04F6, 0x04F7),
    r(0x04FA, 0x04FF),
    r(0x0510, 0x0530),
    r(0x0557, 0x0558),
    r(0x0560, 0x0560),
    r(0x0588, 0x0588),
    r(0x058B, 0x0590),
    r(0x05A2, 0x05A2),
    r(0x05BA, 0x05BA),
    r(0x05C5, 0x05CF),
    r(0x05EB, 0x05EF),
    r(0x05F5, 0x060B),
    r(0x060D, 0x061A),
    r(0x061C, 0x061E),
    r(0x0620, 0x0620),
    r(0x063B, 0x063F),
    r(0x0656, 0x065F),
    r(0x06EE, 0x06EF),
    r(0x06FF, 0x06FF),
    r(0x070E, 0x070E),
    r(0x072D, 0x072F),
    r(0x074B, 0x077F),
    r(0x07B2, 0x0900),
    r(0x0904, 0x0904),
    r(0x093A, 0x093B),
    r(0x094E, 0x094F),
    r(0x0955, 0x0957),
    r(0x0971, 0x0980),
    r(0x0984, 0x0984),
    r(0x098D, 0x098E),
    r(0x0991, 0x0992),
    r(0x09A9, 0x09A9),
    r(0x09B1, 0x09B1),
    r(0x09B3, 0x09B5),
    r(0x09BA, 0x09BB),
    r(0x09BD, 0x09BD),
    r(0x09C5, 0x09C6),
    r(0x09C9, 0x09CA),
    r(0x09CE, 0x09D6),
    r(0x09D8, 0x09DB),
    r(0x09DE, 0x09DE),
    r(0x09E4, 0x09E5),
    r(0x09FB, 0x0A01),
    r(0x0A03, 0x0A04),
    r(0x0A0B, 0x0A0E),
    r(0x0A11, 0x0A12),
    r(0x0A29, 0x0A29),
    r(0x0A31, 0x0A31),
    r(0x0A34, 0x0A34),
    r(0x0A37, 0x0A37),
    r(0x0A3A, 0x0A3B),
    r(0x0A3D, 0x0A3D),
    r(0x0A43, 0x0A46),
    r(0x0A49, 0x0A4A),
    r(0x0A4E, 0x0A58),
    r(0x0A5D, 0x0A5D),
    r(0x0A5F, 0x0A65),
    r(0x0A75, 0x0A80),
    r(0x0A84, 0x0A84),
    r(0x0A8C, 0x0A8C),
    r(0x0A8E, 0x0A8E),
    r(0x0A92, 0x0A92),
    r(0x0AA9, 0x0AA9),
    r(0x0AB1, 0x0AB1),
    r(0x0AB4, 0x0AB4),
    r(0x0ABA, 0x0ABB),
    r(0x0AC6, 0x0AC6),
    r(0x0ACA, 0x0ACA),
    r(0x0ACE, 0x0ACF),
    r(0x0AD1, 0x0ADF),
    r(0x0AE1, 0x0AE5),
    r(0x0AF0, 0x0B00),
    r(0x0B04, 0x0B04),
    r(0x0B0D, 0x0B0E),
    r(0x0B11, 0x0B12),
    r(0x0B29, 0x0B29),
    r(0x0B31, 0x0B31),
    r(0x0B34, 0x0B35),
    r(0x0B3A, 0x0B3B),
    r(0x0B44, 0x0B46),
    r(0x0B49, 0x0B4A),
    r(0x0B4E, 0x0B55),
    r(0x0B58, 0x0B5B),
    r(0x0B5E, 0x0B5E),
    r(0x0B62, 0x0B65),
    r(0x0B71, 0x0B81),
    r(0x0B84, 0x0B84),
    r(0x0B8B, 0x0B8D),
    r(0x0B91, 0x0B91),
    r(0x0B96, 0x0B98),
    r(0x0B9B, 0x0B9B),
    r(0x0B9D, 0x0B9D),
    r(0x0BA0, 0x0BA2),
    r(0x0BA5, 0x0BA7),
    r(0x0BAB, 0x0BAD),
    r(0x0BB6, 0x0BB6),
    r(0x0BBA, 0x0BBD),
    r(0x0BC3, 0x0BC5),
    r(0x0BC9, 0x0BC9),
    r(0x0BCE, 0x0BD6),
    r(0x0BD8, 0x0BE6),
    r(0x0BF3, 0x0C00),
    r(0x0C04, 0x0C04),
    r(0x0C0D, 0x0C0D),
    r(0x0C11, 0x0C11),
    r(0x0C29, 0x0C29),
    r(0x0C34, 0x0C34),
    r(0x0C3A, 0x0C3D),
    r(0x0C45, 0x0C45),
    r(0x0C49, 0x0C49),
    r(0x0C4E, 0x0C54),
    r(0x0C57, 0x0C5F),
    r(0x0C62, 0x0C65),
    r(0x0C70, 0x0C81),
    r(0x0C84, 0x0C84),
    r(0x0C8D, 0x0C8D),
    r(0x0C91, 0x0C91),
    r(0x0CA9, 0x0CA9),
    r(0x0CB4, 0x0CB4),
    r(0x0CBA, 0x0CBD),
    r(0x0CC5, 0x0CC5),
    r(0x0CC9, 0x0CC9),
    r(0x0CCE, 0x0CD4),
    r(0x0CD7, 0x0CDD),
    r(0x0CDF, 0x0CDF),
    r(0x0CE2, 0x0CE5),
    r(0x0CF0, 0x0D01),
    r(0x0D04, 0x0D04),
    r(0x0D0D, 0x0D0D),
    r(0x0D11, 0x0D11),
    r(0x0D29, 0x0D29),
    r(0x0D3A, 0x0D3D),
    r(0x0D44, 0x0D45),
    r(0x0D49, 0x0D49),
    r(0x0D4E, 0x0D56),
    r(0x0D58, 0x0D5F),
    r(0x0D62, 0x0D65),
    r(0x0D70, 0x0D81),
    r(0x0D84, 0x0D84),
    r(0x0D97, 0x0D99),
    r(0x0DB2, 0x0DB2),
    r(0x0DBC, 0x0DBC),
    r(0x0DBE, 0x0DBF),
    r(0x0DC7, 0x0DC9),
    r(0x0DCB, 0x0DCE),
    r(0x0DD5, 0x0DD5),
    r(0x0DD7, 0x0DD7),
    r(0x0DE0, 0x0DF1),
    r(0x0DF5, 0x0E00),
    r(0x0E3B, 0x0E3E),
    r(0x0E5C, 0x0E80),
    r(0x0E83, 0x0E83),
    r(0x0E85, 0x0E86),
    r(0x0E89, 0x0E89),
    r(0x0E8B, 0x0E8C),
    r(0x0E8E, 0x0E93),
    r(0x0E98, 0x0E98),
    r(0x0EA0, 0x0EA0),
    r(0x0EA4, 0x0EA4),
    r(0x0EA6, 0x0EA6),
    r(0x0EA8, 0x0EA9),
    r(0x0EAC, 0x0EAC),
    r(0x0EBA, 0x0EBA),
    r(0x0EBE, 0x0EBF),
    r(0x0EC5, 0x0EC5),
    r(0x0EC7, 0x0EC7),
    r(0x0ECE, 0x0ECF),
    r(0x0EDA, 0x0EDB),
    r(0x0EDE, 0x0EFF),
    r(0x0F48, 0x0F48),
    r(0x0F6B, 0x0F70),
    r(0x0F8C, 0x0F8F),
    r(0x0F98, 0x0F98),
    r(0x0FBD, 0x0FBD),
    r(0x0FCD, 0x0FCE),
    r(0x0FD0, 0x0FFF),
    r(0x1022, 0x1022),
    r(0x1028, 0x1028),
    r(0x102B, 0x102B),
    r(0x1033, 0x1035),
    r(0x103A, 0x103F),
    r(0x105A, 0x109F),
    r(0x10C6, 0x10CF),
    r(0x10F9, 0x10FA),
    r(0x10FC, 0x10FF),
    r(0x115A, 0x115E),
    r(0x11A3, 0x11A7),
    r(0x11FA, 0x11FF),
    r(0x1207, 0x1207),
    r(0x1247, 0x1247),
    r(0x1249, 0x1249),
    r(0x124E, 0x124F),
    r(0x1257, 0x1257),
    r(0x1259, 0x1259),
    r(0x125E, 0x125F),
    r(0x1287, 0x1287),
    r(0x1289, 0x1289),
    r(0x128E, 0x128F),
    r(0x12AF, 0x12AF),
    r(0x12B1, 0x12B1),
    r(0x12B6, 0x12B7),
    r(0x12BF, 0x12BF),
    r(0x12C1, 0x12C1),
    r(0x12C6, 0x12C7),
    r(0x12CF, 0x12CF),
    r(0x12D7, 0x12D7),
    r(0x12EF, 0x12EF),
    r(0x130F, 0x130F),
    r(0x1311, 0x1311),
    r(0x1316, 0x1317),
    r(0x131F, 0x131F),
    r(0x1347, 0x1347),
    r(0x135B, 0x1360),
    r(0x137D, 0x139F),
    r(0x13F5, 0x1400),
    r(0x1677, 0x167F),
    r(0x169D, 0x169F),
    r(0x16F1, 0x16FF),
    r(0x170D, 0x170D),
    r(0x1715, 0x171F),
    r(0x1737, 0x173F),
    r(0x1754, 0x175F),
    r(0x176D, 0x176D),
    r(0x1771, 0x1771),
    r(0x1774, 0x177F),
    r(0x17DD, 0x17DF),
    r(0x17EA, 0x17FF),
    r(0x180F, 0x180F),
    r(0x181A, 0x181F),
    r(0x1878, 0x187F),
    r(0x18AA, 0x1DFF),
    r(0x1E9C, 0x1E9F),
    r(0x1EFA, 0x1EFF),
    r(0x1F16, 0x1F17),
    r(0x1F1E, 0x1F1F),
    r(0x1F46, 0x1F47),
    r(0x1F4E, 0x1F4F),
    r(0x1F58, 0x1F58),
    r(0x1F5A, 0x1F5A),
    r(0x1F5C, 0x1F5C),
    r(0x1F5E, 0x1F5E),
    r(0x1F7E, 0x1F7F),
    r(0x1FB5, 0x1FB5),
    r(0x1FC5, 0x1FC5),
    r(0x1FD4, 0x1FD5),
    r(0x1FDC, 0x1FDC),
    r(0x1FF0, 0x1FF1),
    r(0x1FF5, 0x1FF5),
    r(0x1FFF, 0x1FFF),
    r(0x2053, 0x2056),
    r(0x2058, 0x205E),
    r(0x2064, 0x2069),
    r(0x2072, 0x2073),
    r(0x208F, 0x209F),
    r(0x20B2, 0x20CF),
    r(0x20EB, 0x20FF),
    r(0x213B, 0x213C),
    r(0x214C, 0x2152),
    r(0x2184, 0x218F),
    r(0x23CF, 0x23FF),
    r(0x2427, 0x243F),
    r(0x244B, 0x245F),
    r(0x24FF, 0x24FF),
    r(0x2614, 0x2615),
    r(0x2618, 0x2618),
    r(0x267E, 0x267F),
    r(0x268A, 0x2700),
    r(0x2705, 0x2705),
    r(0x270A, 0x270B),
    r(0x2728, 0x2728),
    r(0x274C, 0x274C),
    r(0x274E, 0x274E),
    r(0x2753, 0x2755),
    r(0x2757, 0x2757),
    r(0x275F, 0x2760),
    r(0x2795, 0x2797),
    r(0x27B0, 0x27B0),
    r(0x27BF, 0x27CF),
    r(0x27EC, 0x27EF),
    r(0x2B00, 0x2E7F),
    r(0x2E9A, 0x2E9A),
    r(0x2EF4, 0x2EFF),
    r(0x2FD6, 0x2FEF),
    r(0x2FFC, 0x2FFF),
    r(0x3040, 0x3040),
    r(0x3097, 0x3098),
    r(0x3100, 0x3104),
    r(0x312D, 0x3130),
    r(0x318F, 0x318F),
    r(0x31B8, 0x31EF),
    r(0x321D, 0x321F),
    r(0x3244, 0x3250),
    r(0x327C, 0x327E),
    r(0x32CC, 0x32CF),
    r(0x32FF, 0x32FF),
    r(0x3377, 0x337A),
    r(0x33DE, 0x33DF),
    r(0x33FF, 0x33FF),
    r(0x4DB6, 0x4DFF),
    r(0x9FA6, 0x9FFF),
    r(0xA48D, 0xA48F),
    r(0xA4C7, 0xABFF),
    r(0xD7A4, 0xD7FF),
    r(0xFA2E, 0xFA2F),
    r(0xFA6B, 0xFAFF),
    r(0xFB07, 0xFB12),
    r(0xFB18, 0xFB1C),
    r(0xFB37, 0xFB37),
    r(0xFB3D, 0xFB3D),
    r(0xFB3F, 0xFB3F),
    r(0xFB42, 0xFB42),
    r(0xFB45, 0xFB45),
    r(0xFBB2, 0xFBD2),
    r(0xFD40, 0xFD4F),
    r(0xFD90, 0xFD91),
    r(0xFDC8, 0xFDCF),
    r(0xFDFD, 0xFDFF),
    r(0xFE10, 0xFE1F),
    r(0xFE24, 0xFE2F),
    r(0xFE47, 0xFE48),
    r(0xFE53, 0xFE53),
    r(0xFE67, 0xFE67),
    r(0xFE6C, 0xFE6F),
    r(0xFE75, 0xFE75),
    r(0xFEFD, 0xFEFE),
    r(0xFF00, 0xFF00),
    r(0xFFBF, 0xFFC1),
    r(0xFFC8, 0xFFC9),
    r(0xFFD0, 0xFFD1),
    r(0xFFD8, 0xFFD9),
    r(0xFFDD, 0xFFDF),
    r(0xFFE7, 0xFFE7),
    r(0xFFEF, 0xFFF8),
    r(0x10000, 0x102FF),
    r(0x1031F, 0x1031F),
    r(0x10324, 0x1032F),
    r(0x1034B, 0x103FF),
    r(0x10426, 0x10427),
    r(0x1044E, 0x1CFFF),
    r(0x1D0F6, 0x1D0FF),
    r(0x1D127, 0x1D129),
    r(0x1D1DE, 0x1D3FF),
    r(0x1D455, 0x1D455),
    r(0x1D49D, 0x1D49D),
    r(0x1D4A0, 0x1D4A1),
    r(0x1D4A3, 0x1D4A4),
    r(0x1D4A7, 0x1D4A8),
    r(0x1D4AD, 0x1D4AD),
    r(0x1D4BA, 0x1D4BA),
    r(0x1D4BC, 0x1D4BC),
    r(0x1D4C1, 0x1D4C1),
    r(0x1D4C4, 0x1D4C4),
    r(0x1D506, 0x1D506),
    r(0x1D50B, 0x1D50C),
    r(0x1D515, 0x1D515),
    r(0x1D51D, 0x1D51D),
    r(0x1D53A, 0x1D53A),
    r(0x1D53F, 0x1D53F),
    r(0x1D545, 0x1D545),
    r(0x1D547, 0x1D549),
    r(0x1D551, 0x1D551),
    r(0x1D6A4, 0x1D6A7),
    r(0x1D7CA, 0x1D7CD),
    r(0x1D800, 0x1FFFD),
    r(0x2A6D7, 0x2F7FF),
    r(0x2FA1E, 0x2FFFD),
    r(0x30000, 0x3FFFD),
    r(0x40000, 0x4FFFD),
    r(0x50000, 0x5FFFD),
    r(0x60000, 0x6FFFD),
    r(0x70000, 0x7FFFD),
    r(0x80000, 0x8FFFD),
    r(0x90000, 0x9FFFD),
    r(0xA0000, 0xAFFFD),
    r(0xB0000, 0xBFFFD),
    r(0xC0000, 0xCFFFD),
    r(0xD0000, 0xDFFFD),
    r(0xE0000, 0xE0000),
    r(0xE0002, 0xE001F),
    r(0xE0080, 0xEFFFD),
]);

/// Table B.1: Commonly mapped to nothing.
pub static B_1: RangeTable = RangeTable::from_static(&[
    r(0x00AD, 0x00AD),
    r(0x034F, 0x034F),
    r(0x1806, 0x1806),
    r(0x180B, 0x180D),
    r(0x200B, 0x200D),
    r(0x2060, 0x2060),
    r(0xFE00, 0xFE0F),
    r(0xFEFF, 0xFEFF),
]);

/// Table C.1.1: ASCII space characters.
pub static C_1_1: RangeTable = RangeTable::from_static(&[
    r(0x0020, 0x0020),
]);

/// Table C.1.2: Non-ASCII space characters.
pub static C_1_2: RangeTable = RangeTable::from_static(&[
    r(0x00A0, 0x00A0),
    r(0x1680, 0x1680),
    r(0x2000, 0x200B),
    r(0x202F, 0x202F),
    r(0x205F, 0x205F),
    r(0x3000, 0x3000),
]);

/// Table C.2.1: ASCII control characters.
pub static C_2_1: RangeTable = RangeTable::from_static(&[
    r(0x0000, 0x001F),
    r(0x007F, 0x007F),
]);

/// Table C.2.2: Non-ASCII control characters.
pub static C_2_2: RangeTable = RangeTable::from_static(&[
    r(0x0080, 0x009F),
    r(0x06DD, 0x06DD),
    r(0x070F, 0x070F),
    r(0x180E, 0x180E),
    r(0x200C, 0x200D),
    r(0x2028, 0x2029),
    r(0x2060, 0x2063),
    r(0x206A, 0x206F),
    r(0xFEFF, 0xFEFF),
    r(0xFFF9, 0xFFFC),
    r(0x1D173, 0x1D17A),
]);

/// Table C.3: Private use.
pub static C_3: RangeTable = RangeTable::from_static(&[
    r(0xE000, 0xF8FF),
    r(0xF0000, 0xFFFFD),
    r(0x100000, 0x10FFFD),
]);

/// Table C.4: Non-character code points.
pub static C_4: RangeTable = RangeTable::from_static(&[
    r(0xFDD0, 0xFDEF),
    r(0xFFFE, 0xFFFF),
    r(0x1FFFE, 0x1FFFF),
    r(0x2FFFE, 0x2FFFF),
    r(0x3FFFE, 0x3FFFF),
    r(0x4FFFE, 0x4FFFF),
    r(0x5FFFE, 0x5FFFF),
    r(0x6FFFE, 0x6FFFF),
    r(0x7FFFE, 0x7FFFF),
    r(0x8FFFE, 0x8FFFF),
    r(0x9FFFE, 0x9FFFF),
    r(0xAFFFE, 0xAFFFF),
    r(0xBFFFE, 0xBFFFF),
    r(0xCFFFE, 0xCFFFF),
    r(0xDFFFE, 0xDFFFF),
    r(0xEFFFE, 0xEFFFF),
    r(0xFFFFE, 0xFFFFF),
    r(0x10FFFE, 0x10FFFF),
]);

/// Table C.5: Surrogate codes.
pub static C_5: RangeTable = RangeTable::from_static(&[
    r(0xD800, 0xDFFF),
]);

/// Table C.6: Inappropriate for plain text.
pub static C_6: RangeTable = RangeTable::from_static(&[
    r(0xFFF9, 0xFFFD),
]);

/// Table C.7: Inappropriate for canonical representation.
pub static C_7: RangeTable = RangeTable::from_static(&[
    r(0x2FF0, 0x2FFB),
]);

/// Table C.8: Change display properties or are deprecated.
pub static C_8: RangeTable = RangeTable::from_static(&[
    r(0x0340, 0x0341),
    r(0x200E, 0x200F),
    r(0x202A, 0x202E),
    r(0x206A, 0x206F),
]);

/// Table C.9: Tagging characters.
pub static C_9: RangeTable = RangeTable::from_static(&[
    r(0xE0001, 0xE0001),
    r(0xE0020, 0xE007F),
]);

/// Table D.1: Characters with bidirectional property "R" or "AL".
pub static D_1: RangeTable = RangeTable::from_static(&[
    r(0x05BE, 0x05BE),
    r(0x05C0, 0x05C0),
    r(0x05C3, 0x05C3),
    r(0x05D0, 0x05EA),
    r(0x05F0, 0x05F4),
    r(0x061B, 0x061B),
    r(0x061F, 0x061F),
    r(0x0621, 0x063A),
    r(0x0640, 0x064A),
    r(0x066D, 0x066F),
    r(0x0671, 0x06D5),
    r(0x06DD, 0x06DD),
    r(0x06E5, 0x06E6),
    r(0x06FA, 0x06FE),
    r(0x0700, 0x070D),
    r(0x0710, 0x0710),
    r(0x0712, 0x072C),
    r(0x0780, 0x07A5),
    r(0x07B1, 0x07B1),
    r(0x200F, 0x200F),
    r(0xFB1D, 0xFB1D),
    r(0xFB1F, 0xFB28),
    r(0xFB2A, 0xFB36),
    r(0xFB38, 0xFB3C),
    r(0xFB3E, 0xFB3E),
    r(0xFB40, 0xFB41),
    r(0xFB43, 0xFB44),
    r(0xFB46, 0xFBB1),
    r(0xFBD3, 0xFD3D),
    r(0xFD50, 0xFD8F),
    r(0xFD92, 0xFDC7),
    r(0xFDF0, 0xFDFC),
    r(0xFE70, 0xFE74),
    r(0xFE76, 0xFEFC),
]);

/// Table D.2: Characters with bidirectional property "L".
pub static D_2: RangeTable = RangeTable::from_static(&[
    r(0x0041, 0x005A),
    r(0x0061, 0x007A),
    r(0x00AA, 0x00AA),
    r(0x00B5, 0x00B5),
    r(0x00BA, 0x00BA),
    r(0x00C0, 0x00D6),
    r(0x00D8, 0x00F6),
    r(0x00F8, 0x0220),
    r(0x0222, 0x0233),
    r(0x0250, 0x02AD),
    r(0x02B0, 0x02B8),
    r(0x02BB, 0x02C1),
    r(0x02D0, 0x02D1),
    r(0x02E0, 0x02E4),
    r(0x02EE, 0x02EE),
    r(0x037A, 0x037A),
    r(0x0386, 0x0386),
    r(0x0388, 0x038A),
    r(0x038C, 0x038C),
    r(0x038E, 0x03A1),
    r(0x03A3, 0x03CE),
    r(0x03D0, 0x03F5),
    r(0x0400, 0x0482),
    r(0x048A, 0x04CE),
    r(0x04D0, 0x04F5),
    r(0x04F8, 0x04F9),
    r(0x0500, 0x050F),
    r(0x0531, 0x0556),
    r(0x0559, 0x055F),
    r(0x0561, 0x0587),
    r(0x0589, 0x0589),
    r(0x0903, 0x0903),
    r(0x0905, 0x0939),
    r(0x093D, 0x0940),
    r(0x0949, 0x094C),
    r(0x0950, 0x0950),
    r(0x0958, 0x0961),
    r(0x0964, 0x0970),
    r(0x0982, 0x0983),
    r(0x0985, 0x098C),
    r(0x098F, 0x0990),
    r(0x0993, 0x09A8),
    r(0x09AA, 0x09B0),
    r(0x09B2, 0x09B2),
    r(0x09B6, 0x09B9),
    r(0x09BE, 0x09C0),
    r(0x09C7, 0x09C8),
    r(0x09CB, 0x09CC),
    r(0x09D7, 0x09D7),
    r(0x09DC, 0x09DD),
    r(0x09DF, 0x09E1),
    r(0x09E6, 0x09F1),
    r(0x09F4, 0x09FA),
    r(0x0A05, 0x0A0A),
    r(0x0A0F, 0x0A10),
    r(0x0A13, 0x0A28),
    r(0x0A2A, 0x0A30),
    r(0x0A32, 0x0A33),
    r(0x0A35, 0x0A36),
    r(0x0A38, 0x0A39),
    r(0x0A3E, 0x0A40),
    r(0x0A59, 0x0A5C),
    r(0x0A5E, 0x0A5E),
    r(0x0A66, 0x0A6F),
    r(0x0A72, 0x0A74),
    r(0x0A83, 0x0A83),
    r(0x0A85, 0x0A8B),
    r(0x0A8D, 0x0A8D),
    r(0x0A8F, 0x0A91),
    r(0x0A93, 0x0AA8),
    r(0x0AAA, 0x0AB0),
    r(0x0AB2, 0x0AB3),
    r(0x0AB5, 0x0AB9),
    r(0x0ABD, 0x0AC0),
    r(0x0AC9, 0x0AC9),
    r(0x0ACB, 0x0ACC),
    r(0x0AD0, 0x0AD0),
    r(0x0AE0, 0x0AE0),
    r(0x0AE6, 0x0AEF),
    r(0x0B02, 0x0B03),
    r(0x0B05, 0x0B0C),
    r(0x0B0F, 0x0B10),
    r(0x0B13, 0x0B28),
    r(0x0B2A, 0x0B30),
    r(0x0B32, 0x0B33),
    r(0x0B36, 0x0B39),
    r(0x0B3D, 0x0B3E),
    r(0x0B40, 0x0B40),
    r(0x0B47, 0x0B48),
    r(0x0B4B, 0x0B4C),
    r(0x0B57, 0x0B57),
    r(0x0B5C, 0x0B5D),
    r(0x0B5F, 0x0B61),
    r(0x0B66, 0x0B70),
    r(0x0B83, 0x0B83),
    r(0x0B85, 0x0B8A),
    r(0x0B8E, 0x0B90),
    r(0x0B92, 0x0B95),
    r(0x0B99, 0x0B9A),
    r(0x0B9C, 0x0B9C),
    r(0x0B9E, 0x0B9F),
    r(0x0BA3, 0x0BA4),
    r(0x0BA8, 0x0BAA),
    r(0x0BAE, 0x0BB5),
    r(0x0BB7, 0x0BB9),
    r(0x0BBE, 0x0BBF),
    r(0x0BC1, 0x0BC2),
    r(0x0BC6, 0x0BC8),
    r(0x0BCA, 0x0BCC),
    r(0x0BD7, 0x0BD7),
    r(0x0BE7, 0x0BF2),
    r(0x0C01, 0x0C03),
    r(0x0C05, 0x0C0C),
    r(0x0C0E, 0x0C10),
    r(0x0C12, 0x0C28),
    r(0x0C2A, 0x0C33),
    r(0x0C35, 0x0C39),
    r(0x0C41, 0x0C44),
    r(0x0C60, 0x0C61),
    r(0x0C66, 0x0C6F),
    r(0x0C82, 0x0C83),
    r(0x0C85, 0x0C8C),
    r(0x0C8E, 0x0C90),
    r(0x0C92, 0x0CA8),
    r(0x0CAA, 0x0CB3),
    r(0x0CB5, 0x0CB9),
    r(0x0CBE, 0x0CBE),
    r(0x0CC0, 0x0CC4),
    r(0x0CC7, 0x0CC8),
    r(0x0CCA, 0x0CCB),
    r(0x0CD5, 0x0CD6),
    r(0x0CDE, 0x0CDE),
    r(0x0CE0, 0x0CE1),
    r(0x0CE6, 0x0CEF),
    r(0x0D02, 0x0D03),
    r(0x0D05, 0x0D0C),
    r(0x0D0E, 0x0D10),
    r(0x0D12, 0x0D28),
    r(0x0D2A, 0x0D39),
    r(0x0D3E, 0x0D40),
    r(0x0D46, 0x0D48),
    r(0x0D4A, 0x0D4C),
    r(0x0D57, 0x0D57),
    r(0x0D60, 0x0D61),
    r(0x0D66, 0x0D6F),
    r(0x0D82, 0x0D83),
    r(0x0D85, 0x0D96),
    r(0x0D9A, 0x0DB1),
    r(0x0DB3, 0x0DBB),
    r(0x0DBD, 0x0DBD),
    r(0x0DC0, 0x0DC6),
    r(0x0DCF, 0x0DD1),
    r(0x0DD8, 0x0DDF),
    r(0x0DF2, 0x0DF4),
    r(0x0E01, 0x0E30),
    r(0x0E32, 0x0E33),
    r(0x0E40, 0x0E46),
    r(0x0E4F, 0x0E5B),
    r(0x0E81, 0x0E82),
    r(0x0E84, 0x0E84),
    r(0x0E87, 0x0E88),
    r(0x0E8A, 0x0E8A),
    r(0x0E8D, 0x0E8D),
    r(0x0E94, 0x0E97),
    r(0x0E99, 0x0E9F),
    r(0x0EA1, 0x0EA3),
    r(0x0EA5, 0x0EA5),
    r(0x0EA7, 0x0EA7),
    r(0x0EAA, 0x0EAB),
    r(0x0EAD, 0x0EB0),
    r(0x0EB2, 0x0EB3),
    r(0x0EBD, 0x0EBD),
    r(0x0EC0, 0x0EC4),
    r(0x0EC6, 0x0EC6),
    r(0x0ED0, 0x0ED9),
    r(0x0EDC, 0x0EDD),
    r(0x0F00, 0x0F17),
    r(0x0F1A, 0x0F34),
    r(0x0F36, 0x0F36),
    r(0x0F38, 0x0F38),
    r(0x0F3E, 0x0F47),
    r(0x0F49, 0x0F6A),
    r(0x0F7F, 0x0F7F),
    r(0x0F85, 0x0F85),
    r(0x0F88, 0x0F8B),
    r(0x0FBE, 0x0FC5),
    r(0x0FC7, 0x0FCC),
    r(0x0FCF, 0x0FCF),
    r(0x1000, 0x1021),
    r(0x1023, 0x1027),
    r(0x1029, 0x102A),
    r(0x102C, 0x102C),
    r(0x1031, 0x1031),
    r(0x1038, 0x1038),
    r(0x1040, 0x1057),
    r(0x10A0, 0x10C5),
    r(0x10D0, 0x10F8),
    r(0x10FB, 0x10FB),
    r(0x1100, 0x1159),
    r(0x115F, 0x11A2),
    r(0x11A8, 0x11F9),
    r(0x1200, 0x1206),
    r(0x1208, 0x1246),
    r(0x1248, 0x1248),
    r(0x124A, 0x124D),
    r(0x1250, 0x1256),
    r(0x1258, 0x1258),
    r(0x125A, 0x125D),
    r(0x1260, 0x1286),
    r(0x1288, 0x1288),
    r(0x128A, 0x128D),
    r(0x1290, 0x12AE),
    r(0x12B0, 0x12B0),
    r(0x12B2, 0x12B5),
    r(0x12B8, 0x12BE),
    r(0x12C0, 0x12C0),
    r(0x12C2, 0x12C5),
    r(0x12C8, 0x12CE),
    r(0x12D0, 0x12D6),
    r(0x12D8, 0x12EE),
    r(0x12F0, 0x130E),
    r(0x1310, 0x1310),
    r(0x1312, 0x1315),
    r(0x1318, 0x131E),
    r(0x1320, 0x1346),
    r(0x1348, 0x135A),
    r(0x1361, 0x137C),
    r(0x13A0, 0x13F4),
    r(0x1401, 0x1676),
    r(0x1681, 0x169A),
    r(0x16A0, 0x16F0),
    r(0x1700, 0x170C),
    r(0x170E, 0x1711),
    r(0x1720, 0x1731),
    r(0x1735, 0x1736),
    r(0x1740, 0x1751),
    r(0x1760, 0x176C),
    r(0x176E, 0x1770),
    r(0x1780, 0x17B6),
    r(0x17BE, 0x17C5),
    r(0x17C7, 0x17C8),
    r(0x17D4, 0x17DA),
    r(0x17DC, 0x17DC),
    r(0x17E0, 0x17E9),
    r(0x1810, 0x1819),
    r(0x1820, 0x1877),
    r(0x1880, 0x18A8),
    r(0x1E00, 0x1E9B),
    r(0x1EA0, 0x1EF9),
    r(0x1F00, 0x1F15),
    r(0x1F18, 0x1F1D),
    r(0x1F20, 0x1F45),
    r(0x1F48, 0x1F4D),
    r(0x1F50, 0x1F57),
    r(0x1F59, 0x1F59),
    r(0x1F5B, 0x1F5B),
    r(0x1F5D, 0x1F5D),
    r(0x1F5F, 0x1F7D),
    r(0x1F80, 0x1FB4),
    r(0x1FB6, 0x1FBC),
    r(0x1FBE, 0x1FBE),
    r(0x1FC2, 0x1FC4),
    r(0x1FC6, 0x1FCC),
    r(0x1FD0, 0x1FD3),
    r(0x1FD6, 0x1FDB),
    r(0x1FE0, 0x1FEC),
    r(0x1FF2, 0x1FF4),
    r(0x1FF6, 0x1FFC),
    r(0x200E, 0x200E),
    r(0x2071, 0x2071),
    r(0x207F, 0x207F),
    r(0x2102, 0x2102),
    r(0x2107, 0x2107),
    r(0x210A, 0x2113),
    r(0x2115, 0x2115),
    r(0x2119, 0x211D),
    r(0x2124, 0x2124),
    r(0x2126, 0x2126),
    r(0x2128, 0x2128),
    r(0x212A, 0x212D),
    r(0x212F, 0x2131),
    r(0x2133, 0x2139),
    r(0x213D, 0x213F),
    r(0x2145, 0x2149),
    r(0x2160, 0x2183),
    r(0x2336, 0x237A),
    r(0x2395, 0x2395),
    r(0x249C, 0x24E9),
    r(0x3005, 0x3007),
    r(0x3021, 0x3029),
    r(0x3031, 0x3035),
    r(0x3038, 0x303C),
    r(0x3041, 0x3096),
    r(0x309D, 0x309F),
    r(0x30A1, 0x30FA),
    r(0x30FC, 0x30FF),
    r(0x3105, 0x312C),
    r(0x3131, 0x318E),
    r(0x3190, 0x31B7),
    r(0x31F0, 0x321C),
    r(0x3220, 0x3243),
    r(0x3260, 0x327B),
    r(0x327F, 0x32B0),
    r(0x32C0, 0x32CB),
    r(0x32D0, 0x32FE),
    r(0x3300, 0x3376),
    r(0x337B, 0x33DD),
    r(0x33E0, 0x33FE),
    r(0x3400, 0x4DB5),
    r(0x4E00, 0x9FA5),
    r(0xA000, 0xA48C),
    r(0xAC00, 0xD7A3),
    r(0xD800, 0xFA2D),
    r(0xFA30, 0xFA6A),
    r(0xFB00, 0xFB06),
    r(0xFB13, 0xFB17),
    r(0xFF21, 0xFF3A),
    r(0xFF41, 0xFF5A),
    r(0xFF66, 0xFFBE),
    r(0xFFC2, 0xFFC7),
    r(0xFFCA, 0xFFCF),
    r(0xFFD2, 0xFFD7),
    r(0xFFDA, 0xFFDC),
    r(0x10300, 0x1031E),
    r(0x10320, 0x10323),
    r(0x10330, 0x1034A),
    r(0x10400, 0x10425),
    r(0x10428, 0x1044D),
    r(0x1D000, 0x1D0F5),
    r(0x1D100, 0x1D126),
    r(0x1D12A, 0x1D166),
    r(0x1D16A, 0x1D172),
    r(0x1D183, 0x1D184),
    r(0x1D18C, 0x1D1A9),
    r(0x1D1AE, 0x1D1DD),
    r(0x1D400, 0x1D454),
    r(0x1D456, 0x1D49C),
    r(0x1D49E, 0x1D49F),
    r(0x1D4A2, 0x1D4A2),
    r(0x1D4A5, 0x1D4A6),
    r(0x1D4A9, 0x1D4AC),
    r(0x1D4AE, 0x1D4B9),
    r(0x1D4BB, 0x1D4BB),
    r(0x1D4BD, 0x1D4C0),
    r(0x1D4C2, 0x1D4C3),
    r(0x1D4C5, 0x1D505),
    r(0x1D507, 0x1D50A),
    r(0x1D50D, 0x1D514),
    r(0x1D516, 0x1D51C),
    r(0x1D51E, 0x1D539),
    r(0x1D53B, 0x1D53E),
    r(0x1D540, 0x1D544),
    r(0x1D546, 0x1D546),
    r(0x1D54A, 0x1D550),
    r(0x1D552, 0x1D6A3),
    r(0x1D6A8, 0x1D7C9),
    r(0x20000, 0x2A6D6),
    r(0x2F800, 0x2FA1D),
    r(0xF0000, 0xFFFFD),
    r(0x100000, 0x10FFFD),
]);

/// Table B.2: Mapping for case-folding used with NFKC.
pub static B_2: MappingTable = MappingTable::from_static(&[
    m(0x0041, &[0x0061]),
    m(0x0042, &[0x0062]),
    m(0x0043, &[0x0063]),
    m(0x0044, &[0x0064]),
    m(0x0045, &[0x0065]),
    m(0x0046, &[0x0066]),
    m(0x0047, &[0x0067]),
    m(0x0048, &[0x0068]),
    m(0x0049, &[0x0069]),
    m(0x004A, &[0x006A]),
    m(0x004B, &[0x006B]),
    m(0x004C, &[0x006C]),
    m(0x004D, &[0x006D]),
    m(0x004E, &[0x006E]),
    m(0x004F, &[0x006F]),
    m(0x0050, &[0x0070]),
    m(0x0051, &[0x0071]),
    m(0x0052, &[0x0072]),
    m(0x0053, &[0x0073]),
    m(0x0054, &[0x0074]),
    m(0x0055, &[0x0075]),
    m(0x0056, &[0x0076]),
    m(0x0057, &[0x0077]),
    m(0x0058, &[0x0078]),
    m(0x0059, &[0x0079]),
    m(0x005A, &[0x007A]),
    m(0x00B5, &[0x03BC]),
    m(0x00C0, &[0x00E0]),
    m(0x00C1, &[0x00E1]),
    m(0x00C2, &[0x00E2]),
    m(0x00C3, &[0x00E3]),
    m(0x00C4, &[0x00E4]),
    m(0x00C5, &[0x00E5]),
    m(0x00C6, &[0x00E6]),
    m(0x00C7, &[0x00E7]),
    m(0x00C8, &[0x00E8]),
    m(0x00C9, &[0x00E9]),
    m(0x00CA, &[0x00EA]),
    m(0x00CB, &[0x00EB]),
    m(0x00CC, &[0x00EC]),
    m(0x00CD, &[0x00ED]),
    m(0x00CE, &[0x00EE]),
    m(0x00CF, &[0x00EF]),
    m(0x00D0, &[0x00F0]),
    m(0x00D1, &[0x00F1]),
    m(0x00D2, &[0x00F2]),
    m(0x00D3, &[0x00F3]),
    m(0x00D4, &[0x00F4]),
    m(0x00D5, &[0x00F5]),
    m(0x00D6, &[0x00F6]),
    m(0x00D8, &[0x00F8]),
    m(0x00D9, &[0x00F9]),
    m(0x00DA, &[0x00FA]),
    m(0x00DB, &[0x00FB]),
    m(0x00DC, &[0x00FC]),
    m(0x00DD, &[0x00FD]),
    m(0x00DE, &[0x00FE]),
    m(0x00DF, &[0x0073, 0x0073]),
    m(0x0100, &[0x0101]),
    m(0x0102, &[0x0103]),
    m(0x0104, &[0x0105]),
    m(0x0106, &[0x0107]),
    m(0x0108, &[0x0109]),
    m(0x010A, &[0x010B]),
    m(0x010C, &[0x010D]),
    m(0x010E, &[0x010F]),
    m(0x0110, &[0x0111]),
    m(0x0112, &[0x0113]),
    m(0x0114, &[0x0115]),
    m(0x0116, &[0x0117]),
    m(0x0118, &[0x0119]),
    m(0x011A, &[0x011B]),
    m(0x011C, &[0x011D]),
    m(0x011E, &[0x011F]),
    m(0x0120, &[0x0121]),
    m(0x0122, &[0x0123]),
    m(0x0124, &[0x0125]),
    m(0x0126, &[0x0127]),
    m(0x0128, &[0x0129]),
    m(0x012A, &[0x012B]),
    m(0x012C, &[0x012D]),
    m(0x012E, &[0x012F]),
    m(0x0130, &[0x0069, 0x0307]),
    m(0x0132, &[0x0133]),
    m(0x0134, &[0x0135]),
    m(0x0136, &[0x0137]),
    m(0x0139, &[0x013A]),
    m(0x013B, &[0x013C]),
    m(0x013D, &[0x013E]),
    m(0x013F, &[0x0140]),
    m(0x0141, &[0x0142]),
    m(0x0143, &[0x0144]),
    m(0x0145, &[0x0146]),
    m(0x0147, &[0x0148]),
    m(0x0149, &[0x02BC, 0x006E]),
    m(0x014A, &[0x014B]),
    m(0x014C, &[0x014D]),
    m(0x014E, &[0x014F]),
    m(0x0150, &[0x0151]),
    m(0x0152, &[0x0153]),
    m(0x0154, &[0x0155]),
    m(0x0156, &[0x0157]),
    m(0x0158, &[0x0159]),
    m(0x015A, &[0x015B]),
    m(0x015C, &[0x015D]),
    m(0x015E, &[0x015F]),
    m(0x0160, &[0x0161]),
    m(0x0162, &[0x0163]),
    m(0x0164, &[0x0165]),
    m(0x0166, &[0x0167]),
    m(0x0168, &[0x0169]),
    m(0x016A, &[0x016B]),
    m(0x016C, &[0x016D]),
    m(0x016E, &[0x016F]),
    m(0x0170, &[0x0171]),
    m(0x0172, &[0x0173]),
    m(0x0174, &[0x0175]),
    m(0x0176, &[0x0177]),
    m(0x0178, &[0x00FF]),
    m(0x0179, &[0x017A]),
    m(0x017B, &[0x017C]),
    m(0x017D, &[0x017E]),
    m(0x017F, &[0x0073]),
    m(0x0181, &[0x0253]),
    m(0x0182, &[0x0183]),
    m(0x0184, &[0x0185]),
    m(0x0186, &[0x0254]),
    m(0x0187, &[0x0188]),
    m(0x0189, &[0x0256]),
    m(0x018A, &[0x0257]),
    m(0x018B, &[0x018C]),
    m(0x018E, &[0x01DD]),
    m(0x018F, &[0x0259]),
    m(0x0190, &[0x025B]),
    m(0x0191, &[0x0192]),
    m(0x0193, &[0x0260]),
    m(0x0194, &[0x0263]),
    m(0x0196, &[0x0269]),
    m(0x0197, &[0x0268]),
    m(0x0198, &[0x0199]),
    m(0x019C, &[0x026F]),
    m(0x019D, &[0x0272]),
    m(0x019F, &[0x0275]),
    m(0x01A0, &[0x01A1]),
    m(0x01A2, &[0x01A3]),
    m(0x01A4, &[0x01A5]),
    m(0x01A6, &[0x0280]),
    m(0x01A7, &[0x01A8]),
    m(0x01A9, &[0x0283]),
    m(0x01AC, &[0x01AD]),
    m(0x01AE, &[0x0288]),
    m(0x01AF, &[0x01B0]),
    m(0x01B1, &[0x028A]),
    m(0x01B2, &[0x028B]),
    m(0x01B3, &[0x01B4]),
    m(0x01B5, &[0x01B6]),
    m(0x01B7, &[0x0292]),
    m(0x01B8, &[0x01B9]),
    m(0x01BC, &[0x01BD]),
    m(0x01C4, &[0x01C6]),
    m(0x01C5, &[0x01C6]),
    m(0x01C7, &[0x01C9]),
    m(0x01C8, &[0x01C9]),
    m(0x01CA, &[0x01CC]),
    m(0x01CB, &[0x01CC]),
    m(0x01CD, &[0x01CE]),
    m(0x01CF, &[0x01D0]),
    m(0x01D1, &[0x01D2]),
    m(0x01D3, &[0x01D4]),
    m(0x01D5, &[0x01D6]),
    m(0x01D7, &[0x01D8]),
    m(0x01D9, &[0x01DA]),
    m(0x01DB, &[0x01DC]),
    m(0x01DE, &[0x01DF]),
    m(0x01E0, &[0x01E1]),
    m(0x01E2, &[0x01E3]),
    m(0x01E4, &[0x01E5]),
    m(0x01E6, &[0x01E7]),
    m(0x01E8, &[0x01E9]),
    m(0x01EA, &[0x01EB]),
    m(0x01EC, &[0x01ED]),
    m(0x01EE, &[0x01EF]),
    m(0x01F0, &[0x006A, 0x030C]),
    m(0x01F1, &[0x01F3]),
    m(0x01F2, &[0x01F3]),
    m(0x01F4, &[0x01F5]),
    m(0x01F6, &[0x0195]),
    m(0x01F7, &[0x01BF]),
    m(0x01F8, &[0x01F9]),
    m(0x01FA, &[0x01FB]),
    m(0x01FC, &[0x01FD]),
    m(0x01FE, &[0x01FF]),
    m(0x0200, &[0x0201]),
    m(0x0202, &[0x0203]),
    m(0x0204, &[0x0205]),
    m(0x0206, &[0x0207]),
    m(0x0208, &[0x0209]),
    m(0x020A, &[0x020B]),
    m(0x020C, &[0x020D]),
    m(0x020E, &[0x020F]),
    m(0x0210, &[0x0211]),
    m(0x0212, &[0x0213]),
    m(0x0214, &[0x0215]),
    m(0x0216, &[0x0217]),
    m(0x0218, &[0x0219]),
    m(0x021A, &[0x021B]),
    m(0x021C, &[0x021D]),
    m(0x021E, &[0x021F]),
    m(0x0220, &[0x019E]),
    m(0x0222, &[0x0223]),
    m(0x0224, &[0x0225]),
    m(0x0226, &[0x0227]),
    m(0x0228, &[0x0229]),
    m(0x022A, &[0x022B]),
    m(0x022C, &[0x022D]),
    m(0x022E, &[0x022F]),
    m(0x0230, &[0x0231]),
    m(0x0232, &[0x0233]),
    m(0x0345, &[0x03B9]),
    m(0x037A, &[0x0020, 0x03B9]),
    m(0x0386, &[0x03AC]),
    m(0x0388, &[0x03AD]),
    m(0x0389, &[0x03AE]),
    m(0x038A, &[0x03AF]),
    m(0x038C, &[0x03CC]),
    m(0x038E, &[0x03CD]),
    m(0x038F, &[0x03CE]),
    m(0x0390, &[0x03B9, 0x0308, 0x0301]),
    m(0x0391, &[0x03B1]),
    m(0x0392, &[0x03B2]),
    m(0x0393, &[0x03B3]),
    m(0x0394, &[0x03B4]),
    m(0x0395, &[0x03B5]),
    m(0x0396, &[0x03B6]),
    m(0x0397, &[0x03B7]),
    m(0x0398, &[0x03B8]),
    m(0x0399, &[0x03B9]),
    m(0x039A, &[0x03BA]),
    m(0x039B, &[0x03BB]),
    m(0x039C, &[0x03BC]),
    m(0x039D, &[0x03BD]),
    m(0x039E, &[0x03BE]),
    m(0x039F, &[0x03BF]),
    m(0x03A0, &[0x03C0]),
    m(0x03A1, &[0x03C1]),
    m(0x03A3, &[0x03C3]),
    m(0x03A4, &[0x03C4]),
    m(0x03A5, &[0x03C5]),
    m(0x03A6, &[0x03C6]),
    m(0x03A7, &[0x03C7]),
    m(0x03A8, &[0x03C8]),
    m(0x03A9, &[0x03C9]),
    m(0x03AA, &[0x03CA]),
    m(0x03AB, &[0x03CB]),
    m(0x03B0, &[0x03C5, 0x0308, 0x0301]),
    m(0x03C2, &[0x03C3]),
    m(0x03D0, &[0x03B2]),
    m(0x03D1, &[0x03B8]),
    m(0x03D2, &[0x03C5]),
    m(0x03D3, &[0x03CD]),
    m(0x03D4, &[0x03CB]),
    m(0x03D5, &[0x03C6]),
    m(0x03D6, &[0x03C0]),
    m(0x03D8, &[0x03D9]),
    m(0x03DA, &[0x03DB]),
    m(0x03DC, &[0x03DD]),
    m(0x03DE, &[0x03DF]),
    m(0x03E0, &[0x03E1]),
    m(0x03E2, &[0x03E3]),
    m(0x03E4, &[0x03E5]),
    m(0x03E6, &[0x03E7]),
    m(0x03E8, &[0x03E9]),
    m(0x03EA, &[0x03EB]),
    m(0x03EC, &[0x03ED]),
    m(0x03EE, &[0x03EF]),
    m(0x03F0, &[0x03BA]),
    m(0x03F1, &[0x03C1]),
    m(0x03F2, &[0x03C3]),
    m(0x03F4, &[0x03B8]),
    m(0x03F5, &[0x03B5]),
    m(0x0400, &[0x0450]),
    m(0x0401, &[0x0451]),
    m(0x0402, &[0x0452]),
    m(0x0403, &[0x0453]),
    m(0x0404, &[0x0454]),
    m(0x0405, &[0x0455]),
    m(0x0406, &[0x0456]),
    m(0x0407, &[0x0457]),
    m(0x0408, &[0x0458]),
    m(0x0409, &[0x0459]),
    m(0x040A, &[0x045A]),
    m(0x040B, &[0x045B]),
    m(0x040C, &[0x045C]),
    m(0x040D, &[0x045D]),
    m(0x040E, &[0x045E]),
    m(0x040F, &[0x045F]),
    m(0x0410, &[0x0430]),
    m(0x0411, &[0x0431]),
    m(0x0412, &[0x0432]),
    m(0x0413, &[0x0433]),
    m(0x0414, &[0x0434]),
    m(0x0415, &[0x0435]),
    m(0x0416, &[0x0436]),
    m(0x0417, &[0x0437]),
    m(0x0418, &[0x0438]),
    m(0x0419, &[0x0439]),
    m(0x041A, &[0x043A]),
    m(0x041B, &[0x043B]),
    m(0x041C, &[0x043C]),
    m(0x041D, &[0x043D]),
    m(0x041E, &[0x043E]),
    m(0x041F, &[0x043F]),
    m(0x0420, &[0x0440]),
    m(0x0421, &[0x0441]),
    m(0x0422, &[0x0442]),
    m(0x0423, &[0x0443]),
    m(0x0424, &[0x0444]),
    m(0x0425, &[0x0445]),
    m(0x0426, &[0x0446]),
    m(0x0427, &[0x0447]),
    m(0x0428, &[0x0448]),
    m(0x0429, &[0x0449]),
    m(0x042A, &[0x044A]),
    m(0x042B, &[0x044B]),
    m(0x042C, &[0x044C]),
    m(0x042D, &[0x044D]),
    m(0x042E, &[0x044E]),
    m(0x042F, &[0x044F]),
    m(0x0460, &[0x0461]),
    m(0x0462, &[0x0463]),
    m(0x0464, &[0x0465]),
    m(0x0466, &[0x0467]),
    m(0x0468, &[0x0469]),
    m(0x046A, &[0x046B]),
    m(0x046C, &[0x046D]),
    m(0x046E, &[0x046F]),
    m(0x0470, &[0x0471]),
    m(0x0472, &[0x0473]),
    m(0x0474, &[0x0475]),
    m(0x0476, &[0x0477]),
    m(0x0478, &[0x0479]),
    m(0x047A, &[0x047B]),
    m(0x047C, &[0x047D]),
    m(0x047E, &[0x047F]),
    m(0x0480, &[0x0481]),
    m(0x048A, &[0x048B]),
    m(0x048C, &[0x048D]),
    m(0x048E, &[0x048F]),
    m(0x0490, &[0x0491]),
    m(0x0492, &[0x0493]),
    m(0x0494, &[0x0495]),
    m(0x0496, &[0x0497]),
    m(0x0498, &[0x0499]),
    m(0x049A, &[0x049B]),
    m(0x049C, &[0x049D]),
    m(0x049E, &[0x049F]),
    m(0x04A0, &[0x04A1]),
    m(0x04A2, &[0x04A3]),
    m(0x04A4, &[0x04A5]),
    m(0x04A6, &[0x04A7]),
    m(0x04A8, &[0x04A9]),
    m(0x04AA, &[0x04AB]),
    m(0x04AC, &[0x04AD]),
    m(0x04AE, &[0x04AF]),
    m(0x04B0, &[0x04B1]),
    m(0x04B2, &[0x04B3]),
    m(0x04B4, &[0x04B5]),
    m(0x04B6, &[0x04B7]),
    m(0x04B8, &[0x04B9]),
    m(0x04BA, &[0x04BB]),
    m(0x04BC, &[0x04BD]),
    m(0x04BE, &[0x04BF]),
    m(0x04C1, &[0x04C2]),
    m(0x04C3, &[0x04C4]),
    m(0x04C5, &[0x04C6]),
    m(0x04C7, &[0x04C8]),
    m(0x04C9, &[0x04CA]),
    m(0x04CB, &[0x04CC]),
    m(0x04CD, &[0x04CE]),
    m(0x04D0, &[0x04D1]),
    m(0x04D2, &[0x04D3]),
    m(0x04D4, &[0x04D5]),
    m(0x04D6, &[0x04D7]),
    m(0x04D8, &[0x04D9]),
    m(0x04DA, &[0x04DB]),
    m(0x04DC, &[0x04DD]),
    m(0x04DE, &[0x04DF]),
    m(0x04E0, &[0x04E1]),
    m(0x04E2, &[0x04E3]),
    m(0x04E4, &[0x04E5]),
    m(0x04E6, &[0x04E7]),
    m(0x04E8, &[0x04E9]),
    m(0x04EA, &[0x04EB]),
    m(0x04EC, &[0x04ED]),
    m(0x04EE, &[0x04EF]),
    m(0x04F0, &[0x04F1]),
    m(0x04F2, &[0x04F3]),
    m(0x04F4, &[0x04F5]),
    m(0x04F8, &[0x04F9]),
    m(0x0500, &[0x0501]),
    m(0x0502, &[0x0503]),
    m(0x0504, &[0x0505]),
    m(0x0506, &[0x0507]),
    m(0x0508, &[0x0509]),
    m(0x050A, &[0x050B]),
    m(0x050C, &[0x050D]),
    m(0x050E, &[0x050F]),
    m(0x0531, &[0x0561]),
    m(0x0532, &[0x0562]),
    m(0x0533, &[0x0563]),
    m(0x0534, &[0x0564]),
    m(0x0535, &[0x0565]),
    m(0x0536, &[0x0566]),
    m(0x0537, &[0x0567]),
    m(0x0538, &[0x0568]),
    m(0x0539, &[0x0569]),
    m(0x053A, &[0x056A]),
    m(0x053B, &[0x056B]),
    m(0x053C, &[0x056C]),
    m(0x053D, &[0x056D]),
    m(0x053E, &[0x056E]),
    m(0x053F, &[0x056F]),
    m(0x0540, &[0x0570]),
    m(0x0541, &[0x0571]),
    m(0x0542, &[0x0572]),
    m(0x0543, &[0x0573]),
    m(0x0544, &[0x0574]),
    m(0x0545, &[0x0575]),
    m(0x0546, &[0x0576]),
    m(0x0547, &[0x0577]),
    m(0x0548, &[0x0578]),
    m(0x0549, &[0x0579]),
    m(0x054A, &[0x057A]),
    m(0x054B, &[0x057B]),
    m(0x054C, &[0x057C]),
    m(0x054D, &[0x057D]),
    m(0x054E, &[0x057E]),
    m(0x054F, &[0x057F]),
    m(0x0550, &[0x0580]),
    m(0x0551, &[0x0581]),
    m(0x0552, &[0x0582]),
    m(0x0553, &[0x0583]),
    m(0x0554, &[0x0584]),
    m(0x0555, &[0x0585]),
    m(0x0556, &[0x0586]),
    m(0x0587, &[0x0565, 0x0582]),
    m(0x1E00, &[0x1E01]),
    m(0x1E02, &[0x1E03]),
    m(0x1E04, &[0x1E05]),
    m(0x1E06, &[0x1E07]),
    m(0x1E08, &[0x1E09]),
    m(0x1E0A, &[0x1E0B]),
    m(0x1E0C, &[0x1E0D]),
    m(0x1E0E, &[0x1E0F]),
    m(0x1E10, &[0x1E11]),
    m(0x1E12, &[0x1E13]),
    m(0x1E14, &[0x1E15]),
    m(0x1E16, &[0x1E17]),
    m(0x1E18, &[0x1E19]),
    m(0x1E1A, &[0x1E1B]),
    m(0x1E1C, &[0x1E1D]),
    m(0x1E1E, &[0x1E1F]),
    m(0x1E20, &[0x1E21]),
    m(0x1E22, &[0x1E23]),
    m(0x1E24, &[0x1E25]),
    m(0x1E26, &[0x1E27]),
    m(0x1E28, &[0x1E29]),
    m(0x1E2A, &[0x1E2B]),
    m(0x1E2C, &[0x1E2D]),
    m(0x1E2E, &[0x1E2F]),
    m(0x1E30, &[0x1E31]),
    m(0x1E32, &[0x1E33]),
    m(0x1E34, &[0x1E35]),
    m(0x1E36, &[0x1E37]),
    m(0x1E38, &[0x1E39]),
    m(0x1E3A, &[0x1E3B]),
    m(0x1E3C, &[0x1E3D]),
    m(0x1E3E, &[0x1E3F]),
    m(0x1E40, &[0x1E41]),
    m(0x1E42, &[0x1E43]),
    m(0x1E44, &[0x1E45]),
    m(0x1E46, &[0x1E47]),
    m(0x1E48, &[0x1E49]),
    m(0x1E4A, &[0x1E4B]),
    m(0x1E4C, &[0x1E4D]),
    m(0x1E4E, &[0x1E4F]),
    m(0x1E50, &[0x1E51]),
    m(0x1E52, &[0x1E53]),
    m(0x1E54, &[0x1E55]),
    m(0x1E56, &[0x1E57]),
    m(0x1E58, &[0x1E59]),
    m(0x1E5A, &[0x1E5B]),
    m(0x1E5C, &[0x1E5D]),
    m(0x1E5E, &[0x1E5F]),
    m(0x1E60, &[0x1E61]),
    m(0x1E62, &[0x1E63]),
    m(0x1E64, &[0x1E65]),
    m(0x1E66, &[0x1E67]),
    m(0x1E68, &[0x1E69]),
    m(0x1E6A, &[0x1E6B]),
    m(0x1E6C, &[0x1E6D]),
    m(0x1E6E, &[0x1E6F]),
    m(0x1E70, &[0x1E71]),
    m(0x1E72, &[0x1E73]),
    m(0x1E74, &[0x1E75]),
    m(0x1E76, &[0x1E77]),
    m(0x1E78, &[0x1E79]),
    m(0x1E7A, &[0x1E7B]),
    m(0x1E7C, &[0x1E7D]),
    m(0x1E7E, &[0x1E7F]),
    m(0x1E80, &[0x1E81]),
    m(0x1E82, &[0x1E83]),
    m(0x1E84, &[0x1E85]),
    m(0x1E86, &[0x1E87]),
    m(0x1E88, &[0x1E89]),
    m(0x1E8A, &[0x1E8B]),
    m(0x1E8C, &[0x1E8D]),
    m(0x1E8E, &[0x1E8F]),
    m(0x1E90, &[0x1E91]),
    m(0x1E92, &[0x1E93]),
    m(0x1E94, &[0x1E95]),
    m(0x1E96, &[0x0068, 0x0331]),
    m(0x1E97, &[0x0074, 0x0308]),
    m(0x1E98, &[0x0077, 0x030A]),
    m(0x1E99, &[0x0079, 0x030A]),
    m(0x1E9A, &[0x0061, 0x02BE]),
    m(0x1E9B, &[0x1E61]),
    m(0x1EA0, &[0x1EA1]),
    m(0x1EA2, &[0x1EA3]),
    m(0x1EA4, &[0x1EA5]),
    m(0x1EA6, &[0x1EA7]),
    m(0x1EA8, &[0x1EA9]),
    m(0x1EAA, &[0x1EAB]),
    m(0x1EAC, &[0x1EAD]),
    m(0x1EAE, &[0x1EAF]),
    m(0x1EB0, &[0x1EB1]),
    m(0x1EB2, &[0x1EB3]),
    m(0x1EB4, &[0x1EB5]),
    m(0x1EB6, &[0x1EB7]),
    m(0x1EB8, &[0x1EB9]),
    m(0x1EBA, &[0x1EBB]),
    m(0x1EBC, &[0x1EBD]),
    m(0x1EBE, &[0x1EBF]),
    m(0x1EC0, &[0x1EC1]),
    m(0x1EC2, &[0x1EC3]),
    m(0x1EC4, &[0x1EC5]),
    m(0x1EC6, &[0x1EC7]),
    m(0x1EC8, &[0x1EC9]),
    m(0x1ECA, &[0x1ECB]),
    m(0x1ECC, &[0x1ECD]),
    m(0x1ECE, &[0x1ECF]),
    m(0x1ED0, &[0x1ED1]),
    m(0x1ED2, &[0x1ED3]),
    m(0x1ED4, &[0x1ED5]),
    m(0x1ED6, &[0x1ED7]),
    m(0x1ED8, &[0x1ED9]),
    m(0x1EDA, &[0x1EDB]),
    m(0x1EDC, &[0x1EDD]),
    m(0x1EDE, &[0x1EDF]),
    m(0x1EE0, &[0x1EE1]),
    m(0x1EE2, &[0x1EE3]),
    m(0x1EE4, &[0x1EE5]),
    m(0x1EE6, &[0x1EE7]),
    m(0x1EE8, &[0x1EE9]),
    m(0x1EEA, &[0x1EEB]),
    m(0x1EEC, &[0x1EED]),
    m(0x1EEE, &[0x1EEF]),
    m(0x1EF0, &[0x1EF1]),
    m(0x1EF2, &[0x1EF3]),
    m(0x1EF4, &[0x1EF5]),
    m(0x1EF6, &[0x1EF7]),
    m(0x1EF8, &[0x1EF9]),
    m(0x1F08, &[0x1F00]),
    m(0x1F09, &[0x1F01]),
    m(0x1F0A, &[0x1F02]),
    m(0x1F0B, &[0x1F03]),
    m(0x1F0C, &[0x1F04]),
    m(0x1F0D, &[0x1F05]),
    m(0x1F0E, &[0x1F06]),
    m(0x1F0F, &[0x1F07]),
    m(0x1F18, &[0x1F10]),
    m(0x1F19, &[0x1F11]),
    m(0x1F1A, &[0x1F12]),
    m(0x1F1B, &[0x1F13]),
    m(0x1F1C, &[0x1F14]),
    m(0x1F1D, &[0x1F15]),
    m(0x1F28, &[0x1F20]),
    m(0x1F29, &[0x1F21]),
    m(0x1F2A, &[0x1F22]),
    m(0x1F2B, &[0x1F23]),
    m(0x1F2C, &[0x1F24]),
    m(0x1F2D, &[0x1F25]),
    m(0x1F2E, &[0x1F26]),
    m(0x1F2F, &[0x1F27]),
    m(0x1F38, &[0x1F30]),
    m(0x1F39, &[0x1F31]),
    m(0x1F3A, &[0x1F32]),
    m(0x1F3B, &[0x1F33]),
    m(0x1F3C, &[0x1F34]),
    m(0x1F3D, &[0x1F35]),
    m(0x1F3E, &[0x1F36]),
    m(0x1F3F, &[0x1F37]),
    m(0x1F48, &[0x1F40]),
    m(0x1F49, &[0x1F41]),
    m(0x1F4A, &[0x1F42]),
    m(0x1F4B, &[0x1F43]),
    m(0x1F4C, &[0x1F44]),
    m(0x1F4D, &[0x1F45]),
    m(0x1F50, &[0x03C5, 0x0313]),
    m(0x1F52, &[0x03C5, 0x0313, 0x0300]),
    m(0x1F54, &[0x03C5, 0x0313, 0x0301]),
    m(0x1F56, &[0x03C5, 0x0313, 0x0342]),
    m(0x1F59, &[0x1F51]),
    m(0x1F5B, &[0x1F53]),
    m(0x1F5D, &[0x1F55]),
    m(0x1F5F, &[0x1F57]),
    m(0x1F68, &[0x1F60]),
    m(0x1F69, &[0x1F61]),
    m(0x1F6A, &[0x1F62]),
    m(0x1F6B, &[0x1F63]),
    m(0x1F6C, &[0x1F64]),
    m(0x1F6D, &[0x1F65]),
    m(0x1F6E, &[0x1F66]),
    m(0x1F6F, &[0x1F67]),
    m(0x1F80, &[0x1F00, 0x03B9]),
    m(0x1F81, &[0x1F01, 0x03B9]),
    m(0x1F82, &[0x1F02, 0x03B9]),
    m(0x1F83, &[0x1F03, 0x03B9]),
    m(0x1F84, &[0x1F04, 0x03B9]),
    m(0x1F85, &[0x1F05, 0x03B9]),
    m(0x1F86, &[0x1F06, 0x03B9]),
    m(0x1F87, &[0x1F07, 0x03B9]),
    m(0x1F88, &[0x1F00, 0x03B9]),
    m(0x1F89, &[0x1F01, 0x03B9]),
    m(0x1F8A, &[0x1F02, 0x03B9]),
    m(0x1F8B, &[0x1F03, 0x03B9]),
    m(0x1F8C, &[0x1F04, 0x03B9]),
    m(0x1F8D, &[0x1F05, 0x03B9]),
    m(0x1F8E, &[0x1F06, 0x03B9]),
    m(0x1F8F, &[0x1F07, 0x03B9]),
    m(0x1F90, &[0x1F20, 0x03B9]),
    m(0x1F91, &[0x1F21, 0x03B9]),
    m(0x1F92, &[0x1F22, 0x03B9]),
    m(0x1F93, &[0x1F23, 0x03B9]),
    m(0x1F94, &[0x1F24, 0x03B9]),
    m(0x1F95, &[0x1F25, 0x03B9]),
    m(0x1F96, &[0x1F26, 0x03B9]),
    m(0x1F97, &[0x1F27, 0x03B9]),
    m(0x1F98, &[0x1F20, 0x03B9]),
    m(0x1F99, &[0x1F21, 0x03B9]),
    m(0x1F9A, &[0x1F22, 0x03B9]),
    m(0x1F9B, &[0x1F23, 0x03B9]),
    m(0x1F9C, &[0x1F24, 0x03B9]),
    m(0x1F9D, &[0x1F25, 0x03B9]),
    m(0x1F9E, &[0x1F26, 0x03B9]),
    m(0x1F9F, &[0x1F27, 0x03B9]),
    m(0x1FA0, &[0x1F60, 0x03B9]),
    m(0x1FA1, &[0x1F61, 0x03B9]),
    m(0x1FA2, &[0x1F62, 0x03B9]),
    m(0x1FA3, &[0x1F63, 0x03B9]),
    m(0x1FA4, &[0x1F64, 0x03B9]),
    m(0x1FA5, &[0x1F65, 0x03B9]),
    m(0x1FA6, &[0x1F66, 0x03B9]),
    m(0x1FA7, &[0x1F67, 0x03B9]),
    m(0x1FA8, &[0x1F60, 0x03B9]),
    m(0x1FA9, &[0x1F61, 0x03B9]),
    m(0x1FAA, &[0x1F62, 0x03B9]),
    m(0x1FAB, &[0x1F63, 0x03B9]),
    m(0x1FAC, &[0x1F64, 0x03B9]),
    m(0x1FAD, &[0x1F65, 0x03B9]),
    m(0x1FAE, &[0x1F66, 0x03B9]),
    m(0x1FAF, &[0x1F67, 0x03B9]),
    m(0x1FB2, &[0x1F70, 0x03B9]),
    m(0x1FB3, &[0x03B1, 0x03B9]),
    m(0x1FB4, &[0x03AC, 0x03B9]),
    m(0x1FB6, &[0x03B1, 0x0342]),
    m(0x1FB7, &[0x03B1, 0x0342, 0x03B9]),
    m(0x1FB8, &[0x1FB0]),
    m(0x1FB9, &[0x1FB1]),
    m(0x1FBA, &[0x1F70]),
    m(0x1FBB, &[0x1F71]),
    m(0x1FBC, &[0x03B1, 0x03B9]),
    m(0x1FBE, &[0x03B9]),
    m(0x1FC2, &[0x1F74, 0x03B9]),
    m(0x1FC3, &[0x03B7, 0x03B9]),
    m(0x1FC4, &[0x03AE, 0x03B9]),
    m(0x1FC6, &[0x03B7, 0x0342]),
    m(0x1FC7, &[0x03B7, 0x0342, 0x03B9]),
    m(0x1FC8, &[0x1F72]),
    m(0x1FC9, &[0x1F73]),
    m(0x1FCA, &[0x1F74]),
    m(0x1FCB, &[0x1F75]),
    m(0x1FCC, &[0x03B7, 0x03B9]),
    m(0x1FD2, &[0x03B9, 0x0308, 0x0300]),
    m(0x1FD3, &[0x03B9, 0x0308, 0x0301]),
    m(0x1FD6, &[0x03B9, 0x0342]),
    m(0x1FD7, &[0x03B9, 0x0308, 0x0342]),
    m(0x1FD8, &[0x1FD0]),
    m(0x1FD9, &[0x1FD1]),
    m(0x1FDA, &[0x1F76]),
    m(0x1FDB, &[0x1F77]),
    m(0x1FE2, &[0x03C5, 0x0308, 0x0300]),
    m(0x1FE3, &[0x03C5, 0x0308, 0x0301]),
    m(0x1FE4, &[0x03C1, 0x0313]),
    m(0x1FE6, &[0x03C5, 0x0342]),
    m(0x1FE7, &[0x03C5, 0x0308, 0x0342]),
    m(0x1FE8, &[0x1FE0]),
    m(0x1FE9, &[0x1FE1]),
    m(0x1FEA, &[0x1F7A]),
    m(0x1FEB, &[0x1F7B]),
    m(0x1FEC, &[0x1FE5]),
    m(0x1FF2, &[0x1F7C, 0x03B9]),
    m(0x1FF3, &[0x03C9, 0x03B9]),
    m(0x1FF4, &[0x03CE, 0x03B9]),
    m(0x1FF6, &[0x03C9, 0x0342]),
    m(0x1FF7, &[0x03C9, 0x0342, 0x03B9]),
    m(0x1FF8, &[0x1F78]),
    m(0x1FF9, &[0x1F79]),
    m(0x1FFA, &[0x1F7C]),
    m(0x1FFB, &[0x1F7D]),
    m(0x1FFC, &[0x03C9, 0x03B9]),
    m(0x20A8, &[0x0072, 0x0073]),
    m(0x2102, &[0x0063]),
    m(0x2103, &[0x00B0, 0x0063]),
    m(0x2107, &[0x025B]),
    m(0x2109, &[0x00B0, 0x0066]),
    m(0x210B, &[0x0068]),
    m(0x210C, &[0x0068]),
    m(0x210D, &[0x0068]),
    m(0x2110, &[0x0069]),
    m(0x2111, &[0x0069]),
    m(0x2112, &[0x006C]),
    m(0x2115, &[0x006E]),
    m(0x2116, &[0x006E, 0x006F]),
    m(0x2119, &[0x0070]),
    m(0x211A, &[0x0071]),
    m(0x211B, &[0x0072]),
    m(0x211C, &[0x0072]),
    m(0x211D, &[0x0072]),
    m(0x2120, &[0x0073, 0x006D]),
    m(0x2121, &[0x0074, 0x0065, 0x006C]),
    m(0x2122, &[0x0074, 0x006D]),
    m(0x2124, &[0x007A]),
    m(0x2126, &[0x03C9]),
    m(0x2128, &[0x007A]),
    m(0x212A, &[0x006B]),
    m(0x212B, &[0x00E5]),
    m(0x212C, &[0x0062]),
    m(0x212D, &[0x0063]),
    m(0x2130, &[0x0065]),
    m(0x2131, &[0x0066]),
    m(0x2133, &[0x006D]),
    m(0x213E, &[0x03B3]),
    m(0x213F, &[0x03C0]),
    m(0x2145, &[0x0064]),
    m(0x2160, &[0x2170]),
    m(0x2161, &[0x2171]),
    m(0x2162, &[0x2172]),
    m(0x2163, &[0x2173]),
    m(0x2164, &[0x2174]),
    m(0x2165, &[0x2175]),
    m(0x2166, &[0x2176]),
    m(0x2167, &[0x2177]),
    m(0x2168, &[0x2178]),
    m(0x2169, &[0x2179]),
    m(0x216A, &[0x217A]),
    m(0x216B, &[0x217B]),
    m(0x216C, &[0x217C]),
    m(0x216D, &[0x217D]),
    m(0x216E, &[0x217E]),
    m(0x216F, &[0x217F]),
    m(0x24B6, &[0x24D0]),
    m(0x24B7, &[0x24D1]),
    m(0x24B8, &[0x24D2]),
    m(0x24B9, &[0x24D3]),
    m(0x24BA, &[0x24D4]),
    m(0x24BB, &[0x24D5]),
    m(0x24BC, &[0x24D6]),
    m(0x24BD, &[0x24D7]),
    m(0x24BE, &[0x24D8]),
    m(0x24BF, &[0x24D9]),
    m(0x24C0, &[0x24DA]),
    m(0x24C1, &[0x24DB]),
    m(0x24C2, &[0x24DC]),
    m(0x24C3, &[0x24DD]),
    m(0x24C4, &[0x24DE]),
    m(0x24C5, &[0x24DF]),
    m(0x24C6, &[0x24E0]),
    m(0x24C7, &[0x24E1]),
    m(0x24C8, &[0x24E2]),
    m(0x24C9, &[0x24E3]),
    m(0x24CA, &[0x24E4]),
    m(0x24CB, &[0x24E5]),
    m(0x24CC, &[0x24E6]),
    m(0x24CD, &[0x24E7]),
    m(0x24CE, &[0x24E8]),
    m(0x24CF, &[0x24E9]),
    m(0x3371, &[0x0068, 0x0070, 0x0061]),
    m(0x3373, &[0x0061, 0x0075]),
    m(0x3375, &[0x006F, 0x0076]),
    m(0x3380, &[0x0070, 0x0061]),
    m(0x3381, &[0x006E, 0x0061]),
    m(0x3382, &[0x03BC, 0x0061]),
    m(0x3383, &[0x006D, 0x0061]),
    m(0x3384, &[0x006B, 0x0061]),
    m(0x3385, &[0x006B, 0x0062]),
    m(0x3386, &[0x006D, 0x0062]),
    m(0x3387, &[0x0067, 0x0062]),
    m(0x338A, &[0x0070, 0x0066]),
    m(0x338B, &[0x006E, 0x0066]),
    m(0x338C, &[0x03BC, 0x0066]),
    m(0x3390, &[0x0068, 0x007A]),
    m(0x3391, &[0x006B, 0x0068, 0x007A]),
    m(0x3392, &[0x006D, 0x0068, 0x007A]),
    m(0x3393, &[0x0067, 0x0068, 0x007A]),
    m(0x3394, &[0x0074, 0x0068, 0x007A]),
    m(0x33A9, &[0x0070, 0x0061]),
    m(0x33AA, &[0x006B, 0x0070, 0x0061]),
    m(0x33AB, &[0x006D, 0x0070, 0x0061]),
    m(0x33AC, &[0x0067, 0x0070, 0x0061]),
    m(0x33B4, &[0x0070, 0x0076]),
    m(0x33B5, &[0x006E, 0x0076]),
    m(0x33B6, &[0x03BC, 0x0076]),
    m(0x33B7, &[0x006D, 0x0076]),
    m(0x33B8, &[0x006B, 0x0076]),
    m(0x33B9, &[0x006D, 0x0076]),
    m(0x33BA, &[0x0070, 0x0077]),
    m(0x33BB, &[0x006E, 0x0077]),
    m(0x33BC, &[0x03BC, 0x0077]),
    m(0x33BD, &[0x006D, 0x0077]),
    m(0x33BE, &[0x006B, 0x0077]),
    m(0x33BF, &[0x006D, 0x0077]),
    m(0x33C0, &[0x006B, 0x03C9]),
    m(0x33C1, &[0x006D, 0x03C9]),
    m(0x33C3, &[0x0062, 0x0071]),
    m(0x33C6, &[0x0063, 0x2215, 0x006B, 0x0067]),
    m(0x33C7, &[0x0063, 0x006F, 0x002E]),
    m(0x33C8, &[0x0064, 0x0062]),
    m(0x33C9, &[0x0067, 0x0079]),
    m(0x33CB, &[0x0068, 0x0070]),
    m(0x33CD, &[0x006B, 0x006B]),
    m(0x33CE, &[0x006B, 0x006D]),
    m(0x33D7, &[0x0070, 0x0068]),
    m(0x33D9, &[0x0070, 0x0070, 0x006D]),
    m(0x33DA, &[0x0070, 0x0072]),
    m(0x33DC, &[0x0073, 0x0076]),
    m(0x33DD, &[0x0077, 0x0062]),
    m(0xFB00, &[0x0066, 0x0066]),
    m(0xFB01, &[0x0066, 0x0069]),
    m(0xFB02, &[0x0066, 0x006C]),
    m(0xFB03, &[0x0066, 0x0066, 0x0069]),
    m(0xFB04, &[0x0066, 0x0066, 0x006C]),
    m(0xFB05, &[0x0073, 0x0074]),
    m(0xFB06, &[0x0073, 0x0074]),
    m(0xFB13, &[0x0574, 0x0576]),
    m(0xFB14, &[0x0574, 0x0565]),
    m(0xFB15, &[0x0574, 0x056B]),
    m(0xFB16, &[0x057E, 0x0576]),
    m(0xFB17, &[0x0574, 0x056D]),
    m(0xFF21, &[0xFF41]),
    m(0xFF22, &[0xFF42]),
    m(0xFF23, &[0xFF43]),
    m(0xFF24, &[0xFF44]),
    m(0xFF25, &[0xFF45]),
    m(0xFF26, &[0xFF46]),
    m(0xFF27, &[0xFF47]),
    m(0xFF28, &[0xFF48]),
    m(0xFF29, &[0xFF49]),
    m(0xFF2A, &[0xFF4A]),
    m(0xFF2B, &[0xFF4B]),
    m(0xFF2C, &[0xFF4C]),
    m(0xFF2D, &[0xFF4D]),
    m(0xFF2E, &[0xFF4E]),
    m(0xFF2F, &[0xFF4F]),
    m(0xFF30, &[0xFF50]),
    m(0xFF31, &[0xFF51]),
    m(0xFF32, &[0xFF52]),
    m(0xFF33, &[0xFF53]),
    m(0xFF34, &[0xFF54]),
    m(0xFF35, &[0xFF55]),
    m(0xFF36, &[0xFF56]),
    m(0xFF37, &[0xFF57]),
    m(0xFF38, &[0xFF58]),
    m(0xFF39, &[0xFF59]),
    m(0xFF3A, &[0xFF5A]),
    m(0x10400, &[0x10428]),
    m(0x10401, &[0x10429]),
    m(0x10402, &[0x1042A]),
    m(0x10403, &[0x1042B]),
    m(0x10404, &[0x1042C]),
    m(0x10405, &[0x1042D]),
    m(0x10406, &[0x1042E]),
    m(0x10407, &[0x1042F]),
    m(0x10408, &[0x10430]),
    m(0x10409, &[0x10431]),
    m(0x1040A, &[0x10432]),
    m(0x1040B, &[0x10433]),
    m(0x1040C, &[0x10434]),
    m(0x1040D, &[0x10435]),
    m(0x1040E, &[0x10436]),
    m(0x1040F, &[0x10437]),
    m(0x10410, &[0x10438]),
    m(0x10411, &[0x10439]),
    m(0x10412, &[0x1043A]),
    m(0x10413, &[0x1043B]),
    m(0x10414, &[0x1043C]),
    m(0x10415, &[0x1043D]),
    m(0x10416, &[0x1043E]),
    m(0x10417, &[0x1043F]),
    m(0x10418, &[0x10440]),
    m(0x10419, &[0x10441]),
    m(0x1041A, &[0x10442]),
    m(0x1041B, &[0x10443]),
    m(0x1041C, &[0x10444]),
    m(0x1041D, &[0x10445]),
    m(0x1041E, &[0x10446]),
    m(0x1041F, &[0x10447]),
    m(0x10420, &[0x10448]),
    m(0x10421, &[0x10449]),
    m(0x10422, &[0x1044A]),
    m(0x10423, &[0x1044B]),
    m(0x10424, &[0x1044C]),
    m(0x10425, &[0x1044D]),
    m(0x1D400, &[0x0061]),
    m(0x1D401, &[0x0062]),
    m(0x1D402, &[0x0063]),
    m(0x1D403, &[0x0064]),
    m(0x1D404, &[0x0065]),
    m(0x1D405, &[0x0066]),
    m(0x1D406, &[0x0067]),
    m(0x1D407, &[0x0068]),
    m(0x1D408, &[0x0069]),
    m(0x1D409, &[0x006A]),
    m(0x1D40A, &[0x006B]),
    m(0x1D40B, &[0x006C]),
    m(0x1D40C, &[0x006D]),
    m(0x1D40D, &[0x006E]),
    m(0x1D40E, &[0x006F]),
    m(0x1D40F, &[0x0070]),
    m(0x1D410, &[0x0071]),
    m(0x1D411, &[0x0072]),
    m(0x1D412, &[0x0073]),
    m(0x1D413, &[0x0074]),
    m(0x1D414, &[0x0075]),
    m(0x1D415, &[0x0076]),
    m(0x1D416, &[0x0077]),
    m(0x1D417, &[0x0078]),
    m(0x1D418, &[0x0079]),
    m(0x1D419, &[0x007A]),
    m(0x1D434, &[0x0061]),
    m(0x1D435, &[0x0062]),
    m(0x1D436, &[0x0063]),
    m(0x1D437, &[0x0064]),
    m(0x1D438, &[0x0065]),
    m(0x1D439, &[0x0066]),
    m(0x1D43A, &[0x0067]),
    m(0x1D43B, &[0x0068]),
    m(0x1D43C, &[0x0069]),
    m(0x1D43D, &[0x006A]),
    m(0x1D43E, &[0x006B]),
    m(0x1D43F, &[0x006C]),
    m(0x1D440, &[0x006D]),
    m(0x1D441, &[0x006E]),
    m(0x1D442, &[0x006F]),
    m(0x1D443, &[0x0070]),
    m(0x1D444, &[0x0071]),
    m(0x1D445, &[0x0072]),
    m(0x1D446, &[0x0073]),
    m(0x1D447, &[0x0074]),
    m(0x1D448, &[0x0075]),
    m(0x1D449, &[0x0076]),
    m(0x1D44A, &[0x0077]),
    m(0x1D44B, &[0x0078]),
    m(0x1D44C, &[0x0079]),
    m(0x1D44D, &[0x007A]),
    m(0x1D468, &[0x0061]),
    m(0x1D469, &[0x0062]),
    m(0x1D46A, &[0x0063]),
    m(0x1D46B, &[0x0064]),
    m(0x1D46C, &[0x0065]),
    m(0x1D46D, &[0x0066]),
    m(0x1D46E, &[0x0067]),
    m(0x1D46F, &[0x0068]),
    m(0x1D470, &[0x0069]),
    m(0x1D471, &[0x006A]),
    m(0x1D472, &[0x006B]),
    m(0x1D473, &[0x006C]),
    m(0x1D474, &[0x006D]),
    m(0x1D475, &[0x006E]),
    m(0x1D476, &[0x006F]),
    m(0x1D477, &[0x0070]),
    m(0x1D478, &[0x0071]),
    m(0x1D479, &[0x0072]),
    m(0x1D47A, &[0x0073]),
    m(0x1D47B, &[0x0074]),
    m(0x1D47C, &[0x0075]),
    m(0x1D47D, &[0x0076]),
    m(0x1D47E, &[0x0077]),
    m(0x1D47F, &[0x0078]),
    m(0x1D480, &[0x0079]),
    m(0x1D481, &[0x007A]),
    m(0x1D49C, &[0x0061]),
    m(0x1D49E, &[0x0063]),
    m(0x1D49F, &[0x0064]),
    m(0x1D4A2, &[0x0067]),
    m(0x1D4A5, &[0x006A]),
    m(0x1D4A6, &[0x006B]),
    m(0x1D4A9, &[0x006E]),
    m(0x1D4AA, &[0x006F]),
    m(0x1D4AB, &[0x0070]),
    m(0x1D4AC, &[0x0071]),
    m(0x1D4AE, &[0x0073]),
    m(0x1D4AF, &[0x0074]),
    m(0x1D4B0, &[0x0075]),
    m(0x1D4B1, &[0x0076]),
    m(0x1D4B2, &[0x0077]),
    m(0x1D4B3, &[0x0078]),
    m(0x1D4B4, &[0x0079]),
    m(0x1D4B5, &[0x007A]),
    m(0x1D4D0, &[0x0061]),
    m(0x1D4D1, &[0x0062]),
    m(0x1D4D2, &[0x0063]),
    m(0x1D4D3, &[0x0064]),
    m(0x1D4D4, &[0x0065]),
    m(0x1D4D5, &[0x0066]),
    m(0x1D4D6, &[0x0067]),
    m(0x1D4D7, &[0x0068]),
    m(0x1D4D8, &[0x0069]),
    m(0x1D4D9, &[0x006A]),
    m(0x1D4DA, &[0x006B]),
    m(0x1D4DB, &[0x006C]),
    m(0x1D4DC, &[0x006D]),
    m(0x1D4DD, &[0x006E]),
    m(0x1D4DE, &[0x006F]),
    m(0x1D4DF, &[0x0070]),
    m(0x1D4E0, &[0x0071]),
    m(0x1D4E1, &[0x0072]),
    m(0x1D4E2, &[0x0073]),
    m(0x1D4E3, &[0x0074]),
    m(0x1D4E4, &[0x0075]),
    m(0x1D4E5, &[0x0076]),
    m(0x1D4E6, &[0x0077]),
    m(0x1D4E7, &[0x0078]),
    m(0x1D4E8, &[0x0079]),
    m(0x1D4E9, &[0x007A]),
    m(0x1D504, &[0x0061]),
    m(0x1D505, &[0x0062]),
    m(0x1D507, &[0x0064]),
    m(0x1D508, &[0x0065]),
    m(0x1D509, &[0x0066]),
    m(0x1D50A, &[0x0067]),
    m(0x1D50D, &[0x006A]),
    m(0x1D50E, &[0x006B]),
    m(0x1D50F, &[0x006C]),
    m(0x1D510, &[0x006D]),
    m(0x1D511, &[0x006E]),
    m(0x1D512, &[0x006F]),
    m(0x1D513, &[0x0070]),
    m(0x1D514, &[0x0071]),
    m(0x1D516, &[0x0073]),
    m(0x1D517, &[0x0074]),
    m(0x1D518, &[0x0075]),
    m(0x1D519, &[0x0076]),
    m(0x1D51A, &[0x0077]),
    m(0x1D51B, &[0x0078]),
    m(0x1D51C, &[0x0079]),
    m(0x1D538, &[0x0061]),
    m(0x1D539, &[0x0062]),
    m(0x1D53B, &[0x0064]),
    m(0x1D53C, &[0x0065]),
    m(0x1D53D, &[0x0066]),
    m(0x1D53E, &[0x0067]),
    m(0x1D540, &[0x0069]),
    m(0x1D541, &[0x006A]),
    m(0x1D542, &[0x006B]),
    m(0x1D543, &[0x006C]),
    m(0x1D544, &[0x006D]),
    m(0x1D546, &[0x006F]),
    m(0x1D54A, &[0x0073]),
    m(0x1D54B, &[0x0074]),
    m(0x1D54C, &[0x0075]),
    m(0x1D54D, &[0x0076]),
    m(0x1D54E, &[0x0077]),
    m(0x1D54F, &[0x0078]),
    m(0x1D550, &[0x0079]),
    m(0x1D56C, &[0x0061]),
    m(0x1D56D, &[0x0062]),
    m(0x1D56E, &[0x0063]),
    m(0x1D56F, &[0x0064]),
    m(0x1D570, &[0x0065]),
    m(0x1D571, &[0x0066]),
    m(0x1D572, &[0x0067]),
    m(0x1D573, &[0x0068]),
    m(0x1D574, &[0x0069]),
    m(0x1D575, &[0x006A]),
    m(0x1D576, &[0x006B]),
    m(0x1D577, &[0x006C]),
    m(0x1D578, &[0x006D]),
    m(0x1D579, &[0x006E]),
    m(0x1D57A, &[0x006F]),
    m(0x1D57B, &[0x0070]),
    m(0x1D57C, &[0x0071]),
    m(0x1D57D, &[0x0072]),
    m(0x1D57E, &[0x0073]),
    m(0x1D57F, &[0x0074]),
    m(0x1D580, &[0x0075]),
    m(0x1D581, &[0x0076]),
    m(0x1D582, &[0x0077]),
    m(0x1D583, &[0x0078]),
    m(0x1D584, &[0x0079]),
    m(0x1D585, &[0x007A]),
    m(0x1D5A0, &[0x0061]),
    m(0x1D5A1, &[0x0062]),
    m(0x1D5A2, &[0x0063]),
    m(0x1D5A3, &[0x0064]),
    m(0x1D5A4, &[0x0065]),
    m(0x1D5A5, &[0x0066]),
    m(0x1D5A6, &[0x0067]),
    m(0x1D5A7, &[0x0068]),
    m(0x1D5A8, &[0x0069]),
    m(0x1D5A9, &[0x006A]),
    m(0x1D5AA, &[0x006B]),
    m(0x1D5AB, &[0x006C]),
    m(0x1D5AC, &[0x006D]),
    m(0x1D5AD, &[0x006E]),
    m(0x1D5AE, &[0x006F]),
    m(0x1D5AF, &[0x0070]),
    m(0x1D5B0, &[0x0071]),
    m(0x1D5B1, &[0x0072]),
    m(0x1D5B2, &[0x0073]),
    m(0x1D5B3, &[0x0074]),
    m(0x1D5B4, &[0x0075]),
    m(0x1D5B5, &[0x0076]),
    m(0x1D5B6, &[0x0077]),
    m(0x1D5B7, &[0x0078]),
    m(0x1D5B8, &[0x0079]),
    m(0x1D5B9, &[0x007A]),
    m(0x1D5D4, &[0x0061]),
    m(0x1D5D5, &[0x0062]),
    m(0x1D5D6, &[0x0063]),
    m(0x1D5D7, &[0x0064]),
    m(0x1D5D8, &[0x0065]),
    m(0x1D5D9, &[0x0066]),
    m(0x1D5DA, &[0x0067]),
    m(0x1D5DB, &[0x0068]),
    m(0x1D5DC, &[0x0069]),
    m(0x1D5DD, &[0x006A]),
    m(0x1D5DE, &[0x006B]),
    m(0x1D5DF, &[0x006C]),
    m(0x1D5E0, &[0x006D]),
    m(0x1D5E1, &[0x006E]),
    m(0x1D5E2, &[0x006F]),
    m(0x1D5E3, &[0x0070]),
    m(0x1D5E4, &[0x0071]),
    m(0x1D5E5, &[0x0072]),
    m(0x1D5E6, &[0x0073]),
    m(0x1D5E7, &[0x0074]),
    m(0x1D5E8, &[0x0075]),
    m(0x1D5E9, &[0x0076]),
    m(0x1D5EA, &[0x0077]),
    m(0x1D5EB, &[0x0078]),
    m(0x1D5EC, &[0x0079]),
    m(0x1D5ED, &[0x007A]),
    m(0x1D608, &[0x0061]),
    m(0x1D609, &[0x0062]),
    m(0x1D60A, &[0x0063]),
    m(0x1D60B, &[0x0064]),
    m(0x1D60C, &[0x0065]),
    m(0x1D60D, &[0x0066]),
    m(0x1D60E, &[0x0067]),
    m(0x1D60F, &[0x0068]),
    m(0x1D610, &[0x0069]),
    m(0x1D611, &[0x006A]),
    m(0x1D612, &[0x006B]),
    m(0x1D613, &[0x006C]),
    m(0x1D614, &[0x006D]),
    m(0x1D615, &[0x006E]),
    m(0x1D616, &[0x006F]),
    m(0x1D617, &[0x0070]),
    m(0x1D618, &[0x0071]),
    m(0x1D619, &[0x0072]),
    m(0x1D61A, &[0x0073]),
    m(0x1D61B, &[0x0074]),
    m(0x1D61C, &[0x0075]),
    m(0x1D61D, &[0x0076]),
    m(0x1D61E, &[0x0077]),
    m(0x1D61F, &[0x0078]),
    m(0x1D620, &[0x0079]),
    m(0x1D621, &[0x007A]),
    m(0x1D63C, &[0x0061]),
    m(0x1D63D, &[0x0062]),
    m(0x1D63E, &[0x0063]),
    m(0x1D63F, &[0x0064]),
    m(0x1D640, &[0x0065]),
    m(0x1D641, &[0x0066]),
    m(0x1D642, &[0x0067]),
    m(0x1D643, &[0x0068]),
    m(0x1D644, &[0x0069]),
    m(0x1D645, &[0x006A]),
    m(0x1D646, &[0x006B]),
    m(0x1D647, &[0x006C]),
    m(0x1D648, &[0x006D]),
    m(0x1D649, &[0x006E]),
    m(0x1D64A, &[0x006F]),
    m(0x1D64B, &[0x0070]),
    m(0x1D64C, &[0x0071]),
    m(0x1D64D, &[0x0072]),
    m(0x1D64E, &[0x0073]),
    m(0x1D64F, &[0x0074]),
    m(0x1D650, &[0x0075]),
    m(0x1D651, &[0x0076]),
    m(0x1D652, &[0x0077]),
    m(0x1D653, &[0x0078]),
    m(0x1D654, &[0x0079]),
    m(0x1D655, &[0x007A]),
    m(0x1D670, &[0x0061]),
    m(0x1D671, &[0x0062]),
    m(0x1D672, &[0x0063]),
    m(0x1D673, &[0x0064]),
    m(0x1D674, &[0x0065]),
    m(0x1D675, &[0x0066]),
    m(0x1D676, &[0x0067]),
    m(0x1D677, &[0x0068]),
    m(0x1D678, &[0x0069]),
    m(0x1D679, &[0x006A]),
    m(0x1D67A, &[0x006B]),
    m(0x1D67B, &[0x006C]),
    m(0x1D67C, &[0x006D]),
    m(0x1D67D, &[0x006E]),
    m(0x1D67E, &[0x006F]),
    m(0x1D67F, &[0x0070]),
    m(0x1D680, &[0x0071]),
    m(0x1D681, &[0x0072]),
    m(0x1D682, &[0x0073]),
    m(0x1D683, &[0x0074]),
    m(0x1D684, &[0x0075]),
    m(0x1D685, &[0x0076]),
    m(0x1D686, &[0x0077]),
    m(0x1D687, &[0x0078]),
    m(0x1D688, &[0x0079]),
    m(0x1D689, &[0x007A]),
    m(0x1D6A8, &[0x03B1]),
    m(0x1D6A9, &[0x03B2]),
    m(0x1D6AA, &[0x03B3]),
    m(0x1D6AB, &[0x03B4]),
    m(0x1D6AC, &[0x03B5]),
    m(0x1D6AD, &[0x03B6]),
    m(0x1D6AE, &[0x03B7]),
    m(0x1D6AF, &[0x03B8]),
    m(0x1D6B0, &[0x03B9]),
    m(0x1D6B1, &[0x03BA]),
    m(0x1D6B2, &[0x03BB]),
    m(0x1D6B3, &[0x03BC]),
    m(0x1D6B4, &[0x03BD]),
    m(0x1D6B5, &[0x03BE]),
    m(0x1D6B6, &[0x03BF]),
    m(0x1D6B7, &[0x03C0]),
    m(0x1D6B8, &[0x03C1]),
    m(0x1D6B9, &[0x03B8]),
    m(0x1D6BA, &[0x03C3]),
    m(0x1D6BB, &[0x03C4]),
    m(0x1D6BC, &[0x03C5]),
    m(0x1D6BD, &[0x03C6]),
    m(0x1D6BE, &[0x03C7]),
    m(0x1D6BF, &[0x03C8]),
    m(0x1D6C0, &[0x03C9]),
    m(0x1D6D3, &[0x03C3]),
    m(0x1D6E2, &[0x03B1]),
    m(0x1D6E3, &[0x03B2]),
    m(0x1D6E4, &[0x03B3]),
    m(0x1D6E5, &[0x03B4]),
    m(0x1D6E6, &[0x03B5]),
    m(0x1D6E7, &[0x03B6]),
    m(0x1D6E8, &[0x03B7]),
    m(0x1D6E9, &[0x03B8]),
    m(0x1D6EA, &[0x03B9]),
    m(0x1D6EB, &[0x03BA]),
    m(0x1D6EC, &[0x03BB]),
    m(0x1D6ED, &[0x03BC]),
    m(0x1D6EE, &[0x03BD]),
    m(0x1D6EF, &[0x03BE]),
    m(0x1D6F0, &[0x03BF]),
    m(0x1D6F1, &[0x03C0]),
    m(0x1D6F2, &[0x03C1]),
    m(0x1D6F3, &[0x03B8]),
    m(0x1D6F4, &[0x03C3]),
    m(0x1D6F5, &[0x03C4]),
    m(0x1D6F6, &[0x03C5]),
    m(0x1D6F7, &[0x03C6]),
    m(0x1D6F8, &[0x03C7]),
    m(0x1D6F9, &[0x03C8]),
    m(0x1D6FA, &[0x03C9]),
    m(0x1D70D, &[0x03C3]),
    m(0x1D71C, &[0x03B1]),
    m(0x1D71D, &[0x03B2]),
    m(0x1D71E, &[0x03B3]),
    m(0x1D71F, &[0x03B4]),
    m(0x1D720, &[0x03B5]),
    m(0x1D721, &[0x03B6]),
    m(0x1D722, &[0x03B7]),
    m(0x1D723, &[0x03B8]),
    m(0x1D724, &[0x03B9]),
    m(0x1D725, &[0x03BA]),
    m(0x1D726, &[0x03BB]),
    m(0x1D727, &[0x03BC]),
    m(0x1D728, &[0x03BD]),
    m(0x1D729, &[0x03BE]),
    m(0x1D72A, &[0x03BF]),
    m(0x1D72B, &[0x03C0]),
    m(0x1D72C, &[0x03C1]),
    m(0x1D72D, &[0x03B8]),
    m(0x1D72E, &[0x03C3]),
    m(0x1D72F, &[0x03C4]),
    m(0x1D730, &[0x03C5]),
    m(0x1D731, &[0x03C6]),
    m(0x1D732, &[0x03C7]),
    m(0x1D733, &[0x03C8]),
    m(0x1D734, &[0x03C9]),
    m(0x1D747, &[0x03C3]),
    m(0x1D756, &[0x03B1]),
    m(0x1D757, &[0x03B2]),
    m(0x1D758, &[0x03B3]),
    m(0x1D759, &[0x03B4]),
    m(0x1D75A, &[0x03B5]),
    m(0x1D75B, &[0x03B6]),
    m(0x1D75C, &[0x03B7]),
    m(0x1D75D, &[0x03B8]),
    m(0x1D75E, &[0x03B9]),
    m(0x1D75F, &[0x03BA]),
    m(0x1D760, &[0x03BB]),
    m(0x1D761, &[0x03BC]),
    m(0x1D762, &[0x03BD]),
    m(0x1D763, &[0x03BE]),
    m(0x1D764, &[0x03BF]),
    m(0x1D765, &[0x03C0]),
    m(0x1D766, &[0x03C1]),
    m(0x1D767, &[0x03B8]),
    m(0x1D768, &[0x03C3]),
    m(0x1D769, &[0x03C4]),
    m(0x1D76A, &[0x03C5]),
    m(0x1D76B, &[0x03C6]),
    m(0x1D76C, &[0x03C7]),
    m(0x1D76D, &[0x03C8]),
    m(0x1D76E, &[0x03C9]),
    m(0x1D781, &[0x03C3]),
    m(0x1D790, &[0x03B1]),
    m(0x1D791, &[0x03B2]),
    m(0x1D792, &[0x03B3]),
    m(0x1D793, &[0x03B4]),
    m(0x1D794, &[0x03B5]),
    m(0x1D795, &[0x03B6]),
    m(0x1D796, &[0x03B7]),
    m(0x1D797, &[0x03B8]),
    m(0x1D798, &[0x03B9]),
    m(0x1D799, &[0x03BA]),
    m(0x1D79A, &[0x03BB]),
    m(0x1D79B, &[0x03BC]),
    m(0x1D79C, &[0x03BD]),
    m(0x1D79D, &[0x03BE]),
    m(0x1D79E, &[0x03BF]),
    m(0x1D79F, &[0x03C0]),
    m(0x1D7A0, &[0x03C1]),
    m(0x1D7A1, &[0x03B8]),
    m(0x1D7A2, &[0x03C3]),
    m(0x1D7A3, &[0x03C4]),
    m(0x1D7A4, &[0x03C5]),
    m(0x1D7A5, &[0x03C6]),
    m(0x1D7A6, &[0x03C7]),
    m(0x1D7A7, &[0x03C8]),
    m(0x1D7A8, &[0x03C9]),
    m(0x1D7BB, &[0x03C3]),
]);
