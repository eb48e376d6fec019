use super::UnicodeBlock;

// Generated from the Unicode Character Database Blocks.txt (Unicode 14.0).

/// Unicode blocks in code point order.
pub static UNICODE_BLOCKS: &[UnicodeBlock] = &[
    UnicodeBlock::new("Basic Latin", 0x0000, 0x007F),
    UnicodeBlock::new("Latin-1 Supplement", 0x0080, 0x00FF),
    UnicodeBlock::new("Latin Extended-A", 0x0100, 0x017F),
    UnicodeBlock::new("Latin Extended-B", 0x0180, 0x024F),
    UnicodeBlock::new("IPA Extensions", 0x0250, 0x02AF),
    UnicodeBlock::new("Spacing Modifier Letters", 0x02B0, 0x02FF),
    UnicodeBlock::new("Combining Diacritical Marks", 0x0300, 0x036F),
    UnicodeBlock::new("Greek and Coptic", 0x0370, 0x03FF),
    UnicodeBlock::new("Cyrillic", 0x0400, 0x04FF),
    UnicodeBlock::new("Cyrillic Supplement", 0x0500, 0x052F),
    UnicodeBlock::new("Armenian", 0x0530, 0x058F),
    UnicodeBlock::new("Hebrew", 0x0590, 0x05FF),
    UnicodeBlock::new("Arabic", 0x0600, 0x06FF),
    UnicodeBlock::new("Syriac", 0x0700, 0x074F),
    UnicodeBlock::new("Arabic Supplement", 0x0750, 0x077F),
    UnicodeBlock::new("Thaana", 0x0780, 0x07BF),
    UnicodeBlock::new("NKo", 0x07C0, 0x07FF),
    UnicodeBlock::new("Samaritan", 0x0800, 0x083F),
    UnicodeBlock::new("Mandaic", 0x0840, 0x085F),
    UnicodeBlock::new("Syriac Supplement", 0x0860, 0x086F),
    UnicodeBlock::new("Arabic Extended-B", 0x0870, 0x089F),
    UnicodeBlock::new("Arabic Extended-A", 0x08A0, 0x08FF),
    UnicodeBlock::new("Devanagari", 0x0900, 0x097F),
    UnicodeBlock::new("Bengali", 0x0980, 0x09FF),
    UnicodeBlock::new("Gurmukhi", 0x0A00, 0x0A7F),
    UnicodeBlock::new("Gujarati", 0x0A80, 0x0AFF),
    UnicodeBlock::new("Oriya", 0x0B00, 0x0B7F),
    UnicodeBlock::new("Tamil", 0x0B80, 0x0BFF),
    UnicodeBlock::new("Telugu", 0x0C00, 0x0C7F),
    UnicodeBlock::new("Kannada", 0x0C80, 0x0CFF),
    UnicodeBlock::new("Malayalam", 0x0D00, 0x0D7F),
    UnicodeBlock::new("Sinhala", 0x0D80, 0x0DFF),
    UnicodeBlock::new("Thai", 0x0E00, 0x0E7F),
    UnicodeBlock::new("Lao", 0x0E80, 0x0EFF),
    UnicodeBlock::new("Tibetan", 0x0F00, 0x0FFF),
    UnicodeBlock::new("Myanmar", 0x1000, 0x109F),
    UnicodeBlock::new("Georgian", 0x10A0, 0x10FF),
    UnicodeBlock::new("Hangul Jamo", 0x1100, 0x11FF),
    UnicodeBlock::new("Ethiopic", 0x1200, 0x137F),
    UnicodeBlock::new("Ethiopic Supplement", 0x1380, 0x139F),
    UnicodeBlock::new("Cherokee", 0x13A0, 0x13FF),
    UnicodeBlock::new("Unified Canadian Aboriginal Syllabics", 0x1400, 0x167F),
    UnicodeBlock::new("Ogham", 0x1680, 0x169F),
    UnicodeBlock::new("Runic", 0x16A0, 0x16FF),
    UnicodeBlock::new("Tagalog", 0x1700, 0x171F),
    UnicodeBlock::new("Hanunoo", 0x1720, 0x173F),
    UnicodeBlock::new("Buhid", 0x1740, 0x175F),
    UnicodeBlock::new("Tagbanwa", 0x1760, 0x177F),
    UnicodeBlock::new("Khmer", 0x1780, 0x17FF),
    UnicodeBlock::new("Mongolian", 0x1800, 0x18AF),
    UnicodeBlock::new("Unified Canadian Aboriginal Syllabics Extended", 0x18B0, 0x18FF),
    UnicodeBlock::new("Limbu", 0x1900, 0x194F),
    UnicodeBlock::new("Tai Le", 0x1950, 0x197F),
    UnicodeBlock::new("New Tai Lue", 0x1980, 0x19DF),
    UnicodeBlock::new("Khmer Symbols", 0x19E0, 0x19FF),
    UnicodeBlock::new("Buginese", 0x1A00, 0x1A1F),
    UnicodeBlock::new("Tai Tham", 0x1A20, 0x1AAF),
    UnicodeBlock::new("Combining Diacritical Marks Extended", 0x1AB0, 0x1AFF),
    UnicodeBlock::new("Balinese", 0x1B00, 0x1B7F),
    UnicodeBlock::new("Sundanese", 0x1B80, 0x1BBF),
    UnicodeBlock::new("Batak", 0x1BC0, 0x1BFF),
    UnicodeBlock::new("Lepcha", 0x1C00, 0x1C4F),
    UnicodeBlock::new("Ol Chiki", 0x1C50, 0x1C7F),
    UnicodeBlock::new("Cyrillic Extended-C", 0x1C80, 0x1C8F),
    UnicodeBlock::new("Georgian Extended", 0x1C90, 0x1CBF),
    UnicodeBlock::new("Sundanese Supplement", 0x1CC0, 0x1CCF),
    UnicodeBlock::new("Vedic Extensions", 0x1CD0, 0x1CFF),
    UnicodeBlock::new("Phonetic Extensions", 0x1D00, 0x1D7F),
    UnicodeBlock::new("Phonetic Extensions Supplement", 0x1D80, 0x1DBF),
    UnicodeBlock::new("Combining Diacritical Marks Supplement", 0x1DC0, 0x1DFF),
    UnicodeBlock::new("Latin Extended Additional", 0x1E00, 0x1EFF),
    UnicodeBlock::new("Greek Extended", 0x1F00, 0x1FFF),
    UnicodeBlock::new("General Punctuation", 0x2000, 0x206F),
    UnicodeBlock::new("Superscripts and Subscripts", 0x2070, 0x209F),
    UnicodeBlock::new("Currency Symbols", 0x20A0, 0x20CF),
    UnicodeBlock::new("Combining Diacritical Marks for Symbols", 0x20D0, 0x20FF),
    UnicodeBlock::new("Letterlike Symbols", 0x2100, 0x214F),
    UnicodeBlock::new("Number Forms", 0x2150, 0x218F),
    UnicodeBlock::new("Arrows", 0x2190, 0x21FF),
    UnicodeBlock::new("Mathematical Operators", 0x2200, 0x22FF),
    UnicodeBlock::new("Miscellaneous Technical", 0x2300, 0x23FF),
    UnicodeBlock::new("Control Pictures", 0x2400, 0x243F),
    UnicodeBlock::new("Optical Character Recognition", 0x2440, 0x245F),
    UnicodeBlock::new("Enclosed Alphanumerics", 0x2460, 0x24FF),
    UnicodeBlock::new("Box Drawing", 0x2500, 0x257F),
    UnicodeBlock::new("Block Elements", 0x2580, 0x259F),
    UnicodeBlock::new("Geometric Shapes", 0x25A0, 0x25FF),
    UnicodeBlock::new("Miscellaneous Symbols", 0x2600, 0x26FF),
    UnicodeBlock::new("Dingbats", 0x2700, 0x27BF),
    UnicodeBlock::new("Miscellaneous Mathematical Symbols-A", 0x27C0, 0x27EF),
    UnicodeBlock::new("Supplemental Arrows-A", 0x27F0, 0x27FF),
    UnicodeBlock::new("Braille Patterns", 0x2800, 0x28FF),
    UnicodeBlock::new("Supplemental Arrows-B", 0x2900, 0x297F),
    UnicodeBlock::new("Miscellaneous Mathematical Symbols-B", 0x2980, 0x29FF),
    UnicodeBlock::new("Supplemental Mathematical Operators", 0x2A00, 0x2AFF),
    UnicodeBlock::new("Miscellaneous Symbols and Arrows", 0x2B00, 0x2BFF),
    UnicodeBlock::new("Glagolitic", 0x2C00, 0x2C5F),
    UnicodeBlock::new("Latin Extended-C", 0x2C60, 0x2C7F),
    UnicodeBlock::new("Coptic", 0x2C80, 0x2CFF),
    UnicodeBlock::new("Georgian Supplement", 0x2D00, 0x2D2F),
    UnicodeBlock::new("Tifinagh", 0x2D30, 0x2D7F),
    UnicodeBlock::new("Ethiopic Extended", 0x2D80, 0x2DDF),
    UnicodeBlock::new("Cyrillic Extended-A", 0x2DE0, 0x2DFF),
    UnicodeBlock::new("Supplemental Punctuation", 0x2E00, 0x2E7F),
    UnicodeBlock::new("CJK Radicals Supplement", 0x2E80, 0x2EFF),
    UnicodeBlock::new("Kangxi Radicals", 0x2F00, 0x2FDF),
    UnicodeBlock::new("Ideographic Description Characters", 0x2FF0, 0x2FFF),
    UnicodeBlock::new("CJK Symbols and Punctuation", 0x3000, 0x303F),
    UnicodeBlock::new("Hiragana", 0x3040, 0x309F),
    UnicodeBlock::new("Katakana", 0x30A0, 0x30FF),
    UnicodeBlock::new("Bopomofo", 0x3100, 0x312F),
    UnicodeBlock::new("Hangul Compatibility Jamo", 0x3130, 0x318F),
    UnicodeBlock::new("Kanbun", 0x3190, 0x319F),
    UnicodeBlock::new("Bopomofo Extended", 0x31A0, 0x31BF),
    UnicodeBlock::new("CJK Strokes", 0x31C0, 0x31EF),
    UnicodeBlock::new("Katakana Phonetic Extensions", 0x31F0, 0x31FF),
    UnicodeBlock::new("Enclosed CJK Letters and Months", 0x3200, 0x32FF),
    UnicodeBlock::new("CJK Compatibility", 0x3300, 0x33FF),
    UnicodeBlock::new("CJK Unified Ideographs Extension A", 0x3400, 0x4DBF),
    UnicodeBlock::new("Yijing Hexagram Symbols", 0x4DC0, 0x4DFF),
    UnicodeBlock::new("CJK Unified Ideographs", 0x4E00, 0x9FFF),
    UnicodeBlock::new("Yi Syllables", 0xA000, 0xA48F),
    UnicodeBlock::new("Yi Radicals", 0xA490, 0xA4CF),
    UnicodeBlock::new("Lisu", 0xA4D0, 0xA4FF),
    UnicodeBlock::new("Vai", 0xA500, 0xA63F),
    UnicodeBlock::new("Cyrillic Extended-B", 0xA640, 0xA69F),
    UnicodeBlock::new("Bamum", 0xA6A0, 0xA6FF),
    UnicodeBlock::new("Modifier Tone Letters", 0xA700, 0xA71F),
    UnicodeBlock::new("Latin Extended-D", 0xA720, 0xA7FF),
    UnicodeBlock::new("Syloti Nagri", 0xA800, 0xA82F),
    UnicodeBlock::new("Common Indic Number Forms", 0xA830, 0xA83F),
    UnicodeBlock::new("Phags-pa", 0xA840, 0xA87F),
    UnicodeBlock::new("Saurashtra", 0xA880, 0xA8DF),
    UnicodeBlock::new("Devanagari Extended", 0xA8E0, 0xA8FF),
    UnicodeBlock::new("Kayah Li", 0xA900, 0xA92F),
    UnicodeBlock::new("Rejang", 0xA930, 0xA95F),
    UnicodeBlock::new("Hangul Jamo Extended-A", 0xA960, 0xA97F),
    UnicodeBlock::new("Javanese", 0xA980, 0xA9DF),
    UnicodeBlock::new("Myanmar Extended-B", 0xA9E0, 0xA9FF),
    UnicodeBlock::new("Cham", 0xAA00, 0xAA5F),
    UnicodeBlock::new("Myanmar Extended-A", 0xAA60, 0xAA7F),
    UnicodeBlock::new("Tai Viet", 0xAA80, 0xAADF),
    UnicodeBlock::new("Meetei Mayek Extensions", 0xAAE0, 0xAAFF),
    UnicodeBlock::new("Ethiopic Extended-A", 0xAB00, 0xAB2F),
    UnicodeBlock::new("Latin Extended-E", 0xAB30, 0xAB6F),
    UnicodeBlock::new("Cherokee Supplement", 0xAB70, 0xABBF),
    UnicodeBlock::new("Meetei Mayek", 0xABC0, 0xABFF),
    UnicodeBlock::new("Hangul Syllables", 0xAC00, 0xD7AF),
    UnicodeBlock::new("Hangul Jamo Extended-B", 0xD7B0, 0xD7FF),
    UnicodeBlock::new("High Surrogates", 0xD800, 0xDB7F),
    UnicodeBlock::new("High Private Use Surrogates", 0xDB80, 0xDBFF),
    UnicodeBlock::new("Low Surrogates", 0xDC00, 0xDFFF),
    UnicodeBlock::new("Private Use Area", 0xE000, 0xF8FF),
    UnicodeBlock::new("CJK Compatibility Ideographs", 0xF900, 0xFAFF),
    UnicodeBlock::new("Alphabetic Presentation Forms", 0xFB00, 0xFB4F),
    UnicodeBlock::new("Arabic Presentation Forms-A", 0xFB50, 0xFDFF),
    UnicodeBlock::new("Variation Selectors", 0xFE00, 0xFE0F),
    UnicodeBlock::new("Vertical Forms", 0xFE10, 0xFE1F),
    UnicodeBlock::new("Combining Half Marks", 0xFE20, 0xFE2F),
    UnicodeBlock::new("CJK Compatibility Forms", 0xFE30, 0xFE4F),
    UnicodeBlock::new("Small Form Variants", 0xFE50, 0xFE6F),
    UnicodeBlock::new("Arabic Presentation Forms-B", 0xFE70, 0xFEFF),
    UnicodeBlock::new("Halfwidth and Fullwidth Forms", 0xFF00, 0xFFEF),
    UnicodeBlock::new("Specials", 0xFFF0, 0xFFFF),
    UnicodeBlock::new("Linear B Syllabary", 0x10000, 0x1007F),
    UnicodeBlock::new("Linear B Ideograms", 0x10080, 0x100FF),
    UnicodeBlock::new("Aegean Numbers", 0x10100, 0x1013F),
    UnicodeBlock::new("Ancient Greek Numbers", 0x10140, 0x1018F),
    UnicodeBlock::new("Ancient Symbols", 0x10190, 0x101CF),
    UnicodeBlock::new("Phaistos Disc", 0x101D0, 0x101FF),
    UnicodeBlock::new("Lycian", 0x10280, 0x1029F),
    UnicodeBlock::new("Carian", 0x102A0, 0x102DF),
    UnicodeBlock::new("Coptic Epact Numbers", 0x102E0, 0x102FF),
    UnicodeBlock::new("Old Italic", 0x10300, 0x1032F),
    UnicodeBlock::new("Gothic", 0x10330, 0x1034F),
    UnicodeBlock::new("Old Permic", 0x10350, 0x1037F),
    UnicodeBlock::new("Ugaritic", 0x10380, 0x1039F),
    UnicodeBlock::new("Old Persian", 0x103A0, 0x103DF),
    UnicodeBlock::new("Deseret", 0x10400, 0x1044F),
    UnicodeBlock::new("Shavian", 0x10450, 0x1047F),
    UnicodeBlock::new("Osmanya", 0x10480, 0x104AF),
    UnicodeBlock::new("Osage", 0x104B0, 0x104FF),
    UnicodeBlock::new("Elbasan", 0x10500, 0x1052F),
    UnicodeBlock::new("Caucasian Albanian", 0x10530, 0x1056F),
    UnicodeBlock::new("Vithkuqi", 0x10570, 0x105BF),
    UnicodeBlock::new("Linear A", 0x10600, 0x1077F),
    UnicodeBlock::new("Latin Extended-F", 0x10780, 0x107BF),
    UnicodeBlock::new("Cypriot Syllabary", 0x10800, 0x1083F),
    UnicodeBlock::new("Imperial Aramaic", 0x10840, 0x1085F),
    UnicodeBlock::new("Palmyrene", 0x10860, 0x1087F),
    UnicodeBlock::new("Nabataean", 0x10880, 0x108AF),
    UnicodeBlock::new("Hatran", 0x108E0, 0x108FF),
    UnicodeBlock::new("Phoenician", 0x10900, 0x1091F),
    UnicodeBlock::new("Lydian", 0x10920, 0x1093F),
    UnicodeBlock::new("Meroitic Hieroglyphs", 0x10980, 0x1099F),
    UnicodeBlock::new("Meroitic Cursive", 0x109A0, 0x109FF),
    UnicodeBlock::new("Kharoshthi", 0x10A00, 0x10A5F),
    UnicodeBlock::new("Old South Arabian", 0x10A60, 0x10A7F),
    UnicodeBlock::new("Old North Arabian", 0x10A80, 0x10A9F),
    UnicodeBlock::new("Manichaean", 0x10AC0, 0x10AFF),
    UnicodeBlock::new("Avestan", 0x10B00, 0x10B3F),
    UnicodeBlock::new("Inscriptional Parthian", 0x10B40, 0x10B5F),
    UnicodeBlock::new("Inscriptional Pahlavi", 0x10B60, 0x10B7F),
    UnicodeBlock::new("Psalter Pahlavi", 0x10B80, 0x10BAF),
    UnicodeBlock::new("Old Turkic", 0x10C00, 0x10C4F),
    UnicodeBlock::new("Old Hungarian", 0x10C80, 0x10CFF),
    UnicodeBlock::new("Hanifi Rohingya", 0x10D00, 0x10D3F),
    UnicodeBlock::new("Rumi Numeral Symbols", 0x10E60, 0x10E7F),
    UnicodeBlock::new("Yezidi", 0x10E80, 0x10EBF),
    UnicodeBlock::new("Old Sogdian", 0x10F00, 0x10F2F),
    UnicodeBlock::new("Sogdian", 0x10F30, 0x10F6F),
    UnicodeBlock::new("Old Uyghur", 0x10F70, 0x10FAF),
    UnicodeBlock::new("Chorasmian", 0x10FB0, 0x10FDF),
    UnicodeBlock::new("Elymaic", 0x10FE0, 0x10FFF),
    UnicodeBlock::new("Brahmi", 0x11000, 0x1107F),
    UnicodeBlock::new("Kaithi", 0x11080, 0x110CF),
    UnicodeBlock::new("Sora Sompeng", 0x110D0, 0x110FF),
    UnicodeBlock::new("Chakma", 0x11100, 0x1114F),
    UnicodeBlock::new("Mahajani", 0x11150, 0x1117F),
    UnicodeBlock::new("Sharada", 0x11180, 0x111DF),
    UnicodeBlock::new("Sinhala Archaic Numbers", 0x111E0, 0x111FF),
    UnicodeBlock::new("Khojki", 0x11200, 0x1124F),
    UnicodeBlock::new("Multani", 0x11280, 0x112AF),
    UnicodeBlock::new("Khudawadi", 0x112B0, 0x112FF),
    UnicodeBlock::new("Grantha", 0x11300, 0x1137F),
    UnicodeBlock::new("Newa", 0x11400, 0x1147F),
    UnicodeBlock::new("Tirhuta", 0x11480, 0x114DF),
    UnicodeBlock::new("Siddham", 0x11580, 0x115FF),
    UnicodeBlock::new("Modi", 0x11600, 0x1165F),
    UnicodeBlock::new("Mongolian Supplement", 0x11660, 0x1167F),
    UnicodeBlock::new("Takri", 0x11680, 0x116CF),
    UnicodeBlock::new("Ahom", 0x11700, 0x1174F),
    UnicodeBlock::new("Dogra", 0x11800, 0x1184F),
    UnicodeBlock::new("Warang Citi", 0x118A0, 0x118FF),
    UnicodeBlock::new("Dives Akuru", 0x11900, 0x1195F),
    UnicodeBlock::new("Nandinagari", 0x119A0, 0x119FF),
    UnicodeBlock::new("Zanabazar Square", 0x11A00, 0x11A4F),
    UnicodeBlock::new("Soyombo", 0x11A50, 0x11AAF),
    UnicodeBlock::new("Unified Canadian Aboriginal Syllabics Extended-A", 0x11AB0, 0x11ABF),
    UnicodeBlock::new("Pau Cin Hau", 0x11AC0, 0x11AFF),
    UnicodeBlock::new("Bhaiksuki", 0x11C00, 0x11C6F),
    UnicodeBlock::new("Marchen", 0x11C70, 0x11CBF),
    UnicodeBlock::new("Masaram Gondi", 0x11D00, 0x11D5F),
    UnicodeBlock::new("Gunjala Gondi", 0x11D60, 0x11DAF),
    UnicodeBlock::new("Makasar", 0x11EE0, 0x11EFF),
    UnicodeBlock::new("Lisu Supplement", 0x11FB0, 0x11FBF),
    UnicodeBlock::new("Tamil Supplement", 0x11FC0, 0x11FFF),
    UnicodeBlock::new("Cuneiform", 0x12000, 0x123FF),
    UnicodeBlock::new("Cuneiform Numbers and Punctuation", 0x12400, 0x1247F),
    UnicodeBlock::new("Early Dynastic Cuneiform", 0x12480, 0x1254F),
    UnicodeBlock::new("Cypro-Minoan", 0x12F90, 0x12FFF),
    UnicodeBlock::new("Egyptian Hieroglyphs", 0x13000, 0x1342F),
    UnicodeBlock::new("Egyptian Hieroglyph Format Controls", 0x13430, 0x1343F),
    UnicodeBlock::new("Anatolian Hieroglyphs", 0x14400, 0x1467F),
    UnicodeBlock::new("Bamum Supplement", 0x16800, 0x16A3F),
    UnicodeBlock::new("Mro", 0x16A40, 0x16A6F),
    UnicodeBlock::new("Tangsa", 0x16A70, 0x16ACF),
    UnicodeBlock::new("Bassa Vah", 0x16AD0, 0x16AFF),
    UnicodeBlock::new("Pahawh Hmong", 0x16B00, 0x16B8F),
    UnicodeBlock::new("Medefaidrin", 0x16E40, 0x16E9F),
    UnicodeBlock::new("Miao", 0x16F00, 0x16F9F),
    UnicodeBlock::new("Ideographic Symbols and Punctuation", 0x16FE0, 0x16FFF),
    UnicodeBlock::new("Tangut", 0x17000, 0x187FF),
    UnicodeBlock::new("Tangut Components", 0x18800, 0x18AFF),
    UnicodeBlock::new("Khitan Small Script", 0x18B00, 0x18CFF),
    UnicodeBlock::new("Tangut Supplement", 0x18D00, 0x18D7F),
    UnicodeBlock::new("Kana Extended-B", 0x1AFF0, 0x1AFFF),
    UnicodeBlock::new("Kana Supplement", 0x1B000, 0x1B0FF),
    UnicodeBlock::new("Kana Extended-A", 0x1B100, 0x1B12F),
    UnicodeBlock::new("Small Kana Extension", 0x1B130, 0x1B16F),
    UnicodeBlock::new("Nushu", 0x1B170, 0x1B2FF),
    UnicodeBlock::new("Duployan", 0x1BC00, 0x1BC9F),
    UnicodeBlock::new("Shorthand Format Controls", 0x1BCA0, 0x1BCAF),
    UnicodeBlock::new("Znamenny Musical Notation", 0x1CF00, 0x1CFCF),
    UnicodeBlock::new("Byzantine Musical Symbols", 0x1D000, 0x1D0FF),
    UnicodeBlock::new("Musical Symbols", 0x1D100, 0x1D1FF),
    UnicodeBlock::new("Ancient Greek Musical Notation", 0x1D200, 0x1D24F),
    UnicodeBlock::new("Mayan Numerals", 0x1D2E0, 0x1D2FF),
    UnicodeBlock::new("Tai Xuan Jing Symbols", 0x1D300, 0x1D35F),
    UnicodeBlock::new("Counting Rod Numerals", 0x1D360, 0x1D37F),
    UnicodeBlock::new("Mathematical Alphanumeric Symbols", 0x1D400, 0x1D7FF),
    UnicodeBlock::new("Sutton SignWriting", 0x1D800, 0x1DAAF),
    UnicodeBlock::new("Latin Extended-G", 0x1DF00, 0x1DFFF),
    UnicodeBlock::new("Glagolitic Supplement", 0x1E000, 0x1E02F),
    UnicodeBlock::new("Nyiakeng Puachue Hmong", 0x1E100, 0x1E14F),
    UnicodeBlock::new("Toto", 0x1E290, 0x1E2BF),
    UnicodeBlock::new("Wancho", 0x1E2C0, 0x1E2FF),
    UnicodeBlock::new("Ethiopic Extended-B", 0x1E7E0, 0x1E7FF),
    UnicodeBlock::new("Mende Kikakui", 0x1E800, 0x1E8DF),
    UnicodeBlock::new("Adlam", 0x1E900, 0x1E95F),
    UnicodeBlock::new("Indic Siyaq Numbers", 0x1EC70, 0x1ECBF),
    UnicodeBlock::new("Ottoman Siyaq Numbers", 0x1ED00, 0x1ED4F),
    UnicodeBlock::new("Arabic Mathematical Alphabetic Symbols", 0x1EE00, 0x1EEFF),
    UnicodeBlock::new("Mahjong Tiles", 0x1F000, 0x1F02F),
    UnicodeBlock::new("Domino Tiles", 0x1F030, 0x1F09F),
    UnicodeBlock::new("Playing Cards", 0x1F0A0, 0x1F0FF),
    UnicodeBlock::new("Enclosed Alphanumeric Supplement", 0x1F100, 0x1F1FF),
    UnicodeBlock::new("Enclosed Ideographic Supplement", 0x1F200, 0x1F2FF),
    UnicodeBlock::new("Miscellaneous Symbols and Pictographs", 0x1F300, 0x1F5FF),
    UnicodeBlock::new("Emoticons", 0x1F600, 0x1F64F),
    UnicodeBlock::new("Ornamental Dingbats", 0x1F650, 0x1F67F),
    UnicodeBlock::new("Transport and Map Symbols", 0x1F680, 0x1F6FF),
    UnicodeBlock::new("Alchemical Symbols", 0x1F700, 0x1F77F),
    UnicodeBlock::new("Geometric Shapes Extended", 0x1F780, 0x1F7FF),
    UnicodeBlock::new("Supplemental Arrows-C", 0x1F800, 0x1F8FF),
    UnicodeBlock::new("Supplemental Symbols and Pictographs", 0x1F900, 0x1F9FF),
    UnicodeBlock::new("Chess Symbols", 0x1FA00, 0x1FA6F),
    UnicodeBlock::new("Symbols and Pictographs Extended-A", 0x1FA70, 0x1FAFF),
    UnicodeBlock::new("Symbols for Legacy Computing", 0x1FB00, 0x1FBFF),
    UnicodeBlock::new("CJK Unified Ideographs Extension B", 0x20000, 0x2A6DF),
    UnicodeBlock::new("CJK Unified Ideographs Extension C", 0x2A700, 0x2B73F),
    UnicodeBlock::new("CJK Unified Ideographs Extension D", 0x2B740, 0x2B81F),
    UnicodeBlock::new("CJK Unified Ideographs Extension E", 0x2B820, 0x2CEAF),
    UnicodeBlock::new("CJK Unified Ideographs Extension F", 0x2CEB0, 0x2EBEF),
    UnicodeBlock::new("CJK Compatibility Ideographs Supplement", 0x2F800, 0x2FA1F),
    UnicodeBlock::new("CJK Unified Ideographs Extension G", 0x30000, 0x3134F),
    UnicodeBlock::new("Tags", 0xE0000, 0xE007F),
    UnicodeBlock::new("Variation Selectors Supplement", 0xE0100, 0xE01EF),
    UnicodeBlock::new("Supplementary Private Use Area-A", 0xF0000, 0xFFFFF),
    UnicodeBlock::new("Supplementary Private Use Area-B", 0x100000, 0x10FFFF),
];
