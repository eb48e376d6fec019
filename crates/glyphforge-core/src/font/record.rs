use serde::{Deserialize, Serialize};

/// Vertical font metrics in font units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontMetrics {
    pub ascender: i16,
    pub descender: i16,
    pub units_per_em: u16,
}

impl FontMetrics {
    /// Fraction of the ascender-to-descender span that lies above the baseline.
    ///
    /// `None` when the span is zero (degenerate metrics).
    pub fn baseline_ratio(&self) -> Option<f64> {
        let total = f64::from(self.ascender) - f64::from(self.descender);
        if total == 0.0 {
            None
        } else {
            Some(f64::from(self.ascender) / total)
        }
    }
}

impl Default for FontMetrics {
    fn default() -> Self {
        Self {
            ascender: 800,
            descender: -200,
            units_per_em: 1000,
        }
    }
}

/// One glyph of a loaded font.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlyphRecord {
    /// Glyph index in the font
    pub index: u16,
    /// Primary (lowest) code point mapped to this glyph
    pub unicode: Option<u32>,
    /// Every code point mapped to this glyph, ascending
    pub unicodes: Vec<u32>,
    /// Glyph name from the font's post/CFF tables
    pub name: Option<String>,
    /// Display name: Unicode character name, glyph name, or "Private Use"
    pub unicode_name: String,
}

impl GlyphRecord {
    /// Build a record and resolve its display name.
    pub fn new(index: u16, unicodes: Vec<u32>, name: Option<String>) -> Self {
        let unicode = unicodes.first().copied();
        let unicode_name = resolve_display_name(unicode, name.as_deref());
        Self {
            index,
            unicode,
            unicodes,
            name,
            unicode_name,
        }
    }

    /// Upper-case hex of the code point, zero-padded to four digits.
    pub fn hex(&self) -> Option<String> {
        self.unicode.map(|cp| format!("{cp:04X}"))
    }

    /// `U+0041` style label, or `No Unicode`.
    pub fn label(&self) -> String {
        self.hex()
            .map_or_else(|| "No Unicode".to_string(), |h| format!("U+{h}"))
    }

    /// The character this glyph encodes, if any.
    pub fn character(&self) -> Option<char> {
        self.unicode.and_then(char::from_u32)
    }

    /// Name used in export file names: display name, then glyph name, then `glyph_<index>`.
    pub fn export_name(&self) -> String {
        if !self.unicode_name.is_empty() {
            return self.unicode_name.clone();
        }
        self.name
            .clone()
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| format!("glyph_{}", self.index))
    }
}

fn resolve_display_name(unicode: Option<u32>, glyph_name: Option<&str>) -> String {
    if let Some(name) = unicode
        .and_then(char::from_u32)
        .and_then(unicode_names2::name)
    {
        return name.to_string();
    }

    glyph_name
        .filter(|n| !n.is_empty())
        .map_or_else(|| "Private Use".to_string(), str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_and_label() {
        let g = GlyphRecord::new(36, vec![0x41], Some("A".into()));
        assert_eq!(g.hex().as_deref(), Some("0041"));
        assert_eq!(g.label(), "U+0041");
        assert_eq!(g.character(), Some('A'));
    }

    #[test]
    fn test_label_without_unicode() {
        let g = GlyphRecord::new(300, vec![], Some("f_f_i".into()));
        assert_eq!(g.label(), "No Unicode");
        assert!(g.hex().is_none());
        assert_eq!(g.unicode_name, "f_f_i");
    }

    #[test]
    fn test_display_name_from_unicode_table() {
        let g = GlyphRecord::new(36, vec![0x41], Some("A".into()));
        assert_eq!(g.unicode_name, "LATIN CAPITAL LETTER A");
    }

    #[test]
    fn test_display_name_private_use_fallback() {
        let g = GlyphRecord::new(5, vec![0xE000], None);
        assert_eq!(g.unicode_name, "Private Use");
    }

    #[test]
    fn test_primary_unicode_is_first() {
        let g = GlyphRecord::new(3, vec![0x20, 0xA0], Some("space".into()));
        assert_eq!(g.unicode, Some(0x20));
        assert_eq!(g.unicodes.len(), 2);
    }

    #[test]
    fn test_baseline_ratio() {
        let m = FontMetrics { ascender: 800, descender: -200, units_per_em: 1000 };
        assert!((m.baseline_ratio().unwrap() - 0.8).abs() < 1e-9);
        let flat = FontMetrics { ascender: 0, descender: 0, units_per_em: 1000 };
        assert!(flat.baseline_ratio().is_none());
    }
}
