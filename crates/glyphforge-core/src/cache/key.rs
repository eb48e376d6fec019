use crate::settings::GlyphSettings;

/// Cache key for one rasterized glyph.
///
/// An MD5 hex digest over every input that affects the PNG bytes: the
/// font content id, glyph index, the full settings record and the output
/// scale. Changing any of them yields a new key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    hash: String,
}

impl CacheKey {
    pub fn new(font_id: impl AsRef<str>, glyph: u16, settings: &GlyphSettings, scale: f32) -> Self {
        // Settings serialize to a stable field order; fall back to Debug if that ever fails
        let settings_repr =
            serde_json::to_string(settings).unwrap_or_else(|_| format!("{settings:?}"));

        let combined = format!(
            "{}\0{}\0{}\0{}",
            font_id.as_ref(),
            glyph,
            settings_repr,
            scale,
        );

        Self {
            hash: format!("{:x}", md5::compute(combined.as_bytes())),
        }
    }

    /// Key for a whole sprite sheet.
    ///
    /// The sheet SVG already encodes the grid, the tile positions and every
    /// glyph's settings, so it stands in for all of them.
    pub fn for_sheet(font_id: impl AsRef<str>, sheet_svg: &str, scale: f32) -> Self {
        let svg_hash = md5::compute(sheet_svg.as_bytes());
        let combined = format!("sheet\0{}\0{}\0{:x}", font_id.as_ref(), scale, svg_hash);
        Self {
            hash: format!("{:x}", md5::compute(combined.as_bytes())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.hash
    }
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.hash)
    }
}
