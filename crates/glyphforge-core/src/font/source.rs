use std::sync::Arc;

use super::path::GlyphPath;
use super::record::FontMetrics;

/// Access to glyph outlines and advance widths.
///
/// This is the seam to the font-parsing collaborator. [`FontDocument`]
/// implements it on top of ttf-parser; tests plug in synthetic fonts.
///
/// [`FontDocument`]: super::FontDocument
pub trait OutlineSource: Send + Sync {
    /// Vertical metrics and units per em
    fn metrics(&self) -> FontMetrics;

    /// Font design units per em
    fn units_per_em(&self) -> u16 {
        self.metrics().units_per_em
    }

    /// Number of glyphs in the font
    fn glyph_count(&self) -> usize;

    /// Outline of a glyph in font units (Y up).
    ///
    /// `None` when the index is out of range or the glyph has no outline.
    fn outline(&self, glyph: u16) -> Option<Arc<GlyphPath>>;

    /// Horizontal advance in font units
    fn advance_width(&self, glyph: u16) -> Option<u16>;

    /// Glyph index for a character via the font's cmap
    fn glyph_index(&self, c: char) -> Option<u16>;
}
