//! Font subsetting.

use std::collections::BTreeSet;

use subsetter::GlyphRemapper;
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::font::{OutlineSource, sfnt_extension};

/// A subset font and how old glyph ids map to new ones.
#[derive(Debug, Clone)]
pub struct SubsetFont {
    pub bytes: Vec<u8>,
    /// `(old, new)` pairs in ascending old-id order
    pub mapping: Vec<(u16, u16)>,
    /// File extension matching the outline flavor (`otf` for CFF, else `ttf`)
    pub extension: &'static str,
}

/// Glyph ids to keep: `.notdef`, the given indices, and the glyphs of `text`.
///
/// Characters the font does not map are logged and skipped.
pub fn collect_glyphs(source: &dyn OutlineSource, glyphs: &[u16], text: &str) -> Result<BTreeSet<u16>> {
    let total = source.glyph_count();
    let mut keep = BTreeSet::from([0u16]);

    for &index in glyphs {
        if usize::from(index) >= total {
            return Err(Error::GlyphNotFound { index, total });
        }
        keep.insert(index);
    }

    for c in text.chars().filter(|c| !c.is_control()) {
        match source.glyph_index(c) {
            Some(index) => {
                keep.insert(index);
            }
            None => warn!("Font has no glyph for {:?} (U+{:04X})", c, u32::from(c)),
        }
    }

    Ok(keep)
}

/// Subset `sfnt` to the given glyphs.
pub fn subset_font(sfnt: &[u8], keep: &BTreeSet<u16>) -> Result<SubsetFont> {
    let mut remapper = GlyphRemapper::new();
    let mapping: Vec<(u16, u16)> = keep.iter().map(|&old| (old, remapper.remap(old))).collect();

    let bytes =
        subsetter::subset(sfnt, 0, &remapper).map_err(|e| Error::Subset(e.to_string()))?;

    info!(
        "Subset {} glyphs: {} -> {} bytes",
        mapping.len(),
        sfnt.len(),
        bytes.len()
    );

    Ok(SubsetFont {
        extension: sfnt_extension(sfnt),
        bytes,
        mapping,
    })
}
