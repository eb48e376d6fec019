//! Unicode block classification.
//!
//! Glyphs are bucketed by the Unicode block their primary code point falls
//! in. Glyphs with no code point (ligatures, alternates, .notdef) or with
//! a code point outside every block land in a catch-all bucket that is
//! only shown when unencoded glyphs are part of the view.

mod table;

use serde::{Deserialize, Serialize};

use crate::font::GlyphRecord;

pub use table::UNICODE_BLOCKS;

/// Name of the catch-all bucket.
pub const OTHER_BLOCK_NAME: &str = "Other / Ligatures";

/// A contiguous, named code point range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnicodeBlock {
    pub name: &'static str,
    pub start: u32,
    pub end: u32,
}

impl UnicodeBlock {
    pub const fn new(name: &'static str, start: u32, end: u32) -> Self {
        Self { name, start, end }
    }

    pub const fn contains(&self, cp: u32) -> bool {
        cp >= self.start && cp <= self.end
    }
}

/// Which glyphs take part in browsing, scanning and export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// Only glyphs mapped to a code point
    #[default]
    Unicode,
    /// Every glyph, including unencoded ones
    All,
}

impl FilterMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unicode => "unicode",
            Self::All => "all",
        }
    }

    /// Whether a glyph takes part under this mode.
    pub const fn includes(self, glyph: &GlyphRecord) -> bool {
        match self {
            Self::Unicode => glyph.unicode.is_some(),
            Self::All => true,
        }
    }
}

impl std::fmt::Display for FilterMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Glyphs grouped under one block (or the catch-all bucket).
#[derive(Debug, Clone, PartialEq)]
pub struct BlockBucket {
    pub name: String,
    /// Inclusive code point range; `None` for the catch-all bucket
    pub range: Option<(u32, u32)>,
    pub glyphs: Vec<GlyphRecord>,
}

impl BlockBucket {
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Human readable range, e.g. `U+0000 – U+007F`.
    pub fn range_label(&self) -> String {
        format_range(self.range)
    }
}

/// Look up the block containing a code point.
pub fn block_for(cp: u32) -> Option<&'static UnicodeBlock> {
    block_index(cp).map(|idx| &UNICODE_BLOCKS[idx])
}

fn block_index(cp: u32) -> Option<usize> {
    let idx = UNICODE_BLOCKS.partition_point(|b| b.end < cp);
    UNICODE_BLOCKS
        .get(idx)
        .is_some_and(|b| b.contains(cp))
        .then_some(idx)
}

/// Format a block range as `U+XXXX – U+XXXX`, or the catch-all label.
pub fn format_range(range: Option<(u32, u32)>) -> String {
    match range {
        Some((start, end)) => format!("U+{start:04X} – U+{end:04X}"),
        None => "Ligatures / Others".to_string(),
    }
}

/// Partition glyphs into block buckets.
///
/// Buckets come out in block-table order with empty ones dropped. In
/// [`FilterMode::Unicode`] unencoded glyphs are excluded up front; in
/// [`FilterMode::All`] they are collected into a trailing
/// [`OTHER_BLOCK_NAME`] bucket.
pub fn classify(glyphs: &[GlyphRecord], mode: FilterMode) -> Vec<BlockBucket> {
    let mut per_block: Vec<Vec<GlyphRecord>> = vec![Vec::new(); UNICODE_BLOCKS.len()];
    let mut other = Vec::new();

    for glyph in glyphs.iter().filter(|g| mode.includes(g)) {
        match glyph.unicode.and_then(block_index) {
            Some(idx) => per_block[idx].push(glyph.clone()),
            None => other.push(glyph.clone()),
        }
    }

    let mut buckets: Vec<BlockBucket> = UNICODE_BLOCKS
        .iter()
        .zip(per_block)
        .filter(|(_, glyphs)| !glyphs.is_empty())
        .map(|(block, glyphs)| BlockBucket {
            name: block.name.to_string(),
            range: Some((block.start, block.end)),
            glyphs,
        })
        .collect();

    if !other.is_empty() && mode == FilterMode::All {
        buckets.push(BlockBucket {
            name: OTHER_BLOCK_NAME.to_string(),
            range: None,
            glyphs: other,
        });
    }

    buckets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyph(index: u16, cp: Option<u32>) -> GlyphRecord {
        GlyphRecord::new(index, cp.into_iter().collect(), Some(format!("g{index}")))
    }

    #[test]
    fn test_table_is_sorted_and_disjoint() {
        for pair in UNICODE_BLOCKS.windows(2) {
            assert!(pair[0].end < pair[1].start, "{} overlaps {}", pair[0].name, pair[1].name);
        }
    }

    #[test]
    fn test_block_lookup() {
        assert_eq!(block_for(0x41).unwrap().name, "Basic Latin");
        assert_eq!(block_for(0xE9).unwrap().name, "Latin-1 Supplement");
        assert_eq!(block_for(0x0995).unwrap().name, "Bengali");
        assert!(block_for(0x0870_0000).is_none());
    }

    #[test]
    fn test_classify_unicode_mode_drops_unencoded() {
        let glyphs = vec![glyph(1, Some(0x41)), glyph(2, None), glyph(3, Some(0x0995))];
        let buckets = classify(&glyphs, FilterMode::Unicode);
        let names: Vec<_> = buckets.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["Basic Latin", "Bengali"]);
    }

    #[test]
    fn test_classify_all_mode_appends_catch_all() {
        let glyphs = vec![glyph(2, None), glyph(1, Some(0x41)), glyph(3, None)];
        let buckets = classify(&glyphs, FilterMode::All);
        assert_eq!(buckets.len(), 2);
        let other = buckets.last().unwrap();
        assert_eq!(other.name, OTHER_BLOCK_NAME);
        assert_eq!(other.range, None);
        assert_eq!(other.len(), 2);
    }

    #[test]
    fn test_classify_keeps_glyph_order_within_block() {
        let glyphs = vec![glyph(5, Some(0x43)), glyph(4, Some(0x41))];
        let buckets = classify(&glyphs, FilterMode::Unicode);
        let order: Vec<_> = buckets[0].glyphs.iter().map(|g| g.index).collect();
        assert_eq!(order, [5, 4]);
    }

    #[test]
    fn test_format_range() {
        assert_eq!(format_range(Some((0, 0x7F))), "U+0000 – U+007F");
        assert_eq!(format_range(None), "Ligatures / Others");
    }

    #[test]
    fn test_filter_mode_serde() {
        assert_eq!(serde_json::to_string(&FilterMode::All).unwrap(), "\"all\"");
    }
}
