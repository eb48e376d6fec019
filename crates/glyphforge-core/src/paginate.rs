//! Fixed-size pagination of block buckets.

use serde::Serialize;

use crate::blocks::{BlockBucket, format_range};
use crate::font::GlyphRecord;

/// Glyphs per page when browsing every block at once.
pub const DEFAULT_PER_PAGE: usize = 600;

/// A slice of one block shown on a page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageSection {
    /// Block name, suffixed with ` (Start)` or ` (Cont.)` when the block is split
    pub name: String,
    /// Range of the whole block, not just this slice
    pub range: Option<(u32, u32)>,
    pub glyphs: Vec<GlyphRecord>,
}

impl PageSection {
    pub fn range_label(&self) -> String {
        format_range(self.range)
    }
}

/// One page of the browsing view.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Page {
    pub sections: Vec<PageSection>,
}

impl Page {
    /// Number of glyphs on the page.
    pub fn len(&self) -> usize {
        self.sections.iter().map(|s| s.glyphs.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.iter().all(|s| s.glyphs.is_empty())
    }

    /// Glyphs on the page in display order.
    pub fn glyphs(&self) -> impl Iterator<Item = &GlyphRecord> {
        self.sections.iter().flat_map(|s| s.glyphs.iter())
    }
}

/// Pack buckets into pages of at most `per_page` glyphs.
///
/// Buckets are consumed in order and split when they overflow the current
/// page. A `per_page` of zero is treated as one.
pub fn paginate(buckets: &[BlockBucket], per_page: usize) -> Vec<Page> {
    let per_page = per_page.max(1);
    let mut pages = Vec::new();
    let mut current = Page::default();
    let mut room = per_page;

    for bucket in buckets.iter().filter(|b| !b.is_empty()) {
        let mut offset = 0;
        while offset < bucket.len() {
            let take = room.min(bucket.len() - offset);
            let split = take < bucket.len();
            let name = match (split, offset) {
                (false, _) => bucket.name.clone(),
                (true, 0) => format!("{} (Start)", bucket.name),
                (true, _) => format!("{} (Cont.)", bucket.name),
            };

            current.sections.push(PageSection {
                name,
                range: bucket.range,
                glyphs: bucket.glyphs[offset..offset + take].to_vec(),
            });
            offset += take;
            room -= take;

            if room == 0 {
                pages.push(std::mem::take(&mut current));
                room = per_page;
            }
        }
    }

    if !current.is_empty() {
        pages.push(current);
    }
    pages
}
