//! Sprite sheets: many glyphs packed into one image.

use serde::Serialize;
use svg::Document;

use super::svg::{SVG_NS, glyph_element};
use crate::error::{Error, Result};
use crate::font::{GlyphRecord, OutlineSource};
use crate::settings::SettingsModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpriteOptions {
    /// Tiles per row; `None` picks a near-square grid
    pub columns: Option<usize>,
    /// Pixels between tiles
    pub gap: u32,
}

/// Where one glyph sits on the sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpriteTile {
    pub index: u16,
    /// Code point as upper-case hex, when the glyph has one
    pub hex: Option<String>,
    pub name: String,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// A packed sheet as SVG plus its tile map.
#[derive(Debug, Clone)]
pub struct SpriteSheet {
    pub svg: String,
    pub width: u32,
    pub height: u32,
    pub columns: usize,
    pub tiles: Vec<SpriteTile>,
}

impl SpriteSheet {
    /// Tile map as pretty JSON.
    pub fn map_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.tiles).map_err(|e| Error::Archive(e.to_string()))
    }
}

/// `ceil(sqrt(n))`, at least 1.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn default_columns(count: usize) -> usize {
    ((count as f64).sqrt().ceil() as usize).max(1)
}

/// Pack glyphs row by row into a grid of equal cells.
///
/// Each cell is as large as the biggest canvas among the glyphs; every
/// glyph is drawn with its own effective settings at the cell's top-left.
pub fn build_sheet(
    source: &dyn OutlineSource,
    glyphs: &[GlyphRecord],
    settings: &SettingsModel,
    options: SpriteOptions,
) -> Result<SpriteSheet> {
    if glyphs.is_empty() {
        return Err(Error::EmptyExport);
    }

    let columns = options.columns.filter(|&c| c > 0).unwrap_or_else(|| default_columns(glyphs.len()));
    let rows = glyphs.len().div_ceil(columns);

    let (cell_w, cell_h) = glyphs.iter().fold((1, 1), |(w, h), g| {
        let s = settings.effective(g.index);
        (w.max(s.canvas_width), h.max(s.canvas_height))
    });

    let span = |cells: usize, cell: u32| -> u32 {
        let cells = u32::try_from(cells).unwrap_or(u32::MAX);
        cells
            .saturating_mul(cell)
            .saturating_add(cells.saturating_sub(1).saturating_mul(options.gap))
    };
    let width = span(columns.min(glyphs.len()), cell_w);
    let height = span(rows, cell_h);

    let metrics = source.metrics();
    let mut doc = Document::new()
        .set("xmlns", SVG_NS)
        .set("width", width)
        .set("height", height)
        .set("viewBox", (0, 0, width, height));
    let mut tiles = Vec::with_capacity(glyphs.len());

    for (i, glyph) in glyphs.iter().enumerate() {
        let col = u32::try_from(i % columns).unwrap_or(u32::MAX);
        let row = u32::try_from(i / columns).unwrap_or(u32::MAX);
        let x = col.saturating_mul(cell_w.saturating_add(options.gap));
        let y = row.saturating_mul(cell_h.saturating_add(options.gap));
        let s = settings.effective(glyph.index);

        let outline = source.outline(glyph.index);
        doc = doc.add(
            glyph_element(outline.as_deref(), metrics, s)
                .set("x", x)
                .set("y", y),
        );

        tiles.push(SpriteTile {
            index: glyph.index,
            hex: glyph.hex(),
            name: glyph.export_name(),
            x,
            y,
            width: s.canvas_width,
            height: s.canvas_height,
        });
    }

    Ok(SpriteSheet {
        svg: doc.to_string(),
        width,
        height,
        columns,
        tiles,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{FontMetrics, GlyphPath, PathCommand};
    use crate::settings::SettingChange;
    use std::sync::Arc;

    struct Dots;

    impl OutlineSource for Dots {
        fn metrics(&self) -> FontMetrics {
            FontMetrics::default()
        }

        fn glyph_count(&self) -> usize {
            100
        }

        fn outline(&self, _glyph: u16) -> Option<Arc<GlyphPath>> {
            Some(Arc::new(GlyphPath::from_commands(vec![
                PathCommand::MoveTo { x: 0.0, y: 0.0 },
                PathCommand::LineTo { x: 100.0, y: 0.0 },
                PathCommand::LineTo { x: 100.0, y: 100.0 },
                PathCommand::Close,
            ])))
        }

        fn advance_width(&self, _glyph: u16) -> Option<u16> {
            Some(100)
        }

        fn glyph_index(&self, _c: char) -> Option<u16> {
            None
        }
    }

    fn glyphs(n: u16) -> Vec<GlyphRecord> {
        (1..=n).map(|i| GlyphRecord::new(i, vec![0x40 + u32::from(i)], None)).collect()
    }

    #[test]
    fn test_default_columns() {
        assert_eq!(default_columns(1), 1);
        assert_eq!(default_columns(4), 2);
        assert_eq!(default_columns(5), 3);
        assert_eq!(default_columns(0), 1);
    }

    #[test]
    fn test_grid_layout() {
        let sheet = build_sheet(&Dots, &glyphs(5), &SettingsModel::default(), SpriteOptions { columns: None, gap: 4 }).unwrap();
        assert_eq!(sheet.columns, 3);
        assert_eq!((sheet.width, sheet.height), (308, 204));
        assert_eq!((sheet.tiles[4].x, sheet.tiles[4].y), (104, 104));
        assert_eq!(sheet.svg.matches("<path").count(), 5);
    }

    #[test]
    fn test_cell_fits_largest_canvas() {
        let mut settings = SettingsModel::default();
        settings.apply(&[2], &SettingChange::CanvasWidth(150)).unwrap();
        let sheet = build_sheet(&Dots, &glyphs(2), &settings, SpriteOptions { columns: Some(2), gap: 0 }).unwrap();
        assert_eq!(sheet.width, 300);
        assert_eq!(sheet.tiles[1].x, 150);
        assert_eq!(sheet.tiles[1].width, 150);
    }

    #[test]
    fn test_huge_gap_saturates() {
        let options = SpriteOptions { columns: Some(2), gap: u32::MAX };
        let sheet = build_sheet(&Dots, &glyphs(3), &SettingsModel::default(), options).unwrap();
        assert_eq!(sheet.width, u32::MAX);
        assert_eq!((sheet.tiles[1].x, sheet.tiles[2].y), (u32::MAX, u32::MAX));
    }

    #[test]
    fn test_map_json() {
        let sheet = build_sheet(&Dots, &glyphs(1), &SettingsModel::default(), SpriteOptions::default()).unwrap();
        let json = sheet.map_json().unwrap();
        assert!(json.contains("\"hex\": \"0041\""));
    }

    #[test]
    fn test_empty_rejected() {
        assert!(matches!(
            build_sheet(&Dots, &[], &SettingsModel::default(), SpriteOptions::default()),
            Err(Error::EmptyExport)
        ));
    }
}
