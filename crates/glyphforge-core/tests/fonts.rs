//! Tests against real font files
//!
//! `tests/fonts/demo.ttf` is a two-glyph TrueType font (`.notdef` and `A`);
//! `demo.woff` wraps the same tables. These tests cover:
//! - Parsing records, metrics, advances and the cmap
//! - WOFF unwrapping
//! - Subsetting and `@font-face` output on real sfnt data

use glyphforge_core::{
    AppConfig, Arrangement, ExportScope, FontDocument, FontFormat, GlyphForge, OutlineSource,
    RenderCache, SpecimenOptions, config::CacheConfig,
};

// =============================================================================
// Test Fixtures
// =============================================================================

const DEMO_TTF: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fonts/demo.ttf");
const DEMO_WOFF: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fonts/demo.woff");

fn test_config() -> AppConfig {
    AppConfig {
        cache: CacheConfig {
            memory_enabled: false,
            disk_enabled: false,
            ..Default::default()
        },
        ..Default::default()
    }
}

fn forge_with(paths: &[&str]) -> GlyphForge {
    let mut forge = GlyphForge::with_cache(test_config(), RenderCache::disabled());
    for path in paths {
        forge.open_font(path).unwrap();
    }
    forge
}

// =============================================================================
// Parsing Tests
// =============================================================================

#[test]
fn test_ttf_records_and_metrics() {
    let doc = FontDocument::from_file(DEMO_TTF).unwrap();
    assert_eq!(doc.format(), FontFormat::TrueType);
    assert_eq!(doc.name(), "demo");

    let metrics = doc.metrics();
    assert_eq!(
        (metrics.units_per_em, metrics.ascender, metrics.descender),
        (1000, 1024, -400)
    );

    let glyphs = doc.glyphs();
    assert_eq!(glyphs.len(), 2);
    // The cmap's 0xFFFF entry points at .notdef and is ignored
    assert!(glyphs[0].unicodes.is_empty());
    assert_eq!(glyphs[1].unicodes, [0x41]);
    assert_eq!(glyphs[1].unicode_name, "LATIN CAPITAL LETTER A");
}

#[test]
fn test_ttf_advances_and_cmap() {
    let doc = FontDocument::from_file(DEMO_TTF).unwrap();
    assert_eq!(doc.glyph_count(), 2);
    assert_eq!(doc.advance_width(0), Some(600));
    assert_eq!(doc.advance_width(1), Some(540));
    assert_eq!(doc.advance_width(2), None);

    assert_eq!(doc.glyph_index('A'), Some(1));
    assert_eq!(doc.glyph_index('B'), None);
}

#[test]
fn test_ttf_outline_bounds() {
    let doc = FontDocument::from_file(DEMO_TTF).unwrap();
    let bbox = doc.outline(1).unwrap().bounding_box().unwrap();
    assert_eq!((bbox.x0, bbox.y0, bbox.x1, bbox.y1), (6.0, 0.0, 541.0, 656.0));

    let notdef = doc.outline(0).unwrap().bounding_box().unwrap();
    assert_eq!((notdef.x0, notdef.y0, notdef.x1, notdef.y1), (100.0, 0.0, 600.0, 700.0));
    assert!(doc.outline(2).is_none());
}

#[test]
fn test_woff_matches_ttf() {
    let ttf = FontDocument::from_file(DEMO_TTF).unwrap();
    let woff = FontDocument::from_file(DEMO_WOFF).unwrap();
    assert_eq!(woff.format(), FontFormat::Woff);

    assert_eq!(woff.glyphs(), ttf.glyphs());
    assert_eq!(woff.metrics(), ttf.metrics());
    for gid in 0..2 {
        assert_eq!(woff.advance_width(gid), ttf.advance_width(gid));
        assert_eq!(woff.outline(gid), ttf.outline(gid));
    }
    assert_eq!(woff.sfnt_extension(), "ttf");
    assert_ne!(woff.cache_id(), ttf.cache_id());
}

// =============================================================================
// Export Tests
// =============================================================================

#[test]
fn test_subset_real_font() {
    let forge = forge_with(&[DEMO_TTF]);
    let subset = forge.subset(&[], "A?").unwrap();

    assert_eq!(subset.mapping, [(0, 0), (1, 1)]);
    assert_eq!(subset.extension, "ttf");
    assert_eq!(subset.bytes[..4], [0, 1, 0, 0]);
}

#[test]
fn test_woff_css_embeds_unwrapped_sfnt() {
    let forge = forge_with(&[DEMO_WOFF]);
    let css = forge.font_css(&ExportScope::All, "icon").unwrap();

    assert!(css.contains("url(data:font/ttf;base64,AAEAAA"));
    assert!(css.contains(r#"format("truetype")"#));
    assert!(!css.contains("font/woff"));
    assert!(css.contains(".icon-0041::before"));
}

#[test]
fn test_glyph_svg_draws_outline() {
    let forge = forge_with(&[DEMO_TTF]);
    let svg = forge.glyph_svg(1).unwrap();
    assert!(svg.contains("<path"));
    assert!(forge.glyph_svg(2).is_err());
}

#[test]
fn test_compare_ttf_and_woff() {
    let forge = forge_with(&[DEMO_TTF, DEMO_WOFF]);

    let stacked = forge
        .compare_specimen("A", &SpecimenOptions::default(), &[])
        .unwrap();
    assert_eq!(stacked.panels.len(), 2);
    assert_eq!(stacked.height, stacked.panels[0].height * 2);

    let options = SpecimenOptions {
        arrangement: Arrangement::Overlay,
        ..Default::default()
    };
    let overlay = forge.compare_specimen("A", &options, &[]).unwrap();
    assert_eq!(overlay.panels.len(), 1);
    assert_eq!(overlay.width, stacked.width);
    assert_eq!(overlay.svg.matches("<path").count(), 2);
    assert_eq!(overlay.svg.matches(r#"fill-opacity="0.7""#).count(), 2);
}
