//! Integration tests for glyphforge-core
//!
//! These tests drive a whole session against an in-memory font:
//! - Browsing (filter modes, search, blocks, pages)
//! - Settings edits with undo/redo
//! - Clipping scans, immediate and scheduled
//! - Archive export and session persistence

use std::collections::BTreeSet;
use std::io::{Cursor, Read};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use glyphforge_core::{
    AppConfig, Error, ExportFormat, ExportOptions, ExportScope, FilterMode, FontMetrics,
    GlyphForge, GlyphPath, GlyphRecord, LoadedFont, OutlineSource, Paint, RenderCache, ScanJob,
    ScanOutcome, SessionFile, SettingChange, SpriteOptions, ViewMode,
    config::CacheConfig,
    font::PathCommand,
};

// =============================================================================
// Mock Font for Testing
// =============================================================================

/// Index of the glyph drawn twice as tall as the em box.
const TALL: u16 = 5;

/// An in-memory font: `.notdef`, `A`, `B`, `é`, an unencoded ligature and
/// one oversized CJK glyph.
struct MockFont;

impl MockFont {
    fn records() -> Vec<GlyphRecord> {
        vec![
            GlyphRecord::new(0, vec![], Some(".notdef".into())),
            GlyphRecord::new(1, vec![0x41], Some("A".into())),
            GlyphRecord::new(2, vec![0x42], Some("B".into())),
            GlyphRecord::new(3, vec![0xE9], Some("eacute".into())),
            GlyphRecord::new(4, vec![], Some("f_f_i".into())),
            GlyphRecord::new(TALL, vec![0x4E00], Some("uni4E00".into())),
        ]
    }

    fn loaded() -> LoadedFont {
        LoadedFont::from_source("Mock Sans", Arc::new(Self), Self::records())
    }
}

fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> GlyphPath {
    GlyphPath::from_commands(vec![
        PathCommand::MoveTo { x: x0, y: y0 },
        PathCommand::LineTo { x: x1, y: y0 },
        PathCommand::LineTo { x: x1, y: y1 },
        PathCommand::LineTo { x: x0, y: y1 },
        PathCommand::Close,
    ])
}

impl OutlineSource for MockFont {
    fn metrics(&self) -> FontMetrics {
        FontMetrics::default()
    }

    fn glyph_count(&self) -> usize {
        6
    }

    fn outline(&self, glyph: u16) -> Option<Arc<GlyphPath>> {
        match glyph {
            1..=4 => Some(Arc::new(rect(100.0, 0.0, 600.0, 700.0))),
            TALL => Some(Arc::new(rect(100.0, -200.0, 600.0, 1800.0))),
            _ => None,
        }
    }

    fn advance_width(&self, glyph: u16) -> Option<u16> {
        (usize::from(glyph) < self.glyph_count()).then_some(700)
    }

    fn glyph_index(&self, c: char) -> Option<u16> {
        match c {
            'A' => Some(1),
            'B' => Some(2),
            'é' => Some(3),
            '一' => Some(TALL),
            _ => None,
        }
    }
}

// =============================================================================
// Test Fixtures
// =============================================================================

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

fn forge() -> GlyphForge {
    let mut forge = GlyphForge::with_cache(test_config(), RenderCache::disabled());
    forge.add_font(MockFont::loaded());
    forge
}

fn indices(glyphs: &[GlyphRecord]) -> Vec<u16> {
    glyphs.iter().map(|g| g.index).collect()
}

fn zip_entries(bytes: &[u8]) -> Vec<String> {
    let archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    archive.file_names().map(str::to_string).collect()
}

// =============================================================================
// Browsing Tests
// =============================================================================

#[test]
fn test_empty_session_has_no_font() {
    let forge = GlyphForge::with_cache(test_config(), RenderCache::disabled());
    assert!(matches!(forge.active_font(), Err(Error::NoFont)));
    assert!(matches!(forge.filtered_glyphs(), Err(Error::NoFont)));
}

#[test]
fn test_filter_mode_controls_unencoded_glyphs() {
    let mut forge = forge();
    assert_eq!(indices(&forge.filtered_glyphs().unwrap()), [1, 2, 3, TALL]);

    forge.set_filter_mode(FilterMode::All);
    assert_eq!(indices(&forge.filtered_glyphs().unwrap()), [0, 1, 2, 3, 4, TALL]);
}

#[test]
fn test_search_narrows_blocks() {
    let mut forge = forge();
    let names: Vec<String> = forge.blocks().unwrap().into_iter().map(|b| b.name).collect();
    assert_eq!(names, ["Basic Latin", "Latin-1 Supplement", "CJK Unified Ideographs"]);

    forge.set_search("latin");
    let names: Vec<String> = forge.blocks().unwrap().into_iter().map(|b| b.name).collect();
    assert_eq!(names, ["Basic Latin", "Latin-1 Supplement"]);

    forge.set_search("4e00");
    assert_eq!(indices(&forge.filtered_glyphs().unwrap()), [TALL]);
}

#[test]
fn test_views() {
    let mut forge = forge();
    assert_eq!(forge.view(), &ViewMode::All(1));
    assert_eq!(forge.visible_glyphs().unwrap().len(), 4);

    forge.set_view(ViewMode::Block("Basic Latin".into())).unwrap();
    assert_eq!(indices(&forge.visible_glyphs().unwrap()), [1, 2]);

    assert!(matches!(
        forge.set_view(ViewMode::All(3)),
        Err(Error::InvalidPage { page: 3, total: 1 })
    ));
    assert!(matches!(
        forge.set_view(ViewMode::Block("Arabic".into())),
        Err(Error::UnknownBlock(_))
    ));
    // Failed changes leave the view alone
    assert_eq!(forge.view(), &ViewMode::Block("Basic Latin".into()));
}

#[test]
fn test_selection_toggle() {
    let mut forge = forge();
    forge.toggle_selection(1, false);
    forge.toggle_selection(2, false);
    assert_eq!(forge.selection(), &BTreeSet::from([2]));

    forge.toggle_selection(3, true);
    assert_eq!(forge.selection(), &BTreeSet::from([2, 3]));

    forge.toggle_selection(2, true);
    assert_eq!(forge.selection(), &BTreeSet::from([3]));
}

// =============================================================================
// Settings & History Tests
// =============================================================================

#[test]
fn test_global_edit_and_undo() {
    let mut forge = forge();
    forge.apply_setting(&SettingChange::Scale(0.5)).unwrap();
    assert!((forge.settings().global().scale - 0.5).abs() < 1e-9);

    assert!(forge.undo());
    assert!((forge.settings().global().scale - 0.85).abs() < 1e-9);

    assert!(forge.redo());
    assert!((forge.settings().global().scale - 0.5).abs() < 1e-9);
    assert!(!forge.redo());
}

#[test]
fn test_selection_edit_creates_overrides() {
    let mut forge = forge();
    forge.select([1, 3]);
    forge
        .apply_setting(&SettingChange::Color(Paint::Rgb(255, 0, 0)))
        .unwrap();

    assert!(forge.settings().has_override(1));
    assert!(forge.settings().has_override(3));
    assert!(!forge.settings().has_override(2));
    assert_eq!(forge.settings().effective(1).color, Paint::Rgb(255, 0, 0));
    assert_eq!(forge.settings().global().color, Paint::BLACK);
}

#[test]
fn test_invalid_edit_is_rejected_without_history() {
    let mut forge = forge();
    let steps = forge.history().len();
    assert!(forge.apply_setting(&SettingChange::Padding(100.0)).is_err());
    assert_eq!(forge.history().len(), steps);
    assert!((forge.settings().global().padding - 10.0).abs() < 1e-9);
}

#[test]
fn test_history_is_bounded() {
    let mut forge = forge();
    for i in 1..=20 {
        forge
            .apply_setting(&SettingChange::Rotate(f64::from(i)))
            .unwrap();
    }
    assert_eq!(forge.history().len(), forge.config().history_limit);

    let mut undone = 0;
    while forge.undo() {
        undone += 1;
    }
    assert_eq!(undone, forge.config().history_limit - 1);
    assert!((forge.settings().global().rotate - 11.0).abs() < 1e-9);
}

#[test]
fn test_remove_earlier_font_keeps_active_font() {
    let mut forge = forge();
    forge.add_font(LoadedFont::from_source("B Sans", Arc::new(MockFont), MockFont::records()));
    forge.add_font(LoadedFont::from_source("C Sans", Arc::new(MockFont), MockFont::records()));
    forge.switch_font(1).unwrap();
    forge.select([1]);

    let removed = forge.remove_font(0).unwrap();
    assert_eq!(removed.name(), "Mock Sans");
    assert_eq!(forge.active_index(), 0);
    assert_eq!(forge.active_font().unwrap().name(), "B Sans");
    assert_eq!(forge.selection(), &BTreeSet::from([1]));

    // Later fonts don't move the active index either
    forge.remove_font(1).unwrap();
    assert_eq!(forge.active_font().unwrap().name(), "B Sans");
    assert_eq!(forge.selection(), &BTreeSet::from([1]));
}

#[test]
fn test_remove_active_font_clears_selection() {
    let mut forge = forge();
    forge.add_font(LoadedFont::from_source("B Sans", Arc::new(MockFont), MockFont::records()));
    forge.select([1]);

    forge.remove_font(0).unwrap();
    assert_eq!(forge.active_font().unwrap().name(), "B Sans");
    assert!(forge.selection().is_empty());

    forge.remove_font(0).unwrap();
    assert!(matches!(forge.active_font(), Err(Error::NoFont)));
    assert!(matches!(
        forge.remove_font(0),
        Err(Error::FontIndex { index: 0, total: 0 })
    ));
}

#[test]
fn test_switch_font_clears_overrides_and_selection() {
    let mut forge = forge();
    forge.add_font(MockFont::loaded());
    forge.select([1]);
    forge.apply_setting(&SettingChange::Scale(0.3)).unwrap();

    forge.switch_font(1).unwrap();
    assert_eq!(forge.active_index(), 1);
    assert!(forge.selection().is_empty());
    assert!(forge.settings().overrides().is_empty());

    assert!(matches!(
        forge.switch_font(7),
        Err(Error::FontIndex { index: 7, total: 2 })
    ));
}

#[test]
fn test_glyph_position_rejects_non_finite() {
    let mut forge = forge();
    let steps = forge.history().len();
    assert!(forge.set_glyph_position(2, f64::NAN, 0.0).is_err());
    assert!(forge.set_glyph_position(2, 0.0, f64::INFINITY).is_err());
    assert!(!forge.settings().has_override(2));
    assert_eq!(forge.history().len(), steps);
}

#[test]
fn test_reset_restores_defaults() {
    let mut forge = forge();
    forge.apply_setting(&SettingChange::Scale(0.4)).unwrap();
    forge.set_glyph_position(2, 5.0, -5.0).unwrap();

    forge.reset();
    assert_eq!(forge.settings().global(), &forge.config().defaults);
    assert!(forge.settings().overrides().is_empty());

    // Reset itself can be undone
    assert!(forge.undo());
    assert!(forge.settings().has_override(2));
}

// =============================================================================
// Clipping Tests
// =============================================================================

#[tokio::test]
async fn test_scan_flags_oversized_glyph() {
    let mut forge = forge();
    let outcome = forge.scan(&ScanJob::new()).await.unwrap();
    assert_eq!(outcome, ScanOutcome::Completed(BTreeSet::from([TALL])));

    forge.set_view(ViewMode::Errors).unwrap();
    assert_eq!(indices(&forge.visible_glyphs().unwrap()), [TALL]);
    assert_eq!(indices(&forge.resolve_scope(&ExportScope::Errors).unwrap()), [TALL]);
}

#[tokio::test]
async fn test_auto_fit_resolves_clipping() {
    let mut forge = forge();
    forge.scan(&ScanJob::new()).await.unwrap();
    forge.select([TALL]);

    assert_eq!(forge.auto_fit().unwrap(), 1);
    forge.scan(&ScanJob::new()).await.unwrap();
    assert!(forge.errors().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_scheduled_scan_supersedes_previous() {
    let mut forge = forge();
    let first = forge.schedule_scan().unwrap();
    let second = forge.schedule_scan().unwrap();

    first.wait().await;
    second.wait().await;

    assert!(first.is_cancelled());
    assert_eq!(first.result().await, None);
    assert!(forge.apply_scan_result(&second).await);
    assert_eq!(forge.errors(), &BTreeSet::from([TALL]));
    assert!(!forge.apply_scan_result(&first).await);
}

// =============================================================================
// Editing Tests
// =============================================================================

#[test]
fn test_delete_block_removes_its_glyphs() {
    let mut forge = forge();
    forge.set_view(ViewMode::Block("Basic Latin".into())).unwrap();

    assert_eq!(forge.delete_block("Basic Latin").unwrap(), 2);
    assert_eq!(indices(&forge.filtered_glyphs().unwrap()), [3, TALL]);
    // The emptied block is no longer viewable
    assert_eq!(forge.view(), &ViewMode::All(1));
    assert!(matches!(
        forge.delete_block("Basic Latin"),
        Err(Error::UnknownBlock(_))
    ));
}

// =============================================================================
// Export Tests
// =============================================================================

#[tokio::test]
async fn test_export_svg_archive() {
    let forge = forge();
    let archive = forge
        .export(&ExportScope::Filtered, &ExportOptions::default(), None)
        .await
        .unwrap();

    assert_eq!(archive.file_name, "Mock_Sans_unicode_glyphs.zip");
    assert_eq!(archive.glyph_count, 4);
    let entries = zip_entries(&archive.bytes);
    assert!(entries.contains(&"Mock_Sans_unicode_glyphs/U+0041.svg".to_string()));
    assert!(entries.contains(&"Mock_Sans_unicode_glyphs/U+4E00.svg".to_string()));
}

#[tokio::test]
async fn test_export_all_follows_filter_mode() {
    let mut forge = forge();
    let archive = forge
        .export(&ExportScope::All, &ExportOptions::default(), None)
        .await
        .unwrap();
    assert_eq!(archive.glyph_count, 4);
    let entries = zip_entries(&archive.bytes);
    assert!(!entries.iter().any(|e| e.contains("U+NONE")));

    forge.set_filter_mode(FilterMode::All);
    assert_eq!(forge.resolve_scope(&ExportScope::All).unwrap().len(), 6);
}

#[test]
fn test_selection_scope_follows_filter_mode() {
    let mut forge = forge();
    forge.select([0, 1, 4]);
    assert_eq!(indices(&forge.resolve_scope(&ExportScope::Selection).unwrap()), [1]);

    forge.set_filter_mode(FilterMode::All);
    assert_eq!(
        indices(&forge.resolve_scope(&ExportScope::Selection).unwrap()),
        [0, 1, 4]
    );
}

#[tokio::test]
async fn test_export_selection_png_with_progress() {
    let mut forge = forge();
    forge.select([1, 2]);
    let options = ExportOptions {
        format: ExportFormat::Both,
        ..Default::default()
    };

    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let progress: glyphforge_core::ProgressFn = Box::new(move |done, total| {
        assert!(done <= total);
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let archive = forge
        .export(&ExportScope::Selection, &options, Some(&progress))
        .await
        .unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert!(archive.skipped.is_empty());

    let mut zip = zip::ZipArchive::new(Cursor::new(archive.bytes)).unwrap();
    let mut png = Vec::new();
    zip.by_name("Mock_Sans_selected_glyphs/U+0042.png")
        .unwrap()
        .read_to_end(&mut png)
        .unwrap();
    let img = image::load_from_memory(&png).unwrap();
    assert_eq!((img.width(), img.height()), (100, 100));
}

#[tokio::test]
async fn test_export_uses_disk_cache() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = test_config();
    config.cache = CacheConfig {
        memory_enabled: false,
        disk_enabled: true,
        disk_path: Some(dir.path().join("renders")),
        ..Default::default()
    };
    let mut forge = GlyphForge::new(config).unwrap();
    forge.add_font(MockFont::loaded());
    let options = ExportOptions {
        format: ExportFormat::Png,
        png_scale: 2.0,
        ..Default::default()
    };

    forge.set_filter_mode(FilterMode::All);
    let first = forge.export(&ExportScope::All, &options, None).await.unwrap();
    assert_eq!(first.file_count, 6);
    let second = forge.export(&ExportScope::All, &options, None).await.unwrap();
    assert_eq!(second.file_count, 6);
    assert_eq!(forge.clear_cache().unwrap(), 6);
}

#[tokio::test]
async fn test_sprite_png_tracks_layout() {
    let mut config = test_config();
    config.cache = CacheConfig {
        memory_enabled: true,
        disk_enabled: false,
        ..Default::default()
    };
    let mut forge = GlyphForge::new(config).unwrap();
    forge.add_font(MockFont::loaded());

    for (columns, size) in [(1, (100, 400)), (4, (400, 100))] {
        let sheet = forge
            .sprite(
                &ExportScope::Filtered,
                SpriteOptions {
                    columns: Some(columns),
                    gap: 0,
                },
            )
            .unwrap();
        assert_eq!((sheet.width, sheet.height), size);

        let png = forge.sprite_png(&sheet, 1.0).await.unwrap();
        let img = image::load_from_memory(&png).unwrap();
        assert_eq!((img.width(), img.height()), size);
    }
}

#[tokio::test]
async fn test_export_empty_scope_fails() {
    let forge = forge();
    let result = forge
        .export(&ExportScope::Selection, &ExportOptions::default(), None)
        .await;
    assert!(matches!(result, Err(Error::EmptyExport)));
}

#[test]
fn test_subset_needs_font_file() {
    let forge = forge();
    assert!(matches!(forge.subset(&[1], "AB"), Err(Error::Subset(_))));
}

#[test]
fn test_specimen_lays_out_text() {
    let forge = forge();
    let specimen = forge.specimen("AB\né", &Default::default()).unwrap();
    assert!(specimen.svg.contains("<path"));
    assert!(specimen.height > 0);
}

// =============================================================================
// Persistence Tests
// =============================================================================

#[test]
fn test_session_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    let mut forge = forge();
    forge.set_filter_mode(FilterMode::All);
    forge.select([4]);
    forge.apply_setting(&SettingChange::Rotate(15.0)).unwrap();
    forge.to_session_file().save(&path).unwrap();

    let file = SessionFile::load(&path).unwrap();
    let mut restored = GlyphForge::with_cache(test_config(), RenderCache::disabled());
    restored.add_font(MockFont::loaded());
    restored.restore_state(file).unwrap();

    assert_eq!(restored.filter_mode(), FilterMode::All);
    assert_eq!(restored.selection(), &BTreeSet::from([4]));
    assert!((restored.settings().effective(4).rotate - 15.0).abs() < 1e-9);
    assert!(restored.undo());
    assert!(!restored.settings().has_override(4));
}

#[test]
fn test_restore_rejects_non_finite_settings() {
    let forge = forge();
    let mut file = forge.to_session_file();
    file.settings.global.rotate = f64::INFINITY;

    let mut restored = GlyphForge::with_cache(test_config(), RenderCache::disabled());
    restored.add_font(MockFont::loaded());
    restored.select([1]);
    assert!(matches!(
        restored.restore_state(file),
        Err(Error::InvalidSetting { .. })
    ));
    // Nothing was applied
    assert_eq!(restored.selection(), &BTreeSet::from([1]));
    assert_eq!(restored.settings().global(), &restored.config().defaults);
}

#[test]
fn test_session_file_load_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(matches!(SessionFile::load(&path), Err(Error::Session(_))));
    assert!(matches!(
        SessionFile::load(dir.path().join("missing.json")),
        Err(Error::Session(_))
    ));
}
