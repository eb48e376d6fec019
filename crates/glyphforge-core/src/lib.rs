//! GlyphForge Core Library
//!
//! This library provides the core functionality for inspecting and exporting font glyphs:
//! - TrueType/OpenType/WOFF parsing and glyph enumeration
//! - Unicode block classification, search and pagination
//! - Per-glyph render settings with undo/redo
//! - Clipping detection against the export canvas
//! - SVG/PNG archives, font subsets, sprite sheets, CSS and specimens
//! - Render caching (memory and disk)

pub mod blocks;
pub mod cache;
pub mod config;
pub mod error;
pub mod export;
pub mod font;
pub mod history;
pub mod layout;
pub mod paginate;
pub mod scan;
pub mod search;
pub mod session;
pub mod settings;
pub mod util;

pub use blocks::{BlockBucket, FilterMode, UnicodeBlock};
pub use cache::{CacheKey, RenderCache};
pub use config::{AppConfig, CacheConfig, ExportConfig, PaginationConfig, ScanConfig};
pub use error::{Error, Result};
pub use export::{
    Arrangement, ExportArchive, ExportFormat, ExportOptions, ExportScope, Fit, LayerStyle,
    ProgressFn, Specimen, SpecimenOptions, SpriteOptions, SpriteSheet, SubsetFont,
};
pub use font::{FontDocument, FontFormat, FontMetrics, GlyphPath, GlyphRecord, OutlineSource};
pub use history::History;
pub use layout::{GlyphLayout, PaintStyle};
pub use paginate::{Page, PageSection};
pub use scan::{ClipScanner, ScanJob, ScanOutcome, ScanScheduler};
pub use session::{GlyphForge, LoadedFont, SessionFile, SessionFont, ViewMode};
pub use settings::{
    GlyphSettings, Paint, Positioning, Preset, RenderMode, SettingChange, SettingsModel,
    SettingsSnapshot,
};
pub use util::clear_render_cache;
