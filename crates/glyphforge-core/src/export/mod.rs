//! Glyph export: SVG/PNG archives, subsets, sprite sheets, CSS and specimens.

pub mod archive;
pub mod css;
pub mod naming;
pub mod raster;
pub mod sprite;
pub mod specimen;
pub mod subset;
pub mod svg;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::blocks::FilterMode;
use crate::cache::{CacheKey, RenderCache};
use crate::config::ExportConfig;
use crate::error::{Error, Result};
use crate::font::{GlyphRecord, OutlineSource};
use crate::settings::{GlyphSettings, SettingsModel};

pub use archive::{ArchiveBuilder, folder_name};
pub use naming::FileNamer;
pub use sprite::{SpriteOptions, SpriteSheet, SpriteTile};
pub use specimen::{
    Align, Arrangement, Fit, LayerStyle, Panel, Specimen, SpecimenLayer, SpecimenOptions,
};
pub use subset::SubsetFont;

/// Which files each glyph produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Svg,
    Png,
    Both,
}

impl ExportFormat {
    pub const fn includes_svg(self) -> bool {
        matches!(self, Self::Svg | Self::Both)
    }

    pub const fn includes_png(self) -> bool {
        matches!(self, Self::Png | Self::Both)
    }
}

/// Which glyphs an export covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportScope {
    /// Every glyph of the font
    All,
    /// Glyphs matching the current search
    Filtered,
    Selection,
    Block(String),
    /// Glyphs flagged by the last clipping scan
    Errors,
    /// One page of the paginated view (1-based)
    Page(usize),
}

impl ExportScope {
    /// Label used in the archive folder name.
    pub const fn label(&self, mode: FilterMode) -> &'static str {
        match self {
            Self::Selection => "selected",
            _ => mode.as_str(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub png_scale: f32,
    pub filename_pattern: String,
    pub ligature_pattern: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self::from(&ExportConfig::default())
    }
}

impl From<&ExportConfig> for ExportOptions {
    fn from(config: &ExportConfig) -> Self {
        Self {
            format: config.format,
            png_scale: config.png_scale,
            filename_pattern: config.filename_pattern.clone(),
            ligature_pattern: config.ligature_pattern.clone(),
        }
    }
}

/// Font data an export draws from.
#[derive(Clone, Copy)]
pub struct ExportSource<'a> {
    pub outlines: &'a dyn OutlineSource,
    /// Display name, used in folder and file names
    pub font_name: &'a str,
    /// Content hash, used in render cache keys
    pub cache_id: &'a str,
}

impl ExportSource<'_> {
    /// SVG for one glyph under the given settings.
    pub fn glyph_svg(&self, index: u16, settings: &GlyphSettings) -> String {
        let outline = self.outlines.outline(index);
        svg::glyph_svg(outline.as_deref(), self.outlines.metrics(), settings)
    }

    /// PNG for one glyph, served from `cache` when possible.
    pub async fn glyph_png(
        &self,
        index: u16,
        settings: &GlyphSettings,
        scale: f32,
        cache: &RenderCache,
    ) -> Result<Vec<u8>> {
        let key = CacheKey::new(self.cache_id, index, settings, scale);
        if let Some(png) = cache.get(&key).await {
            return Ok(png);
        }
        let png = raster::svg_to_png_async(self.glyph_svg(index, settings), scale).await?;
        cache.insert(&key, png.clone()).await;
        Ok(png)
    }
}

/// A finished zip archive.
#[derive(Debug, Clone)]
pub struct ExportArchive {
    /// `<folder>.zip`
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub glyph_count: usize,
    pub file_count: usize,
    /// Glyphs whose PNG could not be produced
    pub skipped: Vec<u16>,
}

/// Progress callback: `(done, total)`.
pub type ProgressFn = Box<dyn Fn(usize, usize) + Send + Sync>;

/// Render `targets` into a zip archive under `<fontName>_<label>_glyphs/`.
///
/// Each glyph uses its effective settings. A PNG that fails to render is
/// logged and left out; the glyph's SVG (if requested) is still written.
#[allow(clippy::too_many_arguments)]
pub async fn export_archive(
    source: ExportSource<'_>,
    targets: &[GlyphRecord],
    settings: &SettingsModel,
    mode: FilterMode,
    label: &str,
    options: &ExportOptions,
    cache: &RenderCache,
    progress: Option<&ProgressFn>,
) -> Result<ExportArchive> {
    if targets.is_empty() {
        return Err(Error::EmptyExport);
    }

    let folder = folder_name(source.font_name, label);
    let mut builder = ArchiveBuilder::new(folder.clone())?;
    let mut namer = FileNamer::new(
        source.font_name,
        options.filename_pattern.clone(),
        options.ligature_pattern.clone(),
        mode,
    );
    let mut skipped = Vec::new();

    for (done, glyph) in targets.iter().enumerate() {
        let s = settings.effective(glyph.index);
        let base = namer.name_for(glyph);
        let svg_doc = source.glyph_svg(glyph.index, s);

        if options.format.includes_svg() {
            builder.add_file(&format!("{base}.svg"), svg_doc.as_bytes())?;
        }

        if options.format.includes_png() {
            match source.glyph_png(glyph.index, s, options.png_scale, cache).await {
                Ok(png) => builder.add_file(&format!("{base}.png"), &png)?,
                Err(e) => {
                    warn!("Skipping PNG for glyph {} ({}): {}", glyph.index, glyph.label(), e);
                    skipped.push(glyph.index);
                }
            }
        }

        if let Some(cb) = progress {
            cb(done + 1, targets.len());
        }
    }

    if options.format.includes_png()
        && let Err(e) = cache.flush()
    {
        warn!("Failed to flush render cache: {}", e);
    }

    let file_count = builder.len();
    let bytes = builder.finish()?;
    info!(
        "Exported {} glyphs ({} files) to {}.zip",
        targets.len(),
        file_count,
        folder
    );

    Ok(ExportArchive {
        file_name: format!("{folder}.zip"),
        bytes,
        glyph_count: targets.len(),
        file_count,
        skipped,
    })
}

/// Rasterize a sprite sheet, caching the result.
pub async fn sheet_png(
    source: ExportSource<'_>,
    sheet: &SpriteSheet,
    scale: f32,
    cache: &RenderCache,
) -> Result<Vec<u8>> {
    let key = CacheKey::for_sheet(source.cache_id, &sheet.svg, scale);
    if let Some(png) = cache.get(&key).await {
        return Ok(png);
    }
    let png = raster::svg_to_png_async(sheet.svg.clone(), scale).await?;
    cache.insert(&key, png.clone()).await;
    Ok(png)
}
