//! Browsing and editing state for a set of loaded fonts.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::blocks::{self, BlockBucket, FilterMode};
use crate::cache::RenderCache;
use crate::config::AppConfig;
use crate::error::{Error, Result};
use crate::export::{
    self, Arrangement, ExportArchive, ExportOptions, ExportScope, ExportSource, LayerStyle,
    ProgressFn, Specimen, SpecimenLayer, SpecimenOptions, SpriteOptions, SpriteSheet, SubsetFont,
    css, specimen, sprite, subset,
};
use crate::font::{FontDocument, GlyphRecord, OutlineSource};
use crate::history::History;
use crate::paginate::{self, Page};
use crate::scan::{ClipScanner, ScanJob, ScanOutcome, ScanRequest, ScanScheduler};
use crate::search;
use crate::settings::{SettingChange, SettingsModel, SettingsSnapshot};

/// A font in the session, with its (possibly trimmed) glyph list.
#[derive(Clone)]
pub struct LoadedFont {
    name: String,
    file_name: String,
    cache_id: String,
    source: Arc<dyn OutlineSource>,
    document: Option<FontDocument>,
    glyphs: Vec<GlyphRecord>,
    /// Glyphs deleted from the list
    removed: BTreeSet<u16>,
}

impl LoadedFont {
    /// A font backed by an arbitrary outline source, without binary font data.
    ///
    /// Subsetting and `@font-face` output need the font file and are
    /// unavailable for such fonts.
    pub fn from_source(
        name: impl Into<String>,
        source: Arc<dyn OutlineSource>,
        glyphs: Vec<GlyphRecord>,
    ) -> Self {
        let name = name.into();
        Self {
            cache_id: format!("{:x}", md5::compute(name.as_bytes())),
            file_name: name.clone(),
            name,
            source,
            document: None,
            glyphs,
            removed: BTreeSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn glyphs(&self) -> &[GlyphRecord] {
        &self.glyphs
    }

    pub fn source(&self) -> &dyn OutlineSource {
        self.source.as_ref()
    }

    pub const fn document(&self) -> Option<&FontDocument> {
        self.document.as_ref()
    }

    pub const fn removed(&self) -> &BTreeSet<u16> {
        &self.removed
    }

    fn remove_glyphs(&mut self, indices: &BTreeSet<u16>) -> usize {
        let before = self.glyphs.len();
        self.glyphs.retain(|g| !indices.contains(&g.index));
        self.removed.extend(indices.iter().copied());
        before - self.glyphs.len()
    }

    fn export_source(&self) -> ExportSource<'_> {
        ExportSource {
            outlines: self.source.as_ref(),
            font_name: &self.name,
            cache_id: &self.cache_id,
        }
    }

    fn require_document(&self) -> Result<&FontDocument> {
        self.document
            .as_ref()
            .ok_or_else(|| Error::Subset(format!("{} has no font file data", self.name)))
    }
}

impl From<FontDocument> for LoadedFont {
    fn from(doc: FontDocument) -> Self {
        Self {
            name: doc.name().to_string(),
            file_name: doc.file_name().to_string(),
            cache_id: doc.cache_id().to_string(),
            glyphs: doc.glyphs().to_vec(),
            source: Arc::new(doc.clone()),
            document: Some(doc),
            removed: BTreeSet::new(),
        }
    }
}

impl std::fmt::Debug for LoadedFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadedFont")
            .field("name", &self.name)
            .field("glyphs", &self.glyphs.len())
            .finish_non_exhaustive()
    }
}

/// What the glyph grid shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "view", content = "value")]
pub enum ViewMode {
    /// Every block, paginated (1-based page)
    All(usize),
    /// One block by name
    Block(String),
    /// Glyphs flagged by the last scan
    Errors,
}

impl Default for ViewMode {
    fn default() -> Self {
        Self::All(1)
    }
}

/// A font file in a saved session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionFont {
    pub path: PathBuf,
    /// Glyphs deleted from the list
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub removed: BTreeSet<u16>,
}

/// Settings, history and view state persisted between CLI invocations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionFile {
    #[serde(default)]
    pub fonts: Vec<SessionFont>,
    #[serde(default)]
    pub active: usize,
    #[serde(default)]
    pub filter_mode: FilterMode,
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub selection: BTreeSet<u16>,
    pub settings: SettingsSnapshot,
    pub history: History<SettingsSnapshot>,
    #[serde(default)]
    pub errors: BTreeSet<u16>,
}

impl SessionFile {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Session(format!("cannot read {}: {e}", path.display())))?;
        serde_json::from_str(&content)
            .map_err(|e| Error::Session(format!("cannot parse {}: {e}", path.display())))
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json =
            serde_json::to_string_pretty(self).map_err(|e| Error::Session(e.to_string()))?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)?;
        debug!("Saved session to {}", path.display());
        Ok(())
    }
}

/// The glyph workbench: loaded fonts, view, selection, settings and history.
pub struct GlyphForge {
    config: AppConfig,
    fonts: Vec<LoadedFont>,
    font_paths: Vec<Option<PathBuf>>,
    active: usize,
    filter_mode: FilterMode,
    search: String,
    view: ViewMode,
    selection: BTreeSet<u16>,
    settings: SettingsModel,
    history: History<SettingsSnapshot>,
    errors: BTreeSet<u16>,
    cache: RenderCache,
    scheduler: ScanScheduler,
}

impl GlyphForge {
    /// Create a session, opening the render cache from the configuration.
    pub fn new(config: AppConfig) -> Result<Self> {
        let cache = RenderCache::new(&config.cache)?;
        Ok(Self::with_cache(config, cache))
    }

    /// Create a session with an existing cache.
    pub fn with_cache(config: AppConfig, cache: RenderCache) -> Self {
        let settings = SettingsModel::new(config.defaults.clone());
        let history = History::new(settings.snapshot(), config.history_limit);
        let scheduler = ScanScheduler::new(
            ClipScanner::new(config.scan.batch_size, config.scan.tolerance),
            Duration::from_millis(config.scan.debounce_ms),
        );

        Self {
            config,
            fonts: Vec::new(),
            font_paths: Vec::new(),
            active: 0,
            filter_mode: FilterMode::default(),
            search: String::new(),
            view: ViewMode::default(),
            selection: BTreeSet::new(),
            settings,
            history,
            errors: BTreeSet::new(),
            cache,
            scheduler,
        }
    }

    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    // ------------------------------------------------------------------
    // Fonts
    // ------------------------------------------------------------------

    /// Parse and add a font file.
    pub fn open_font(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let doc = FontDocument::from_file(path)?;
        let index = self.add_font(LoadedFont::from(doc));
        self.font_paths[index] = Some(path.to_path_buf());
        Ok(index)
    }

    /// Add a font and return its index.
    ///
    /// The active font is unchanged unless this is the first one. Overrides,
    /// clipping results, the search term and the view are reset, and the
    /// change is recorded in history.
    pub fn add_font(&mut self, font: LoadedFont) -> usize {
        info!("Added font {} ({} glyphs)", font.name, font.glyphs.len());
        self.fonts.push(font);
        self.font_paths.push(None);
        if self.fonts.len() == 1 {
            self.active = 0;
        }

        self.errors.clear();
        self.settings.clear_overrides();
        self.search.clear();
        self.view = ViewMode::default();
        self.commit();
        self.fonts.len() - 1
    }

    /// Make another font active. Clears the selection and overrides.
    pub fn switch_font(&mut self, index: usize) -> Result<()> {
        if index >= self.fonts.len() {
            return Err(Error::FontIndex {
                index,
                total: self.fonts.len(),
            });
        }
        self.active = index;
        self.selection.clear();
        self.errors.clear();
        self.view = ViewMode::default();
        self.settings.clear_overrides();
        self.commit();
        Ok(())
    }

    /// Remove a font.
    ///
    /// Removing a font before the active one keeps the same font active.
    /// Removing the active font activates its neighbour and drops the
    /// selection, clipping results, view and overrides.
    pub fn remove_font(&mut self, index: usize) -> Result<LoadedFont> {
        if index >= self.fonts.len() {
            return Err(Error::FontIndex {
                index,
                total: self.fonts.len(),
            });
        }
        let removed = self.fonts.remove(index);
        self.font_paths.remove(index);

        if index < self.active {
            self.active -= 1;
        } else if index == self.active {
            self.active = self.active.min(self.fonts.len().saturating_sub(1));
            self.selection.clear();
            self.errors.clear();
            self.view = ViewMode::default();
            self.settings.clear_overrides();
            self.commit();
        }
        info!("Removed font {}", removed.name);
        Ok(removed)
    }

    pub fn fonts(&self) -> &[LoadedFont] {
        &self.fonts
    }

    pub const fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_font(&self) -> Result<&LoadedFont> {
        self.fonts.get(self.active).ok_or(Error::NoFont)
    }

    fn active_font_mut(&mut self) -> Result<&mut LoadedFont> {
        self.fonts.get_mut(self.active).ok_or(Error::NoFont)
    }

    // ------------------------------------------------------------------
    // Browsing
    // ------------------------------------------------------------------

    pub const fn filter_mode(&self) -> FilterMode {
        self.filter_mode
    }

    pub fn set_filter_mode(&mut self, mode: FilterMode) {
        if mode != self.filter_mode {
            self.filter_mode = mode;
            self.view = ViewMode::default();
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        if matches!(self.view, ViewMode::All(_)) {
            self.view = ViewMode::default();
        }
    }

    /// Glyphs matching the search term under the current filter mode.
    pub fn filtered_glyphs(&self) -> Result<Vec<GlyphRecord>> {
        let font = self.active_font()?;
        let mode = self.filter_mode;
        Ok(search::filter(&font.glyphs, &self.search)
            .into_iter()
            .filter(|g| mode.includes(g))
            .collect())
    }

    pub fn blocks(&self) -> Result<Vec<BlockBucket>> {
        Ok(blocks::classify(&self.filtered_glyphs()?, self.filter_mode))
    }

    pub fn pages(&self) -> Result<Vec<Page>> {
        Ok(paginate::paginate(
            &self.blocks()?,
            self.config.pagination.per_page,
        ))
    }

    pub const fn view(&self) -> &ViewMode {
        &self.view
    }

    /// Change the view, checking the page number or block name.
    pub fn set_view(&mut self, view: ViewMode) -> Result<()> {
        match &view {
            ViewMode::All(page) => {
                let total = self.pages()?.len();
                if *page == 0 || (*page > total && total > 0) {
                    return Err(Error::InvalidPage { page: *page, total });
                }
            }
            ViewMode::Block(name) => {
                if !self.blocks()?.iter().any(|b| &b.name == name) {
                    return Err(Error::UnknownBlock(name.clone()));
                }
            }
            ViewMode::Errors => {}
        }
        self.view = view;
        Ok(())
    }

    /// Glyphs shown by the current view.
    pub fn visible_glyphs(&self) -> Result<Vec<GlyphRecord>> {
        match &self.view {
            ViewMode::Errors => self.error_glyphs(),
            ViewMode::Block(name) => Ok(self
                .blocks()?
                .into_iter()
                .find(|b| &b.name == name)
                .map(|b| b.glyphs)
                .unwrap_or_default()),
            ViewMode::All(page) => Ok(self
                .pages()?
                .get(page.saturating_sub(1))
                .map(|p| p.glyphs().cloned().collect())
                .unwrap_or_default()),
        }
    }

    fn error_glyphs(&self) -> Result<Vec<GlyphRecord>> {
        let font = self.active_font()?;
        Ok(font
            .glyphs
            .iter()
            .filter(|g| self.errors.contains(&g.index))
            .cloned()
            .collect())
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    pub const fn selection(&self) -> &BTreeSet<u16> {
        &self.selection
    }

    /// Toggle a glyph. Without `multi`, selecting replaces the selection.
    pub fn toggle_selection(&mut self, index: u16, multi: bool) {
        if !self.selection.remove(&index) {
            if !multi {
                self.selection.clear();
            }
            self.selection.insert(index);
        }
    }

    pub fn select(&mut self, indices: impl IntoIterator<Item = u16>) {
        self.selection.extend(indices);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    // ------------------------------------------------------------------
    // Settings and history
    // ------------------------------------------------------------------

    pub const fn settings(&self) -> &SettingsModel {
        &self.settings
    }

    pub const fn history(&self) -> &History<SettingsSnapshot> {
        &self.history
    }

    /// Apply a change to the selection (or the global settings) without recording history.
    pub fn update_setting(&mut self, change: &SettingChange) -> Result<()> {
        let selection: Vec<u16> = self.selection.iter().copied().collect();
        self.settings.apply(&selection, change)
    }

    /// Record the current settings as a history step.
    pub fn commit(&mut self) {
        self.history.push(self.settings.snapshot());
    }

    /// [`update_setting`](Self::update_setting) followed by [`commit`](Self::commit).
    pub fn apply_setting(&mut self, change: &SettingChange) -> Result<()> {
        self.update_setting(change)?;
        self.commit();
        Ok(())
    }

    /// Move one glyph and record the step.
    pub fn set_glyph_position(
        &mut self,
        index: u16,
        translate_x: f64,
        translate_y: f64,
    ) -> Result<()> {
        self.settings
            .set_glyph_position(index, translate_x, translate_y)?;
        self.commit();
        Ok(())
    }

    pub fn undo(&mut self) -> bool {
        let Some(snap) = self.history.undo() else {
            return false;
        };
        self.settings.restore(snap);
        true
    }

    pub fn redo(&mut self) -> bool {
        let Some(snap) = self.history.redo() else {
            return false;
        };
        self.settings.restore(snap);
        true
    }

    /// Restore the configured defaults and drop all overrides.
    pub fn reset(&mut self) {
        self.settings.reset(self.config.defaults.clone());
        self.commit();
    }

    /// Auto-fit the selection, or the visible glyphs when nothing is selected.
    pub fn auto_fit(&mut self) -> Result<usize> {
        let targets: Vec<u16> = if self.selection.is_empty() {
            self.visible_glyphs()?.iter().map(|g| g.index).collect()
        } else {
            self.selection.iter().copied().collect()
        };
        if targets.is_empty() {
            return Ok(0);
        }

        let source = Arc::clone(&self.active_font()?.source);
        let fitted = self.settings.auto_fit(targets, source.as_ref());
        self.commit();
        Ok(fitted)
    }

    // ------------------------------------------------------------------
    // Editing the glyph list
    // ------------------------------------------------------------------

    /// Remove glyphs from the active font's list. Returns how many were removed.
    pub fn delete_glyphs(&mut self, indices: &BTreeSet<u16>) -> Result<usize> {
        let removed = self.active_font_mut()?.remove_glyphs(indices);

        self.selection.clear();
        if let ViewMode::Block(name) = &self.view
            && !self.blocks()?.iter().any(|b| &b.name == name)
        {
            self.view = ViewMode::default();
        }
        if let ViewMode::All(page) = self.view {
            let total = self.pages()?.len().max(1);
            if page > total {
                self.view = ViewMode::All(total);
            }
        }
        info!("Removed {} glyphs", removed);
        Ok(removed)
    }

    /// Remove every glyph of a block.
    pub fn delete_block(&mut self, name: &str) -> Result<usize> {
        let bucket = self
            .blocks()?
            .into_iter()
            .find(|b| b.name == name)
            .ok_or_else(|| Error::UnknownBlock(name.to_string()))?;
        let indices: BTreeSet<u16> = bucket.glyphs.iter().map(|g| g.index).collect();
        self.delete_glyphs(&indices)
    }

    // ------------------------------------------------------------------
    // Clipping
    // ------------------------------------------------------------------

    pub const fn errors(&self) -> &BTreeSet<u16> {
        &self.errors
    }

    fn scan_request(&self) -> Result<ScanRequest> {
        let font = self.active_font()?;
        Ok(ScanRequest {
            source: Arc::clone(&font.source),
            glyphs: font.glyphs.clone(),
            settings: self.settings.clone(),
            mode: self.filter_mode,
        })
    }

    /// Scan the active font now and store the result.
    pub async fn scan(&mut self, job: &ScanJob) -> Result<ScanOutcome> {
        let request = self.scan_request()?;
        let scanner = ClipScanner::new(self.config.scan.batch_size, self.config.scan.tolerance);
        let outcome = scanner
            .scan(
                request.source.as_ref(),
                &request.glyphs,
                &request.settings,
                request.mode,
                job,
            )
            .await;
        if let ScanOutcome::Completed(errors) = &outcome {
            self.errors.clone_from(errors);
        }
        Ok(outcome)
    }

    /// Start a debounced background scan, cancelling any pending one.
    ///
    /// Apply the result with [`apply_scan_result`](Self::apply_scan_result)
    /// once the job completes.
    pub fn schedule_scan(&self) -> Result<Arc<ScanJob>> {
        Ok(self.scheduler.schedule(self.scan_request()?))
    }

    /// Store the result of a finished background scan.
    pub async fn apply_scan_result(&mut self, job: &ScanJob) -> bool {
        match job.result().await {
            Some(errors) if !job.is_cancelled() => {
                self.errors = errors;
                true
            }
            _ => false,
        }
    }

    // ------------------------------------------------------------------
    // Export
    // ------------------------------------------------------------------

    /// Glyphs covered by an export scope.
    pub fn resolve_scope(&self, scope: &ExportScope) -> Result<Vec<GlyphRecord>> {
        let font = self.active_font()?;
        let mode = self.filter_mode;
        match scope {
            ExportScope::All => Ok(font
                .glyphs
                .iter()
                .filter(|g| mode.includes(g))
                .cloned()
                .collect()),
            ExportScope::Filtered => self.filtered_glyphs(),
            ExportScope::Selection => Ok(font
                .glyphs
                .iter()
                .filter(|g| mode.includes(g) && self.selection.contains(&g.index))
                .cloned()
                .collect()),
            ExportScope::Block(name) => self
                .blocks()?
                .into_iter()
                .find(|b| &b.name == name)
                .map(|b| b.glyphs)
                .ok_or_else(|| Error::UnknownBlock(name.clone())),
            ExportScope::Errors => self.error_glyphs(),
            ExportScope::Page(page) => {
                let pages = self.pages()?;
                pages
                    .get(page.saturating_sub(1))
                    .filter(|_| *page > 0)
                    .map(|p| p.glyphs().cloned().collect())
                    .ok_or(Error::InvalidPage {
                        page: *page,
                        total: pages.len(),
                    })
            }
        }
    }

    /// Export a scope to a zip archive.
    pub async fn export(
        &self,
        scope: &ExportScope,
        options: &ExportOptions,
        progress: Option<&ProgressFn>,
    ) -> Result<ExportArchive> {
        let targets = self.resolve_scope(scope)?;
        let font = self.active_font()?;
        export::export_archive(
            font.export_source(),
            &targets,
            &self.settings,
            self.filter_mode,
            scope.label(self.filter_mode),
            options,
            &self.cache,
            progress,
        )
        .await
    }

    /// SVG for one glyph with its effective settings.
    pub fn glyph_svg(&self, index: u16) -> Result<String> {
        let font = self.active_font()?;
        let total = font.source.glyph_count();
        if usize::from(index) >= total {
            return Err(Error::GlyphNotFound { index, total });
        }
        Ok(font
            .export_source()
            .glyph_svg(index, self.settings.effective(index)))
    }

    /// PNG for one glyph with its effective settings.
    pub async fn glyph_png(&self, index: u16, scale: f32) -> Result<Vec<u8>> {
        let font = self.active_font()?;
        let total = font.source.glyph_count();
        if usize::from(index) >= total {
            return Err(Error::GlyphNotFound { index, total });
        }
        font.export_source()
            .glyph_png(index, self.settings.effective(index), scale, &self.cache)
            .await
    }

    /// Subset the active font to the given glyphs and characters.
    pub fn subset(&self, glyphs: &[u16], text: &str) -> Result<SubsetFont> {
        let font = self.active_font()?;
        let doc = font.require_document()?;
        let keep = subset::collect_glyphs(font.source(), glyphs, text)?;
        subset::subset_font(doc.sfnt_bytes(), &keep)
    }

    pub fn sprite(&self, scope: &ExportScope, options: SpriteOptions) -> Result<SpriteSheet> {
        let targets = self.resolve_scope(scope)?;
        let font = self.active_font()?;
        sprite::build_sheet(font.source(), &targets, &self.settings, options)
    }

    pub async fn sprite_png(&self, sheet: &SpriteSheet, scale: f32) -> Result<Vec<u8>> {
        let font = self.active_font()?;
        export::sheet_png(font.export_source(), sheet, scale, &self.cache).await
    }

    /// `@font-face` plus one class per encoded glyph in the scope.
    pub fn font_css(&self, scope: &ExportScope, prefix: &str) -> Result<String> {
        let targets = self.resolve_scope(scope)?;
        let font = self.active_font()?;
        let doc = font.require_document()?;
        Ok(css::font_stylesheet(
            &font.name,
            prefix,
            doc.sfnt_bytes(),
            doc.sfnt_extension(),
            &targets,
        ))
    }

    /// Specimen of the active font in `options.color`.
    pub fn specimen(&self, text: &str, options: &SpecimenOptions) -> Result<Specimen> {
        let layer = SpecimenLayer {
            source: self.active_font()?.source(),
            color: options.color,
            opacity: 1.0,
        };
        specimen::render_specimen(&[layer], text, options)
    }

    /// Specimen comparing loaded fonts.
    ///
    /// `styles` picks the fonts and their drawing order. When empty, every
    /// font is drawn in load order: stacked panels use `options.color`,
    /// overlays use palette colors at reduced opacity.
    pub fn compare_specimen(
        &self,
        text: &str,
        options: &SpecimenOptions,
        styles: &[LayerStyle],
    ) -> Result<Specimen> {
        if self.fonts.is_empty() {
            return Err(Error::NoFont);
        }
        let defaults: Vec<LayerStyle> = if styles.is_empty() {
            (0..self.fonts.len())
                .map(|font| match options.arrangement {
                    Arrangement::Overlay => LayerStyle::auto(font),
                    Arrangement::Stacked => LayerStyle {
                        font,
                        color: options.color,
                        opacity: 1.0,
                    },
                })
                .collect()
        } else {
            Vec::new()
        };
        let styles = if styles.is_empty() { defaults.as_slice() } else { styles };

        let layers = styles
            .iter()
            .map(|style| {
                let font = self.fonts.get(style.font).ok_or(Error::FontIndex {
                    index: style.font,
                    total: self.fonts.len(),
                })?;
                Ok(SpecimenLayer {
                    source: font.source(),
                    color: style.color,
                    opacity: style.opacity,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        specimen::render_specimen(&layers, text, options)
    }

    pub fn clear_cache(&self) -> Result<usize> {
        self.cache.clear()
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    pub fn to_session_file(&self) -> SessionFile {
        SessionFile {
            fonts: self
                .fonts
                .iter()
                .zip(&self.font_paths)
                .filter_map(|(font, path)| {
                    path.as_ref().map(|path| SessionFont {
                        path: path.clone(),
                        removed: font.removed.clone(),
                    })
                })
                .collect(),
            active: self.active,
            filter_mode: self.filter_mode,
            search: self.search.clone(),
            selection: self.selection.clone(),
            settings: self.settings.snapshot(),
            history: self.history.clone(),
            errors: self.errors.clone(),
        }
    }

    /// Rebuild a session: reopen its fonts, then restore state.
    pub fn from_session_file(config: AppConfig, file: SessionFile) -> Result<Self> {
        let mut forge = Self::new(config)?;
        forge.load_fonts_from(&file)?;
        forge.restore_state(file)?;
        Ok(forge)
    }

    fn load_fonts_from(&mut self, file: &SessionFile) -> Result<()> {
        for entry in &file.fonts {
            let index = self.open_font(&entry.path)?;
            if !entry.removed.is_empty() {
                self.fonts[index].remove_glyphs(&entry.removed);
            }
        }
        Ok(())
    }

    /// Restore view and settings state from a session file (fonts untouched).
    ///
    /// The settings and every history step are validated first; on error
    /// nothing is changed.
    pub fn restore_state(&mut self, file: SessionFile) -> Result<()> {
        file.settings.validate()?;
        for step in file.history.iter() {
            step.validate()?;
        }
        if file.history.cursor() >= file.history.len() {
            return Err(Error::Session("history cursor out of range".to_string()));
        }

        self.active = file.active.min(self.fonts.len().saturating_sub(1));
        self.filter_mode = file.filter_mode;
        self.search = file.search;
        self.selection = file.selection;
        self.settings.restore(file.settings);
        self.history = file.history;
        self.errors = file.errors;
        self.view = ViewMode::default();
        Ok(())
    }
}

impl std::fmt::Debug for GlyphForge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlyphForge")
            .field("fonts", &self.fonts)
            .field("active", &self.active)
            .field("filter_mode", &self.filter_mode)
            .field("view", &self.view)
            .field("selection", &self.selection.len())
            .field("errors", &self.errors.len())
            .finish_non_exhaustive()
    }
}
