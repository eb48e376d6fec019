//! Subcommand handlers.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use glyphforge_core::export::raster;
use glyphforge_core::{
    AppConfig, ExportOptions, ExportScope, GlyphForge, GlyphRecord, ProgressFn, ScanJob,
    ScanOutcome, SessionFile, SpriteOptions, ViewMode, clear_render_cache,
};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use crate::{CacheAction, Command, FontArgs, ScopeArgs, SessionAction, SettingsArgs};

pub async fn run(config: AppConfig, command: Command) -> Result<()> {
    match command {
        Command::Info { font } => info_cmd(&open(config, &font)?),
        Command::Blocks { font } => blocks_cmd(&open(config, &font)?),
        Command::Search { font, query } => {
            let mut forge = open(config, &font)?;
            forge.set_search(query);
            let matches = forge.filtered_glyphs()?;
            for glyph in &matches {
                say(&glyph_line(glyph));
            }
            say(&format!("{} matches", matches.len()));
            Ok(())
        }
        Command::List { font, page, block } => {
            let mut forge = open(config, &font)?;
            let view = block.map_or(ViewMode::All(page), ViewMode::Block);
            forge.set_view(view)?;
            list_cmd(&forge)
        }
        Command::Scan {
            font,
            settings,
            json,
        } => {
            let mut forge = open(config, &font)?;
            apply_settings(&mut forge, &settings)?;
            scan_cmd(&mut forge, json).await
        }
        Command::Export {
            font,
            scope,
            settings,
            format,
            png_scale,
            pattern,
            ligature_pattern,
            output,
        } => {
            let mut forge = open(config, &font)?;
            apply_settings(&mut forge, &settings)?;
            select_glyphs(&mut forge, &scope.glyphs, false)?;

            let mut options = ExportOptions::from(&forge.config().export);
            if let Some(f) = format {
                options.format = f.into();
            }
            if let Some(s) = png_scale {
                options.png_scale = s;
            }
            if let Some(p) = pattern {
                options.filename_pattern = p;
            }
            if let Some(p) = ligature_pattern {
                options.ligature_pattern = p;
            }
            let dir = output
                .or_else(|| forge.config().export.output_dir.clone())
                .unwrap_or_else(|| PathBuf::from("."));
            export_cmd(&mut forge, &scope, &options, &dir).await
        }
        Command::Glyph {
            font,
            glyph,
            settings,
            png,
            output,
        } => {
            let mut forge = open(config, &font)?;
            apply_settings(&mut forge, &settings)?;
            let index = resolve_glyph(&forge, &glyph)?;
            match png {
                Some(scale) => {
                    let bytes = forge.glyph_png(index, scale).await?;
                    let path = output.unwrap_or_else(|| PathBuf::from(format!("glyph-{index}.png")));
                    write_file(&path, &bytes)
                }
                None => emit(output.as_deref(), forge.glyph_svg(index)?.as_bytes()),
            }
        }
        Command::Subset {
            font,
            glyphs,
            text,
            output,
        } => {
            let forge = open(config, &font)?;
            subset_cmd(&forge, &glyphs, text.as_deref().unwrap_or_default(), output)
        }
        Command::Sprite {
            font,
            scope,
            settings,
            columns,
            gap,
            png,
            output,
        } => {
            let mut forge = open(config, &font)?;
            apply_settings(&mut forge, &settings)?;
            select_glyphs(&mut forge, &scope.glyphs, false)?;
            sprite_cmd(&forge, &scope, SpriteOptions { columns, gap }, png, &output).await
        }
        Command::Css {
            font,
            scope,
            prefix,
            output,
        } => {
            let mut forge = open(config, &font)?;
            select_glyphs(&mut forge, &scope.glyphs, false)?;
            let css = forge.font_css(&scope.scope()?, &prefix)?;
            emit(output.as_deref(), css.as_bytes())
        }
        Command::Specimen {
            font,
            text,
            compare,
            style,
            png,
            output,
        } => {
            let mut forge = open(config, &font)?;
            let mut fonts = vec![forge.active_index()];
            for path in &compare {
                info!("Loading comparison font: {}", path.display());
                let index = forge
                    .open_font(path)
                    .context(format!("Failed to load font: {}", path.display()))?;
                fonts.push(index);
            }

            let specimen = forge.compare_specimen(
                &text.replace("\\n", "\n"),
                &style.options(),
                &style.styles(&fonts),
            )?;
            match png {
                Some(scale) => {
                    let bytes = raster::svg_to_png_async(specimen.svg, scale).await?;
                    let path = output.unwrap_or_else(|| PathBuf::from("specimen.png"));
                    write_file(&path, &bytes)
                }
                None => emit(output.as_deref(), specimen.svg.as_bytes()),
            }
        }
        Command::Session { file, action } => session_cmd(config, &file, action).await,
        Command::Cache {
            action: CacheAction::Clear,
        } => {
            let removed = clear_render_cache(&config.cache)?;
            say(&format!("Removed {removed} cached renders"));
            Ok(())
        }
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Build a session from a session file and/or a font file.
fn open(config: AppConfig, args: &FontArgs) -> Result<GlyphForge> {
    let mut forge = if let Some(path) = &args.session {
        let file = SessionFile::load(path)?;
        GlyphForge::from_session_file(config, file)
            .context(format!("Failed to restore session: {}", path.display()))?
    } else {
        GlyphForge::new(config).context("Failed to initialize render cache")?
    };

    if let Some(font) = &args.font {
        info!("Loading font: {}", font.display());
        let index = forge
            .open_font(font)
            .context(format!("Failed to load font: {}", font.display()))?;
        forge.switch_font(index)?;
    } else if forge.fonts().is_empty() {
        bail!("No font given: pass a font file or --session");
    }

    if let Some(mode) = args.mode {
        forge.set_filter_mode(mode.into());
    }
    if let Some(term) = &args.search {
        forge.set_search(term.clone());
    }
    Ok(forge)
}

/// Apply setting flags as one history step.
fn apply_settings(forge: &mut GlyphForge, settings: &SettingsArgs) -> Result<()> {
    let changes = settings.changes();
    if changes.is_empty() {
        return Ok(());
    }
    for change in &changes {
        forge.update_setting(change)?;
    }
    forge.commit();
    Ok(())
}

/// Resolve a glyph reference: `U+XXXX`, a glyph index, or a single character.
fn resolve_glyph(forge: &GlyphForge, reference: &str) -> Result<u16> {
    let font = forge.active_font()?;
    let by_code_point = |cp: u32| {
        font.glyphs()
            .iter()
            .find(|g| g.unicodes.contains(&cp))
            .map(|g| g.index)
            .context(format!("No glyph for {reference}"))
    };

    let reference = reference.trim();
    if let Some(hex) = reference
        .strip_prefix("U+")
        .or_else(|| reference.strip_prefix("u+"))
    {
        let cp = u32::from_str_radix(hex, 16).context(format!("Invalid code point: {reference}"))?;
        return by_code_point(cp);
    }
    if let Ok(index) = reference.parse::<u16>() {
        return Ok(index);
    }
    let mut chars = reference.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => by_code_point(u32::from(c)),
        _ => bail!("Invalid glyph reference: {reference}"),
    }
}

fn select_glyphs(forge: &mut GlyphForge, refs: &[String], add: bool) -> Result<()> {
    if refs.is_empty() {
        return Ok(());
    }
    let indices = refs
        .iter()
        .map(|r| resolve_glyph(forge, r))
        .collect::<Result<Vec<_>>>()?;
    if !add {
        forge.clear_selection();
    }
    forge.select(indices);
    Ok(())
}

#[allow(clippy::cast_possible_truncation)]
fn progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    // Template is hardcoded and valid, unwrap is safe
    #[allow(clippy::unwrap_used)]
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb
}

// CLI output is intentional
#[allow(clippy::print_stdout)]
fn say(line: &str) {
    println!("{line}");
}

/// Write to a file, or to stdout when no path is given.
fn emit(path: Option<&Path>, bytes: &[u8]) -> Result<()> {
    match path {
        Some(path) => write_file(path, bytes),
        None => {
            use std::io::Write;
            std::io::stdout()
                .write_all(bytes)
                .context("Failed to write to stdout")
        }
    }
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    std::fs::write(path, bytes).context(format!("Failed to write output: {}", path.display()))?;
    say(&format!("Saved {}", path.display()));
    Ok(())
}

fn glyph_line(glyph: &GlyphRecord) -> String {
    let ch = glyph
        .character()
        .filter(|c| !c.is_control())
        .map(|c| format!(" {c}"))
        .unwrap_or_default();
    format!(
        "{:>6}  {:<10}{:<3} {}",
        glyph.index,
        glyph.label(),
        ch,
        glyph.unicode_name
    )
}

// =============================================================================
// Browsing
// =============================================================================

fn info_cmd(forge: &GlyphForge) -> Result<()> {
    let font = forge.active_font()?;
    let metrics = font.source().metrics();
    let encoded = font.glyphs().iter().filter(|g| g.unicode.is_some()).count();

    say(&format!("Name:          {}", font.name()));
    say(&format!("File:          {}", font.file_name()));
    if let Some(doc) = font.document() {
        say(&format!("Format:        {}", doc.format().extension()));
    }
    say(&format!("Glyphs:        {}", font.glyphs().len()));
    say(&format!("Encoded:       {encoded}"));
    say(&format!("Units per em:  {}", metrics.units_per_em));
    say(&format!("Ascender:      {}", metrics.ascender));
    say(&format!("Descender:     {}", metrics.descender));
    say(&format!("Blocks:        {}", forge.blocks()?.len()));
    say(&format!("Pages:         {}", forge.pages()?.len()));
    Ok(())
}

fn blocks_cmd(forge: &GlyphForge) -> Result<()> {
    for block in forge.blocks()? {
        say(&format!(
            "{:<40} {:<22} {:>6}",
            block.name,
            block.range_label(),
            block.len()
        ));
    }
    Ok(())
}

fn list_cmd(forge: &GlyphForge) -> Result<()> {
    if let ViewMode::All(page) = forge.view() {
        let pages = forge.pages()?;
        if let Some(p) = pages.get(page.saturating_sub(1)) {
            say(&format!("Page {page} of {}", pages.len()));
            for section in &p.sections {
                say(&format!("-- {} ({})", section.name, section.range_label()));
                for glyph in &section.glyphs {
                    say(&glyph_line(glyph));
                }
            }
        }
        return Ok(());
    }
    for glyph in forge.visible_glyphs()? {
        say(&glyph_line(&glyph));
    }
    Ok(())
}

// =============================================================================
// Scan & Export
// =============================================================================

/// Run a scan with a progress bar fed from the job.
async fn run_scan(forge: &mut GlyphForge) -> Result<()> {
    let job = Arc::new(ScanJob::new());
    let pb = progress_bar(100);
    pb.set_message("Scanning");

    let ticker = {
        let job = Arc::clone(&job);
        let pb = pb.clone();
        tokio::spawn(async move {
            loop {
                #[allow(clippy::cast_possible_truncation)]
                pb.set_position(job.progress() as u64);
                tokio::time::sleep(Duration::from_millis(100)).await;
            }
        })
    };

    let outcome = forge.scan(&job).await;
    ticker.abort();
    pb.finish_and_clear();

    if outcome? == ScanOutcome::Cancelled {
        bail!("Scan was cancelled");
    }
    Ok(())
}

async fn scan_cmd(forge: &mut GlyphForge, json: bool) -> Result<()> {
    run_scan(forge).await?;
    let errors = forge.errors();

    if json {
        say(&serde_json::to_string(errors)?);
        return Ok(());
    }

    if errors.is_empty() {
        say("No clipped glyphs");
        return Ok(());
    }
    say(&format!("{} clipped glyphs:", errors.len()));
    let font = forge.active_font()?;
    for glyph in font.glyphs().iter().filter(|g| errors.contains(&g.index)) {
        say(&glyph_line(glyph));
    }
    Ok(())
}

#[allow(clippy::cast_possible_truncation)]
async fn export_cmd(
    forge: &mut GlyphForge,
    scope: &ScopeArgs,
    options: &ExportOptions,
    dir: &Path,
) -> Result<()> {
    let scope = scope.scope()?;
    if scope == ExportScope::Errors && forge.errors().is_empty() {
        run_scan(forge).await?;
    }

    let total = forge.resolve_scope(&scope)?.len();
    let pb = progress_bar(total);
    let progress: ProgressFn = {
        let pb = pb.clone();
        Box::new(move |done, _total| pb.set_position(done as u64))
    };

    let archive = forge
        .export(&scope, options, Some(&progress))
        .await
        .context("Export failed")?;
    pb.finish_with_message("Export complete");

    if !archive.skipped.is_empty() {
        warn!("{} PNGs could not be rendered", archive.skipped.len());
    }

    std::fs::create_dir_all(dir)
        .context(format!("Failed to create output directory: {}", dir.display()))?;
    let path = dir.join(&archive.file_name);
    write_file(&path, &archive.bytes)?;
    say(&format!(
        "{} glyphs, {} files",
        archive.glyph_count, archive.file_count
    ));
    Ok(())
}

fn subset_cmd(
    forge: &GlyphForge,
    refs: &[String],
    text: &str,
    output: Option<PathBuf>,
) -> Result<()> {
    let glyphs = refs
        .iter()
        .map(|r| resolve_glyph(forge, r))
        .collect::<Result<Vec<_>>>()?;
    let subset = forge.subset(&glyphs, text)?;

    let path = output.unwrap_or_else(|| {
        let stem = Path::new(forge.active_font().map_or("font", |f| f.file_name()))
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("font")
            .to_string();
        PathBuf::from(format!("{stem}-subset.{}", subset.extension))
    });
    write_file(&path, &subset.bytes)?;
    say(&format!("Kept {} glyphs", subset.mapping.len()));
    Ok(())
}

async fn sprite_cmd(
    forge: &GlyphForge,
    scope: &ScopeArgs,
    options: SpriteOptions,
    png: Option<f32>,
    output: &Path,
) -> Result<()> {
    let sheet = forge.sprite(&scope.scope()?, options)?;
    write_file(&output.with_extension("svg"), sheet.svg.as_bytes())?;
    write_file(&output.with_extension("json"), sheet.map_json()?.as_bytes())?;

    if let Some(scale) = png {
        let png_path = output.with_extension("png");
        let bytes = forge.sprite_png(&sheet, scale).await?;
        write_file(&png_path, &bytes)?;

        let image_url = png_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("sprite.png");
        let css = glyphforge_core::export::css::sprite_classes(&sheet, image_url, "sprite");
        write_file(&output.with_extension("css"), css.as_bytes())?;
    }

    say(&format!(
        "{} tiles in {} columns ({}x{})",
        sheet.tiles.len(),
        sheet.columns,
        sheet.width,
        sheet.height
    ));
    Ok(())
}

// =============================================================================
// Session
// =============================================================================

async fn session_cmd(config: AppConfig, path: &Path, action: SessionAction) -> Result<()> {
    if let SessionAction::Init { fonts } = &action {
        let mut forge = GlyphForge::new(config)?;
        for font in fonts {
            forge
                .open_font(font)
                .context(format!("Failed to load font: {}", font.display()))?;
        }
        forge.to_session_file().save(path)?;
        say(&format!("Session saved to {}", path.display()));
        return Ok(());
    }

    let file = SessionFile::load(path)?;
    let mut forge = GlyphForge::from_session_file(config, file)?;

    match action {
        SessionAction::Init { .. } => {}
        SessionAction::Show => return show_session(&forge),
        SessionAction::Switch { index } => forge.switch_font(index)?,
        SessionAction::Filter { mode, search } => {
            if let Some(mode) = mode {
                forge.set_filter_mode(mode.into());
            }
            if let Some(term) = search {
                forge.set_search(term);
            }
        }
        SessionAction::Select { glyphs, add, clear } => {
            if clear {
                forge.clear_selection();
            } else {
                select_glyphs(&mut forge, &glyphs, add)?;
            }
        }
        SessionAction::Set(settings) => apply_settings(&mut forge, &settings)?,
        SessionAction::Move { glyph, x, y } => {
            let index = resolve_glyph(&forge, &glyph)?;
            forge.set_glyph_position(index, x, y)?;
        }
        SessionAction::Autofit => {
            let fitted = forge.auto_fit()?;
            say(&format!("Fitted {fitted} glyphs"));
        }
        SessionAction::Undo => {
            if !forge.undo() {
                say("Nothing to undo");
            }
        }
        SessionAction::Redo => {
            if !forge.redo() {
                say("Nothing to redo");
            }
        }
        SessionAction::Reset => forge.reset(),
        SessionAction::Scan => {
            run_scan(&mut forge).await?;
            say(&format!("{} clipped glyphs", forge.errors().len()));
        }
        SessionAction::Delete { glyphs, block } => {
            let removed = if let Some(name) = block {
                forge.delete_block(&name)?
            } else {
                let indices: BTreeSet<u16> = glyphs
                    .iter()
                    .map(|r| resolve_glyph(&forge, r))
                    .collect::<Result<_>>()?;
                forge.delete_glyphs(&indices)?
            };
            say(&format!("Removed {removed} glyphs"));
        }
    }

    forge.to_session_file().save(path)?;
    Ok(())
}

fn show_session(forge: &GlyphForge) -> Result<()> {
    for (i, font) in forge.fonts().iter().enumerate() {
        let marker = if i == forge.active_index() { "*" } else { " " };
        say(&format!(
            "{marker} [{i}] {} ({} glyphs)",
            font.name(),
            font.glyphs().len()
        ));
    }
    say(&format!("Mode:       {}", forge.filter_mode()));
    if !forge.search().is_empty() {
        say(&format!("Search:     {}", forge.search()));
    }
    say(&format!("Selection:  {:?}", forge.selection()));
    say(&format!("Clipped:    {:?}", forge.errors()));
    say(&format!(
        "History:    step {} of {}",
        forge.history().cursor() + 1,
        forge.history().len()
    ));
    say(&format!(
        "Overrides:  {}",
        forge.settings().overrides().len()
    ));
    say(&format!(
        "Settings:   {}",
        serde_json::to_string_pretty(forge.settings().global())?
    ));
    Ok(())
}
