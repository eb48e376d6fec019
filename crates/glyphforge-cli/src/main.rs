//! GlyphForge CLI - Inspect, check and export the glyphs of a font.

mod commands;

use anyhow::{Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use glyphforge_core::export::Align;
use glyphforge_core::export::specimen::{DEFAULT_LAYER_OPACITY, auto_color};
use glyphforge_core::{
    AppConfig, Arrangement, ExportFormat, ExportScope, FilterMode, Fit, LayerStyle, Paint,
    Positioning, Preset, RenderMode, SettingChange, SpecimenOptions,
};
use std::path::PathBuf;
use std::str::FromStr;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeOption {
    /// Only glyphs mapped to a code point
    Unicode,
    /// Every glyph, including ligatures and alternates
    All,
}

impl From<ModeOption> for FilterMode {
    fn from(opt: ModeOption) -> Self {
        match opt {
            ModeOption::Unicode => Self::Unicode,
            ModeOption::All => Self::All,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PositioningOption {
    Baseline,
    Center,
    Metrics,
}

impl From<PositioningOption> for Positioning {
    fn from(opt: PositioningOption) -> Self {
        match opt {
            PositioningOption::Baseline => Self::Baseline,
            PositioningOption::Center => Self::Center,
            PositioningOption::Metrics => Self::Metrics,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RenderModeOption {
    Fill,
    Outline,
    Negative,
}

impl From<RenderModeOption> for RenderMode {
    fn from(opt: RenderModeOption) -> Self {
        match opt {
            RenderModeOption::Fill => Self::Fill,
            RenderModeOption::Outline => Self::Outline,
            RenderModeOption::Negative => Self::Negative,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatOption {
    Svg,
    Png,
    Both,
}

impl From<FormatOption> for ExportFormat {
    fn from(opt: FormatOption) -> Self {
        match opt {
            FormatOption::Svg => Self::Svg,
            FormatOption::Png => Self::Png,
            FormatOption::Both => Self::Both,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AlignOption {
    Left,
    Center,
    Right,
}

impl From<AlignOption> for Align {
    fn from(opt: AlignOption) -> Self {
        match opt {
            AlignOption::Left => Self::Left,
            AlignOption::Center => Self::Center,
            AlignOption::Right => Self::Right,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FitOption {
    /// Every panel sized to the largest text
    Together,
    /// Each panel sized to its own text
    Separate,
}

impl From<FitOption> for Fit {
    fn from(opt: FitOption) -> Self {
        match opt {
            FitOption::Together => Self::Together,
            FitOption::Separate => Self::Separate,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ScopeOption {
    All,
    Filtered,
    Selection,
    Block,
    Errors,
    Page,
}

/// Canvas size given as `WIDTHxHEIGHT`.
#[derive(Debug, Clone, Copy)]
struct Canvas {
    width: u32,
    height: u32,
}

impl FromStr for Canvas {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (w, h) = s
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
        let parse = |v: &str| {
            v.trim()
                .parse::<u32>()
                .map_err(|e| format!("invalid canvas size '{s}': {e}"))
        };
        Ok(Self {
            width: parse(w)?,
            height: parse(h)?,
        })
    }
}

#[derive(Parser, Debug)]
#[command(name = "glyphforge")]
#[command(author, version, about = "Inspect, check and export font glyphs", long_about = None)]
struct Args {
    /// Config file path
    #[arg(short, long, global = true, env = "GLYPHFORGE_CONFIG")]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Disable the render cache
    #[arg(long, global = true)]
    no_cache: bool,

    #[command(subcommand)]
    command: Command,
}

/// Which font to work on and how to browse it.
#[derive(ClapArgs, Debug)]
struct FontArgs {
    /// Font file (.ttf, .otf, .woff)
    font: Option<PathBuf>,

    /// Session file to take fonts, settings and selection from
    #[arg(long, env = "GLYPHFORGE_SESSION")]
    session: Option<PathBuf>,

    /// Glyph filter mode
    #[arg(long, value_enum)]
    mode: Option<ModeOption>,

    /// Search term (name, code point or character)
    #[arg(long)]
    search: Option<String>,
}

/// Which glyphs a command covers.
#[derive(ClapArgs, Debug)]
struct ScopeArgs {
    /// Glyph scope (defaults to `selection` when --glyphs is given, else `filtered`)
    #[arg(long, value_enum)]
    scope: Option<ScopeOption>,

    /// Block name for --scope block
    #[arg(long)]
    block: Option<String>,

    /// Page number for --scope page
    #[arg(long)]
    page: Option<usize>,

    /// Glyphs to select: indices, U+XXXX code points or single characters
    #[arg(long, value_delimiter = ',')]
    glyphs: Vec<String>,
}

impl ScopeArgs {
    fn scope(&self) -> Result<ExportScope> {
        let default = if self.glyphs.is_empty() {
            ScopeOption::Filtered
        } else {
            ScopeOption::Selection
        };
        Ok(match self.scope.unwrap_or(default) {
            ScopeOption::All => ExportScope::All,
            ScopeOption::Filtered => ExportScope::Filtered,
            ScopeOption::Selection => ExportScope::Selection,
            ScopeOption::Errors => ExportScope::Errors,
            ScopeOption::Block => ExportScope::Block(
                self.block
                    .clone()
                    .context("--scope block requires --block <NAME>")?,
            ),
            ScopeOption::Page => {
                ExportScope::Page(self.page.context("--scope page requires --page <N>")?)
            }
        })
    }
}

/// Render settings; each flag given becomes one edit.
#[derive(ClapArgs, Debug, Default)]
struct SettingsArgs {
    /// Glyph size relative to the padded canvas
    #[arg(long)]
    scale: Option<f64>,

    /// Canvas padding in percent
    #[arg(long)]
    padding: Option<f64>,

    /// Canvas preset (custom, android, favicon, ios, large)
    #[arg(long)]
    preset: Option<Preset>,

    /// Canvas size as WIDTHxHEIGHT
    #[arg(long)]
    canvas: Option<Canvas>,

    /// Vertical placement
    #[arg(long, value_enum)]
    positioning: Option<PositioningOption>,

    /// Horizontal offset in pixels
    #[arg(long, allow_hyphen_values = true)]
    translate_x: Option<f64>,

    /// Vertical offset in pixels
    #[arg(long, allow_hyphen_values = true)]
    translate_y: Option<f64>,

    /// Rotation in degrees
    #[arg(long, allow_hyphen_values = true)]
    rotate: Option<f64>,

    /// Mirror horizontally
    #[arg(long)]
    flip_h: Option<bool>,

    /// Mirror vertically
    #[arg(long)]
    flip_v: Option<bool>,

    /// Glyph color (#rgb, #rrggbb, a color name or 'transparent')
    #[arg(long)]
    color: Option<Paint>,

    /// Canvas background
    #[arg(long)]
    background: Option<Paint>,

    /// Stroke weight; 1 is neutral, above emboldens, below thins
    #[arg(long)]
    stroke_width: Option<f64>,

    /// How the glyph is painted
    #[arg(long, value_enum)]
    render_mode: Option<RenderModeOption>,
}

impl SettingsArgs {
    fn changes(&self) -> Vec<SettingChange> {
        let mut changes = Vec::new();
        if let Some(p) = self.preset {
            changes.push(SettingChange::Preset(p));
        }
        if let Some(c) = self.canvas {
            changes.push(SettingChange::CanvasWidth(c.width));
            changes.push(SettingChange::CanvasHeight(c.height));
        }
        changes.extend(self.scale.map(SettingChange::Scale));
        changes.extend(self.padding.map(SettingChange::Padding));
        changes.extend(self.positioning.map(|p| SettingChange::Positioning(p.into())));
        changes.extend(self.translate_x.map(SettingChange::TranslateX));
        changes.extend(self.translate_y.map(SettingChange::TranslateY));
        changes.extend(self.rotate.map(SettingChange::Rotate));
        changes.extend(self.flip_h.map(SettingChange::FlipH));
        changes.extend(self.flip_v.map(SettingChange::FlipV));
        changes.extend(self.color.map(SettingChange::Color));
        changes.extend(self.background.map(SettingChange::Background));
        changes.extend(self.stroke_width.map(SettingChange::StrokeWidth));
        changes.extend(self.render_mode.map(|m| SettingChange::RenderMode(m.into())));
        changes
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show font details
    Info {
        #[command(flatten)]
        font: FontArgs,
    },

    /// List Unicode blocks with glyph counts
    Blocks {
        #[command(flatten)]
        font: FontArgs,
    },

    /// Find glyphs by name, code point or character
    Search {
        #[command(flatten)]
        font: FontArgs,

        /// Search term
        #[arg(short, long)]
        query: String,
    },

    /// List glyphs of one page or block
    List {
        #[command(flatten)]
        font: FontArgs,

        /// Page number (1-based)
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Show one block instead of a page
        #[arg(long)]
        block: Option<String>,
    },

    /// Find glyphs that overflow their canvas
    Scan {
        #[command(flatten)]
        font: FontArgs,

        #[command(flatten)]
        settings: SettingsArgs,

        /// Print the clipped glyph indices as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export glyphs to a zip archive of SVG/PNG files
    Export {
        #[command(flatten)]
        font: FontArgs,

        #[command(flatten)]
        scope: ScopeArgs,

        #[command(flatten)]
        settings: SettingsArgs,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<FormatOption>,

        /// PNG resolution multiplier
        #[arg(long)]
        png_scale: Option<f32>,

        /// File name pattern ({fontName}, {name}, {hex}, {index})
        #[arg(long)]
        pattern: Option<String>,

        /// File name pattern for unencoded glyphs in `all` mode
        #[arg(long)]
        ligature_pattern: Option<String>,

        /// Output directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render one glyph to SVG (or PNG)
    Glyph {
        #[command(flatten)]
        font: FontArgs,

        /// Glyph index, U+XXXX code point or character
        #[arg(short, long)]
        glyph: String,

        #[command(flatten)]
        settings: SettingsArgs,

        /// Render PNG at this scale instead of SVG
        #[arg(long)]
        png: Option<f32>,

        /// Output file (default: stdout for SVG)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write a font containing only some glyphs
    Subset {
        #[command(flatten)]
        font: FontArgs,

        /// Glyphs to keep
        #[arg(long, value_delimiter = ',')]
        glyphs: Vec<String>,

        /// Keep every character of this text
        #[arg(long)]
        text: Option<String>,

        /// Output file (default: <font>-subset.<ext>)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Pack glyphs into one sprite sheet with a position map
    Sprite {
        #[command(flatten)]
        font: FontArgs,

        #[command(flatten)]
        scope: ScopeArgs,

        #[command(flatten)]
        settings: SettingsArgs,

        /// Tiles per row
        #[arg(long)]
        columns: Option<usize>,

        /// Pixels between tiles
        #[arg(long, default_value_t = 0)]
        gap: u32,

        /// Also rasterize the sheet at this scale and write sprite CSS
        #[arg(long)]
        png: Option<f32>,

        /// Output path without extension
        #[arg(short, long, default_value = "sprite")]
        output: PathBuf,
    },

    /// Generate @font-face CSS with one class per glyph
    Css {
        #[command(flatten)]
        font: FontArgs,

        #[command(flatten)]
        scope: ScopeArgs,

        /// Class name prefix
        #[arg(long, default_value = "glyph")]
        prefix: String,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render sample text in the font
    Specimen {
        #[command(flatten)]
        font: FontArgs,

        /// Text to set; `\n` starts a new line
        #[arg(short, long)]
        text: String,

        /// More fonts to set the text in, after the main one
        #[arg(long, num_args = 1..)]
        compare: Vec<PathBuf>,

        #[command(flatten)]
        style: SpecimenArgs,

        /// Render PNG at this scale instead of SVG
        #[arg(long)]
        png: Option<f32>,

        /// Output file (default: stdout for SVG)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Edit a saved session
    Session {
        /// Session file
        #[arg(long, env = "GLYPHFORGE_SESSION", default_value = "glyphforge-session.json")]
        file: PathBuf,

        #[command(subcommand)]
        action: SessionAction,
    },

    /// Manage the render cache
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },
}

/// Specimen layout and paint flags
#[derive(ClapArgs, Debug, Clone)]
struct SpecimenArgs {
    /// Font size in pixels
    #[arg(long, default_value_t = 48.0)]
    size: f64,

    #[arg(long, value_enum, default_value = "center")]
    align: AlignOption,

    /// Panel sizing when no --canvas is given
    #[arg(long, value_enum, default_value = "together")]
    fit: FitOption,

    /// Fixed panel size, e.g. 1000x200
    #[arg(long)]
    canvas: Option<Canvas>,

    /// Draw compared fonts over each other instead of stacking them
    #[arg(long)]
    overlay: bool,

    /// Text color of stacked panels
    #[arg(long, default_value = "black")]
    color: Paint,

    /// Per-font colors, in font order
    #[arg(long, value_delimiter = ',')]
    colors: Vec<Paint>,

    /// Per-font opacity, 0 to 1
    #[arg(long)]
    opacity: Option<f64>,

    #[arg(long, default_value = "transparent")]
    background: Paint,
}

impl SpecimenArgs {
    fn options(&self) -> SpecimenOptions {
        SpecimenOptions {
            font_size: self.size,
            align: self.align.into(),
            color: self.color,
            background: self.background,
            fit: self.canvas.map_or_else(
                || self.fit.into(),
                |c| Fit::Fixed {
                    width: c.width,
                    height: c.height,
                },
            ),
            arrangement: if self.overlay {
                Arrangement::Overlay
            } else {
                Arrangement::Stacked
            },
            ..Default::default()
        }
    }

    /// Layer styles for the given fonts, in drawing order.
    ///
    /// Overlays default to palette colors at reduced opacity; stacked
    /// panels default to `--color` at full opacity.
    fn styles(&self, fonts: &[usize]) -> Vec<LayerStyle> {
        fonts
            .iter()
            .enumerate()
            .map(|(i, &font)| {
                let (color, opacity) = if self.overlay {
                    (auto_color(i), DEFAULT_LAYER_OPACITY)
                } else {
                    (self.color, 1.0)
                };
                LayerStyle {
                    font,
                    color: self.colors.get(i).copied().unwrap_or(color),
                    opacity: self.opacity.unwrap_or(opacity),
                }
            })
            .collect()
    }
}

#[derive(Subcommand, Debug)]
enum SessionAction {
    /// Start a session from one or more fonts
    Init {
        #[arg(required = true)]
        fonts: Vec<PathBuf>,
    },

    /// Show fonts, view, selection and settings
    Show,

    /// Make another font active
    Switch { index: usize },

    /// Change the filter mode or search term
    Filter {
        #[arg(long, value_enum)]
        mode: Option<ModeOption>,

        #[arg(long)]
        search: Option<String>,
    },

    /// Select glyphs
    Select {
        glyphs: Vec<String>,

        /// Add to the selection instead of replacing it
        #[arg(long)]
        add: bool,

        /// Clear the selection
        #[arg(long, conflicts_with = "glyphs")]
        clear: bool,
    },

    /// Edit settings of the selection (or the global settings)
    Set(SettingsArgs),

    /// Move one glyph
    Move {
        glyph: String,
        #[arg(allow_hyphen_values = true)]
        x: f64,
        #[arg(allow_hyphen_values = true)]
        y: f64,
    },

    /// Fit the selection (or the first page) to its canvas
    Autofit,

    /// Step back in history
    Undo,

    /// Step forward in history
    Redo,

    /// Restore default settings
    Reset,

    /// Scan for clipped glyphs and remember them
    Scan,

    /// Remove glyphs or a whole block from the list
    Delete {
        glyphs: Vec<String>,

        #[arg(long, conflicts_with = "glyphs")]
        block: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
enum CacheAction {
    /// Delete every cached render
    Clear,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (before parsing args so env vars are available)
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let log_level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path).context("Failed to load config file")?
    } else {
        AppConfig::load()
    };

    if args.no_cache {
        config.cache.memory_enabled = false;
        config.cache.disk_enabled = false;
    }

    commands::run(config, args.command).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_parse() {
        let c: Canvas = "64x32".parse().unwrap();
        assert_eq!((c.width, c.height), (64, 32));
        assert!("64".parse::<Canvas>().is_err());
        assert!("ax2".parse::<Canvas>().is_err());
    }

    #[test]
    fn test_settings_flags_become_changes() {
        let args = Args::parse_from([
            "glyphforge",
            "scan",
            "font.ttf",
            "--preset",
            "ios",
            "--scale",
            "0.5",
            "--color",
            "#ff0000",
            "--translate-y",
            "-4",
        ]);
        let Command::Scan { settings, .. } = args.command else {
            panic!("expected scan");
        };
        assert_eq!(
            settings.changes(),
            [
                SettingChange::Preset(Preset::Ios),
                SettingChange::Scale(0.5),
                SettingChange::TranslateY(-4.0),
                SettingChange::Color(Paint::Rgb(255, 0, 0)),
            ]
        );
    }

    #[test]
    fn test_scope_defaults() {
        let scope = ScopeArgs {
            scope: None,
            block: None,
            page: None,
            glyphs: vec!["A".into()],
        };
        assert_eq!(scope.scope().unwrap(), ExportScope::Selection);

        let block = ScopeArgs {
            scope: Some(ScopeOption::Block),
            block: None,
            page: None,
            glyphs: vec![],
        };
        assert!(block.scope().is_err());
    }

    #[test]
    fn test_specimen_flags() {
        let args = Args::parse_from([
            "glyphforge",
            "specimen",
            "a.ttf",
            "-t",
            "Hamburg",
            "--compare",
            "b.ttf",
            "c.ttf",
            "--overlay",
            "--colors",
            "#00ff00",
            "--canvas",
            "800x120",
        ]);
        let Command::Specimen { compare, style, .. } = args.command else {
            panic!("expected specimen");
        };
        assert_eq!(compare.len(), 2);

        let options = style.options();
        assert_eq!(options.arrangement, Arrangement::Overlay);
        assert_eq!(options.fit, Fit::Fixed { width: 800, height: 120 });

        let styles = style.styles(&[2, 0, 1]);
        assert_eq!(styles[0].font, 2);
        assert_eq!(styles[0].color, Paint::Rgb(0, 255, 0));
        assert_eq!(styles[1].color, auto_color(1));
        assert!((styles[2].opacity - DEFAULT_LAYER_OPACITY).abs() < f64::EPSILON);
    }
}
