//! Text specimens rendered as outlined SVG.
//!
//! A specimen draws the same text in one or more fonts. Fonts are either
//! stacked in their own panels or overlaid on one canvas, each in its own
//! color and opacity.

use svg::Document;
use svg::node::element::{Path, Rectangle};

use super::svg::{PATH_PRECISION, SVG_NS, fmt_num, paint_value};
use crate::error::{Error, Result};
use crate::font::{GlyphPath, OutlineSource};
use crate::settings::Paint;

/// Line height as a multiple of the font size.
const LINE_HEIGHT: f64 = 1.25;
/// Baseline offset below a line's vertical center, as a multiple of the font size.
const BASELINE_SHIFT: f64 = 0.35;

/// Colors handed to compared fonts, by font index.
const AUTO_COLORS: [Paint; 8] = [
    Paint::Rgb(0xFF, 0x00, 0x00),
    Paint::Rgb(0x00, 0x00, 0xFF),
    Paint::Rgb(0x00, 0x80, 0x00),
    Paint::Rgb(0xFF, 0xA5, 0x00),
    Paint::Rgb(0x80, 0x00, 0x80),
    Paint::Rgb(0x00, 0x80, 0x80),
    Paint::Rgb(0xFF, 0x00, 0xFF),
    Paint::Rgb(0xA5, 0x2A, 0x2A),
];

/// Opacity of overlaid fonts unless set explicitly.
pub const DEFAULT_LAYER_OPACITY: f64 = 0.7;

/// Palette color for the font at `index`.
pub const fn auto_color(index: usize) -> Paint {
    AUTO_COLORS[index % AUTO_COLORS.len()]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    Left,
    #[default]
    Center,
    Right,
}

/// How several fonts share the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Arrangement {
    /// One panel per font, top to bottom
    #[default]
    Stacked,
    /// Every font drawn over the same canvas
    Overlay,
}

/// How panel sizes are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Fit {
    /// Every panel sized to the largest text
    #[default]
    Together,
    /// Each panel sized to its own text; overlays fall back to `Together`
    Separate,
    /// Every panel the given size
    Fixed { width: u32, height: u32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpecimenOptions {
    pub font_size: f64,
    pub align: Align,
    pub pad_h: f64,
    pub pad_v: f64,
    /// Text color for single-font and stacked specimens
    pub color: Paint,
    pub background: Paint,
    pub fit: Fit,
    pub arrangement: Arrangement,
}

impl Default for SpecimenOptions {
    fn default() -> Self {
        Self {
            font_size: 48.0,
            align: Align::Center,
            pad_h: 20.0,
            pad_v: 20.0,
            color: Paint::BLACK,
            background: Paint::Transparent,
            fit: Fit::Together,
            arrangement: Arrangement::Stacked,
        }
    }
}

/// Which loaded font a comparison layer draws, and in what paint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerStyle {
    pub font: usize,
    pub color: Paint,
    pub opacity: f64,
}

impl LayerStyle {
    /// Palette color at the default overlay opacity.
    pub const fn auto(font: usize) -> Self {
        Self {
            font,
            color: auto_color(font),
            opacity: DEFAULT_LAYER_OPACITY,
        }
    }
}

/// One font of a specimen, resolved to its outlines.
#[derive(Clone, Copy)]
pub struct SpecimenLayer<'a> {
    pub source: &'a dyn OutlineSource,
    pub color: Paint,
    pub opacity: f64,
}

/// Where a layer was drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Panel {
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone)]
pub struct Specimen {
    pub svg: String,
    pub width: u32,
    pub height: u32,
    /// One per layer, in drawing order
    pub panels: Vec<Panel>,
}

struct Line {
    path: GlyphPath,
    advance: f64,
}

/// Lay out `text` in every layer and merge each layer into one path.
///
/// Characters a font does not map fall back to `.notdef`. Layers are drawn
/// in slice order, so later layers paint over earlier ones in an overlay.
pub fn render_specimen(
    layers: &[SpecimenLayer<'_>],
    text: &str,
    options: &SpecimenOptions,
) -> Result<Specimen> {
    if layers.is_empty() || text.trim().is_empty() {
        return Err(Error::EmptyExport);
    }
    validate(layers, options)?;

    let laid_out: Vec<Vec<Line>> = layers
        .iter()
        .map(|layer| layout_lines(layer.source, text, options.font_size))
        .collect();
    let natural: Vec<(u32, u32)> = laid_out
        .iter()
        .map(|lines| natural_size(lines, options))
        .collect();
    let widest = natural.iter().map(|n| n.0).max().unwrap_or(1);
    let tallest = natural.iter().map(|n| n.1).max().unwrap_or(1);

    let panel_size = |i: usize| match options.fit {
        Fit::Fixed { width, height } => (width, height),
        Fit::Separate if options.arrangement == Arrangement::Stacked => natural[i],
        _ => (widest, tallest),
    };

    let panels: Vec<Panel> = match options.arrangement {
        Arrangement::Overlay => {
            let (width, height) = panel_size(0);
            vec![Panel { y: 0, width, height }; layers.len()]
        }
        Arrangement::Stacked => {
            let mut y = 0u32;
            (0..layers.len())
                .map(|i| {
                    let (width, height) = panel_size(i);
                    let panel = Panel { y, width, height };
                    y = y.saturating_add(height);
                    panel
                })
                .collect()
        }
    };
    let width = panels.iter().map(|p| p.width).max().unwrap_or(1);
    let height = panels
        .iter()
        .map(|p| p.y.saturating_add(p.height))
        .max()
        .unwrap_or(1);

    let mut doc = Document::new()
        .set("xmlns", SVG_NS)
        .set("width", width)
        .set("height", height)
        .set("viewBox", (0, 0, width, height));
    if !options.background.is_transparent() {
        doc = doc.add(
            Rectangle::new()
                .set("width", "100%")
                .set("height", "100%")
                .set("fill", paint_value(options.background)),
        );
    }

    for ((layer, lines), panel) in layers.iter().zip(&laid_out).zip(&panels) {
        let merged = place_lines(lines, *panel, options);
        let mut path = Path::new()
            .set("d", merged.to_path_data(PATH_PRECISION))
            .set("fill", paint_value(layer.color));
        if layer.opacity < 1.0 {
            path = path.set("fill-opacity", fmt_num(layer.opacity));
        }
        doc = doc.add(path);
    }

    tracing::debug!(
        "Specimen {}x{} ({} fonts, {:?}, font size {})",
        width,
        height,
        layers.len(),
        options.arrangement,
        fmt_num(options.font_size)
    );

    Ok(Specimen {
        svg: doc.to_string(),
        width,
        height,
        panels,
    })
}

fn validate(layers: &[SpecimenLayer<'_>], options: &SpecimenOptions) -> Result<()> {
    let invalid = |field: &str, reason: &str| Error::InvalidSetting {
        field: field.to_string(),
        reason: reason.to_string(),
    };

    if !(options.font_size.is_finite() && options.font_size > 0.0) {
        return Err(invalid("font_size", "must be greater than 0"));
    }
    if let Fit::Fixed { width, height } = options.fit
        && (width == 0 || height == 0)
    {
        return Err(invalid("canvas", "must be at least 1x1"));
    }
    if layers
        .iter()
        .any(|l| !(l.opacity.is_finite() && (0.0..=1.0).contains(&l.opacity)))
    {
        return Err(invalid("opacity", "must be in [0, 1]"));
    }
    Ok(())
}

/// Shape each line with the font's advance widths, pen starting at 0.
fn layout_lines(source: &dyn OutlineSource, text: &str, fs: f64) -> Vec<Line> {
    let upem = source.units_per_em();
    let scale = fs / f64::from(upem.max(1));

    text.lines()
        .map(|line| {
            let mut path = GlyphPath::new();
            let mut pen = 0.0;
            for c in line.chars().filter(|c| !c.is_control()) {
                let gid = source.glyph_index(c).unwrap_or(0);
                if let Some(outline) = source.outline(gid) {
                    for cmd in outline.place(pen, 0.0, fs, upem).commands() {
                        path.push(*cmd);
                    }
                }
                pen += f64::from(source.advance_width(gid).unwrap_or(0)) * scale;
            }
            Line { path, advance: pen }
        })
        .collect()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn natural_size(lines: &[Line], options: &SpecimenOptions) -> (u32, u32) {
    let widest = lines.iter().map(|l| l.advance).fold(0.0, f64::max);
    let text_height = options.font_size * LINE_HEIGHT * lines.len() as f64;
    (
        (widest + options.pad_h * 2.0).ceil().max(1.0) as u32,
        (text_height + options.pad_v * 2.0).ceil().max(1.0) as u32,
    )
}

/// Align the lines inside a panel, centering the block vertically.
#[allow(clippy::cast_precision_loss)]
fn place_lines(lines: &[Line], panel: Panel, options: &SpecimenOptions) -> GlyphPath {
    let fs = options.font_size;
    let line_height = fs * LINE_HEIGHT;
    let w = f64::from(panel.width);
    let top = f64::from(panel.y)
        + (f64::from(panel.height) - line_height * lines.len() as f64) / 2.0;

    let mut merged = GlyphPath::new();
    for (i, line) in lines.iter().enumerate() {
        let x = match options.align {
            Align::Left => options.pad_h,
            Align::Center => (w - line.advance) / 2.0,
            Align::Right => w - options.pad_h - line.advance,
        };
        let baseline = top + line_height * (i as f64 + 0.5) + fs * BASELINE_SHIFT;
        for cmd in line.path.translate(x, baseline).commands() {
            merged.push(*cmd);
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{FontMetrics, PathCommand};
    use std::sync::Arc;

    /// Monospaced font: every mapped char is a 500x700 box with a fixed advance.
    struct Boxes {
        advance: u16,
    }

    const MONO: Boxes = Boxes { advance: 600 };
    const WIDE: Boxes = Boxes { advance: 1000 };

    impl OutlineSource for Boxes {
        fn metrics(&self) -> FontMetrics {
            FontMetrics::default()
        }

        fn glyph_count(&self) -> usize {
            2
        }

        fn outline(&self, glyph: u16) -> Option<Arc<GlyphPath>> {
            (glyph == 1).then(|| {
                Arc::new(GlyphPath::from_commands(vec![
                    PathCommand::MoveTo { x: 0.0, y: 0.0 },
                    PathCommand::LineTo { x: 500.0, y: 0.0 },
                    PathCommand::LineTo { x: 500.0, y: 700.0 },
                    PathCommand::Close,
                ]))
            })
        }

        fn advance_width(&self, _glyph: u16) -> Option<u16> {
            Some(self.advance)
        }

        fn glyph_index(&self, c: char) -> Option<u16> {
            c.is_ascii_alphabetic().then_some(1)
        }
    }

    fn layer(source: &Boxes, color: Paint, opacity: f64) -> SpecimenLayer<'_> {
        SpecimenLayer { source, color, opacity }
    }

    fn single(options: &SpecimenOptions, text: &str) -> Result<Specimen> {
        render_specimen(&[layer(&MONO, options.color, 1.0)], text, options)
    }

    /// Mono and wide fonts at 100px: "ab" measures 160 and 240 wide, 165 tall.
    fn pair(options: &SpecimenOptions) -> Specimen {
        let layers = [
            layer(&MONO, Paint::Rgb(255, 0, 0), DEFAULT_LAYER_OPACITY),
            layer(&WIDE, Paint::Rgb(0, 0, 255), DEFAULT_LAYER_OPACITY),
        ];
        render_specimen(&layers, "ab", options).unwrap()
    }

    #[test]
    fn test_fit_width() {
        let options = SpecimenOptions { font_size: 100.0, ..Default::default() };
        let specimen = single(&options, "abc").unwrap();
        // 3 * 60px advance + 2 * 20px padding
        assert_eq!(specimen.width, 220);
        assert_eq!(specimen.height, 165);
        assert!(specimen.svg.contains("<path"));
        assert!(!specimen.svg.contains("fill-opacity"));
    }

    #[test]
    fn test_multiline_height() {
        let options = SpecimenOptions { font_size: 40.0, pad_v: 0.0, ..Default::default() };
        let specimen = single(&options, "ab\ncd").unwrap();
        assert_eq!(specimen.height, 100);
    }

    #[test]
    fn test_blank_text_rejected() {
        assert!(matches!(
            single(&SpecimenOptions::default(), "  "),
            Err(Error::EmptyExport)
        ));
        assert!(matches!(
            render_specimen(&[], "abc", &SpecimenOptions::default()),
            Err(Error::EmptyExport)
        ));
    }

    #[test]
    fn test_stacked_panels_fit_together() {
        let options = SpecimenOptions { font_size: 100.0, ..Default::default() };
        let specimen = pair(&options);
        assert_eq!(
            specimen.panels,
            [
                Panel { y: 0, width: 240, height: 165 },
                Panel { y: 165, width: 240, height: 165 },
            ]
        );
        assert_eq!((specimen.width, specimen.height), (240, 330));
        assert_eq!(specimen.svg.matches("<path").count(), 2);
    }

    #[test]
    fn test_stacked_panels_fit_separately() {
        let options = SpecimenOptions { font_size: 100.0, fit: Fit::Separate, ..Default::default() };
        let specimen = pair(&options);
        assert_eq!(specimen.panels[0].width, 160);
        assert_eq!(specimen.panels[1].width, 240);
        assert_eq!(specimen.width, 240);
    }

    #[test]
    fn test_overlay_shares_one_canvas() {
        let options = SpecimenOptions {
            font_size: 100.0,
            arrangement: Arrangement::Overlay,
            fit: Fit::Separate,
            ..Default::default()
        };
        let specimen = pair(&options);
        assert_eq!((specimen.width, specimen.height), (240, 165));
        assert!(specimen.panels.iter().all(|p| p.y == 0));
        assert_eq!(specimen.svg.matches(r#"fill-opacity="0.7""#).count(), 2);

        // Layer order is drawing order
        let red = specimen.svg.find("#ff0000").unwrap();
        let blue = specimen.svg.find("#0000ff").unwrap();
        assert!(red < blue);
    }

    #[test]
    fn test_fixed_canvas() {
        let options = SpecimenOptions {
            font_size: 100.0,
            fit: Fit::Fixed { width: 500, height: 80 },
            ..Default::default()
        };
        let specimen = pair(&options);
        assert_eq!((specimen.width, specimen.height), (500, 160));

        let options = SpecimenOptions { fit: Fit::Fixed { width: 0, height: 80 }, ..options };
        assert!(matches!(single(&options, "ab"), Err(Error::InvalidSetting { .. })));
    }

    #[test]
    fn test_opacity_validated() {
        let layers = [layer(&MONO, Paint::BLACK, 1.5)];
        assert!(matches!(
            render_specimen(&layers, "ab", &SpecimenOptions::default()),
            Err(Error::InvalidSetting { ref field, .. }) if field == "opacity"
        ));
    }

    #[test]
    fn test_auto_colors_cycle() {
        assert_eq!(auto_color(0), Paint::Rgb(255, 0, 0));
        assert_eq!(auto_color(8), auto_color(0));
        assert_eq!(LayerStyle::auto(1).color, Paint::Rgb(0, 0, 255));
    }
}
