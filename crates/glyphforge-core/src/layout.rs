//! Glyph placement inside a canvas.
//!
//! The same computation drives SVG export, rasterization and the clipping
//! scanner, so a glyph flagged as clipped is exactly the one that would be
//! cut off in the exported file.

use crate::font::{BoundingBox, FontMetrics, GlyphPath};
use crate::settings::{GlyphSettings, Paint, Positioning, RenderMode};

/// Fraction of the canvas height used as the baseline in [`Positioning::Baseline`].
const BASELINE_RATIO: f64 = 0.65;

/// A glyph outline placed in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphLayout {
    pub font_size: f64,
    /// Pen origin
    pub x: f64,
    pub y: f64,
    /// Outline in canvas pixels (Y down)
    pub path: GlyphPath,
    pub bbox: BoundingBox,
}

impl GlyphLayout {
    /// Place an outline according to its settings.
    ///
    /// Returns `None` for empty outlines.
    pub fn compute(
        outline: &GlyphPath,
        metrics: FontMetrics,
        settings: &GlyphSettings,
    ) -> Option<Self> {
        let upem = metrics.units_per_em;
        let (cw, ch) = settings.canvas();
        let pad = 1.0 - settings.padding / 100.0;
        let font_size = cw.min(ch) * pad * settings.scale;

        let measure = outline.place(0.0, 0.0, font_size, upem).bounding_box()?;
        let x = cw / 2.0 + settings.translate_x - measure.width() / 2.0 - measure.x0;

        let y = match (settings.positioning, metrics.baseline_ratio()) {
            (Positioning::Center, _) => {
                ch / 2.0 + settings.translate_y + measure.height() / 2.0 - measure.y1
            }
            (Positioning::Metrics, Some(ratio)) => {
                let available = ch * pad;
                (ch - available) / 2.0 + available * ratio + settings.translate_y
            }
            _ => ch * BASELINE_RATIO + settings.translate_y,
        };

        let path = outline.place(x, y, font_size, upem);
        let bbox = path.bounding_box()?;

        Some(Self {
            font_size,
            x,
            y,
            path,
            bbox,
        })
    }

    /// Whether the placed outline leaves the canvas by more than `tolerance` pixels.
    pub fn is_clipped(&self, settings: &GlyphSettings, tolerance: f64) -> bool {
        let (cw, ch) = settings.canvas();
        self.bbox.exceeds(cw, ch, tolerance)
    }
}

/// Fill and stroke parameters for one rendered glyph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintStyle {
    /// `Transparent` renders as no fill
    pub fill: Paint,
    pub stroke: Paint,
    pub stroke_width: f64,
    /// Canvas background, painted before the glyph
    pub background: Option<Paint>,
}

impl PaintStyle {
    /// Derive the paint for a settings record.
    ///
    /// A stroke width of 1 is neutral. Values above 1 embolden the glyph
    /// with a stroke in its own color; values below 1 thin it by stroking
    /// in the background color, which is only possible on an opaque
    /// background.
    pub fn resolve(settings: &GlyphSettings) -> Self {
        let sw = settings.stroke_width;
        let width = (sw - 1.0).abs() * 2.0;
        let transparent_bg = settings.background.is_transparent();
        let final_width = if sw < 1.0 && transparent_bg { 0.0 } else { width };
        let background = (!transparent_bg).then_some(settings.background);

        match settings.render_mode {
            RenderMode::Outline => Self {
                fill: Paint::Transparent,
                stroke: settings.color,
                stroke_width: if sw <= 1.0 { 1.0 } else { final_width },
                background,
            },
            RenderMode::Negative => {
                let fill = if transparent_bg {
                    Paint::WHITE
                } else {
                    settings.background
                };
                Self {
                    fill,
                    stroke: fill,
                    stroke_width: final_width,
                    background: Some(settings.color),
                }
            }
            RenderMode::Fill => Self {
                fill: settings.color,
                stroke: if sw < 1.0 {
                    settings.background
                } else {
                    settings.color
                },
                stroke_width: final_width,
                background,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::PathCommand;

    fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> GlyphPath {
        GlyphPath::from_commands(vec![
            PathCommand::MoveTo { x: x0, y: y0 },
            PathCommand::LineTo { x: x1, y: y0 },
            PathCommand::LineTo { x: x1, y: y1 },
            PathCommand::LineTo { x: x0, y: y1 },
            PathCommand::Close,
        ])
    }

    fn metrics() -> FontMetrics {
        FontMetrics { ascender: 800, descender: -200, units_per_em: 1000 }
    }

    #[test]
    fn test_empty_outline_has_no_layout() {
        assert!(GlyphLayout::compute(&GlyphPath::new(), metrics(), &GlyphSettings::default()).is_none());
    }

    #[test]
    fn test_horizontal_centering() {
        let settings = GlyphSettings { padding: 0.0, scale: 1.0, ..Default::default() };
        // 100px font size, glyph 200..600 units => 20..60 px wide 40
        let layout = GlyphLayout::compute(&rect(200.0, 0.0, 600.0, 700.0), metrics(), &settings).unwrap();
        assert!((layout.font_size - 100.0).abs() < 1e-9);
        assert!((layout.bbox.x0 - 30.0).abs() < 1e-9);
        assert!((layout.bbox.x1 - 70.0).abs() < 1e-9);
    }

    #[test]
    fn test_center_positioning() {
        let settings = GlyphSettings {
            padding: 0.0,
            scale: 0.5,
            translate_y: 0.0,
            positioning: Positioning::Center,
            ..Default::default()
        };
        let layout = GlyphLayout::compute(&rect(0.0, 0.0, 1000.0, 1000.0), metrics(), &settings).unwrap();
        assert!((layout.bbox.y0 - 25.0).abs() < 1e-9);
        assert!((layout.bbox.y1 - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_baseline_positioning() {
        let settings = GlyphSettings::default();
        let layout = GlyphLayout::compute(&rect(0.0, 0.0, 500.0, 500.0), metrics(), &settings).unwrap();
        assert!((layout.y - 77.0).abs() < 1e-9);
        // Outline sits on the baseline
        assert!((layout.bbox.y1 - 77.0).abs() < 1e-9);
    }

    #[test]
    fn test_metrics_positioning() {
        let settings = GlyphSettings {
            positioning: Positioning::Metrics,
            translate_y: 0.0,
            ..Default::default()
        };
        let layout = GlyphLayout::compute(&rect(0.0, 0.0, 500.0, 500.0), metrics(), &settings).unwrap();
        // (100 - 90) / 2 + 90 * 0.8
        assert!((layout.y - 77.0).abs() < 1e-9);
    }

    #[test]
    fn test_metrics_falls_back_on_degenerate_font() {
        let flat = FontMetrics { ascender: 0, descender: 0, units_per_em: 1000 };
        let settings = GlyphSettings {
            positioning: Positioning::Metrics,
            translate_y: 0.0,
            ..Default::default()
        };
        let layout = GlyphLayout::compute(&rect(0.0, 0.0, 500.0, 500.0), flat, &settings).unwrap();
        assert!((layout.y - 65.0).abs() < 1e-9);
    }

    #[test]
    fn test_clipping_detection() {
        let settings = GlyphSettings { scale: 3.0, ..Default::default() };
        let layout = GlyphLayout::compute(&rect(0.0, 0.0, 1000.0, 1000.0), metrics(), &settings).unwrap();
        assert!(layout.is_clipped(&settings, 0.1));

        let settings = GlyphSettings {
            positioning: Positioning::Center,
            translate_y: 0.0,
            ..Default::default()
        };
        let layout = GlyphLayout::compute(&rect(0.0, 0.0, 1000.0, 1000.0), metrics(), &settings).unwrap();
        assert!(!layout.is_clipped(&settings, 0.1));
    }

    #[test]
    fn test_paint_fill_default() {
        let style = PaintStyle::resolve(&GlyphSettings::default());
        assert_eq!(style.fill, Paint::BLACK);
        assert_eq!(style.stroke, Paint::BLACK);
        assert!(style.stroke_width.abs() < 1e-9);
        assert!(style.background.is_none());
    }

    #[test]
    fn test_paint_thin_on_transparent_has_no_stroke() {
        let settings = GlyphSettings { stroke_width: 0.5, ..Default::default() };
        let style = PaintStyle::resolve(&settings);
        assert!(style.stroke_width.abs() < 1e-9);

        let settings = GlyphSettings {
            stroke_width: 0.5,
            background: Paint::WHITE,
            ..Default::default()
        };
        let style = PaintStyle::resolve(&settings);
        assert_eq!(style.stroke, Paint::WHITE);
        assert!((style.stroke_width - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_paint_outline() {
        let settings = GlyphSettings {
            render_mode: RenderMode::Outline,
            stroke_width: 3.0,
            ..Default::default()
        };
        let style = PaintStyle::resolve(&settings);
        assert_eq!(style.fill, Paint::Transparent);
        assert!((style.stroke_width - 4.0).abs() < 1e-9);

        let thin = GlyphSettings { render_mode: RenderMode::Outline, ..Default::default() };
        assert!((PaintStyle::resolve(&thin).stroke_width - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_paint_negative() {
        let settings = GlyphSettings {
            render_mode: RenderMode::Negative,
            color: Paint::Rgb(255, 0, 0),
            ..Default::default()
        };
        let style = PaintStyle::resolve(&settings);
        assert_eq!(style.fill, Paint::WHITE);
        assert_eq!(style.stroke, Paint::WHITE);
        assert_eq!(style.background, Some(Paint::Rgb(255, 0, 0)));
    }
}
