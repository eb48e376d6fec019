//! Glyph SVG documents.

use svg::Document;
use svg::node::element::{Group, Path, Rectangle, SVG};

use crate::font::{FontMetrics, GlyphPath};
use crate::layout::{GlyphLayout, PaintStyle};
use crate::settings::{GlyphSettings, Paint};

/// Decimal places in exported path data.
pub const PATH_PRECISION: usize = 2;

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Build the standalone SVG document for one glyph.
///
/// A glyph without an outline still yields a canvas (with its background,
/// if any) so every exported glyph has a file.
pub fn glyph_document(
    outline: Option<&GlyphPath>,
    metrics: FontMetrics,
    settings: &GlyphSettings,
) -> Document {
    glyph_element(outline, metrics, settings).set("xmlns", SVG_NS)
}

/// Serialize [`glyph_document`] to a string.
pub fn glyph_svg(outline: Option<&GlyphPath>, metrics: FontMetrics, settings: &GlyphSettings) -> String {
    glyph_document(outline, metrics, settings).to_string()
}

/// The glyph as an `<svg>` element, usable standalone or nested in a sheet.
pub fn glyph_element(
    outline: Option<&GlyphPath>,
    metrics: FontMetrics,
    settings: &GlyphSettings,
) -> SVG {
    let (w, h) = (settings.canvas_width, settings.canvas_height);
    let style = PaintStyle::resolve(settings);

    let mut el = SVG::new()
        .set("width", w)
        .set("height", h)
        .set("viewBox", (0, 0, w, h));

    if let Some(bg) = style.background {
        el = el.add(
            Rectangle::new()
                .set("width", "100%")
                .set("height", "100%")
                .set("fill", paint_value(bg)),
        );
    }

    let mut group = Group::new().set("transform", transform(settings));
    if let Some(layout) = outline.and_then(|o| GlyphLayout::compute(o, metrics, settings)) {
        group = group.add(
            Path::new()
                .set("d", layout.path.to_path_data(PATH_PRECISION))
                .set("fill", paint_value(style.fill))
                .set("stroke", paint_value(style.stroke))
                .set("stroke-width", fmt_num(style.stroke_width))
                .set("stroke-linejoin", "round")
                .set("paint-order", "stroke"),
        );
    }

    el.add(group)
}

/// Rotation about the canvas center, then mirroring about it.
fn transform(settings: &GlyphSettings) -> String {
    let (cw, ch) = settings.canvas();
    let mut t = format!(
        "rotate({}, {}, {})",
        fmt_num(settings.rotate),
        fmt_num(cw / 2.0),
        fmt_num(ch / 2.0)
    );
    if settings.flip_h || settings.flip_v {
        let tx = if settings.flip_h { cw } else { 0.0 };
        let ty = if settings.flip_v { ch } else { 0.0 };
        t.push_str(&format!(" translate({}, {})", fmt_num(tx), fmt_num(ty)));
    }
    t.push_str(&format!(
        " scale({}, {})",
        if settings.flip_h { -1 } else { 1 },
        if settings.flip_v { -1 } else { 1 }
    ));
    t
}

/// SVG paint attribute value.
pub fn paint_value(paint: Paint) -> String {
    match paint {
        Paint::Transparent => "none".to_string(),
        rgb @ Paint::Rgb(..) => rgb.to_string(),
    }
}

/// Format a number with at most two decimals and no trailing zeros.
pub fn fmt_num(v: f64) -> String {
    let rounded = (v * 100.0).round() / 100.0 + 0.0;
    format!("{rounded}")
}
