//! CSS snippets: embedded `@font-face`, glyph classes and sprite classes.

use std::fmt::Write;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use super::sprite::SpriteSheet;
use crate::font::GlyphRecord;

/// Class name for a glyph: `<prefix>-<hex>` or `<prefix>-g<index>`.
pub fn class_name(prefix: &str, glyph_index: u16, hex: Option<&str>) -> String {
    hex.map_or_else(
        || format!("{prefix}-g{glyph_index}"),
        |h| format!("{prefix}-{}", h.to_ascii_lowercase()),
    )
}

fn font_mime(extension: &str) -> (&'static str, &'static str) {
    match extension {
        "otf" => ("font/otf", "opentype"),
        "woff" => ("font/woff", "woff"),
        _ => ("font/ttf", "truetype"),
    }
}

/// `@font-face` rule embedding the font as a base64 data URL.
pub fn font_face(family: &str, font_bytes: &[u8], extension: &str) -> String {
    let (mime, format) = font_mime(extension);
    let data = STANDARD.encode(font_bytes);
    format!(
        "@font-face {{\n  font-family: \"{family}\";\n  src: url(data:{mime};base64,{data}) format(\"{format}\");\n}}\n"
    )
}

/// One `::before` class per encoded glyph, drawing it through the font.
///
/// Unencoded glyphs cannot be addressed from CSS and are skipped.
pub fn glyph_classes(family: &str, prefix: &str, glyphs: &[GlyphRecord]) -> String {
    let mut css = format!(".{prefix} {{\n  font-family: \"{family}\";\n  font-style: normal;\n  font-weight: normal;\n  line-height: 1;\n}}\n");

    for glyph in glyphs {
        let Some(hex) = glyph.hex() else { continue };
        let _ = write!(
            css,
            "\n.{}::before {{\n  content: \"\\{hex}\";\n}}\n",
            class_name(prefix, glyph.index, Some(&hex))
        );
    }
    css
}

/// Font face plus glyph classes.
pub fn font_stylesheet(
    family: &str,
    prefix: &str,
    font_bytes: &[u8],
    extension: &str,
    glyphs: &[GlyphRecord],
) -> String {
    let mut css = font_face(family, font_bytes, extension);
    css.push('\n');
    css.push_str(&glyph_classes(family, prefix, glyphs));
    css
}

/// Classes that crop each tile out of a sprite image with `background-position`.
pub fn sprite_classes(sheet: &SpriteSheet, image_url: &str, prefix: &str) -> String {
    let mut css = format!(
        ".{prefix} {{\n  display: inline-block;\n  background-image: url(\"{image_url}\");\n  background-repeat: no-repeat;\n}}\n"
    );

    for tile in &sheet.tiles {
        let _ = write!(
            css,
            "\n.{} {{\n  width: {}px;\n  height: {}px;\n  background-position: {} {};\n}}\n",
            class_name(prefix, tile.index, tile.hex.as_deref()),
            tile.width,
            tile.height,
            offset(tile.x),
            offset(tile.y),
        );
    }
    css
}

fn offset(v: u32) -> String {
    if v == 0 {
        "0".to_string()
    } else {
        format!("-{v}px")
    }
}
