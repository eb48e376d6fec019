//! Export file names.

use std::collections::HashSet;

use crate::blocks::FilterMode;
use crate::font::GlyphRecord;

const RESERVED: [char; 10] = ['/', '\\', '?', '%', '*', ':', '|', '"', '<', '>'];

/// Font name as used in archive and file names: whitespace runs become `_`.
pub fn sanitize_font_name(name: &str) -> String {
    let joined = name.split_whitespace().collect::<Vec<_>>().join("_");
    if joined.is_empty() {
        "font".to_string()
    } else {
        joined
    }
}

/// Replace characters that are unsafe in file names with `-`.
pub fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| if RESERVED.contains(&c) { '-' } else { c })
        .collect()
}

/// Expand a pattern for one glyph.
///
/// Tokens: `{fontName}`, `{name}`, `{hex}` (`NONE` without a code point)
/// and `{index}`. Every occurrence of a token is replaced.
pub fn expand_pattern(pattern: &str, font_name: &str, glyph: &GlyphRecord) -> String {
    let expanded = pattern
        .replace("{fontName}", font_name)
        .replace("{name}", &glyph.export_name())
        .replace("{hex}", glyph.hex().as_deref().unwrap_or("NONE"))
        .replace("{index}", &glyph.index.to_string());
    sanitize_file_name(&expanded)
}

/// Assigns unique base names to exported glyphs.
#[derive(Debug)]
pub struct FileNamer {
    font_name: String,
    pattern: String,
    ligature_pattern: String,
    mode: FilterMode,
    used: HashSet<String>,
}

impl FileNamer {
    pub fn new(
        font_name: &str,
        pattern: impl Into<String>,
        ligature_pattern: impl Into<String>,
        mode: FilterMode,
    ) -> Self {
        Self {
            font_name: sanitize_font_name(font_name),
            pattern: pattern.into(),
            ligature_pattern: ligature_pattern.into(),
            mode,
            used: HashSet::new(),
        }
    }

    /// Base name (no extension) before de-duplication.
    pub fn base_name(&self, glyph: &GlyphRecord) -> String {
        let pattern = if glyph.unicode.is_none() && self.mode == FilterMode::All {
            &self.ligature_pattern
        } else {
            &self.pattern
        };
        let name = expand_pattern(pattern, &self.font_name, glyph);
        if name.trim().is_empty() {
            format!("glyph_{}", glyph.index)
        } else {
            name
        }
    }

    /// Base name, suffixed with `_<index>` if already taken.
    pub fn name_for(&mut self, glyph: &GlyphRecord) -> String {
        let base = self.base_name(glyph);
        let mut name = base.clone();
        if self.used.contains(&name) {
            name = format!("{base}_{}", glyph.index);
        }
        let mut n = 2;
        while self.used.contains(&name) {
            name = format!("{base}_{}_{n}", glyph.index);
            n += 1;
        }
        self.used.insert(name.clone());
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyph(index: u16, cp: Option<u32>, name: &str) -> GlyphRecord {
        GlyphRecord::new(index, cp.into_iter().collect(), Some(name.to_string()))
    }

    #[test]
    fn test_default_pattern() {
        let namer = FileNamer::new("My Font", "U+{hex}", "{name}", FilterMode::Unicode);
        assert_eq!(namer.base_name(&glyph(36, Some(0x41), "A")), "U+0041");
    }

    #[test]
    fn test_ligature_pattern_only_in_all_mode() {
        let lig = glyph(300, None, "f_f_i");
        let all = FileNamer::new("F", "U+{hex}", "{name}", FilterMode::All);
        assert_eq!(all.base_name(&lig), "f_f_i");
        let unicode = FileNamer::new("F", "U+{hex}", "{name}", FilterMode::Unicode);
        assert_eq!(unicode.base_name(&lig), "U+NONE");
    }

    #[test]
    fn test_tokens_and_sanitizing() {
        let g = glyph(7, Some(0x2F), "slash");
        let out = expand_pattern("{fontName}_{index}_{name}", "My_Font", &g);
        assert_eq!(out, "My_Font_7_SOLIDUS");
        assert_eq!(sanitize_file_name(r#"a/b\c?d%e*f:g|h"i<j>k"#), "a-b-c-d-e-f-g-h-i-j-k");
    }

    #[test]
    fn test_duplicates_get_index_suffix() {
        let mut namer = FileNamer::new("F", "{fontName}", "{name}", FilterMode::Unicode);
        assert_eq!(namer.name_for(&glyph(1, Some(0x41), "A")), "F");
        assert_eq!(namer.name_for(&glyph(2, Some(0x42), "B")), "F_2");
        assert_eq!(namer.name_for(&glyph(3, Some(0x43), "C")), "F_3");
    }

    #[test]
    fn test_font_name_spaces() {
        assert_eq!(sanitize_font_name("Noto  Sans Bengali"), "Noto_Sans_Bengali");
        assert_eq!(sanitize_font_name("  "), "font");
    }
}
