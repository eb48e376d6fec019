//! Glyph search.

use crate::font::GlyphRecord;

/// Whether a glyph matches a search term.
///
/// The term is matched case-insensitively against the glyph name, the
/// Unicode display name, the `U+XXXX` label, the raw lower-case hex of the
/// code point, and the character itself.
pub fn matches(glyph: &GlyphRecord, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    matches_lowered(glyph, &term)
}

fn matches_lowered(glyph: &GlyphRecord, term: &str) -> bool {
    let contains = |s: &str| s.to_lowercase().contains(term);

    glyph.name.as_deref().is_some_and(contains)
        || contains(&glyph.unicode_name)
        || contains(&glyph.label())
        || glyph
            .unicode
            .is_some_and(|cp| format!("{cp:x}").contains(term))
        || glyph
            .character()
            .is_some_and(|c| c.to_lowercase().to_string().contains(term))
}

/// Keep the glyphs matching `term`. A blank term keeps everything.
pub fn filter(glyphs: &[GlyphRecord], term: &str) -> Vec<GlyphRecord> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return glyphs.to_vec();
    }
    glyphs
        .iter()
        .filter(|g| matches_lowered(g, &term))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<GlyphRecord> {
        vec![
            GlyphRecord::new(36, vec![0x41], Some("A".into())),
            GlyphRecord::new(70, vec![0x0995], Some("uni0995".into())),
            GlyphRecord::new(300, vec![], Some("f_f_i".into())),
        ]
    }

    #[test]
    fn test_blank_term_keeps_all() {
        assert_eq!(filter(&sample(), "   ").len(), 3);
    }

    #[test]
    fn test_match_by_label() {
        let hits = filter(&sample(), "U+0995");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].index, 70);
    }

    #[test]
    fn test_match_by_raw_hex() {
        let hits = filter(&sample(), "995");
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_match_by_glyph_name() {
        let hits = filter(&sample(), "F_F");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].index, 300);
    }

    #[test]
    fn test_match_by_unicode_name() {
        assert!(matches(&sample()[0], "capital letter"));
    }

    #[test]
    fn test_match_by_character() {
        assert!(matches(&sample()[0], "a"));
        assert!(!matches(&sample()[2], "zzz"));
    }
}
