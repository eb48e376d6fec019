use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use tracing::{debug, info};
use ttf_parser::{Face, GlyphId};

use crate::error::{Error, Result};
use super::path::{GlyphPath, PathCollector};
use super::record::{FontMetrics, GlyphRecord};
use super::source::OutlineSource;
use super::woff;

/// Container format of a loaded font file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFormat {
    TrueType,
    OpenType,
    Woff,
}

impl FontFormat {
    /// Detect the format from a file name's extension.
    pub fn from_file_name(file_name: &str) -> Result<Self> {
        let ext = Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "ttf" => Ok(Self::TrueType),
            "otf" => Ok(Self::OpenType),
            "woff" => Ok(Self::Woff),
            "woff2" => Err(Error::UnsupportedFormat(
                "woff2 (WOFF2 requires external decompression)".to_string(),
            )),
            other => Err(Error::UnsupportedFormat(format!(".{other}"))),
        }
    }

    pub const fn extension(self) -> &'static str {
        match self {
            Self::TrueType => "ttf",
            Self::OpenType => "otf",
            Self::Woff => "woff",
        }
    }
}

struct FontData {
    /// Plain sfnt bytes (WOFF already unwrapped)
    sfnt: Vec<u8>,
    name: String,
    file_name: String,
    format: FontFormat,
    cache_id: String,
    metrics: FontMetrics,
    glyph_count: usize,
    glyphs: Vec<GlyphRecord>,
    /// Horizontal advance per glyph, read once at load
    advances: Vec<Option<u16>>,
    /// Code point to glyph id, first Unicode subtable wins
    cmap: HashMap<u32, u16>,
    /// Lazily extracted outlines, one slot per glyph
    outlines: Vec<OnceLock<Option<Arc<GlyphPath>>>>,
}

/// A parsed font file and its glyph records.
///
/// Cloning is O(1): the bytes, records and outline cache are shared.
#[derive(Clone)]
pub struct FontDocument {
    inner: Arc<FontData>,
}

impl FontDocument {
    /// Parse a font from bytes. `file_name` selects the format and the display name.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>, file_name: &str) -> Result<Self> {
        let bytes = bytes.into();
        let format = FontFormat::from_file_name(file_name)?;

        if woff::is_woff2(&bytes) {
            return Err(Error::UnsupportedFormat(
                "woff2 (WOFF2 requires external decompression)".to_string(),
            ));
        }

        let cache_id = format!("{:x}", md5::compute(&bytes));

        let sfnt = if woff::is_woff(&bytes) {
            debug!("Unwrapping WOFF container for {}", file_name);
            woff::unwrap(&bytes)?
        } else {
            bytes
        };

        let face = Face::parse(&sfnt, 0)
            .map_err(|e| Error::FontParse(format!("{file_name}: {e}")))?;

        let metrics = FontMetrics {
            ascender: face.ascender(),
            descender: face.descender(),
            units_per_em: face.units_per_em(),
        };

        let (glyphs, cmap) = build_records(&face);
        let glyph_count = glyphs.len();
        let advances = (0..glyph_count)
            .map(|i| u16::try_from(i).ok().and_then(|g| face.glyph_hor_advance(GlyphId(g))))
            .collect();

        info!("Loaded {} ({} glyphs)", file_name, glyph_count);

        let outlines = (0..glyph_count).map(|_| OnceLock::new()).collect();

        Ok(Self {
            inner: Arc::new(FontData {
                sfnt,
                name: display_name(file_name),
                file_name: file_name.to_string(),
                format,
                cache_id,
                metrics,
                glyph_count,
                glyphs,
                advances,
                cmap,
                outlines,
            }),
        })
    }

    /// Parse a font from a file path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();
        // Reject unsupported extensions before reading the file
        FontFormat::from_file_name(&file_name)?;

        let bytes = std::fs::read(path).map_err(|e| {
            Error::FontParse(format!("Failed to read file {}: {}", path.display(), e))
        })?;
        Self::from_bytes(bytes, &file_name)
    }

    /// Display name: the file name without its font extension.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn file_name(&self) -> &str {
        &self.inner.file_name
    }

    pub fn format(&self) -> FontFormat {
        self.inner.format
    }

    pub fn metrics(&self) -> FontMetrics {
        self.inner.metrics
    }

    /// All glyph records, indexed by glyph id.
    pub fn glyphs(&self) -> &[GlyphRecord] {
        &self.inner.glyphs
    }

    /// Plain sfnt bytes suitable for subsetting or embedding.
    pub fn sfnt_bytes(&self) -> &[u8] {
        &self.inner.sfnt
    }

    /// Extension for embedding [`sfnt_bytes`](Self::sfnt_bytes).
    ///
    /// Follows the outline flavor, so a WOFF input reports `ttf` or `otf`.
    pub fn sfnt_extension(&self) -> &'static str {
        sfnt_extension(&self.inner.sfnt)
    }

    /// Cache key component derived from the original file content (MD5 hex).
    pub fn cache_id(&self) -> &str {
        &self.inner.cache_id
    }

    /// Open the font for table access (creates a temporary handle)
    fn face(&self) -> Result<Face<'_>> {
        Face::parse(&self.inner.sfnt, 0)
            .map_err(|e| Error::FontParse(format!("{}: {e}", self.inner.file_name)))
    }
}

impl OutlineSource for FontDocument {
    fn metrics(&self) -> FontMetrics {
        self.inner.metrics
    }

    fn glyph_count(&self) -> usize {
        self.inner.glyph_count
    }

    fn outline(&self, glyph: u16) -> Option<Arc<GlyphPath>> {
        let slot = self.inner.outlines.get(usize::from(glyph))?;
        slot.get_or_init(|| {
            let face = self.face().ok()?;
            let mut collector = PathCollector::new();
            face.outline_glyph(GlyphId(glyph), &mut collector)?;
            let path = collector.finish();
            (!path.is_empty()).then(|| Arc::new(path))
        })
        .clone()
    }

    fn advance_width(&self, glyph: u16) -> Option<u16> {
        self.inner.advances.get(usize::from(glyph)).copied().flatten()
    }

    fn glyph_index(&self, c: char) -> Option<u16> {
        self.inner.cmap.get(&u32::from(c)).copied()
    }
}

impl std::fmt::Debug for FontDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontDocument")
            .field("name", &self.inner.name)
            .field("format", &self.inner.format)
            .field("glyph_count", &self.inner.glyph_count)
            .field("metrics", &self.inner.metrics)
            .finish()
    }
}

/// `otf` for CFF-flavored sfnt data, else `ttf`.
pub fn sfnt_extension(sfnt: &[u8]) -> &'static str {
    if sfnt.starts_with(b"OTTO") { "otf" } else { "ttf" }
}

/// Build one record per glyph index, with code points from every Unicode
/// cmap subtable, plus the code point lookup table.
fn build_records(face: &Face<'_>) -> (Vec<GlyphRecord>, HashMap<u32, u16>) {
    let count = usize::from(face.number_of_glyphs());
    let mut unicodes: Vec<Vec<u32>> = vec![Vec::new(); count];
    let mut cmap = HashMap::new();

    if let Some(table) = face.tables().cmap {
        for subtable in table.subtables {
            if !subtable.is_unicode() {
                continue;
            }
            subtable.codepoints(|cp| {
                if let Some(gid) = subtable.glyph_index(cp) {
                    // Mappings to .notdef mean "missing"
                    if gid.0 != 0
                        && let Some(list) = unicodes.get_mut(usize::from(gid.0))
                    {
                        list.push(cp);
                        cmap.entry(cp).or_insert(gid.0);
                    }
                }
            });
        }
    }

    let records = unicodes
        .into_iter()
        .enumerate()
        .map(|(i, mut cps)| {
            cps.sort_unstable();
            cps.dedup();
            let index = u16::try_from(i).unwrap_or(u16::MAX);
            let name = face.glyph_name(GlyphId(index)).map(str::to_string);
            GlyphRecord::new(index, cps, name)
        })
        .collect();
    (records, cmap)
}

fn display_name(file_name: &str) -> String {
    let lower = file_name.to_ascii_lowercase();
    for ext in [".ttf", ".otf", ".woff"] {
        if lower.ends_with(ext) {
            return file_name[..file_name.len() - ext.len()].to_string();
        }
    }
    file_name.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(FontFormat::from_file_name("a.TTF").unwrap(), FontFormat::TrueType);
        assert_eq!(FontFormat::from_file_name("a.otf").unwrap(), FontFormat::OpenType);
        assert_eq!(FontFormat::from_file_name("dir/a.woff").unwrap(), FontFormat::Woff);
    }

    #[test]
    fn test_unsupported_extensions() {
        assert!(matches!(
            FontFormat::from_file_name("a.woff2"),
            Err(Error::UnsupportedFormat(_))
        ));
        assert!(matches!(
            FontFormat::from_file_name("notes.txt"),
            Err(Error::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_display_name_strips_extension() {
        assert_eq!(display_name("Inter-Regular.ttf"), "Inter-Regular");
        assert_eq!(display_name("Icons.WOFF"), "Icons");
        assert_eq!(display_name("plain"), "plain");
    }

    #[test]
    fn test_sfnt_extension_follows_flavor() {
        assert_eq!(sfnt_extension(b"OTTO\0\x0a"), "otf");
        assert_eq!(sfnt_extension(&[0, 1, 0, 0, 0, 10]), "ttf");
    }

    #[test]
    fn test_invalid_bytes_fail_to_parse() {
        let result = FontDocument::from_bytes(vec![0, 1, 2, 3], "broken.ttf");
        assert!(matches!(result, Err(Error::FontParse(_))));
    }

    #[test]
    fn test_woff2_signature_rejected() {
        let result = FontDocument::from_bytes(b"wOF2\0\0\0\0".to_vec(), "font.woff");
        assert!(matches!(result, Err(Error::UnsupportedFormat(_))));
    }
}
