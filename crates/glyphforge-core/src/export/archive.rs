//! Zip packaging.

use std::io::{Cursor, Write};

use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::error::{Error, Result};

/// `<fontName>_<label>_glyphs`, the folder inside the archive and the archive's stem.
pub fn folder_name(font_name: &str, label: &str) -> String {
    format!("{}_{label}_glyphs", super::naming::sanitize_font_name(font_name))
}

/// In-memory zip archive with every entry under one folder.
pub struct ArchiveBuilder {
    writer: ZipWriter<Cursor<Vec<u8>>>,
    folder: String,
    options: SimpleFileOptions,
    entries: usize,
}

impl ArchiveBuilder {
    pub fn new(folder: impl Into<String>) -> Result<Self> {
        let folder = folder.into();
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .add_directory(format!("{folder}/"), options)
            .map_err(|e| Error::Archive(e.to_string()))?;

        Ok(Self {
            writer,
            folder,
            options,
            entries: 0,
        })
    }

    pub fn folder(&self) -> &str {
        &self.folder
    }

    /// Number of files added so far.
    pub const fn len(&self) -> usize {
        self.entries
    }

    pub const fn is_empty(&self) -> bool {
        self.entries == 0
    }

    /// Add `folder/name` with the given contents.
    pub fn add_file(&mut self, name: &str, data: &[u8]) -> Result<()> {
        self.writer
            .start_file(format!("{}/{name}", self.folder), self.options)
            .map_err(|e| Error::Archive(format!("{name}: {e}")))?;
        self.writer
            .write_all(data)
            .map_err(|e| Error::Archive(format!("{name}: {e}")))?;
        self.entries += 1;
        Ok(())
    }

    /// Finish the archive and return its bytes.
    pub fn finish(self) -> Result<Vec<u8>> {
        self.writer
            .finish()
            .map(Cursor::into_inner)
            .map_err(|e| Error::Archive(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn test_folder_name() {
        assert_eq!(folder_name("Noto Sans", "unicode"), "Noto_Sans_unicode_glyphs");
        assert_eq!(folder_name("Icons", "selected"), "Icons_selected_glyphs");
    }

    #[test]
    fn test_entries_land_in_folder() {
        let mut builder = ArchiveBuilder::new("F_all_glyphs").unwrap();
        builder.add_file("U+0041.svg", b"<svg/>").unwrap();
        builder.add_file("U+0041.png", &[1, 2, 3]).unwrap();
        assert_eq!(builder.len(), 2);
        let bytes = builder.finish().unwrap();

        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut svg = String::new();
        archive
            .by_name("F_all_glyphs/U+0041.svg")
            .unwrap()
            .read_to_string(&mut svg)
            .unwrap();
        assert_eq!(svg, "<svg/>");
        assert!(archive.by_name("F_all_glyphs/U+0041.png").is_ok());
    }
}
