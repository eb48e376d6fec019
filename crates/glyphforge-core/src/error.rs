use thiserror::Error;

/// Unified error type for glyphforge-core
///
/// This enum encompasses all error cases that can occur in the library:
/// - Font operations (reading, unwrapping, parsing)
/// - Settings operations (validation, color parsing)
/// - Export operations (SVG, PNG, archive, subset, sprite)
/// - Cache and configuration operations
/// - General I/O operations
#[derive(Error, Debug)]
pub enum Error {
    // ==========================================================================
    // Font Errors
    // ==========================================================================
    /// File extension is not one of ttf/otf/woff
    #[error("unsupported font format: {0} (expected .ttf, .otf or .woff)")]
    UnsupportedFormat(String),

    /// Failed to read or parse a font file
    #[error("failed to parse font: {0}")]
    FontParse(String),

    /// Failed to unwrap a WOFF container
    #[error("invalid WOFF data: {0}")]
    Woff(String),

    /// Glyph index outside the font
    #[error("invalid glyph index {index} (font has {total} glyphs)")]
    GlyphNotFound { index: u16, total: usize },

    /// No font is loaded in the session
    #[error("no font loaded")]
    NoFont,

    /// Font index outside the session's font list
    #[error("invalid font index {index} ({total} fonts loaded)")]
    FontIndex { index: usize, total: usize },

    // ==========================================================================
    // Settings Errors
    // ==========================================================================
    /// Color string could not be parsed
    #[error("invalid color '{0}' (expected #rgb, #rrggbb, a color name or 'transparent')")]
    InvalidColor(String),

    /// Setting value out of range
    #[error("invalid value for '{field}': {reason}")]
    InvalidSetting { field: String, reason: String },

    /// Unknown preset name
    #[error("unknown canvas preset: {0}")]
    UnknownPreset(String),

    // ==========================================================================
    // View Errors
    // ==========================================================================
    /// Page number outside the paginated view
    #[error("invalid page {page} (view has {total} pages)")]
    InvalidPage { page: usize, total: usize },

    /// Block name not present in the current classification
    #[error("unknown block: {0}")]
    UnknownBlock(String),

    // ==========================================================================
    // Export Errors
    // ==========================================================================
    /// Failed to rasterize an SVG
    #[error("failed to rasterize glyph: {0}")]
    Rasterize(String),

    /// Failed to write the zip archive
    #[error("failed to build archive: {0}")]
    Archive(String),

    /// Failed to subset a font
    #[error("failed to subset font: {0}")]
    Subset(String),

    /// Nothing to export for the requested scope
    #[error("no glyphs to export")]
    EmptyExport,

    /// Background task failed to complete
    #[error("background task failed: {0}")]
    Task(String),

    // ==========================================================================
    // Cache Errors
    // ==========================================================================
    /// Failed to initialize the cache
    #[error("failed to initialize cache: {0}")]
    CacheInit(String),

    /// Failed to write to cache
    #[error("failed to write to cache: {0}")]
    CacheWrite(String),

    // ==========================================================================
    // Configuration Errors
    // ==========================================================================
    /// Failed to load configuration file
    #[error("failed to load config: {0}")]
    ConfigLoad(String),

    /// Failed to load or store a session file
    #[error("session file error: {0}")]
    Session(String),

    // ==========================================================================
    // I/O Errors
    // ==========================================================================
    /// General I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
