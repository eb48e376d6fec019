use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::export::ExportFormat;
use crate::history::DEFAULT_HISTORY_LIMIT;
use crate::paginate::DEFAULT_PER_PAGE;
use crate::scan::{DEFAULT_BATCH_SIZE, DEFAULT_TOLERANCE};
use crate::settings::GlyphSettings;

/// Default file name pattern for glyphs with a code point.
pub const DEFAULT_FILENAME_PATTERN: &str = "U+{hex}";
/// Default file name pattern for unencoded glyphs.
pub const DEFAULT_LIGATURE_PATTERN: &str = "{name}";

/// Export defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub format: ExportFormat,

    /// PNG resolution multiplier over the canvas size
    pub png_scale: f32,

    /// Pattern for glyphs with a code point (`{fontName}`, `{name}`, `{hex}`, `{index}`)
    pub filename_pattern: String,

    /// Pattern for unencoded glyphs when exporting in `all` mode
    pub ligature_pattern: String,

    /// Directory archives are written to (defaults to the working directory)
    pub output_dir: Option<PathBuf>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: ExportFormat::Svg,
            png_scale: 1.0,
            filename_pattern: DEFAULT_FILENAME_PATTERN.to_string(),
            ligature_pattern: DEFAULT_LIGATURE_PATTERN.to_string(),
            output_dir: None,
        }
    }
}

/// Clipping scan configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    pub batch_size: usize,
    /// Pixels a glyph may overhang the canvas before it is flagged
    pub tolerance: f64,
    /// Delay before a background scan starts
    pub debounce_ms: u64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            tolerance: DEFAULT_TOLERANCE,
            debounce_ms: 1000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    pub per_page: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

/// Cache configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Enable memory cache
    #[serde(default = "default_true")]
    pub memory_enabled: bool,

    /// Memory cache budget in megabytes
    #[serde(default = "default_memory_max_mb")]
    pub memory_max_mb: u64,

    /// Memory cache TTL in seconds (0 = no expiry)
    #[serde(default)]
    pub memory_ttl_seconds: u64,

    /// Enable disk cache
    #[serde(default = "default_true")]
    pub disk_enabled: bool,

    /// Disk cache directory (defaults to $XDG_CACHE_HOME/glyphforge)
    pub disk_path: Option<PathBuf>,
}

const fn default_true() -> bool {
    true
}

const fn default_memory_max_mb() -> u64 {
    64
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            memory_enabled: true,
            memory_max_mb: default_memory_max_mb(),
            memory_ttl_seconds: 0,
            disk_enabled: true,
            disk_path: None,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Settings a fresh session (and `reset`) starts from
    #[serde(default)]
    pub defaults: GlyphSettings,

    #[serde(default)]
    pub export: ExportConfig,

    #[serde(default)]
    pub scan: ScanConfig,

    #[serde(default)]
    pub pagination: PaginationConfig,

    /// Undo steps kept
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    #[serde(default)]
    pub cache: CacheConfig,
}

const fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: GlyphSettings::default(),
            export: ExportConfig::default(),
            scan: ScanConfig::default(),
            pagination: PaginationConfig::default(),
            history_limit: default_history_limit(),
            cache: CacheConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::ConfigLoad(format!("Failed to read config file {}: {e}", path.display()))
        })?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| Error::ConfigLoad(format!("Failed to parse config: {e}")))?;
        config.defaults.validate()?;
        Ok(config)
    }

    /// Load from default locations (~/.config/glyphforge/config.toml, ./config.toml)
    pub fn load() -> Self {
        if let Some(config_dir) = crate::util::config_dir() {
            let user_config = config_dir.join("glyphforge").join("config.toml");
            if user_config.exists() {
                match Self::from_file(&user_config) {
                    Ok(config) => {
                        tracing::debug!("Loaded config from {}", user_config.display());
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        let local_config = PathBuf::from("config.toml");
        if local_config.exists() {
            match Self::from_file(&local_config) {
                Ok(config) => {
                    tracing::debug!("Loaded config from ./config.toml");
                    return config;
                }
                Err(e) => {
                    tracing::warn!("Failed to load ./config.toml: {}", e);
                }
            }
        }

        tracing::debug!("No config file found, using defaults");
        Self::default()
    }
}
