//! Rendering settings: the global record, per-glyph overrides and presets.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::font::OutlineSource;

/// Vertical placement rule for a glyph inside its canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Positioning {
    /// Fixed baseline at 65% of the canvas height
    #[default]
    Baseline,
    /// Glyph bounding box centered vertically
    Center,
    /// Baseline derived from the font's ascender and descender
    Metrics,
}

impl Positioning {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Baseline => "baseline",
            Self::Center => "center",
            Self::Metrics => "metrics",
        }
    }
}

/// How the outline is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    #[default]
    Fill,
    Outline,
    /// Glyph knocked out of a solid tile painted in the glyph color
    Negative,
}

impl RenderMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fill => "fill",
            Self::Outline => "outline",
            Self::Negative => "negative",
        }
    }
}

/// A paint value: fully transparent or an opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Paint {
    Transparent,
    Rgb(u8, u8, u8),
}

impl Paint {
    pub const BLACK: Self = Self::Rgb(0, 0, 0);
    pub const WHITE: Self = Self::Rgb(0xff, 0xff, 0xff);

    pub const fn is_transparent(self) -> bool {
        matches!(self, Self::Transparent)
    }

    /// Look up a named color.
    pub fn from_name(name: &str) -> Option<Self> {
        let rgb = match name.to_lowercase().as_str() {
            "black" => (0x00, 0x00, 0x00),
            "white" => (0xff, 0xff, 0xff),
            "red" => (0xff, 0x00, 0x00),
            "green" => (0x00, 0x80, 0x00),
            "blue" => (0x00, 0x00, 0xff),
            "orange" => (0xff, 0xa5, 0x00),
            "purple" => (0x80, 0x00, 0x80),
            "teal" => (0x00, 0x80, 0x80),
            "magenta" | "fuchsia" => (0xff, 0x00, 0xff),
            "brown" => (0xa5, 0x2a, 0x2a),
            "gray" | "grey" => (0x80, 0x80, 0x80),
            "darkred" | "dark_red" | "dark-red" => (0x8b, 0x00, 0x00),
            "violet" => (0x7c, 0x3a, 0xed),
            _ => return None,
        };
        Some(Self::Rgb(rgb.0, rgb.1, rgb.2))
    }

    /// Parse `#rgb` or `#rrggbb`.
    fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        match digits.len() {
            3 => {
                let mut it = digits.chars().map(|c| channel(&format!("{c}{c}")));
                Some(Self::Rgb(it.next()??, it.next()??, it.next()??))
            }
            6 => Some(Self::Rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            _ => None,
        }
    }

    /// RGBA channels; transparent maps to all zeros.
    pub const fn to_rgba(self) -> [u8; 4] {
        match self {
            Self::Transparent => [0, 0, 0, 0],
            Self::Rgb(r, g, b) => [r, g, b, 0xff],
        }
    }
}

impl FromStr for Paint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("transparent") || s.eq_ignore_ascii_case("none") {
            return Ok(Self::Transparent);
        }
        Self::from_hex(s)
            .or_else(|| Self::from_name(s))
            .ok_or_else(|| Error::InvalidColor(s.to_string()))
    }
}

impl TryFrom<String> for Paint {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Paint> for String {
    fn from(paint: Paint) -> Self {
        paint.to_string()
    }
}

impl std::fmt::Display for Paint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transparent => f.write_str("transparent"),
            Self::Rgb(r, g, b) => write!(f, "#{r:02x}{g:02x}{b:02x}"),
        }
    }
}

/// Canvas size presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    #[default]
    Custom,
    Android,
    Favicon,
    Ios,
    Large,
}

impl Preset {
    pub const ALL: [Self; 5] = [
        Self::Custom,
        Self::Android,
        Self::Favicon,
        Self::Ios,
        Self::Large,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Custom => "custom",
            Self::Android => "android",
            Self::Favicon => "favicon",
            Self::Ios => "ios",
            Self::Large => "large",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Custom => "Custom Dimensions",
            Self::Android => "Android (24x24)",
            Self::Favicon => "Favicon (32x32)",
            Self::Ios => "iOS (60x60)",
            Self::Large => "Large (512x512)",
        }
    }

    /// Canvas width and height in pixels.
    pub const fn size(self) -> (u32, u32) {
        match self {
            Self::Custom => (100, 100),
            Self::Android => (24, 24),
            Self::Favicon => (32, 32),
            Self::Ios => (60, 60),
            Self::Large => (512, 512),
        }
    }
}

impl FromStr for Preset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownPreset(s.to_string()))
    }
}

/// Rendering parameters for one glyph (or for every glyph without an override).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlyphSettings {
    /// Multiplier on the padded canvas size
    pub scale: f64,
    /// Percentage of the canvas reserved as margin, in `[0, 100)`
    pub padding: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    /// Rotation in degrees around the canvas center
    pub rotate: f64,
    pub flip_h: bool,
    pub flip_v: bool,
    pub positioning: Positioning,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub color: Paint,
    pub stroke_width: f64,
    pub background: Paint,
    pub render_mode: RenderMode,
}

impl Default for GlyphSettings {
    fn default() -> Self {
        Self {
            scale: 0.85,
            padding: 10.0,
            translate_x: 0.0,
            translate_y: 12.0,
            rotate: 0.0,
            flip_h: false,
            flip_v: false,
            positioning: Positioning::Baseline,
            canvas_width: 100,
            canvas_height: 100,
            color: Paint::BLACK,
            stroke_width: 1.0,
            background: Paint::Transparent,
            render_mode: RenderMode::Fill,
        }
    }
}

impl GlyphSettings {
    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        let invalid = |field: &str, reason: &str| Error::InvalidSetting {
            field: field.to_string(),
            reason: reason.to_string(),
        };

        if self.canvas_width == 0 {
            return Err(invalid("canvas_width", "must be at least 1"));
        }
        if self.canvas_height == 0 {
            return Err(invalid("canvas_height", "must be at least 1"));
        }
        if !(0.0..100.0).contains(&self.padding) {
            return Err(invalid("padding", "must be in [0, 100)"));
        }
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(invalid("scale", "must be greater than 0"));
        }
        if !self.stroke_width.is_finite() || self.stroke_width < 0.0 {
            return Err(invalid("stroke_width", "must be non-negative"));
        }
        for (field, value) in [
            ("translate_x", self.translate_x),
            ("translate_y", self.translate_y),
            ("rotate", self.rotate),
        ] {
            if !value.is_finite() {
                return Err(invalid(field, "must be a finite number"));
            }
        }
        Ok(())
    }

    /// Canvas size as floats.
    pub fn canvas(&self) -> (f64, f64) {
        (f64::from(self.canvas_width), f64::from(self.canvas_height))
    }
}

/// A single-field edit applied through [`SettingsModel::apply`].
#[derive(Debug, Clone, PartialEq)]
pub enum SettingChange {
    Scale(f64),
    Padding(f64),
    TranslateX(f64),
    TranslateY(f64),
    Rotate(f64),
    FlipH(bool),
    FlipV(bool),
    Positioning(Positioning),
    CanvasWidth(u32),
    CanvasHeight(u32),
    /// Both canvas dimensions from a preset
    Preset(Preset),
    Color(Paint),
    StrokeWidth(f64),
    Background(Paint),
    RenderMode(RenderMode),
}

impl SettingChange {
    /// Write the change into a settings record.
    pub fn apply_to(&self, settings: &mut GlyphSettings) {
        match *self {
            Self::Scale(v) => settings.scale = v,
            Self::Padding(v) => settings.padding = v,
            Self::TranslateX(v) => settings.translate_x = v,
            Self::TranslateY(v) => settings.translate_y = v,
            Self::Rotate(v) => settings.rotate = v,
            Self::FlipH(v) => settings.flip_h = v,
            Self::FlipV(v) => settings.flip_v = v,
            Self::Positioning(v) => settings.positioning = v,
            Self::CanvasWidth(v) => settings.canvas_width = v,
            Self::CanvasHeight(v) => settings.canvas_height = v,
            Self::Preset(p) => {
                let (w, h) = p.size();
                settings.canvas_width = w;
                settings.canvas_height = h;
            }
            Self::Color(v) => settings.color = v,
            Self::StrokeWidth(v) => settings.stroke_width = v,
            Self::Background(v) => settings.background = v,
            Self::RenderMode(v) => settings.render_mode = v,
        }
    }
}

/// Saved state of a [`SettingsModel`], as stored in the undo history.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SettingsSnapshot {
    pub global: GlyphSettings,
    #[serde(default)]
    pub overrides: BTreeMap<u16, GlyphSettings>,
}

impl SettingsSnapshot {
    /// Validate the global record and every override.
    pub fn validate(&self) -> Result<()> {
        self.global.validate()?;
        self.overrides.values().try_for_each(GlyphSettings::validate)
    }
}

/// The global settings record plus per-glyph overrides.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SettingsModel {
    global: GlyphSettings,
    overrides: BTreeMap<u16, GlyphSettings>,
}

impl SettingsModel {
    pub fn new(global: GlyphSettings) -> Self {
        Self {
            global,
            overrides: BTreeMap::new(),
        }
    }

    pub const fn global(&self) -> &GlyphSettings {
        &self.global
    }

    pub const fn overrides(&self) -> &BTreeMap<u16, GlyphSettings> {
        &self.overrides
    }

    pub fn has_override(&self, index: u16) -> bool {
        self.overrides.contains_key(&index)
    }

    /// Settings in force for a glyph: its override, else the global record.
    pub fn effective(&self, index: u16) -> &GlyphSettings {
        self.overrides.get(&index).unwrap_or(&self.global)
    }

    /// Apply one change.
    ///
    /// With an empty selection the global record is edited. Otherwise every
    /// selected glyph gets an override seeded from its effective settings.
    /// Nothing is written when the result fails validation.
    pub fn apply(&mut self, selection: &[u16], change: &SettingChange) -> Result<()> {
        if selection.is_empty() {
            let mut next = self.global.clone();
            change.apply_to(&mut next);
            next.validate()?;
            self.global = next;
            return Ok(());
        }

        let mut updated = Vec::with_capacity(selection.len());
        for &index in selection {
            let mut next = self.effective(index).clone();
            change.apply_to(&mut next);
            next.validate()?;
            updated.push((index, next));
        }
        self.overrides.extend(updated);
        Ok(())
    }

    /// Set a glyph's translation, creating an override if needed.
    pub fn set_glyph_position(
        &mut self,
        index: u16,
        translate_x: f64,
        translate_y: f64,
    ) -> Result<()> {
        let mut next = self.effective(index).clone();
        next.translate_x = translate_x;
        next.translate_y = translate_y;
        next.validate()?;
        self.overrides.insert(index, next);
        Ok(())
    }

    /// Scale each target so its outline fills the em box, centered.
    ///
    /// Glyphs with no outline or a zero-width/height bounding box are
    /// skipped. Returns the number of glyphs fitted.
    pub fn auto_fit(
        &mut self,
        targets: impl IntoIterator<Item = u16>,
        source: &dyn OutlineSource,
    ) -> usize {
        let upem = f64::from(source.units_per_em());
        let mut fitted = 0;

        for index in targets {
            let Some(bbox) = source.outline(index).and_then(|o| o.bounding_box()) else {
                continue;
            };
            let (w, h) = (bbox.width(), bbox.height());
            if w == 0.0 || h == 0.0 {
                continue;
            }

            let mut next = self.effective(index).clone();
            next.scale = upem / w.max(h);
            next.translate_x = 0.0;
            next.translate_y = 0.0;
            next.positioning = Positioning::Center;
            self.overrides.insert(index, next);
            fitted += 1;
        }

        debug!("Auto-fit {} glyphs", fitted);
        fitted
    }

    /// Drop all overrides, keeping the global record.
    pub fn clear_overrides(&mut self) {
        self.overrides.clear();
    }

    /// Restore defaults and drop all overrides.
    pub fn reset(&mut self, defaults: GlyphSettings) {
        self.global = defaults;
        self.overrides.clear();
    }

    pub fn snapshot(&self) -> SettingsSnapshot {
        SettingsSnapshot {
            global: self.global.clone(),
            overrides: self.overrides.clone(),
        }
    }

    pub fn restore(&mut self, snapshot: SettingsSnapshot) {
        self.global = snapshot.global;
        self.overrides = snapshot.overrides;
    }
}
