//! Glyph outlines as drawable paths.
//!
//! Outlines come out of the font in font units with Y pointing up. A
//! [`GlyphPath::place`] call converts them into pixel space (Y pointing
//! down) at a given origin and font size, which is the space used by the
//! layout engine, the clipping scanner and the SVG exporter.

use std::fmt::Write;

/// A single outline drawing command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    QuadTo { x1: f64, y1: f64, x: f64, y: f64 },
    CurveTo { x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64 },
    Close,
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl BoundingBox {
    pub const fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    /// Whether any edge lies outside `[0, width] x [0, height]` by more than `tolerance`.
    pub fn exceeds(&self, width: f64, height: f64, tolerance: f64) -> bool {
        self.x0 < -tolerance
            || self.y0 < -tolerance
            || self.x1 > width + tolerance
            || self.y1 > height + tolerance
    }

    fn include(&mut self, x: f64, y: f64) {
        self.x0 = self.x0.min(x);
        self.y0 = self.y0.min(y);
        self.x1 = self.x1.max(x);
        self.y1 = self.y1.max(y);
    }
}

/// A glyph outline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlyphPath {
    commands: Vec<PathCommand>,
}

impl GlyphPath {
    pub const fn new() -> Self {
        Self { commands: Vec::new() }
    }

    pub fn from_commands(commands: Vec<PathCommand>) -> Self {
        Self { commands }
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn push(&mut self, command: PathCommand) {
        self.commands.push(command);
    }

    /// Place a font-unit outline into pixel space.
    ///
    /// `(x, y)` is the pen origin on the baseline. Font units are scaled by
    /// `font_size / units_per_em` and the Y axis is flipped.
    pub fn place(&self, x: f64, y: f64, font_size: f64, units_per_em: u16) -> Self {
        let s = font_size / f64::from(units_per_em.max(1));
        self.map_points(|px, py| (x + px * s, y - py * s))
    }

    /// Shift every point by `(dx, dy)`.
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        self.map_points(|x, y| (x + dx, y + dy))
    }

    fn map_points(&self, f: impl Fn(f64, f64) -> (f64, f64)) -> Self {
        let commands = self
            .commands
            .iter()
            .map(|cmd| match *cmd {
                PathCommand::MoveTo { x, y } => {
                    let (x, y) = f(x, y);
                    PathCommand::MoveTo { x, y }
                }
                PathCommand::LineTo { x, y } => {
                    let (x, y) = f(x, y);
                    PathCommand::LineTo { x, y }
                }
                PathCommand::QuadTo { x1, y1, x, y } => {
                    let (x1, y1) = f(x1, y1);
                    let (x, y) = f(x, y);
                    PathCommand::QuadTo { x1, y1, x, y }
                }
                PathCommand::CurveTo { x1, y1, x2, y2, x, y } => {
                    let (x1, y1) = f(x1, y1);
                    let (x2, y2) = f(x2, y2);
                    let (x, y) = f(x, y);
                    PathCommand::CurveTo { x1, y1, x2, y2, x, y }
                }
                PathCommand::Close => PathCommand::Close,
            })
            .collect();

        Self { commands }
    }

    /// Exact bounds of the drawn outline, curve extrema included.
    ///
    /// Returns `None` for a path with no points.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let mut bb: Option<BoundingBox> = None;
        let mut include = |x: f64, y: f64| match bb.as_mut() {
            Some(b) => b.include(x, y),
            None => bb = Some(BoundingBox::new(x, y, x, y)),
        };

        let (mut cx, mut cy) = (0.0, 0.0);
        let (mut sx, mut sy) = (0.0, 0.0);

        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo { x, y } => {
                    include(x, y);
                    (cx, cy) = (x, y);
                    (sx, sy) = (x, y);
                }
                PathCommand::LineTo { x, y } => {
                    include(x, y);
                    (cx, cy) = (x, y);
                }
                PathCommand::QuadTo { x1, y1, x, y } => {
                    include(x, y);
                    for t in quad_extrema(cx, x1, x).into_iter().flatten() {
                        include(quad_at(cx, x1, x, t), quad_at(cy, y1, y, t));
                    }
                    for t in quad_extrema(cy, y1, y).into_iter().flatten() {
                        include(quad_at(cx, x1, x, t), quad_at(cy, y1, y, t));
                    }
                    (cx, cy) = (x, y);
                }
                PathCommand::CurveTo { x1, y1, x2, y2, x, y } => {
                    include(x, y);
                    for t in cubic_extrema(cx, x1, x2, x).into_iter().flatten() {
                        include(cubic_at(cx, x1, x2, x, t), cubic_at(cy, y1, y2, y, t));
                    }
                    for t in cubic_extrema(cy, y1, y2, y).into_iter().flatten() {
                        include(cubic_at(cx, x1, x2, x, t), cubic_at(cy, y1, y2, y, t));
                    }
                    (cx, cy) = (x, y);
                }
                PathCommand::Close => {
                    (cx, cy) = (sx, sy);
                }
            }
        }

        bb
    }

    /// Serialize to SVG path data.
    ///
    /// Integral coordinates are written without decimals, others with
    /// `precision` decimal places. A separating space is only emitted before
    /// non-negative values since the minus sign already separates the rest.
    pub fn to_path_data(&self, precision: usize) -> String {
        let mut d = String::with_capacity(self.commands.len() * 24);
        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo { x, y } => {
                    d.push('M');
                    pack_values(&mut d, &[x, y], precision);
                }
                PathCommand::LineTo { x, y } => {
                    d.push('L');
                    pack_values(&mut d, &[x, y], precision);
                }
                PathCommand::QuadTo { x1, y1, x, y } => {
                    d.push('Q');
                    pack_values(&mut d, &[x1, y1, x, y], precision);
                }
                PathCommand::CurveTo { x1, y1, x2, y2, x, y } => {
                    d.push('C');
                    pack_values(&mut d, &[x1, y1, x2, y2, x, y], precision);
                }
                PathCommand::Close => d.push('Z'),
            }
        }
        d
    }
}

/// Collects ttf-parser outline callbacks into a [`GlyphPath`] (font units).
#[derive(Debug, Default)]
pub struct PathCollector {
    path: GlyphPath,
}

impl PathCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> GlyphPath {
        self.path
    }
}

impl ttf_parser::OutlineBuilder for PathCollector {
    fn move_to(&mut self, x: f32, y: f32) {
        self.path.push(PathCommand::MoveTo {
            x: f64::from(x),
            y: f64::from(y),
        });
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.path.push(PathCommand::LineTo {
            x: f64::from(x),
            y: f64::from(y),
        });
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.path.push(PathCommand::QuadTo {
            x1: f64::from(x1),
            y1: f64::from(y1),
            x: f64::from(x),
            y: f64::from(y),
        });
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.path.push(PathCommand::CurveTo {
            x1: f64::from(x1),
            y1: f64::from(y1),
            x2: f64::from(x2),
            y2: f64::from(y2),
            x: f64::from(x),
            y: f64::from(y),
        });
    }

    fn close(&mut self) {
        self.path.push(PathCommand::Close);
    }
}

fn quad_at(p0: f64, p1: f64, p2: f64, t: f64) -> f64 {
    let mt = 1.0 - t;
    mt * mt * p0 + 2.0 * mt * t * p1 + t * t * p2
}

fn cubic_at(p0: f64, p1: f64, p2: f64, p3: f64, t: f64) -> f64 {
    let mt = 1.0 - t;
    mt * mt * mt * p0 + 3.0 * mt * mt * t * p1 + 3.0 * mt * t * t * p2 + t * t * t * p3
}

fn in_open_unit(t: f64) -> Option<f64> {
    (t > 0.0 && t < 1.0).then_some(t)
}

/// Parameter of the single turning point of a quadratic segment, if inside (0, 1).
fn quad_extrema(p0: f64, p1: f64, p2: f64) -> [Option<f64>; 1] {
    let denom = p0 - 2.0 * p1 + p2;
    if denom.abs() < f64::EPSILON {
        return [None];
    }
    [in_open_unit((p0 - p1) / denom)]
}

/// Parameters of the turning points of a cubic segment inside (0, 1).
fn cubic_extrema(p0: f64, p1: f64, p2: f64, p3: f64) -> [Option<f64>; 2] {
    // Derivative: a t^2 + b t + c
    let a = 3.0 * (-p0 + 3.0 * p1 - 3.0 * p2 + p3);
    let b = 6.0 * (p0 - 2.0 * p1 + p2);
    let c = 3.0 * (p1 - p0);

    if a.abs() < 1e-12 {
        if b.abs() < 1e-12 {
            return [None, None];
        }
        return [in_open_unit(-c / b), None];
    }

    let disc = b.mul_add(b, -4.0 * a * c);
    if disc < 0.0 {
        return [None, None];
    }
    let sq = disc.sqrt();
    [
        in_open_unit((-b + sq) / (2.0 * a)),
        in_open_unit((-b - sq) / (2.0 * a)),
    ]
}

fn pack_values(d: &mut String, values: &[f64], precision: usize) {
    for (i, &v) in values.iter().enumerate() {
        if v >= 0.0 && i > 0 {
            d.push(' ');
        }
        write_number(d, v, precision);
    }
}

#[allow(clippy::cast_possible_truncation)]
fn write_number(d: &mut String, v: f64, precision: usize) {
    if v.round() == v && v.abs() < 1e15 {
        let _ = write!(d, "{}", v as i64);
    } else {
        let _ = write!(d, "{v:.precision$}");
    }
}
