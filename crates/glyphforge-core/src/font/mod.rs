mod document;
mod path;
mod record;
mod source;
pub mod woff;

pub use document::{FontDocument, FontFormat, sfnt_extension};
pub use path::{BoundingBox, GlyphPath, PathCollector, PathCommand};
pub use record::{FontMetrics, GlyphRecord};
pub use source::OutlineSource;
