//! SVG to PNG rasterization.

use image::ImageEncoder;
use image::codecs::png::PngEncoder;
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{Options, Tree};

use crate::error::{Error, Result};

/// Largest output edge in pixels.
pub const MAX_DIMENSION: u32 = 8192;

/// Rasterize an SVG document at `scale` times its declared size.
///
/// Transparent areas stay transparent in the PNG.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn svg_to_png(svg: &str, scale: f32) -> Result<Vec<u8>> {
    if !(scale.is_finite() && scale > 0.0) {
        return Err(Error::Rasterize(format!("invalid scale {scale}")));
    }

    let tree = Tree::from_str(svg, &Options::default())
        .map_err(|e| Error::Rasterize(format!("SVG parse failed: {e}")))?;

    let size = tree.size();
    let width = (size.width() * scale).ceil() as u32;
    let height = (size.height() * scale).ceil() as u32;
    if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(Error::Rasterize(format!(
            "output size {width}x{height} out of range"
        )));
    }

    let mut pixmap = Pixmap::new(width, height)
        .ok_or_else(|| Error::Rasterize(format!("cannot allocate {width}x{height} pixmap")))?;
    resvg::render(&tree, Transform::from_scale(scale, scale), &mut pixmap.as_mut());

    // tiny-skia stores premultiplied alpha; PNG wants straight alpha
    let rgba: Vec<u8> = pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();

    let mut png = Vec::new();
    PngEncoder::new(&mut png)
        .write_image(&rgba, width, height, image::ExtendedColorType::Rgba8)
        .map_err(|e| Error::Rasterize(format!("PNG encoding failed: {e}")))?;
    Ok(png)
}

/// [`svg_to_png`] on the blocking thread pool.
pub async fn svg_to_png_async(svg: String, scale: f32) -> Result<Vec<u8>> {
    tokio::task::spawn_blocking(move || svg_to_png(&svg, scale))
        .await
        .map_err(|e| Error::Task(e.to_string()))?
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="20" viewBox="0 0 10 20"><rect width="10" height="10" fill="#ff0000"/></svg>"##;

    fn decode(png: &[u8]) -> image::RgbaImage {
        image::load_from_memory(png).unwrap().to_rgba8()
    }

    #[test]
    fn test_png_dimensions_follow_scale() {
        let img = decode(&svg_to_png(SQUARE, 2.0).unwrap());
        assert_eq!(img.dimensions(), (20, 40));
    }

    #[test]
    fn test_transparency_preserved() {
        let img = decode(&svg_to_png(SQUARE, 1.0).unwrap());
        assert_eq!(img.get_pixel(5, 5).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(5, 15).0[3], 0);
    }

    #[test]
    fn test_invalid_input() {
        assert!(matches!(svg_to_png("not svg", 1.0), Err(Error::Rasterize(_))));
        assert!(matches!(svg_to_png(SQUARE, 0.0), Err(Error::Rasterize(_))));
    }

    #[tokio::test]
    async fn test_async_wrapper() {
        let png = svg_to_png_async(SQUARE.to_string(), 1.0).await.unwrap();
        assert!(png.starts_with(b"\x89PNG"));
    }
}
