//! Utility functions

use crate::constants::APP_NAME;
use crate::error::ChartError;
use base64::Engine;
use std::path::PathBuf;

// Trend-up mark on a blue/purple tile, used for the header logo and window icon
pub const LOGO_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 48 48"><defs><linearGradient id="g" x1="0" y1="0" x2="1" y2="0"><stop offset="0" stop-color="#2563eb"/><stop offset="1" stop-color="#9333ea"/></linearGradient></defs><rect width="48" height="48" rx="10" fill="url(#g)"/><polyline points="9,33 19,23 26,29 39,15" fill="none" stroke="#fff" stroke-width="4" stroke-linecap="round" stroke-linejoin="round"/><polyline points="30,15 39,15 39,24" fill="none" stroke="#fff" stroke-width="4" stroke-linecap="round" stroke-linejoin="round"/></svg>"##;

/// Rasterize the logo SVG to a square RGBA image.
pub fn rasterize_logo(size: u32) -> Option<(Vec<u8>, u32, u32)> {
    let tree = resvg::usvg::Tree::from_str(LOGO_SVG, &resvg::usvg::Options::default()).ok()?;
    let scale = size as f32 / tree.size().width();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size, size)?;
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    Some((premul_to_straight(&pixmap), size, size))
}

fn premul_to_straight(pixmap: &resvg::tiny_skia::Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let a = p.alpha();
            if a == 0 {
                [0, 0, 0, 0]
            } else {
                let r = (p.red() as u16 * 255 / a as u16) as u8;
                let g = (p.green() as u16 * 255 / a as u16) as u8;
                let b = (p.blue() as u16 * 255 / a as u16) as u8;
                [r, g, b, a]
            }
        })
        .collect()
}

/// Decode a base64 PNG chart into straight RGBA pixels
pub fn decode_chart(encoded: &str) -> Result<(Vec<u8>, u32, u32), ChartError> {
    let bytes = base64::engine::general_purpose::STANDARD.decode(encoded.trim())?;
    let rgba = image::load_from_memory(&bytes)?.to_rgba8();
    let (w, h) = (rgba.width(), rgba.height());
    Ok((rgba.into_raw(), w, h))
}

/// Get the app data directory (settings, logs)
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Where CSV exports land unless the user picks another folder
pub fn default_export_dir() -> PathBuf {
    dirs::download_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png_base64(w: u32, h: u32) -> String {
        let img = image::RgbaImage::from_pixel(w, h, image::Rgba([37, 99, 235, 255]));
        let mut buf = std::io::Cursor::new(Vec::new());
        img.write_to(&mut buf, image::ImageFormat::Png).unwrap();
        base64::engine::general_purpose::STANDARD.encode(buf.into_inner())
    }

    #[test]
    fn decodes_png_chart_to_rgba() {
        let (pixels, w, h) = decode_chart(&png_base64(4, 3)).unwrap();
        assert_eq!((w, h), (4, 3));
        assert_eq!(pixels.len(), 4 * 3 * 4);
        assert_eq!(&pixels[..4], &[37, 99, 235, 255]);
    }

    #[test]
    fn invalid_base64_is_rejected() {
        assert!(matches!(decode_chart("%%% not base64"), Err(ChartError::Base64(_))));
    }

    #[test]
    fn non_image_payload_is_rejected() {
        let encoded = base64::engine::general_purpose::STANDARD.encode(b"plain text");
        assert!(matches!(decode_chart(&encoded), Err(ChartError::Image(_))));
    }

    #[test]
    fn logo_rasterizes_to_requested_size() {
        let (pixels, w, h) = rasterize_logo(32).unwrap();
        assert_eq!((w, h), (32, 32));
        assert_eq!(pixels.len(), 32 * 32 * 4);
    }
}
