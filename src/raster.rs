//! Raster-payload rendering capability boundary.
//!
//! The engine never touches pixel data itself; it asks a collaborator to
//! turn a raster payload into an embeddable image reference. The capability
//! may be unavailable or fail per layer — that yields `value: None` for the
//! affected record, never a conversion failure.

use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine as _};
use image::{ImageOutputFormat, RgbaImage};
use std::io::Cursor;

use crate::types::RasterPayload;

/// Collaborator capability: render decoded pixels to an embeddable
/// image-data reference. `None` means "could not render this payload".
pub trait RasterEncoder {
    fn encode(&self, raster: &RasterPayload) -> Option<String>;
}

/// Default encoder: PNG bytes wrapped in a `data:image/png;base64,` URI.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngDataUriEncoder;

impl RasterEncoder for PngDataUriEncoder {
    fn encode(&self, raster: &RasterPayload) -> Option<String> {
        let expected = raster
            .width
            .checked_mul(raster.height)?
            .checked_mul(4)? as usize;
        if raster.width == 0 || raster.height == 0 || raster.rgba.len() != expected {
            return None;
        }

        let img = RgbaImage::from_raw(raster.width, raster.height, raster.rgba.clone())?;
        let mut bytes = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut bytes), ImageOutputFormat::Png)
            .ok()?;
        Some(format!(
            "data:image/png;base64,{}",
            BASE64_STANDARD.encode(bytes)
        ))
    }
}

/// Stand-in for environments without an image capability.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRasterEncoder;

impl RasterEncoder for NoRasterEncoder {
    fn encode(&self, _raster: &RasterPayload) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(width: u32, height: u32) -> RasterPayload {
        RasterPayload {
            width,
            height,
            rgba: vec![255; (width * height * 4) as usize],
        }
    }

    #[test]
    fn encodes_png_data_uri() {
        let uri = PngDataUriEncoder.encode(&payload(2, 2)).unwrap();
        assert!(uri.starts_with("data:image/png;base64,"));
        let bytes = BASE64_STANDARD
            .decode(uri.trim_start_matches("data:image/png;base64,"))
            .unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
    }

    #[test]
    fn rejects_malformed_payloads() {
        assert!(PngDataUriEncoder.encode(&payload(0, 4)).is_none());
        let short = RasterPayload {
            width: 2,
            height: 2,
            rgba: vec![0; 3],
        };
        assert!(PngDataUriEncoder.encode(&short).is_none());
    }

    #[test]
    fn missing_capability_yields_none() {
        assert!(NoRasterEncoder.encode(&payload(1, 1)).is_none());
    }
}
