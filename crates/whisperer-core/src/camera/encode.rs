//! Frame rasterization and JPEG encoding.

use image::codecs::jpeg::JpegEncoder;
use image::{imageops, DynamicImage, RgbaImage};

use super::device::{Dimensions, VideoFrame};
use crate::error::{Result, WhispererError};

/// Largest width or height a baseline JPEG can describe.
pub const MAX_JPEG_DIMENSION: u32 = u16::MAX as u32;

/// Draws `frame` at the origin of an offscreen bitmap sized `dimensions`.
///
/// The bitmap takes the stream's delivered size; a frame that is smaller
/// leaves the rest transparent black, a larger one is clipped.
pub fn rasterize(dimensions: Dimensions, frame: VideoFrame) -> Result<RgbaImage> {
    if dimensions.width == 0 || dimensions.height == 0 {
        return Err(WhispererError::encoding(format!(
            "stream reported empty dimensions {dimensions}"
        )));
    }
    if dimensions.width > MAX_JPEG_DIMENSION || dimensions.height > MAX_JPEG_DIMENSION {
        return Err(WhispererError::encoding(format!(
            "stream dimensions {dimensions} exceed the JPEG limit of {MAX_JPEG_DIMENSION}"
        )));
    }

    let (width, height) = (frame.width, frame.height);
    let source = RgbaImage::from_raw(width, height, frame.rgba).ok_or_else(|| {
        WhispererError::encoding(format!(
            "frame buffer does not hold {width}x{height} RGBA pixels"
        ))
    })?;

    let mut bitmap = RgbaImage::new(dimensions.width, dimensions.height);
    imageops::replace(&mut bitmap, &source, 0, 0);
    Ok(bitmap)
}

/// Encodes `bitmap` as a baseline JPEG at `quality` (1-100).
pub fn encode_jpeg(bitmap: RgbaImage, quality: u8) -> Result<Vec<u8>> {
    let rgb = DynamicImage::ImageRgba8(bitmap).into_rgb8();
    let mut buffer = Vec::new();
    JpegEncoder::new_with_quality(&mut buffer, quality).encode_image(&rgb)?;
    Ok(buffer)
}
