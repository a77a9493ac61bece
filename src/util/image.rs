use std::io::Cursor;

use image::{imageops::FilterType, ImageOutputFormat};

use crate::model;

pub const THUMB_WIDTH: u32 = 200;
pub const THUMB_HEIGHT: u32 = 200;

const JPEG_QUALITY: u8 = 85;

/// Decodes `source` (format auto-detected), converts it to grayscale and
/// stretches it to exactly 200x200. Aspect ratio is not preserved. The
/// result is returned as an encoded JPEG.
pub fn to_thumbnail(source: &[u8]) -> Result<Vec<u8>, model::error::ThumbError> {
    let img = image::load_from_memory(source).map_err(|err| model::error::ThumbError {
        message: format!("failed to decode image, {}", err),
    })?;

    let thumb = img
        .grayscale()
        .resize_exact(THUMB_WIDTH, THUMB_HEIGHT, FilterType::Triangle);

    let mut buf = Cursor::new(Vec::new());
    thumb
        .write_to(&mut buf, ImageOutputFormat::Jpeg(JPEG_QUALITY))
        .map_err(|err| model::error::ThumbError {
            message: format!("failed to encode thumbnail, {}", err),
        })?;

    Ok(buf.into_inner())
}

/// Builds an encoded JPEG with a color gradient, for tests.
#[cfg(test)]
pub fn encoded_test_image(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 120])
    });

    let mut buf = Cursor::new(Vec::new());
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut buf, ImageOutputFormat::Jpeg(90))
        .expect("failed to encode test image");

    buf.into_inner()
}
