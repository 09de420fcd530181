//! Page image encoding and persistence.

use std::fs;
use std::path::{Path, PathBuf};

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ExtendedColorType, ImageEncoder};
use log::debug;

use crate::error::{Error, Result};

/// Starting quality for the re-encoding loop.
const START_QUALITY: u8 = 95;

/// Quality floor; the loop never steps below this.
const QUALITY_FLOOR: u8 = 10;

/// Quality decrement per retry.
const QUALITY_STEP: u8 = 5;

/// Encode an image as single-channel grayscale JPEG, stepping the quality
/// down from 95 until the encoding fits `target_kb` or the quality floor of
/// 10 is reached. Always returns a valid encoding; the size target is a
/// goal, not a guarantee.
pub fn encode_grayscale_bounded(image: &DynamicImage, target_kb: u32) -> Result<Vec<u8>> {
    let gray = image.to_luma8();
    let target_bytes = target_kb as usize * 1024;
    let mut quality = START_QUALITY;

    loop {
        let mut buffer = Vec::new();
        let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);
        encoder
            .write_image(
                gray.as_raw(),
                gray.width(),
                gray.height(),
                ExtendedColorType::L8,
            )
            .map_err(|e| Error::ImageEncode(e.to_string()))?;

        if buffer.len() <= target_bytes || quality <= QUALITY_FLOOR {
            debug!(
                "grayscale encode: quality={} size={}KB target={}KB",
                quality,
                buffer.len() / 1024,
                target_kb
            );
            return Ok(buffer);
        }
        quality -= QUALITY_STEP;
    }
}

/// Write one page image into `dir`, named after the document stem and the
/// 1-based page number. Grayscale pages go through the bounded re-encoding
/// loop and land as JPEG; color pages are saved as PNG.
pub fn write_page_image(
    image: &DynamicImage,
    dir: &Path,
    stem: &str,
    page_number: u32,
    grayscale: bool,
    target_kb: u32,
) -> Result<PathBuf> {
    if grayscale {
        let bytes = encode_grayscale_bounded(image, target_kb)?;
        let path = dir.join(format!("{}_page_{}.jpg", stem, page_number));
        fs::write(&path, bytes)?;
        Ok(path)
    } else {
        let path = dir.join(format!("{}_page_{}.png", stem, page_number));
        image.save(&path)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    fn noisy_image(width: u32, height: u32) -> DynamicImage {
        // Pixel values vary enough that JPEG cannot compress to nothing.
        let img = GrayImage::from_fn(width, height, |x, y| {
            Luma([((x * 31 + y * 17) % 256) as u8])
        });
        DynamicImage::ImageLuma8(img)
    }

    #[test]
    fn test_encode_meets_generous_target() {
        let img = noisy_image(64, 64);
        let bytes = encode_grayscale_bounded(&img, 1000).unwrap();
        assert!(bytes.len() <= 1000 * 1024);
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.width(), 64);
        assert_eq!(decoded.height(), 64);
    }

    #[test]
    fn test_encode_terminates_at_quality_floor() {
        // Impossible target: the loop must still return a decodable image.
        let img = noisy_image(256, 256);
        let bytes = encode_grayscale_bounded(&img, 0).unwrap();
        assert!(!bytes.is_empty());
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.width(), 256);
    }

    #[test]
    fn test_write_page_image_names() {
        let dir = tempfile::tempdir().unwrap();
        let img = noisy_image(32, 32);

        let gray = write_page_image(&img, dir.path(), "доклад", 3, true, 1000).unwrap();
        assert!(gray.ends_with("доклад_page_3.jpg"));
        assert!(gray.exists());

        let color = write_page_image(&img, dir.path(), "report", 1, false, 1000).unwrap();
        assert!(color.ends_with("report_page_1.png"));
        assert!(color.exists());
    }
}
