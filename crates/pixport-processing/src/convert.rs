//! Image conversion via the `image` crate.
//!
//! Decode from a temp path, re-encode to the target format at another temp
//! path. The codec is synchronous, so the whole call runs on the blocking
//! thread pool. Single-shot: any decode or encode failure is final, no retry
//! and no partial output left behind (the caller's temp guard removes it).

use std::path::{Path, PathBuf};

use image::DynamicImage;
use pixport_core::TargetFormat;

#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("{0}")]
    Codec(#[from] image::ImageError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("conversion task was cancelled")]
    TaskFailed,
}

pub struct ImageConverter;

impl ImageConverter {
    /// Decode `input` and encode it as `format` at `output`.
    pub async fn convert_file(
        input: PathBuf,
        output: PathBuf,
        format: TargetFormat,
    ) -> Result<(), ConversionError> {
        tokio::task::spawn_blocking(move || convert_blocking(&input, &output, format))
            .await
            .map_err(|_| ConversionError::TaskFailed)?
    }
}

fn convert_blocking(
    input: &Path,
    output: &Path,
    format: TargetFormat,
) -> Result<(), ConversionError> {
    // `open` sniffs the real format from content, ignoring the extension.
    // Animated GIF inputs decode to their first frame here.
    let img = image::open(input)?;
    let img = normalize_for(format, img);
    img.save_with_format(output, format.image_format())?;
    Ok(())
}

/// Reduce to a pixel layout the target encoder accepts.
fn normalize_for(format: TargetFormat, img: DynamicImage) -> DynamicImage {
    match format {
        // The JPEG encoder rejects alpha channels.
        TargetFormat::Jpeg => DynamicImage::ImageRgb8(img.to_rgb8()),
        // The WebP and GIF encoders only take 8-bit RGB(A).
        TargetFormat::WebP | TargetFormat::Gif => DynamicImage::ImageRgba8(img.to_rgba8()),
        // PNG encodes every layout the decoder can produce.
        TargetFormat::Png => img,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn write_test_png(dir: &Path, width: u32, height: u32) -> PathBuf {
        let mut img = RgbaImage::new(width, height);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            *pixel = Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255]);
        }
        let path = dir.join("input.png");
        img.save_with_format(&path, image::ImageFormat::Png).unwrap();
        path
    }

    #[tokio::test]
    async fn png_to_webp_preserves_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_test_png(dir.path(), 31, 17);
        let output = dir.path().join("out.webp");

        ImageConverter::convert_file(input, output.clone(), TargetFormat::WebP)
            .await
            .unwrap();

        let converted = image::open(&output).unwrap();
        assert_eq!(converted.width(), 31);
        assert_eq!(converted.height(), 17);
    }

    #[tokio::test]
    async fn transparent_png_to_jpeg_flattens_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let mut img = RgbaImage::new(8, 8);
        for pixel in img.pixels_mut() {
            *pixel = Rgba([200, 100, 50, 0]);
        }
        let input = dir.path().join("transparent.png");
        img.save_with_format(&input, image::ImageFormat::Png).unwrap();

        let output = dir.path().join("out.jpg");
        ImageConverter::convert_file(input, output.clone(), TargetFormat::Jpeg)
            .await
            .unwrap();

        let converted = image::open(&output).unwrap();
        assert_eq!(converted.color().channel_count(), 3);
    }

    #[tokio::test]
    async fn every_target_format_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_test_png(dir.path(), 12, 9);

        for format in [
            TargetFormat::Png,
            TargetFormat::Jpeg,
            TargetFormat::WebP,
            TargetFormat::Gif,
        ] {
            let output = dir
                .path()
                .join(format!("out.{}", format.display_extension()));
            ImageConverter::convert_file(input.clone(), output.clone(), format)
                .await
                .unwrap();

            let converted = image::open(&output).unwrap();
            assert_eq!((converted.width(), converted.height()), (12, 9), "{format}");
        }
    }

    #[tokio::test]
    async fn garbage_input_fails_with_codec_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("garbage.png");
        std::fs::write(&input, b"definitely not an image").unwrap();
        let output = dir.path().join("out.png");

        let result = ImageConverter::convert_file(input, output.clone(), TargetFormat::Png).await;
        assert!(matches!(result, Err(ConversionError::Codec(_))));
        assert!(!output.exists());
    }

    #[tokio::test]
    async fn missing_input_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = ImageConverter::convert_file(
            dir.path().join("nope.png"),
            dir.path().join("out.gif"),
            TargetFormat::Gif,
        )
        .await;
        assert!(result.is_err());
    }
}
