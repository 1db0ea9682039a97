//! Target formats for image conversion.
//!
//! The user-facing format name and the codec's canonical format are distinct
//! projections of the same enum: `jpeg` and `jpg` parse to the same variant,
//! download filenames always use `jpg`, and the encoder always sees
//! `ImageFormat::Jpeg`.

use image::ImageFormat;

use crate::error::AppError;

/// Output format for converted images
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetFormat {
    Png,
    Jpeg,
    WebP,
    Gif,
}

impl TargetFormat {
    pub fn parse(s: &str) -> Result<Self, AppError> {
        match s.to_lowercase().as_str() {
            "png" => Ok(TargetFormat::Png),
            "jpeg" | "jpg" => Ok(TargetFormat::Jpeg),
            "webp" => Ok(TargetFormat::WebP),
            "gif" => Ok(TargetFormat::Gif),
            _ => Err(AppError::InvalidInput(
                "Invalid format. Allowed: png, jpg, jpeg, webp, gif.".to_string(),
            )),
        }
    }

    /// Extension used in the download filename.
    pub fn display_extension(self) -> &'static str {
        match self {
            TargetFormat::Png => "png",
            TargetFormat::Jpeg => "jpg",
            TargetFormat::WebP => "webp",
            TargetFormat::Gif => "gif",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            TargetFormat::Png => "image/png",
            TargetFormat::Jpeg => "image/jpeg",
            TargetFormat::WebP => "image/webp",
            TargetFormat::Gif => "image/gif",
        }
    }

    pub fn image_format(self) -> ImageFormat {
        match self {
            TargetFormat::Png => ImageFormat::Png,
            TargetFormat::Jpeg => ImageFormat::Jpeg,
            TargetFormat::WebP => ImageFormat::WebP,
            TargetFormat::Gif => ImageFormat::Gif,
        }
    }
}

impl std::fmt::Display for TargetFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_all_supported_names() {
        assert_eq!(TargetFormat::parse("png").unwrap(), TargetFormat::Png);
        assert_eq!(TargetFormat::parse("jpg").unwrap(), TargetFormat::Jpeg);
        assert_eq!(TargetFormat::parse("jpeg").unwrap(), TargetFormat::Jpeg);
        assert_eq!(TargetFormat::parse("webp").unwrap(), TargetFormat::WebP);
        assert_eq!(TargetFormat::parse("gif").unwrap(), TargetFormat::Gif);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(TargetFormat::parse("WEBP").unwrap(), TargetFormat::WebP);
        assert_eq!(TargetFormat::parse("Jpeg").unwrap(), TargetFormat::Jpeg);
    }

    #[test]
    fn parse_rejects_unknown_formats() {
        for input in ["bmp", "tiff", "avif", "", "image/png"] {
            let err = TargetFormat::parse(input).unwrap_err();
            assert!(err.to_string().contains("Invalid format"), "input: {input}");
        }
    }

    #[test]
    fn jpeg_downloads_as_jpg_but_encodes_as_jpeg() {
        let format = TargetFormat::parse("jpeg").unwrap();
        assert_eq!(format.display_extension(), "jpg");
        assert_eq!(format.image_format(), ImageFormat::Jpeg);
        assert_eq!(format.mime_type(), "image/jpeg");
    }
}
