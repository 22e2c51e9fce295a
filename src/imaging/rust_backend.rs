//! Pure Rust image processing backend.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Identify | `image::ImageReader::into_dimensions`, format guessed from content (header only) |
//! | Decode (JPEG, PNG, TIFF, WebP, GIF, BMP) | `image::ImageReader`, format guessed from content |
//! | Resize | `DynamicImage::resize_exact` with `Lanczos3` |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder` at the requested quality |
//! | Encode → other | `DynamicImage::save_with_format` (lossless / format default) |

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::params::ResizeParams;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, ImageReader};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Pure Rust backend using the `image` crate.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Open an image with its format sniffed from the file contents, so a
/// mislabelled file (a PNG saved as `.jpg`) is both measured and decoded.
fn open_image(path: &Path) -> Result<ImageReader<BufReader<File>>, BackendError> {
    Ok(ImageReader::open(path)?.with_guessed_format()?)
}

/// Load and decode an image from disk.
fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    open_image(path)?
        .decode()
        .map_err(|e| {
            BackendError::ProcessingFailed(format!("Failed to decode {}: {}", path.display(), e))
        })
}

/// Save a DynamicImage to the given path, inferring format from extension.
fn save_image(img: &DynamicImage, path: &Path, quality: u32) -> Result<(), BackendError> {
    let format = ImageFormat::from_path(path).map_err(|_| {
        BackendError::ProcessingFailed(format!("Unsupported output format: {}", path.display()))
    })?;

    match format {
        ImageFormat::Jpeg => save_jpeg(img, path, quality),
        // These encoders only take 8-bit RGB(A)
        ImageFormat::WebP | ImageFormat::Gif => {
            DynamicImage::ImageRgba8(img.to_rgba8()).save_with_format(path, format)
        }
        other => img.save_with_format(path, other),
    }
    .map_err(|e| BackendError::ProcessingFailed(format!("Encode failed: {}", e)))
}

fn save_jpeg(img: &DynamicImage, path: &Path, quality: u32) -> image::ImageResult<()> {
    let file = std::fs::File::create(path)?;
    let writer = std::io::BufWriter::new(file);
    let encoder = JpegEncoder::new_with_quality(writer, quality.clamp(1, 100) as u8);
    // JPEG has no alpha channel
    DynamicImage::ImageRgb8(img.to_rgb8()).write_with_encoder(encoder)
}

impl ImageBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
        let (width, height) = open_image(path)?.into_dimensions().map_err(|e| {
            BackendError::ProcessingFailed(format!("Failed to read dimensions: {}", e))
        })?;
        Ok(Dimensions { width, height })
    }

    fn resize(&self, params: &ResizeParams) -> Result<(), BackendError> {
        let img = load_image(&params.source)?;
        let resized = img.resize_exact(params.width, params.height, FilterType::Lanczos3);
        save_image(&resized, &params.output, params.quality.value())
    }
}
