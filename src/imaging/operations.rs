//! High-level image operations.
//!
//! These functions combine calculations with backend execution.
//! They take configuration, compute parameters, and call the backend.

use super::backend::{BackendError, ImageBackend};
use super::calculations::oriented_target;
use super::params::{Quality, ResizeParams};
use crate::types::Dims;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A thumbnail that could not be produced.
///
/// Covers every step (decode, measure, resize, encode, write). If encoding or
/// writing failed, a truncated file may be left at `thumb_path`.
#[derive(Error, Debug)]
#[error("Failed to create thumb {} from {}: {source}", .thumb_path.display(), .source_path.display())]
pub struct ThumbnailError {
    pub source_path: PathBuf,
    pub thumb_path: PathBuf,
    pub source: BackendError,
}

/// Get image dimensions using the backend.
pub fn get_dimensions(backend: &impl ImageBackend, path: &Path) -> Result<(u32, u32), BackendError> {
    let dims = backend.identify(path)?;
    Ok((dims.width, dims.height))
}

/// Configuration for thumbnail generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbnailConfig {
    /// Landscape bounding box; rotated for portrait sources.
    pub bbox: Dims,
    pub quality: Quality,
}

impl Default for ThumbnailConfig {
    fn default() -> Self {
        Self {
            bbox: Dims {
                width: 1920 / 8,
                height: 1080 / 8,
            },
            quality: Quality::default(),
        }
    }
}

/// Plan a thumbnail resize without executing it.
pub fn plan_thumbnail(
    source: &Path,
    output: &Path,
    source_dims: (u32, u32),
    config: &ThumbnailConfig,
) -> ResizeParams {
    let (width, height) = oriented_target(source_dims, config.bbox);
    ResizeParams {
        source: source.to_path_buf(),
        output: output.to_path_buf(),
        width,
        height,
        quality: config.quality,
    }
}

/// Create the thumbnail for `source` at `output`.
///
/// The parent directory of `output` must already exist. Returns the
/// `(width, height)` the thumbnail was resized to.
pub fn create_thumbnail(
    backend: &impl ImageBackend,
    source: &Path,
    output: &Path,
    config: &ThumbnailConfig,
) -> Result<(u32, u32), ThumbnailError> {
    let fail = |e: BackendError| ThumbnailError {
        source_path: source.to_path_buf(),
        thumb_path: output.to_path_buf(),
        source: e,
    };

    let dims = get_dimensions(backend, source).map_err(fail)?;
    let params = plan_thumbnail(source, output, dims, config);
    backend.resize(&params).map_err(fail)?;
    Ok((params.width, params.height))
}
