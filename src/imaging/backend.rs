//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait is the "decode → measure → resize → encode"
//! capability thumbnail generation depends on. The production implementation
//! is [`RustBackend`](super::rust_backend::RustBackend); tests use the
//! recording mock below.

use super::params::ResizeParams;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Processing failed: {0}")]
    ProcessingFailed(String),
}

/// Result of an identify operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Trait for image processing backends.
///
/// Must be `Sync`: one backend is shared by all thumbnail workers.
pub trait ImageBackend: Sync {
    /// Get native image dimensions.
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError>;

    /// Decode the source, resize to the exact target and write the output.
    fn resize(&self, params: &ResizeParams) -> Result<(), BackendError>;
}
