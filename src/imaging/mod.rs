//! Thumbnail generation, pure Rust via the `image` crate.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `image::image_dimensions` |
//! | **Decode** | `image::ImageReader` (format sniffed from content) |
//! | **Resize** | `DynamicImage::resize_exact` with `Lanczos3` |
//! | **Encode** | format from the destination extension; JPEG at configured quality |
//!
//! The module is split into:
//! - **Calculations**: orientation math (unit testable, no I/O)
//! - **Parameters**: data describing a resize
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: [`create_thumbnail`], combining calculations + backend

pub mod backend;
mod calculations;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use calculations::oriented_target;
pub use operations::{ThumbnailConfig, ThumbnailError, create_thumbnail, get_dimensions};
pub use params::{Quality, ResizeParams};
pub use rust_backend::RustBackend;
