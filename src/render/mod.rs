//! Page rendering.
//!
//! The build pipeline renders three kinds of page:
//!
//! | Page | Data | Output |
//! |---|---|---|
//! | Site index | [`AlbumIndex`] | `<build>/index.html` |
//! | Album index | [`Album`] (photos linked) | `<build>/<album>/index.html` |
//! | Photo page | [`Photo`] | `<build>/<album>/<page>` |
//!
//! Two implementations of [`Renderer`] exist:
//!
//! - [`LiquidRenderer`]: user templates from the template directory
//!   (`index.html.liquid`, `album.html.liquid`, `photo.html.liquid`). All three
//!   are read and parsed up front, so a broken template fails the build before
//!   any page is written.
//! - [`BuiltinRenderer`]: the compiled-in maud theme, no template directory
//!   needed.
//!
//! The starter templates in [`STARTER_TEMPLATES`] are what
//! `photomine gen-templates` writes out.

mod builtin;
mod template;

pub use builtin::BuiltinRenderer;
pub use template::LiquidRenderer;

use crate::types::{Album, AlbumIndex, Photo};
use std::io::Write;
use std::path::PathBuf;
use thiserror::Error;

pub const INDEX_TEMPLATE: &str = "index.html.liquid";
pub const ALBUM_TEMPLATE: &str = "album.html.liquid";
pub const PHOTO_TEMPLATE: &str = "photo.html.liquid";

/// Template file names paired with their embedded starter content.
pub const STARTER_TEMPLATES: [(&str, &str); 3] = [
    (
        INDEX_TEMPLATE,
        include_str!("../../templates/index.html.liquid"),
    ),
    (
        ALBUM_TEMPLATE,
        include_str!("../../templates/album.html.liquid"),
    ),
    (
        PHOTO_TEMPLATE,
        include_str!("../../templates/photo.html.liquid"),
    ),
];

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to read template {}: {source}", .path.display())]
    ReadTemplate {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse template {}: {source}", .path.display())]
    ParseTemplate {
        path: PathBuf,
        source: liquid::Error,
    },
    #[error("Template error: {0}")]
    Template(#[from] liquid::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Renders gallery pages into a writer.
///
/// Shared by reference across the build; implementations hold only parsed,
/// immutable state.
pub trait Renderer {
    fn render_index(&self, out: &mut dyn Write, index: &AlbumIndex) -> Result<(), RenderError>;
    fn render_album(&self, out: &mut dyn Write, album: &Album) -> Result<(), RenderError>;
    fn render_photo(&self, out: &mut dyn Write, photo: &Photo) -> Result<(), RenderError>;
}
