//! Shared data model handed between pipeline steps and to the renderer.
//!
//! Field names double as template variable names, so renaming a field here
//! breaks user templates.

use serde::{Deserialize, Serialize};

/// Name of the per-album subdirectory holding generated thumbnails.
pub const THUMB_DIR: &str = "thumb";

/// The value rendered by the site index page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlbumIndex {
    pub title: String,
    /// Album summaries in scan order. `photos` is always empty here.
    pub albums: Vec<Album>,
}

/// One album per source subdirectory of the album root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    /// Display label.
    pub name: String,
    /// Directory name under the album root, reused as the output subdirectory.
    pub path: String,
    /// Sorted by `Photo::path`. Empty until the album has been materialized.
    #[serde(default)]
    pub photos: Vec<Photo>,
}

impl Album {
    /// Album as discovered by the scanner, before its photos are collected.
    pub fn from_dir_name(dir_name: &str) -> Self {
        Self {
            name: dir_name.to_string(),
            path: dir_name.to_string(),
            photos: Vec::new(),
        }
    }
}

/// A single image inside an album.
///
/// `thumbnail` and `page` are derived from `path`; `prev`/`next` hold the
/// `page` of the neighbouring photos once linked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    /// Filename relative to the album's output directory.
    pub path: String,
    pub description: String,
    /// Always `thumb/<path>`.
    pub thumbnail: String,
    /// Rendered page filename, e.g. `a.html` for `a.jpg`.
    pub page: String,
    #[serde(default)]
    pub prev: Option<String>,
    #[serde(default)]
    pub next: Option<String>,
}

/// Thumbnail bounding box. Always landscape-shaped: `width >= height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dims {
    pub width: u32,
    pub height: u32,
}
