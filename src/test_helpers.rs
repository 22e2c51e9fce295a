//! Shared test utilities for the photomine test suite.
//!
//! Provides synthetic image writers, a site fixture builder, lookup helpers
//! and a renderer that records the data each page was rendered from.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let site = setup_site(&[("beach", &["a.jpg", "b.png", "notes.txt"])]);
//! let report = check(&settings_for(site.path(), &["jpg", "png"])).unwrap();
//!
//! let album = find_album(&report.albums, "beach");
//! assert_eq!(photo_paths(album), vec!["a.jpg", "b.png"]);
//!
//! // Pages rendered by `RecordingRenderer` hold the page data as JSON
//! let photo: Photo = read_page(&site.path().join("_build/beach/a.html"));
//! ```

use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::TempDir;

use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbImage};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::{ImageConfig, ProcessingConfig};
use crate::imaging::ThumbnailConfig;
use crate::pipeline::BuildSettings;
use crate::render::{RenderError, Renderer};
use crate::types::{Album, AlbumIndex, Photo};

// =========================================================================
// Synthetic images
// =========================================================================

fn gradient(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    })
}

/// Write a JPEG of the given size to `path`.
pub fn write_jpeg(path: &Path, width: u32, height: u32) {
    let img = gradient(width, height);
    let file = fs::File::create(path).unwrap();
    JpegEncoder::new(std::io::BufWriter::new(file))
        .write_image(img.as_raw(), width, height, ExtendedColorType::Rgb8)
        .unwrap();
}

/// Write a PNG of the given size to `path`.
pub fn write_png(path: &Path, width: u32, height: u32) {
    gradient(width, height)
        .save_with_format(path, image::ImageFormat::Png)
        .unwrap();
}

/// Write a fixture file, choosing content by extension.
///
/// `.jpg` files are 400×300 JPEGs, `.png` files 300×400 PNGs, anything else
/// is a small text file.
pub fn write_fixture_file(path: &Path) {
    match path.extension().and_then(|e| e.to_str()) {
        Some("jpg") => write_jpeg(path, 400, 300),
        Some("png") => write_png(path, 300, 400),
        _ => fs::write(path, b"fixture").unwrap(),
    }
}

// =========================================================================
// Site fixtures
// =========================================================================

/// Create a site root with `_albums/<album>/<files>` laid out as given.
pub fn setup_site(albums: &[(&str, &[&str])]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    let album_root = tmp.path().join("_albums");
    fs::create_dir_all(&album_root).unwrap();
    for (album, files) in albums {
        let dir = album_root.join(album);
        fs::create_dir_all(&dir).unwrap();
        for file in *files {
            write_fixture_file(&dir.join(file));
        }
    }
    tmp
}

/// Build settings for a site created by [`setup_site`].
pub fn settings_for(site_root: &Path, extensions: &[&str]) -> BuildSettings {
    BuildSettings {
        title: "Test Site".to_string(),
        album_dir: site_root.join("_albums"),
        build_dir: site_root.join("_build"),
        image: ImageConfig {
            extensions: extensions.iter().map(|e| e.to_string()).collect(),
        },
        thumbnails: ThumbnailConfig::default(),
        processing: ProcessingConfig {
            max_processes: Some(2),
        },
    }
}

// =========================================================================
// Lookup helpers
// =========================================================================

/// Find an album by name. Panics with the available names if missing.
pub fn find_album<'a>(albums: &'a [Album], name: &str) -> &'a Album {
    albums.iter().find(|a| a.name == name).unwrap_or_else(|| {
        let names: Vec<&str> = albums.iter().map(|a| a.name.as_str()).collect();
        panic!("album {name:?} not found, have {names:?}")
    })
}

/// Find a photo by path. Panics with the available paths if missing.
pub fn find_photo<'a>(album: &'a Album, path: &str) -> &'a Photo {
    album
        .photos
        .iter()
        .find(|p| p.path == path)
        .unwrap_or_else(|| panic!("photo {path:?} not in {:?}", photo_paths(album)))
}

pub fn album_names(albums: &[Album]) -> Vec<&str> {
    albums.iter().map(|a| a.name.as_str()).collect()
}

pub fn photo_paths(album: &Album) -> Vec<&str> {
    album.photos.iter().map(|p| p.path.as_str()).collect()
}

// =========================================================================
// Recording renderer
// =========================================================================

/// Renderer that writes each page's data as JSON instead of HTML.
///
/// Tests read a page back with [`read_page`] to see exactly what the
/// pipeline handed the template.
pub struct RecordingRenderer;

fn write_json<T: Serialize>(out: &mut dyn Write, data: &T) -> Result<(), RenderError> {
    let json = serde_json::to_string(data).map_err(std::io::Error::other)?;
    out.write_all(json.as_bytes())?;
    Ok(())
}

impl Renderer for RecordingRenderer {
    fn render_index(&self, out: &mut dyn Write, index: &AlbumIndex) -> Result<(), RenderError> {
        write_json(out, index)
    }

    fn render_album(&self, out: &mut dyn Write, album: &Album) -> Result<(), RenderError> {
        write_json(out, album)
    }

    fn render_photo(&self, out: &mut dyn Write, photo: &Photo) -> Result<(), RenderError> {
        write_json(out, photo)
    }
}

/// Read back a page written by [`RecordingRenderer`].
pub fn read_page<T: DeserializeOwned>(path: &Path) -> T {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("page {} not readable: {e}", path.display()));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("page {} is not recorded JSON: {e}", path.display()))
}
