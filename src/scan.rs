//! Album discovery and photo collection.
//!
//! ## Directory Structure
//!
//! ```text
//! _albums/                 # Album root
//! ├── beach/               # Album "beach"
//! │   ├── a.jpg
//! │   ├── b.png
//! │   └── notes.txt        # Copied to the output, but not a photo
//! ├── mountains/
//! │   └── ...
//! └── README.md            # Not a directory: skipped with a warning
//! ```
//!
//! Every immediate subdirectory of the album root is an album, named after the
//! directory. Albums are ordered by name (byte-wise), which is the order they
//! appear on the index page.
//!
//! Photos are collected from an album's *output* directory after it has been
//! materialized, so they describe exactly what is on disk in the built site.
//! Only plain files whose extension passes the configured allow-list become
//! photos; directories (including the generated `thumb/`) never do.

use crate::fs_tree::{self, FileTreeError};
use crate::naming::{page_name, thumbnail_path};
use crate::types::{Album, Photo};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Cannot read album root: {0}")]
    ListRoot(#[source] FileTreeError),
}

/// An album-root entry that was skipped. The scan carries on past these.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanWarning {
    StatFailed { path: PathBuf, reason: String },
    NotADirectory(PathBuf),
    InvalidName(PathBuf),
}

impl fmt::Display for ScanWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StatFailed { path, reason } => {
                write!(f, "Failed to stat {}: {}", path.display(), reason)
            }
            Self::NotADirectory(path) => write!(f, "Skipping non-directory {}", path.display()),
            Self::InvalidName(path) => {
                write!(f, "Skipping {}: name is not valid UTF-8", path.display())
            }
        }
    }
}

/// Result of scanning the album root.
#[derive(Debug, Clone, Default)]
pub struct AlbumScan {
    /// Sorted by name; `photos` are empty.
    pub albums: Vec<Album>,
    pub warnings: Vec<ScanWarning>,
}

/// Discover albums: one per immediate subdirectory of `album_root`.
///
/// Fails only when the root itself cannot be listed.
pub fn scan_albums(album_root: &Path) -> Result<AlbumScan, ScanError> {
    let entries = fs_tree::list_dir(album_root).map_err(ScanError::ListRoot)?;
    let mut scan = AlbumScan::default();

    for entry in entries {
        let path = entry.path();

        // Follows symlinks, so a link to a directory is an album.
        let meta = match fs_tree::stat(&path) {
            Ok(meta) => meta,
            Err(e) => {
                let reason = match e {
                    FileTreeError::Io { source, .. } => source.to_string(),
                    other => other.to_string(),
                };
                skip(&mut scan, ScanWarning::StatFailed { path, reason });
                continue;
            }
        };

        if !meta.is_dir() {
            skip(&mut scan, ScanWarning::NotADirectory(path));
            continue;
        }

        let Ok(name) = entry.file_name().into_string() else {
            skip(&mut scan, ScanWarning::InvalidName(path));
            continue;
        };

        scan.albums.push(Album::from_dir_name(&name));
    }

    scan.albums.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(scan)
}

fn skip(scan: &mut AlbumScan, warning: ScanWarning) {
    warn!("{}", warning);
    scan.warnings.push(warning);
}

/// Build the sorted photo list for a materialized album directory.
///
/// `accept` is the extension allow-list predicate, called with the bare
/// filename.
pub fn collect_photos(
    dir: &Path,
    accept: impl Fn(&str) -> bool,
) -> Result<Vec<Photo>, FileTreeError> {
    let mut photos = Vec::new();

    for entry in fs_tree::list_dir(dir)? {
        let path = entry.path();
        if path.is_dir() {
            continue;
        }
        let Ok(filename) = entry.file_name().into_string() else {
            warn!("Skipping {}: name is not valid UTF-8", path.display());
            continue;
        };
        if !accept(&filename) {
            continue;
        }
        photos.push(photo_for(&filename));
    }

    photos.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(photos)
}

/// A photo record for `filename`, not yet linked to its neighbours.
pub fn photo_for(filename: &str) -> Photo {
    Photo {
        path: filename.to_string(),
        description: filename.to_string(),
        thumbnail: thumbnail_path(filename),
        page: page_name(filename),
        prev: None,
        next: None,
    }
}
