//! Site build orchestration.
//!
//! Turns an album directory into a browsable site:
//!
//! ```text
//! _albums/                      _build/
//! ├── beach/                    ├── index.html          (site index)
//! │   ├── a.jpg        ──▶      ├── beach/
//! │   ├── b.png                 │   ├── a.jpg           (copied)
//! │   └── notes.txt             │   ├── b.png
//! └── city/                     │   ├── notes.txt
//!     └── ...                   │   ├── thumb/a.jpg     (thumbnails)
//!                               │   ├── thumb/b.png
//!                               │   ├── a.html          (photo pages)
//!                               │   ├── b.html
//!                               │   └── index.html      (album index)
//!                               └── city/ ...
//! ```
//!
//! ## Stages
//!
//! Albums are handled one at a time on the calling thread: copy the source
//! directory, create `thumb/`, collect and link photos, render photo pages,
//! render the album index. Thumbnails for an album are handed to a worker on
//! a bounded rayon pool as soon as its photos are known, so encoding overlaps
//! with the remaining albums' copying and rendering. `build` returns only once
//! every worker has finished, including when a fatal error cut dispatch short.
//!
//! ## Failures
//!
//! A photo whose thumbnail cannot be made is logged and listed in the
//! [`BuildReport`]; its pages are still written. Everything else that goes
//! wrong while writing the site is a [`BuildError`].
//!
//! Output is written in place. A failed build leaves whatever it had written.

use crate::config::{ImageConfig, ProcessingConfig, SiteConfig, SitePaths, effective_threads};
use crate::fs_tree::{self, FileTreeError};
use crate::imaging::{ImageBackend, ThumbnailConfig, ThumbnailError, create_thumbnail};
use crate::linker::link_pages;
use crate::render::{RenderError, Renderer};
use crate::scan::{ScanError, ScanWarning, collect_photos, scan_albums};
use crate::types::{Album, AlbumIndex, Photo, THUMB_DIR};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum BuildError {
    #[error(transparent)]
    FileTree(#[from] FileTreeError),
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error("Failed to render {}: {source}", .path.display())]
    Render { path: PathBuf, source: RenderError },
    #[error("Failed to start thumbnail workers: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Everything a build needs, with directories already resolved.
#[derive(Debug, Clone)]
pub struct BuildSettings {
    pub title: String,
    pub album_dir: PathBuf,
    pub build_dir: PathBuf,
    pub image: ImageConfig,
    pub thumbnails: ThumbnailConfig,
    pub processing: ProcessingConfig,
}

impl BuildSettings {
    pub fn from_config(config: &SiteConfig, paths: &SitePaths) -> Self {
        Self {
            title: config.title.clone(),
            album_dir: paths.album_dir.clone(),
            build_dir: paths.build_dir.clone(),
            image: config.image.clone(),
            thumbnails: config.thumbnails.to_thumbnail_config(),
            processing: config.processing.clone(),
        }
    }
}

/// Per-album result of a build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumSummary {
    pub name: String,
    /// Photo pages written.
    pub pages: usize,
    /// Thumbnails successfully written.
    pub thumbnails: usize,
}

#[derive(Debug, Default)]
pub struct BuildReport {
    /// Albums in index order.
    pub albums: Vec<AlbumSummary>,
    pub warnings: Vec<ScanWarning>,
    pub thumbnail_failures: Vec<ThumbnailError>,
}

/// Albums with their photos as they would be built, from a dry run.
#[derive(Debug, Default)]
pub struct CheckReport {
    pub albums: Vec<Album>,
    pub warnings: Vec<ScanWarning>,
}

/// What one thumbnail worker reports back for its album.
struct ThumbnailOutcome {
    album: String,
    created: usize,
    failures: Vec<ThumbnailError>,
}

/// Build the site described by `settings`.
pub fn build(
    settings: &BuildSettings,
    renderer: &dyn Renderer,
    backend: &impl ImageBackend,
) -> Result<BuildReport, BuildError> {
    let threads = effective_threads(&settings.processing);
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()?;

    fs_tree::create_dir_all(&settings.build_dir)?;

    let scan = scan_albums(&settings.album_dir)?;
    info!(
        "Found {} album(s) in {}",
        scan.albums.len(),
        settings.album_dir.display()
    );

    let index = AlbumIndex {
        title: settings.title.clone(),
        albums: scan.albums.clone(),
    };
    write_page(&settings.build_dir.join("index.html"), |out| {
        renderer.render_index(out, &index)
    })?;

    let (tx, rx) = mpsc::channel();
    let dispatched = pool.in_place_scope(|scope| -> Result<Vec<AlbumSummary>, BuildError> {
        let mut summaries = Vec::with_capacity(scan.albums.len());
        for album in &scan.albums {
            let album_out = settings.build_dir.join(&album.path);
            let photos = prepare_album(settings, album, &album_out)?;

            let tx = tx.clone();
            let job_photos = photos.clone();
            let job_out = album_out.clone();
            let job_album = album.name.clone();
            let thumbnails = settings.thumbnails;
            scope.spawn(move |_| {
                let outcome =
                    create_thumbs(backend, job_album, &job_out, &job_photos, &thumbnails);
                tx.send(outcome).ok();
            });

            for photo in &photos {
                write_page(&album_out.join(&photo.page), |out| {
                    renderer.render_photo(out, photo)
                })?;
            }

            let pages = photos.len();
            let populated = Album {
                photos,
                ..album.clone()
            };
            write_page(&album_out.join("index.html"), |out| {
                renderer.render_album(out, &populated)
            })?;

            info!("Rendered album {} ({} photo(s))", album.name, pages);
            summaries.push(AlbumSummary {
                name: album.name.clone(),
                pages,
                thumbnails: 0,
            });
        }
        Ok(summaries)
    });
    drop(tx);

    // Workers are done once the scope has returned
    let outcomes: Vec<ThumbnailOutcome> = rx.into_iter().collect();
    let mut albums = dispatched?;

    let mut thumbnail_failures = Vec::new();
    for outcome in outcomes {
        if let Some(summary) = albums.iter_mut().find(|s| s.name == outcome.album) {
            summary.thumbnails = outcome.created;
        }
        thumbnail_failures.extend(outcome.failures);
    }

    Ok(BuildReport {
        albums,
        warnings: scan.warnings,
        thumbnail_failures,
    })
}

/// Scan and collect without writing anything.
///
/// Photos are collected from the source album directories, so the result is
/// what a build would produce from the current input.
pub fn check(settings: &BuildSettings) -> Result<CheckReport, BuildError> {
    let scan = scan_albums(&settings.album_dir)?;
    let mut albums = Vec::with_capacity(scan.albums.len());
    for mut album in scan.albums {
        let dir = settings.album_dir.join(&album.path);
        album.photos = collect_photos(&dir, |name| settings.image.has_valid_ext(name))?;
        link_pages(&mut album.photos);
        albums.push(album);
    }
    Ok(CheckReport {
        albums,
        warnings: scan.warnings,
    })
}

/// Copy an album into the output tree and return its linked photos.
fn prepare_album(
    settings: &BuildSettings,
    album: &Album,
    album_out: &Path,
) -> Result<Vec<Photo>, BuildError> {
    let source = settings.album_dir.join(&album.path);
    debug!("Copying {} to {}", source.display(), album_out.display());
    fs_tree::copy_dir(&source, album_out)?;
    fs_tree::create_dir_if_missing(&album_out.join(THUMB_DIR))?;

    let mut photos = collect_photos(album_out, |name| settings.image.has_valid_ext(name))?;
    link_pages(&mut photos);
    Ok(photos)
}

/// Thumbnail every photo of one album, in order. Never fails as a whole.
fn create_thumbs(
    backend: &impl ImageBackend,
    album: String,
    album_out: &Path,
    photos: &[Photo],
    config: &ThumbnailConfig,
) -> ThumbnailOutcome {
    let mut created = 0;
    let mut failures = Vec::new();
    for photo in photos {
        let source = album_out.join(&photo.path);
        let dest = album_out.join(&photo.thumbnail);
        match create_thumbnail(backend, &source, &dest, config) {
            Ok((width, height)) => {
                debug!("Thumbnail {} ({}x{})", dest.display(), width, height);
                created += 1;
            }
            Err(e) => {
                warn!("{}", e);
                failures.push(e);
            }
        }
    }
    ThumbnailOutcome {
        album,
        created,
        failures,
    }
}

/// Create `path` and render a page into it.
fn write_page(
    path: &Path,
    render: impl FnOnce(&mut dyn Write) -> Result<(), RenderError>,
) -> Result<(), BuildError> {
    let mut out = fs_tree::create_file(path)?;
    render(&mut out)
        .and_then(|()| out.flush().map_err(RenderError::from))
        .map_err(|source| BuildError::Render {
            path: path.to_path_buf(),
            source,
        })
}
