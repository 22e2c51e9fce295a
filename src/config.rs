//! Site configuration module.
//!
//! Handles loading and validating `config.toml`. The file lives in the site
//! root by default (`--config` picks another path) and is optional: a
//! missing file means stock defaults. A file that exists but cannot be read,
//! parsed or validated stops the build.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! title = "photomine"           # Site title, shown on the index page
//! # album_dir = "_albums"       # Source albums, relative to the site root
//! # build_dir = "_build"        # Generated site, relative to the site root
//! # template_dir = "_templates" # Liquid templates, relative to the site root
//! theme = "templates"           # "templates" or "builtin"
//!
//! [image]
//! extensions = []               # Photo extensions, matched exactly
//!
//! [thumbnails]
//! width = 240                   # Landscape bounding box
//! height = 135
//! quality = 90                  # JPEG quality (1-100)
//!
//! [processing]
//! max_processes = 4             # Max parallel workers (omit for auto = CPU cores)
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::imaging::{Quality, ThumbnailConfig};
use crate::naming;
use crate::types::Dims;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site title passed to the index page.
    pub title: String,
    /// Source album directory. Defaults to `<site root>/_albums`.
    pub album_dir: Option<PathBuf>,
    /// Output directory. Defaults to `<site root>/_build`.
    pub build_dir: Option<PathBuf>,
    /// Liquid template directory. Defaults to `<site root>/_templates`.
    pub template_dir: Option<PathBuf>,
    /// Which renderer produces the pages.
    pub theme: Theme,
    /// Which files count as photos.
    pub image: ImageConfig,
    /// Thumbnail bounding box and encoding quality.
    pub thumbnails: ThumbnailsConfig,
    /// Parallel processing settings.
    pub processing: ProcessingConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "photomine".to_string(),
            album_dir: None,
            build_dir: None,
            template_dir: None,
            theme: Theme::default(),
            image: ImageConfig::default(),
            thumbnails: ThumbnailsConfig::default(),
            processing: ProcessingConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Liquid templates read from `template_dir`.
    #[default]
    Templates,
    /// The compiled-in theme.
    Builtin,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImageConfig {
    /// Extensions without the leading dot. Compared case-sensitively, so
    /// `"jpg"` does not match `IMG_0001.JPG`.
    pub extensions: Vec<String>,
}

impl ImageConfig {
    /// Whether `filename` has one of the configured photo extensions.
    pub fn has_valid_ext(&self, filename: &str) -> bool {
        let ext = naming::extension(filename);
        self.extensions.iter().any(|valid| valid == ext)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThumbnailsConfig {
    pub width: u32,
    pub height: u32,
    pub quality: u32,
}

impl Default for ThumbnailsConfig {
    fn default() -> Self {
        let config = ThumbnailConfig::default();
        Self {
            width: config.bbox.width,
            height: config.bbox.height,
            quality: config.quality.value(),
        }
    }
}

impl ThumbnailsConfig {
    pub fn to_thumbnail_config(&self) -> ThumbnailConfig {
        ThumbnailConfig {
            bbox: Dims {
                width: self.width,
                height: self.height,
            },
            quality: Quality::new(self.quality),
        }
    }
}

/// Parallel processing settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Maximum number of parallel thumbnail workers.
    /// When absent or null, defaults to the number of CPU cores.
    /// Values larger than the core count are clamped down.
    pub max_processes: Option<usize>,
}

/// Resolve the effective thread count from config.
///
/// - `None` → use all available cores
/// - `Some(n)` → use `min(n, cores)` (user can constrain down, not up)
pub fn effective_threads(config: &ProcessingConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    config
        .max_processes
        .map(|n| n.clamp(1, cores))
        .unwrap_or(cores)
}

/// Absolute locations of the three site directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitePaths {
    pub album_dir: PathBuf,
    pub build_dir: PathBuf,
    pub template_dir: PathBuf,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.thumbnails;
        if t.width == 0 || t.height == 0 {
            return Err(ConfigError::Validation(
                "thumbnails.width and thumbnails.height must be non-zero".into(),
            ));
        }
        if t.width < t.height {
            return Err(ConfigError::Validation(format!(
                "thumbnails box must be landscape (width >= height), got {}x{}",
                t.width, t.height
            )));
        }
        if !(1..=100).contains(&t.quality) {
            return Err(ConfigError::Validation(
                "thumbnails.quality must be 1-100".into(),
            ));
        }
        if self.processing.max_processes == Some(0) {
            return Err(ConfigError::Validation(
                "processing.max_processes must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Resolve the site directories against `site_root`.
    ///
    /// Unset directories take their `_albums`/`_build`/`_templates` default;
    /// relative ones are joined onto the root, absolute ones are kept.
    pub fn resolve_paths(&self, site_root: &Path) -> SitePaths {
        let resolve = |configured: &Option<PathBuf>, default: &str| match configured {
            Some(dir) => site_root.join(dir),
            None => site_root.join(default),
        };
        SitePaths {
            album_dir: resolve(&self.album_dir, "_albums"),
            build_dir: resolve(&self.build_dir, "_build"),
            template_dir: resolve(&self.template_dir, "_templates"),
        }
    }
}

/// Load and validate the config file at `path`.
///
/// Returns the stock defaults when the file does not exist.
pub fn load_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(SiteConfig::default()),
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    let config: SiteConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# photomine configuration
# =======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# Site title, available to the index template as `title`.
title = "photomine"

# Directories, relative to the site root (--root, default: current directory).
# album_dir = "_albums"
# build_dir = "_build"
# template_dir = "_templates"

# Page renderer: "templates" reads index/album/photo .html.liquid files from
# template_dir; "builtin" uses the compiled-in theme.
theme = "templates"

# ---------------------------------------------------------------------------
# Photos
# ---------------------------------------------------------------------------
[image]
# File extensions (without the dot) that count as photos. Matching is exact
# and case-sensitive: list "JPG" as well as "jpg" if your camera uses both.
# With the default empty list no file is treated as a photo.
extensions = []

# ---------------------------------------------------------------------------
# Thumbnails
# ---------------------------------------------------------------------------
[thumbnails]
# Landscape bounding box in pixels. Portrait photos get the box rotated.
# Thumbnails are resized to exactly this box; aspect ratio is not kept.
width = 240
height = 135

# JPEG encoding quality (1 = worst, 100 = best).
quality = 90

# ---------------------------------------------------------------------------
# Processing
# ---------------------------------------------------------------------------
[processing]
# Maximum parallel thumbnail workers.
# Omit or comment out to auto-detect (= number of CPU cores).
# max_processes = 4
"##
}
