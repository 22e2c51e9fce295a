//! CLI output formatting for `check` and `build`.
//!
//! # Entity Display Contract
//!
//! Every album follows the same two-level pattern:
//!
//! 1. **Header line**: positional index + name (+ photo count)
//! 2. **Context lines**: indented photos, page names or thumbnail results
//!
//! Warnings from the album scan and thumbnail failures go in a trailing
//! `Warnings` block so they are not lost among the per-album lines.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Albums
//! 001 beach (2 photos)
//!     001 a.jpg → a.html
//!     002 b.png → b.html
//! 002 city (0 photos)
//!
//! Warnings
//!     Skipping non-directory _albums/README.md
//! ```
//!
//! ## Build
//!
//! ```text
//! 001 beach → beach/index.html
//!     2 pages, 2 thumbnails
//!
//! Built 1 album, 2 pages, 2 thumbnails into _build
//! ```
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout.

use crate::imaging::ThumbnailError;
use crate::pipeline::{BuildReport, CheckReport};
use crate::scan::ScanWarning;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{} {}", n, one)
    } else {
        format!("{} {}", n, many)
    }
}

fn warning_block(warnings: &[ScanWarning], failures: &[ThumbnailError]) -> Vec<String> {
    if warnings.is_empty() && failures.is_empty() {
        return Vec::new();
    }
    let mut lines = vec![String::new(), "Warnings".to_string()];
    lines.extend(warnings.iter().map(|w| format!("{}{}", indent(1), w)));
    lines.extend(failures.iter().map(|f| format!("{}{}", indent(1), f)));
    lines
}

pub fn format_check_output(report: &CheckReport) -> Vec<String> {
    let mut lines = vec!["Albums".to_string()];
    for (i, album) in report.albums.iter().enumerate() {
        lines.push(format!(
            "{} {} ({})",
            format_index(i + 1),
            album.name,
            plural(album.photos.len(), "photo", "photos")
        ));
        for (j, photo) in album.photos.iter().enumerate() {
            lines.push(format!(
                "{}{} {} → {}",
                indent(1),
                format_index(j + 1),
                photo.path,
                photo.page
            ));
        }
    }
    lines.extend(warning_block(&report.warnings, &[]));
    lines
}

pub fn print_check_output(report: &CheckReport) {
    for line in format_check_output(report) {
        println!("{}", line);
    }
}

pub fn format_build_output(report: &BuildReport, build_dir: &Path) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, album) in report.albums.iter().enumerate() {
        lines.push(format!(
            "{} {} → {}/index.html",
            format_index(i + 1),
            album.name,
            album.name
        ));
        lines.push(format!(
            "{}{}, {}",
            indent(1),
            plural(album.pages, "page", "pages"),
            plural(album.thumbnails, "thumbnail", "thumbnails")
        ));
    }

    let pages: usize = report.albums.iter().map(|a| a.pages).sum();
    let thumbnails: usize = report.albums.iter().map(|a| a.thumbnails).sum();
    if !lines.is_empty() {
        lines.push(String::new());
    }
    lines.push(format!(
        "Built {}, {}, {} into {}",
        plural(report.albums.len(), "album", "albums"),
        plural(pages, "page", "pages"),
        plural(thumbnails, "thumbnail", "thumbnails"),
        build_dir.display()
    ));

    lines.extend(warning_block(&report.warnings, &report.thumbnail_failures));
    lines
}

pub fn print_build_output(report: &BuildReport, build_dir: &Path) {
    for line in format_build_output(report, build_dir) {
        println!("{}", line);
    }
}
