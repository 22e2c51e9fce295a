//! End-to-end builds through the public API: config file, starter liquid
//! templates, the `image` backend, and the built-in theme.

use photomine::config::{self, Theme};
use photomine::imaging::RustBackend;
use photomine::pipeline::{self, BuildSettings};
use photomine::render::{BuiltinRenderer, LiquidRenderer, STARTER_TEMPLATES};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_image(path: &Path, width: u32, height: u32) {
    let img = image::RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 64])
    });
    img.save(path).unwrap();
}

/// Site root with a config, starter templates and one album of two photos
/// plus a non-photo file.
fn setup_site() -> TempDir {
    let site = TempDir::new().unwrap();
    let root = site.path();

    fs::write(
        root.join("config.toml"),
        r#"
title = "Summer"

[image]
extensions = ["jpg", "png"]

[processing]
max_processes = 2
"#,
    )
    .unwrap();

    let templates = root.join("_templates");
    fs::create_dir(&templates).unwrap();
    for (name, content) in STARTER_TEMPLATES {
        fs::write(templates.join(name), content).unwrap();
    }

    let beach = root.join("_albums/beach");
    fs::create_dir_all(&beach).unwrap();
    write_image(&beach.join("a.jpg"), 320, 240);
    write_image(&beach.join("b.png"), 240, 320);
    fs::write(beach.join("notes.txt"), "sunscreen").unwrap();

    site
}

fn settings(root: &Path) -> (config::SiteConfig, config::SitePaths, BuildSettings) {
    let site_config = config::load_config(&root.join("config.toml")).unwrap();
    let paths = site_config.resolve_paths(root);
    let settings = BuildSettings::from_config(&site_config, &paths);
    (site_config, paths, settings)
}

#[test]
fn builds_site_with_starter_templates() {
    let site = setup_site();
    let (site_config, paths, settings) = settings(site.path());
    assert_eq!(site_config.theme, Theme::Templates);

    let renderer = LiquidRenderer::load(&paths.template_dir).unwrap();
    let report = pipeline::build(&settings, &renderer, &RustBackend::new()).unwrap();

    assert_eq!(report.albums.len(), 1);
    assert_eq!(report.albums[0].pages, 2);
    assert_eq!(report.albums[0].thumbnails, 2);
    assert!(report.thumbnail_failures.is_empty());

    let out = site.path().join("_build");
    let index = fs::read_to_string(out.join("index.html")).unwrap();
    assert!(index.contains("<title>Summer</title>"));
    assert!(index.contains("href=\"beach/index.html\""));

    let album = fs::read_to_string(out.join("beach/index.html")).unwrap();
    assert!(album.contains("src=\"thumb/a.jpg\""));
    assert!(album.contains("href=\"b.html\""));
    assert!(!album.contains("notes"));

    let a = fs::read_to_string(out.join("beach/a.html")).unwrap();
    assert!(a.contains("href=\"b.html\">Next"));
    assert!(!a.contains("Previous"));

    let b = fs::read_to_string(out.join("beach/b.html")).unwrap();
    assert!(b.contains("href=\"a.html\">Previous"));
    assert!(!b.contains(">Next<"));

    assert!(out.join("beach/notes.txt").is_file());
    assert_eq!(
        image::image_dimensions(out.join("beach/thumb/a.jpg")).unwrap(),
        (240, 135)
    );
    assert_eq!(
        image::image_dimensions(out.join("beach/thumb/b.png")).unwrap(),
        (135, 240)
    );
}

#[test]
fn builds_site_with_builtin_theme() {
    let site = setup_site();
    fs::remove_dir_all(site.path().join("_templates")).unwrap();
    let (_, _, settings) = settings(site.path());

    pipeline::build(&settings, &BuiltinRenderer::new(), &RustBackend::new()).unwrap();

    let out = site.path().join("_build");
    let index = fs::read_to_string(out.join("index.html")).unwrap();
    assert!(index.starts_with("<!DOCTYPE html>"));
    assert!(index.contains("<a href=\"beach/index.html\">beach</a>"));
    let b = fs::read_to_string(out.join("beach/b.html")).unwrap();
    assert!(b.contains("<a href=\"a.html\">Previous</a>"));
}

#[test]
fn missing_templates_fail_before_output() {
    let site = setup_site();
    fs::remove_file(site.path().join("_templates/photo.html.liquid")).unwrap();
    let (_, paths, _) = settings(site.path());

    assert!(LiquidRenderer::load(&paths.template_dir).is_err());
    assert!(!site.path().join("_build").exists());
}

#[test]
fn check_matches_build_inventory() {
    let site = setup_site();
    let (_, _, settings) = settings(site.path());

    let report = pipeline::check(&settings).unwrap();

    assert_eq!(report.albums.len(), 1);
    let photos: Vec<&str> = report.albums[0]
        .photos
        .iter()
        .map(|p| p.path.as_str())
        .collect();
    assert_eq!(photos, vec!["a.jpg", "b.png"]);
    assert!(report.warnings.is_empty());
}
