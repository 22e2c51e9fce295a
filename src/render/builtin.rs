//! Compiled-in theme written with maud.
//!
//! Used when the site sets `theme = "builtin"`. Pages mirror the starter
//! liquid templates but inline the stylesheet, so the output directory is
//! self-contained.

use super::{RenderError, Renderer};
use crate::types::{Album, AlbumIndex, Photo};
use maud::{DOCTYPE, Markup, html};
use std::io::Write;

const CSS: &str = include_str!("../../static/style.css");

#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinRenderer;

impl BuiltinRenderer {
    pub fn new() -> Self {
        Self
    }
}

fn base_document(title: &str, body_class: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (maud::PreEscaped(CSS)) }
            }
            body class=(body_class) {
                (content)
            }
        }
    }
}

fn index_page(index: &AlbumIndex) -> Markup {
    let content = html! {
        header {
            h1 { (index.title) }
        }
        ul.albums {
            @for album in &index.albums {
                li {
                    a href={ (album.path) "/index.html" } { (album.name) }
                }
            }
        }
    };
    base_document(&index.title, "index", content)
}

fn album_page(album: &Album) -> Markup {
    let content = html! {
        header {
            a href="../index.html" { "Albums" }
            h1 { (album.name) }
        }
        div.thumb-grid {
            @for photo in &album.photos {
                a href=(photo.page) {
                    img src=(photo.thumbnail) alt=(photo.description);
                }
            }
        }
    };
    base_document(&album.name, "album", content)
}

fn photo_page(photo: &Photo) -> Markup {
    let content = html! {
        header {
            a href="index.html" { "Album" }
            h1 { (photo.description) }
        }
        div.photo-view {
            img src=(photo.path) alt=(photo.description);
        }
        nav.photo-nav {
            @if let Some(prev) = &photo.prev {
                a href=(prev) { "Previous" }
            } @else {
                span {}
            }
            @if let Some(next) = &photo.next {
                a href=(next) { "Next" }
            } @else {
                span {}
            }
        }
    };
    base_document(&photo.description, "photo", content)
}

fn write_markup(out: &mut dyn Write, markup: Markup) -> Result<(), RenderError> {
    out.write_all(markup.into_string().as_bytes())?;
    Ok(())
}

impl Renderer for BuiltinRenderer {
    fn render_index(&self, out: &mut dyn Write, index: &AlbumIndex) -> Result<(), RenderError> {
        write_markup(out, index_page(index))
    }

    fn render_album(&self, out: &mut dyn Write, album: &Album) -> Result<(), RenderError> {
        write_markup(out, album_page(album))
    }

    fn render_photo(&self, out: &mut dyn Write, photo: &Photo) -> Result<(), RenderError> {
        write_markup(out, photo_page(photo))
    }
}
