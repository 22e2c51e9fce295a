//! Liquid templates loaded from the site's template directory.

use super::{ALBUM_TEMPLATE, INDEX_TEMPLATE, PHOTO_TEMPLATE, RenderError, Renderer};
use crate::types::{Album, AlbumIndex, Photo};
use liquid::{Parser, Template};
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Renderer backed by the three page templates in a directory.
///
/// Each template sees the serialized page data as its globals: the site
/// index template gets `title` and `albums`, the album template gets `name`,
/// `path` and `photos`, the photo template gets the photo's fields (`path`,
/// `description`, `thumbnail`, `page`, `prev`, `next`).
pub struct LiquidRenderer {
    index: Template,
    album: Template,
    photo: Template,
}

impl LiquidRenderer {
    /// Read and parse all templates in `template_dir`.
    pub fn load(template_dir: &Path) -> Result<Self, RenderError> {
        let parser = liquid::ParserBuilder::with_stdlib().build()?;
        Ok(Self {
            index: parse_file(&parser, &template_dir.join(INDEX_TEMPLATE))?,
            album: parse_file(&parser, &template_dir.join(ALBUM_TEMPLATE))?,
            photo: parse_file(&parser, &template_dir.join(PHOTO_TEMPLATE))?,
        })
    }
}

fn parse_file(parser: &Parser, path: &Path) -> Result<Template, RenderError> {
    debug!("Parsing template {}", path.display());
    let source = std::fs::read_to_string(path).map_err(|source| RenderError::ReadTemplate {
        path: path.to_path_buf(),
        source,
    })?;
    parser
        .parse(&source)
        .map_err(|source| RenderError::ParseTemplate {
            path: path.to_path_buf(),
            source,
        })
}

fn render<T: Serialize>(
    template: &Template,
    out: &mut dyn Write,
    data: &T,
) -> Result<(), RenderError> {
    let globals = liquid::to_object(data)?;
    template.render_to(out, &globals)?;
    Ok(())
}

impl Renderer for LiquidRenderer {
    fn render_index(&self, out: &mut dyn Write, index: &AlbumIndex) -> Result<(), RenderError> {
        render(&self.index, out, index)
    }

    fn render_album(&self, out: &mut dyn Write, album: &Album) -> Result<(), RenderError> {
        render(&self.album, out, album)
    }

    fn render_photo(&self, out: &mut dyn Write, photo: &Photo) -> Result<(), RenderError> {
        render(&self.photo, out, photo)
    }
}
