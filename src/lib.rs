//! # photomine
//!
//! A static photo gallery generator. Your filesystem is the data source:
//! every directory in the album root becomes an album, every image in it
//! becomes a photo with its own page, and the output is a plain tree of HTML
//! files and images you can drop on any file server.
//!
//! # Pipeline
//!
//! ```text
//! 1. Scan       _albums/          →  albums, sorted by name
//! 2. Index      albums            →  _build/index.html
//! 3. Per album  _albums/<album>/  →  _build/<album>/
//!      copy files, collect photos, link prev/next,
//!      dispatch thumbnails, render photo pages + album index
//! 4. Wait       thumbnail workers
//! ```
//!
//! Thumbnails are produced on a bounded rayon pool while the calling thread
//! carries on copying and rendering the remaining albums. See [`pipeline`].
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Album discovery and photo collection |
//! | [`linker`] | Previous/next links between photo pages |
//! | [`naming`] | Extension and page-name derivation from filenames |
//! | [`fs_tree`] | Filesystem primitives: list, stat, recursive copy, create |
//! | [`imaging`] | Orientation-aware thumbnails with the `image` crate |
//! | [`render`] | Liquid templates or the compiled-in maud theme |
//! | [`pipeline`] | `build` and `check`, the two operations the CLI runs |
//! | [`config`] | `config.toml` loading, validation and directory resolution |
//! | [`types`] | `Album`, `Photo`, `AlbumIndex`: the data templates see |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Templates Are Data-Driven
//!
//! Pages are rendered from serializable data ([`types`]). Liquid templates see
//! exactly the fields of the value they render, so a site author can write
//! templates from the field list alone. The built-in maud theme renders the
//! same values.
//!
//! ## Thumbnails Fill the Box
//!
//! A thumbnail is resized to exactly the configured bounding box, rotated for
//! portrait photos. Photos whose aspect ratio differs from the box's are
//! stretched. Keeping the box exact means every thumbnail in a grid lines up.
//!
//! ## Best-Effort Thumbnails, Strict Everything Else
//!
//! A photo that cannot be decoded loses its thumbnail but keeps its page, and
//! the build reports it. Failing to copy an album, create a directory, or
//! render a page stops the build: a site missing pages is worse than no site.

pub mod config;
pub mod fs_tree;
pub mod imaging;
pub mod linker;
pub mod naming;
pub mod output;
pub mod pipeline;
pub mod render;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
