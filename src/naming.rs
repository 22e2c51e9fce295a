//! Filename conventions shared by the photo collector and the config layer.
//!
//! Names are handled as plain `&str` rather than `Path` because the rules are
//! textual: the extension is whatever follows the final `.`, even for dotfiles
//! (`.hidden` has extension `hidden`), which `Path::extension` would not report.

use crate::types::THUMB_DIR;

/// Extension of a filename without the leading dot, or `""` if there is none.
///
/// - `"a.jpg"` → `"jpg"`
/// - `"a.b.JPG"` → `"JPG"` (case is preserved)
/// - `"noext"` → `""`
pub fn extension(filename: &str) -> &str {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .unwrap_or("")
}

/// Page filename for a photo: the final `.`-suffix is replaced by `.html`.
///
/// - `"a.jpg"` → `"a.html"`
/// - `"a.b.jpg"` → `"a.b.html"`
/// - `"noext"` → `"noext.html"`
pub fn page_name(filename: &str) -> String {
    let stem = filename
        .rsplit_once('.')
        .map(|(stem, _)| stem)
        .unwrap_or(filename);
    format!("{stem}.html")
}

/// Thumbnail path of a photo relative to its album directory.
pub fn thumbnail_path(filename: &str) -> String {
    format!("{THUMB_DIR}/{filename}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_after_last_dot() {
        assert_eq!(extension("a.jpg"), "jpg");
        assert_eq!(extension("a.b.png"), "png");
    }

    #[test]
    fn extension_case_preserved() {
        assert_eq!(extension("IMG_001.JPG"), "JPG");
    }

    #[test]
    fn extension_empty_without_dot() {
        assert_eq!(extension("noext"), "");
    }

    #[test]
    fn extension_of_dotfile() {
        assert_eq!(extension(".hidden"), "hidden");
    }

    #[test]
    fn extension_trailing_dot_is_empty() {
        assert_eq!(extension("photo."), "");
    }

    #[test]
    fn page_name_simple() {
        assert_eq!(page_name("a.jpg"), "a.html");
    }

    #[test]
    fn page_name_strips_only_last_segment() {
        assert_eq!(page_name("a.b.jpg"), "a.b.html");
    }

    #[test]
    fn page_name_without_extension_keeps_name() {
        assert_eq!(page_name("noext"), "noext.html");
    }

    #[test]
    fn page_name_of_dotfile() {
        assert_eq!(page_name(".hidden"), ".html");
    }

    #[test]
    fn thumbnail_under_thumb_dir() {
        assert_eq!(thumbnail_path("a.jpg"), "thumb/a.jpg");
    }
}
