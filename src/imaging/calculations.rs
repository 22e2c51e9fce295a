//! Pure calculation functions for thumbnail dimensions.

use crate::types::Dims;

/// Target size for a thumbnail of an image with the given `(width, height)`.
///
/// The bounding box is landscape-shaped (`width >= height`). Landscape sources
/// get the box as is; portrait and square sources get it rotated, so a tall
/// photo is never squeezed into a wide frame.
///
/// The result is an exact resize target. When the source's aspect ratio
/// differs from the box's, the thumbnail is stretched to fit; no crop or
/// letterbox is applied.
pub fn oriented_target(source: (u32, u32), bbox: Dims) -> (u32, u32) {
    let (src_w, src_h) = source;
    if src_w > src_h {
        (bbox.width, bbox.height)
    } else {
        (bbox.height, bbox.width)
    }
}
