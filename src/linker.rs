//! Previous/next links between photo pages.

use crate::types::Photo;

/// Set `prev`/`next` on every photo from its neighbours' `page`.
///
/// The slice must already be in final display order. Re-running on a linked
/// slice recomputes the same values.
pub fn link_pages(photos: &mut [Photo]) {
    let pages: Vec<String> = photos.iter().map(|p| p.page.clone()).collect();
    for (i, photo) in photos.iter_mut().enumerate() {
        photo.prev = i.checked_sub(1).map(|j| pages[j].clone());
        photo.next = pages.get(i + 1).cloned();
    }
}
