//! Detail page links.

use crate::domain::{Id, Slug};

/// View model having its own detail page.
pub trait Linkable {
    /// Returns the [`Id`] of this view model.
    fn id(&self) -> &Id;

    /// Returns the [`Slug`] of this view model, if any.
    fn slug(&self) -> Option<&Slug>;
}

/// Builds a link to the detail page of the provided `item` under the
/// provided `base_path`.
///
/// The [`Slug`] is preferred, falling back to the [`Id`] when absent.
#[must_use]
pub fn detail_link<T>(item: &T, base_path: &str) -> String
where
    T: Linkable + ?Sized,
{
    match item.slug() {
        Some(slug) => format!("{base_path}/{slug}"),
        None => format!("{base_path}/{}", item.id()),
    }
}
