//! [`Media`] definitions.

use derive_more::{AsRef, Display};
use serde::{Deserialize, Deserializer};

use super::{de, Id};

/// Uploaded media file, as populated by the content store.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
pub struct Media {
    /// ID of this [`Media`].
    #[serde(default, deserialize_with = "de::lenient")]
    pub id: Option<Id>,

    /// [`Url`] this [`Media`] is served from.
    #[serde(default, deserialize_with = "de::lenient")]
    pub url: Option<Url>,
}

/// Directly usable URL of a [`Media`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(forward)]
pub struct Url(String);

impl Url {
    /// Creates a new [`Url`] if the given `url` is not blank.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Option<Self> {
        let url = url.into();
        (!url.trim().is_empty()).then_some(Self(url))
    }
}

impl From<Url> for String {
    fn from(url: Url) -> Self {
        url.0
    }
}

impl<'de> Deserialize<'de> for Url {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error as _;

        Self::new(String::deserialize(deserializer)?)
            .ok_or_else(|| D::Error::custom("blank `Url`"))
    }
}

/// Reference to a [`Media`].
///
/// Whether it's [`Resolved`] depends on the depth the content store
/// populated relationships to.
///
/// [`Resolved`]: Ref::Resolved
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(untagged)]
pub enum Ref {
    /// Populated [`Media`].
    Resolved(Media),

    /// Bare [`Id`] of a [`Media`].
    Unresolved(Id),
}

impl Ref {
    /// Returns the [`Url`] of the referenced [`Media`], if it's resolved and
    /// has one.
    #[must_use]
    pub fn url(&self) -> Option<&Url> {
        match self {
            Self::Resolved(media) => media.url.as_ref(),
            Self::Unresolved(_) => None,
        }
    }
}

/// Entry of a gallery.
///
/// Galleries are stored either as rows wrapping an `image` field, or as bare
/// references.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(untagged)]
pub enum GalleryEntry {
    /// Row wrapping a [`Ref`].
    Row {
        /// Referenced image.
        image: Ref,
    },

    /// Bare [`Ref`].
    Bare(Ref),
}

impl GalleryEntry {
    /// Returns the [`Ref`] of this [`GalleryEntry`].
    #[must_use]
    pub fn image(&self) -> &Ref {
        match self {
            Self::Row { image } | Self::Bare(image) => image,
        }
    }
}

#[cfg(test)]
mod spec {
    use serde_json::json;

    use super::{GalleryEntry, Media, Ref, Url};
    use crate::domain::Id;

    #[test]
    fn resolved_ref_has_url() {
        let r: Ref = serde_json::from_value(json!({
            "id": 7,
            "url": "/media/cb750-front.jpg",
        }))
        .unwrap();

        assert_eq!(r.url(), Url::new("/media/cb750-front.jpg").as_ref());
    }

    #[test]
    fn unresolved_ref_has_no_url() {
        let r: Ref = serde_json::from_value(json!("7")).unwrap();

        assert_eq!(r, Ref::Unresolved(Id::new("7")));
        assert_eq!(r.url(), None);
    }

    #[test]
    fn resolved_ref_without_url() {
        let r: Ref = serde_json::from_value(json!({"id": 7, "url": ""}))
            .unwrap();

        assert!(matches!(r, Ref::Resolved(Media { url: None, .. })));
        assert_eq!(r.url(), None);
    }

    #[test]
    fn gallery_entry_forms() {
        let row: GalleryEntry = serde_json::from_value(json!({
            "id": "row-1",
            "image": {"id": 1, "url": "/media/a.jpg"},
        }))
        .unwrap();
        let bare: GalleryEntry =
            serde_json::from_value(json!({"id": 2, "url": "/media/b.jpg"}))
                .unwrap();
        let id: GalleryEntry = serde_json::from_value(json!(3)).unwrap();

        assert_eq!(row.image().url(), Url::new("/media/a.jpg").as_ref());
        assert_eq!(bare.image().url(), Url::new("/media/b.jpg").as_ref());
        assert_eq!(id.image().url(), None);
    }
}
