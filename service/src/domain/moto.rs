//! [`Moto`] definitions.

use std::marker::PhantomData;

use common::define_kind;
use serde::Deserialize;

use super::{
    de, manufacturer, media, publication, Collection, Id, Record, Relation,
    RichText, Slug, Year,
};

/// Motorcycle presented in the workshop portfolio.
///
/// `Of` is the [`Flavor`] of the work done on it, determined by the
/// [`Collection`] the record is stored in.
#[derive(Clone, Debug, Deserialize)]
#[serde(bound = "", rename_all = "camelCase")]
pub struct Moto<Of> {
    /// ID of this [`Moto`].
    pub id: Id,

    /// Display name of this [`Moto`].
    #[serde(default, deserialize_with = "de::text")]
    pub title: String,

    /// [`manufacturer::Ref`] of this [`Moto`].
    #[serde(default, deserialize_with = "de::lenient")]
    pub manufacturer: Option<manufacturer::Ref>,

    /// [`Year`] this [`Moto`] was built in.
    #[serde(default, deserialize_with = "de::lenient")]
    pub year: Option<Year>,

    /// Hero image of this [`Moto`].
    #[serde(default, deserialize_with = "de::lenient")]
    pub hero_image: Option<media::Ref>,

    /// Gallery of this [`Moto`], in the order the images were added.
    #[serde(default, deserialize_with = "de::lenient_seq")]
    pub gallery: Vec<media::GalleryEntry>,

    /// Story of this [`Moto`].
    #[serde(default, deserialize_with = "de::lenient")]
    pub content: Option<RichText>,

    /// [`publication::Status`] of this [`Moto`].
    #[serde(
        default,
        rename = "_status",
        deserialize_with = "de::lenient_or_default"
    )]
    pub status: publication::Status,

    /// [`Slug`] of this [`Moto`].
    #[serde(default, deserialize_with = "de::lenient")]
    pub slug: Option<Slug>,

    /// Location of the client who owns this [`Moto`].
    #[serde(default, deserialize_with = "de::lenient_text")]
    pub client_location: Option<String>,

    /// [`Flavor`] marker.
    #[serde(skip)]
    _of: PhantomData<Of>,
}

define_kind! {
    #[doc = "Kind of work done on a [`Moto`]."]
    enum Kind {
        #[doc = "Restored to its original state."]
        Restored,

        #[doc = "Modified into a custom build."]
        Custom,
    }
}

/// Flavor of a [`Moto`], binding it to a [`Collection`].
pub trait Flavor {
    /// [`Kind`] of work this [`Flavor`] describes.
    const KIND: Kind;

    /// [`Collection`] records of this [`Flavor`] are stored in.
    const COLLECTION: Collection;
}

/// [`Flavor`] of a restored [`Moto`].
#[derive(Clone, Copy, Debug)]
pub enum Restored {}

impl Flavor for Restored {
    const KIND: Kind = Kind::Restored;
    const COLLECTION: Collection = Collection::RestoredMotos;
}

/// [`Flavor`] of a custom [`Moto`].
#[derive(Clone, Copy, Debug)]
pub enum Custom {}

impl Flavor for Custom {
    const KIND: Kind = Kind::Custom;
    const COLLECTION: Collection = Collection::CustomMotorcycles;
}

impl<Of: Flavor> Moto<Of> {
    /// Returns the [`Kind`] of work done on this [`Moto`].
    #[must_use]
    pub fn kind(&self) -> Kind {
        Of::KIND
    }
}

impl<Of: Flavor> Record for Moto<Of> {
    const COLLECTION: Collection = Of::COLLECTION;

    const RELATIONS: &'static [Relation] = &[
        Relation {
            path: "manufacturer",
            to: Collection::Manufacturers,
        },
        Relation {
            path: "heroImage",
            to: Collection::Media,
        },
        Relation {
            path: "gallery.*.image",
            to: Collection::Media,
        },
        Relation {
            path: "gallery.*",
            to: Collection::Media,
        },
    ];
}

/// Restored [`Moto`].
pub type RestoredMoto = Moto<Restored>;

/// Custom [`Moto`].
pub type CustomMoto = Moto<Custom>;

#[cfg(test)]
mod spec {
    use serde_json::json;

    use super::{CustomMoto, Kind, RestoredMoto};
    use crate::domain::{publication, Id, Slug, Year};

    #[test]
    fn deserializes_full_record() {
        let moto: RestoredMoto = serde_json::from_value(json!({
            "id": 12,
            "title": "1965 Triumph Bonneville",
            "manufacturer": {"id": 3, "name": "Triumph"},
            "year": 1965,
            "heroImage": {"id": 1, "url": "/media/bonnie.jpg"},
            "gallery": [{"image": {"id": 2, "url": "/media/before.jpg"}}],
            "content": {"root": {"children": []}},
            "_status": "published",
            "slug": "triumph-bonneville-1965",
            "clientLocation": "Pune",
        }))
        .unwrap();

        assert_eq!(moto.id, Id::new("12"));
        assert_eq!(moto.kind(), Kind::Restored);
        assert_eq!(moto.year, Some(Year::new(1965)));
        assert_eq!(moto.status, publication::Status::Published);
        assert_eq!(moto.slug, Slug::new("triumph-bonneville-1965"));
        assert_eq!(moto.gallery.len(), 1);
        assert_eq!(moto.client_location.as_deref(), Some("Pune"));
    }

    #[test]
    fn tolerates_missing_and_malformed_fields() {
        let moto: CustomMoto = serde_json::from_value(json!({
            "id": "abc",
            "year": "unknown",
            "heroImage": 5,
            "gallery": null,
            "_status": "archived",
            "slug": "",
        }))
        .unwrap();

        assert_eq!(moto.kind(), Kind::Custom);
        assert_eq!(moto.title, "");
        assert_eq!(moto.year, None);
        assert!(moto.gallery.is_empty());
        assert_eq!(moto.status, publication::Status::Draft);
        assert_eq!(moto.slug, None);
    }
}
