//! [`Spare`] definitions.

use serde::Deserialize;

use super::{
    de,
    listing::{Availability, Price},
    media, Collection, Id, Record, Relation, RichText, Slug,
};

/// Spare part listed for sale.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spare {
    /// ID of this [`Spare`].
    pub id: Id,

    /// Title of this [`Spare`].
    #[serde(default, deserialize_with = "de::text")]
    pub title: String,

    /// [`Price`] of this [`Spare`].
    #[serde(default, deserialize_with = "de::lenient")]
    pub price: Option<Price>,

    /// Category of the part (engine, electrical, body...).
    #[serde(default, deserialize_with = "de::lenient_text")]
    pub part_category: Option<String>,

    /// Condition of the part (new, used, refurbished...).
    #[serde(default, deserialize_with = "de::lenient_text")]
    pub condition: Option<String>,

    /// Free text describing motorcycles the part fits.
    #[serde(default, deserialize_with = "de::lenient_text")]
    pub compatibility: Option<String>,

    /// [`Availability`] of this [`Spare`].
    #[serde(default, deserialize_with = "de::lenient")]
    pub status: Option<Availability>,

    /// Main image of this [`Spare`].
    #[serde(default, deserialize_with = "de::lenient")]
    pub main_image: Option<media::Ref>,

    /// Gallery of this [`Spare`].
    #[serde(default, deserialize_with = "de::lenient_seq")]
    pub gallery: Vec<media::GalleryEntry>,

    /// Description of this [`Spare`].
    #[serde(default, deserialize_with = "de::lenient")]
    pub description: Option<RichText>,

    /// [`Slug`] of this [`Spare`].
    #[serde(default, deserialize_with = "de::lenient")]
    pub slug: Option<Slug>,
}

impl Record for Spare {
    const COLLECTION: Collection = Collection::Spares;

    const RELATIONS: &'static [Relation] = &[
        Relation {
            path: "mainImage",
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
