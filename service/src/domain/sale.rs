//! [`Sale`] definitions.

use common::{unit, DateTimeOf};
use serde::Deserialize;

#[cfg(doc)]
use common::DateTime;

use super::{
    de,
    listing::{Availability, Feature, Price},
    manufacturer, media, Collection, Id, Record, Relation, RichText, Slug,
    Year,
};

/// Motorcycle listed for sale.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    /// ID of this [`Sale`].
    pub id: Id,

    /// Title of this [`Sale`].
    #[serde(default, deserialize_with = "de::text")]
    pub title: String,

    /// [`manufacturer::Ref`] of the motorcycle.
    #[serde(default, deserialize_with = "de::lenient")]
    pub manufacturer: Option<manufacturer::Ref>,

    /// [`Price`] of this [`Sale`].
    #[serde(default, deserialize_with = "de::lenient")]
    pub price: Option<Price>,

    /// [`Year`] the motorcycle was built in.
    #[serde(default, deserialize_with = "de::lenient")]
    pub year: Option<Year>,

    /// Mileage of the motorcycle, as display text.
    #[serde(default, deserialize_with = "de::lenient_text")]
    pub mileage: Option<String>,

    /// Number of previous owners of the motorcycle.
    #[serde(default, deserialize_with = "de::lenient")]
    pub number_of_owners: Option<u32>,

    /// [`DateTime`] the motorcycle was first registered at.
    #[serde(default, deserialize_with = "de::lenient")]
    pub registration_date: Option<RegistrationDateTime>,

    /// [`Availability`] of this [`Sale`].
    #[serde(default, deserialize_with = "de::lenient")]
    pub status: Option<Availability>,

    /// Main image of this [`Sale`].
    #[serde(default, deserialize_with = "de::lenient")]
    pub main_image: Option<media::Ref>,

    /// Gallery of this [`Sale`].
    #[serde(default, deserialize_with = "de::lenient_seq")]
    pub gallery: Vec<media::GalleryEntry>,

    /// Description of this [`Sale`].
    #[serde(default, deserialize_with = "de::lenient")]
    pub description: Option<RichText>,

    /// [`Feature`]s of the motorcycle.
    #[serde(default, deserialize_with = "de::lenient_seq")]
    pub features: Vec<Feature>,

    /// [`Slug`] of this [`Sale`].
    #[serde(default, deserialize_with = "de::lenient")]
    pub slug: Option<Slug>,
}

impl Record for Sale {
    const COLLECTION: Collection = Collection::Sales;

    const RELATIONS: &'static [Relation] = &[
        Relation {
            path: "manufacturer",
            to: Collection::Manufacturers,
        },
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

/// [`DateTime`] a motorcycle was first registered at.
pub type RegistrationDateTime = DateTimeOf<(Sale, unit::Registration)>;

#[cfg(test)]
mod spec {
    use serde_json::json;

    use super::Sale;

    #[test]
    fn deserializes_listing() {
        let sale: Sale = serde_json::from_value(json!({
            "id": 42,
            "title": "Honda CB750 Four",
            "manufacturer": {"id": 1, "name": "Honda"},
            "price": "₹ 4,50,000",
            "year": 1976,
            "mileage": 23_000,
            "numberOfOwners": 2,
            "registrationDate": "1977-02-11T00:00:00.000Z",
            "status": "reserved",
            "features": [{"feature": "Rebuilt carbs"}, {"id": "x"}],
            "slug": "cb750",
        }))
        .unwrap();

        assert_eq!(sale.price.unwrap().to_string(), "₹ 4,50,000");
        assert_eq!(sale.mileage.as_deref(), Some("23000"));
        assert_eq!(sale.number_of_owners, Some(2));
        assert!(sale.registration_date.is_some());
        assert_eq!(sale.status.unwrap().as_str(), "reserved");
        assert_eq!(sale.features.len(), 2);
        assert_eq!(sale.features[1].feature, "");
    }

    #[test]
    fn malformed_registration_date_is_absent() {
        let sale: Sale = serde_json::from_value(json!({
            "id": 1,
            "registrationDate": "last spring",
        }))
        .unwrap();

        assert!(sale.registration_date.is_none());
    }
}
