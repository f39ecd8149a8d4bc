//! Normalization of raw content records into view models.
//!
//! Every function here is pure and never fails: absent or malformed data
//! degrades to a placeholder, an empty string or an empty list.

use smart_default::SmartDefault;

use crate::{
    domain::{
        manufacturer,
        media::{self, GalleryEntry},
        moto::{CustomMoto, Flavor, RestoredMoto},
        Moto, RichText, Sale, Spare, Year,
    },
    read::{
        project::Project,
        sale_item::{self, Details, SaleItem, Status},
    },
};

/// Normalization configuration.
#[derive(Clone, Debug, SmartDefault)]
pub struct Config {
    /// Image URL used when a record has no image of its own.
    #[default("/placeholder.jpg".to_owned())]
    pub placeholder_image: String,

    /// Maximum length of a [`Project`] description, in characters.
    #[default(300)]
    pub description_length: usize,

    /// Maximum length of a [`SaleItem`] description summary, in characters.
    #[default(150)]
    pub summary_length: usize,
}

/// Normalizes a [`RestoredMoto`] into a [`Project`].
#[must_use]
pub fn restored_to_project(raw: &RestoredMoto, config: &Config) -> Project {
    moto_to_project(raw, config)
}

/// Normalizes a [`CustomMoto`] into a [`Project`].
#[must_use]
pub fn custom_to_project(raw: &CustomMoto, config: &Config) -> Project {
    moto_to_project(raw, config)
}

/// Normalizes a [`Moto`] of any [`Flavor`] into a [`Project`].
///
/// [`Project::category`] is taken from the [`Flavor`] only.
#[must_use]
pub fn moto_to_project<Of: Flavor>(raw: &Moto<Of>, config: &Config) -> Project {
    let hero = image_url(raw.hero_image.as_ref());
    let gallery = gallery_urls(&raw.gallery);

    Project {
        id: raw.id.clone(),
        title: raw.title.clone(),
        category: raw.kind().into(),
        year: year(raw.year),
        engine: engine(raw.manufacturer.as_ref()),
        image: hero
            .clone()
            .unwrap_or_else(|| config.placeholder_image.clone()),
        before_image: gallery.first().cloned(),
        gallery,
        description: truncate(
            plain_text(raw.content.as_ref()),
            config.description_length,
        ),
        after_image: hero,
        client_location: raw.client_location.clone().unwrap_or_default(),
        slug: raw.slug.clone(),
    }
}

/// Normalizes a [`Sale`] into a [`SaleItem`] of a bike.
#[must_use]
pub fn sale_to_sale_item(raw: &Sale, config: &Config) -> SaleItem {
    SaleItem {
        id: raw.id.clone(),
        title: raw.title.clone(),
        status: raw
            .status
            .as_ref()
            .map_or(Status::Available, |s| Status::from_raw(s.as_str())),
        main_image: image_url(raw.main_image.as_ref())
            .unwrap_or_else(|| config.placeholder_image.clone()),
        gallery: gallery_urls(&raw.gallery),
        description_summary: truncate(
            plain_text(raw.description.as_ref()),
            config.summary_length,
        ),
        slug: raw.slug.clone(),
        details: Details::Bike(sale_item::Bike {
            price: raw.price.clone().unwrap_or_default(),
            year: year(raw.year),
            engine: engine(raw.manufacturer.as_ref()),
            mileage: raw.mileage.clone().unwrap_or_default(),
            number_of_owners: raw.number_of_owners,
            registration_date: raw.registration_date.map(|d| d.coerce()),
            features: raw.features.iter().map(|f| f.feature.clone()).collect(),
        }),
    }
}

/// Normalizes a [`Spare`] into a [`SaleItem`] of a spare part.
#[must_use]
pub fn spare_to_sale_item(raw: &Spare, config: &Config) -> SaleItem {
    SaleItem {
        id: raw.id.clone(),
        title: raw.title.clone(),
        status: raw
            .status
            .as_ref()
            .map_or(Status::Available, |s| Status::from_raw(s.as_str())),
        main_image: image_url(raw.main_image.as_ref())
            .unwrap_or_else(|| config.placeholder_image.clone()),
        gallery: gallery_urls(&raw.gallery),
        description_summary: truncate(
            plain_text(raw.description.as_ref()),
            config.summary_length,
        ),
        slug: raw.slug.clone(),
        details: Details::Spare(sale_item::Spare {
            price: raw.price.clone().unwrap_or_default(),
            part_category: raw.part_category.clone().unwrap_or_default(),
            condition: raw.condition.clone().unwrap_or_default(),
            compatibility: raw.compatibility.clone(),
        }),
    }
}

/// Extracts the plain text of the provided [`RichText`] document.
///
/// Absent document has no text.
#[must_use]
pub fn plain_text(doc: Option<&RichText>) -> String {
    doc.map(RichText::plain_text).unwrap_or_default()
}

/// Returns the URL of the referenced image, if resolvable.
fn image_url(image: Option<&media::Ref>) -> Option<String> {
    image.and_then(media::Ref::url).map(ToString::to_string)
}

/// Returns the URLs of the resolvable gallery images, in their order.
fn gallery_urls(gallery: &[GalleryEntry]) -> Vec<String> {
    gallery
        .iter()
        .filter_map(|e| e.image().url())
        .map(ToString::to_string)
        .collect()
}

/// Returns the display name of the referenced manufacturer.
fn engine(manufacturer: Option<&manufacturer::Ref>) -> String {
    manufacturer
        .map(manufacturer::Ref::display_name)
        .unwrap_or_default()
        .to_owned()
}

/// Returns the textual form of the provided [`Year`], empty if absent.
fn year(year: Option<Year>) -> String {
    year.map(|y| y.to_string()).unwrap_or_default()
}

/// Truncates the provided `text` to `max` characters.
fn truncate(mut text: String, max: usize) -> String {
    if let Some((at, _)) = text.char_indices().nth(max) {
        text.truncate(at);
    }
    text
}
