//! Domain definitions.
//!
//! Raw content records as the content store returns them. These are
//! read-only to the rest of the crate: the [`normalize`] module turns them
//! into view models.
//!
//! [`normalize`]: crate::normalize

mod de;
pub mod listing;
pub mod manufacturer;
pub mod media;
pub mod moto;
pub mod publication;
pub mod rich_text;
pub mod sale;
pub mod spare;

use std::{convert::Infallible, fmt, str::FromStr};

use derive_more::{AsRef, Display, Error as StdError};
use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use strum::{EnumString, IntoStaticStr};

pub use self::{
    manufacturer::Manufacturer, media::Media, moto::Moto,
    rich_text::RichText, sale::Sale, spare::Spare,
};

/// ID of a content record.
///
/// Content store emits IDs either as strings or as numbers, depending on its
/// database adapter. Both forms are kept as their textual representation.
#[derive(AsRef, Clone, Debug, Default, Display, Eq, Hash, PartialEq)]
#[as_ref(forward)]
pub struct Id(String);

impl Id {
    /// Creates a new [`Id`] out of its textual representation.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl FromStr for Id {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        de::Scalar::deserialize(deserializer).map(|s| Self(s.into()))
    }
}

/// Human-readable URL path segment identifying a content record.
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(forward)]
pub struct Slug(String);

impl Slug {
    /// Creates a new [`Slug`] if the given `slug` is valid.
    #[must_use]
    pub fn new(slug: impl Into<String>) -> Option<Self> {
        let slug = slug.into();
        Self::check(&slug).then_some(Self(slug))
    }

    /// Checks whether the given `slug` is a valid [`Slug`].
    fn check(slug: impl AsRef<str>) -> bool {
        let slug = slug.as_ref();
        slug.trim() == slug && !slug.is_empty()
    }
}

impl FromStr for Slug {
    type Err = InvalidSlug;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or(InvalidSlug)
    }
}

/// Error of parsing an invalid [`Slug`].
#[derive(Clone, Copy, Debug, Display, StdError)]
#[display("`Slug` must be non-empty and have no surrounding whitespace")]
pub struct InvalidSlug;

impl<'de> Deserialize<'de> for Slug {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error as _;

        String::deserialize(deserializer)?
            .parse()
            .map_err(D::Error::custom)
    }
}

/// Collection of the content store.
#[derive(
    Clone,
    Copy,
    Debug,
    strum::Display,
    EnumString,
    Eq,
    Hash,
    IntoStaticStr,
    PartialEq,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Collection {
    /// Motorcycles restored to their original state.
    RestoredMotos,

    /// Custom motorcycle builds.
    CustomMotorcycles,

    /// Motorcycles listed for sale.
    Sales,

    /// Spare parts listed for sale.
    Spares,

    /// Motorcycle manufacturers.
    Manufacturers,

    /// Uploaded media files.
    Media,
}

/// Relationship field of a [`Record`] pointing into another [`Collection`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Relation {
    /// Dotted path of the field inside a record.
    ///
    /// `*` segment stands for every element of an array.
    pub path: &'static str,

    /// [`Collection`] the field points into.
    pub to: Collection,
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.path, self.to)
    }
}

/// Raw content record stored in a [`Collection`].
pub trait Record: DeserializeOwned {
    /// [`Collection`] this [`Record`] is stored in.
    const COLLECTION: Collection;

    /// [`Relation`]s this [`Record`] has to other [`Collection`]s.
    const RELATIONS: &'static [Relation];
}

/// Year a motorcycle was built in.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Year(i32);

impl Year {
    /// Creates a new [`Year`].
    #[must_use]
    pub const fn new(year: i32) -> Self {
        Self(year)
    }
}

impl<'de> Deserialize<'de> for Year {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error as _;

        let year = String::from(de::Scalar::deserialize(deserializer)?);
        year.trim()
            .parse()
            .map(Self)
            .map_err(|e| D::Error::custom(format!("invalid `Year`: {e}")))
    }
}

#[cfg(test)]
mod spec {
    use serde_json::json;

    use super::{Collection, Id, Slug, Year};

    #[test]
    fn id_from_string_or_number() {
        assert_eq!(
            serde_json::from_value::<Id>(json!("abc")).unwrap(),
            Id::new("abc"),
        );
        assert_eq!(
            serde_json::from_value::<Id>(json!(42)).unwrap(),
            Id::new("42"),
        );
        assert!(serde_json::from_value::<Id>(json!({"id": 1})).is_err());
    }

    #[test]
    fn slug_rejects_blank_values() {
        assert!(Slug::new("cb750").is_some());
        assert!(Slug::new("").is_none());
        assert!(Slug::new(" cb750").is_none());
        assert!(serde_json::from_value::<Slug>(json!("")).is_err());
    }

    #[test]
    fn year_from_number_or_numeric_string() {
        assert_eq!(
            serde_json::from_value::<Year>(json!(1965)).unwrap(),
            Year::new(1965),
        );
        assert_eq!(
            serde_json::from_value::<Year>(json!("2023")).unwrap(),
            Year::new(2023),
        );
        assert!(serde_json::from_value::<Year>(json!("TBD")).is_err());
    }

    #[test]
    fn collection_slugs() {
        assert_eq!(Collection::RestoredMotos.to_string(), "restored-motos");
        assert_eq!(
            "custom-motorcycles".parse::<Collection>(),
            Ok(Collection::CustomMotorcycles),
        );
        assert_eq!(Collection::Media.to_string(), "media");
    }
}
