//! Definitions shared by records listed for sale.

use std::{convert::Infallible, str::FromStr};

use derive_more::{AsRef, Display};
use serde::{Deserialize, Deserializer};

use super::de;

/// Price of a listing, as pre-formatted display text (`₹ 4,50,000`).
///
/// Intentionally opaque: grouping and currency symbols are part of the text,
/// so it must never be treated as an amount.
#[derive(AsRef, Clone, Debug, Default, Display, Eq, PartialEq)]
#[as_ref(forward)]
pub struct Price(String);

impl Price {
    /// Creates a new [`Price`] out of its display text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }
}

impl FromStr for Price {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<Price> for String {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        de::Scalar::deserialize(deserializer).map(|s| Self(s.into()))
    }
}

/// Availability of a listing, as the raw lowercase value the content store
/// keeps (`available`, `reserved`, `sold`).
///
/// Not validated here: mapping it to a display status is up to the
/// normalizer.
#[derive(AsRef, Clone, Debug, Deserialize, Display, Eq, PartialEq)]
#[as_ref(forward)]
pub struct Availability(String);

impl Availability {
    /// Returns the raw value of this [`Availability`].
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Feature row of a motorcycle listing.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct Feature {
    /// Feature description.
    #[serde(default, deserialize_with = "de::text")]
    pub feature: String,
}
