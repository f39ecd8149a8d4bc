//! Publication [`Status`] definitions.

use serde::Deserialize;

/// Publication status of a content record.
///
/// Only [`Published`] records are visible on the site.
///
/// [`Published`]: Status::Published
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Work in progress, hidden from visitors.
    #[default]
    Draft,

    /// Visible to visitors.
    Published,
}

impl Status {
    /// Returns the raw value the content store keeps this [`Status`] as.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
        }
    }
}
