//! [`Manufacturer`] definitions.

use serde::Deserialize;

use super::{de, Id};

/// Motorcycle manufacturer, as populated by the content store.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
pub struct Manufacturer {
    /// ID of this [`Manufacturer`].
    #[serde(default, deserialize_with = "de::lenient")]
    pub id: Option<Id>,

    /// Display name of this [`Manufacturer`].
    #[serde(default, deserialize_with = "de::text")]
    pub name: String,
}

/// Reference to a [`Manufacturer`].
///
/// Content store populates it only when queried with a non-zero depth,
/// otherwise it's a bare [`Id`].
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(untagged)]
pub enum Ref {
    /// Populated [`Manufacturer`].
    Resolved(Manufacturer),

    /// Bare [`Id`] of a [`Manufacturer`].
    Unresolved(Id),
}

impl Ref {
    /// Returns the display name of the referenced [`Manufacturer`].
    ///
    /// Empty if the reference is not resolved.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self {
            Self::Resolved(m) => &m.name,
            Self::Unresolved(_) => "",
        }
    }
}

#[cfg(test)]
mod spec {
    use serde_json::json;

    use super::Ref;

    #[test]
    fn resolved_has_name() {
        let r: Ref =
            serde_json::from_value(json!({"id": 1, "name": "Honda"})).unwrap();

        assert_eq!(r.display_name(), "Honda");
    }

    #[test]
    fn unresolved_degrades_to_empty() {
        let r: Ref = serde_json::from_value(json!("64f0c2")).unwrap();

        assert_eq!(r.display_name(), "");
    }

    #[test]
    fn partial_object_degrades_to_empty() {
        let r: Ref = serde_json::from_value(json!({"id": 1})).unwrap();

        assert_eq!(r.display_name(), "");
    }
}
