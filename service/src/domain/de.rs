//! Lenient deserialization helpers.
//!
//! Content records are display-oriented, so a field of an unexpected shape
//! is treated as absent instead of failing the whole record.

use derive_more::Into;
use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::Value;

/// Scalar being either a string or a number, kept as its text.
#[derive(Clone, Debug, Into)]
pub(crate) struct Scalar(String);

impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Str(String),
            Num(serde_json::Number),
        }

        Ok(Self(match Repr::deserialize(deserializer)? {
            Repr::Str(s) => s,
            Repr::Num(n) => n.to_string(),
        }))
    }
}

/// Deserializes an optional `T`, treating a malformed value as [`None`].
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Deserializes a `T`, treating a malformed value as its [`Default`] one.
pub(crate) fn lenient_or_default<'de, D, T>(
    deserializer: D,
) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    lenient(deserializer).map(Option::unwrap_or_default)
}

/// Deserializes a sequence of `T`, dropping malformed elements.
///
/// Anything but an array results in an empty [`Vec`].
pub(crate) fn lenient_seq<'de, D, T>(
    deserializer: D,
) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|v| serde_json::from_value(v).ok())
            .collect(),
        Value::Null
        | Value::Bool(_)
        | Value::Number(_)
        | Value::String(_)
        | Value::Object(_) => Vec::new(),
    })
}

/// Deserializes an optional text out of a string or a number.
pub(crate) fn lenient_text<'de, D>(
    deserializer: D,
) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    lenient(deserializer).map(|s: Option<Scalar>| s.map(Into::into))
}

/// Deserializes a text out of a string or a number, defaulting to an empty
/// one.
pub(crate) fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_text(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod spec {
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Fixture {
        #[serde(default, deserialize_with = "super::lenient")]
        year: Option<u16>,

        #[serde(default, deserialize_with = "super::lenient_seq")]
        tags: Vec<String>,

        #[serde(default, deserialize_with = "super::text")]
        title: String,
    }

    #[test]
    fn malformed_fields_are_absent() {
        let f: Fixture = serde_json::from_value(json!({
            "year": "soon",
            "tags": "not a list",
            "title": {"nested": true},
        }))
        .unwrap();

        assert_eq!(f.year, None);
        assert!(f.tags.is_empty());
        assert_eq!(f.title, "");
    }

    #[test]
    fn drops_malformed_elements_only() {
        let f: Fixture = serde_json::from_value(json!({
            "tags": ["chrome", 7, "cafe racer", null],
        }))
        .unwrap();

        assert_eq!(f.tags, ["chrome", "cafe racer"]);
    }

    #[test]
    fn text_accepts_numbers() {
        let f: Fixture = serde_json::from_value(json!({"title": 1200}))
            .unwrap();

        assert_eq!(f.title, "1200");
    }

    #[test]
    fn missing_fields_default() {
        let f: Fixture = serde_json::from_value(json!({})).unwrap();

        assert_eq!(f.year, None);
        assert!(f.tags.is_empty());
        assert_eq!(f.title, "");
    }
}
