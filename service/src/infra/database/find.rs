//! [`Find`] query definitions.

use std::{borrow::Cow, cmp::Ordering, convert::Infallible, str::FromStr};

use serde_json::Value;

use crate::domain::publication;
#[cfg(doc)]
use crate::{domain::Record, infra::Database};

/// Query of [`Record`]s stored in a [`Database`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Find {
    /// [`Where`] clause [`Record`]s must match.
    pub filter: Where,

    /// Depth relationships of the [`Record`]s are populated to.
    ///
    /// `0` leaves them as bare IDs.
    pub depth: u8,

    /// Maximum number of [`Record`]s to return.
    pub limit: Option<usize>,

    /// [`Sort`] order of the returned [`Record`]s.
    pub sort: Option<Sort>,
}

impl Find {
    /// Creates a new [`Find`] query with the provided [`Where`] clause.
    #[must_use]
    pub fn new(filter: Where) -> Self {
        Self {
            filter,
            ..Self::default()
        }
    }

    /// Creates a new [`Find`] query of published [`Record`]s only.
    #[must_use]
    pub fn published() -> Self {
        Self::new(Where::published())
    }

    /// Narrows this [`Find`] query with the provided [`Where`] clause.
    #[must_use]
    pub fn and(mut self, filter: Where) -> Self {
        self.filter = self.filter.and(filter);
        self
    }

    /// Sets the relationships population depth of this [`Find`] query.
    #[must_use]
    pub fn depth(mut self, depth: u8) -> Self {
        self.depth = depth;
        self
    }

    /// Sets the maximum number of [`Record`]s to return.
    #[must_use]
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the [`Sort`] order of the returned [`Record`]s.
    #[must_use]
    pub fn sort(mut self, sort: Sort) -> Self {
        self.sort = Some(sort);
        self
    }
}

/// Predicate tree over document fields.
///
/// Fields are addressed by dotted paths (`manufacturer.name`).
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Where {
    /// Matches every document.
    #[default]
    All,

    /// Field's textual form equals the value.
    Equals {
        /// Path of the field.
        field: String,

        /// Value to compare with.
        value: String,
    },

    /// Field's textual form contains the value, case-insensitively.
    Contains {
        /// Path of the field.
        field: String,

        /// Value to search for.
        value: String,
    },

    /// Every clause matches.
    And(Vec<Where>),

    /// At least one clause matches.
    Or(Vec<Where>),
}

impl Where {
    /// Creates a new [`Where::Equals`] clause.
    #[must_use]
    pub fn equals(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Equals {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Creates a new [`Where::Contains`] clause.
    #[must_use]
    pub fn contains(
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::Contains {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Creates a new [`Where`] clause matching published documents only.
    #[must_use]
    pub fn published() -> Self {
        Self::equals("_status", publication::Status::Published.as_str())
    }

    /// Combines this [`Where`] clause with the `other` one.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        match (self, other) {
            (Self::All, w) | (w, Self::All) => w,
            (Self::And(mut ws), w) => {
                ws.push(w);
                Self::And(ws)
            }
            (w1, w2) => Self::And(vec![w1, w2]),
        }
    }

    /// Checks whether the provided document matches this [`Where`] clause.
    #[must_use]
    pub fn matches(&self, doc: &Value) -> bool {
        match self {
            Self::All => true,
            Self::Equals { field, value } => {
                field_text(doc, field).is_some_and(|t| t == value.as_str())
            }
            Self::Contains { field, value } => {
                field_text(doc, field).is_some_and(|t| {
                    t.to_lowercase().contains(&value.to_lowercase())
                })
            }
            Self::And(ws) => ws.iter().all(|w| w.matches(doc)),
            Self::Or(ws) => ws.iter().any(|w| w.matches(doc)),
        }
    }
}

/// Sort order of documents by a single field.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Sort {
    /// Path of the field to sort by.
    pub field: String,

    /// [`Order`] to sort in.
    pub order: Order,
}

/// Direction of a [`Sort`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Order {
    /// Smallest values first.
    Ascending,

    /// Largest values first.
    Descending,
}

impl Sort {
    /// Creates a new ascending [`Sort`] by the provided `field`.
    #[must_use]
    pub fn ascending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            order: Order::Ascending,
        }
    }

    /// Creates a new descending [`Sort`] by the provided `field`.
    #[must_use]
    pub fn descending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            order: Order::Descending,
        }
    }

    /// Sorts the provided documents stably in this [`Sort`] order.
    ///
    /// Documents missing the field are considered the smallest.
    pub fn apply(&self, docs: &mut [Value]) {
        docs.sort_by(|a, b| {
            let ord = compare(lookup(a, &self.field), lookup(b, &self.field));
            match self.order {
                Order::Ascending => ord,
                Order::Descending => ord.reverse(),
            }
        });
    }
}

impl FromStr for Sort {
    type Err = Infallible;

    /// Parses a [`Sort`] out of `field` (ascending) or `-field` (descending).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.strip_prefix('-') {
            Some(field) => Self::descending(field),
            None => Self::ascending(s),
        })
    }
}

/// Looks up the value at the provided dotted `path` of the `doc`.
pub(super) fn lookup<'v>(doc: &'v Value, path: &str) -> Option<&'v Value> {
    path.split('.').try_fold(doc, |v, key| v.get(key))
}

/// Returns the textual form of a string or a number.
pub(super) fn text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(s) => Some(Cow::Borrowed(s)),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::Bool(b) => Some(Cow::Owned(b.to_string())),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Returns the textual form of the field at the dotted `path` of the `doc`.
fn field_text<'v>(doc: &'v Value, path: &str) -> Option<Cow<'v, str>> {
    lookup(doc, path).and_then(text)
}

/// Compares two optional field values.
///
/// Numbers are compared numerically, anything else by its textual form.
fn compare(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Number(x)), Some(Value::Number(y))) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(x), Some(y)) => text(x).cmp(&text(y)),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod spec {
    use serde_json::{json, Value};

    use super::{Find, Order, Sort, Where};

    fn doc() -> Value {
        json!({
            "id": 42,
            "title": "Honda CB750 Four",
            "_status": "published",
            "manufacturer": {"id": 1, "name": "Honda"},
        })
    }

    #[test]
    fn equals_compares_textual_form() {
        assert!(Where::equals("id", "42").matches(&doc()));
        assert!(Where::equals("manufacturer.name", "Honda").matches(&doc()));
        assert!(!Where::equals("manufacturer.name", "honda").matches(&doc()));
        assert!(!Where::equals("missing", "").matches(&doc()));
        assert!(!Where::equals("manufacturer", "1").matches(&doc()));
    }

    #[test]
    fn contains_ignores_case() {
        assert!(Where::contains("title", "cb750").matches(&doc()));
        assert!(Where::contains("title", "FOUR").matches(&doc()));
        assert!(!Where::contains("title", "triumph").matches(&doc()));
    }

    #[test]
    fn published_gate() {
        assert!(Where::published().matches(&doc()));
        assert!(!Where::published().matches(&json!({"_status": "draft"})));
        assert!(!Where::published().matches(&json!({})));
    }

    #[test]
    fn combines_clauses() {
        let w = Where::published()
            .and(Where::Or(vec![
                Where::equals("slug", "cb750"),
                Where::equals("id", "42"),
            ]))
            .and(Where::All);

        assert!(w.matches(&doc()));
        assert!(!w.matches(&json!({"id": 42, "_status": "draft"})));
        assert_eq!(Where::All.and(Where::All), Where::All);
    }

    #[test]
    fn parses_sort() {
        assert_eq!("-createdAt".parse(), Ok(Sort {
            field: "createdAt".into(),
            order: Order::Descending,
        }));
        assert_eq!("title".parse(), Ok(Sort {
            field: "title".into(),
            order: Order::Ascending,
        }));
    }

    #[test]
    fn sorts_stably() {
        let mut docs = vec![
            json!({"n": "a", "createdAt": "2024-01-01T00:00:00Z"}),
            json!({"n": "b"}),
            json!({"n": "c", "createdAt": "2024-05-01T00:00:00Z"}),
            json!({"n": "d", "createdAt": "2024-01-01T00:00:00Z"}),
        ];

        "-createdAt".parse::<Sort>().unwrap().apply(&mut docs);

        let order = docs.iter().map(|d| d["n"].clone()).collect::<Vec<_>>();
        assert_eq!(order, [json!("c"), json!("a"), json!("d"), json!("b")]);
    }

    #[test]
    fn sorts_numbers_numerically() {
        let mut docs = vec![json!({"y": 1999}), json!({"y": 200})];

        "y".parse::<Sort>().unwrap().apply(&mut docs);

        assert_eq!(docs, [json!({"y": 200}), json!({"y": 1999})]);
    }

    #[test]
    fn builds_query() {
        let find = Find::published().depth(1).limit(10);

        assert_eq!(find.filter, Where::published());
        assert_eq!(find.depth, 1);
        assert_eq!(find.limit, Some(10));
        assert_eq!(find.sort, None);
    }
}
