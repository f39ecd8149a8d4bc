//! Read entities definitions.
//!
//! View models consumed by listing and detail pages, along with the rules
//! of filtering them.

pub mod link;
pub mod project;
pub mod sale_item;

use std::str::FromStr;

pub use self::{
    link::{detail_link, Linkable},
    project::Project,
    sale_item::SaleItem,
};

/// Constraint on a single facet of a view model.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Criterion<T> {
    /// Any value matches.
    Any,

    /// Only the exactly equal value matches.
    Exactly(T),
}

impl<T> Default for Criterion<T> {
    fn default() -> Self {
        Self::Any
    }
}

impl<T> Criterion<T> {
    /// Parses a [`Criterion`] out of the provided `input`.
    ///
    /// Both the empty `input` and the `sentinel` one mean [`Criterion::Any`].
    ///
    /// # Errors
    ///
    /// If the `input` cannot be parsed as `T`.
    pub fn parse(input: &str, sentinel: &str) -> Result<Self, T::Err>
    where
        T: FromStr,
    {
        if input.is_empty() || input == sentinel {
            return Ok(Self::Any);
        }
        input.parse().map(Self::Exactly)
    }

    /// Checks whether the provided `value` satisfies this [`Criterion`].
    #[must_use]
    pub fn matches<V>(&self, value: &V) -> bool
    where
        T: PartialEq<V>,
        V: ?Sized,
    {
        match self {
            Self::Any => true,
            Self::Exactly(expected) => expected == value,
        }
    }
}

#[cfg(test)]
mod spec {
    use super::Criterion;

    #[test]
    fn sentinel_and_empty_mean_any() {
        assert_eq!(
            Criterion::<String>::parse("all", "all"),
            Ok(Criterion::Any),
        );
        assert_eq!(Criterion::<String>::parse("", "all"), Ok(Criterion::Any));
        assert_eq!(
            Criterion::<String>::parse("All", "all"),
            Ok(Criterion::Exactly("All".to_owned())),
        );
    }

    #[test]
    fn matches_exactly() {
        let c = Criterion::Exactly("1965".to_owned());

        assert!(c.matches("1965"));
        assert!(!c.matches("1965 "));
        assert!(!c.matches("196"));
        assert!(Criterion::<String>::Any.matches("anything"));
    }
}
