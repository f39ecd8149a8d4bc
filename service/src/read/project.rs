//! [`Project`]-related read definitions.

use common::define_kind;

use crate::domain::{moto, Id, Slug};

use super::Linkable;

/// Portfolio entry describing work done on a motorcycle.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Project {
    /// ID of the raw record this [`Project`] is made of.
    pub id: Id,

    /// Display name of this [`Project`].
    pub title: String,

    /// [`Category`] of this [`Project`].
    pub category: Category,

    /// Year the motorcycle was built in, or empty if unknown.
    pub year: String,

    /// Display name of the motorcycle manufacturer, or empty if unknown.
    pub engine: String,

    /// URL of the main image of this [`Project`].
    pub image: String,

    /// URLs of the gallery images, in their original order.
    pub gallery: Vec<String>,

    /// Plain-text description of this [`Project`].
    pub description: String,

    /// URL of the image showing the motorcycle before the work.
    pub before_image: Option<String>,

    /// URL of the image showing the motorcycle after the work.
    pub after_image: Option<String>,

    /// Location of the client owning the motorcycle, or empty if unknown.
    pub client_location: String,

    /// [`Slug`] of this [`Project`].
    pub slug: Option<Slug>,
}

impl Linkable for Project {
    fn id(&self) -> &Id {
        &self.id
    }

    fn slug(&self) -> Option<&Slug> {
        self.slug.as_ref()
    }
}

define_kind! {
    #[doc = "Category of a [`Project`]."]
    enum Category {
        #[doc = "Motorcycle restored to its original state."]
        Restoration,

        #[doc = "Motorcycle modified into a custom build."]
        Modification,
    }
}

impl From<moto::Kind> for Category {
    fn from(kind: moto::Kind) -> Self {
        match kind {
            moto::Kind::Restored => Self::Restoration,
            moto::Kind::Custom => Self::Modification,
        }
    }
}

pub mod list {
    //! [`Project`] list definitions.

    use std::cmp::Ordering;

    use itertools::Itertools as _;

    use crate::read::Criterion;

    use super::{Category, Project};

    /// Filter of a [`Project`] list.
    ///
    /// A [`Project`] matches when every [`Criterion`] matches.
    #[derive(Clone, Debug, Default, Eq, PartialEq)]
    pub struct Filter {
        /// [`Criterion`] on [`Project::category`].
        pub category: Criterion<Category>,

        /// [`Criterion`] on [`Project::year`].
        pub year: Criterion<String>,

        /// [`Criterion`] on [`Project::engine`].
        pub manufacturer: Criterion<String>,
    }

    impl Filter {
        /// Input meaning any [`Category`].
        pub const ANY_CATEGORY: &'static str = "All";

        /// Input meaning any year or manufacturer.
        pub const ANY: &'static str = "all";

        /// Parses a [`Filter`] out of the raw facet inputs.
        ///
        /// # Errors
        ///
        /// If the `category` is neither a [`Category`] nor a sentinel.
        pub fn parse(
            category: &str,
            year: &str,
            manufacturer: &str,
        ) -> Result<Self, strum::ParseError> {
            Ok(Self {
                category: Criterion::parse(category, Self::ANY_CATEGORY)?,
                year: Criterion::parse(year, Self::ANY)
                    .unwrap_or_else(|e| match e {}),
                manufacturer: Criterion::parse(manufacturer, Self::ANY)
                    .unwrap_or_else(|e| match e {}),
            })
        }

        /// Checks whether the provided [`Project`] matches this [`Filter`].
        #[must_use]
        pub fn matches(&self, project: &Project) -> bool {
            self.category.matches(&project.category)
                && self.year.matches(project.year.as_str())
                && self.manufacturer.matches(project.engine.as_str())
        }

        /// Keeps only the [`Project`]s matching this [`Filter`], preserving
        /// their order.
        #[must_use]
        pub fn apply(
            &self,
            projects: impl IntoIterator<Item = Project>,
        ) -> Vec<Project> {
            projects.into_iter().filter(|p| self.matches(p)).collect()
        }
    }

    /// Distinct facet values of a [`Project`] list.
    #[derive(Clone, Debug, Default, Eq, PartialEq)]
    pub struct Facets {
        /// Distinct years, newest first.
        ///
        /// Non-numeric years follow the numeric ones, in lexicographic
        /// order.
        pub years: Vec<String>,

        /// Distinct manufacturer names, in lexicographic order.
        pub manufacturers: Vec<String>,
    }

    impl Facets {
        /// Year values that stand for a missing year.
        const MISSING_YEARS: [&'static str; 3] = ["", "undefined", "null"];

        /// Extracts [`Facets`] out of the provided [`Project`]s.
        #[must_use]
        pub fn extract<'a>(
            projects: impl IntoIterator<Item = &'a Project>,
        ) -> Self {
            let projects = projects.into_iter().collect::<Vec<_>>();

            let years = projects
                .iter()
                .map(|p| p.year.as_str())
                .filter(|y| !Self::MISSING_YEARS.contains(y))
                .unique()
                .sorted_by(|a, b| by_year_desc(a, b))
                .map(ToOwned::to_owned)
                .collect();

            let manufacturers = projects
                .iter()
                .map(|p| p.engine.as_str())
                .filter(|m| !m.is_empty())
                .unique()
                .sorted()
                .map(ToOwned::to_owned)
                .collect();

            Self { years, manufacturers }
        }
    }

    /// Orders years numerically descending, placing non-numeric ones last.
    ///
    /// Years are compared as is: a padded value is not numeric.
    fn by_year_desc(a: &str, b: &str) -> Ordering {
        match (a.parse::<i64>(), b.parse::<i64>()) {
            (Ok(x), Ok(y)) => y.cmp(&x).then_with(|| a.cmp(b)),
            (Ok(_), Err(_)) => Ordering::Less,
            (Err(_), Ok(_)) => Ordering::Greater,
            (Err(_), Err(_)) => a.cmp(b),
        }
    }
}
