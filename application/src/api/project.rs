//! [`Project`]-related definitions.

use derive_more::{From, Into};
use juniper::{graphql_object, GraphQLEnum, GraphQLObject};
use service::read;

use crate::{api, api::scalar, Context};

/// Workshop project.
#[derive(Clone, Debug, From, Into)]
pub struct Project(read::Project);

impl Project {
    /// Base path of the detail pages of [`Project`]s.
    pub const BASE_PATH: &'static str = "/projects";
}

/// Workshop project.
#[graphql_object(context = Context)]
impl Project {
    /// Unique identifier of this `Project`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Project.id",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn id(&self) -> scalar::Id {
        self.0.id.clone().into()
    }

    /// Title of this `Project`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Project.title",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn title(&self) -> &str {
        &self.0.title
    }

    /// Category of this `Project`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Project.category",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn category(&self) -> Category {
        self.0.category.into()
    }

    /// Year the motorcycle was built in, or empty if unknown.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Project.year",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn year(&self) -> &str {
        &self.0.year
    }

    /// Manufacturer of the motorcycle, or empty if unknown.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Project.engine",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn engine(&self) -> &str {
        &self.0.engine
    }

    /// URL of the hero image of this `Project`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Project.image",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn image(&self) -> &str {
        &self.0.image
    }

    /// URLs of the gallery images of this `Project`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Project.gallery",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn gallery(&self) -> Vec<String> {
        self.0.gallery.clone()
    }

    /// Plain-text description of this `Project`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Project.description",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn description(&self) -> &str {
        &self.0.description
    }

    /// URL of the image taken before the work started.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Project.beforeImage",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn before_image(&self) -> Option<&str> {
        self.0.before_image.as_deref()
    }

    /// URL of the image taken after the work was done.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Project.afterImage",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn after_image(&self) -> Option<&str> {
        self.0.after_image.as_deref()
    }

    /// Location of the client, or empty if unknown.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Project.clientLocation",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn client_location(&self) -> &str {
        &self.0.client_location
    }

    /// URL path segment of this `Project`, if any.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Project.slug",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn slug(&self) -> Option<scalar::Slug> {
        self.0.slug.clone().map(Into::into)
    }

    /// Path of the detail page of this `Project`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Project.link",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn link(&self) -> String {
        read::detail_link(&self.0, Self::BASE_PATH)
    }
}

/// Category of a `Project`.
#[derive(Clone, Copy, Debug, GraphQLEnum)]
#[graphql(name = "ProjectCategory")]
pub enum Category {
    /// Motorcycle restored to its original state.
    Restoration,

    /// Custom motorcycle build.
    Modification,
}

impl From<read::project::Category> for Category {
    fn from(category: read::project::Category) -> Self {
        use read::project::Category as C;
        match category {
            C::Restoration => Self::Restoration,
            C::Modification => Self::Modification,
        }
    }
}

/// Values available for filtering `Project`s.
#[derive(Clone, Debug, GraphQLObject)]
#[graphql(name = "ProjectFacets")]
pub struct Facets {
    /// Distinct years, newest first.
    pub years: Vec<String>,

    /// Distinct manufacturer names, alphabetically.
    pub manufacturers: Vec<String>,
}

impl From<read::project::list::Facets> for Facets {
    fn from(facets: read::project::list::Facets) -> Self {
        Self {
            years: facets.years,
            manufacturers: facets.manufacturers,
        }
    }
}
