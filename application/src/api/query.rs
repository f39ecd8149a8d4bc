//! GraphQL [`Query`]s definitions.

use juniper::{graphql_object, GraphQLObject};
use service::{query, read, Query as _};

use crate::{api, define_error, AsError, Context, Error};

/// Root of all GraphQL queries.
#[derive(Clone, Copy, Debug)]
pub struct Query;

impl Query {
    /// Name of the [`tracing::Span`] for the queries.
    pub(crate) const SPAN_NAME: &'static str = "GraphQL query";
}

#[graphql_object(context = Context)]
impl Query {
    /// Fetches published `Project`s, newest first.
    ///
    /// Omitted or empty arguments, as well as `All` category and `all`
    /// year/manufacturer, match any `Project`.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `INVALID_FILTER` - the category is not recognized.
    #[tracing::instrument(
        skip_all,
        fields(
            category = ?category,
            gql.name = "projects",
            manufacturer = ?manufacturer,
            otel.name = Self::SPAN_NAME,
            year = ?year,
        ),
    )]
    pub async fn projects(
        category: Option<String>,
        year: Option<String>,
        manufacturer: Option<String>,
        ctx: &Context,
    ) -> Result<Vec<api::Project>, Error> {
        let filter = read::project::list::Filter::parse(
            category.as_deref().unwrap_or_default(),
            year.as_deref().unwrap_or_default(),
            manufacturer.as_deref().unwrap_or_default(),
        )
        .map_err(|_| api::FilterError::Invalid.into())
        .map_err(ctx.error())?;

        ctx.service()
            .execute(query::projects::List { filter })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|ps| ps.into_iter().map(Into::into).collect())
    }

    /// Returns the years and manufacturers of the published `Project`s.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "projectFacets",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn project_facets(
        ctx: &Context,
    ) -> Result<api::project::Facets, Error> {
        ctx.service()
            .execute(query::projects::Facets)
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Returns the published `Project` with the specified slug or ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `PROJECT_NOT_EXISTS` - the `Project` does not exist.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "project",
            otel.name = Self::SPAN_NAME,
            slug = %slug,
        ),
    )]
    pub async fn project(
        slug: String,
        ctx: &Context,
    ) -> Result<api::Project, Error> {
        ctx.service()
            .execute(query::project::BySlug(slug))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?
            .ok_or_else(|| ProjectError::NotExists.into())
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Fetches the `SaleItem`s, motorcycles first.
    ///
    /// Omitted or empty arguments, as well as `All` category and status,
    /// match any `SaleItem`.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `INVALID_FILTER` - the category or the status is not recognized.
    #[tracing::instrument(
        skip_all,
        fields(
            category = ?category,
            gql.name = "saleItems",
            otel.name = Self::SPAN_NAME,
            search_term = ?search_term,
            status = ?status,
        ),
    )]
    pub async fn sale_items(
        search_term: Option<String>,
        category: Option<String>,
        status: Option<String>,
        ctx: &Context,
    ) -> Result<Vec<api::SaleItem>, Error> {
        let filter = read::sale_item::list::Filter::parse(
            search_term.unwrap_or_default(),
            category.as_deref().unwrap_or_default(),
            status.as_deref().unwrap_or_default(),
        )
        .map_err(|_| api::FilterError::Invalid.into())
        .map_err(ctx.error())?;

        ctx.service()
            .execute(query::sale_items::List { filter })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|is| is.into_iter().map(Into::into).collect())
    }

    /// Returns the `SaleItem` of the specified kind with the specified slug
    /// or ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `SALE_ITEM_NOT_EXISTS` - the `SaleItem` does not exist.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "saleItem",
            kind = ?kind,
            otel.name = Self::SPAN_NAME,
            slug = %slug,
        ),
    )]
    pub async fn sale_item(
        kind: api::sale_item::Kind,
        slug: String,
        ctx: &Context,
    ) -> Result<api::SaleItem, Error> {
        ctx.service()
            .execute(query::sale_item::BySlug {
                kind: kind.into(),
                slug,
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?
            .ok_or_else(|| SaleItemError::NotExists.into())
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Searches `Project`s and `SaleItem`s by their titles.
    ///
    /// Too short terms find nothing.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "search",
            otel.name = Self::SPAN_NAME,
            term = %term,
        ),
    )]
    pub async fn search(
        term: String,
        ctx: &Context,
    ) -> Result<SearchResults, Error> {
        ctx.service()
            .execute(query::Search { term })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }
}

/// Hits of a search.
#[derive(Clone, Debug, GraphQLObject)]
#[graphql(context = Context)]
pub struct SearchResults {
    /// Found `Project`s, best matches first.
    pub projects: Vec<api::Project>,

    /// Found `SaleItem`s, best matches first.
    pub sale_items: Vec<api::SaleItem>,
}

impl From<query::search::Results> for SearchResults {
    fn from(results: query::search::Results) -> Self {
        Self {
            projects: results.projects.into_iter().map(Into::into).collect(),
            sale_items: results
                .sale_items
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }
}

define_error! {
    enum ProjectError {
        #[code = "PROJECT_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "`Project` with the specified slug does not exist"]
        NotExists,
    }
}

define_error! {
    enum SaleItemError {
        #[code = "SALE_ITEM_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "`SaleItem` with the specified slug does not exist"]
        NotExists,
    }
}
