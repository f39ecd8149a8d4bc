//! [`Search`] definition.

use smart_default::SmartDefault;
use tracerr::Traced;

use crate::{
    domain::{
        moto::{CustomMoto, RestoredMoto},
        Sale, Spare,
    },
    infra::{database, Find, Where},
    normalize,
    read::{Project, SaleItem},
    Service,
};

use super::{Query, Records};

/// [`Search`] configuration.
#[derive(Clone, Copy, Debug, SmartDefault)]
pub struct Config {
    /// Minimum number of characters in a meaningful search term.
    #[default(2)]
    pub min_term_length: usize,

    /// Maximum number of ranked [`Project`]s and of ranked [`SaleItem`]s
    /// returned.
    #[default(10)]
    pub limit: usize,
}

/// [`Query`] searching [`Project`]s and [`SaleItem`]s by their titles.
///
/// Hits are ranked by how well their titles match the term: exact match
/// first, then prefix, then word prefix, then anything else.
#[derive(Clone, Debug)]
pub struct Search {
    /// Term to search for.
    pub term: String,
}

/// Output of the [`Search`] [`Query`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Results {
    /// Found published [`Project`]s.
    pub projects: Vec<Project>,

    /// Found [`SaleItem`]s.
    pub sale_items: Vec<SaleItem>,
}

impl<Db> Query<Search> for Service<Db>
where
    Self: Query<
            Records<RestoredMoto>,
            Ok = Vec<RestoredMoto>,
            Err = Traced<database::Error>,
        > + Query<
            Records<CustomMoto>,
            Ok = Vec<CustomMoto>,
            Err = Traced<database::Error>,
        > + Query<Records<Sale>, Ok = Vec<Sale>, Err = Traced<database::Error>>
        + Query<Records<Spare>, Ok = Vec<Spare>, Err = Traced<database::Error>>,
{
    type Ok = Results;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Search { term }: Search,
    ) -> Result<Self::Ok, Self::Err> {
        let Config {
            min_term_length,
            limit,
        } = self.config().search;
        let term = term.trim();
        if term.chars().count() < min_term_length {
            return Ok(Results::default());
        }

        let config = &self.config().normalize;
        let find = |published: bool| {
            let by_title = Where::contains("title", term);
            let filter = if published {
                Where::published().and(by_title)
            } else {
                by_title
            };
            Find::new(filter).depth(1)
        };

        let mut projects = vec![];
        let restored = self
            .execute(Records::<RestoredMoto>::by(find(true)))
            .await
            .map_err(tracerr::wrap!())?;
        projects.extend(
            restored
                .iter()
                .map(|r| normalize::restored_to_project(r, config)),
        );
        let custom = self
            .execute(Records::<CustomMoto>::by(find(true)))
            .await
            .map_err(tracerr::wrap!())?;
        projects.extend(
            custom.iter().map(|r| normalize::custom_to_project(r, config)),
        );

        let mut sale_items = vec![];
        let sales = self
            .execute(Records::<Sale>::by(find(false)))
            .await
            .map_err(tracerr::wrap!())?;
        sale_items.extend(
            sales.iter().map(|s| normalize::sale_to_sale_item(s, config)),
        );
        let spares = self
            .execute(Records::<Spare>::by(find(false)))
            .await
            .map_err(tracerr::wrap!())?;
        sale_items.extend(
            spares
                .iter()
                .map(|s| normalize::spare_to_sale_item(s, config)),
        );

        projects.sort_by_key(|p| Rank::of(&p.title, term));
        projects.truncate(limit);
        sale_items.sort_by_key(|i| Rank::of(&i.title, term));
        sale_items.truncate(limit);

        Ok(Results {
            projects,
            sale_items,
        })
    }
}

/// Relevance of a title to a search term, most relevant first.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
enum Rank {
    /// Title equals the term.
    Exact,

    /// Title starts with the term.
    Prefix,

    /// A word of the title starts with the term.
    WordPrefix,

    /// Title contains the term somewhere.
    Substring,
}

impl Rank {
    /// Ranks the provided `title` against the `term`, case-insensitively.
    fn of(title: &str, term: &str) -> Self {
        let title = title.to_lowercase();
        let term = term.to_lowercase();

        if title == term {
            Self::Exact
        } else if title.starts_with(&term) {
            Self::Prefix
        } else if title
            .split(|c: char| !c.is_alphanumeric())
            .any(|w| w.starts_with(&term))
        {
            Self::WordPrefix
        } else {
            Self::Substring
        }
    }
}
