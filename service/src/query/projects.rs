//! [`Query`] collection related to the multiple [`Project`]s.

use tracerr::Traced;

use crate::{
    domain::moto::{self, CustomMoto, Flavor as _, RestoredMoto},
    infra::{database, Find, Sort},
    normalize,
    read::project::{self, Category, Project},
    Service,
};

use super::{Query, Records};

/// [`Query`] listing published [`Project`]s matching a
/// [`project::list::Filter`].
///
/// Restorations go first, newest first within each [`Category`].
#[derive(Clone, Debug, Default)]
pub struct List {
    /// [`project::list::Filter`] to apply.
    pub filter: project::list::Filter,
}

impl<Db> Query<List> for Service<Db>
where
    Self: Query<
            Records<RestoredMoto>,
            Ok = Vec<RestoredMoto>,
            Err = Traced<database::Error>,
        > + Query<
            Records<CustomMoto>,
            Ok = Vec<CustomMoto>,
            Err = Traced<database::Error>,
        >,
{
    type Ok = Vec<Project>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        List { filter }: List,
    ) -> Result<Self::Ok, Self::Err> {
        let config = &self.config().normalize;
        let find = || {
            Find::published()
                .depth(1)
                .sort(Sort::descending("createdAt"))
        };

        let mut projects = vec![];
        if filter.category.matches(&Category::from(moto::Restored::KIND)) {
            let restored = self
                .execute(Records::<RestoredMoto>::by(find()))
                .await
                .map_err(tracerr::wrap!())?;
            projects.extend(
                restored
                    .iter()
                    .map(|r| normalize::restored_to_project(r, config)),
            );
        }
        if filter.category.matches(&Category::from(moto::Custom::KIND)) {
            let custom = self
                .execute(Records::<CustomMoto>::by(find()))
                .await
                .map_err(tracerr::wrap!())?;
            projects.extend(
                custom.iter().map(|r| normalize::custom_to_project(r, config)),
            );
        }

        Ok(filter.apply(projects))
    }
}

/// [`Query`] extracting [`project::list::Facets`] of all the published
/// [`Project`]s.
#[derive(Clone, Copy, Debug, Default)]
pub struct Facets;

impl<Db> Query<Facets> for Service<Db>
where
    Self: Query<List, Ok = Vec<Project>, Err = Traced<database::Error>>,
{
    type Ok = project::list::Facets;
    type Err = Traced<database::Error>;

    async fn execute(&self, _: Facets) -> Result<Self::Ok, Self::Err> {
        let projects = self
            .execute(List::default())
            .await
            .map_err(tracerr::wrap!())?;
        Ok(project::list::Facets::extract(&projects))
    }
}

#[cfg(test)]
mod spec {
    use crate::{
        query::{fixture, Query as _},
        read::project::{list::Filter, Category},
    };

    use super::{Facets, List};

    #[tokio::test]
    async fn lists_restorations_first_newest_first() {
        let projects =
            fixture::service().execute(List::default()).await.unwrap();

        let ids = projects.iter().map(|p| p.id.to_string()).collect::<Vec<_>>();
        assert_eq!(ids, ["r2", "r1", "c1"]);
    }

    #[tokio::test]
    async fn normalizes_populated_records() {
        let projects =
            fixture::service().execute(List::default()).await.unwrap();

        let bonneville = &projects[1];
        assert_eq!(bonneville.category, Category::Restoration);
        assert_eq!(bonneville.engine, "Triumph");
        assert_eq!(bonneville.image, "/media/bonneville.jpg");
        assert_eq!(
            bonneville.before_image.as_deref(),
            Some("/media/bonneville-barn.jpg"),
        );
        assert_eq!(projects[0].image, "/placeholder.jpg");
        assert_eq!(projects[2].category, Category::Modification);
    }

    #[tokio::test]
    async fn applies_filter() {
        let svc = fixture::service();

        let custom = svc
            .execute(List {
                filter: Filter::parse("Modification", "all", "all").unwrap(),
            })
            .await
            .unwrap();
        let triumphs = svc
            .execute(List {
                filter: Filter::parse("All", "all", "Triumph").unwrap(),
            })
            .await
            .unwrap();

        assert_eq!(custom.len(), 1);
        assert_eq!(custom[0].id.to_string(), "c1");
        assert_eq!(triumphs.len(), 2);
    }

    #[tokio::test]
    async fn extracts_facets_of_published() {
        let facets = fixture::service().execute(Facets).await.unwrap();

        assert_eq!(facets.years, ["2023", "1972", "1965"]);
        assert_eq!(facets.manufacturers, ["Honda", "Triumph"]);
    }
}
