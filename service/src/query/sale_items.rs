//! [`Query`] collection related to the multiple [`SaleItem`]s.

use tracerr::Traced;

use crate::{
    domain::{Sale, Spare},
    infra::{database, Find, Sort},
    normalize,
    read::sale_item::{self, Kind, SaleItem},
    Service,
};

use super::{Query, Records};

/// [`Query`] listing [`SaleItem`]s matching a [`sale_item::list::Filter`].
///
/// Motorcycles go first, newest first within each [`Kind`].
#[derive(Clone, Debug, Default)]
pub struct List {
    /// [`sale_item::list::Filter`] to apply.
    pub filter: sale_item::list::Filter,
}

impl<Db> Query<List> for Service<Db>
where
    Self: Query<Records<Sale>, Ok = Vec<Sale>, Err = Traced<database::Error>>
        + Query<Records<Spare>, Ok = Vec<Spare>, Err = Traced<database::Error>>,
{
    type Ok = Vec<SaleItem>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        List { filter }: List,
    ) -> Result<Self::Ok, Self::Err> {
        let config = &self.config().normalize;
        let find =
            || Find::default().depth(1).sort(Sort::descending("createdAt"));

        let mut items = vec![];
        if filter.category.admits(Kind::Bike) {
            let sales = self
                .execute(Records::<Sale>::by(find()))
                .await
                .map_err(tracerr::wrap!())?;
            items.extend(
                sales.iter().map(|s| normalize::sale_to_sale_item(s, config)),
            );
        }
        if filter.category.admits(Kind::Spare) {
            let spares = self
                .execute(Records::<Spare>::by(find()))
                .await
                .map_err(tracerr::wrap!())?;
            items.extend(
                spares
                    .iter()
                    .map(|s| normalize::spare_to_sale_item(s, config)),
            );
        }

        Ok(filter.apply(items))
    }
}

#[cfg(test)]
mod spec {
    use crate::{
        query::{fixture, Query as _},
        read::sale_item::{list::Filter, Kind, Status},
    };

    use super::List;

    #[tokio::test]
    async fn lists_bikes_then_spares() {
        let items = fixture::service().execute(List::default()).await.unwrap();

        let ids = items.iter().map(|i| i.id.to_string()).collect::<Vec<_>>();
        assert_eq!(ids, ["s2", "s1", "p1"]);
        assert_eq!(items[1].status, Status::Reserved);
        assert_eq!(items[2].kind(), Kind::Spare);
    }

    #[tokio::test]
    async fn applies_filter() {
        let svc = fixture::service();

        let hondas = svc
            .execute(List {
                filter: Filter::parse("honda", "All", "All").unwrap(),
            })
            .await
            .unwrap();
        let spares = svc
            .execute(List {
                filter: Filter::parse("", "Spares", "Available").unwrap(),
            })
            .await
            .unwrap();

        assert_eq!(hondas.len(), 2);
        assert_eq!(spares.len(), 1);
        assert_eq!(spares[0].id.to_string(), "p1");
    }
}
