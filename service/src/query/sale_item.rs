//! [`Query`] collection related to a single [`SaleItem`].

use tracerr::Traced;

use crate::{
    domain::{Sale, Spare},
    infra::{database, Find, Where},
    normalize,
    read::sale_item::{Kind, SaleItem},
    Service,
};

use super::{Query, Records};

/// [`Query`] of a [`SaleItem`] of the provided [`Kind`] by its slug.
///
/// Falls back to looking the [`SaleItem`] up by its ID.
#[derive(Clone, Debug)]
pub struct BySlug {
    /// [`Kind`] of the [`SaleItem`].
    pub kind: Kind,

    /// Slug (or ID) of the [`SaleItem`].
    pub slug: String,
}

impl<Db> Query<BySlug> for Service<Db>
where
    Self: Query<Records<Sale>, Ok = Vec<Sale>, Err = Traced<database::Error>>
        + Query<Records<Spare>, Ok = Vec<Spare>, Err = Traced<database::Error>>,
{
    type Ok = Option<SaleItem>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        BySlug { kind, slug }: BySlug,
    ) -> Result<Self::Ok, Self::Err> {
        let config = &self.config().normalize;

        for field in ["slug", "id"] {
            let find = Find::new(Where::equals(field, slug.as_str()))
                .depth(1)
                .limit(1);

            let item = match kind {
                Kind::Bike => self
                    .execute(Records::<Sale>::by(find))
                    .await
                    .map_err(tracerr::wrap!())?
                    .first()
                    .map(|s| normalize::sale_to_sale_item(s, config)),
                Kind::Spare => self
                    .execute(Records::<Spare>::by(find))
                    .await
                    .map_err(tracerr::wrap!())?
                    .first()
                    .map(|s| normalize::spare_to_sale_item(s, config)),
            };
            if item.is_some() {
                return Ok(item);
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod spec {
    use crate::{
        query::{fixture, Query as _},
        read::sale_item::Kind,
    };

    use super::BySlug;

    #[tokio::test]
    async fn finds_by_slug_within_kind() {
        let svc = fixture::service();

        let bike = svc
            .execute(BySlug {
                kind: Kind::Bike,
                slug: "cb750".into(),
            })
            .await
            .unwrap();
        let not_a_spare = svc
            .execute(BySlug {
                kind: Kind::Spare,
                slug: "cb750".into(),
            })
            .await
            .unwrap();

        assert_eq!(bike.unwrap().id.to_string(), "s1");
        assert!(not_a_spare.is_none());
    }

    #[tokio::test]
    async fn falls_back_to_id() {
        let item = fixture::service()
            .execute(BySlug {
                kind: Kind::Bike,
                slug: "s2".into(),
            })
            .await
            .unwrap()
            .unwrap();

        assert_eq!(item.title, "Royal Enfield Bullet");
        assert!(item.slug.is_none());
    }
}
