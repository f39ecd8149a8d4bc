//! [`Query`] definition.

pub mod project;
pub mod projects;
pub mod sale_item;
pub mod sale_items;
pub mod search;

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    infra::{database, Database, Find},
    Service,
};
#[cfg(doc)]
use crate::domain::Record;

pub use self::search::Search;

/// [`Query`] of the [`Service`].
pub use common::Handler as Query;

/// [`Query`] [`Select`]ing a `T`ype from a [`Database`].
#[derive(Clone, Copy, Debug)]
#[expect(clippy::module_name_repetitions, reason = "more readable")]
pub struct DatabaseQuery<T>(T);

impl<W, B> DatabaseQuery<By<W, B>> {
    /// Creates a new [`DatabaseQuery`] selecting a `W` by the provided `B`.
    #[must_use]
    pub fn by(by: B) -> Self {
        Self(By::new(by))
    }
}

impl<Db, W, B> Query<DatabaseQuery<By<W, B>>> for Service<Db>
where
    Db: Database<Select<By<W, B>>, Ok = W, Err = Traced<database::Error>>,
{
    type Ok = W;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        DatabaseQuery(by): DatabaseQuery<By<W, B>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.database()
            .execute(Select(by))
            .await
            .map_err(tracerr::wrap!())
    }
}

/// Queries [`Record`]s of type `T` matching a [`Find`].
pub type Records<T> = DatabaseQuery<By<Vec<T>, Find>>;

#[cfg(test)]
pub(crate) mod fixture {
    //! Content shared by [`Query`] tests.

    use serde_json::json;

    use crate::{infra::Memory, Config, Service};

    /// Creates a new [`Service`] over a small workshop content export.
    pub(crate) fn service() -> Service<Memory> {
        let memory = Memory::from_json(json!({
            "restored-motos": [
                {
                    "id": "r1",
                    "title": "1965 Triumph Bonneville",
                    "manufacturer": 1,
                    "year": 1965,
                    "heroImage": 10,
                    "gallery": [{"image": 11}],
                    "_status": "published",
                    "slug": "bonneville-65",
                    "createdAt": "2024-01-10T00:00:00Z",
                },
                {
                    "id": "r2",
                    "title": "1972 Honda CB350",
                    "manufacturer": 2,
                    "year": 1972,
                    "_status": "published",
                    "createdAt": "2024-03-10T00:00:00Z",
                },
                {
                    "id": "r3",
                    "title": "Unfinished BSA",
                    "_status": "draft",
                    "slug": "bsa",
                    "createdAt": "2024-04-10T00:00:00Z",
                },
            ],
            "custom-motorcycles": [
                {
                    "id": "c1",
                    "title": "Triumph Scrambler",
                    "manufacturer": 1,
                    "year": 2023,
                    "_status": "published",
                    "slug": "scrambler",
                    "createdAt": "2024-02-10T00:00:00Z",
                },
            ],
            "sales": [
                {
                    "id": "s1",
                    "title": "Honda CB750 Four",
                    "manufacturer": 2,
                    "price": "₹ 4,50,000",
                    "year": 1976,
                    "status": "reserved",
                    "slug": "cb750",
                    "createdAt": "2024-01-01T00:00:00Z",
                },
                {
                    "id": "s2",
                    "title": "Royal Enfield Bullet",
                    "price": "₹ 1,80,000",
                    "status": "sold",
                    "createdAt": "2024-02-01T00:00:00Z",
                },
            ],
            "spares": [
                {
                    "id": "p1",
                    "title": "Honda CB750 exhaust",
                    "price": "₹ 9,000",
                    "partCategory": "Exhaust",
                    "condition": "Used",
                    "status": "available",
                    "slug": "cb750-exhaust",
                    "createdAt": "2024-01-05T00:00:00Z",
                },
            ],
            "manufacturers": [
                {"id": 1, "name": "Triumph"},
                {"id": 2, "name": "Honda"},
            ],
            "media": [
                {"id": 10, "url": "/media/bonneville.jpg"},
                {"id": 11, "url": "/media/bonneville-barn.jpg"},
            ],
        }))
        .unwrap();

        Service::new(Config::default(), memory).0
    }
}
