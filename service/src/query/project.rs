//! [`Query`] collection related to a single [`Project`].

use tracerr::Traced;

use crate::{
    domain::moto::{CustomMoto, RestoredMoto},
    infra::{database, Find, Where},
    normalize,
    read::project::Project,
    Service,
};

use super::{Query, Records};

/// [`Query`] of a published [`Project`] by its slug.
///
/// Falls back to looking the [`Project`] up by its ID, so links built out of
/// an ID keep working.
#[derive(Clone, Debug)]
pub struct BySlug(pub String);

impl<Db> Query<BySlug> for Service<Db>
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
    type Ok = Option<Project>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        BySlug(slug): BySlug,
    ) -> Result<Self::Ok, Self::Err> {
        let config = &self.config().normalize;

        for field in ["slug", "id"] {
            let find = Find::published()
                .and(Where::equals(field, slug.as_str()))
                .depth(1)
                .limit(1);

            let restored = self
                .execute(Records::<RestoredMoto>::by(find.clone()))
                .await
                .map_err(tracerr::wrap!())?;
            if let Some(raw) = restored.first() {
                return Ok(Some(normalize::restored_to_project(raw, config)));
            }

            let custom = self
                .execute(Records::<CustomMoto>::by(find))
                .await
                .map_err(tracerr::wrap!())?;
            if let Some(raw) = custom.first() {
                return Ok(Some(normalize::custom_to_project(raw, config)));
            }
        }
        Ok(None)
    }
}
