//! [`SaleItem`]-related definitions.

use common::DateTime;
use derive_more::{From, Into};
use juniper::{graphql_object, GraphQLEnum, GraphQLObject, GraphQLUnion};
use service::read;

use crate::{api, api::scalar, Context};

/// Item listed in the workshop store.
#[derive(Clone, Debug, From, Into)]
pub struct SaleItem(read::SaleItem);

impl SaleItem {
    /// Returns the base path of the detail pages of the provided [`Kind`].
    #[must_use]
    pub const fn base_path(kind: Kind) -> &'static str {
        match kind {
            Kind::Bike => "/sales",
            Kind::Spare => "/spares",
        }
    }
}

/// Item listed in the workshop store.
#[graphql_object(context = Context)]
impl SaleItem {
    /// Unique identifier of this `SaleItem`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "SaleItem.id",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn id(&self) -> scalar::Id {
        self.0.id.clone().into()
    }

    /// Kind of this `SaleItem`.
    #[graphql(name = "type")]
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "SaleItem.type",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn kind(&self) -> Kind {
        self.0.kind().into()
    }

    /// Title of this `SaleItem`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "SaleItem.title",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn title(&self) -> &str {
        &self.0.title
    }

    /// Availability status of this `SaleItem`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "SaleItem.status",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn status(&self) -> Status {
        self.0.status.into()
    }

    /// Price of this `SaleItem`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "SaleItem.price",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn price(&self) -> scalar::Price {
        self.0.price().clone().into()
    }

    /// URL of the main image of this `SaleItem`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "SaleItem.mainImage",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn main_image(&self) -> &str {
        &self.0.main_image
    }

    /// URLs of the gallery images of this `SaleItem`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "SaleItem.gallery",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn gallery(&self) -> Vec<String> {
        self.0.gallery.clone()
    }

    /// Plain-text summary of the description of this `SaleItem`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "SaleItem.descriptionSummary",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn description_summary(&self) -> &str {
        &self.0.description_summary
    }

    /// URL path segment of this `SaleItem`, if any.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "SaleItem.slug",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn slug(&self) -> Option<scalar::Slug> {
        self.0.slug.clone().map(Into::into)
    }

    /// Kind-specific details of this `SaleItem`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "SaleItem.details",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn details(&self) -> Details {
        self.0.details.clone().into()
    }

    /// Path of the detail page of this `SaleItem`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "SaleItem.link",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn link(&self) -> String {
        read::detail_link(&self.0, Self::base_path(self.0.kind().into()))
    }
}

/// Kind-specific details of a `SaleItem`.
#[derive(Clone, Debug, GraphQLUnion)]
#[graphql(name = "SaleItemDetails", context = Context)]
pub enum Details {
    /// Details of a motorcycle.
    Bike(BikeDetails),

    /// Details of a spare part.
    Spare(SpareDetails),
}

impl From<read::sale_item::Details> for Details {
    fn from(details: read::sale_item::Details) -> Self {
        use read::sale_item::Details as D;
        match details {
            D::Bike(b) => Self::Bike(b.into()),
            D::Spare(s) => Self::Spare(s.into()),
        }
    }
}

/// Details of a motorcycle listed for sale.
#[derive(Clone, Debug, GraphQLObject)]
#[graphql(context = Context)]
pub struct BikeDetails {
    /// Year the motorcycle was built in, or empty if unknown.
    pub year: String,

    /// Manufacturer of the motorcycle, or empty if unknown.
    pub engine: String,

    /// Mileage of the motorcycle, or empty if unknown.
    pub mileage: String,

    /// Number of previous owners, if known.
    pub number_of_owners: Option<i32>,

    /// `DateTime` the motorcycle was first registered at, if known.
    pub registration_date: Option<DateTime>,

    /// Listed features of the motorcycle.
    pub features: Vec<String>,
}

impl From<read::sale_item::Bike> for BikeDetails {
    fn from(bike: read::sale_item::Bike) -> Self {
        Self {
            year: bike.year,
            engine: bike.engine,
            mileage: bike.mileage,
            number_of_owners: bike
                .number_of_owners
                .and_then(|n| i32::try_from(n).ok()),
            registration_date: bike.registration_date,
            features: bike.features,
        }
    }
}

/// Details of a spare part listed for sale.
#[derive(Clone, Debug, GraphQLObject)]
#[graphql(context = Context)]
pub struct SpareDetails {
    /// Category of the part, or empty if unknown.
    pub part_category: String,

    /// Condition of the part, or empty if unknown.
    pub condition: String,

    /// Free-text compatibility notes, if any.
    pub compatibility: Option<String>,
}

impl From<read::sale_item::Spare> for SpareDetails {
    fn from(spare: read::sale_item::Spare) -> Self {
        Self {
            part_category: spare.part_category,
            condition: spare.condition,
            compatibility: spare.compatibility,
        }
    }
}

/// Kind of a `SaleItem`.
#[derive(Clone, Copy, Debug, Eq, GraphQLEnum, PartialEq)]
#[graphql(name = "SaleItemKind")]
pub enum Kind {
    /// A motorcycle.
    Bike,

    /// A spare part.
    Spare,
}

impl From<read::sale_item::Kind> for Kind {
    fn from(kind: read::sale_item::Kind) -> Self {
        use read::sale_item::Kind as K;
        match kind {
            K::Bike => Self::Bike,
            K::Spare => Self::Spare,
        }
    }
}

impl From<Kind> for read::sale_item::Kind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Bike => Self::Bike,
            Kind::Spare => Self::Spare,
        }
    }
}

/// Availability status of a `SaleItem`.
#[derive(Clone, Copy, Debug, GraphQLEnum)]
#[graphql(name = "SaleItemStatus")]
pub enum Status {
    /// Can be bought.
    Available,

    /// Held for a buyer.
    Reserved,

    /// Already sold.
    Sold,
}

impl From<read::sale_item::Status> for Status {
    fn from(status: read::sale_item::Status) -> Self {
        use read::sale_item::Status as S;
        match status {
            S::Available => Self::Available,
            S::Reserved => Self::Reserved,
            S::Sold => Self::Sold,
        }
    }
}

#[cfg(test)]
mod spec {
    use service::{domain, read};

    use super::{Kind, SaleItem};

    fn spare(slug: Option<&str>) -> read::SaleItem {
        read::SaleItem {
            id: domain::Id::new("p1"),
            title: "Exhaust".into(),
            status: read::sale_item::Status::Available,
            main_image: "/placeholder.jpg".into(),
            gallery: vec![],
            description_summary: String::new(),
            slug: slug.and_then(domain::Slug::new),
            details: read::sale_item::Details::Spare(read::sale_item::Spare {
                price: domain::listing::Price::new("₹ 12,000"),
                part_category: "Exhaust".into(),
                condition: "Used".into(),
                compatibility: None,
            }),
        }
    }

    #[test]
    fn links_by_kind() {
        assert_eq!(SaleItem::base_path(Kind::Bike), "/sales");
        assert_eq!(SaleItem::base_path(Kind::Spare), "/spares");
    }

    #[test]
    fn links_spares_by_slug_or_id() {
        let with_slug = SaleItem::from(spare(Some("cb750-exhaust")));
        let without = SaleItem::from(spare(None));

        assert_eq!(with_slug.link(), "/spares/cb750-exhaust");
        assert_eq!(without.link(), "/spares/p1");
    }
}
