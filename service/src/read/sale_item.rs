//! [`SaleItem`]-related read definitions.

use common::{define_kind, DateTime};

use crate::domain::{listing::Price, Id, Slug};

use super::Linkable;

/// Item listed in the workshop store.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaleItem {
    /// ID of the raw record this [`SaleItem`] is made of.
    pub id: Id,

    /// Title of this [`SaleItem`].
    pub title: String,

    /// [`Status`] of this [`SaleItem`].
    pub status: Status,

    /// URL of the main image of this [`SaleItem`].
    pub main_image: String,

    /// URLs of the gallery images, in their original order.
    pub gallery: Vec<String>,

    /// Plain-text summary of the description.
    pub description_summary: String,

    /// [`Slug`] of this [`SaleItem`].
    pub slug: Option<Slug>,

    /// [`Kind`]-specific [`Details`] of this [`SaleItem`].
    pub details: Details,
}

impl SaleItem {
    /// Returns the [`Kind`] of this [`SaleItem`].
    #[must_use]
    pub fn kind(&self) -> Kind {
        match &self.details {
            Details::Bike(_) => Kind::Bike,
            Details::Spare(_) => Kind::Spare,
        }
    }

    /// Returns the [`Price`] of this [`SaleItem`].
    #[must_use]
    pub fn price(&self) -> &Price {
        match &self.details {
            Details::Bike(b) => &b.price,
            Details::Spare(s) => &s.price,
        }
    }
}

impl Linkable for SaleItem {
    fn id(&self) -> &Id {
        &self.id
    }

    fn slug(&self) -> Option<&Slug> {
        self.slug.as_ref()
    }
}

/// [`Kind`]-specific details of a [`SaleItem`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Details {
    /// [`Bike`] details.
    Bike(Bike),

    /// [`Spare`] details.
    Spare(Spare),
}

/// Details of a motorcycle listed for sale.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Bike {
    /// [`Price`] of the motorcycle.
    pub price: Price,

    /// Year the motorcycle was built in, or empty if unknown.
    pub year: String,

    /// Display name of the manufacturer, or empty if unknown.
    pub engine: String,

    /// Mileage of the motorcycle, or empty if unknown.
    pub mileage: String,

    /// Number of previous owners, if known.
    pub number_of_owners: Option<u32>,

    /// [`DateTime`] the motorcycle was first registered at, if known.
    pub registration_date: Option<DateTime>,

    /// Listed features of the motorcycle.
    pub features: Vec<String>,
}

/// Details of a spare part listed for sale.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Spare {
    /// [`Price`] of the part.
    pub price: Price,

    /// Category of the part, or empty if unknown.
    pub part_category: String,

    /// Condition of the part, or empty if unknown.
    pub condition: String,

    /// Free-text compatibility notes, if any.
    pub compatibility: Option<String>,
}

define_kind! {
    #[doc = "Kind of a [`SaleItem`]."]
    enum Kind {
        #[doc = "Motorcycle."]
        Bike,

        #[doc = "Spare part."]
        Spare,
    }
}

define_kind! {
    #[doc = "Availability status of a [`SaleItem`]."]
    enum Status {
        #[doc = "Can be bought."]
        Available,

        #[doc = "Held for a buyer."]
        Reserved,

        #[doc = "Already sold."]
        Sold,
    }
}

impl Status {
    /// Raw values of [`Status`]es as the content store keeps them.
    const RAW: [(&'static str, Self); 3] = [
        ("available", Self::Available),
        ("reserved", Self::Reserved),
        ("sold", Self::Sold),
    ];

    /// Maps the provided `raw` value to a [`Status`].
    ///
    /// Unrecognized values map to [`Status::Available`].
    #[must_use]
    pub fn from_raw(raw: &str) -> Self {
        Self::RAW
            .iter()
            .find_map(|(r, s)| (*r == raw).then_some(*s))
            .unwrap_or(Self::Available)
    }
}

pub mod list {
    //! [`SaleItem`] list definitions.

    use common::define_kind;

    use crate::read::Criterion;

    use super::{Kind, SaleItem, Status};

    define_kind! {
        #[doc = "Category of a [`SaleItem`] list."]
        enum Category {
            #[doc = "Every [`SaleItem`]."]
            All,

            #[doc = "Motorcycles only."]
            Motorcycles,

            #[doc = "Spare parts only."]
            Spares,
        }
    }

    impl Default for Category {
        fn default() -> Self {
            Self::All
        }
    }

    impl Category {
        /// Checks whether [`SaleItem`]s of the provided [`Kind`] belong to
        /// this [`Category`].
        #[must_use]
        pub fn admits(self, kind: Kind) -> bool {
            match self {
                Self::All => true,
                Self::Motorcycles => kind == Kind::Bike,
                Self::Spares => kind == Kind::Spare,
            }
        }
    }

    /// Filter of a [`SaleItem`] list.
    ///
    /// A [`SaleItem`] matches when every part of the [`Filter`] matches.
    #[derive(Clone, Debug, Default, Eq, PartialEq)]
    pub struct Filter {
        /// Text to search for in [`SaleItem::title`], case-insensitively.
        ///
        /// Empty text matches any title.
        pub search_term: String,

        /// [`Category`] to list.
        pub category: Category,

        /// [`Criterion`] on [`SaleItem::status`].
        pub status: Criterion<Status>,
    }

    impl Filter {
        /// Input meaning any [`Status`].
        pub const ANY_STATUS: &'static str = "All";

        /// Parses a [`Filter`] out of the raw inputs.
        ///
        /// Empty `category` means [`Category::All`].
        ///
        /// # Errors
        ///
        /// If the `category` or the `status` cannot be recognized.
        pub fn parse(
            search_term: impl Into<String>,
            category: &str,
            status: &str,
        ) -> Result<Self, strum::ParseError> {
            let category = if category.is_empty() {
                Category::All
            } else {
                category.parse()?
            };
            Ok(Self {
                search_term: search_term.into(),
                category,
                status: Criterion::parse(status, Self::ANY_STATUS)?,
            })
        }

        /// Checks whether the provided [`SaleItem`] matches this [`Filter`].
        #[must_use]
        pub fn matches(&self, item: &SaleItem) -> bool {
            self.matches_title(&item.title)
                && self.status.matches(&item.status)
                && self.category.admits(item.kind())
        }

        /// Keeps only the [`SaleItem`]s matching this [`Filter`], preserving
        /// their order.
        #[must_use]
        pub fn apply(
            &self,
            items: impl IntoIterator<Item = SaleItem>,
        ) -> Vec<SaleItem> {
            items.into_iter().filter(|i| self.matches(i)).collect()
        }

        /// Checks whether the provided `title` contains the search term.
        fn matches_title(&self, title: &str) -> bool {
            self.search_term.is_empty()
                || title
                    .to_lowercase()
                    .contains(&self.search_term.to_lowercase())
        }
    }
}

#[cfg(test)]
mod spec {
    use super::{
        list::{Category, Filter},
        Bike, Details, Kind, SaleItem, Spare, Status,
    };
    use crate::{
        domain::{listing::Price, Id},
        read::Criterion,
    };

    fn bike(id: &str, title: &str, status: Status) -> SaleItem {
        SaleItem {
            id: Id::new(id),
            title: title.into(),
            status,
            main_image: "/placeholder.jpg".into(),
            gallery: vec![],
            description_summary: String::new(),
            slug: None,
            details: Details::Bike(Bike {
                price: Price::new("₹ 4,50,000"),
                year: "1978".into(),
                engine: String::new(),
                mileage: String::new(),
                number_of_owners: None,
                registration_date: None,
                features: vec![],
            }),
        }
    }

    fn spare(id: &str, title: &str, status: Status) -> SaleItem {
        SaleItem {
            id: Id::new(id),
            title: title.into(),
            status,
            main_image: "/placeholder.jpg".into(),
            gallery: vec![],
            description_summary: String::new(),
            slug: None,
            details: Details::Spare(Spare {
                price: Price::new("₹ 2,500"),
                part_category: "Brakes".into(),
                condition: "Used".into(),
                compatibility: None,
            }),
        }
    }

    fn store() -> Vec<SaleItem> {
        vec![
            bike("1", "Honda CB750 Four", Status::Available),
            spare("2", "HONDA brake pads", Status::Sold),
            bike("3", "Triumph Bonneville", Status::Reserved),
            spare("4", "Chrome mirror (fits honda)", Status::Available),
            bike("5", "Yamaha RD350", Status::Sold),
        ]
    }

    fn ids(items: &[SaleItem]) -> Vec<String> {
        items.iter().map(|i| i.id.to_string()).collect()
    }

    #[test]
    fn maps_raw_status() {
        assert_eq!(Status::from_raw("available"), Status::Available);
        assert_eq!(Status::from_raw("reserved"), Status::Reserved);
        assert_eq!(Status::from_raw("sold"), Status::Sold);
    }

    #[test]
    fn unknown_raw_status_is_available() {
        assert_eq!(Status::from_raw("pending"), Status::Available);
        assert_eq!(Status::from_raw(""), Status::Available);
        assert_eq!(Status::from_raw("Sold"), Status::Available);
    }

    #[test]
    fn kind_follows_details() {
        assert_eq!(bike("1", "x", Status::Sold).kind(), Kind::Bike);
        assert_eq!(spare("1", "x", Status::Sold).kind(), Kind::Spare);
    }

    #[test]
    fn searches_title_case_insensitively() {
        let filter = Filter::parse("honda", "All", "All").unwrap();

        assert_eq!(ids(&filter.apply(store())), ["1", "2", "4"]);
    }

    #[test]
    fn defaults_impose_nothing() {
        let filter = Filter::parse("", "", "").unwrap();

        assert_eq!(filter, Filter::default());
        assert_eq!(filter.apply(store()), store());
    }

    #[test]
    fn filters_by_category() {
        let bikes = Filter::parse("", "Motorcycles", "All").unwrap();
        let spares = Filter::parse("", "Spares", "All").unwrap();

        assert_eq!(ids(&bikes.apply(store())), ["1", "3", "5"]);
        assert_eq!(ids(&spares.apply(store())), ["2", "4"]);
    }

    #[test]
    fn filters_by_status() {
        let filter = Filter::parse("", "All", "Sold").unwrap();

        assert_eq!(filter.status, Criterion::Exactly(Status::Sold));
        assert_eq!(ids(&filter.apply(store())), ["2", "5"]);
    }

    #[test]
    fn combines_all_parts() {
        let filter = Filter {
            search_term: "HONDA".into(),
            category: Category::Spares,
            status: Criterion::Exactly(Status::Available),
        };

        assert_eq!(ids(&filter.apply(store())), ["4"]);
    }

    #[test]
    fn rejects_unknown_inputs() {
        assert!(Filter::parse("", "Cars", "All").is_err());
        assert!(Filter::parse("", "All", "Lost").is_err());
    }

    #[test]
    fn category_and_status_are_matched_exactly() {
        assert!(Filter::parse("", "motorcycles", "sold").is_err());
        assert!(Filter::parse("", "motorcycles", "All").is_err());
        assert!(Filter::parse("", "All", "sold").is_err());
        assert!(Filter::parse("", "all", "All").is_err());
    }
}
