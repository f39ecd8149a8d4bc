//! GraphQL API definitions.

pub mod project;
mod query;
pub mod sale_item;
pub mod scalar;

use juniper::{EmptyMutation, EmptySubscription};

use crate::{define_error, Context};

pub use self::{project::Project, query::Query, sale_item::SaleItem};

/// GraphQL schema.
pub type Schema = juniper::RootNode<
    'static,
    Query,
    EmptyMutation<Context>,
    EmptySubscription<Context>,
>;

define_error! {
    enum FilterError {
        #[code = "INVALID_FILTER"]
        #[status = BAD_REQUEST]
        #[message = "Filter argument is not recognized"]
        Invalid,
    }
}
