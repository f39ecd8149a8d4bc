//! Service contains the business logic of the application.
//!
//! List of available Cargo features:
#![doc = document_features::document_features!()]
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod domain;
pub mod infra;
pub mod normalize;
pub mod query;
pub mod read;
pub mod task;

use std::error::Error;

use common::operations::{By, Start};

#[cfg(doc)]
use infra::Database;

pub use self::{query::Query, task::Task};

/// [`Service`] configuration.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// [`normalize::Config`] of view models.
    pub normalize: normalize::Config,

    /// [`query::Search`] configuration.
    pub search: query::search::Config,

    /// [`task::ReloadContent`] configuration.
    pub reload_content: task::reload_content::Config,
}

/// Domain service.
#[derive(Clone, Debug)]
pub struct Service<Db> {
    /// Configuration of this [`Service`].
    config: Config,

    /// [`Database`] of this [`Service`].
    database: Db,
}

impl<Db> Service<Db> {
    /// Creates a new [`Service`] with the provided parameters.
    pub fn new(config: Config, database: Db) -> (Self, task::Background)
    where
        Self: Task<
                Start<
                    By<task::ReloadContent<Self>, task::reload_content::Config>,
                >,
                Ok = (),
                Err: Error,
            > + Clone
            + 'static,
    {
        let this = Service { config, database };

        let mut bg = task::Background::default();
        let svc = this.clone();
        bg.spawn("reload_content", async move {
            svc.execute(Start(By::new(svc.config().reload_content)))
                .await
        });

        (this, bg)
    }

    /// Returns [`Config`] of this [`Service`].
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns [`Database`] of this [`Service`].
    #[must_use]
    pub fn database(&self) -> &Db {
        &self.database
    }
}
