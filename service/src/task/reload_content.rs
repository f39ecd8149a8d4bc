//! [`ReloadContent`] [`Task`].

use std::{convert::Infallible, error::Error, time};

use common::operations::{By, Perform, Reload, Start};
use smart_default::SmartDefault;
use tokio::time::interval;
use tracerr::Traced;
use tracing as log;

use crate::{
    infra::{database, Database},
    Service,
};

use super::Task;

/// Configuration for [`ReloadContent`] [`Task`].
#[derive(Clone, Copy, Debug, SmartDefault)]
pub struct Config {
    /// Interval between content reloads.
    #[default(time::Duration::from_secs(5 * 60))]
    pub interval: time::Duration,
}

/// [`Task`] for reloading the content the [`Database`] holds from its
/// source.
#[derive(Clone, Copy, Debug)]
pub struct ReloadContent<S> {
    /// [`Config`] of this [`Task`].
    config: Config,

    /// [`Service`] instance.
    service: S,
}

impl<Db> Task<Start<By<ReloadContent<Self>, Config>>> for Service<Db>
where
    ReloadContent<Service<Db>>:
        Task<Perform<()>, Ok = (), Err: Error> + Send + Sync + 'static,
    Self: Clone,
{
    type Ok = ();
    type Err = Infallible;

    async fn execute(
        &self,
        Start(by): Start<By<ReloadContent<Self>, Config>>,
    ) -> Result<Self::Ok, Self::Err> {
        let config = by.into_inner();
        let task = ReloadContent {
            config,
            service: self.clone(),
        };

        let mut interval = interval(task.config.interval);
        // First tick completes immediately, while content is fresh anyway.
        let _ = interval.tick().await;
        loop {
            let _ = interval.tick().await;
            _ = task.execute(Perform(())).await.map_err(|e| {
                log::error!("`task::ReloadContent` failed: {e}");
            });
        }
    }
}

impl<Db> Task<Perform<()>> for ReloadContent<Service<Db>>
where
    Db: Database<Reload, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = ();
    type Err = ExecutionError;

    async fn execute(&self, _: Perform<()>) -> Result<Self::Ok, Self::Err> {
        self.service
            .database()
            .execute(Reload)
            .await
            .map_err(tracerr::wrap!())
    }
}

/// Error of [`ReloadContent`] execution.
pub type ExecutionError = Traced<database::Error>;

#[cfg(test)]
mod spec {
    use std::{env, fs, process};

    use common::operations::Perform;
    use serde_json::json;

    use crate::{
        infra::Memory,
        query::{projects, Query as _},
        Config, Service,
    };

    use super::{Config as TaskConfig, ReloadContent, Task as _};

    #[tokio::test]
    async fn picks_up_changed_export() {
        let path = env::temp_dir()
            .join(format!("reload-content-{}.json", process::id()));
        let moto = |id: &str| {
            json!({"id": id, "title": id, "_status": "published"})
        };
        fs::write(&path, json!({"restored-motos": [moto("a")]}).to_string())
            .unwrap();

        let memory = Memory::load(&path).await.unwrap();
        let (service, _) = Service::new(Config::default(), memory);
        let task = ReloadContent {
            config: TaskConfig::default(),
            service: service.clone(),
        };

        fs::write(
            &path,
            json!({"restored-motos": [moto("a"), moto("b")]}).to_string(),
        )
        .unwrap();
        task.execute(Perform(())).await.unwrap();
        let projects =
            service.execute(projects::List::default()).await.unwrap();

        fs::remove_file(&path).unwrap();
        assert_eq!(projects.len(), 2);
    }

    #[tokio::test]
    async fn keeps_content_on_failure() {
        let path = env::temp_dir()
            .join(format!("reload-content-broken-{}.json", process::id()));
        fs::write(&path, r#"{"restored-motos": []}"#).unwrap();

        let memory = Memory::load(&path).await.unwrap();
        let (service, _) = Service::new(Config::default(), memory);
        let task = ReloadContent {
            config: TaskConfig::default(),
            service: service.clone(),
        };

        fs::write(&path, "{ not json").unwrap();
        let res = task.execute(Perform(())).await;

        fs::remove_file(&path).unwrap();
        assert!(res.is_err());
        assert!(service
            .execute(projects::List::default())
            .await
            .unwrap()
            .is_empty());
    }
}
