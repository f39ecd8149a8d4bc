//! Background environment for running [`Task`]s.

use std::{
    error::Error,
    future::{Future, IntoFuture},
    iter,
};

use derive_more::Display;
use futures::{
    future::{self, LocalBoxFuture},
    FutureExt as _, TryFutureExt as _,
};
use tokio::task;
use tracing as log;

#[cfg(doc)]
use crate::Task;

/// Background environment for running [`Task`]s.
///
/// Nothing runs until the [`Background`] itself is awaited.
#[derive(Debug, Default)]
pub struct Background {
    /// Local set the [`Task`]s are spawned onto.
    set: task::LocalSet,

    /// Handles of the spawned [`Task`]s.
    handles: Vec<task::JoinHandle<Result<(), TaskError>>>,
}

impl Background {
    /// Spawns a new [`Task`] with the provided `name` inside this
    /// [`Background`] environment.
    pub fn spawn<F, E>(&mut self, name: &'static str, future: F)
    where
        F: Future<Output = Result<(), E>> + 'static,
        E: Error + 'static,
    {
        self.handles.push(self.set.spawn_local(async move {
            log::debug!("`{name}` task started");
            future.await.map_err(|e| TaskError {
                name,
                source: Box::new(e),
            })
        }));
    }

    /// Returns the number of [`Task`]s spawned in this [`Background`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Indicates whether no [`Task`]s were spawned in this [`Background`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

impl IntoFuture for Background {
    type Output = Result<(), Box<dyn Error>>;
    type IntoFuture = LocalBoxFuture<'static, Self::Output>;

    fn into_future(self) -> Self::IntoFuture {
        let Self { set, handles } = self;
        future::try_join_all(iter::once(set.map(Ok).boxed_local()).chain(
            handles.into_iter().map(|h| {
                h.map(|r| match r {
                    Ok(Ok(())) => Ok(()),
                    Ok(Err(e)) => Err(Box::<dyn Error>::from(e)),
                    Err(e) => Err(Box::<dyn Error>::from(e)),
                })
                .boxed_local()
            }),
        ))
        .map_ok(drop)
        .boxed_local()
    }
}

/// Error of a [`Task`] failed in a [`Background`].
#[derive(Debug, Display)]
#[display("`{name}` task failed: {source}")]
pub struct TaskError {
    /// Name the [`Task`] was spawned with.
    pub name: &'static str,

    /// Error the [`Task`] failed with.
    pub source: Box<dyn Error>,
}

impl Error for TaskError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&*self.source)
    }
}
