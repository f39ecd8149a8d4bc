//! In-memory [`Database`] implementation.
//!
//! Holds a content export of the shape
//! `{ "<collection>": [ <document>, ... ], ... }` and answers [`Find`]
//! queries over it.

use std::{
    collections::HashMap,
    io,
    path::{Path, PathBuf},
    sync::Arc,
};

use common::operations::{By, Reload, Select};
use derive_more::{Display, Error as StdError, From};
use serde_json::Value;
use tokio::sync::RwLock;
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{Collection, Record, Relation},
    infra::{database, Database},
};

use super::{find, Find};

/// Documents of every known [`Collection`].
type Content = HashMap<Collection, Vec<Value>>;

/// In-memory [`Database`] client.
#[derive(Clone, Debug, Default)]
pub struct Memory {
    /// Path of the content export file, if any.
    source: Option<Arc<PathBuf>>,

    /// Currently loaded [`Content`].
    content: Arc<RwLock<Content>>,
}

impl Memory {
    /// Loads a new [`Memory`] client from the content export file at the
    /// provided `path`.
    ///
    /// The file is re-read on every [`Reload`].
    ///
    /// # Errors
    ///
    /// If the file cannot be read or is not a valid content export.
    pub async fn load(
        path: impl Into<PathBuf>,
    ) -> Result<Self, Traced<database::Error>> {
        let path = path.into();
        let content = read(&path).await.map_err(tracerr::map_from)?;
        Ok(Self {
            source: Some(Arc::new(path)),
            content: Arc::new(RwLock::new(content)),
        })
    }

    /// Creates a new [`Memory`] client out of the provided content export.
    ///
    /// [`Reload`] does nothing for such a client.
    ///
    /// # Errors
    ///
    /// If the `export` is not a valid content export.
    pub fn from_json(export: Value) -> Result<Self, Traced<database::Error>> {
        let content = parse(export)
            .map_err(tracerr::from_and_wrap!(=> Error))
            .map_err(tracerr::map_from)?;
        Ok(Self {
            source: None,
            content: Arc::new(RwLock::new(content)),
        })
    }
}

/// Reads [`Content`] out of the export file at the provided `path`.
async fn read(path: &Path) -> Result<Content, Traced<Error>> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(tracerr::from_and_wrap!(=> Error))?;
    let export = serde_json::from_slice(&bytes)
        .map_err(tracerr::from_and_wrap!(=> Error))?;
    parse(export).map_err(tracerr::wrap!())
}

/// Parses [`Content`] out of the provided `export`.
///
/// Unknown collections and non-object documents are skipped.
fn parse(export: Value) -> Result<Content, Error> {
    let Value::Object(collections) = export else {
        return Err(Error::Malformed {
            reason: "export is not an object",
        });
    };

    let mut content = Content::new();
    for (name, docs) in collections {
        let Ok(collection) = name.parse::<Collection>() else {
            log::debug!("skipping unknown collection `{name}`");
            continue;
        };
        let Value::Array(docs) = docs else {
            return Err(Error::Malformed {
                reason: "collection is not an array",
            });
        };
        let docs = docs
            .into_iter()
            .filter(|d| {
                let is_object = d.is_object();
                if !is_object {
                    log::warn!("skipping non-object `{collection}` document");
                }
                is_object
            })
            .collect();
        _ = content.insert(collection, docs);
    }
    Ok(content)
}

impl<T: Record> Database<Select<By<Vec<T>, Find>>> for Memory {
    type Ok = Vec<T>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<T>, Find>>,
    ) -> Result<Self::Ok, Self::Err> {
        let Find {
            filter,
            depth,
            limit,
            sort,
        } = by.into_inner();

        let mut docs = {
            let content = self.content.read().await;
            content
                .get(&T::COLLECTION)
                .map(Vec::as_slice)
                .unwrap_or_default()
                .iter()
                .map(|d| populate(d.clone(), T::RELATIONS, &content, depth))
                .filter(|d| filter.matches(d))
                .collect::<Vec<_>>()
        };
        if let Some(sort) = sort {
            sort.apply(&mut docs);
        }

        Ok(docs
            .into_iter()
            .take(limit.unwrap_or(usize::MAX))
            .filter_map(|d| {
                serde_json::from_value(d)
                    .map_err(|e| {
                        log::warn!(
                            "skipping malformed `{}` document: {e}",
                            T::COLLECTION,
                        );
                    })
                    .ok()
            })
            .collect())
    }
}

impl Database<Reload> for Memory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(&self, _: Reload) -> Result<Self::Ok, Self::Err> {
        let Some(path) = &self.source else {
            return Ok(());
        };
        let content = read(path).await.map_err(tracerr::map_from)?;
        *self.content.write().await = content;
        log::debug!("reloaded content from `{}`", path.display());
        Ok(())
    }
}

/// Replaces relationship IDs of the provided `doc` with the documents they
/// point to, if `depth` allows.
///
/// IDs pointing nowhere are left as is.
fn populate(
    mut doc: Value,
    relations: &[Relation],
    content: &Content,
    depth: u8,
) -> Value {
    if depth == 0 {
        return doc;
    }
    for rel in relations {
        let targets =
            content.get(&rel.to).map(Vec::as_slice).unwrap_or_default();
        let path = rel.path.split('.').collect::<Vec<_>>();
        resolve(&mut doc, &path, targets);
    }
    doc
}

/// Resolves the IDs at the provided `path` of the `value` into `targets`.
fn resolve(value: &mut Value, path: &[&str], targets: &[Value]) {
    match path.split_first() {
        None => {
            let Some(id) = find::text(value) else {
                return;
            };
            let target = targets.iter().find(|t| {
                t.get("id").and_then(find::text).as_deref() == Some(&*id)
            });
            if let Some(target) = target {
                *value = target.clone();
            }
        }
        Some((&"*", rest)) => {
            if let Value::Array(items) = value {
                for item in items {
                    resolve(item, rest, targets);
                }
            }
        }
        Some((key, rest)) => {
            if let Some(v) = value.get_mut(*key) {
                resolve(v, rest, targets);
            }
        }
    }
}

/// [`Memory`] database error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// Failed to read the content export file.
    #[display("Failed to read content export: {_0}")]
    Io(io::Error),

    /// Failed to parse the content export as JSON.
    #[display("Failed to parse content export: {_0}")]
    Json(serde_json::Error),

    /// Content export is not of the expected shape.
    #[display("Malformed content export: {reason}")]
    #[from(ignore)]
    Malformed {
        /// Description of what is wrong.
        reason: &'static str,
    },
}
