//! Flat-file review datastore.
//!
//! The whole document is read and rewritten on every mutation. Writers are
//! serialized through an async mutex and each write lands in a sibling
//! temporary file that is renamed over the target.

use crate::domain::model::{Datastore, Review};
use crate::domain::seed::seed_datastore;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("datastore I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("datastore {path} is not valid JSON: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub struct JsonStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonStore {
    /// Opens the datastore at `path`, writing the seed document when the file
    /// does not exist yet.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let store = Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        };

        if let Some(parent) = store.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let exists = fs::try_exists(&store.path).await.map_err(|e| store.io_err(e))?;
        if !exists {
            let seed = seed_datastore();
            store.write_document(&seed).await?;
            info!(
                path = %store.path.display(),
                reviews = seed.reviews.len(),
                "seeded new review datastore"
            );
        }
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load(&self) -> Result<Datastore, StoreError> {
        let raw = fs::read_to_string(&self.path).await.map_err(|e| self.io_err(e))?;
        serde_json::from_str(&raw).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })
    }

    pub async fn save(&self, doc: &Datastore) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        self.write_document(doc).await
    }

    /// Read, push, write. The lock is held for the whole cycle so concurrent
    /// appends never overwrite each other.
    pub async fn append_review(&self, review: Review) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut doc = self.load().await?;
        doc.reviews.push(review);
        self.write_document(&doc).await?;
        debug!(total = doc.reviews.len(), "review appended");
        Ok(())
    }

    async fn write_document(&self, doc: &Datastore) -> Result<(), StoreError> {
        let body = serde_json::to_string_pretty(doc).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;

        let tmp = self.temp_path();
        fs::write(&tmp, body.as_bytes())
            .await
            .map_err(|source| StoreError::Io { path: tmp.clone(), source })?;
        if let Err(e) = fs::rename(&tmp, &self.path).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(self.io_err(e));
        }
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "reviews.json".to_string());
        self.path
            .with_file_name(format!(".{}.{}.tmp", name, uuid::Uuid::new_v4().simple()))
    }

    fn io_err(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
