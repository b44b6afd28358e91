// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Local key-value store with typed JSON helpers.
//!
//! Each key holds the full serialized collection. Writes replace the whole
//! value (last writer wins); nothing spans more than one key.

use crate::error::AppError;
use anyhow::Context;
use dashmap::DashMap;
use serde::{de::DeserializeOwned, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Local storage client.
#[derive(Clone)]
pub struct LocalStore {
    backend: Option<Backend>,
}

#[derive(Clone)]
enum Backend {
    /// One `<key>.json` file per key under a directory
    Files(PathBuf),
    /// Process-local map, lost on exit
    Memory(Arc<DashMap<String, String>>),
}

impl LocalStore {
    /// Store keys as JSON files under `dir`. The directory is created on first write.
    pub fn open<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref().to_path_buf();
        tracing::info!(path = %dir.display(), "Using file storage");
        Self {
            backend: Some(Backend::Files(dir)),
        }
    }

    /// Keep everything in memory.
    pub fn in_memory() -> Self {
        Self {
            backend: Some(Backend::Memory(Arc::new(DashMap::new()))),
        }
    }

    /// Create a store whose every operation fails.
    pub fn new_offline() -> Self {
        Self { backend: None }
    }

    /// Helper to get the backend or return an error if offline.
    fn get_backend(&self) -> Result<&Backend, AppError> {
        self.backend
            .as_ref()
            .ok_or_else(|| AppError::Storage("Storage not available (offline mode)".to_string()))
    }

    /// Read the raw value stored under `key`.
    pub async fn load(&self, key: &str) -> Result<Option<String>, AppError> {
        match self.get_backend()? {
            Backend::Memory(map) => Ok(map.get(key).map(|v| v.value().clone())),
            Backend::Files(dir) => {
                let path = key_path(dir, key);
                match tokio::fs::read_to_string(&path).await {
                    Ok(contents) => Ok(Some(contents)),
                    Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
                    Err(e) => Err(AppError::Storage(format!(
                        "Failed to read {}: {}",
                        path.display(),
                        e
                    ))),
                }
            }
        }
    }

    /// Replace the value stored under `key`.
    pub async fn save(&self, key: &str, value: &str) -> Result<(), AppError> {
        match self.get_backend()? {
            Backend::Memory(map) => {
                map.insert(key.to_string(), value.to_string());
            }
            Backend::Files(dir) => {
                tokio::fs::create_dir_all(dir).await.map_err(|e| {
                    AppError::Storage(format!("Failed to create {}: {}", dir.display(), e))
                })?;

                // Write to a sibling then rename so a crash never leaves a torn file
                let path = key_path(dir, key);
                let tmp = dir.join(format!("{}.json.tmp", key));
                tokio::fs::write(&tmp, value).await.map_err(|e| {
                    AppError::Storage(format!("Failed to write {}: {}", tmp.display(), e))
                })?;
                tokio::fs::rename(&tmp, &path).await.map_err(|e| {
                    AppError::Storage(format!("Failed to replace {}: {}", path.display(), e))
                })?;
            }
        }

        tracing::debug!(key, bytes = value.len(), "Saved key");
        Ok(())
    }

    /// Load and deserialize a JSON value.
    pub async fn load_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, AppError> {
        match self.load(key).await? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Serialize and store a JSON value.
    ///
    /// A value that cannot be encoded is a bug in the caller, not bad stored
    /// data, so it surfaces as [`AppError::Internal`].
    pub async fn save_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), AppError> {
        let raw = serde_json::to_string(value)
            .with_context(|| format!("Failed to encode value for key {}", key))?;
        self.save(key, &raw).await
    }
}

fn key_path(dir: &Path, key: &str) -> PathBuf {
    dir.join(format!("{}.json", key))
}
