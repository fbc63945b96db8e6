//! Snippet repository trait and its in-memory implementation.

use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;
use log::debug;

use crate::errors::{StorageError, StorageResult};
use crate::models::{NewSnippet, Snippet};

/// Storage operations the snippet endpoints rely on.
#[async_trait]
pub trait SnippetRepository: Send + Sync {
    /// All snippets, oldest first.
    async fn list(&self) -> StorageResult<Vec<Snippet>>;

    /// Get a snippet by id.
    async fn get(&self, id: u64) -> StorageResult<Option<Snippet>>;

    /// Store a new snippet and return it with its assigned id.
    async fn create(&self, data: NewSnippet) -> StorageResult<Snippet>;

    /// Replace the fields of an existing snippet. Returns `None` if it does not exist.
    async fn update(&self, id: u64, data: NewSnippet) -> StorageResult<Option<Snippet>>;

    /// Delete a snippet. Returns `false` if it did not exist.
    async fn delete(&self, id: u64) -> StorageResult<bool>;
}

#[derive(Debug, Default)]
struct Store {
    last_id: u64,
    snippets: BTreeMap<u64, Snippet>,
}

/// Process-local snippet store.
///
/// Ids increase monotonically and are never reused, so iterating the map by
/// key yields snippets in creation order.
#[derive(Debug, Default)]
pub struct InMemorySnippetRepository {
    store: RwLock<Store>,
}

impl InMemorySnippetRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SnippetRepository for InMemorySnippetRepository {
    async fn list(&self) -> StorageResult<Vec<Snippet>> {
        let store = self.store.read().map_err(|_| StorageError::Poisoned)?;
        Ok(store.snippets.values().cloned().collect())
    }

    async fn get(&self, id: u64) -> StorageResult<Option<Snippet>> {
        debug!("Repository: Finding snippet by ID: {}", id);
        let store = self.store.read().map_err(|_| StorageError::Poisoned)?;
        Ok(store.snippets.get(&id).cloned())
    }

    async fn create(&self, data: NewSnippet) -> StorageResult<Snippet> {
        let mut store = self.store.write().map_err(|_| StorageError::Poisoned)?;
        let id = store
            .last_id
            .checked_add(1)
            .ok_or_else(|| StorageError::ConstraintViolation("snippet id space exhausted".into()))?;

        let snippet = Snippet::from_new(id, Utc::now(), data);
        store.last_id = id;
        store.snippets.insert(id, snippet.clone());
        debug!("Repository: Inserted snippet {}", id);
        Ok(snippet)
    }

    async fn update(&self, id: u64, data: NewSnippet) -> StorageResult<Option<Snippet>> {
        let mut store = self.store.write().map_err(|_| StorageError::Poisoned)?;
        Ok(store.snippets.get_mut(&id).map(|snippet| {
            snippet.apply(data);
            snippet.clone()
        }))
    }

    async fn delete(&self, id: u64) -> StorageResult<bool> {
        let mut store = self.store.write().map_err(|_| StorageError::Poisoned)?;
        Ok(store.snippets.remove(&id).is_some())
    }
}
