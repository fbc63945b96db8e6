//! Snippet service: CRUD over the repository and page computation for listings.

use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, info, warn};

use crate::constants::{CODE_SNIPPET_NOT_FOUND, ERR_SNIPPET_NOT_FOUND};
use crate::errors::ApiError;
use crate::models::{NewSnippet, Snippet};
use crate::pagination::{PageOutcome, Paginator};
use crate::repositories::SnippetRepository;
use crate::utils::preview;

pub struct SnippetService {
    repository: Arc<dyn SnippetRepository>,
    paginator: Paginator,
}

impl SnippetService {
    pub fn new(repository: Arc<dyn SnippetRepository>, paginator: Paginator) -> Self {
        Self {
            repository,
            paginator,
        }
    }

    /// One page of snippets, as named by the raw query parameters.
    pub async fn list_page(
        &self,
        params: &HashMap<String, String>,
    ) -> Result<PageOutcome<Snippet>, ApiError> {
        let snippets = self.repository.list().await?;
        debug!("Paginating {} snippets with {:?}", snippets.len(), params);
        Ok(self.paginator.paginate(snippets, params))
    }

    pub async fn get_snippet(&self, id: u64) -> Result<Snippet, ApiError> {
        debug!("Fetching snippet by ID: {}", id);
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn create_snippet(&self, data: NewSnippet) -> Result<Snippet, ApiError> {
        info!("Creating snippet {:?} ({})", preview(&data.title), data.language);
        let snippet = self.repository.create(data).await?;
        info!("Created snippet: {}", snippet.id);
        Ok(snippet)
    }

    pub async fn update_snippet(&self, id: u64, data: NewSnippet) -> Result<Snippet, ApiError> {
        info!("Updating snippet {} with code {:?}", id, preview(&data.code));
        self.repository
            .update(id, data)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn delete_snippet(&self, id: u64) -> Result<(), ApiError> {
        if !self.repository.delete(id).await? {
            return Err(not_found(id));
        }
        info!("Deleted snippet: {}", id);
        Ok(())
    }
}

fn not_found(id: u64) -> ApiError {
    warn!("Snippet not found with id: {}", id);
    ApiError::NotFound {
        code: CODE_SNIPPET_NOT_FOUND.to_string(),
        message: format!("{}: {}", ERR_SNIPPET_NOT_FOUND, id),
    }
}
