//! Snippet response models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Snippet;

/// Snippet data returned in API responses
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, ToSchema)]
pub struct SnippetResponse {
    /// Snippet identifier
    #[schema(example = 1)]
    pub id: u64,
    /// When the snippet was created
    pub created: DateTime<Utc>,
    #[schema(example = "Hello world")]
    pub title: String,
    #[schema(example = "print(\"hello, world\")\n")]
    pub code: String,
    #[schema(example = false)]
    pub linenos: bool,
    #[schema(example = "python")]
    pub language: String,
    #[schema(example = "friendly")]
    pub style: String,
}

impl From<Snippet> for SnippetResponse {
    fn from(snippet: Snippet) -> Self {
        Self {
            id: snippet.id,
            created: snippet.created,
            title: snippet.title,
            code: snippet.code,
            linenos: snippet.linenos,
            language: snippet.language,
            style: snippet.style,
        }
    }
}
