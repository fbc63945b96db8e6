use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snippet record as held by the repository.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Snippet {
    pub id: u64,
    pub created: DateTime<Utc>,
    pub title: String,
    pub code: String,
    pub linenos: bool,
    pub language: String,
    pub style: String,
}

/// Validated field values for creating or replacing a snippet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSnippet {
    pub title: String,
    pub code: String,
    pub linenos: bool,
    pub language: String,
    pub style: String,
}

impl Snippet {
    /// Build a record from validated data.
    pub fn from_new(id: u64, created: DateTime<Utc>, data: NewSnippet) -> Self {
        Self {
            id,
            created,
            title: data.title,
            code: data.code,
            linenos: data.linenos,
            language: data.language,
            style: data.style,
        }
    }

    /// Replace every writable field; `id` and `created` are kept.
    pub fn apply(&mut self, data: NewSnippet) {
        self.title = data.title;
        self.code = data.code;
        self.linenos = data.linenos;
        self.language = data.language;
        self.style = data.style;
    }
}
