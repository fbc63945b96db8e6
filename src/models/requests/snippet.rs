//! Snippet request models.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::constants::{DEFAULT_LANGUAGE, DEFAULT_STYLE};
use crate::models::NewSnippet;
use crate::validators::{validate_code, validate_language, validate_style};

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_style() -> String {
    DEFAULT_STYLE.to_string()
}

/// Request payload for creating or replacing a snippet
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SnippetRequest {
    /// Optional title (max 100 characters)
    #[serde(default)]
    #[validate(length(
        max = 100,
        message = "Ensure this field has no more than 100 characters."
    ))]
    #[schema(example = "Hello world")]
    pub title: String,
    /// Source code of the snippet
    #[validate(
        required(message = "This field is required."),
        custom(function = "validate_code")
    )]
    #[schema(example = "print(\"hello, world\")\n")]
    pub code: Option<String>,
    /// Whether to show line numbers (default: false)
    #[serde(default)]
    #[schema(example = false)]
    pub linenos: bool,
    /// Lexer name (default: python)
    #[serde(default = "default_language")]
    #[validate(custom(function = "validate_language"))]
    #[schema(example = "python")]
    pub language: String,
    /// Highlighting style (default: friendly)
    #[serde(default = "default_style")]
    #[validate(custom(function = "validate_style"))]
    #[schema(example = "friendly")]
    pub style: String,
}

impl SnippetRequest {
    /// Convert a payload that already passed `validate()` into repository input.
    pub fn into_new_snippet(self) -> NewSnippet {
        NewSnippet {
            title: self.title,
            code: self.code.unwrap_or_default(),
            linenos: self.linenos,
            language: self.language,
            style: self.style,
        }
    }
}
