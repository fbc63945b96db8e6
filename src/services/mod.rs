//! Services organized by domain concern.

pub mod snippet_service;

pub use snippet_service::SnippetService;
