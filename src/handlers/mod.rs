//! HTTP request handlers organized by domain.

pub mod snippet_handler;

pub use snippet_handler::*;
