//! Repository layer for snippet storage.
//!
//! This module provides a clean separation between business logic (services)
//! and storage (repositories). Services only see the [`SnippetRepository`] trait,
//! so any backend, including test fakes, can be plugged in.

pub mod snippet_repository;

pub use snippet_repository::{InMemorySnippetRepository, SnippetRepository};
