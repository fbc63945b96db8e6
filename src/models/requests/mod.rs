//! Request models for API endpoints.

pub mod snippet;

pub use snippet::*;
