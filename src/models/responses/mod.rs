//! Response models for API endpoints.

pub mod api;
pub mod snippet;

pub use api::*;
pub use snippet::*;
