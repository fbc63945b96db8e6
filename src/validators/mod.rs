//! Payload validation helpers.

pub mod common;
pub mod snippet;

pub use common::*;
pub use snippet::*;
