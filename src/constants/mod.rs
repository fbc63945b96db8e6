//! Application constants module.
//!
//! This module centralizes the constant strings and defaults used throughout the application,
//! including error messages, error codes, success messages, pagination defaults and the
//! lexer/style choices accepted for snippets.

pub mod error_codes;
pub mod errors;
pub mod messages;
pub mod pagination;
pub mod snippets;

pub use error_codes::*;
pub use errors::*;
pub use messages::*;
pub use pagination::*;
pub use snippets::*;
