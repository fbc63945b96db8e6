//! Error code constants for API responses.
//!
//! These codes provide a machine-readable identifier for each error type,
//! making it easier for API clients to handle errors programmatically.

// Validation errors
pub const CODE_VALIDATION_FAILED: &str = "VALIDATION_FAILED";
pub const CODE_INVALID_JSON: &str = "INVALID_JSON";

// Snippet errors
pub const CODE_SNIPPET_NOT_FOUND: &str = "SNIPPET_NOT_FOUND";

// Generic errors
pub const CODE_STORAGE_ERROR: &str = "STORAGE_ERROR";
