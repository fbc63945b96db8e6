//! Error message constants used throughout the application.

// Snippet errors
pub const ERR_SNIPPET_NOT_FOUND: &str = "Snippet not found";

// Request errors
pub const ERR_VALIDATION_FAILED: &str = "Validation failed";
pub const ERR_INTERNAL: &str = "An internal error occurred";
