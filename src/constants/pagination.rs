//! Pagination constants for list endpoints.

/// Default number of items per page when not specified in the request.
pub const DEFAULT_PAGE_SIZE: usize = 3;

/// Maximum allowed items per page to prevent excessive data retrieval.
pub const MAX_PAGE_SIZE: usize = 10;

/// Query parameter carrying the requested page number.
pub const PAGE_QUERY_PARAM: &str = "current";

/// Query parameter carrying the requested page size.
pub const PAGE_SIZE_QUERY_PARAM: &str = "pageSize";

/// Page tokens resolved to the final page.
pub const LAST_PAGE_TOKENS: [&str; 1] = ["last"];
