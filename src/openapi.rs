use utoipa::OpenApi;

use crate::models::{ErrorResponse, HealthResponse, SnippetRequest, SnippetResponse};

/// OpenAPI documentation for the Snippets API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Snippets API",
        version = "0.1.0",
        description = "A REST API for storing code snippets, with page-number pagination on the collection.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Snippets", description = "Snippet collection and item endpoints")
    ),
    paths(
        crate::handlers::list_snippets,
        crate::handlers::create_snippet,
        crate::handlers::get_snippet,
        crate::handlers::update_snippet,
        crate::handlers::delete_snippet,
        crate::routes::health_check
    ),
    components(
        schemas(
            SnippetRequest,
            SnippetResponse,
            ErrorResponse,
            HealthResponse
        )
    )
)]
pub struct ApiDoc;
