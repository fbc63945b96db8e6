//! Snippet handlers: list/create on the collection, retrieve/update/delete on an item.

use std::collections::HashMap;

use actix_web::{web, HttpResponse};
use log::{debug, info, warn};
use validator::Validate;

use crate::errors::ApiError;
use crate::models::{SnippetRequest, SnippetResponse};
use crate::pagination::PageOutcome;
use crate::services::SnippetService;
use crate::validators::validation_errors_to_api_error;

/// List snippets, one page at a time
///
/// Page numbers that do not name a page yield an empty list, never an error.
/// When pagination is disabled the response has no body.
#[utoipa::path(
    get,
    path = "/api/snippets",
    tag = "Snippets",
    params(
        ("current" = Option<String>, Query, description = "Page number or 'last' (default: 1)"),
        ("pageSize" = Option<u64>, Query, description = "Items per page (default: 3, max: 10)")
    ),
    responses(
        (status = 200, description = "Page of snippets", body = [SnippetResponse]),
        (status = 500, description = "Storage failure", body = crate::models::ErrorResponse)
    )
)]
pub async fn list_snippets(
    snippet_service: web::Data<SnippetService>,
    query: web::Query<HashMap<String, String>>,
) -> Result<HttpResponse, ApiError> {
    let body: Vec<SnippetResponse> = match snippet_service.list_page(&query).await? {
        PageOutcome::NotApplicable => return Ok(HttpResponse::Ok().finish()),
        PageOutcome::Page(page) => {
            debug!(
                "Serving page {}/{} ({} of {} snippets, previous: {}, next: {})",
                page.number,
                page.total_pages,
                page.items.len(),
                page.total_items,
                page.has_previous(),
                page.has_next()
            );
            page.map(SnippetResponse::from).items
        }
        // Out-of-range and malformed page numbers read as an empty page.
        PageOutcome::Invalid(reason) => {
            debug!("Serving empty page: {}", reason);
            Vec::new()
        }
    };

    Ok(HttpResponse::Ok().json(body))
}

/// Create a new snippet
#[utoipa::path(
    post,
    path = "/api/snippets",
    tag = "Snippets",
    request_body = SnippetRequest,
    responses(
        (status = 201, description = "Snippet created", body = SnippetResponse),
        (status = 400, description = "Validation error", body = crate::models::ErrorResponse)
    )
)]
pub async fn create_snippet(
    snippet_service: web::Data<SnippetService>,
    body: web::Json<SnippetRequest>,
) -> Result<HttpResponse, ApiError> {
    body.validate().map_err(|e| {
        warn!("Validation failed for create snippet: {}", e);
        validation_errors_to_api_error(e)
    })?;

    let snippet = snippet_service
        .create_snippet(body.into_inner().into_new_snippet())
        .await?;

    Ok(HttpResponse::Created().json(SnippetResponse::from(snippet)))
}

/// Get a snippet by ID
#[utoipa::path(
    get,
    path = "/api/snippets/{id}",
    tag = "Snippets",
    params(
        ("id" = u64, Path, description = "Snippet ID")
    ),
    responses(
        (status = 200, description = "Snippet found", body = SnippetResponse),
        (status = 404, description = "Snippet not found")
    )
)]
pub async fn get_snippet(
    snippet_service: web::Data<SnippetService>,
    path: web::Path<u64>,
) -> Result<HttpResponse, ApiError> {
    let snippet = snippet_service.get_snippet(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(SnippetResponse::from(snippet)))
}

/// Replace a snippet
///
/// The snippet must exist before the payload is parsed or validated, so a missing
/// id is a 404 even when the body is malformed.
#[utoipa::path(
    put,
    path = "/api/snippets/{id}",
    tag = "Snippets",
    params(
        ("id" = u64, Path, description = "Snippet ID")
    ),
    request_body = SnippetRequest,
    responses(
        (status = 200, description = "Snippet updated", body = SnippetResponse),
        (status = 400, description = "Validation error", body = crate::models::ErrorResponse),
        (status = 404, description = "Snippet not found")
    )
)]
pub async fn update_snippet(
    snippet_service: web::Data<SnippetService>,
    path: web::Path<u64>,
    body: Result<web::Json<SnippetRequest>, actix_web::Error>,
) -> actix_web::Result<HttpResponse> {
    let snippet_id = path.into_inner();
    snippet_service.get_snippet(snippet_id).await?;

    let body = body?;
    body.validate().map_err(|e| {
        warn!("Validation failed for update snippet {}: {}", snippet_id, e);
        validation_errors_to_api_error(e)
    })?;

    let snippet = snippet_service
        .update_snippet(snippet_id, body.into_inner().into_new_snippet())
        .await?;

    info!("Successfully updated snippet: {}", snippet_id);
    Ok(HttpResponse::Ok().json(SnippetResponse::from(snippet)))
}

/// Delete a snippet
#[utoipa::path(
    delete,
    path = "/api/snippets/{id}",
    tag = "Snippets",
    params(
        ("id" = u64, Path, description = "Snippet ID")
    ),
    responses(
        (status = 204, description = "Snippet deleted"),
        (status = 404, description = "Snippet not found")
    )
)]
pub async fn delete_snippet(
    snippet_service: web::Data<SnippetService>,
    path: web::Path<u64>,
) -> Result<HttpResponse, ApiError> {
    snippet_service.delete_snippet(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
