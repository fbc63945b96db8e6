use actix_web::{error::JsonPayloadError, web, HttpRequest, HttpResponse};
use log::warn;
use utoipa::OpenApi;

use crate::constants::{CODE_INVALID_JSON, MSG_SERVER_RUNNING, MSG_STATUS_OK};
use crate::errors::ApiError;
use crate::handlers;
use crate::models::HealthResponse;
use crate::openapi::ApiDoc;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            // Health check
            .route("/health", web::get().to(health_check))
            // Generated API description
            .route("/openapi.json", web::get().to(openapi_json))
            .service(
                web::scope("/snippets")
                    // List snippets, one page at a time
                    .route("", web::get().to(handlers::list_snippets))
                    // Create a snippet
                    .route("", web::post().to(handlers::create_snippet))
                    .route("/{id}", web::get().to(handlers::get_snippet))
                    .route("/{id}", web::put().to(handlers::update_snippet))
                    .route("/{id}", web::delete().to(handlers::delete_snippet)),
            ),
    );
}

/// Report that the server is up
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses(
        (status = 200, description = "Server is running", body = HealthResponse)
    )
)]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: MSG_STATUS_OK.to_string(),
        message: MSG_SERVER_RUNNING.to_string(),
    })
}

async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

/// Bodies that are not valid JSON for the target type are a 400 with a JSON error body.
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    warn!("Rejected request body: {}", err);
    ApiError::BadRequest {
        code: CODE_INVALID_JSON.to_string(),
        message: err.to_string(),
    }
    .into()
}
