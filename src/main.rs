mod config;
mod constants;
mod errors;
mod handlers;
mod models;
mod openapi;
mod pagination;
mod repositories;
mod routes;
mod services;
mod utils;
mod validators;

use std::sync::Arc;

use actix_web::{
    middleware::{Logger, NormalizePath},
    web, App, HttpServer,
};
use log::info;

use crate::config::CONFIG;
use crate::pagination::Paginator;
use crate::repositories::InMemorySnippetRepository;
use crate::services::SnippetService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize environment variables and logger
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let paginator = Paginator::new(CONFIG.pagination.clone());
    let pagination = paginator.config();
    info!(
        "Pagination: default size {:?}, max size {}, params {:?}/{:?}, last-page tokens {:?}",
        pagination.default_page_size,
        pagination.max_page_size,
        pagination.page_query_param,
        pagination.page_size_query_param,
        pagination.last_page_tokens
    );

    // Initialize services
    let repository = Arc::new(InMemorySnippetRepository::new());
    let snippet_service = web::Data::new(SnippetService::new(repository, paginator));

    // Start HTTP server
    let server_addr = format!("{}:{}", CONFIG.server_host, CONFIG.server_port);
    info!("Starting server at http://{}", server_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(NormalizePath::trim())
            .wrap(Logger::default())
            .app_data(snippet_service.clone())
            .configure(routes::configure_routes)
    })
    .bind(&server_addr)?
    .run()
    .await
}
