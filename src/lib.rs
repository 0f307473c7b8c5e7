//! Library catalog server
//!
//! Authors, books and user accounts exposed as a JSON API, plus a small
//! server-rendered HTML front end backed by the same services.

use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod web;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let routes = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // JSON API
        .route("/token", post(api::auth::login_for_token))
        .route("/library/adduser", post(api::users::add_user))
        .route("/library/addauthor", post(api::library::add_author))
        .route("/library/getbook", get(api::library::list_books))
        .route("/library/:author/addbook/", post(api::library::add_book))
        .route("/library/:author/deleteauthor", delete(api::library::delete_author))
        .route("/library/:author/getbook", get(api::library::list_author_books))
        .route("/library/:author/updatebook/", put(api::library::update_book))
        .route("/library/:author/deletebook", delete(api::library::delete_book))
        // HTML forms
        .route("/", get(web::home))
        .route("/register", get(web::register_view).post(web::register_form))
        .route("/login", get(web::login_view).post(web::login_form))
        .route("/books", get(web::books_view))
        .route("/author/create", get(web::author_create_view).post(web::author_create_form))
        .route("/book/create", get(web::book_create_view).post(web::book_create_form))
        .route("/book/update", get(web::book_update_view).post(web::book_update_form))
        .route("/book/delete", get(web::book_delete_view).post(web::book_delete_form))
        .with_state(state);

    Router::new()
        .merge(routes)
        .merge(api::openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
}
