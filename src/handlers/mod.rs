pub mod web;

use axum::{
    Router,
    routing::{get, post},
};

use std::sync::Arc;

use tower_http::trace::TraceLayer;

use crate::service::NoteService;

pub fn router(service: Arc<NoteService>) -> Router {
    Router::new()
        .route("/", get(web::index))
        .route("/notes", post(web::create_note))
        .route("/notes/{id}/update", post(web::update_note))
        .route("/notes/{id}/delete", post(web::delete_note))
        .route("/healthz", get(web::healthz))
        .with_state(service)
        .layer(TraceLayer::new_for_http())
}
