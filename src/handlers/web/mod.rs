mod pages;

use axum::{
    Form,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use axum_macros::debug_handler;

use std::sync::Arc;

use crate::{
    dto::{CreateNoteRequest, UpdateNoteRequest},
    error::Error,
    service::NoteService,
};

#[debug_handler]
pub async fn index(State(service): State<Arc<NoteService>>) -> Response {
    match service.get_all_notes().await {
        Ok(notes) => Html(pages::index(&notes)).into_response(),
        Err(e) => {
            tracing::error!("failed to list note entries: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to load notes").into_response()
        }
    }
}

#[debug_handler]
pub async fn create_note(
    State(service): State<Arc<NoteService>>,
    Form(payload): Form<CreateNoteRequest>,
) -> Response {
    match service.create_note(payload).await {
        Ok(note) => {
            tracing::info!("created note {}", note.id);
            redirect_to_index()
        }
        Err(Error::EmptyContent) => {
            (StatusCode::BAD_REQUEST, "Note content cannot be empty").into_response()
        }
        Err(e) => {
            tracing::error!("failed to create note entry: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to create note").into_response()
        }
    }
}

#[debug_handler]
pub async fn update_note(
    State(service): State<Arc<NoteService>>,
    Path(id): Path<i64>,
    Form(payload): Form<UpdateNoteRequest>,
) -> Response {
    match service.update_note(id, payload).await {
        Ok(note) => {
            tracing::info!("updated note {}", note.id);
            redirect_to_index()
        }
        Err(Error::NoteNotFound(_)) => (StatusCode::NOT_FOUND, "Note not found").into_response(),
        Err(Error::EmptyContent) => {
            (StatusCode::BAD_REQUEST, "Note content cannot be empty").into_response()
        }
        Err(e) => {
            tracing::error!("failed to update note entry: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to update note").into_response()
        }
    }
}

#[debug_handler]
pub async fn delete_note(State(service): State<Arc<NoteService>>, Path(id): Path<i64>) -> Response {
    match service.delete_note(id).await {
        Ok(()) => {
            tracing::info!("deleted note {}", id);
            redirect_to_index()
        }
        Err(Error::NoteNotFound(_)) => (StatusCode::NOT_FOUND, "Note not found").into_response(),
        Err(e) => {
            tracing::error!("failed to delete note entry: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to delete note").into_response()
        }
    }
}

/// Liveness probe, independent of storage availability.
#[debug_handler]
pub async fn healthz() -> Response {
    (StatusCode::OK, "ok").into_response()
}

/// 302 back to the note list after a successful mutation.
fn redirect_to_index() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, "/")]).into_response()
}
