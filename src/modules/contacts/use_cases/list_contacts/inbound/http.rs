use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::shared::http::error_response;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> Response {
    match state.repository.get_all().await {
        Ok(contacts) => Json(contacts).into_response(),
        Err(error) => {
            tracing::error!(%error, "listing contacts failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
        }
    }
}

pub async fn handle_one(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    match state.repository.get_by_id(id).await {
        Ok(Some(contact)) => Json(contact).into_response(),
        Ok(None) => error_response(
            StatusCode::NOT_FOUND,
            format!("contact with id {id} not found"),
        ),
        Err(error) => {
            tracing::error!(%error, contact_id = id, "loading contact failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
        }
    }
}
