use axum::{
    Json,
    extract::{
        Multipart, State,
        multipart::{MultipartError, MultipartRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::Serialize;

use crate::modules::contacts::use_cases::import_contacts::command::ImportContacts;
use crate::modules::contacts::use_cases::import_contacts::outcome::{ImportOutcome, RowError};
use crate::shared::http::error_response;
use crate::shell::state::AppState;

pub const FILE_FIELD: &str = "file";

#[derive(Serialize)]
pub struct ImportContactsResponse {
    pub imported: usize,
}

#[derive(Serialize)]
pub struct ImportRejectedResponse {
    pub error: String,
    pub row_errors: Vec<RowError>,
}

struct Upload {
    file_name: String,
    content: Option<Vec<u8>>,
}

async fn read_upload(mut multipart: Multipart) -> Result<Upload, MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await?;
        return Ok(Upload {
            file_name,
            content: Some(bytes.to_vec()),
        });
    }
    Ok(Upload {
        file_name: String::new(),
        content: None,
    })
}

pub async fn handle(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let Ok(multipart) = multipart else {
        return error_response(StatusCode::BAD_REQUEST, "expected a multipart/form-data upload");
    };
    let upload = match read_upload(multipart).await {
        Ok(upload) => upload,
        Err(error) => return error_response(error.status(), error.body_text()),
    };

    let command = ImportContacts {
        file_name: upload.file_name,
        size_bytes: upload.content.as_ref().map_or(0, |bytes| bytes.len() as u64),
        content: upload.content,
        today: Utc::now().date_naive(),
    };

    match state.import_handler.handle(command).await {
        Ok(ImportOutcome::Accepted { contacts }) => (
            StatusCode::CREATED,
            Json(ImportContactsResponse {
                imported: contacts.len(),
            }),
        )
            .into_response(),
        Ok(ImportOutcome::Rejected { row_errors }) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ImportRejectedResponse {
                error: format!("{} row(s) failed validation, nothing was imported", row_errors.len()),
                row_errors,
            }),
        )
            .into_response(),
        Err(error) => error.into_response(),
    }
}
