// JSON error bodies shared by the HTTP inbound adapters.

use axum::{Json, http::StatusCode, response::IntoResponse, response::Response};
use serde::Serialize;

use crate::modules::contacts::core::validation::Violation;
use crate::modules::contacts::use_cases::errors::ApplicationError;
use crate::modules::contacts::use_cases::import_contacts::outcome::ImportError;
use crate::shared::infrastructure::contact_repository::RepositoryError;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct ViolationsBody {
    pub error: String,
    pub violations: Vec<Violation>,
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
        .into_response()
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        match self {
            ApplicationError::NotFound(_) | ApplicationError::Repository(RepositoryError::NotFound(_)) => {
                error_response(StatusCode::NOT_FOUND, self.to_string())
            }
            ApplicationError::Import(ImportError::Input(_) | ImportError::Parse { .. }) => {
                error_response(StatusCode::BAD_REQUEST, self.to_string())
            }
            ApplicationError::Invalid(violations) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ViolationsBody {
                    error: "contact rejected".to_string(),
                    violations,
                }),
            )
                .into_response(),
            ApplicationError::Repository(RepositoryError::Backend(_)) => {
                tracing::error!(error = %self, "repository failure");
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
            }
        }
    }
}
