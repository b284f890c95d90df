use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use bigdecimal::BigDecimal;
use chrono::{NaiveDate, Utc};
use serde::Deserialize;

use crate::modules::contacts::core::contact::Contact;
use crate::modules::contacts::use_cases::edit_contact::command::EditContact;
use crate::shared::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct EditContactBody {
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub married: bool,
    pub phone: String,
    pub salary: BigDecimal,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    body: Result<Json<EditContactBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => {
            return error_response(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text());
        }
    };

    let command = EditContact {
        contact: Contact {
            id,
            name: body.name,
            date_of_birth: body.date_of_birth,
            married: body.married,
            phone: body.phone,
            salary: body.salary,
        },
        today: Utc::now().date_naive(),
    };

    match state.edit_handler.handle(command).await {
        Ok(contact) => Json(contact).into_response(),
        Err(error) => error.into_response(),
    }
}
