use crate::modules::contacts::use_cases::import_contacts::command::ImportContacts;
use crate::modules::contacts::use_cases::import_contacts::outcome::ImportOutcome;
use crate::shared::infrastructure::contact_repository::ContactRepository;
use crate::shared::infrastructure::contact_repository::in_memory::InMemoryContactRepository;
use crate::shell::config::AppConfig;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::contacts::ContactRecordBuilder;
use crate::tests::fixtures::csv::{CsvBuilder, MULTIPART_BOUNDARY, multipart_body};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use http_body_util::BodyExt;
use std::str::FromStr;
use std::sync::Arc;
use tower::ServiceExt;

fn upload(csv: &str) -> Request<Body> {
    Request::post("/contacts/import")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}"),
        )
        .body(Body::from(multipart_body("file", "contacts.csv", csv)))
        .unwrap()
}

#[tokio::test]
async fn imports_two_valid_rows_and_lists_them() {
    let repository = Arc::new(InMemoryContactRepository::new());
    let app = router(AppState::new(repository.clone()), &AppConfig::default());
    let ada = ContactRecordBuilder::new().name("Ada Lovelace").build();
    let alan = ContactRecordBuilder::new()
        .name("Alan Turing")
        .date_of_birth(NaiveDate::from_ymd_opt(1954, 6, 7).unwrap())
        .married(true)
        .phone("(020) 7946-0958")
        .salary(BigDecimal::from_str("7000.10").unwrap())
        .build();
    let csv = CsvBuilder::new().record(&ada).record(&alan).build();

    let response = app.clone().oneshot(upload(&csv)).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let stored = repository.get_all().await.unwrap();
    assert_eq!(stored.len(), 2);
    assert_eq!(
        (
            &stored[1].name,
            stored[1].date_of_birth,
            stored[1].married,
            &stored[1].phone,
            &stored[1].salary
        ),
        (
            &alan.name,
            alan.date_of_birth,
            alan.married,
            &alan.phone,
            &alan.salary
        )
    );

    let response = app
        .oneshot(Request::get("/contacts").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 2);
    assert_eq!(json[0]["name"], "Ada Lovelace");
}

#[tokio::test]
async fn rejects_the_whole_batch_when_a_later_row_is_invalid() {
    let repository = Arc::new(InMemoryContactRepository::new());
    let app = router(AppState::new(repository.clone()), &AppConfig::default());
    let csv = CsvBuilder::new()
        .record(&ContactRecordBuilder::new().build())
        .line("Alan Turing,1954-06-07,true,555-0100,-5")
        .build();

    let response = app.oneshot(upload(&csv)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(
        json["row_errors"],
        serde_json::json!([{ "row_number": 3, "messages": ["Salary must be greater than 0"] }])
    );
    assert!(repository.get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn never_stores_a_salary_that_rounds_to_zero() {
    let repository = Arc::new(InMemoryContactRepository::new());
    let app = router(AppState::new(repository.clone()), &AppConfig::default());
    let csv = CsvBuilder::new()
        .line("Ada Lovelace,1990-05-17,false,555-0100,0.004")
        .build();

    let response = app.oneshot(upload(&csv)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(repository.get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn stops_at_an_unparseable_date_without_storing_anything() {
    let repository = Arc::new(InMemoryContactRepository::new());
    let app = router(AppState::new(repository.clone()), &AppConfig::default());
    let csv = CsvBuilder::new()
        .record(&ContactRecordBuilder::new().build())
        .line("Alan Turing,not-a-date,true,555-0100,100")
        .build();

    let response = app.oneshot(upload(&csv)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert!(
        json["error"]
            .as_str()
            .unwrap()
            .starts_with("CSV parsing error at line 3:")
    );
    assert!(repository.get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn accepts_a_header_only_file_as_an_empty_import() {
    let repository = Arc::new(InMemoryContactRepository::new());
    let handler = AppState::new(repository.clone()).import_handler;
    let csv = CsvBuilder::new().build();

    let outcome = handler
        .handle(ImportContacts {
            file_name: "contacts.csv".to_string(),
            size_bytes: csv.len() as u64,
            content: Some(csv.into_bytes()),
            today: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
        })
        .await
        .unwrap();

    assert_eq!(outcome, ImportOutcome::Accepted { contacts: vec![] });
    assert!(repository.get_all().await.unwrap().is_empty());
}
