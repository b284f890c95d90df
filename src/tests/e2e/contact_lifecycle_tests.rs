use crate::shared::infrastructure::contact_repository::in_memory::InMemoryContactRepository;
use crate::shell::config::AppConfig;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::contacts::ContactRecordBuilder;
use crate::tests::fixtures::csv::{CsvBuilder, MULTIPART_BOUNDARY, multipart_body};
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

#[tokio::test]
async fn imports_edits_and_deletes_a_contact() {
    let app = router(
        AppState::new(Arc::new(InMemoryContactRepository::new())),
        &AppConfig::default(),
    );
    let csv = CsvBuilder::new()
        .record(&ContactRecordBuilder::new().name("Ada Lovelace").build())
        .record(&ContactRecordBuilder::new().name("Alan Turing").build())
        .build();

    let (status, _) = send(
        &app,
        Request::post("/contacts/import")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}"),
            )
            .body(Body::from(multipart_body("file", "contacts.CSV", &csv)))
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, json) = send(
        &app,
        Request::put("/contacts/2")
            .header("content-type", "application/json")
            .body(Body::from(
                r#"{"name":"Alan M. Turing","date_of_birth":"1990-05-17","married":true,"phone":"555-0100","salary":"64000"}"#,
            ))
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "Alan M. Turing");

    let (status, _) = send(
        &app,
        Request::delete("/contacts/1").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, json) = send(&app, Request::get("/contacts").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["id"], 2);
    assert_eq!(json[0]["married"], true);

    let (status, _) = send(&app, Request::get("/contacts/1").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn serves_graphql_queries_over_http() {
    let app = router(
        AppState::new(Arc::new(InMemoryContactRepository::new())),
        &AppConfig::default(),
    );

    let (status, json) = send(
        &app,
        Request::post("/gql")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"query":"{ contacts { id } }"}"#))
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"], serde_json::json!({ "contacts": [] }));
}
