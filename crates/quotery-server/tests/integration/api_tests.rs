use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::common::setup_test_app;

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

async fn post_quote(app: &Router, payload: serde_json::Value) -> axum::response::Response {
    app.clone()
        .oneshot(
            Request::post("/quotes")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&payload).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn list_quotes(app: &Router) -> serde_json::Value {
    let response = app
        .clone()
        .oneshot(Request::get("/quotes").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    json_body(response).await
}

#[tokio::test]
async fn health_returns_200() {
    let app = setup_test_app().await;

    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["database"], "ok");
}

#[tokio::test]
async fn root_returns_welcome_message() {
    let app = setup_test_app().await;

    let response = app
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["message"], "Quote catalog API");
}

#[tokio::test]
async fn list_is_empty_on_fresh_store() {
    let app = setup_test_app().await;
    assert_eq!(list_quotes(&app).await, serde_json::json!([]));
}

#[tokio::test]
async fn create_returns_record_with_assigned_id() {
    let app = setup_test_app().await;

    let response = post_quote(
        &app,
        serde_json::json!({
            "text": "The heart has its reasons.",
            "author": "Blaise Pascal",
            "tags": "love, reason"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);

    let json = json_body(response).await;
    assert_eq!(json["id"], 1);
    assert_eq!(json["text"], "The heart has its reasons.");
    assert_eq!(json["author"], "Blaise Pascal");
    assert_eq!(json["tags"], "love, reason");
}

#[tokio::test]
async fn create_without_tags_defaults_to_empty() {
    let app = setup_test_app().await;

    let response = post_quote(
        &app,
        serde_json::json!({"text": "Untagged.", "author": "Anonymous"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = json_body(response).await;
    assert_eq!(json["tags"], "");
}

#[tokio::test]
async fn create_with_empty_text_is_rejected() {
    let app = setup_test_app().await;

    let response = post_quote(
        &app,
        serde_json::json!({"text": "", "author": "Someone", "tags": ""}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = json_body(response).await;
    assert_eq!(json["error"], "validation_error");

    // No partial write.
    assert_eq!(list_quotes(&app).await, serde_json::json!([]));
}

#[tokio::test]
async fn create_with_empty_author_is_rejected() {
    let app = setup_test_app().await;

    let response = post_quote(
        &app,
        serde_json::json!({"text": "Words.", "author": "", "tags": ""}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(list_quotes(&app).await, serde_json::json!([]));
}

#[tokio::test]
async fn update_replaces_fields_and_keeps_id() {
    let app = setup_test_app().await;

    post_quote(
        &app,
        serde_json::json!({"text": "Old", "author": "Old Author", "tags": "old"}),
    )
    .await;
    post_quote(
        &app,
        serde_json::json!({"text": "Bystander", "author": "B", "tags": ""}),
    )
    .await;

    let response = app
        .clone()
        .oneshot(
            Request::put("/quotes/1")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::json!({"text": "New", "author": "New Author", "tags": "new"})
                        .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["id"], 1);
    assert_eq!(json["text"], "New");

    // Only the targeted row changed.
    let all = list_quotes(&app).await;
    assert_eq!(all[0]["author"], "New Author");
    assert_eq!(all[1]["text"], "Bystander");
}

#[tokio::test]
async fn update_missing_id_returns_404() {
    let app = setup_test_app().await;

    let response = app
        .oneshot(
            Request::put("/quotes/42")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::json!({"text": "X", "author": "Y", "tags": ""}).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = json_body(response).await;
    assert_eq!(json["error"], "not_found");
}

#[tokio::test]
async fn update_with_empty_text_is_rejected_before_write() {
    let app = setup_test_app().await;

    post_quote(
        &app,
        serde_json::json!({"text": "Intact", "author": "A", "tags": ""}),
    )
    .await;

    let response = app
        .clone()
        .oneshot(
            Request::put("/quotes/1")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::json!({"text": "", "author": "A", "tags": ""}).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(list_quotes(&app).await[0]["text"], "Intact");
}

#[tokio::test]
async fn delete_lifecycle_end_to_end() {
    let app = setup_test_app().await;

    let response = post_quote(
        &app,
        serde_json::json!({
            "text": "Life is what happens.",
            "author": "J. Lennon",
            "tags": "life, happiness"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = json_body(response).await;
    assert_eq!(created["id"], 1);

    let all = list_quotes(&app).await;
    assert_eq!(all.as_array().unwrap().len(), 1);
    assert_eq!(all[0], created);

    // Delete it.
    let response = app
        .clone()
        .oneshot(Request::delete("/quotes/1").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["message"], "Quote deleted successfully");

    assert_eq!(list_quotes(&app).await, serde_json::json!([]));

    // Deleting again is a distinguishable miss.
    let response = app
        .clone()
        .oneshot(Request::delete("/quotes/1").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = json_body(response).await;
    assert_eq!(json["error"], "not_found");
}
