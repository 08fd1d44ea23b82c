use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use crate::integration::common::{body_json, setup_test_app};

#[tokio::test]
async fn openapi_document_describes_user_routes() {
    let app = setup_test_app();

    let response = app
        .router
        .oneshot(Request::get("/openapi.json").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    assert!(json["openapi"].as_str().unwrap().starts_with("3."));
    assert_eq!(json["info"]["title"], "Users API");
    assert_eq!(json["info"]["version"], "1.0.0");
    assert_eq!(json["info"]["contact"]["name"], "João Campos");
    assert_eq!(
        json["info"]["contact"]["email"],
        "joaocanabarrocampos@gmail.com"
    );

    let users = &json["paths"]["/users"];
    assert!(users["get"].is_object());
    assert!(users["post"].is_object());

    let by_id = &json["paths"]["/users/{id}"];
    assert!(by_id["put"].is_object());
    assert!(by_id["delete"].is_object());
    assert!(by_id["put"]["responses"]["404"].is_object());

    assert!(json["paths"]["/"].is_null());
    assert!(json["components"]["schemas"]["UserResponse"].is_object());
}

#[tokio::test]
async fn swagger_ui_is_served() {
    let app = setup_test_app();

    let response = app
        .router
        .oneshot(Request::get("/api-docs/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
