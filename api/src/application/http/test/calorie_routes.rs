use axum::http::StatusCode;
use serde_json::Value;
use test_context::test_context;

use super::context::ApiContext;

#[test_context(ApiContext)]
#[tokio::test]
async fn lookup_ignores_case(ctx: &mut ApiContext) {
    let response = ctx.server.get("/calories/Pizza").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["label"], "pizza");
    assert_eq!(body["data"]["calories"], 285);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn unknown_food_is_not_found(ctx: &mut ApiContext) {
    let response = ctx.server.get("/calories/kale").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["code"], "E_NOT_FOUND");
}

#[test_context(ApiContext)]
#[tokio::test]
async fn table_lists_every_food(ctx: &mut ApiContext) {
    let response = ctx.server.get("/calories").await;

    response.assert_status_ok();
    let body: Value = response.json();
    let entries = body["data"].as_array().expect("calorie list");
    assert_eq!(entries.len(), 7);
    assert!(
        entries
            .iter()
            .any(|entry| entry["label"] == "burger" && entry["calories"] == 540)
    );
}
