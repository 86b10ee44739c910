use axum::http::StatusCode;
use axum_test::multipart::{MultipartForm, Part};
use serde_json::{Value, json};
use test_context::test_context;
use uuid::Uuid;

use super::context::{ApiContext, png_bytes};
use crate::args::Args;

fn image_form(bytes: Vec<u8>) -> MultipartForm {
    MultipartForm::new().add_part(
        "image",
        Part::bytes(bytes)
            .file_name("meal.png")
            .mime_type("image/png"),
    )
}

#[test_context(ApiContext)]
#[tokio::test]
async fn new_session_is_idle_with_default_weight(ctx: &mut ApiContext) {
    let id = ctx.create_default_session().await;

    let response = ctx.server.get(&format!("/sessions/{id}")).await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["phase"], "idle");
    assert_eq!(body["data"]["weight_kg"], 75.0);
    assert_eq!(body["data"]["calorie_input"], "");
    assert!(body["data"]["image"].is_null());
}

#[test_context(ApiContext)]
#[tokio::test]
async fn weight_outside_slider_range_is_rejected(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .post("/sessions")
        .json(&json!({ "weight_kg": 20.0 }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let id = ctx.create_default_session().await;
    let response = ctx
        .server
        .put(&format!("/sessions/{id}/weight"))
        .json(&json!({ "weight_kg": 131.0 }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn manual_calories_produce_estimates_on_recalc(ctx: &mut ApiContext) {
    let id = ctx.create_default_session().await;

    let response = ctx
        .server
        .put(&format!("/sessions/{id}/calories"))
        .json(&json!({ "calorie_input": "540" }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["estimates"].as_array().map(Vec::len), Some(0));

    let response = ctx.server.post(&format!("/sessions/{id}/recalc")).await;

    response.assert_status_ok();
    let body: Value = response.json();
    let estimates = body["data"]["estimates"].as_array().expect("estimates");
    assert_eq!(estimates.len(), 6);
    assert_eq!(estimates[1]["activity"]["name"], "Running (8 km/h)");
    assert_eq!(estimates[1]["minutes"], 51);
    assert_eq!(body["data"]["phase"], "ready");
}

#[test_context(ApiContext)]
#[tokio::test]
async fn weight_change_applies_on_next_recalc(ctx: &mut ApiContext) {
    let id = ctx.create_default_session().await;
    ctx.server
        .put(&format!("/sessions/{id}/calories"))
        .json(&json!({ "calorie_input": "540" }))
        .await
        .assert_status_ok();
    ctx.server
        .post(&format!("/sessions/{id}/recalc"))
        .await
        .assert_status_ok();

    let response = ctx
        .server
        .put(&format!("/sessions/{id}/weight"))
        .json(&json!({ "weight_kg": 100.0 }))
        .await;
    let body: Value = response.json();
    assert_eq!(body["data"]["estimates"][1]["minutes"], 51);

    let response = ctx.server.post(&format!("/sessions/{id}/recalc")).await;
    let body: Value = response.json();
    // 540 / (8 * 3.5 * 100 / 200) = 38.57
    assert_eq!(body["data"]["estimates"][1]["minutes"], 39);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn non_numeric_calories_clear_estimates(ctx: &mut ApiContext) {
    let id = ctx.create_default_session().await;

    for input in ["540", "abc"] {
        ctx.server
            .put(&format!("/sessions/{id}/calories"))
            .json(&json!({ "calorie_input": input }))
            .await
            .assert_status_ok();
    }

    let response = ctx.server.post(&format!("/sessions/{id}/recalc")).await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["estimates"].as_array().map(Vec::len), Some(0));
    assert_eq!(body["data"]["calorie_input"], "abc");
}

#[test_context(ApiContext)]
#[tokio::test]
async fn uploaded_image_fills_calories_from_top_guess(ctx: &mut ApiContext) {
    let id = ctx.create_default_session().await;

    let response = ctx
        .server
        .post(&format!("/sessions/{id}/image"))
        .multipart(image_form(png_bytes()))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["detection"]["status"], "recognized");
    assert_eq!(body["detection"]["top_guess"]["label"], "pizza");
    assert_eq!(body["detection"]["calories"], 285);
    assert_eq!(body["data"]["calorie_input"], "285");
    assert_eq!(body["data"]["is_detecting"], false);
    assert_eq!(body["data"]["image"]["width"], 8);
    assert_eq!(body["data"]["image"]["height"], 6);
    assert_eq!(body["data"]["detected"].as_array().map(Vec::len), Some(3));
    // 285 / 10.5 = 27.14
    assert_eq!(body["data"]["estimates"][1]["minutes"], 27);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn undecodable_image_is_reported_without_touching_calories(ctx: &mut ApiContext) {
    let id = ctx.create_default_session().await;
    ctx.server
        .put(&format!("/sessions/{id}/calories"))
        .json(&json!({ "calorie_input": "540" }))
        .await
        .assert_status_ok();

    let response = ctx
        .server
        .post(&format!("/sessions/{id}/image"))
        .multipart(image_form(b"definitely not an image".to_vec()))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["detection"]["status"], "decode_failed");
    assert_eq!(body["data"]["calorie_input"], "540");
    assert!(body["data"]["image"].is_null());
    assert_eq!(body["data"]["is_detecting"], false);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn image_upload_requires_image_field(ctx: &mut ApiContext) {
    let id = ctx.create_default_session().await;
    let form = MultipartForm::new().add_text("note", "no file here");

    let response = ctx
        .server
        .post(&format!("/sessions/{id}/image"))
        .multipart(form)
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn oversize_image_is_payload_too_large() {
    let mut args = Args::default();
    args.image.max_image_bytes = 4 * 1024;
    let ctx = ApiContext::with_args(args);
    let id = ctx.create_default_session().await;

    // Over the image limit but inside the request body allowance.
    ctx.server
        .post(&format!("/sessions/{id}/image"))
        .multipart(image_form(vec![0u8; 8 * 1024]))
        .await
        .assert_status(StatusCode::PAYLOAD_TOO_LARGE);

    // Past the request body limit as well.
    let response = ctx
        .server
        .post(&format!("/sessions/{id}/image"))
        .multipart(image_form(vec![0u8; 256 * 1024]))
        .await;
    response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
    let body: Value = response.json();
    assert_eq!(body["code"], "E_PAYLOAD_TOO_LARGE");

    let session: Value = ctx.server.get(&format!("/sessions/{id}")).await.json();
    assert!(session["data"]["image"].is_null());
}

#[test_context(ApiContext)]
#[tokio::test]
async fn reset_returns_to_idle_and_keeps_weight(ctx: &mut ApiContext) {
    let id = ctx.create_session(json!({ "weight_kg": 90.0 })).await;
    ctx.server
        .post(&format!("/sessions/{id}/image"))
        .multipart(image_form(png_bytes()))
        .await
        .assert_status_ok();

    let response = ctx.server.post(&format!("/sessions/{id}/reset")).await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["phase"], "idle");
    assert_eq!(body["data"]["weight_kg"], 90.0);
    assert_eq!(body["data"]["calorie_input"], "");
    assert!(body["data"]["image"].is_null());
    assert_eq!(body["data"]["detected"].as_array().map(Vec::len), Some(0));
}

#[test_context(ApiContext)]
#[tokio::test]
async fn unknown_session_is_not_found(ctx: &mut ApiContext) {
    let missing = Uuid::new_v4();

    ctx.server
        .get(&format!("/sessions/{missing}"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    ctx.server
        .post(&format!("/sessions/{missing}/recalc"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    ctx.server
        .post(&format!("/sessions/{missing}/image"))
        .multipart(image_form(png_bytes()))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn deleted_session_is_gone(ctx: &mut ApiContext) {
    let id = ctx.create_default_session().await;

    ctx.server
        .delete(&format!("/sessions/{id}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);
    ctx.server
        .get(&format!("/sessions/{id}"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
