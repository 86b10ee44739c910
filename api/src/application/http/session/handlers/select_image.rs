use axum::{
    extract::{Multipart, Path, State, multipart::MultipartError},
    http::StatusCode,
};
use eat2beat_core::domain::session::{
    entities::DetectionOutcome, ports::SessionService, value_objects::SelectImageInput,
};
use serde::Serialize;
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::{
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    session::handlers::get_session::SessionResponse,
};

#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct SelectImageResponse {
    pub data: SessionResponse,
    pub detection: DetectionOutcome,
}

/// Body-limit failures surface while the form is read; keep them as 413.
fn multipart_error(error: MultipartError) -> ApiError {
    if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge(error.body_text())
    } else {
        ApiError::BadRequest(error.body_text())
    }
}

#[utoipa::path(
    post,
    path = "/{session_id}/image",
    tag = "session",
    summary = "Select a food image",
    description = "Decodes the uploaded image and runs food recognition. Decode and recognition failures are reported in `detection` and leave the calorie input unchanged.",
    params(
        ("session_id" = Uuid, Path, description = "Session ID"),
    ),
    request_body(content_type = "multipart/form-data", description = "Form with an `image` file field"),
    responses(
        (status = 200, body = SelectImageResponse),
        (status = 400, description = "Missing image field"),
        (status = 404, description = "Session not found"),
        (status = 413, description = "Image too large")
    ),
)]
pub async fn select_image(
    Path(session_id): Path<Uuid>,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<SelectImageResponse>, ApiError> {
    let max_bytes = state.args.image.max_image_bytes;
    let mut image_data = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(multipart_error)?
    {
        if field.name() != Some("image") {
            continue;
        }

        let bytes = field
            .bytes()
            .await
            .map_err(multipart_error)?;

        if bytes.len() > max_bytes {
            return Err(ApiError::PayloadTooLarge(format!(
                "image exceeds {max_bytes} bytes"
            )));
        }

        image_data = Some(bytes.to_vec());
        break;
    }

    let Some(image_data) = image_data else {
        return Err(ApiError::BadRequest(
            "missing `image` form field".to_string(),
        ));
    };

    info!(
        session_id = %session_id,
        image_bytes = image_data.len(),
        "image received"
    );

    // Detection runs detached so a dropped client cannot leave the session stuck in `detecting`.
    let service = state.service.clone();
    let result = tokio::spawn(async move {
        service
            .select_image(SelectImageInput {
                session_id,
                image_data,
            })
            .await
    })
    .await
    .map_err(|e| {
        error!(session_id = %session_id, error = %e, "detection task failed");
        ApiError::InternalServerError("Internal server error".to_string())
    })?
    .map_err(ApiError::from)?;

    Ok(Response::OK(SelectImageResponse {
        data: SessionResponse::from(result.session),
        detection: result.outcome,
    }))
}
