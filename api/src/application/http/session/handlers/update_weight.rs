use axum::extract::{Path, State};
use eat2beat_core::domain::session::{ports::SessionService, value_objects::SetWeightInput};
use uuid::Uuid;

use crate::application::http::{
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
    session::{handlers::get_session::GetSessionResponse, validators::UpdateWeightValidator},
};

#[utoipa::path(
    put,
    path = "/{session_id}/weight",
    tag = "session",
    summary = "Set body weight",
    description = "Stores the weight. Estimates are not recomputed until the next recalculation.",
    params(
        ("session_id" = Uuid, Path, description = "Session ID"),
    ),
    request_body = UpdateWeightValidator,
    responses(
        (status = 200, body = GetSessionResponse),
        (status = 400, description = "Weight out of range"),
        (status = 404, description = "Session not found")
    ),
)]
pub async fn update_weight(
    Path(session_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateWeightValidator>,
) -> Result<Response<GetSessionResponse>, ApiError> {
    let session = state
        .service
        .set_weight(SetWeightInput {
            session_id,
            weight_kg: payload.weight_kg,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetSessionResponse::from(session)))
}
