use axum::extract::{Path, State};
use eat2beat_core::domain::session::{ports::SessionService, value_objects::SetCalorieInput};
use uuid::Uuid;

use crate::application::http::{
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
    session::{handlers::get_session::GetSessionResponse, validators::UpdateCaloriesValidator},
};

#[utoipa::path(
    put,
    path = "/{session_id}/calories",
    tag = "session",
    summary = "Set calorie input",
    description = "Stores the raw calorie text. It is parsed on the next recalculation.",
    params(
        ("session_id" = Uuid, Path, description = "Session ID"),
    ),
    request_body = UpdateCaloriesValidator,
    responses(
        (status = 200, body = GetSessionResponse),
        (status = 404, description = "Session not found")
    ),
)]
pub async fn update_calories(
    Path(session_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateCaloriesValidator>,
) -> Result<Response<GetSessionResponse>, ApiError> {
    let session = state
        .service
        .set_calorie_input(SetCalorieInput {
            session_id,
            calorie_input: payload.calorie_input,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetSessionResponse::from(session)))
}
