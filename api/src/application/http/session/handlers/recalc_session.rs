use axum::extract::{Path, State};
use eat2beat_core::domain::session::ports::SessionService;
use uuid::Uuid;

use crate::application::http::{
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    session::handlers::get_session::GetSessionResponse,
};

#[utoipa::path(
    post,
    path = "/{session_id}/recalc",
    tag = "session",
    summary = "Recalculate estimates",
    description = "Parses the calorie input and rebuilds one estimate per activity. Input that is not a positive number clears the estimates.",
    params(
        ("session_id" = Uuid, Path, description = "Session ID"),
    ),
    responses(
        (status = 200, body = GetSessionResponse),
        (status = 404, description = "Session not found")
    ),
)]
pub async fn recalc_session(
    Path(session_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetSessionResponse>, ApiError> {
    let session = state
        .service
        .recalc(session_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetSessionResponse::from(session)))
}
