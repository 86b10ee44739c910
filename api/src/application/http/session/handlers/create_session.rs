use axum::extract::State;
use eat2beat_core::domain::session::{ports::SessionService, value_objects::CreateSessionInput};

use crate::application::http::{
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
    session::{handlers::get_session::GetSessionResponse, validators::CreateSessionValidator},
};

#[utoipa::path(
    post,
    path = "",
    tag = "session",
    summary = "Create session",
    description = "Starts an idle session. Weight defaults to the configured value when omitted.",
    request_body = CreateSessionValidator,
    responses(
        (status = 201, body = GetSessionResponse),
        (status = 400, description = "Weight out of range")
    ),
)]
pub async fn create_session(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateSessionValidator>,
) -> Result<Response<GetSessionResponse>, ApiError> {
    let session = state
        .service
        .create_session(CreateSessionInput {
            weight_kg: payload.weight_kg,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(GetSessionResponse::from(session)))
}
