use axum::extract::{Path, State};
use chrono::{DateTime, Utc};
use eat2beat_core::domain::{
    food_recognition::entities::FoodGuess,
    session::{
        entities::{Session, SessionPhase, WorkoutEstimate},
        ports::SessionService,
    },
};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct ImageSummary {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct SessionResponse {
    pub id: Uuid,
    pub phase: SessionPhase,
    pub weight_kg: f64,
    pub calorie_input: String,
    pub image: Option<ImageSummary>,
    pub detected: Vec<FoodGuess>,
    pub estimates: Vec<WorkoutEstimate>,
    pub is_detecting: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Session> for SessionResponse {
    fn from(session: Session) -> Self {
        Self {
            id: session.id(),
            phase: session.phase(),
            weight_kg: session.weight_kg(),
            calorie_input: session.calorie_input().to_string(),
            image: session.image().map(|image| ImageSummary {
                width: image.width,
                height: image.height,
            }),
            detected: session.detected().to_vec(),
            estimates: session.estimates().to_vec(),
            is_detecting: session.is_detecting(),
            created_at: session.created_at(),
            updated_at: session.updated_at(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct GetSessionResponse {
    pub data: SessionResponse,
}

impl From<Session> for GetSessionResponse {
    fn from(session: Session) -> Self {
        Self {
            data: SessionResponse::from(session),
        }
    }
}

#[utoipa::path(
    get,
    path = "/{session_id}",
    tag = "session",
    summary = "Get session",
    description = "Returns the inputs, detected guesses and workout estimates of a session.",
    params(
        ("session_id" = Uuid, Path, description = "Session ID"),
    ),
    responses(
        (status = 200, body = GetSessionResponse),
        (status = 404, description = "Session not found")
    ),
)]
pub async fn get_session(
    Path(session_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetSessionResponse>, ApiError> {
    let session = state
        .service
        .get_session(session_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetSessionResponse::from(session)))
}
