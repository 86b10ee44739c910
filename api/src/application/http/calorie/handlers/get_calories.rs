use axum::extract::{Path, State};
use eat2beat_core::domain::calorie::{entities::CalorieEntry, ports::CalorieService};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct GetCaloriesResponse {
    pub data: CalorieEntry,
}

#[utoipa::path(
    get,
    path = "/{label}",
    tag = "calorie",
    summary = "Look up calories for a food",
    description = "Case-insensitive lookup of the approximate calories of a food label.",
    params(
        ("label" = String, Path, description = "Food label, e.g. pizza"),
    ),
    responses(
        (status = 200, body = GetCaloriesResponse),
        (status = 404, description = "No estimate for this label")
    ),
)]
pub async fn get_calories(
    Path(label): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<GetCaloriesResponse>, ApiError> {
    let entry = state.service.lookup_calories(&label).map_err(|_| {
        ApiError::NotFound(format!("No calorie estimate for '{}'", label.trim()))
    })?;

    Ok(Response::OK(GetCaloriesResponse { data: entry }))
}
