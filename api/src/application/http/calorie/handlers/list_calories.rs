use axum::extract::State;
use eat2beat_core::domain::calorie::{entities::CalorieEntry, ports::CalorieService};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::http::server::{api_entities::response::Response, app_state::AppState};

#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct ListCaloriesResponse {
    pub data: Vec<CalorieEntry>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "calorie",
    summary = "List known foods",
    description = "Returns every food label with a calorie estimate, sorted by label.",
    responses(
        (status = 200, body = ListCaloriesResponse)
    ),
)]
pub async fn list_calories(State(state): State<AppState>) -> Response<ListCaloriesResponse> {
    Response::OK(ListCaloriesResponse {
        data: state.service.list_calories(),
    })
}
