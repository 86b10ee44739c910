use axum::extract::State;
use eat2beat_core::domain::activity::{entities::Activity, ports::ActivityService};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::http::server::{api_entities::response::Response, app_state::AppState};

#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct ListActivitiesResponse {
    pub data: Vec<Activity>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "activity",
    summary = "List activities",
    description = "Returns the activity catalog in display order, with the MET of each activity.",
    responses(
        (status = 200, body = ListActivitiesResponse)
    ),
)]
pub async fn list_activities(State(state): State<AppState>) -> Response<ListActivitiesResponse> {
    Response::OK(ListActivitiesResponse {
        data: state.service.list_activities(),
    })
}
