use super::handlers::{__path_list_activities, list_activities};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(list_activities))]
pub struct ActivityApiDoc;

pub fn activity_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/activities", state.args.server.root_path),
        get(list_activities),
    )
}
