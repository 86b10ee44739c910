use super::handlers::{
    get_calories::{__path_get_calories, get_calories},
    list_calories::{__path_list_calories, list_calories},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(list_calories, get_calories))]
pub struct CalorieApiDoc;

pub fn calorie_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/calories", state.args.server.root_path),
            get(list_calories),
        )
        .route(
            &format!("{}/calories/{{label}}", state.args.server.root_path),
            get(get_calories),
        )
}
