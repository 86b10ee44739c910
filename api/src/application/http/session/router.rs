use super::handlers::{
    create_session::{__path_create_session, create_session},
    delete_session::{__path_delete_session, delete_session},
    get_session::{__path_get_session, get_session},
    recalc_session::{__path_recalc_session, recalc_session},
    reset_session::{__path_reset_session, reset_session},
    select_image::{__path_select_image, select_image},
    update_calories::{__path_update_calories, update_calories},
    update_weight::{__path_update_weight, update_weight},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post, put},
};
use utoipa::OpenApi;

/// Room for multipart boundaries and headers on top of the raw image.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

#[derive(OpenApi)]
#[openapi(paths(
    create_session,
    get_session,
    delete_session,
    update_weight,
    update_calories,
    recalc_session,
    select_image,
    reset_session
))]
pub struct SessionApiDoc;

pub fn session_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;
    let body_limit = state.args.image.max_image_bytes + MULTIPART_OVERHEAD_BYTES;

    Router::new()
        .route(&format!("{root_path}/sessions"), post(create_session))
        .route(
            &format!("{root_path}/sessions/{{session_id}}"),
            get(get_session).delete(delete_session),
        )
        .route(
            &format!("{root_path}/sessions/{{session_id}}/weight"),
            put(update_weight),
        )
        .route(
            &format!("{root_path}/sessions/{{session_id}}/calories"),
            put(update_calories),
        )
        .route(
            &format!("{root_path}/sessions/{{session_id}}/recalc"),
            post(recalc_session),
        )
        .route(
            &format!("{root_path}/sessions/{{session_id}}/image"),
            post(select_image).layer(DefaultBodyLimit::max(body_limit)),
        )
        .route(
            &format!("{root_path}/sessions/{{session_id}}/reset"),
            post(reset_session),
        )
}
