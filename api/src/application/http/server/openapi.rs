use crate::application::http::{
    activity::router::ActivityApiDoc, calorie::router::CalorieApiDoc, health::HealthApiDoc,
    session::router::SessionApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Eat2Beat API"
    ),
    nest(
        (path = "/activities", api = ActivityApiDoc),
        (path = "/calories", api = CalorieApiDoc),
        (path = "/sessions", api = SessionApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
