use uuid::Uuid;

use crate::domain::session::entities::{DetectionOutcome, Session};

#[derive(Debug, Clone, Default)]
pub struct CreateSessionInput {
    pub weight_kg: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct SetWeightInput {
    pub session_id: Uuid,
    pub weight_kg: f64,
}

#[derive(Debug, Clone)]
pub struct SetCalorieInput {
    pub session_id: Uuid,
    pub calorie_input: String,
}

#[derive(Debug, Clone)]
pub struct SelectImageInput {
    pub session_id: Uuid,
    pub image_data: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct SelectImageResult {
    pub session: Session,
    pub outcome: DetectionOutcome,
}
