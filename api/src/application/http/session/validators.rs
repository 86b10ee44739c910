use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Weight slider bounds, in kilograms.
pub const MIN_WEIGHT_KG: f64 = 40.0;
pub const MAX_WEIGHT_KG: f64 = 130.0;

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateSessionValidator {
    #[serde(default)]
    #[validate(range(
        min = MIN_WEIGHT_KG,
        max = MAX_WEIGHT_KG,
        message = "weight_kg must be between 40 and 130"
    ))]
    #[schema(example = 75.0)]
    pub weight_kg: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateWeightValidator {
    #[validate(range(
        min = MIN_WEIGHT_KG,
        max = MAX_WEIGHT_KG,
        message = "weight_kg must be between 40 and 130"
    ))]
    #[schema(example = 75.0)]
    pub weight_kg: f64,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCaloriesValidator {
    /// Raw text, parsed only on recalculation.
    #[validate(length(max = 32, message = "calorie_input must be at most 32 characters"))]
    #[schema(example = "540")]
    pub calorie_input: String,
}
