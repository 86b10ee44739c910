use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CalorieEntry {
    pub label: String,
    pub calories: u32,
}

impl CalorieEntry {
    pub fn new(label: impl Into<String>, calories: u32) -> Self {
        Self {
            label: label.into(),
            calories,
        }
    }
}
