use crate::domain::{calorie::entities::CalorieEntry, common::entities::app_errors::CoreError};

/// Source of approximate calorie counts for food labels.
///
/// Matching is case-insensitive. An unknown label is not an error, it simply
/// has no estimate.
#[cfg_attr(test, mockall::automock)]
pub trait CalorieLookup: Send + Sync {
    fn lookup(&self, label: &str) -> Option<u32>;

    /// Every known entry, sorted by label.
    fn entries(&self) -> Vec<CalorieEntry>;
}

pub trait CalorieService: Send + Sync {
    fn lookup_calories(&self, label: &str) -> Result<CalorieEntry, CoreError>;

    fn list_calories(&self) -> Vec<CalorieEntry>;
}
