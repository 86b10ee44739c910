pub mod get_calories;
pub mod list_calories;
