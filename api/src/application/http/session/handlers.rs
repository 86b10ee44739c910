pub mod create_session;
pub mod delete_session;
pub mod get_session;
pub mod recalc_session;
pub mod reset_session;
pub mod select_image;
pub mod update_calories;
pub mod update_weight;
