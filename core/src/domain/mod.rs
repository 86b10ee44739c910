pub mod activity;
pub mod burn;
pub mod calorie;
pub mod common;
pub mod food_recognition;
pub mod session;
