pub mod list_activities;

pub use list_activities::*;
