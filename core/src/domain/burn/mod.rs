pub mod calculator;

pub use calculator::{display_minutes, minutes_to_burn};
