pub mod calorie;
pub mod decoding;
pub mod recognition;
pub mod session;
