pub mod activity;
pub mod calorie;
pub mod health;
pub mod server;
pub mod session;
