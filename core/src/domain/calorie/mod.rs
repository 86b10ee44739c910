pub mod entities;
pub mod ports;
pub mod services;

pub use entities::CalorieEntry;
pub use ports::{CalorieLookup, CalorieService};
