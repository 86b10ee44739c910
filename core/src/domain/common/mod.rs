use std::time::Duration;

use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp};

pub mod entities;
pub mod services;

/// Body weight a fresh session starts with.
pub const DEFAULT_WEIGHT_KG: f64 = 75.0;

/// Sessions untouched for this long are evicted.
pub const DEFAULT_SESSION_IDLE_TTL: Duration = Duration::from_secs(30 * 60);

#[derive(Clone, Debug)]
pub struct Eat2BeatConfig {
    pub session: SessionConfig,
}

#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub default_weight_kg: f64,
    pub idle_ttl: Duration,
}

impl Default for Eat2BeatConfig {
    fn default() -> Self {
        Self {
            session: SessionConfig {
                default_weight_kg: DEFAULT_WEIGHT_KG,
                idle_ttl: DEFAULT_SESSION_IDLE_TTL,
            },
        }
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, now.timestamp_subsec_nanos());

    (now, timestamp)
}
