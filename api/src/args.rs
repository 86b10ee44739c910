use std::time::Duration;

use clap::{Args as ClapArgs, Parser, ValueEnum};
use eat2beat_core::domain::common::{DEFAULT_WEIGHT_KG, Eat2BeatConfig, SessionConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "eat2beat-api", version, about = "Turn food calories into minutes of exercise")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub log: LogArgs,

    #[command(flatten)]
    pub session: SessionArgs,

    #[command(flatten)]
    pub image: ImageArgs,
}

impl Default for Args {
    fn default() -> Self {
        Self::parse_from(["eat2beat-api"])
    }
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. `/api`.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    /// Used when `RUST_LOG` is not set.
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-format", env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct SessionArgs {
    #[arg(long = "default-weight-kg", env = "DEFAULT_WEIGHT_KG", default_value_t = DEFAULT_WEIGHT_KG)]
    pub default_weight_kg: f64,

    /// Seconds a session may sit untouched before it is evicted.
    #[arg(long = "session-idle-ttl-secs", env = "SESSION_IDLE_TTL_SECS", default_value_t = 30 * 60)]
    pub idle_ttl_secs: u64,

    #[arg(long = "session-sweep-interval-secs", env = "SESSION_SWEEP_INTERVAL_SECS", default_value_t = 60)]
    pub sweep_interval_secs: u64,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ImageArgs {
    #[arg(long = "max-image-bytes", env = "MAX_IMAGE_BYTES", default_value_t = 10 * 1024 * 1024)]
    pub max_image_bytes: usize,
}

impl From<Args> for Eat2BeatConfig {
    fn from(args: Args) -> Self {
        Eat2BeatConfig {
            session: SessionConfig {
                default_weight_kg: args.session.default_weight_kg,
                idle_ttl: Duration::from_secs(args.session.idle_ttl_secs),
            },
        }
    }
}
