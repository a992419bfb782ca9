// Runtime configuration read from the process environment.
//
// `.env` files are honoured by the binary through dotenvy before `from_env`
// runs. Parsing itself only sees a lookup function, so it can be exercised
// without touching the real environment.

use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

pub const ADDR_VAR: &str = "MATERIAL_TRACKING_ADDR";
pub const TOPIC_VAR: &str = "MATERIAL_TRACKING_TOPIC";
pub const SEED_VAR: &str = "MATERIAL_TRACKING_SEED";

const DEFAULT_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_TOPIC: &str = "material-tracking.v1";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value:?}")]
    InvalidAddr { var: &'static str, value: String },

    #[error("{0} must not be empty")]
    Empty(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub outbox_topic: String,
    pub seed_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_addr = lookup(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let bind_addr = raw_addr
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidAddr {
                var: ADDR_VAR,
                value: raw_addr.clone(),
            })?;

        let outbox_topic = lookup(TOPIC_VAR).unwrap_or_else(|| DEFAULT_TOPIC.to_string());
        if outbox_topic.trim().is_empty() {
            return Err(ConfigError::Empty(TOPIC_VAR));
        }

        let seed_path = lookup(SEED_VAR)
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            bind_addr,
            outbox_topic,
            seed_path,
        })
    }
}
