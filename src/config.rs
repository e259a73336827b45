use std::{env, path::PathBuf};

use tracing::warn;

/// Runtime configuration, read once at startup. The ledger and relay URLs
/// are optional: without them the service runs in fully local mode.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub cache_path: PathBuf,
    pub ledger_url: Option<String>,
    pub relay_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        let port = match env::var("PORT") {
            Ok(value) => value.parse().unwrap_or_else(|err| {
                warn!("invalid PORT value: {err}, using 8080");
                8080
            }),
            Err(_) => 8080,
        };

        let cache_path = env::var("APP_CACHE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data/cache.json"));

        Self {
            port,
            cache_path,
            ledger_url: non_empty_var("LEDGER_URL"),
            relay_url: non_empty_var("MESSAGE_RELAY_URL"),
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}
