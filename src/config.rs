use std::net::SocketAddr;
use std::time::Duration;

use url::Url;

/// Default listen address.
const DEFAULT_ADDR: &str = "0.0.0.0:8787";

/// Default timeout for one backend request (30 seconds).
const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 30;

/// Default interval between expired-entry sweeps of the cache (60 seconds).
const DEFAULT_CACHE_SWEEP_SECS: u64 = 60;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub backend_url: Url,
    pub listen_addr: SocketAddr,
    pub backend_timeout: Duration,
    pub cache_sweep_interval: Duration,
}

impl ServerConfig {
    /// Load configuration from environment.
    ///
    /// - `MOVIE_BACKEND_URL` (required): base URL of the content backend
    /// - `MOVIE_GATEWAY_ADDR` (optional, default `0.0.0.0:8787`): listen address
    /// - `MOVIE_BACKEND_TIMEOUT_SECS` (optional, default 30): per-request backend timeout
    /// - `MOVIE_CACHE_SWEEP_SECS` (optional, default 60): expired cache entry sweep interval
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let raw_url = lookup("MOVIE_BACKEND_URL")
            .ok_or_else(|| "MOVIE_BACKEND_URL environment variable is not set".to_string())?;
        let backend_url = Url::parse(&raw_url)
            .map_err(|e| format!("MOVIE_BACKEND_URL is not a valid URL: {e}"))?;
        if !matches!(backend_url.scheme(), "http" | "https") {
            return Err("MOVIE_BACKEND_URL must use http or https".to_string());
        }

        let listen_addr = lookup("MOVIE_GATEWAY_ADDR")
            .unwrap_or_else(|| DEFAULT_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|_| "MOVIE_GATEWAY_ADDR must be a socket address like 0.0.0.0:8787".to_string())?;

        let backend_timeout_secs = positive_secs(
            &lookup,
            "MOVIE_BACKEND_TIMEOUT_SECS",
            DEFAULT_BACKEND_TIMEOUT_SECS,
        )?;
        let sweep_secs = positive_secs(&lookup, "MOVIE_CACHE_SWEEP_SECS", DEFAULT_CACHE_SWEEP_SECS)?;

        Ok(Self {
            backend_url,
            listen_addr,
            backend_timeout: Duration::from_secs(backend_timeout_secs),
            cache_sweep_interval: Duration::from_secs(sweep_secs),
        })
    }
}

fn positive_secs(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: u64,
) -> Result<u64, String> {
    match lookup(name) {
        Some(val) => match val.parse::<u64>() {
            Ok(secs) if secs > 0 => Ok(secs),
            _ => Err(format!("{name} must be a positive integer")),
        },
        None => Ok(default),
    }
}
