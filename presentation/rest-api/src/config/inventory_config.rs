use std::env;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "http://localhost:3333";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the remote inventory API.
#[derive(Debug, Clone)]
pub struct InventoryConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl InventoryConfig {
    /// Environment variables:
    /// - INVENTORY_API_URL: Base URL serving /stock/{id} and /products/{id}
    ///   (default: "http://localhost:3333")
    /// - INVENTORY_TIMEOUT_SECS: Request timeout in seconds (default: 10)
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("INVENTORY_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            timeout: parse_timeout(env::var("INVENTORY_TIMEOUT_SECS").ok().as_deref()),
        }
    }
}

fn parse_timeout(raw: Option<&str>) -> Duration {
    let secs = raw
        .and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);
    Duration::from_secs(secs)
}
