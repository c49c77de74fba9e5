use std::env;

use persistence::cart::repository::DEFAULT_CART_KEY;

const DEFAULT_NOTIFICATION_CAPACITY: usize = 32;

/// Cart storage slot and notification queue settings.
#[derive(Debug, Clone)]
pub struct CartConfig {
    pub storage_key: String,
    pub notification_capacity: usize,
}

impl CartConfig {
    /// Environment variables:
    /// - CART_STORAGE_KEY: Key of the cart in the local store (default: "@RocketShoes:cart")
    /// - NOTIFICATION_CAPACITY: Pending notifications kept (default: 32)
    pub fn from_env() -> Self {
        Self {
            storage_key: env::var("CART_STORAGE_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_CART_KEY.to_string()),
            notification_capacity: env::var("NOTIFICATION_CAPACITY")
                .ok()
                .and_then(|value| value.trim().parse().ok())
                .unwrap_or(DEFAULT_NOTIFICATION_CAPACITY),
        }
    }
}
