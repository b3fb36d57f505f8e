use serde::{Deserialize, Serialize};

/// Backend used when no `KOFI_API_URL` is provided.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Orders table page size.
pub const ORDERS_PAGE_SIZE: u32 = 10;
/// Client directory page size.
pub const CLIENTS_PAGE_SIZE: u32 = 20;
/// Orders shown in the dashboard activity feed.
pub const DASHBOARD_RECENT_ORDERS: u32 = 4;
/// Quiet period before a search/filter change refetches.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Local storage key holding the admin bearer token. The only persisted state.
pub const TOKEN_STORAGE_KEY: &str = "admin_token";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub api_base_url: String,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Build a config from a key lookup. Native callers pass `std::env::var`,
    /// the WASM bundle passes values captured with `option_env!`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = lookup("KOFI_API_URL")
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        let log_level = lookup("KOFI_LOG_LEVEL")
            .map(|v| v.trim().to_lowercase())
            .filter(|v| matches!(v.as_str(), "trace" | "debug" | "info" | "warn" | "error"))
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Self { api_base_url, log_level }
    }
}
