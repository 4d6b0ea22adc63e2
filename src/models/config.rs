//! Configuration model loaded from external sources.

use serde::Deserialize;

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_average_program_price() -> f64 {
    150.0
}

fn default_upcoming_limit() -> usize {
    10
}

fn default_page_size() -> usize {
    20
}

fn default_class_filter_limit() -> usize {
    100
}

#[derive(Clone, Debug, Deserialize)]
/// Settings shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Base URL of the remote data service, e.g. `https://api.example.com/api/v1`.
    pub api_base_url: String,
    /// Bearer token forwarded to the remote data service.
    #[serde(default)]
    pub api_token: Option<String>,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Flat price used to estimate per-program revenue.
    #[serde(default = "default_average_program_price")]
    pub average_program_price: f64,
    #[serde(default = "default_upcoming_limit")]
    pub upcoming_limit: usize,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_class_filter_limit")]
    pub class_filter_limit: usize,
}
