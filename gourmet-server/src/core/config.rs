use crate::orders::TransitionPolicy;

/// Server configuration
///
/// # Environment variables
///
/// Every entry can be overridden through the environment:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | HTTP_PORT | 3000 | HTTP listen port |
/// | MOCK_LATENCY_MS | 1000 | Artificial latency per mock API call |
/// | SIMULATOR_INTERVAL_SECS | 30 | Seconds between simulator ticks |
/// | SIMULATOR_PROBABILITY | 0.1 | Chance of a synthetic order per tick |
/// | TRANSITION_POLICY | unrestricted | `unrestricted` or `forward-only` |
/// | LOG_LEVEL | info | Tracing level filter |
/// | LOG_DIR | (unset) | Daily-rolling log file directory |
///
/// # Example
///
/// ```ignore
/// HTTP_PORT=8080 MOCK_LATENCY_MS=0 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API port
    pub http_port: u16,
    /// Artificial latency applied before each mock API operation resolves
    pub mock_latency_ms: u64,
    /// Interval between background simulator ticks
    pub simulator_interval_secs: u64,
    /// Probability that a tick synthesizes a new order
    pub simulator_probability: f64,
    /// Order status transition policy
    pub transition_policy: TransitionPolicy,
    /// Tracing level filter
    pub log_level: String,
    /// Log file directory (stdout only when unset)
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from the environment
    ///
    /// Unset or unparsable variables fall back to their defaults.
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            mock_latency_ms: std::env::var("MOCK_LATENCY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000),
            simulator_interval_secs: std::env::var("SIMULATOR_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            simulator_probability: std::env::var("SIMULATOR_PROBABILITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0.1),
            transition_policy: std::env::var("TRANSITION_POLICY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
