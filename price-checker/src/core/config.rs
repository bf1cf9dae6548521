use off_client::DEFAULT_BASE_URL;

/// How the station talks to its user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StationMode {
    /// Line-oriented terminal; a keyboard-wedge scanner types into stdin
    #[default]
    Terminal,
    /// JSON API for a browser view layer
    Http,
}

impl StationMode {
    /// `terminal` or `http`, case-insensitive
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "terminal" => Some(Self::Terminal),
            "http" => Some(Self::Http),
            _ => None,
        }
    }
}

/// Station configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | OFF_BASE_URL | https://world.openfoodfacts.org | remote product database |
/// | REMOTE_TIMEOUT_MS | 10000 | remote request timeout (ms) |
/// | REMOTE_LOOKUP | true | `false` resolves from the local store only |
/// | STATION_MODE | terminal | `terminal` or `http` |
/// | HTTP_PORT | 3000 | HTTP API port |
/// | LOG_LEVEL | info | log filter when RUST_LOG is unset |
/// | LOG_DIR | (unset) | daily-rolling log file directory |
/// | ENVIRONMENT | development | runtime environment |
///
/// # Example
///
/// ```ignore
/// STATION_MODE=http HTTP_PORT=8080 cargo run -p price-checker
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the Open Food Facts compatible API
    pub off_base_url: String,
    pub remote_timeout_ms: u64,
    pub remote_lookup: bool,
    pub mode: StationMode,
    pub http_port: u16,
    pub log_level: String,
    pub log_dir: Option<String>,
    /// development | staging | production
    pub environment: String,
}

impl Config {
    /// Load from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_source(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup
    pub fn from_source<F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            off_base_url: get("OFF_BASE_URL")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.into()),
            remote_timeout_ms: get("REMOTE_TIMEOUT_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(10_000),
            remote_lookup: get("REMOTE_LOOKUP")
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            mode: get("STATION_MODE")
                .and_then(|v| StationMode::parse(&v))
                .unwrap_or_default(),
            http_port: get("HTTP_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            log_level: get("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: get("LOG_DIR").filter(|v| !v.trim().is_empty()),
            environment: get("ENVIRONMENT").unwrap_or_else(|| "development".into()),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_source(|_| None)
    }
}
