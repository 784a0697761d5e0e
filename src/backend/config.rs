use std::{path::PathBuf, time::Duration};
use url::Url;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_STATIC_DIR: &str = "dist";
const DEFAULT_EXPLAIN_UPSTREAM_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent";
const DEFAULT_EXPLAIN_REQUEST_TIMEOUT_MS: u64 = 15_000;
const DEFAULT_EXPLAIN_CONNECT_TIMEOUT_MS: u64 = 3_000;
const DEFAULT_EXPLAIN_RESPONSE_MAX_BYTES: usize = 256 * 1024;
const DEFAULT_EXPLAIN_CACHE_TTL_SECONDS: u64 = 24 * 60 * 60;
const DEFAULT_EXPLAIN_CACHE_MAX_ENTRIES: usize = 128;
const DEFAULT_EXPLAIN_MAX_CONCURRENCY: usize = 2;

const EXPLAIN_REQUEST_TIMEOUT_MS_BOUNDS: (u64, u64) = (100, 120_000);
const EXPLAIN_CONNECT_TIMEOUT_MS_BOUNDS: (u64, u64) = (100, 30_000);
const EXPLAIN_RESPONSE_MAX_BYTES_BOUNDS: (usize, usize) = (1_024, 4 * 1024 * 1024);
const EXPLAIN_CACHE_TTL_SECONDS_BOUNDS: (u64, u64) = (1, 7 * 24 * 60 * 60);
const EXPLAIN_CACHE_MAX_ENTRIES_BOUNDS: (usize, usize) = (1, 10_000);
const EXPLAIN_MAX_CONCURRENCY_BOUNDS: (usize, usize) = (1, 16);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

#[derive(Clone, Debug)]
pub struct ExplainConfig {
    pub api_key: String,
    pub upstream_url: Url,
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
    pub response_max_bytes: usize,
    pub cache_ttl: Duration,
    pub cache_max_entries: usize,
    pub max_concurrency: usize,
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    pub static_dir: PathBuf,
    /// `None` when no API key is configured; the relay then answers 503.
    pub explain: Option<ExplainConfig>,
    pub log_level: String,
    pub log_format: LogFormat,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let env = Env(lookup);

        let port = env
            .non_empty("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let static_dir = env
            .non_empty("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));
        let explain = env.non_empty("EXPLAIN_API_KEY").and_then(|api_key| {
            let upstream_url = env
                .http_url("EXPLAIN_UPSTREAM_URL")
                .or_else(|| Url::parse(DEFAULT_EXPLAIN_UPSTREAM_URL).ok())?;
            Some(ExplainConfig {
                api_key,
                upstream_url,
                request_timeout: Duration::from_millis(env.u64_with_bounds(
                    "EXPLAIN_REQUEST_TIMEOUT_MS",
                    DEFAULT_EXPLAIN_REQUEST_TIMEOUT_MS,
                    EXPLAIN_REQUEST_TIMEOUT_MS_BOUNDS,
                )),
                connect_timeout: Duration::from_millis(env.u64_with_bounds(
                    "EXPLAIN_CONNECT_TIMEOUT_MS",
                    DEFAULT_EXPLAIN_CONNECT_TIMEOUT_MS,
                    EXPLAIN_CONNECT_TIMEOUT_MS_BOUNDS,
                )),
                response_max_bytes: env.usize_with_bounds(
                    "EXPLAIN_RESPONSE_MAX_BYTES",
                    DEFAULT_EXPLAIN_RESPONSE_MAX_BYTES,
                    EXPLAIN_RESPONSE_MAX_BYTES_BOUNDS,
                ),
                cache_ttl: Duration::from_secs(env.u64_with_bounds(
                    "EXPLAIN_CACHE_TTL_SECONDS",
                    DEFAULT_EXPLAIN_CACHE_TTL_SECONDS,
                    EXPLAIN_CACHE_TTL_SECONDS_BOUNDS,
                )),
                cache_max_entries: env.usize_with_bounds(
                    "EXPLAIN_CACHE_MAX_ENTRIES",
                    DEFAULT_EXPLAIN_CACHE_MAX_ENTRIES,
                    EXPLAIN_CACHE_MAX_ENTRIES_BOUNDS,
                ),
                max_concurrency: env.usize_with_bounds(
                    "EXPLAIN_MAX_CONCURRENCY",
                    DEFAULT_EXPLAIN_MAX_CONCURRENCY,
                    EXPLAIN_MAX_CONCURRENCY_BOUNDS,
                ),
            })
        });
        let log_level = match env
            .non_empty("LOG_LEVEL")
            .map(|value| value.to_ascii_lowercase())
            .as_deref()
        {
            Some(level @ ("trace" | "debug" | "info" | "warn" | "error")) => level.to_string(),
            _ => "info".to_string(),
        };
        let log_format = match env
            .non_empty("LOG_FORMAT")
            .map(|value| value.to_ascii_lowercase())
            .as_deref()
        {
            Some("pretty") => LogFormat::Pretty,
            _ => LogFormat::Json,
        };

        Self {
            port,
            static_dir,
            explain,
            log_level,
            log_format,
        }
    }

    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

struct Env<F>(F);

impl<F: Fn(&str) -> Option<String>> Env<F> {
    fn non_empty(&self, name: &str) -> Option<String> {
        (self.0)(name)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }

    fn u64_with_bounds(&self, name: &str, default: u64, bounds: (u64, u64)) -> u64 {
        self.non_empty(name)
            .and_then(|value| value.parse::<u64>().ok())
            .filter(|value| (bounds.0..=bounds.1).contains(value))
            .unwrap_or(default)
    }

    fn usize_with_bounds(&self, name: &str, default: usize, bounds: (usize, usize)) -> usize {
        self.non_empty(name)
            .and_then(|value| value.parse::<usize>().ok())
            .filter(|value| (bounds.0..=bounds.1).contains(value))
            .unwrap_or(default)
    }

    fn http_url(&self, name: &str) -> Option<Url> {
        let parsed = Url::parse(&self.non_empty(name)?).ok()?;

        if parsed.scheme() == "http" || parsed.scheme() == "https" {
            Some(parsed)
        } else {
            None
        }
    }
}
