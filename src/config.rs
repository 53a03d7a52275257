use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::fmt;

pub const DEFAULT_LETA_URL: &str = "https://leta.mullvad.net/search/__data.json";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Search backends Leta can aggregate from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchEngine {
    Google,
    Brave,
}

impl SearchEngine {
    /// Lenient parse: anything unrecognised falls back to Google.
    pub fn parse_or_default(value: Option<&str>) -> SearchEngine {
        match value.map(str::to_lowercase).as_deref() {
            Some("brave") => SearchEngine::Brave,
            _ => SearchEngine::Google,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchEngine::Google => "google",
            SearchEngine::Brave => "brave",
        }
    }
}

impl fmt::Display for SearchEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Process configuration. Built once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct Config {
    pub engine: SearchEngine,
    pub debug: bool,
    pub host: String,
    pub port: u16,
    pub leta_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            engine: SearchEngine::Google,
            debug: false,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            leta_url: DEFAULT_LETA_URL.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Config> {
        dotenv().ok(); // Load .env file if present

        let port = match get_env_opt("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("Invalid PORT value: {raw}"))?,
            None => DEFAULT_PORT,
        };

        Ok(Config {
            engine: SearchEngine::parse_or_default(get_env_opt("SEARCH_ENGINE").as_deref()),
            debug: parse_flag(get_env_opt("DEBUG").as_deref()),
            host: get_env_or_default("HOST", DEFAULT_HOST),
            port,
            leta_url: get_env_or_default("LETA_URL", DEFAULT_LETA_URL),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// `true` and `1` (any case) switch a flag on; everything else is off.
pub fn parse_flag(value: Option<&str>) -> bool {
    matches!(
        value.map(|v| v.trim().to_lowercase()).as_deref(),
        Some("true") | Some("1")
    )
}

fn get_env_opt(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
