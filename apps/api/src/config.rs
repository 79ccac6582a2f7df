use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Missing required secrets are a fatal startup condition.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    /// Scraping-service credential. Checked at startup like the LLM key even
    /// though listing search is synthetic and never calls the scraper.
    pub firecrawl_api_key: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            firecrawl_api_key: require_env("FIRECRAWL_API_KEY")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
