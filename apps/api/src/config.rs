use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub company: CompanyProfile,
    pub port: u16,
    pub rust_log: String,
}

/// Identity of the issuing company, printed on every letter and salary slip.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyProfile {
    pub name: String,
    pub cin: String,
    pub address: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            company: CompanyProfile {
                name: require_env("COMPANY_NAME")?,
                cin: require_env("COMPANY_CIN")?,
                address: require_env("COMPANY_ADDRESS")?,
            },
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
