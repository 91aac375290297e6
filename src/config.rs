use std::net::IpAddr;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub log_level: String,
    pub max_body_size: usize,
    pub static_dir: String,
    pub cors_origins: Vec<String>,
    pub seed: bool,
    pub newsletter_rate_limit: u32,
    pub gemini: Option<GeminiConfig>,
}

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let host: IpAddr = env_or("STATUSBOARD_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid STATUSBOARD_HOST: {e}"))?;

        let port: u16 = env_or("STATUSBOARD_PORT", "5000")
            .parse()
            .map_err(|e| format!("Invalid STATUSBOARD_PORT: {e}"))?;

        let log_level = env_or("STATUSBOARD_LOG_LEVEL", "info");

        let max_body_size: usize = env_or("STATUSBOARD_MAX_BODY_SIZE", "1048576")
            .parse()
            .map_err(|e| format!("Invalid STATUSBOARD_MAX_BODY_SIZE: {e}"))?;

        let static_dir = env_or("STATUSBOARD_STATIC_DIR", "static");

        let cors_origins: Vec<String> = env_or("STATUSBOARD_CORS_ORIGINS", "")
            .split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
            .collect();

        let seed = match env_or("STATUSBOARD_SEED", "true").to_lowercase().as_str() {
            "true" | "1" | "yes" => true,
            "false" | "0" | "no" => false,
            other => return Err(format!("Invalid STATUSBOARD_SEED: {other}")),
        };

        let newsletter_rate_limit: u32 = env_or("STATUSBOARD_NEWSLETTER_RATE_LIMIT", "5")
            .parse()
            .map_err(|e| format!("Invalid STATUSBOARD_NEWSLETTER_RATE_LIMIT: {e}"))?;

        let timeout_secs: u64 = env_or("STATUSBOARD_GENERATION_TIMEOUT_SECS", "30")
            .parse()
            .map_err(|e| format!("Invalid STATUSBOARD_GENERATION_TIMEOUT_SECS: {e}"))?;

        // An empty key counts as unset.
        let gemini = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .map(|api_key| GeminiConfig {
                api_key,
                model: env_or("GEMINI_MODEL", "gemini-2.5-flash"),
                base_url: env_or("GEMINI_BASE_URL", "https://generativelanguage.googleapis.com"),
                timeout: Duration::from_secs(timeout_secs),
            });

        Ok(Config {
            host,
            port,
            log_level,
            max_body_size,
            static_dir,
            cors_origins,
            seed,
            newsletter_rate_limit,
            gemini,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
