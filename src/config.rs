use std::{env, net::SocketAddr};

use crate::safety::DEFAULT_BLOCKED_KEYWORDS;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub http_bind: SocketAddr,
    pub model_provider: String,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub request_timeout_secs: u64,
    pub blocked_keywords: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT").unwrap_or_else(|_| "8080".to_owned());
        let http_bind = env::var("HTTP_BIND").unwrap_or_else(|_| format!("0.0.0.0:{port}"));
        let http_bind = http_bind.parse()?;

        let blocked_keywords = match env::var("BLOCKED_KEYWORDS") {
            Ok(raw) => parse_keywords(&raw),
            Err(_) => DEFAULT_BLOCKED_KEYWORDS
                .iter()
                .map(|keyword| (*keyword).to_owned())
                .collect(),
        };

        Ok(Self {
            http_bind,
            model_provider: env::var("MODEL_PROVIDER").unwrap_or_else(|_| "auto".to_owned()),
            gemini_api_key: env::var("GEMINI_API_KEY").ok(),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-2.0-flash-001".to_owned()),
            request_timeout_secs: env_u64("REQUEST_TIMEOUT_SECS", 30),
            blocked_keywords,
        })
    }
}

fn env_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|raw| raw.trim().parse::<u64>().ok())
        .unwrap_or(default)
}

fn parse_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|keyword| !keyword.is_empty())
        .map(str::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::parse_keywords;

    #[test]
    fn splits_trims_and_lowercases() {
        assert_eq!(
            parse_keywords("Dose, Ibuprofen ,surgery"),
            vec!["dose", "ibuprofen", "surgery"]
        );
    }

    #[test]
    fn drops_empty_entries() {
        assert_eq!(parse_keywords("dose,,  ,drug"), vec!["dose", "drug"]);
        assert!(parse_keywords("").is_empty());
    }
}
