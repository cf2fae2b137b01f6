use std::{sync::Arc, time::Duration};

use healthchat::{
    config::AppConfig,
    http::{self, AppState},
    model::{GeminiProvider, MockModelProvider, ModelProvider},
    orchestrator::ChatOrchestrator,
    safety::SafetyPolicy,
    session::SessionStore,
};
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let model = build_model_provider(&config)?;
    let sessions = Arc::new(SessionStore::default());
    let safety = SafetyPolicy::new(config.blocked_keywords.clone());

    let orchestrator = Arc::new(ChatOrchestrator::new(model, sessions.clone(), safety));

    let app = http::router(AppState {
        orchestrator,
        sessions,
    });
    let listener = TcpListener::bind(config.http_bind).await?;
    info!("HealthChat HTTP API listening on {}", config.http_bind);

    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .compact()
        .init();
}

fn build_model_provider(config: &AppConfig) -> anyhow::Result<Arc<dyn ModelProvider>> {
    let timeout = Duration::from_secs(config.request_timeout_secs);
    match config.model_provider.as_str() {
        "mock" => Ok(Arc::new(MockModelProvider)),
        "gemini" => {
            // Forced Gemini builds even without a key; the API rejects the
            // first call and the failure shows up in the chat reply.
            let api_key = config.gemini_api_key.clone().unwrap_or_default();
            Ok(Arc::new(GeminiProvider::new(
                api_key,
                config.gemini_model.clone(),
                timeout,
            )?))
        }
        _ => {
            if let Some(api_key) = config.gemini_api_key.clone() {
                Ok(Arc::new(GeminiProvider::new(
                    api_key,
                    config.gemini_model.clone(),
                    timeout,
                )?))
            } else {
                warn!("GEMINI_API_KEY not set; using mock model provider");
                Ok(Arc::new(MockModelProvider))
            }
        }
    }
}
