use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, warn};

use crate::{
    model::{ModelError, ModelProvider, ModelRequest},
    safety::SafetyPolicy,
    session::SessionStore,
    types::{ChatReply, Exchange},
};

/// Shown in place of a generated answer when the safety policy matches.
pub const REFUSAL_TEXT: &str = "⚠️ Sorry, I cannot provide answers about medications or medical procedures. Please consult a healthcare professional.";

pub struct ChatOrchestrator {
    model: Arc<dyn ModelProvider>,
    sessions: Arc<SessionStore>,
    safety: SafetyPolicy,
}

impl ChatOrchestrator {
    pub fn new(
        model: Arc<dyn ModelProvider>,
        sessions: Arc<SessionStore>,
        safety: SafetyPolicy,
    ) -> Self {
        Self {
            model,
            sessions,
            safety,
        }
    }

    /// Runs one send event to completion. A non-empty query always yields
    /// exactly one appended exchange, whether the model answered, the query
    /// was refused, or the completion failed. An empty query is a no-op.
    pub async fn handle_send(&self, session_id: &str, content: &str) -> Option<ChatReply> {
        if content.is_empty() {
            return None;
        }

        let safety_flags = self.safety.validate_query(content);
        let bot = if safety_flags.is_empty() {
            let request = ModelRequest {
                prompt: build_prompt(content),
            };
            match self.model.complete(request).await {
                Ok(text) => text,
                Err(error) => {
                    warn!(?error, "model completion failed");
                    format_generation_failure(&error)
                }
            }
        } else {
            debug!(?safety_flags, "query blocked by safety policy");
            REFUSAL_TEXT.to_owned()
        };

        let exchange = Exchange {
            user: content.to_owned(),
            bot,
            timestamp: Utc::now(),
        };
        self.sessions.append(session_id, exchange.clone()).await;

        Some(ChatReply {
            exchange,
            safety_flags,
        })
    }

    pub async fn handle_clear(&self, session_id: &str) -> u64 {
        self.sessions.clear(session_id).await
    }
}

fn build_prompt(query: &str) -> String {
    format!(
        "You are a friendly and helpful health assistant.\n\
         - Explain in simple, easy-to-understand language.\n\
         - Never give instructions to take medicine, diagnose conditions, or replace a doctor.\n\
         - If asked about medication or serious symptoms, politely tell the user to consult a healthcare professional.\n\
         \n\
         User question: \"{query}\"\n\
         Friendly response:"
    )
}

/// UI-facing rendering of a completion failure. Kept out of the model layer
/// so providers report typed errors and only the chat surface decides the
/// wording.
fn format_generation_failure(error: &ModelError) -> String {
    format!("⚠️ Error: {error}")
}
