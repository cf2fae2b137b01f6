use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One completed chat turn: the question as submitted and the reply shown
/// for it. Never mutated after being appended to a session log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exchange {
    pub user: String,
    pub bot: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    pub exchange: Exchange,
    pub safety_flags: Vec<String>,
}
