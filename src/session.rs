use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::types::Exchange;

/// In-memory conversation logs, one per session id. Logs live for the
/// process lifetime only; a session's log is created lazily on first append
/// and discarded wholesale on clear.
#[derive(Debug, Default)]
pub struct SessionStore {
    logs: RwLock<HashMap<String, Vec<Exchange>>>,
}

impl SessionStore {
    pub async fn append(&self, session_id: &str, exchange: Exchange) {
        let mut logs = self.logs.write().await;
        logs.entry(session_id.to_owned()).or_default().push(exchange);
    }

    /// Drops the session's log and reports how many exchanges it held.
    /// Clearing an absent or empty log is a no-op returning 0.
    pub async fn clear(&self, session_id: &str) -> u64 {
        let mut logs = self.logs.write().await;
        logs.remove(session_id)
            .map(|log| log.len() as u64)
            .unwrap_or(0)
    }

    /// Snapshot of the session's exchanges in insertion order.
    pub async fn history(&self, session_id: &str) -> Vec<Exchange> {
        self.logs
            .read()
            .await
            .get(session_id)
            .cloned()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use crate::types::Exchange;

    use super::SessionStore;

    fn exchange(user: &str, bot: &str) -> Exchange {
        Exchange {
            user: user.to_owned(),
            bot: bot.to_owned(),
            timestamp: Utc::now(),
        }
    }

    #[tokio::test]
    async fn append_preserves_insertion_order() {
        let store = SessionStore::default();
        store.append("s1", exchange("first", "a")).await;
        store.append("s1", exchange("second", "b")).await;

        let history = store.history("s1").await;
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].user, "first");
        assert_eq!(history[1].user, "second");
    }

    #[tokio::test]
    async fn clear_empties_log_and_reports_count() {
        let store = SessionStore::default();
        store.append("s1", exchange("q", "a")).await;
        store.append("s1", exchange("q2", "a2")).await;

        assert_eq!(store.clear("s1").await, 2);
        assert!(store.history("s1").await.is_empty());
    }

    #[tokio::test]
    async fn clear_is_idempotent() {
        let store = SessionStore::default();
        assert_eq!(store.clear("missing").await, 0);
        store.append("s1", exchange("q", "a")).await;
        store.clear("s1").await;
        assert_eq!(store.clear("s1").await, 0);
    }

    #[tokio::test]
    async fn sessions_are_isolated() {
        let store = SessionStore::default();
        store.append("s1", exchange("from s1", "a")).await;
        store.append("s2", exchange("from s2", "b")).await;

        store.clear("s1").await;
        assert!(store.history("s1").await.is_empty());
        assert_eq!(store.history("s2").await.len(), 1);
    }
}
