use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::session::Session;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The session is the only mutable piece. Handlers never mutate it in place:
/// they `snapshot()` the current value, derive a new one, and `replace()` it.
/// The lock exists because the HTTP server is technically concurrent; the
/// design remains one logical session with one logical owner.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    pub config: Config,
    session: Arc<RwLock<Session>>,
}

impl AppState {
    pub fn new(llm: LlmClient, config: Config) -> Self {
        Self {
            llm,
            config,
            session: Arc::new(RwLock::new(Session::new())),
        }
    }

    /// Returns a copy of the current session value.
    pub async fn snapshot(&self) -> Session {
        self.session.read().await.clone()
    }

    /// Installs a new session value, replacing the previous one wholesale.
    pub async fn replace(&self, next: Session) {
        *self.session.write().await = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;

    fn test_state() -> AppState {
        let config = Config {
            anthropic_api_key: "test-key".to_string(),
            firecrawl_api_key: "test-key".to_string(),
            port: 0,
            rust_log: "info".to_string(),
        };
        AppState::new(LlmClient::new(config.anthropic_api_key.clone()), config)
    }

    #[tokio::test]
    async fn test_replace_swaps_the_whole_session() {
        let state = test_state();
        let before = state.snapshot().await;

        let next = Session {
            job_title: "Data Engineer".to_string(),
            ..before.clone()
        };
        state.replace(next).await;

        let after = state.snapshot().await;
        assert_eq!(after.job_title, "Data Engineer");
        assert_eq!(after.id, before.id);
    }
}
