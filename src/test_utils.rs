#[cfg(test)]
pub mod fixtures {
    use std::sync::Arc;

    use async_trait::async_trait;

    use crate::{
        app_state::AppState,
        config::Config,
        errors::AppResult,
        models::domain::{GenerationResult, Source},
        repositories::InMemoryStore,
        services::generation_client::TextGenerator,
    };

    /// Generator that answers every prompt with the same outcome.
    pub struct StubGenerator {
        outcome: AppResult<GenerationResult>,
    }

    impl StubGenerator {
        pub fn returning(outcome: AppResult<GenerationResult>) -> Self {
            Self { outcome }
        }
    }

    #[async_trait]
    impl TextGenerator for StubGenerator {
        async fn generate(&self, _prompt: &str) -> AppResult<GenerationResult> {
            self.outcome.clone()
        }
    }

    /// A result with text "T" and two citations.
    pub fn test_result() -> GenerationResult {
        GenerationResult {
            text: "T".to_string(),
            sources: vec![
                Source::new("https://example.com/4ps", "The 4Ps of Marketing"),
                Source::new("https://example.com/mix", "Marketing Mix"),
            ],
        }
    }

    pub async fn test_state_with(generator: Arc<dyn TextGenerator>) -> AppState {
        AppState::with_components(Config::test_config(), Arc::new(InMemoryStore::new()), generator)
            .await
            .expect("in-memory state should build")
    }

    pub async fn test_state() -> AppState {
        test_state_with(Arc::new(StubGenerator::returning(Ok(test_result())))).await
    }

    pub async fn signed_in_state_with(generator: Arc<dyn TextGenerator>) -> AppState {
        let state = test_state_with(generator).await;
        state
            .session_service
            .sign_in("student@example.com", "password")
            .await
            .expect("mock sign-in accepts any credentials");
        state
    }

    pub async fn signed_in_state() -> AppState {
        signed_in_state_with(Arc::new(StubGenerator::returning(Ok(test_result())))).await
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[tokio::test]
    async fn test_fixtures_signed_in_state() {
        let state = signed_in_state().await;
        let user = state.session_service.current_user().await.unwrap();
        assert_eq!(user.name, "student");
        assert_eq!(user.email, "student@example.com");
    }

    #[test]
    fn test_fixtures_test_result() {
        let result = test_result();
        assert_eq!(result.text, "T");
        assert_eq!(result.sources.len(), 2);
    }
}
