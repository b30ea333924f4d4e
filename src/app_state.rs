use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    repositories::{JsonFileStore, KeyValueStore},
    services::{
        generation_client::{GeminiClient, TextGenerator},
        generation_orchestrator::GenerationOrchestrator,
        notes_editor::EditorService,
        session_service::SessionService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub session_service: Arc<SessionService>,
    pub orchestrator: Arc<GenerationOrchestrator>,
    pub editor: Arc<EditorService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let store = Arc::new(JsonFileStore::open(&config.storage_path).await?);
        let generator = Arc::new(GeminiClient::from_config(&config)?);

        if !config.has_api_key() {
            log::warn!("No Gemini API key configured; generation requests will fail");
        }

        Self::with_components(config, store, generator).await
    }

    /// Wires the services around caller-supplied storage and model backends.
    pub async fn with_components(
        config: Config,
        store: Arc<dyn KeyValueStore>,
        generator: Arc<dyn TextGenerator>,
    ) -> AppResult<Self> {
        let session_service = Arc::new(SessionService::load(store).await?);
        let editor = Arc::new(EditorService::new());
        let orchestrator = Arc::new(GenerationOrchestrator::new(
            generator,
            Arc::clone(&editor),
            config.validation_message_ttl(),
        ));

        Ok(Self {
            session_service,
            orchestrator,
            editor,
            config: Arc::new(config),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        repositories::InMemoryStore,
        services::{
            generation_client::MockTextGenerator, generation_orchestrator::GenerationState,
        },
    };

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[tokio::test]
    async fn test_with_components_starts_idle_and_signed_out() {
        let state = AppState::with_components(
            Config::test_config(),
            Arc::new(InMemoryStore::new()),
            Arc::new(MockTextGenerator::new()),
        )
        .await
        .unwrap();

        assert_eq!(state.orchestrator.state().await, GenerationState::Idle);
        assert!(state.session_service.current_user().await.is_none());
        assert!(state.editor.snapshot().await.content.is_empty());
    }
}
