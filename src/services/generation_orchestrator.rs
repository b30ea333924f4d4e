use std::{sync::Arc, time::Duration};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::{watch, Mutex};

use crate::{
    errors::{AppError, AppResult},
    models::domain::{GenerationRequest, GenerationResult, Source},
    services::{
        generation_client::{TextGenerator, GENERATION_FAILED_MESSAGE},
        notes_editor::EditorService,
        prompt_builder,
    },
};

pub const MISSING_SUBJECT_MESSAGE: &str = "Please select a subject first.";
pub const BUSY_MESSAGE: &str = "A generation is already in progress.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationState {
    Idle,
    Loading,
    Success,
    Error,
}

impl std::fmt::Display for GenerationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationState::Idle => write!(f, "idle"),
            GenerationState::Loading => write!(f, "loading"),
            GenerationState::Success => write!(f, "success"),
            GenerationState::Error => write!(f, "error"),
        }
    }
}

/// What the presentation layer renders after every change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationView {
    pub state: GenerationState,
    pub text: String,
    pub sources: Vec<Source>,
    pub loading: bool,
    pub error: Option<String>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug)]
struct Inner {
    state: GenerationState,
    result: GenerationResult,
    error: Option<String>,
    // Bumped by every submit and reset; stale timers and responses compare against it.
    epoch: u64,
}

impl Inner {
    fn view(&self) -> GenerationView {
        GenerationView {
            state: self.state,
            text: self.result.text.clone(),
            sources: self.result.sources.clone(),
            loading: self.state == GenerationState::Loading,
            error: self.error.clone(),
            updated_at: Utc::now(),
        }
    }
}

fn publish(sender: &watch::Sender<GenerationView>, inner: &Inner) {
    sender.send_replace(inner.view());
}

async fn run_generation(
    generator: Arc<dyn TextGenerator>,
    editor: Arc<EditorService>,
    inner: Arc<Mutex<Inner>>,
    sender: Arc<watch::Sender<GenerationView>>,
    prompt: String,
    epoch: u64,
) -> AppResult<GenerationView> {
    let outcome = generator.generate(&prompt).await;

    let mut inner = inner.lock().await;
    if inner.epoch != epoch {
        log::info!("Discarding generation result after reset");
        return Err(AppError::Conflict(
            "The session was reset while generating.".to_string(),
        ));
    }

    match outcome {
        Ok(result) => {
            editor.load_generated(&result.text).await;
            inner.state = GenerationState::Success;
            inner.result = result;
            inner.error = None;
            publish(&sender, &inner);
            Ok(inner.view())
        }
        Err(e) => {
            log::warn!("Generation failed: {}", e);
            inner.state = GenerationState::Error;
            inner.result = GenerationResult::default();
            inner.error = Some(e.user_message().to_string());
            publish(&sender, &inner);
            Err(e)
        }
    }
}

/// Runs one generation at a time and publishes each state change.
pub struct GenerationOrchestrator {
    generator: Arc<dyn TextGenerator>,
    editor: Arc<EditorService>,
    inner: Arc<Mutex<Inner>>,
    sender: Arc<watch::Sender<GenerationView>>,
    validation_message_ttl: Duration,
}

impl GenerationOrchestrator {
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        editor: Arc<EditorService>,
        validation_message_ttl: Duration,
    ) -> Self {
        let inner = Inner {
            state: GenerationState::Idle,
            result: GenerationResult::default(),
            error: None,
            epoch: 0,
        };
        let (sender, _) = watch::channel(inner.view());

        Self {
            generator,
            editor,
            inner: Arc::new(Mutex::new(inner)),
            sender: Arc::new(sender),
            validation_message_ttl,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<GenerationView> {
        self.sender.subscribe()
    }

    pub async fn snapshot(&self) -> GenerationView {
        self.inner.lock().await.view()
    }

    pub async fn state(&self) -> GenerationState {
        self.inner.lock().await.state
    }

    pub async fn submit(&self, request: GenerationRequest) -> AppResult<GenerationView> {
        let epoch = {
            let mut inner = self.inner.lock().await;

            if inner.state == GenerationState::Loading {
                log::warn!("Ignoring submit while a generation is in flight");
                return Err(AppError::Conflict(BUSY_MESSAGE.to_string()));
            }

            inner.epoch += 1;

            if !request.has_subject() {
                inner.state = GenerationState::Error;
                inner.error = Some(MISSING_SUBJECT_MESSAGE.to_string());
                publish(&self.sender, &inner);
                self.schedule_validation_clear(inner.epoch);
                return Err(AppError::ValidationError(
                    MISSING_SUBJECT_MESSAGE.to_string(),
                ));
            }

            inner.state = GenerationState::Loading;
            inner.result = GenerationResult::default();
            inner.error = None;
            publish(&self.sender, &inner);
            inner.epoch
        };

        log::info!(
            "Generating {:?} for '{}' (semester {}, {}, {})",
            request.mode,
            request.subject,
            request.semester,
            request.note_style,
            request.language
        );

        let prompt = prompt_builder::build(&request);

        // The task outlives a dropped caller, so Loading always resolves.
        let task = tokio::spawn(run_generation(
            Arc::clone(&self.generator),
            Arc::clone(&self.editor),
            Arc::clone(&self.inner),
            Arc::clone(&self.sender),
            prompt,
            epoch,
        ));

        match task.await {
            Ok(outcome) => outcome,
            Err(e) => {
                log::error!("Generation task failed: {}", e);
                let mut inner = self.inner.lock().await;
                if inner.epoch == epoch {
                    inner.state = GenerationState::Error;
                    inner.result = GenerationResult::default();
                    inner.error = Some(GENERATION_FAILED_MESSAGE.to_string());
                    publish(&self.sender, &inner);
                }
                Err(AppError::InternalError(
                    "Generation task did not complete.".to_string(),
                ))
            }
        }
    }

    /// Back to a clean idle state, e.g. on sign-out.
    pub async fn reset(&self) {
        let mut inner = self.inner.lock().await;
        inner.epoch += 1;
        inner.state = GenerationState::Idle;
        inner.result = GenerationResult::default();
        inner.error = None;
        publish(&self.sender, &inner);
    }

    fn schedule_validation_clear(&self, epoch: u64) {
        let inner = Arc::clone(&self.inner);
        let sender = Arc::clone(&self.sender);
        let ttl = self.validation_message_ttl;

        tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            let mut inner = inner.lock().await;
            if inner.epoch == epoch && inner.state == GenerationState::Error {
                inner.state = GenerationState::Idle;
                inner.error = None;
                publish(&sender, &inner);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::domain::{GenerationMode, NoteStyle},
        services::generation_client::MockTextGenerator,
    };

    const TTL: Duration = Duration::from_millis(30);

    fn orchestrator(mock: MockTextGenerator) -> (GenerationOrchestrator, Arc<EditorService>) {
        let editor = Arc::new(EditorService::new());
        (
            GenerationOrchestrator::new(Arc::new(mock), Arc::clone(&editor), TTL),
            editor,
        )
    }

    fn result(text: &str, sources: &[(&str, &str)]) -> GenerationResult {
        GenerationResult {
            text: text.to_string(),
            sources: sources.iter().map(|(u, t)| Source::new(u, t)).collect(),
        }
    }

    fn marketing_request() -> GenerationRequest {
        GenerationRequest::new(GenerationMode::Notes, "MARKETING MANAGEMENT")
            .with_semester(2)
            .with_note_style(NoteStyle::ShortNotes)
            .with_language("Hindi")
            .with_keywords("4Ps")
    }

    #[tokio::test]
    async fn empty_subject_never_reaches_loading_or_the_generator() {
        let mut mock = MockTextGenerator::new();
        mock.expect_generate().never();
        let (orchestrator, _) = orchestrator(mock);
        let mut rx = orchestrator.subscribe();

        let err = orchestrator
            .submit(GenerationRequest::new(GenerationMode::Notes, ""))
            .await
            .unwrap_err();

        assert_eq!(err, AppError::ValidationError(MISSING_SUBJECT_MESSAGE.to_string()));
        rx.changed().await.unwrap();
        let view = rx.borrow_and_update().clone();
        assert_eq!(view.state, GenerationState::Error);
        assert!(!view.loading);
        assert_eq!(view.error.as_deref(), Some(MISSING_SUBJECT_MESSAGE));
    }

    #[tokio::test]
    async fn validation_message_clears_after_ttl() {
        let mut mock = MockTextGenerator::new();
        mock.expect_generate().never();
        let (orchestrator, _) = orchestrator(mock);

        let _ = orchestrator
            .submit(GenerationRequest::new(GenerationMode::Questions, "  "))
            .await;
        assert_eq!(orchestrator.state().await, GenerationState::Error);

        tokio::time::sleep(TTL * 5).await;
        let view = orchestrator.snapshot().await;
        assert_eq!(view.state, GenerationState::Idle);
        assert!(view.error.is_none());
    }

    #[tokio::test]
    async fn successful_submit_stores_result_and_feeds_editor() {
        let mut mock = MockTextGenerator::new();
        mock.expect_generate()
            .withf(|prompt: &str| {
                prompt.contains("MARKETING MANAGEMENT")
                    && prompt.contains("Semester 2")
                    && prompt.contains("4Ps")
                    && prompt.contains("Hindi")
                    && prompt.starts_with("Generate concise, bullet-pointed notes")
            })
            .times(1)
            .returning(|_| Ok(result("T", &[("https://a", "A"), ("https://b", "B")])));
        let (orchestrator, editor) = orchestrator(mock);

        let view = orchestrator.submit(marketing_request()).await.unwrap();

        assert_eq!(view.state, GenerationState::Success);
        assert_eq!(view.text, "T");
        assert_eq!(view.sources.len(), 2);
        assert!(!view.loading);
        assert_eq!(editor.snapshot().await.content, "T");
    }

    #[tokio::test]
    async fn new_result_replaces_previous_result() {
        let mut mock = MockTextGenerator::new();
        let mut calls = 0;
        mock.expect_generate().times(2).returning(move |_| {
            calls += 1;
            if calls == 1 {
                Ok(result("first", &[("a", "A"), ("b", "B")]))
            } else {
                Ok(result("second", &[("c", "C")]))
            }
        });
        let (orchestrator, _) = orchestrator(mock);

        orchestrator.submit(marketing_request()).await.unwrap();
        let view = orchestrator.submit(marketing_request()).await.unwrap();

        assert_eq!(view.text, "second");
        assert_eq!(view.sources, vec![Source::new("c", "C")]);
    }

    #[tokio::test]
    async fn failure_surfaces_user_message_and_clears_old_result() {
        let mut mock = MockTextGenerator::new();
        let mut calls = 0;
        mock.expect_generate().times(2).returning(move |_| {
            calls += 1;
            if calls == 1 {
                Ok(result("old", &[("a", "A")]))
            } else {
                Err(AppError::GenerationError(GENERATION_FAILED_MESSAGE.to_string()))
            }
        });
        let (orchestrator, editor) = orchestrator(mock);

        orchestrator.submit(marketing_request()).await.unwrap();
        let err = orchestrator.submit(marketing_request()).await.unwrap_err();

        assert!(matches!(err, AppError::GenerationError(_)));
        let view = orchestrator.snapshot().await;
        assert_eq!(view.state, GenerationState::Error);
        assert_eq!(view.error.as_deref(), Some(GENERATION_FAILED_MESSAGE));
        assert!(view.text.is_empty());
        assert!(view.sources.is_empty());
        // The editor keeps the last good notes.
        assert_eq!(editor.snapshot().await.content, "old");
    }

    #[tokio::test]
    async fn configuration_error_is_reported_every_time() {
        let mut mock = MockTextGenerator::new();
        mock.expect_generate()
            .times(2)
            .returning(|_| Err(AppError::ConfigurationError("API Key is missing.".to_string())));
        let (orchestrator, _) = orchestrator(mock);

        for _ in 0..2 {
            let err = orchestrator.submit(marketing_request()).await.unwrap_err();
            assert!(matches!(err, AppError::ConfigurationError(_)));
            assert_eq!(
                orchestrator.snapshot().await.error.as_deref(),
                Some("API Key is missing.")
            );
        }
    }

    #[tokio::test]
    async fn reset_returns_to_idle() {
        let mut mock = MockTextGenerator::new();
        mock.expect_generate()
            .returning(|_| Ok(result("notes", &[])));
        let (orchestrator, _) = orchestrator(mock);

        orchestrator.submit(marketing_request()).await.unwrap();
        orchestrator.reset().await;

        let view = orchestrator.snapshot().await;
        assert_eq!(view.state, GenerationState::Idle);
        assert!(view.text.is_empty());
    }

    struct GatedGenerator {
        calls: std::sync::atomic::AtomicUsize,
        release: tokio::sync::Notify,
    }

    #[async_trait::async_trait]
    impl TextGenerator for GatedGenerator {
        async fn generate(&self, _prompt: &str) -> AppResult<GenerationResult> {
            self.calls.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            self.release.notified().await;
            Ok(result("gated", &[]))
        }
    }

    #[tokio::test]
    async fn submit_while_loading_is_rejected_without_a_second_call() {
        let generator = Arc::new(GatedGenerator {
            calls: Default::default(),
            release: tokio::sync::Notify::new(),
        });
        let orchestrator = Arc::new(GenerationOrchestrator::new(
            generator.clone(),
            Arc::new(EditorService::new()),
            TTL,
        ));

        let first = {
            let orchestrator = Arc::clone(&orchestrator);
            tokio::spawn(async move { orchestrator.submit(marketing_request()).await })
        };

        let mut rx = orchestrator.subscribe();
        while !rx.borrow_and_update().loading {
            rx.changed().await.unwrap();
        }

        let err = orchestrator.submit(marketing_request()).await.unwrap_err();
        assert_eq!(err, AppError::Conflict(BUSY_MESSAGE.to_string()));
        assert_eq!(orchestrator.state().await, GenerationState::Loading);

        // notify_one stores a permit if the generator has not parked yet.
        generator.release.notify_one();
        let view = first.await.unwrap().unwrap();

        assert_eq!(view.text, "gated");
        assert_eq!(generator.calls.load(std::sync::atomic::Ordering::SeqCst), 1);
    }

    struct SlowGenerator {
        delay: Duration,
    }

    #[async_trait::async_trait]
    impl TextGenerator for SlowGenerator {
        async fn generate(&self, _prompt: &str) -> AppResult<GenerationResult> {
            tokio::time::sleep(self.delay).await;
            Ok(result("slow notes", &[]))
        }
    }

    #[tokio::test]
    async fn dropped_submit_does_not_wedge_loading() {
        let editor = Arc::new(EditorService::new());
        let orchestrator = GenerationOrchestrator::new(
            Arc::new(SlowGenerator {
                delay: Duration::from_millis(100),
            }),
            Arc::clone(&editor),
            TTL,
        );

        let timed_out =
            tokio::time::timeout(Duration::from_millis(10), orchestrator.submit(marketing_request()))
                .await;
        assert!(timed_out.is_err());
        assert_eq!(orchestrator.state().await, GenerationState::Loading);

        tokio::time::sleep(Duration::from_millis(300)).await;
        assert_eq!(orchestrator.state().await, GenerationState::Success);
        assert_eq!(editor.snapshot().await.content, "slow notes");

        let view = orchestrator.submit(marketing_request()).await.unwrap();
        assert_eq!(view.state, GenerationState::Success);
    }

    #[tokio::test]
    async fn reset_mid_flight_keeps_late_result_out_of_the_editor() {
        let generator = Arc::new(GatedGenerator {
            calls: Default::default(),
            release: tokio::sync::Notify::new(),
        });
        let editor = Arc::new(EditorService::new());
        let orchestrator = Arc::new(GenerationOrchestrator::new(
            generator.clone(),
            Arc::clone(&editor),
            TTL,
        ));

        let first = {
            let orchestrator = Arc::clone(&orchestrator);
            tokio::spawn(async move { orchestrator.submit(marketing_request()).await })
        };

        let mut rx = orchestrator.subscribe();
        while !rx.borrow_and_update().loading {
            rx.changed().await.unwrap();
        }

        // Sign-out path.
        orchestrator.reset().await;
        editor.clear().await;
        generator.release.notify_one();

        let err = first.await.unwrap().unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert!(editor.snapshot().await.content.is_empty());

        let view = orchestrator.snapshot().await;
        assert_eq!(view.state, GenerationState::Idle);
        assert!(view.text.is_empty());
    }

    #[test]
    fn generation_state_display() {
        assert_eq!(GenerationState::Loading.to_string(), "loading");
        assert_eq!(
            serde_json::to_string(&GenerationState::Success).unwrap(),
            "\"success\""
        );
    }
}
