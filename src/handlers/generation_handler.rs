use std::convert::Infallible;

use actix_web::{get, http::header, post, web, HttpResponse};
use futures::stream;
use validator::Validate;

use crate::{
    app_state::AppState,
    auth::SignedInUser,
    errors::AppError,
    models::{domain::GenerationRequest, dto::request::GenerateRequestDto},
    services::generation_orchestrator::GenerationView,
};

pub const SSE_EVENT_NAME: &str = "generation";

#[post("/api/generate")]
pub async fn generate(
    state: web::Data<AppState>,
    _auth: SignedInUser,
    request: web::Json<GenerateRequestDto>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let view = state
        .orchestrator
        .submit(GenerationRequest::from(request))
        .await?;

    Ok(HttpResponse::Ok().json(view))
}

#[get("/api/generation")]
pub async fn get_generation(
    state: web::Data<AppState>,
    _auth: SignedInUser,
) -> HttpResponse {
    HttpResponse::Ok().json(state.orchestrator.snapshot().await)
}

/// Streams the current view, then one event per state change.
#[get("/api/generation/events")]
pub async fn generation_events(
    state: web::Data<AppState>,
    _auth: SignedInUser,
) -> HttpResponse {
    let receiver = state.orchestrator.subscribe();

    let events = stream::unfold((receiver, true), |(mut receiver, first)| async move {
        if !first && receiver.changed().await.is_err() {
            return None;
        }
        let view = receiver.borrow_and_update().clone();
        let frame = web::Bytes::from(sse_frame(&view));
        Some((Ok::<_, Infallible>(frame), (receiver, false)))
    });

    HttpResponse::Ok()
        .content_type("text/event-stream")
        .insert_header((header::CACHE_CONTROL, "no-cache"))
        .streaming(events)
}

pub fn sse_frame(view: &GenerationView) -> String {
    let data = serde_json::to_string(view).unwrap_or_else(|e| {
        log::error!("Failed to serialize generation view: {}", e);
        "{}".to_string()
    });
    format!("event: {}\ndata: {}\n\n", SSE_EVENT_NAME, data)
}
