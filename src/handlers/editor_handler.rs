use actix_web::{
    get,
    http::header::{ContentDisposition, DispositionParam, DispositionType},
    post, put, web, HttpResponse,
};
use validator::Validate;

use crate::{
    app_state::AppState,
    auth::SignedInUser,
    errors::AppError,
    models::dto::request::{PdfExportRequest, UpdateEditorRequest},
};

#[get("/api/editor")]
pub async fn get_editor(state: web::Data<AppState>, _auth: SignedInUser) -> HttpResponse {
    HttpResponse::Ok().json(state.editor.snapshot().await)
}

#[put("/api/editor")]
pub async fn update_editor(
    state: web::Data<AppState>,
    _auth: SignedInUser,
    request: web::Json<UpdateEditorRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    Ok(HttpResponse::Ok().json(state.editor.update(request).await))
}

#[post("/api/editor/apply")]
pub async fn apply_editor(state: web::Data<AppState>, _auth: SignedInUser) -> HttpResponse {
    HttpResponse::Ok().json(state.editor.apply().await)
}

#[post("/api/editor/clear")]
pub async fn clear_editor(state: web::Data<AppState>, _auth: SignedInUser) -> HttpResponse {
    HttpResponse::Ok().json(state.editor.clear().await)
}

/// Returns the render job; an absent body means portrait.
#[post("/api/export/pdf")]
pub async fn export_pdf(
    state: web::Data<AppState>,
    _auth: SignedInUser,
    request: Option<web::Json<PdfExportRequest>>,
) -> HttpResponse {
    let orientation = request
        .map(|r| r.into_inner().orientation)
        .unwrap_or_default();
    let document = state.editor.export_pdf(orientation).await;
    log::info!(
        "Prepared PDF export '{}' with {} blocks",
        document.settings.filename,
        document.blocks.len()
    );

    HttpResponse::Ok().json(document)
}

#[get("/api/export/word")]
pub async fn export_word(state: web::Data<AppState>, _auth: SignedInUser) -> HttpResponse {
    let document = state.editor.export_word().await;
    log::info!("Prepared Word export '{}'", document.filename);

    HttpResponse::Ok()
        .content_type(format!("{}; charset=utf-8", document.mime_type))
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(document.filename)],
        })
        .body(document.html)
}
