use actix_web::{get, put, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{
        request::ThemeRequest,
        response::{CatalogDto, ThemeResponse},
    },
};

#[get("/health")]
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "generation": if state.config.has_api_key() { "configured" } else { "missing_api_key" }
    }))
}

#[get("/api/catalog")]
pub async fn get_catalog() -> HttpResponse {
    HttpResponse::Ok().json(CatalogDto::build())
}

#[get("/api/preferences/theme")]
pub async fn get_theme(state: web::Data<AppState>) -> HttpResponse {
    let theme = state.session_service.theme().await;
    HttpResponse::Ok().json(ThemeResponse { theme })
}

#[put("/api/preferences/theme")]
pub async fn set_theme(
    state: web::Data<AppState>,
    request: web::Json<ThemeRequest>,
) -> Result<HttpResponse, AppError> {
    let theme = state.session_service.set_theme(request.theme).await?;
    Ok(HttpResponse::Ok().json(ThemeResponse { theme }))
}

#[post("/api/preferences/theme/toggle")]
pub async fn toggle_theme(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let theme = state.session_service.toggle_theme().await?;
    Ok(HttpResponse::Ok().json(ThemeResponse { theme }))
}
