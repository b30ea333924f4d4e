use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    auth::SignedInUser,
    errors::AppError,
    models::dto::{
        request::LoginRequest,
        response::{MessageResponse, UserResponse},
    },
};

#[post("/auth/login")]
pub async fn login(
    state: web::Data<AppState>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let user = state
        .session_service
        .sign_in(&request.email, &request.password)
        .await?;
    let theme = state.session_service.theme().await;

    Ok(HttpResponse::Ok().json(UserResponse { user, theme }))
}

/// Signs out and drops the generated notes, as the UI does.
#[post("/auth/logout")]
pub async fn logout(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    state.session_service.sign_out().await?;
    state.orchestrator.reset().await;
    state.editor.clear().await;

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Signed out".to_string(),
    }))
}

#[get("/api/me")]
pub async fn me(
    state: web::Data<AppState>,
    auth: SignedInUser,
) -> Result<HttpResponse, AppError> {
    let theme = state.session_service.theme().await;
    Ok(HttpResponse::Ok().json(UserResponse { user: auth.0, theme }))
}
