use actix_web::{web, FromRequest, HttpRequest};
use futures::future::LocalBoxFuture;

use crate::{app_state::AppState, errors::AppError, models::domain::User};

/// Extractor for handlers that need a signed-in user.
pub struct SignedInUser(pub User);

impl FromRequest for SignedInUser {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let state = req.app_data::<web::Data<AppState>>().cloned();

        Box::pin(async move {
            let state = state
                .ok_or_else(|| AppError::InternalError("Application state not configured".to_string()))?;

            state
                .session_service
                .current_user()
                .await
                .map(SignedInUser)
                .ok_or_else(|| AppError::Unauthorized("Please sign in first.".to_string()))
        })
    }
}
