//! Newsletter API Handlers

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::core::ServerState;
use crate::db::repository::{RepoError, SubscriberRepository};
use crate::utils::{AppError, AppResult, ErrorCode};
use shared::models::{NewsletterSignup, SignupReceipt};

/// POST /api/newsletter - subscribe an email address
pub async fn signup(
    State(state): State<ServerState>,
    Json(payload): Json<NewsletterSignup>,
) -> AppResult<(StatusCode, Json<SignupReceipt>)> {
    payload
        .validate()
        .map_err(|_| AppError::validation("Invalid email address."))?;

    let repo = SubscriberRepository::new(state.pool.clone());
    match repo.create(&payload).await {
        Ok(subscriber) => {
            tracing::info!(id = subscriber.id, "Newsletter signup");
            Ok((StatusCode::CREATED, Json(SignupReceipt { ok: true })))
        }
        Err(RepoError::Duplicate(_)) => Err(AppError::new(ErrorCode::AlreadySubscribed)),
        Err(e) => Err(e.into()),
    }
}
