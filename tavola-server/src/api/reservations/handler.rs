//! Reservation API Handlers

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use validator::Validate;

use crate::booking;
use crate::core::ServerState;
use crate::db::repository::ReservationRepository;
use crate::utils::{AppError, AppResult, time};
use shared::models::{Reservation, ReservationConfirmation, ReservationCreate};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub date: Option<String>,
}

/// GET /api/reservations - list reservations, newest first
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Reservation>>> {
    let repo = ReservationRepository::new(state.pool.clone());
    let rows = match query.date.as_deref() {
        Some(date) => repo.find_by_date(date).await?,
        None => repo.find_all().await?,
    };
    Ok(Json(rows))
}

/// POST /api/reservations - validate the payload, allocate a table, persist
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ReservationCreate>,
) -> AppResult<(StatusCode, Json<ReservationConfirmation>)> {
    payload.validate().map_err(AppError::from)?;
    booking::validate_slot(&payload.date, &payload.time, time::now_naive())?;

    let repo = ReservationRepository::new(state.pool.clone());
    let taken = repo.tables_taken(&payload.date, &payload.time).await?;
    let table_number = booking::allocate_table(&taken, state.config.total_tables)?;

    let reservation = repo.create(&payload, table_number).await?;
    tracing::info!(
        id = reservation.id,
        table = reservation.table_number,
        date = %reservation.date,
        time = %reservation.time,
        "Reservation confirmed"
    );

    Ok((
        StatusCode::CREATED,
        Json(ReservationConfirmation {
            id: reservation.id,
            table_number: reservation.table_number,
            status: Some(reservation.status),
            message: Some("Reservation confirmed".to_string()),
        }),
    ))
}
