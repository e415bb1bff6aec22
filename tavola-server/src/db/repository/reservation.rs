//! Reservation Repository

use shared::models::{Reservation, ReservationCreate, reservation::STATUS_CONFIRMED};
use shared::util::now_millis;
use sqlx::SqlitePool;

use super::RepoResult;

#[derive(Clone)]
pub struct ReservationRepository {
    pool: SqlitePool,
}

impl ReservationRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All reservations, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<Reservation>> {
        let rows: Vec<Reservation> =
            sqlx::query_as("SELECT * FROM reservations ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows)
    }

    /// Reservations for one date, newest first
    pub async fn find_by_date(&self, date: &str) -> RepoResult<Vec<Reservation>> {
        let rows: Vec<Reservation> =
            sqlx::query_as("SELECT * FROM reservations WHERE date = ? ORDER BY created_at DESC")
                .bind(date)
                .fetch_all(&self.pool)
                .await?;
        Ok(rows)
    }

    /// Table numbers already taken for a (date, time) slot
    pub async fn tables_taken(&self, date: &str, time: &str) -> RepoResult<Vec<i64>> {
        let rows: Vec<(i64,)> =
            sqlx::query_as("SELECT table_number FROM reservations WHERE date = ? AND time = ?")
                .bind(date)
                .bind(time)
                .fetch_all(&self.pool)
                .await?;
        Ok(rows.into_iter().map(|(t,)| t).collect())
    }

    /// Insert a confirmed reservation at the allocated table
    pub async fn create(
        &self,
        data: &ReservationCreate,
        table_number: i64,
    ) -> RepoResult<Reservation> {
        let created_at = now_millis();
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO reservations \
             (name, email, phone, party_size, date, time, special_requests, table_number, status, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?) \
             RETURNING id",
        )
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(data.party_size)
        .bind(&data.date)
        .bind(&data.time)
        .bind(&data.special_requests)
        .bind(table_number)
        .bind(STATUS_CONFIRMED)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(Reservation {
            id,
            name: data.name.clone(),
            email: data.email.clone(),
            phone: data.phone.clone(),
            party_size: data.party_size,
            date: data.date.clone(),
            time: data.time.clone(),
            special_requests: data.special_requests.clone(),
            table_number,
            status: STATUS_CONFIRMED.to_string(),
            created_at,
        })
    }
}
