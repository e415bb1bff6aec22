//! Newsletter Subscriber Repository

use shared::models::{NewsletterSignup, Subscriber};
use shared::util::now_millis;
use sqlx::SqlitePool;

use super::RepoResult;

#[derive(Clone)]
pub struct SubscriberRepository {
    pool: SqlitePool,
}

impl SubscriberRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a subscriber; a repeated email surfaces as
    /// [`super::RepoError::Duplicate`] via the UNIQUE constraint
    pub async fn create(&self, signup: &NewsletterSignup) -> RepoResult<Subscriber> {
        let created_at = now_millis();
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO subscribers (email, consent, created_at) VALUES (?, ?, ?) RETURNING id",
        )
        .bind(&signup.email)
        .bind(signup.consent)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(Subscriber {
            id,
            email: signup.email.clone(),
            consent: signup.consent,
            created_at,
        })
    }

    /// Look up a subscriber by email
    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<Subscriber>> {
        let row: Option<Subscriber> =
            sqlx::query_as("SELECT * FROM subscribers WHERE email = ? LIMIT 1")
                .bind(email)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row)
    }
}
