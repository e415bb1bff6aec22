//! Newsletter Subscriber Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Newsletter subscriber entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Subscriber {
    pub id: i64,
    pub email: String,
    pub consent: bool,
    pub created_at: i64,
}

/// Newsletter signup payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewsletterSignup {
    #[validate(email)]
    pub email: String,
    #[serde(default = "default_consent")]
    pub consent: bool,
}

fn default_consent() -> bool {
    true
}

/// Success body for a newsletter signup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupReceipt {
    pub ok: bool,
}
