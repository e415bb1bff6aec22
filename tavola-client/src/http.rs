//! HTTP client for the booking service API

use crate::{ClientConfig, ClientError, ClientResult, FALLBACK_FAILURE_MESSAGE};
use reqwest::Client;
use serde::de::DeserializeOwned;
use shared::{
    ErrorBody, NewsletterSignup, Reservation, ReservationConfirmation, ReservationCreate,
    SignupReceipt,
};

/// HTTP client for making requests to the booking service
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Make a GET request
    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).query(query).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Interpret the HTTP response
    ///
    /// Success bodies parse into `T`. Failure bodies are read leniently: a
    /// missing, empty, or malformed `error` field degrades to
    /// [`FALLBACK_FAILURE_MESSAGE`] rather than an empty message.
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.error)
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| FALLBACK_FAILURE_MESSAGE.to_string());
            return Err(ClientError::Service { message });
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    // ========== Reservations API ==========

    /// Create a reservation
    pub async fn create_reservation(
        &self,
        payload: &ReservationCreate,
    ) -> ClientResult<ReservationConfirmation> {
        self.post("/api/reservations", payload).await
    }

    /// List reservations, newest first, optionally filtered by date
    pub async fn list_reservations(&self, date: Option<&str>) -> ClientResult<Vec<Reservation>> {
        match date {
            Some(d) => self.get("/api/reservations", &[("date", d)]).await,
            None => self.get("/api/reservations", &[]).await,
        }
    }

    // ========== Newsletter API ==========

    /// Subscribe an email address to the newsletter
    pub async fn newsletter_signup(&self, signup: &NewsletterSignup) -> ClientResult<SignupReceipt> {
        self.post("/api/newsletter", signup).await
    }
}
