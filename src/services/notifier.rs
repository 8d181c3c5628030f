use crate::models::BookingRequest;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when delivering a booking request
#[derive(Debug, Error)]
pub enum NotifierError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Webhook returned error: {0}")]
    ApiError(String),
}

/// Acknowledgement for a delivered booking request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingAck {
    #[serde(rename = "requestId")]
    pub request_id: String,
    /// False when the notifier ran in log-only mode
    pub delivered: bool,
}

/// Client for the booking notification collaborator.
///
/// Posts completed booking requests to a configured webhook. Without a
/// webhook endpoint it runs in log-only mode: the request is written to the
/// log and acknowledged locally so the rest of the booking flow keeps
/// working in development.
pub struct BookingNotifier {
    endpoint: Option<String>,
    client: Client,
}

impl BookingNotifier {
    /// Create a new notifier; `endpoint = None` selects log-only mode
    pub fn new(endpoint: Option<String>, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self { endpoint, client }
    }

    /// Whether requests actually leave the process
    pub fn delivers(&self) -> bool {
        self.endpoint.is_some()
    }

    /// Deliver a completed booking request and return the acknowledgement.
    ///
    /// A failed delivery leaves the caller's draft untouched; resubmitting
    /// the same request retries it.
    pub async fn submit_booking_request(
        &self,
        request: &BookingRequest,
    ) -> Result<BookingAck, NotifierError> {
        let request_id = uuid::Uuid::new_v4().to_string();

        let endpoint = match self.endpoint.as_deref() {
            Some(endpoint) => endpoint,
            None => {
                tracing::info!(
                    "Booking request {} for coach {} recorded without delivery (log-only mode)",
                    request_id,
                    request.coach_id
                );
                return Ok(BookingAck {
                    request_id,
                    delivered: false,
                });
            }
        };

        let payload = serde_json::json!({
            "requestId": request_id,
            "coachId": request.coach_id,
            "draft": request.draft,
        });

        tracing::debug!("Delivering booking request {} to {}", request_id, endpoint);

        let response = self.client.post(endpoint).json(&payload).send().await?;

        if !response.status().is_success() {
            return Err(NotifierError::ApiError(format!(
                "Failed to deliver booking request: {}",
                response.status()
            )));
        }

        tracing::debug!(
            "Delivered booking request {} for coach {}",
            request_id,
            request.coach_id
        );

        Ok(BookingAck {
            request_id,
            delivered: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BookingDraft;

    fn create_request() -> BookingRequest {
        let mut draft = BookingDraft::default();
        draft.email = "a@b.com".to_string();
        draft.student_age = "adult".to_string();
        draft.frequency = "once-week".to_string();
        draft.timeframe = "morning".to_string();

        BookingRequest {
            coach_id: "1".to_string(),
            draft,
        }
    }

    #[actix_web::test]
    async fn test_log_only_mode_acknowledges_locally() {
        let notifier = BookingNotifier::new(None, 5);
        assert!(!notifier.delivers());

        let ack = notifier
            .submit_booking_request(&create_request())
            .await
            .expect("log-only submission should succeed");

        assert!(!ack.delivered);
        assert!(!ack.request_id.is_empty());
    }

    #[actix_web::test]
    async fn test_each_submission_gets_a_fresh_request_id() {
        let notifier = BookingNotifier::new(None, 5);
        let request = create_request();

        let first = notifier.submit_booking_request(&request).await.unwrap();
        let second = notifier.submit_booking_request(&request).await.unwrap();

        assert_ne!(first.request_id, second.request_id);
    }
}
