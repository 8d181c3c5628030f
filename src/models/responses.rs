use serde::{Deserialize, Serialize};

use crate::models::domain::CoachRecord;

/// Response for the coach search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchCoachesResponse {
    pub coaches: Vec<CoachRecord>,
    /// Number of coaches matching the criteria, before any limit is applied
    #[serde(rename = "totalResults")]
    pub total_results: usize,
    /// Size of the directory the criteria were applied to
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// One entry in the category browse listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryEntry {
    pub name: String,
    pub activities: Vec<String>,
}

/// Response for the category browse endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub categories: Vec<CategoryEntry>,
}

/// Acknowledgement for a submitted booking request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingSubmittedResponse {
    pub success: bool,
    #[serde(rename = "requestId")]
    pub request_id: String,
    #[serde(rename = "coachId")]
    pub coach_id: String,
    /// False when the notifier ran in log-only mode
    pub delivered: bool,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
