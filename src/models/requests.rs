use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::BookingDraft;

/// Query parameters for the coach search endpoint.
///
/// Every parameter is optional; omitting them all returns the full directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchCoachesQuery {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_availability")]
    pub availability: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub activity: Option<String>,
    #[serde(default)]
    pub limit: Option<u16>,
}

fn default_availability() -> String {
    "all".to_string()
}

/// Request to submit a completed booking draft for a coach
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubmitBookingRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "coach_id", rename = "coachId")]
    pub coach_id: String,
    #[serde(flatten)]
    pub draft: BookingDraft,
}
