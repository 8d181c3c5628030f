use serde::{Deserialize, Serialize};

/// Directory entry describing one bookable coach
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoachRecord {
    pub id: String,
    pub name: String,
    #[serde(rename = "activityType")]
    pub activity_type: String,
    #[serde(rename = "isAvailable", default = "default_true")]
    pub is_available: bool,
    pub location: String,
    pub rating: f64,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

fn default_true() -> bool { true }

/// In-progress booking request assembled across the three wizard steps.
///
/// Every field holds whatever string the caller last wrote to it; values are
/// only checked against the step validity rules when the wizard is asked to
/// advance or submit, never at entry time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingDraft {
    #[serde(rename = "contactMethod", default = "default_contact_method")]
    pub contact_method: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(rename = "studentAge", default)]
    pub student_age: String,
    #[serde(default)]
    pub frequency: String,
    #[serde(default)]
    pub timeframe: String,
    #[serde(rename = "additionalNotes", default)]
    pub additional_notes: String,
}

fn default_contact_method() -> String { "email".to_string() }

impl Default for BookingDraft {
    fn default() -> Self {
        Self {
            contact_method: default_contact_method(),
            email: String::new(),
            phone: String::new(),
            student_age: String::new(),
            frequency: String::new(),
            timeframe: String::new(),
            additional_notes: String::new(),
        }
    }
}

impl BookingDraft {
    /// Overwrite a single field. Accepts any string value.
    pub fn set(&mut self, field: DraftField, value: &str) {
        let value = value.to_string();
        match field {
            DraftField::ContactMethod => self.contact_method = value,
            DraftField::Email => self.email = value,
            DraftField::Phone => self.phone = value,
            DraftField::StudentAge => self.student_age = value,
            DraftField::Frequency => self.frequency = value,
            DraftField::Timeframe => self.timeframe = value,
            DraftField::AdditionalNotes => self.additional_notes = value,
        }
    }
}

/// Identifies one `BookingDraft` field for wizard updates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DraftField {
    ContactMethod,
    Email,
    Phone,
    StudentAge,
    Frequency,
    Timeframe,
    AdditionalNotes,
}

/// Completed booking submission handed to the notification collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    #[serde(rename = "coachId")]
    pub coach_id: String,
    pub draft: BookingDraft,
}

/// Availability tri-state used by the search filters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityFilter {
    #[default]
    All,
    Available,
    Busy,
}

impl AvailabilityFilter {
    /// Parse the wire value; anything outside the tri-state is rejected
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "all" => Some(AvailabilityFilter::All),
            "available" => Some(AvailabilityFilter::Available),
            "busy" => Some(AvailabilityFilter::Busy),
            _ => None,
        }
    }
}

/// Active predicate set for a coach search.
///
/// Every predicate defaults to its always-true value, so
/// `FilterCriteria::default()` is the "no filters active" state and filtering
/// with it returns the whole directory unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Free-text query matched against activity label or name
    pub query: Option<String>,
    /// Category to expand into activity labels; only consulted when no
    /// free-text query is present
    pub category: Option<String>,
    /// Substring filter on the coach name
    pub name: String,
    pub availability: AvailabilityFilter,
    /// Substring filter on the location label
    pub location: String,
    /// Exact activity-type selector; `None` (or "all") matches everything
    pub activity: Option<String>,
}

impl FilterCriteria {
    /// Reset every predicate back to its always-true value
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when no predicate would remove anything from the directory
    pub fn is_unfiltered(&self) -> bool {
        blank(&self.query)
            && blank(&self.category)
            && self.name.is_empty()
            && self.availability == AvailabilityFilter::All
            && self.location.is_empty()
            && self
                .activity
                .as_deref()
                .map_or(true, |a| a.is_empty() || a.eq_ignore_ascii_case("all"))
    }
}

fn blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}
