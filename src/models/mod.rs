// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{AvailabilityFilter, BookingDraft, BookingRequest, CoachRecord, DraftField, FilterCriteria};
pub use requests::{SearchCoachesQuery, SubmitBookingRequest};
pub use responses::{
    BookingSubmittedResponse, CategoriesResponse, CategoryEntry, ErrorResponse, HealthResponse,
    SearchCoachesResponse,
};
