use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::wizard::{step_valid, WizardStep};
use crate::models::{BookingRequest, BookingSubmittedResponse, ErrorResponse, SubmitBookingRequest};
use crate::routes::AppState;

/// Configure the booking submission route
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/bookings", web::post().to(submit_booking));
}

/// Booking submission endpoint
///
/// POST /api/v1/bookings
///
/// Request body:
/// ```json
/// {
///   "coachId": "string",
///   "contactMethod": "email|phone|both",
///   "email": "string",
///   "phone": "string",
///   "studentAge": "child|teen|adult|senior",
///   "frequency": "once-week|twice-week|multiple-week|instructor-guidance|flexible",
///   "timeframe": "morning|afternoon|evening|weekdays|weekends|flexible",
///   "additionalNotes": "string"
/// }
/// ```
///
/// The draft must satisfy every wizard step's validity rules. Delivery
/// failures are surfaced to the caller, whose draft stays intact for a
/// retry with the same payload.
async fn submit_booking(
    state: web::Data<AppState>,
    req: web::Json<SubmitBookingRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let SubmitBookingRequest { coach_id, draft } = req.into_inner();

    let invalid_steps: Vec<u8> = WizardStep::ALL
        .into_iter()
        .filter(|step| !step_valid(*step, &draft))
        .map(WizardStep::number)
        .collect();

    if !invalid_steps.is_empty() {
        tracing::info!(
            "Rejected incomplete booking draft for coach {} (invalid steps: {:?})",
            coach_id,
            invalid_steps
        );
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Incomplete booking draft".to_string(),
            message: format!("Draft is invalid for step(s): {:?}", invalid_steps),
            status_code: 400,
        });
    }

    let coach = match state.directory.find_coach_by_id(&coach_id) {
        Some(coach) => coach,
        None => {
            tracing::info!("Booking requested for unknown coach: {}", coach_id);
            return HttpResponse::NotFound().json(ErrorResponse {
                error: "Coach not found".to_string(),
                message: format!("No coach with id {}", coach_id),
                status_code: 404,
            });
        }
    };

    if !coach.is_available {
        return HttpResponse::Conflict().json(ErrorResponse {
            error: "Coach not available".to_string(),
            message: format!("{} is not currently accepting booking requests", coach.name),
            status_code: 409,
        });
    }

    let request = BookingRequest {
        coach_id: coach.id.clone(),
        draft,
    };

    match state.notifier.submit_booking_request(&request).await {
        Ok(ack) => {
            tracing::info!("Booking request {} sent for coach {}", ack.request_id, coach.id);
            HttpResponse::Ok().json(BookingSubmittedResponse {
                success: true,
                request_id: ack.request_id,
                coach_id: coach.id,
                delivered: ack.delivered,
            })
        }
        Err(e) => {
            tracing::error!("Failed to deliver booking request for coach {}: {}", coach.id, e);
            HttpResponse::BadGateway().json(ErrorResponse {
                error: "Failed to deliver booking request".to_string(),
                message: e.to_string(),
                status_code: 502,
            })
        }
    }
}
