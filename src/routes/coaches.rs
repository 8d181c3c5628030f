use actix_web::{web, HttpResponse, Responder};

use crate::core::categories::CATEGORIES;
use crate::core::search::filter_coaches;
use crate::models::{
    AvailabilityFilter, CategoriesResponse, CategoryEntry, ErrorResponse, FilterCriteria,
    HealthResponse, SearchCoachesQuery, SearchCoachesResponse,
};
use crate::routes::AppState;

/// Configure all coach directory routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/coaches", web::get().to(search_coaches))
        .route("/coaches/{id}", web::get().to(coach_detail))
        .route("/categories", web::get().to(list_categories));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Coach search endpoint
///
/// GET /api/v1/coaches?q=tennis&name=&availability=available&location=nyc&activity=all
///
/// All parameters are optional; filtering preserves directory order and an
/// empty result is a normal response, not an error.
async fn search_coaches(
    state: web::Data<AppState>,
    query: web::Query<SearchCoachesQuery>,
) -> impl Responder {
    let availability = match AvailabilityFilter::parse(&query.availability) {
        Some(availability) => availability,
        None => {
            tracing::info!("Rejected search with availability filter: {}", query.availability);
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Invalid availability filter".to_string(),
                message: "Availability must be one of: all, available, busy".to_string(),
                status_code: 400,
            });
        }
    };

    let criteria = FilterCriteria {
        query: query.q.clone(),
        category: query.category.clone(),
        name: query.name.clone(),
        availability,
        location: query.location.clone(),
        activity: query.activity.clone(),
    };

    let limit = query
        .limit
        .map(|l| l as usize)
        .unwrap_or(state.search_limits.default_limit)
        .min(state.search_limits.max_limit);

    tracing::debug!("Searching coaches with criteria: {:?}", criteria);

    let result = filter_coaches(state.directory.list_coaches(), &criteria);
    let total_results = result.coaches.len();

    let mut coaches = result.coaches;
    coaches.truncate(limit);

    tracing::info!(
        "Returning {} coaches ({} matching, from {} candidates)",
        coaches.len(),
        total_results,
        result.total_candidates
    );

    HttpResponse::Ok().json(SearchCoachesResponse {
        coaches,
        total_results,
        total_candidates: result.total_candidates,
    })
}

/// Coach detail endpoint
///
/// GET /api/v1/coaches/{id}
///
/// An id not present in the directory is a distinct not-found outcome so the
/// caller can show its fallback view.
async fn coach_detail(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();

    match state.directory.find_coach_by_id(&id) {
        Some(coach) => HttpResponse::Ok().json(coach),
        None => {
            tracing::info!("Coach not found: {}", id);
            HttpResponse::NotFound().json(ErrorResponse {
                error: "Coach not found".to_string(),
                message: format!("No coach with id {}", id),
                status_code: 404,
            })
        }
    }
}

/// Category browse endpoint
///
/// GET /api/v1/categories
async fn list_categories() -> impl Responder {
    let categories = CATEGORIES
        .iter()
        .map(|category| CategoryEntry {
            name: category.name.to_string(),
            activities: category.activities.iter().map(|a| a.to_string()).collect(),
        })
        .collect();

    HttpResponse::Ok().json(CategoriesResponse { categories })
}
