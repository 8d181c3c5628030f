// Route exports
pub mod bookings;
pub mod coaches;

use crate::services::{BookingNotifier, CoachDirectory};
use actix_web::web;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<dyn CoachDirectory>,
    pub notifier: Arc<BookingNotifier>,
    pub search_limits: SearchLimits,
}

/// Result-set caps applied after filtering, preserving order
#[derive(Debug, Clone, Copy)]
pub struct SearchLimits {
    pub default_limit: usize,
    pub max_limit: usize,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(coaches::configure)
            .configure(bookings::configure),
    );
}
