use actix_cors::Cors;
use actix_web::{error, http::StatusCode, middleware, web, App, HttpResponse, HttpServer};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use skedy_algo::config::{LoggingSettings, Settings};
use skedy_algo::routes::{self, AppState, SearchLimits};
use skedy_algo::services::{BookingNotifier, CoachDirectory, StaticDirectory};

/// JSON error response for JSON payload errors
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST))
            .content_type("application/json")
            .body(serde_json::to_string(self).unwrap())
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, _req: &actix_web::HttpRequest) -> actix_web::Error {
    JsonError {
        error: "invalid_query".to_string(),
        message: format!("Invalid query: {}", err),
        status_code: 400,
    }
    .into()
}

fn init_logging(logging: &LoggingSettings) {
    // RUST_LOG wins over the configured level when set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    init_logging(&settings.logging);

    info!("Starting Skedy Algo booking service...");
    info!("Configuration loaded successfully");

    // Build the coach directory
    let directory: Arc<dyn CoachDirectory> = match settings.directory.seed_path.as_deref() {
        Some(path) => {
            let directory = StaticDirectory::from_path(path).unwrap_or_else(|e| {
                error!("Failed to load coach directory from {}: {}", path, e);
                panic!("Directory error: {}", e);
            });
            info!("Coach directory loaded from {} ({} coaches)", path, directory.len());
            Arc::new(directory)
        }
        None => {
            let directory = StaticDirectory::with_seed_data();
            info!("Coach directory using built-in seed data ({} coaches)", directory.len());
            Arc::new(directory)
        }
    };

    // Initialize the booking notifier
    let notifier = Arc::new(BookingNotifier::new(
        settings.booking.webhook_url.clone(),
        settings.booking.request_timeout_secs,
    ));

    match &settings.booking.webhook_url {
        Some(url) => info!("Booking notifier delivering to {}", url),
        None => info!("Booking notifier running in log-only mode"),
    }

    // Build application state
    let app_state = AppState {
        directory,
        notifier,
        search_limits: SearchLimits {
            default_limit: settings.search.default_limit as usize,
            max_limit: settings.search.max_limit as usize,
        },
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
