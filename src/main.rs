use actix_cors::Cors;
use actix_web::{web, App, HttpServer, HttpResponse, middleware, error, http::StatusCode};
use partner_match::config::{LoggingSettings, Settings};
use partner_match::core::Ranker;
use partner_match::models::ScoringWeights;
use partner_match::routes::{self, partners::AppState};
use partner_match::services::{AppwriteCollections, AppwriteDirectory, PartnerSearch, StyleCatalog};
use std::sync::Arc;
use tracing::{info, error};
use tracing_subscriber::EnvFilter;

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
            .json(self)
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

/// RUST_LOG wins over the configured level when set
fn init_logging(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    init_logging(&settings.logging);

    info!("Starting partner match service...");

    let collections = AppwriteCollections {
        users: settings.collection.users,
        dance_styles: settings.collection.dance_styles,
    };

    let directory = AppwriteDirectory::new(
        settings.backend.endpoint,
        settings.backend.api_key,
        settings.backend.project_id,
        settings.backend.database_id,
        collections,
        settings.search.candidate_roles.clone(),
    )
    .map_err(|e| {
        error!("Failed to create Appwrite client: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
    })?;

    info!("Appwrite client initialized");

    let styles_ttl = settings.styles.ttl_secs.unwrap_or(3600);
    let styles = Arc::new(StyleCatalog::new(styles_ttl));

    info!("Style catalog initialized (TTL: {}s)", styles_ttl);

    let weights = ScoringWeights::from(&settings.scoring.weights);
    let page_size = settings.search.page_size.unwrap_or(PartnerSearch::DEFAULT_PAGE_SIZE);
    let search = PartnerSearch::new(Ranker::new(weights), page_size);

    info!("Partner search initialized with weights: {:?}, page size: {}", weights, search.page_size());

    let app_state = AppState {
        directory: Arc::new(directory),
        styles,
        search,
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
