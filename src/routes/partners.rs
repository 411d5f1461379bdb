use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{SearchPartnersRequest, SearchPartnersResponse, StylesResponse, HealthResponse, ErrorResponse};
use crate::services::{PartnerDirectory, PartnerSearch, StyleCatalog};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<dyn PartnerDirectory>,
    pub styles: Arc<StyleCatalog>,
    pub search: PartnerSearch,
}

/// Configure all partner-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/partners/search", web::post().to(search_partners))
        .route("/styles", web::get().to(list_styles));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Search partners endpoint
///
/// POST /api/v1/partners/search
///
/// Request body:
/// ```json
/// {
///   "requesterId": "string",
///   "search": "string",
///   "style": "Salsa",
///   "gender": "Kadın",
///   "level": "Orta"
/// }
/// ```
///
/// A failed backend fetch still answers 200 with an empty list and `error` set.
async fn search_partners(
    state: web::Data<AppState>,
    req: web::Json<SearchPartnersRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for search request: field_errors={:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let filters = match req.filters() {
        Ok(filters) => filters,
        Err(message) => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Invalid filter".to_string(),
                message,
                status_code: 400,
            });
        }
    };

    let requester_id = req.requester_id.as_deref();

    tracing::info!("Searching partners for requester: {:?}, filters: {:?}", requester_id, filters);

    let styles = state.styles.dictionary(state.directory.as_ref()).await;

    let outcome = state
        .search
        .search(state.directory.as_ref(), &styles, requester_id, &filters)
        .await;

    let response = SearchPartnersResponse {
        total_results: outcome.partners.len(),
        total_candidates: outcome.total_candidates,
        partners: outcome.partners,
        error: outcome.error,
    };

    tracing::info!(
        "Returning {} partners for requester {:?} (from {} candidates)",
        response.total_results,
        requester_id,
        response.total_candidates
    );

    HttpResponse::Ok().json(response)
}

/// List the dance styles of the current session
///
/// GET /api/v1/styles
async fn list_styles(state: web::Data<AppState>) -> impl Responder {
    let styles = state.styles.dictionary(state.directory.as_ref()).await;

    HttpResponse::Ok().json(StylesResponse {
        styles: styles.entries().to_vec(),
    })
}
