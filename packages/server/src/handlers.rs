//! HTTP handler functions for the well map API.

use actix_web::{HttpResponse, web};
use well_map_database::queries;
use well_map_geojson::collect_features;
use well_map_server_models::ApiHealth;

use crate::AppState;

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/wells`
///
/// Returns every well with its stimulation stages as a GeoJSON
/// `FeatureCollection`. Any query or row-decode failure fails the whole
/// request; there is no partial-result mode, since a FeatureCollection
/// with silently dropped or zeroed wells is worse for map consumers than
/// a visible error.
pub async fn wells(state: web::Data<AppState>) -> HttpResponse {
    match queries::well_stimulation_rows(state.db.as_ref()).await {
        Ok(rows) => HttpResponse::Ok().json(collect_features(&rows)),
        Err(e) => {
            log::error!("Failed to load wells: {e}");
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to load wells"
            }))
        }
    }
}
