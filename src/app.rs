//! Ensamblado del router principal

use axum::{response::Json, routing::get, Router};
use serde_json::json;

use crate::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use crate::routes;
use crate::state::AppState;

/// Construye el router completo de la aplicación
pub fn build_router(state: AppState) -> Router {
    let cors = if state.config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(state.config.cors_origins.clone())
    };

    Router::new()
        .route("/test", get(test_endpoint))
        .nest("/api/routes", routes::route_routes::create_route_router())
        .nest("/api/trips", routes::trip_routes::create_trip_router())
        .nest("/api/reports", routes::report_routes::create_report_router())
        .layer(cors)
        .with_state(state)
}

/// Endpoint de prueba simple
async fn test_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "message": "¡API de puntualidad de buses funcionando correctamente!",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
