use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use crate::controllers::report_controller::ReportController;
use crate::dto::report_dto::DelayReportQuery;
use crate::models::report::{DelayReport, OperationalReport};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_report_router() -> Router<AppState> {
    Router::new()
        .route("/delays", get(delay_report))
        .route("/summary", get(operational_report))
}

async fn delay_report(
    State(state): State<AppState>,
    Query(query): Query<DelayReportQuery>,
) -> Result<Json<DelayReport>, AppError> {
    let controller = ReportController::new(state.pool.clone());
    let response = controller.delay_report(query).await?;
    Ok(Json(response))
}

async fn operational_report(
    State(state): State<AppState>,
) -> Result<Json<OperationalReport>, AppError> {
    let controller = ReportController::new(state.pool.clone());
    let response = controller.operational_report().await?;
    Ok(Json(response))
}
