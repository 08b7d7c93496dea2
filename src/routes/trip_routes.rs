use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::controllers::trip_controller::TripController;
use crate::dto::common::ApiResponse;
use crate::dto::trip_dto::{CreateTripRequest, TripFilters, UpdateTripRequest};
use crate::models::trip::TripRecord;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_trip_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_trips))
        .route("/", post(create_trip))
        .route("/:id", put(update_trip))
        .route("/:id", delete(delete_trip))
}

async fn list_trips(
    State(state): State<AppState>,
    Query(filters): Query<TripFilters>,
) -> Result<Json<Vec<TripRecord>>, AppError> {
    let controller = TripController::new(state.pool.clone());
    let response = controller.list(filters).await?;
    Ok(Json(response))
}

async fn create_trip(
    State(state): State<AppState>,
    Json(request): Json<CreateTripRequest>,
) -> Result<Json<ApiResponse<TripRecord>>, AppError> {
    let controller = TripController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn update_trip(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateTripRequest>,
) -> Result<Json<ApiResponse<TripRecord>>, AppError> {
    let controller = TripController::new(state.pool.clone());
    let response = controller.update(&id, request).await?;
    Ok(Json(response))
}

async fn delete_trip(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<TripRecord>>, AppError> {
    let controller = TripController::new(state.pool.clone());
    let response = controller.delete(&id).await?;
    Ok(Json(response))
}
