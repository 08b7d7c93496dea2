use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::controllers::route_controller::RouteController;
use crate::dto::common::ApiResponse;
use crate::dto::route_dto::{CreateRouteRequest, UpdateRouteRequest};
use crate::models::route::Route;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_route_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_routes))
        .route("/", post(create_route))
        .route("/:id", put(update_route))
        .route("/:id", delete(delete_route))
}

async fn list_routes(State(state): State<AppState>) -> Result<Json<Vec<Route>>, AppError> {
    let controller = RouteController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn create_route(
    State(state): State<AppState>,
    Json(request): Json<CreateRouteRequest>,
) -> Result<Json<ApiResponse<Route>>, AppError> {
    let controller = RouteController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn update_route(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateRouteRequest>,
) -> Result<Json<ApiResponse<Route>>, AppError> {
    let controller = RouteController::new(state.pool.clone());
    let response = controller.update(&id, request).await?;
    Ok(Json(response))
}

async fn delete_route(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Route>>, AppError> {
    let controller = RouteController::new(state.pool.clone());
    let response = controller.delete(&id).await?;
    Ok(Json(response))
}
