use sqlx::SqlitePool;
use validator::Validate;

use crate::dto::common::ApiResponse;
use crate::dto::route_dto::{CreateRouteRequest, UpdateRouteRequest};
use crate::models::route::Route;
use crate::repositories::route_repository::RouteRepository;
use crate::utils::errors::{conflict_error, not_found_error, AppResult};

pub struct RouteController {
    repository: RouteRepository,
}

impl RouteController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: RouteRepository::new(pool),
        }
    }

    pub async fn list(&self) -> AppResult<Vec<Route>> {
        self.repository.find_all().await
    }

    pub async fn create(&self, request: CreateRouteRequest) -> AppResult<ApiResponse<Route>> {
        request.validate()?;

        // El id de la ruta es la clave estable: no puede repetirse
        if self.repository.exists(&request.id).await? {
            return Err(conflict_error("Ruta", "id", &request.id));
        }

        let route = Route {
            id: request.id,
            name: request.name,
            active: request.active.unwrap_or(true),
            schedule: request.schedule,
        };
        self.repository.insert(&route).await?;

        Ok(ApiResponse::success_with_message(
            route,
            "Ruta creada exitosamente".to_string(),
        ))
    }

    pub async fn update(
        &self,
        id: &str,
        request: UpdateRouteRequest,
    ) -> AppResult<ApiResponse<Route>> {
        request.validate()?;

        let mut route = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Ruta", id))?;

        if let Some(name) = request.name {
            route.name = name;
        }
        if let Some(active) = request.active {
            route.active = active;
        }
        if let Some(schedule) = request.schedule {
            route.schedule = schedule;
        }

        self.repository.update(&route).await?;

        Ok(ApiResponse::success_with_message(
            route,
            "Ruta actualizada exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: &str) -> AppResult<ApiResponse<Route>> {
        let removed = self
            .repository
            .delete(id)
            .await?
            .ok_or_else(|| not_found_error("Ruta", id))?;

        Ok(ApiResponse::success_with_message(
            removed,
            "Ruta eliminada exitosamente".to_string(),
        ))
    }
}
