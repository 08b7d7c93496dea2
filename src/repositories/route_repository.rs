use sqlx::SqlitePool;

use crate::models::route::{Route, RouteSchedule};
use crate::utils::errors::{AppError, AppResult};

// Fila cruda de la tabla routes; el horario se guarda como columna JSON
#[derive(Debug, sqlx::FromRow)]
struct RouteRow {
    id: String,
    name: String,
    active: bool,
    schedule: String,
}

impl RouteRow {
    fn into_route(self) -> AppResult<Route> {
        let schedule: RouteSchedule = serde_json::from_str(&self.schedule).map_err(|e| {
            AppError::Internal(format!("Horario inválido para la ruta '{}': {}", self.id, e))
        })?;

        Ok(Route {
            id: self.id,
            name: self.name,
            active: self.active,
            schedule,
        })
    }
}

pub struct RouteRepository {
    pool: SqlitePool,
}

impl RouteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> AppResult<Vec<Route>> {
        let rows = sqlx::query_as::<_, RouteRow>(
            "SELECT id, name, active, schedule FROM routes ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(RouteRow::into_route).collect()
    }

    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<Route>> {
        let row = sqlx::query_as::<_, RouteRow>(
            "SELECT id, name, active, schedule FROM routes WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(RouteRow::into_route).transpose()
    }

    pub async fn exists(&self, id: &str) -> AppResult<bool> {
        let result: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM routes WHERE id = ?)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(result.0)
    }

    pub async fn insert(&self, route: &Route) -> AppResult<()> {
        let schedule = serialize_schedule(&route.schedule)?;

        sqlx::query("INSERT INTO routes (id, name, active, schedule) VALUES (?, ?, ?, ?)")
            .bind(&route.id)
            .bind(&route.name)
            .bind(route.active)
            .bind(schedule)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn update(&self, route: &Route) -> AppResult<()> {
        let schedule = serialize_schedule(&route.schedule)?;

        sqlx::query("UPDATE routes SET name = ?, active = ?, schedule = ? WHERE id = ?")
            .bind(&route.name)
            .bind(route.active)
            .bind(schedule)
            .bind(&route.id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn delete(&self, id: &str) -> AppResult<Option<Route>> {
        let Some(route) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        sqlx::query("DELETE FROM routes WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(Some(route))
    }
}

fn serialize_schedule(schedule: &RouteSchedule) -> AppResult<String> {
    serde_json::to_string(schedule)
        .map_err(|e| AppError::Internal(format!("No se pudo serializar el horario: {}", e)))
}
