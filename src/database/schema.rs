//! Esquema de la base de datos
//!
//! Crea las tablas si no existen y siembra el conjunto fijo de rutas la
//! primera vez que la base está vacía, como hace el sistema en producción.

use sqlx::SqlitePool;

use crate::models::route::{Route, RouteSchedule, ScheduleSlot, ShiftSchedule};
use crate::repositories::route_repository::RouteRepository;
use crate::utils::errors::AppResult;

pub async fn initialize(pool: &SqlitePool) -> AppResult<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS routes (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            active INTEGER NOT NULL DEFAULT 1,
            schedule TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS trips (
            id TEXT PRIMARY KEY,
            route_id TEXT NOT NULL,
            route_name TEXT NOT NULL,
            date TEXT NOT NULL,
            shift TEXT NOT NULL,
            scheduled_departure TEXT,
            scheduled_arrival TEXT,
            actual_departure TEXT,
            actual_arrival TEXT,
            departure_delay_minutes INTEGER NOT NULL DEFAULT 0,
            arrival_delay_minutes INTEGER NOT NULL DEFAULT 0,
            notes TEXT NOT NULL DEFAULT '',
            created_at TEXT NOT NULL,
            updated_at TEXT,
            FOREIGN KEY (route_id) REFERENCES routes (id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM routes")
        .fetch_one(pool)
        .await?;

    if count == 0 {
        let routes = default_routes();
        let repository = RouteRepository::new(pool.clone());
        for route in &routes {
            repository.insert(route).await?;
        }
        tracing::info!("🚌 Rutas por defecto sembradas: {}", routes.len());
    }

    Ok(())
}

fn slot_arrival(arrival: &str, min: &str, max: &str) -> ScheduleSlot {
    ScheduleSlot::ArrivalAtHub {
        arrival_at_hub: arrival.to_string(),
        window_min: Some(min.to_string()),
        window_max: Some(max.to_string()),
    }
}

fn slot_departure(departure: &str, min: &str, max: &str) -> ScheduleSlot {
    ScheduleSlot::DepartureFromHub {
        departure_from_hub: departure.to_string(),
        window_min: Some(min.to_string()),
        window_max: Some(max.to_string()),
    }
}

// Todas las rutas por defecto comparten la misma grilla de franjas
fn default_schedule() -> RouteSchedule {
    RouteSchedule {
        first_shift: Some(ShiftSchedule::Slots(vec![
            slot_arrival("05:20", "04:50", "05:20"),
            slot_arrival("06:55", "06:25", "07:00"),
            slot_departure("13:40", "13:30", "13:40"),
            slot_departure("15:30", "15:20", "15:30"),
            slot_departure("17:00", "17:20", "17:30"),
        ])),
        second_shift: Some(ShiftSchedule::Slots(vec![
            slot_departure("23:00", "23:10", "23:40"),
            slot_departure("01:00", "01:10", "01:20"),
            slot_departure("02:55", "02:50", "03:20"),
            slot_departure("05:00", "05:10", "05:20"),
            slot_departure("07:00", "07:10", "07:20"),
            slot_arrival("15:00", "15:00", "15:20"),
            slot_arrival("17:00", "17:00", "17:20"),
            slot_arrival("21:00", "21:00", "21:20"),
        ])),
    }
}

/// Conjunto fijo de rutas sembrado en la primera inicialización
pub fn default_routes() -> Vec<Route> {
    [
        ("CANAA", "CANAÃ"),
        ("PLANALTO", "PLANALTO"),
        ("GUARANI", "GUARANI"),
        ("LAGOINHA", "LAGOINHA"),
        ("ALVORADA", "ALVORADA"),
        ("SAO_JORGE", "SÃO JORGE"),
        ("PEQUIS", "PEQUIS"),
    ]
    .into_iter()
    .map(|(id, name)| Route {
        id: id.to_string(),
        name: name.to_string(),
        active: true,
        schedule: default_schedule(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::route::Shift;

    #[test]
    fn test_default_routes_have_slots_for_both_shifts() {
        let routes = default_routes();
        assert_eq!(routes.len(), 7);

        for route in &routes {
            assert!(route.active);
            let first = route.schedule.for_shift(Shift::FirstShift).unwrap();
            let second = route.schedule.for_shift(Shift::SecondShift).unwrap();
            assert_eq!(first.slots().len(), 5);
            assert_eq!(second.slots().len(), 8);
        }
    }
}
