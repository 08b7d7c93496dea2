use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::ApiResponse;
use crate::dto::trip_dto::{CreateTripRequest, TripFilters, UpdateTripRequest};
use crate::models::route::{Route, ShiftSchedule};
use crate::models::trip::TripRecord;
use crate::repositories::route_repository::RouteRepository;
use crate::repositories::trip_repository::TripRepository;
use crate::services::{delay_service, schedule_service};
use crate::utils::errors::{bad_request_error, not_found_error, AppResult};

pub struct TripController {
    trips: TripRepository,
    routes: RouteRepository,
}

impl TripController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            trips: TripRepository::new(pool.clone()),
            routes: RouteRepository::new(pool),
        }
    }

    pub async fn list(&self, filters: TripFilters) -> AppResult<Vec<TripRecord>> {
        self.trips.find_filtered(&filters).await
    }

    pub async fn create(&self, request: CreateTripRequest) -> AppResult<ApiResponse<TripRecord>> {
        request.validate()?;

        // La ruta tiene que existir antes de registrar el trayecto
        let route = self
            .routes
            .find_by_id(&request.route_id)
            .await?
            .ok_or_else(|| bad_request_error("Ruta no encontrada"))?;

        // Horarios programados: los del request, o los de la franja por defecto
        let (scheduled_departure, scheduled_arrival) = match request.scheduled_departure {
            Some(departure) => (Some(departure), request.scheduled_arrival),
            None => {
                let (departure, arrival) =
                    schedule_service::resolve_scheduled_times(&route, request.shift);
                (non_empty(departure), non_empty(arrival))
            }
        };

        let departure_delay = match &request.actual_departure {
            Some(actual) => delay_service::compute_delay(
                scheduled_departure.as_deref().unwrap_or_default(),
                actual,
            ),
            None => 0,
        };
        let arrival_delay = match &request.actual_arrival {
            Some(actual) => delay_service::compute_delay(
                scheduled_arrival.as_deref().unwrap_or_default(),
                actual,
            ),
            None => 0,
        };

        let trip = TripRecord {
            id: Uuid::new_v4().to_string(),
            route_id: request.route_id,
            route_name: route.name.clone(),
            date: request.date,
            shift: request.shift,
            scheduled_departure,
            scheduled_arrival,
            actual_departure: request.actual_departure,
            actual_arrival: request.actual_arrival,
            departure_delay_minutes: departure_delay,
            arrival_delay_minutes: arrival_delay,
            notes: request.notes.unwrap_or_default(),
            created_at: Utc::now(),
            updated_at: None,
        };
        self.trips.create(&trip).await?;

        Ok(ApiResponse::success_with_message(
            trip,
            "Trayecto registrado exitosamente".to_string(),
        ))
    }

    pub async fn update(
        &self,
        id: &str,
        request: UpdateTripRequest,
    ) -> AppResult<ApiResponse<TripRecord>> {
        request.validate()?;

        let mut trip = self
            .trips
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Trayecto", id))?;

        if let Some(route_id) = request.route_id {
            trip.route_id = route_id;
        }
        if let Some(date) = request.date {
            trip.date = date;
        }
        if let Some(shift) = request.shift {
            trip.shift = shift;
        }
        if let Some(value) = request.scheduled_departure {
            trip.scheduled_departure = Some(value);
        }
        if let Some(value) = request.scheduled_arrival {
            trip.scheduled_arrival = Some(value);
        }
        if let Some(value) = request.actual_departure {
            trip.actual_departure = Some(value);
        }
        if let Some(value) = request.actual_arrival {
            trip.actual_arrival = Some(value);
        }
        if let Some(notes) = request.notes {
            trip.notes = notes;
        }
        trip.updated_at = Some(Utc::now());

        // Recalcular atrasos contra la ruta vigente; si la ruta ya no
        // existe, los atrasos guardados se conservan tal cual
        if let Some(route) = self.routes.find_by_id(&trip.route_id).await? {
            trip.route_name = route.name.clone();
            recompute_delays(&mut trip, &route);
        }

        self.trips.update(&trip).await?;

        Ok(ApiResponse::success_with_message(
            trip,
            "Trayecto actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: &str) -> AppResult<ApiResponse<TripRecord>> {
        let removed = self
            .trips
            .delete(id)
            .await?
            .ok_or_else(|| not_found_error("Trayecto", id))?;

        Ok(ApiResponse::success_with_message(
            removed,
            "Trayecto eliminado exitosamente".to_string(),
        ))
    }
}

// Con listas de franjas valen los horarios ya guardados en el trayecto;
// la forma antigua de slot único manda sus propios horarios.
fn recompute_delays(trip: &mut TripRecord, route: &Route) {
    let (scheduled_departure, scheduled_arrival) = match route.schedule.for_shift(trip.shift) {
        Some(ShiftSchedule::Single(slot)) => (
            slot.programmed_departure().map(str::to_string),
            slot.programmed_arrival().map(str::to_string),
        ),
        _ => (
            trip.scheduled_departure.clone(),
            trip.scheduled_arrival.clone(),
        ),
    };

    if let (Some(scheduled), Some(actual)) = (&scheduled_departure, &trip.actual_departure) {
        if !scheduled.is_empty() {
            trip.departure_delay_minutes = delay_service::compute_delay(scheduled, actual);
        }
    }
    if let (Some(scheduled), Some(actual)) = (&scheduled_arrival, &trip.actual_arrival) {
        if !scheduled.is_empty() {
            trip.arrival_delay_minutes = delay_service::compute_delay(scheduled, actual);
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
