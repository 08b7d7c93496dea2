use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::models::route::Shift;

/// Request para registrar un trayecto
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTripRequest {
    #[validate(length(min = 1, max = 50))]
    pub route_id: String,

    pub date: NaiveDate,

    pub shift: Shift,

    pub scheduled_departure: Option<String>,
    pub scheduled_arrival: Option<String>,
    pub actual_departure: Option<String>,
    pub actual_arrival: Option<String>,

    pub notes: Option<String>,
}

/// Request para actualizar un trayecto existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTripRequest {
    #[validate(length(min = 1, max = 50))]
    pub route_id: Option<String>,

    pub date: Option<NaiveDate>,

    pub shift: Option<Shift>,

    pub scheduled_departure: Option<String>,
    pub scheduled_arrival: Option<String>,
    pub actual_departure: Option<String>,
    pub actual_arrival: Option<String>,

    pub notes: Option<String>,
}

/// Filtros del listado de trayectos. Este listado sí filtra por turno.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TripFilters {
    pub route_id: Option<String>,
    pub date_start: Option<NaiveDate>,
    pub date_end: Option<NaiveDate>,
    pub shift: Option<Shift>,
}
