//! Modelo de Trayecto
//!
//! Un trayecto es una corrida registrada de un bus en una ruta, fecha y
//! turno. Mapea exactamente a la tabla trips.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::route::Shift;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct TripRecord {
    pub id: String,
    pub route_id: String,
    pub route_name: String,
    pub date: NaiveDate,
    pub shift: Shift,
    pub scheduled_departure: Option<String>,
    pub scheduled_arrival: Option<String>,
    pub actual_departure: Option<String>,
    pub actual_arrival: Option<String>,
    pub departure_delay_minutes: i64,
    pub arrival_delay_minutes: i64,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}
