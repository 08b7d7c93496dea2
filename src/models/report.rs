//! Modelos de reportes
//!
//! Payloads del reporte de atrasos y del resumen operativo del dashboard.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::route::Shift;

/// Métricas agregadas de un conjunto de trayectos
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DelaySummary {
    pub total_trips: i64,
    pub mean_departure_delay: f64,
    pub mean_arrival_delay: f64,
    pub max_departure_delay: i64,
    pub max_arrival_delay: i64,
    pub punctuality_departure: f64,
    pub punctuality_arrival: f64,
}

impl DelaySummary {
    pub fn zeroed() -> Self {
        Self {
            total_trips: 0,
            mean_departure_delay: 0.0,
            mean_arrival_delay: 0.0,
            max_departure_delay: 0,
            max_arrival_delay: 0,
            punctuality_departure: 0.0,
            punctuality_arrival: 0.0,
        }
    }
}

/// Registro plano de un trayecto dentro del detalle del reporte
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripDetail {
    pub date: NaiveDate,
    pub route: String,
    pub shift: Shift,
    pub scheduled_departure: String,
    pub actual_departure: String,
    pub scheduled_arrival: String,
    pub actual_arrival: String,
    pub departure_delay_minutes: i64,
    pub arrival_delay_minutes: i64,
    pub notes: String,
}

/// Reporte completo de atrasos
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DelayReport {
    pub summary: DelaySummary,
    pub by_route: BTreeMap<String, DelaySummary>,
    pub details: Vec<TripDetail>,
    pub generated_at: DateTime<Utc>,
}

/// Filtros del reporte de atrasos. Este reporte no filtra por turno;
/// el listado de trayectos tiene su propio juego de filtros.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportFilters {
    pub route_id: Option<String>,
    pub date_start: Option<NaiveDate>,
    pub date_end: Option<NaiveDate>,
}

/// Resumen operativo global
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationalSummary {
    pub total_active_routes: i64,
    pub total_trips_recorded: i64,
    pub overall_mean_departure_delay: f64,
    pub worst_departure_delay: i64,
    pub punctual_trips: i64,
    pub overall_punctuality_rate: f64,
}

/// Desempeño de una ruta dentro del resumen operativo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePerformance {
    pub total_trips: i64,
    pub mean_departure_delay: f64,
    pub punctual_trips: i64,
    pub punctuality_rate: f64,
}

/// Reporte operativo para el dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationalReport {
    pub operational_summary: OperationalSummary,
    pub route_performance: BTreeMap<String, RoutePerformance>,
    pub generated_at: DateTime<Utc>,
}
