use sqlx::SqlitePool;

use crate::dto::report_dto::DelayReportQuery;
use crate::models::report::{DelayReport, OperationalReport};
use crate::repositories::route_repository::RouteRepository;
use crate::repositories::trip_repository::TripRepository;
use crate::services::report_service;
use crate::utils::errors::AppResult;

pub struct ReportController {
    trips: TripRepository,
    routes: RouteRepository,
}

impl ReportController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            trips: TripRepository::new(pool.clone()),
            routes: RouteRepository::new(pool),
        }
    }

    /// Reporte completo de atrasos; el filtrado corre dentro del agregador
    pub async fn delay_report(&self, query: DelayReportQuery) -> AppResult<DelayReport> {
        let trips = self.trips.find_all().await?;
        let routes = self.routes.find_all().await?;

        Ok(report_service::build_report(
            &trips,
            &routes,
            &query.filters(),
            query.positive_only_arrival_mean(),
        ))
    }

    /// Resumen operativo del dashboard
    pub async fn operational_report(&self) -> AppResult<OperationalReport> {
        let trips = self.trips.find_all().await?;
        let routes = self.routes.find_all().await?;

        Ok(report_service::build_operational_report(&trips, &routes))
    }
}
