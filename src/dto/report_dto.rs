use chrono::NaiveDate;
use serde::Deserialize;

use crate::models::report::ReportFilters;

/// Query del reporte de atrasos: filtros más la convención de la media
/// de atraso de llegada.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DelayReportQuery {
    pub route_id: Option<String>,
    pub date_start: Option<NaiveDate>,
    pub date_end: Option<NaiveDate>,
    pub positive_only: Option<bool>,
}

impl DelayReportQuery {
    pub fn filters(&self) -> ReportFilters {
        ReportFilters {
            route_id: self.route_id.clone(),
            date_start: self.date_start,
            date_end: self.date_end,
        }
    }

    /// La media de llegada considera solo atrasos positivos salvo pedido
    /// explícito de la convención sobre todos los valores.
    pub fn positive_only_arrival_mean(&self) -> bool {
        self.positive_only.unwrap_or(true)
    }
}
