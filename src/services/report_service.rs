//! Agregación de reportes
//!
//! Funciones puras sobre colecciones de trayectos y el directorio de
//! rutas; la capa HTTP carga los datos y serializa el resultado.

use std::collections::{BTreeMap, HashMap};

use chrono::Utc;

use crate::models::report::{
    DelayReport, DelaySummary, OperationalReport, OperationalSummary, ReportFilters,
    RoutePerformance, TripDetail,
};
use crate::models::route::Route;
use crate::models::trip::TripRecord;

/// Nombre mostrado cuando el trayecto no referencia ninguna ruta conocida
const UNKNOWN_ROUTE: &str = "Unknown";

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn mean(values: impl Iterator<Item = i64>) -> f64 {
    let collected: Vec<i64> = values.collect();
    if collected.is_empty() {
        0.0
    } else {
        collected.iter().sum::<i64>() as f64 / collected.len() as f64
    }
}

fn display_name(route_id: &str, names: &HashMap<&str, &str>) -> String {
    if let Some(name) = names.get(route_id) {
        (*name).to_string()
    } else if route_id.is_empty() {
        UNKNOWN_ROUTE.to_string()
    } else {
        route_id.to_string()
    }
}

fn matches_filters(trip: &TripRecord, filters: &ReportFilters) -> bool {
    if let Some(route_id) = &filters.route_id {
        if trip.route_id != *route_id {
            return false;
        }
    }
    if let Some(start) = filters.date_start {
        if trip.date < start {
            return false;
        }
    }
    if let Some(end) = filters.date_end {
        if trip.date > end {
            return false;
        }
    }
    true
}

fn summarize(trips: &[&TripRecord], positive_only_arrival_mean: bool) -> DelaySummary {
    let total = trips.len() as i64;
    if total == 0 {
        return DelaySummary::zeroed();
    }

    let departures: Vec<i64> = trips.iter().map(|t| t.departure_delay_minutes).collect();
    let arrivals: Vec<i64> = trips.iter().map(|t| t.arrival_delay_minutes).collect();

    // Las llegadas adelantadas cuentan como puntuales, pero la media de
    // severidad puede excluirlas según la convención pedida
    let mean_arrival = if positive_only_arrival_mean {
        mean(arrivals.iter().copied().filter(|delay| *delay > 0))
    } else {
        mean(arrivals.iter().copied())
    };

    let punctual_departures = departures.iter().filter(|delay| **delay <= 0).count() as f64;
    let punctual_arrivals = arrivals.iter().filter(|delay| **delay <= 0).count() as f64;

    DelaySummary {
        total_trips: total,
        mean_departure_delay: round1(mean(departures.iter().copied())),
        mean_arrival_delay: round1(mean_arrival),
        max_departure_delay: departures.iter().copied().max().unwrap_or(0),
        max_arrival_delay: arrivals.iter().copied().max().unwrap_or(0),
        punctuality_departure: round1(punctual_departures / total as f64 * 100.0),
        punctuality_arrival: round1(punctual_arrivals / total as f64 * 100.0),
    }
}

/// Construye el reporte completo de atrasos sobre el conjunto filtrado.
///
/// `positive_only_arrival_mean` selecciona la convención de la media de
/// llegada: solo atrasos positivos (severidad) o todos los valores.
pub fn build_report(
    trips: &[TripRecord],
    routes: &[Route],
    filters: &ReportFilters,
    positive_only_arrival_mean: bool,
) -> DelayReport {
    let names: HashMap<&str, &str> = routes
        .iter()
        .map(|route| (route.id.as_str(), route.name.as_str()))
        .collect();

    let filtered: Vec<&TripRecord> = trips
        .iter()
        .filter(|trip| matches_filters(trip, filters))
        .collect();

    if filtered.is_empty() {
        return DelayReport {
            summary: DelaySummary::zeroed(),
            by_route: BTreeMap::new(),
            details: Vec::new(),
            generated_at: Utc::now(),
        };
    }

    let mut groups: BTreeMap<String, Vec<&TripRecord>> = BTreeMap::new();
    for &trip in &filtered {
        groups
            .entry(display_name(&trip.route_id, &names))
            .or_default()
            .push(trip);
    }

    let by_route = groups
        .iter()
        .map(|(name, group)| (name.clone(), summarize(group, positive_only_arrival_mean)))
        .collect();

    let mut details: Vec<TripDetail> = filtered
        .iter()
        .map(|trip| TripDetail {
            date: trip.date,
            route: display_name(&trip.route_id, &names),
            shift: trip.shift,
            scheduled_departure: trip.scheduled_departure.clone().unwrap_or_default(),
            actual_departure: trip.actual_departure.clone().unwrap_or_default(),
            scheduled_arrival: trip.scheduled_arrival.clone().unwrap_or_default(),
            actual_arrival: trip.actual_arrival.clone().unwrap_or_default(),
            departure_delay_minutes: trip.departure_delay_minutes,
            arrival_delay_minutes: trip.arrival_delay_minutes,
            notes: trip.notes.clone(),
        })
        .collect();
    details.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.route.cmp(&b.route)));

    DelayReport {
        summary: summarize(&filtered, positive_only_arrival_mean),
        by_route,
        details,
        generated_at: Utc::now(),
    }
}

/// Resumen operativo global, con el desempeño de cada ruta configurada
/// que tenga al menos un trayecto registrado.
pub fn build_operational_report(trips: &[TripRecord], routes: &[Route]) -> OperationalReport {
    let departures: Vec<i64> = trips.iter().map(|t| t.departure_delay_minutes).collect();
    let punctual = departures.iter().filter(|delay| **delay <= 0).count() as i64;
    let total = trips.len() as i64;

    let mut route_performance = BTreeMap::new();
    for route in routes {
        let delays: Vec<i64> = trips
            .iter()
            .filter(|trip| trip.route_id == route.id)
            .map(|trip| trip.departure_delay_minutes)
            .collect();
        if delays.is_empty() {
            continue;
        }

        let punctual_in_route = delays.iter().filter(|delay| **delay <= 0).count() as i64;
        route_performance.insert(
            route.name.clone(),
            RoutePerformance {
                total_trips: delays.len() as i64,
                mean_departure_delay: round2(mean(delays.iter().copied())),
                punctual_trips: punctual_in_route,
                punctuality_rate: round1(punctual_in_route as f64 / delays.len() as f64 * 100.0),
            },
        );
    }

    OperationalReport {
        operational_summary: OperationalSummary {
            total_active_routes: routes.iter().filter(|route| route.active).count() as i64,
            total_trips_recorded: total,
            overall_mean_departure_delay: round2(mean(departures.iter().copied())),
            worst_departure_delay: departures.iter().copied().max().unwrap_or(0),
            punctual_trips: punctual,
            overall_punctuality_rate: if total == 0 {
                0.0
            } else {
                round1(punctual as f64 / total as f64 * 100.0)
            },
        },
        route_performance,
        generated_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::models::route::{RouteSchedule, Shift};

    fn date(value: &str) -> NaiveDate {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
    }

    fn route(id: &str, name: &str) -> Route {
        Route {
            id: id.to_string(),
            name: name.to_string(),
            active: true,
            schedule: RouteSchedule::default(),
        }
    }

    fn trip(route_id: &str, day: &str, departure_delay: i64, arrival_delay: i64) -> TripRecord {
        TripRecord {
            id: uuid::Uuid::new_v4().to_string(),
            route_id: route_id.to_string(),
            route_name: String::new(),
            date: date(day),
            shift: Shift::FirstShift,
            scheduled_departure: Some("08:00".to_string()),
            scheduled_arrival: Some("08:45".to_string()),
            actual_departure: None,
            actual_arrival: None,
            departure_delay_minutes: departure_delay,
            arrival_delay_minutes: arrival_delay,
            notes: String::new(),
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[test]
    fn test_empty_set_returns_zeroed_report() {
        let report = build_report(
            &[],
            &[route("CANAA", "CANAÃ")],
            &ReportFilters::default(),
            true,
        );

        assert_eq!(report.summary, DelaySummary::zeroed());
        assert!(report.by_route.is_empty());
        assert!(report.details.is_empty());
    }

    #[test]
    fn test_departure_metrics() {
        let trips = vec![
            trip("A", "2025-07-01", -5, 0),
            trip("A", "2025-07-01", 0, 0),
            trip("A", "2025-07-01", 10, 0),
        ];

        let report = build_report(&trips, &[route("A", "ALFA")], &ReportFilters::default(), true);

        assert_eq!(report.summary.total_trips, 3);
        assert_eq!(report.summary.mean_departure_delay, 1.7);
        assert_eq!(report.summary.max_departure_delay, 10);
        assert_eq!(report.summary.punctuality_departure, 66.7);
    }

    #[test]
    fn test_arrival_mean_conventions() {
        let trips = vec![
            trip("A", "2025-07-01", 0, -5),
            trip("A", "2025-07-01", 0, 0),
            trip("A", "2025-07-01", 0, 10),
            trip("A", "2025-07-01", 0, 20),
        ];
        let routes = vec![route("A", "ALFA")];

        let positive_only = build_report(&trips, &routes, &ReportFilters::default(), true);
        assert_eq!(positive_only.summary.mean_arrival_delay, 15.0);
        assert_eq!(positive_only.summary.punctuality_arrival, 50.0);
        assert_eq!(positive_only.summary.max_arrival_delay, 20);

        // La convención sobre todos los valores: (-5 + 0 + 10 + 20) / 4
        let all_values = build_report(&trips, &routes, &ReportFilters::default(), false);
        assert_eq!(all_values.summary.mean_arrival_delay, 6.3);
    }

    #[test]
    fn test_positive_only_mean_with_no_late_arrivals() {
        let trips = vec![trip("A", "2025-07-01", 0, -5), trip("A", "2025-07-01", 0, 0)];

        let report = build_report(&trips, &[route("A", "ALFA")], &ReportFilters::default(), true);

        assert_eq!(report.summary.mean_arrival_delay, 0.0);
        assert_eq!(report.summary.punctuality_arrival, 100.0);
    }

    #[test]
    fn test_details_sorted_by_date_then_route_name() {
        let trips = vec![trip("B", "2025-07-02", 0, 0), trip("A", "2025-07-01", 0, 0)];
        let routes = vec![route("A", "A"), route("B", "B")];

        let report = build_report(&trips, &routes, &ReportFilters::default(), true);

        let order: Vec<(String, String)> = report
            .details
            .iter()
            .map(|detail| (detail.date.to_string(), detail.route.clone()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("2025-07-01".to_string(), "A".to_string()),
                ("2025-07-02".to_string(), "B".to_string()),
            ]
        );
    }

    #[test]
    fn test_unknown_route_name_fallbacks() {
        let trips = vec![trip("GHOST", "2025-07-01", 0, 0), trip("", "2025-07-01", 0, 0)];

        let report = build_report(&trips, &[], &ReportFilters::default(), true);

        assert!(report.by_route.contains_key("GHOST"));
        assert!(report.by_route.contains_key("Unknown"));
    }

    #[test]
    fn test_filters_are_and_combined() {
        let trips = vec![
            trip("A", "2025-07-01", 0, 0),
            trip("A", "2025-07-05", 0, 0),
            trip("B", "2025-07-03", 0, 0),
        ];
        let routes = vec![route("A", "ALFA"), route("B", "BETA")];

        let filters = ReportFilters {
            route_id: Some("A".to_string()),
            date_start: Some(date("2025-07-02")),
            date_end: Some(date("2025-07-31")),
        };
        let report = build_report(&trips, &routes, &filters, true);

        assert_eq!(report.summary.total_trips, 1);
        assert_eq!(report.details[0].date, date("2025-07-05"));
    }

    #[test]
    fn test_by_route_groups_by_display_name() {
        let trips = vec![
            trip("A", "2025-07-01", 5, 0),
            trip("A", "2025-07-02", -3, 0),
            trip("B", "2025-07-01", 0, 0),
        ];
        let routes = vec![route("A", "ALFA"), route("B", "BETA")];

        let report = build_report(&trips, &routes, &ReportFilters::default(), true);

        assert_eq!(report.by_route.len(), 2);
        assert_eq!(report.by_route["ALFA"].total_trips, 2);
        assert_eq!(report.by_route["ALFA"].punctuality_departure, 50.0);
        assert_eq!(report.by_route["BETA"].total_trips, 1);
    }

    #[test]
    fn test_operational_report() {
        let mut inactive = route("B", "BETA");
        inactive.active = false;
        let routes = vec![route("A", "ALFA"), inactive];
        let trips = vec![trip("A", "2025-07-01", 0, 0), trip("A", "2025-07-02", 5, 0)];

        let report = build_operational_report(&trips, &routes);

        assert_eq!(report.operational_summary.total_active_routes, 1);
        assert_eq!(report.operational_summary.total_trips_recorded, 2);
        assert_eq!(report.operational_summary.overall_mean_departure_delay, 2.5);
        assert_eq!(report.operational_summary.worst_departure_delay, 5);
        assert_eq!(report.operational_summary.punctual_trips, 1);
        assert_eq!(report.operational_summary.overall_punctuality_rate, 50.0);

        // BETA no tiene trayectos y no aparece en el desempeño por ruta
        assert_eq!(report.route_performance.len(), 1);
        assert_eq!(report.route_performance["ALFA"].total_trips, 2);
    }

    #[test]
    fn test_operational_report_with_no_trips() {
        let report = build_operational_report(&[], &[route("A", "ALFA")]);

        assert_eq!(report.operational_summary.total_trips_recorded, 0);
        assert_eq!(report.operational_summary.overall_punctuality_rate, 0.0);
        assert_eq!(report.operational_summary.overall_mean_departure_delay, 0.0);
        assert!(report.route_performance.is_empty());
    }
}
