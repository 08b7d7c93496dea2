//! Generación de datos de demostración
//!
//! Puebla la base con trayectos ficticios para un rango de fechas:
//! todas las rutas, todos los turnos y franjas, sin domingos, 70% en
//! horario y el resto con desvíos de hasta 10 minutos.

use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Utc, Weekday};
use rand::Rng;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::models::route::{Route, ScheduleSlot, Shift};
use crate::models::trip::TripRecord;
use crate::repositories::route_repository::RouteRepository;
use crate::repositories::trip_repository::TripRepository;
use crate::utils::errors::AppResult;

/// Marca en las observaciones que identifica los registros generados
pub const DEMO_NOTES_MARKER: &str = "Datos de demostración";

/// Horario real = programado + desvío, envolviendo la medianoche
fn offset_time(programmed: &str, delay_minutes: i64) -> Option<String> {
    let time = NaiveTime::parse_from_str(programmed, "%H:%M").ok()?;
    let shifted = time.overflowing_add_signed(Duration::minutes(delay_minutes)).0;
    Some(shifted.format("%H:%M").to_string())
}

fn shift_slots(route: &Route, shift: Shift) -> &[ScheduleSlot] {
    route
        .schedule
        .for_shift(shift)
        .map(|schedule| schedule.slots())
        .unwrap_or(&[])
}

/// Genera e inserta trayectos de demostración; devuelve cuántos insertó.
/// Los registros de demostración previos del período se eliminan antes.
pub async fn seed_demo_trips(pool: &SqlitePool, start: NaiveDate, end: NaiveDate) -> AppResult<u64> {
    let route_repository = RouteRepository::new(pool.clone());
    let trip_repository = TripRepository::new(pool.clone());

    let routes = route_repository.find_all().await?;

    let removed = trip_repository
        .delete_demo_between(start, end, DEMO_NOTES_MARKER)
        .await?;
    if removed > 0 {
        tracing::info!(
            "🗑️  Eliminados {} registros de demostración anteriores",
            removed
        );
    }

    let mut rng = rand::thread_rng();
    let mut inserted = 0u64;

    let mut date = start;
    while date <= end {
        if date.weekday() == Weekday::Sun {
            date = date + Duration::days(1);
            continue;
        }

        for route in &routes {
            for shift in [Shift::FirstShift, Shift::SecondShift] {
                for slot in shift_slots(route, shift) {
                    let Some(scheduled_departure) =
                        slot.programmed_departure().filter(|time| !time.is_empty())
                    else {
                        continue;
                    };
                    let scheduled_arrival = slot.programmed_arrival().unwrap_or_default();

                    // 70% en horario, el resto con desvío de hasta 10 minutos
                    let (departure_delay, arrival_delay) = if rng.gen_bool(0.7) {
                        (0i64, 0i64)
                    } else {
                        (rng.gen_range(-10i64..=10), rng.gen_range(-10i64..=10))
                    };

                    let actual_departure = offset_time(scheduled_departure, departure_delay);
                    let actual_arrival = if scheduled_arrival.is_empty() {
                        None
                    } else {
                        offset_time(scheduled_arrival, arrival_delay)
                    };

                    let status = if departure_delay == 0 && arrival_delay == 0 {
                        "en horario".to_string()
                    } else {
                        format!("desvío {}min", departure_delay.max(arrival_delay))
                    };

                    let trip = TripRecord {
                        id: Uuid::new_v4().to_string(),
                        route_id: route.id.clone(),
                        route_name: route.name.clone(),
                        date,
                        shift,
                        scheduled_departure: Some(scheduled_departure.to_string()),
                        scheduled_arrival: if scheduled_arrival.is_empty() {
                            None
                        } else {
                            Some(scheduled_arrival.to_string())
                        },
                        actual_departure,
                        actual_arrival,
                        departure_delay_minutes: departure_delay,
                        arrival_delay_minutes: arrival_delay,
                        notes: format!("{} - {}", DEMO_NOTES_MARKER, status),
                        created_at: Utc::now(),
                        updated_at: None,
                    };

                    trip_repository.create(&trip).await?;
                    inserted += 1;
                }
            }
        }

        date = date + Duration::days(1);
    }

    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_time_wraps_midnight() {
        assert_eq!(offset_time("23:55", 10), Some("00:05".to_string()));
        assert_eq!(offset_time("00:05", -10), Some("23:55".to_string()));
        assert_eq!(offset_time("08:00", 5), Some("08:05".to_string()));
        assert_eq!(offset_time("bad", 5), None);
    }
}
