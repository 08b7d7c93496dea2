//! Cálculo de atrasos
//!
//! Convierte pares de horarios "HH:MM" en minutos de atraso con signo,
//! corrigiendo los trayectos que cruzan la medianoche.

use chrono::NaiveTime;

const TIME_FORMAT: &str = "%H:%M";

/// Media vuelta del día en minutos: diferencias mayores se interpretan
/// como cruce de medianoche, no como un atraso real de más de 12 horas.
const HALF_DAY_MINUTES: i64 = 720;
const FULL_DAY_MINUTES: i64 = 1440;

/// Minutos de atraso entre el horario programado y el real.
///
/// Positivo = tarde, negativo = adelantado. Entradas vacías o mal
/// formadas se tratan como "sin dato de atraso" y devuelven 0.
pub fn compute_delay(scheduled: &str, actual: &str) -> i64 {
    if scheduled.is_empty() || actual.is_empty() {
        return 0;
    }

    let parsed = NaiveTime::parse_from_str(scheduled, TIME_FORMAT).and_then(|scheduled_time| {
        NaiveTime::parse_from_str(actual, TIME_FORMAT).map(|actual_time| (scheduled_time, actual_time))
    });

    let (scheduled_time, actual_time) = match parsed {
        Ok(pair) => pair,
        Err(_) => return 0,
    };

    let mut minutes = (actual_time - scheduled_time).num_minutes();
    if minutes > HALF_DAY_MINUTES {
        minutes -= FULL_DAY_MINUTES;
    } else if minutes < -HALF_DAY_MINUTES {
        minutes += FULL_DAY_MINUTES;
    }

    minutes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_delay() {
        assert_eq!(compute_delay("08:00", "08:05"), 5);
        assert_eq!(compute_delay("08:05", "08:00"), -5);
        assert_eq!(compute_delay("08:00", "08:00"), 0);
    }

    #[test]
    fn test_midnight_wraparound() {
        // Salida programada a la noche, real pasada la medianoche
        assert_eq!(compute_delay("23:50", "00:05"), 15);
        // Caso inverso: adelantado cruzando la medianoche
        assert_eq!(compute_delay("00:05", "23:50"), -15);
    }

    #[test]
    fn test_boundary_is_not_wrapped() {
        // Exactamente 12 horas no se interpreta como cruce de medianoche
        assert_eq!(compute_delay("06:00", "18:00"), 720);
        assert_eq!(compute_delay("18:00", "06:00"), -720);
    }

    #[test]
    fn test_missing_inputs_mean_no_delay() {
        assert_eq!(compute_delay("", "08:00"), 0);
        assert_eq!(compute_delay("08:00", ""), 0);
        assert_eq!(compute_delay("", ""), 0);
    }

    #[test]
    fn test_malformed_inputs_are_swallowed() {
        assert_eq!(compute_delay("bad", "08:00"), 0);
        assert_eq!(compute_delay("08:00", "bad"), 0);
        assert_eq!(compute_delay("25:99", "08:00"), 0);
    }
}
