//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! de fechas y horarios.

use chrono::{NaiveDate, NaiveTime};
use validator::ValidationError;

/// Validar y convertir string a fecha
pub fn validate_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        let mut error = ValidationError::new("date");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"YYYY-MM-DD".to_string());
        error
    })
}

/// Validar y convertir string a horario "HH:MM"
pub fn validate_time_hhmm(value: &str) -> Result<NaiveTime, ValidationError> {
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| {
        let mut error = ValidationError::new("time");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"HH:MM".to_string());
        error
    })
}

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_date() {
        assert!(validate_date("2025-07-01").is_ok());
        assert!(validate_date("2025/07/01").is_err());
        assert!(validate_date("01-07-2025").is_err());
    }

    #[test]
    fn test_validate_time_hhmm() {
        assert!(validate_time_hhmm("08:05").is_ok());
        assert!(validate_time_hhmm("23:59").is_ok());
        assert!(validate_time_hhmm("24:00").is_err());
        assert!(validate_time_hhmm("bad").is_err());
    }

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("CANAA").is_ok());
        assert!(validate_not_empty("   ").is_err());
        assert!(validate_not_empty("").is_err());
    }
}
