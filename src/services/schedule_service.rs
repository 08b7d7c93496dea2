//! Resolución de horarios programados
//!
//! Cuando un trayecto se registra sin horarios explícitos, los horarios
//! programados salen de la franja por defecto de la ruta: la primera del
//! turno, con la cadena de preferencias de campos de la franja.

use crate::models::route::{Route, Shift};

/// Resuelve (salida programada, llegada programada) para una ruta y turno.
/// Devuelve cadenas vacías cuando la ruta no tiene franja utilizable.
pub fn resolve_scheduled_times(route: &Route, shift: Shift) -> (String, String) {
    let slot = route
        .schedule
        .for_shift(shift)
        .and_then(|schedule| schedule.first_slot());

    match slot {
        Some(slot) => (
            slot.programmed_departure().unwrap_or_default().to_string(),
            slot.programmed_arrival().unwrap_or_default().to_string(),
        ),
        None => (String::new(), String::new()),
    }
}
