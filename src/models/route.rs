//! Modelo de Ruta
//!
//! Este módulo contiene la configuración de rutas y su estructura de
//! horarios por turno. El horario se persiste como columna JSON, con las
//! dos formas que conviven en los datos reales: lista ordenada de franjas
//! o un único slot (forma antigua).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Turno de servicio - solo existen dos ventanas diarias
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum Shift {
    FirstShift,
    SecondShift,
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shift::FirstShift => write!(f, "first_shift"),
            Shift::SecondShift => write!(f, "second_shift"),
        }
    }
}

/// Franja horaria programada de una ruta.
///
/// Las franjas mezclan dos orientaciones (llegada al hub o salida del hub)
/// más la forma antigua con salida/llegada genéricas. El orden de los
/// variantes define la preferencia al resolver horarios programados.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScheduleSlot {
    ArrivalAtHub {
        arrival_at_hub: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        window_min: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        window_max: Option<String>,
    },
    DepartureFromHub {
        departure_from_hub: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        window_min: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        window_max: Option<String>,
    },
    Direct {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        departure: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        arrival: Option<String>,
    },
}

impl ScheduleSlot {
    /// Hora de salida programada según la orientación del slot
    pub fn programmed_departure(&self) -> Option<&str> {
        match self {
            ScheduleSlot::ArrivalAtHub { arrival_at_hub, .. } => Some(arrival_at_hub),
            ScheduleSlot::DepartureFromHub {
                departure_from_hub, ..
            } => Some(departure_from_hub),
            ScheduleSlot::Direct { departure, .. } => departure.as_deref(),
        }
    }

    /// Hora de llegada programada: la ventana máxima, o la llegada genérica
    pub fn programmed_arrival(&self) -> Option<&str> {
        match self {
            ScheduleSlot::ArrivalAtHub { window_max, .. }
            | ScheduleSlot::DepartureFromHub { window_max, .. } => window_max.as_deref(),
            ScheduleSlot::Direct { arrival, .. } => arrival.as_deref(),
        }
    }
}

/// Horario de un turno: lista ordenada de franjas, o un único slot antiguo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ShiftSchedule {
    Slots(Vec<ScheduleSlot>),
    Single(ScheduleSlot),
}

impl ShiftSchedule {
    /// Primera franja del turno, la franja por defecto al registrar trayectos
    pub fn first_slot(&self) -> Option<&ScheduleSlot> {
        match self {
            ShiftSchedule::Slots(slots) => slots.first(),
            ShiftSchedule::Single(slot) => Some(slot),
        }
    }

    /// Todas las franjas del turno, normalizadas a slice
    pub fn slots(&self) -> &[ScheduleSlot] {
        match self {
            ShiftSchedule::Slots(slots) => slots.as_slice(),
            ShiftSchedule::Single(slot) => std::slice::from_ref(slot),
        }
    }
}

/// Horarios de la ruta por turno
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteSchedule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_shift: Option<ShiftSchedule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second_shift: Option<ShiftSchedule>,
}

impl RouteSchedule {
    pub fn for_shift(&self, shift: Shift) -> Option<&ShiftSchedule> {
        match shift {
            Shift::FirstShift => self.first_shift.as_ref(),
            Shift::SecondShift => self.second_shift.as_ref(),
        }
    }
}

/// Ruta principal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub id: String,
    pub name: String,
    pub active: bool,
    pub schedule: RouteSchedule,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_slot_shapes_deserialize() {
        let raw = r#"[
            {"arrival_at_hub": "05:20", "window_min": "04:50", "window_max": "05:20"},
            {"departure_from_hub": "13:40", "window_min": "13:30", "window_max": "13:40"},
            {"departure": "06:00", "arrival": "06:45"}
        ]"#;

        let slots: Vec<ScheduleSlot> = serde_json::from_str(raw).unwrap();
        assert_eq!(slots[0].programmed_departure(), Some("05:20"));
        assert_eq!(slots[0].programmed_arrival(), Some("05:20"));
        assert_eq!(slots[1].programmed_departure(), Some("13:40"));
        assert_eq!(slots[1].programmed_arrival(), Some("13:40"));
        assert_eq!(slots[2].programmed_departure(), Some("06:00"));
        assert_eq!(slots[2].programmed_arrival(), Some("06:45"));
    }

    #[test]
    fn test_shift_schedule_accepts_list_and_single() {
        let list: ShiftSchedule =
            serde_json::from_str(r#"[{"departure": "06:00", "arrival": "06:45"}]"#).unwrap();
        let single: ShiftSchedule =
            serde_json::from_str(r#"{"departure": "18:00", "arrival": "18:45"}"#).unwrap();

        assert_eq!(
            list.first_slot().and_then(|slot| slot.programmed_departure()),
            Some("06:00")
        );
        assert_eq!(
            single.first_slot().and_then(|slot| slot.programmed_departure()),
            Some("18:00")
        );
        assert_eq!(list.slots().len(), 1);
        assert_eq!(single.slots().len(), 1);
    }

    #[test]
    fn test_shift_uses_snake_case() {
        assert_eq!(
            serde_json::to_string(&Shift::FirstShift).unwrap(),
            "\"first_shift\""
        );
        assert_eq!(Shift::SecondShift.to_string(), "second_shift");

        let parsed: Shift = serde_json::from_str("\"second_shift\"").unwrap();
        assert_eq!(parsed, Shift::SecondShift);
        assert!(serde_json::from_str::<Shift>("\"third_shift\"").is_err());
    }
}
