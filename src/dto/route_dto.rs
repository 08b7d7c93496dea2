use serde::Deserialize;
use validator::Validate;

use crate::models::route::RouteSchedule;

/// Request para crear una nueva ruta
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRouteRequest {
    #[validate(length(min = 1, max = 50))]
    pub id: String,

    #[validate(length(min = 1, max = 100))]
    pub name: String,

    pub active: Option<bool>,

    pub schedule: RouteSchedule,
}

/// Request para actualizar una ruta existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateRouteRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    pub active: Option<bool>,

    pub schedule: Option<RouteSchedule>,
}
