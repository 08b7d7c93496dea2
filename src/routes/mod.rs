//! Rutas de la API

pub mod report_routes;
pub mod route_routes;
pub mod trip_routes;
