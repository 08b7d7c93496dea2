//! Repositorios de persistencia

pub mod route_repository;
pub mod trip_repository;
