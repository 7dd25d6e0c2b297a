//! Repositorios
//!
//! Un struct de acceso a datos por tabla del backend hosteado. No hay SQL:
//! cada operación es una llamada PostgREST a través del cliente.

pub mod driver_repository;
pub mod maintenance_repository;
pub mod trip_repository;
pub mod vehicle_repository;
