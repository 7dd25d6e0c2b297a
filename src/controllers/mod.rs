//! Controllers
//!
//! Lógica de cada página: traer filas del backend, validar el envío del
//! formulario, escribir y devolver DTOs.

pub mod auth_controller;
pub mod dashboard_controller;
pub mod driver_controller;
pub mod maintenance_controller;
pub mod report_controller;
pub mod trip_controller;
pub mod vehicle_controller;
