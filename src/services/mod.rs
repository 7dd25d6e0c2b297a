//! Services module
//!
//! Este módulo contiene los cálculos puros en memoria de la aplicación:
//! próximos servicios agendados y agregados de reportes. No tocan la red;
//! los controllers les pasan las filas ya traídas del backend.

pub mod report_service;
pub mod schedule_service;
