//! Modelos del sistema
//!
//! Este módulo contiene los tipos que mapean a las tablas del backend
//! hosteado. El schema es propiedad del backend, no de esta aplicación.

pub mod driver;
pub mod maintenance;
pub mod trip;
pub mod vehicle;
