//! FindMyFleet - administración de flota vehicular
//!
//! Aplicación CRUD sobre un backend hosteado (Supabase): vehículos,
//! conductores, viajes y mantenimiento, con dashboard, reportes y export
//! CSV. Todo el acceso a datos pasa por el cliente del backend; la
//! aplicación no posee almacenamiento propio.

pub mod clients;
pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
