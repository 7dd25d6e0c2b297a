//! Clients - HTTP clients para APIs externas
//!
//! Este módulo contiene el cliente del backend hosteado que concentra
//! todo el acceso a datos de la aplicación.

pub mod query;
pub mod supabase;

// Re-export main types for convenience
pub use supabase::{Session, SupabaseClient, SupabaseError};
