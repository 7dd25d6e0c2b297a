//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use crate::clients::supabase::SupabaseClient;
use crate::config::environment::EnvironmentConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub supabase: SupabaseClient,
}

impl AppState {
    pub fn new(config: EnvironmentConfig, supabase: SupabaseClient) -> Self {
        Self { config, supabase }
    }

    /// Construir el cliente del backend a partir de la configuración.
    /// Si faltan credenciales devuelve el stub degradado.
    pub fn supabase_from_config(config: &EnvironmentConfig) -> SupabaseClient {
        match (&config.supabase_url, &config.supabase_anon_key) {
            (Some(url), Some(key)) => SupabaseClient::new(url, key),
            _ => {
                log::warn!(
                    "⚠️ SUPABASE_URL / SUPABASE_ANON_KEY no configurados: el cliente será un stub"
                );
                SupabaseClient::uninitialized()
            }
        }
    }
}
