//! Cliente HTTP para el backend hosteado (Supabase)
//!
//! Este módulo contiene el cliente para la API de datos PostgREST y el
//! endpoint de autenticación por contraseña. Todo el acceso a datos de la
//! aplicación pasa por este cliente; no hay almacenamiento propio.
//!
//! Si faltan las variables de entorno, el cliente se construye como stub
//! y cada llamada falla con `SupabaseError::NotInitialized` en lugar de
//! tumbar el proceso al arrancar.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::clients::query::TableQuery;

/// Errores del cliente del backend
#[derive(Error, Debug)]
pub enum SupabaseError {
    #[error("Supabase not initialized: missing SUPABASE_URL / SUPABASE_ANON_KEY")]
    NotInitialized,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Backend API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Conexión configurada contra el backend
#[derive(Clone, Debug)]
pub(crate) struct SupabaseConnection {
    pub http: reqwest::Client,
    pub base_url: String,
    pub anon_key: String,
}

impl SupabaseConnection {
    /// Headers comunes de PostgREST: apikey + bearer con la clave pública
    pub fn auth_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Ok(value) = HeaderValue::from_str(&self.anon_key) {
            headers.insert("apikey", value);
        }
        if let Ok(value) = HeaderValue::from_str(&format!("Bearer {}", self.anon_key)) {
            headers.insert(AUTHORIZATION, value);
        }
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }
}

/// Cliente del backend hosteado
#[derive(Clone)]
pub struct SupabaseClient {
    connection: Option<SupabaseConnection>,
}

/// Sesión devuelta por el login con contraseña
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub token_type: String,
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub user: Option<SessionUser>,
}

/// Usuario asociado a la sesión
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Cuerpo de error de PostgREST / GoTrue (los campos varían por endpoint)
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    error_description: Option<String>,
}

impl SupabaseClient {
    /// Crear un cliente configurado
    pub fn new(base_url: &str, anon_key: &str) -> Self {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .user_agent("FleetManagement/1.0")
            .build()
            .expect("Failed to create HTTP client");

        Self {
            connection: Some(SupabaseConnection {
                http,
                base_url: base_url.trim_end_matches('/').to_string(),
                anon_key: anon_key.to_string(),
            }),
        }
    }

    /// Crear el stub sin configuración: cada llamada devuelve NotInitialized
    pub fn uninitialized() -> Self {
        Self { connection: None }
    }

    pub fn is_configured(&self) -> bool {
        self.connection.is_some()
    }

    /// Iniciar una consulta sobre una tabla
    pub fn from(&self, table: &str) -> TableQuery {
        TableQuery::new(self.connection.clone(), table)
    }

    fn connection(&self) -> Result<&SupabaseConnection, SupabaseError> {
        self.connection.as_ref().ok_or(SupabaseError::NotInitialized)
    }

    /// Login con email y contraseña contra el endpoint de autenticación
    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, SupabaseError> {
        let conn = self.connection()?;
        let url = format!("{}/auth/v1/token?grant_type=password", conn.base_url);

        let response = conn
            .http
            .post(&url)
            .headers(conn.auth_headers())
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(api_error(status.as_u16(), response.text().await.unwrap_or_default()));
        }

        Ok(response.json::<Session>().await?)
    }

    /// Invocar una función remota (RPC de PostgREST)
    pub async fn rpc(&self, function: &str, params: &Value) -> Result<Value, SupabaseError> {
        let conn = self.connection()?;
        let url = format!("{}/rest/v1/rpc/{}", conn.base_url, function);

        let response = conn
            .http
            .post(&url)
            .headers(conn.auth_headers())
            .json(params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(api_error(status.as_u16(), response.text().await.unwrap_or_default()));
        }

        Ok(response.json::<Value>().await?)
    }
}

/// Convertir un cuerpo de error del backend en `SupabaseError::Api`
pub(crate) fn api_error(status: u16, body: String) -> SupabaseError {
    let message = serde_json::from_str::<ApiErrorBody>(&body)
        .ok()
        .and_then(|b| b.message.or(b.msg).or(b.error_description))
        .unwrap_or(body);
    SupabaseError::Api { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uninitialized_client() {
        let client = SupabaseClient::uninitialized();
        assert!(!client.is_configured());
        assert!(matches!(
            client.connection().unwrap_err(),
            SupabaseError::NotInitialized
        ));
    }

    #[test]
    fn test_api_error_parsing() {
        let err = api_error(409, r#"{"message":"duplicate key value"}"#.to_string());
        match err {
            SupabaseError::Api { status, message } => {
                assert_eq!(status, 409);
                assert_eq!(message, "duplicate key value");
            }
            other => panic!("unexpected error: {:?}", other),
        }

        // GoTrue usa error_description
        let err = api_error(400, r#"{"error_description":"Invalid login credentials"}"#.to_string());
        match err {
            SupabaseError::Api { message, .. } => assert_eq!(message, "Invalid login credentials"),
            other => panic!("unexpected error: {:?}", other),
        }

        // Cuerpo no-JSON: se conserva el texto crudo
        let err = api_error(500, "gateway exploded".to_string());
        match err {
            SupabaseError::Api { message, .. } => assert_eq!(message, "gateway exploded"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client = SupabaseClient::new("https://proj.supabase.co/", "anon-key");
        assert_eq!(client.connection().unwrap().base_url, "https://proj.supabase.co");
    }
}
