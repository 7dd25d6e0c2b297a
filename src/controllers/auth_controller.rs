//! Controller de autenticación
//!
//! Login delegado al backend hosteado: primero el grant de contraseña;
//! si falla, la verificación legacy por RPC. No hay hashing local ni
//! emisión de tokens propios.

use serde::Deserialize;
use serde_json::json;

use crate::clients::supabase::{SupabaseClient, SupabaseError};
use crate::dto::auth_dto::{LoginRequest, LoginResponse};
use crate::utils::errors::{bad_request_error, AppError};

/// Fila devuelta por la función verify_user_password
#[derive(Debug, Deserialize)]
struct VerifyRow {
    #[serde(default)]
    valid: bool,
}

pub struct AuthController {
    supabase: SupabaseClient,
}

impl AuthController {
    pub fn new(supabase: SupabaseClient) -> Self {
        Self { supabase }
    }

    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, AppError> {
        if request.email.is_empty() || request.password.is_empty() {
            return Err(bad_request_error("Please fill in all fields"));
        }

        match self
            .supabase
            .sign_in_with_password(&request.email, &request.password)
            .await
        {
            Ok(session) => Ok(LoginResponse {
                success: true,
                message: "Login successful!".to_string(),
                session: Some(session),
                legacy: false,
            }),
            // Backend sin configurar: no hay camino legacy que probar
            Err(SupabaseError::NotInitialized) => Err(SupabaseError::NotInitialized.into()),
            Err(e) => {
                log::warn!("⚠️ Login directo falló, probando verificación legacy: {}", e);
                self.legacy_login(&request).await
            }
        }
    }

    /// Camino legacy: verificación por RPC, sin sesión resultante
    async fn legacy_login(&self, request: &LoginRequest) -> Result<LoginResponse, AppError> {
        let params = json!({
            "in_email": request.email,
            "in_password": request.password,
        });

        let rows = self
            .supabase
            .rpc("verify_user_password", &params)
            .await
            .map_err(|e| {
                log::error!("❌ Verificación legacy falló: {}", e);
                AppError::Unauthorized("Invalid email or password.".to_string())
            })?;

        let rows: Vec<VerifyRow> = serde_json::from_value(rows)
            .map_err(|_| AppError::Unauthorized("Invalid email or password.".to_string()))?;

        match rows.first() {
            Some(row) if row.valid => Ok(LoginResponse {
                success: true,
                message: "Login successful (legacy)!".to_string(),
                session: None,
                legacy: true,
            }),
            _ => Err(AppError::Unauthorized("Invalid email or password.".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_login_requires_both_fields() {
        let controller = AuthController::new(SupabaseClient::uninitialized());
        let err = controller
            .login(LoginRequest {
                email: "demo@example.com".to_string(),
                password: String::new(),
            })
            .await
            .unwrap_err();
        match err {
            AppError::BadRequest(msg) => assert_eq!(msg, "Please fill in all fields"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_login_degrades_without_backend() {
        let controller = AuthController::new(SupabaseClient::uninitialized());
        let err = controller
            .login(LoginRequest {
                email: "demo@example.com".to_string(),
                password: "demoPassword123".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Backend(SupabaseError::NotInitialized)));
    }
}
