use serde::{Deserialize, Serialize};

use crate::clients::supabase::Session;

/// Request de login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response de login. En el camino legacy (verificación por RPC) no hay
/// sesión que devolver.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<Session>,
    pub legacy: bool,
}
