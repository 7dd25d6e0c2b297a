//! DTOs de la API
//!
//! Requests y responses por recurso, más la envoltura genérica de
//! respuestas exitosas.

pub mod auth_dto;
pub mod dashboard_dto;
pub mod driver_dto;
pub mod maintenance_dto;
pub mod report_dto;
pub mod trip_dto;
pub mod vehicle_dto;

use serde::Serialize;

// Response genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}
