//! Modelo de Driver
//!
//! Filas de la tabla `drivers`. El formulario registra conductores como
//! `available` o `assigned`; la asignación de viajes escribe `in-use`,
//! así que el enum acepta los tres valores.

use serde::{Deserialize, Serialize};

/// Estado del conductor
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DriverStatus {
    #[serde(rename = "available")]
    Available,
    #[serde(rename = "assigned")]
    Assigned,
    #[serde(rename = "in-use")]
    InUse,
}

impl DriverStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DriverStatus::Available => "available",
            DriverStatus::Assigned => "assigned",
            DriverStatus::InUse => "in-use",
        }
    }
}

/// Driver - mapea a la tabla drivers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Driver {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub license: String,
    pub contact: String,
    pub status: DriverStatus,
}

/// Fila nueva para insertar en drivers
#[derive(Debug, Serialize)]
pub struct NewDriver {
    pub name: String,
    pub email: String,
    pub license: String,
    pub contact: String,
    pub status: DriverStatus,
}
