//! Modelo de Vehicle
//!
//! Filas de la tabla `vehicles` del backend hosteado. El backend es el
//! dueño del schema; aquí solo se mapean las columnas tal como llegan.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Estado del vehículo - valores tal como los almacena el backend
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum VehicleStatus {
    #[serde(rename = "available")]
    Available,
    #[serde(rename = "in-use")]
    InUse,
    #[serde(rename = "maintenance")]
    Maintenance,
}

impl VehicleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleStatus::Available => "available",
            VehicleStatus::InUse => "in-use",
            VehicleStatus::Maintenance => "maintenance",
        }
    }
}

/// Vehicle - mapea a la tabla vehicles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: i64,
    pub plate: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub status: VehicleStatus,
    #[serde(default)]
    pub registration_date: Option<NaiveDate>,
    #[serde(default)]
    pub location: Option<String>,
}

/// Fila nueva para insertar en vehicles
#[derive(Debug, Serialize)]
pub struct NewVehicle {
    pub plate: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub status: VehicleStatus,
    pub registration_date: Option<NaiveDate>,
}

/// Proyección `plate` para el chequeo de duplicados
#[derive(Debug, Deserialize)]
pub struct PlateRow {
    pub plate: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_values() {
        assert_eq!(
            serde_json::to_string(&VehicleStatus::InUse).unwrap(),
            "\"in-use\""
        );
        let parsed: VehicleStatus = serde_json::from_str("\"maintenance\"").unwrap();
        assert_eq!(parsed, VehicleStatus::Maintenance);
    }
}
