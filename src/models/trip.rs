//! Modelo de Trip
//!
//! Filas de la tabla `trips`: asignación de un vehículo (por matrícula)
//! y un conductor (por id) entre dos ubicaciones, con ciclo de vida
//! active → completed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Estado del viaje
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TripStatus {
    #[serde(rename = "active")]
    Active,
    #[serde(rename = "completed")]
    Completed,
}

impl TripStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TripStatus::Active => "active",
            TripStatus::Completed => "completed",
        }
    }
}

/// Trip - mapea a la tabla trips
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trip {
    pub id: i64,
    pub vehicle: String,
    #[serde(default)]
    pub driver_id: Option<i64>,
    pub origin: String,
    pub destination: String,
    pub date: NaiveDate,
    pub status: TripStatus,
}

/// Fila nueva para insertar en trips
#[derive(Debug, Serialize)]
pub struct NewTrip {
    pub vehicle: String,
    pub driver_id: Option<i64>,
    pub origin: String,
    pub destination: String,
    pub date: NaiveDate,
    pub status: TripStatus,
}

/// Proyección del fetch de últimos destinos (ordenado por fecha en el
/// backend; acá solo importa el primer destino por matrícula)
#[derive(Debug, Clone, Deserialize)]
pub struct TripDestination {
    pub vehicle: String,
    #[serde(default)]
    pub destination: Option<String>,
}
