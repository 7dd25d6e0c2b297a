use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::driver_dto::DriverResponse;
use crate::dto::vehicle_dto::VehicleResponse;
use crate::models::trip::{Trip, TripStatus};

// Request para asignar un viaje
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTripRequest {
    #[validate(length(min = 1))]
    pub vehicle: String,

    #[serde(default)]
    pub driver_id: Option<i64>,

    #[validate(length(min = 1))]
    pub origin: String,

    #[validate(length(min = 1))]
    pub destination: String,

    // Fecha YYYY-MM-DD (la tabla la exige)
    #[serde(default)]
    pub date: Option<String>,

    #[serde(default)]
    pub status: Option<TripStatus>,
}

// Response de viaje con el nombre del conductor resuelto
#[derive(Debug, Serialize)]
pub struct TripResponse {
    pub id: i64,
    pub vehicle: String,
    pub driver_id: Option<i64>,
    pub driver_name: String,
    pub origin: String,
    pub destination: String,
    pub date: NaiveDate,
    pub status: TripStatus,
}

impl TripResponse {
    pub fn from_trip(trip: Trip, driver_name: String) -> Self {
        Self {
            id: trip.id,
            vehicle: trip.vehicle,
            driver_id: trip.driver_id,
            driver_name,
            origin: trip.origin,
            destination: trip.destination,
            date: trip.date,
            status: trip.status,
        }
    }
}

// Contadores del resumen del log de viajes
#[derive(Debug, Serialize)]
pub struct TripSummary {
    pub active: usize,
    pub completed: usize,
    pub total: usize,
}

// Listado completo: resumen + viajes en orden de id
#[derive(Debug, Serialize)]
pub struct TripListResponse {
    pub summary: TripSummary,
    pub trips: Vec<TripResponse>,
}

// Datos para el formulario de asignación: solo disponibles
#[derive(Debug, Serialize)]
pub struct TripOptionsResponse {
    pub vehicles: Vec<VehicleResponse>,
    pub drivers: Vec<DriverResponse>,
}
