//! Controller de viajes
//!
//! Asignación y cierre de viajes. Las transiciones de ciclo de vida
//! disparan escrituras dependientes sobre drivers y vehicles, emitidas en
//! secuencia y sin acción compensatoria: si una escritura posterior falla
//! solo se registra en el log (el estado parcial es posible).

use validator::Validate;

use crate::clients::supabase::SupabaseClient;
use crate::dto::driver_dto::DriverResponse;
use crate::dto::trip_dto::{
    CreateTripRequest, TripListResponse, TripOptionsResponse, TripResponse, TripSummary,
};
use crate::dto::vehicle_dto::VehicleResponse;
use crate::models::driver::{Driver, DriverStatus};
use crate::models::trip::{NewTrip, TripStatus};
use crate::models::vehicle::VehicleStatus;
use crate::repositories::driver_repository::DriverRepository;
use crate::repositories::trip_repository::TripRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{bad_request_error, AppError};
use crate::utils::validation::validate_date;

pub struct TripController {
    trips: TripRepository,
    drivers: DriverRepository,
    vehicles: VehicleRepository,
}

impl TripController {
    pub fn new(supabase: SupabaseClient) -> Self {
        Self {
            trips: TripRepository::new(supabase.clone()),
            drivers: DriverRepository::new(supabase.clone()),
            vehicles: VehicleRepository::new(supabase),
        }
    }

    pub async fn list(&self) -> Result<TripListResponse, AppError> {
        let trips = self.trips.find_all_ordered().await?;

        // Lista completa de conductores para resolver nombres de viajes
        // históricos; si falla, los nombres caen a "ID <n>"
        let drivers = match self.drivers.find_all().await {
            Ok(drivers) => drivers,
            Err(e) => {
                log::error!("❌ Error obteniendo conductores: {}", e);
                Vec::new()
            }
        };

        let summary = TripSummary {
            active: trips.iter().filter(|t| t.status == TripStatus::Active).count(),
            completed: trips.iter().filter(|t| t.status == TripStatus::Completed).count(),
            total: trips.len(),
        };

        let trips = trips
            .into_iter()
            .map(|trip| {
                let name = driver_name(&drivers, trip.driver_id);
                TripResponse::from_trip(trip, name)
            })
            .collect();

        Ok(TripListResponse { summary, trips })
    }

    /// Datos del formulario de asignación: vehículos y conductores
    /// disponibles. Los vehículos se filtran en memoria; los conductores
    /// con filtro del backend.
    pub async fn options(&self) -> Result<TripOptionsResponse, AppError> {
        let vehicles = self
            .vehicles
            .find_all()
            .await?
            .into_iter()
            .filter(|v| v.status == VehicleStatus::Available)
            .map(VehicleResponse::from)
            .collect();

        let drivers = self
            .drivers
            .find_available()
            .await?
            .into_iter()
            .map(DriverResponse::from)
            .collect();

        Ok(TripOptionsResponse { vehicles, drivers })
    }

    pub async fn create(&self, request: CreateTripRequest) -> Result<String, AppError> {
        request.validate().map_err(AppError::Validation)?;

        // La tabla exige fecha
        let date = match request.date.as_deref() {
            Some(value) if !value.is_empty() => {
                validate_date(value).map_err(|_| bad_request_error("Date must be YYYY-MM-DD."))?
            }
            _ => return Err(bad_request_error("Date is required.")),
        };

        let trip = NewTrip {
            vehicle: request.vehicle.clone(),
            driver_id: request.driver_id,
            origin: request.origin,
            destination: request.destination,
            date,
            status: request.status.unwrap_or(TripStatus::Active),
        };
        self.trips.insert(&trip).await?;

        // Escrituras dependientes: marcar conductor y vehículo en uso.
        // Sin rollback si fallan; queda registrado.
        if let Some(driver_id) = request.driver_id {
            if let Err(e) = self.drivers.update_status(driver_id, DriverStatus::InUse).await {
                log::error!("❌ Failed to update driver status: {}", e);
            }
        }
        if let Err(e) = self
            .vehicles
            .update_status(&request.vehicle, VehicleStatus::InUse)
            .await
        {
            log::error!("❌ Failed to update vehicle status: {}", e);
        }

        Ok("Viaje asignado exitosamente".to_string())
    }

    pub async fn complete(&self, id: i64) -> Result<String, AppError> {
        let trip = self
            .trips
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Viaje no encontrado".to_string()))?;

        if trip.status == TripStatus::Completed {
            return Err(bad_request_error("Trip is already completed."));
        }

        self.trips.set_status(id, TripStatus::Completed).await?;

        // Liberar conductor y vehículo; escrituras secuenciales sin
        // compensación
        if let Some(driver_id) = trip.driver_id {
            if let Err(e) = self.drivers.update_status(driver_id, DriverStatus::Available).await {
                log::error!("❌ Failed to update driver status: {}", e);
            }
        }
        if !trip.vehicle.is_empty() {
            if let Err(e) = self
                .vehicles
                .update_status(&trip.vehicle, VehicleStatus::Available)
                .await
            {
                log::error!("❌ Failed to update vehicle status: {}", e);
            }
        }

        Ok(format!("Viaje {} completado", id))
    }
}

/// Nombre del conductor por id: `Unassigned` sin id, `ID <n>` si el id
/// no aparece en el roster
fn driver_name(drivers: &[Driver], driver_id: Option<i64>) -> String {
    match driver_id {
        None => "Unassigned".to_string(),
        Some(id) => drivers
            .iter()
            .find(|driver| driver.id == id)
            .map(|driver| driver.name.clone())
            .unwrap_or_else(|| format!("ID {}", id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn driver(id: i64, name: &str) -> Driver {
        Driver {
            id,
            name: name.to_string(),
            email: format!("{}@fleet.test", name.to_lowercase()),
            license: "SA1000005".to_string(),
            contact: "0825551234".to_string(),
            status: DriverStatus::Available,
        }
    }

    #[tokio::test]
    async fn test_create_requires_date() {
        let controller = TripController::new(SupabaseClient::uninitialized());
        let request = CreateTripRequest {
            vehicle: "CA123456".to_string(),
            driver_id: Some(1),
            origin: "Cape Town".to_string(),
            destination: "Durban".to_string(),
            date: None,
            status: None,
        };
        let err = controller.create(request).await.unwrap_err();
        match err {
            AppError::BadRequest(msg) => assert_eq!(msg, "Date is required."),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_driver_name_resolution() {
        let drivers = vec![driver(1, "Thandi"), driver(2, "Sipho")];
        assert_eq!(driver_name(&drivers, Some(2)), "Sipho");
        assert_eq!(driver_name(&drivers, Some(9)), "ID 9");
        assert_eq!(driver_name(&drivers, None), "Unassigned");
    }
}
