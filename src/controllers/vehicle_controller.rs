//! Controller de la flota de vehículos
//!
//! Ciclo fetch-validar-enviar de la página Fleet: listado con filtros en
//! memoria, alta con chequeo de matrícula duplicada (check-then-act, sin
//! garantía transaccional) y transiciones de estado de un click.

use std::collections::HashMap;

use chrono::{Datelike, Utc};
use validator::Validate;

use crate::clients::supabase::SupabaseClient;
use crate::dto::vehicle_dto::{
    CreateVehicleRequest, UpdateVehicleStatusRequest, VehicleDetailResponse, VehicleQuery,
    VehicleResponse,
};
use crate::models::maintenance::MaintenanceRecord;
use crate::models::trip::TripDestination;
use crate::models::vehicle::{NewVehicle, VehicleStatus};
use crate::repositories::maintenance_repository::MaintenanceRepository;
use crate::repositories::trip_repository::TripRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::schedule_service;
use crate::utils::errors::{bad_request_error, AppError};
use crate::utils::validation::{normalize_plate, validate_date, validate_range};

pub struct VehicleController {
    vehicles: VehicleRepository,
    trips: TripRepository,
    maintenance: MaintenanceRepository,
}

impl VehicleController {
    pub fn new(supabase: SupabaseClient) -> Self {
        Self {
            vehicles: VehicleRepository::new(supabase.clone()),
            trips: TripRepository::new(supabase.clone()),
            maintenance: MaintenanceRepository::new(supabase),
        }
    }

    pub async fn list(&self, query: VehicleQuery) -> Result<Vec<VehicleResponse>, AppError> {
        let vehicles = self.vehicles.find_all().await?;

        // Último destino por matrícula; si el fetch falla la columna
        // simplemente cae al location almacenado
        let destinations = match self.trips.find_destinations().await {
            Ok(rows) => last_destinations(&rows),
            Err(e) => {
                log::error!("❌ Error obteniendo últimos destinos: {}", e);
                HashMap::new()
            }
        };

        let search = query.search.unwrap_or_default().to_lowercase();
        let status_filter = query.status.filter(|s| s != "all");

        let response = vehicles
            .into_iter()
            .filter(|vehicle| {
                search.is_empty()
                    || vehicle.plate.to_lowercase().contains(&search)
                    || vehicle.make.to_lowercase().contains(&search)
                    || vehicle.model.to_lowercase().contains(&search)
            })
            .filter(|vehicle| match &status_filter {
                Some(status) => vehicle.status.as_str() == status,
                None => true,
            })
            .map(|vehicle| {
                let location = destinations
                    .get(&vehicle.plate)
                    .cloned()
                    .or_else(|| vehicle.location.clone());
                let mut response = VehicleResponse::from(vehicle);
                response.location = location;
                response
            })
            .collect();

        Ok(response)
    }

    pub async fn create(&self, request: CreateVehicleRequest) -> Result<String, AppError> {
        request.validate().map_err(AppError::Validation)?;

        let plate = normalize_plate(&request.plate);
        if plate.is_empty() {
            return Err(bad_request_error("License plate is required."));
        }

        let current_year = Utc::now().date_naive().year();
        if validate_range(request.year, 1900, current_year).is_err() {
            return Err(AppError::BadRequest(format!(
                "Year must be between 1900 and {}.",
                current_year
            )));
        }

        let registration_date = match request.registration_date.as_deref() {
            Some(value) if !value.is_empty() => Some(
                validate_date(value)
                    .map_err(|_| bad_request_error("Registration date must be YYYY-MM-DD."))?,
            ),
            _ => None,
        };

        // Chequeo de duplicados sobre matrículas normalizadas. Si la
        // consulta falla se registra y se continúa: la restricción del
        // backend atrapa el duplicado igualmente.
        match self.vehicles.plates().await {
            Ok(plates) => {
                if plates.iter().any(|existing| normalize_plate(existing) == plate) {
                    return Err(AppError::Conflict("Error: vehicle already exists".to_string()));
                }
            }
            Err(e) => {
                log::error!("❌ Error consultando matrículas existentes: {}", e);
            }
        }

        let vehicle = NewVehicle {
            plate: plate.clone(),
            make: request.make,
            model: request.model,
            year: request.year,
            status: request.status.unwrap_or(VehicleStatus::Available),
            registration_date,
        };
        self.vehicles.insert(&vehicle).await?;

        Ok(format!("Vehículo {} registrado exitosamente", plate))
    }

    pub async fn detail(&self, plate: &str) -> Result<VehicleDetailResponse, AppError> {
        let vehicle = self
            .vehicles
            .find_by_plate(plate)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        let today = Utc::now().date_naive();
        let scheduled = self.maintenance.find_scheduled(today).await?;
        let mut next_services = schedule_service::next_service_map(&scheduled, today);

        Ok(VehicleDetailResponse {
            next_service: next_services.remove(plate),
            vehicle: VehicleResponse::from(vehicle),
        })
    }

    pub async fn maintenance_history(&self, plate: &str) -> Result<Vec<MaintenanceRecord>, AppError> {
        self.maintenance.find_for_vehicle(plate).await
    }

    pub async fn set_status(
        &self,
        plate: &str,
        request: UpdateVehicleStatusRequest,
    ) -> Result<String, AppError> {
        let vehicle = self
            .vehicles
            .find_by_plate(plate)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        self.vehicles.update_status(&vehicle.plate, request.status).await?;

        let message = match request.status {
            VehicleStatus::Maintenance => format!("{} set to maintenance", vehicle.plate),
            status => format!("{} marked {}", vehicle.plate, status.as_str()),
        };
        Ok(message)
    }
}

/// Primer destino visto por matrícula sobre filas ordenadas por fecha
/// descendente (es decir, el viaje más reciente)
fn last_destinations(rows: &[TripDestination]) -> HashMap<String, String> {
    let mut map: HashMap<String, String> = HashMap::new();
    for row in rows {
        if row.vehicle.is_empty() {
            continue;
        }
        if !map.contains_key(&row.vehicle) {
            map.insert(row.vehicle.clone(), row.destination.clone().unwrap_or_default());
        }
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    fn destination(vehicle: &str, destination: Option<&str>) -> TripDestination {
        TripDestination {
            vehicle: vehicle.to_string(),
            destination: destination.map(|d| d.to_string()),
        }
    }

    fn controller() -> VehicleController {
        VehicleController::new(SupabaseClient::uninitialized())
    }

    fn request(plate: &str, year: i32) -> CreateVehicleRequest {
        CreateVehicleRequest {
            plate: plate.to_string(),
            make: "Toyota".to_string(),
            model: "Hilux".to_string(),
            year,
            status: None,
            registration_date: None,
        }
    }

    fn expect_bad_request(err: AppError, expected: &str) {
        match err {
            AppError::BadRequest(msg) => assert_eq!(msg, expected),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_rejects_year_out_of_range() {
        let err = controller().create(request("CA123456", 1800)).await.unwrap_err();
        match err {
            AppError::BadRequest(msg) => assert!(msg.starts_with("Year must be between 1900 and ")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_rejects_plate_without_alphanumerics() {
        let err = controller().create(request("---", 2022)).await.unwrap_err();
        expect_bad_request(err, "License plate is required.");
    }

    #[tokio::test]
    async fn test_create_rejects_malformed_registration_date() {
        let mut bad = request("CA123456", 2022);
        bad.registration_date = Some("15-01-2022".to_string());
        let err = controller().create(bad).await.unwrap_err();
        expect_bad_request(err, "Registration date must be YYYY-MM-DD.");
    }

    #[test]
    fn test_last_destinations_first_row_wins() {
        let rows = vec![
            destination("CA123456", Some("Durban")),
            destination("CA123456", Some("Pretoria")),
            destination("GP777888", None),
        ];
        let map = last_destinations(&rows);
        assert_eq!(map["CA123456"], "Durban");
        assert_eq!(map["GP777888"], "");
    }
}
