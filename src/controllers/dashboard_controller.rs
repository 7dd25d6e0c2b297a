//! Controller del dashboard
//!
//! KPIs y gráficos calculados en memoria a partir de tres fetches
//! completos: vehicles, drivers y maintenance.

use chrono::Utc;
use rust_decimal::Decimal;

use crate::clients::supabase::SupabaseClient;
use crate::dto::dashboard_dto::{DashboardKpis, DashboardResponse, UtilizationSlice, VehicleCost};
use crate::models::vehicle::VehicleStatus;
use crate::repositories::driver_repository::DriverRepository;
use crate::repositories::maintenance_repository::MaintenanceRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::schedule_service;
use crate::utils::errors::AppError;

pub struct DashboardController {
    vehicles: VehicleRepository,
    drivers: DriverRepository,
    maintenance: MaintenanceRepository,
}

impl DashboardController {
    pub fn new(supabase: SupabaseClient) -> Self {
        Self {
            vehicles: VehicleRepository::new(supabase.clone()),
            drivers: DriverRepository::new(supabase.clone()),
            maintenance: MaintenanceRepository::new(supabase),
        }
    }

    pub async fn overview(&self) -> Result<DashboardResponse, AppError> {
        let vehicles = self.vehicles.find_all().await?;
        let drivers = self.drivers.find_all().await?;
        let maintenance = self.maintenance.find_all().await?;

        let available = vehicles
            .iter()
            .filter(|v| v.status == VehicleStatus::Available)
            .count();
        let in_maintenance = vehicles
            .iter()
            .filter(|v| v.status == VehicleStatus::Maintenance)
            .count();
        let in_use = vehicles
            .iter()
            .filter(|v| v.status == VehicleStatus::InUse)
            .count();

        let kpis = DashboardKpis {
            total_vehicles: vehicles.len(),
            available_vehicles: available,
            in_maintenance,
            active_drivers: drivers.len(),
        };

        // Costo acumulado por vehículo, en el orden de la flota
        let maintenance_cost_by_vehicle = vehicles
            .iter()
            .map(|vehicle| VehicleCost {
                vehicle: vehicle.plate.clone(),
                cost: maintenance
                    .iter()
                    .filter(|m| m.vehicle == vehicle.plate)
                    .map(|m| m.cost)
                    .sum::<Decimal>(),
            })
            .collect();

        let utilization = vec![
            UtilizationSlice {
                name: "In Use".to_string(),
                value: in_use,
            },
            UtilizationSlice {
                name: "Available".to_string(),
                value: available,
            },
            UtilizationSlice {
                name: "Maintenance".to_string(),
                value: in_maintenance,
            },
        ];

        // Alertas: hasta 3 servicios estrictamente futuros
        let today = Utc::now().date_naive();
        let scheduled: Vec<_> = maintenance.iter().map(|m| m.as_scheduled()).collect();
        let upcoming_services = schedule_service::upcoming_services(&scheduled, today, 3);

        Ok(DashboardResponse {
            kpis,
            maintenance_cost_by_vehicle,
            utilization,
            upcoming_services,
        })
    }
}
