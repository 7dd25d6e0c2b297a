//! Controller de reportes
//!
//! Resumen, tendencias mensuales, utilización por vehículo y el export
//! CSV. El total de mantenimiento usa el agregado del backend; el resto
//! se calcula en memoria.

use chrono::Utc;

use crate::clients::supabase::SupabaseClient;
use crate::dto::report_dto::ReportSummaryResponse;
use crate::repositories::maintenance_repository::MaintenanceRepository;
use crate::repositories::trip_repository::TripRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::report_service::{self, MonthlyTrend, UtilizationRow, UTILIZATION_COLUMNS};
use crate::utils::errors::AppError;

/// Nombre de archivo del export de utilización
pub const EXPORT_FILENAME: &str = "vehicle-utilization-report.csv";

pub struct ReportController {
    vehicles: VehicleRepository,
    trips: TripRepository,
    maintenance: MaintenanceRepository,
}

impl ReportController {
    pub fn new(supabase: SupabaseClient) -> Self {
        Self {
            vehicles: VehicleRepository::new(supabase.clone()),
            trips: TripRepository::new(supabase.clone()),
            maintenance: MaintenanceRepository::new(supabase),
        }
    }

    pub async fn summary(&self) -> Result<ReportSummaryResponse, AppError> {
        let trips = self.trips.find_all_ordered().await?;
        let vehicles = self.vehicles.find_all().await?;
        let maintenance_total = self.maintenance.total_cost().await?;

        Ok(ReportSummaryResponse {
            total_trips: trips.len(),
            maintenance_total,
            average_utilization: report_service::average_utilization(&vehicles),
        })
    }

    pub async fn monthly_trends(&self) -> Result<Vec<MonthlyTrend>, AppError> {
        let trips = self.trips.find_all_ordered().await?;
        let maintenance = self.maintenance.find_all().await?;
        let today = Utc::now().date_naive();
        Ok(report_service::monthly_trends(&trips, &maintenance, today, 6))
    }

    pub async fn utilization(&self) -> Result<Vec<UtilizationRow>, AppError> {
        let vehicles = self.vehicles.find_all().await?;
        let trips = self.trips.find_all_ordered().await?;
        let maintenance = self.maintenance.find_all().await?;
        Ok(report_service::utilization_rows(&vehicles, &trips, &maintenance))
    }

    /// Reporte de utilización como texto CSV de columnas fijas
    pub async fn export_csv(&self) -> Result<String, AppError> {
        let rows = self.utilization().await?;
        let values = rows
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| AppError::Internal(format!("CSV serialization failed: {}", e)))?;
        Ok(report_service::to_csv(&values, &UTILIZATION_COLUMNS))
    }
}
