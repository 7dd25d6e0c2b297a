//! Acceso a la tabla `maintenance` del backend hosteado

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::clients::supabase::SupabaseClient;
use crate::models::maintenance::{CostSumRow, MaintenanceRecord, NewMaintenanceRecord, ScheduledService};
use crate::utils::errors::AppError;

pub struct MaintenanceRepository {
    supabase: SupabaseClient,
}

impl MaintenanceRepository {
    pub fn new(supabase: SupabaseClient) -> Self {
        Self { supabase }
    }

    pub async fn find_all(&self) -> Result<Vec<MaintenanceRecord>, AppError> {
        Ok(self.supabase.from("maintenance").fetch().await?)
    }

    /// Historial de un vehículo, del más reciente al más antiguo
    pub async fn find_for_vehicle(&self, plate: &str) -> Result<Vec<MaintenanceRecord>, AppError> {
        Ok(self
            .supabase
            .from("maintenance")
            .eq("vehicle", plate)
            .order("date", false)
            .fetch()
            .await?)
    }

    /// Servicios con fecha hoy-o-futura, ordenados por fecha
    pub async fn find_scheduled(&self, today: NaiveDate) -> Result<Vec<ScheduledService>, AppError> {
        Ok(self
            .supabase
            .from("maintenance")
            .select("vehicle,date,service")
            .gte("date", &today.to_string())
            .order("date", true)
            .fetch()
            .await?)
    }

    pub async fn insert(&self, record: &NewMaintenanceRecord) -> Result<(), AppError> {
        Ok(self
            .supabase
            .from("maintenance")
            .insert(std::slice::from_ref(record))
            .await?)
    }

    /// Costo total de mantenimiento, agregado por el backend
    pub async fn total_cost(&self) -> Result<Decimal, AppError> {
        let rows: Vec<CostSumRow> = self
            .supabase
            .from("maintenance")
            .select("cost.sum()")
            .fetch()
            .await?;
        Ok(rows
            .into_iter()
            .next()
            .and_then(|row| row.sum)
            .unwrap_or(Decimal::ZERO))
    }
}
