//! Acceso a la tabla `vehicles` del backend hosteado

use serde_json::json;

use crate::clients::supabase::SupabaseClient;
use crate::models::vehicle::{NewVehicle, PlateRow, Vehicle, VehicleStatus};
use crate::utils::errors::AppError;

pub struct VehicleRepository {
    supabase: SupabaseClient,
}

impl VehicleRepository {
    pub fn new(supabase: SupabaseClient) -> Self {
        Self { supabase }
    }

    pub async fn find_all(&self) -> Result<Vec<Vehicle>, AppError> {
        Ok(self.supabase.from("vehicles").fetch().await?)
    }

    pub async fn find_available(&self) -> Result<Vec<Vehicle>, AppError> {
        Ok(self
            .supabase
            .from("vehicles")
            .eq("status", VehicleStatus::Available.as_str())
            .fetch()
            .await?)
    }

    pub async fn find_by_plate(&self, plate: &str) -> Result<Option<Vehicle>, AppError> {
        let rows: Vec<Vehicle> = self.supabase.from("vehicles").eq("plate", plate).fetch().await?;
        Ok(rows.into_iter().next())
    }

    /// Todas las matrículas, para el chequeo de duplicados normalizado
    pub async fn plates(&self) -> Result<Vec<String>, AppError> {
        let rows: Vec<PlateRow> = self.supabase.from("vehicles").select("plate").fetch().await?;
        Ok(rows.into_iter().map(|row| row.plate).collect())
    }

    pub async fn insert(&self, vehicle: &NewVehicle) -> Result<(), AppError> {
        Ok(self
            .supabase
            .from("vehicles")
            .insert(std::slice::from_ref(vehicle))
            .await?)
    }

    pub async fn update_status(&self, plate: &str, status: VehicleStatus) -> Result<(), AppError> {
        Ok(self
            .supabase
            .from("vehicles")
            .eq("plate", plate)
            .update(&json!({ "status": status }))
            .await?)
    }
}
