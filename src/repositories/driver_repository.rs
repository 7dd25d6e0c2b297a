//! Acceso a la tabla `drivers` del backend hosteado

use serde_json::json;

use crate::clients::supabase::SupabaseClient;
use crate::models::driver::{Driver, DriverStatus, NewDriver};
use crate::utils::errors::AppError;

pub struct DriverRepository {
    supabase: SupabaseClient,
}

impl DriverRepository {
    pub fn new(supabase: SupabaseClient) -> Self {
        Self { supabase }
    }

    pub async fn find_all(&self) -> Result<Vec<Driver>, AppError> {
        Ok(self.supabase.from("drivers").fetch().await?)
    }

    pub async fn find_available(&self) -> Result<Vec<Driver>, AppError> {
        Ok(self
            .supabase
            .from("drivers")
            .eq("status", DriverStatus::Available.as_str())
            .fetch()
            .await?)
    }

    /// Chequeo de unicidad de licencia (sobre el valor normalizado)
    pub async fn license_exists(&self, license: &str) -> Result<bool, AppError> {
        let rows: Vec<serde_json::Value> = self
            .supabase
            .from("drivers")
            .select("id")
            .eq("license", license)
            .fetch()
            .await?;
        Ok(!rows.is_empty())
    }

    pub async fn insert(&self, driver: &NewDriver) -> Result<(), AppError> {
        Ok(self
            .supabase
            .from("drivers")
            .insert(std::slice::from_ref(driver))
            .await?)
    }

    pub async fn update_status(&self, id: i64, status: DriverStatus) -> Result<(), AppError> {
        Ok(self
            .supabase
            .from("drivers")
            .eq("id", &id.to_string())
            .update(&json!({ "status": status }))
            .await?)
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        Ok(self
            .supabase
            .from("drivers")
            .eq("id", &id.to_string())
            .delete()
            .await?)
    }
}
