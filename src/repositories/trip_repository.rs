//! Acceso a la tabla `trips` del backend hosteado

use serde_json::json;

use crate::clients::supabase::SupabaseClient;
use crate::models::trip::{NewTrip, Trip, TripDestination, TripStatus};
use crate::utils::errors::AppError;

pub struct TripRepository {
    supabase: SupabaseClient,
}

impl TripRepository {
    pub fn new(supabase: SupabaseClient) -> Self {
        Self { supabase }
    }

    pub async fn find_all_ordered(&self) -> Result<Vec<Trip>, AppError> {
        Ok(self.supabase.from("trips").order("id", true).fetch().await?)
    }

    /// Viajes más recientes primero, para resolver el último destino
    /// de cada vehículo
    pub async fn find_destinations(&self) -> Result<Vec<TripDestination>, AppError> {
        Ok(self
            .supabase
            .from("trips")
            .select("vehicle,destination,date")
            .order("date", false)
            .fetch()
            .await?)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Trip>, AppError> {
        let rows: Vec<Trip> = self
            .supabase
            .from("trips")
            .eq("id", &id.to_string())
            .fetch()
            .await?;
        Ok(rows.into_iter().next())
    }

    pub async fn insert(&self, trip: &NewTrip) -> Result<(), AppError> {
        Ok(self
            .supabase
            .from("trips")
            .insert(std::slice::from_ref(trip))
            .await?)
    }

    pub async fn set_status(&self, id: i64, status: TripStatus) -> Result<(), AppError> {
        Ok(self
            .supabase
            .from("trips")
            .eq("id", &id.to_string())
            .update(&json!({ "status": status }))
            .await?)
    }
}
