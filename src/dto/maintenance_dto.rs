use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::maintenance::MaintenanceRecord;

// Request para registrar un servicio completo
#[derive(Debug, Deserialize, Validate)]
pub struct LogMaintenanceRequest {
    #[validate(length(min = 1))]
    pub vehicle: String,

    #[validate(length(min = 1))]
    pub service: String,

    // Fecha YYYY-MM-DD
    #[serde(default)]
    pub date: Option<String>,

    pub cost: Decimal,

    #[validate(length(min = 1))]
    pub provider: String,
}

// Request para agendar un servicio (costo 0, sin proveedor)
#[derive(Debug, Deserialize)]
pub struct ScheduleMaintenanceRequest {
    #[serde(default)]
    pub vehicle: String,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub date: String,
}

// Response de registro de mantenimiento, con el próximo servicio
// agendado del vehículo de la fila
#[derive(Debug, Serialize)]
pub struct MaintenanceResponse {
    pub id: i64,
    pub vehicle: String,
    pub service: String,
    pub date: NaiveDate,
    pub cost: Decimal,
    pub provider: String,
    pub next_service: Option<NaiveDate>,
}

impl MaintenanceResponse {
    pub fn from_record(record: MaintenanceRecord, next_service: Option<NaiveDate>) -> Self {
        Self {
            id: record.id,
            vehicle: record.vehicle,
            service: record.service,
            date: record.date,
            cost: record.cost,
            provider: record.provider,
            next_service,
        }
    }
}
