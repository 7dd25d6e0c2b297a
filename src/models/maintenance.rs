//! Modelo de MaintenanceRecord
//!
//! Filas de la tabla `maintenance`: servicios registrados o agendados
//! para un vehículo, con costo y proveedor.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// MaintenanceRecord - mapea a la tabla maintenance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceRecord {
    pub id: i64,
    pub vehicle: String,
    pub service: String,
    pub date: NaiveDate,
    pub cost: Decimal,
    pub provider: String,
}

/// Fila nueva para insertar en maintenance
#[derive(Debug, Serialize)]
pub struct NewMaintenanceRecord {
    pub vehicle: String,
    pub service: String,
    pub date: NaiveDate,
    pub cost: Decimal,
    pub provider: String,
}

/// Proyección vehicle/date/service de los servicios agendados (date >= hoy)
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduledService {
    pub vehicle: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub service: Option<String>,
}

impl MaintenanceRecord {
    /// Proyección para los cálculos de próximos servicios
    pub fn as_scheduled(&self) -> ScheduledService {
        ScheduledService {
            vehicle: self.vehicle.clone(),
            date: self.date,
            service: Some(self.service.clone()),
        }
    }
}

/// Fila del agregado `cost.sum()` calculado por el backend
#[derive(Debug, Deserialize)]
pub struct CostSumRow {
    #[serde(default)]
    pub sum: Option<Decimal>,
}
