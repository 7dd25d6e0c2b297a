//! Controller de mantenimiento
//!
//! Registro y agenda de servicios. Las fechas pasadas se rechazan en el
//! límite de envío; el mapa de próximos servicios se calcula en memoria
//! sobre las filas traídas.

use chrono::Utc;
use rust_decimal::Decimal;
use validator::Validate;

use crate::clients::supabase::SupabaseClient;
use crate::dto::maintenance_dto::{
    LogMaintenanceRequest, MaintenanceResponse, ScheduleMaintenanceRequest,
};
use crate::models::maintenance::NewMaintenanceRecord;
use crate::repositories::maintenance_repository::MaintenanceRepository;
use crate::services::schedule_service;
use crate::utils::errors::{bad_request_error, AppError};
use crate::utils::validation::{
    validate_date, validate_non_negative, validate_not_empty, validate_not_past,
};

pub struct MaintenanceController {
    maintenance: MaintenanceRepository,
}

impl MaintenanceController {
    pub fn new(supabase: SupabaseClient) -> Self {
        Self {
            maintenance: MaintenanceRepository::new(supabase),
        }
    }

    pub async fn list(&self) -> Result<Vec<MaintenanceResponse>, AppError> {
        let records = self.maintenance.find_all().await?;

        let today = Utc::now().date_naive();
        let scheduled: Vec<_> = records.iter().map(|r| r.as_scheduled()).collect();
        let next_services = schedule_service::next_service_map(&scheduled, today);

        Ok(records
            .into_iter()
            .map(|record| {
                let next = next_services.get(&record.vehicle).map(|ns| ns.date);
                MaintenanceResponse::from_record(record, next)
            })
            .collect())
    }

    /// Matrículas con algún servicio agendado (hoy o futuro); el
    /// formulario de registro solo ofrece estos vehículos
    pub async fn scheduled_vehicles(&self) -> Result<Vec<String>, AppError> {
        let today = Utc::now().date_naive();
        let scheduled = self.maintenance.find_scheduled(today).await?;
        Ok(schedule_service::scheduled_plates(&scheduled))
    }

    pub async fn log(&self, request: LogMaintenanceRequest) -> Result<String, AppError> {
        request.validate().map_err(AppError::Validation)?;

        let date = match request.date.as_deref() {
            Some(value) if !value.is_empty() => {
                validate_date(value).map_err(|_| bad_request_error("Date must be YYYY-MM-DD."))?
            }
            _ => return Err(bad_request_error("Date is required.")),
        };

        let today = Utc::now().date_naive();
        if validate_not_past(date, today).is_err() {
            return Err(bad_request_error("Cannot log a service with a past date."));
        }

        if validate_non_negative(request.cost).is_err() {
            return Err(bad_request_error("Cost must be a non-negative amount."));
        }

        let record = NewMaintenanceRecord {
            vehicle: request.vehicle,
            service: request.service,
            date,
            cost: request.cost,
            provider: request.provider,
        };
        self.maintenance.insert(&record).await?;

        Ok(format!("Servicio registrado para {}", record.vehicle))
    }

    pub async fn schedule(&self, request: ScheduleMaintenanceRequest) -> Result<String, AppError> {
        if validate_not_empty(&request.vehicle).is_err()
            || validate_not_empty(&request.service).is_err()
            || validate_not_empty(&request.date).is_err()
        {
            return Err(bad_request_error("All fields are required."));
        }

        let date = validate_date(&request.date)
            .map_err(|_| bad_request_error("Date must be YYYY-MM-DD."))?;

        let today = Utc::now().date_naive();
        if validate_not_past(date, today).is_err() {
            return Err(bad_request_error("Cannot schedule a service on a past date."));
        }

        // Un servicio agendado entra con costo cero y sin proveedor
        let record = NewMaintenanceRecord {
            vehicle: request.vehicle,
            service: request.service,
            date,
            cost: Decimal::ZERO,
            provider: String::new(),
        };
        self.maintenance.insert(&record).await?;

        Ok(format!("Servicio agendado para {}", record.vehicle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> MaintenanceController {
        MaintenanceController::new(SupabaseClient::uninitialized())
    }

    fn log_request(date: Option<&str>, cost: i64) -> LogMaintenanceRequest {
        LogMaintenanceRequest {
            vehicle: "CA123456".to_string(),
            service: "Oil change".to_string(),
            date: date.map(|d| d.to_string()),
            cost: Decimal::new(cost, 0),
            provider: "Speedy Auto".to_string(),
        }
    }

    fn expect_bad_request(err: AppError, expected: &str) {
        match err {
            AppError::BadRequest(msg) => assert_eq!(msg, expected),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_log_requires_date() {
        let err = controller().log(log_request(None, 100)).await.unwrap_err();
        expect_bad_request(err, "Date is required.");
    }

    #[tokio::test]
    async fn test_log_rejects_past_date() {
        let err = controller()
            .log(log_request(Some("2000-01-01"), 100))
            .await
            .unwrap_err();
        expect_bad_request(err, "Cannot log a service with a past date.");
    }

    #[tokio::test]
    async fn test_log_rejects_negative_cost() {
        let err = controller()
            .log(log_request(Some("2999-01-01"), -5))
            .await
            .unwrap_err();
        expect_bad_request(err, "Cost must be a non-negative amount.");
    }

    #[tokio::test]
    async fn test_schedule_requires_all_fields() {
        let request = ScheduleMaintenanceRequest {
            vehicle: "CA123456".to_string(),
            service: String::new(),
            date: "2999-01-01".to_string(),
        };
        let err = controller().schedule(request).await.unwrap_err();
        expect_bad_request(err, "All fields are required.");
    }

    #[tokio::test]
    async fn test_schedule_rejects_past_date() {
        let request = ScheduleMaintenanceRequest {
            vehicle: "CA123456".to_string(),
            service: "Brake check".to_string(),
            date: "2000-01-01".to_string(),
        };
        let err = controller().schedule(request).await.unwrap_err();
        expect_bad_request(err, "Cannot schedule a service on a past date.");
    }
}
